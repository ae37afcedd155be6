use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

/// Wordmark shown above the auth screens.
#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <div class="flex items-center justify-center gap-3 mb-8">
            <Icon icon_id={IconId::HeroiconsSolidFolderOpen} class="w-9 h-9" />
            <span class="text-3xl font-extrabold tracking-tight">{"TeamSpace"}</span>
        </div>
    }
}
