use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Authenticated landing page. The collaboration surface itself ships
/// separately; the auth front door only needs a place to land.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="p-4 space-y-2">
            <h1 class="text-2xl font-bold">{ i18n.t("home.title") }</h1>
            <p class="opacity-70">{ i18n.t("home.subtitle") }</p>
        </div>
    }
}
