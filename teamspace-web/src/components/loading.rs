use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Line shown under the spinner.
    #[prop_or_default]
    pub message: AttrValue,
}

/// Centered spinner shown while a screen-level request is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center mt-24 gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            if !props.message.is_empty() {
                <span class="opacity-70">{ props.message.clone() }</span>
            }
        </div>
    }
}
