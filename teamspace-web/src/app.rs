use yew::{Html, function_component, html};
use yew_router::prelude::*;

use crate::routes::{MainRoute, switch};

/// Top-level router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
