//! Route guards keyed off the locally stored session marker.
//!
//! Both guards are synchronous reads of local storage at render time.
//! There is no revalidation against the server; the marker is trusted
//! until an authenticated request fails.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;
use crate::session;

/// Props for both guards: the nested content rendered when the guard
/// passes.
#[derive(Properties, PartialEq)]
pub struct GuardProps {
    /// Nested routes/content.
    pub children: Children,
}

/// Renders its children only when a session marker exists; everyone else
/// is sent to the login screen.
#[function_component(PrivateRoute)]
pub fn private_route(props: &GuardProps) -> Html {
    if session::is_authenticated() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
    }
}

/// Inverse guard: signed-in users are sent home instead of seeing the
/// auth screens again.
#[function_component(PublicRoute)]
pub fn public_route(props: &GuardProps) -> Html {
    if session::is_authenticated() {
        html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
    } else {
        html! { <>{ props.children.clone() }</> }
    }
}
