use yew::{Children, Html, Properties, function_component, html};

use crate::components::Logo;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    /// The auth screen rendered inside the shell.
    pub children: Children,
}

/// Centered single-column shell for the unauthenticated screens.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <main class="flex min-h-screen items-center justify-center bg-base-200 px-4 py-8">
            <div class="w-full max-w-md">
                <Logo />
                { props.children.clone() }
            </div>
        </main>
    }
}
