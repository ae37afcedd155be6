//! Route table wiring guards, layouts and screens together.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::containers::{AuthLayout, MainLayout};
use crate::guards::{PrivateRoute, PublicRoute};
use crate::pages::{
    HomePage, LoginPage, RequestPasswordResetPage, ResetPasswordPage, SignupPage, VerifyEmailPage,
};

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    /// Authenticated landing page.
    #[at("/")]
    Home,
    /// Credential login screen.
    #[at("/auth/login")]
    Login,
    /// Account registration screen.
    #[at("/auth/signup")]
    Signup,
    /// Email verification landing (token in the query).
    #[at("/auth/verify-email")]
    VerifyEmail,
    /// Ask for a password-reset mail.
    #[at("/auth/password/reset-request")]
    RequestPasswordReset,
    /// Set a new password (token in the query).
    #[at("/auth/password/reset")]
    ResetPassword,
    /// Anything else bounces back to the home route.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query parameters of the token-carrying auth routes. The token is
/// forwarded verbatim; the client never interprets it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenQuery {
    /// Opaque verification or reset token.
    #[serde(default)]
    pub token: Option<String>,
}

/// Switch function for the application routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route: {route:?}");
    match route {
        MainRoute::Home => html! {
            <PrivateRoute>
                <MainLayout>
                    <HomePage />
                </MainLayout>
            </PrivateRoute>
        },
        MainRoute::Login => auth_screen(html! { <LoginPage /> }),
        MainRoute::Signup => auth_screen(html! { <SignupPage /> }),
        MainRoute::VerifyEmail => auth_screen(html! { <VerifyEmailPage /> }),
        MainRoute::RequestPasswordReset => auth_screen(html! { <RequestPasswordResetPage /> }),
        MainRoute::ResetPassword => auth_screen(html! { <ResetPasswordPage /> }),
        MainRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::Home} /> },
    }
}

fn auth_screen(content: Html) -> Html {
    html! {
        <PublicRoute>
            <AuthLayout>
                { content }
            </AuthLayout>
        </PublicRoute>
    }
}
