use super::*;
use yew_router::Routable;

#[test]
fn route_paths_match_the_backend_documented_surface() {
    assert_eq!(MainRoute::Home.to_path(), "/");
    assert_eq!(MainRoute::Login.to_path(), "/auth/login");
    assert_eq!(MainRoute::Signup.to_path(), "/auth/signup");
    assert_eq!(MainRoute::VerifyEmail.to_path(), "/auth/verify-email");
    assert_eq!(
        MainRoute::RequestPasswordReset.to_path(),
        "/auth/password/reset-request"
    );
    assert_eq!(MainRoute::ResetPassword.to_path(), "/auth/password/reset");
    assert_eq!(MainRoute::NotFound.to_path(), "/404");
}

#[test]
fn routes_compare_and_clone() {
    let route = MainRoute::VerifyEmail;
    assert_eq!(route.clone(), MainRoute::VerifyEmail);
    assert_ne!(MainRoute::Login, MainRoute::Signup);
}

#[test]
fn token_query_decodes_presence_and_absence() {
    let with_token: TokenQuery = serde_urlencoded_like("token=abc-123");
    assert_eq!(with_token.token.as_deref(), Some("abc-123"));

    let without: TokenQuery = serde_urlencoded_like("");
    assert_eq!(without.token, None);
}

// Decode the way `Location::query` does, without dragging the router's
// browser machinery into a native test.
fn serde_urlencoded_like(query: &str) -> TokenQuery {
    serde_urlencoded::from_str(query).expect("query decodes")
}
