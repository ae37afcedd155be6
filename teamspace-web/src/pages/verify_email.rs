use i18nrs::yew::use_translation;
use shared::models::{ResendVerificationRequest, VerifyEmailRequest, error_codes};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{ConfirmModal, Loading, Notice, Toast};
use crate::routes::{MainRoute, TokenQuery};

/// Settled state of the verification attempt.
#[derive(Debug, Clone, PartialEq)]
enum VerifyOutcome {
    /// Request in flight, or no token to submit yet.
    Pending,
    Verified {
        message: Option<String>,
    },
    Failed {
        message: Option<String>,
        code: Option<String>,
    },
}

#[function_component(VerifyEmailPage)]
pub fn verify_email_page() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let location = use_location();
    let token = location
        .as_ref()
        .and_then(|location| location.query::<TokenQuery>().ok())
        .and_then(|query| query.token);

    let outcome = use_state(|| VerifyOutcome::Pending);
    let resending = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let modal_title = use_state(|| None::<String>);

    {
        // submit the mailed token exactly once, as soon as the screen
        // mounts; without a token the screen stays on the spinner
        let outcome = outcome.clone();
        use_effect_with(token.clone(), move |token| {
            if let Some(token) = token.clone() {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    let request = VerifyEmailRequest { token };
                    match client.verify_email(&request).await {
                        Ok(message) => outcome.set(VerifyOutcome::Verified { message }),
                        Err(err) => outcome.set(VerifyOutcome::Failed {
                            message: err.message().map(ToString::to_string),
                            code: err.error_code().map(ToString::to_string),
                        }),
                    }
                });
            }
            || ()
        });
    }

    let on_go_login = {
        let navigator = navigator.clone();
        Callback::from(move |_event: MouseEvent| {
            if let Some(navigator) = navigator.clone() {
                navigator.push(&MainRoute::Login);
            }
        })
    };

    let on_resend = {
        let token = token.clone().unwrap_or_default();
        let resending = resending.clone();
        let notice = notice.clone();
        let modal_title = modal_title.clone();
        let modal_fallback = i18n.t("verify.resent_title");
        let failed_text = i18n.t("verify.resend_failed");
        Callback::from(move |_event: MouseEvent| {
            if *resending {
                return;
            }
            resending.set(true);

            let request = ResendVerificationRequest {
                expired_token: token.clone(),
            };
            let resending = resending.clone();
            let notice = notice.clone();
            let modal_title = modal_title.clone();
            let modal_fallback = modal_fallback.clone();
            let failed_text = failed_text.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.resend_verification(&request).await {
                    Ok(message) => {
                        modal_title.set(Some(message.unwrap_or(modal_fallback)));
                    }
                    Err(err) => {
                        let text = err
                            .message()
                            .map_or_else(|| failed_text.clone(), ToString::to_string);
                        notice.set(Some(Notice::error(text)));
                    }
                }
                resending.set(false);
            });
        })
    };

    let on_modal_confirm = {
        let navigator = navigator;
        Callback::from(move |()| {
            if let Some(navigator) = navigator.clone() {
                navigator.replace(&MainRoute::Login);
            }
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let login_button = html! {
        <button class="btn btn-neutral" onclick={on_go_login}>
            { i18n.t("verify.go_login") }
        </button>
    };

    let body = match (*outcome).clone() {
        VerifyOutcome::Pending => {
            return html! { <Loading message={i18n.t("verify.checking")} /> };
        }
        VerifyOutcome::Verified { message } => result_card(
            html! { <Icon icon_id={IconId::HeroiconsSolidCheckCircle} class="w-16 h-16 text-success" /> },
            i18n.t("verify.success_title"),
            message,
            login_button,
        ),
        VerifyOutcome::Failed { message, code } => {
            let token_expired =
                code.as_deref() == Some(error_codes::VERIFICATION_TOKEN_EXPIRED);
            let actions = html! {
                <>
                    { login_button }
                    if token_expired {
                        <button class="btn" onclick={on_resend} disabled={*resending}>
                            if *resending {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("verify.resend") }
                        </button>
                    }
                </>
            };
            result_card(
                html! { <Icon icon_id={IconId::HeroiconsSolidXCircle} class="w-16 h-16 text-error" /> },
                i18n.t("verify.failed_title"),
                message,
                actions,
            )
        }
    };

    html! {
        <>
            <Toast notice={(*notice).clone()} {on_dismiss} />
            if let Some(title) = (*modal_title).clone() {
                <ConfirmModal
                    title={title}
                    body={i18n.t("modal.check_inbox")}
                    confirm_label={i18n.t("modal.ok")}
                    on_confirm={on_modal_confirm}
                />
            }
            { body }
        </>
    }
}

fn result_card(icon: Html, title: String, subtitle: Option<String>, actions: Html) -> Html {
    html! {
        <div class="card bg-base-100 shadow-lg">
            <div class="card-body items-center text-center">
                { icon }
                <h2 class="card-title text-2xl">{ title }</h2>
                if let Some(subtitle) = subtitle {
                    <p class="text-sm opacity-60">{ subtitle }</p>
                }
                <div class="card-actions mt-4">
                    { actions }
                </div>
            </div>
        </div>
    }
}
