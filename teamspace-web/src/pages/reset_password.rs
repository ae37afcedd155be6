use i18nrs::yew::use_translation;
use shared::models::PasswordResetConfirmRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{AuthFormInput, Notice, Toast};
use crate::forms::{self, FormAction, FormState, ValidationRule};
use crate::routes::{MainRoute, TokenQuery};

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let location = use_location();
    let token = location
        .as_ref()
        .and_then(|location| location.query::<TokenQuery>().ok())
        .and_then(|query| query.token);

    let form = use_reducer(FormState::default);
    let notice = use_state(|| None::<Notice>);
    let submitting = use_state(|| false);
    // subtitle of the confirmation panel, taken from the server message
    let completed = use_state(|| None::<String>);

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let completed = completed.clone();
        let token = token.unwrap_or_default();
        let success_fallback = i18n.t("reset.success_subtitle");
        let failed_fallback = i18n.t("reset.failed");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let validated = (*form).validated();
            form.dispatch(FormAction::ValidateAll);
            if validated.has_errors() {
                return;
            }

            // a missing token goes out as-is; the server answers with the
            // message the error panel shows
            let request = PasswordResetConfirmRequest {
                token: token.clone(),
                new_password: validated.value("password").to_string(),
            };
            submitting.set(true);
            notice.set(None);

            let notice = notice.clone();
            let submitting = submitting.clone();
            let completed = completed.clone();
            let success_fallback = success_fallback.clone();
            let failed_fallback = failed_fallback.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.reset_password(&request).await {
                    Ok(message) => {
                        completed.set(Some(message.unwrap_or(success_fallback)));
                    }
                    Err(err) => {
                        let text = err
                            .message()
                            .map_or_else(|| failed_fallback.clone(), ToString::to_string);
                        notice.set(Some(Notice::error(text)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_go_login = {
        let navigator = navigator;
        Callback::from(move |_event: MouseEvent| {
            if let Some(navigator) = navigator.clone() {
                navigator.replace(&MainRoute::Login);
            }
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    // settled successfully: the form is replaced by a confirmation panel
    if let Some(subtitle) = (*completed).clone() {
        return html! {
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body items-center text-center">
                    <Icon icon_id={IconId::HeroiconsSolidCheckCircle} class="w-16 h-16 text-success" />
                    <h2 class="card-title text-2xl">{ i18n.t("reset.success_title") }</h2>
                    <p class="text-sm opacity-60">{ subtitle }</p>
                    <div class="card-actions mt-4">
                        <button class="btn btn-neutral" onclick={on_go_login}>
                            { i18n.t("reset.go_login") }
                        </button>
                    </div>
                </div>
            </div>
        };
    }

    let password_rules = vec![
        ValidationRule::required(i18n.t("reset.password_required")),
        ValidationRule::satisfies(
            |value, _| forms::password_complexity(value),
            i18n.t("form.password_rule"),
        ),
    ];
    let confirm_rules = vec![
        ValidationRule::required(i18n.t("form.confirm_required")),
        ValidationRule::satisfies(
            forms::confirm_matches_password,
            i18n.t("form.confirm_mismatch"),
        ),
    ];

    html! {
        <>
            <Toast notice={(*notice).clone()} {on_dismiss} />
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body">
                    <h2 class="card-title text-2xl justify-center mb-4">
                        { i18n.t("reset.title") }
                    </h2>
                    <form {onsubmit}>
                        <AuthFormInput
                            form={form.clone()}
                            name="password"
                            label={i18n.t("reset.password_label")}
                            icon={IconId::HeroiconsOutlineLockClosed}
                            is_password=true
                            rules={password_rules}
                            placeholder={i18n.t("form.password_hint")}
                        />
                        <AuthFormInput
                            form={form.clone()}
                            name="confirm"
                            label={i18n.t("form.confirm_label")}
                            icon={IconId::HeroiconsOutlineLockClosed}
                            is_password=true
                            rules={confirm_rules}
                            dependencies={vec![AttrValue::from("password")]}
                            has_feedback=true
                            placeholder={i18n.t("form.confirm_placeholder")}
                        />
                        <button
                            class="btn btn-neutral btn-block mt-4"
                            type="submit"
                            disabled={*submitting}
                        >
                            if *submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("reset.submit") }
                        </button>
                    </form>
                </div>
            </div>
        </>
    }
}
