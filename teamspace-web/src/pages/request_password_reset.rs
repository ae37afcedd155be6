use i18nrs::yew::use_translation;
use shared::models::PasswordResetRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{AuthFormInput, Notice, Toast};
use crate::forms::{FormAction, FormState, ValidationRule};
use crate::routes::MainRoute;

#[function_component(RequestPasswordResetPage)]
pub fn request_password_reset_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_reducer(FormState::default);
    let notice = use_state(|| None::<Notice>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let success_fallback = i18n.t("reset_request.success");
        let failed_fallback = i18n.t("reset_request.failed");
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

            let request = PasswordResetRequest {
                email: validated.value("email").to_string(),
            };
            submitting.set(true);
            notice.set(None);

            let form = form.clone();
            let notice = notice.clone();
            let submitting = submitting.clone();
            let success_fallback = success_fallback.clone();
            let failed_fallback = failed_fallback.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.request_password_reset(&request).await {
                    Ok(message) => {
                        form.dispatch(FormAction::Reset);
                        notice.set(Some(Notice::success(
                            message.unwrap_or(success_fallback),
                        )));
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

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let email_rules = vec![
        ValidationRule::required(i18n.t("form.email_required")),
        ValidationRule::email(i18n.t("form.email_invalid")),
    ];

    html! {
        <>
            <Toast notice={(*notice).clone()} {on_dismiss} />
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body">
                    <div class="mb-2">
                        <h2 class="card-title text-2xl">{ i18n.t("reset_request.title") }</h2>
                        <p class="text-sm opacity-60">{ i18n.t("reset_request.subtitle") }</p>
                    </div>
                    <form {onsubmit}>
                        <AuthFormInput
                            form={form.clone()}
                            name="email"
                            label={i18n.t("form.email_label")}
                            icon={IconId::HeroiconsOutlineEnvelope}
                            rules={email_rules}
                            placeholder="example@gmail.com"
                        />
                        <button
                            class="btn btn-neutral btn-block mt-4"
                            type="submit"
                            disabled={*submitting}
                        >
                            if *submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("reset_request.submit") }
                        </button>
                    </form>
                    <div class="flex justify-center mt-4">
                        <Link<MainRoute>
                            to={MainRoute::Login}
                            classes="link link-hover text-sm flex items-center gap-1"
                        >
                            <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-3 h-3" />
                            { i18n.t("reset_request.back") }
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        </>
    }
}
