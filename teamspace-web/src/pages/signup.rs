use i18nrs::yew::use_translation;
use shared::models::{SignupRequest, error_codes};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{AuthFormInput, ConfirmModal, Notice, Toast};
use crate::forms::{self, FormAction, FormState, ValidationRule};
use crate::routes::MainRoute;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_reducer(FormState::default);
    let notice = use_state(|| None::<Notice>);
    let submitting = use_state(|| false);
    // title of the success modal, taken from the server message
    let modal_title = use_state(|| None::<String>);
    let navigator = use_navigator();

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let modal_title = modal_title.clone();
        let modal_fallback = i18n.t("signup.modal_title");
        let duplicate_text = i18n.t("signup.duplicate_email");
        let failed_text = i18n.t("signup.failed");
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

            // the confirmation field never leaves the client; an empty
            // phone value goes out as an explicit null
            let phone = validated.value("phone").trim().to_string();
            let request = SignupRequest {
                name: validated.value("name").to_string(),
                email: validated.value("email").to_string(),
                password: validated.value("password").to_string(),
                phone_number: (!phone.is_empty()).then_some(phone),
            };
            submitting.set(true);
            notice.set(None);

            let notice = notice.clone();
            let submitting = submitting.clone();
            let modal_title = modal_title.clone();
            let modal_fallback = modal_fallback.clone();
            let duplicate_text = duplicate_text.clone();
            let failed_text = failed_text.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.signup(&request).await {
                    Ok(message) => {
                        modal_title.set(Some(message.unwrap_or(modal_fallback)));
                    }
                    Err(err) => {
                        let text = if err.has_error_code(error_codes::DUPLICATE_EMAIL) {
                            duplicate_text.clone()
                        } else {
                            failed_text.clone()
                        };
                        notice.set(Some(Notice::error(text)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_modal_confirm = {
        let navigator = navigator.clone();
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

    let name_rules = vec![ValidationRule::required(i18n.t("signup.name_required"))];
    let email_rules = vec![
        ValidationRule::required(i18n.t("form.email_required")),
        ValidationRule::email(i18n.t("form.email_invalid")),
    ];
    let password_rules = vec![
        ValidationRule::required(i18n.t("form.password_required")),
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
    let phone_rules = vec![ValidationRule::pattern(
        forms::PHONE_PATTERN,
        i18n.t("signup.phone_invalid"),
    )];

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
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body">
                    <div class="flex flex-col items-center mb-2">
                        <h2 class="card-title text-2xl">{ i18n.t("signup.title") }</h2>
                        <p class="text-sm opacity-60">{ i18n.t("signup.subtitle") }</p>
                    </div>
                    <form {onsubmit}>
                        <AuthFormInput
                            form={form.clone()}
                            name="name"
                            label={i18n.t("signup.name_label")}
                            icon={IconId::HeroiconsOutlineUser}
                            rules={name_rules}
                            placeholder={i18n.t("signup.name_placeholder")}
                        />
                        <AuthFormInput
                            form={form.clone()}
                            name="email"
                            label={i18n.t("form.email_label")}
                            icon={IconId::HeroiconsOutlineEnvelope}
                            rules={email_rules}
                            placeholder="example@gmail.com"
                        />
                        <AuthFormInput
                            form={form.clone()}
                            name="password"
                            label={i18n.t("form.password_label")}
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
                        <AuthFormInput
                            form={form.clone()}
                            name="phone"
                            label={i18n.t("signup.phone_label")}
                            icon={IconId::HeroiconsOutlinePhone}
                            rules={phone_rules}
                            placeholder="010-1234-5678"
                        />
                        <button
                            class="btn btn-neutral btn-block mt-4"
                            type="submit"
                            disabled={*submitting}
                        >
                            if *submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("signup.submit") }
                        </button>
                    </form>
                    <p class="text-center text-sm mt-4">
                        { i18n.t("signup.have_account") }{" "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-hover font-semibold">
                            { i18n.t("signup.login_link") }
                        </Link<MainRoute>>
                    </p>
                </div>
            </div>
        </>
    }
}
