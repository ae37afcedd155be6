use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{AuthFormInput, Notice, Toast};
use crate::forms::{FormAction, FormState, ValidationRule};
use crate::routes::MainRoute;
use crate::session;

/// Delay before leaving the screen so the success notice is seen.
const REDIRECT_DELAY_MS: u32 = 800;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_reducer(FormState::default);
    let notice = use_state(|| None::<Notice>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let navigator = navigator.clone();
        let success_text = i18n.t("login.success");
        let network_text = i18n.t("login.network_error");
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

            let request = LoginRequest {
                email: validated.value("email").to_string(),
                password: validated.value("password").to_string(),
            };
            submitting.set(true);
            notice.set(None);

            let notice = notice.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            let success_text = success_text.clone();
            let network_text = network_text.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.login(&request).await {
                    Ok(user) => {
                        session::store(&user);
                        notice.set(Some(Notice::success(success_text)));
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator {
                                navigator.replace(&MainRoute::Home);
                            }
                        })
                        .forget();
                    }
                    Err(err) => {
                        let text = err
                            .message()
                            .map_or_else(|| network_text.clone(), ToString::to_string);
                        notice.set(Some(Notice::error(text)));
                        submitting.set(false);
                    }
                }
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
    let password_rules = vec![ValidationRule::required(i18n.t("form.password_required"))];

    html! {
        <>
            <Toast notice={(*notice).clone()} {on_dismiss} />
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body">
                    <div class="flex flex-col items-center mb-2">
                        <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                        <p class="text-sm opacity-60">{ i18n.t("login.subtitle") }</p>
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
                        <AuthFormInput
                            form={form.clone()}
                            name="password"
                            label={i18n.t("form.password_label")}
                            icon={IconId::HeroiconsOutlineLockClosed}
                            is_password=true
                            rules={password_rules}
                            placeholder="••••••••"
                        />
                        <div class="flex justify-end my-2">
                            <Link<MainRoute>
                                to={MainRoute::RequestPasswordReset}
                                classes="link link-hover text-sm"
                            >
                                { i18n.t("login.forgot_password") }
                            </Link<MainRoute>>
                        </div>
                        <button class="btn btn-neutral btn-block" type="submit" disabled={*submitting}>
                            if *submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("login.submit") }
                        </button>
                    </form>
                    <div class="divider text-sm opacity-60">{ i18n.t("login.divider") }</div>
                    <p class="text-center text-sm">
                        { i18n.t("login.no_account") }{" "}
                        <Link<MainRoute> to={MainRoute::Signup} classes="link link-hover font-semibold">
                            { i18n.t("login.signup_link") }
                        </Link<MainRoute>>
                    </p>
                </div>
            </div>
        </>
    }
}
