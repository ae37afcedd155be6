use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a transient notice stays on screen.
const DISMISS_AFTER_MS: u32 = 3_000;

/// Flavor of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The mutation settled successfully.
    Success,
    /// The mutation settled with an error.
    Error,
}

/// A transient notice raised at a screen's mutation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Success or error styling.
    pub kind: NoticeKind,
    /// Text shown to the user.
    pub text: String,
}

impl Notice {
    /// A success notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    /// An error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    /// Notice to display; `None` renders nothing.
    pub notice: Option<Notice>,
    /// Fired when the notice times out.
    pub on_dismiss: Callback<()>,
}

/// Floating transient notice, auto-dismissed after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.notice.clone(), move |notice| {
            let timeout = notice
                .as_ref()
                .map(|_| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
            // dropping a pending timeout cancels it when the notice
            // changes or the screen unmounts
            move || drop(timeout)
        });
    }

    let Some(notice) = props.notice.clone() else {
        return html! {};
    };
    let alert_class = match notice.kind {
        NoticeKind::Success => "alert alert-success",
        NoticeKind::Error => "alert alert-error",
    };

    html! {
        <div class="toast toast-top toast-center z-50">
            <div class={alert_class} role="alert">
                <span>{ notice.text }</span>
            </div>
        </div>
    }
}
