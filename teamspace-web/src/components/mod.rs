pub(crate) mod auth_form_input;
pub(crate) mod confirm_modal;
pub(crate) mod loading;
pub(crate) mod logo;
pub(crate) mod toast;

pub use auth_form_input::AuthFormInput;
pub use confirm_modal::ConfirmModal;
pub use loading::Loading;
pub use logo::Logo;
pub use toast::{Notice, Toast};
