mod api;
mod app;
mod components;
mod config;
mod containers;
mod forms;
mod guards;
mod language;
mod pages;
mod routes;
mod session;

use std::collections::HashMap;

use app::App;
use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use language::supported_languages;
use yew::{Html, Renderer, function_component, html};

#[function_component(LocalizedApp)]
fn localized_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: "en".to_string(),
        ..Default::default()
    };

    html! {
        <I18nProvider ..config>
            <App />
        </I18nProvider>
    }
}

fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);

    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    log::info!("starting TeamSpace web client");

    Renderer::<LocalizedApp>::new().render();
}
