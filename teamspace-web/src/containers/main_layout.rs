use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::session;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    /// Page content rendered under the header.
    pub children: Children,
}

/// Header-and-content shell for the authenticated area.
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let user = session::load();

    let on_logout = Callback::from(move |_event: MouseEvent| {
        spawn_local(async move {
            let client = ApiClient::shared();
            // the local session is dropped whether or not the server call
            // lands
            if let Err(err) = client.logout().await {
                log::error!("logout request failed: {err}");
            }
            session::clear();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/auth/login");
            }
        });
    });

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <header class="navbar bg-base-300 px-4">
                <div class="flex-1">
                    <span class="text-lg font-bold">{ i18n.t("app.title") }</span>
                </div>
                <div class="flex-none flex items-center gap-3">
                    if let Some(user) = user {
                        <span class="text-sm opacity-70">{ user.name }</span>
                    }
                    <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                        { i18n.t("header.logout") }
                    </button>
                </div>
            </header>
            <main class="flex-grow p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2025 TeamSpace · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    }
}
