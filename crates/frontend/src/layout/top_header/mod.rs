//! Top bar: sidebar toggle, brand, current page title and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let logout = move |_| {
        log::info!("Logging out");
        do_logout(session);
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || {
                        if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                    }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Eco Stay Admin"</span>
                <span class="top-header__page">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
