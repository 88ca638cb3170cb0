//! Top bar: sidebar toggle, application title, signed-in user and sign-out.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::session;
use leptos::prelude::*;

const APP_TITLE: &str = "Manufacturing Admin";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let username = session::username().unwrap_or_else(|| "admin".to_string());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                {session::logo().map(|src| view! { <img class="top-header__logo" src=src alt="" /> })}
                <span class="top-header__title">{APP_TITLE}</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__user">{icon("user")}{username}</span>
                <button class="top-header__icon-btn" on:click=move |_| ctx.sign_out() title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
