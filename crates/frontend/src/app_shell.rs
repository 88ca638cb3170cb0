//! Application shell.
//!
//! - `AppShell`: shows `TokenPrompt` until a session token is stored, then `MainLayout`
//! - `MainLayout`: top header, sidebar and the active page

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::registry::render_page;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::*;

/// Syncs the active page with `?active=` and re-renders the center on change.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! { {move || render_page(&ctx.active.get())} }.into_any()
            }
        />
    }
}

/// Shown when storage has no token; the pasted value is saved under `token`.
#[component]
fn TokenPrompt() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let token = RwSignal::new(String::new());
    let submit = move |_| {
        let value = token.get_untracked();
        if !value.trim().is_empty() {
            ctx.sign_in(&value);
        }
    };

    view! {
        <div class="token-prompt">
            <div class="token-prompt__card">
                <h2>"Session token"</h2>
                <p>"Paste the API token issued for this dashboard."</p>
                <Flex vertical=true gap=FlexGap::Medium>
                    <Input value=token placeholder="Token" />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=move || token.get().trim().is_empty()
                    >
                        "Continue"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Show when=move || ctx.has_token.get() fallback=|| view! { <TokenPrompt /> }>
            <MainLayout />
        </Show>
    }
}
