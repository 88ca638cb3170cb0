use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned dialog surface. Dialogs render their own header and actions.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Stacking order; the host passes 1000 + depth.
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the overlay, so a text selection
    // dragged out of the dialog does not close it.
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(on_overlay(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && on_overlay(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class.filter(|c| !c.is_empty()) {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div
                class=surface_class
                style="position: relative;"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
