//! Dialog stack shared by every list page.
//!
//! The record form can open on top of the detail dialog (and the order
//! handoff opens a form from a row), so dialogs live in one stack and Escape
//! only dismisses the topmost one.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::modal_frame::ModalFrame;

const BASE_Z_INDEX: i32 = 1000;

type DialogBody = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct OpenDialog {
    id: u64,
    surface_class: String,
    body: DialogBody,
}

/// Lets a dialog close itself from inside its own event handlers.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    stack: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.stack.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    dialogs: RwSignal<Vec<OpenDialog>>,
    last_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            dialogs: RwSignal::new(Vec::new()),
            last_id: StoredValue::new(0),
        }
    }

    /// Opens a dialog; `surface_class` is appended to the modal surface class.
    pub fn push<F>(&self, surface_class: &str, body: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.last_id.get_value() + 1;
        self.last_id.set_value(id);

        let dialog = OpenDialog {
            id,
            surface_class: surface_class.to_string(),
            body: Arc::new(body),
        };
        self.dialogs.update(|d| d.push(dialog));
        ModalHandle { id, stack: *self }
    }

    pub fn close(&self, id: u64) {
        self.dialogs.update(|d| d.retain(|dialog| dialog.id != id));
    }

    /// Removal waits one tick: the click that closes a dialog is still being
    /// dispatched by a handler owned by that dialog.
    pub fn close_deferred(&self, id: u64) {
        let stack = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            stack.close(id);
        });
    }

    fn close_topmost_deferred(&self) {
        if let Some(id) = self.dialogs.with_untracked(|d| d.last().map(|dialog| dialog.id)) {
            self.close_deferred(id);
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService must be provided by App")
}

/// Renders the open dialogs. Mounted once, next to the shell.
#[component]
pub fn ModalHost() -> impl IntoView {
    let stack = use_modal_stack();

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            stack.close_topmost_deferred();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <For
            each=move || stack.dialogs.get().into_iter().enumerate()
            key=|(_, dialog)| dialog.id
            children=move |(depth, dialog)| {
                let id = dialog.id;
                view! {
                    <ModalFrame
                        z_index=BASE_Z_INDEX + depth as i32
                        on_close=Callback::new(move |_| stack.close_deferred(id))
                        modal_class=dialog.surface_class.clone()
                    >
                        {(dialog.body)(ModalHandle { id, stack })}
                    </ModalFrame>
                }
            }
        />
    }
}
