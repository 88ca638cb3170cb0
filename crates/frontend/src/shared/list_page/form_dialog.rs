//! Create / edit dialog built from an entity's field descriptors.

use contracts::domain::a006_production_batch::aggregate::BatchStage;
use contracts::domain::common::EntityKind;
use contracts::shared::form::{blank_values, validate, FieldKind, FieldSpec, FormMode, FormValues};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::{fetch_options, submit_form, LookupOption};
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use crate::shared::toast::use_toast;

/// Opens the form dialog on top of the current modal stack.
///
/// `initial` overrides the blank defaults; `on_saved` runs after the server
/// accepted the submission and the dialog closed.
pub fn open_form(
    modal_stack: ModalStackService,
    kind: EntityKind,
    mode: FormMode,
    initial: FormValues,
    on_saved: Callback<()>,
) {
    modal_stack.push("entity-form-modal", move |handle| {
        view! {
            <FormDialog
                kind=kind
                mode=mode
                initial=initial.clone()
                on_saved=on_saved
                handle=handle
            />
        }
        .into_any()
    });
}

/// Blank defaults overlaid with every non-empty initial value.
pub(crate) fn starting_values(fields: &[FieldSpec], initial: &FormValues) -> FormValues {
    let mut values = blank_values(fields);
    for (key, value) in initial {
        if !value.trim().is_empty() && values.contains_key(key) {
            values.insert(key.clone(), value.clone());
        }
    }
    values
}

pub(crate) fn dialog_title(kind: EntityKind, mode: FormMode) -> String {
    match mode {
        FormMode::Create => format!("New {}", kind.singular()),
        FormMode::Update(_) => format!("Edit {}", kind.singular()),
    }
}

fn option_text(key: &str, raw: &str) -> String {
    if key == "stage" {
        if let Some(stage) = BatchStage::parse(raw) {
            return stage.label().to_string();
        }
    }
    raw.to_string()
}

fn lookup_text(option: &LookupOption) -> String {
    if option.active {
        option.label.clone()
    } else {
        format!("{} (inactive)", option.label)
    }
}

#[component]
fn FormDialog(
    kind: EntityKind,
    mode: FormMode,
    initial: FormValues,
    on_saved: Callback<()>,
    handle: ModalHandle,
) -> impl IntoView {
    let toast = use_toast();
    let fields = kind.form_fields();
    let start = starting_values(fields, &initial);

    let inputs: Vec<(FieldSpec, RwSignal<String>)> = fields
        .iter()
        .map(|spec| {
            let value = start.get(spec.key).cloned().unwrap_or_default();
            (*spec, RwSignal::new(value))
        })
        .collect();
    let inputs = StoredValue::new(inputs);
    let saving = RwSignal::new(false);

    let current_values = move || {
        inputs.with_value(|list| {
            list.iter()
                .map(|(spec, value)| (spec.key.to_string(), value.get_untracked()))
                .collect::<FormValues>()
        })
    };

    let close_handle = handle.clone();
    let on_cancel = move |_| close_handle.close();

    let on_submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let values = current_values();
        if let Err(e) = validate(fields, &values) {
            toast.error(e.to_string());
            return;
        }

        saving.set(true);
        let handle = handle.clone();
        spawn_local(async move {
            match submit_form(kind, mode, &values).await {
                Ok(message) => {
                    toast.success(message);
                    handle.close();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("{} submit failed: {}", kind, e);
                    toast.error(e.user_message());
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="entity-form">
            <div class="modal-header">
                <h2 class="modal-title">{dialog_title(kind, mode)}</h2>
            </div>
            <div class="entity-form__grid">
                {inputs
                    .get_value()
                    .into_iter()
                    .map(|(spec, value)| {
                        view! {
                            <div class="form-field">
                                <label class="form-field__label">
                                    {spec.label}
                                    {spec.required.then(|| view! { <span class="form-field__required">" *"</span> })}
                                </label>
                                {field_input(spec, value)}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="modal-actions">
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

fn field_input(spec: FieldSpec, value: RwSignal<String>) -> AnyView {
    match spec.kind {
        FieldKind::Text => view! { <Input value=value placeholder=spec.label /> }.into_any(),
        FieldKind::Number => view! { <Input value=value input_type=InputType::Number /> }.into_any(),
        FieldKind::Email => view! { <Input value=value input_type=InputType::Email /> }.into_any(),
        FieldKind::Date => view! { <Input value=value input_type=InputType::Date /> }.into_any(),
        FieldKind::TextArea => view! { <Textarea value=value /> }.into_any(),
        FieldKind::Select(options) => view! {
            <Select value=value>
                {options
                    .iter()
                    .map(|raw| view! { <option value=*raw>{option_text(spec.key, raw)}</option> })
                    .collect_view()}
            </Select>
        }
        .into_any(),
        FieldKind::Lookup(target) => view! { <LookupSelect target=target value=value /> }.into_any(),
    }
}

/// Dropdown over another entity's records. Inactive records are offered only
/// when already selected.
#[component]
fn LookupSelect(target: EntityKind, value: RwSignal<String>) -> impl IntoView {
    let options = RwSignal::new(Vec::<LookupOption>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match fetch_options(target).await {
            Ok(list) => {
                let selected = value.get_untracked();
                options.set(list);
                // Re-apply so the select picks the option that just appeared.
                value.set(selected);
            }
            Err(e) => log::warn!("options for {} failed: {}", target, e),
        }
        loading.set(false);
    });

    view! {
        <Select value=value>
            <option value="">
                {move || if loading.get() { "Loading..." } else { "Select..." }}
            </option>
            {move || {
                let selected = value.get_untracked();
                options
                    .get()
                    .into_iter()
                    .filter(|o| o.active || o.id == selected)
                    .map(|o| view! { <option value=o.id.clone()>{lookup_text(&o)}</option> })
                    .collect_view()
            }}
        </Select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_values_override_defaults() {
        let fields = EntityKind::ProductionBatch.form_fields();
        let initial = FormValues::from([
            ("batch_no".to_string(), "B-7".to_string()),
            ("stage".to_string(), "quality_check".to_string()),
            ("remarks".to_string(), String::new()),
            ("unknown".to_string(), "x".to_string()),
        ]);
        let values = starting_values(fields, &initial);
        assert_eq!(values["batch_no"], "B-7");
        assert_eq!(values["stage"], "quality_check");
        assert_eq!(values["remarks"], "");
        assert!(!values.contains_key("unknown"));
    }

    #[test]
    fn blank_initial_keeps_select_default() {
        let fields = EntityKind::ProductionBatch.form_fields();
        let values = starting_values(fields, &FormValues::new());
        assert_eq!(values["stage"], "planned");
    }

    #[test]
    fn titles_follow_mode() {
        assert_eq!(dialog_title(EntityKind::Client, FormMode::Create), "New Client");
        assert_eq!(
            dialog_title(EntityKind::QcRecord, FormMode::Update(4)),
            "Edit QC Record"
        );
    }

    #[test]
    fn stage_options_show_labels() {
        assert_eq!(option_text("stage", "in_progress"), "In Progress");
        assert_eq!(option_text("po_status", "Pending"), "Pending");
    }
}
