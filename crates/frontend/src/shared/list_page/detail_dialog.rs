//! Read-only record dialog with an optional related list.

use contracts::domain::common::lenient::value_to_string;
use contracts::shared::format::or_dash;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::{ListEntity, RelatedColumn, RelatedList};
use crate::shared::api::fetch_related;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};

pub fn open_detail<E: ListEntity>(modal_stack: ModalStackService, item: E) {
    modal_stack.push("entity-detail-modal", move |handle| {
        detail_view(item.clone(), handle).into_any()
    });
}

/// Value of the first key the record carries; related rows come back untyped.
pub(crate) fn related_cell(record: &Value, column: &RelatedColumn) -> String {
    let text = column
        .keys
        .iter()
        .filter_map(|key| record.get(*key))
        .map(value_to_string)
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default();
    or_dash(&text)
}

fn detail_view<E: ListEntity>(item: E, handle: ModalHandle) -> impl IntoView {
    let rows: Vec<(&'static str, String)> = E::columns()
        .iter()
        .map(|column| (column.header, (column.cell)(&item)))
        .collect();
    let related = E::related().map(|rel| related_section(rel, item.id()));

    view! {
        <div class="entity-detail">
            <div class="modal-header">
                <h2 class="modal-title">
                    {format!("{}: {}", E::KIND.singular(), item.display_name())}
                </h2>
            </div>
            <dl class="entity-detail__fields">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        }
                    })
                    .collect_view()}
                <dt>"Status"</dt>
                <dd><StatusBadge status=item.status() /></dd>
            </dl>
            {related}
            <div class="modal-actions">
                <Flex justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                        "Close"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

fn related_section(rel: RelatedList, id: i64) -> impl IntoView {
    let records = RwSignal::new(Vec::<Value>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let columns = rel.columns;

    spawn_local(async move {
        match fetch_related(rel.kind, rel.field, &id.to_string()).await {
            Ok(list) => records.set(list),
            Err(e) => {
                log::error!("related {} for #{} failed: {}", rel.kind, id, e);
                error.set(Some(e.user_message()));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="entity-detail__related">
            <h3>{rel.title}</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner /> }
            >
                {move || match error.get() {
                    Some(message) => view! { <div class="warning-box">{message}</div> }.into_any(),
                    None if records.with(|r| r.is_empty()) => {
                        view! { <div class="empty-state">"No records"</div> }.into_any()
                    }
                    None => view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    {columns
                                        .iter()
                                        .map(|c| view! { <TableHeaderCell>{c.header}</TableHeaderCell> })
                                        .collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {records
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let cells = columns
                                            .iter()
                                            .map(|c| {
                                                let text = related_cell(&record, c);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout>{text}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view();
                                        view! {
                                            <TableRow>
                                                {cells}
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PO_NUMBER: RelatedColumn = RelatedColumn {
        header: "PO No",
        keys: &["po_number", "poNumber"],
    };

    #[test]
    fn related_cell_tries_keys_in_order() {
        assert_eq!(related_cell(&json!({"poNumber": "PO-1"}), &PO_NUMBER), "PO-1");
        assert_eq!(
            related_cell(&json!({"po_number": "PO-2", "poNumber": "PO-3"}), &PO_NUMBER),
            "PO-2"
        );
        assert_eq!(related_cell(&json!({"po_number": ""}), &PO_NUMBER), "-");
    }
}
