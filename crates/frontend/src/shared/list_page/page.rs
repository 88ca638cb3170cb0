use contracts::domain::common::{EntityKind, RecordStatus};
use contracts::shared::form::{FormMode, FormValues};
use contracts::shared::list_query::{distinct_values, FilterSpec, ListQuery, STATUS_FILTER_SPEC};
use contracts::shared::stats::StatusCounts;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::detail_dialog::open_detail;
use super::form_dialog::open_form;
use super::{kind_icon, ListEntity, RowAction};
use crate::shared::api::{change_stage, change_status, fetch_list};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::{use_toast, ToastService};

/// Status first, then the entity's own dropdowns.
pub(crate) fn filter_specs<E: ListEntity>() -> Vec<FilterSpec> {
    std::iter::once(STATUS_FILTER_SPEC)
        .chain(E::filters().iter().copied())
        .collect()
}

/// Fixed options when declared, otherwise the distinct values in the list.
pub(crate) fn filter_options<E: ListEntity>(spec: &FilterSpec, items: &[E]) -> Vec<String> {
    if spec.options.is_empty() {
        distinct_values(items, spec.key)
    } else {
        spec.options.iter().map(|o| o.to_string()).collect()
    }
}

/// Page for one entity: fetch on mount, stat cards, filter bar, table, dialogs.
pub fn entity_list_page<E: ListEntity>() -> impl IntoView {
    let toast = use_toast();
    let modal_stack = use_modal_stack();
    let kind = E::KIND;

    let items = RwSignal::new(Vec::<E>::new());
    let loading = RwSignal::new(false);
    let loaded = RwSignal::new(false);
    let query = RwSignal::new(ListQuery::new());
    let search = RwSignal::new(String::new());

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_list::<E>().await {
                Ok(list) => {
                    log::debug!("{}: {} records", kind, list.len());
                    items.set(list);
                }
                Err(e) => {
                    log::error!("{} list failed: {}", kind, e);
                    toast.error(e.user_message());
                    items.set(Vec::new());
                }
            }
            loading.set(false);
            loaded.set(true);
        });
    };
    let refetch = Callback::new(move |_| fetch());
    fetch();

    Effect::new(move |_| {
        let term = search.get();
        if query.with_untracked(|q| q.search != term) {
            query.update(|q| q.set_search(term));
        }
    });

    let slice = Memo::new(move |_| query.with(|q| items.with(|list| q.apply(list))));
    let counts = Memo::new(move |_| items.with(|list| StatusCounts::of(list)));
    let extra_stats = Memo::new(move |_| items.with(|list| E::extra_stats(list)));
    let stat = move |pick: fn(&StatusCounts) -> usize| {
        Signal::derive(move || loaded.get().then(|| pick(&counts.get())))
    };

    let open_create = move |_| {
        open_form(modal_stack, kind, FormMode::Create, FormValues::new(), refetch);
    };

    view! {
        <PageFrame page_key=kind.path() category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(kind_icon(kind))}
                    <h1 class="page__title">{kind.title()}</h1>
                </div>
                <div class="page__header-right">
                    <Space gap=SpaceGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=open_create>
                            {icon("plus")}
                            {format!(" New {}", kind.singular())}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| fetch()
                            disabled=move || loading.get()
                        >
                            {icon("refresh")}
                            " Refresh"
                        </Button>
                    </Space>
                </div>
            </div>

            <div class="page__stats">
                <StatCard label=format!("Total {}", kind.title()) icon_name=kind_icon(kind) value=stat(|c| c.total) />
                <StatCard label="Active" icon_name="check-circle" value=stat(|c| c.active) tone=StatTone::Success />
                <StatCard label="Inactive" icon_name="power" value=stat(|c| c.inactive) tone=StatTone::Error />
                {move || {
                    extra_stats
                        .get()
                        .into_iter()
                        .map(|s| {
                            let value = s.value;
                            view! {
                                <StatCard
                                    label=s.label
                                    icon_name=kind_icon(kind)
                                    value=Signal::derive(move || Some(value))
                                    tone=s.tone
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="page__content">
                <div class="filter-bar">
                    <div class="filter-bar__search">
                        <Input value=search placeholder="Search..." />
                    </div>
                    {filter_specs::<E>()
                        .into_iter()
                        .map(|spec| filter_select::<E>(spec, items, query))
                        .collect_view()}
                </div>

                <Show
                    when=move || !loading.get() || loaded.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <Show
                        when=move || slice.with(|s| !s.rows.is_empty())
                        fallback=|| view! { <div class="empty-state">"No records found"</div> }
                    >
                        {move || table_view(slice.get().rows, modal_stack, toast, refetch)}
                    </Show>
                </Show>

                <PaginationControls
                    current_page=Signal::derive(move || slice.with(|s| s.page))
                    total_pages=Signal::derive(move || slice.with(|s| s.total_pages))
                    total_count=Signal::derive(move || slice.with(|s| s.filtered))
                    page_size=Signal::derive(move || slice.with(|s| s.page_size))
                    on_page_change=Callback::new(move |page| query.update(|q| q.set_page(page)))
                    on_page_size_change=Callback::new(move |size| query.update(|q| q.set_page_size(size)))
                />
            </div>
        </PageFrame>
    }
}

fn filter_select<E: ListEntity>(
    spec: FilterSpec,
    items: RwSignal<Vec<E>>,
    query: RwSignal<ListQuery>,
) -> impl IntoView {
    let key = spec.key;
    let selected = move || query.with(|q| q.filters.get(key).cloned().unwrap_or_default());

    view! {
        <select
            class="filter-select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                query.update(|q| q.set_filter(key, value));
            }
            prop:value=selected
        >
            <option value="">{format!("All {}", spec.label)}</option>
            {move || {
                let current = selected();
                items
                    .with(|list| filter_options(&spec, list))
                    .into_iter()
                    .map(|option| {
                        let is_selected = option == current;
                        view! {
                            <option value=option.clone() selected=is_selected>{option.clone()}</option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

fn table_view<E: ListEntity>(
    rows: Vec<E>,
    modal_stack: ModalStackService,
    toast: ToastService,
    refetch: Callback<()>,
) -> impl IntoView {
    let columns = E::columns();
    let header_cells = columns
        .iter()
        .map(|c| {
            let header = c.header;
            view! { <TableHeaderCell>{header}</TableHeaderCell> }
        })
        .collect_view();
    let body_rows = rows
        .into_iter()
        .map(|item| {
            let cells = columns
                .iter()
                .map(|c| {
                    let text = (c.cell)(&item);
                    view! {
                        <TableCell>
                            <TableCellLayout>{text}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view();
            let status = item.status();
            let actions = row_actions_view(item, modal_stack, toast, refetch);
            view! {
                <TableRow>
                    {cells}
                    <TableCell>
                        <StatusBadge status=status />
                    </TableCell>
                    <TableCell>
                        {actions}
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    {header_cells}
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Actions"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {body_rows}
            </TableBody>
        </Table>
    }
}

fn row_actions_view<E: ListEntity>(
    item: E,
    modal_stack: ModalStackService,
    toast: ToastService,
    refetch: Callback<()>,
) -> impl IntoView {
    let kind = E::KIND;
    let id = item.id();
    let status = item.status();
    let edit_values = item.form_values();
    let toggle_label = if status.is_active() { "Deactivate" } else { "Activate" };
    let extra = item.row_actions();

    let view_item = item.clone();
    let on_view = move |_| open_detail(modal_stack, view_item.clone());
    let on_edit = move |_| {
        open_form(modal_stack, kind, FormMode::Update(id), edit_values.clone(), refetch);
    };
    let on_toggle = move |_| toggle_status(kind, id, status, toast, refetch);

    view! {
        <Space gap=SpaceGap::Small>
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_view attr:title="View">
                {icon("eye")}
            </Button>
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_edit attr:title="Edit">
                {icon("edit")}
            </Button>
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_toggle attr:title=toggle_label>
                {icon("power")}
            </Button>
            {extra
                .into_iter()
                .map(|action| extra_action_view(action, modal_stack, toast, refetch))
                .collect_view()}
        </Space>
    }
}

fn extra_action_view(
    action: RowAction,
    modal_stack: ModalStackService,
    toast: ToastService,
    refetch: Callback<()>,
) -> AnyView {
    match action {
        RowAction::Handoff {
            label,
            icon: icon_name,
            kind,
            values,
        } => {
            let on_click = move |_| {
                open_form(modal_stack, kind, FormMode::Create, values.clone(), refetch);
            };
            view! {
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_click attr:title=label>
                    {icon(icon_name)}
                </Button>
            }
            .into_any()
        }
        RowAction::AdvanceStage { id, next } => {
            let on_click = move |_| {
                spawn_local(async move {
                    match change_stage(id, next).await {
                        Ok(message) => {
                            toast.success(message);
                            refetch.run(());
                        }
                        Err(e) => {
                            log::error!("stage change for batch #{} failed: {}", id, e);
                            toast.error(e.user_message());
                        }
                    }
                });
            };
            view! {
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_click
                    attr:title=format!("Move to {}", next.label())
                >
                    {icon("arrow-right")}
                </Button>
            }
            .into_any()
        }
    }
}

/// Sends the inverted status; the list is re-fetched rather than patched.
fn toggle_status(
    kind: EntityKind,
    id: i64,
    current: RecordStatus,
    toast: ToastService,
    on_done: Callback<()>,
) {
    spawn_local(async move {
        match change_status(kind, id, current.toggled()).await {
            Ok(message) => {
                toast.success(message);
                on_done.run(());
            }
            Err(e) => {
                log::error!("{} #{} status change failed: {}", kind, id, e);
                toast.error(e.user_message());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_production_batch::aggregate::ProductionBatch;
    use contracts::domain::a010_master_data::aggregate::Brand;

    #[test]
    fn status_filter_comes_first() {
        let specs = filter_specs::<ProductionBatch>();
        assert_eq!(specs[0].key, "status");
        assert!(specs.iter().any(|s| s.key == "stage"));
        assert_eq!(filter_specs::<Brand>().len(), 1);
    }

    #[test]
    fn data_driven_options_come_from_items() {
        let batches = vec![
            ProductionBatch {
                id: 1,
                finished_good_name: "Widget".into(),
                ..Default::default()
            },
            ProductionBatch {
                id: 2,
                finished_good_name: "Gadget".into(),
                ..Default::default()
            },
            ProductionBatch {
                id: 3,
                finished_good_name: "Widget".into(),
                ..Default::default()
            },
        ];
        let product = FilterSpec::from_data("product", "Product");
        assert_eq!(filter_options(&product, &batches), vec!["Gadget", "Widget"]);
        assert_eq!(
            filter_options(&STATUS_FILTER_SPEC, &batches),
            vec!["Active", "Inactive"]
        );
    }
}
