//! Overview page: totals per operational entity and the production pipeline.

use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a003_raw_material::aggregate::RawMaterial;
use contracts::domain::a006_production_batch::aggregate::{BatchStage, ProductionBatch};
use contracts::domain::a007_dispatch_order::aggregate::DispatchOrder;
use contracts::domain::a008_qc_record::aggregate::QcRecord;
use contracts::domain::a009_order::aggregate::Order;
use contracts::domain::common::{Entity, EntityKind};
use contracts::shared::stats::{count_by, StatusCounts};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::global_context::{AppGlobalContext, DASHBOARD_KEY};
use crate::shared::api::fetch_list;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::list_page::kind_icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::toast::use_toast;

/// Every stage with its count, zeros included, in workflow order.
pub(crate) fn stage_breakdown(batches: &[ProductionBatch]) -> Vec<(BatchStage, usize)> {
    let counts = count_by(batches, |b| b.stage);
    BatchStage::ALL
        .iter()
        .map(|stage| (*stage, counts.get(stage).copied().unwrap_or(0)))
        .collect()
}

/// Fetches one list into `target`; `None` means not loaded yet or failed.
fn load<E: Entity>(target: RwSignal<Option<StatusCounts>>, extra: impl FnOnce(&[E]) + 'static) {
    let toast = use_toast();
    spawn_local(async move {
        match fetch_list::<E>().await {
            Ok(list) => {
                target.set(Some(StatusCounts::of(&list)));
                extra(&list);
            }
            Err(e) => {
                log::error!("overview: {} failed: {}", E::KIND, e);
                toast.error(e.user_message());
            }
        }
    });
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let clients = RwSignal::new(None::<StatusCounts>);
    let materials = RwSignal::new(None::<StatusCounts>);
    let batches = RwSignal::new(None::<StatusCounts>);
    let orders = RwSignal::new(None::<StatusCounts>);
    let dispatches = RwSignal::new(None::<StatusCounts>);
    let qc = RwSignal::new(None::<StatusCounts>);
    let low_stock = RwSignal::new(None::<usize>);
    let stages = RwSignal::new(Vec::<(BatchStage, usize)>::new());

    load::<Client>(clients, |_| {});
    load::<RawMaterial>(materials, move |list| {
        low_stock.set(Some(list.iter().filter(|m| m.is_low_stock()).count()));
    });
    load::<ProductionBatch>(batches, move |list| stages.set(stage_breakdown(list)));
    load::<Order>(orders, |_| {});
    load::<DispatchOrder>(dispatches, |_| {});
    load::<QcRecord>(qc, |_| {});

    let sections = [
        (EntityKind::Client, clients),
        (EntityKind::RawMaterial, materials),
        (EntityKind::ProductionBatch, batches),
        (EntityKind::Order, orders),
        (EntityKind::DispatchOrder, dispatches),
        (EntityKind::QcRecord, qc),
    ];

    view! {
        <PageFrame page_key=DASHBOARD_KEY category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="dashboard-grid">
                    {sections
                        .into_iter()
                        .map(|(kind, counts)| {
                            view! {
                                <div class="dashboard-section" on:click=move |_| ctx.open_page(kind.path())>
                                    <h3>{kind.title()}</h3>
                                    <Flex gap=FlexGap::Small>
                                        <StatCard
                                            label="Total"
                                            icon_name=kind_icon(kind)
                                            value=Signal::derive(move || counts.get().map(|c| c.total))
                                        />
                                        <StatCard
                                            label="Active"
                                            icon_name="check-circle"
                                            value=Signal::derive(move || counts.get().map(|c| c.active))
                                            tone=StatTone::Success
                                        />
                                    </Flex>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="dashboard-section">
                        <h3>"Inventory"</h3>
                        <StatCard
                            label="Low stock materials"
                            icon_name="box"
                            value=low_stock
                            tone=StatTone::Warning
                        />
                    </div>
                </div>

                <div class="dashboard-section">
                    <h3>"Production pipeline"</h3>
                    <Flex gap=FlexGap::Small>
                        {move || {
                            stages
                                .get()
                                .into_iter()
                                .map(|(stage, n)| {
                                    view! {
                                        <StatCard
                                            label=stage.label()
                                            icon_name="factory"
                                            value=Signal::derive(move || Some(n))
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </Flex>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_lists_every_stage() {
        let batches = vec![
            ProductionBatch {
                stage: BatchStage::InProgress,
                ..Default::default()
            },
            ProductionBatch {
                stage: BatchStage::InProgress,
                ..Default::default()
            },
            ProductionBatch {
                stage: BatchStage::Cancelled,
                ..Default::default()
            },
        ];
        let breakdown = stage_breakdown(&batches);
        assert_eq!(breakdown.len(), BatchStage::ALL.len());
        assert_eq!(breakdown[0], (BatchStage::Planned, 0));
        assert_eq!(breakdown[1], (BatchStage::InProgress, 2));
        assert_eq!(breakdown[4], (BatchStage::Cancelled, 1));
    }
}
