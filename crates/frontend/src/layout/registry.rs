//! Page registry: the one place that maps a page key to its view.

use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::a003_raw_material::aggregate::RawMaterial;
use contracts::domain::a004_finished_good::aggregate::FinishedGood;
use contracts::domain::a005_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a006_production_batch::aggregate::ProductionBatch;
use contracts::domain::a007_dispatch_order::aggregate::DispatchOrder;
use contracts::domain::a008_qc_record::aggregate::QcRecord;
use contracts::domain::a009_order::aggregate::Order;
use contracts::domain::a010_master_data::aggregate as master;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;

use crate::dashboards::OverviewDashboard;
use crate::layout::global_context::DASHBOARD_KEY;
use crate::shared::list_page::entity_list_page;

/// Title shown for a page key; unknown keys fall back to the key itself.
pub fn page_title(key: &str) -> String {
    if key == DASHBOARD_KEY {
        return "Overview".to_string();
    }
    EntityKind::from_path(key)
        .map(|kind| kind.title().to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn render_page(key: &str) -> AnyView {
    if key == DASHBOARD_KEY {
        return view! { <OverviewDashboard /> }.into_any();
    }
    let Some(kind) = EntityKind::from_path(key) else {
        log::warn!("unknown page key '{}'", key);
        return view! {
            <div class="page">
                <div class="empty-state">{format!("Unknown page: {}", key)}</div>
            </div>
        }
        .into_any();
    };

    match kind {
        EntityKind::Client => entity_list_page::<Client>().into_any(),
        EntityKind::Vendor => entity_list_page::<Vendor>().into_any(),
        EntityKind::RawMaterial => entity_list_page::<RawMaterial>().into_any(),
        EntityKind::FinishedGood => entity_list_page::<FinishedGood>().into_any(),
        EntityKind::PurchaseOrder => entity_list_page::<PurchaseOrder>().into_any(),
        EntityKind::ProductionBatch => entity_list_page::<ProductionBatch>().into_any(),
        EntityKind::DispatchOrder => entity_list_page::<DispatchOrder>().into_any(),
        EntityKind::QcRecord => entity_list_page::<QcRecord>().into_any(),
        EntityKind::Order => entity_list_page::<Order>().into_any(),
        EntityKind::Brand => entity_list_page::<master::Brand>().into_any(),
        EntityKind::Category => entity_list_page::<master::Category>().into_any(),
        EntityKind::Location => entity_list_page::<master::Location>().into_any(),
        EntityKind::Unit => entity_list_page::<master::Unit>().into_any(),
        EntityKind::PaymentTerm => entity_list_page::<master::PaymentTerm>().into_any(),
        EntityKind::ClientType => entity_list_page::<master::ClientType>().into_any(),
        EntityKind::AdminUser => entity_list_page::<master::AdminUser>().into_any(),
        EntityKind::AdminRole => entity_list_page::<master::AdminRole>().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_cover_every_key() {
        assert_eq!(page_title(DASHBOARD_KEY), "Overview");
        assert_eq!(page_title("quality-control"), "Quality Control");
        assert_eq!(page_title("nope"), "nope");
    }
}
