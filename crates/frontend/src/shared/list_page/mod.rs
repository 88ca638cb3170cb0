//! Generic list page: stat cards, search and filter bar, paginated table,
//! form dialog and detail dialog, driven by one [`ListEntity`] impl per entity.

pub mod detail_dialog;
pub mod form_dialog;
pub mod page;

pub use page::entity_list_page;

use contracts::domain::a006_production_batch::aggregate::BatchStage;
use contracts::domain::common::{Entity, EntityKind};
use contracts::shared::form::FormValues;

use crate::shared::components::stat_card::StatTone;

/// One table column rendered as text.
pub struct Column<E> {
    pub header: &'static str,
    pub cell: fn(&E) -> String,
}

impl<E> Column<E> {
    pub const fn new(header: &'static str, cell: fn(&E) -> String) -> Self {
        Self { header, cell }
    }
}

/// Column of a related list; the first key present in the record is shown.
pub struct RelatedColumn {
    pub header: &'static str,
    pub keys: &'static [&'static str],
}

/// Secondary list fetched with `get-by/{field}/{id}` when the detail dialog opens.
pub struct RelatedList {
    pub kind: EntityKind,
    pub field: &'static str,
    pub title: &'static str,
    pub columns: &'static [RelatedColumn],
}

/// Extra per-row action besides view / edit / toggle-status.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    /// Opens the create form of another entity pre-filled with `values`.
    Handoff {
        label: &'static str,
        icon: &'static str,
        kind: EntityKind,
        values: FormValues,
    },
    AdvanceStage { id: i64, next: BatchStage },
}

/// Extra stat card computed from the fetched list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraStat {
    pub label: String,
    pub value: usize,
    pub tone: StatTone,
}

impl ExtraStat {
    pub fn new(label: impl Into<String>, value: usize, tone: StatTone) -> Self {
        Self {
            label: label.into(),
            value,
            tone,
        }
    }
}

/// Presentation of an entity on its list page.
pub trait ListEntity: Entity {
    fn columns() -> Vec<Column<Self>>;

    fn extra_stats(_items: &[Self]) -> Vec<ExtraStat> {
        Vec::new()
    }

    fn related() -> Option<RelatedList> {
        None
    }

    fn row_actions(&self) -> Vec<RowAction> {
        Vec::new()
    }
}

/// Sidebar and stat-card icon of an entity.
pub fn kind_icon(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Client => "users",
        EntityKind::Vendor => "truck",
        EntityKind::RawMaterial => "box",
        EntityKind::FinishedGood => "package",
        EntityKind::PurchaseOrder => "cart",
        EntityKind::ProductionBatch => "factory",
        EntityKind::DispatchOrder => "truck",
        EntityKind::QcRecord => "check-circle",
        EntityKind::Order => "clipboard",
        EntityKind::Brand => "tag",
        EntityKind::Category => "layers",
        EntityKind::Location => "map-pin",
        EntityKind::Unit => "ruler",
        EntityKind::PaymentTerm => "calendar",
        EntityKind::ClientType => "users",
        EntityKind::AdminUser => "user",
        EntityKind::AdminRole => "shield",
    }
}
