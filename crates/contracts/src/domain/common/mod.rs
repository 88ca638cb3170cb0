//! Common types and traits for all entities

pub mod entity;
pub mod entity_kind;
pub mod lenient;
pub mod record_status;

// Re-exports
pub use entity::Entity;
pub use entity_kind::EntityKind;
pub use record_status::RecordStatus;
