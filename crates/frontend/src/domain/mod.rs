//! List-page presentation of every entity: columns, extra stats, related lists, row actions.

pub mod a001_client;
pub mod a002_vendor;
pub mod a003_raw_material;
pub mod a004_finished_good;
pub mod a005_purchase_order;
pub mod a006_production_batch;
pub mod a007_dispatch_order;
pub mod a008_qc_record;
pub mod a009_order;
pub mod a010_master_data;
