//! URL builders for the REST contract.
//!
//! Some endpoints take the auth token as a path segment (list, status,
//! related lists), others as a multipart field (add, update).

use crate::domain::a006_production_batch::aggregate::BatchStage;
use crate::domain::common::{EntityKind, RecordStatus};

fn seg(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base}/{entity}/get-all/{token}`
    pub fn get_all(&self, kind: EntityKind, token: &str) -> String {
        format!("{}/{}/get-all/{}", self.base, kind.path(), seg(token))
    }

    /// `POST {base}/{entity}/add`
    pub fn add(&self, kind: EntityKind) -> String {
        format!("{}/{}/add", self.base, kind.path())
    }

    /// `POST {base}/{entity}/update`
    pub fn update(&self, kind: EntityKind) -> String {
        format!("{}/{}/update", self.base, kind.path())
    }

    /// `GET {base}/{entity}/change-status/{id}/{status}/{token}`
    pub fn change_status(
        &self,
        kind: EntityKind,
        id: i64,
        new_status: RecordStatus,
        token: &str,
    ) -> String {
        format!(
            "{}/{}/change-status/{}/{}/{}",
            self.base,
            kind.path(),
            id,
            new_status.as_flag(),
            seg(token)
        )
    }

    /// `GET {base}/{entity}/get-by/{field}/{value}/{token}`
    pub fn get_by(&self, kind: EntityKind, field: &str, value: &str, token: &str) -> String {
        format!(
            "{}/{}/get-by/{}/{}/{}",
            self.base,
            kind.path(),
            seg(field),
            seg(value),
            seg(token)
        )
    }

    /// `GET {base}/production/change-stage/{id}/{stage}/{token}`
    pub fn change_stage(&self, id: i64, stage: BatchStage, token: &str) -> String {
        format!(
            "{}/{}/change-stage/{}/{}/{}",
            self.base,
            EntityKind::ProductionBatch.path(),
            id,
            stage.as_str(),
            seg(token)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://localhost:3000/")
    }

    #[test]
    fn list_url_carries_token_in_path() {
        assert_eq!(
            endpoints().get_all(EntityKind::RawMaterial, "abc"),
            "http://localhost:3000/raw-material/get-all/abc"
        );
    }

    #[test]
    fn status_url_uses_the_inverted_flag() {
        let current = RecordStatus::Active;
        assert_eq!(
            endpoints().change_status(EntityKind::Client, 12, current.toggled(), "t"),
            "http://localhost:3000/client/change-status/12/0/t"
        );
    }

    #[test]
    fn mutation_urls() {
        assert_eq!(
            endpoints().add(EntityKind::Vendor),
            "http://localhost:3000/vendor/add"
        );
        assert_eq!(
            endpoints().update(EntityKind::QcRecord),
            "http://localhost:3000/quality-control/update"
        );
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(
            endpoints().get_by(EntityKind::Order, "client_id", "5", "a/b c"),
            "http://localhost:3000/order/get-by/client_id/5/a%2Fb%20c"
        );
    }

    #[test]
    fn stage_url() {
        assert_eq!(
            endpoints().change_stage(4, BatchStage::QualityCheck, "t"),
            "http://localhost:3000/production/change-stage/4/quality_check/t"
        );
    }
}
