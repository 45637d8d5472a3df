//! Business logic services

pub mod impact;
pub mod reports;

use std::sync::Arc;

use crate::{impact::{RecordSource, ReferenceTables}, repository::ReportStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub impact: impact::ImpactService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services over the given collaborators
    pub fn new(
        source: Arc<dyn RecordSource>,
        store: Arc<dyn ReportStore>,
        tables: Arc<ReferenceTables>,
    ) -> Self {
        Self {
            impact: impact::ImpactService::new(source.clone(), tables.clone()),
            reports: reports::ReportsService::new(source, store, tables),
        }
    }
}
