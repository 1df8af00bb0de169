use std::sync::Arc;

use tokio::sync::Mutex;

use crate::company_table::store::SalaryTableStore;
use crate::config::Config;
use crate::guidance::advisor::SalaryAdvisor;
use crate::valuation::pipeline::AdjustmentPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Language-model collaborator. Default: `LlmSalaryAdvisor`.
    pub advisor: Arc<dyn SalaryAdvisor>,
    /// Company salary table persistence. Default: `PgSalaryTableStore`.
    pub table_store: Arc<dyn SalaryTableStore>,
    pub policy: AdjustmentPolicy,
    /// Serializes load-modify-save cycles on the company table.
    pub table_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        config: Config,
        advisor: Arc<dyn SalaryAdvisor>,
        table_store: Arc<dyn SalaryTableStore>,
    ) -> Self {
        let policy = AdjustmentPolicy {
            fallback_ceiling_multiplier: config.fallback_ceiling_multiplier,
        };
        Self {
            config,
            advisor,
            table_store,
            policy,
            table_lock: Arc::new(Mutex::new(())),
        }
    }
}
