use std::sync::Arc;

use async_trait::async_trait;

use crate::database::demo::seed;
use crate::database::demo_store::LocalKvStore;
use crate::interfaces::repositories::companies::CompaniesRepositoryInterface;
use crate::middleware::error::AppResult;
use crate::models::view::company::CompanyView;

pub struct DemoCompaniesRepository {
    store: Arc<LocalKvStore>,
}

impl DemoCompaniesRepository {
    pub fn new(store: Arc<LocalKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CompaniesRepositoryInterface for DemoCompaniesRepository {
    async fn get_companies(&self) -> AppResult<Vec<CompanyView>> {
        self.store.simulate_latency().await;
        Ok(seed::companies().clone())
    }

    async fn get_company_by_id(&self, company_id: &str) -> AppResult<Option<CompanyView>> {
        self.store.simulate_latency().await;
        Ok(seed::companies()
            .iter()
            .find(|company| company.id == company_id)
            .cloned())
    }
}
