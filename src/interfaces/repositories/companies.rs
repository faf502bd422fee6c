use async_trait::async_trait;

use crate::middleware::error::AppResult;
use crate::models::view::company::CompanyView;

#[async_trait]
pub trait CompaniesRepositoryInterface {
    /// Ordered by name.
    async fn get_companies(&self) -> AppResult<Vec<CompanyView>>;
    async fn get_company_by_id(&self, company_id: &str) -> AppResult<Option<CompanyView>>;
}
