use std::sync::Arc;

use async_trait::async_trait;

use crate::database::client::Db;
use crate::entities::company_entity::{Company, TABLE_NAME};
use crate::interfaces::repositories::companies::CompaniesRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::string_utils::get_str_thing;
use crate::models::view::company::CompanyView;

#[derive(Debug)]
pub struct CompaniesRepository {
    client: Arc<Db>,
}

impl CompaniesRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS logo ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS member_count ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS post_count ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE INDEX IF NOT EXISTS companies_name_idx ON TABLE {TABLE_NAME} COLUMNS name UNIQUE;
");
        let mutation = self.client.query(sql).await?;
        mutation.check().expect("should mutate companies");

        Ok(())
    }
}

#[async_trait]
impl CompaniesRepositoryInterface for CompaniesRepository {
    async fn get_companies(&self) -> AppResult<Vec<CompanyView>> {
        let mut res = self
            .client
            .query(format!("SELECT * FROM {TABLE_NAME} ORDER BY name ASC;"))
            .await?;
        let companies = res.take::<Vec<Company>>(0)?;
        Ok(companies.into_iter().map(CompanyView::from).collect())
    }

    async fn get_company_by_id(&self, company_id: &str) -> AppResult<Option<CompanyView>> {
        let thing = match get_str_thing(company_id) {
            Ok(thing) => thing,
            Err(_) => return Ok(None),
        };
        let mut res = self
            .client
            .query("SELECT * FROM <record>$id;")
            .bind(("id", thing.to_raw()))
            .await?;
        let company = res.take::<Option<Company>>(0)?;
        Ok(company.map(CompanyView::from))
    }
}
