use serde::{Deserialize, Serialize};

use crate::entities::company_entity::Company;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyView {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub member_count: i64,
    pub post_count: i64,
}

impl From<Company> for CompanyView {
    fn from(company: Company) -> Self {
        // missing logo falls back to the name's first character
        let logo = company.logo.unwrap_or_else(|| {
            company
                .name
                .chars()
                .next()
                .map(|c| c.to_string())
                .unwrap_or_default()
        });
        CompanyView {
            id: company.id.map(|id| id.to_raw()).unwrap_or_default(),
            name: company.name,
            logo,
            member_count: company.member_count,
            post_count: company.post_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_defaults_to_first_character() {
        let view = CompanyView::from(Company {
            id: None,
            name: "Netflix".to_string(),
            logo: None,
            member_count: 10,
            post_count: 2,
        });
        assert_eq!(view.logo, "N");

        let view = CompanyView::from(Company {
            id: None,
            name: "Microsoft".to_string(),
            logo: Some("MS".to_string()),
            member_count: 0,
            post_count: 0,
        });
        assert_eq!(view.logo, "MS");
    }
}
