use serde::Deserialize;

use crate::entities::post_entity::PostType;
use crate::models::view::post::PostView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralTab {
    #[default]
    Giving,
    Seeking,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReferralBoardFilter {
    #[serde(default)]
    pub tab: ReferralTab,
    pub search: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
}

/// The referral board's predicate chain: tab, free-text search, company
/// equality, role match. Every text comparison lowercases both sides; the
/// company filter is an equality check, not a substring one. O(n) per pass,
/// recomputed per request over the in-memory list.
pub fn filter_referral_posts(posts: Vec<PostView>, filter: &ReferralBoardFilter) -> Vec<PostView> {
    let mut filtered: Vec<PostView> = posts
        .into_iter()
        .filter(|post| post.r#type.is_referral())
        .collect();

    let tab_type = match filter.tab {
        ReferralTab::Giving => PostType::ReferralOffer,
        ReferralTab::Seeking => PostType::ReferralRequest,
    };
    filtered.retain(|post| post.r#type == tab_type);

    if let Some(query) = filter.search.as_deref().map(str::trim) {
        if !query.is_empty() {
            let query = query.to_lowercase();
            filtered.retain(|post| {
                post.title.to_lowercase().contains(&query)
                    || post.content.to_lowercase().contains(&query)
                    || post
                        .company
                        .as_deref()
                        .map(|company| company.to_lowercase().contains(&query))
                        .unwrap_or(false)
                    || post.author.job_title.to_lowercase().contains(&query)
            });
        }
    }

    if let Some(company) = &filter.company {
        let company = company.to_lowercase();
        filtered.retain(|post| {
            post.company
                .as_deref()
                .map(|c| c.to_lowercase() == company)
                .unwrap_or(false)
        });
    }

    if let Some(role) = &filter.role {
        let role = role.to_lowercase();
        filtered.retain(|post| {
            post.title.to_lowercase().contains(&role)
                || post.content.to_lowercase().contains(&role)
                || post.author.job_title.to_lowercase().contains(&role)
        });
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::demo::seed;

    fn board_posts() -> Vec<PostView> {
        seed::posts().clone()
    }

    #[test]
    fn keeps_only_the_active_tab() {
        let offers = filter_referral_posts(board_posts(), &ReferralBoardFilter::default());
        assert!(offers
            .iter()
            .all(|post| post.r#type == PostType::ReferralOffer));
        assert_eq!(offers.len(), 1);

        let requests = filter_referral_posts(
            board_posts(),
            &ReferralBoardFilter {
                tab: ReferralTab::Seeking,
                ..Default::default()
            },
        );
        assert!(requests
            .iter()
            .all(|post| post.r#type == PostType::ReferralRequest));
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn general_posts_never_reach_the_board() {
        let filtered = filter_referral_posts(board_posts(), &ReferralBoardFilter::default());
        assert!(filtered.iter().all(|post| post.r#type.is_referral()));
    }

    #[test]
    fn search_is_case_insensitive() {
        // the fixture content says "Azure"; the query is lowercase
        let filtered = filter_referral_posts(
            board_posts(),
            &ReferralBoardFilter {
                search: Some("azure".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].content.contains("Azure"));
    }

    #[test]
    fn search_misses_return_nothing() {
        let filtered = filter_referral_posts(
            board_posts(),
            &ReferralBoardFilter {
                search: Some("kubernetes".to_string()),
                ..Default::default()
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn company_filter_is_equality_not_substring() {
        let filtered = filter_referral_posts(
            board_posts(),
            &ReferralBoardFilter {
                company: Some("microsoft".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 1);

        let filtered = filter_referral_posts(
            board_posts(),
            &ReferralBoardFilter {
                company: Some("micro".to_string()),
                ..Default::default()
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn role_filter_matches_author_job_title() {
        let filtered = filter_referral_posts(
            board_posts(),
            &ReferralBoardFilter {
                tab: ReferralTab::Seeking,
                role: Some("pm".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].author.job_title, "Senior PM");
    }
}
