use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::entities::post_entity::PostType;
use crate::models::view::comment::CommentView;
use crate::models::view::company::CompanyView;
use crate::models::view::post::PostView;
use crate::models::view::user::UserView;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

static PROFILES: Lazy<Vec<UserView>> = Lazy::new(|| {
    vec![
        UserView {
            id: "1".to_string(),
            name: "Ava Thompson".to_string(),
            email: "ava@microsoft.com".to_string(),
            company: "Microsoft".to_string(),
            job_title: "Senior Software Engineer".to_string(),
            karma_points: 450,
            referrals_given: 3,
            verified: true,
            linkedin_connected: true,
            created_at: at(2024, 1, 15, 10, 0),
        },
        UserView {
            id: "2".to_string(),
            name: "Daniel Cho".to_string(),
            email: "daniel@google.com".to_string(),
            company: "Google".to_string(),
            job_title: "Staff Engineer".to_string(),
            karma_points: 680,
            referrals_given: 5,
            verified: true,
            linkedin_connected: true,
            created_at: at(2023, 11, 20, 10, 0),
        },
        UserView {
            id: "3".to_string(),
            name: "Nisha Rao".to_string(),
            email: "nisha@amazon.com".to_string(),
            company: "Amazon".to_string(),
            job_title: "Senior PM".to_string(),
            karma_points: 320,
            referrals_given: 2,
            verified: true,
            linkedin_connected: false,
            created_at: at(2024, 2, 10, 10, 0),
        },
        UserView {
            id: "4".to_string(),
            name: "Alex Morgan".to_string(),
            email: "alex@microsoft.com".to_string(),
            company: "Microsoft".to_string(),
            job_title: "Senior Software Engineer".to_string(),
            karma_points: 125,
            referrals_given: 1,
            verified: true,
            linkedin_connected: true,
            created_at: at(2024, 1, 1, 10, 0),
        },
    ]
});

static POSTS: Lazy<Vec<PostView>> = Lazy::new(|| {
    let profiles = profiles();
    vec![
        PostView {
            id: "1".to_string(),
            author_id: "1".to_string(),
            author: profiles[0].clone(),
            title: "Referring senior engineers for the Azure infrastructure team".to_string(),
            content: "We are hiring Senior Software Engineers for Azure Compute. If you have \
                      5+ years with distributed systems and cloud infrastructure, drop a \
                      comment or DM me your resume and I will refer you."
                .to_string(),
            r#type: PostType::ReferralOffer,
            company: Some("Microsoft".to_string()),
            tags: vec![
                "referral".to_string(),
                "azure".to_string(),
                "swe".to_string(),
            ],
            upvotes: 124,
            comment_count: 32,
            created_at: at(2024, 3, 4, 14, 0),
        },
        PostView {
            id: "2".to_string(),
            author_id: "2".to_string(),
            author: profiles[1].clone(),
            title: "Typical timeline for an L5 to L6 promotion?".to_string(),
            content: "Two years at L5 with consistently strong ratings. My manager says I am \
                      on track, but what did the timeline look like for you?"
                .to_string(),
            r#type: PostType::General,
            company: Some("Google".to_string()),
            tags: vec!["career".to_string(), "promotion".to_string()],
            upvotes: 89,
            comment_count: 56,
            created_at: at(2024, 3, 4, 11, 0),
        },
        PostView {
            id: "3".to_string(),
            author_id: "3".to_string(),
            author: profiles[2].clone(),
            title: "Seeking PM referrals - 6 YOE in B2B SaaS".to_string(),
            content: "Senior PM, six years in B2B SaaS, led several zero-to-one features. \
                      Looking for L5/L6-equivalent PM roles and would really appreciate a \
                      referral."
                .to_string(),
            r#type: PostType::ReferralRequest,
            company: None,
            tags: vec![
                "seeking-referral".to_string(),
                "pm".to_string(),
                "meta".to_string(),
                "google".to_string(),
            ],
            upvotes: 45,
            comment_count: 18,
            created_at: at(2024, 3, 3, 16, 0),
        },
    ]
});

static COMPANIES: Lazy<Vec<CompanyView>> = Lazy::new(|| {
    vec![
        CompanyView {
            id: "1".to_string(),
            name: "Microsoft".to_string(),
            logo: "MS".to_string(),
            member_count: 1234,
            post_count: 456,
        },
        CompanyView {
            id: "2".to_string(),
            name: "Google".to_string(),
            logo: "G".to_string(),
            member_count: 2543,
            post_count: 892,
        },
        CompanyView {
            id: "3".to_string(),
            name: "Amazon".to_string(),
            logo: "A".to_string(),
            member_count: 980,
            post_count: 234,
        },
        CompanyView {
            id: "4".to_string(),
            name: "Meta".to_string(),
            logo: "M".to_string(),
            member_count: 1876,
            post_count: 567,
        },
    ]
});

static COMMENTS: Lazy<Vec<CommentView>> = Lazy::new(|| {
    let profiles = profiles();
    vec![
        CommentView {
            id: "c1".to_string(),
            post_id: "1".to_string(),
            author_id: "4".to_string(),
            author: profiles[3].clone(),
            content: "I have been on that team for two years and can vouch for the culture. \
                      The technical problems are genuinely interesting."
                .to_string(),
            upvotes: 12,
            parent_id: None,
            created_at: at(2024, 3, 4, 15, 0),
        },
        CommentView {
            id: "c2".to_string(),
            post_id: "1".to_string(),
            author_id: "3".to_string(),
            author: profiles[2].clone(),
            content: "Interested! Six years of distributed systems experience. Can I DM you \
                      my resume?"
                .to_string(),
            upvotes: 8,
            parent_id: None,
            created_at: at(2024, 3, 4, 15, 15),
        },
        CommentView {
            id: "c3".to_string(),
            post_id: "1".to_string(),
            author_id: "1".to_string(),
            author: profiles[0].clone(),
            content: "Absolutely, looking forward to reviewing it.".to_string(),
            upvotes: 5,
            parent_id: Some("c2".to_string()),
            created_at: at(2024, 3, 4, 15, 30),
        },
    ]
});

pub fn profiles() -> &'static Vec<UserView> {
    &PROFILES
}

pub fn posts() -> &'static Vec<PostView> {
    &POSTS
}

pub fn companies() -> &'static Vec<CompanyView> {
    &COMPANIES
}

pub fn comments() -> &'static Vec<CommentView> {
    &COMMENTS
}

/// The profile demo mode acts as when nobody has logged in.
pub fn default_profile() -> &'static UserView {
    &PROFILES[3]
}
