//! Integration tests for [`BriefRepo`] against a real Postgres.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sqlx::PgPool;

use briefdesk_core::brief::{BillingType, BriefDraft, CategoryRequirement, Priority};
use briefdesk_core::catalog::Category;
use briefdesk_db::repositories::BriefRepo;

fn sample_draft(user: &str) -> BriefDraft {
    let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    let mut requirements = BTreeMap::new();
    requirements.insert(
        Category::Tv,
        CategoryRequirement {
            options: vec!["30s".into()],
            extras: vec!["Storyboard".into()],
            details: "teaser only".into(),
        },
    );
    BriefDraft {
        user_name: user.into(),
        user_email: Some("inge@example.com".into()),
        user_phone: None,
        client_name: "Acme".into(),
        brand_name: "Sparkle".into(),
        campaign_name: "Summer Launch".into(),
        campaign_summary: "A summer thing".into(),
        requested_by: "Debbie Wells".into(),
        job_bag_email: "job-123456@agency.monday.com".into(),
        start_date: date,
        end_date: date,
        priority: Priority::High,
        billing_type: BillingType::Retainer,
        budget: Some(250_000.0),
        categories: vec![Category::Tv],
        requirements,
        social_media_items: Vec::new(),
        has_assets: false,
        asset_link: None,
        other_requirements: None,
        references: "see pinterest board".into(),
        kickstart_date: date,
        first_review_date: date,
        sign_off_date: date,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_read_back_round_trips(pool: PgPool) {
    let draft = sample_draft("Inge");
    let id = BriefRepo::create(&pool, &draft).await.unwrap();

    let stored = BriefRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.draft, draft);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_unknown(pool: PgPool) {
    assert!(BriefRepo::find_by_id(&pool, 424_242).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_all_returns_newest_first(pool: PgPool) {
    let first = BriefRepo::create(&pool, &sample_draft("Inge")).await.unwrap();
    let second = BriefRepo::create(&pool, &sample_draft("Raff")).await.unwrap();

    let all = BriefRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    // Same-timestamp rows fall back to id ordering, newest insert first.
    assert_eq!(all[0].id, second);
    assert_eq!(all[1].id, first);
}
