//! Integration tests for the activity DAO and repository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use linkme_core::{RecentActivity, UserId};
use linkme_repository::{
    ActivityDao, ActivityRepository, ActivityRepositoryImpl, MySqlActivityDaoImpl,
    RecentActivityRow,
};
use std::sync::Arc;

fn row(user_id: i64, description: &str, time: &str) -> RecentActivityRow {
    RecentActivityRow {
        id: 0,
        user_id,
        description: description.to_string(),
        time: time.to_string(),
    }
}

async fn record(dao: &MySqlActivityDaoImpl, row: RecentActivityRow) {
    dao.set_recent_activity(row)
        .await
        .expect("Failed to insert activity");
}

#[tokio::test]
async fn test_empty_table_returns_zero_value() {
    let db = TestDatabase::new().await;
    let dao = MySqlActivityDaoImpl::new(db.pool());

    let unfiltered = dao.get_recent_activity().await.unwrap();
    assert_eq!(unfiltered, RecentActivityRow::default());
    assert_eq!(
        dao.get_recent_activity_by_user(UserId(1)).await.unwrap(),
        RecentActivityRow::default()
    );
}

#[tokio::test]
async fn test_set_then_get_by_user() {
    let db = TestDatabase::new().await;
    let dao = MySqlActivityDaoImpl::new(db.pool());

    dao.set_recent_activity(row(42, "followed user 7", "2024-06-01 12:00:00"))
        .await
        .expect("Failed to insert activity");

    let found = dao.get_recent_activity_by_user(UserId(42)).await.unwrap();
    assert!(found.id > 0);
    assert_eq!(found.user_id, 42);
    assert_eq!(found.description, "followed user 7");
    assert_eq!(found.time, "2024-06-01 12:00:00");
}

#[tokio::test]
async fn test_explicit_id_is_stored_as_given() {
    let db = TestDatabase::new().await;
    let dao = MySqlActivityDaoImpl::new(db.pool());

    let mut explicit = row(11, "liked a post", "2024-06-03 09:30:00");
    explicit.id = 500;
    record(&dao, explicit.clone()).await;

    let stored = dao.get_recent_activity_by_user(UserId(11)).await.unwrap();
    assert_eq!(stored, explicit);

    // The next auto-assigned id continues after the explicit one.
    record(&dao, row(11, "shared a post", "t")).await;
    let latest = dao.get_recent_activity_by_user(UserId(11)).await.unwrap();
    assert!(latest.id > 500);

    let duplicate = dao.set_recent_activity(explicit).await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn test_unfiltered_read_returns_oldest_row() {
    let db = TestDatabase::new().await;
    let dao = MySqlActivityDaoImpl::new(db.pool());

    record(&dao, row(1, "first", "t1")).await;
    record(&dao, row(2, "second", "t2")).await;

    let found = dao.get_recent_activity().await.unwrap();
    assert_eq!(found.user_id, 1);
    assert_eq!(found.description, "first");
}

#[tokio::test]
async fn test_by_user_returns_latest_entry() {
    let db = TestDatabase::new().await;
    let dao = MySqlActivityDaoImpl::new(db.pool());

    record(&dao, row(5, "older", "t1")).await;
    record(&dao, row(6, "someone else", "t2")).await;
    record(&dao, row(5, "newer", "t3")).await;

    let found = dao.get_recent_activity_by_user(UserId(5)).await.unwrap();
    assert_eq!(found.description, "newer");
}

#[tokio::test]
async fn test_description_over_column_limit_fails() {
    let db = TestDatabase::new().await;
    let dao = MySqlActivityDaoImpl::new(db.pool());

    let too_long = "x".repeat(256);
    let result = dao.set_recent_activity(row(1, &too_long, "t")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_repository_round_trip() {
    let db = TestDatabase::new().await;
    let repo = ActivityRepositoryImpl::new(Arc::new(MySqlActivityDaoImpl::new(db.pool())));

    let activity = RecentActivity::new(UserId(9), "commented on a post", "2024-06-02 08:15");
    repo.record_activity(&activity).await.unwrap();

    let found = repo.recent_activity_for_user(UserId(9)).await.unwrap();
    assert_eq!(found.user_id, activity.user_id);
    assert_eq!(found.description, activity.description);
    assert_eq!(found.time, activity.time);
}
