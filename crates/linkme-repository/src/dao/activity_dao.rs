//! ActivityDao trait — recent-activity log access.

use async_trait::async_trait;
use linkme_core::{Interface, LinkMeResult, UserId};
use sqlx::FromRow;

/// Row of the `recent_activities` table.
///
/// The zero value (`RecentActivityRow::default()`) stands for "no activity".
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct RecentActivityRow {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub time: String,
}

/// Recent-activity data access object.
#[async_trait]
pub trait ActivityDao: Interface + Send + Sync {
    /// Fetches one activity row without filtering by user.
    ///
    /// Returns the oldest row, or the zero value when the table is empty.
    async fn get_recent_activity(&self) -> LinkMeResult<RecentActivityRow>;

    /// Fetches the latest activity row of `user_id`, or the zero value.
    async fn get_recent_activity_by_user(
        &self,
        user_id: UserId,
    ) -> LinkMeResult<RecentActivityRow>;

    /// Inserts `row` as-is. A zero `row.id` is assigned by the database.
    async fn set_recent_activity(&self, row: RecentActivityRow) -> LinkMeResult<()>;
}
