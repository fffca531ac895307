//! `ActivityRepositoryImpl` — domain-facing wrapper over [`ActivityDao`].
//!
//! [`ActivityDao`]: crate::dao::ActivityDao

use crate::dao::{ActivityDao, RecentActivityRow};
use crate::traits::ActivityRepository;
use async_trait::async_trait;
use linkme_core::{LinkMeResult, RecentActivity, UserId};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation over an [`ActivityDao`].
///
/// [`ActivityDao`]: crate::dao::ActivityDao
#[derive(Component)]
#[shaku(interface = ActivityRepository)]
pub struct ActivityRepositoryImpl {
    #[shaku(inject)]
    activity_dao: Arc<dyn ActivityDao>,
}

impl ActivityRepositoryImpl {
    /// Creates a new `ActivityRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(activity_dao: Arc<dyn ActivityDao>) -> Self {
        Self { activity_dao }
    }
}

impl From<RecentActivityRow> for RecentActivity {
    fn from(row: RecentActivityRow) -> Self {
        Self {
            id: row.id,
            user_id: UserId::from(row.user_id),
            description: row.description,
            time: row.time,
        }
    }
}

impl From<&RecentActivity> for RecentActivityRow {
    fn from(activity: &RecentActivity) -> Self {
        Self {
            id: activity.id,
            user_id: activity.user_id.into_inner(),
            description: activity.description.clone(),
            time: activity.time.clone(),
        }
    }
}

#[async_trait]
impl ActivityRepository for ActivityRepositoryImpl {
    async fn record_activity(&self, activity: &RecentActivity) -> LinkMeResult<()> {
        debug!("Repository: record_activity for user {}", activity.user_id);
        self.activity_dao
            .set_recent_activity(RecentActivityRow::from(activity))
            .await
    }

    async fn recent_activity(&self) -> LinkMeResult<RecentActivity> {
        debug!("Repository: recent_activity");
        let row = self.activity_dao.get_recent_activity().await?;
        Ok(row.into())
    }

    async fn recent_activity_for_user(&self, user_id: UserId) -> LinkMeResult<RecentActivity> {
        debug!("Repository: recent_activity_for_user {}", user_id);
        let row = self.activity_dao.get_recent_activity_by_user(user_id).await?;
        Ok(row.into())
    }
}

impl std::fmt::Debug for ActivityRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityRepositoryImpl").finish_non_exhaustive()
    }
}
