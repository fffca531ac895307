//! MySQL implementation of [`ActivityDao`].

use crate::dao::activity_dao::{ActivityDao, RecentActivityRow};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use linkme_core::{LinkMeError, LinkMeResult, UserId};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error};

/// MySQL-backed recent-activity DAO.
#[derive(Component, Clone)]
#[shaku(interface = ActivityDao)]
pub struct MySqlActivityDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlActivityDaoImpl {
    /// Creates a new DAO over the shared pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityDao for MySqlActivityDaoImpl {
    async fn get_recent_activity(&self) -> LinkMeResult<RecentActivityRow> {
        debug!("Fetching recent activity");

        let row = sqlx::query_as::<_, RecentActivityRow>(
            r#"
            SELECT id, user_id, description, `time`
            FROM recent_activities
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.inner())
        .await
        .map_err(|e| {
            error!(error = %e, "get recent activity failed");
            LinkMeError::from(e)
        })?;

        Ok(row.unwrap_or_default())
    }

    async fn get_recent_activity_by_user(
        &self,
        user_id: UserId,
    ) -> LinkMeResult<RecentActivityRow> {
        debug!(%user_id, "Fetching recent activity for user");

        let row = sqlx::query_as::<_, RecentActivityRow>(
            r#"
            SELECT id, user_id, description, `time`
            FROM recent_activities
            WHERE user_id = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(self.pool.inner())
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "get recent activity by user failed");
            LinkMeError::from(e)
        })?;

        Ok(row.unwrap_or_default())
    }

    async fn set_recent_activity(&self, row: RecentActivityRow) -> LinkMeResult<()> {
        debug!(id = row.id, user_id = row.user_id, "Recording activity");

        // A zero id becomes NULL so AUTO_INCREMENT assigns one.
        sqlx::query(
            r#"
            INSERT INTO recent_activities (id, user_id, description, `time`)
            VALUES (NULLIF(?, 0), ?, ?, ?)
            "#,
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(&row.description)
        .bind(&row.time)
        .execute(self.pool.inner())
        .await
        .map_err(|e| {
            error!(error = %e, id = row.id, user_id = row.user_id, "set recent activity failed");
            LinkMeError::from(e)
        })?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlActivityDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlActivityDaoImpl").finish_non_exhaustive()
    }
}
