//! `MySqlRelationDaoImpl` — MySQL implementation of [`RelationDao`].
//!
//! Edges live in `relations`, unique on `(follower_id, followee_id)`.
//! Lists are ordered by the auto-increment id, i.e. insertion order.

use crate::dao::relation_dao::{RelationDao, RelationRow};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use chrono::Utc;
use linkme_core::{FollowCount, LinkMeError, LinkMeResult, Pagination, Relation, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// MySQL-backed relation DAO.
#[derive(Component, Clone)]
#[shaku(interface = RelationDao)]
pub struct MySqlRelationDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlRelationDaoImpl {
    /// Creates a new DAO over the shared pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FollowCountRow {
    follower_count: i64,
    followee_count: i64,
}

impl From<FollowCountRow> for FollowCount {
    fn from(row: FollowCountRow) -> Self {
        Self {
            follower_count: row.follower_count,
            followee_count: row.followee_count,
        }
    }
}

/// Converts a page into `LIMIT`/`OFFSET` binds, saturating at `i64::MAX`.
fn limit_offset(pagination: Pagination) -> (i64, i64) {
    let limit = i64::try_from(pagination.limit()).unwrap_or(i64::MAX);
    let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

#[async_trait]
impl RelationDao for MySqlRelationDaoImpl {
    async fn list_follower_relations(
        &self,
        follower_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<RelationRow>> {
        debug!(
            %follower_id,
            page = pagination.page(),
            size = pagination.size(),
            "Listing follower relations"
        );
        let (limit, offset) = limit_offset(pagination);

        sqlx::query_as::<_, RelationRow>(
            r#"
            SELECT id, follower_id, followee_id, created_at
            FROM relations
            WHERE follower_id = ?
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.inner())
        .await
        .map_err(|e| {
            error!(error = %e, %follower_id, "list follower relations failed");
            LinkMeError::from(e)
        })
    }

    async fn list_followee_relations(
        &self,
        followee_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<RelationRow>> {
        debug!(
            %followee_id,
            page = pagination.page(),
            size = pagination.size(),
            "Listing followee relations"
        );
        let (limit, offset) = limit_offset(pagination);

        sqlx::query_as::<_, RelationRow>(
            r#"
            SELECT id, follower_id, followee_id, created_at
            FROM relations
            WHERE followee_id = ?
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(followee_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.inner())
        .await
        .map_err(|e| {
            error!(error = %e, %followee_id, "list followee relations failed");
            LinkMeError::from(e)
        })
    }

    async fn follow_user(&self, follower_id: UserId, followee_id: UserId) -> LinkMeResult<()> {
        if Relation::new(follower_id, followee_id).is_self_follow() {
            warn!(%follower_id, "rejected self follow");
            return Err(LinkMeError::validation("a user cannot follow themselves"));
        }

        debug!(%follower_id, %followee_id, "Following user");

        // The no-op update keeps a repeated follow from failing on the unique key.
        sqlx::query(
            r#"
            INSERT INTO relations (follower_id, followee_id, created_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE id = id
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(followee_id.into_inner())
        .bind(Utc::now())
        .execute(self.pool.inner())
        .await
        .map_err(|e| {
            error!(error = %e, %follower_id, %followee_id, "follow user failed");
            LinkMeError::from(e)
        })?;

        Ok(())
    }

    async fn cancel_follow_user(
        &self,
        follower_id: UserId,
        followee_id: UserId,
    ) -> LinkMeResult<()> {
        debug!(%follower_id, %followee_id, "Cancelling follow");

        let result =
            sqlx::query("DELETE FROM relations WHERE follower_id = ? AND followee_id = ?")
                .bind(follower_id.into_inner())
                .bind(followee_id.into_inner())
                .execute(self.pool.inner())
                .await
                .map_err(|e| {
                    error!(error = %e, %follower_id, %followee_id, "cancel follow user failed");
                    LinkMeError::from(e)
                })?;

        if result.rows_affected() == 0 {
            debug!(%follower_id, %followee_id, "No relation to cancel");
        }
        Ok(())
    }

    async fn follow_count(&self, user_id: UserId) -> LinkMeResult<FollowCount> {
        debug!(%user_id, "Counting follows");

        let row = sqlx::query_as::<_, FollowCountRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM relations WHERE followee_id = ?) AS follower_count,
                (SELECT COUNT(*) FROM relations WHERE follower_id = ?) AS followee_count
            "#,
        )
        .bind(user_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(self.pool.inner())
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "follow count failed");
            LinkMeError::from(e)
        })?;

        Ok(row.into())
    }
}

impl std::fmt::Debug for MySqlRelationDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlRelationDaoImpl").finish_non_exhaustive()
    }
}
