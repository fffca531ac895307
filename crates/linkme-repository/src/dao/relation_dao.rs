//! RelationDao trait — low-level follow-edge data access.
//!
//! [`RelationRepository`] wraps a `RelationDao` and translates its rows
//! into domain [`Relation`]s.
//!
//! [`RelationRepository`]: crate::traits::RelationRepository
//! [`Relation`]: linkme_core::Relation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use linkme_core::{FollowCount, Interface, LinkMeResult, Pagination, UserId};
use sqlx::FromRow;

/// Row of the `relations` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RelationRow {
    pub id: i64,
    pub follower_id: i64,
    pub followee_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Follow-edge data access object.
#[async_trait]
pub trait RelationDao: Interface + Send + Sync {
    /// Lists edges whose follower is `follower_id`, oldest first.
    async fn list_follower_relations(
        &self,
        follower_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<RelationRow>>;

    /// Lists edges whose followee is `followee_id`, oldest first.
    async fn list_followee_relations(
        &self,
        followee_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<RelationRow>>;

    /// Creates the edge `follower_id → followee_id`.
    ///
    /// Following an already-followed user is a no-op. Following yourself
    /// is a validation error.
    async fn follow_user(&self, follower_id: UserId, followee_id: UserId) -> LinkMeResult<()>;

    /// Removes the edge `follower_id → followee_id`; a missing edge is a no-op.
    async fn cancel_follow_user(&self, follower_id: UserId, followee_id: UserId)
        -> LinkMeResult<()>;

    /// Counts the followers and followees of `user_id` in one lookup.
    async fn follow_count(&self, user_id: UserId) -> LinkMeResult<FollowCount>;
}
