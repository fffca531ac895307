//! Repository trait definitions.

use async_trait::async_trait;
use linkme_core::{Interface, LinkMeResult, Pagination, RecentActivity, Relation, UserId};

/// Follow-graph repository.
#[async_trait]
pub trait RelationRepository: Interface + Send + Sync {
    /// Lists the edges where `follower_id` is the follower (who they follow).
    async fn list_follower_relations(
        &self,
        follower_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<Relation>>;

    /// Lists the edges where `followee_id` is followed (who follows them).
    async fn list_followee_relations(
        &self,
        followee_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<Relation>>;

    /// Makes `follower_id` follow `followee_id`.
    async fn follow_user(&self, follower_id: UserId, followee_id: UserId) -> LinkMeResult<()>;

    /// Makes `follower_id` stop following `followee_id`.
    async fn cancel_follow_user(&self, follower_id: UserId, followee_id: UserId)
        -> LinkMeResult<()>;

    /// Number of users `user_id` follows.
    async fn get_followee_count(&self, user_id: UserId) -> LinkMeResult<i64>;

    /// Number of users following `user_id`.
    async fn get_follower_count(&self, user_id: UserId) -> LinkMeResult<i64>;
}

/// Recent-activity repository.
#[async_trait]
pub trait ActivityRepository: Interface + Send + Sync {
    /// Appends an entry to the activity log.
    async fn record_activity(&self, activity: &RecentActivity) -> LinkMeResult<()>;

    /// Returns one entry of the log regardless of owner, or the empty record.
    async fn recent_activity(&self) -> LinkMeResult<RecentActivity>;

    /// Returns the latest entry of `user_id`, or the empty record.
    async fn recent_activity_for_user(&self, user_id: UserId) -> LinkMeResult<RecentActivity>;
}
