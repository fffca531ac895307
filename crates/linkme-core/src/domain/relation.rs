//! Follow relation entities.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A directed follow edge: `follower_id` follows `followee_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    /// The user doing the following.
    pub follower_id: UserId,
    /// The user being followed.
    pub followee_id: UserId,
}

impl Relation {
    /// Creates a new follow edge.
    #[must_use]
    pub const fn new(follower_id: UserId, followee_id: UserId) -> Self {
        Self {
            follower_id,
            followee_id,
        }
    }

    /// Whether the edge points back at its own follower.
    #[must_use]
    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.followee_id
    }
}

/// Aggregated follow counts for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowCount {
    /// How many users follow this user.
    pub follower_count: i64,
    /// How many users this user follows.
    pub followee_count: i64,
}
