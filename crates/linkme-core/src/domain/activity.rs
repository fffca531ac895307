//! Recent activity entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// One entry of a user's recent-activity log.
///
/// `description` and `time` are stored as `VARCHAR(255)`. `time` is kept
/// as the caller formatted it; the storage layer does not parse it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    /// Database-assigned id; `0` until persisted.
    pub id: i64,
    /// Owner of the entry.
    pub user_id: UserId,
    /// Free-form description.
    pub description: String,
    /// Caller-formatted timestamp.
    pub time: String,
}

impl RecentActivity {
    /// Creates an unsaved activity entry.
    #[must_use]
    pub fn new(user_id: UserId, description: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: 0,
            user_id,
            description: description.into(),
            time: time.into(),
        }
    }

    /// Whether this is the zero-value record returned for an empty log.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
