//! `RelationRepositoryImpl` — Repository layer implementation.
//!
//! Implements [`RelationRepository`] on top of a single [`RelationDao`],
//! translating [`RelationRow`]s into domain [`Relation`]s.
//!
//! ```text
//! Service
//!   ↓ Arc<dyn RelationRepository>
//! RelationRepositoryImpl          ← row → domain translation
//!   ↓ Arc<dyn RelationDao>
//! MySqlRelationDaoImpl
//!   ↓
//! MySQL
//! ```
//!
//! [`RelationRepository`]: crate::traits::RelationRepository
//! [`RelationDao`]: crate::dao::RelationDao

use crate::dao::{RelationDao, RelationRow};
use crate::traits::RelationRepository;
use async_trait::async_trait;
use linkme_core::{LinkMeResult, Pagination, Relation, UserId};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation over a [`RelationDao`].
///
/// [`RelationDao`]: crate::dao::RelationDao
#[derive(Component)]
#[shaku(interface = RelationRepository)]
pub struct RelationRepositoryImpl {
    #[shaku(inject)]
    relation_dao: Arc<dyn RelationDao>,
}

impl RelationRepositoryImpl {
    /// Creates a new `RelationRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(relation_dao: Arc<dyn RelationDao>) -> Self {
        Self { relation_dao }
    }

    fn to_domain_relation(row: RelationRow) -> Relation {
        Relation::new(UserId::from(row.follower_id), UserId::from(row.followee_id))
    }

    fn to_domain_relation_slice(rows: Vec<RelationRow>) -> Vec<Relation> {
        rows.into_iter().map(Self::to_domain_relation).collect()
    }
}

#[async_trait]
impl RelationRepository for RelationRepositoryImpl {
    async fn list_follower_relations(
        &self,
        follower_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<Relation>> {
        debug!("Repository: list_follower_relations {}", follower_id);
        let rows = self
            .relation_dao
            .list_follower_relations(follower_id, pagination)
            .await?;
        Ok(Self::to_domain_relation_slice(rows))
    }

    async fn list_followee_relations(
        &self,
        followee_id: UserId,
        pagination: Pagination,
    ) -> LinkMeResult<Vec<Relation>> {
        debug!("Repository: list_followee_relations {}", followee_id);
        let rows = self
            .relation_dao
            .list_followee_relations(followee_id, pagination)
            .await?;
        Ok(Self::to_domain_relation_slice(rows))
    }

    async fn follow_user(&self, follower_id: UserId, followee_id: UserId) -> LinkMeResult<()> {
        debug!("Repository: follow_user {} -> {}", follower_id, followee_id);
        self.relation_dao
            .follow_user(follower_id, followee_id)
            .await
    }

    async fn cancel_follow_user(
        &self,
        follower_id: UserId,
        followee_id: UserId,
    ) -> LinkMeResult<()> {
        debug!("Repository: cancel_follow_user {} -> {}", follower_id, followee_id);
        self.relation_dao
            .cancel_follow_user(follower_id, followee_id)
            .await
    }

    async fn get_followee_count(&self, user_id: UserId) -> LinkMeResult<i64> {
        debug!("Repository: get_followee_count {}", user_id);
        let count = self.relation_dao.follow_count(user_id).await?;
        Ok(count.followee_count)
    }

    async fn get_follower_count(&self, user_id: UserId) -> LinkMeResult<i64> {
        debug!("Repository: get_follower_count {}", user_id);
        let count = self.relation_dao.follow_count(user_id).await?;
        Ok(count.follower_count)
    }
}

impl std::fmt::Debug for RelationRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationRepositoryImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkme_core::{FollowCount, LinkMeError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // =========================================================================
    // Mock DAO implementations
    // =========================================================================

    /// In-memory stand-in for the `relations` table.
    #[derive(Default)]
    struct MockRelationDao {
        rows: Mutex<Vec<RelationRow>>,
        count_calls: AtomicUsize,
    }

    impl MockRelationDao {
        fn with_edges(edges: &[(i64, i64)]) -> Self {
            let dao = Self::default();
            {
                let mut rows = dao.rows.lock().unwrap();
                for (i, &(follower_id, followee_id)) in edges.iter().enumerate() {
                    rows.push(RelationRow {
                        id: i as i64 + 1,
                        follower_id,
                        followee_id,
                        created_at: Utc::now(),
                    });
                }
            }
            dao
        }

        fn page(rows: Vec<RelationRow>, pagination: Pagination) -> Vec<RelationRow> {
            rows.into_iter()
                .skip(pagination.offset())
                .take(pagination.limit())
                .collect()
        }
    }

    #[async_trait]
    impl RelationDao for MockRelationDao {
        async fn list_follower_relations(
            &self,
            follower_id: UserId,
            pagination: Pagination,
        ) -> LinkMeResult<Vec<RelationRow>> {
            let rows = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.follower_id == follower_id.0)
                .cloned()
                .collect();
            Ok(Self::page(rows, pagination))
        }

        async fn list_followee_relations(
            &self,
            followee_id: UserId,
            pagination: Pagination,
        ) -> LinkMeResult<Vec<RelationRow>> {
            let rows = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.followee_id == followee_id.0)
                .cloned()
                .collect();
            Ok(Self::page(rows, pagination))
        }

        async fn follow_user(&self, follower_id: UserId, followee_id: UserId) -> LinkMeResult<()> {
            if Relation::new(follower_id, followee_id).is_self_follow() {
                return Err(LinkMeError::validation("a user cannot follow themselves"));
            }
            let mut rows = self.rows.lock().unwrap();
            let exists = rows
                .iter()
                .any(|r| r.follower_id == follower_id.0 && r.followee_id == followee_id.0);
            if !exists {
                let id = rows.len() as i64 + 1;
                rows.push(RelationRow {
                    id,
                    follower_id: follower_id.0,
                    followee_id: followee_id.0,
                    created_at: Utc::now(),
                });
            }
            Ok(())
        }

        async fn cancel_follow_user(
            &self,
            follower_id: UserId,
            followee_id: UserId,
        ) -> LinkMeResult<()> {
            self.rows
                .lock()
                .unwrap()
                .retain(|r| !(r.follower_id == follower_id.0 && r.followee_id == followee_id.0));
            Ok(())
        }

        async fn follow_count(&self, user_id: UserId) -> LinkMeResult<FollowCount> {
            self.count_calls.fetch_add(1, Ordering::SeqCst);
            let rows = self.rows.lock().unwrap();
            Ok(FollowCount {
                follower_count: rows.iter().filter(|r| r.followee_id == user_id.0).count() as i64,
                followee_count: rows.iter().filter(|r| r.follower_id == user_id.0).count() as i64,
            })
        }
    }

    /// DAO whose storage is always down.
    struct FailingRelationDao;

    fn storage_down() -> LinkMeError {
        LinkMeError::Database("connection refused".to_string())
    }

    #[async_trait]
    impl RelationDao for FailingRelationDao {
        async fn list_follower_relations(
            &self,
            _: UserId,
            _: Pagination,
        ) -> LinkMeResult<Vec<RelationRow>> {
            Err(storage_down())
        }

        async fn list_followee_relations(
            &self,
            _: UserId,
            _: Pagination,
        ) -> LinkMeResult<Vec<RelationRow>> {
            Err(storage_down())
        }

        async fn follow_user(&self, _: UserId, _: UserId) -> LinkMeResult<()> {
            Err(storage_down())
        }

        async fn cancel_follow_user(&self, _: UserId, _: UserId) -> LinkMeResult<()> {
            Err(storage_down())
        }

        async fn follow_count(&self, _: UserId) -> LinkMeResult<FollowCount> {
            Err(storage_down())
        }
    }

    // =========================================================================
    // Helper functions
    // =========================================================================

    fn create_repo(dao: MockRelationDao) -> (RelationRepositoryImpl, Arc<MockRelationDao>) {
        let dao = Arc::new(dao);
        (RelationRepositoryImpl::new(dao.clone()), dao)
    }

    fn edge(follower: i64, followee: i64) -> Relation {
        Relation::new(UserId(follower), UserId(followee))
    }

    // =========================================================================
    // RelationRepositoryImpl unit tests
    // =========================================================================

    #[tokio::test]
    async fn test_follower_count_scenario() {
        let (repo, _) = create_repo(MockRelationDao::with_edges(&[(1, 2), (1, 3), (4, 2)]));

        assert_eq!(repo.get_follower_count(UserId(2)).await.unwrap(), 2);
        assert_eq!(repo.get_followee_count(UserId(2)).await.unwrap(), 0);
        assert_eq!(repo.get_followee_count(UserId(1)).await.unwrap(), 2);
        assert_eq!(repo.get_follower_count(UserId(1)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_followee_relations_preserves_order() {
        let (repo, _) = create_repo(MockRelationDao::with_edges(&[(1, 2), (1, 3), (4, 2)]));

        let relations = repo
            .list_followee_relations(UserId(2), Pagination::first())
            .await
            .unwrap();
        assert_eq!(relations, vec![edge(1, 2), edge(4, 2)]);
    }

    #[tokio::test]
    async fn test_list_follower_relations() {
        let (repo, _) = create_repo(MockRelationDao::with_edges(&[(1, 2), (1, 3), (4, 2)]));

        let relations = repo
            .list_follower_relations(UserId(1), Pagination::first())
            .await
            .unwrap();
        assert_eq!(relations, vec![edge(1, 2), edge(1, 3)]);

        let none = repo
            .list_follower_relations(UserId(2), Pagination::first())
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_pagination_is_passed_through() {
        let edges: Vec<(i64, i64)> = (10..15).map(|follower| (follower, 1)).collect();
        let (repo, _) = create_repo(MockRelationDao::with_edges(&edges));

        let second_page = repo
            .list_followee_relations(UserId(1), Pagination::new(1, 2))
            .await
            .unwrap();
        assert_eq!(second_page, vec![edge(12, 1), edge(13, 1)]);

        let past_end = repo
            .list_followee_relations(UserId(1), Pagination::new(5, 2))
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_follow_then_cancel_leaves_no_edge() {
        let (repo, dao) = create_repo(MockRelationDao::default());

        repo.follow_user(UserId(1), UserId(2)).await.unwrap();
        assert_eq!(repo.get_follower_count(UserId(2)).await.unwrap(), 1);

        repo.cancel_follow_user(UserId(1), UserId(2)).await.unwrap();
        assert!(dao.rows.lock().unwrap().is_empty());
        assert_eq!(repo.get_follower_count(UserId(2)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_follow_twice_keeps_single_edge() {
        let (repo, _) = create_repo(MockRelationDao::default());

        repo.follow_user(UserId(1), UserId(2)).await.unwrap();
        repo.follow_user(UserId(1), UserId(2)).await.unwrap();
        assert_eq!(repo.get_follower_count(UserId(2)).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_self_follow_error_is_propagated() {
        let (repo, _) = create_repo(MockRelationDao::default());

        let err = repo.follow_user(UserId(5), UserId(5)).await.unwrap_err();
        assert!(matches!(err, LinkMeError::Validation(_)));
    }

    #[tokio::test]
    async fn test_each_count_issues_its_own_lookup() {
        let (repo, dao) = create_repo(MockRelationDao::with_edges(&[(1, 2)]));

        repo.get_follower_count(UserId(2)).await.unwrap();
        repo.get_followee_count(UserId(2)).await.unwrap();
        assert_eq!(dao.count_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated_unchanged() {
        let repo = RelationRepositoryImpl::new(Arc::new(FailingRelationDao));

        let err = repo
            .list_follower_relations(UserId(1), Pagination::first())
            .await
            .unwrap_err();
        assert!(matches!(err, LinkMeError::Database(ref m) if m == "connection refused"));

        assert!(repo
            .list_followee_relations(UserId(1), Pagination::first())
            .await
            .is_err());
        assert!(repo.follow_user(UserId(1), UserId(2)).await.is_err());
        assert!(repo
            .cancel_follow_user(UserId(1), UserId(2))
            .await
            .is_err());
        assert!(repo.get_follower_count(UserId(1)).await.is_err());
        assert!(repo.get_followee_count(UserId(1)).await.is_err());
    }

    #[test]
    fn test_to_domain_relation_slice_is_one_to_one() {
        let rows = vec![
            RelationRow {
                id: 7,
                follower_id: 3,
                followee_id: 9,
                created_at: Utc::now(),
            },
            RelationRow {
                id: 8,
                follower_id: 4,
                followee_id: 9,
                created_at: Utc::now(),
            },
        ];

        let relations = RelationRepositoryImpl::to_domain_relation_slice(rows);
        assert_eq!(relations, vec![edge(3, 9), edge(4, 9)]);
    }
}
