#[cfg(test)]
mod tests {
    use crate::logic::{is_admin, promote_to_admin, RoleError};
    use medibook_common::models::{Role, User};
    use medibook_db::{MemoryUserRepository, UserRepository};

    fn user(email: &str, role: Role) -> User {
        User {
            id: None,
            email: email.to_string(),
            name: "Test User".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn absent_and_unpromoted_users_are_not_admins() {
        let users = MemoryUserRepository::new();
        users.insert(user("a@x.com", Role::None)).await.unwrap();

        assert!(!is_admin(&users, "a@x.com").await.unwrap());
        assert!(!is_admin(&users, "nobody@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn promotion_by_an_admin_flips_the_role() {
        let users = MemoryUserRepository::new();
        users.insert(user("root@x.com", Role::Admin)).await.unwrap();
        let target = users.insert(user("a@x.com", Role::None)).await.unwrap();

        assert!(!is_admin(&users, "a@x.com").await.unwrap());
        promote_to_admin(&users, "root@x.com", target.id.unwrap())
            .await
            .unwrap();
        assert!(is_admin(&users, "a@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn non_admin_and_unknown_actors_are_forbidden() {
        let users = MemoryUserRepository::new();
        users.insert(user("peer@x.com", Role::None)).await.unwrap();
        let target = users.insert(user("a@x.com", Role::None)).await.unwrap();
        let target_id = target.id.unwrap();

        let err = promote_to_admin(&users, "peer@x.com", target_id)
            .await
            .unwrap_err();
        assert!(matches!(err, RoleError::Forbidden));

        let err = promote_to_admin(&users, "ghost@x.com", target_id)
            .await
            .unwrap_err();
        assert!(matches!(err, RoleError::Forbidden));

        assert!(!is_admin(&users, "a@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn promotion_never_creates_the_target() {
        let users = MemoryUserRepository::new();
        users.insert(user("root@x.com", Role::Admin)).await.unwrap();

        let err = promote_to_admin(&users, "root@x.com", 999).await.unwrap_err();
        assert!(matches!(err, RoleError::TargetNotFound));
        assert_eq!(users.find_all().await.unwrap().len(), 1);
    }
}
