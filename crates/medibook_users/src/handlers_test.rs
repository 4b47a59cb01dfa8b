#[cfg(test)]
mod tests {
    use crate::handlers::{
        list_users_handler, promote_admin_handler, register_user_handler, UsersState,
    };
    use crate::models::RegisterUserRequest;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use medibook_auth::Claims;
    use medibook_common::models::{Role, User};
    use medibook_config::AppConfig;
    use medibook_db::{MemoryUserRepository, UserRepository};
    use std::sync::Arc;

    async fn test_state() -> Arc<UsersState> {
        let users = Arc::new(MemoryUserRepository::new());
        users
            .insert(User {
                id: None,
                email: "root@x.com".to_string(),
                name: "Root".to_string(),
                role: Role::Admin,
            })
            .await
            .unwrap();

        Arc::new(UsersState {
            config: Arc::new(AppConfig::default()),
            users,
        })
    }

    fn claims(email: &str) -> Claims {
        Claims {
            email: email.to_string(),
            exp: usize::MAX,
            iat: 0,
        }
    }

    #[tokio::test]
    async fn registering_a_taken_email_is_a_soft_conflict() {
        let state = test_state().await;

        let Json(first) = register_user_handler(
            State(Arc::clone(&state)),
            Json(RegisterUserRequest {
                email: "a@x.com".to_string(),
                name: "Ada".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(first.success);
        assert!(first.user_id.is_some());

        let Json(second) = register_user_handler(
            State(state),
            Json(RegisterUserRequest {
                email: "a@x.com".to_string(),
                name: "Ada Again".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(!second.success);
        assert!(second.user_id.is_none());
    }

    #[tokio::test]
    async fn empty_registration_fields_are_a_bad_request() {
        let state = test_state().await;

        let (status, _) = register_user_handler(
            State(state),
            Json(RegisterUserRequest {
                email: String::new(),
                name: "Ada".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn listing_users_is_admin_only() {
        let state = test_state().await;
        register_user_handler(
            State(Arc::clone(&state)),
            Json(RegisterUserRequest {
                email: "a@x.com".to_string(),
                name: "Ada".to_string(),
            }),
        )
        .await
        .unwrap();

        let (status, _) =
            list_users_handler(State(Arc::clone(&state)), Extension(claims("a@x.com")))
                .await
                .unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);

        let Json(users) = list_users_handler(State(state), Extension(claims("root@x.com")))
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn promotion_handler_maps_gate_failures_to_statuses() {
        let state = test_state().await;
        let Json(registered) = register_user_handler(
            State(Arc::clone(&state)),
            Json(RegisterUserRequest {
                email: "a@x.com".to_string(),
                name: "Ada".to_string(),
            }),
        )
        .await
        .unwrap();
        let target_id = registered.user_id.unwrap();

        let (status, _) = promote_admin_handler(
            State(Arc::clone(&state)),
            Extension(claims("a@x.com")),
            Path(target_id),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = promote_admin_handler(
            State(Arc::clone(&state)),
            Extension(claims("root@x.com")),
            Path(999),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let Json(outcome) = promote_admin_handler(
            State(Arc::clone(&state)),
            Extension(claims("root@x.com")),
            Path(target_id),
        )
        .await
        .unwrap();
        assert!(outcome.success);

        let Json(users) = list_users_handler(State(state), Extension(claims("a@x.com")))
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
    }
}
