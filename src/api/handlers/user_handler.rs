//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{User, UserPayload};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(replace_user).delete(delete_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Field name to violation message, e.g. {\"email\": \"Invalid email format\"}"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Json<User>> {
    let user = state.user_service.create_user(User::from(payload)).await?;
    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User replaced", body = User),
        (status = 400, description = "Field name to violation message"),
        (status = 404, description = "User not found")
    )
)]
pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .replace_user(id, User::from(payload))
        .await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::api::create_router;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;

    fn app(repo: MockUserRepository) -> Router {
        create_router(AppState::from_repository(Arc::new(repo)))
    }

    async fn post_user(app: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::post("/api/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_input_saves_exactly_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|user| Ok(user.with_id(1)));

        let (status, body) = post_user(
            app(repo),
            json!({"name": "John Doe", "email": "johndoe@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "name": "John Doe", "email": "johndoe@example.com"}));
    }

    #[tokio::test]
    async fn test_invalid_input_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().times(0);

        let (status, body) = post_user(app(repo), json!({"name": "", "email": "notanemail"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"name": "Name is Required", "email": "Invalid email format"}));
    }

    #[tokio::test]
    async fn test_storage_failure_is_generic_server_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().times(1).returning(|_| {
            Err(AppError::Database(sea_orm::DbErr::Custom(
                "connection reset by peer".into(),
            )))
        });

        let (status, body) = post_user(
            app(repo),
            json!({"name": "John Doe", "email": "johndoe@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        assert_eq!(body["error"]["message"], "A database error occurred");
        assert!(!body.to_string().contains("connection reset"));
    }
}
