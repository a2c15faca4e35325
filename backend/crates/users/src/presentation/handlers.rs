//! HTTP Handlers
//!
//! Guards have already run when these are called: the body is validated
//! and sanitized, and the caller's [`Claims`] are in the extensions.

use axum::Extension;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use kernel::error::app_error::AppError;
use kernel::response::ApiResponse;
use platform::token::Claims;
use std::sync::Arc;

use crate::application::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersInput,
    ListUsersOutput, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::entity::{User, UserId};
use crate::domain::repository::UserRepository;
use crate::error::{UsersError, UsersResult};
use crate::presentation::dto::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};

pub const MSG_LISTED: &str = "Users retrieved successfully";
pub const MSG_RETRIEVED: &str = "User retrieved successfully";
pub const MSG_CREATED: &str = "Resource created successfully";
pub const MSG_UPDATED: &str = "Resource updated successfully";
pub const MSG_DELETED: &str = "Resource deleted successfully";

/// Shared state for users handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Path ids are validated as integers; a negative one cannot name a user.
fn user_id(raw: i64) -> UsersResult<UserId> {
    u64::try_from(raw)
        .map(UserId::from_raw)
        .map_err(|_| UsersError::UserNotFound)
}

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
    Extension(claims): Extension<Claims>,
    WithRejection(Query(query), _): WithRejection<Query<ListUsersQuery>, AppError>,
) -> UsersResult<ApiResponse<ListUsersOutput>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    tracing::debug!(requested_by = claims.id, "Listing users");

    let use_case = ListUsersUseCase::new(state.repo.clone());

    let output = use_case
        .execute(ListUsersInput {
            page: query.page,
            limit: query.limit,
            role: query.role,
        })
        .await?;

    Ok(ApiResponse::ok(output, MSG_LISTED))
}

/// GET /api/users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> UsersResult<ApiResponse<User>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.repo.clone());
    let user = use_case.execute(user_id(id)?).await?;

    Ok(ApiResponse::ok(user, MSG_RETRIEVED))
}

/// POST /api/users (admin)
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    Extension(claims): Extension<Claims>,
    WithRejection(Json(req), _): WithRejection<Json<CreateUserRequest>, AppError>,
) -> UsersResult<ApiResponse<User>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateUserUseCase::new(state.repo.clone());

    let user = use_case
        .execute(CreateUserInput {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;

    tracing::debug!(created_by = claims.id, user_id = %user.id, "Admin created user");

    Ok(ApiResponse::created(user, MSG_CREATED))
}

/// PUT /api/users/{id}
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateUserRequest>, AppError>,
) -> UsersResult<ApiResponse<User>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone());

    let user = use_case
        .execute(
            user_id(id)?,
            UpdateUserInput {
                name: req.name,
                email: req.email,
                role: req.role,
            },
        )
        .await?;

    Ok(ApiResponse::ok(user, MSG_UPDATED))
}

/// DELETE /api/users/{id} (admin)
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> UsersResult<ApiResponse<User>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone());
    let user = use_case.execute(user_id(id)?).await?;

    Ok(ApiResponse::ok(user, MSG_DELETED))
}
