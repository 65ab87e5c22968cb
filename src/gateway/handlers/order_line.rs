//! REST handlers for the OrderLine resource.
//!
//! Identifier validation happens here, in order, before any store
//! mutation: body id missing, body id disagreeing with the path id,
//! path id absent from storage. Entity-field constraints are already
//! enforced by [`ValidatedJson`] when these handlers run.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::super::alerts::{
    entity_creation_alert, entity_deletion_alert, entity_update_alert,
};
use super::super::error::{ResourceError, error_keys};
use super::super::extract::ValidatedJson;
use super::super::state::AppState;
use crate::models::{OrderLine, OrderLinePatch};
use crate::store::StoreError;

const ENTITY_NAME: &str = "orderLine";

/// Query parameters for the collection listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Hint to the store to populate relations eagerly.
    #[serde(default = "default_eagerload")]
    #[param(default = true)]
    pub eagerload: bool,
}

fn default_eagerload() -> bool {
    true
}

/// Create a new orderLine.
///
/// POST /api/order-lines
#[utoipa::path(
    post,
    path = "/api/order-lines",
    request_body = OrderLine,
    responses(
        (status = 201, description = "OrderLine created", body = OrderLine),
        (status = 400, description = "OrderLine already has an id, or entity constraints violated")
    ),
    tag = "OrderLine"
)]
pub async fn create_order_line(
    State(state): State<Arc<AppState>>,
    ValidatedJson(order_line): ValidatedJson<OrderLine>,
) -> Result<(StatusCode, HeaderMap, Json<OrderLine>), ResourceError> {
    tracing::debug!("REST request to save OrderLine : {:?}", order_line);
    if order_line.id.is_some() {
        return Err(ResourceError::bad_request(
            ENTITY_NAME,
            error_keys::ID_EXISTS,
            "A new orderLine cannot already have an ID",
        ));
    }

    let saved = state.store.save(order_line).await?;
    let id = saved.id.ok_or(ResourceError::Store(StoreError::MissingId))?;

    let mut headers = entity_creation_alert(ENTITY_NAME, id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/order-lines/{id}")) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(saved)))
}

/// Full-replace update of an existing orderLine.
///
/// PUT /api/order-lines/{id}
#[utoipa::path(
    put,
    path = "/api/order-lines/{id}",
    request_body = OrderLine,
    params(("id" = i64, Path, description = "OrderLine id")),
    responses(
        (status = 200, description = "OrderLine updated", body = OrderLine),
        (status = 400, description = "Body id missing, mismatched, or unknown")
    ),
    tag = "OrderLine"
)]
pub async fn update_order_line(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidatedJson(order_line): ValidatedJson<OrderLine>,
) -> Result<(HeaderMap, Json<OrderLine>), ResourceError> {
    tracing::debug!("REST request to update OrderLine : {}, {:?}", id, order_line);
    validate_identifier(&state, id, order_line.id).await?;

    let updated = state.store.update(order_line).await?;
    Ok((entity_update_alert(ENTITY_NAME, id), Json(updated)))
}

/// Partial update of an existing orderLine: only supplied fields
/// overwrite stored values.
///
/// PATCH /api/order-lines/{id}
#[utoipa::path(
    patch,
    path = "/api/order-lines/{id}",
    request_body = OrderLinePatch,
    params(("id" = i64, Path, description = "OrderLine id")),
    responses(
        (status = 200, description = "OrderLine patched", body = OrderLine),
        (status = 400, description = "Body id missing or mismatched"),
        (status = 404, description = "OrderLine vanished before the merge")
    ),
    tag = "OrderLine"
)]
pub async fn partial_update_order_line(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<OrderLinePatch>,
) -> Result<(HeaderMap, Json<OrderLine>), ResourceError> {
    tracing::debug!(
        "REST request to partial update OrderLine partially : {}, {:?}",
        id,
        patch
    );
    validate_identifier(&state, id, patch.id).await?;

    // The entity can vanish between the existence check and the merge;
    // the store reports that as an absent result.
    match state.store.partial_update(patch).await? {
        Some(merged) => Ok((entity_update_alert(ENTITY_NAME, id), Json(merged))),
        None => Err(ResourceError::NotFound),
    }
}

/// List all orderLines.
///
/// GET /api/order-lines
#[utoipa::path(
    get,
    path = "/api/order-lines",
    params(ListParams),
    responses(
        (status = 200, description = "All orderLines", body = [OrderLine])
    ),
    tag = "OrderLine"
)]
pub async fn get_all_order_lines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<OrderLine>>, ResourceError> {
    tracing::debug!("REST request to get all OrderLines");
    let all = state.store.find_all(params.eagerload).await?;
    Ok(Json(all))
}

/// Get one orderLine by id.
///
/// GET /api/order-lines/{id}
#[utoipa::path(
    get,
    path = "/api/order-lines/{id}",
    params(("id" = i64, Path, description = "OrderLine id")),
    responses(
        (status = 200, description = "The orderLine", body = OrderLine),
        (status = 404, description = "No such orderLine")
    ),
    tag = "OrderLine"
)]
pub async fn get_order_line(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderLine>, ResourceError> {
    tracing::debug!("REST request to get OrderLine : {}", id);
    match state.store.find_one(id).await? {
        Some(order_line) => Ok(Json(order_line)),
        None => Err(ResourceError::NotFound),
    }
}

/// Delete an orderLine. Responds 204 whether or not the id existed.
///
/// DELETE /api/order-lines/{id}
#[utoipa::path(
    delete,
    path = "/api/order-lines/{id}",
    params(("id" = i64, Path, description = "OrderLine id")),
    responses(
        (status = 204, description = "OrderLine deleted")
    ),
    tag = "OrderLine"
)]
pub async fn delete_order_line(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ResourceError> {
    tracing::debug!("REST request to delete OrderLine : {}", id);
    state.store.delete(id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        entity_deletion_alert(ENTITY_NAME, id),
    ))
}

/// Three-stage identifier validation shared by update and
/// partial-update. First applicable failure wins.
async fn validate_identifier(
    state: &AppState,
    path_id: i64,
    body_id: Option<i64>,
) -> Result<(), ResourceError> {
    let body_id = body_id.ok_or_else(|| {
        ResourceError::bad_request(ENTITY_NAME, error_keys::ID_NULL, "Invalid id")
    })?;
    if body_id != path_id {
        return Err(ResourceError::bad_request(
            ENTITY_NAME,
            error_keys::ID_INVALID,
            "Invalid ID",
        ));
    }
    if !state.store.exists_by_id(path_id).await? {
        return Err(ResourceError::bad_request(
            ENTITY_NAME,
            error_keys::ID_NOT_FOUND,
            "Entity not found",
        ));
    }
    Ok(())
}
