//! HTTP request handlers for the bill splitter API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::split_bill;
use crate::models::{EventId, ItemId, PersonId};
use crate::store::NewItem;

use super::request::{EventRequest, NameRequest, RatesQuery, SplitRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/split", post(split_handler))
        .route("/events", post(create_event).get(list_events))
        .route(
            "/events/:event_id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/:event_id/people", post(add_person))
        .route(
            "/events/:event_id/people/:person_id",
            put(rename_person).delete(remove_person),
        )
        .route("/events/:event_id/items", post(add_item))
        .route(
            "/events/:event_id/items/:item_id",
            put(update_item).delete(remove_item),
        )
        .route("/events/:event_id/split", get(event_split_handler))
        .with_state(state)
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_json<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Logs an engine error for the request and converts it.
fn reject(correlation_id: Uuid, err: crate::error::EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for POST /split.
///
/// Splits a bill described entirely by the request body. Nothing is stored.
/// People and items are checked as strictly as the event store checks them.
async fn split_handler(
    State(state): State<AppState>,
    payload: Result<Json<SplitRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing split request");

    let request = parse_json(payload, correlation_id)?;
    let (tax_rate, tip_rate) = state
        .config()
        .resolve_rates(request.tax_rate, request.tip_rate)
        .map_err(|err| reject(correlation_id, err))?;

    let (people, items) = request
        .into_bill()
        .map_err(|err| reject(correlation_id, err))?;

    let start_time = Instant::now();
    let split = split_bill(&people, &items, tax_rate, tip_rate);
    info!(
        correlation_id = %correlation_id,
        people = people.len(),
        items = items.len(),
        total = %split.summary.total,
        warnings = split.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Split completed successfully"
    );

    Ok(Json(split))
}

/// Handler for GET /events/:event_id/split.
///
/// Splits the stored event's bill using rates from the query string, or the
/// configured defaults.
async fn event_split_handler(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
    query: Result<Query<RatesQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, event_id = %event_id, "Processing event split");

    let Query(rates) = query.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
    })?;

    let (tax_rate, tip_rate) = state
        .config()
        .resolve_rates(rates.tax_rate, rates.tip_rate)
        .map_err(|err| reject(correlation_id, err))?;
    let event = state
        .store()
        .get_event(event_id)
        .map_err(|err| reject(correlation_id, err))?;

    let split = split_bill(&event.people, &event.items, tax_rate, tip_rate);
    info!(
        correlation_id = %correlation_id,
        event_id = %event_id,
        total = %split.summary.total,
        warnings = split.warnings.len(),
        "Event split completed successfully"
    );

    Ok(Json(split))
}

async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    let event = state
        .store()
        .create_event(&request.name, request.date)
        .map_err(|err| reject(correlation_id, err))?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().list_events())
}

async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
) -> ApiResult<impl IntoResponse> {
    let event = state
        .store()
        .get_event(event_id)
        .map_err(|err| reject(Uuid::new_v4(), err))?;
    Ok(Json(event))
}

async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    let event = state
        .store()
        .update_event(event_id, &request.name, request.date)
        .map_err(|err| reject(correlation_id, err))?;
    Ok(Json(event))
}

async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
) -> ApiResult<StatusCode> {
    state
        .store()
        .delete_event(event_id)
        .map_err(|err| reject(Uuid::new_v4(), err))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_person(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    let person = state
        .store()
        .add_person(event_id, &request.name)
        .map_err(|err| reject(correlation_id, err))?;
    Ok((StatusCode::CREATED, Json(person)))
}

async fn rename_person(
    State(state): State<AppState>,
    Path((event_id, person_id)): Path<(EventId, PersonId)>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    let person = state
        .store()
        .rename_person(event_id, person_id, &request.name)
        .map_err(|err| reject(correlation_id, err))?;
    Ok(Json(person))
}

async fn remove_person(
    State(state): State<AppState>,
    Path((event_id, person_id)): Path<(EventId, PersonId)>,
) -> ApiResult<StatusCode> {
    state
        .store()
        .remove_person(event_id, person_id)
        .map_err(|err| reject(Uuid::new_v4(), err))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_item(
    State(state): State<AppState>,
    Path(event_id): Path<EventId>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    let item = state
        .store()
        .add_item(event_id, request)
        .map_err(|err| reject(correlation_id, err))?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(state): State<AppState>,
    Path((event_id, item_id)): Path<(EventId, ItemId)>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;
    let item = state
        .store()
        .update_item(event_id, item_id, request)
        .map_err(|err| reject(correlation_id, err))?;
    Ok(Json(item))
}

async fn remove_item(
    State(state): State<AppState>,
    Path((event_id, item_id)): Path<(EventId, ItemId)>,
) -> ApiResult<StatusCode> {
    state
        .store()
        .remove_item(event_id, item_id)
        .map_err(|err| reject(Uuid::new_v4(), err))?;
    Ok(StatusCode::NO_CONTENT)
}
