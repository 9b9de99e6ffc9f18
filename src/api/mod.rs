//! HTTP API module for the bill splitter.
//!
//! This module provides the REST API endpoints for splitting bills, either
//! statelessly from a request body or from events kept in an
//! [`EventStore`](crate::store::EventStore).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EventRequest, ItemRequest, NameRequest, PersonRequest, RatesQuery, SplitRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
