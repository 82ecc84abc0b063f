//! # HTTP Server
//!
//! Axum glue over the vehicle resource operations. Handlers are thin: they
//! parse the request shape, call the service, and let `ApiError`'s
//! `IntoResponse` impl render failures.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::observe::LogSink;
use crate::pagination::{PageRequest, UrlTemplate};
use crate::store::DocumentStore;

use super::errors::ApiError;
use super::response::{DataEnvelope, ListEnvelope, MessageEnvelope};
use super::service::{CreateOutcome, VehicleService};

/// REST API server over one store.
pub struct ApiServer<S: DocumentStore> {
    config: ServerConfig,
    service: Arc<VehicleService<S>>,
}

/// Shared state type
type ServiceState<S> = Arc<VehicleService<S>>;

impl<S: DocumentStore + 'static> ApiServer<S> {
    pub fn new(config: ServerConfig, store: Arc<S>, log: LogSink) -> Self {
        let template = UrlTemplate::new(config.vehicles_url());
        let service = Arc::new(VehicleService::new(store, template, log));
        Self { config, service }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route(
                "/api/vehicles",
                get(list_handler::<S>).post(create_handler::<S>),
            )
            .route(
                "/api/vehicle/:vin",
                get(get_handler::<S>).delete(delete_handler::<S>),
            )
            .layer(cors)
            .with_state(Arc::clone(&self.service))
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        axum::serve(listener, self.router()).await
    }
}

/// `GET /api/vehicles?count={n}&startIndex={i}`
///
/// Pagination parameters are parsed forgivingly; this route answers 200
/// unconditionally.
async fn list_handler<S: DocumentStore + 'static>(
    State(service): State<ServiceState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ListEnvelope>, ApiError> {
    let page = PageRequest::from_query(&query);
    Ok(Json(service.list(&page)?))
}

/// `POST /api/vehicles`
///
/// A duplicate VIN answers 200 with `{success:false, message}`; only
/// validation and store failures reach an error status.
async fn create_handler<S: DocumentStore + 'static>(
    State(service): State<ServiceState<S>>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match service.create(body)? {
        CreateOutcome::Created(doc) => Ok(Json(DataEnvelope::ok(doc)).into_response()),
        CreateOutcome::DuplicateVin => {
            Ok(Json(MessageEnvelope::failure("VIN already exists")).into_response())
        }
    }
}

/// `GET /api/vehicle/{vin}`
async fn get_handler<S: DocumentStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(vin): Path<String>,
) -> Result<Json<DataEnvelope<Vec<Value>>>, ApiError> {
    Ok(Json(DataEnvelope::ok(service.get(&vin)?)))
}

/// `DELETE /api/vehicle/{vin}` — 204 with an empty body on success.
async fn delete_handler<S: DocumentStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(vin): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete(&vin)?;
    Ok(StatusCode::NO_CONTENT)
}
