//! HTTP boundary for the car registry.

use crate::config::RegistryConfig;
use crate::error::{MessageBody, RegistryError, Result};
use crate::model::{Car, CarFields};
use crate::storage::{create_store, CarStore};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::Path as FsPath;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

const MAX_BODY_BYTES: usize = 64 * 1024;

type SharedStore = Arc<dyn CarStore>;

#[derive(Clone)]
struct AppState {
    store: SharedStore,
}

/// The car registry HTTP server.
///
/// Serves a JSON CRUD API over an in-memory collection of car listings.
/// The server runs on a background task from the moment it is created.
pub struct CarRegistryServer {
    addr: SocketAddr,
    store: SharedStore,
    handle: JoinHandle<Result<()>>,
}

impl CarRegistryServer {
    /// Creates and starts a new server with the given configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use car_registry::{CarRegistryServer, RegistryConfig};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = RegistryConfig::sample();
    /// let server = CarRegistryServer::new(config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: RegistryConfig) -> Result<Self> {
        let store = create_store(config.inventory);
        let app = router(store.clone(), config.docs_dir.as_deref());

        let listener = TcpListener::bind(config.bind_addr()).await?;
        let addr = listener.local_addr()?;

        info!("Car registry listening on {}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.map_err(|e| {
                error!("Server stopped: {}", e);
                RegistryError::from(e)
            })
        });

        Ok(Self {
            addr,
            store,
            handle,
        })
    }

    /// Returns the socket address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the base URL of the server.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use car_registry::{CarRegistryServer, RegistryConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let server = CarRegistryServer::new(RegistryConfig::sample()).await?;
    /// println!("Cars: {}/cars", server.url());
    /// # Ok(())
    /// # }
    /// ```
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns the port number the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Returns a handle to the store backing this server.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// Waits until the server task finishes.
    pub async fn wait(self) -> Result<()> {
        self.handle
            .await
            .map_err(|e| RegistryError::Internal(format!("server task failed: {}", e)))?
    }
}

/// Builds the router for the car API, plus the documentation routes when
/// `docs_dir` is given.
pub fn router(store: SharedStore, docs_dir: Option<&FsPath>) -> Router {
    let mut app = Router::new()
        .route(
            "/cars",
            get(list_cars).post(create_car).fallback(method_not_allowed),
        )
        .route(
            "/cars/",
            get(missing_id)
                .put(missing_id)
                .delete(missing_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/cars/{id}",
            get(get_car)
                .put(update_car)
                .delete(delete_car)
                .fallback(method_not_allowed),
        )
        .with_state(AppState { store });

    if let Some(dir) = docs_dir {
        debug!("Serving API docs from {}", dir.display());
        app = app
            .route_service("/swagger.json", ServeFile::new(dir.join("swagger.json")))
            .nest_service("/swagger-ui", ServeDir::new(dir.join("swagger-ui")));
    }

    app.layer(
        tower::ServiceBuilder::new()
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http()),
    )
}

/// Reads the request body as `CarFields`. A bare `null` body is treated
/// like an empty object.
fn decode_fields(body: std::result::Result<Bytes, BytesRejection>) -> Result<CarFields> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RegistryError::PayloadTooLarge(MAX_BODY_BYTES)
        } else {
            RegistryError::InvalidPayload(rejection.body_text())
        }
    })?;

    serde_json::from_slice::<Option<CarFields>>(&body)
        .map(Option::unwrap_or_default)
        .map_err(|e| RegistryError::InvalidPayload(e.to_string()))
}

async fn method_not_allowed() -> RegistryError {
    RegistryError::MethodNotAllowed
}

async fn missing_id() -> RegistryError {
    RegistryError::CarNotFound(String::new())
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>> {
    info!("Listing cars");

    let cars = state.store.list().await?;
    debug!("Returning {} cars", cars.len());
    Ok(Json(cars))
}

async fn get_car(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Car>> {
    info!("Getting car: {}", id);

    Ok(Json(state.store.get(&id).await?))
}

async fn create_car(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Car>)> {
    info!("Creating car");

    let fields = decode_fields(body)?;
    let car = state.store.create(fields).await?;

    info!("Created car: {}", car.id);
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<Car>> {
    info!("Updating car: {}", id);

    // Unknown ids report 404 even when the body is malformed.
    state.store.get(&id).await?;
    let fields = decode_fields(body)?;
    let car = state.store.update(&id, fields).await?;

    Ok(Json(car))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>> {
    info!("Deleting car: {}", id);

    let car = state.store.delete(&id).await?;

    info!("Deleted car: {}", car.id);
    let message = format!("Successfully deleted car with ID: {}", car.id);
    Ok(Json(MessageBody::new(message)))
}
