pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, put},
    Router,
};
use std::{future::Future, net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::DatabaseConnection;

/// Application state shared across handlers
pub struct AppState {
    pub db: DatabaseConnection,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS API",
        version = "0.1.0",
        description = "REST API for departments, jobs, employees and user accounts",
        contact(
            name = "HRMS Team",
            email = "team@hrms.dev"
        )
    ),
    paths(
        handlers::system::root,
        handlers::system::health_check,
        handlers::departments::create_department,
        handlers::departments::list_departments,
        handlers::departments::get_department,
        handlers::departments::update_department,
        handlers::departments::delete_department,
        handlers::jobs::create_job,
        handlers::jobs::list_jobs,
        handlers::jobs::get_job,
        handlers::jobs::update_job,
        handlers::jobs::delete_job,
        handlers::employees::create_employee,
        handlers::employees::list_employees,
        handlers::employees::get_employee,
        handlers::employees::promote_employee,
        handlers::employees::archive_employee,
        handlers::employees::delete_employee,
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::change_password,
        handlers::users::delete_user,
    ),
    components(
        schemas(
            models::Department,
            models::CreateDepartmentRequest,
            models::UpdateDepartmentRequest,
            models::Job,
            models::CreateJobRequest,
            models::UpdateJobRequest,
            models::EmployeeStatus,
            models::Employee,
            models::CreateEmployeeRequest,
            models::PromoteEmployeeRequest,
            models::EmployeeListQuery,
            models::User,
            models::CreateUserRequest,
            models::UpdateUserRequest,
            models::ChangePasswordRequest,
            models::MessageResponse,
            models::HealthResponse,
            models::ErrorResponse,
        )
    ),
    tags(
        (name = "departments", description = "Department management endpoints"),
        (name = "jobs", description = "Job management endpoints"),
        (name = "employees", description = "Employee records and promotion workflow"),
        (name = "users", description = "User account endpoints"),
        (name = "system", description = "System health and info endpoints")
    )
)]
struct ApiDoc;

/// API server configuration
pub struct ApiServerConfig {
    /// Address to bind the API server
    pub bind_addr: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
    /// Allowed CORS origins (if None, any localhost origin is allowed)
    pub cors_origins: Option<Vec<String>>,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5555)),
            enable_cors: true,
            cors_origins: None,
        }
    }
}

/// API Server
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiServerConfig, db: DatabaseConnection) -> Self {
        let state = Arc::new(AppState { db });

        Self { config, state }
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let api_doc = ApiDoc::openapi();

        let api_router = Router::new()
            .route("/", get(handlers::system::root))
            .route("/health", get(handlers::system::health_check))
            .route(
                "/departments",
                get(handlers::departments::list_departments)
                    .post(handlers::departments::create_department),
            )
            .route(
                "/departments/{id}",
                get(handlers::departments::get_department)
                    .put(handlers::departments::update_department)
                    .delete(handlers::departments::delete_department),
            )
            .route(
                "/jobs",
                get(handlers::jobs::list_jobs).post(handlers::jobs::create_job),
            )
            .route(
                "/jobs/{id}",
                get(handlers::jobs::get_job)
                    .put(handlers::jobs::update_job)
                    .delete(handlers::jobs::delete_job),
            )
            .route(
                "/employees",
                get(handlers::employees::list_employees)
                    .post(handlers::employees::create_employee),
            )
            .route(
                "/employees/{id}",
                get(handlers::employees::get_employee).delete(handlers::employees::delete_employee),
            )
            .route(
                "/employees/{id}/promote",
                put(handlers::employees::promote_employee),
            )
            .route(
                "/employees/{id}/archive",
                put(handlers::employees::archive_employee),
            )
            .route(
                "/users",
                get(handlers::users::list_users).post(handlers::users::create_user),
            )
            .route(
                "/users/{id}",
                get(handlers::users::get_user)
                    .put(handlers::users::update_user)
                    .delete(handlers::users::delete_user),
            )
            .route("/users/{id}/password", put(handlers::users::change_password))
            .with_state(self.state.clone());

        // SwaggerUi serves the OpenAPI document at /api/openapi.json
        let router = Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", api_doc))
            .merge(api_router);

        let mut router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            router = router.layer(self.cors_layer());
        }

        router
    }

    fn cors_layer(&self) -> CorsLayer {
        let allow_origin = match &self.config.cors_origins {
            Some(origins) => AllowOrigin::list(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
            ),
            None => AllowOrigin::predicate(|origin: &HeaderValue, _| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str.starts_with("http://localhost:")
                    || origin_str.starts_with("http://127.0.0.1:")
                    || origin_str.starts_with("https://localhost:")
                    || origin_str.starts_with("https://127.0.0.1:")
            }),
        };

        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(allow_origin)
    }

    /// Start the API server and stop gracefully once `shutdown` resolves
    pub async fn start<F>(self, shutdown: F) -> Result<(), anyhow::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        info!("Starting API server on {}", self.config.bind_addr);
        info!(
            "OpenAPI document: http://{}/api/openapi.json",
            self.config.bind_addr
        );
        info!("Swagger UI: http://{}/swagger-ui", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        info!("API server stopped");
        Ok(())
    }
}
