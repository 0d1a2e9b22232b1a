use actix_web::{web, HttpResponse, Responder};

use crate::config::ServerConfig;
use crate::convert::{to_problem_instance, to_solve_response};
use crate::domain::sample;
use crate::domain::solver::Solver;
use crate::domain::solvers::VertexSolver;
use crate::error::ApiError;
use crate::models::{ErrorResponse, SolveRequest};

/// Shared, read-only application state.
pub struct AppState {
    pub solver: Box<dyn Solver>,
    pub grid_size: usize,
    pub max_grid_size: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            solver: Box::new(VertexSolver::new()),
            grid_size: config.grid_size,
            max_grid_size: config.max_grid_size,
        }
    }
}

/// JSON extractor config: body size limit and `{"error": ...}` on bad payloads.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse { error: err_string }),
            )
            .into()
        })
}

/// Register every route on an app or scope.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/solve", web::post().to(solve))
        .route("/defaults", web::get().to(defaults))
        .route("/health", web::get().to(health_check))
        .route("/docs", web::get().to(docs));
}

/// POST /solve
pub async fn solve(
    req: web::Json<SolveRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let grid_size = req.grid_size.unwrap_or(state.grid_size);
    if grid_size > state.max_grid_size {
        return Err(ApiError::InvalidRequest(format!(
            "grid_size {} exceeds the maximum of {}",
            grid_size, state.max_grid_size,
        )));
    }

    let instance = to_problem_instance(&req)?;
    let solution = state.solver.solve(&instance)?;
    let region = sample(&instance, grid_size)?;

    log::info!(
        "{} solved production mix: quantities={:?} objective={}",
        state.solver.name(),
        solution.quantities,
        solution.objective_value,
    );

    Ok(HttpResponse::Ok().json(to_solve_response(&req, &instance, &solution, &region)))
}

/// GET /defaults
pub async fn defaults() -> impl Responder {
    HttpResponse::Ok().json(SolveRequest::default())
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(docs_html)
}

/// GET / - Redirect to docs
pub async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}
