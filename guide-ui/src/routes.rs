//! HTTP route handlers for the comparison page and its JSON API.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use guide::catalog::CasinoRecord;
use guide::core::filter::featured;
use guide::io::render::current_year;
use guide::view::{ListingQuery, ListingRequest, Project, build_listing};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::state::AppState;

/// Page, redirect and API routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page))
        .route("/visit/{id}", get(visit))
        .nest("/api", api_router())
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/casinos", get(list_casinos))
        .route("/featured", get(list_featured))
}

async fn health() -> &'static str {
    "ok"
}

/// GET / - the rendered comparison page for the query's sort and filters.
async fn page(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, StatusCode> {
    let project = load(&state)?;
    let request = resolve(query, &project)?;
    let listing = build_listing(&project.catalog.casinos, &request, &project.config);
    let html = state
        .renderer
        .render(&listing, &project.config, current_year())
        .map_err(|err| {
            error!(error = %format!("{:#}", err), "render failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Html(html))
}

#[derive(Serialize)]
struct CasinosResponse {
    sort: &'static str,
    dir: &'static str,
    casinos: Vec<CasinoRecord>,
}

/// GET /api/casinos - filtered casinos ranked by the query's sort state.
async fn list_casinos(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<CasinosResponse>, StatusCode> {
    let project = load(&state)?;
    let request = resolve(query, &project)?;
    let listing = build_listing(&project.catalog.casinos, &request, &project.config);
    Ok(Json(CasinosResponse {
        sort: request.sort.field.as_str(),
        dir: request.sort.direction.as_str(),
        casinos: listing.table,
    }))
}

/// GET /api/featured - featured casinos in catalog order.
async fn list_featured(
    State(state): State<AppState>,
) -> Result<Json<Vec<CasinoRecord>>, StatusCode> {
    let project = load(&state)?;
    Ok(Json(featured(
        &project.catalog.casinos,
        project.config.featured_limit,
    )))
}

/// GET /visit/{id} - temporary redirect to the stored affiliate link.
async fn visit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, StatusCode> {
    let project = load(&state)?;
    let Some(record) = project
        .catalog
        .casinos
        .iter()
        .find(|record| record.id == id)
    else {
        return Err(StatusCode::NOT_FOUND);
    };
    let location = HeaderValue::from_str(&record.affiliate_link).map_err(|_| {
        error!(id = %record.id, "affiliate link is not a valid header value");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    info!(id = %record.id, name = %record.name, "affiliate click");
    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

fn load(state: &AppState) -> Result<Project, StatusCode> {
    state.load().map_err(|err| {
        error!(error = %format!("{:#}", err), "load project failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn resolve(query: ListingQuery, project: &Project) -> Result<ListingRequest, StatusCode> {
    query.into_request(&project.config).map_err(|reason| {
        warn!(%reason, "rejected listing query");
        StatusCode::BAD_REQUEST
    })
}
