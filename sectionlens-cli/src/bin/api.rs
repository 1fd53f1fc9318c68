use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde::{Deserialize, Serialize};

use sectionlens::section_html;
use sectionlens_core::{
    Bounds, DetectionConfig, ElementRecord, Section, SectionDetector, SectionMetadata,
    SectionType,
};

#[derive(Parser, Debug)]
#[command(
    name = "sectionlens-api",
    about = "HTTP API that detects visual sections from rendered element geometry"
)]
struct ApiArgs {
    /// Address to bind the HTTP server to (host:port).
    #[arg(long, env = "SECTIONLENS_BIND", default_value = "127.0.0.1:8000")]
    bind: String,

    /// Path to custom config file (YAML format).
    #[arg(short, long)]
    config: Option<String>,
}

struct AppState {
    detector: SectionDetector,
}

#[derive(Debug, Deserialize)]
struct DetectionRequest {
    elements: Vec<ElementRecord>,
}

#[derive(Debug, Serialize)]
struct SectionResponse {
    id: usize,
    #[serde(rename = "type")]
    section_type: SectionType,
    content: String,
    bounds: Bounds,
    metadata: SectionMetadata,
    html: String,
}

#[derive(Debug, Serialize)]
struct DetectionResponse {
    sections: Vec<SectionResponse>,
    total_sections: usize,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ApiArgs::parse();

    let config = DetectionConfig::load_with_fallback(args.config.as_deref());
    let state = Arc::new(AppState {
        detector: SectionDetector::with_config(config),
    });

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/stats", get(stats))
        .route("/api/detect-sections", post(detect_sections))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    println!("🚀 Sectionlens API listening on {}", args.bind);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Sectionlens API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn stats() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "endpoints": {
            "/api/detect-sections": "POST - Detect sections from element records",
            "/health": "GET - Health check",
            "/api/stats": "GET - API statistics",
        },
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn detect_sections(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DetectionRequest>,
) -> Result<Json<DetectionResponse>, (StatusCode, Json<ErrorResponse>)> {
    println!(
        "📥 Detecting sections for {} element records",
        request.elements.len()
    );

    let sections = state
        .detector
        .detect_sections(request.elements)
        .map_err(|e| {
            eprintln!("❌ Detection failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Failed to detect sections: {e}"),
                }),
            )
        })?;

    let section_responses: Vec<SectionResponse> =
        sections.iter().map(to_section_response).collect();

    Ok(Json(DetectionResponse {
        total_sections: section_responses.len(),
        sections: section_responses,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

fn to_section_response(section: &Section) -> SectionResponse {
    SectionResponse {
        id: section.id,
        section_type: section.section_type,
        content: section.content.clone(),
        bounds: section.bounds.clone(),
        metadata: section.metadata.clone(),
        html: section_html(section),
    }
}
