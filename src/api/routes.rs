use axum::{
    Router,
    extract::{Json, State},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::models::{GenerateRequest, GenerateResponse, HealthResponse};
use crate::cache::CachedRequest;
use crate::error::{AppError, Result};
use crate::extractor;
use crate::normalize::{MetaVariant, normalize};
use crate::prompt::build_prompt;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/generate-meta", post(generate_handler))
        .route("/regenerate-meta", post(regenerate_handler))
        .route("/test", get(test_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn test_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "API is working fine!".to_string(),
    })
}

async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    process_generate(&state, req).await.map(Json)
}

async fn regenerate_handler(State(state): State<AppState>) -> Result<Json<GenerateResponse>> {
    process_regenerate(&state).await.map(Json)
}

async fn process_generate(state: &AppState, req: GenerateRequest) -> Result<GenerateResponse> {
    // Empty strings count as missing, like an absent field.
    let (url, keywords) = match (&req.url, &req.keywords) {
        (Some(url), Some(keywords)) if !url.is_empty() && !keywords.is_empty() => {
            (url.clone(), keywords.clone())
        }
        _ => return Err(AppError::MissingFields),
    };

    log::info!("Processing generate request for URL: {}", url);

    let content = extractor::extract(state.fetcher.as_ref(), &url)
        .await
        .ok_or(AppError::InsufficientContent)?;
    log::debug!("Extracted {} chars from {}", content.text.len(), url);

    let meta_content =
        generate_variants(state, &content.text, &keywords, req.variant_count).await;

    state.cache.store(CachedRequest {
        url: url.clone(),
        keywords: keywords.clone(),
        variant_count: req.variant_count,
        extracted_text: content.text,
    });

    Ok(GenerateResponse {
        meta_content,
        url,
        keywords,
        variant_count: req.variant_count,
    })
}

async fn process_regenerate(state: &AppState) -> Result<GenerateResponse> {
    let cached = state.cache.peek().ok_or(AppError::NoPreviousRequest)?;

    log::info!("Regenerating meta content for URL: {}", cached.url);

    let meta_content = generate_variants(
        state,
        &cached.extracted_text,
        &cached.keywords,
        cached.variant_count,
    )
    .await;

    Ok(GenerateResponse {
        meta_content,
        url: cached.url,
        keywords: cached.keywords,
        variant_count: cached.variant_count,
    })
}

/// Prompt → model → normalize. An upstream failure degrades to in-band
/// fallback content rather than an HTTP error.
async fn generate_variants(
    state: &AppState,
    extracted_text: &str,
    keywords: &str,
    variant_count: u32,
) -> Vec<MetaVariant> {
    let prompt = build_prompt(extracted_text, keywords, variant_count);
    log::debug!("Built prompt with length: {} chars", prompt.len());

    match state.generator.generate(&prompt).await {
        Ok(raw) => {
            log::debug!("Model response: {}", raw);
            normalize(&raw)
        }
        Err(err) => {
            log::error!("AI generation error: {}", err);
            vec![MetaVariant::new("AI Error", "Failed to generate content.")]
        }
    }
}
