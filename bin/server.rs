// Lira Words - Web Server
// REST API with Axum: conversion and Arabic spelling as JSON

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use lira_words::{
    denominations, format_amount, parse_amount_strict, spell_number, spell_number_simple,
    spell_number_with_currency_label, Config, Conversion, CurrencyEra, Direction,
    CONVERSION_RATE, VERSION,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response()
    }
}

fn bad_request(error: anyhow::Error) -> Response {
    tracing::warn!("rejected request: {:#}", error);
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(format!("{:#}", error)),
        }),
    )
        .into_response()
}

#[derive(Deserialize)]
struct WordsQuery {
    amount: String,
    #[serde(default)]
    era: Option<CurrencyEra>,
}

#[derive(Serialize)]
struct WordsResponse {
    amount: f64,
    era: CurrencyEra,
    words: String,
    words_with_currency: String,
    preview: String,
}

#[derive(Deserialize)]
struct ConvertQuery {
    amount: String,
    #[serde(default)]
    direction: Option<Direction>,
}

#[derive(Serialize)]
struct AmountView {
    era: CurrencyEra,
    value: f64,
    display: String,
    display_arabic: String,
    words: String,
    preview: String,
}

impl AmountView {
    fn new(value: f64, era: CurrencyEra, fraction_digits: usize) -> Self {
        Self {
            era,
            value,
            display: format_amount(value, false, fraction_digits),
            display_arabic: format_amount(value, true, fraction_digits),
            words: spell_number_with_currency_label(value, era),
            preview: spell_number_simple(value),
        }
    }
}

#[derive(Serialize)]
struct ConvertResponse {
    direction: Direction,
    rate: f64,
    input: AmountView,
    output: AmountView,
}

impl From<Conversion> for ConvertResponse {
    fn from(conversion: Conversion) -> Self {
        let direction = conversion.direction;
        Self {
            direction,
            rate: CONVERSION_RATE,
            input: AmountView::new(conversion.input, direction.source_era(), 2),
            output: AmountView::new(
                conversion.output,
                direction.target_era(),
                conversion.display_fraction_digits(),
            ),
        }
    }
}

#[derive(Serialize)]
struct DenominationsResponse {
    old: Vec<u64>,
    new: Vec<u64>,
}

// ============================================================================
// API Handlers
// ============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /api/health - Health check
async fn health_check() -> Response {
    ApiResponse::ok(HealthResponse {
        status: "OK",
        version: VERSION,
    })
}

/// GET /api/words?amount=&era= - Spell an amount
async fn get_words(Query(query): Query<WordsQuery>) -> Response {
    let amount = match parse_amount_strict(&query.amount) {
        Ok(amount) => amount,
        Err(e) => return bad_request(e),
    };
    let era = query.era.unwrap_or(CurrencyEra::New);

    ApiResponse::ok(WordsResponse {
        amount,
        era,
        words: spell_number(amount),
        words_with_currency: spell_number_with_currency_label(amount, era),
        preview: spell_number_simple(amount),
    })
}

/// GET /api/convert?amount=&direction= - Convert between old and new pounds
async fn get_conversion(Query(query): Query<ConvertQuery>) -> Response {
    let amount = match parse_amount_strict(&query.amount) {
        Ok(amount) => amount,
        Err(e) => return bad_request(e),
    };
    let direction = query.direction.unwrap_or_default();

    ApiResponse::ok(ConvertResponse::from(Conversion::new(amount, direction)))
}

/// GET /api/denominations - Banknotes of both eras
async fn get_denominations() -> Response {
    ApiResponse::ok(DenominationsResponse {
        old: denominations(CurrencyEra::Old).to_vec(),
        new: denominations(CurrencyEra::New).to_vec(),
    })
}

fn app() -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/words", get(get_words))
        .route("/convert", get(get_conversion))
        .route("/denominations", get(get_denominations));

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🌐 Lira Words - Web Server v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = Config::load()?;
    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.server_addr, e))?;

    tracing::info!(addr = %config.server_addr, "listening");
    println!("\n🚀 Server running on http://{}", config.server_addr);
    println!("   API: http://{}/api/convert?amount=5000", config.server_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app()).await?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
