// HTTP handlers for the floor calculator
// Thin wrappers: validate the payload, run the pure core, attach suggestions

use axum::response::Json;
use validator::Validate;

use crate::pricing::error::{PricingError, PricingResult};
use crate::pricing::models::{CalculateRequest, CalculateResponse, TemplateResponse};
use crate::pricing::service;
use crate::pricing::suggestions::build_suggestions;
use crate::tabular;

/// Handler for POST /api/floors
/// Computes the price floors and windows for a single product
#[utoipa::path(
    post,
    path = "/api/floors",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Floors computed successfully", body = CalculateResponse),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Invalid input", "details": "min_acceptable_price: must be greater than 0"}))
    ),
    tag = "floors"
)]
pub async fn calculate_floors(
    Json(payload): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, PricingError> {
    tracing::debug!("Calculating floors for asin: {}", payload.asin);

    payload.validate()?;
    let input = payload.to_input_row()?;
    let result = service::calculate_row(&input)?;
    let suggestions = build_suggestions(&result);

    tracing::info!(
        "Computed floors for asin {} (feasible: {})",
        result.asin,
        result.feasible
    );
    Ok(Json(CalculateResponse {
        result,
        suggestions,
    }))
}

/// Handler for POST /api/floors/batch
/// Computes floors for a batch of products; any invalid row fails the batch
#[utoipa::path(
    post,
    path = "/api/floors/batch",
    request_body = Vec<CalculateRequest>,
    responses(
        (status = 200, description = "All rows computed successfully", body = Vec<CalculateResponse>),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Invalid date format", "details": "invalid date format '13/40/2024': expected MM/DD/YYYY or YYYY/MM/DD"}))
    ),
    tag = "floors"
)]
pub async fn calculate_floors_batch(
    Json(payloads): Json<Vec<CalculateRequest>>,
) -> Result<Json<Vec<CalculateResponse>>, PricingError> {
    tracing::debug!("Calculating floors for batch of {} rows", payloads.len());

    for payload in &payloads {
        payload.validate()?;
    }
    let inputs = payloads
        .iter()
        .map(CalculateRequest::to_input_row)
        .collect::<PricingResult<Vec<_>>>()?;
    let results = service::calculate_batch(&inputs)?;

    let responses = results
        .into_iter()
        .map(|result| {
            let suggestions = build_suggestions(&result);
            CalculateResponse {
                result,
                suggestions,
            }
        })
        .collect::<Vec<_>>();

    tracing::info!("Computed floors for {} rows", responses.len());
    Ok(Json(responses))
}

/// Handler for GET /api/template
/// Returns one example input record for user guidance
#[utoipa::path(
    get,
    path = "/api/template",
    responses(
        (status = 200, description = "Template table with one example row", body = TemplateResponse)
    ),
    tag = "floors"
)]
pub async fn get_template() -> Json<TemplateResponse> {
    Json(TemplateResponse {
        headers: tabular::template_headers(),
        rows: vec![tabular::template_row()],
    })
}
