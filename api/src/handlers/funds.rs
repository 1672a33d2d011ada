//! Fund handlers

use axum::Json;

use crate::domain::entities::FundName;

/// GET /fund-names
///
/// List the funds a transaction can be recorded against.
pub async fn list_fund_names() -> Json<Vec<FundName>> {
    Json(FundName::known())
}
