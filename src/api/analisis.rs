//! AI Analysis Endpoint

use crate::models::AiSummary;
use super::{get_json, ApiResult};

pub async fn get_ai_summary() -> ApiResult<AiSummary> {
    get_json(&["proyectos", "analisis"]).await
}
