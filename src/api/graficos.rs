//! Chart Endpoints

use crate::models::StatusCount;
use super::{get_json, ApiResult};

/// Project counts grouped by `estado`
pub async fn get_status_counts() -> ApiResult<Vec<StatusCount>> {
    get_json(&["proyectos", "graficos"]).await
}
