//! Project Endpoints

use reqwest::Method;

use crate::models::{Proyecto, ProyectoId, ProyectoPayload, ProyectosResponse};
use super::{delete, get_json, send_json, ApiResult};

pub async fn list_proyectos() -> ApiResult<Vec<Proyecto>> {
    let response: ProyectosResponse = get_json(&["proyectos"]).await?;
    Ok(response.into_vec())
}

pub async fn get_proyecto(id: &ProyectoId) -> ApiResult<Proyecto> {
    get_json(&["proyectos", id.as_str()]).await
}

pub async fn create_proyecto(payload: &ProyectoPayload) -> ApiResult<Proyecto> {
    send_json(Method::POST, &["proyectos"], payload).await
}

/// Full-record update
pub async fn update_proyecto(id: &ProyectoId, payload: &ProyectoPayload) -> ApiResult<Proyecto> {
    send_json(Method::PUT, &["proyectos", id.as_str()], payload).await
}

pub async fn delete_proyecto(id: &ProyectoId) -> ApiResult<()> {
    delete(&["proyectos", id.as_str()]).await
}
