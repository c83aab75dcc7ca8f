//! Backend REST Client
//!
//! Bindings to the project backend, organized by resource. Every call goes
//! through the same `reqwest` client and base URL.

mod error;
mod proyectos;
mod graficos;
mod analisis;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::config;

pub use error::{ApiError, ApiResult};
pub use proyectos::*;
pub use graficos::*;
pub use analisis::*;

thread_local! {
    static CLIENT: Client = Client::new();
}

fn client() -> Client {
    CLIENT.with(Client::clone)
}

/// Characters escaped when an id is placed in a path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join the base URL with path segments, escaping each segment
fn endpoint(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string());
    }
    url
}

fn request(method: Method, segments: &[&str]) -> ApiResult<(RequestBuilder, String)> {
    let url = endpoint(&config().api_url, segments);
    let parsed = reqwest::Url::parse(&url).map_err(|_| ApiError::InvalidUrl(url.clone()))?;
    Ok((client().request(method, parsed), url))
}

async fn send(builder: RequestBuilder, url: String) -> ApiResult<reqwest::Response> {
    let response = builder.send().await.map_err(ApiError::Network)?;
    let status = response.status();
    if !status.is_success() {
        log::warn!("[API] {} -> {}", url, status);
        return Err(ApiError::Status { status: status.as_u16(), url });
    }
    log::debug!("[API] {} -> {}", url, status);
    Ok(response)
}

async fn get_json<T: DeserializeOwned>(segments: &[&str]) -> ApiResult<T> {
    let (builder, url) = request(Method::GET, segments)?;
    let response = send(builder, url).await?;
    response.json().await.map_err(ApiError::Decode)
}

async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    method: Method,
    segments: &[&str],
    body: &B,
) -> ApiResult<T> {
    let (builder, url) = request(method, segments)?;
    let response = send(builder.json(body), url).await?;
    response.json().await.map_err(ApiError::Decode)
}

async fn delete(segments: &[&str]) -> ApiResult<()> {
    let (builder, url) = request(Method::DELETE, segments)?;
    send(builder, url).await?;
    Ok(())
}
