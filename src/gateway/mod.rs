//! Remote Data Gateway
//!
//! The hosted backend reached over `fetch` (REST rows) and `WebSocket`
//! (change notifications), organized by table.

mod realtime;
mod visits;
mod wishes;

use std::sync::Arc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};
use wishboard_core::{BackendConfig, BoardConfig, DomainError, DomainResult};

pub use realtime::{subscribe_to_board, unsubscribe};

/// REST gateway; cheap to clone
#[derive(Debug, Clone)]
pub struct SupabaseGateway {
    backend: Arc<BackendConfig>,
    tables: Arc<BoardConfig>,
}

impl SupabaseGateway {
    pub fn new(backend: BackendConfig, tables: BoardConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            tables: Arc::new(tables),
        }
    }

    fn wishes_url(&self, query: &str) -> String {
        format!("{}{}", self.backend.rest_url(&self.tables.wishes_table), query)
    }

    fn visits_url(&self, query: &str) -> String {
        format!("{}{}", self.backend.rest_url(&self.tables.visits_table), query)
    }

    /// Send an authorized request; non-2xx responses become `Remote` errors
    async fn send(
        &self,
        op: &'static str,
        method: &str,
        url: &str,
        body: Option<String>,
        prefer: Option<&str>,
    ) -> DomainResult<Response> {
        let headers = Headers::new().map_err(js_error(op))?;
        headers.set("apikey", &self.backend.anon_key).map_err(js_error(op))?;
        headers
            .set("Authorization", &format!("Bearer {}", self.backend.anon_key))
            .map_err(js_error(op))?;
        headers.set("Content-Type", "application/json").map_err(js_error(op))?;
        if let Some(prefer) = prefer {
            headers.set("Prefer", prefer).map_err(js_error(op))?;
        }

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error(op))?;
        let response = fetch(op, &request).await?;
        if !response.ok() {
            let detail = read_text(op, &response).await.unwrap_or_default();
            return Err(DomainError::remote(op, format!("HTTP {}: {}", response.status(), detail)));
        }
        Ok(response)
    }
}

async fn fetch(op: &'static str, request: &Request) -> DomainResult<Response> {
    let window = web_sys::window().ok_or_else(|| DomainError::remote(op, "no window"))?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error(op))?;
    value.dyn_into::<Response>().map_err(js_error(op))
}

async fn read_text(op: &'static str, response: &Response) -> DomainResult<String> {
    let promise = response.text().map_err(js_error(op))?;
    let value = JsFuture::from(promise).await.map_err(js_error(op))?;
    value
        .as_string()
        .ok_or_else(|| DomainError::remote(op, "response body is not text"))
}

/// Plain GET of a static asset (the map SVG)
pub async fn fetch_text(url: &str) -> DomainResult<String> {
    let op = "fetch asset";
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error(op))?;
    let response = fetch(op, &request).await?;
    if !response.ok() {
        return Err(DomainError::remote(op, format!("HTTP {}", response.status())));
    }
    read_text(op, &response).await
}

fn js_error(op: &'static str) -> impl Fn(JsValue) -> DomainError {
    move |e| {
        let message = e
            .dyn_ref::<js_sys::Error>()
            .map(|err| String::from(err.message()))
            .or_else(|| e.as_string())
            .unwrap_or_else(|| format!("{:?}", e));
        DomainError::remote(op, message)
    }
}
