use async_trait::async_trait;
use inventory_core::{Amount, ProductDraft};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("Error: {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
}

/// A JSON scalar that the endpoint may send either as a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Number(f64),
    Text(String),
}

impl Loose {
    fn amount(self) -> Amount {
        match self {
            Loose::Number(n) => Amount::from_text(n.to_string()),
            Loose::Text(s) => Amount::from_text(s),
        }
    }

    /// Stock is only a signal when it is a whole JSON number. Text and
    /// fractions carry no stock information, so they can never read as zero.
    fn stock(&self) -> Option<i64> {
        match self {
            Loose::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        }
    }

    fn number(&self) -> f64 {
        match self {
            Loose::Number(n) => *n,
            Loose::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }
}

/// Product record exactly as served by the inventory endpoint.
/// Display-formatted strings stay strings here; `into_draft` is the parse boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<Loose>,
    #[serde(default)]
    pub quantity: Option<Loose>,
    #[serde(default)]
    pub value: Option<Loose>,
    #[serde(default)]
    pub stock: Option<Loose>,
}

impl WireProduct {
    pub fn into_draft(self) -> ProductDraft {
        let quantity = self
            .quantity
            .map(|q| q.number().round().clamp(0.0, u32::MAX as f64) as u32)
            .unwrap_or(0);
        ProductDraft {
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            price: self.price.map(Loose::amount).unwrap_or_default(),
            quantity,
            value: self.value.map(Loose::amount).unwrap_or_default(),
            stock: self.stock.as_ref().and_then(Loose::stock),
        }
    }
}

/// Turn a raw HTTP response into product drafts. Any non-2xx status or a body
/// that is not a JSON array of products is an error; there is no partial result.
pub fn decode_inventory(status: u16, body: &str) -> Result<Vec<ProductDraft>, FeedError> {
    if !(200..300).contains(&status) {
        return Err(FeedError::Status(status));
    }
    let wire: Vec<WireProduct> =
        serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))?;
    Ok(wire.into_iter().map(WireProduct::into_draft).collect())
}

/// Where the dashboard gets its product list from. One call, one attempt.
#[async_trait(?Send)]
pub trait InventorySource {
    async fn fetch(&self) -> Result<Vec<ProductDraft>, FeedError>;
}

/// Single GET against a fixed endpoint. No retry, no timeout.
#[derive(Debug, Clone)]
pub struct HttpInventorySource {
    url: String,
}

impl HttpInventorySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(target_arch = "wasm32")]
async fn get_text(url: &str) -> Result<(u16, String), FeedError> {
    use gloo_net::http::Request;

    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;
    Ok((status, body))
}

#[cfg(not(target_arch = "wasm32"))]
async fn get_text(url: &str) -> Result<(u16, String), FeedError> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;
    let status = resp.status().as_u16();
    let body = resp
        .text()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl InventorySource for HttpInventorySource {
    async fn fetch(&self) -> Result<Vec<ProductDraft>, FeedError> {
        log::debug!("GET {}", self.url);
        let (status, body) = get_text(&self.url).await?;
        decode_inventory(status, &body)
    }
}

/// Canned response decoded through the same path as a live one. Used for
/// offline previews and tests.
#[derive(Debug, Clone)]
pub struct FixedResponse {
    status: u16,
    body: String,
}

impl FixedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

#[async_trait(?Send)]
impl InventorySource for FixedResponse {
    async fn fetch(&self) -> Result<Vec<ProductDraft>, FeedError> {
        decode_inventory(self.status, &self.body)
    }
}

/// Transport failure stand-in: every fetch fails before a response exists.
#[derive(Debug, Clone, Default)]
pub struct Unreachable;

#[async_trait(?Send)]
impl InventorySource for Unreachable {
    async fn fetch(&self) -> Result<Vec<ProductDraft>, FeedError> {
        Err(FeedError::Transport("network unreachable".into()))
    }
}
