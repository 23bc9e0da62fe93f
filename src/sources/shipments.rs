//! Live shipments source
//!
//! The only category with a real endpoint today. Fetches the caller's
//! detailed loads with a bearer token and maps each load into the
//! normalized result shape before filtering.

use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map};
use tracing::debug;

use crate::auth::TokenStore;
use crate::error::AppError;
use crate::search::result::{Category, SearchResult};

use super::CategorySource;

/// Endpoint path relative to the API base
pub const MY_LOADS_PATH: &str = "/api/v1/load/shipper/my-loads-detailed";

/// Result cap for the shipments category
pub const SHIPMENT_RESULT_CAP: usize = 8;

#[derive(Debug, Deserialize)]
struct LoadsResponse {
    #[serde(default)]
    success: bool,
    data: Option<LoadsData>,
}

#[derive(Debug, Deserialize)]
struct LoadsData {
    loads: Option<Vec<Load>>,
}

/// One load as the API returns it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    #[serde(alias = "_id")]
    pub id: String,
    pub load_number: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub pickup_date: Option<String>,
}

/// Map one load into the normalized result shape
pub fn load_to_result(load: &Load) -> SearchResult {
    let title = format!("Shipment {}", load.load_number);
    let subtitle = format!("{} → {}", load.origin, load.destination);

    let mut extra = Map::new();
    if let Some(status) = &load.status {
        extra.insert("status".to_string(), json!(status));
    }
    if let Some(rate) = load.rate {
        extra.insert("rate".to_string(), json!(rate));
    }
    if let Some(pickup) = &load.pickup_date {
        extra.insert("pickupDate".to_string(), json!(pickup));
    }

    SearchResult::new(Category::Shipments, load.id.clone(), title, subtitle).with_extra(extra)
}

/// API-backed shipments category
pub struct ShipmentApiSource {
    client: Client,
    base_url: String,
    tokens: TokenStore,
}

impl ShipmentApiSource {
    pub fn new(client: Client, base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            tokens,
        }
    }

    async fn search_impl(&self, query: &str) -> Result<Vec<SearchResult>, AppError> {
        let token = self.tokens.bearer_token()?;
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), MY_LOADS_PATH);

        debug!("Fetching loads from {}", url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(AppError::FetchFailed(format!(
                "Loads endpoint returned {}",
                response.status()
            )));
        }

        let body: LoadsResponse = response.json().await?;
        if !body.success {
            return Err(AppError::MalformedResponse(
                "Loads response has success=false".to_string(),
            ));
        }
        let loads = body
            .data
            .and_then(|d| d.loads)
            .ok_or_else(|| AppError::MalformedResponse("Missing data.loads".to_string()))?;

        debug!("Fetched {} loads", loads.len());

        Ok(loads
            .iter()
            .map(load_to_result)
            .filter(|result| result.matches(query))
            .take(SHIPMENT_RESULT_CAP)
            .collect())
    }
}

impl CategorySource for ShipmentApiSource {
    fn category(&self) -> Category {
        Category::Shipments
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<SearchResult>, AppError>> {
        Box::pin(self.search_impl(query))
    }
}
