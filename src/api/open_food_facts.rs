//! HTTP client for the Open Food Facts public database.
//!
//! Two operations: free-text product search and barcode lookup. Responses
//! are normalized into [`Food`] values; the caller decides what to do with
//! them (typically feed one into the draft meal). A product missing from
//! the database is `Ok(None)`, distinct from a transport failure.

use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Food;

/// French Open Food Facts instance, matching the app's product names.
pub const DEFAULT_BASE_URL: &str = "https://fr.openfoodfacts.org";
/// Open Food Facts asks API consumers to identify themselves.
const APP_USER_AGENT: &str = "nutritrack/0.1 (local nutrition tracker)";
/// Fields requested from the API; keeps payloads small.
const PRODUCT_FIELDS: &str =
    "code,product_name,product_name_fr,product_name_en,brands,image_url,nutriscore_grade,nutriments";

/// Errors from the food-data API.
#[derive(Debug, Error)]
pub enum FoodApiError {
    /// Network failure or non-success HTTP status.
    #[error("Open Food Facts request failed: {0}")]
    Transport(String),
    /// The server answered but the payload was not understood.
    #[error("Unexpected Open Food Facts response: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize, Default)]
struct RawNutriments {
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<f64>,
    proteins_100g: Option<f64>,
    carbohydrates_100g: Option<f64>,
    fat_100g: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct RawProduct {
    code: Option<String>,
    product_name: Option<String>,
    product_name_fr: Option<String>,
    product_name_en: Option<String>,
    brands: Option<String>,
    image_url: Option<String>,
    nutriscore_grade: Option<String>,
    #[serde(default)]
    nutriments: Option<RawNutriments>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<RawProduct>,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    status: Option<i64>,
    product: Option<RawProduct>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Maps a raw API product onto a [`Food`], filling gaps the way the app
/// always has: name falls back across the localized fields, unknown names
/// and brands get placeholder labels, and a product without a code gets a
/// generated id.
fn normalize(product: RawProduct) -> Food {
    let id = non_empty(product.code.as_ref()).unwrap_or_else(|| Uuid::new_v4().to_string());
    let name = non_empty(product.product_name.as_ref())
        .or_else(|| non_empty(product.product_name_fr.as_ref()))
        .or_else(|| non_empty(product.product_name_en.as_ref()))
        .unwrap_or_else(|| "Nom inconnu".to_string());
    let brand = non_empty(product.brands.as_ref()).unwrap_or_else(|| "Marque inconnue".to_string());
    let nutriments = product.nutriments.unwrap_or_default();

    Food::new(id, name, brand)
        .with_image_url(product.image_url.unwrap_or_default())
        .with_nutriscore(product.nutriscore_grade.unwrap_or_default().to_lowercase())
        .with_macros(
            nutriments.energy_kcal_100g.unwrap_or(0.0),
            nutriments.proteins_100g.unwrap_or(0.0),
            nutriments.carbohydrates_100g.unwrap_or(0.0),
            nutriments.fat_100g.unwrap_or(0.0),
        )
}

/// Client for product search and barcode lookup.
#[derive(Debug, Clone)]
pub struct FoodApiClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl FoodApiClient {
    pub fn new(base_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            page_size,
        }
    }

    /// Searches products by free text.
    ///
    /// A blank query short-circuits to no results without touching the
    /// network.
    pub async fn search(&self, query: &str) -> Result<Vec<Food>, FoodApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/cgi/search.pl?search_terms={}&search_simple=1&action=process&json=1&page_size={}&fields={}",
            self.base_url,
            urlencoding::encode(query),
            self.page_size,
            urlencoding::encode(PRODUCT_FIELDS),
        );

        let body: SearchResponse = self.get_json(&url).await?;
        Ok(body.products.into_iter().map(normalize).collect())
    }

    /// Looks up a single product by barcode.
    ///
    /// Returns `Ok(None)` for a blank code or a product the database does
    /// not know.
    pub async fn lookup_by_code(&self, barcode: &str) -> Result<Option<Food>, FoodApiError> {
        let code = barcode.trim();
        if code.is_empty() {
            return Ok(None);
        }

        let url = format!(
            "{}/api/v2/product/{}.json?fields={}",
            self.base_url,
            urlencoding::encode(code),
            urlencoding::encode(PRODUCT_FIELDS),
        );

        let body: ProductResponse = self.get_json(&url).await?;
        match (body.status, body.product) {
            (Some(1), Some(product)) => Ok(Some(normalize(product))),
            _ => Ok(None),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FoodApiError> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, APP_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FoodApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FoodApiError::Transport(format!(
                "Server returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| FoodApiError::Decode(e.to_string()))
    }
}

impl Default for FoodApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, 20)
    }
}
