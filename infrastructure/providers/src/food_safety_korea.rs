use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use business::domain::product::category::{CategoryClassifier, KeywordCategoryClassifier};
use business::domain::product::errors::ProductError;
use business::domain::product::model::{ProductMatch, ProductSource};
use business::domain::product::services::{ProductProvider, ProviderLookup};

use crate::http::{endpoint, provider_client, request_failed};

pub const DEFAULT_BASE_URL: &str = "http://openapi.foodsafetykorea.go.kr";

/// Barcode service id of the registry.
const SERVICE: &str = "C005";
const RESULT_OK: &str = "INFO-000";
const RESULT_NO_DATA: &str = "INFO-200";

#[derive(Deserialize)]
struct FoodSafetyResponse {
    #[serde(rename = "C005")]
    body: Option<FoodSafetyBody>,
}

#[derive(Deserialize)]
struct FoodSafetyBody {
    #[serde(rename = "RESULT")]
    result: Option<FoodSafetyResult>,
    row: Option<Vec<FoodSafetyRow>>,
}

#[derive(Deserialize)]
struct FoodSafetyResult {
    #[serde(rename = "CODE")]
    code: String,
}

#[derive(Deserialize)]
struct FoodSafetyRow {
    /// Product name.
    #[serde(rename = "PRDLST_NM")]
    product_name: Option<String>,
    /// Product type, e.g. "우유류".
    #[serde(rename = "PRDLST_DCNM")]
    product_type: Option<String>,
    /// Manufacturer.
    #[serde(rename = "BSSH_NM")]
    manufacturer: Option<String>,
}

/// Korean government barcode registry; narrow coverage, no photos.
///
/// Requires an API key. Without one every lookup reports
/// `ProviderUnavailable` and no request is sent.
pub struct FoodSafetyKoreaProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    classifier: Box<dyn CategoryClassifier>,
}

impl FoodSafetyKoreaProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: provider_client(10),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            classifier: Box::new(KeywordCategoryClassifier::korean()),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn CategoryClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    fn lookup_url(&self, api_key: &str, barcode: &str) -> Result<Url, ProductError> {
        let filter = format!("BAR_CD={}", barcode);
        endpoint(
            &self.base_url,
            &["api", api_key, SERVICE, "json", "1", "5", &filter],
        )
    }

    fn into_match(&self, row: FoodSafetyRow) -> Option<ProductMatch> {
        let name = row
            .product_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())?;

        let product_type = row.product_type.unwrap_or_default();
        let category = self
            .classifier
            .classify(&[product_type.as_str(), name.as_str()]);

        Some(ProductMatch {
            name,
            category,
            brand: row
                .manufacturer
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
            image_url: None,
            source: ProductSource::FoodSafetyKorea,
        })
    }
}

#[async_trait]
impl ProductProvider for FoodSafetyKoreaProvider {
    fn source(&self) -> ProductSource {
        ProductSource::FoodSafetyKorea
    }

    async fn lookup(&self, barcode: &str) -> Result<ProviderLookup, ProductError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProductError::ProviderUnavailable)?;

        let response = self
            .client
            .get(self.lookup_url(api_key, barcode)?)
            .send()
            .await
            .map_err(request_failed)?;

        if !response.status().is_success() {
            return Err(ProductError::ProviderFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let data: FoodSafetyResponse = response.json().await.map_err(request_failed)?;
        let body = data
            .body
            .ok_or_else(|| ProductError::ProviderFailed(format!("missing {} body", SERVICE)))?;

        match body.result.as_ref().map(|r| r.code.as_str()) {
            Some(RESULT_OK) | Some(RESULT_NO_DATA) | None => {}
            Some(code) => {
                return Err(ProductError::ProviderFailed(format!(
                    "result code {}",
                    code
                )));
            }
        }

        Ok(body
            .row
            .unwrap_or_default()
            .into_iter()
            .find_map(|row| self.into_match(row))
            .map_or(ProviderLookup::NotFound, ProviderLookup::Found))
    }
}
