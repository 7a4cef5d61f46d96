use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use business::domain::product::category::{CategoryClassifier, TagCategoryClassifier};
use business::domain::product::errors::ProductError;
use business::domain::product::model::{ProductMatch, ProductSource};
use business::domain::product::services::{ProductProvider, ProviderLookup};

use crate::http::{endpoint, provider_client, request_failed};

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

const FIELDS: &str =
    "product_name,product_name_ko,product_name_en,brands,categories_tags,image_front_url,image_url";

#[derive(Deserialize)]
struct OpenFoodFactsResponse {
    status: i32,
    product: Option<OpenFoodFactsProduct>,
}

#[derive(Deserialize)]
struct OpenFoodFactsProduct {
    product_name_ko: Option<String>,
    product_name: Option<String>,
    product_name_en: Option<String>,
    brands: Option<String>,
    categories_tags: Option<Vec<String>>,
    image_front_url: Option<String>,
    image_url: Option<String>,
}

/// Global open product database; broad coverage, usually with photos.
pub struct OpenFoodFactsProvider {
    client: Client,
    base_url: String,
    classifier: Box<dyn CategoryClassifier>,
}

impl OpenFoodFactsProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: provider_client(10),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            classifier: Box::new(TagCategoryClassifier::open_food_facts()),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn CategoryClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    fn product_url(&self, barcode: &str) -> Result<Url, ProductError> {
        let file = format!("{}.json", barcode);
        endpoint(&self.base_url, &["api", "v2", "product", &file])
    }

    fn into_match(&self, product: OpenFoodFactsProduct) -> Option<ProductMatch> {
        let name = [
            product.product_name_ko,
            product.product_name,
            product.product_name_en,
        ]
        .into_iter()
        .flatten()
        .map(|n| n.trim().to_string())
        .find(|n| !n.is_empty())?;

        let brand = product
            .brands
            .as_deref()
            .and_then(|b| b.split(',').map(str::trim).find(|b| !b.is_empty()))
            .map(str::to_string);

        let image_url = product
            .image_front_url
            .or(product.image_url)
            .and_then(|u| Url::parse(&u).ok());

        let tags = product.categories_tags.unwrap_or_default();
        let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();

        Some(ProductMatch {
            name,
            category: self.classifier.classify(&tag_refs),
            brand,
            image_url,
            source: ProductSource::OpenFoodFacts,
        })
    }
}

#[async_trait]
impl ProductProvider for OpenFoodFactsProvider {
    fn source(&self) -> ProductSource {
        ProductSource::OpenFoodFacts
    }

    async fn lookup(&self, barcode: &str) -> Result<ProviderLookup, ProductError> {
        let response = self
            .client
            .get(self.product_url(barcode)?)
            .query(&[("fields", FIELDS)])
            .send()
            .await
            .map_err(request_failed)?;

        // Unknown barcodes come back as 404 with a status-0 body.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(ProviderLookup::NotFound);
        }
        if !response.status().is_success() {
            return Err(ProductError::ProviderFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let data: OpenFoodFactsResponse = response.json().await.map_err(request_failed)?;

        if data.status != 1 {
            return Ok(ProviderLookup::NotFound);
        }

        Ok(data
            .product
            .and_then(|product| self.into_match(product))
            .map_or(ProviderLookup::NotFound, ProviderLookup::Found))
    }
}
