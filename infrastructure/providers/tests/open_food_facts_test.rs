use business::domain::product::category::FoodCategory;
use business::domain::product::errors::ProductError;
use business::domain::product::model::ProductSource;
use business::domain::product::services::{ProductProvider, ProviderLookup};
use providers::open_food_facts::OpenFoodFactsProvider;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn should_return_product_when_barcode_is_known() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/3017620422003.json"))
        .and(query_param(
            "fields",
            "product_name,product_name_ko,product_name_en,brands,categories_tags,image_front_url,image_url",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1,
            "product": {
                "product_name": "Nutella",
                "brands": "Ferrero, Nutella",
                "categories_tags": ["en:breakfasts", "en:spreads", "en:sweet-snacks"],
                "image_front_url": "https://images.openfoodfacts.org/nutella.jpg"
            }
        })))
        .mount(&server)
        .await;

    let provider = OpenFoodFactsProvider::new(server.uri());
    let result = provider.lookup("3017620422003").await.unwrap();

    let ProviderLookup::Found(product) = result else {
        panic!("expected a product");
    };
    assert_eq!(product.name, "Nutella");
    assert_eq!(product.brand.as_deref(), Some("Ferrero"));
    assert_eq!(product.category, FoodCategory::Snack);
    assert_eq!(product.source, ProductSource::OpenFoodFacts);
    assert_eq!(
        product.image_url.map(|u| u.to_string()),
        Some("https://images.openfoodfacts.org/nutella.jpg".to_string())
    );
}

#[tokio::test]
async fn should_prefer_korean_name_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/8801115114154.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1,
            "product": {
                "product_name": "Seoul Milk",
                "product_name_ko": "서울우유",
                "categories_tags": ["en:dairies", "en:milks"]
            }
        })))
        .mount(&server)
        .await;

    let provider = OpenFoodFactsProvider::new(server.uri());
    let result = provider.lookup("8801115114154").await.unwrap();

    let ProviderLookup::Found(product) = result else {
        panic!("expected a product");
    };
    assert_eq!(product.name, "서울우유");
    assert_eq!(product.category, FoodCategory::Dairy);
    assert!(product.brand.is_none());
    assert!(product.image_url.is_none());
}

#[tokio::test]
async fn should_return_not_found_when_status_is_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/0000000000000.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "status_verbose": "product not found"
        })))
        .mount(&server)
        .await;

    let provider = OpenFoodFactsProvider::new(server.uri());
    let result = provider.lookup("0000000000000").await.unwrap();

    assert_eq!(result, ProviderLookup::NotFound);
}

#[tokio::test]
async fn should_return_not_found_when_server_answers_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "status": 0 })))
        .mount(&server)
        .await;

    let provider = OpenFoodFactsProvider::new(server.uri());
    let result = provider.lookup("1234567890123").await.unwrap();

    assert_eq!(result, ProviderLookup::NotFound);
}

#[tokio::test]
async fn should_return_not_found_when_product_has_no_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1,
            "product": { "product_name": "  ", "brands": "Nameless" }
        })))
        .mount(&server)
        .await;

    let provider = OpenFoodFactsProvider::new(server.uri());
    let result = provider.lookup("1234567890123").await.unwrap();

    assert_eq!(result, ProviderLookup::NotFound);
}

#[tokio::test]
async fn should_fail_when_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = OpenFoodFactsProvider::new(server.uri());
    let result = provider.lookup("1234567890123").await;

    assert!(matches!(result, Err(ProductError::ProviderFailed(_))));
}

#[tokio::test]
async fn should_keep_slashes_in_barcode_inside_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1,
            "product": { "product_name": "Other product" }
        })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "status": 0 })))
        .mount(&server)
        .await;

    let provider = OpenFoodFactsProvider::new(server.uri());
    let result = provider.lookup("5/../7").await.unwrap();

    assert_eq!(result, ProviderLookup::NotFound);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/v2/product/5%2F..%2F7.json");
}
