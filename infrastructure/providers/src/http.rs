use reqwest::Client;
use url::Url;

use business::domain::product::errors::ProductError;

const USER_AGENT: &str = concat!("fridge-keeper/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by the product providers.
pub fn provider_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}

/// Appends `segments` to `base_url`, each escaped as a single path segment.
///
/// Scanned barcodes are raw text; `/`, `?` and `#` inside one never reach
/// the request path unescaped.
pub fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, ProductError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ProductError::ProviderFailed(format!("invalid base url: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| ProductError::ProviderFailed(format!("base url has no path: {}", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Failure reason of a request, without the URL (it may carry an API key).
pub fn request_failed(error: reqwest::Error) -> ProductError {
    ProductError::ProviderFailed(error.without_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_path_characters_inside_a_segment() {
        let url = endpoint("http://localhost:8080", &["api", "v2", "product", "5/../7?x#y.json"])
            .unwrap();

        assert_eq!(url.path(), "/api/v2/product/5%2F..%2F7%3Fx%23y.json");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let url = endpoint("http://localhost:8080/proxy/", &["api", "key"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/proxy/api/key");
    }

    #[test]
    fn should_fail_on_unusable_base_url() {
        assert!(matches!(
            endpoint("not a url", &["api"]),
            Err(ProductError::ProviderFailed(_))
        ));
    }
}
