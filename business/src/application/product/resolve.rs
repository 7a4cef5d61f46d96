use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductMatch;
use crate::domain::product::services::{ProductProvider, ProviderLookup};
use crate::domain::product::use_cases::resolve::{ResolveProductParams, ResolveProductUseCase};

/// Asks each provider in order and returns the first match.
///
/// Providers run one after another, never concurrently, so precedence is the
/// list order. A failing provider counts as a miss.
pub struct ResolveProductUseCaseImpl {
    pub providers: Vec<Arc<dyn ProductProvider>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveProductUseCase for ResolveProductUseCaseImpl {
    async fn execute(
        &self,
        params: ResolveProductParams,
    ) -> Result<Option<ProductMatch>, ProductError> {
        let barcode = params.barcode.trim();
        if barcode.is_empty() {
            return Err(ProductError::BarcodeEmpty);
        }

        self.logger
            .info(&format!("Resolving product for barcode: {}", barcode));

        for provider in &self.providers {
            let source = provider.source();
            match provider.lookup(barcode).await {
                Ok(ProviderLookup::Found(product)) => {
                    self.logger.info(&format!(
                        "Barcode {} resolved by {}: {} ({})",
                        barcode, source, product.name, product.category
                    ));
                    return Ok(Some(product));
                }
                Ok(ProviderLookup::NotFound) => {
                    self.logger
                        .debug(&format!("Barcode {} not found in {}", barcode, source));
                }
                Err(e) => {
                    self.logger.warn(&format!(
                        "Provider {} failed for barcode {}: {}",
                        source, barcode, e
                    ));
                }
            }
        }

        self.logger
            .info(&format!("Barcode {} is not registered with any provider", barcode));
        Ok(None)
    }
}
