use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductMatch;

pub struct ResolveProductParams {
    pub barcode: String,
}

/// `Ok(None)` means no provider knows the barcode, which is not an error.
#[async_trait]
pub trait ResolveProductUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ResolveProductParams,
    ) -> Result<Option<ProductMatch>, ProductError>;
}
