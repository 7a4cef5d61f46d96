use crate::domain::item::expiry::{ExpiryBucket, ExpiryStatus};
use crate::domain::item::filter::ItemFilter;
use crate::domain::item::model::InventoryItem;

pub struct GetExpiryOverviewParams {
    pub items: Vec<InventoryItem>,
    pub filter: ItemFilter,
}

/// An item with its display dates and expiry classification.
#[derive(Debug, Clone)]
pub struct ClassifiedItem {
    pub item: InventoryItem,
    pub expiry: ExpiryStatus,
    pub added_day: String,
    pub consumed_day: Option<String>,
}

/// Per-bucket totals over the items that pass every non-bucket criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub expired: usize,
    pub urgent: usize,
    pub soon: usize,
    pub safe: usize,
    pub unknown: usize,
}

impl BucketCounts {
    pub fn record(&mut self, bucket: ExpiryBucket) {
        match bucket {
            ExpiryBucket::Expired => self.expired += 1,
            ExpiryBucket::Urgent => self.urgent += 1,
            ExpiryBucket::Soon => self.soon += 1,
            ExpiryBucket::Safe => self.safe += 1,
            ExpiryBucket::Unknown => self.unknown += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpiryOverview {
    pub items: Vec<ClassifiedItem>,
    pub counts: BucketCounts,
}

/// Synchronous: classification is cheap and runs on every listing.
pub trait GetExpiryOverviewUseCase: Send + Sync {
    fn execute(&self, params: GetExpiryOverviewParams) -> ExpiryOverview;
}
