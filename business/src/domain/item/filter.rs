use crate::domain::product::category::FoodCategory;

use super::expiry::ExpiryBucket;
use super::model::InventoryItem;

/// Search and filter criteria for an inventory listing.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub bucket: Option<ExpiryBucket>,
    pub category: Option<FoodCategory>,
    pub storage_id: Option<String>,
    /// Case-insensitive substring of the item name.
    pub search: Option<String>,
    /// Also list consumed and discarded items.
    pub include_finished: bool,
}

impl ItemFilter {
    /// Every criterion except the bucket.
    pub fn matches_item(&self, item: &InventoryItem) -> bool {
        if !self.include_finished && item.status.is_finished() {
            return false;
        }

        if let Some(category) = self.category
            && item.category != category
        {
            return false;
        }

        if let Some(storage_id) = &self.storage_id
            && item.storage_id.as_deref() != Some(storage_id.as_str())
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                item.name.to_lowercase().contains(&term.to_lowercase())
            }
            _ => true,
        }
    }

    /// `Unknown` only matches itself; every other bucket filter matches on the
    /// item's filter group, so items without expiry show up under `Safe`.
    pub fn matches_bucket(&self, bucket: ExpiryBucket) -> bool {
        match self.bucket {
            None => true,
            Some(ExpiryBucket::Unknown) => bucket == ExpiryBucket::Unknown,
            Some(wanted) => bucket.filter_group() == wanted,
        }
    }
}
