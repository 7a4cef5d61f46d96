use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::calendar::date_input::DateInput;
use business::domain::item::expiry::ExpiryBucket;
use business::domain::item::filter::ItemFilter;
use business::domain::item::model::InventoryItem;
use business::domain::item::use_cases::get_expiry_overview::{BucketCounts, ClassifiedItem};
use business::domain::item::value_objects::ItemStatus;

use crate::api::shared::dto::FoodCategoryDto;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum ExpiryBucketDto {
    #[oai(rename = "expired")]
    Expired,
    #[oai(rename = "urgent")]
    Urgent,
    #[oai(rename = "soon")]
    Soon,
    #[oai(rename = "safe")]
    Safe,
    #[oai(rename = "unknown")]
    Unknown,
}

impl From<ExpiryBucket> for ExpiryBucketDto {
    fn from(bucket: ExpiryBucket) -> Self {
        match bucket {
            ExpiryBucket::Expired => ExpiryBucketDto::Expired,
            ExpiryBucket::Urgent => ExpiryBucketDto::Urgent,
            ExpiryBucket::Soon => ExpiryBucketDto::Soon,
            ExpiryBucket::Safe => ExpiryBucketDto::Safe,
            ExpiryBucket::Unknown => ExpiryBucketDto::Unknown,
        }
    }
}

impl From<ExpiryBucketDto> for ExpiryBucket {
    fn from(dto: ExpiryBucketDto) -> Self {
        match dto {
            ExpiryBucketDto::Expired => ExpiryBucket::Expired,
            ExpiryBucketDto::Urgent => ExpiryBucket::Urgent,
            ExpiryBucketDto::Soon => ExpiryBucket::Soon,
            ExpiryBucketDto::Safe => ExpiryBucket::Safe,
            ExpiryBucketDto::Unknown => ExpiryBucket::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum ItemStatusDto {
    #[oai(rename = "available")]
    Available,
    #[oai(rename = "consumed")]
    Consumed,
    #[oai(rename = "discarded")]
    Discarded,
}

impl From<ItemStatus> for ItemStatusDto {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Available => ItemStatusDto::Available,
            ItemStatus::Consumed => ItemStatusDto::Consumed,
            ItemStatus::Discarded => ItemStatusDto::Discarded,
        }
    }
}

impl From<ItemStatusDto> for ItemStatus {
    fn from(dto: ItemStatusDto) -> Self {
        match dto {
            ItemStatusDto::Available => ItemStatus::Available,
            ItemStatusDto::Consumed => ItemStatus::Consumed,
            ItemStatusDto::Discarded => ItemStatus::Discarded,
        }
    }
}

/// Inventory entry as read from the document store.
///
/// Date fields accept any stored representation: `YYYY-MM-DD` or ISO-8601
/// text, epoch milliseconds, or `{seconds, nanoseconds}` timestamps.
#[derive(Debug, Clone, Object)]
pub struct InventoryItemDto {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<FoodCategoryDto>,
    /// Fridge holding the item
    #[oai(skip_serializing_if_is_none)]
    pub storage_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<serde_json::Value>,
    #[oai(skip_serializing_if_is_none)]
    pub added_date: Option<serde_json::Value>,
    #[oai(skip_serializing_if_is_none)]
    pub consumed_date: Option<serde_json::Value>,
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<ItemStatusDto>,
}

impl From<InventoryItemDto> for InventoryItem {
    fn from(dto: InventoryItemDto) -> Self {
        let date = |value: Option<serde_json::Value>| value.as_ref().and_then(DateInput::from_json);
        Self {
            id: dto.id,
            name: dto.name,
            category: dto.category.map(Into::into).unwrap_or_default(),
            storage_id: dto.storage_id,
            expiry_date: date(dto.expiry_date),
            added_date: date(dto.added_date),
            consumed_date: date(dto.consumed_date),
            status: dto.status.map(Into::into).unwrap_or(ItemStatus::Available),
        }
    }
}

#[derive(Debug, Clone, Default, Object)]
pub struct ItemFilterDto {
    /// Expiry bucket; `safe` also matches items without an expiry date
    #[oai(skip_serializing_if_is_none)]
    pub bucket: Option<ExpiryBucketDto>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<FoodCategoryDto>,
    #[oai(skip_serializing_if_is_none)]
    pub storage_id: Option<String>,
    /// Case-insensitive name search
    #[oai(skip_serializing_if_is_none)]
    pub search: Option<String>,
    /// Include consumed and discarded items
    #[oai(default)]
    pub include_finished: bool,
}

impl From<ItemFilterDto> for ItemFilter {
    fn from(dto: ItemFilterDto) -> Self {
        Self {
            bucket: dto.bucket.map(Into::into),
            category: dto.category.map(Into::into),
            storage_id: dto.storage_id,
            search: dto.search,
            include_finished: dto.include_finished,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryOverviewRequest {
    pub items: Vec<InventoryItemDto>,
    #[oai(skip_serializing_if_is_none)]
    pub filter: Option<ItemFilterDto>,
}

#[derive(Debug, Clone, Object)]
pub struct ClassifiedItemResponse {
    pub id: String,
    pub name: String,
    pub category: FoodCategoryDto,
    /// Display label of the category in the current settings session
    pub category_label: String,
    #[oai(skip_serializing_if_is_none)]
    pub storage_id: Option<String>,
    pub status: ItemStatusDto,
    /// Canonical expiry day, absent when the item has none
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<String>,
    pub added_date: String,
    #[oai(skip_serializing_if_is_none)]
    pub consumed_date: Option<String>,
    /// Days until expiry; 999 when there is no expiry date
    pub days_until_expiry: i64,
    pub bucket: ExpiryBucketDto,
    /// `D-n` / `D+n` badge, absent for safe items
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
}

impl ClassifiedItemResponse {
    pub fn new(classified: ClassifiedItem, category_label: String) -> Self {
        let item = classified.item;
        Self {
            id: item.id,
            name: item.name,
            category: item.category.into(),
            category_label,
            storage_id: item.storage_id,
            status: item.status.into(),
            expiry_date: classified.expiry.expiry_day.map(|d| d.to_string()),
            added_date: classified.added_day,
            consumed_date: classified.consumed_day,
            days_until_expiry: classified.expiry.days_until_expiry,
            bucket: classified.expiry.bucket.into(),
            badge: classified.expiry.badge,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BucketCountsResponse {
    pub expired: u64,
    pub urgent: u64,
    pub soon: u64,
    pub safe: u64,
    pub unknown: u64,
}

impl From<BucketCounts> for BucketCountsResponse {
    fn from(counts: BucketCounts) -> Self {
        Self {
            expired: counts.expired as u64,
            urgent: counts.urgent as u64,
            soon: counts.soon as u64,
            safe: counts.safe as u64,
            unknown: counts.unknown as u64,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryOverviewResponse {
    pub items: Vec<ClassifiedItemResponse>,
    /// Per-bucket totals over the items matching every filter but the bucket
    pub counts: BucketCountsResponse,
}
