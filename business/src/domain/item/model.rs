use crate::domain::calendar::date_input::DateInput;
use crate::domain::product::category::FoodCategory;

use super::value_objects::ItemStatus;

/// An inventory entry as stored by the document database.
///
/// The store owns its lifecycle; this crate only derives display values from it.
#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    /// Identifier of the fridge (storage location) holding the item.
    pub storage_id: Option<String>,
    pub expiry_date: Option<DateInput>,
    pub added_date: Option<DateInput>,
    pub consumed_date: Option<DateInput>,
    pub status: ItemStatus,
}
