use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::image::model::BoundingBox;
use business::domain::product::category::FoodCategory;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum FoodCategoryDto {
    #[oai(rename = "fruit")]
    Fruit,
    #[oai(rename = "vegetable")]
    Vegetable,
    #[oai(rename = "meat")]
    Meat,
    #[oai(rename = "dairy")]
    Dairy,
    #[oai(rename = "frozen")]
    Frozen,
    #[oai(rename = "drink")]
    Drink,
    #[oai(rename = "sauce")]
    Sauce,
    #[oai(rename = "snack")]
    Snack,
    #[oai(rename = "pantry")]
    Pantry,
}

impl From<FoodCategory> for FoodCategoryDto {
    fn from(category: FoodCategory) -> Self {
        match category {
            FoodCategory::Fruit => FoodCategoryDto::Fruit,
            FoodCategory::Vegetable => FoodCategoryDto::Vegetable,
            FoodCategory::Meat => FoodCategoryDto::Meat,
            FoodCategory::Dairy => FoodCategoryDto::Dairy,
            FoodCategory::Frozen => FoodCategoryDto::Frozen,
            FoodCategory::Drink => FoodCategoryDto::Drink,
            FoodCategory::Sauce => FoodCategoryDto::Sauce,
            FoodCategory::Snack => FoodCategoryDto::Snack,
            FoodCategory::Pantry => FoodCategoryDto::Pantry,
        }
    }
}

impl From<FoodCategoryDto> for FoodCategory {
    fn from(dto: FoodCategoryDto) -> Self {
        match dto {
            FoodCategoryDto::Fruit => FoodCategory::Fruit,
            FoodCategoryDto::Vegetable => FoodCategory::Vegetable,
            FoodCategoryDto::Meat => FoodCategory::Meat,
            FoodCategoryDto::Dairy => FoodCategory::Dairy,
            FoodCategoryDto::Frozen => FoodCategory::Frozen,
            FoodCategoryDto::Drink => FoodCategory::Drink,
            FoodCategoryDto::Sauce => FoodCategory::Sauce,
            FoodCategoryDto::Snack => FoodCategory::Snack,
            FoodCategoryDto::Pantry => FoodCategory::Pantry,
        }
    }
}

/// Pixel rectangle inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Object)]
pub struct BoundingBoxDto {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl From<BoundingBox> for BoundingBoxDto {
    fn from(b: BoundingBox) -> Self {
        Self {
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
        }
    }
}

impl From<BoundingBoxDto> for BoundingBox {
    fn from(dto: BoundingBoxDto) -> Self {
        BoundingBox::new(dto.x, dto.y, dto.width, dto.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_category_both_ways() {
        for category in FoodCategory::ALL {
            let dto = FoodCategoryDto::from(category);
            assert_eq!(FoodCategory::from(dto), category);
        }
    }
}
