use serde::{Deserialize, Serialize};

use crate::domain::product::category::FoodCategory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

/// Display label for one entry of the fixed category set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub category: FoodCategory,
    pub label: String,
}

/// Per-session preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub theme: Theme,
    pub categories: Vec<CategoryDefinition>,
}

impl SessionSettings {
    pub fn label_for(&self, category: FoodCategory) -> String {
        self.categories
            .iter()
            .find(|definition| definition.category == category)
            .map(|definition| definition.label.clone())
            .unwrap_or_else(|| category.to_string())
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        let label = |category: FoodCategory| match category {
            FoodCategory::Fruit => "과일",
            FoodCategory::Vegetable => "채소",
            FoodCategory::Meat => "육류",
            FoodCategory::Dairy => "유제품",
            FoodCategory::Frozen => "냉동",
            FoodCategory::Drink => "음료",
            FoodCategory::Sauce => "소스",
            FoodCategory::Snack => "간식",
            FoodCategory::Pantry => "기타",
        };

        Self {
            theme: Theme::default(),
            categories: FoodCategory::ALL
                .iter()
                .map(|category| CategoryDefinition {
                    category: *category,
                    label: label(*category).to_string(),
                })
                .collect(),
        }
    }
}
