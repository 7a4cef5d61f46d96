use serde::{Deserialize, Serialize};

/// The fixed category label set shared by items, providers and the vision model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Fruit,
    Vegetable,
    Meat,
    Dairy,
    Frozen,
    Drink,
    Sauce,
    Snack,
    /// Fallback when nothing more specific applies.
    #[default]
    Pantry,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 9] = [
        FoodCategory::Fruit,
        FoodCategory::Vegetable,
        FoodCategory::Meat,
        FoodCategory::Dairy,
        FoodCategory::Frozen,
        FoodCategory::Drink,
        FoodCategory::Sauce,
        FoodCategory::Snack,
        FoodCategory::Pantry,
    ];
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodCategory::Fruit => write!(f, "fruit"),
            FoodCategory::Vegetable => write!(f, "vegetable"),
            FoodCategory::Meat => write!(f, "meat"),
            FoodCategory::Dairy => write!(f, "dairy"),
            FoodCategory::Frozen => write!(f, "frozen"),
            FoodCategory::Drink => write!(f, "drink"),
            FoodCategory::Sauce => write!(f, "sauce"),
            FoodCategory::Snack => write!(f, "snack"),
            FoodCategory::Pantry => write!(f, "pantry"),
        }
    }
}

impl std::str::FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fruit" => Ok(FoodCategory::Fruit),
            "vegetable" => Ok(FoodCategory::Vegetable),
            "meat" => Ok(FoodCategory::Meat),
            "dairy" => Ok(FoodCategory::Dairy),
            "frozen" => Ok(FoodCategory::Frozen),
            "drink" => Ok(FoodCategory::Drink),
            "sauce" => Ok(FoodCategory::Sauce),
            "snack" => Ok(FoodCategory::Snack),
            "pantry" => Ok(FoodCategory::Pantry),
            _ => Err(format!("Invalid food category: {}", s)),
        }
    }
}

/// Maps a provider's raw labels (tags, product names, descriptions) onto the
/// fixed category set. Implementations are swappable per market.
pub trait CategoryClassifier: Send + Sync {
    fn classify(&self, labels: &[&str]) -> FoodCategory;
}

/// Exact match on taxonomy tags such as `en:dairies`.
///
/// Tags are checked from last to first because taxonomies list them from the
/// most general to the most specific.
pub struct TagCategoryClassifier {
    rules: Vec<(FoodCategory, Vec<&'static str>)>,
}

impl TagCategoryClassifier {
    pub fn new(rules: Vec<(FoodCategory, Vec<&'static str>)>) -> Self {
        Self { rules }
    }

    /// Rules for the Open Food Facts category taxonomy.
    pub fn open_food_facts() -> Self {
        Self::new(vec![
            (
                FoodCategory::Frozen,
                vec!["frozen-foods", "frozen-desserts", "ice-creams", "frozen-meals"],
            ),
            (
                FoodCategory::Drink,
                vec![
                    "beverages",
                    "waters",
                    "juices",
                    "fruit-juices",
                    "juices-and-nectars",
                    "sodas",
                    "coffees",
                    "teas",
                    "plant-based-milks",
                ],
            ),
            (
                FoodCategory::Dairy,
                vec!["dairies", "milks", "cheeses", "yogurts", "butters", "creams"],
            ),
            (
                FoodCategory::Meat,
                vec!["meats", "poultry", "fishes", "seafood", "sausages", "hams"],
            ),
            (
                FoodCategory::Sauce,
                vec!["sauces", "condiments", "ketchup", "mayonnaises", "dressings"],
            ),
            (
                FoodCategory::Snack,
                vec![
                    "snacks",
                    "sweet-snacks",
                    "salty-snacks",
                    "chocolates",
                    "biscuits",
                    "candies",
                    "chips-and-fries",
                ],
            ),
            (FoodCategory::Fruit, vec!["fruits", "fresh-fruits"]),
            (FoodCategory::Vegetable, vec!["vegetables", "fresh-vegetables"]),
        ])
    }

    fn category_of(&self, tag: &str) -> Option<FoodCategory> {
        let tag = tag.trim().to_lowercase();
        let name = tag.split_once(':').map_or(tag.as_str(), |(_, name)| name);
        self.rules
            .iter()
            .find(|(_, tags)| tags.iter().any(|t| *t == name))
            .map(|(category, _)| *category)
    }
}

impl CategoryClassifier for TagCategoryClassifier {
    fn classify(&self, labels: &[&str]) -> FoodCategory {
        labels
            .iter()
            .rev()
            .find_map(|tag| self.category_of(tag))
            .unwrap_or_default()
    }
}

/// Substring match of keywords against free text; first rule wins.
pub struct KeywordCategoryClassifier {
    rules: Vec<(FoodCategory, Vec<&'static str>)>,
}

impl KeywordCategoryClassifier {
    pub fn new(rules: Vec<(FoodCategory, Vec<&'static str>)>) -> Self {
        Self { rules }
    }

    /// Korean product-name keywords. Frozen goes first so that "냉동만두" is
    /// frozen rather than a snack.
    pub fn korean() -> Self {
        Self::new(vec![
            (FoodCategory::Frozen, vec!["냉동", "아이스크림", "아이스바", "만두"]),
            (
                FoodCategory::Dairy,
                vec!["우유", "치즈", "요거트", "요구르트", "버터", "유제품", "생크림"],
            ),
            (
                FoodCategory::Drink,
                vec!["음료", "주스", "커피", "탄산", "생수", "두유", "사이다", "콜라", "차음료"],
            ),
            (
                FoodCategory::Meat,
                vec!["고기", "돼지", "소고기", "닭", "햄", "소시지", "베이컨", "육류", "생선", "수산"],
            ),
            (
                FoodCategory::Sauce,
                vec!["소스", "간장", "된장", "고추장", "케첩", "마요네즈", "드레싱", "장류", "조미료", "식초"],
            ),
            (
                FoodCategory::Snack,
                vec!["과자", "스낵", "초콜릿", "사탕", "쿠키", "비스킷", "젤리", "캔디"],
            ),
            (
                FoodCategory::Fruit,
                vec!["과일", "사과", "바나나", "딸기", "포도", "귤", "오렌지", "복숭아"],
            ),
            (
                FoodCategory::Vegetable,
                vec!["채소", "야채", "양파", "배추", "당근", "감자", "버섯", "나물"],
            ),
        ])
    }
}

impl CategoryClassifier for KeywordCategoryClassifier {
    fn classify(&self, labels: &[&str]) -> FoodCategory {
        let joined = labels.join(" ").to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| joined.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_every_category_name() {
        for category in FoodCategory::ALL {
            assert_eq!(category.to_string().parse::<FoodCategory>(), Ok(category));
        }
    }

    #[test]
    fn should_reject_unknown_category_name() {
        assert!("cereal".parse::<FoodCategory>().is_err());
    }

    #[test]
    fn should_prefer_most_specific_tag() {
        let classifier = TagCategoryClassifier::open_food_facts();
        let tags = [
            "en:plant-based-foods-and-beverages",
            "en:plant-based-foods",
            "en:fruits-and-vegetables-based-foods",
            "en:beverages",
            "en:fruit-juices",
        ];
        assert_eq!(classifier.classify(&tags), FoodCategory::Drink);
    }

    #[test]
    fn should_classify_dairy_tags() {
        let classifier = TagCategoryClassifier::open_food_facts();
        assert_eq!(
            classifier.classify(&["en:dairies", "en:fermented-foods", "en:yogurts"]),
            FoodCategory::Dairy
        );
    }

    #[test]
    fn should_fall_back_to_pantry_for_unmatched_tags() {
        let classifier = TagCategoryClassifier::open_food_facts();
        assert_eq!(
            classifier.classify(&["en:cereals-and-potatoes", "en:pastas"]),
            FoodCategory::Pantry
        );
        assert_eq!(classifier.classify(&[]), FoodCategory::Pantry);
    }

    #[test]
    fn should_match_korean_keywords_in_names() {
        let classifier = KeywordCategoryClassifier::korean();
        assert_eq!(classifier.classify(&["서울우유 1L"]), FoodCategory::Dairy);
        assert_eq!(classifier.classify(&["비비고 냉동만두"]), FoodCategory::Frozen);
        assert_eq!(classifier.classify(&["", "토마토케첩"]), FoodCategory::Sauce);
    }

    #[test]
    fn should_fall_back_to_pantry_for_unmatched_keywords() {
        let classifier = KeywordCategoryClassifier::korean();
        assert_eq!(classifier.classify(&["즉석밥"]), FoodCategory::Pantry);
    }
}
