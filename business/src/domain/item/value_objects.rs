use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    Consumed,
    Discarded,
}

impl ItemStatus {
    /// Consumed and discarded items no longer sit in a fridge.
    pub fn is_finished(&self) -> bool {
        !matches!(self, ItemStatus::Available)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "available"),
            ItemStatus::Consumed => write!(f, "consumed"),
            ItemStatus::Discarded => write!(f, "discarded"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ItemStatus::Available),
            "consumed" => Ok(ItemStatus::Consumed),
            "discarded" => Ok(ItemStatus::Discarded),
            _ => Err(format!("Invalid item status: {}", s)),
        }
    }
}
