use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// A named look made of closet items. Display only for now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: String,
    pub name: String,
    pub item_ids: Vec<ItemId>,
    pub image: String,
}

/// Placeholder outfits shown on the outfits page.
pub fn sample_outfits() -> Vec<Outfit> {
    vec![
        Outfit {
            id: "1".into(),
            name: "Evening Look".into(),
            item_ids: vec![ItemId("1".into()), ItemId("2".into())],
            image: "https://via.placeholder.com/600x400?text=Evening+Look".into(),
        },
        Outfit {
            id: "2".into(),
            name: "Casual Wear".into(),
            item_ids: vec![ItemId("1".into())],
            image: "https://via.placeholder.com/600x400?text=Casual+Wear".into(),
        },
    ]
}

#[derive(Debug, Clone, Default)]
pub struct OutfitStore {
    outfits: Vec<Outfit>,
}

impl OutfitStore {
    pub fn with_samples() -> Self {
        Self {
            outfits: sample_outfits(),
        }
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn add_outfit(&mut self, outfit: Outfit) {
        self.outfits.push(outfit);
    }
}

impl Outfit {
    /// "1, 2"
    pub fn item_list(&self) -> String {
        self.item_ids
            .iter()
            .map(|id| id.0.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
