use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vocab::{Category, Condition, Season, Subcategory};

/// Opaque item identifier, unique within a store and never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One wardrobe entry.
///
/// Free-text fields use the empty string for "not set". Prices are always
/// finite and non-negative when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosetItem {
    /// Assigned once, never changed by an edit.
    pub id: ItemId,
    /// Required; must be non-blank to save.
    pub brand: String,
    /// Required to save. `None` is the unselected state of the form.
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    pub color: String,
    /// Free text ("M", "US 9"), not a vocabulary.
    pub size: String,
    /// URL or data URL. `None` renders the placeholder.
    pub image: Option<String>,
    /// Date only, no time of day.
    pub date_acquired: Option<NaiveDate>,
    pub secondhand: bool,
    /// Price paid. Finite and non-negative.
    pub purchase_price: Option<f64>,
    /// Retail price. Finite and non-negative, not ordered against
    /// `purchase_price`.
    pub original_price: Option<f64>,
    pub purchase_location: String,
    /// Where it came from: store, gift, thrift...
    pub source: String,
    pub material: String,
    pub personal_note: String,
    pub description: String,
    pub condition: Option<Condition>,
    pub condition_details: String,
    /// Seasons worn in. A set, so toggling never duplicates; iterates in
    /// display order.
    pub seasons: BTreeSet<Season>,
    /// Parsed from comma-separated input. Never contains blank entries;
    /// order and duplicates are kept.
    pub tags: Vec<String>,
    /// Hidden from outfit suggestions.
    pub hidden: bool,
}

impl ClosetItem {
    /// A blank item with only the id assigned.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Heading used by the dialog and tile overlay, e.g. "Zara - Top".
    pub fn title(&self) -> String {
        match self.category {
            Some(category) => format!("{} - {}", self.brand, category.label()),
            None => self.brand.clone(),
        }
    }

    /// "Category - Subcategory" line of the tile overlay.
    pub fn category_line(&self) -> String {
        let category = self.category.map(|c| c.label()).unwrap_or("");
        match self.subcategory {
            Some(sub) => format!("{category} - {}", sub.label()),
            None => category.to_string(),
        }
    }

    /// "Color (Size)" line of the tile overlay.
    pub fn color_size_line(&self) -> String {
        match (self.color.is_empty(), self.size.is_empty()) {
            (false, false) => format!("{} ({})", self.color, self.size),
            (false, true) => self.color.clone(),
            (true, false) => format!("({})", self.size),
            (true, true) => String::new(),
        }
    }

    /// Seasons in display order.
    pub fn season_list(&self) -> Vec<Season> {
        self.seasons.iter().copied().collect()
    }
}

/// Format an optional price for display, e.g. "$12.50" or "—".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${p:.2}"),
        None => "—".to_string(),
    }
}
