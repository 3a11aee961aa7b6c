use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a closed vocabulary enum with a storage key and a display label
/// per member. The key is what gets serialized and stored.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $key)] $variant,)+
        }

        impl $name {
            pub fn all() -> &'static [$name] {
                &[$($name::$variant,)+]
            }

            /// Storage string, as used in serialized records and form values.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse a storage key. Blank or unknown keys yield `None`.
            pub fn from_key(key: &str) -> Option<$name> {
                match key.trim() {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

vocabulary! {
    /// Top-level kind of a clothing item.
    pub enum Category {
        Top => ("top", "Top"),
        Bottom => ("bottom", "Bottom"),
        Dress => ("dress", "Dress"),
        Outerwear => ("outerwear", "Outerwear"),
        Shoe => ("shoe", "Shoe"),
        Accessory => ("accessory", "Accessory"),
        Lingerie => ("lingerie", "Lingerie"),
        Sleepwear => ("sleepwear", "Sleepwear"),
        Swimsuit => ("swimsuit", "Swimsuit"),
        Uniform => ("uniform", "Uniform"),
    }
}

vocabulary! {
    pub enum Subcategory {
        TShirt => ("tShirt", "T-Shirt"),
        PoloShirt => ("poloShirt", "Polo Shirt"),
        Blouse => ("blouse", "Blouse"),
        Shirt => ("shirt", "Shirt"),
        Sweater => ("sweater", "Sweater"),
        Jacket => ("jacket", "Jacket"),
        Hoodie => ("hoodie", "Hoodie"),
        TankTop => ("tankTop", "Tank Top"),
        CropTop => ("cropTop", "Crop Top"),
        Bodice => ("bodice", "Bodice"),
        Vest => ("vest", "Vest"),
        Jeans => ("jeans", "Jeans"),
        Pants => ("pants", "Pants"),
        Skirt => ("skirt", "Skirt"),
        Shorts => ("shorts", "Shorts"),
        Trousers => ("trousers", "Trousers"),
        Capris => ("capris", "Capris"),
        Leggings => ("leggings", "Leggings"),
        Sweatpants => ("sweatpants", "Sweatpants"),
        Sundress => ("sundress", "Sundress"),
        CocktailDress => ("cocktailDress", "Cocktail Dress"),
        EveningDress => ("eveningDress", "Evening Dress"),
        PartyDress => ("partyDress", "Party Dress"),
        WorkDress => ("workDress", "Work Dress"),
        CasualDress => ("casualDress", "Casual Dress"),
        Coat => ("coat", "Coat"),
        Parka => ("parka", "Parka"),
        TrenchCoat => ("trenchCoat", "Trench Coat"),
        Windbreaker => ("windbreaker", "Windbreaker"),
        Cardigan => ("cardigan", "Cardigan"),
        Blazer => ("blazer", "Blazer"),
        Sneakers => ("sneakers", "Sneakers"),
        Boots => ("boots", "Boots"),
        Sandals => ("sandals", "Sandals"),
        Heels => ("heels", "Heels"),
        Flats => ("flats", "Flats"),
        Loafers => ("loafers", "Loafers"),
        AnkleBoots => ("ankleBoots", "Ankle Boots"),
        HikingBoots => ("hikingBoots", "Hiking Boots"),
        Hat => ("hat", "Hat"),
        Scarf => ("scarf", "Scarf"),
        Gloves => ("gloves", "Gloves"),
        Belt => ("belt", "Belt"),
        Jewelry => ("jewelry", "Jewelry"),
        Sunglasses => ("sunglasses", "Sunglasses"),
        Wallet => ("wallet", "Wallet"),
        Bag => ("bag", "Bag"),
        Bra => ("bra", "Bra"),
        Panties => ("panties", "Panties"),
        Robe => ("robe", "Robe"),
        Negligee => ("negligee", "Negligee"),
        Camisole => ("camisole", "Camisole"),
        Pajamas => ("pajamas", "Pajamas"),
        Nightgown => ("nightgown", "Nightgown"),
        SleepShirt => ("sleepShirt", "Sleep Shirt"),
        Bikini => ("bikini", "Bikini"),
        OnePiece => ("onePiece", "One Piece"),
        SwimShorts => ("swimShorts", "Swim Shorts"),
        RashGuard => ("rashGuard", "Rash Guard"),
        SchoolUniform => ("schoolUniform", "School Uniform"),
        WorkUniform => ("workUniform", "Work Uniform"),
        MilitaryUniform => ("militaryUniform", "Military Uniform"),
        SportsUniform => ("sportsUniform", "Sports Uniform"),
    }
}

impl Subcategory {
    /// The category this subcategory is listed under.
    pub fn category(self) -> Category {
        use Subcategory::*;
        match self {
            TShirt | PoloShirt | Blouse | Shirt | Sweater | Jacket | Hoodie | TankTop
            | CropTop | Bodice | Vest => Category::Top,
            Jeans | Pants | Skirt | Shorts | Trousers | Capris | Leggings | Sweatpants => {
                Category::Bottom
            }
            Sundress | CocktailDress | EveningDress | PartyDress | WorkDress | CasualDress => {
                Category::Dress
            }
            Coat | Parka | TrenchCoat | Windbreaker | Cardigan | Blazer => Category::Outerwear,
            Sneakers | Boots | Sandals | Heels | Flats | Loafers | AnkleBoots | HikingBoots => {
                Category::Shoe
            }
            Hat | Scarf | Gloves | Belt | Jewelry | Sunglasses | Wallet | Bag => {
                Category::Accessory
            }
            Bra | Panties | Robe | Negligee | Camisole => Category::Lingerie,
            Pajamas | Nightgown | SleepShirt => Category::Sleepwear,
            Bikini | OnePiece | SwimShorts | RashGuard => Category::Swimsuit,
            SchoolUniform | WorkUniform | MilitaryUniform | SportsUniform => Category::Uniform,
        }
    }

    /// Subcategories under `category`, in vocabulary order.
    pub fn for_category(category: Category) -> Vec<Subcategory> {
        Subcategory::all()
            .iter()
            .copied()
            .filter(|s| s.category() == category)
            .collect()
    }
}

vocabulary! {
    pub enum Condition {
        Excellent => ("excellent", "Excellent"),
        Good => ("good", "Good"),
        Fair => ("fair", "Fair"),
        Poor => ("poor", "Poor"),
        Damaged => ("damaged", "Damaged"),
    }
}

vocabulary! {
    /// Seasons an item is worn in. Ordering follows declaration order, which
    /// is also the display order.
    pub enum Season {
        Spring => ("spring", "Spring"),
        Summer => ("summer", "Summer"),
        Fall => ("fall", "Fall"),
        Winter => ("winter", "Winter"),
        AllSeason => ("allSeason", "All Season"),
    }
}

vocabulary! {
    /// Collection tile size, persisted as its key.
    pub enum TileSize {
        Sm => ("sm", "SM"),
        Md => ("md", "MD"),
        Lg => ("lg", "LG"),
        Xl => ("xl", "XL"),
    }
}

/// Viewports narrower than this start with the smallest tiles.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

impl TileSize {
    /// Minimum tile width in CSS pixels.
    pub fn pixels(self) -> u32 {
        match self {
            TileSize::Sm => 150,
            TileSize::Md => 200,
            TileSize::Lg => 250,
            TileSize::Xl => 300,
        }
    }

    /// Pick the tile size at mount: a valid saved key wins, otherwise narrow
    /// viewports get `Sm` and everything else `Lg`.
    pub fn resolve(saved: Option<&str>, viewport_width: f64) -> TileSize {
        if let Some(size) = saved.and_then(TileSize::from_key) {
            return size;
        }
        if viewport_width < NARROW_VIEWPORT_PX {
            TileSize::Sm
        } else {
            TileSize::Lg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for c in Category::all() {
            assert_eq!(Category::from_key(c.key()), Some(*c));
        }
        for s in Subcategory::all() {
            assert_eq!(Subcategory::from_key(s.key()), Some(*s));
        }
        assert_eq!(Season::from_key("allSeason"), Some(Season::AllSeason));
        assert_eq!(Condition::from_key(""), None);
        assert_eq!(Condition::from_key("likeNew"), None);
    }

    #[test]
    fn test_every_category_has_subcategories() {
        for c in Category::all() {
            assert!(!Subcategory::for_category(*c).is_empty(), "{c:?} has none");
        }
        assert_eq!(Subcategory::for_category(Category::Sleepwear).len(), 3);
        assert_eq!(Subcategory::all().len(), 63);
    }

    #[test]
    fn test_serde_uses_storage_key() {
        let json = serde_json::to_string(&Subcategory::CocktailDress).unwrap();
        assert_eq!(json, "\"cocktailDress\"");
        let season: Season = serde_json::from_str("\"allSeason\"").unwrap();
        assert_eq!(season, Season::AllSeason);
    }

    #[test]
    fn test_tile_size_pixels() {
        let px: Vec<u32> = TileSize::all().iter().map(|s| s.pixels()).collect();
        assert_eq!(px, vec![150, 200, 250, 300]);
    }

    #[test]
    fn test_tile_size_resolve() {
        assert_eq!(TileSize::resolve(Some("xl"), 400.0), TileSize::Xl);
        assert_eq!(TileSize::resolve(Some("huge"), 400.0), TileSize::Sm);
        assert_eq!(TileSize::resolve(None, 767.0), TileSize::Sm);
        assert_eq!(TileSize::resolve(None, 768.0), TileSize::Lg);
        assert_eq!(TileSize::resolve(Some(""), 1920.0), TileSize::Lg);
    }
}
