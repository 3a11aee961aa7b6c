//! Randomly generated closet contents standing in for a backend.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::item::{ClosetItem, ItemId};
use crate::vocab::{Category, Condition, Season, Subcategory};

/// Number of items a mock fetch returns.
pub const MOCK_ITEM_COUNT: usize = 64;

/// Bundled asset served alongside the app.
pub const LOCAL_SAMPLE_IMAGE: &str = "/assets/orange-tshirt.png";

/// Deliberately unloadable image URL, exercising the tile placeholder.
pub const BROKEN_IMAGE: &str = "uhoh";

const BRANDS: &[&str] = &[
    "Adidas", "Zara", "Nike", "H&M", "Puma", "Uniqlo", "Gap", "Forever 21",
];
const COLORS: &[&str] = &[
    "White", "Black", "Red", "Blue", "Green", "Yellow", "Gray", "Purple",
];
const SIZES: &[&str] = &["US 9", "XS", "Large", "US 8", "S", "M", "US 10", "XXL"];
const MATERIALS: &[&str] = &["Cotton", "Wool", "Denim", "Leather", "Polyester", "Linen", ""];
const SOURCES: &[&str] = &["Store", "Online", "Gift", "Thrift", ""];
const TAGS: &[&str] = &["casual", "work", "favorite", "gym", "formal", "travel"];

/// Generate `count` items with ids `"1"` through `count`.
pub fn generate_items<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ClosetItem> {
    (1..=count).map(|i| generate_item(rng, i)).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn generate_item<R: Rng + ?Sized>(rng: &mut R, index: usize) -> ClosetItem {
    let category = Category::all().choose(rng).copied();
    let subcategory = category.and_then(|c| Subcategory::for_category(c).choose(rng).copied());

    let mut seasons = BTreeSet::new();
    for season in Season::all() {
        if rng.gen_bool(0.3) {
            seasons.insert(*season);
        }
    }

    let tag_count = rng.gen_range(0..=3);
    let tags = (0..tag_count).map(|_| pick(rng, TAGS)).collect();

    let purchase_price = rng
        .gen_bool(0.8)
        .then(|| (rng.gen_range(500..20_000) as f64) / 100.0);
    let original_price = purchase_price.map(|p| {
        let markup = rng.gen_range(100..250) as f64 / 100.0;
        (p * markup * 100.0).round() / 100.0
    });

    let date_acquired = if rng.gen_bool(0.7) {
        NaiveDate::from_ymd_opt(
            rng.gen_range(2015..=2024),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
        )
    } else {
        None
    };

    ClosetItem {
        id: ItemId(index.to_string()),
        brand: pick(rng, BRANDS),
        category,
        subcategory,
        color: pick(rng, COLORS),
        size: pick(rng, SIZES),
        image: random_image(rng),
        date_acquired,
        secondhand: rng.gen_bool(0.25),
        purchase_price,
        original_price,
        source: pick(rng, SOURCES),
        material: pick(rng, MATERIALS),
        condition: Condition::all().choose(rng).copied(),
        seasons,
        tags,
        ..ClosetItem::default()
    }
}

/// 5% missing, 5% broken, 10% local asset, otherwise a random-sized photo.
fn random_image<R: Rng + ?Sized>(rng: &mut R) -> Option<String> {
    let roll: f64 = rng.gen();
    if roll < 0.05 {
        None
    } else if roll < 0.10 {
        Some(BROKEN_IMAGE.to_string())
    } else if roll < 0.20 {
        Some(LOCAL_SAMPLE_IMAGE.to_string())
    } else {
        let width = rng.gen_range(100..600);
        let height = rng.gen_range(100..600);
        Some(format!("https://picsum.photos/{width}/{height}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count_with_unique_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = generate_items(&mut rng, MOCK_ITEM_COUNT);
        assert_eq!(items.len(), 64);
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 64);
        assert_eq!(items[0].id, ItemId("1".into()));
        assert_eq!(items[63].id, ItemId("64".into()));
    }

    #[test]
    fn test_generated_items_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        for item in generate_items(&mut rng, 200) {
            assert!(!item.brand.is_empty());
            let category = item.category.expect("category always set");
            if let Some(sub) = item.subcategory {
                assert_eq!(sub.category(), category);
            }
            assert!(item.tags.iter().all(|t| !t.trim().is_empty()));
            for price in [item.purchase_price, item.original_price].into_iter().flatten() {
                assert!(price.is_finite() && price >= 0.0);
            }
        }
    }

    #[test]
    fn test_image_mix_includes_missing_and_broken() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = generate_items(&mut rng, 1_000);
        assert!(items.iter().any(|i| i.image.is_none()));
        assert!(items.iter().any(|i| i.image.as_deref() == Some(BROKEN_IMAGE)));
        assert!(items
            .iter()
            .filter_map(|i| i.image.as_deref())
            .any(|url| url.starts_with("https://picsum.photos/")));
    }
}
