use crate::item::ClosetItem;

/// Case-insensitive substring match of `query` against the item's visible
/// text: brand, category, subcategory, color, size, material and tags.
/// Blank queries match everything.
pub fn matches_query(item: &ClosetItem, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(&item.brand)
        || item.category.is_some_and(|c| hit(c.label()) || hit(c.key()))
        || item.subcategory.is_some_and(|s| hit(s.label()) || hit(s.key()))
        || hit(&item.color)
        || hit(&item.size)
        || hit(&item.material)
        || item.tags.iter().any(|t| hit(t))
}

/// Items matching `query`, in store order.
pub fn filter_items<'a>(items: &'a [ClosetItem], query: &str) -> Vec<&'a ClosetItem> {
    items.iter().filter(|i| matches_query(i, query)).collect()
}
