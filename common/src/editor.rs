use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::ClosetItem;
use crate::vocab::{Category, Condition, Season, Subcategory};

/// Editable fields of a [`ClosetItem`]. Keys the error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemField {
    Brand,
    Category,
    Subcategory,
    Color,
    Size,
    Image,
    DateAcquired,
    Secondhand,
    PurchasePrice,
    OriginalPrice,
    PurchaseLocation,
    Source,
    Material,
    PersonalNote,
    Description,
    Condition,
    ConditionDetails,
    Seasons,
    Tags,
    Hidden,
}

impl ItemField {
    /// Tab the field's control lives on. The image sits beside the tabs.
    pub fn tab(self) -> Option<ItemTab> {
        use ItemField::*;
        match self {
            Brand | Category | Subcategory | Color | Size => Some(ItemTab::BasicInfo),
            DateAcquired | Secondhand | PurchasePrice | OriginalPrice | PurchaseLocation
            | Source => Some(ItemTab::Acquisition),
            Material | PersonalNote | Description | Condition | ConditionDetails | Hidden => {
                Some(ItemTab::Details)
            }
            Seasons | Tags => Some(ItemTab::TagsSeasons),
            Image => None,
        }
    }
}

/// Tabs of the item dialog, shared by the view and edit presentations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemTab {
    #[default]
    BasicInfo,
    Acquisition,
    Details,
    TagsSeasons,
}

impl ItemTab {
    pub fn all() -> &'static [ItemTab] {
        &[
            ItemTab::BasicInfo,
            ItemTab::Acquisition,
            ItemTab::Details,
            ItemTab::TagsSeasons,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemTab::BasicInfo => "Basic Info",
            ItemTab::Acquisition => "Acquisition",
            ItemTab::Details => "Details",
            ItemTab::TagsSeasons => "Tags & Seasons",
        }
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ItemField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ItemField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: ItemField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: ItemField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ItemField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Which fields must be filled in before an edit can be saved.
///
/// Brand and category are always required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub require_image: bool,
}

/// Check `item` against `policy`, one message per failing field.
pub fn validate(item: &ClosetItem, policy: &ValidationPolicy) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if item.brand.trim().is_empty() {
        errors.insert(ItemField::Brand, "Brand is required");
    }
    if item.category.is_none() {
        errors.insert(ItemField::Category, "Category is required");
    }
    if policy.require_image && item.image.as_deref().map_or(true, |s| s.trim().is_empty()) {
        errors.insert(ItemField::Image, "Image is required");
    }
    errors
}

/// Split comma-delimited tag input. Pieces are trimmed, empty pieces dropped,
/// order and duplicates kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Parse a price input. Blank or unparseable input, including `NaN` and
/// infinities, gives `None`; negatives clamp to zero.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v.max(0.0)),
        _ => None,
    }
}

/// Render a stored price back into its input box.
pub fn price_input(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// One edit to the working buffer. Text-backed numeric and list fields carry
/// the raw input so the control can show exactly what was typed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Brand(String),
    Category(Option<Category>),
    Subcategory(Option<Subcategory>),
    Color(String),
    Size(String),
    Image(Option<String>),
    DateAcquired(Option<NaiveDate>),
    Secondhand(bool),
    PurchasePrice(String),
    OriginalPrice(String),
    PurchaseLocation(String),
    Source(String),
    Material(String),
    PersonalNote(String),
    Description(String),
    Condition(Option<Condition>),
    ConditionDetails(String),
    ToggleSeason(Season),
    Tags(String),
    Hidden(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> ItemField {
        match self {
            FieldUpdate::Brand(_) => ItemField::Brand,
            FieldUpdate::Category(_) => ItemField::Category,
            FieldUpdate::Subcategory(_) => ItemField::Subcategory,
            FieldUpdate::Color(_) => ItemField::Color,
            FieldUpdate::Size(_) => ItemField::Size,
            FieldUpdate::Image(_) => ItemField::Image,
            FieldUpdate::DateAcquired(_) => ItemField::DateAcquired,
            FieldUpdate::Secondhand(_) => ItemField::Secondhand,
            FieldUpdate::PurchasePrice(_) => ItemField::PurchasePrice,
            FieldUpdate::OriginalPrice(_) => ItemField::OriginalPrice,
            FieldUpdate::PurchaseLocation(_) => ItemField::PurchaseLocation,
            FieldUpdate::Source(_) => ItemField::Source,
            FieldUpdate::Material(_) => ItemField::Material,
            FieldUpdate::PersonalNote(_) => ItemField::PersonalNote,
            FieldUpdate::Description(_) => ItemField::Description,
            FieldUpdate::Condition(_) => ItemField::Condition,
            FieldUpdate::ConditionDetails(_) => ItemField::ConditionDetails,
            FieldUpdate::ToggleSeason(_) => ItemField::Seasons,
            FieldUpdate::Tags(_) => ItemField::Tags,
            FieldUpdate::Hidden(_) => ItemField::Hidden,
        }
    }
}

/// Working buffer of one edit session plus the raw text of controls whose
/// stored value is derived from what was typed.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    buffer: ClosetItem,
    tag_input: String,
    purchase_price_input: String,
    original_price_input: String,
}

impl EditSession {
    pub fn new(item: ClosetItem) -> Self {
        Self {
            tag_input: join_tags(&item.tags),
            purchase_price_input: price_input(item.purchase_price),
            original_price_input: price_input(item.original_price),
            buffer: item,
        }
    }

    pub fn buffer(&self) -> &ClosetItem {
        &self.buffer
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn purchase_price_input(&self) -> &str {
        &self.purchase_price_input
    }

    pub fn original_price_input(&self) -> &str {
        &self.original_price_input
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        let item = &mut self.buffer;
        match update {
            FieldUpdate::Brand(v) => item.brand = v,
            FieldUpdate::Category(v) => {
                // A subcategory from another category no longer applies.
                if item.subcategory.is_some_and(|s| Some(s.category()) != v) {
                    item.subcategory = None;
                }
                item.category = v;
            }
            FieldUpdate::Subcategory(v) => item.subcategory = v,
            FieldUpdate::Color(v) => item.color = v,
            FieldUpdate::Size(v) => item.size = v,
            FieldUpdate::Image(v) => item.image = v,
            FieldUpdate::DateAcquired(v) => item.date_acquired = v,
            FieldUpdate::Secondhand(v) => item.secondhand = v,
            FieldUpdate::PurchasePrice(raw) => {
                item.purchase_price = parse_price(&raw);
                self.purchase_price_input = raw;
            }
            FieldUpdate::OriginalPrice(raw) => {
                item.original_price = parse_price(&raw);
                self.original_price_input = raw;
            }
            FieldUpdate::PurchaseLocation(v) => item.purchase_location = v,
            FieldUpdate::Source(v) => item.source = v,
            FieldUpdate::Material(v) => item.material = v,
            FieldUpdate::PersonalNote(v) => item.personal_note = v,
            FieldUpdate::Description(v) => item.description = v,
            FieldUpdate::Condition(v) => item.condition = v,
            FieldUpdate::ConditionDetails(v) => item.condition_details = v,
            FieldUpdate::ToggleSeason(season) => {
                if !item.seasons.remove(&season) {
                    item.seasons.insert(season);
                }
            }
            FieldUpdate::Tags(raw) => {
                item.tags = parse_tags(&raw);
                self.tag_input = raw;
            }
            FieldUpdate::Hidden(v) => item.hidden = v,
        }
    }

    fn into_buffer(self) -> ClosetItem {
        self.buffer
    }
}

/// Presentation an editor opens in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
enum EditorState {
    Viewing,
    Editing(EditSession),
}

/// Result of [`ItemEditor::save`].
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Validation passed; the caller should persist this item.
    Saved(ClosetItem),
    /// Validation failed; the editor stays in editing mode.
    Invalid(FieldErrors),
    NotEditing,
}

/// Notification for the caller of [`ItemEditor::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Closed,
}

/// View/edit state machine for a single item.
///
/// The canonical item is only replaced by a successful [`save`](Self::save);
/// every field update goes to the session's working buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEditor {
    item: ClosetItem,
    state: EditorState,
    errors: FieldErrors,
    policy: ValidationPolicy,
    active_tab: ItemTab,
    epoch: SessionEpoch,
}

/// Identifies one edit session. Work started during a session (an image
/// upload, say) carries its epoch so results arriving after the session
/// ended can be told apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionEpoch(u64);

impl ItemEditor {
    pub fn new(item: ClosetItem, mode: EditorMode, policy: ValidationPolicy) -> Self {
        let state = match mode {
            EditorMode::Viewing => EditorState::Viewing,
            EditorMode::Editing => EditorState::Editing(EditSession::new(item.clone())),
        };
        Self {
            item,
            state,
            errors: FieldErrors::new(),
            policy,
            active_tab: ItemTab::default(),
            epoch: SessionEpoch::default(),
        }
    }

    /// The canonical item, untouched by unsaved edits.
    pub fn item(&self) -> &ClosetItem {
        &self.item
    }

    pub fn mode(&self) -> EditorMode {
        match self.state {
            EditorState::Viewing => EditorMode::Viewing,
            EditorState::Editing(_) => EditorMode::Editing,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode() == EditorMode::Editing
    }

    pub fn session(&self) -> Option<&EditSession> {
        match &self.state {
            EditorState::Editing(session) => Some(session),
            EditorState::Viewing => None,
        }
    }

    /// What the dialog should render: the buffer while editing, the canonical
    /// item otherwise.
    pub fn working(&self) -> &ClosetItem {
        self.session().map(EditSession::buffer).unwrap_or(&self.item)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn active_tab(&self) -> ItemTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: ItemTab) {
        self.active_tab = tab;
    }

    /// Epoch of the current session. Changes whenever a session starts or
    /// ends.
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    fn bump_epoch(&mut self) {
        self.epoch = SessionEpoch(self.epoch.0.wrapping_add(1));
    }

    pub fn begin_edit(&mut self) {
        if self.is_editing() {
            return;
        }
        self.state = EditorState::Editing(EditSession::new(self.item.clone()));
        self.errors.clear();
        self.bump_epoch();
    }

    /// Apply one field edit to the buffer and clear that field's error.
    /// Ignored while viewing.
    pub fn apply(&mut self, update: FieldUpdate) {
        let EditorState::Editing(session) = &mut self.state else {
            return;
        };
        self.errors.remove(update.field());
        session.apply(update);
    }

    /// Apply `update` only if the session that started at `epoch` is still
    /// open. Returns whether it was applied.
    pub fn apply_in_session(&mut self, epoch: SessionEpoch, update: FieldUpdate) -> bool {
        if epoch != self.epoch || !self.is_editing() {
            return false;
        }
        self.apply(update);
        true
    }

    /// Discard the buffer and ask the caller to close.
    pub fn cancel(&mut self) -> EditorEvent {
        if self.is_editing() {
            self.bump_epoch();
        }
        self.state = EditorState::Viewing;
        self.errors.clear();
        EditorEvent::Closed
    }

    pub fn save(&mut self) -> SaveOutcome {
        let EditorState::Editing(session) = &self.state else {
            return SaveOutcome::NotEditing;
        };

        let errors = validate(session.buffer(), &self.policy);
        if !errors.is_empty() {
            self.reveal_first_error(&errors);
            self.errors = errors.clone();
            return SaveOutcome::Invalid(errors);
        }

        let state = std::mem::replace(&mut self.state, EditorState::Viewing);
        if let EditorState::Editing(session) = state {
            self.item = session.into_buffer();
        }
        self.errors.clear();
        self.bump_epoch();
        SaveOutcome::Saved(self.item.clone())
    }

    /// Switch to the tab of the first error unless the current tab already
    /// shows one.
    fn reveal_first_error(&mut self, errors: &FieldErrors) {
        let tabs: Vec<ItemTab> = errors.iter().filter_map(|(f, _)| f.tab()).collect();
        if !tabs.is_empty() && !tabs.contains(&self.active_tab) {
            self.active_tab = tabs[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn shirt() -> ClosetItem {
        ClosetItem {
            brand: "Uniqlo".into(),
            category: Some(Category::Top),
            subcategory: Some(Subcategory::TShirt),
            color: "White".into(),
            size: "M".into(),
            tags: vec!["basic".into(), "cotton".into()],
            purchase_price: Some(14.9),
            ..ClosetItem::new(ItemId("1".into()))
        }
    }

    fn editing(item: ClosetItem) -> ItemEditor {
        ItemEditor::new(item, EditorMode::Editing, ValidationPolicy::default())
    }

    #[test]
    fn test_parse_tags_drops_blanks_keeps_duplicates() {
        assert_eq!(parse_tags("a, b, b,  "), vec!["a", "b", "b"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn test_parse_tags_stable_after_rejoin() {
        for raw in ["a, b, b,  ", "x,y", "  lone  ", ",,work , casual,"] {
            let once = parse_tags(raw);
            assert_eq!(parse_tags(&join_tags(&once)), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("  "), None);
        assert_eq!(parse_price("19.99"), Some(19.99));
        assert_eq!(parse_price(" 5 "), Some(5.0));
        assert_eq!(parse_price("-3"), Some(0.0));
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_starts_in_requested_mode() {
        let viewer = ItemEditor::new(shirt(), EditorMode::default(), ValidationPolicy::default());
        assert_eq!(viewer.mode(), EditorMode::Viewing);
        assert!(viewer.session().is_none());
        assert!(editing(shirt()).is_editing());
    }

    #[test]
    fn test_begin_edit_copies_item_and_clears_errors() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Brand("  ".into()));
        assert!(matches!(editor.save(), SaveOutcome::Invalid(_)));
        editor.cancel();

        editor.begin_edit();
        assert!(editor.errors().is_empty());
        assert_eq!(editor.working(), &shirt());
    }

    #[test]
    fn test_edits_touch_only_buffer() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Color("Black".into()));
        assert_eq!(editor.working().color, "Black");
        assert_eq!(editor.item().color, "White");
    }

    #[test]
    fn test_apply_ignored_while_viewing() {
        let mut editor = ItemEditor::new(shirt(), EditorMode::Viewing, ValidationPolicy::default());
        editor.apply(FieldUpdate::Brand("Other".into()));
        assert_eq!(editor.working().brand, "Uniqlo");
        assert_eq!(editor.save(), SaveOutcome::NotEditing);
    }

    #[test]
    fn test_blank_brand_blocks_save() {
        for blank in ["", "   ", "\t"] {
            let mut editor = editing(shirt());
            editor.apply(FieldUpdate::Brand(blank.into()));
            match editor.save() {
                SaveOutcome::Invalid(errors) => {
                    assert_eq!(errors.get(ItemField::Brand), Some("Brand is required"));
                    assert_eq!(errors.len(), 1);
                }
                other => panic!("expected invalid, got {other:?}"),
            }
            assert!(editor.is_editing());
            assert_eq!(editor.item(), &shirt());
        }
    }

    #[test]
    fn test_missing_category_reported() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Category(None));
        editor.apply(FieldUpdate::Brand(String::new()));
        let SaveOutcome::Invalid(errors) = editor.save() else {
            panic!("expected invalid");
        };
        assert!(errors.contains(ItemField::Brand));
        assert_eq!(errors.get(ItemField::Category), Some("Category is required"));
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Brand(String::new()));
        editor.apply(FieldUpdate::Category(None));
        editor.save();
        assert_eq!(editor.errors().len(), 2);

        editor.apply(FieldUpdate::Brand("N".into()));
        assert!(!editor.errors().contains(ItemField::Brand));
        assert!(editor.errors().contains(ItemField::Category));
    }

    #[test]
    fn test_untouched_save_emits_buffer() {
        let mut editor = editing(shirt());
        assert_eq!(editor.save(), SaveOutcome::Saved(shirt()));
        assert_eq!(editor.mode(), EditorMode::Viewing);
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn test_save_replaces_canonical_item() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Size("L".into()));
        let SaveOutcome::Saved(saved) = editor.save() else {
            panic!("expected saved");
        };
        assert_eq!(saved.size, "L");
        assert_eq!(editor.item(), &saved);
    }

    #[test]
    fn test_cancel_restores_original() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Brand("Changed".into()));
        editor.apply(FieldUpdate::ToggleSeason(Season::Winter));
        editor.apply(FieldUpdate::Tags("a, b".into()));
        editor.apply(FieldUpdate::PurchasePrice("99".into()));
        editor.apply(FieldUpdate::Secondhand(true));
        editor.apply(FieldUpdate::Image(None));

        assert_eq!(editor.cancel(), EditorEvent::Closed);
        assert_eq!(editor.mode(), EditorMode::Viewing);
        assert_eq!(editor.working(), &shirt());
        assert_eq!(editor.item(), &shirt());
    }

    #[test]
    fn test_toggle_season_twice_restores_membership() {
        for season in Season::all() {
            let mut editor = editing(shirt());
            editor.apply(FieldUpdate::ToggleSeason(Season::Summer));
            let before = editor.working().seasons.clone();
            editor.apply(FieldUpdate::ToggleSeason(*season));
            editor.apply(FieldUpdate::ToggleSeason(*season));
            assert_eq!(editor.working().seasons, before);
        }
    }

    #[test]
    fn test_tags_keep_raw_input() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Tags("work, ".into()));
        let session = editor.session().unwrap();
        assert_eq!(session.tag_input(), "work, ");
        assert_eq!(session.buffer().tags, vec!["work"]);
    }

    #[test]
    fn test_invalid_price_never_stores_nan() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::PurchasePrice("12,5".into()));
        editor.apply(FieldUpdate::OriginalPrice("-1".into()));
        let item = editor.working();
        assert_eq!(item.purchase_price, None);
        assert_eq!(item.original_price, Some(0.0));
        assert_eq!(editor.session().unwrap().purchase_price_input(), "12,5");
    }

    #[test]
    fn test_category_change_drops_foreign_subcategory() {
        let mut editor = editing(shirt());
        editor.apply(FieldUpdate::Category(Some(Category::Top)));
        assert_eq!(editor.working().subcategory, Some(Subcategory::TShirt));
        editor.apply(FieldUpdate::Category(Some(Category::Shoe)));
        assert_eq!(editor.working().subcategory, None);
    }

    #[test]
    fn test_image_policy() {
        let mut item = shirt();
        item.image = None;
        let strict = ValidationPolicy { require_image: true };
        assert_eq!(
            validate(&item, &strict).get(ItemField::Image),
            Some("Image is required")
        );
        assert!(validate(&item, &ValidationPolicy::default()).is_empty());
    }

    #[test]
    fn test_late_result_skips_later_sessions() {
        let mut editor = ItemEditor::new(shirt(), EditorMode::Viewing, ValidationPolicy::default());
        editor.begin_edit();
        let started = editor.epoch();

        // Saved, then reopened before the upload came back.
        assert!(matches!(editor.save(), SaveOutcome::Saved(_)));
        assert!(!editor.apply_in_session(started, FieldUpdate::Image(Some("data:late".into()))));
        editor.begin_edit();
        assert_ne!(editor.epoch(), started);
        assert!(!editor.apply_in_session(started, FieldUpdate::Image(Some("data:late".into()))));
        assert_eq!(editor.working().image, None);

        let current = editor.epoch();
        assert!(editor.apply_in_session(current, FieldUpdate::Image(Some("data:ok".into()))));
        assert_eq!(editor.working().image.as_deref(), Some("data:ok"));

        editor.cancel();
        assert!(!editor.apply_in_session(current, FieldUpdate::Color("Red".into())));
    }

    #[test]
    fn test_invalid_save_keeps_epoch() {
        let mut editor = editing(shirt());
        let epoch = editor.epoch();
        editor.apply(FieldUpdate::Brand(String::new()));
        assert!(matches!(editor.save(), SaveOutcome::Invalid(_)));
        assert_eq!(editor.epoch(), epoch);
        assert!(editor.apply_in_session(epoch, FieldUpdate::Brand("Gap".into())));
    }

    #[test]
    fn test_invalid_save_reveals_error_tab() {
        let mut editor = editing(shirt());
        editor.select_tab(ItemTab::TagsSeasons);
        editor.apply(FieldUpdate::Brand(String::new()));
        editor.save();
        assert_eq!(editor.active_tab(), ItemTab::BasicInfo);
    }
}
