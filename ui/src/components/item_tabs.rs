use chrono::NaiveDate;
use dioxus::prelude::*;

use closet_common::editor::{FieldUpdate, ItemEditor, ItemField};
use closet_common::item::{format_price, ClosetItem};
use closet_common::vocab::{Category, Condition, Season, Subcategory};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "—".to_string()
    } else {
        text.to_string()
    }
}

fn label_or_dash(label: Option<&str>) -> String {
    label.map(str::to_string).unwrap_or_else(|| "—".to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Labelled text input or textarea with an optional inline error.
#[component]
fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] rows: Option<u32>,
) -> Element {
    let class = if error.is_some() { "input input-error" } else { "input" };
    rsx! {
        div { class: "form-group",
            label { "{label}" }
            if let Some(rows) = rows {
                textarea {
                    class: "{class}",
                    rows: "{rows}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                input {
                    r#type: "text",
                    class: "{class}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

#[component]
fn ReadOnlyField(label: String, value: String) -> Element {
    rsx! {
        div { class: "view-field",
            span { class: "view-label", "{label}" }
            span { class: "view-value", "{value}" }
        }
    }
}

fn error_for(editor: &Signal<ItemEditor>, field: ItemField) -> Option<String> {
    editor.read().errors().get(field).map(str::to_string)
}

fn working(editor: &Signal<ItemEditor>) -> ClosetItem {
    editor.read().working().clone()
}

// ─── Basic info ─────────────────────────────────────────────────────────────

#[component]
pub fn BasicInfoTabView(editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    rsx! {
        div { class: "tab-grid",
            ReadOnlyField { label: "Brand", value: or_dash(&item.brand) }
            ReadOnlyField { label: "Category", value: label_or_dash(item.category.map(|c| c.label())) }
            ReadOnlyField { label: "Subcategory", value: label_or_dash(item.subcategory.map(|s| s.label())) }
            ReadOnlyField { label: "Color", value: or_dash(&item.color) }
            ReadOnlyField { label: "Size", value: or_dash(&item.size) }
        }
    }
}

#[component]
pub fn BasicInfoTabEdit(mut editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    let category_error = error_for(&editor, ItemField::Category);
    let category_key = item.category.map(|c| c.key()).unwrap_or("");
    let subcategory_key = item.subcategory.map(|s| s.key()).unwrap_or("");
    let subcategories = match item.category {
        Some(category) => Subcategory::for_category(category),
        None => Subcategory::all().to_vec(),
    };

    rsx! {
        div { class: "tab-grid",
            TextField {
                label: "Brand",
                value: item.brand.clone(),
                placeholder: "Brand name",
                error: error_for(&editor, ItemField::Brand),
                on_input: move |v| editor.write().apply(FieldUpdate::Brand(v)),
            }
            div { class: "form-group",
                label { "Category" }
                select {
                    class: if category_error.is_some() { "select select-error" } else { "select" },
                    value: "{category_key}",
                    onchange: move |evt| {
                        editor.write().apply(FieldUpdate::Category(Category::from_key(&evt.value())));
                    },
                    option { value: "", "Select category" }
                    for c in Category::all().iter().copied() {
                        option { key: "{c.key()}", value: "{c.key()}", selected: Some(c) == item.category, "{c.label()}" }
                    }
                }
                if let Some(err) = category_error {
                    span { class: "field-error", "{err}" }
                }
            }
            div { class: "form-group",
                label { "Subcategory" }
                select {
                    class: "select",
                    value: "{subcategory_key}",
                    onchange: move |evt| {
                        editor.write().apply(FieldUpdate::Subcategory(Subcategory::from_key(&evt.value())));
                    },
                    option { value: "", "Select subcategory" }
                    for s in subcategories {
                        option { key: "{s.key()}", value: "{s.key()}", selected: Some(s) == item.subcategory, "{s.label()}" }
                    }
                }
            }
            TextField {
                label: "Color",
                value: item.color.clone(),
                placeholder: "Color",
                on_input: move |v| editor.write().apply(FieldUpdate::Color(v)),
            }
            TextField {
                label: "Size",
                value: item.size.clone(),
                placeholder: "Size",
                on_input: move |v| editor.write().apply(FieldUpdate::Size(v)),
            }
        }
    }
}

// ─── Acquisition ────────────────────────────────────────────────────────────

#[component]
pub fn AcquisitionTabView(editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    let date = item
        .date_acquired
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "—".to_string());
    rsx! {
        div { class: "tab-grid",
            ReadOnlyField { label: "Date Acquired", value: date }
            ReadOnlyField { label: "Secondhand", value: yes_no(item.secondhand).to_string() }
            ReadOnlyField { label: "Purchase Price", value: format_price(item.purchase_price) }
            ReadOnlyField { label: "Original Price", value: format_price(item.original_price) }
            ReadOnlyField { label: "Purchase Location", value: or_dash(&item.purchase_location) }
            ReadOnlyField { label: "Source", value: or_dash(&item.source) }
        }
    }
}

#[component]
pub fn AcquisitionTabEdit(mut editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    let (purchase_input, original_input) = editor
        .read()
        .session()
        .map(|s| (s.purchase_price_input().to_string(), s.original_price_input().to_string()))
        .unwrap_or_default();
    let date_value = item
        .date_acquired
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "tab-grid",
            div { class: "form-group",
                label { "Date Acquired" }
                input {
                    r#type: "date",
                    class: "input",
                    value: "{date_value}",
                    oninput: move |evt| {
                        let date = NaiveDate::parse_from_str(&evt.value(), DATE_FORMAT).ok();
                        editor.write().apply(FieldUpdate::DateAcquired(date));
                    },
                }
            }
            div { class: "form-group",
                label {
                    input {
                        r#type: "checkbox",
                        checked: item.secondhand,
                        onchange: move |evt| editor.write().apply(FieldUpdate::Secondhand(evt.checked())),
                    }
                    " Is this a secondhand item?"
                }
            }
            div { class: "form-group",
                label { "Purchase Price" }
                input {
                    r#type: "number",
                    class: "input",
                    min: "0",
                    step: "0.01",
                    placeholder: "Purchase price",
                    value: "{purchase_input}",
                    oninput: move |evt| editor.write().apply(FieldUpdate::PurchasePrice(evt.value())),
                }
            }
            div { class: "form-group",
                label { "Original Price" }
                input {
                    r#type: "number",
                    class: "input",
                    min: "0",
                    step: "0.01",
                    placeholder: "Original price",
                    value: "{original_input}",
                    oninput: move |evt| editor.write().apply(FieldUpdate::OriginalPrice(evt.value())),
                }
            }
            TextField {
                label: "Purchase Location",
                value: item.purchase_location.clone(),
                placeholder: "Purchase location",
                on_input: move |v| editor.write().apply(FieldUpdate::PurchaseLocation(v)),
            }
            TextField {
                label: "Source",
                value: item.source.clone(),
                placeholder: "Source",
                on_input: move |v| editor.write().apply(FieldUpdate::Source(v)),
            }
        }
    }
}

// ─── Details ────────────────────────────────────────────────────────────────

#[component]
pub fn DetailsTabView(editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    rsx! {
        div { class: "tab-grid",
            ReadOnlyField { label: "Material", value: or_dash(&item.material) }
            ReadOnlyField { label: "Condition", value: label_or_dash(item.condition.map(|c| c.label())) }
            ReadOnlyField { label: "Condition Details", value: or_dash(&item.condition_details) }
            ReadOnlyField { label: "Description", value: or_dash(&item.description) }
            ReadOnlyField { label: "Personal Note", value: or_dash(&item.personal_note) }
            ReadOnlyField { label: "Hidden", value: yes_no(item.hidden).to_string() }
        }
    }
}

#[component]
pub fn DetailsTabEdit(mut editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    let condition_key = item.condition.map(|c| c.key()).unwrap_or("");

    rsx! {
        div { class: "tab-grid",
            TextField {
                label: "Material",
                value: item.material.clone(),
                placeholder: "Material",
                on_input: move |v| editor.write().apply(FieldUpdate::Material(v)),
            }
            TextField {
                label: "Personal Note",
                value: item.personal_note.clone(),
                placeholder: "Personal note",
                rows: 3,
                on_input: move |v| editor.write().apply(FieldUpdate::PersonalNote(v)),
            }
            TextField {
                label: "Description",
                value: item.description.clone(),
                placeholder: "Description",
                rows: 3,
                on_input: move |v| editor.write().apply(FieldUpdate::Description(v)),
            }
            div { class: "form-group",
                label { "Condition" }
                select {
                    class: "select",
                    value: "{condition_key}",
                    onchange: move |evt| {
                        editor.write().apply(FieldUpdate::Condition(Condition::from_key(&evt.value())));
                    },
                    option { value: "", "Select condition" }
                    for c in Condition::all().iter().copied() {
                        option { key: "{c.key()}", value: "{c.key()}", selected: Some(c) == item.condition, "{c.label()}" }
                    }
                }
            }
            TextField {
                label: "Condition Details",
                value: item.condition_details.clone(),
                placeholder: "Condition details",
                rows: 2,
                on_input: move |v| editor.write().apply(FieldUpdate::ConditionDetails(v)),
            }
            div { class: "form-group",
                label {
                    input {
                        r#type: "checkbox",
                        checked: item.hidden,
                        onchange: move |evt| editor.write().apply(FieldUpdate::Hidden(evt.checked())),
                    }
                    " Hide from outfit suggestions"
                }
            }
        }
    }
}

// ─── Tags & seasons ─────────────────────────────────────────────────────────

#[component]
pub fn TagsSeasonsTabView(editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    rsx! {
        div { class: "tab-grid",
            div { class: "view-field",
                span { class: "view-label", "Seasons" }
                if item.seasons.is_empty() {
                    span { class: "view-value", "—" }
                }
                for season in item.season_list() {
                    span { key: "{season.key()}", class: "badge", "{season.label()}" }
                }
            }
            div { class: "view-field",
                span { class: "view-label", "Tags" }
                if item.tags.is_empty() {
                    span { class: "view-value", "—" }
                }
                for (idx, tag) in item.tags.iter().enumerate() {
                    span { key: "{idx}", class: "badge badge-outline", "{tag}" }
                }
            }
        }
    }
}

#[component]
pub fn TagsSeasonsTabEdit(mut editor: Signal<ItemEditor>) -> Element {
    let item = working(&editor);
    let tag_input = editor
        .read()
        .session()
        .map(|s| s.tag_input().to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "tab-grid",
            div { class: "form-group",
                label { "Seasons" }
                div { class: "season-toggles",
                    for season in Season::all().iter().copied() {
                        button {
                            key: "{season.key()}",
                            r#type: "button",
                            class: if item.seasons.contains(&season) { "btn btn-xs btn-primary" } else { "btn btn-xs btn-outline" },
                            onclick: move |_| editor.write().apply(FieldUpdate::ToggleSeason(season)),
                            "{season.label()}"
                        }
                    }
                }
            }
            TextField {
                label: "Tags",
                value: tag_input,
                placeholder: "Enter tags separated by commas",
                on_input: move |v| editor.write().apply(FieldUpdate::Tags(v)),
            }
        }
    }
}
