use dioxus::prelude::*;

use closet_common::vocab::TileSize;

/// Search box over the collection.
#[component]
pub fn ClosetToolbar(
    query: String,
    shown: usize,
    total: usize,
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "closet-toolbar",
            input {
                r#type: "search",
                class: "search-input",
                placeholder: "Search items...",
                value: "{query}",
                oninput: move |evt| on_search.call(evt.value()),
            }
            span { class: "item-count",
                if shown == total { "{total} items" } else { "{shown} of {total} items" }
            }
        }
    }
}

#[component]
pub fn TileSizeController(size: TileSize, on_change: EventHandler<TileSize>) -> Element {
    rsx! {
        div { class: "tile-size-controller",
            span { "Card Size:" }
            for option in TileSize::all().iter().copied() {
                button {
                    key: "{option.key()}",
                    class: if option == size { "size-btn active" } else { "size-btn" },
                    onclick: move |_| on_change.call(option),
                    "{option.label()}"
                }
            }
        }
    }
}
