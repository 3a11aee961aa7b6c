use dioxus::prelude::*;

use closet_common::item::{ClosetItem, ItemId};

/// One grid cell: the item image (or a placeholder) with a hover overlay.
#[component]
pub fn ItemTile(item: ClosetItem, on_select: EventHandler<ItemId>) -> Element {
    // Broken URLs flip this so the placeholder shows instead.
    let mut image_ok = use_signal(|| true);
    let id = item.id.clone();

    let category_line = item.category_line();
    let color_size = item.color_size_line();

    rsx! {
        div {
            class: if item.hidden { "item-tile hidden-item" } else { "item-tile" },
            onclick: move |_| on_select.call(id.clone()),
            div { class: "tile-image",
                {match item.image.as_deref() {
                    Some(src) if image_ok() => rsx! {
                        img {
                            src: "{src}",
                            alt: "{item.brand}",
                            onerror: move |_| image_ok.set(false),
                        }
                    },
                    _ => rsx! { NoImage {} },
                }}
                div { class: "tile-overlay",
                    div { class: "overlay-brand", "{item.brand}" }
                    p { "{category_line}" }
                    p { "{color_size}" }
                }
            }
        }
    }
}

#[component]
pub fn NoImage() -> Element {
    rsx! {
        div { class: "no-image", span { "No Image" } }
    }
}
