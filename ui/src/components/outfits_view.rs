use dioxus::prelude::*;

use super::closet_state::use_outfit_store;

#[component]
pub fn OutfitsView() -> Element {
    let store = use_outfit_store();
    let outfits = store.read().outfits().to_vec();

    rsx! {
        div { class: "outfits-view",
            h2 { "Outfits" }
            if outfits.is_empty() {
                p { class: "empty-state", "No outfits yet." }
            }
            div { class: "outfit-grid",
                for outfit in outfits {
                    div { key: "{outfit.id}", class: "outfit-card",
                        img { src: "{outfit.image}", alt: "{outfit.name}" }
                        div { class: "outfit-body",
                            h3 { "{outfit.name}" }
                            p { "Items: {outfit.item_list()}" }
                        }
                    }
                }
            }
        }
    }
}
