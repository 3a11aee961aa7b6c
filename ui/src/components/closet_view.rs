use dioxus::prelude::*;

use closet_common::collection::filter_items;
use closet_common::item::{ClosetItem, ItemId};
use closet_common::store::LoadStatus;
use closet_common::vocab::TileSize;

use super::api::{use_closet_action, ClosetAction};
use super::closet_state::use_item_store;
use super::item_dialog::ItemDialog;
use super::item_tile::ItemTile;
use super::storage::{initial_tile_size, save_tile_size};
use super::toolbar::{ClosetToolbar, TileSizeController};

#[component]
pub fn ClosetView() -> Element {
    let store = use_item_store();
    let actions = use_closet_action();
    let mut tile_size = use_signal(initial_tile_size);
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<ItemId>);

    // Load on mount; a newer fetch supersedes any still in flight.
    use_hook(|| actions.send(ClosetAction::FetchItems));

    let q = query.read().clone();
    let state = store.read();
    let status = state.status();
    let last_error = state.last_error().map(str::to_string);
    let total = state.len();
    let visible: Vec<ClosetItem> = filter_items(state.items(), &q).into_iter().cloned().collect();
    let selected_item = selected
        .read()
        .as_ref()
        .and_then(|id| state.get(id).cloned());
    drop(state);

    let px = tile_size.read().pixels();
    let visible_count = visible.len();

    rsx! {
        div { class: "closet-view",
            ClosetToolbar {
                query: q.clone(),
                shown: visible_count,
                total,
                on_search: move |value: String| query.set(value),
            }
            TileSizeController {
                size: tile_size(),
                on_change: move |size: TileSize| {
                    tile_size.set(size);
                    save_tile_size(size);
                },
            }

            {match status {
                LoadStatus::Loading if total == 0 => rsx! {
                    p { class: "loading-state", "Loading items..." }
                },
                LoadStatus::Error => rsx! {
                    div { class: "error-state",
                        p { "{last_error.clone().unwrap_or_default()}" }
                        button {
                            onclick: move |_| actions.send(ClosetAction::FetchItems),
                            "Retry"
                        }
                    }
                },
                _ => rsx! {},
            }}

            if visible.is_empty() && status == LoadStatus::Idle {
                p { class: "empty-state",
                    if q.trim().is_empty() { "Your closet is empty." } else { "No items match \"{q}\"." }
                }
            }

            div {
                class: "closet-grid",
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax({px}px, 1fr)); gap: 0.5rem;",
                for item in visible {
                    ItemTile {
                        key: "{item.id}",
                        item: item.clone(),
                        on_select: move |id: ItemId| selected.set(Some(id)),
                    }
                }
            }

            if let Some(item) = selected_item {
                ItemDialog {
                    key: "{item.id}",
                    item: item.clone(),
                    on_close: move |_| selected.set(None),
                    on_save: move |saved: ClosetItem| actions.send(ClosetAction::SaveItem(saved)),
                }
            }
        }
    }
}
