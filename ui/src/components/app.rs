use dioxus::prelude::*;

use closet_common::outfit::OutfitStore;
use closet_common::store::ItemStore;

use super::api::use_closet_coroutine;
use super::closet_state::AppConfig;
use super::closet_view::ClosetView;
use super::outfits_view::OutfitsView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Closet {},
    #[route("/outfits")]
    Outfits {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppConfig::default);
    let store = use_context_provider(|| Signal::new(ItemStore::new()));
    use_context_provider(|| Signal::new(OutfitStore::with_samples()));
    use_closet_coroutine(store);

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "closet-app",
            header { class: "app-header",
                h1 { "Closet Manager" }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Closet {}); },
                        "Closet"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Outfits {}); },
                        "Outfits"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: the item collection.
#[component]
fn Closet() -> Element {
    rsx! { ClosetView {} }
}

/// Route component: the outfits placeholder.
#[component]
fn Outfits() -> Element {
    rsx! { OutfitsView {} }
}
