use dioxus::prelude::*;

use closet_common::editor::ValidationPolicy;
use closet_common::outfit::OutfitStore;
use closet_common::store::ItemStore;
use closet_common::upload::UploadPolicy;

/// Knobs fixed at app start and read by the dialog and image control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub validation: ValidationPolicy,
    pub upload: UploadPolicy,
}

/// Item collection shared by the closet page and the data coroutine.
pub fn use_item_store() -> Signal<ItemStore> {
    use_context::<Signal<ItemStore>>()
}

pub fn use_outfit_store() -> Signal<OutfitStore> {
    use_context::<Signal<OutfitStore>>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
