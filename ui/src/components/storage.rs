use closet_common::vocab::TileSize;

/// Local storage key holding the tile size preference.
pub const CARD_SIZE_STORAGE_KEY: &str = "closetCardSize";

#[cfg(target_family = "wasm")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Tile size to start with: the saved preference if valid, otherwise chosen
/// from the viewport width.
pub fn initial_tile_size() -> TileSize {
    TileSize::resolve(saved_tile_size().as_deref(), viewport_width())
}

#[cfg(target_family = "wasm")]
fn saved_tile_size() -> Option<String> {
    local_storage()?.get_item(CARD_SIZE_STORAGE_KEY).ok().flatten()
}

#[cfg(not(target_family = "wasm"))]
fn saved_tile_size() -> Option<String> {
    None
}

#[cfg(target_family = "wasm")]
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

#[cfg(not(target_family = "wasm"))]
fn viewport_width() -> f64 {
    1024.0
}

pub fn save_tile_size(size: TileSize) {
    #[cfg(target_family = "wasm")]
    {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable; tile size not saved");
            return;
        };
        if let Err(e) = storage.set_item(CARD_SIZE_STORAGE_KEY, size.key()) {
            tracing::warn!("Failed to save tile size: {:?}", e);
        }
    }
    #[cfg(not(target_family = "wasm"))]
    tracing::debug!("Tile size {} (not persisted on native)", size.key());
}
