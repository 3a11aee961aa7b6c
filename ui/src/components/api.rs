use dioxus::prelude::*;

use closet_common::item::ClosetItem;
use closet_common::store::{FetchError, ItemStore};
use closet_common::upload::{UploadError, UploadFile, UploadPolicy};

/// Simulated backend latency for the bulk fetch.
pub const FETCH_DELAY_MS: u32 = 400;

/// Simulated upload time, split into progress ticks.
pub const UPLOAD_DELAY_MS: u32 = 1_000;
pub const UPLOAD_TICK_MS: u32 = 100;

/// Actions the UI sends to the data coroutine.
#[derive(Debug, Clone)]
pub enum ClosetAction {
    /// Reload every item, replacing the store contents on success.
    FetchItems,
    /// Persist an edited item, replacing the stored record by id.
    SaveItem(ClosetItem),
}

pub fn use_closet_action() -> Coroutine<ClosetAction> {
    use_coroutine_handle::<ClosetAction>()
}

/// Start the coroutine that owns every write coming back from the data layer.
pub fn use_closet_coroutine(mut store: Signal<ItemStore>) {
    use_coroutine(move |mut rx: UnboundedReceiver<ClosetAction>| async move {
        use futures::StreamExt;
        while let Some(action) = rx.next().await {
            match action {
                ClosetAction::FetchItems => {
                    let ticket = store.write().begin_fetch();
                    let result = fetch_items().await;
                    store.write().finish_fetch(ticket, result);
                }
                ClosetAction::SaveItem(item) => {
                    let id = item.id.clone();
                    if store.write().update_item(item) {
                        tracing::info!("Saved item {id}");
                    } else {
                        tracing::warn!("Save for unknown item {id} dropped");
                    }
                }
            }
        }
    });
}

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_family = "wasm"))]
    let _ = ms;
}

/// Fetch the closet. In mock mode this always succeeds with generated items.
pub async fn fetch_items() -> Result<Vec<ClosetItem>, FetchError> {
    sleep_ms(FETCH_DELAY_MS).await;

    #[cfg(feature = "mock-data")]
    {
        use closet_common::mock::{generate_items, MOCK_ITEM_COUNT};
        let mut rng = rand::thread_rng();
        Ok(generate_items(&mut rng, MOCK_ITEM_COUNT))
    }

    #[cfg(not(feature = "mock-data"))]
    {
        Err(FetchError::Backend("no item backend configured".into()))
    }
}

/// Turn a picked file into an image URL.
///
/// The file is checked from its metadata first, so wrong types and oversize
/// files never get read. `on_tick` fires every [`UPLOAD_TICK_MS`] while the
/// simulated upload runs.
pub async fn upload_image(
    file: dioxus::html::FileData,
    policy: UploadPolicy,
    mut on_tick: impl FnMut(),
) -> Result<String, UploadError> {
    let name = file.name();
    let mime_type = file.content_type();
    closet_common::upload::check_upload(&name, mime_type.as_deref(), file.size(), &policy)?;

    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| UploadError::Read(e.to_string()))?;

    for _ in 0..(UPLOAD_DELAY_MS / UPLOAD_TICK_MS) {
        sleep_ms(UPLOAD_TICK_MS).await;
        on_tick();
    }

    let upload = UploadFile {
        name,
        mime_type: mime_type.unwrap_or_default(),
        bytes: bytes.to_vec(),
    };
    Ok(upload.into_data_url())
}
