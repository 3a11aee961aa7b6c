use dioxus::prelude::*;

use closet_common::editor::{FieldUpdate, ItemEditor, ItemField};
use closet_common::upload::UploadState;

use super::api::upload_image;
use super::closet_state::use_app_config;
use super::item_tile::NoImage;

/// Image preview for the dialog, plus upload controls while editing.
///
/// A failed upload only sets the error line; the working image stays as it was.
/// An upload that finishes after its edit session ended is dropped.
#[component]
pub fn ImageSection(mut editor: Signal<ItemEditor>, mut upload: Signal<UploadState>) -> Element {
    let config = use_app_config();
    // URL that last failed to load; a different URL gets a fresh attempt.
    let mut broken_src = use_signal(|| None::<String>);

    let ed = editor.read();
    let editing = ed.is_editing();
    let current = ed.working().image.clone();
    let original = ed.item().image.clone();
    let image_error = ed.errors().get(ItemField::Image).map(str::to_string);
    drop(ed);

    let state = upload.read().clone();
    let uploading = state.is_uploading();

    let on_file = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let epoch = editor.read().epoch();
        upload.set(UploadState::started());
        spawn(async move {
            let result = upload_image(file, config.upload, || upload.write().tick()).await;
            match &result {
                Ok(url) => {
                    let applied = editor
                        .write()
                        .apply_in_session(epoch, FieldUpdate::Image(Some(url.clone())));
                    if !applied {
                        // The session it was picked in has been saved or cancelled.
                        tracing::debug!("Dropping upload for a finished edit session");
                        upload.set(UploadState::Idle);
                        return;
                    }
                }
                Err(e) => tracing::warn!("Image upload failed: {e}"),
            }
            upload.set(UploadState::finish(result));
        });
    };

    rsx! {
        div { class: "image-section",
            div { class: "image-preview",
                {match current.as_deref() {
                    Some(src) if broken_src.read().as_deref() != Some(src) => {
                        let failed = src.to_string();
                        rsx! {
                            img {
                                src: "{src}",
                                alt: "Item image",
                                onerror: move |_| broken_src.set(Some(failed.clone())),
                            }
                        }
                    }
                    _ => rsx! { NoImage {} },
                }}
            }
            if let Some(err) = image_error {
                span { class: "field-error", "{err}" }
            }

            if editing {
                div { class: "image-controls",
                    label { class: if uploading { "btn btn-sm btn-disabled" } else { "btn btn-sm" },
                        "Upload Image"
                        input {
                            r#type: "file",
                            accept: "image/*",
                            class: "hidden",
                            disabled: uploading,
                            onchange: on_file,
                        }
                    }
                    if original != current {
                        button {
                            class: "btn btn-sm btn-ghost",
                            disabled: uploading,
                            onclick: move |_| {
                                editor.write().apply(FieldUpdate::Image(original.clone()));
                                upload.set(UploadState::Idle);
                            },
                            "Revert to original"
                        }
                    }
                    if current.is_some() {
                        button {
                            class: "btn btn-sm btn-ghost",
                            disabled: uploading,
                            onclick: move |_| {
                                editor.write().apply(FieldUpdate::Image(None));
                                upload.set(UploadState::Idle);
                            },
                            "Remove image"
                        }
                    }
                }

                {match state {
                    UploadState::Uploading { progress: pct } => rsx! {
                        div { class: "upload-progress",
                            progress { max: "100", value: "{pct}" }
                            span { "Uploading... {pct}%" }
                        }
                    },
                    UploadState::Failed(message) => rsx! {
                        div { class: "upload-error",
                            span { "{message}" }
                            button {
                                class: "btn btn-xs btn-ghost",
                                onclick: move |_| upload.set(UploadState::Idle),
                                "Dismiss"
                            }
                        }
                    },
                    _ => rsx! {},
                }}
            }
        }
    }
}
