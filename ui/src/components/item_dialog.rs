use dioxus::prelude::*;

use closet_common::editor::{EditorMode, ItemEditor, ItemTab, SaveOutcome};
use closet_common::item::ClosetItem;
use closet_common::upload::UploadState;

use super::closet_state::use_app_config;
use super::image_section::ImageSection;
use super::item_tabs::{
    AcquisitionTabEdit, AcquisitionTabView, BasicInfoTabEdit, BasicInfoTabView, DetailsTabEdit,
    DetailsTabView, TagsSeasonsTabEdit, TagsSeasonsTabView,
};

/// Modal showing one item, switchable between viewing and editing.
///
/// Owns the item's [`ItemEditor`]; `on_save` receives the validated item and
/// `on_close` fires on cancel or close.
#[component]
pub fn ItemDialog(
    item: ClosetItem,
    on_close: EventHandler<()>,
    on_save: EventHandler<ClosetItem>,
    #[props(default)] mode: EditorMode,
) -> Element {
    let config = use_app_config();
    let mut editor = use_signal(|| ItemEditor::new(item.clone(), mode, config.validation));
    let upload = use_signal(UploadState::default);
    let uploading = upload.read().is_uploading();

    let ed = editor.read();
    let editing = ed.is_editing();
    let active_tab = ed.active_tab();
    let heading = if editing {
        format!("Edit {}", ed.item().title())
    } else {
        ed.item().title()
    };
    drop(ed);

    let save = move |_: MouseEvent| {
        let outcome = editor.write().save();
        match outcome {
            SaveOutcome::Saved(saved) => on_save.call(saved),
            SaveOutcome::Invalid(errors) => {
                tracing::debug!("Save blocked by {} field error(s)", errors.len());
            }
            SaveOutcome::NotEditing => {}
        }
    };

    let cancel = move |_: MouseEvent| {
        editor.write().cancel();
        on_close.call(());
    };

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "modal-title", "{heading}" }

                div { class: "modal-body",
                    ImageSection { editor, upload }

                    div { class: "item-tabs",
                        div { class: "tab-bar",
                            for tab in ItemTab::all().iter().copied() {
                                button {
                                    key: "{tab.label()}",
                                    class: if tab == active_tab { "tab tab-active" } else { "tab" },
                                    onclick: move |_| editor.write().select_tab(tab),
                                    "{tab.label()}"
                                }
                            }
                        }

                        div { class: "tab-content",
                            {match (active_tab, editing) {
                                (ItemTab::BasicInfo, false) => rsx! { BasicInfoTabView { editor } },
                                (ItemTab::BasicInfo, true) => rsx! { BasicInfoTabEdit { editor } },
                                (ItemTab::Acquisition, false) => rsx! { AcquisitionTabView { editor } },
                                (ItemTab::Acquisition, true) => rsx! { AcquisitionTabEdit { editor } },
                                (ItemTab::Details, false) => rsx! { DetailsTabView { editor } },
                                (ItemTab::Details, true) => rsx! { DetailsTabEdit { editor } },
                                (ItemTab::TagsSeasons, false) => rsx! { TagsSeasonsTabView { editor } },
                                (ItemTab::TagsSeasons, true) => rsx! { TagsSeasonsTabEdit { editor } },
                            }}
                        }

                        div { class: "modal-actions",
                            if editing {
                                button { class: "btn btn-ghost", onclick: cancel, "Cancel" }
                                button { class: "btn btn-primary", disabled: uploading, onclick: save, "Save Changes" }
                            } else {
                                button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "Close" }
                                button {
                                    class: "btn btn-primary",
                                    disabled: uploading,
                                    onclick: move |_| editor.write().begin_edit(),
                                    "Edit"
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if editor.read().is_editing() {
                        editor.write().cancel();
                    }
                    on_close.call(());
                },
            }
        }
    }
}
