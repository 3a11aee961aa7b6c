use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use closet_common::collection::filter_items;
use closet_common::editor::{
    EditorMode, FieldUpdate, ItemEditor, ItemField, SaveOutcome, ValidationPolicy,
};
use closet_common::item::ItemId;
use closet_common::mock::{generate_items, MOCK_ITEM_COUNT};
use closet_common::store::{ItemStore, LoadStatus};
use closet_common::upload::{check_upload, UploadPolicy, UploadState};
use closet_common::vocab::Season;

fn loaded_store() -> ItemStore {
    let mut store = ItemStore::new();
    let ticket = store.begin_fetch();
    let mut rng = StdRng::seed_from_u64(2024);
    store.finish_fetch(ticket, Ok(generate_items(&mut rng, MOCK_ITEM_COUNT)));
    store
}

#[test]
fn test_fetch_loads_64_unique_items() {
    let mut store = ItemStore::new();
    assert_eq!(store.status(), LoadStatus::Unloaded);
    let ticket = store.begin_fetch();
    assert_eq!(store.status(), LoadStatus::Loading);

    let mut rng = StdRng::seed_from_u64(99);
    store.finish_fetch(ticket, Ok(generate_items(&mut rng, MOCK_ITEM_COUNT)));

    assert_eq!(store.status(), LoadStatus::Idle);
    assert_eq!(store.len(), 64);
    let ids: HashSet<_> = store.items().iter().map(|i| &i.id).collect();
    assert_eq!(ids.len(), 64);
}

#[test]
fn test_edit_save_updates_store() {
    let mut store = loaded_store();
    let original = store.get(&ItemId("5".into())).cloned().unwrap();

    let mut editor = ItemEditor::new(original.clone(), EditorMode::Viewing, ValidationPolicy::default());
    editor.begin_edit();
    editor.apply(FieldUpdate::Brand("Patagonia".into()));
    editor.apply(FieldUpdate::Tags("outdoor, rain,".into()));
    editor.apply(FieldUpdate::ToggleSeason(Season::Winter));

    let SaveOutcome::Saved(saved) = editor.save() else {
        panic!("save should pass validation");
    };
    assert!(store.update_item(saved));

    let stored = store.get(&ItemId("5".into())).unwrap();
    assert_eq!(stored.brand, "Patagonia");
    assert_eq!(stored.tags, vec!["outdoor", "rain"]);
    assert_eq!(
        stored.seasons.contains(&Season::Winter),
        !original.seasons.contains(&Season::Winter)
    );
    assert_eq!(store.len(), 64);
    assert_eq!(filter_items(store.items(), "patagonia").len(), 1);
}

#[test]
fn test_invalid_save_leaves_store_untouched() {
    let mut store = loaded_store();
    let before = store.items().to_vec();
    let item = before[0].clone();

    let mut editor = ItemEditor::new(item, EditorMode::Editing, ValidationPolicy::default());
    editor.apply(FieldUpdate::Brand("   ".into()));
    match editor.save() {
        SaveOutcome::Saved(saved) => {
            store.update_item(saved);
        }
        SaveOutcome::Invalid(errors) => assert!(errors.contains(ItemField::Brand)),
        SaveOutcome::NotEditing => panic!("editor should be editing"),
    }
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_rejected_upload_keeps_buffer_image() {
    let store = loaded_store();
    let item = store.items()[3].clone();
    let mut editor = ItemEditor::new(item.clone(), EditorMode::Editing, ValidationPolicy::default());

    let mut upload = UploadState::Idle;
    match check_upload("notes.txt", Some("text/plain"), 128, &UploadPolicy::default()) {
        Ok(()) => editor.apply(FieldUpdate::Image(Some("data:".into()))),
        Err(e) => upload = UploadState::Failed(e.to_string()),
    }

    assert_eq!(upload.error(), Some("notes.txt is not an image file"));
    assert_eq!(editor.working().image, item.image);
}
