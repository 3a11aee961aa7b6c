pub mod api;
pub mod app;
pub mod closet_state;
pub mod closet_view;
pub mod image_section;
pub mod item_dialog;
pub mod item_tabs;
pub mod item_tile;
pub mod outfits_view;
pub mod storage;
pub mod toolbar;
