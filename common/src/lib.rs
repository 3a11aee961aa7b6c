pub mod collection;
pub mod editor;
pub mod item;
pub mod outfit;
pub mod store;
pub mod upload;
pub mod vocab;

#[cfg(feature = "mock-data")]
pub mod mock;
