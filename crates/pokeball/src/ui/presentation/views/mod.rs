pub mod random_item_viewer;

pub use random_item_viewer::{throw_and_fetch, RandomItemViewer, PAGE_TITLE};
