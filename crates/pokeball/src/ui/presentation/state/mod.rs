pub mod viewer_state;

pub use viewer_state::ViewerState;
