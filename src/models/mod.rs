pub mod display_state;

pub use display_state::DisplayState;
