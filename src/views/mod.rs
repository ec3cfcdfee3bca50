// src/views/mod.rs

pub mod display_view;

pub use display_view::{DisplayView, Projection};
