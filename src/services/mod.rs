pub mod link_monitor;
pub mod refresh;

pub use link_monitor::{LinkMonitor, LinkStatus, LinkTransition};
pub use refresh::apply_pending;
