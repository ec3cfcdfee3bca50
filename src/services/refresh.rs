// src/services/refresh.rs
//
// The GUI-side half of the handoff: called once per frame from nannou's
// update, takes whatever the listener posted and folds it into the state the
// view draws.

use std::time::Instant;

use super::link_monitor::{LinkMonitor, LinkTransition};
use crate::controllers::mailbox::MailboxReceiver;
use crate::models::DisplayState;

/// Never blocks. Returns the link transitions this frame produced, at most
/// one Resumed followed by at most one Lost.
pub fn apply_pending(
    state: &mut DisplayState,
    link: &mut LinkMonitor,
    mailbox: &MailboxReceiver,
    now: Instant,
) -> Vec<LinkTransition> {
    let delivery = mailbox.take();
    let mut transitions = Vec::new();

    if delivery.activity {
        transitions.extend(link.record_activity(now));
    }
    if let Some(snapshot) = delivery.snapshot {
        *state = snapshot;
    }
    transitions.extend(link.poll(now));

    transitions
}
