// src/controllers/mailbox.rs
//
// Hands listener output to the GUI loop.
//
// The listener overwrites a single pending slot (latest snapshot plus an
// activity flag) and rings a one-deep wake channel. The GUI takes the slot at
// its own pace, so a stalled GUI costs one slot, not a growing queue.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::models::DisplayState;

/// Everything posted since the last take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    /// At least one datagram arrived, handled or not.
    pub activity: bool,
    /// Newest state produced by a handled message, if any.
    pub snapshot: Option<DisplayState>,
}

impl Delivery {
    pub fn is_empty(&self) -> bool {
        !self.activity && self.snapshot.is_none()
    }
}

pub fn mailbox() -> (MailboxSender, MailboxReceiver) {
    let pending = Arc::new(Mutex::new(Delivery::default()));
    let (wake_tx, wake_rx) = crossbeam_channel::bounded(1);
    (
        MailboxSender {
            pending: Arc::clone(&pending),
            wake: wake_tx,
        },
        MailboxReceiver {
            pending,
            wake: wake_rx,
        },
    )
}

pub struct MailboxSender {
    pending: Arc<Mutex<Delivery>>,
    wake: Sender<()>,
}

impl MailboxSender {
    /// Records one datagram and, when it changed anything, the resulting
    /// state. Returns false once the receiving side is gone.
    pub fn post(&self, snapshot: Option<DisplayState>) -> bool {
        {
            let mut pending = self.pending.lock();
            pending.activity = true;
            if snapshot.is_some() {
                pending.snapshot = snapshot;
            }
        }

        match self.wake.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => true,
            Err(TrySendError::Disconnected(())) => false,
        }
    }
}

pub struct MailboxReceiver {
    pending: Arc<Mutex<Delivery>>,
    wake: Receiver<()>,
}

impl MailboxReceiver {
    /// Never blocks. Returns an empty Delivery when nothing was posted.
    pub fn take(&self) -> Delivery {
        if self.wake.try_recv().is_err() {
            return Delivery::default();
        }
        std::mem::take(&mut *self.pending.lock())
    }
}
