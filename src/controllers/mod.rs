pub mod dispatch;
pub mod listener;
pub mod mailbox;
pub mod sender;

pub use dispatch::{Dispatch, Dispatcher};
pub use listener::{ListenerCore, OscListener};
pub use mailbox::{mailbox, Delivery, MailboxReceiver, MailboxSender};
pub use sender::OscSender;
