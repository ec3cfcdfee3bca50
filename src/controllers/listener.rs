// src/controllers/listener.rs
//
// OSC listener
//
// Owns the OSC receiver and the authoritative DisplayState. Runs on its own
// thread, blocking on recv, and posts snapshots to the GUI through the
// mailbox. The GUI never touches the socket or the listener's state directly.

use nannou_osc as osc;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

use super::dispatch::{Dispatch, Dispatcher};
use super::mailbox::MailboxSender;
use crate::config::OscConfig;
use crate::error::{DisplayError, Result};
use crate::models::DisplayState;

/// The socket-free half of the listener: dispatch and commit.
pub struct ListenerCore {
    state: DisplayState,
    dispatcher: Dispatcher,
}

impl Default for ListenerCore {
    fn default() -> Self {
        Self::new(Dispatcher::default())
    }
}

impl ListenerCore {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            state: DisplayState::default(),
            dispatcher,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Returns one snapshot per handled message, in arrival order. Anything
    /// that can't be routed or whose arguments don't fit is dropped without
    /// touching state.
    pub fn handle_packet(&mut self, packet: osc::Packet) -> Vec<DisplayState> {
        let mut snapshots = Vec::new();
        for message in packet.into_msgs() {
            match self.dispatcher.dispatch(&self.state, &message) {
                Dispatch::Applied(next) => {
                    self.state = next;
                    snapshots.push(next);
                }
                Dispatch::Unrouted => {
                    debug!("Unknown OSC address pattern: {}", message.addr);
                }
                Dispatch::Rejected => {
                    debug!(
                        "Dropping {} with unusable arguments: {:?}",
                        message.addr, message.args
                    );
                }
            }
        }
        snapshots
    }
}

pub struct OscListener {
    receiver: osc::Receiver,
    core: ListenerCore,
}

impl OscListener {
    pub fn bind(config: &OscConfig) -> Result<Self> {
        let invalid = || DisplayError::InvalidAddress {
            host: config.host.clone(),
            port: config.port,
        };

        let addrs: Vec<SocketAddr> = (config.host.as_str(), config.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .collect();
        if addrs.is_empty() {
            return Err(invalid());
        }

        let receiver = osc::Receiver::bind_to(&addrs[..]).map_err(|source| DisplayError::Bind {
            addr: format!("{}:{}", config.host, config.port),
            source,
        })?;

        Ok(Self {
            receiver,
            core: ListenerCore::default(),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.receiver.local_addr()
    }

    /// Moves the listener onto its own thread. The handle is only useful to
    /// tests; the app never joins it.
    pub fn spawn(self, mailbox: MailboxSender) -> Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("osc-listener".to_string())
            .spawn(move || self.run(mailbox))
            .map_err(DisplayError::Spawn)
    }

    fn run(mut self, mailbox: MailboxSender) {
        if let Ok(addr) = self.receiver.local_addr() {
            info!("Listening for OSC on {}", addr);
        }

        loop {
            let snapshot = match self.receiver.recv() {
                Ok((packet, from)) => {
                    let latest = self.core.handle_packet(packet).last().copied();
                    if let Some(state) = latest {
                        debug!("{} -> {:?}", from, state);
                    }
                    latest
                }
                Err(osc::CommunicationError::Osc(err)) => {
                    debug!("Dropping malformed OSC datagram: {:?}", err);
                    None
                }
                Err(osc::CommunicationError::Io(err)) if is_transient(&err) => {
                    debug!("Transient receive error: {}", err);
                    continue;
                }
                Err(osc::CommunicationError::Io(err)) => {
                    error!("OSC listener stopped: {}", err);
                    return;
                }
            };

            if !mailbox.post(snapshot) {
                break;
            }
        }
        debug!("Display closed, OSC listener exiting");
    }
}

fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::TimedOut
            | io::ErrorKind::ConnectionReset
    )
}
