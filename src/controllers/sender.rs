// src/controllers/sender.rs
//
// Sends encoder/reset messages, normally back to our own listener so the
// display can be exercised from the keyboard without external hardware.

use nannou_osc as osc;
use std::net::IpAddr;
use tracing::debug;

use super::dispatch::{ENC_A, ENC_B, RESET};
use crate::config::OscConfig;
use crate::error::{DisplayError, Result};

pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_addr: &str, target_port: u16) -> Result<Self> {
        let sender = osc::sender().map_err(DisplayError::Sender)?;

        Ok(Self {
            sender,
            target_addr: target_addr.to_string(),
            target_port,
        })
    }

    /// A sender aimed at the listener described by `config`. A wildcard
    /// listen address is reached through loopback.
    pub fn for_listener(config: &OscConfig) -> Result<Self> {
        Self::new(&loopback_target(&config.host), config.port)
    }

    pub fn send_enc_a(&self, value: i64) -> bool {
        self.send(ENC_A, vec![encoder_arg(value)])
    }

    pub fn send_enc_b(&self, value: i64) -> bool {
        self.send(ENC_B, vec![encoder_arg(value)])
    }

    pub fn send_reset(&self) -> bool {
        self.send(RESET, Vec::new())
    }

    fn send(&self, addr: &str, args: Vec<osc::Type>) -> bool {
        match self.sender.send(
            (addr.to_string(), args),
            (self.target_addr.as_str(), self.target_port),
        ) {
            Ok(_) => true,
            Err(err) => {
                debug!("Failed to send {}: {:?}", addr, err);
                false
            }
        }
    }
}

/// Encoders send 32-bit ints; anything wider goes out as a long.
fn encoder_arg(value: i64) -> osc::Type {
    match i32::try_from(value) {
        Ok(v) => osc::Type::Int(v),
        Err(_) => osc::Type::Long(value),
    }
}

fn loopback_target(host: &str) -> String {
    match host.parse::<IpAddr>() {
        Ok(ip) if ip.is_unspecified() => "127.0.0.1".to_string(),
        _ => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_arg_width() {
        assert!(matches!(encoder_arg(42), osc::Type::Int(42)));
        assert!(matches!(encoder_arg(-1), osc::Type::Int(-1)));
        assert!(matches!(
            encoder_arg(i64::from(i32::MAX) + 1),
            osc::Type::Long(2_147_483_648)
        ));
    }

    #[test]
    fn test_loopback_target() {
        assert_eq!(loopback_target("0.0.0.0"), "127.0.0.1");
        assert_eq!(loopback_target("::"), "127.0.0.1");
        assert_eq!(loopback_target("192.168.1.20"), "192.168.1.20");
        assert_eq!(loopback_target("localhost"), "localhost");
    }
}
