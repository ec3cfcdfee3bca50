// src/config/config_types.rs
//
// Config types for the app. Every field has a default so a partial
// config.toml (or none at all) still produces a usable Config.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub host: String,
    pub port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9999,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            title: "OSC Display".to_string(),
        }
    }
}

/// Colors are linear-ish RGB triples in 0.0..=1.0, the same shape nannou's
/// `rgb()` takes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub base_color: [f32; 3],
    pub alert_color: [f32; 3],
    pub label_color: [f32; 3],
    pub font_size: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            base_color: [0.0, 0.5, 0.0],
            alert_color: [1.0, 0.0, 0.0],
            label_color: [1.0, 1.0, 1.0],
            font_size: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub timeout_secs: f32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self { timeout_secs: 5.0 }
    }
}
