// src/views/display_view.rs
//
// Draws the background indicator and the two encoder labels.
// Only called from nannou's view callback, so only on the GUI thread.

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::models::DisplayState;

/// Everything the window shows for one DisplayState.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub background: [f32; 3],
    pub left_text: String,
    pub right_text: String,
}

pub struct DisplayView {
    style: StyleConfig,
}

impl DisplayView {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    pub fn project(&self, state: &DisplayState) -> Projection {
        let background = if state.alert {
            self.style.alert_color
        } else {
            self.style.base_color
        };

        Projection {
            background,
            left_text: state.left.to_string(),
            right_text: state.right.to_string(),
        }
    }

    pub fn draw(&self, draw: &Draw, window: Rect, state: &DisplayState) {
        let projection = self.project(state);
        let [r, g, b] = projection.background;
        draw.background().color(rgb(r, g, b));

        let [lr, lg, lb] = self.style.label_color;
        let label_color = rgb(lr, lg, lb);
        let label_w = window.w() / 2.0;
        let label_h = self.style.font_size as f32 * 2.0;

        for (text, rel_x) in [(&projection.left_text, 0.25), (&projection.right_text, 0.75)] {
            draw.text(text)
                .color(label_color)
                .font_size(self.style.font_size)
                .w_h(label_w, label_h)
                .x_y(window.left() + window.w() * rel_x, window.y());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_render() {
        let view = DisplayView::new(StyleConfig::default());
        let projection = view.project(&DisplayState::default());
        assert_eq!(projection.background, StyleConfig::default().base_color);
        assert_eq!(projection.left_text, "0");
        assert_eq!(projection.right_text, "0");
    }

    #[test]
    fn test_alert_switches_background() {
        let style = StyleConfig::default();
        let view = DisplayView::new(style.clone());

        let state = DisplayState::default().toggled_alert();
        assert_eq!(view.project(&state).background, style.alert_color);
        assert_eq!(view.project(&state.toggled_alert()).background, style.base_color);
    }

    #[test]
    fn test_labels_follow_values() {
        let view = DisplayView::new(StyleConfig::default());
        let state = DisplayState {
            left: 42,
            right: -7,
            alert: false,
        };
        let projection = view.project(&state);
        assert_eq!(projection.left_text, "42");
        assert_eq!(projection.right_text, "-7");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let view = DisplayView::new(StyleConfig::default());
        let state = DisplayState {
            left: 3,
            right: 9,
            alert: true,
        };
        assert_eq!(view.project(&state), view.project(&state));
    }
}
