// src/models/display_state.rs
//
// The last-known encoder values and the alert flag.
//
// The listener thread owns the authoritative copy and is the only writer.
// The GUI only ever sees snapshots of it sent over the event channel.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Last value handled on the left encoder channel (`/encA`).
    pub left: i64,
    /// Last value handled on the right encoder channel (`/encB`).
    pub right: i64,
    /// Flips on every handled reset. false shows the base color.
    pub alert: bool,
}

impl DisplayState {
    pub fn with_left(self, left: i64) -> Self {
        Self { left, ..self }
    }

    pub fn with_right(self, right: i64) -> Self {
        Self { right, ..self }
    }

    pub fn toggled_alert(self) -> Self {
        Self {
            alert: !self.alert,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DisplayState::default();
        assert_eq!(state.left, 0);
        assert_eq!(state.right, 0);
        assert!(!state.alert);
    }

    #[test]
    fn test_updates_touch_one_field() {
        let state = DisplayState::default().with_left(42);
        assert_eq!(state, DisplayState { left: 42, right: 0, alert: false });

        let state = state.with_right(-7);
        assert_eq!(state, DisplayState { left: 42, right: -7, alert: false });

        let state = state.toggled_alert();
        assert_eq!(state, DisplayState { left: 42, right: -7, alert: true });
    }

    #[test]
    fn test_toggle_parity() {
        let mut state = DisplayState::default();
        for n in 1..=9 {
            state = state.toggled_alert();
            assert_eq!(state.alert, n % 2 == 1);
        }
    }
}
