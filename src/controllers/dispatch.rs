// src/controllers/dispatch.rs
//
// Address -> handler table.
//
// Handlers are pure: they get the current state and the message arguments and
// return the next state, or None when the arguments don't fit. The listener
// decides what to do with the result.
//
// Incoming addresses are OSC patterns (`?`, `*`, `[..]`, `{..}`), so one
// message can reach several handlers. They run in registration order, each
// one seeing the state left by the previous.

use nannou_osc as osc;
use rosc::address::{Matcher, OscAddress};

use crate::models::DisplayState;

pub const ENC_A: &str = "/encA";
pub const ENC_B: &str = "/encB";
pub const RESET: &str = "/reset";

pub type Handler = fn(&DisplayState, &[osc::Type]) -> Option<DisplayState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied(DisplayState),
    /// No registered address matches the pattern, or the pattern is invalid.
    Unrouted,
    /// Every matching handler refused the arguments.
    Rejected,
}

pub struct Dispatcher {
    routes: Vec<(&'static str, Handler)>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.register(ENC_A, set_left);
        dispatcher.register(ENC_B, set_right);
        dispatcher.register(RESET, toggle_alert);
        dispatcher
    }
}

impl Dispatcher {
    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    /// Replaces any handler already registered for `address`, keeping its
    /// position in the order.
    pub fn register(&mut self, address: &'static str, handler: Handler) {
        match self.routes.iter_mut().find(|(route, _)| *route == address) {
            Some(existing) => existing.1 = handler,
            None => self.routes.push((address, handler)),
        }
    }

    pub fn dispatch(&self, state: &DisplayState, message: &osc::Message) -> Dispatch {
        let Ok(matcher) = Matcher::new(&message.addr) else {
            return Dispatch::Unrouted;
        };

        let mut current = *state;
        let mut matched = false;
        let mut applied = false;

        for (route, handler) in &self.routes {
            if !route_matches(&matcher, route) {
                continue;
            }
            matched = true;
            if let Some(next) = handler(&current, &message.args) {
                current = next;
                applied = true;
            }
        }

        match (matched, applied) {
            (_, true) => Dispatch::Applied(current),
            (true, false) => Dispatch::Rejected,
            (false, _) => Dispatch::Unrouted,
        }
    }
}

fn route_matches(matcher: &Matcher, route: &str) -> bool {
    OscAddress::new(route.to_string())
        .map(|address| matcher.match_address(&address))
        .unwrap_or(false)
}

fn set_left(state: &DisplayState, args: &[osc::Type]) -> Option<DisplayState> {
    first_integer(args).map(|value| state.with_left(value))
}

fn set_right(state: &DisplayState, args: &[osc::Type]) -> Option<DisplayState> {
    first_integer(args).map(|value| state.with_right(value))
}

fn toggle_alert(state: &DisplayState, _args: &[osc::Type]) -> Option<DisplayState> {
    Some(state.toggled_alert())
}

/// Coerces the first argument to an integer. Floats only pass when they hold
/// a whole number that fits in an i64.
pub fn first_integer(args: &[osc::Type]) -> Option<i64> {
    match args.first()? {
        osc::Type::Int(v) => Some(i64::from(*v)),
        osc::Type::Long(v) => Some(*v),
        osc::Type::Float(v) => whole_number(f64::from(*v)),
        osc::Type::Double(v) => whole_number(*v),
        _ => None,
    }
}

fn whole_number(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
