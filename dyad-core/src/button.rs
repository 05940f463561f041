//! Button debouncer state machine.
//!
//! One falling edge starts a fixed settle window (~5 ms reference); the
//! line is sampled once more when the window expires and only then does a
//! press count. The caller owns the actual hardware: on
//! [`EdgeResponse::StartSettle`] it must disable the edge interrupt and
//! start the one-shot settle timer, and on every settle timeout it must
//! stop the timer and re-arm the edge interrupt. The edge interrupt and
//! the settle timer are therefore never armed at the same time, and the
//! unconditional re-arm on expiry means a spurious edge can never lock the
//! button out.

/// Debouncer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Edge interrupt enabled, settle timer stopped
    Armed,
    /// Edge interrupt disabled, settle timer counting down
    Settling,
}

/// What the edge interrupt handler must do after reporting an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeResponse {
    /// Disable the edge interrupt and start the one-shot settle timer
    StartSettle,
    /// Bounce inside the settle window; nothing to do
    Ignored,
}

/// A debounced button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPress;

/// Edge-interrupt plus one-shot-timer debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    /// Create a debouncer with the edge interrupt armed
    pub fn new() -> Self {
        Self {
            state: DebounceState::Armed,
        }
    }

    /// Current state, for inspection
    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Handle a falling edge.
    ///
    /// Edges arriving during the settle window are ignored; on hardware
    /// they cannot even occur because the interrupt is disabled for the
    /// whole window.
    pub fn on_edge(&mut self) -> EdgeResponse {
        match self.state {
            DebounceState::Armed => {
                self.state = DebounceState::Settling;
                EdgeResponse::StartSettle
            }
            DebounceState::Settling => EdgeResponse::Ignored,
        }
    }

    /// Handle the settle timer expiring.
    ///
    /// `still_pressed` is the re-sampled line level (true = pressed, i.e.
    /// the active-low input reads low). The machine returns to `Armed`
    /// regardless of the level - the caller re-arms the edge interrupt
    /// unconditionally - and a press is reported only when the line held.
    pub fn on_settle_timeout(&mut self, still_pressed: bool) -> Option<ButtonPress> {
        match self.state {
            DebounceState::Settling => {
                self.state = DebounceState::Armed;
                still_pressed.then_some(ButtonPress)
            }
            // Stray timeout with no settle window open
            DebounceState::Armed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_press() {
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.on_edge(), EdgeResponse::StartSettle);
        assert_eq!(debouncer.state(), DebounceState::Settling);
        assert_eq!(debouncer.on_settle_timeout(true), Some(ButtonPress));
        assert_eq!(debouncer.state(), DebounceState::Armed);
    }

    #[test]
    fn test_spurious_edge_rejected() {
        let mut debouncer = Debouncer::new();
        debouncer.on_edge();
        // Line already bounced back high at the end of the window
        assert_eq!(debouncer.on_settle_timeout(false), None);
        // No lockout: the next edge opens a new window
        assert_eq!(debouncer.on_edge(), EdgeResponse::StartSettle);
    }

    #[test]
    fn test_bounces_inside_window_ignored() {
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.on_edge(), EdgeResponse::StartSettle);
        for _ in 0..5 {
            assert_eq!(debouncer.on_edge(), EdgeResponse::Ignored);
        }
        assert_eq!(debouncer.on_settle_timeout(true), Some(ButtonPress));
    }

    #[test]
    fn test_stray_timeout_while_armed() {
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.on_settle_timeout(true), None);
        assert_eq!(debouncer.state(), DebounceState::Armed);
    }

    proptest! {
        /// Debounce property: N edge toggles within one settle window
        /// yield at most one press.
        #[test]
        fn prop_at_most_one_press_per_window(edges in 1usize..20, held in any::<bool>()) {
            let mut debouncer = Debouncer::new();
            let mut presses = 0;
            for _ in 0..edges {
                debouncer.on_edge();
            }
            if debouncer.on_settle_timeout(held).is_some() {
                presses += 1;
            }
            prop_assert!(presses <= 1);
            prop_assert_eq!(presses > 0, held);
            // Always re-armed afterwards
            prop_assert_eq!(debouncer.state(), DebounceState::Armed);
        }
    }
}
