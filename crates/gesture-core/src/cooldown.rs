//! Cooldown gating for discrete actions.
//!
//! A single shared timer serializes every discrete action (click, lock,
//! volume, tab switch): triggering any one of them blocks all of them for
//! the cooldown window. One gate instead of per-action timers trades
//! tunability for simplicity; the known cost is that rapid volume
//! adjustment runs at the same cadence as a screen lock.

/// Shared minimum-interval gate between discrete action triggers.
///
/// Takes explicit `now_ms` parameters (monotonic session milliseconds) so
/// gate behavior is deterministic under test.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    /// None until the first action fires. Session time starts at zero, so
    /// "never triggered" must stay distinct from "triggered at t=0" or the
    /// opening window of every session would be gated.
    last_action_ms: Option<u64>,
    cooldown_ms: u64,
}

impl CooldownGate {
    /// Create a gate with the given cooldown window.
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            last_action_ms: None,
            cooldown_ms,
        }
    }

    /// Whether the gate is still hot at `now_ms`.
    ///
    /// A gate that has never fired is open: the first discrete action of a
    /// session is never blocked, however early it confirms.
    pub fn is_active(&self, now_ms: u64) -> bool {
        match self.last_action_ms {
            Some(last) => now_ms.saturating_sub(last) < self.cooldown_ms,
            None => false,
        }
    }

    /// Record that a discrete action fired at `now_ms`.
    ///
    /// The stored timestamp only moves forward, so a stale caller can
    /// never reopen the gate early.
    pub fn trigger(&mut self, now_ms: u64) {
        self.last_action_ms = Some(self.last_action_ms.map_or(now_ms, |last| last.max(now_ms)));
    }

    /// Timestamp of the last triggered action, if any (ms).
    pub fn last_action_ms(&self) -> Option<u64> {
        self.last_action_ms
    }

    /// Configured cooldown window (ms).
    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_activates_gate() {
        let mut gate = CooldownGate::new(500);
        gate.trigger(1_000);
        assert!(gate.is_active(1_000));
        assert!(gate.is_active(1_499));
    }

    #[test]
    fn test_gate_releases_after_cooldown() {
        let mut gate = CooldownGate::new(500);
        gate.trigger(1_000);
        assert!(!gate.is_active(1_500));
        assert!(!gate.is_active(2_000));
    }

    #[test]
    fn test_timestamp_is_monotonic() {
        let mut gate = CooldownGate::new(500);
        gate.trigger(2_000);
        // A stale trigger must not rewind the gate.
        gate.trigger(1_000);
        assert_eq!(gate.last_action_ms(), Some(2_000));
        assert!(gate.is_active(2_400));
    }

    #[test]
    fn test_fresh_gate_is_open() {
        let gate = CooldownGate::new(500);
        assert!(!gate.is_active(0));
        assert!(!gate.is_active(100));
    }

    #[test]
    fn test_first_trigger_starts_the_window() {
        let mut gate = CooldownGate::new(500);
        gate.trigger(100);
        assert!(gate.is_active(150));
        assert!(!gate.is_active(600));
    }
}
