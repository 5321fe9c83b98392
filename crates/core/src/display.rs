//! Display sinks: one-way outputs for counters and warnings.
//!
//! The game pushes text into a sink and never reads it back. Warning expiry
//! is scheduled by the session; the sink only learns the intended lifetime
//! and later receives [`DisplaySink::clear_warning`].

pub trait DisplaySink {
    fn show_matches(&mut self, matches: u32);
    fn show_turns(&mut self, turns: u32);
    /// `None` means no game has been completed yet.
    fn show_best(&mut self, best: Option<u32>);
    fn show_warning(&mut self, message: &str, duration_ms: u32);
    fn clear_warning(&mut self);
}

/// The four text regions of the heads-up display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub matches: String,
    pub guesses: String,
    pub lowest: String,
    pub warning: String,
}

impl Default for HudText {
    fn default() -> Self {
        Self {
            matches: "0".to_string(),
            guesses: "0".to_string(),
            lowest: String::new(),
            warning: String::new(),
        }
    }
}

impl DisplaySink for HudText {
    fn show_matches(&mut self, matches: u32) {
        self.matches = matches.to_string();
    }

    fn show_turns(&mut self, turns: u32) {
        self.guesses = turns.to_string();
    }

    fn show_best(&mut self, best: Option<u32>) {
        // An unset best leaves whatever is displayed.
        if let Some(best) = best {
            self.lowest = best.to_string();
        }
    }

    fn show_warning(&mut self, message: &str, _duration_ms: u32) {
        self.warning.clear();
        self.warning.push_str(message);
    }

    fn clear_warning(&mut self) {
        self.warning.clear();
    }
}

/// Everything a sink was told, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Matches(u32),
    Turns(u32),
    Best(Option<u32>),
    Warning { message: String, duration_ms: u32 },
    ClearWarning,
}

/// Recording sink, used by tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<DisplayEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    /// Messages of every warning shown so far.
    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Warning { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySink for EventLog {
    fn show_matches(&mut self, matches: u32) {
        self.events.push(DisplayEvent::Matches(matches));
    }

    fn show_turns(&mut self, turns: u32) {
        self.events.push(DisplayEvent::Turns(turns));
    }

    fn show_best(&mut self, best: Option<u32>) {
        self.events.push(DisplayEvent::Best(best));
    }

    fn show_warning(&mut self, message: &str, duration_ms: u32) {
        self.events.push(DisplayEvent::Warning {
            message: message.to_string(),
            duration_ms,
        });
    }

    fn clear_warning(&mut self) {
        self.events.push(DisplayEvent::ClearWarning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_defaults() {
        let hud = HudText::default();
        assert_eq!(hud.matches, "0");
        assert_eq!(hud.guesses, "0");
        assert!(hud.lowest.is_empty());
        assert!(hud.warning.is_empty());
    }

    #[test]
    fn test_hud_regions() {
        let mut hud = HudText::default();
        hud.show_matches(6);
        hud.show_turns(14);
        hud.show_best(Some(22));
        hud.show_warning("AVOID SPAMMING!", 2000);

        assert_eq!(hud.matches, "6");
        assert_eq!(hud.guesses, "14");
        assert_eq!(hud.lowest, "22");
        assert_eq!(hud.warning, "AVOID SPAMMING!");

        hud.clear_warning();
        assert!(hud.warning.is_empty());
    }

    #[test]
    fn test_hud_unset_best_keeps_text() {
        let mut hud = HudText::default();
        hud.show_best(None);
        assert!(hud.lowest.is_empty());
        hud.show_best(Some(30));
        hud.show_best(None);
        assert_eq!(hud.lowest, "30");
    }

    #[test]
    fn test_newer_warning_overwrites() {
        let mut hud = HudText::default();
        hud.show_warning("AVOID SPAMMING!", 2000);
        hud.show_warning("AVOID CLICKING THE SAME CARD!", 2000);
        assert_eq!(hud.warning, "AVOID CLICKING THE SAME CARD!");
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.show_turns(2);
        log.show_warning("AVOID SPAMMING!", 2000);
        log.show_matches(2);

        assert_eq!(log.warnings(), vec!["AVOID SPAMMING!"]);
        assert_eq!(
            log.take(),
            vec![
                DisplayEvent::Turns(2),
                DisplayEvent::Warning {
                    message: "AVOID SPAMMING!".to_string(),
                    duration_ms: 2000
                },
                DisplayEvent::Matches(2),
            ]
        );
        assert!(log.events().is_empty());
    }
}
