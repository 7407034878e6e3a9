use std::time::{Duration, Instant};

/// Caret blink phase
///
/// A repeating toggle driven by the event loop clock. It only decides whether
/// the caret is drawn and never touches the document.
#[derive(Debug, Clone)]
pub struct CaretBlink {
    interval: Duration,
    visible: bool,
    running: bool,
    last_toggle: Instant,
}

impl CaretBlink {
    /// Blinking starts immediately; a zero interval never blinks
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            visible: true,
            running: !interval.is_zero(),
            last_toggle: now,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the phase. Returns `true` if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running || now.duration_since(self.last_toggle) < self.interval {
            return false;
        }
        self.visible = !self.visible;
        self.last_toggle = now;
        true
    }

    /// Show the caret and restart the phase (after an edit or a move)
    pub fn reset(&mut self, now: Instant) {
        self.visible = true;
        self.last_toggle = now;
    }

    /// Cancel blinking, leaving the caret visible
    pub fn stop(&mut self) {
        self.running = false;
        self.visible = true;
    }

    pub fn start(&mut self, now: Instant) {
        self.running = !self.interval.is_zero();
        self.reset(now);
    }

    /// Time until the next toggle, if blinking
    pub fn time_to_next_toggle(&self, now: Instant) -> Option<Duration> {
        self.running.then(|| {
            self.interval
                .saturating_sub(now.duration_since(self.last_toggle))
        })
    }
}
