/// How long a fun-fact stays up without being re-triggered.
pub const FACT_DISMISS_MS: f64 = 5000.0;

/// Single fact popup with one auto-dismiss deadline. Showing it again
/// replaces the text and restarts the countdown; deadlines never stack.
#[derive(Clone, Debug, Default)]
pub struct FactPopup {
    text: String,
    hide_at_ms: Option<f64>,
}

impl FactPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: &str, now_ms: f64) {
        self.text.clear();
        self.text.push_str(text);
        self.hide_at_ms = Some(now_ms + FACT_DISMISS_MS);
    }

    pub fn dismiss(&mut self) {
        self.hide_at_ms = None;
    }

    pub fn visible(&self, now_ms: f64) -> Option<&str> {
        match self.hide_at_ms {
            Some(t) if now_ms < t => Some(&self.text),
            _ => None,
        }
    }
}
