//! Stat counter animation stepping.
//!
//! Counters climb from zero to their target in fixed increments, one per
//! frame, and always finish on exactly the target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_FRAME_MS: u32 = 16;

/// Target from a `data-target` attribute, falling back to the digits of the
/// element's text. Leading digits only, like `parseInt`; zero counts as
/// absent.
#[must_use]
pub fn parse_counter_target(data_target: Option<&str>, text: &str) -> u64 {
    data_target
        .and_then(leading_number)
        .filter(|n| *n > 0)
        .or_else(|| {
            let digits: String = text.chars().filter(char::is_ascii_digit).collect();
            leading_number(&digits)
        })
        .unwrap_or(0)
}

fn leading_number(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let end = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// `1234567` -> `"1,234,567"`.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: u64) -> Self {
        let frames = f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_FRAME_MS);
        Self { target, step: target as f64 / frames, current: 0.0 }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Advance one frame.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self) -> CounterFrame {
        let target = self.target as f64;
        if self.current < target {
            self.current += self.step;
            let shown = (self.current.floor() as u64).min(self.target);
            CounterFrame { text: format_grouped(shown), done: false }
        } else {
            CounterFrame { text: format_grouped(self.target), done: true }
        }
    }
}
