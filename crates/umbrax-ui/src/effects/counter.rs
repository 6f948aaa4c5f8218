//! Count-up animation of the hero stats.

use std::time::Duration;

/// Total running time of a count-up.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Time between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Frames of a stat counting up from zero to its final value.
///
/// A label such as `"500+"` animates `"4+"`, `"8+"`, ... up to `"500+"`.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    /// Prepares the animation for a stat label. Labels that do not start
    /// with a digit are left alone; numbers beyond `u64::MAX` count up to
    /// `u64::MAX`.
    pub fn parse(label: &str) -> Option<Self> {
        if !label.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().unwrap_or(u64::MAX);
        let suffix = label
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();

        let frames = COUNTER_DURATION.as_millis() / FRAME_INTERVAL.as_millis();
        let increment = target as f64 / frames as f64;

        Some(Self {
            target,
            suffix,
            increment,
            current: 0.0,
            done: false,
        })
    }

    /// The final value.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Text shown after the number.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        self.current += self.increment;
        let shown = if self.current >= self.target as f64 {
            self.done = true;
            self.target
        } else {
            self.current.floor() as u64
        };

        Some(format!("{}{}", group_thousands(shown), self.suffix))
    }
}

/// Formats `n` with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
