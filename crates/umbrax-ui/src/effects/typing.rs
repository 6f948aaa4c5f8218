//! Typewriter reveal of the hero title.

use std::time::Duration;

/// Timing of a typewriter reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Pause before the first character.
    pub start_delay: Duration,
    /// Pause between characters.
    pub per_char: Duration,
    /// How long the caret stays after the last character.
    pub caret_hold: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(1000),
            per_char: Duration::from_millis(50),
            caret_hold: Duration::from_millis(1000),
        }
    }
}

/// One visible state of the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    /// Time since the animation started.
    pub at: Duration,
    pub text: String,
    pub caret: bool,
}

/// Frames of a typewriter reveal: an empty title with caret, one frame
/// per character, then the full title without caret.
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    chars: Vec<char>,
    timing: TypingTiming,
    next: usize,
}

impl TypingAnimation {
    /// Creates a reveal of `text` with the default timing.
    pub fn new(text: &str) -> Self {
        Self::with_timing(text, TypingTiming::default())
    }

    /// Creates a reveal of `text` with custom timing.
    pub fn with_timing(text: &str, timing: TypingTiming) -> Self {
        Self {
            chars: text.chars().collect(),
            timing,
            next: 0,
        }
    }

    /// Total time until the caret disappears.
    pub fn duration(&self) -> Duration {
        self.timing.start_delay + self.timing.per_char * self.char_count() + self.timing.caret_hold
    }

    fn char_count(&self) -> u32 {
        u32::try_from(self.chars.len()).unwrap_or(u32::MAX)
    }
}

impl Iterator for TypingAnimation {
    type Item = TypingFrame;

    fn next(&mut self) -> Option<TypingFrame> {
        let len = self.chars.len();
        let frame = match self.next {
            0 => TypingFrame {
                at: Duration::ZERO,
                text: String::new(),
                caret: true,
            },
            n if n <= len => {
                let typed = u32::try_from(n - 1).unwrap_or(u32::MAX);
                TypingFrame {
                    at: self.timing.start_delay + self.timing.per_char * typed,
                    text: self.chars[..n].iter().collect(),
                    caret: true,
                }
            }
            n if n == len + 1 => TypingFrame {
                at: self.duration(),
                text: self.chars.iter().collect(),
                caret: false,
            },
            _ => return None,
        };
        self.next += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames() {
        let frames: Vec<_> = TypingAnimation::new("Hi!").collect();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].text, "");
        assert_eq!(frames[1].text, "H");
        assert_eq!(frames[1].at, Duration::from_millis(1000));
        assert_eq!(frames[3].text, "Hi!");
        assert_eq!(frames[3].at, Duration::from_millis(1100));
        assert!(frames[3].caret);
        assert!(!frames[4].caret);
        assert_eq!(frames[4].at, Duration::from_millis(2150));
    }

    #[test]
    fn test_multibyte_characters() {
        let texts: Vec<_> = TypingAnimation::new("né").map(|f| f.text).collect();
        assert_eq!(texts, vec!["", "n", "né", "né"]);
    }

    #[test]
    fn test_empty_title() {
        let frames: Vec<_> = TypingAnimation::new("").collect();
        assert_eq!(frames.len(), 2);
        assert!(!frames[1].caret);
    }
}
