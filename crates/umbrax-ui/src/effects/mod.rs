//! Cosmetic page behaviors that sit next to the contact form.
//!
//! Each unit is plain state or arithmetic; the page calls them from its
//! event handlers.

mod counter;
mod debounce;
mod nav;
mod reveal;
mod scroll;
mod typing;

pub use counter::{group_thousands, CounterAnimation, COUNTER_DURATION, FRAME_INTERVAL};
pub use debounce::{Debouncer, SCROLL_DEBOUNCE};
pub use nav::{FocusMode, MobileMenu, Navigation};
pub use reveal::{
    Reveal, RevealTarget, StatCounters, VisibilityRule, REVEAL_CLASS, REVEAL_SELECTORS,
};
pub use scroll::{Parallax, ScrollEffects, ScrollSnapshot, ScrollThresholds, Section};
pub use typing::{TypingAnimation, TypingFrame, TypingTiming};
