//! One-shot reveal of page elements as they scroll into view.
//!
//! Cards fade in the first time enough of them is visible and stat
//! counters start the first time half of them is. Neither is ever undone.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::counter::CounterAnimation;

/// Class added to a revealed card.
pub const REVEAL_CLASS: &str = "fade-in-up";

/// Elements that fade in on first sight.
pub const REVEAL_SELECTORS: [&str; 4] = [
    ".feature-card",
    ".service-card",
    ".about-feature",
    ".contact-item",
];

/// When an element counts as seen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityRule {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// Added to the viewport's bottom edge; negative values shrink it.
    pub bottom_margin: f64,
}

impl VisibilityRule {
    /// Rule of the fade-in cards.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        bottom_margin: -50.0,
    };

    /// Rule of the stat counters.
    pub const COUNTER: Self = Self {
        threshold: 0.5,
        bottom_margin: 0.0,
    };

    /// Fraction of `target` inside the viewport at `scroll_y`.
    ///
    /// An element without height is either fully visible or not at all.
    pub fn visible_ratio(
        &self,
        target: &RevealTarget,
        scroll_y: f64,
        viewport_height: f64,
    ) -> f64 {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height + self.bottom_margin;
        let bottom = target.top + target.height;

        if target.height <= 0.0 {
            return if target.top >= view_top && target.top <= view_bottom {
                1.0
            } else {
                0.0
            };
        }

        let overlap = bottom.min(view_bottom) - target.top.max(view_top);
        (overlap / target.height).clamp(0.0, 1.0)
    }

    /// Whether `target` is seen at `scroll_y`.
    pub fn is_met(&self, target: &RevealTarget, scroll_y: f64, viewport_height: f64) -> bool {
        let ratio = self.visible_ratio(target, scroll_y, viewport_height);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// An observed element and its vertical extent in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTarget {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl RevealTarget {
    /// Creates a target spanning `height` pixels from `top`.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Watches elements and reveals each one once.
///
/// A revealed element stops being observed, so scrolling it back out of
/// view keeps it revealed.
#[derive(Debug, Clone)]
pub struct Reveal {
    rule: VisibilityRule,
    observed: Vec<RevealTarget>,
    revealed: BTreeSet<String>,
}

impl Reveal {
    /// Creates a tracker using `rule`.
    pub fn new(rule: VisibilityRule) -> Self {
        Self {
            rule,
            observed: Vec::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Starts observing `target`. Already revealed ids are ignored.
    pub fn observe(&mut self, target: RevealTarget) {
        if !self.revealed.contains(&target.id) {
            self.observed.push(target);
        }
    }

    /// The rule in use.
    pub fn rule(&self) -> VisibilityRule {
        self.rule
    }

    /// Whether `id` has been revealed.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Number of elements still waiting to be seen.
    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Checks every observed element at a scroll position and returns the
    /// ids revealed by this call, in observation order.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<String> {
        let rule = self.rule;
        let (seen, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.observed)
            .into_iter()
            .partition(|target| rule.is_met(target, scroll_y, viewport_height));
        self.observed = waiting;

        let ids: Vec<String> = seen.into_iter().map(|target| target.id).collect();
        for id in &ids {
            debug!(id = %id, "element revealed");
            self.revealed.insert(id.clone());
        }
        ids
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(VisibilityRule::REVEAL)
    }
}

/// Stat counters that start counting the first time they are half visible.
#[derive(Debug, Clone)]
pub struct StatCounters {
    reveal: Reveal,
    labels: BTreeMap<String, String>,
}

impl StatCounters {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self {
            reveal: Reveal::new(VisibilityRule::COUNTER),
            labels: BTreeMap::new(),
        }
    }

    /// Observes a stat whose final text is `label`.
    pub fn observe(&mut self, target: RevealTarget, label: impl Into<String>) {
        self.labels.insert(target.id.clone(), label.into());
        self.reveal.observe(target);
    }

    /// Whether the stat `id` has started.
    pub fn is_started(&self, id: &str) -> bool {
        self.reveal.is_revealed(id)
    }

    /// Starts the counters that became visible. Labels that do not animate
    /// still count as started.
    pub fn update(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
    ) -> Vec<(String, CounterAnimation)> {
        self.reveal
            .update(scroll_y, viewport_height)
            .into_iter()
            .filter_map(|id| {
                let counter = CounterAnimation::parse(self.labels.get(&id)?)?;
                Some((id, counter))
            })
            .collect()
    }
}

impl Default for StatCounters {
    fn default() -> Self {
        Self::new()
    }
}
