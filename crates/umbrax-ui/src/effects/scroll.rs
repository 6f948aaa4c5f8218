//! Scroll-position driven state: header style, scroll-to-top button,
//! active section and parallax offsets.

use serde::{Deserialize, Serialize};

/// A page section that navigation links point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Offset of the section's top from the document top, in pixels.
    pub top: f64,
    pub height: f64,
}

impl Section {
    /// Creates a section spanning `height` pixels from `top`.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Pixel thresholds of the scroll effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollThresholds {
    /// Past this the header switches to its scrolled style.
    pub header_after: f64,
    /// Past this the scroll-to-top button shows.
    pub scroll_top_after: f64,
    /// A section counts as current this many pixels before its top.
    pub section_lead: f64,
    /// Anchor navigation stops this far above the section, clearing the fixed header.
    pub anchor_offset: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            header_after: 100.0,
            scroll_top_after: 500.0,
            section_lead: 150.0,
            anchor_offset: 80.0,
        }
    }
}

/// Vertical offsets of the hero layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub background: f64,
    pub logo: f64,
}

impl Parallax {
    /// Offsets for a scroll position. The hero moves up at half the scroll
    /// rate, the background at 30% of that and the logo at 10%.
    pub fn at(scroll_y: f64) -> Self {
        let rate = scroll_y * -0.5;
        Self {
            background: positive_zero(rate * 0.3),
            logo: positive_zero(rate * 0.1),
        }
    }

    /// CSS transform of the background image.
    pub fn background_transform(&self) -> String {
        format!("translate3d(0, {}px, 0)", self.background)
    }

    /// CSS transform of the logo.
    pub fn logo_transform(&self) -> String {
        format!("translate3d(0, {}px, 0)", self.logo)
    }
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Everything the scroll handlers derive from one scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub header_scrolled: bool,
    pub show_scroll_top: bool,
    pub active_section: Option<String>,
    pub parallax: Parallax,
}

/// Computes scroll-driven state for a page's sections.
#[derive(Debug, Clone, Default)]
pub struct ScrollEffects {
    thresholds: ScrollThresholds,
    sections: Vec<Section>,
}

impl ScrollEffects {
    /// Creates scroll effects for `sections`, listed top to bottom.
    pub fn new(thresholds: ScrollThresholds, sections: Vec<Section>) -> Self {
        Self {
            thresholds,
            sections,
        }
    }

    /// The configured thresholds.
    pub fn thresholds(&self) -> &ScrollThresholds {
        &self.thresholds
    }

    /// The observed sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Derives the scroll-driven state at `scroll_y`.
    pub fn snapshot(&self, scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            header_scrolled: scroll_y > self.thresholds.header_after,
            show_scroll_top: scroll_y > self.thresholds.scroll_top_after,
            active_section: self.active_section(scroll_y).map(|s| s.id.clone()),
            parallax: Parallax::at(scroll_y),
        }
    }

    /// The section under the scroll position. When windows overlap the
    /// later section wins.
    pub fn active_section(&self, scroll_y: f64) -> Option<&Section> {
        self.sections
            .iter()
            .rev()
            .find(|section| {
                let start = section.top - self.thresholds.section_lead;
                scroll_y >= start && scroll_y < start + section.height
            })
    }

    /// Where clicking a `#id` link scrolls to.
    pub fn anchor_target(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| (section.top - self.thresholds.anchor_offset).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects() -> ScrollEffects {
        ScrollEffects::new(
            ScrollThresholds::default(),
            vec![
                Section::new("home", 0.0, 800.0),
                Section::new("services", 800.0, 900.0),
                Section::new("contact", 1700.0, 700.0),
            ],
        )
    }

    #[test]
    fn test_header_and_scroll_top_thresholds() {
        let effects = effects();
        assert!(!effects.snapshot(100.0).header_scrolled);
        assert!(effects.snapshot(101.0).header_scrolled);
        assert!(!effects.snapshot(500.0).show_scroll_top);
        assert!(effects.snapshot(501.0).show_scroll_top);
    }

    #[test]
    fn test_active_section_uses_lead() {
        let effects = effects();
        assert_eq!(effects.snapshot(0.0).active_section.as_deref(), Some("home"));
        assert_eq!(effects.snapshot(649.0).active_section.as_deref(), Some("home"));
        assert_eq!(effects.snapshot(650.0).active_section.as_deref(), Some("services"));
        assert_eq!(effects.snapshot(1600.0).active_section.as_deref(), Some("contact"));
        assert_eq!(effects.snapshot(5000.0).active_section, None);
    }

    #[test]
    fn test_anchor_target() {
        let effects = effects();
        assert_eq!(effects.anchor_target("services"), Some(720.0));
        assert_eq!(effects.anchor_target("home"), Some(0.0));
        assert_eq!(effects.anchor_target("blog"), None);
    }

    #[test]
    fn test_parallax() {
        let parallax = Parallax::at(600.0);
        assert!((parallax.background - -90.0).abs() < 1e-9);
        assert!((parallax.logo - -30.0).abs() < 1e-9);
        assert_eq!(parallax.background_transform(), "translate3d(0, -90px, 0)");
        assert_eq!(Parallax::at(0.0).logo_transform(), "translate3d(0, 0px, 0)");
    }

    #[test]
    fn test_thresholds_deserialize_with_defaults() {
        let thresholds: ScrollThresholds =
            serde_json::from_str(r#"{"header_after": 50}"#).unwrap();
        assert_eq!(thresholds.header_after, 50.0);
        assert_eq!(thresholds.anchor_offset, 80.0);
    }
}
