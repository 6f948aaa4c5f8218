//! Site configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use umbrax_forms::fields::contact_form_fields;
use umbrax_forms::{FormFieldDef, DEFAULT_SUBMIT_LABEL};
use umbrax_ui::effects::{ScrollEffects, ScrollThresholds, Section};
use umbrax_ui::{
    ContactPage, Document, SimulatedTransport, SubmitMessages, FAILURE_MESSAGE, SENDING_LABEL,
    SUCCESS_MESSAGE,
};

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One option of the service select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceChoice {
    pub value: String,
    pub label: String,
}

impl ServiceChoice {
    /// Creates a service option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Everything the site can be configured with. Missing keys fall back to
/// the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Text of the idle submit button.
    pub submit_label: String,
    /// Options of the service select, in display order.
    pub services: Vec<ServiceChoice>,
    /// How long the simulated transport takes to answer.
    pub submit_delay_ms: u64,
    /// How long a notification stays visible.
    pub notification_ms: u64,
    pub success_message: String,
    pub failure_message: String,
    pub scroll: ScrollThresholds,
    /// Sections of the landing page, top to bottom.
    pub sections: Vec<Section>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            services: vec![
                ServiceChoice::new("consulting", "Consulting"),
                ServiceChoice::new("development", "Development"),
                ServiceChoice::new("design", "Design"),
                ServiceChoice::new("support", "Support"),
            ],
            submit_delay_ms: 2000,
            notification_ms: 5000,
            success_message: SUCCESS_MESSAGE.to_string(),
            failure_message: FAILURE_MESSAGE.to_string(),
            scroll: ScrollThresholds::default(),
            sections: vec![
                Section::new("home", 0.0, 800.0),
                Section::new("about", 800.0, 700.0),
                Section::new("services", 1500.0, 900.0),
                Section::new("contact", 2400.0, 800.0),
            ],
        }
    }
}

impl SiteConfig {
    /// Reads the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Parses configuration JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Delay of the simulated transport.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Display time of a notification.
    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// The service options as `(value, label)` pairs.
    pub fn service_choices(&self) -> Vec<(String, String)> {
        self.services
            .iter()
            .map(|choice| (choice.value.clone(), choice.label.clone()))
            .collect()
    }

    /// Field definitions of the contact form.
    pub fn form_fields(&self) -> Vec<FormFieldDef> {
        contact_form_fields(&self.service_choices())
    }

    /// Texts of the submission controller.
    pub fn submit_messages(&self) -> SubmitMessages {
        SubmitMessages {
            sending_label: SENDING_LABEL.to_string(),
            success: self.success_message.clone(),
            failure: self.failure_message.clone(),
        }
    }

    /// A headless contact page using the simulated transport.
    pub fn contact_page(&self) -> ContactPage {
        ContactPage::new(
            Document::with_submit_label(&self.submit_markup()),
            Arc::new(SimulatedTransport::new(self.submit_delay())),
            self.notification_display(),
        )
        .messages(self.submit_messages())
    }

    /// Markup of the idle submit button: icon followed by the label.
    pub fn submit_markup(&self) -> String {
        format!("<i class=\"fas fa-paper-plane\"></i> {}", self.submit_label)
    }

    /// Scroll effects of the landing page.
    pub fn scroll_effects(&self) -> ScrollEffects {
        ScrollEffects::new(self.scroll.clone(), self.sections.clone())
    }
}
