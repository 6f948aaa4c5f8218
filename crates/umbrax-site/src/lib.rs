//! Umbrax site front end.
//!
//! Loads the site configuration and turns it into the pieces the
//! `umbrax-site` binary wires together: the contact form fields, the
//! contact page controllers and the scroll effects of the landing page.

pub mod config;

pub use config::{ConfigError, ServiceChoice, SiteConfig};
