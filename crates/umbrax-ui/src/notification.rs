//! Transient status messages. At most one is on the page at a time.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ironhtml::html;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::surface::NotificationHost;

/// How long a notification stays up unless dismissed.
pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(5000);

/// Kind of a notification, which selects its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Lowercase name used in class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Background colour of the notification.
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "#6366f1",
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// Renders the notification element.
    pub fn render(&self) -> String {
        let class = format!("notification notification-{}", self.severity);
        let message = self.message.clone();
        html! {
            div.class(#class) {
                div.class("notification-content") {
                    span.class("notification-message") { #message }
                    button.class("notification-close") { "×" }
                }
            }
        }
        .render()
    }
}

struct Active {
    id: NotificationId,
    timer: Option<JoinHandle<()>>,
}

struct Inner {
    host: Arc<dyn NotificationHost>,
    display_for: Duration,
    next_id: AtomicU64,
    active: Mutex<Option<Active>>,
}

/// Shows notifications on a host, replacing the previous one and
/// removing each after its display time.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("display_for", &self.inner.display_for)
            .field("active", &self.active())
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Creates a notifier with the default display time.
    pub fn new(host: Arc<dyn NotificationHost>) -> Self {
        Self::with_display(host, DEFAULT_DISPLAY)
    }

    /// Creates a notifier that keeps each notification up for `display_for`.
    pub fn with_display(host: Arc<dyn NotificationHost>, display_for: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                host,
                display_for,
                next_id: AtomicU64::new(1),
                active: Mutex::new(None),
            }),
        }
    }

    /// Shows `message`, replacing whatever is currently displayed.
    ///
    /// The removal timer runs on the current tokio runtime; without one
    /// the notification stays until dismissed.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification {
            id,
            message: message.into(),
            severity,
        };

        let mut active = self.inner.active.lock();
        if let Some(previous) = active.take() {
            if let Some(timer) = previous.timer {
                timer.abort();
            }
            self.inner.host.detach(previous.id);
            debug!(replaced = %previous.id, "notification replaced");
        }

        self.inner.host.attach(&notification);
        info!(id = %id, severity = %severity, message = %notification.message, "notification shown");

        let timer = match Handle::try_current() {
            Ok(handle) => {
                let notifier = self.clone();
                let display_for = self.inner.display_for;
                Some(handle.spawn(async move {
                    tokio::time::sleep(display_for).await;
                    notifier.remove(id, false);
                }))
            }
            Err(_) => {
                warn!(id = %id, "no runtime available, notification will not expire");
                None
            }
        };

        *active = Some(Active { id, timer });
        id
    }

    /// Removes notification `id` if it is still displayed.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.remove(id, true)
    }

    /// The displayed notification's id.
    pub fn active(&self) -> Option<NotificationId> {
        self.inner.active.lock().as_ref().map(|a| a.id)
    }

    fn remove(&self, id: NotificationId, abort_timer: bool) -> bool {
        let mut active = self.inner.active.lock();
        match active.as_ref() {
            Some(current) if current.id == id => {}
            _ => return false,
        }
        if let Some(current) = active.take() {
            if abort_timer {
                if let Some(timer) = current.timer {
                    timer.abort();
                }
            }
        }
        self.inner.host.detach(id);
        debug!(id = %id, "notification removed");
        true
    }
}
