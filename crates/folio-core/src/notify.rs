//! Toast notifications with timed auto-dismiss

use crate::render::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            _ => "fas fa-info-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="notification notification-{}"><div class="notification-content">"#,
                r#"<i class="{}"></i><span>{}</span></div></div>"#,
            ),
            self.kind.as_str(),
            self.kind.icon(),
            escape_html(&self.message),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    notification: Notification,
    expires_at_ms: f64,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    lifetime_ms: f64,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(5_000)
    }
}

impl NotificationCenter {
    pub fn new(lifetime_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime_ms: lifetime_ms as f64,
        }
    }

    pub fn push(&mut self, notification: Notification, now_ms: f64) {
        tracing::info!(
            kind = notification.kind.as_str(),
            message = %notification.message,
            "notification"
        );
        self.toasts.push(Toast {
            notification,
            expires_at_ms: now_ms + self.lifetime_ms,
        });
    }

    /// Drop expired toasts; returns how many were removed
    pub fn prune(&mut self, now_ms: f64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at_ms > now_ms);
        before - self.toasts.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|toast| &toast.notification)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.last().map(|toast| &toast.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn to_html(&self) -> String {
        self.visible().map(Notification::to_html).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_lifetime() {
        let mut center = NotificationCenter::new(5_000);
        center.push(Notification::success("Message sent successfully!"), 1_000.0);
        center.push(Notification::new("Heads up", NotificationKind::Info), 3_000.0);

        assert_eq!(center.prune(5_999.0), 0);
        assert_eq!(center.prune(6_000.0), 1);
        assert_eq!(center.latest().unwrap().message, "Heads up");
        assert_eq!(center.prune(8_000.0), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn test_icon_by_kind() {
        assert_eq!(NotificationKind::Success.icon(), "fas fa-check-circle");
        assert_eq!(NotificationKind::Warning.icon(), "fas fa-info-circle");
    }

    #[test]
    fn test_markup() {
        let html = Notification::success("Sent <ok>").to_html();
        assert!(html.contains("notification-success"));
        assert!(html.contains("Sent &lt;ok&gt;"));
    }
}
