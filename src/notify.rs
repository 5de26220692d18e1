pub const DISPLAY_MS: u32 = 4_000;
pub const EXIT_MS: u32 = 300;
pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

pub const NOTIFICATION_CSS: &str = r#"
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  padding: 1rem 1.5rem;
  background: white;
  border-radius: 0.5rem;
  box-shadow: 0 10px 25px rgba(0,0,0,0.1);
  z-index: 9999;
  animation: slideInRight 0.3s ease;
}

.notification-success {
  border-left: 4px solid #22c55e;
}

.notification-error {
  border-left: 4px solid #ef4444;
}

.notification-content {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-family: 'DM Sans', sans-serif;
  font-weight: 500;
}

.notification-success i {
  color: #22c55e;
  font-size: 1.25rem;
}

.notification-error i {
  color: #ef4444;
  font-size: 1.25rem;
}

@keyframes slideInRight {
  from {
    transform: translateX(400px);
    opacity: 0;
  }
  to {
    transform: translateX(0);
    opacity: 1;
  }
}

@keyframes slideOutRight {
  from {
    transform: translateX(0);
    opacity: 1;
  }
  to {
    transform: translateX(400px);
    opacity: 0;
  }
}
"#;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn css_class(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Info => "fa-info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at_ms: f64,
}

impl Notification {
    fn expired(&self, now_ms: f64) -> bool {
        now_ms - self.created_at_ms >= f64::from(DISPLAY_MS + EXIT_MS)
    }
}

// At most one live notification; a new one evicts the prior outright.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now_ms: f64,
    ) -> Option<Notification> {
        self.current.replace(Notification {
            message: message.into(),
            kind,
            created_at_ms: now_ms,
        })
    }

    pub fn expire(&mut self, now_ms: f64) -> bool {
        match &self.current {
            Some(notification) if notification.expired(now_ms) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

pub fn content_markup(message: &str, kind: NotificationKind) -> String {
    format!(
        r#"<div class="notification-content"><i class="fas {}"></i><span>{}</span></div>"#,
        kind.icon_class(),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_newer_notification_evicts_the_prior_one() {
        let mut center = NotificationCenter::new();

        assert!(center.show("A", NotificationKind::Info, 0.0).is_none());
        let evicted = center
            .show("B", NotificationKind::Success, 1_000.0)
            .expect("prior notification should be evicted");

        assert_eq!(evicted.message, "A");
        let current = center.current().expect("latest notification is live");
        assert_eq!(current.message, "B");
        assert_eq!(current.kind, NotificationKind::Success);
    }

    #[test]
    fn a_notification_expires_after_display_plus_exit() {
        let mut center = NotificationCenter::new();
        center.show("hello", NotificationKind::Info, 0.0);

        assert!(!center.expire(4_299.0));
        assert!(center.current().is_some());
        assert!(center.expire(4_300.0));
        assert!(center.current().is_none());
    }

    #[test]
    fn expire_without_a_live_notification_is_a_no_op() {
        let mut center = NotificationCenter::new();

        assert!(!center.expire(10_000.0));
    }

    #[test]
    fn dismiss_clears_the_live_notification() {
        let mut center = NotificationCenter::new();
        center.show("gone", NotificationKind::Error, 0.0);
        center.dismiss();

        assert!(center.current().is_none());
    }

    #[test]
    fn icons_track_notification_kind() {
        assert_eq!(NotificationKind::Success.icon_class(), "fa-check-circle");
        assert_eq!(NotificationKind::Error.icon_class(), "fa-exclamation-circle");
        assert_eq!(NotificationKind::Info.icon_class(), "fa-info-circle");
    }

    #[test]
    fn markup_carries_kind_icon_and_message() {
        let markup = content_markup("Saved.", NotificationKind::Success);

        assert!(markup.contains("fa-check-circle"));
        assert!(markup.contains("<span>Saved.</span>"));
    }

    #[test]
    fn css_class_combines_base_and_kind() {
        assert_eq!(
            NotificationKind::Error.css_class(),
            "notification notification-error"
        );
    }

    #[test]
    fn exit_animation_is_defined_by_the_injected_styles() {
        let keyframe = EXIT_ANIMATION
            .split(' ')
            .next()
            .expect("animation shorthand starts with its keyframe name");

        assert!(NOTIFICATION_CSS.contains(&format!("@keyframes {keyframe}")));
        assert!(NOTIFICATION_CSS.contains("@keyframes slideInRight"));
    }
}
