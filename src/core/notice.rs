use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Minimum gap between two favorite notices
pub const NOTICE_THROTTLE_MS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Short user-facing message the UI shows as a toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }
}

/// Drops notices that arrive too soon after the last one shown
#[derive(Debug, Clone, Default)]
pub struct NoticeThrottle {
    last_shown: Option<DateTime<Utc>>,
}

impl NoticeThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notice if it may be shown at `now`, recording the time
    pub fn admit(&mut self, notice: Notice, now: DateTime<Utc>) -> Option<Notice> {
        let window = Duration::milliseconds(NOTICE_THROTTLE_MS);
        match self.last_shown {
            Some(last) if now - last <= window => None,
            _ => {
                self.last_shown = Some(now);
                Some(notice)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_window() {
        let start = Utc::now();
        let mut throttle = NoticeThrottle::new();

        assert!(throttle.admit(Notice::info("a"), start).is_some());
        assert!(throttle.admit(Notice::info("b"), start + Duration::milliseconds(200)).is_none());
        assert!(throttle.admit(Notice::info("c"), start + Duration::milliseconds(500)).is_none());
        assert!(throttle.admit(Notice::info("d"), start + Duration::milliseconds(501)).is_some());
    }
}
