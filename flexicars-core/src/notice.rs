//! Transient notices: toasts and the contact form's success banner.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Alert class such as `alert-warning`.
    #[must_use]
    pub fn class(self) -> String {
        format!("alert-{}", self.suffix())
    }
}

pub type NoticeId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub severity: Severity,
}

/// Live notices in insertion order. There is no queue and no de-duplication: every push
/// is an independent entry removed only by its own id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: NoticeId,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NoticeId {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Remove one notice. Returns false if it was already gone.
    pub fn remove(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub fn contains(&self, id: NoticeId) -> bool {
        self.notices.iter().any(|notice| notice.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Where a toast is in its slide-in / slide-out animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeStage {
    #[default]
    Entering,
    Visible,
    Leaving,
}

impl NoticeStage {
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Entering | Self::Leaving => "transform: translateX(100%)",
            Self::Visible => "transform: translateX(0)",
        }
    }
}

/// Toast timing, all measured from creation except `exit_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeTiming {
    /// Delay before sliding in.
    pub enter_delay_ms: u32,
    /// When the slide-out starts.
    pub leave_after_ms: u32,
    /// Slide-out duration before removal.
    pub exit_ms: u32,
}

impl Default for NoticeTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            leave_after_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl NoticeTiming {
    /// Total time a toast stays in the document.
    #[must_use]
    pub const fn lifetime_ms(self) -> u32 {
        self.leave_after_ms.saturating_add(self.exit_ms)
    }

    /// Consecutive waits and the stage entered after each; removal follows the last.
    #[must_use]
    pub const fn steps(self) -> [(u32, Option<NoticeStage>); 3] {
        let enter = if self.enter_delay_ms < self.leave_after_ms {
            self.enter_delay_ms
        } else {
            self.leave_after_ms
        };
        [
            (enter, Some(NoticeStage::Visible)),
            (self.leave_after_ms - enter, Some(NoticeStage::Leaving)),
            (self.exit_ms, None),
        ]
    }
}

/// Toast text for a connectivity change.
#[must_use]
pub const fn connectivity_notice(online: bool) -> (&'static str, Severity) {
    if online {
        ("Internet connection restored", Severity::Success)
    } else {
        ("No internet connection", Severity::Warning)
    }
}
