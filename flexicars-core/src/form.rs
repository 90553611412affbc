//! The Idle/Submitting lifecycle shared by the search and contact forms, and the
//! transport seam their submissions go through.
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Search,
    Contact,
}

impl FormKind {
    #[must_use]
    pub const fn idle_label(self) -> &'static str {
        match self {
            Self::Search => "Search Cars",
            Self::Contact => "Send Message",
        }
    }

    #[must_use]
    pub const fn busy_label(self) -> &'static str {
        match self {
            Self::Search => "Searching...",
            Self::Contact => "Sending...",
        }
    }

    /// Message reported once a simulated submission completes.
    #[must_use]
    pub const fn completion_message(self) -> &'static str {
        match self {
            Self::Search => {
                "Search completed! In a real application, this would show available cars based on your criteria."
            }
            Self::Contact => "Your message has been sent. We'll get back to you soon.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form is already submitting")]
    Busy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

impl FormPhase {
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Idle → Submitting.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Busy`] when a submission is already in flight.
    pub const fn begin(self) -> Result<Self, FormError> {
        match self {
            Self::Idle => Ok(Self::Submitting),
            Self::Submitting => Err(FormError::Busy),
        }
    }

    /// Any phase → Idle.
    #[must_use]
    pub const fn finish(self) -> Self {
        Self::Idle
    }

    #[must_use]
    pub const fn button(self, kind: FormKind) -> SubmitButton {
        match self {
            Self::Idle => SubmitButton {
                label: kind.idle_label(),
                busy: false,
                disabled: false,
            },
            Self::Submitting => SubmitButton {
                label: kind.busy_label(),
                busy: true,
                disabled: true,
            },
        }
    }
}

/// What the submit control shows for a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    /// Show the spinner.
    pub busy: bool,
    pub disabled: bool,
}

/// Captured form entries tagged with the form they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: FormKind,
    pub fields: BTreeMap<String, String>,
}

impl Submission {
    #[must_use]
    pub const fn new(kind: FormKind, fields: BTreeMap<String, String>) -> Self {
        Self { kind, fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub kind: FormKind,
    pub message: String,
}

/// Where submissions are delivered. The site ships [`SimulatedTransport`]; a network
/// client can implement this without changing the form handlers.
pub trait FormTransport {
    type Error: std::error::Error + 'static;

    fn deliver(&self, submission: Submission) -> impl Future<Output = Result<Receipt, Self::Error>>;
}

/// Timer source used to fake latency.
pub trait Sleep {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Waits a fixed delay, then acknowledges the submission.
#[derive(Debug, Clone)]
pub struct SimulatedTransport<S> {
    sleeper: S,
    delay_ms: u32,
}

impl<S: Sleep> SimulatedTransport<S> {
    pub const fn new(sleeper: S, delay_ms: u32) -> Self {
        Self { sleeper, delay_ms }
    }
}

impl<S: Sleep> FormTransport for SimulatedTransport<S> {
    type Error = Infallible;

    async fn deliver(&self, submission: Submission) -> Result<Receipt, Self::Error> {
        log::debug!(
            "simulating {:?} submission with {} fields",
            submission.kind,
            submission.fields.len()
        );
        self.sleeper.sleep(self.delay_ms).await;
        Ok(Receipt {
            kind: submission.kind,
            message: submission.kind.completion_message().to_string(),
        })
    }
}

/// Run one submission through the lifecycle, reporting each phase change.
///
/// `on_phase` sees `Submitting` before delivery and always sees `Idle` afterwards,
/// whether delivery succeeded or not.
///
/// # Errors
///
/// Returns the transport error unchanged.
pub async fn drive<T, F>(
    transport: &T,
    submission: Submission,
    mut on_phase: F,
) -> Result<Receipt, T::Error>
where
    T: FormTransport,
    F: FnMut(FormPhase),
{
    on_phase(FormPhase::Submitting);
    let result = transport.deliver(submission).await;
    on_phase(FormPhase::Idle);
    result
}
