//! The wizard controller: one in-memory session per applicant.
//!
//! The session owns the current step and the answers, journals every
//! field change with the state it replaced (updates are functional, never
//! in-place), and freezes permanently once submitted. Refused operations
//! are silent no-ops reported through [`SessionEvent`]; the presentation
//! layer decides how to surface them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::wizard::answers::{AnswerSet, FieldChange};
use crate::wizard::catalog::FundCatalog;
use crate::wizard::review::{project_review, ReviewSection};
use crate::wizard::step::Step;
use crate::wizard::validate::{self, Requirement};
use crate::wizard::visibility::Visibility;

/// Outcome of a session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A field change (or undo) took effect.
    Applied,
    /// The step index moved.
    Moved,
    /// The operation was refused and nothing changed.
    Held,
    /// The session is submitted; all mutation is rejected.
    Frozen,
    /// The terminal transition completed.
    Submitted,
}

/// One journaled mutation: the change, where it happened, and the full
/// answer state it replaced.
#[derive(Debug, Clone)]
pub struct ChangeRecord {
    pub step: Step,
    pub change: FieldChange,
    previous: AnswerSet,
}

impl ChangeRecord {
    pub fn previous(&self) -> &AnswerSet {
        &self.previous
    }
}

/// The terminal artifact produced by a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
    pub summary: Vec<ReviewSection>,
}

/// A single onboarding session.
pub struct WizardSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    step: Step,
    answers: AnswerSet,
    journal: Vec<ChangeRecord>,
    submission: Option<Submission>,
    catalog: &'static FundCatalog,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::with_catalog(FundCatalog::builtin())
    }

    pub fn with_catalog(catalog: &'static FundCatalog) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            step: Step::Welcome,
            answers: AnswerSet::default(),
            journal: Vec::new(),
            submission: None,
            catalog,
        };
        tracing::debug!(session = %session.id, "onboarding session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn catalog(&self) -> &'static FundCatalog {
        self.catalog
    }

    pub fn journal(&self) -> &[ChangeRecord] {
        &self.journal
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Visibility of the conditional blocks for the current answers.
    pub fn visibility(&self) -> Visibility {
        Visibility::derive(&self.answers)
    }

    /// True when the current step permits a forward transition.
    pub fn can_proceed(&self) -> bool {
        validate::can_proceed(self.step, &self.answers)
    }

    /// Requirements still unmet at the current step.
    pub fn outstanding(&self) -> Vec<Requirement> {
        validate::outstanding(self.step, &self.answers)
    }

    /// The review projection for the current answers.
    pub fn review(&self) -> Vec<ReviewSection> {
        project_review(&self.answers, self.catalog)
    }

    /// Merges one field update. Never validated against the current step;
    /// rejected only after submission.
    pub fn apply(&mut self, change: FieldChange) -> SessionEvent {
        if self.is_submitted() {
            return SessionEvent::Frozen;
        }
        let next = self.answers.with(&change);
        let previous = std::mem::replace(&mut self.answers, next);
        tracing::debug!(session = %self.id, field = change.field_key(), "field updated");
        self.journal.push(ChangeRecord {
            step: self.step,
            change,
            previous,
        });
        SessionEvent::Applied
    }

    /// Restores the answers recorded before the most recent change.
    pub fn undo(&mut self) -> SessionEvent {
        if self.is_submitted() {
            return SessionEvent::Frozen;
        }
        match self.journal.pop() {
            Some(record) => {
                tracing::debug!(session = %self.id, field = record.change.field_key(), "change undone");
                self.answers = record.previous;
                SessionEvent::Applied
            }
            None => SessionEvent::Held,
        }
    }

    /// Moves one step forward when the current step is complete.
    pub fn advance(&mut self) -> SessionEvent {
        if self.is_submitted() {
            return SessionEvent::Frozen;
        }
        if !self.can_proceed() {
            tracing::debug!(session = %self.id, step = self.step.title(), "advance held");
            return SessionEvent::Held;
        }
        match self.step.next() {
            Some(next) => {
                tracing::info!(session = %self.id, from = self.step.title(), to = next.title(), "step advanced");
                self.step = next;
                SessionEvent::Moved
            }
            None => SessionEvent::Held,
        }
    }

    /// Moves one step back. Always allowed except at the first step or
    /// after submission.
    pub fn retreat(&mut self) -> SessionEvent {
        if self.is_submitted() {
            return SessionEvent::Frozen;
        }
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                SessionEvent::Moved
            }
            None => SessionEvent::Held,
        }
    }

    /// Terminal transition: only from the review step with both required
    /// consents given. Produces the reference token and a snapshot of the
    /// review sections, then freezes the session.
    pub fn submit(&mut self) -> SessionEvent {
        if self.is_submitted() {
            return SessionEvent::Frozen;
        }
        if !self.step.is_last() || !self.can_proceed() {
            tracing::debug!(session = %self.id, step = self.step.title(), "submit held");
            return SessionEvent::Held;
        }
        let submitted_at = Utc::now();
        let reference = reference_token(submitted_at);
        let summary = project_review(&self.answers, self.catalog);
        tracing::info!(session = %self.id, %reference, "application submitted");
        self.submission = Some(Submission {
            reference,
            submitted_at,
            summary,
        });
        SessionEvent::Submitted
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// `ABELE-` followed by the submission timestamp (milliseconds) in
/// upper-case base-36. Display-only; no external system receives it.
pub fn reference_token(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().max(0) as u64;
    format!("ABELE-{}", encode_base36(millis))
}

fn encode_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut buffer = Vec::new();
    while value > 0 {
        buffer.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buffer.reverse();
    String::from_utf8(buffer).expect("base36 digits are ascii")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::answers::{
        CrsStatus, InvestorType, RiskTolerance, UsPersonStatus,
    };
    use chrono::TimeZone;

    fn complete_session_at_review() -> WizardSession {
        let mut session = WizardSession::new();
        assert_eq!(session.advance(), SessionEvent::Moved);

        session.apply(FieldChange::InvestorType(Some(InvestorType::IndividualAi)));
        session.apply(FieldChange::Acknowledged(true));
        assert_eq!(session.advance(), SessionEvent::Moved);

        session.apply(FieldChange::FirstName("Mei Lin".into()));
        session.apply(FieldChange::LastName("Tan".into()));
        session.apply(FieldChange::DateOfBirth(chrono::NaiveDate::from_ymd_opt(
            1984, 3, 9,
        )));
        session.apply(FieldChange::Nationality("Singapore".into()));
        session.apply(FieldChange::IdType("NRIC".into()));
        session.apply(FieldChange::IdNumber("S1234567A".into()));
        session.apply(FieldChange::Email("mei.tan@example.com".into()));
        assert_eq!(session.advance(), SessionEvent::Moved);

        session.apply(FieldChange::TaxResidency("Singapore".into()));
        session.apply(FieldChange::UsPerson(Some(UsPersonStatus::No)));
        session.apply(FieldChange::CrsStatus(Some(CrsStatus::Individual)));
        assert_eq!(session.advance(), SessionEvent::Moved);

        session.apply(FieldChange::ToggleWealthSource("Employment / Salary".into()));
        session.apply(FieldChange::EmploymentStatus("Employed (Private Sector)".into()));
        assert_eq!(session.advance(), SessionEvent::Moved);

        session.apply(FieldChange::SelectedFund("quant-alpha".into()));
        session.apply(FieldChange::InvestmentAmount("500000".into()));
        session.apply(FieldChange::RiskTolerance(Some(RiskTolerance::Aggressive)));
        assert_eq!(session.advance(), SessionEvent::Moved);

        assert_eq!(session.step(), Step::Review);
        session
    }

    #[test]
    fn fresh_session_starts_at_welcome_and_may_advance() {
        let mut session = WizardSession::new();
        assert_eq!(session.step(), Step::Welcome);
        assert!(session.can_proceed());
        assert_eq!(session.advance(), SessionEvent::Moved);
        assert_eq!(session.step(), Step::Classification);
    }

    #[test]
    fn advance_is_held_while_the_step_is_incomplete() {
        let mut session = WizardSession::new();
        session.advance();
        session.apply(FieldChange::InvestorType(Some(InvestorType::IndividualAi)));
        assert_eq!(session.advance(), SessionEvent::Held);
        assert_eq!(session.step(), Step::Classification);

        session.apply(FieldChange::Acknowledged(true));
        assert_eq!(session.advance(), SessionEvent::Moved);
    }

    #[test]
    fn retreat_is_free_except_at_the_first_step() {
        let mut session = WizardSession::new();
        assert_eq!(session.retreat(), SessionEvent::Held);
        assert_eq!(session.step(), Step::Welcome);
        session.advance();
        assert_eq!(session.retreat(), SessionEvent::Moved);
        assert_eq!(session.step(), Step::Welcome);
    }

    #[test]
    fn submit_requires_review_step_and_consents() {
        let mut session = WizardSession::new();
        assert_eq!(session.submit(), SessionEvent::Held);

        let mut session = complete_session_at_review();
        session.apply(FieldChange::ConsentKyc(true));
        assert_eq!(session.submit(), SessionEvent::Held);

        session.apply(FieldChange::ConsentTerms(true));
        assert_eq!(session.submit(), SessionEvent::Submitted);
        let submission = session.submission().expect("submission recorded");
        assert!(submission.reference.starts_with("ABELE-"));
        assert_eq!(submission.summary.len(), 5);
    }

    #[test]
    fn submitted_sessions_are_frozen() {
        let mut session = complete_session_at_review();
        session.apply(FieldChange::ConsentKyc(true));
        session.apply(FieldChange::ConsentTerms(true));
        assert_eq!(session.submit(), SessionEvent::Submitted);

        assert_eq!(session.apply(FieldChange::FirstName("Other".into())), SessionEvent::Frozen);
        assert_eq!(session.advance(), SessionEvent::Frozen);
        assert_eq!(session.retreat(), SessionEvent::Frozen);
        assert_eq!(session.undo(), SessionEvent::Frozen);
        assert_eq!(session.submit(), SessionEvent::Frozen);
        assert_eq!(session.step(), Step::Review);
        assert_eq!(session.answers().first_name, "Mei Lin");
    }

    #[test]
    fn undo_restores_the_previous_answers() {
        let mut session = WizardSession::new();
        assert_eq!(session.undo(), SessionEvent::Held);

        session.apply(FieldChange::FirstName("Mei".into()));
        session.apply(FieldChange::FirstName("Mei Lin".into()));
        assert_eq!(session.answers().first_name, "Mei Lin");

        assert_eq!(session.undo(), SessionEvent::Applied);
        assert_eq!(session.answers().first_name, "Mei");
        assert_eq!(session.undo(), SessionEvent::Applied);
        assert_eq!(session.answers().first_name, "");
        assert_eq!(session.undo(), SessionEvent::Held);
    }

    #[test]
    fn journal_tracks_step_and_field() {
        let mut session = WizardSession::new();
        session.advance();
        session.apply(FieldChange::Acknowledged(true));
        let record = session.journal().last().expect("journaled");
        assert_eq!(record.step, Step::Classification);
        assert_eq!(record.change.field_key(), "acknowledged");
        assert!(!record.previous().acknowledged);
    }

    #[test]
    fn reference_tokens_are_base36_of_the_timestamp() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "Z");
        assert_eq!(encode_base36(36), "10");

        let at = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let token = reference_token(at);
        assert!(token.starts_with("ABELE-"));
        assert!(token[6..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
