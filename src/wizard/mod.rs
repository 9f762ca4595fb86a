//! The onboarding wizard core: field registry, static option tables and
//! fund catalog, per-step gating, conditional visibility, review
//! projection, and the session state machine.

pub mod answers;
pub mod catalog;
pub mod options;
pub mod review;
pub mod session;
pub mod step;
pub mod validate;
pub mod visibility;

pub use answers::{AnswerSet, FieldChange};
pub use catalog::{Fund, FundCatalog, RiskTier};
pub use options::OptionItem;
pub use review::{project_review, ReviewRow, ReviewSection};
pub use session::{ChangeRecord, SessionEvent, Submission, WizardSession};
pub use step::Step;
pub use validate::{can_proceed, outstanding, Requirement};
pub use visibility::Visibility;
