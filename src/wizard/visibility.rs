//! Conditional visibility of optional blocks.
//!
//! A single pure derivation replaces ad-hoc show/hide expressions in the
//! presentation layer. None of these flags affect gating; the FATCA and
//! PEP notices are advisory only.

use crate::wizard::answers::AnswerSet;

/// Which optional blocks the presentation should show for the current
/// answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    /// Accredited-investor qualifying-criteria detail block.
    pub accredited_criteria: bool,
    /// FATCA W-9 documentation warning for US persons.
    pub fatca_warning: bool,
    /// FATCA status selector offered to non-US persons.
    pub fatca_status_picker: bool,
    /// Enhanced-due-diligence notice for politically exposed persons.
    pub pep_warning: bool,
}

impl Visibility {
    pub fn derive(answers: &AnswerSet) -> Self {
        Self {
            accredited_criteria: answers
                .investor_type
                .map(|t| t.is_individual_accredited())
                .unwrap_or(false),
            fatca_warning: answers.us_person.map(|s| s.is_us_person()).unwrap_or(false),
            fatca_status_picker: answers
                .us_person
                .map(|s| !s.is_us_person())
                .unwrap_or(false),
            pep_warning: answers.pep_status.map(|s| s.requires_edd()).unwrap_or(false),
        }
    }
}
