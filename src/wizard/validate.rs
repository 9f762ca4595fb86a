//! Per-step gating rules.
//!
//! Validation is derived, never stored: both entry points are pure
//! functions of the current answers, recomputed on every call, so gating
//! can never drift out of sync with the data.

use crate::wizard::answers::AnswerSet;
use crate::wizard::step::Step;

/// One unmet requirement blocking a forward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub field: &'static str,
    pub label: &'static str,
}

impl Requirement {
    const fn new(field: &'static str, label: &'static str) -> Self {
        Self { field, label }
    }
}

/// True when the given step may be left in the forward direction.
pub fn can_proceed(step: Step, answers: &AnswerSet) -> bool {
    outstanding(step, answers).is_empty()
}

/// The requirements still unmet at the given step, in presentation order.
/// Empty means the step is complete.
///
/// The qualifying criterion is deliberately absent from the
/// Classification rules: the intake flow marks it required on screen but
/// has never gated advancement on it.
pub fn outstanding(step: Step, answers: &AnswerSet) -> Vec<Requirement> {
    let mut unmet = Vec::new();
    match step {
        Step::Welcome => {}
        Step::Classification => {
            if answers.investor_type.is_none() {
                unmet.push(Requirement::new(
                    "investor_type",
                    "Choose an investor classification",
                ));
            }
            if !answers.acknowledged {
                unmet.push(Requirement::new(
                    "acknowledged",
                    "Confirm the accredited investor acknowledgement",
                ));
            }
        }
        Step::Identity => {
            require_text(&mut unmet, &answers.first_name, "first_name", "First name is required");
            require_text(&mut unmet, &answers.last_name, "last_name", "Last name is required");
            if answers.date_of_birth.is_none() {
                unmet.push(Requirement::new("date_of_birth", "Date of birth is required"));
            }
            require_text(
                &mut unmet,
                &answers.nationality,
                "nationality",
                "Nationality is required",
            );
            require_text(&mut unmet, &answers.id_type, "id_type", "ID type is required");
            require_text(&mut unmet, &answers.id_number, "id_number", "ID number is required");
            require_text(&mut unmet, &answers.email, "email", "Email address is required");
        }
        Step::Tax => {
            require_text(
                &mut unmet,
                &answers.tax_residency,
                "tax_residency",
                "Country of tax residency is required",
            );
            if answers.us_person.is_none() {
                unmet.push(Requirement::new("us_person", "FATCA US-person declaration is required"));
            }
            if answers.crs_status.is_none() {
                unmet.push(Requirement::new("crs_status", "CRS classification is required"));
            }
        }
        Step::Wealth => {
            if answers.source_of_wealth.is_empty() {
                unmet.push(Requirement::new(
                    "source_of_wealth",
                    "Select at least one source of wealth",
                ));
            }
            require_text(
                &mut unmet,
                &answers.employment_status,
                "employment_status",
                "Employment status is required",
            );
        }
        Step::Fund => {
            require_text(&mut unmet, &answers.selected_fund, "selected_fund", "Select a fund");
            require_text(
                &mut unmet,
                &answers.investment_amount,
                "investment_amount",
                "Intended investment amount is required",
            );
            if answers.risk_tolerance.is_none() {
                unmet.push(Requirement::new("risk_tolerance", "Risk tolerance is required"));
            }
        }
        Step::Review => {
            if !answers.consent_kyc {
                unmet.push(Requirement::new(
                    "consent_kyc",
                    "KYC/AML verification consent is required",
                ));
            }
            if !answers.consent_terms {
                unmet.push(Requirement::new(
                    "consent_terms",
                    "Terms of Business acceptance is required",
                ));
            }
        }
    }
    unmet
}

fn require_text(
    unmet: &mut Vec<Requirement>,
    value: &str,
    field: &'static str,
    label: &'static str,
) {
    if value.trim().is_empty() {
        unmet.push(Requirement::new(field, label));
    }
}
