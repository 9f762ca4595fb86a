//! Interactive and scripted shells over the wizard core.
//!
//! The interactive mode renders one step at a time with dialoguer
//! prompts; the scripted mode (enabled with `ONBOARD_CLI_SCRIPT=1`)
//! reads plain commands from stdin and is what the integration tests
//! drive. Both are thin: every rule lives in the core.

pub mod interaction;
pub mod output;
pub mod runner;
pub mod script;

use thiserror::Error;

use crate::errors::WizardError;
use crate::wizard::review::ReviewSection;
use crate::wizard::validate::Requirement;
use crate::wizard::{FundCatalog, WizardSession};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

pub(crate) fn print_review(sections: &[ReviewSection]) {
    for section in sections {
        output::section(section.title.to_uppercase());
        for row in &section.rows {
            output::detail(format!("{:<20} {}", row.label, row.value));
        }
    }
}

pub(crate) fn print_outstanding(requirements: &[Requirement]) {
    for requirement in requirements {
        output::warning(format!("{} ({})", requirement.label, requirement.field));
    }
}

pub(crate) fn print_funds(catalog: &FundCatalog) {
    for fund in catalog.iter() {
        output::section(format!("{} [{}]", fund.name, fund.id));
        output::detail(format!("{} · YTD {}", fund.strategy, fund.ytd));
        output::detail(fund.description);
        output::detail(format!(
            "AUM {} · Min. {} · Risk {}",
            fund.aum,
            fund.min_investment,
            fund.risk.label()
        ));
        output::detail(format!("Tags: {}", fund.tags.join(", ")));
    }
}

pub(crate) fn print_progress(session: &WizardSession) {
    let step = session.step();
    output::info(format!(
        "Step {} of {}: {}",
        step.index() + 1,
        crate::wizard::Step::COUNT,
        step.title()
    ));
}

pub(crate) fn print_submission(session: &WizardSession) {
    let Some(submission) = session.submission() else {
        return;
    };
    output::section("Application Submitted");
    let answers = session.answers();
    if !answers.first_name.is_empty() {
        output::info(format!(
            "Thank you, {}. Your onboarding application has been submitted to our compliance team for review.",
            answers.first_name
        ));
    }
    if !answers.email.is_empty() {
        output::info(format!(
            "You will receive a confirmation at {} within 2 business days.",
            answers.email
        ));
    }
    output::separator();
    for (index, line) in [
        "Identity verification via SingPass or manual document review",
        "AML/CDD screening and source of wealth verification",
        "Account approval notification and fund subscription documents",
        "Initial investment processing and portfolio access",
    ]
    .iter()
    .enumerate()
    {
        output::detail(format!("0{} {}", index + 1, line));
    }
    output::separator();
    output::success(format!("Reference: {}", submission.reference));
}
