//! End-to-end exercises of the wizard core through its public API,
//! driving answers through the same string boundary the shells use.

use onboard_core::wizard::options::parse_change;
use onboard_core::wizard::{
    can_proceed, outstanding, AnswerSet, FundCatalog, SessionEvent, Step, Visibility,
    WizardSession,
};

fn set(session: &mut WizardSession, key: &str, value: &str) {
    let change = parse_change(key, value).expect("boundary value parses");
    assert_eq!(session.apply(change), SessionEvent::Applied);
}

fn walk_to_review(session: &mut WizardSession) {
    assert_eq!(session.advance(), SessionEvent::Moved);

    set(session, "investor_type", "individual_ai");
    set(session, "acknowledged", "yes");
    assert_eq!(session.advance(), SessionEvent::Moved);

    set(session, "first_name", "Mei Lin");
    set(session, "last_name", "Tan");
    set(session, "date_of_birth", "1984-03-09");
    set(session, "nationality", "Singapore");
    set(session, "id_type", "NRIC");
    set(session, "id_number", "S1234567A");
    set(session, "email", "mei.tan@example.com");
    assert_eq!(session.advance(), SessionEvent::Moved);

    set(session, "tax_residency", "Singapore");
    set(session, "us_person", "no");
    set(session, "crs_status", "individual");
    assert_eq!(session.advance(), SessionEvent::Moved);

    set(session, "source_of_wealth", "Employment / Salary");
    set(session, "employment_status", "Employed (Private Sector)");
    assert_eq!(session.advance(), SessionEvent::Moved);

    set(session, "selected_fund", "quant-alpha");
    set(session, "investment_amount", "500000");
    set(session, "risk_tolerance", "aggressive");
    assert_eq!(session.advance(), SessionEvent::Moved);

    assert_eq!(session.step(), Step::Review);
}

#[test]
fn fresh_wizard_starts_open_at_welcome() {
    let answers = AnswerSet::default();
    assert!(can_proceed(Step::Welcome, &answers));

    let mut session = WizardSession::new();
    assert_eq!(session.step(), Step::Welcome);
    assert_eq!(session.advance(), SessionEvent::Moved);
    assert_eq!(session.step(), Step::Classification);
}

#[test]
fn classification_gate_flips_with_the_acknowledgement() {
    let mut session = WizardSession::new();
    session.advance();
    set(&mut session, "investor_type", "individual_ai");
    assert!(!session.can_proceed());
    assert_eq!(session.advance(), SessionEvent::Held);
    assert_eq!(session.step(), Step::Classification);

    set(&mut session, "acknowledged", "true");
    assert!(session.can_proceed());
}

#[test]
fn us_citizen_sees_warning_but_gating_is_unaffected() {
    let mut session = WizardSession::new();
    set(&mut session, "tax_residency", "Singapore");
    set(&mut session, "us_person", "yes_citizen");
    set(&mut session, "crs_status", "individual");

    let visibility = session.visibility();
    assert!(visibility.fatca_warning);
    assert!(!visibility.fatca_status_picker);

    assert!(can_proceed(Step::Tax, session.answers()));
}

#[test]
fn fund_step_and_review_projection_agree() {
    let mut session = WizardSession::new();
    set(&mut session, "selected_fund", "quant-alpha");
    set(&mut session, "investment_amount", "500000");
    set(&mut session, "risk_tolerance", "aggressive");
    assert!(can_proceed(Step::Fund, session.answers()));

    let sections = session.review();
    let fund = sections.iter().find(|s| s.title == "Fund Selection").expect("section");
    assert_eq!(fund.rows[0].value, "AbeleQuantitative Alpha Fund");
    assert_eq!(fund.rows[1].value, "S$ 500,000");
}

#[test]
fn submission_needs_both_required_consents() {
    let mut session = WizardSession::new();
    walk_to_review(&mut session);

    set(&mut session, "consent_kyc", "yes");
    assert!(!session.can_proceed());
    assert_eq!(session.submit(), SessionEvent::Held);
    assert!(session.submission().is_none());

    set(&mut session, "consent_terms", "yes");
    assert_eq!(session.submit(), SessionEvent::Submitted);
    let reference = &session.submission().expect("submitted").reference;
    assert!(reference.starts_with("ABELE-"));
    assert!(reference[6..]
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

#[test]
fn submitted_sessions_reject_every_mutation() {
    let mut session = WizardSession::new();
    walk_to_review(&mut session);
    set(&mut session, "consent_kyc", "yes");
    set(&mut session, "consent_terms", "yes");
    assert_eq!(session.submit(), SessionEvent::Submitted);

    let change = parse_change("first_name", "Somebody Else").expect("parses");
    assert_eq!(session.apply(change), SessionEvent::Frozen);
    assert_eq!(session.advance(), SessionEvent::Frozen);
    assert_eq!(session.retreat(), SessionEvent::Frozen);
    assert_eq!(session.step(), Step::Review);
    assert_eq!(session.answers().first_name, "Mei Lin");
}

#[test]
fn wealth_source_toggle_is_idempotent_through_the_boundary() {
    let mut session = WizardSession::new();
    let before = session.answers().source_of_wealth.clone();
    set(&mut session, "source_of_wealth", "Employment / Salary");
    assert_eq!(session.answers().source_of_wealth, vec!["Employment / Salary"]);
    set(&mut session, "source_of_wealth", "Employment / Salary");
    assert_eq!(session.answers().source_of_wealth, before);
}

#[test]
fn qualifying_criterion_stays_lenient_at_classification() {
    let mut session = WizardSession::new();
    session.advance();
    set(&mut session, "investor_type", "joint_ai");
    set(&mut session, "acknowledged", "yes");

    // Shown as required by the presentation, but never part of the gate.
    assert!(session.visibility().accredited_criteria);
    assert!(session.answers().qualifying_criterion.is_none());
    assert_eq!(session.advance(), SessionEvent::Moved);
}

#[test]
fn validation_is_pure_and_stateless() {
    let answers = AnswerSet::default();
    for step in Step::ALL {
        assert_eq!(can_proceed(step, &answers), can_proceed(step, &answers));
        assert_eq!(outstanding(step, &answers), outstanding(step, &answers));
    }
    assert_eq!(
        Visibility::derive(&answers),
        Visibility::derive(&answers)
    );
}

#[test]
fn backward_navigation_is_never_gated() {
    let mut session = WizardSession::new();
    walk_to_review(&mut session);
    for expected in [Step::Fund, Step::Wealth, Step::Tax, Step::Identity, Step::Classification, Step::Welcome] {
        assert_eq!(session.retreat(), SessionEvent::Moved);
        assert_eq!(session.step(), expected);
    }
    assert_eq!(session.retreat(), SessionEvent::Held);
    assert_eq!(session.step(), Step::Welcome);
}

#[test]
fn fields_of_other_steps_stay_writable() {
    let mut session = WizardSession::new();
    // Still at Welcome; the UI would not show these fields, but the core
    // accepts the writes.
    set(&mut session, "email", "early@example.com");
    set(&mut session, "consent_marketing", "yes");
    assert_eq!(session.answers().email, "early@example.com");
    assert!(session.answers().consent_marketing);
}

#[test]
fn catalog_is_never_mutated_by_a_session() {
    let before: Vec<&str> = FundCatalog::builtin().iter().map(|f| f.id).collect();
    let mut session = WizardSession::new();
    walk_to_review(&mut session);
    let after: Vec<&str> = FundCatalog::builtin().iter().map(|f| f.id).collect();
    assert_eq!(before, after);
}
