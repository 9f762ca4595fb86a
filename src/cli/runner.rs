//! Interactive wizard loop.
//!
//! One step is on screen at a time: its fields as a menu with current
//! values, plus Continue/Back navigation. Field edits go through the
//! same string boundary as the scripted mode, so the runner adds no
//! rules of its own.

use crate::cli::interaction::{Interaction, MenuItem, PromptInteraction};
use crate::cli::{
    output, print_funds, print_outstanding, print_progress, print_review, print_submission,
    CliError,
};
use crate::wizard::answers::AnswerSet;
use crate::wizard::options::{
    parse_change, resolve, CRS_CLASSIFICATIONS, COUNTRIES, EMPLOYMENT_STATUSES, FATCA_STATUSES,
    ID_TYPES, INVESTMENT_OBJECTIVES, INVESTOR_TYPES, NET_WORTH_BRACKETS, PEP_OPTIONS,
    QUALIFYING_CRITERIA, RISK_TOLERANCES, SALUTATIONS, TAX_RESIDENCIES, US_PERSON_OPTIONS,
    WEALTH_SOURCES,
};
use crate::wizard::{OptionItem, SessionEvent, Step, Visibility, WizardSession};

const CONTINUE_KEY: &str = "__CONTINUE";
const BACK_KEY: &str = "__BACK";
const SUBMIT_KEY: &str = "__SUBMIT";
const EXIT_KEY: &str = "__EXIT";

enum Widget {
    Text,
    Date,
    Select(&'static [OptionItem]),
    Multi(&'static [OptionItem]),
    Toggle,
    Funds,
}

struct FieldSpec {
    key: &'static str,
    label: &'static str,
    widget: Widget,
    required: bool,
}

impl FieldSpec {
    fn new(key: &'static str, label: &'static str, widget: Widget) -> Self {
        Self {
            key,
            label,
            widget,
            required: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Runs the interactive wizard on the real terminal.
pub fn run(session: &mut WizardSession) -> Result<(), CliError> {
    let mut interaction = PromptInteraction::new();
    run_interactive(session, &mut interaction)
}

/// Drives the wizard with any [`Interaction`] implementation.
pub fn run_interactive<I: Interaction>(
    session: &mut WizardSession,
    interaction: &mut I,
) -> Result<(), CliError> {
    output::section("ABELE ASSET MANAGEMENT · PRIVATE INVESTMENT ONBOARDING");
    loop {
        if session.is_submitted() {
            print_submission(session);
            return Ok(());
        }
        print_progress(session);
        let keep_going = match session.step() {
            Step::Welcome => welcome_step(session, interaction)?,
            Step::Review => review_step(session, interaction)?,
            step => collect_step(session, interaction, step)?,
        };
        if !keep_going {
            output::info("Onboarding abandoned. Nothing was saved.");
            return Ok(());
        }
    }
}

fn welcome_step<I: Interaction>(
    session: &mut WizardSession,
    interaction: &mut I,
) -> Result<bool, CliError> {
    output::info("Private investment management for accredited and institutional investors.");
    output::detail("MAS Regulated: Licensed Capital Markets Services holder under SFA Cap. 289");
    output::detail("Data Protection: no data is transmitted or stored by this session");
    output::detail("Please have your NRIC/Passport and tax identification number ready.");
    let items = vec![
        MenuItem::new(CONTINUE_KEY, "Begin onboarding"),
        MenuItem::new(EXIT_KEY, "Exit"),
    ];
    match interaction.choose(Step::Welcome.title(), &items)? {
        Some(key) if key == CONTINUE_KEY => {
            session.advance();
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn collect_step<I: Interaction>(
    session: &mut WizardSession,
    interaction: &mut I,
    step: Step,
) -> Result<bool, CliError> {
    let visibility = session.visibility();
    print_notices(step, &visibility);
    let fields = step_fields(step, &visibility);

    let mut items: Vec<MenuItem> = fields
        .iter()
        .map(|spec| {
            let marker = if spec.required { " *" } else { "" };
            let shown = display_value(session.answers(), spec);
            let shown = if shown.is_empty() { "—".to_string() } else { shown };
            MenuItem::new(spec.key, format!("{}{}: {}", spec.label, marker, shown))
        })
        .collect();
    items.push(MenuItem::new(CONTINUE_KEY, "Continue →"));
    items.push(MenuItem::new(BACK_KEY, "← Back"));
    items.push(MenuItem::new(EXIT_KEY, "Exit without submitting"));

    match interaction.choose(step.title(), &items)? {
        None => {
            session.retreat();
            Ok(true)
        }
        Some(key) if key == CONTINUE_KEY => {
            if session.advance() == SessionEvent::Held {
                output::warning("This step is incomplete:");
                print_outstanding(&session.outstanding());
            }
            Ok(true)
        }
        Some(key) if key == BACK_KEY => {
            session.retreat();
            Ok(true)
        }
        Some(key) if key == EXIT_KEY => Ok(false),
        Some(key) => {
            if let Some(spec) = fields.iter().find(|spec| spec.key == key) {
                edit_field(session, interaction, spec)?;
            }
            Ok(true)
        }
    }
}

fn review_step<I: Interaction>(
    session: &mut WizardSession,
    interaction: &mut I,
) -> Result<bool, CliError> {
    print_review(&session.review());
    output::section("CONSENTS & DECLARATIONS");
    let answers = session.answers();
    let items = vec![
        MenuItem::new(
            "consent_kyc",
            format!("KYC/AML verification consent: {}", yes_no(answers.consent_kyc)),
        ),
        MenuItem::new(
            "consent_marketing",
            format!(
                "Fund updates and communications (optional): {}",
                yes_no(answers.consent_marketing)
            ),
        ),
        MenuItem::new(
            "consent_terms",
            format!(
                "Terms of Business and Risk Disclosure: {}",
                yes_no(answers.consent_terms)
            ),
        ),
        MenuItem::new(SUBMIT_KEY, "Submit Application"),
        MenuItem::new(BACK_KEY, "← Back"),
        MenuItem::new(EXIT_KEY, "Exit without submitting"),
    ];
    match interaction.choose(Step::Review.title(), &items)? {
        None => {
            session.retreat();
            Ok(true)
        }
        Some(key) if key == SUBMIT_KEY => {
            if session.submit() == SessionEvent::Held {
                output::warning("Submission refused:");
                print_outstanding(&session.outstanding());
            }
            Ok(true)
        }
        Some(key) if key == BACK_KEY => {
            session.retreat();
            Ok(true)
        }
        Some(key) if key == EXIT_KEY => Ok(false),
        Some(key) => {
            let current = match key.as_str() {
                "consent_kyc" => session.answers().consent_kyc,
                "consent_marketing" => session.answers().consent_marketing,
                _ => session.answers().consent_terms,
            };
            let agreed = interaction.confirm(consent_prompt(&key), current)?;
            apply_raw(session, &key, if agreed { "true" } else { "false" });
            Ok(true)
        }
    }
}

fn consent_prompt(key: &str) -> &'static str {
    match key {
        "consent_kyc" => {
            "I confirm the information provided is true and complete, and consent to \
             KYC/AML verification and regulatory disclosure as required by law"
        }
        "consent_marketing" => {
            "I consent to receiving fund updates, NAV reports, and investment communications"
        }
        _ => {
            "I have read and agree to the Terms of Business, Privacy Policy, and Risk \
             Disclosure Statement"
        }
    }
}

fn edit_field<I: Interaction>(
    session: &mut WizardSession,
    interaction: &mut I,
    spec: &FieldSpec,
) -> Result<(), CliError> {
    match &spec.widget {
        Widget::Text | Widget::Date => {
            let current = value_of(session.answers(), spec.key);
            if let Some(raw) = interaction.input_text(spec.label, &current)? {
                apply_raw(session, spec.key, &raw);
            }
        }
        Widget::Select(options) => {
            let current = value_of(session.answers(), spec.key);
            let current = (!current.is_empty()).then_some(current);
            if let Some(value) = interaction.select(spec.label, options, current.as_deref())? {
                apply_raw(session, spec.key, &value);
            }
        }
        Widget::Multi(options) => {
            let before = session.answers().source_of_wealth.clone();
            if let Some(after) = interaction.multi_select(spec.label, options, &before)? {
                for tag in before.iter().filter(|tag| !after.contains(tag)) {
                    apply_raw(session, spec.key, tag);
                }
                for tag in after.iter().filter(|tag| !before.contains(tag)) {
                    apply_raw(session, spec.key, tag);
                }
            }
        }
        Widget::Toggle => {
            let current = value_of(session.answers(), spec.key) == "true";
            let agreed = interaction.confirm(spec.label, current)?;
            apply_raw(session, spec.key, if agreed { "true" } else { "false" });
        }
        Widget::Funds => {
            print_funds(session.catalog());
            let items: Vec<OptionItem> = session
                .catalog()
                .iter()
                .map(|fund| OptionItem::new(fund.id, fund.name))
                .collect();
            let current = value_of(session.answers(), spec.key);
            let current = (!current.is_empty()).then_some(current);
            if let Some(value) = interaction.select(spec.label, &items, current.as_deref())? {
                apply_raw(session, spec.key, &value);
            }
        }
    }
    Ok(())
}

fn apply_raw(session: &mut WizardSession, key: &str, raw: &str) {
    match parse_change(key, raw) {
        Ok(change) => {
            session.apply(change);
        }
        Err(err) => output::warning(err),
    }
}

fn print_notices(step: Step, visibility: &Visibility) {
    if step == Step::Tax && visibility.fatca_warning {
        output::warning(
            "US Persons require additional FATCA W-9 documentation. Our compliance team will contact you.",
        );
    }
    if step == Step::Wealth && visibility.pep_warning {
        output::warning(
            "PEP status requires Enhanced Due Diligence. Our compliance team will contact you for additional documentation.",
        );
    }
}

fn step_fields(step: Step, visibility: &Visibility) -> Vec<FieldSpec> {
    match step {
        Step::Classification => {
            let mut fields = vec![FieldSpec::new(
                "investor_type",
                "I am applying as a",
                Widget::Select(&INVESTOR_TYPES),
            )
            .required()];
            if visibility.accredited_criteria {
                fields.push(
                    FieldSpec::new(
                        "qualifying_criterion",
                        "Qualifying criterion",
                        Widget::Select(&QUALIFYING_CRITERIA),
                    )
                    .required(),
                );
            }
            fields.push(
                FieldSpec::new(
                    "acknowledged",
                    "Accredited investor acknowledgement",
                    Widget::Toggle,
                )
                .required(),
            );
            fields
        }
        Step::Identity => {
            let mut fields = vec![
                FieldSpec::new("salutation", "Salutation", Widget::Select(&SALUTATIONS)),
                FieldSpec::new("first_name", "First name", Widget::Text).required(),
                FieldSpec::new("last_name", "Last name", Widget::Text).required(),
                FieldSpec::new("date_of_birth", "Date of birth (YYYY-MM-DD)", Widget::Date)
                    .required(),
                FieldSpec::new("nationality", "Nationality", Widget::Select(&COUNTRIES))
                    .required(),
                FieldSpec::new("id_type", "ID type", Widget::Select(&ID_TYPES)).required(),
                FieldSpec::new("id_number", "ID number", Widget::Text).required(),
                FieldSpec::new("email", "Email address", Widget::Text).required(),
                FieldSpec::new("phone", "Mobile number", Widget::Text),
            ];
            fields.extend([
                FieldSpec::new("address1", "Address line 1", Widget::Text),
                FieldSpec::new("address2", "Address line 2", Widget::Text),
                FieldSpec::new("city", "City", Widget::Text),
                FieldSpec::new("country", "Country", Widget::Select(&COUNTRIES)),
                FieldSpec::new("postal_code", "Postal code", Widget::Text),
            ]);
            fields
        }
        Step::Tax => {
            let mut fields = vec![
                FieldSpec::new(
                    "tax_residency",
                    "Country of tax residency",
                    Widget::Select(&TAX_RESIDENCIES),
                )
                .required(),
                FieldSpec::new("tin_number", "Tax identification number (TIN)", Widget::Text),
                FieldSpec::new(
                    "crs_status",
                    "CRS account holder classification",
                    Widget::Select(&CRS_CLASSIFICATIONS),
                )
                .required(),
                FieldSpec::new(
                    "us_person",
                    "Are you a US Person for FATCA purposes?",
                    Widget::Select(&US_PERSON_OPTIONS),
                )
                .required(),
            ];
            if visibility.fatca_status_picker {
                fields.push(FieldSpec::new(
                    "fatca_status",
                    "FATCA status (non-US person)",
                    Widget::Select(&FATCA_STATUSES),
                ));
            }
            fields
        }
        Step::Wealth => vec![
            FieldSpec::new(
                "source_of_wealth",
                "Source of wealth (select all that apply)",
                Widget::Multi(&WEALTH_SOURCES),
            )
            .required(),
            FieldSpec::new(
                "employment_status",
                "Employment status",
                Widget::Select(&EMPLOYMENT_STATUSES),
            )
            .required(),
            FieldSpec::new("employer", "Employer / business name", Widget::Text),
            FieldSpec::new(
                "net_worth",
                "Estimated annual net worth",
                Widget::Select(&NET_WORTH_BRACKETS),
            ),
            FieldSpec::new("wealth_narrative", "Brief description of wealth origin", Widget::Text),
            FieldSpec::new(
                "pep_status",
                "Politically exposed person status",
                Widget::Select(&PEP_OPTIONS),
            ),
        ],
        Step::Fund => vec![
            FieldSpec::new("selected_fund", "Selected fund", Widget::Funds).required(),
            FieldSpec::new(
                "investment_amount",
                "Intended investment amount (S$)",
                Widget::Text,
            )
            .required(),
            FieldSpec::new(
                "risk_tolerance",
                "Risk tolerance",
                Widget::Select(&RISK_TOLERANCES),
            )
            .required(),
            FieldSpec::new(
                "investment_objective",
                "Primary investment objective",
                Widget::Select(&INVESTMENT_OBJECTIVES),
            ),
        ],
        Step::Welcome | Step::Review => Vec::new(),
    }
}

/// The boundary-canonical value of a field: enum token, canonical label,
/// ISO date, true/false, fund id, or joined multi-select tags.
fn value_of(answers: &AnswerSet, key: &str) -> String {
    match key {
        "investor_type" => answers
            .investor_type
            .map(|v| v.token().to_string())
            .unwrap_or_default(),
        "qualifying_criterion" => answers
            .qualifying_criterion
            .map(|v| v.token().to_string())
            .unwrap_or_default(),
        "acknowledged" => bool_token(answers.acknowledged),
        "salutation" => answers.salutation.clone(),
        "first_name" => answers.first_name.clone(),
        "last_name" => answers.last_name.clone(),
        "date_of_birth" => answers
            .date_of_birth
            .map(|d| d.to_string())
            .unwrap_or_default(),
        "nationality" => answers.nationality.clone(),
        "id_type" => answers.id_type.clone(),
        "id_number" => answers.id_number.clone(),
        "email" => answers.email.clone(),
        "phone" => answers.phone.clone(),
        "address1" => answers.address1.clone(),
        "address2" => answers.address2.clone(),
        "city" => answers.city.clone(),
        "country" => answers.country.clone(),
        "postal_code" => answers.postal_code.clone(),
        "tax_residency" => answers.tax_residency.clone(),
        "tin_number" => answers.tin_number.clone(),
        "us_person" => answers
            .us_person
            .map(|v| v.token().to_string())
            .unwrap_or_default(),
        "fatca_status" => answers
            .fatca_status
            .map(|v| v.token().to_string())
            .unwrap_or_default(),
        "crs_status" => answers
            .crs_status
            .map(|v| v.token().to_string())
            .unwrap_or_default(),
        "source_of_wealth" => answers.source_of_wealth.join(", "),
        "employment_status" => answers.employment_status.clone(),
        "employer" => answers.employer.clone(),
        "net_worth" => answers.net_worth.clone(),
        "wealth_narrative" => answers.wealth_narrative.clone(),
        "pep_status" => answers
            .pep_status
            .map(|v| v.token().to_string())
            .unwrap_or_default(),
        "selected_fund" => answers.selected_fund.clone(),
        "investment_amount" => answers.investment_amount.clone(),
        "risk_tolerance" => answers
            .risk_tolerance
            .map(|v| v.token().to_string())
            .unwrap_or_default(),
        "investment_objective" => answers.investment_objective.clone(),
        "consent_kyc" => bool_token(answers.consent_kyc),
        "consent_marketing" => bool_token(answers.consent_marketing),
        "consent_terms" => bool_token(answers.consent_terms),
        _ => String::new(),
    }
}

fn display_value(answers: &AnswerSet, spec: &FieldSpec) -> String {
    let raw = value_of(answers, spec.key);
    match &spec.widget {
        Widget::Select(options) => resolve(options, &raw)
            .map(|option| option.label.to_string())
            .unwrap_or(raw),
        Widget::Funds => fund_name(&raw).unwrap_or(raw),
        Widget::Toggle => yes_no(raw == "true").to_string(),
        _ => raw,
    }
}

fn fund_name(id: &str) -> Option<String> {
    crate::wizard::FundCatalog::builtin()
        .find(id)
        .map(|fund| fund.name.to_string())
}

fn bool_token(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct MockInteraction {
        choices: VecDeque<Option<String>>,
        texts: VecDeque<Option<String>>,
        selects: VecDeque<Option<String>>,
        multis: VecDeque<Option<Vec<String>>>,
        confirms: VecDeque<bool>,
    }

    impl MockInteraction {
        fn pick(mut self, key: &str) -> Self {
            self.choices.push_back(Some(key.to_string()));
            self
        }

        fn text(mut self, value: &str) -> Self {
            self.texts.push_back(Some(value.to_string()));
            self
        }

        fn opt(mut self, value: &str) -> Self {
            self.selects.push_back(Some(value.to_string()));
            self
        }

        fn multi(mut self, values: &[&str]) -> Self {
            self.multis
                .push_back(Some(values.iter().map(|v| v.to_string()).collect()));
            self
        }

        fn agree(mut self, value: bool) -> Self {
            self.confirms.push_back(value);
            self
        }
    }

    impl Interaction for MockInteraction {
        fn choose(&mut self, _title: &str, _items: &[MenuItem]) -> Result<Option<String>, CliError> {
            Ok(self.choices.pop_front().unwrap_or(None))
        }

        fn input_text(&mut self, _label: &str, _current: &str) -> Result<Option<String>, CliError> {
            Ok(self.texts.pop_front().unwrap_or(None))
        }

        fn select(
            &mut self,
            _label: &str,
            _options: &[OptionItem],
            _current: Option<&str>,
        ) -> Result<Option<String>, CliError> {
            Ok(self.selects.pop_front().unwrap_or(None))
        }

        fn multi_select(
            &mut self,
            _label: &str,
            _options: &[OptionItem],
            _selected: &[String],
        ) -> Result<Option<Vec<String>>, CliError> {
            Ok(self.multis.pop_front().unwrap_or(None))
        }

        fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool, CliError> {
            Ok(self.confirms.pop_front().unwrap_or(false))
        }
    }

    #[test]
    fn full_interactive_session_reaches_submission() {
        let mut interaction = MockInteraction::default()
            // Welcome
            .pick(CONTINUE_KEY)
            // Classification
            .pick("investor_type")
            .opt("individual_ai")
            .pick("qualifying_criterion")
            .opt("net_assets_2m")
            .pick("acknowledged")
            .agree(true)
            .pick(CONTINUE_KEY)
            // Identity
            .pick("first_name")
            .text("Mei Lin")
            .pick("last_name")
            .text("Tan")
            .pick("date_of_birth")
            .text("1984-03-09")
            .pick("nationality")
            .opt("Singapore")
            .pick("id_type")
            .opt("NRIC")
            .pick("id_number")
            .text("S1234567A")
            .pick("email")
            .text("mei.tan@example.com")
            .pick(CONTINUE_KEY)
            // Tax
            .pick("tax_residency")
            .opt("Singapore")
            .pick("us_person")
            .opt("no")
            .pick("crs_status")
            .opt("individual")
            .pick(CONTINUE_KEY)
            // Wealth
            .pick("source_of_wealth")
            .multi(&["Employment / Salary", "Investment Returns"])
            .pick("employment_status")
            .opt("Employed (Private Sector)")
            .pick(CONTINUE_KEY)
            // Fund
            .pick("selected_fund")
            .opt("quant-alpha")
            .pick("investment_amount")
            .text("500000")
            .pick("risk_tolerance")
            .opt("aggressive")
            .pick(CONTINUE_KEY)
            // Review
            .pick("consent_kyc")
            .agree(true)
            .pick("consent_terms")
            .agree(true)
            .pick(SUBMIT_KEY);

        let mut session = WizardSession::new();
        run_interactive(&mut session, &mut interaction).expect("runner completes");
        assert!(session.is_submitted());
        let submission = session.submission().expect("submission");
        assert!(submission.reference.starts_with("ABELE-"));
        assert_eq!(
            session.answers().source_of_wealth,
            vec!["Employment / Salary", "Investment Returns"]
        );
    }

    #[test]
    fn continue_is_held_on_an_incomplete_step() {
        let mut interaction = MockInteraction::default()
            .pick(CONTINUE_KEY) // Welcome
            .pick(CONTINUE_KEY) // Classification, incomplete
            .pick(EXIT_KEY);

        let mut session = WizardSession::new();
        run_interactive(&mut session, &mut interaction).expect("runner completes");
        assert!(!session.is_submitted());
        assert_eq!(session.step(), Step::Classification);
    }

    #[test]
    fn escape_retreats_to_the_previous_step() {
        let mut interaction = MockInteraction::default().pick(CONTINUE_KEY);
        // Classification menu answered with None (escape), then Welcome exits.
        interaction.choices.push_back(None);

        let mut session = WizardSession::new();
        run_interactive(&mut session, &mut interaction).expect("runner completes");
        assert_eq!(session.step(), Step::Welcome);
    }

    #[test]
    fn qualifying_criterion_is_offered_only_to_accredited_individuals() {
        let hidden = step_fields(Step::Classification, &Visibility::default());
        assert!(hidden.iter().all(|spec| spec.key != "qualifying_criterion"));

        let shown = step_fields(
            Step::Classification,
            &Visibility {
                accredited_criteria: true,
                ..Visibility::default()
            },
        );
        assert!(shown.iter().any(|spec| spec.key == "qualifying_criterion"));
    }
}
