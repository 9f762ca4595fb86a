//! Option tables and the string boundary of the field registry.
//!
//! Every select-backed field draws from one tagged `OptionItem` table;
//! plain option strings are flattened into `{value, label}` pairs at
//! construction so the presentation layer sees a single shape.
//! `parse_change` converts the (key, raw string) capability contract
//! into a typed [`FieldChange`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::WizardError;
use crate::wizard::answers::{
    CrsStatus, FatcaStatus, FieldChange, InvestorType, PepStatus, QualifyingCriterion,
    RiskTolerance, UsPersonStatus,
};
use crate::wizard::catalog::FundCatalog;

/// A tagged select option: `value` is the stored token, `label` what the
/// presentation renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    pub value: &'static str,
    pub label: &'static str,
}

impl OptionItem {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Flattens a plain option string into a `{value, label}` pair.
    pub const fn flat(text: &'static str) -> Self {
        Self {
            value: text,
            label: text,
        }
    }
}

pub static INVESTOR_TYPES: [OptionItem; 4] = [
    OptionItem::new("individual_ai", "Individual Accredited Investor"),
    OptionItem::new("joint_ai", "Joint Accredited Investor"),
    OptionItem::new("institutional", "Institutional Investor"),
    OptionItem::new("corporate_ai", "Corporate Accredited Investor"),
];

pub static QUALIFYING_CRITERIA: [OptionItem; 3] = [
    OptionItem::new("net_assets_2m", "Net assets > S$2M"),
    OptionItem::new("fin_assets_1m", "Financial assets > S$1M"),
    OptionItem::new("income_300k", "Annual income ≥ S$300K"),
];

pub static SALUTATIONS: [OptionItem; 5] = [
    OptionItem::flat("Mr"),
    OptionItem::flat("Mrs"),
    OptionItem::flat("Ms"),
    OptionItem::flat("Dr"),
    OptionItem::flat("Prof"),
];

pub static COUNTRIES: [OptionItem; 9] = [
    OptionItem::flat("Singapore"),
    OptionItem::flat("Malaysia"),
    OptionItem::flat("Indonesia"),
    OptionItem::flat("India"),
    OptionItem::flat("China"),
    OptionItem::flat("United Kingdom"),
    OptionItem::flat("United States"),
    OptionItem::flat("Australia"),
    OptionItem::flat("Other"),
];

pub static TAX_RESIDENCIES: [OptionItem; 10] = [
    OptionItem::flat("Singapore"),
    OptionItem::flat("Malaysia"),
    OptionItem::flat("Indonesia"),
    OptionItem::flat("India"),
    OptionItem::flat("China"),
    OptionItem::flat("Hong Kong"),
    OptionItem::flat("United Kingdom"),
    OptionItem::flat("United States"),
    OptionItem::flat("Australia"),
    OptionItem::flat("Other"),
];

pub static ID_TYPES: [OptionItem; 4] = [
    OptionItem::flat("NRIC"),
    OptionItem::flat("Singapore PR (FIN)"),
    OptionItem::flat("Passport"),
    OptionItem::flat("Employment Pass"),
];

pub static CRS_CLASSIFICATIONS: [OptionItem; 4] = [
    OptionItem::new("individual", "Individual (Tax Resident in Singapore only)"),
    OptionItem::new(
        "individual_multi",
        "Individual (Tax Resident in multiple jurisdictions)",
    ),
    OptionItem::new("passive_nfe", "Passive Non-Financial Entity"),
    OptionItem::new("active_nfe", "Active Non-Financial Entity"),
];

pub static US_PERSON_OPTIONS: [OptionItem; 3] = [
    OptionItem::new("no", "No — Not a US Person"),
    OptionItem::new("yes_citizen", "Yes — US Citizen"),
    OptionItem::new("yes_resident", "Yes — US Resident / Green Card Holder"),
];

pub static FATCA_STATUSES: [OptionItem; 3] = [
    OptionItem::new("individual_sg", "Individual — Singapore Tax Resident"),
    OptionItem::new("individual_other", "Individual — Other Jurisdiction"),
    OptionItem::new("entity_exempt", "Entity — Exempt Beneficial Owner"),
];

pub static WEALTH_SOURCES: [OptionItem; 8] = [
    OptionItem::flat("Employment / Salary"),
    OptionItem::flat("Business Ownership"),
    OptionItem::flat("Investment Returns"),
    OptionItem::flat("Inheritance / Gift"),
    OptionItem::flat("Real Estate Proceeds"),
    OptionItem::flat("Pension / Retirement Funds"),
    OptionItem::flat("Insurance Proceeds"),
    OptionItem::flat("Loan / Credit Facility"),
];

pub static EMPLOYMENT_STATUSES: [OptionItem; 6] = [
    OptionItem::flat("Employed (Private Sector)"),
    OptionItem::flat("Employed (Public / Government)"),
    OptionItem::flat("Self-Employed"),
    OptionItem::flat("Business Owner"),
    OptionItem::flat("Retired"),
    OptionItem::flat("Investor / HNW Individual"),
];

pub static NET_WORTH_BRACKETS: [OptionItem; 5] = [
    OptionItem::flat("S$1M — S$2M"),
    OptionItem::flat("S$2M — S$5M"),
    OptionItem::flat("S$5M — S$10M"),
    OptionItem::flat("S$10M — S$25M"),
    OptionItem::flat("Above S$25M"),
];

pub static PEP_OPTIONS: [OptionItem; 3] = [
    OptionItem::new("no", "No"),
    OptionItem::new("yes_self", "Yes — I am a PEP"),
    OptionItem::new("yes_related", "Yes — Related to a PEP"),
];

pub static RISK_TOLERANCES: [OptionItem; 4] = [
    OptionItem::new("conservative", "Conservative"),
    OptionItem::new("moderate", "Moderate"),
    OptionItem::new("aggressive", "Aggressive"),
    OptionItem::new("speculative", "Speculative"),
];

pub static INVESTMENT_OBJECTIVES: [OptionItem; 5] = [
    OptionItem::flat("Capital Preservation"),
    OptionItem::flat("Income Generation"),
    OptionItem::flat("Capital Appreciation"),
    OptionItem::flat("Total Return"),
    OptionItem::flat("Portfolio Diversification"),
];

/// Every field key accepted at the string boundary.
pub static FIELD_KEYS: [&str; 35] = [
    "investor_type",
    "qualifying_criterion",
    "acknowledged",
    "salutation",
    "first_name",
    "last_name",
    "date_of_birth",
    "nationality",
    "id_type",
    "id_number",
    "email",
    "phone",
    "address1",
    "address2",
    "city",
    "country",
    "postal_code",
    "tax_residency",
    "tin_number",
    "us_person",
    "fatca_status",
    "crs_status",
    "source_of_wealth",
    "employment_status",
    "employer",
    "net_worth",
    "wealth_narrative",
    "pep_status",
    "selected_fund",
    "investment_amount",
    "risk_tolerance",
    "investment_objective",
    "consent_kyc",
    "consent_marketing",
    "consent_terms",
];

/// Finds an option by value or label, ignoring case.
pub fn resolve<'a>(options: &'a [OptionItem], input: &str) -> Option<&'a OptionItem> {
    let needle = input.trim();
    options.iter().find(|option| {
        option.value.eq_ignore_ascii_case(needle) || option.label.eq_ignore_ascii_case(needle)
    })
}

fn parse_bool(field: &'static str, raw: &str) -> Result<bool, WizardError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(WizardError::InvalidValue {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<Option<NaiveDate>, WizardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| WizardError::InvalidValue {
            field,
            value: raw.to_string(),
        })
}

/// Parses an enum-token field. An empty string clears the selection.
fn parse_token<T>(
    field: &'static str,
    raw: &str,
    options: &'static [OptionItem],
    from_token: fn(&str) -> Option<T>,
) -> Result<Option<T>, WizardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    resolve(options, trimmed)
        .and_then(|option| from_token(option.value))
        .map(Some)
        .ok_or(WizardError::InvalidValue {
            field,
            value: raw.to_string(),
        })
}

/// Parses a select-backed string field to its canonical label. An empty
/// string clears the field.
fn parse_choice(
    field: &'static str,
    raw: &str,
    options: &'static [OptionItem],
) -> Result<String, WizardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    resolve(options, trimmed)
        .map(|option| option.label.to_string())
        .ok_or(WizardError::InvalidValue {
            field,
            value: raw.to_string(),
        })
}

/// Converts a `(key, raw value)` pair from the presentation boundary into a
/// typed change. Free-text fields pass through verbatim; selects resolve to
/// their canonical label; tokens, dates, and booleans are parsed. No step
/// gating happens here.
pub fn parse_change(key: &str, raw: &str) -> Result<FieldChange, WizardError> {
    let change = match key {
        "investor_type" => FieldChange::InvestorType(parse_token(
            "investor_type",
            raw,
            &INVESTOR_TYPES,
            InvestorType::from_token,
        )?),
        "qualifying_criterion" => FieldChange::QualifyingCriterion(parse_token(
            "qualifying_criterion",
            raw,
            &QUALIFYING_CRITERIA,
            QualifyingCriterion::from_token,
        )?),
        "acknowledged" => FieldChange::Acknowledged(parse_bool("acknowledged", raw)?),
        "salutation" => FieldChange::Salutation(parse_choice("salutation", raw, &SALUTATIONS)?),
        "first_name" => FieldChange::FirstName(raw.trim().to_string()),
        "last_name" => FieldChange::LastName(raw.trim().to_string()),
        "date_of_birth" => FieldChange::DateOfBirth(parse_date("date_of_birth", raw)?),
        "nationality" => FieldChange::Nationality(parse_choice("nationality", raw, &COUNTRIES)?),
        "id_type" => FieldChange::IdType(parse_choice("id_type", raw, &ID_TYPES)?),
        "id_number" => FieldChange::IdNumber(raw.trim().to_string()),
        "email" => FieldChange::Email(raw.trim().to_string()),
        "phone" => FieldChange::Phone(raw.trim().to_string()),
        "address1" => FieldChange::Address1(raw.trim().to_string()),
        "address2" => FieldChange::Address2(raw.trim().to_string()),
        "city" => FieldChange::City(raw.trim().to_string()),
        "country" => FieldChange::Country(parse_choice("country", raw, &COUNTRIES)?),
        "postal_code" => FieldChange::PostalCode(raw.trim().to_string()),
        "tax_residency" => {
            FieldChange::TaxResidency(parse_choice("tax_residency", raw, &TAX_RESIDENCIES)?)
        }
        "tin_number" => FieldChange::TinNumber(raw.trim().to_string()),
        "us_person" => FieldChange::UsPerson(parse_token(
            "us_person",
            raw,
            &US_PERSON_OPTIONS,
            UsPersonStatus::from_token,
        )?),
        "fatca_status" => FieldChange::FatcaStatus(parse_token(
            "fatca_status",
            raw,
            &FATCA_STATUSES,
            FatcaStatus::from_token,
        )?),
        "crs_status" => FieldChange::CrsStatus(parse_token(
            "crs_status",
            raw,
            &CRS_CLASSIFICATIONS,
            CrsStatus::from_token,
        )?),
        "source_of_wealth" => FieldChange::ToggleWealthSource(
            resolve(&WEALTH_SOURCES, raw)
                .map(|option| option.label.to_string())
                .ok_or(WizardError::InvalidValue {
                    field: "source_of_wealth",
                    value: raw.to_string(),
                })?,
        ),
        "employment_status" => FieldChange::EmploymentStatus(parse_choice(
            "employment_status",
            raw,
            &EMPLOYMENT_STATUSES,
        )?),
        "employer" => FieldChange::Employer(raw.trim().to_string()),
        "net_worth" => FieldChange::NetWorth(parse_choice("net_worth", raw, &NET_WORTH_BRACKETS)?),
        "wealth_narrative" => FieldChange::WealthNarrative(raw.trim().to_string()),
        "pep_status" => FieldChange::PepStatus(parse_token(
            "pep_status",
            raw,
            &PEP_OPTIONS,
            PepStatus::from_token,
        )?),
        "selected_fund" => FieldChange::SelectedFund(parse_fund(raw)?),
        "investment_amount" => FieldChange::InvestmentAmount(raw.trim().to_string()),
        "risk_tolerance" => FieldChange::RiskTolerance(parse_token(
            "risk_tolerance",
            raw,
            &RISK_TOLERANCES,
            RiskTolerance::from_token,
        )?),
        "investment_objective" => FieldChange::InvestmentObjective(parse_choice(
            "investment_objective",
            raw,
            &INVESTMENT_OBJECTIVES,
        )?),
        "consent_kyc" => FieldChange::ConsentKyc(parse_bool("consent_kyc", raw)?),
        "consent_marketing" => {
            FieldChange::ConsentMarketing(parse_bool("consent_marketing", raw)?)
        }
        "consent_terms" => FieldChange::ConsentTerms(parse_bool("consent_terms", raw)?),
        other => return Err(WizardError::UnknownField(other.to_string())),
    };
    Ok(change)
}

/// Accepts a fund id or display name; an empty string clears the selection.
fn parse_fund(raw: &str) -> Result<String, WizardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let catalog = FundCatalog::builtin();
    catalog
        .iter()
        .find(|fund| {
            fund.id.eq_ignore_ascii_case(trimmed) || fund.name.eq_ignore_ascii_case(trimmed)
        })
        .map(|fund| fund.id.to_string())
        .ok_or_else(|| WizardError::UnknownFund(trimmed.to_string()))
}
