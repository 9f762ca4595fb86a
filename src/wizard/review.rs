//! Read-only review projection shown on the final step.
//!
//! Five grouped sections of (label, display value) rows derived from the
//! answers. Rows whose derived value is empty are dropped entirely; a few
//! fields substitute an explicit fallback instead ("Not provided",
//! "Not declared", "None", "—"). Safe to call any number of times.

use serde::Serialize;

use crate::wizard::answers::AnswerSet;
use crate::wizard::catalog::FundCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSection {
    pub title: &'static str,
    pub rows: Vec<ReviewRow>,
}

impl ReviewSection {
    fn new(title: &'static str, candidates: Vec<(&'static str, String)>) -> Self {
        let rows = candidates
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| ReviewRow { label, value })
            .collect();
        Self { title, rows }
    }
}

/// Projects the answers into the five review sections, resolving the fund
/// id against the catalog.
pub fn project_review(answers: &AnswerSet, catalog: &FundCatalog) -> Vec<ReviewSection> {
    let investor_profile = ReviewSection::new(
        "Investor Profile",
        vec![
            (
                "Type",
                answers
                    .investor_type
                    .map(|t| humanize_token(t.token()))
                    .unwrap_or_default(),
            ),
            (
                "Qualifying Criterion",
                answers
                    .qualifying_criterion
                    .map(|c| spaced_token(c.token()))
                    .unwrap_or_default(),
            ),
        ],
    );

    let personal = ReviewSection::new(
        "Personal Information",
        vec![
            (
                "Name",
                join_non_empty(
                    [
                        answers.salutation.as_str(),
                        answers.first_name.as_str(),
                        answers.last_name.as_str(),
                    ],
                    " ",
                ),
            ),
            (
                "Date of Birth",
                answers
                    .date_of_birth
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
            ("Nationality", answers.nationality.clone()),
            ("ID", identity_document(answers)),
            ("Email", answers.email.clone()),
            ("Phone", answers.phone.clone()),
            (
                "Address",
                join_non_empty(
                    [
                        answers.address1.as_str(),
                        answers.address2.as_str(),
                        answers.city.as_str(),
                        answers.country.as_str(),
                        answers.postal_code.as_str(),
                    ],
                    ", ",
                ),
            ),
        ],
    );

    let tax = ReviewSection::new(
        "Tax & Compliance",
        vec![
            ("Tax Residency", answers.tax_residency.clone()),
            (
                "TIN",
                if answers.tin_number.is_empty() {
                    "Not provided".to_string()
                } else {
                    answers.tin_number.clone()
                },
            ),
            (
                "US Person",
                answers
                    .us_person
                    .map(|s| s.token().to_string())
                    .unwrap_or_default(),
            ),
            (
                "CRS Status",
                answers
                    .crs_status
                    .map(|s| s.token().to_string())
                    .unwrap_or_default(),
            ),
        ],
    );

    let wealth = ReviewSection::new(
        "Source of Wealth",
        vec![
            ("Sources", answers.source_of_wealth.join(", ")),
            ("Employment", answers.employment_status.clone()),
            (
                "PEP Status",
                answers
                    .pep_status
                    .map(|s| s.token().to_string())
                    .unwrap_or_else(|| "Not declared".to_string()),
            ),
        ],
    );

    let fund = ReviewSection::new(
        "Fund Selection",
        vec![
            (
                "Selected Fund",
                catalog
                    .find(&answers.selected_fund)
                    .map(|f| f.name.to_string())
                    .unwrap_or_else(|| "None".to_string()),
            ),
            ("Investment Amount", format_sgd(&answers.investment_amount)),
            (
                "Risk Tolerance",
                answers
                    .risk_tolerance
                    .map(|r| r.token().to_string())
                    .unwrap_or_default(),
            ),
            ("Objective", answers.investment_objective.clone()),
        ],
    );

    vec![investor_profile, personal, tax, wealth, fund]
}

/// Underscores to spaces, first letter of each word upper-cased.
pub fn humanize_token(token: &str) -> String {
    spaced_token(token)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Underscores to spaces, casing untouched.
pub fn spaced_token(token: &str) -> String {
    token.replace('_', " ")
}

/// Renders an investment amount as `S$ 1,234,567`. The string must parse
/// as a plain decimal number; anything else is surfaced verbatim rather
/// than coerced, and an empty amount renders as "—".
pub fn format_sgd(amount: &str) -> String {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return "—".to_string();
    }
    match group_decimal(trimmed) {
        Some(grouped) => format!("S$ {grouped}"),
        None => trimmed.to_string(),
    }
}

/// Thousands-groups a plain decimal string; `None` when the input is not
/// a number of the form `[-]digits[.digits]`.
fn group_decimal(input: &str) -> Option<String> {
    let (sign, unsigned) = match input.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", input),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (position, digit) in int_part.chars().enumerate() {
        if position > 0 && (int_part.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::from(sign);
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    Some(out)
}

fn identity_document(answers: &AnswerSet) -> String {
    if answers.id_type.is_empty() && answers.id_number.is_empty() {
        String::new()
    } else {
        format!("{}: {}", answers.id_type, answers.id_number)
    }
}

fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
