//! Field registry for the onboarding flow.
//!
//! `AnswerSet` holds every answer the wizard collects, one typed field per
//! data point. `FieldChange` is the only mutation vocabulary: each variant
//! carries the new value for exactly one field, so a change can be journaled,
//! replayed, or undone as a unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Investor classification under MAS Notice SFA 04-N13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorType {
    IndividualAi,
    JointAi,
    Institutional,
    CorporateAi,
}

impl InvestorType {
    pub const ALL: [InvestorType; 4] = [
        InvestorType::IndividualAi,
        InvestorType::JointAi,
        InvestorType::Institutional,
        InvestorType::CorporateAi,
    ];

    pub fn token(self) -> &'static str {
        match self {
            InvestorType::IndividualAi => "individual_ai",
            InvestorType::JointAi => "joint_ai",
            InvestorType::Institutional => "institutional",
            InvestorType::CorporateAi => "corporate_ai",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }

    /// True for the individual accredited-investor classifications that
    /// must declare a qualifying criterion.
    pub fn is_individual_accredited(self) -> bool {
        matches!(self, InvestorType::IndividualAi | InvestorType::JointAi)
    }
}

/// MAS accredited-investor qualifying criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualifyingCriterion {
    #[serde(rename = "net_assets_2m")]
    NetAssets2m,
    #[serde(rename = "fin_assets_1m")]
    FinAssets1m,
    #[serde(rename = "income_300k")]
    Income300k,
}

impl QualifyingCriterion {
    pub const ALL: [QualifyingCriterion; 3] = [
        QualifyingCriterion::NetAssets2m,
        QualifyingCriterion::FinAssets1m,
        QualifyingCriterion::Income300k,
    ];

    pub fn token(self) -> &'static str {
        match self {
            QualifyingCriterion::NetAssets2m => "net_assets_2m",
            QualifyingCriterion::FinAssets1m => "fin_assets_1m",
            QualifyingCriterion::Income300k => "income_300k",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }
}

/// FATCA US-person declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsPersonStatus {
    No,
    YesCitizen,
    YesResident,
}

impl UsPersonStatus {
    pub const ALL: [UsPersonStatus; 3] = [
        UsPersonStatus::No,
        UsPersonStatus::YesCitizen,
        UsPersonStatus::YesResident,
    ];

    pub fn token(self) -> &'static str {
        match self {
            UsPersonStatus::No => "no",
            UsPersonStatus::YesCitizen => "yes_citizen",
            UsPersonStatus::YesResident => "yes_resident",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }

    pub fn is_us_person(self) -> bool {
        !matches!(self, UsPersonStatus::No)
    }
}

/// FATCA status for non-US persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatcaStatus {
    IndividualSg,
    IndividualOther,
    EntityExempt,
}

impl FatcaStatus {
    pub const ALL: [FatcaStatus; 3] = [
        FatcaStatus::IndividualSg,
        FatcaStatus::IndividualOther,
        FatcaStatus::EntityExempt,
    ];

    pub fn token(self) -> &'static str {
        match self {
            FatcaStatus::IndividualSg => "individual_sg",
            FatcaStatus::IndividualOther => "individual_other",
            FatcaStatus::EntityExempt => "entity_exempt",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }
}

/// CRS account-holder self-certification classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrsStatus {
    Individual,
    IndividualMulti,
    PassiveNfe,
    ActiveNfe,
}

impl CrsStatus {
    pub const ALL: [CrsStatus; 4] = [
        CrsStatus::Individual,
        CrsStatus::IndividualMulti,
        CrsStatus::PassiveNfe,
        CrsStatus::ActiveNfe,
    ];

    pub fn token(self) -> &'static str {
        match self {
            CrsStatus::Individual => "individual",
            CrsStatus::IndividualMulti => "individual_multi",
            CrsStatus::PassiveNfe => "passive_nfe",
            CrsStatus::ActiveNfe => "active_nfe",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }
}

/// Politically-exposed-person declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PepStatus {
    No,
    YesSelf,
    YesRelated,
}

impl PepStatus {
    pub const ALL: [PepStatus; 3] = [PepStatus::No, PepStatus::YesSelf, PepStatus::YesRelated];

    pub fn token(self) -> &'static str {
        match self {
            PepStatus::No => "no",
            PepStatus::YesSelf => "yes_self",
            PepStatus::YesRelated => "yes_related",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }

    pub fn requires_edd(self) -> bool {
        !matches!(self, PepStatus::No)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
    Speculative,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 4] = [
        RiskTolerance::Conservative,
        RiskTolerance::Moderate,
        RiskTolerance::Aggressive,
        RiskTolerance::Speculative,
    ];

    pub fn token(self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
            RiskTolerance::Speculative => "speculative",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }
}

/// Every answer collected across the seven steps.
///
/// All fields start empty. Select-backed string fields hold the canonical
/// option label; enum fields hold `None` until a choice is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    // Classification
    pub investor_type: Option<InvestorType>,
    pub qualifying_criterion: Option<QualifyingCriterion>,
    pub acknowledged: bool,
    // Identity
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
    pub id_type: String,
    pub id_number: String,
    pub email: String,
    pub phone: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    // Tax
    pub tax_residency: String,
    pub tin_number: String,
    pub us_person: Option<UsPersonStatus>,
    pub fatca_status: Option<FatcaStatus>,
    pub crs_status: Option<CrsStatus>,
    // Wealth
    pub source_of_wealth: Vec<String>,
    pub employment_status: String,
    pub employer: String,
    pub net_worth: String,
    pub wealth_narrative: String,
    pub pep_status: Option<PepStatus>,
    // Fund
    pub selected_fund: String,
    pub investment_amount: String,
    pub risk_tolerance: Option<RiskTolerance>,
    pub investment_objective: String,
    // Consents
    pub consent_kyc: bool,
    pub consent_marketing: bool,
    pub consent_terms: bool,
}

impl AnswerSet {
    /// Applies one change functionally, returning the updated record and
    /// leaving `self` untouched.
    pub fn with(&self, change: &FieldChange) -> AnswerSet {
        let mut next = self.clone();
        match change {
            FieldChange::InvestorType(value) => next.investor_type = *value,
            FieldChange::QualifyingCriterion(value) => next.qualifying_criterion = *value,
            FieldChange::Acknowledged(value) => next.acknowledged = *value,
            FieldChange::Salutation(value) => next.salutation = value.clone(),
            FieldChange::FirstName(value) => next.first_name = value.clone(),
            FieldChange::LastName(value) => next.last_name = value.clone(),
            FieldChange::DateOfBirth(value) => next.date_of_birth = *value,
            FieldChange::Nationality(value) => next.nationality = value.clone(),
            FieldChange::IdType(value) => next.id_type = value.clone(),
            FieldChange::IdNumber(value) => next.id_number = value.clone(),
            FieldChange::Email(value) => next.email = value.clone(),
            FieldChange::Phone(value) => next.phone = value.clone(),
            FieldChange::Address1(value) => next.address1 = value.clone(),
            FieldChange::Address2(value) => next.address2 = value.clone(),
            FieldChange::City(value) => next.city = value.clone(),
            FieldChange::Country(value) => next.country = value.clone(),
            FieldChange::PostalCode(value) => next.postal_code = value.clone(),
            FieldChange::TaxResidency(value) => next.tax_residency = value.clone(),
            FieldChange::TinNumber(value) => next.tin_number = value.clone(),
            FieldChange::UsPerson(value) => next.us_person = *value,
            FieldChange::FatcaStatus(value) => next.fatca_status = *value,
            FieldChange::CrsStatus(value) => next.crs_status = *value,
            FieldChange::ToggleWealthSource(tag) => {
                if let Some(position) = next.source_of_wealth.iter().position(|s| s == tag) {
                    next.source_of_wealth.remove(position);
                } else {
                    next.source_of_wealth.push(tag.clone());
                }
            }
            FieldChange::EmploymentStatus(value) => next.employment_status = value.clone(),
            FieldChange::Employer(value) => next.employer = value.clone(),
            FieldChange::NetWorth(value) => next.net_worth = value.clone(),
            FieldChange::WealthNarrative(value) => next.wealth_narrative = value.clone(),
            FieldChange::PepStatus(value) => next.pep_status = *value,
            FieldChange::SelectedFund(value) => next.selected_fund = value.clone(),
            FieldChange::InvestmentAmount(value) => next.investment_amount = value.clone(),
            FieldChange::RiskTolerance(value) => next.risk_tolerance = *value,
            FieldChange::InvestmentObjective(value) => next.investment_objective = value.clone(),
            FieldChange::ConsentKyc(value) => next.consent_kyc = *value,
            FieldChange::ConsentMarketing(value) => next.consent_marketing = *value,
            FieldChange::ConsentTerms(value) => next.consent_terms = *value,
        }
        next
    }
}

/// One field update. Multi-select fields use toggle semantics: applying the
/// same tag twice returns the set to its original state.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    InvestorType(Option<InvestorType>),
    QualifyingCriterion(Option<QualifyingCriterion>),
    Acknowledged(bool),
    Salutation(String),
    FirstName(String),
    LastName(String),
    DateOfBirth(Option<NaiveDate>),
    Nationality(String),
    IdType(String),
    IdNumber(String),
    Email(String),
    Phone(String),
    Address1(String),
    Address2(String),
    City(String),
    Country(String),
    PostalCode(String),
    TaxResidency(String),
    TinNumber(String),
    UsPerson(Option<UsPersonStatus>),
    FatcaStatus(Option<FatcaStatus>),
    CrsStatus(Option<CrsStatus>),
    ToggleWealthSource(String),
    EmploymentStatus(String),
    Employer(String),
    NetWorth(String),
    WealthNarrative(String),
    PepStatus(Option<PepStatus>),
    SelectedFund(String),
    InvestmentAmount(String),
    RiskTolerance(Option<RiskTolerance>),
    InvestmentObjective(String),
    ConsentKyc(bool),
    ConsentMarketing(bool),
    ConsentTerms(bool),
}

impl FieldChange {
    /// The boundary key of the field this change targets.
    pub fn field_key(&self) -> &'static str {
        match self {
            FieldChange::InvestorType(_) => "investor_type",
            FieldChange::QualifyingCriterion(_) => "qualifying_criterion",
            FieldChange::Acknowledged(_) => "acknowledged",
            FieldChange::Salutation(_) => "salutation",
            FieldChange::FirstName(_) => "first_name",
            FieldChange::LastName(_) => "last_name",
            FieldChange::DateOfBirth(_) => "date_of_birth",
            FieldChange::Nationality(_) => "nationality",
            FieldChange::IdType(_) => "id_type",
            FieldChange::IdNumber(_) => "id_number",
            FieldChange::Email(_) => "email",
            FieldChange::Phone(_) => "phone",
            FieldChange::Address1(_) => "address1",
            FieldChange::Address2(_) => "address2",
            FieldChange::City(_) => "city",
            FieldChange::Country(_) => "country",
            FieldChange::PostalCode(_) => "postal_code",
            FieldChange::TaxResidency(_) => "tax_residency",
            FieldChange::TinNumber(_) => "tin_number",
            FieldChange::UsPerson(_) => "us_person",
            FieldChange::FatcaStatus(_) => "fatca_status",
            FieldChange::CrsStatus(_) => "crs_status",
            FieldChange::ToggleWealthSource(_) => "source_of_wealth",
            FieldChange::EmploymentStatus(_) => "employment_status",
            FieldChange::Employer(_) => "employer",
            FieldChange::NetWorth(_) => "net_worth",
            FieldChange::WealthNarrative(_) => "wealth_narrative",
            FieldChange::PepStatus(_) => "pep_status",
            FieldChange::SelectedFund(_) => "selected_fund",
            FieldChange::InvestmentAmount(_) => "investment_amount",
            FieldChange::RiskTolerance(_) => "risk_tolerance",
            FieldChange::InvestmentObjective(_) => "investment_objective",
            FieldChange::ConsentKyc(_) => "consent_kyc",
            FieldChange::ConsentMarketing(_) => "consent_marketing",
            FieldChange::ConsentTerms(_) => "consent_terms",
        }
    }
}
