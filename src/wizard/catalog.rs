//! Static fund reference data offered at the Fund Selection step.
//!
//! The catalog is supplied at initialization and never mutated by the
//! wizard; figures are illustrative and display-formatted at source.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

/// One investable fund product.
#[derive(Debug, Clone, Serialize)]
pub struct Fund {
    pub id: &'static str,
    pub name: &'static str,
    pub strategy: &'static str,
    pub aum: &'static str,
    pub ytd: &'static str,
    pub min_investment: &'static str,
    pub risk: RiskTier,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// Ordered, read-only set of funds open to qualified investors.
#[derive(Debug, Clone)]
pub struct FundCatalog {
    funds: Vec<Fund>,
}

static BUILTIN: Lazy<FundCatalog> = Lazy::new(|| FundCatalog {
    funds: vec![
        Fund {
            id: "apac-macro",
            name: "AbeleAsia-Pacific Macro Fund",
            strategy: "Global Macro",
            aum: "S$480M",
            ytd: "+14.2%",
            min_investment: "S$250,000",
            risk: RiskTier::High,
            description: "Exploits macro dislocations across Asia-Pacific currency, rates, \
                          and equity markets using quantitative and discretionary approaches.",
            tags: &["Macro", "FX", "Rates"],
        },
        Fund {
            id: "sg-equity",
            name: "AbeleSingapore Equity Long/Short",
            strategy: "Long / Short Equity",
            aum: "S$210M",
            ytd: "+9.7%",
            min_investment: "S$100,000",
            risk: RiskTier::Medium,
            description: "Concentrated long/short book targeting undervalued SGX-listed and \
                          regional equities with fundamental bottom-up research.",
            tags: &["Equities", "SGX", "Long/Short"],
        },
        Fund {
            id: "credit-opps",
            name: "AbeleCredit Opportunities Fund",
            strategy: "Credit / Fixed Income",
            aum: "S$330M",
            ytd: "+6.1%",
            min_investment: "S$200,000",
            risk: RiskTier::Medium,
            description: "Targets mispriced credit instruments across IG, HY, and distressed \
                          in APAC, with active duration and spread management.",
            tags: &["Credit", "Bonds", "APAC"],
        },
        Fund {
            id: "quant-alpha",
            name: "AbeleQuantitative Alpha Fund",
            strategy: "Systematic / Quant",
            aum: "S$155M",
            ytd: "+18.4%",
            min_investment: "S$500,000",
            risk: RiskTier::High,
            description: "Machine-learning driven multi-factor strategies across liquid \
                          global futures and equity markets with sub-day rebalancing.",
            tags: &["Quant", "Systematic", "Futures"],
        },
    ],
});

impl FundCatalog {
    /// The built-in product shelf.
    pub fn builtin() -> &'static FundCatalog {
        &BUILTIN
    }

    pub fn find(&self, id: &str) -> Option<&Fund> {
        self.funds.iter().find(|fund| fund.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fund> {
        self.funds.iter()
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_ordered_funds() {
        let catalog = FundCatalog::builtin();
        let ids: Vec<&str> = catalog.iter().map(|fund| fund.id).collect();
        assert_eq!(ids, vec!["apac-macro", "sg-equity", "credit-opps", "quant-alpha"]);
    }

    #[test]
    fn find_resolves_display_name() {
        let catalog = FundCatalog::builtin();
        let fund = catalog.find("quant-alpha").expect("known fund");
        assert_eq!(fund.name, "AbeleQuantitative Alpha Fund");
        assert_eq!(fund.risk, RiskTier::High);
        assert!(!catalog.contains("frontier-credit"));
    }
}
