use serde::{Deserialize, Serialize};

/// The seven stations of the onboarding flow, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Welcome,
    Classification,
    Identity,
    Tax,
    Wealth,
    Fund,
    Review,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Welcome,
        Step::Classification,
        Step::Identity,
        Step::Tax,
        Step::Wealth,
        Step::Fund,
        Step::Review,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position within the flow.
    pub fn index(self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Classification => 1,
            Step::Identity => 2,
            Step::Tax => 3,
            Step::Wealth => 4,
            Step::Fund => 5,
            Step::Review => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Classification => "Investor Classification",
            Step::Identity => "Personal Information",
            Step::Tax => "Tax & Compliance",
            Step::Wealth => "Source of Wealth",
            Step::Fund => "Fund Selection",
            Step::Review => "Review & Submit",
        }
    }

    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self == Step::Welcome
    }

    pub fn is_last(self) -> bool {
        self == Step::Review
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_ordered_and_indexed() {
        for (position, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), position);
            assert_eq!(Step::from_index(position), Some(*step));
        }
        assert_eq!(Step::from_index(Step::COUNT), None);
    }

    #[test]
    fn traversal_is_linear() {
        assert_eq!(Step::Welcome.next(), Some(Step::Classification));
        assert_eq!(Step::Welcome.previous(), None);
        assert_eq!(Step::Review.next(), None);
        assert_eq!(Step::Review.previous(), Some(Step::Fund));
        assert!(Step::Welcome.is_first());
        assert!(Step::Review.is_last());
    }
}
