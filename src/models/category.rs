#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Rent,
    Dining,
    EducationFee,
    LoanPayments,
    Utilities,
    MobileInternetBills,
    Other,
}

impl ExpenseCategory {
    pub const COUNT: usize = 7;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Dining => "Dining",
            Self::EducationFee => "Education Fee",
            Self::LoanPayments => "Loan Payments",
            Self::Utilities => "Utilities",
            Self::MobileInternetBills => "Mobile/Internet Bills",
            Self::Other => "Other",
        }
    }

    /// Name used for CLI flags and `:set` (e.g. `education-fee`).
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Dining => "dining",
            Self::EducationFee => "education-fee",
            Self::LoanPayments => "loan-payments",
            Self::Utilities => "utilities",
            Self::MobileInternetBills => "mobile-internet",
            Self::Other => "other",
        }
    }

    /// Accepts the display label or the flag name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower || c.flag() == lower)
            .or(match lower.as_str() {
                "education" => Some(Self::EducationFee),
                "loan" | "loans" => Some(Self::LoanPayments),
                "utilities (bills)" | "bills" => Some(Self::Utilities),
                "mobile" | "internet" | "mobile/internet" => Some(Self::MobileInternetBills),
                _ => None,
            })
    }

    /// All categories in declaration (display) order.
    pub fn all() -> &'static [ExpenseCategory; Self::COUNT] {
        &[
            Self::Rent,
            Self::Dining,
            Self::EducationFee,
            Self::LoanPayments,
            Self::Utilities,
            Self::MobileInternetBills,
            Self::Other,
        ]
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
