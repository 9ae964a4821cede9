/// Finding kinds reported by validation, grouped by the check that emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Select, plural, and selectordinal structure
    MissingOther,
    DuplicateOption,
    EmptyOption,

    // Number pattern styles
    TooManySubpatterns,
    MultipleDecimals,
    MultipleExponents,
    NoDigitPlaceholder,
    UnterminatedQuote,

    // Date pattern styles
    DayOfYearWithMonth,
    WeekYearWithCalendarFields,
}

impl DiagnosticKind {
    /// Stable identifier for machine consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingOther => "validator.missing_other",
            Self::DuplicateOption => "validator.duplicate_option",
            Self::EmptyOption => "validator.empty_option",
            Self::TooManySubpatterns => "validator.too_many_subpatterns",
            Self::MultipleDecimals => "validator.multiple_decimals",
            Self::MultipleExponents => "validator.multiple_exponents",
            Self::NoDigitPlaceholder => "validator.no_digit_placeholder",
            Self::UnterminatedQuote => "validator.unterminated_quote",
            Self::DayOfYearWithMonth => "validator.day_of_year_with_month",
            Self::WeekYearWithCalendarFields => "validator.week_year_with_calendar_fields",
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DayOfYearWithMonth | Self::WeekYearWithCalendarFields => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message, used when the caller gives no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingOther => "missing required `other` option",
            Self::DuplicateOption => "duplicate option",
            Self::EmptyOption => "option message is empty",

            Self::TooManySubpatterns => "number pattern has more than two subpatterns",
            Self::MultipleDecimals => "number pattern has more than one decimal separator",
            Self::MultipleExponents => "number pattern has more than one exponent",
            Self::NoDigitPlaceholder => "number pattern has no digit placeholder",
            Self::UnterminatedQuote => "pattern has an unterminated quote",

            Self::DayOfYearWithMonth => "day of year (`D`) combined with month (`M`)",
            Self::WeekYearWithCalendarFields => {
                "week-based year (`Y`) combined with month or day fields"
            }
        }
    }

    /// Template for messages with caller detail; `{}` is replaced by the detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::MissingOther => "{} is missing the required `other` option".to_string(),
            Self::DuplicateOption => "duplicate option {}".to_string(),
            Self::EmptyOption => "option {} is empty".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → `fallback_message()`
    /// - `Some(detail)` → `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
