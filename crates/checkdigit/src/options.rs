//! Formatting options.

/// Controls how [`add_check_digit`](crate::add_check_digit) treats a record number.
///
/// With the `serde` feature, options can be embedded in an application's own
/// configuration. Missing keys fall back to their defaults, and both
/// `snake_case` and `camelCase` keys are accepted.
///
/// ```
/// use recnum_checkdigit::Options;
/// let options = Options::default();
/// assert!(!options.add_to_virtual_records);
/// assert_eq!(options.check_digit, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Also add check digits to virtual records (those with an `@` suffix).
    /// Defaults to `false`, leaving virtual records untouched.
    #[cfg_attr(feature = "serde", serde(alias = "addToVirtualRecords"))]
    pub add_to_virtual_records: bool,
    /// Use this character instead of calculating the check digit. Only applies
    /// where a check digit would be added anyway.
    #[cfg_attr(feature = "serde", serde(alias = "checkDigit"))]
    pub check_digit: Option<char>,
}
impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_add_to_virtual_records(self, add_to_virtual_records: bool) -> Self {
        Self {
            add_to_virtual_records,
            ..self
        }
    }

    #[must_use]
    pub fn with_check_digit(self, check_digit: char) -> Self {
        Self {
            check_digit: Some(check_digit),
            ..self
        }
    }
}
