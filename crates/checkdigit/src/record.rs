//! Record number inputs and their structural parts.

use crate::consts::RECORD_NUMBER_REGEX;
use crate::error::{Error, ErrorKind, Result};
use regex::Captures;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

const MARKER: char = '.';
const SUFFIX_SEPARATOR: char = '@';

/// Anything that can be given a check digit.
///
/// A bare number has no structure around it. Text is parsed as a full
/// record number (see [`RecordNumber`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordInput<'a> {
    /// A numeric record body, without type character or suffix.
    Numeric(u64),
    /// A record number string, such as `b1234567` or `.p123456@abcde`.
    Text(&'a str),
}
impl From<u64> for RecordInput<'_> {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}
impl From<u32> for RecordInput<'_> {
    fn from(value: u32) -> Self {
        Self::Numeric(u64::from(value))
    }
}
impl<'a> From<&'a str> for RecordInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}
impl<'a> From<&'a String> for RecordInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}
impl Display for RecordInput<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Numeric(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Untyped JSON input, as received from scripting or HTTP layers.
///
/// Only strings and non-negative integers are record numbers. Everything
/// else (`null`, objects, arrays, booleans, floats) is rejected.
#[cfg(feature = "serde")]
impl<'a> TryFrom<&'a serde_json::Value> for RecordInput<'a> {
    type Error = Error;
    fn try_from(value: &'a serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Number(number) => match number.as_u64() {
                Some(number) => Ok(Self::Numeric(number)),
                None => exn::bail!(ErrorKind::InvalidRecordNumber(number.to_string())),
            },
            other => exn::bail!(ErrorKind::InvalidRecordNumber(other.to_string())),
        }
    }
}

/// A record number broken into its structural parts.
///
/// ```text
/// .b1234567x@abcde
/// ^^               fore: optional marker and type character
///   ^^^^^^^        number: 6-7 digit body
///          ^       check digit, if present
///           ^^^^^^ aft: optional virtual record suffix
/// ```
///
/// Displaying a record number concatenates the parts back together in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordNumber {
    fore: String,
    number: String,
    check_digit: Option<char>,
    aft: Option<String>,
}
impl RecordNumber {
    /// Parses a record number, with or without a check digit.
    ///
    /// Matching is case-insensitive and the original casing is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use recnum_checkdigit::RecordNumber;
    /// let record = RecordNumber::parse(".b1234567@abc").unwrap();
    /// assert_eq!(record.type_char(), Some('b'));
    /// assert_eq!(record.number(), "1234567");
    /// assert_eq!(record.check_digit(), None);
    /// assert_eq!(record.suffix(), Some("abc"));
    ///
    /// assert_eq!(RecordNumber::parse("b1125421x").unwrap().check_digit(), Some('x'));
    /// assert!(RecordNumber::parse("#b1234567").is_err());
    /// ```
    pub fn parse(record_number: &str) -> Result<Self> {
        let Some(captures) = RECORD_NUMBER_REGEX.captures(record_number) else {
            exn::bail!(ErrorKind::InvalidRecordNumber(record_number.to_string()));
        };
        Ok(Self {
            fore: group(&captures, "fore").unwrap_or_default().to_string(),
            number: group(&captures, "number").unwrap_or_default().to_string(),
            check_digit: group(&captures, "check").and_then(|check| check.chars().next()),
            aft: group(&captures, "aft").map(str::to_string),
        })
    }

    /// Marker and type character, possibly empty.
    pub fn fore(&self) -> &str {
        &self.fore
    }

    /// The numeric body the check digit is calculated from.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn check_digit(&self) -> Option<char> {
        self.check_digit
    }

    /// The virtual record suffix, including the leading `@`.
    pub fn aft(&self) -> Option<&str> {
        self.aft.as_deref()
    }

    /// Returns `true` if the record number starts with the `.` marker.
    pub fn marker(&self) -> bool {
        self.fore.starts_with(MARKER)
    }

    /// The record type character (`b` for bibliographic, `i` for item, ...).
    pub fn type_char(&self) -> Option<char> {
        self.fore.chars().find(|c| *c != MARKER)
    }

    /// The virtual record suffix, without the leading `@`.
    pub fn suffix(&self) -> Option<&str> {
        self.aft().and_then(|aft| aft.strip_prefix(SUFFIX_SEPARATOR))
    }

    /// Returns `true` for virtual records, which carry an `@` suffix.
    pub fn is_virtual(&self) -> bool {
        self.aft.is_some()
    }

    /// Returns the same record number with `check_digit` in place after the body.
    #[must_use]
    pub fn with_check_digit(self, check_digit: char) -> Self {
        Self {
            check_digit: Some(check_digit),
            ..self
        }
    }
}
impl FromStr for RecordNumber {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
impl TryFrom<String> for RecordNumber {
    type Error = Error;
    fn try_from(value: String) -> Result<Self> {
        value.as_str().parse()
    }
}
impl Display for RecordNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.fore)?;
        f.write_str(&self.number)?;
        if let Some(check_digit) = self.check_digit {
            write!(f, "{check_digit}")?;
        }
        if let Some(aft) = &self.aft {
            f.write_str(aft)?;
        }
        Ok(())
    }
}

fn group<'h>(captures: &Captures<'h>, name: &str) -> Option<&'h str> {
    captures.name(name).map(|m| m.as_str()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("b1234567", "b", "1234567", None, None)]
    #[case(".i123456", ".i", "123456", None, None)]
    #[case("1234567", "", "1234567", None, None)]
    #[case(".1234567", ".", "1234567", None, None)]
    #[case("B1234567", "B", "1234567", None, None)]
    #[case("p1655776@abcde", "p", "1655776", None, Some("@abcde"))]
    #[case("b33846327", "b", "3384632", Some('7'), None)]
    #[case("o100007x", "o", "100007", Some('x'), None)]
    #[case("o100007X", "o", "100007", Some('X'), None)]
    #[case("b47116523@mdill", "b", "4711652", Some('3'), Some("@mdill"))]
    fn parts(
        #[case] input: &str,
        #[case] fore: &str,
        #[case] number: &str,
        #[case] check_digit: Option<char>,
        #[case] aft: Option<&str>,
    ) {
        let record = RecordNumber::parse(input).unwrap();
        assert_eq!(record.fore(), fore);
        assert_eq!(record.number(), number);
        assert_eq!(record.check_digit(), check_digit);
        assert_eq!(record.aft(), aft);
        // Parts concatenate back into the original input.
        assert_eq!(record.to_string(), input);
    }

    #[rstest]
    #[case("#b33846327")]
    #[case("b")]
    #[case(".b")]
    #[case("")]
    #[case("b12345")]
    #[case("b4711652@")]
    #[case("b4711652@toolong")]
    #[case("b123456789")]
    #[case("bb1234567")]
    #[case("..b1234567")]
    #[case("b1234567 ")]
    #[case("b12345é7")]
    #[case("\u{212A}1234567")]
    #[case("b1234567@ab-c")]
    fn rejects_malformed(#[case] input: &str) {
        let err = RecordNumber::parse(input).unwrap_err();
        assert_eq!(*err, ErrorKind::InvalidRecordNumber(input.to_string()));
    }

    #[test]
    fn accessors() {
        let record: RecordNumber = ".p1655776@abcde".parse().unwrap();
        assert!(record.marker());
        assert_eq!(record.type_char(), Some('p'));
        assert_eq!(record.suffix(), Some("abcde"));
        assert!(record.is_virtual());

        let record: RecordNumber = "1655776".parse().unwrap();
        assert!(!record.marker());
        assert_eq!(record.type_char(), None);
        assert_eq!(record.suffix(), None);
        assert!(!record.is_virtual());
    }

    #[test]
    fn with_check_digit_goes_before_suffix() {
        let record = RecordNumber::parse("p1655776@abcde").unwrap().with_check_digit('1');
        assert_eq!(record.to_string(), "p16557761@abcde");
    }

    #[test]
    fn input_conversions() {
        assert_eq!(RecordInput::from(1655776u64), RecordInput::Numeric(1655776));
        assert_eq!(RecordInput::from(1655776u32), RecordInput::Numeric(1655776));
        assert_eq!(RecordInput::from("b1655776"), RecordInput::Text("b1655776"));
        let owned = String::from("b1655776");
        assert_eq!(RecordInput::from(&owned), RecordInput::Text("b1655776"));
        assert_eq!(RecordInput::Numeric(100114).to_string(), "100114");
        assert_eq!(RecordInput::Text(".b100114").to_string(), ".b100114");
    }

    #[cfg(feature = "serde")]
    mod json {
        use crate::error::ErrorKind;
        use crate::record::RecordInput;
        use rstest::rstest;
        use serde_json::{Value, json};

        #[test]
        fn accepts_strings_and_integers() {
            let value = json!(1655776);
            assert_eq!(RecordInput::try_from(&value).unwrap(), RecordInput::Numeric(1655776));
            let value = json!("b1655776");
            assert_eq!(RecordInput::try_from(&value).unwrap(), RecordInput::Text("b1655776"));
        }

        #[rstest]
        #[case(json!(null))]
        #[case(json!({}))]
        #[case(json!([]))]
        #[case(json!(true))]
        #[case(json!(-1))]
        #[case(json!(1.5))]
        fn rejects_everything_else(#[case] value: Value) {
            let err = RecordInput::try_from(&value).unwrap_err();
            assert!(matches!(*err, ErrorKind::InvalidRecordNumber(_)));
        }
    }
}
