//! Inserting and verifying check digits in record numbers.

use crate::checksum::calc_check_digit;
use crate::error::{ErrorKind, Result};
use crate::options::Options;
use crate::record::{RecordInput, RecordNumber};
use tracing::instrument;

/// Adds a check digit to a record number.
///
/// - A bare number is given its check digit directly.
/// - A record number string keeps its marker, type character and suffix, with
///   the check digit placed straight after the numeric body.
/// - Virtual records (with an `@` suffix) are returned unchanged unless
///   [`Options::add_to_virtual_records`] is set.
///
/// # Errors
///
/// - [`InvalidRecordNumber`](ErrorKind::InvalidRecordNumber) if the string is not
///   a record number.
/// - [`AlreadyHasCheckDigit`](ErrorKind::AlreadyHasCheckDigit) if it is a record
///   number followed by one extra character where the check digit would go.
///
/// # Examples
///
/// ```
/// use recnum_checkdigit::{Options, add_check_digit};
/// let options = Options::default();
/// assert_eq!(add_check_digit(1655776u64, &options).unwrap(), "16557761");
/// assert_eq!(add_check_digit(".b1655776", &options).unwrap(), ".b16557761");
/// assert_eq!(add_check_digit("p1655776@abcde", &options).unwrap(), "p1655776@abcde");
///
/// let options = Options::new().with_add_to_virtual_records(true);
/// assert_eq!(add_check_digit("p1655776@abcde", &options).unwrap(), "p16557761@abcde");
/// ```
pub fn add_check_digit<'a>(record_number: impl Into<RecordInput<'a>>, options: &Options) -> Result<String> {
    format_record(record_number.into(), options)
}

#[instrument(level = "debug", skip_all, fields(record_number = %record_number))]
fn format_record(record_number: RecordInput<'_>, options: &Options) -> Result<String> {
    let text = match record_number {
        RecordInput::Numeric(number) => {
            let check_digit = options.check_digit.unwrap_or_else(|| calc_check_digit(number));
            return Ok(format!("{number}{check_digit}"));
        },
        RecordInput::Text(text) => text,
    };
    let record = RecordNumber::parse(text)?;
    if record.check_digit().is_some() {
        exn::bail!(ErrorKind::AlreadyHasCheckDigit(text.to_string()));
    }
    if record.is_virtual() && !options.add_to_virtual_records {
        tracing::debug!(suffix = record.suffix(), "Virtual record left without a check digit");
        return Ok(record.to_string());
    }
    let check_digit = options.check_digit.unwrap_or_else(|| calc_check_digit(record.number()));
    Ok(record.with_check_digit(check_digit).to_string())
}

/// Checks the check digit already present on a record number.
///
/// Returns `Ok(false)` for a well-formed record number that has no check digit.
/// A check digit of `X` is treated the same as `x`.
///
/// Seven digits are always read as a seven digit body, so a six digit body
/// followed by a numeric check digit reports `Ok(false)`.
///
/// ```
/// use recnum_checkdigit::verify_check_digit;
/// assert!(verify_check_digit("b16557761").unwrap());
/// assert!(verify_check_digit("b1562237X").unwrap());
/// assert!(!verify_check_digit("b16557762").unwrap());
/// assert!(!verify_check_digit("b1655776").unwrap());
/// assert!(verify_check_digit("b#1655776").is_err());
/// ```
#[instrument(level = "debug")]
pub fn verify_check_digit(record_number: &str) -> Result<bool> {
    let record = RecordNumber::parse(record_number)?;
    Ok(record
        .check_digit()
        .is_some_and(|found| found.eq_ignore_ascii_case(&calc_check_digit(record.number()))))
}
