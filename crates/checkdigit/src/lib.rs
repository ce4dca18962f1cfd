//! Check digits for integrated library system record numbers.
//!
//! Record numbers such as `b1234567` identify catalog records: an optional `.`
//! marker, a record type character, a six or seven digit body and, for virtual
//! records, an `@` suffix naming the owning agency. The body carries a
//! modulus-11 check digit, written directly after it:
//!
//! - [`calc_check_digit`] calculates the check digit of a numeric body.
//! - [`add_check_digit`] parses a record number and inserts its check digit,
//!   rejecting anything malformed or already carrying one.
//! - [`verify_check_digit`] checks an existing check digit.
//!
//! ```
//! use recnum_checkdigit::{Options, add_check_digit, calc_check_digit};
//! assert_eq!(calc_check_digit(1562237u64), 'x');
//! assert_eq!(add_check_digit("b1562237", &Options::default()).unwrap(), "b1562237x");
//! assert!(add_check_digit("b1562237x", &Options::default()).is_err());
//! ```
//!
//! Everything is pure and synchronous; there is no shared state beyond the
//! compiled record number pattern.

mod checksum;
mod consts;
pub mod error;
mod format;
mod options;
mod record;

pub use crate::checksum::calc_check_digit;
pub use crate::format::{add_check_digit, verify_check_digit};
pub use crate::options::Options;
pub use crate::record::{RecordInput, RecordNumber};
