//! Modulus-11 check digit calculation.

use crate::record::RecordInput;
use std::iter;

const MODULUS: u64 = 11;
const FIRST_WEIGHT: u64 = 2;

/// Calculates the modulus-11 check digit of a numeric record body.
///
/// Digits are weighted from the least significant upwards, starting at 2. The
/// check digit is the weighted sum modulo 11, with a remainder of 10 written
/// as `x`.
///
/// The input is trusted to be digits only: this is the job of
/// [`add_check_digit`](crate::add_check_digit) and
/// [`RecordNumber::parse`](crate::RecordNumber::parse). Any non-digit
/// characters in a string are skipped.
///
/// # Examples
///
/// ```
/// use recnum_checkdigit::calc_check_digit;
/// assert_eq!(calc_check_digit(1655776u64), '1');
/// assert_eq!(calc_check_digit("1655776"), '1');
/// assert_eq!(calc_check_digit(585345u64), 'x');
/// ```
pub fn calc_check_digit<'a>(record_number: impl Into<RecordInput<'a>>) -> char {
    let sum = match record_number.into() {
        RecordInput::Numeric(number) => weighted_sum(digits(number)),
        RecordInput::Text(text) => weighted_sum(
            text.bytes()
                .rev()
                .filter(u8::is_ascii_digit)
                .map(|b| u64::from(b - b'0')),
        ),
    };
    match sum % MODULUS {
        remainder @ 0..=9 => char::from(b'0' + remainder as u8),
        _ => 'x',
    }
}

/// Digits of `number`, least significant first. Zero has no digits.
fn digits(number: u64) -> impl Iterator<Item = u64> {
    iter::successors(Some(number).filter(|n| *n > 0), |n| Some(n / 10).filter(|n| *n > 0)).map(|n| n % 10)
}

fn weighted_sum(digits: impl Iterator<Item = u64>) -> u64 {
    digits.zip(FIRST_WEIGHT..).map(|(digit, weight)| digit * weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100114, '0')]
    #[case(2539964, '0')]
    #[case(100610, '1')]
    #[case(1655776, '1')]
    #[case(583623, '2')]
    #[case(1629736, '2')]
    #[case(572288, '3')]
    #[case(4093863, '3')]
    #[case(284683, '4')]
    #[case(3898776, '4')]
    #[case(395792, '5')]
    #[case(3040121, '5')]
    #[case(542671, '6')]
    #[case(2626834, '6')]
    #[case(459573, '7')]
    #[case(2699873, '7')]
    #[case(581326, '8')]
    #[case(2054794, '8')]
    #[case(539148, '9')]
    #[case(1203395, '9')]
    #[case(585345, 'x')]
    #[case(1562237, 'x')]
    fn known_check_digits(#[case] record_number: u64, #[case] expected: char) {
        assert_eq!(calc_check_digit(record_number), expected);
        assert_eq!(calc_check_digit(record_number.to_string().as_str()), expected);
    }

    #[test]
    fn zero_has_no_digits() {
        assert_eq!(calc_check_digit(0u64), '0');
        assert_eq!(calc_check_digit(""), '0');
        assert_eq!(calc_check_digit("0"), '0');
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(calc_check_digit("0100114"), calc_check_digit(100114u64));
        assert_eq!(calc_check_digit("0585345"), 'x');
    }

    #[test]
    fn digits_least_significant_first() {
        assert_eq!(digits(1203).collect::<Vec<_>>(), vec![3, 0, 2, 1]);
        assert_eq!(digits(0).count(), 0);
    }
}
