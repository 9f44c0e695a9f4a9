//! Train number type.

use std::fmt;

/// Number of digits in a train number.
pub const TRAIN_NUMBER_LEN: usize = 5;

/// Error returned when parsing an invalid train number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {reason}")]
pub struct InvalidTrainNumber {
    reason: &'static str,
}

impl InvalidTrainNumber {
    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A validated 5-digit train number.
///
/// Train numbers are exactly five ASCII decimal digits. The value is forwarded
/// verbatim to the upstream API, so no normalisation is applied: surrounding
/// whitespace or non-ASCII digits are rejected rather than cleaned up.
///
/// # Examples
///
/// ```
/// use train_lookup::domain::TrainNumber;
///
/// let number = TrainNumber::parse("12951").unwrap();
/// assert_eq!(number.as_str(), "12951");
///
/// assert!(TrainNumber::parse("1295").is_err());
/// assert!(TrainNumber::parse("12a51").is_err());
/// assert!(TrainNumber::parse(" 12951").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainNumber([u8; TRAIN_NUMBER_LEN]);

impl TrainNumber {
    /// Parse a train number from a string.
    ///
    /// The input must be exactly 5 ASCII digits (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidTrainNumber> {
        let bytes: [u8; TRAIN_NUMBER_LEN] =
            s.as_bytes().try_into().map_err(|_| InvalidTrainNumber {
                reason: "must be exactly 5 characters",
            })?;

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidTrainNumber {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(TrainNumber(bytes))
    }

    /// Returns the train number as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.as_str())
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9]{5}") {
            let number = TrainNumber::parse(&s).unwrap();
            prop_assert_eq!(number.as_str(), s.as_str());
        }

        /// Wrong-length digit strings are rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9]{0,4}|[0-9]{6,12}") {
            prop_assert!(TrainNumber::parse(&s).is_err());
        }

        /// Any string containing a non-digit is rejected
        #[test]
        fn non_digit_rejected(prefix in "[0-9]{0,4}", c in "[^0-9]", suffix in "[0-9]{0,4}") {
            let s = format!("{prefix}{c}{suffix}");
            prop_assert!(TrainNumber::parse(&s).is_err());
        }

        /// Acceptance matches the `^\d{5}$` rule with ASCII digits
        #[test]
        fn accepts_iff_five_ascii_digits(s in "\\PC{0,8}") {
            let expected = s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit());
            prop_assert_eq!(TrainNumber::parse(&s).is_ok(), expected);
        }
    }
}
