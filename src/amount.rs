//! The amount field: keystroke validation and commit-time normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::DEFAULT_AMOUNT;

/// ASCII digits, an optional dot, at most two decimals. Empty matches.
///
/// `\d` would also take other scripts' digits, which `f64::from_str` can't read.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*\.?[0-9]{0,2}$").expect("amount pattern is valid")
});

/// Whether `input` is an acceptable (possibly partial) amount.
pub fn is_valid_input(input: &str) -> bool {
    AMOUNT_RE.is_match(input)
}

/// Holds the raw text of the amount input.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountField {
    value: String,
    /// The last keystroke that was turned away, until the next accepted one.
    rejected: Option<String>,
}

impl AmountField {
    pub fn new(value: &str) -> Self {
        let mut field = Self::default();
        if field.input(value) {
            field.commit();
        }
        field.rejected = None;
        field
    }

    /// Current text, exactly as typed or as last normalized.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Replace the value if `input` is valid. Returns false and keeps the
    /// previous value otherwise.
    pub fn input(&mut self, input: &str) -> bool {
        if !is_valid_input(input) {
            self.rejected = Some(input.to_string());
            return false;
        }
        self.value = input.to_string();
        self.rejected = None;
        true
    }

    /// Text of the last rejected input, if nothing valid was typed since.
    pub fn rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }

    /// Normalize to two decimals, as on leaving the field.
    pub fn commit(&mut self) {
        self.value = format!("{:.2}", self.value_f64());
    }

    /// Numeric value. Empty or a lone dot reads as zero.
    pub fn value_f64(&self) -> f64 {
        self.value.parse().unwrap_or(0.0)
    }
}

impl Default for AmountField {
    fn default() -> Self {
        Self {
            value: DEFAULT_AMOUNT.to_string(),
            rejected: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_partial_amounts() {
        for ok in ["", "0", "12", "12.", "12.3", "12.34", ".5", "."] {
            assert!(is_valid_input(ok), "should accept {ok:?}");
        }
    }

    #[test]
    fn rejects_bad_amounts() {
        for bad in ["-1", "1.234", "1,000", "abc", "1.2.3", "1e5", " 1", "٣٤", "１２", "1.٥"] {
            assert!(!is_valid_input(bad), "should reject {bad:?}");
        }
    }

    #[test]
    fn rejected_input_keeps_previous_value() {
        let mut field = AmountField::default();
        assert!(field.input("10.5"));
        assert!(!field.input("10.555"));
        assert_eq!(field.as_str(), "10.5");
    }

    #[test]
    fn non_ascii_digits_keep_previous_value() {
        let mut field = AmountField::new("5");
        assert!(!field.input("٣٤"));
        assert_eq!(field.as_str(), "5.00");
        field.commit();
        assert_eq!(field.as_str(), "5.00");
    }

    #[test]
    fn rejection_is_remembered_until_next_valid_input() {
        let mut field = AmountField::new("5");
        assert_eq!(field.rejected(), None);

        field.input("5.001");
        assert_eq!(field.rejected(), Some("5.001"));
        assert_eq!(field.as_str(), "5.00");

        field.input("6");
        assert_eq!(field.rejected(), None);
    }

    #[test]
    fn new_with_bad_value_is_not_flagged() {
        assert_eq!(AmountField::new("oops").rejected(), None);
    }

    #[test]
    fn commit_pads_to_two_decimals() {
        let mut field = AmountField::default();
        field.input("5");
        field.commit();
        assert_eq!(field.as_str(), "5.00");

        field.input("1.5");
        field.commit();
        assert_eq!(field.as_str(), "1.50");
    }

    #[test]
    fn commit_of_empty_or_dot_is_zero() {
        let mut field = AmountField::default();
        field.input("");
        field.commit();
        assert_eq!(field.as_str(), "0.00");

        field.input(".");
        field.commit();
        assert_eq!(field.as_str(), "0.00");
    }

    #[test]
    fn new_normalizes_or_falls_back() {
        assert_eq!(AmountField::new("7").as_str(), "7.00");
        assert_eq!(AmountField::new("oops").as_str(), DEFAULT_AMOUNT);
    }

    #[test]
    fn value_f64_reads_partial_input() {
        let mut field = AmountField::default();
        field.input("12.");
        assert_eq!(field.value_f64(), 12.0);
        field.input("");
        assert_eq!(field.value_f64(), 0.0);
    }
}
