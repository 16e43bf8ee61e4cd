//! Cell content classification.

/// A cell's content, classified for sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Content that reads as a number once currency signs, separators and whitespace are removed.
    Numeric(f64),
    /// Anything else, kept verbatim.
    Alphabetic(String),
}

impl CellValue {
    /// Classifies cell text.
    ///
    /// `$`, `,` and whitespace are stripped; if what remains is a complete number literal
    /// (optional sign, digits with an optional fraction, optional exponent, or `Infinity`) the
    /// cell is numeric. Partial numbers such as `12px` or `1e` stay alphabetic.
    ///
    /// ```
    /// use datatable_lib::sort::CellValue;
    ///
    /// assert_eq!(CellValue::classify("$1,200"), CellValue::Numeric(1200.0));
    /// assert_eq!(CellValue::classify("N/A"), CellValue::Alphabetic("N/A".into()));
    /// ```
    pub fn classify(text: &str) -> Self {
        let stripped: String = text
            .chars()
            .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
            .collect();

        match parse_number(&stripped) {
            Some(value) => Self::Numeric(value),
            None => Self::Alphabetic(text.to_string()),
        }
    }

    /// Returns `true` for numeric cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }
    text.parse().ok()
}

/// `digits [. digits] [(e|E) [+|-] digits]`, with at least one mantissa digit.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let integer_digits = count_digits(&bytes[pos..]);
    pos += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        fraction_digits = count_digits(&bytes[pos..]);
        pos += fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent_digits = count_digits(&bytes[pos..]);
        if exponent_digits == 0 {
            return false;
        }
        pos += exponent_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_and_separators() {
        assert_eq!(CellValue::classify("$1,200"), CellValue::Numeric(1200.0));
        assert_eq!(CellValue::classify(" $ 5 "), CellValue::Numeric(5.0));
        assert_eq!(CellValue::classify("-$3.50"), CellValue::Numeric(-3.5));
        assert_eq!(CellValue::classify("1 000 000"), CellValue::Numeric(1_000_000.0));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(CellValue::classify(".5"), CellValue::Numeric(0.5));
        assert_eq!(CellValue::classify("5."), CellValue::Numeric(5.0));
        assert_eq!(CellValue::classify("+7"), CellValue::Numeric(7.0));
        assert_eq!(CellValue::classify("1e3"), CellValue::Numeric(1000.0));
        assert_eq!(CellValue::classify("2.5E-1"), CellValue::Numeric(0.25));
        assert_eq!(CellValue::classify("Infinity"), CellValue::Numeric(f64::INFINITY));
        assert_eq!(CellValue::classify("-Infinity"), CellValue::Numeric(f64::NEG_INFINITY));
    }

    #[test]
    fn test_alphabetic() {
        for text in ["N/A", "", "   ", "12px", "1e", "0x10", "nan", "inf", "1.2.3", ".", "-", "$"] {
            assert_eq!(
                CellValue::classify(text),
                CellValue::Alphabetic(text.to_string()),
                "{text:?} should be alphabetic"
            );
        }
    }

    #[test]
    fn test_alphabetic_keeps_original_text() {
        assert_eq!(
            CellValue::classify("$ Ann, Bob"),
            CellValue::Alphabetic("$ Ann, Bob".to_string())
        );
        assert!(!CellValue::classify("Bob").is_numeric());
        assert!(CellValue::classify("42").is_numeric());
    }
}
