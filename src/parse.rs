use crate::errors::Error;
use crate::intervals::Interval;
use std::str::FromStr;

impl FromStr for Interval {
    type Err = Error;

    /// Parses human-readable interval notation.
    ///
    /// Whitespace is ignored, any combination of `[ ] ( )` may enclose the
    /// bounds (no open/closed semantics), and `; : |` are accepted as
    /// separators next to `,`.  A bound that is empty, `none`, `null`,
    /// `nan` or an infinity token is undefined and becomes the matching
    /// infinity; with no separator at all the whole interval is unbounded.
    ///
    /// ```
    /// use interval_arith::Interval;
    /// assert_eq!("[42,]".parse::<Interval>().unwrap(),
    ///            Interval::from_bounds(Some(42.0), None));
    /// assert_eq!("( , )".parse::<Interval>().unwrap(), Interval::unbounded());
    /// ```
    fn from_str(text: &str) -> Result<Self, Error> {
        log::trace!("parsing interval from {text:?}");
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .map(|c| match c {
                ';' | ':' | '|' => ',',
                other => other,
            })
            .collect();
        let cleaned =
            cleaned.trim_matches(|c| matches!(c, '[' | ']' | '(' | ')'));
        let fields: Vec<&str> = cleaned.split(',').collect();
        match fields.as_slice() {
            // No separator at all: unbounded, whatever the single field says
            [_] => Ok(Interval::unbounded()),
            [lower, upper] => Ok(Interval::from_bounds(
                parse_limit(lower)?,
                parse_limit(upper)?,
            )),
            more => Err(Error::ParseError(format!(
                "too many fields, must be at most 2, found {}",
                more.len()
            ))),
        }
    }
}

/// Parses one bound.  `None` denotes an undefined (open) limit.
fn parse_limit(text: &str) -> Result<Option<f64>, Error> {
    let text = text.trim();
    if matches!(text, "" | "none" | "null") {
        return Ok(None);
    }
    if let Some(value) = parse_int(text) {
        return Ok(Some(value));
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        // nan, inf, -inf, infinity, ... are undefined limits
        Ok(_) => Ok(None),
        Err(_) => Err(Error::ParseError(format!("invalid bound {text:?}"))),
    }
}

/// Integer parsing accepting the `0x`, `0o` and `0b` radix prefixes with an
/// optional sign.
fn parse_int(text: &str) -> Option<f64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    let parsed = if let Some(hex) = digits.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(oct) = digits.strip_prefix("0o") {
        i64::from_str_radix(oct, 8)
    } else if let Some(bin) = digits.strip_prefix("0b") {
        i64::from_str_radix(bin, 2)
    } else {
        digits.parse::<i64>()
    };
    parsed.ok().map(|value| sign * value as f64)
}

#[cfg(test)]
mod test {
    use crate::errors::Error;
    use crate::intervals::Interval;
    use itertools::iproduct;

    fn parsed(text: &str) -> Interval {
        text.parse::<Interval>().unwrap()
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parsed("[3,10]"), Interval::new(3.0, 10.0));
        assert_eq!(parsed("[42,]"), Interval::from_bounds(Some(42.0), None));
        assert_eq!(parsed("[,42]"), Interval::from_bounds(None, Some(42.0)));
        assert_eq!(parsed("(,5]"), Interval::from_bounds(None, Some(5.0)));
        assert_eq!(parsed("[nan,nan]"), Interval::unbounded());
        assert_eq!(parsed("[,]"), Interval::unbounded());
        assert_eq!(parsed("[-10,-2]"), Interval::new(-10.0, -2.0));
    }

    #[test]
    fn test_parse_swaps_falling_bounds() {
        assert_eq!(parsed("[10,3]"), Interval::new(3.0, 10.0));
        assert_eq!(parsed("[0x10,0b11]"), Interval::new(3.0, 16.0));
    }

    #[test]
    fn test_parse_radix_prefixes() {
        assert_eq!(parsed("[0x10,0x20]"), Interval::new(16.0, 32.0));
        assert_eq!(parsed("[0o17,]"), Interval::from_bounds(Some(15.0), None));
        assert_eq!(parsed("[0b101,0b111]"), Interval::new(5.0, 7.0));
        assert_eq!(parsed("[-0x10,0x10]"), Interval::new(-16.0, 16.0));
        assert_eq!(parsed("[+0x10,+0x20]"), Interval::new(16.0, 32.0));
        // Uppercase prefixes are folded like everything else
        assert_eq!(parsed("[0X10,0B11]"), Interval::new(3.0, 16.0));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parsed("[1.5,2.5]"), Interval::new(1.5, 2.5));
        assert_eq!(parsed("[1.5e2,2.5e2]"), Interval::new(150.0, 250.0));
        assert_eq!(parsed("[-10.6,-2.6]"), Interval::new(-10.6, -2.6));
        assert_eq!(parsed("[.5,1]"), Interval::new(0.5, 1.0));
    }

    #[test]
    fn test_parse_separators_and_brackets() {
        assert_eq!(parsed("3,10"), Interval::new(3.0, 10.0));
        assert_eq!(parsed("3;10"), Interval::new(3.0, 10.0));
        assert_eq!(parsed("(3:10)"), Interval::new(3.0, 10.0));
        assert_eq!(parsed("]3|10["), Interval::new(3.0, 10.0));
        assert_eq!(parsed("[[3,10]]"), Interval::new(3.0, 10.0));
        assert_eq!(parsed("  [ 3 , 10 ] "), Interval::new(3.0, 10.0));
    }

    #[test]
    fn test_parse_single_field_is_unbounded() {
        assert_eq!(parsed(""), Interval::unbounded());
        assert_eq!(parsed("[]"), Interval::unbounded());
        assert_eq!(parsed("()"), Interval::unbounded());
        assert_eq!(parsed("]["), Interval::unbounded());
        // Even a lone number: without a separator there are no bounds
        assert_eq!(parsed("[42]"), Interval::unbounded());
    }

    #[test]
    fn test_parse_undefined_token_sweep() {
        let lefts = ['[', '(', ']'];
        let rights = [')', ']', '['];
        let separators = [',', ';', ':', '|'];
        let undefined = [
            "", "None", "null", "nan", "inf", "-inf", "Infinity", "-Infinity",
        ];
        for (l, lo, sep, up, r) in
            iproduct!(lefts, undefined, separators, undefined, rights)
        {
            let text = format!("{l}{lo}{sep}{up}{r}");
            assert_eq!(parsed(&text), Interval::unbounded(), "input {text:?}");
        }
    }

    #[test]
    fn test_parse_mixed_defined_undefined() {
        assert_eq!(parsed("[42,none]"), Interval::from_bounds(Some(42.0), None));
        assert_eq!(parsed("[42,inf]"), Interval::from_bounds(Some(42.0), None));
        assert_eq!(parsed("[NULL;42]"), Interval::from_bounds(None, Some(42.0)));
        assert_eq!(parsed("(-inf,42)"), Interval::from_bounds(None, Some(42.0)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "[1,2,3]".parse::<Interval>(),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(
            "1;2;3;4".parse::<Interval>(),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(
            "[abc,3]".parse::<Interval>(),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(
            "[1,2two]".parse::<Interval>(),
            Err(Error::ParseError(_))
        ));
    }
}
