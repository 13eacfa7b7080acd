// src/core/locale.rs
//
// Stateless number formatting for one locale. Passed explicitly into parsing
// and rendering; nothing here touches process-wide locale state.

use crate::error::NumberError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Decimal separator (`,` in pt-BR).
    pub decimal: char,
    /// Thousands separator (`.` in pt-BR).
    pub grouping: char,
    pub currency_symbol: &'static str,
    pub currency_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self { Self::pt_br() }
}

impl NumberFormat {
    /// Brazilian Portuguese: `1.234,56`, `R$ 1.234,56`.
    pub const fn pt_br() -> Self {
        Self {
            decimal: ',',
            grouping: '.',
            currency_symbol: "R$",
            currency_digits: 2,
        }
    }

    /* ---------------- Parsing ---------------- */

    /// `"1.234,56"` → `1234.56`. Grouping is optional but must be well formed.
    pub fn parse_decimal(&self, s: &str) -> Result<f64, NumberError> {
        let t = s.trim();
        if t.is_empty() {
            return Err(NumberError::Empty);
        }

        let (sign, body) = match t.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", t),
        };
        let (int_part, frac_part) = match body.split_once(self.decimal) {
            Some((i, f)) => (i, Some(f)),
            None => (body, None),
        };

        let digits = self.ungroup(int_part, t)?;
        let mut plain = join!(sign, &digits);
        if let Some(f) = frac_part {
            if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
                return Err(NumberError::Invalid { value: s!(t) });
            }
            plain.push('.');
            plain.push_str(f);
        }

        plain
            .parse::<f64>()
            .map_err(|_| NumberError::Invalid { value: s!(t) })
    }

    /// `"5,2%"` → `5.2`. The magnitude is kept, not divided by 100.
    pub fn parse_percent(&self, s: &str) -> Result<f64, NumberError> {
        let (num, rest) = s.split_once('%').unwrap_or((s, ""));
        if !rest.trim().is_empty() {
            return Err(NumberError::Invalid { value: s!(s.trim()) });
        }
        self.parse_decimal(num)
    }

    /// Whole, non-negative count (`"12"`, `"1.024"`).
    pub fn parse_count(&self, s: &str) -> Result<u32, NumberError> {
        let t = s.trim();
        if t.is_empty() {
            return Err(NumberError::Empty);
        }
        let digits = self.ungroup(t, t)?;
        digits
            .parse::<u32>()
            .map_err(|_| NumberError::Invalid { value: s!(t) })
    }

    /// Strip grouping separators from an integer part, validating group sizes.
    fn ungroup(&self, int_part: &str, whole: &str) -> Result<String, NumberError> {
        let all_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());

        let groups: Vec<&str> = int_part.split(self.grouping).collect();
        if !groups.iter().all(|g| all_digits(g)) {
            return Err(NumberError::Invalid { value: s!(whole) });
        }
        if groups.len() > 1 {
            let first_ok = groups[0].len() <= 3;
            let rest_ok = groups[1..].iter().all(|g| g.len() == 3);
            if !(first_ok && rest_ok) {
                return Err(NumberError::BadGrouping { value: s!(whole) });
            }
        }
        Ok(groups.concat())
    }

    /* ---------------- Formatting ---------------- */

    /// `60.0` → `"R$ 60,00"`, `1234.5` → `"R$ 1.234,50"`.
    pub fn currency(&self, v: f64) -> String {
        let fixed = format!("{:.*}", self.currency_digits, v.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut out = s!();
        if v < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            out.push('-');
        }
        out.push_str(self.currency_symbol);
        out.push(' ');
        out.push_str(&self.group(int_part));
        if !frac_part.is_empty() {
            out.push(self.decimal);
            out.push_str(frac_part);
        }
        out
    }

    /// Shortest form at 12 significant digits, no grouping: `6.0` → `"6"`,
    /// `5.2` → `"5,2"`, `1e-11` → `"1e-11"`. Exponents below -4 or at 12 and
    /// above switch to scientific notation.
    pub fn general(&self, v: f64) -> String {
        const SIG: i32 = 12;
        if !v.is_finite() {
            return format!("{v}");
        }
        // Round to SIG digits first; the exponent of the rounded value picks the form.
        let sci = format!("{:.*e}", (SIG - 1) as usize, v);
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        let out = if exp < -4 || exp >= SIG {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
        } else {
            let fixed = format!("{:.*}", (SIG - 1 - exp) as usize, v);
            trim_fraction(&fixed).to_owned()
        };
        let out = if out == "-0" { s!("0") } else { out };
        out.replace('.', &self.decimal.to_string())
    }

    /// Insert grouping separators into a run of ASCII digits.
    fn group(&self, digits: &str) -> String {
        let n = digits.len();
        let mut out = String::with_capacity(n + n / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (n - i) % 3 == 0 {
                out.push(self.grouping);
            }
            out.push(ch);
        }
        out
    }
}

/// Drop trailing fractional zeros, and the point if nothing is left after it.
fn trim_fraction(num: &str) -> &str {
    if num.contains('.') {
        num.trim_end_matches('0').trim_end_matches('.')
    } else {
        num
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BR: NumberFormat = NumberFormat::pt_br();

    #[test]
    fn decimal_plain_and_grouped() {
        assert_eq!(BR.parse_decimal("1.234,56").unwrap(), 1234.56);
        assert_eq!(BR.parse_decimal("95,50").unwrap(), 95.5);
        assert_eq!(BR.parse_decimal("0,70").unwrap(), 0.7);
        assert_eq!(BR.parse_decimal("200.000.000").unwrap(), 200_000_000.0);
        assert_eq!(BR.parse_decimal(" 42 ").unwrap(), 42.0);
        assert_eq!(BR.parse_decimal("-3,25").unwrap(), -3.25);
    }

    #[test]
    fn decimal_rejects_malformed() {
        assert_eq!(BR.parse_decimal(""), Err(NumberError::Empty));
        assert_eq!(BR.parse_decimal("   "), Err(NumberError::Empty));
        assert!(matches!(BR.parse_decimal("abc"), Err(NumberError::Invalid { .. })));
        assert!(matches!(BR.parse_decimal("1,234.56"), Err(NumberError::Invalid { .. })));
        assert!(matches!(BR.parse_decimal("12.5"), Err(NumberError::BadGrouping { .. })));
        assert!(matches!(BR.parse_decimal("1.2345,0"), Err(NumberError::BadGrouping { .. })));
        assert!(matches!(BR.parse_decimal("12,"), Err(NumberError::Invalid { .. })));
        assert!(matches!(BR.parse_decimal(",5"), Err(NumberError::Invalid { .. })));
        assert!(matches!(BR.parse_decimal("1,2,3"), Err(NumberError::Invalid { .. })));
        assert!(matches!(BR.parse_decimal("-"), Err(NumberError::Invalid { .. })));
    }

    #[test]
    fn percent_is_decimal_before_sign() {
        assert_eq!(BR.parse_percent("5,2%").unwrap(), 5.2);
        assert_eq!(BR.parse_percent("0,00%").unwrap(), 0.0);
        assert_eq!(BR.parse_percent("-1,5%").unwrap(), -1.5);
        assert_eq!(BR.parse_percent("12,34 %").unwrap(), BR.parse_decimal("12,34").unwrap());
        assert!(BR.parse_percent("%").is_err());
        assert!(BR.parse_percent("5%x").is_err());
    }

    #[test]
    fn count_accepts_grouping_only() {
        assert_eq!(BR.parse_count("7").unwrap(), 7);
        assert_eq!(BR.parse_count("1.024").unwrap(), 1024);
        assert!(BR.parse_count("7,5").is_err());
        assert!(BR.parse_count("-1").is_err());
        assert_eq!(BR.parse_count(""), Err(NumberError::Empty));
    }

    #[test]
    fn currency_groups_and_rounds() {
        assert_eq!(BR.currency(60.0), "R$ 60,00");
        assert_eq!(BR.currency(1234.5), "R$ 1.234,50");
        assert_eq!(BR.currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(BR.currency(0.005), "R$ 0,01");
        assert_eq!(BR.currency(-12.3), "-R$ 12,30");
        assert_eq!(BR.currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn general_is_shortest() {
        assert_eq!(BR.general(6.0), "6");
        assert_eq!(BR.general(5.2), "5,2");
        assert_eq!(BR.general(0.1 + 0.2), "0,3");
        assert_eq!(BR.general(1234.5), "1234,5");
        assert_eq!(BR.general(-0.0), "0");
    }

    #[test]
    fn general_keeps_twelve_significant_digits() {
        assert_eq!(BR.general(1e-11), "1e-11");
        assert_eq!(BR.general(-2.5e-7), "-2,5e-07");
        assert_eq!(BR.general(0.0001), "0,0001");
        assert_eq!(BR.general(0.000123456789012345), "0,000123456789012");
        assert_eq!(BR.general(123456789012.0), "123456789012");
        assert_eq!(BR.general(123456789012345.0), "1,23456789012e+14");
        assert_eq!(BR.general(999999999999.9), "1e+12");
        assert_eq!(BR.general(1e300), "1e+300");
    }
}
