//! CLDR plural operands.
//!
//! | Operand | Meaning |
//! |---------|---------|
//! | `n` | absolute value of the number |
//! | `i` | integer digits of `n` |
//! | `v` | number of visible fraction digits, trailing zeros trimmed |
//! | `f` | fractional part of `n` as a value (`1.25` → `0.25`) |
//! | `t` | visible fraction digits as an integer (`1.25` → `25`) |

/// The five operands a plural rule can test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    pub n: f64,
    pub i: f64,
    pub v: f64,
    pub f: f64,
    pub t: f64,
}

impl PluralOperands {
    pub fn from_f64(number: f64) -> Self {
        let n = if number.is_finite() { number.abs() } else { 0.0 };
        let i = n.trunc();

        // Shortest round-trip representation gives exactly the visible digits.
        let repr = n.to_string();
        let digits = match repr.split_once('.') {
            Some((_, fraction)) => fraction.trim_end_matches('0'),
            None => "",
        };

        let v = digits.len() as f64;
        let t = if digits.is_empty() {
            0.0
        } else {
            digits.parse::<f64>().unwrap_or(0.0)
        };

        Self {
            n,
            i,
            v,
            f: n - i,
            t,
        }
    }

    /// Value of a single-letter operand variable.
    pub fn get(&self, name: char) -> Option<f64> {
        match name {
            'n' => Some(self.n),
            'i' => Some(self.i),
            'v' => Some(self.v),
            'f' => Some(self.f),
            't' => Some(self.t),
            _ => None,
        }
    }
}

impl From<f64> for PluralOperands {
    fn from(number: f64) -> Self {
        Self::from_f64(number)
    }
}

impl From<i64> for PluralOperands {
    fn from(number: i64) -> Self {
        Self::from_f64(number as f64)
    }
}
