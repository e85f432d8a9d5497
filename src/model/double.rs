use super::HashCode;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::Deref,
};

/// A `f64` field value that takes part in `Eq` and `Hash`.
///
/// Two values are equal when their bit patterns are, so `NaN == NaN` and
/// `0.0 != -0.0`.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Double(f64);

impl Double {
    pub fn new(v: f64) -> Self {
        Double(v)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Double {
    fn from(v: f64) -> Self {
        Double(v)
    }
}

impl From<i32> for Double {
    fn from(v: i32) -> Self {
        Double(f64::from(v))
    }
}

impl From<Double> for f64 {
    fn from(v: Double) -> Self {
        v.0
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state)
    }
}

impl Deref for Double {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for Double {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Same text as `Double.toString` on the JVM side of the service: whole
/// numbers keep a `.0`, and magnitudes outside `[1e-3, 1e7)` use `E` notation.
impl Display for Double {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else if v != 0.0 && !(1e-3..1e7).contains(&v.abs()) {
            let s = format!("{v:E}");
            match s.split_once('E') {
                Some((mantissa, exp)) if !mantissa.contains('.') => write!(f, "{mantissa}.0E{exp}"),
                _ => f.write_str(&s),
            }
        } else if v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}

impl HashCode for Double {
    fn hash_code(&self) -> i32 {
        // every NaN hashes like the canonical one
        let bits = if self.0.is_nan() { f64::NAN.to_bits() } else { self.0.to_bits() };
        (bits ^ (bits >> 32)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::Double;
    use crate::model::HashCode;
    use std::collections::HashSet;

    #[test]
    fn equality_follows_bit_patterns() {
        assert_eq!(Double::from(f64::NAN), Double::from(f64::NAN));
        assert_ne!(Double::from(0.0), Double::from(-0.0));
        assert_eq!(Double::from(2), Double::from(2.0));
        let set: HashSet<_> = [Double::from(1.5), Double::from(1.5), Double::from(2.5)].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn whole_numbers_keep_a_decimal() {
        assert_eq!(Double::from(40.0).to_string(), "40.0");
        assert_eq!(Double::from(0.0).to_string(), "0.0");
        assert_eq!(Double::from(-0.0).to_string(), "-0.0");
        assert_eq!(Double::from(-3).to_string(), "-3.0");
        assert_eq!(Double::from(9_999_999.0).to_string(), "9999999.0");
        assert_eq!(Double::from(0.5).to_string(), "0.5");
        assert_eq!(Double::from(0.001).to_string(), "0.001");
        assert_eq!(*Double::from(3.25), 3.25);
    }

    #[test]
    fn large_and_small_magnitudes_use_exponents() {
        assert_eq!(Double::from(1e7).to_string(), "1.0E7");
        assert_eq!(Double::from(12_345_678.0).to_string(), "1.2345678E7");
        assert_eq!(Double::from(-2.5e10).to_string(), "-2.5E10");
        assert_eq!(Double::from(1e-4).to_string(), "1.0E-4");
        assert_eq!(Double::from(1.5e-5).to_string(), "1.5E-5");
    }

    #[test]
    fn special_values() {
        assert_eq!(Double::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Double::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Double::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn hash_code_folds_the_bit_pattern() {
        assert_eq!(Double::from(1.0).hash_code(), 1072693248);
        assert_eq!(Double::from(40.0).hash_code(), 1078198272);
        assert_eq!(Double::from(0.0).hash_code(), 0);
        assert_ne!(Double::from(-0.0).hash_code(), 0);
        assert_eq!(Double::from(f64::NAN).hash_code(), Double::from(-f64::NAN).hash_code());
    }
}
