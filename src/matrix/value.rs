//! Value types a Matrix Market file can be loaded into
//!
//! The banner's field word is resolved once into one of these types; the
//! per-line parsing loop is then monomorphized over it.

use std::fmt;
use std::io::{self, Write};
use std::ops::Neg;

use num_complex::Complex64;
use num_traits::Num;

use crate::matrix_market::header::{Field, Symmetry};

/// Element type of a loaded matrix
pub trait MatrixValue: Copy + Num + Neg<Output = Self> + fmt::Debug {
    /// Field written to the banner when saving a matrix of this type
    const FIELD: Field;

    /// Name used in error messages
    const TYPE_NAME: &'static str;

    /// Whether values of `field` can be represented without loss of meaning
    fn accepts(field: Field) -> bool;

    /// Parses the value tokens of one data line.
    ///
    /// `tokens` holds exactly `field.value_tokens()` entries. Pattern fields
    /// never reach this method.
    fn parse_tokens(field: Field, tokens: &[&str]) -> Option<Self>;

    /// Complex conjugate; identity for real types
    fn conj(self) -> Self {
        self
    }

    /// Negation, or `None` when the result is not representable
    fn checked_negate(self) -> Option<Self> {
        Some(-self)
    }

    /// Value stored at the mirrored position of an off-diagonal entry.
    ///
    /// `None` when a skew-symmetric value has no representable negation.
    fn mirrored(self, symmetry: Symmetry) -> Option<Self> {
        match symmetry {
            Symmetry::General | Symmetry::Symmetric => Some(self),
            Symmetry::SkewSymmetric => self.checked_negate(),
            Symmetry::Hermitian => Some(self.conj()),
        }
    }

    /// Writes the value tokens of a data line
    fn write_tokens<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

impl MatrixValue for f64 {
    const FIELD: Field = Field::Real;
    const TYPE_NAME: &'static str = "f64";

    fn accepts(field: Field) -> bool {
        matches!(field, Field::Real | Field::Integer | Field::Pattern)
    }

    fn parse_tokens(field: Field, tokens: &[&str]) -> Option<Self> {
        match field {
            Field::Real => tokens.first()?.parse().ok(),
            Field::Integer => tokens.first()?.parse::<i64>().ok().map(|v| v as f64),
            Field::Complex | Field::Pattern => None,
        }
    }

    fn write_tokens<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl MatrixValue for i64 {
    const FIELD: Field = Field::Integer;
    const TYPE_NAME: &'static str = "i64";

    fn accepts(field: Field) -> bool {
        matches!(field, Field::Integer | Field::Pattern)
    }

    fn parse_tokens(field: Field, tokens: &[&str]) -> Option<Self> {
        match field {
            Field::Integer => tokens.first()?.parse().ok(),
            Field::Real | Field::Complex | Field::Pattern => None,
        }
    }

    fn checked_negate(self) -> Option<Self> {
        self.checked_neg()
    }

    fn write_tokens<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl MatrixValue for Complex64 {
    const FIELD: Field = Field::Complex;
    const TYPE_NAME: &'static str = "Complex64";

    fn accepts(_field: Field) -> bool {
        true
    }

    fn parse_tokens(field: Field, tokens: &[&str]) -> Option<Self> {
        match field {
            Field::Complex => {
                let re = tokens.first()?.parse().ok()?;
                let im = tokens.get(1)?.parse().ok()?;
                Some(Complex64::new(re, im))
            }
            Field::Real | Field::Integer => {
                f64::parse_tokens(field, tokens).map(|re| Complex64::new(re, 0.0))
            }
            Field::Pattern => None,
        }
    }

    fn conj(self) -> Self {
        Complex64::new(self.re, -self.im)
    }

    fn write_tokens<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{} {}", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_parses_real_and_integer() {
        assert_eq!(f64::parse_tokens(Field::Real, &["1.5e2"]), Some(150.0));
        assert_eq!(f64::parse_tokens(Field::Integer, &["-7"]), Some(-7.0));
        assert_eq!(f64::parse_tokens(Field::Integer, &["1.5"]), None);
        assert_eq!(f64::parse_tokens(Field::Real, &["abc"]), None);
    }

    #[test]
    fn test_field_acceptance() {
        assert!(f64::accepts(Field::Pattern));
        assert!(!f64::accepts(Field::Complex));
        assert!(i64::accepts(Field::Integer));
        assert!(!i64::accepts(Field::Real));
        assert!(Complex64::accepts(Field::Real));
    }

    #[test]
    fn test_mirrored_values() {
        assert_eq!(2.5f64.mirrored(Symmetry::Symmetric), Some(2.5));
        assert_eq!(2.5f64.mirrored(Symmetry::SkewSymmetric), Some(-2.5));
        assert_eq!(2.5f64.mirrored(Symmetry::Hermitian), Some(2.5));
        assert_eq!(4i64.mirrored(Symmetry::SkewSymmetric), Some(-4));

        let z = Complex64::new(1.0, 2.0);
        assert_eq!(z.mirrored(Symmetry::Hermitian), Some(Complex64::new(1.0, -2.0)));
        assert_eq!(
            z.mirrored(Symmetry::SkewSymmetric),
            Some(Complex64::new(-1.0, -2.0))
        );
    }

    #[test]
    fn test_skew_mirror_of_i64_min_is_unrepresentable() {
        assert_eq!(i64::MIN.mirrored(Symmetry::SkewSymmetric), None);
        assert_eq!(i64::MIN.mirrored(Symmetry::Symmetric), Some(i64::MIN));
        assert_eq!(i64::MAX.mirrored(Symmetry::SkewSymmetric), Some(-i64::MAX));
    }

    #[test]
    fn test_complex_tokens() {
        assert_eq!(
            Complex64::parse_tokens(Field::Complex, &["1.0", "-0.5"]),
            Some(Complex64::new(1.0, -0.5))
        );
        assert_eq!(Complex64::parse_tokens(Field::Complex, &["1.0"]), None);

        let mut out = Vec::new();
        Complex64::new(3.0, -1.5).write_tokens(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3 -1.5");
    }
}
