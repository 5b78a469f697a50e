//! Banner line parsing
//!
//! The first line of a Matrix Market file has the form
//!
//! ```text
//! %%MatrixMarket <object> <format> <field> <symmetry>
//! ```
//!
//! The four words are matched case-insensitively.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::constants::{BANNER, BANNER_FIELDS};
use crate::error::{FormatError, Result};
use crate::matrix_market::lines::LineReader;

/// Kind of object stored in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Matrix,
    Vector,
}

/// Storage layout of the data section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Sparse `row col value` triplets
    Coordinate,
    /// Dense column-major listing
    Array,
}

/// Numeric type of the stored values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Real,
    Integer,
    Complex,
    /// No value column, every entry is an implicit one
    Pattern,
}

impl Field {
    /// Number of value tokens following `row col` on a data line
    pub fn value_tokens(&self) -> usize {
        match self {
            Field::Pattern => 0,
            Field::Real | Field::Integer => 1,
            Field::Complex => 2,
        }
    }
}

/// Symmetry structure declared by the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

impl Symmetry {
    /// False when each off-diagonal entry implies a mirrored entry
    pub fn is_general(&self) -> bool {
        matches!(self, Symmetry::General)
    }
}

macro_rules! banner_word {
    ($ty:ident { $($variant:ident => $word:literal),+ $(,)? }) => {
        impl $ty {
            /// Banner spelling of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $word),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = FormatError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($word) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(FormatError::InvalidBanner)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

banner_word!(Object { Matrix => "matrix", Vector => "vector" });
banner_word!(Format { Coordinate => "coordinate", Array => "array" });
banner_word!(Field {
    Real => "real",
    Integer => "integer",
    Complex => "complex",
    Pattern => "pattern",
});
banner_word!(Symmetry {
    General => "general",
    Symmetric => "symmetric",
    SkewSymmetric => "skew-symmetric",
    Hermitian => "hermitian",
});

/// Parsed banner of a coordinate matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub object: Object,
    pub format: Format,
    pub field: Field,
    pub symmetry: Symmetry,
}

impl Header {
    /// Header of a plain `matrix coordinate <field> general` file
    pub fn general(field: Field) -> Self {
        Self {
            object: Object::Matrix,
            format: Format::Coordinate,
            field,
            symmetry: Symmetry::General,
        }
    }

    /// Parses a banner line.
    ///
    /// Only `matrix coordinate` banners are accepted. Recognized but
    /// unsupported objects and formats get their own errors so callers can
    /// tell a dense file from a corrupt one.
    pub fn parse(line: &str) -> std::result::Result<Self, FormatError> {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(BANNER) {
            return Err(FormatError::InvalidBanner);
        }

        let words: Vec<&str> = tokens.collect();
        if words.len() != BANNER_FIELDS {
            return Err(FormatError::InvalidBanner);
        }

        let object: Object = words[0].parse()?;
        let format: Format = words[1].parse()?;
        let field: Field = words[2].parse()?;
        let symmetry: Symmetry = words[3].parse()?;

        if object != Object::Matrix {
            return Err(FormatError::UnsupportedObject(object.to_string()));
        }
        if format != Format::Coordinate {
            return Err(FormatError::UnsupportedFormat(format.to_string()));
        }

        Ok(Self {
            object,
            format,
            field,
            symmetry,
        })
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            BANNER, self.object, self.format, self.field, self.symmetry
        )
    }
}

/// Reads and validates the banner from the first line of `lines`
pub fn read_header<R: BufRead>(lines: &mut LineReader<R>) -> Result<Header> {
    let line = match lines.next_line()? {
        Some((_, line)) => line,
        None => return Err(FormatError::InvalidBanner.into()),
    };

    let header = Header::parse(line)?;
    log::debug!("Matrix Market header: {}", header);
    Ok(header)
}
