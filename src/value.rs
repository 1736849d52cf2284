use std::fmt::Display;

/// Which arithmetic the evaluator uses. Chosen by the caller before parsing
/// begins and fixed for the whole evaluation; the two modes are never mixed
/// within a single call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumericMode {
    Integer,
    Float,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => {
                // Ensure we always print the decimal point
                if fl.fract() == 0.0 {
                    write!(f, "{:.1}", fl)
                } else {
                    write!(f, "{}", fl)
                }
            }
        }
    }
}

/// The arithmetic capabilities the grammar needs from a numeric type. The
/// recursive descent is written once against this trait instead of once per
/// numeric mode.
///
/// Division and remainder report a zero divisor as `None`; every other
/// operation is total. Integer arithmetic wraps on overflow (including
/// `i64::MIN / -1`), so no operation here can panic.
pub(crate) trait Numeric: Copy {
    fn parse_literal(text: &str) -> Option<Self>;
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn checked_rem(self, rhs: Self) -> Option<Self>;
}

impl Numeric for i64 {
    fn parse_literal(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    fn neg(self) -> Self {
        self.wrapping_neg()
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        (rhs != 0).then(|| self.wrapping_div(rhs))
    }

    fn checked_rem(self, rhs: Self) -> Option<Self> {
        (rhs != 0).then(|| self.wrapping_rem(rhs))
    }
}

impl Numeric for f64 {
    fn parse_literal(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn neg(self) -> Self {
        -self
    }

    // A zero divisor is reported as an error rather than letting IEEE
    // infinities or NaNs propagate silently.
    fn checked_div(self, rhs: Self) -> Option<Self> {
        (rhs != 0.0).then(|| self / rhs)
    }

    // Truncated-division remainder, same sign as the dividend.
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        (rhs != 0.0).then(|| self % rhs)
    }
}
