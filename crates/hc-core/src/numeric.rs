use crate::HcError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HcError::NonFinite { what, value: v })
    }
}

/// Accepts only finite, strictly positive values.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, HcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(HcError::InvalidArg { what })
    }
}
