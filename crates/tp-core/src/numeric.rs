use crate::TpError;

/// Floating point type used throughout the engine.
pub type Real = f64;

/// Absolute/relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Loose tolerance used when checking a supplied state against the
    /// substance's equation of state. Mismatches within this band are
    /// expected from rounded textbook inputs.
    pub fn state_consistency() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-3,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TpError::NonFinite { what, value: v })
    }
}
