use crate::foundation::error::{ZcError, ZcResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Parse a `WIDTHxHEIGHT` pair (e.g. `1920x1080`) into a [`Size`].
///
/// Both components must be finite and `>= 0`; `X` is accepted as separator too.
pub fn parse_dimensions(s: &str) -> ZcResult<Size> {
    let (w, h) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| ZcError::validation(format!("expected WIDTHxHEIGHT, got '{s}'")))?;
    let w = parse_extent(w, s)?;
    let h = parse_extent(h, s)?;
    Ok(Size::new(w, h))
}

fn parse_extent(part: &str, whole: &str) -> ZcResult<f64> {
    let v: f64 = part
        .trim()
        .parse()
        .map_err(|_| ZcError::validation(format!("invalid dimension '{part}' in '{whole}'")))?;
    if !v.is_finite() || v < 0.0 {
        return Err(ZcError::validation(format!(
            "dimension '{part}' in '{whole}' must be finite and >= 0"
        )));
    }
    Ok(v)
}

/// True if `v` is finite and within `[0, 1]`.
pub(crate) fn is_unit_fraction(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

/// True if both extents are finite and strictly positive.
pub(crate) fn is_positive_size(s: Size) -> bool {
    s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
