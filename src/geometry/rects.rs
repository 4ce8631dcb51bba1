//! Pure rect helpers: aspect ratios, aspect-preserving containment and frame mapping.

use crate::{
    animation::lerp::Lerp,
    foundation::core::{Rect, Size},
    foundation::error::{KenBurnsError, KenBurnsResult},
};

/// Fail with [`KenBurnsError::DegenerateRect`] unless `r` has finite, positive extent.
pub fn validate_rect(r: Rect) -> KenBurnsResult<()> {
    let (w, h) = (r.width(), r.height());
    if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 && r.x0.is_finite() && r.y0.is_finite()
    {
        Ok(())
    } else {
        Err(KenBurnsError::degenerate_rect(w, h))
    }
}

/// Width over height.
pub fn aspect_ratio(r: Rect) -> KenBurnsResult<f64> {
    validate_rect(r)?;
    Ok(r.width() / r.height())
}

fn validate_aspect(aspect: f64) -> KenBurnsResult<()> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(KenBurnsError::validation(format!(
            "aspect ratio must be finite and > 0, got {aspect}"
        )))
    }
}

/// Extra scale needed, after matching widths, for content of `inner_aspect` to fully
/// cover `outer`.
///
/// Content wider than `outer` is limited by height and needs `inner / outer` more;
/// narrower or equal content already covers and gets `1.0`.
pub fn center_crop_into(outer: Rect, inner_aspect: f64) -> KenBurnsResult<f64> {
    validate_aspect(inner_aspect)?;
    let outer_aspect = aspect_ratio(outer)?;
    if inner_aspect > outer_aspect {
        Ok(inner_aspect / outer_aspect)
    } else {
        Ok(1.0)
    }
}

/// Extra scale needed, after matching widths, for content of `inner_aspect` to fit
/// entirely inside `outer` (letterboxed). Always `<= 1.0`.
pub fn fit_center_into(outer: Rect, inner_aspect: f64) -> KenBurnsResult<f64> {
    validate_aspect(inner_aspect)?;
    let outer_aspect = aspect_ratio(outer)?;
    if inner_aspect < outer_aspect {
        Ok(inner_aspect / outer_aspect)
    } else {
        Ok(1.0)
    }
}

/// Largest size with `aspect` that fits inside `drawable`.
pub fn max_crop(drawable: Rect, aspect: f64) -> KenBurnsResult<Size> {
    validate_aspect(aspect)?;
    let drawable_aspect = aspect_ratio(drawable)?;
    let (dw, dh) = (drawable.width(), drawable.height());
    let size = if drawable_aspect > aspect {
        Size::new((dh * aspect).min(dw), dh)
    } else {
        Size::new(dw, (dw / aspect).min(dh))
    };
    Ok(size)
}

/// The [`max_crop`] of `outer` centered inside it.
pub fn fit_centered(outer: Rect, aspect: f64) -> KenBurnsResult<Rect> {
    let size = max_crop(outer, aspect)?;
    Ok(Rect::from_center_size(outer.center(), size))
}

/// Whether `inner` lies inside `outer`, allowing `eps` of slack on every edge.
pub fn contains_rect(outer: Rect, inner: Rect, eps: f64) -> bool {
    inner.x0 >= outer.x0 - eps
        && inner.y0 >= outer.y0 - eps
        && inner.x1 <= outer.x1 + eps
        && inner.y1 <= outer.y1 + eps
}

/// Interpolate each bound of `a` toward `b`.
pub fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::lerp(&a, &b, t)
}

/// Re-express `r`, given in the coordinate frame `from`, in the frame `to`.
pub fn map_rect(r: Rect, from: Rect, to: Rect) -> KenBurnsResult<Rect> {
    validate_rect(from)?;
    let sx = to.width() / from.width();
    let sy = to.height() / from.height();
    Ok(Rect::new(
        to.x0 + (r.x0 - from.x0) * sx,
        to.y0 + (r.y0 - from.y0) * sy,
        to.x0 + (r.x1 - from.x0) * sx,
        to.y0 + (r.y1 - from.y0) * sy,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rects.rs"]
mod tests;
