// crates/thumbview-layout/src/resolver.rs
use thumbview_core::{Bounds, NaturalSize, Result, TargetSize};
use tracing::{debug, trace};

use crate::{ConstraintBox, SizeResolver};

/// Fits a natural size into min/max bounds with one uniform scale factor.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundsResolver;

impl BoundsResolver {
    pub fn new() -> Self {
        Self
    }
}

impl SizeResolver for BoundsResolver {
    fn resolve(&self, natural: NaturalSize, bounds: Bounds) -> Result<TargetSize> {
        resolve(natural, bounds)
    }
}

/// Pick the layout size for content of `natural` size inside `bounds`.
///
/// Returns [`TargetSize::UNCONSTRAINED`] when either input is empty. Otherwise
/// both axes are divided by a single factor, so the aspect ratio survives up
/// to the final truncation. Max bounds take priority: when the content is too
/// large on any axis, the axis furthest over its maximum is pinned to it and
/// min bounds are not revisited.
pub fn resolve(natural: NaturalSize, bounds: Bounds) -> Result<TargetSize> {
    natural.validate()?;
    bounds.validate()?;

    debug!("dimens: {}   bounds: {}", natural, bounds);

    if natural.is_empty() || bounds.is_empty() {
        return Ok(TargetSize::UNCONSTRAINED);
    }

    let constraints = ConstraintBox::from(bounds);
    let mut measured = natural.as_dvec2();

    if !constraints.contains(measured) {
        let ratios = constraints.ratios(measured);

        if ratios.overflows() {
            let divisor = ratios.overflow_divisor();
            trace!("overflow, scaling down by {:.4}", divisor);
            measured /= divisor;
        } else if ratios.underflows() {
            let divisor = ratios.underflow_divisor();
            trace!("underflow, scaling up by {:.4}", 1.0 / divisor);
            measured /= divisor;
        }
    }

    Ok(TargetSize::truncate(measured))
}
