// crates/thumbview-layout/src/lib.rs

use thumbview_core::{Bounds, NaturalSize, Result, TargetSize};

pub mod constraints;
pub mod measure;
pub mod resolver;

pub use constraints::*;
pub use measure::*;
pub use resolver::*;

pub trait SizeResolver {
    /// Compute the layout size for content of `natural` size inside `bounds`.
    fn resolve(&self, natural: NaturalSize, bounds: Bounds) -> Result<TargetSize>;
}

impl<R: SizeResolver + ?Sized> SizeResolver for Box<R> {
    fn resolve(&self, natural: NaturalSize, bounds: Bounds) -> Result<TargetSize> {
        (**self).resolve(natural, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_display_formats() {
        let natural = NaturalSize::new(1000, 500);
        let bounds = Bounds::new(100, 200, 100, 100);
        let target = resolve(natural, bounds).unwrap();

        assert_snapshot!(natural.to_string(), @"1000x500");
        assert_snapshot!(bounds.to_string(), @"[100, 200, 100, 100]");
        assert_snapshot!(target.to_string(), @"200x100");
    }

    #[test]
    fn test_boxed_resolver() {
        let resolver: Box<dyn SizeResolver> = Box::new(BoundsResolver::new());
        let target = resolver
            .resolve(NaturalSize::new(100, 50), Bounds::new(200, 400, 100, 200))
            .unwrap();
        assert_eq!(target, TargetSize::new(200, 100));
    }
}
