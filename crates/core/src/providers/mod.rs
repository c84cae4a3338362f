pub mod fixed;
pub mod random;
pub mod traits;

pub use fixed::FixedVariationProvider;
pub use random::RandomVariationProvider;
pub use traits::VariationProvider;
