pub mod assign;
pub mod hash;
pub mod types;
pub mod validation;

pub use assign::{assign_variant, simulate_distribution};
pub use hash::hash_to_number;
pub use types::{SplitTest, SplitTestVariant};
pub use validation::validate_split_tests;
