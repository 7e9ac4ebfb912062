pub use anyalign_core_rs::alignable;
pub use anyalign_core_rs::alignable::{Alignable, Reversed};
pub use anyalign_core_rs::num::Loss;

pub mod pairwise;
