pub use alignable::{Alignable, Reversed};

pub mod alignable;
pub mod num;
