pub use alignment::{Aligned, Alignment, Item, Op};

pub mod alignment;
pub mod global;
pub mod scoring;
