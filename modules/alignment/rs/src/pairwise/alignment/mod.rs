pub use aligned::{Aligned, Item};
pub use alignment::Alignment;
pub use op::Op;

mod aligned;
pub mod alignment;
mod op;
