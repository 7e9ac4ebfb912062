pub use engine::{Engine, InputTooLarge, MAX_SEQUENCE_LEN, Sequence, align, align_with};
pub use tracer::{LogTracer, Tracer};

mod engine;
mod memo;
mod tracer;
