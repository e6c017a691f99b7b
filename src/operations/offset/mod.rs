mod loop_offset;

pub use loop_offset::LoopOffset;
