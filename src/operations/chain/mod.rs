mod sort_contiguous;

pub use sort_contiguous::{sort_contiguous, sorted_contiguous};
