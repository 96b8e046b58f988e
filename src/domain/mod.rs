mod allocator;
pub mod types;

pub use allocator::{AllocationError, Allocator};
