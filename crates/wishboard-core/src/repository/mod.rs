//! Repository Layer
//!
//! Gateway abstractions and the in-memory implementation.

mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryBackend;
pub use traits::{VisitRepository, WishRepository};
