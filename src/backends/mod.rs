// Concrete storage backends and the in-process notification center
// File-backed storage for the app, in-memory substitutes for tests

pub mod center;
pub mod file;
pub mod memory;

pub use center::MemoryCenter;
pub use file::FileStorage;
pub use memory::MemoryStorage;
