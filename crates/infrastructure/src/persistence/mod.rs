//! Session persistence: token and user stores.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
