pub mod file;
pub mod toggl;
pub mod traits;

// Re-export
pub use file::FileEntrySource;
pub use toggl::{TogglEntrySource, TogglTimeEntry};
pub use traits::EntrySource;
