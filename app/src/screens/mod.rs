pub mod entry;
pub mod summary;

pub use entry::{EntryForm, EntryScreen};
pub use summary::SummaryScreen;
