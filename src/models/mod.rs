pub mod break_spec;
pub mod entry;

pub use break_spec::BreakSpec;
pub use entry::Entry;
