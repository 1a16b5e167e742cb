//! Options to control how files are tagged

mod write_options;

pub use write_options::WriteOptions;
