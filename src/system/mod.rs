pub mod executor;
pub mod process;
pub mod stdin;
pub mod streaming;
