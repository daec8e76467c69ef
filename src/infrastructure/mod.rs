//! Presenter adapters: terminal output for the binary, an in-memory
//! recorder for tests and embedding.

pub mod console;
pub mod recording;
