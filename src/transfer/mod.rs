pub mod buffers;
pub mod engine;
pub mod error;

pub use buffers::TransferBuffers;
pub use engine::{measure, run_rounds, SizeStats};
pub use error::TransferError;
