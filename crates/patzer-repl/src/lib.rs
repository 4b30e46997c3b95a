//! Line-oriented terminal front end for patzer.

pub mod error;
pub mod session;

pub use error::ReplError;
pub use session::Session;
