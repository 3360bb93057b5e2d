pub mod error;

pub use error::{GitUnmergedError, Result};
