pub mod analyzer;
pub mod clock;
pub mod git;
