pub mod bump;
pub mod error;
