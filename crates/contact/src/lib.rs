mod client;
mod error;
mod payload;
mod submission;
mod verification;

pub use client::*;
pub use error::*;
pub use payload::*;
pub use submission::*;
pub use verification::*;
