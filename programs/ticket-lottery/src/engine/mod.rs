//! Draw and settlement logic, independent of account validation.

pub use draw::*;
pub use entropy::*;
pub use reward::*;
pub use statistics::*;

pub mod draw;
pub mod entropy;
pub mod reward;
pub mod statistics;
