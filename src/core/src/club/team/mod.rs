pub mod squad;
pub mod tactics;

pub use squad::*;
pub use tactics::*;
