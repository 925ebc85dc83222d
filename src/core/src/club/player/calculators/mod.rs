pub mod position_rating;

pub use position_rating::*;
