pub mod attributes;
pub mod builder;
pub mod calculators;
pub mod player;
pub mod positions;

pub use attributes::*;
pub use builder::*;
pub use calculators::*;
pub use player::*;
pub use positions::*;
