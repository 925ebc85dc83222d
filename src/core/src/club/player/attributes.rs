use serde::{Deserialize, Serialize};

/// The seven scouted skill values on the 0-100 scale, plus the aggregate
/// overall. A `None` skill means the data source reported it as not
/// available; it contributes nothing to any weighted rating.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub overall: u8,
    pub age: Option<u8>,

    pub pace: Option<u8>,
    pub dribbling: Option<u8>,
    pub passing: Option<u8>,
    pub shooting: Option<u8>,
    pub defense: Option<u8>,
    pub physical: Option<u8>,
    pub goalkeeping: Option<u8>,
}

impl PlayerAttributes {
    /// Uniform outfield attributes, handy for loaders and tests. The
    /// goalkeeping value stays unset.
    pub fn outfield(value: u8) -> Self {
        PlayerAttributes {
            overall: value,
            pace: Some(value),
            dribbling: Some(value),
            passing: Some(value),
            shooting: Some(value),
            defense: Some(value),
            physical: Some(value),
            ..Default::default()
        }
    }
}
