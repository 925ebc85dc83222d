use crate::club::player::calculators::PositionRatingCalculator;
use crate::club::{Player, PlayerAttributes, PlayerPositions};
use crate::shared::fullname::FullName;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    attributes: Option<PlayerAttributes>,
    positions: Option<PlayerPositions>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn positions(mut self, positions: PlayerPositions) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let attributes = self.attributes.ok_or("attributes is required")?;
        let positions = self.positions.ok_or("positions is required")?;

        if positions.positions.is_empty() {
            return Err("positions must declare a primary position".to_string());
        }

        let ratings = PositionRatingCalculator::rate_all_positions(&attributes, &positions);

        Ok(Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            attributes,
            positions,
            ratings,
        })
    }
}
