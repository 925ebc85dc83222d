use crate::club::player::builder::PlayerBuilder;
use crate::club::player::calculators::PlayerPositionRatings;
use crate::club::{PlayerAttributes, PlayerPositionType, PlayerPositions};
use crate::shared::fullname::FullName;
use std::fmt::{Display, Formatter};

/// A roster player enriched with position ratings. Ratings are computed once
/// when the player is built and stay valid for as long as the attributes do.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub attributes: PlayerAttributes,
    pub positions: PlayerPositions,
    pub ratings: PlayerPositionRatings,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn overall(&self) -> u8 {
        self.attributes.overall
    }

    pub fn positions(&self) -> &[PlayerPositionType] {
        &self.positions.positions
    }

    pub fn rating_for(&self, position: PlayerPositionType) -> Option<i32> {
        self.ratings.rating_for(position)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.full_name.short(),
            self.positions.primary()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_player_carries_ratings() {
        let player = Player::builder()
            .id(7)
            .full_name(FullName::new("Kylian".to_string(), "Mbappe".to_string()))
            .attributes(PlayerAttributes::outfield(90))
            .positions(PlayerPositions::new(vec![
                PlayerPositionType::Striker,
                PlayerPositionType::ForwardLeft,
            ]))
            .build()
            .unwrap();

        assert_eq!(player.ratings.primary.len(), 1);
        assert_eq!(player.rating_for(PlayerPositionType::Striker), Some(90));
        assert_eq!(player.rating_for(PlayerPositionType::ForwardLeft), Some(89));
        assert_eq!(player.to_string(), "K. Mbappe (ST)");
    }
}
