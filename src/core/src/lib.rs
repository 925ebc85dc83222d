pub mod club;
pub mod shared;

// Re-export club items
pub use club::{
    // Player exports
    Player, PlayerBuilder,
    PlayerAttributes, PlayerPositionType, PlayerPositions,
    // Rating engine exports
    AttributeWeights, PositionRating, PlayerPositionRatings, PositionRatingCalculator,
    POSITION_ATTRIBUTE_WEIGHTS, OTHER_POSITION_RATING_MARGIN, familiarity_penalty,
    // Tactics exports
    Tactics, MatchTacticType, TACTICS_POSITIONS,
    // Squad exports
    SquadSelector, Lineup, SlotAssignment, TacticLineup, SQUAD_SIZE,
};
pub use shared::FullName;
