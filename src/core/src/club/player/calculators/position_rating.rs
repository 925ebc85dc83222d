use crate::club::{PlayerAttributes, PlayerPositionType, PlayerPositions};
use serde::Serialize;

/// Lower bound margin for keeping an undeclared position in a player's
/// rating list: the computed rating must beat `overall - margin` strictly.
pub const OTHER_POSITION_RATING_MARGIN: i32 = 5;

/// Per-position attribute weights. Each row sums to 1.0; attributes that do
/// not matter for a position carry weight 0.
#[derive(Debug, Clone, Copy)]
pub struct AttributeWeights {
    pub pace: f32,
    pub dribbling: f32,
    pub passing: f32,
    pub shooting: f32,
    pub defense: f32,
    pub physical: f32,
    pub goalkeeping: f32,
}

impl AttributeWeights {
    pub fn for_position(position: PlayerPositionType) -> Option<&'static AttributeWeights> {
        POSITION_ATTRIBUTE_WEIGHTS
            .iter()
            .find(|(pos, _)| *pos == position)
            .map(|(_, weights)| weights)
    }
}

const fn weights(
    pace: f32,
    dribbling: f32,
    passing: f32,
    shooting: f32,
    defense: f32,
    physical: f32,
    goalkeeping: f32,
) -> AttributeWeights {
    AttributeWeights {
        pace,
        dribbling,
        passing,
        shooting,
        defense,
        physical,
        goalkeeping,
    }
}

pub const POSITION_ATTRIBUTE_WEIGHTS: &[(PlayerPositionType, AttributeWeights)] = &[
    (
        PlayerPositionType::Goalkeeper,
        weights(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0),
    ),
    (
        PlayerPositionType::WingbackLeft,
        weights(0.10, 0.17, 0.19, 0.0, 0.44, 0.10, 0.0),
    ),
    (
        PlayerPositionType::DefenderLeft,
        weights(0.10, 0.17, 0.19, 0.0, 0.44, 0.10, 0.0),
    ),
    (
        PlayerPositionType::DefenderCenter,
        weights(0.02, 0.09, 0.05, 0.0, 0.64, 0.20, 0.0),
    ),
    (
        PlayerPositionType::DefenderRight,
        weights(0.10, 0.17, 0.19, 0.0, 0.44, 0.10, 0.0),
    ),
    (
        PlayerPositionType::WingbackRight,
        weights(0.10, 0.17, 0.19, 0.0, 0.44, 0.10, 0.0),
    ),
    (
        PlayerPositionType::DefensiveMidfielder,
        weights(0.0, 0.17, 0.28, 0.0, 0.40, 0.15, 0.0),
    ),
    (
        PlayerPositionType::MidfielderCenter,
        weights(0.0, 0.29, 0.43, 0.12, 0.10, 0.06, 0.0),
    ),
    (
        PlayerPositionType::MidfielderRight,
        weights(0.0, 0.29, 0.43, 0.12, 0.10, 0.06, 0.0),
    ),
    (
        PlayerPositionType::MidfielderLeft,
        weights(0.0, 0.29, 0.43, 0.12, 0.10, 0.06, 0.0),
    ),
    (
        PlayerPositionType::AttackingMidfielderCenter,
        weights(0.07, 0.38, 0.34, 0.21, 0.0, 0.0, 0.0),
    ),
    (
        PlayerPositionType::ForwardRight,
        weights(0.13, 0.40, 0.24, 0.23, 0.0, 0.0, 0.0),
    ),
    (
        PlayerPositionType::ForwardLeft,
        weights(0.13, 0.40, 0.24, 0.23, 0.0, 0.0, 0.0),
    ),
    (
        PlayerPositionType::ForwardCenter,
        weights(0.13, 0.40, 0.24, 0.23, 0.0, 0.0, 0.0),
    ),
    (
        PlayerPositionType::Striker,
        weights(0.10, 0.29, 0.10, 0.46, 0.0, 0.05, 0.0),
    ),
];

/// Tactical distance between a primary position and a target position.
/// 0 = identical, 5 = closely related, 8 = somewhat related, 20 = unrelated.
/// Rows and columns follow the canonical position order (GK..ST).
const FAMILIARITY_PENALTY: [[u8; 15]; 15] = [
    // GK
    [0, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20],
    // LWB
    [20, 0, 5, 20, 20, 8, 20, 20, 20, 8, 20, 20, 8, 20, 20],
    // LB
    [20, 5, 0, 8, 8, 20, 20, 20, 20, 8, 20, 20, 20, 20, 20],
    // CB
    [20, 20, 8, 0, 8, 20, 8, 20, 20, 20, 20, 20, 20, 20, 20],
    // RB
    [20, 20, 8, 8, 0, 5, 20, 20, 8, 20, 20, 20, 20, 20, 20],
    // RWB
    [20, 8, 20, 20, 5, 0, 20, 20, 8, 20, 20, 8, 20, 20, 20],
    // CDM
    [20, 20, 20, 8, 20, 20, 0, 5, 20, 20, 8, 20, 20, 20, 20],
    // CM
    [20, 20, 20, 20, 20, 20, 5, 0, 8, 8, 5, 20, 20, 20, 20],
    // RM
    [20, 20, 20, 20, 8, 8, 20, 8, 0, 8, 20, 5, 20, 20, 20],
    // LM
    [20, 8, 8, 20, 20, 20, 20, 8, 8, 0, 20, 20, 5, 20, 20],
    // CAM
    [20, 20, 20, 20, 20, 20, 8, 5, 20, 20, 0, 20, 20, 5, 20],
    // RW
    [20, 20, 20, 20, 20, 8, 20, 20, 5, 20, 20, 0, 8, 20, 20],
    // LW
    [20, 8, 20, 20, 20, 20, 20, 20, 20, 5, 20, 8, 0, 20, 20],
    // CF
    [20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 5, 20, 20, 0, 5],
    // ST
    [20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 8, 20, 20, 5, 0],
];

pub fn familiarity_penalty(primary: PlayerPositionType, target: PlayerPositionType) -> u8 {
    FAMILIARITY_PENALTY[primary.table_index()][target.table_index()]
}

/// A single computed (position, rating) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionRating {
    pub position: PlayerPositionType,
    pub rating: i32,
}

/// The full rating picture of one player, grouped the way roster views
/// consume it. `primary` holds exactly one entry for any position covered by
/// the weight table. `all` is primary, secondary, other concatenated in that
/// order; position lookups take the first match, so the declared entries win.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerPositionRatings {
    pub primary: Vec<PositionRating>,
    pub secondary: Vec<PositionRating>,
    pub other: Vec<PositionRating>,
    pub all: Vec<PositionRating>,
}

impl PlayerPositionRatings {
    pub fn rating_for(&self, position: PlayerPositionType) -> Option<i32> {
        self.all
            .iter()
            .find(|entry| entry.position == position)
            .map(|entry| entry.rating)
    }
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

pub struct PositionRatingCalculator;

impl PositionRatingCalculator {
    /// Rate a player for `target` given their declared `primary` position.
    ///
    /// Missing attribute values contribute nothing to the weighted sum. The
    /// penalty is 0 when rating the primary position against itself, a flat
    /// 1 for a declared secondary, and the familiarity distance otherwise.
    /// Returns `None` only when the weight table has no row for `target`.
    pub fn rate(
        attributes: &PlayerAttributes,
        primary: PlayerPositionType,
        target: PlayerPositionType,
        is_declared_secondary: bool,
    ) -> Option<i32> {
        let weights = AttributeWeights::for_position(target)?;

        let pairs = [
            (attributes.pace, weights.pace),
            (attributes.dribbling, weights.dribbling),
            (attributes.passing, weights.passing),
            (attributes.shooting, weights.shooting),
            (attributes.defense, weights.defense),
            (attributes.physical, weights.physical),
            (attributes.goalkeeping, weights.goalkeeping),
        ];

        let mut weighted_sum = 0.0f64;
        for (value, weight) in pairs {
            if let Some(value) = value {
                weighted_sum += value as f64 * weight as f64;
            }
        }

        let penalty = if target == primary {
            0
        } else if is_declared_secondary {
            1
        } else {
            familiarity_penalty(primary, target) as i32
        };

        Some(round_half_up(weighted_sum - penalty as f64))
    }

    /// Rate a player for every position of interest, using the default
    /// competence margin for undeclared positions.
    pub fn rate_all_positions(
        attributes: &PlayerAttributes,
        positions: &PlayerPositions,
    ) -> PlayerPositionRatings {
        Self::rate_all_positions_with_margin(attributes, positions, OTHER_POSITION_RATING_MARGIN)
    }

    pub fn rate_all_positions_with_margin(
        attributes: &PlayerAttributes,
        positions: &PlayerPositions,
        margin: i32,
    ) -> PlayerPositionRatings {
        let primary_position = positions.primary();

        let primary: Vec<PositionRating> =
            Self::rate(attributes, primary_position, primary_position, false)
                .map(|rating| PositionRating {
                    position: primary_position,
                    rating,
                })
                .into_iter()
                .collect();

        let secondary: Vec<PositionRating> = positions
            .secondary()
            .iter()
            .filter_map(|&position| {
                Self::rate(attributes, primary_position, position, true).map(|rating| {
                    PositionRating { position, rating }
                })
            })
            .collect();

        // Undeclared positions are only worth listing when the player is
        // realistically competitive there, measured against their overall.
        let competence_floor = attributes.overall as i32 - margin;

        let other: Vec<PositionRating> = PlayerPositionType::all()
            .into_iter()
            .filter(|&position| !positions.contains(position))
            .filter_map(|position| {
                Self::rate(attributes, primary_position, position, false).map(|rating| {
                    PositionRating { position, rating }
                })
            })
            .filter(|entry| entry.rating > competence_floor)
            .collect();

        let all: Vec<PositionRating> = primary
            .iter()
            .chain(secondary.iter())
            .chain(other.iter())
            .copied()
            .collect();

        PlayerPositionRatings {
            primary,
            secondary,
            other,
            all,
        }
    }
}
