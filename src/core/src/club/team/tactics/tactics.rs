use crate::club::PlayerPositionType;
use serde::Serialize;

/// A named team shape: a selection of eleven position slots.
#[derive(Debug, Clone)]
pub struct Tactics {
    pub tactic_type: MatchTacticType,
}

impl Tactics {
    pub fn new(tactic_type: MatchTacticType) -> Self {
        Tactics { tactic_type }
    }

    pub fn positions(&self) -> &[PlayerPositionType; 11] {
        let (_, positions) = TACTICS_POSITIONS
            .iter()
            .find(|(tactic, _)| *tactic == self.tactic_type)
            .unwrap_or(&TACTICS_POSITIONS[0]);

        positions
    }

    pub fn defender_count(&self) -> usize {
        self.positions()
            .iter()
            .filter(|pos| pos.is_defender())
            .count()
    }

    pub fn midfielder_count(&self) -> usize {
        self.positions()
            .iter()
            .filter(|pos| pos.is_midfielder())
            .count()
    }

    pub fn forward_count(&self) -> usize {
        self.positions()
            .iter()
            .filter(|pos| pos.is_forward())
            .count()
    }

    /// Coarse shape string derived from the slots, e.g. "4-4-2". Formations
    /// with stacked midfield bands collapse to their overall band counts, so
    /// this is not always the display name.
    pub fn formation_description(&self) -> String {
        format!(
            "{}-{}-{}",
            self.defender_count(),
            self.midfielder_count(),
            self.forward_count()
        )
    }
}

#[derive(Copy, Debug, Eq, PartialEq, PartialOrd, Clone, Hash, Serialize)]
pub enum MatchTacticType {
    T3421,
    T343,
    T343Diamond,
    T352,
    T352B,
    T41212,
    T41212Narrow,
    T4132,
    T4141,
    T4222,
    T4231,
    T424,
    T4312,
    T4321,
    T433,
    T433Att,
    T433Def,
    T433False9,
    T4411,
    T442,
    T442B,
    T523,
    T532,
    T541,
    T541Flat,
}

impl MatchTacticType {
    pub fn all() -> Vec<MatchTacticType> {
        TACTICS_POSITIONS.iter().map(|(tactic, _)| *tactic).collect()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchTacticType::T3421 => "3-4-2-1",
            MatchTacticType::T343 => "3-4-3",
            MatchTacticType::T343Diamond => "3-4-3 (diamond)",
            MatchTacticType::T352 => "3-5-2",
            MatchTacticType::T352B => "3-5-2 (B)",
            MatchTacticType::T41212 => "4-1-2-1-2",
            MatchTacticType::T41212Narrow => "4-1-2-1-2 (narrow)",
            MatchTacticType::T4132 => "4-1-3-2",
            MatchTacticType::T4141 => "4-1-4-1",
            MatchTacticType::T4222 => "4-2-2-2",
            MatchTacticType::T4231 => "4-2-3-1",
            MatchTacticType::T424 => "4-2-4",
            MatchTacticType::T4312 => "4-3-1-2",
            MatchTacticType::T4321 => "4-3-2-1",
            MatchTacticType::T433 => "4-3-3",
            MatchTacticType::T433Att => "4-3-3 (att)",
            MatchTacticType::T433Def => "4-3-3 (def)",
            MatchTacticType::T433False9 => "4-3-3 (false 9)",
            MatchTacticType::T4411 => "4-4-1-1",
            MatchTacticType::T442 => "4-4-2",
            MatchTacticType::T442B => "4-4-2 (B)",
            MatchTacticType::T523 => "5-2-3",
            MatchTacticType::T532 => "5-3-2",
            MatchTacticType::T541 => "5-4-1",
            MatchTacticType::T541Flat => "5-4-1 (flat)",
        }
    }
}

pub const TACTICS_POSITIONS: &[(MatchTacticType, [PlayerPositionType; 11])] = &[
    (
        MatchTacticType::T3421,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::ForwardCenter,
            PlayerPositionType::ForwardCenter,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T343,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T343Diamond,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T352,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T352B,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T41212,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T41212Narrow,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T4132,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T4141,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T4222,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T4231,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T424,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T4312,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T4321,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::ForwardCenter,
            PlayerPositionType::ForwardCenter,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T433,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T433Att,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T433Def,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T433False9,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::ForwardCenter,
        ],
    ),
    (
        MatchTacticType::T4411,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::ForwardCenter,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T442,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T442B,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T523,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::WingbackLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::WingbackRight,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T532,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::WingbackLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::WingbackRight,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::Striker,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T541,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::WingbackLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::WingbackRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::Striker,
        ],
    ),
    (
        MatchTacticType::T541Flat,
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::WingbackLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::WingbackRight,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::Striker,
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_known_formations() {
        assert_eq!(TACTICS_POSITIONS.len(), 25);
        assert_eq!(MatchTacticType::all().len(), 25);
    }

    #[test]
    fn test_every_formation_fields_one_goalkeeper() {
        for tactic_type in MatchTacticType::all() {
            let tactics = Tactics::new(tactic_type);
            let goalkeepers = tactics
                .positions()
                .iter()
                .filter(|pos| pos.is_goalkeeper())
                .count();

            assert_eq!(goalkeepers, 1, "{}", tactic_type.display_name());
        }
    }

    #[test]
    fn test_band_counts_add_up_to_outfield_ten() {
        for tactic_type in MatchTacticType::all() {
            let tactics = Tactics::new(tactic_type);
            let outfield =
                tactics.defender_count() + tactics.midfielder_count() + tactics.forward_count();

            assert_eq!(outfield, 10, "{}", tactic_type.display_name());
        }
    }

    #[test]
    fn test_formation_description_for_flat_shapes() {
        assert_eq!(
            Tactics::new(MatchTacticType::T442).formation_description(),
            "4-4-2"
        );
        assert_eq!(
            Tactics::new(MatchTacticType::T532).formation_description(),
            "5-3-2"
        );
        assert_eq!(
            Tactics::new(MatchTacticType::T523).formation_description(),
            "5-2-3"
        );
    }

    #[test]
    fn test_display_names_are_unique() {
        let names: Vec<&str> = MatchTacticType::all()
            .iter()
            .map(|tactic| tactic.display_name())
            .collect();

        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate name {}", name);
        }
    }
}
