use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The closed set of field positions a player can be rated for.
///
/// Serialized form is the short scouting label ("GK", "LWB", ...), which is
/// also what roster exports use in their position lists.
#[derive(Copy, Debug, Eq, PartialEq, Clone, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "LWB")]
    WingbackLeft,
    #[serde(rename = "LB")]
    DefenderLeft,
    #[serde(rename = "CB")]
    DefenderCenter,
    #[serde(rename = "RB")]
    DefenderRight,
    #[serde(rename = "RWB")]
    WingbackRight,
    #[serde(rename = "CDM")]
    DefensiveMidfielder,
    #[serde(rename = "CM")]
    MidfielderCenter,
    #[serde(rename = "RM")]
    MidfielderRight,
    #[serde(rename = "LM")]
    MidfielderLeft,
    #[serde(rename = "CAM")]
    AttackingMidfielderCenter,
    #[serde(rename = "RW")]
    ForwardRight,
    #[serde(rename = "LW")]
    ForwardLeft,
    #[serde(rename = "CF")]
    ForwardCenter,
    #[serde(rename = "ST")]
    Striker,
}

impl PlayerPositionType {
    /// All positions in canonical display order, goalkeeper to striker.
    pub fn all() -> Vec<PlayerPositionType> {
        vec![
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::WingbackLeft,
            PlayerPositionType::DefenderLeft,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderRight,
            PlayerPositionType::WingbackRight,
            PlayerPositionType::DefensiveMidfielder,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderRight,
            PlayerPositionType::MidfielderLeft,
            PlayerPositionType::AttackingMidfielderCenter,
            PlayerPositionType::ForwardRight,
            PlayerPositionType::ForwardLeft,
            PlayerPositionType::ForwardCenter,
            PlayerPositionType::Striker,
        ]
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::WingbackLeft => "LWB",
            PlayerPositionType::DefenderLeft => "LB",
            PlayerPositionType::DefenderCenter => "CB",
            PlayerPositionType::DefenderRight => "RB",
            PlayerPositionType::WingbackRight => "RWB",
            PlayerPositionType::DefensiveMidfielder => "CDM",
            PlayerPositionType::MidfielderCenter => "CM",
            PlayerPositionType::MidfielderRight => "RM",
            PlayerPositionType::MidfielderLeft => "LM",
            PlayerPositionType::AttackingMidfielderCenter => "CAM",
            PlayerPositionType::ForwardRight => "RW",
            PlayerPositionType::ForwardLeft => "LW",
            PlayerPositionType::ForwardCenter => "CF",
            PlayerPositionType::Striker => "ST",
        }
    }

    /// Index into the familiarity matrix rows/columns (canonical order).
    pub(crate) fn table_index(&self) -> usize {
        match self {
            PlayerPositionType::Goalkeeper => 0,
            PlayerPositionType::WingbackLeft => 1,
            PlayerPositionType::DefenderLeft => 2,
            PlayerPositionType::DefenderCenter => 3,
            PlayerPositionType::DefenderRight => 4,
            PlayerPositionType::WingbackRight => 5,
            PlayerPositionType::DefensiveMidfielder => 6,
            PlayerPositionType::MidfielderCenter => 7,
            PlayerPositionType::MidfielderRight => 8,
            PlayerPositionType::MidfielderLeft => 9,
            PlayerPositionType::AttackingMidfielderCenter => 10,
            PlayerPositionType::ForwardRight => 11,
            PlayerPositionType::ForwardLeft => 12,
            PlayerPositionType::ForwardCenter => 13,
            PlayerPositionType::Striker => 14,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerPositionType::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            PlayerPositionType::WingbackLeft
                | PlayerPositionType::DefenderLeft
                | PlayerPositionType::DefenderCenter
                | PlayerPositionType::DefenderRight
                | PlayerPositionType::WingbackRight
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            PlayerPositionType::DefensiveMidfielder
                | PlayerPositionType::MidfielderCenter
                | PlayerPositionType::MidfielderRight
                | PlayerPositionType::MidfielderLeft
                | PlayerPositionType::AttackingMidfielderCenter
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            PlayerPositionType::ForwardRight
                | PlayerPositionType::ForwardLeft
                | PlayerPositionType::ForwardCenter
                | PlayerPositionType::Striker
        )
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_short_name())
    }
}

/// A player's declared positions: the first entry is the primary position,
/// any further entries are declared secondaries. The builder rejects players
/// with an empty list, so `primary()` is always valid on a built player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPositions {
    pub positions: Vec<PlayerPositionType>,
}

impl PlayerPositions {
    pub fn new(positions: Vec<PlayerPositionType>) -> Self {
        PlayerPositions { positions }
    }

    pub fn primary(&self) -> PlayerPositionType {
        self.positions[0]
    }

    pub fn secondary(&self) -> &[PlayerPositionType] {
        &self.positions[1..]
    }

    pub fn is_declared_secondary(&self, position: PlayerPositionType) -> bool {
        self.secondary().contains(&position)
    }

    pub fn contains(&self, position: PlayerPositionType) -> bool {
        self.positions.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positions_are_distinct() {
        let all = PlayerPositionType::all();
        assert_eq!(all.len(), 15);

        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_short_names() {
        assert_eq!(PlayerPositionType::Goalkeeper.get_short_name(), "GK");
        assert_eq!(PlayerPositionType::WingbackLeft.get_short_name(), "LWB");
        assert_eq!(
            PlayerPositionType::AttackingMidfielderCenter.get_short_name(),
            "CAM"
        );
        assert_eq!(PlayerPositionType::Striker.to_string(), "ST");
    }

    #[test]
    fn test_serde_uses_short_labels() {
        let json = serde_json::to_string(&PlayerPositionType::DefensiveMidfielder).unwrap();
        assert_eq!(json, "\"CDM\"");

        let parsed: PlayerPositionType = serde_json::from_str("\"RWB\"").unwrap();
        assert_eq!(parsed, PlayerPositionType::WingbackRight);
    }

    #[test]
    fn test_position_groups_cover_all_positions() {
        for position in PlayerPositionType::all() {
            let groups = [
                position.is_goalkeeper(),
                position.is_defender(),
                position.is_midfielder(),
                position.is_forward(),
            ];
            assert_eq!(groups.iter().filter(|&&g| g).count(), 1, "{}", position);
        }
    }

    #[test]
    fn test_primary_and_secondary_split() {
        let positions = PlayerPositions::new(vec![
            PlayerPositionType::DefenderRight,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::WingbackRight,
        ]);

        assert_eq!(positions.primary(), PlayerPositionType::DefenderRight);
        assert_eq!(positions.secondary().len(), 2);
        assert!(positions.is_declared_secondary(PlayerPositionType::WingbackRight));
        assert!(!positions.is_declared_secondary(PlayerPositionType::DefenderRight));
    }
}
