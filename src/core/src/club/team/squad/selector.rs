use crate::club::{MatchTacticType, Player, PlayerPositionType, Tactics};
use itertools::Itertools;
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Reverse;

pub const SQUAD_SIZE: usize = 11;

/// One filled formation slot.
#[derive(Debug, Clone, Serialize)]
pub struct SlotAssignment {
    pub player_id: u32,
    pub position: PlayerPositionType,
    pub rating: i32,
}

/// A complete eleven-player assignment for one formation.
#[derive(Debug, Clone, Serialize)]
pub struct Lineup {
    pub total_rating: i32,
    pub assignment: Vec<SlotAssignment>,
}

/// A feasible formation together with its best lineup.
#[derive(Debug, Clone, Serialize)]
pub struct TacticLineup {
    pub tactic_type: MatchTacticType,
    pub lineup: Lineup,
}

pub struct SquadSelector;

impl SquadSelector {
    /// Find the best complete assignment of distinct roster players to the
    /// formation's eleven slots. Returns `None` when no complete assignment
    /// exists, which callers treat as "formation infeasible for this roster".
    pub fn select(roster: &[Player], tactics: &Tactics) -> Option<Lineup> {
        debug!(
            "Searching lineup for {} over {} players",
            tactics.tactic_type.display_name(),
            roster.len()
        );

        Self::select_for_positions(roster, tactics.positions())
    }

    /// Same search against an explicit slot list.
    pub fn select_for_positions(
        roster: &[Player],
        slots: &[PlayerPositionType; SQUAD_SIZE],
    ) -> Option<Lineup> {
        if roster.len() < SQUAD_SIZE {
            warn!("Not enough players for a full lineup: {}", roster.len());
            return None;
        }

        // ratings[i][j]: rating of player i in slot j, None when the player
        // carries no entry for that slot's position.
        let ratings: Vec<[Option<i32>; SQUAD_SIZE]> = roster
            .iter()
            .map(|player| {
                let mut row = [None; SQUAD_SIZE];
                for (slot, &position) in slots.iter().enumerate() {
                    row[slot] = player.rating_for(position);
                }
                row
            })
            .collect();

        // A slot nobody in the roster can fill makes the formation
        // infeasible before any search.
        for (slot, &position) in slots.iter().enumerate() {
            if !ratings.iter().any(|row| row[slot].is_some()) {
                debug!("No candidate for slot {} ({})", slot, position);
                return None;
            }
        }

        // player_max[i][slot]: best rating player i can still earn in slots
        // slot onward. Basis of the optimistic bound in the search.
        let player_max: Vec<[Option<i32>; SQUAD_SIZE]> = ratings
            .iter()
            .map(|row| {
                let mut maxima = [None; SQUAD_SIZE];
                let mut running: Option<i32> = None;
                for slot in (0..SQUAD_SIZE).rev() {
                    running = match (running, row[slot]) {
                        (Some(a), Some(b)) => Some(a.max(b)),
                        (a, None) => a,
                        (None, b) => b,
                    };
                    maxima[slot] = running;
                }
                maxima
            })
            .collect();

        let mut search = AssignmentSearch {
            ratings: &ratings,
            player_max: &player_max,
            used: vec![false; roster.len()],
            current: Vec::with_capacity(SQUAD_SIZE),
            best: None,
        };
        search.run(0, 0);

        let (total_rating, chosen) = search.best?;

        let assignment = chosen
            .into_iter()
            .enumerate()
            .map(|(slot, (player, rating))| SlotAssignment {
                player_id: roster[player].id,
                position: slots[slot],
                rating,
            })
            .collect();

        Some(Lineup {
            total_rating,
            assignment,
        })
    }

    /// Evaluate the whole formation catalog against the roster. Formations
    /// with no complete assignment are dropped; the rest come back ordered by
    /// total rating, best first, with catalog order deciding equal totals.
    /// Each formation is searched independently, so the catalog runs in
    /// parallel without affecting any result.
    pub fn select_all(roster: &[Player]) -> Vec<TacticLineup> {
        MatchTacticType::all()
            .into_par_iter()
            .filter_map(|tactic_type| {
                SquadSelector::select(roster, &Tactics::new(tactic_type))
                    .map(|lineup| TacticLineup {
                        tactic_type,
                        lineup,
                    })
            })
            .collect::<Vec<TacticLineup>>()
            .into_iter()
            .sorted_by_key(|result| Reverse(result.lineup.total_rating))
            .collect()
    }
}

struct AssignmentSearch<'r> {
    ratings: &'r [[Option<i32>; SQUAD_SIZE]],
    player_max: &'r [[Option<i32>; SQUAD_SIZE]],
    used: Vec<bool>,
    current: Vec<(usize, i32)>,
    best: Option<(i32, Vec<(usize, i32)>)>,
}

impl AssignmentSearch<'_> {
    /// Exhaustive backtracking over slots: every unused player with a
    /// feasible rating is tried for the current slot. A slot with no feasible
    /// player left kills the branch, and the first complete assignment found
    /// wins exact ties on the total.
    ///
    /// Branches are also cut when their optimistic completion cannot
    /// strictly beat the current best: every unused player is capped by the
    /// best rating they can still earn, and a completion needs `remaining`
    /// of them. Equal totals never replace the best, so the cut returns the
    /// same assignment the unpruned enumeration would, tie-break included.
    fn run(&mut self, slot: usize, sum: i32) {
        if slot == SQUAD_SIZE {
            match &self.best {
                Some((best_sum, _)) if sum <= *best_sum => {}
                _ => self.best = Some((sum, self.current.clone())),
            }
            return;
        }

        let remaining = SQUAD_SIZE - slot;

        let mut caps: Vec<i32> = (0..self.ratings.len())
            .filter(|&player| !self.used[player])
            .filter_map(|player| self.player_max[player][slot])
            .collect();

        if caps.len() < remaining {
            return;
        }

        if let Some((best_sum, _)) = &self.best {
            caps.sort_unstable_by_key(|&cap| Reverse(cap));
            let bound = sum + caps[..remaining].iter().sum::<i32>();

            if bound <= *best_sum {
                return;
            }
        }

        for player in 0..self.ratings.len() {
            if self.used[player] {
                continue;
            }

            if let Some(rating) = self.ratings[player][slot] {
                self.used[player] = true;
                self.current.push((player, rating));

                self.run(slot + 1, sum + rating);

                self.current.pop();
                self.used[player] = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerAttributes, PlayerPositions};
    use crate::shared::fullname::FullName;

    fn create_player(id: u32, positions: Vec<PlayerPositionType>, value: u8) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::new("Test".to_string(), format!("Player{}", id)))
            .attributes(PlayerAttributes::outfield(value))
            .positions(PlayerPositions::new(positions))
            .build()
            .expect("Failed to build test player")
    }

    fn create_goalkeeper(id: u32, value: u8) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::new("Test".to_string(), format!("Keeper{}", id)))
            .attributes(PlayerAttributes {
                overall: value,
                goalkeeping: Some(value),
                ..Default::default()
            })
            .positions(PlayerPositions::new(vec![PlayerPositionType::Goalkeeper]))
            .build()
            .expect("Failed to build test goalkeeper")
    }

    /// One goalkeeper slot and ten central midfield slots.
    fn gk_and_ten_cm_slots() -> [PlayerPositionType; SQUAD_SIZE] {
        let mut slots = [PlayerPositionType::MidfielderCenter; SQUAD_SIZE];
        slots[0] = PlayerPositionType::Goalkeeper;
        slots
    }

    #[test]
    fn test_small_roster_is_infeasible() {
        let roster: Vec<Player> = (0..10)
            .map(|i| create_player(i, vec![PlayerPositionType::MidfielderCenter], 60))
            .collect();

        let result = SquadSelector::select(&roster, &Tactics::new(MatchTacticType::T442));
        assert!(result.is_none());
    }

    #[test]
    fn test_roster_without_goalkeeper_is_infeasible() {
        // Eleven outfielders, nobody rated for the GK slot.
        let roster: Vec<Player> = (0..11)
            .map(|i| create_player(i, vec![PlayerPositionType::MidfielderCenter], 70))
            .collect();

        let result = SquadSelector::select(&roster, &Tactics::new(MatchTacticType::T442));
        assert!(result.is_none());
    }

    #[test]
    fn test_selects_best_goalkeeper_and_ten_best_outfielders() {
        let mut roster = vec![
            create_goalkeeper(100, 70),
            create_goalkeeper(101, 90),
            create_goalkeeper(102, 85),
            create_goalkeeper(103, 80),
        ];

        // Eleven distinct central midfielders rated 60..=70.
        for i in 0..11 {
            roster.push(create_player(
                i,
                vec![PlayerPositionType::MidfielderCenter],
                60 + i as u8,
            ));
        }

        let lineup =
            SquadSelector::select_for_positions(&roster, &gk_and_ten_cm_slots()).unwrap();

        // Best keeper (90) plus the ten best midfielders (61..=70).
        assert_eq!(lineup.total_rating, 90 + (61..=70).sum::<i32>());
        assert_eq!(lineup.assignment[0].player_id, 101);
        assert_eq!(lineup.assignment[0].rating, 90);

        let chosen: Vec<u32> = lineup.assignment.iter().map(|s| s.player_id).collect();
        assert!(!chosen.contains(&0), "weakest midfielder must sit out");
    }

    #[test]
    fn test_assignment_uses_distinct_players_with_finite_ratings() {
        let mut roster = vec![create_goalkeeper(50, 80)];
        for i in 0..12 {
            roster.push(create_player(
                i,
                vec![
                    PlayerPositionType::MidfielderCenter,
                    PlayerPositionType::MidfielderLeft,
                ],
                55 + i as u8,
            ));
        }

        let lineup =
            SquadSelector::select_for_positions(&roster, &gk_and_ten_cm_slots()).unwrap();

        assert_eq!(lineup.assignment.len(), SQUAD_SIZE);

        let mut ids: Vec<u32> = lineup.assignment.iter().map(|s| s.player_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SQUAD_SIZE, "players must not repeat");

        for slot in &lineup.assignment {
            let player = roster.iter().find(|p| p.id == slot.player_id).unwrap();
            assert_eq!(player.rating_for(slot.position), Some(slot.rating));
        }

        assert_eq!(
            lineup.total_rating,
            lineup.assignment.iter().map(|s| s.rating).sum::<i32>()
        );
    }

    #[test]
    fn test_backtracking_beats_greedy_slot_filling() {
        // Slot order puts the four CM slots before the single CDM slot. The
        // only CDM-capable player is also the strongest CM option, so filling
        // CM slots greedily would leave the CDM slot without a player.
        let slots = [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::DefenderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::MidfielderCenter,
            PlayerPositionType::Striker,
            PlayerPositionType::DefensiveMidfielder,
        ];

        let mut roster = vec![create_goalkeeper(0, 80)];
        for i in 1..=4 {
            roster.push(create_player(i, vec![PlayerPositionType::DefenderCenter], 70));
        }
        for i in 5..=7 {
            roster.push(create_player(i, vec![PlayerPositionType::MidfielderCenter], 60));
        }
        roster.push(create_player(8, vec![PlayerPositionType::Striker], 75));
        // The pivot: primary CDM, declared secondary CM, strongest CM rating.
        roster.push(create_player(
            9,
            vec![
                PlayerPositionType::DefensiveMidfielder,
                PlayerPositionType::MidfielderCenter,
            ],
            90,
        ));
        roster.push(create_player(10, vec![PlayerPositionType::MidfielderCenter], 88));

        let lineup = SquadSelector::select_for_positions(&roster, &slots).unwrap();

        let cdm_slot = &lineup.assignment[10];
        assert_eq!(cdm_slot.player_id, 9);
        assert_eq!(cdm_slot.rating, 90);

        // GK 80 + 4x CB 70 + CM slots (88 + 60 + 60 + 60) + ST 75 + CDM 90
        assert_eq!(lineup.total_rating, 80 + 280 + 268 + 75 + 90);
    }

    #[test]
    fn test_equal_rated_players_tie_keeps_documented_maximum() {
        let mut roster = vec![create_goalkeeper(0, 80)];
        // Eleven equally rated midfielders for ten identical slots.
        for i in 1..=11 {
            roster.push(create_player(i, vec![PlayerPositionType::MidfielderCenter], 64));
        }

        let lineup =
            SquadSelector::select_for_positions(&roster, &gk_and_ten_cm_slots()).unwrap();

        assert_eq!(lineup.total_rating, 80 + 10 * 64);

        let mut ids: Vec<u32> = lineup.assignment.iter().map(|s| s.player_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SQUAD_SIZE);
    }

    #[test]
    fn test_first_found_assignment_wins_ties() {
        // Roster iteration order decides ties, so the earlier of two equal
        // midfielders gets the slot.
        let mut roster = vec![create_goalkeeper(0, 80)];
        for i in 1..=9 {
            roster.push(create_player(i, vec![PlayerPositionType::MidfielderCenter], 70));
        }
        roster.push(create_player(20, vec![PlayerPositionType::MidfielderCenter], 64));
        roster.push(create_player(21, vec![PlayerPositionType::MidfielderCenter], 64));

        let lineup =
            SquadSelector::select_for_positions(&roster, &gk_and_ten_cm_slots()).unwrap();

        let chosen: Vec<u32> = lineup.assignment.iter().map(|s| s.player_id).collect();
        assert!(chosen.contains(&20));
        assert!(!chosen.contains(&21));
    }

    #[test]
    fn test_full_squad_can_field_every_catalog_formation() {
        let roster = balanced_roster();
        let results = SquadSelector::select_all(&roster);

        assert_eq!(results.len(), TACTICS_POSITIONS_LEN);

        // Ordered by total rating, best first.
        for pair in results.windows(2) {
            assert!(pair[0].lineup.total_rating >= pair[1].lineup.total_rating);
        }
    }

    #[test]
    fn test_select_all_agrees_with_individual_selection() {
        let roster = balanced_roster();
        let results = SquadSelector::select_all(&roster);

        for result in &results {
            let single =
                SquadSelector::select(&roster, &Tactics::new(result.tactic_type)).unwrap();
            assert_eq!(single.total_rating, result.lineup.total_rating);
        }
    }

    const TACTICS_POSITIONS_LEN: usize = 25;

    /// A roster wide enough to field any formation in the catalog: keepers,
    /// full-backs, wing-backs, centre-backs, every midfield role and a
    /// forward line.
    fn balanced_roster() -> Vec<Player> {
        let mut roster = vec![create_goalkeeper(1, 82), create_goalkeeper(2, 75)];

        let outfield: Vec<(u32, Vec<PlayerPositionType>, u8)> = vec![
            (10, vec![PlayerPositionType::DefenderLeft, PlayerPositionType::WingbackLeft], 78),
            (11, vec![PlayerPositionType::DefenderRight, PlayerPositionType::WingbackRight], 77),
            (12, vec![PlayerPositionType::DefenderCenter], 80),
            (13, vec![PlayerPositionType::DefenderCenter], 79),
            (14, vec![PlayerPositionType::DefenderCenter], 76),
            (15, vec![PlayerPositionType::DefenderCenter, PlayerPositionType::DefensiveMidfielder], 74),
            (16, vec![PlayerPositionType::WingbackLeft, PlayerPositionType::MidfielderLeft], 73),
            (17, vec![PlayerPositionType::WingbackRight, PlayerPositionType::MidfielderRight], 72),
            (20, vec![PlayerPositionType::DefensiveMidfielder, PlayerPositionType::MidfielderCenter], 81),
            (21, vec![PlayerPositionType::DefensiveMidfielder], 70),
            (22, vec![PlayerPositionType::MidfielderCenter], 83),
            (23, vec![PlayerPositionType::MidfielderCenter], 78),
            (24, vec![PlayerPositionType::MidfielderLeft, PlayerPositionType::ForwardLeft], 77),
            (25, vec![PlayerPositionType::MidfielderRight, PlayerPositionType::ForwardRight], 76),
            (26, vec![PlayerPositionType::AttackingMidfielderCenter, PlayerPositionType::MidfielderCenter], 84),
            (27, vec![PlayerPositionType::AttackingMidfielderCenter], 71),
            (30, vec![PlayerPositionType::ForwardLeft, PlayerPositionType::Striker], 82),
            (31, vec![PlayerPositionType::ForwardRight, PlayerPositionType::Striker], 81),
            (32, vec![PlayerPositionType::ForwardCenter, PlayerPositionType::Striker], 80),
            (33, vec![PlayerPositionType::Striker, PlayerPositionType::ForwardCenter], 85),
            (34, vec![PlayerPositionType::Striker], 72),
        ];

        for (id, positions, value) in outfield {
            roster.push(create_player(id, positions, value));
        }

        roster
    }
}
