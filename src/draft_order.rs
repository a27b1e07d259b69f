//! Snake-draft ordering and pick resolution.
//!
//! Both functions are pure and stateless; the draft room recomputes them as
//! often as it likes. [`get_pick_info`] is the algebraic inverse of
//! [`generate_snake_draft_order`]: for any pick number in range, the resolved
//! team index equals the entry at that round and slot of the generated order.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftOrderError {
    /// A draft needs at least one team.
    #[error("team count must be at least 1")]
    InvalidTeamCount,
}

/// The position on the clock for a given absolute pick number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickInfo {
    /// 1-based round number.
    pub round: u32,
    /// 1-based slot within the round.
    pub pick_in_round: u32,
    /// 0-based index into the league's draft order.
    pub team_index: u32,
}

/// Builds the full round-by-round pick order for a snake draft.
///
/// Each round is a permutation of `0..team_count`. Round 1 is ascending, and
/// every other round is reversed, so the team picking last in one round picks
/// first in the next.
///
/// # Errors
///
/// Returns [`DraftOrderError::InvalidTeamCount`] if `team_count` is zero.
pub fn generate_snake_draft_order(
    team_count: u32,
    total_rounds: u32,
) -> Result<Vec<Vec<u32>>, DraftOrderError> {
    if team_count == 0 {
        return Err(DraftOrderError::InvalidTeamCount);
    }
    let mut order = Vec::with_capacity(total_rounds as usize);
    for round in 0..total_rounds {
        let mut round_order: Vec<u32> = (0..team_count).collect();
        if round % 2 == 1 {
            round_order.reverse();
        }
        order.push(round_order);
    }
    Ok(order)
}

/// Resolves an absolute 0-based pick number to a round, in-round slot, and
/// team index, consistent with [`generate_snake_draft_order`].
///
/// `pick_number` is the count of picks already made, i.e. the index of the
/// pick about to occur.
///
/// # Errors
///
/// Returns [`DraftOrderError::InvalidTeamCount`] if `team_count` is zero.
pub fn get_pick_info(pick_number: u32, team_count: u32) -> Result<PickInfo, DraftOrderError> {
    if team_count == 0 {
        return Err(DraftOrderError::InvalidTeamCount);
    }
    let round = pick_number / team_count;
    let pick_in_round = pick_number % team_count;
    let is_reversed = round % 2 == 1;
    let team_index = if is_reversed {
        team_count - 1 - pick_in_round
    } else {
        pick_in_round
    };
    Ok(PickInfo {
        round: round + 1,
        pick_in_round: pick_in_round + 1,
        team_index,
    })
}
