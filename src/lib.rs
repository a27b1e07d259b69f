//! Clanger is the core domain library for an AFL fantasy contest platform.
//!
//! It models the contest lobby, season-long draft leagues, and the snake-draft
//! ordering those leagues run on. The draft engine enforces the rules a live
//! draft room relies on: picks happen in snake order, a player can be drafted
//! at most once per season, and a league completes when every roster is full.
//! All of it is pure, synchronous state. Persistence and realtime delivery
//! live elsewhere.

mod draft_order;
pub mod fixtures;
mod model;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use draft_order::{generate_snake_draft_order, get_pick_info, DraftOrderError, PickInfo};
pub use model::{
    Contest, ContestStatus, ContestType, LeagueStandings, MatchResult, Matchup, MatchupPlayer,
    MatchupTeam, Player, PlayerStatus, Position, RosterConfig, SeasonLongRosterConfig,
    TeamStanding, UserEntry,
};

/// The contest lobby: every open contest and draft league, keyed by id.
///
/// No more than one league or contest with the same id can exist in a Lobby at
/// any given time.
#[derive(Debug, Default)]
pub struct Lobby {
    leagues: HashMap<String, League>,
    contests: HashMap<String, Contest>,
}

impl Lobby {
    pub fn new() -> Lobby {
        Lobby::default()
    }

    /// Adds a [`League`] to the lobby.
    ///
    /// # Errors
    ///
    /// If a league with the same id already exists, returns
    /// [`LobbyError::LeagueIdInUse`].
    pub fn add_league(&mut self, league: League) -> Result<&League, LobbyError> {
        if self.leagues.contains_key(&league.id) {
            return Err(LobbyError::LeagueIdInUse);
        }
        let id = league.id.clone();
        self.leagues.insert(id.clone(), league);
        Ok(&self.leagues[&id])
    }

    /// Retrieves a [`League`] by id, if it exists.
    pub fn league(&self, id: &str) -> Result<&League, LobbyError> {
        self.leagues.get(id).ok_or(LobbyError::LeagueNotFound)
    }

    /// Retrieves a mutable [`League`] by id, for running its draft.
    pub fn league_mut(&mut self, id: &str) -> Result<&mut League, LobbyError> {
        self.leagues.get_mut(id).ok_or(LobbyError::LeagueNotFound)
    }

    /// Removes a [`League`] by id and returns it, if it exists.
    pub fn remove_league(&mut self, id: &str) -> Result<League, LobbyError> {
        self.leagues.remove(id).ok_or(LobbyError::LeagueNotFound)
    }

    /// Adds a [`Contest`] to the lobby.
    ///
    /// # Errors
    ///
    /// If a contest with the same id already exists, returns
    /// [`LobbyError::ContestIdInUse`].
    pub fn add_contest(&mut self, contest: Contest) -> Result<&Contest, LobbyError> {
        if self.contests.contains_key(&contest.id) {
            return Err(LobbyError::ContestIdInUse);
        }
        let id = contest.id.clone();
        self.contests.insert(id.clone(), contest);
        Ok(&self.contests[&id])
    }

    /// Retrieves a [`Contest`] by id, if it exists.
    pub fn contest(&self, id: &str) -> Result<&Contest, LobbyError> {
        self.contests.get(id).ok_or(LobbyError::ContestNotFound)
    }

    /// All contests currently in the given lifecycle state.
    pub fn contests_by_status(&self, status: ContestStatus) -> Vec<&Contest> {
        self.contests
            .values()
            .filter(|c| c.status == status)
            .collect()
    }

    /// All contests of the given type (daily or season-long).
    pub fn contests_by_type(&self, contest_type: ContestType) -> Vec<&Contest> {
        self.contests
            .values()
            .filter(|c| c.contest_type == contest_type)
            .collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LobbyError {
    #[error("no league with that id in the lobby")]
    LeagueNotFound,
    #[error("a league with that id already exists")]
    LeagueIdInUse,
    #[error("no contest with that id in the lobby")]
    ContestNotFound,
    #[error("a contest with that id already exists")]
    ContestIdInUse,
}

/// Where a league is in its draft lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStatus {
    #[serde(rename = "waiting")]
    Waiting,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

/// A season-long draft league.
///
/// A league is created in [`DraftStatus::Waiting`] with its commissioner as
/// the first member. Members join until the draft starts; starting the draft
/// fixes the pick order for the whole season. Every pick runs through
/// [`League::lock_pick`], which keeps the draft history and member rosters
/// consistent. Once every team has drafted a full roster the league moves to
/// [`DraftStatus::Completed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    id: String,
    name: String,
    commissioner: String,
    members: Vec<LeagueMember>,
    max_members: u32,
    entry_fee: f64,
    prize_pool: f64,
    draft_status: DraftStatus,
    // User ids in seat order, fixed when the draft starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    draft_order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draft_start_time: Option<DateTime<Utc>>,
    roster_config: SeasonLongRosterConfig,
    /// Seconds each member has to make a pick.
    pick_time_limit: u32,
    picks: Vec<DraftPick>,
}

impl League {
    /// Creates a new league in the waiting state.
    ///
    /// The commissioner pays the entry fee and becomes the first member; their
    /// commissioner flag is set regardless of how the member was built.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        commissioner: LeagueMember,
        max_members: u32,
        entry_fee: f64,
        roster_config: SeasonLongRosterConfig,
        pick_time_limit: u32,
    ) -> League {
        let mut commissioner = commissioner;
        commissioner.is_commissioner = true;
        League {
            id: id.into(),
            name: name.into(),
            commissioner: commissioner.user_id.clone(),
            members: vec![commissioner],
            max_members,
            entry_fee,
            prize_pool: entry_fee,
            draft_status: DraftStatus::Waiting,
            draft_order: None,
            draft_start_time: None,
            roster_config,
            pick_time_limit,
            picks: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// User id of the league's commissioner.
    pub fn commissioner(&self) -> &str {
        &self.commissioner
    }

    pub fn members(&self) -> &[LeagueMember] {
        &self.members
    }

    pub fn draft_status(&self) -> DraftStatus {
        self.draft_status
    }

    /// The fixed pick order, available once the draft has started.
    pub fn draft_order(&self) -> Option<&[String]> {
        self.draft_order.as_deref()
    }

    pub fn draft_start_time(&self) -> Option<DateTime<Utc>> {
        self.draft_start_time
    }

    pub fn set_draft_start_time(&mut self, start: DateTime<Utc>) {
        self.draft_start_time = Some(start);
    }

    pub fn roster_config(&self) -> &SeasonLongRosterConfig {
        &self.roster_config
    }

    pub fn pick_time_limit(&self) -> u32 {
        self.pick_time_limit
    }

    pub fn prize_pool(&self) -> f64 {
        self.prize_pool
    }

    /// Every pick made so far, in pick-number order.
    pub fn picks(&self) -> &[DraftPick] {
        &self.picks
    }

    /// Number of drafting teams.
    pub fn team_count(&self) -> u32 {
        self.members.len() as u32
    }

    /// Total picks in a complete draft: one per roster slot per team.
    pub fn full_draft_length(&self) -> u32 {
        self.team_count() * self.roster_config.total_roster_size()
    }

    /// Retrieves a member by user id, if they are in the league.
    pub fn member(&self, user_id: &str) -> Option<&LeagueMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Adds a member to the league and returns them.
    ///
    /// Their entry fee is added to the prize pool.
    ///
    /// # Errors
    ///
    /// Joining is only possible while the league is waiting for its draft,
    /// otherwise returns [`LeagueError::DraftAlreadyStarted`]. A full league
    /// returns [`LeagueError::LeagueFull`], and a user id already in the
    /// league returns [`LeagueError::AlreadyMember`].
    pub fn join(&mut self, member: LeagueMember) -> Result<&LeagueMember, LeagueError> {
        if self.draft_status != DraftStatus::Waiting {
            return Err(LeagueError::DraftAlreadyStarted);
        }
        if self.members.len() as u32 >= self.max_members {
            return Err(LeagueError::LeagueFull);
        }
        if self.member(&member.user_id).is_some() {
            return Err(LeagueError::AlreadyMember);
        }
        self.prize_pool += self.entry_fee;
        self.members.push(member);
        Ok(self.members.last().expect("member was just added"))
    }

    /// Starts the draft, fixing the pick order for the season.
    ///
    /// Members with an explicit draft position are seated in that order;
    /// members without one are shuffled into the remaining seats. Every
    /// member's draft position is rewritten to their final 1-based seat.
    ///
    /// # Errors
    ///
    /// A league that is not waiting returns
    /// [`LeagueError::DraftAlreadyStarted`]; a league with fewer than two
    /// members returns [`LeagueError::NotEnoughMembers`].
    pub fn start_draft(&mut self) -> Result<&[String], LeagueError> {
        if self.draft_status != DraftStatus::Waiting {
            return Err(LeagueError::DraftAlreadyStarted);
        }
        if self.members.len() < 2 {
            return Err(LeagueError::NotEnoughMembers);
        }
        let mut seeded: Vec<&LeagueMember> = self
            .members
            .iter()
            .filter(|m| m.draft_position.is_some())
            .collect();
        seeded.sort_by_key(|m| m.draft_position);
        let mut unseeded: Vec<&LeagueMember> = self
            .members
            .iter()
            .filter(|m| m.draft_position.is_none())
            .collect();
        unseeded.shuffle(&mut rand::thread_rng());
        let order: Vec<String> = seeded
            .into_iter()
            .chain(unseeded)
            .map(|m| m.user_id.clone())
            .collect();
        for (seat, user_id) in order.iter().enumerate() {
            if let Some(member) = self.get_member_mut(user_id) {
                member.draft_position = Some(seat as u32 + 1);
            }
        }
        self.draft_status = DraftStatus::InProgress;
        Ok(self.draft_order.insert(order))
    }

    /// Resolves which seat is on the clock for the pick about to occur.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::DraftNotInProgress`] unless the draft is
    /// running.
    pub fn on_the_clock(&self) -> Result<PickInfo, LeagueError> {
        if self.draft_status != DraftStatus::InProgress {
            return Err(LeagueError::DraftNotInProgress);
        }
        let info = get_pick_info(self.picks.len() as u32, self.team_count())?;
        Ok(info)
    }

    /// Returns the member whose turn it is to pick.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::DraftNotInProgress`] unless the draft is
    /// running.
    pub fn current_picker(&self) -> Result<&LeagueMember, LeagueError> {
        let info = self.on_the_clock()?;
        let order = self
            .draft_order
            .as_ref()
            .ok_or(LeagueError::DraftNotInProgress)?;
        let user_id = &order[info.team_index as usize];
        self.member(user_id).ok_or(LeagueError::MemberNotFound)
    }

    /// Records a pick for the given user and returns the resulting
    /// [`DraftPick`].
    ///
    /// The player is appended to the member's roster and the pick to the
    /// league's draft history. When the last roster slot of the last team is
    /// filled, the league transitions to [`DraftStatus::Completed`].
    ///
    /// # Errors
    ///
    /// Before the draft starts returns [`LeagueError::DraftNotStarted`], and
    /// after it completes [`LeagueError::DraftComplete`]. An unknown user
    /// returns [`LeagueError::MemberNotFound`]; a user picking out of turn
    /// returns [`LeagueError::OutOfTurn`]; a player already on any roster
    /// returns [`LeagueError::PlayerAlreadyDrafted`].
    pub fn lock_pick(&mut self, user_id: &str, player: Player) -> Result<&DraftPick, LeagueError> {
        match self.draft_status {
            DraftStatus::Waiting => return Err(LeagueError::DraftNotStarted),
            DraftStatus::Completed => return Err(LeagueError::DraftComplete),
            DraftStatus::InProgress => {}
        }
        if self.member(user_id).is_none() {
            return Err(LeagueError::MemberNotFound);
        }
        if self.picks.iter().any(|p| p.player.id == player.id) {
            return Err(LeagueError::PlayerAlreadyDrafted);
        }
        let picker = self.current_picker()?;
        if picker.user_id != user_id {
            return Err(LeagueError::OutOfTurn);
        }
        let username = picker.username.clone();
        let info = self.on_the_clock()?;
        let pick = DraftPick {
            pick_number: self.picks.len() as u32,
            round: info.round,
            pick_in_round: info.pick_in_round,
            user_id: user_id.to_string(),
            username,
            player: player.clone(),
            timestamp: Utc::now(),
        };
        let member = self
            .get_member_mut(user_id)
            .ok_or(LeagueError::MemberNotFound)?;
        member.roster.push(player);
        self.picks.push(pick);
        if self.picks.len() as u32 == self.full_draft_length() {
            self.draft_status = DraftStatus::Completed;
        }
        Ok(self.picks.last().expect("pick was just recorded"))
    }

    fn get_member_mut(&mut self, user_id: &str) -> Option<&mut LeagueMember> {
        self.members.iter_mut().find(|m| m.user_id == user_id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("the league is full")]
    LeagueFull,
    #[error("that user is already in the league")]
    AlreadyMember,
    #[error("no member with that user id in the league")]
    MemberNotFound,
    #[error("the draft has already started")]
    DraftAlreadyStarted,
    #[error("the draft has not started yet")]
    DraftNotStarted,
    #[error("the draft is not in progress")]
    DraftNotInProgress,
    #[error("the draft is complete")]
    DraftComplete,
    #[error("a draft needs at least two members")]
    NotEnoughMembers,
    #[error("it is not that user's turn to pick")]
    OutOfTurn,
    #[error("that player has already been drafted")]
    PlayerAlreadyDrafted,
    #[error(transparent)]
    Order(#[from] DraftOrderError),
}

/// A user's membership in a [`League`], including the roster they draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMember {
    user_id: String,
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    is_commissioner: bool,
    /// 1-based seat in the draft order, once assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    draft_position: Option<u32>,
    roster: Vec<Player>,
}

impl LeagueMember {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> LeagueMember {
        LeagueMember {
            user_id: user_id.into(),
            username: username.into(),
            avatar: None,
            is_commissioner: false,
            draft_position: None,
            roster: Vec::new(),
        }
    }

    /// Requests a specific 1-based seat for the draft.
    pub fn with_draft_position(mut self, position: u32) -> LeagueMember {
        self.draft_position = Some(position);
        self
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> LeagueMember {
        self.avatar = Some(url.into());
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_commissioner(&self) -> bool {
        self.is_commissioner
    }

    pub fn draft_position(&self) -> Option<u32> {
        self.draft_position
    }

    /// Players drafted so far, in the order they were picked.
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }
}

/// An immutable record of one completed pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    /// Absolute 0-based pick number across the whole draft.
    pub pick_number: u32,
    /// 1-based round the pick was made in.
    pub round: u32,
    /// 1-based slot within the round.
    pub pick_in_round: u32,
    pub user_id: String,
    pub username: String,
    pub player: Player,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn tiny_roster() -> SeasonLongRosterConfig {
        SeasonLongRosterConfig {
            on_field: RosterConfig {
                defenders: 0,
                midfielders: 1,
                rucks: 0,
                forwards: 0,
            },
            emergencies: RosterConfig {
                defenders: 0,
                midfielders: 0,
                rucks: 0,
                forwards: 0,
            },
            bench: 1,
        }
    }

    fn two_member_league() -> League {
        let mut league = League::new(
            "league-t",
            "Test League",
            LeagueMember::new("user-1", "FootyFan99").with_draft_position(1),
            4,
            10.0,
            tiny_roster(),
            fixtures::DEFAULT_PICK_TIME,
        );
        league
            .join(LeagueMember::new("user-2", "BigMarks").with_draft_position(2))
            .expect("league has room");
        league
    }

    #[test]
    fn commissioner_is_first_member() {
        let league = two_member_league();
        assert_eq!(league.commissioner(), "user-1");
        assert!(league.members()[0].is_commissioner());
        assert!(!league.members()[1].is_commissioner());
    }

    #[test]
    fn joining_grows_the_prize_pool() {
        let league = two_member_league();
        assert_eq!(league.prize_pool(), 20.0);
    }

    #[test]
    fn full_league_rejects_joins() {
        let mut league = fixtures::sample_league();
        league
            .join(LeagueMember::new("user-9", "LatePlate"))
            .expect("ninth member fits");
        league
            .join(LeagueMember::new("user-10", "TenthMan"))
            .expect("tenth member fits");
        match league.join(LeagueMember::new("user-11", "Straggler")) {
            Err(LeagueError::LeagueFull) => {}
            other => panic!("expected LeagueFull, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_user_cannot_join_twice() {
        let mut league = two_member_league();
        match league.join(LeagueMember::new("user-2", "BigMarksAgain")) {
            Err(LeagueError::AlreadyMember) => {}
            other => panic!("expected AlreadyMember, got {other:?}"),
        }
    }

    #[test]
    fn no_joins_once_the_draft_has_started() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        match league.join(LeagueMember::new("user-3", "TooSlow")) {
            Err(LeagueError::DraftAlreadyStarted) => {}
            other => panic!("expected DraftAlreadyStarted, got {other:?}"),
        }
    }

    #[test]
    fn start_draft_seats_members_by_draft_position() {
        let mut league = fixtures::sample_league();
        let order = league.start_draft().expect("eight members can draft");
        let expected: Vec<String> = (1..=8).map(|i| format!("user-{i}")).collect();
        assert_eq!(order, expected.as_slice());
        assert_eq!(league.draft_status(), DraftStatus::InProgress);
        for (seat, user_id) in expected.iter().enumerate() {
            let member = league.member(user_id).expect("member exists");
            assert_eq!(member.draft_position(), Some(seat as u32 + 1));
        }
    }

    #[test]
    fn start_draft_seats_unseeded_members_somewhere() {
        let mut league = League::new(
            "league-u",
            "Unseeded",
            LeagueMember::new("user-1", "FootyFan99"),
            4,
            10.0,
            tiny_roster(),
            fixtures::DEFAULT_PICK_TIME,
        );
        league
            .join(LeagueMember::new("user-2", "BigMarks"))
            .expect("league has room");
        league
            .join(LeagueMember::new("user-3", "GoalKicker"))
            .expect("league has room");
        let order: Vec<String> = league
            .start_draft()
            .expect("three members can draft")
            .to_vec();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["user-1", "user-2", "user-3"]);
        for user_id in &order {
            assert!(league
                .member(user_id)
                .expect("member exists")
                .draft_position()
                .is_some());
        }
    }

    #[test]
    fn draft_needs_two_members() {
        let mut league = League::new(
            "league-s",
            "Solo",
            LeagueMember::new("user-1", "FootyFan99"),
            4,
            10.0,
            tiny_roster(),
            fixtures::DEFAULT_PICK_TIME,
        );
        match league.start_draft() {
            Err(LeagueError::NotEnoughMembers) => {}
            other => panic!("expected NotEnoughMembers, got {other:?}"),
        }
    }

    #[test]
    fn draft_cannot_start_twice() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        match league.start_draft() {
            Err(LeagueError::DraftAlreadyStarted) => {}
            other => panic!("expected DraftAlreadyStarted, got {other:?}"),
        }
    }

    #[test]
    fn no_picks_before_the_draft_starts() {
        let mut league = two_member_league();
        let players = fixtures::sample_players();
        match league.lock_pick("user-1", players[0].clone()) {
            Err(LeagueError::DraftNotStarted) => {}
            other => panic!("expected DraftNotStarted, got {other:?}"),
        }
    }

    #[test]
    fn picks_snake_through_the_order() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        let players = fixtures::sample_players();
        // Snake order for two teams: 0, 1, 1, 0.
        assert_eq!(
            league.current_picker().expect("draft running").user_id(),
            "user-1"
        );
        league
            .lock_pick("user-1", players[0].clone())
            .expect("in turn");
        assert_eq!(
            league.current_picker().expect("draft running").user_id(),
            "user-2"
        );
        league
            .lock_pick("user-2", players[1].clone())
            .expect("in turn");
        assert_eq!(
            league.current_picker().expect("draft running").user_id(),
            "user-2"
        );
        league
            .lock_pick("user-2", players[2].clone())
            .expect("in turn");
        assert_eq!(
            league.current_picker().expect("draft running").user_id(),
            "user-1"
        );
    }

    #[test]
    fn out_of_turn_picks_are_rejected() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        let players = fixtures::sample_players();
        match league.lock_pick("user-2", players[0].clone()) {
            Err(LeagueError::OutOfTurn) => {}
            other => panic!("expected OutOfTurn, got {other:?}"),
        }
    }

    #[test]
    fn a_player_can_only_be_drafted_once() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        let players = fixtures::sample_players();
        league
            .lock_pick("user-1", players[0].clone())
            .expect("in turn");
        match league.lock_pick("user-2", players[0].clone()) {
            Err(LeagueError::PlayerAlreadyDrafted) => {}
            other => panic!("expected PlayerAlreadyDrafted, got {other:?}"),
        }
    }

    #[test]
    fn unknown_users_cannot_pick() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        let players = fixtures::sample_players();
        match league.lock_pick("user-99", players[0].clone()) {
            Err(LeagueError::MemberNotFound) => {}
            other => panic!("expected MemberNotFound, got {other:?}"),
        }
    }

    #[test]
    fn picks_record_round_and_slot() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        let players = fixtures::sample_players();
        let pick = league
            .lock_pick("user-1", players[0].clone())
            .expect("in turn")
            .clone();
        assert_eq!(pick.pick_number, 0);
        assert_eq!(pick.round, 1);
        assert_eq!(pick.pick_in_round, 1);
        league
            .lock_pick("user-2", players[1].clone())
            .expect("in turn");
        let pick = league
            .lock_pick("user-2", players[2].clone())
            .expect("in turn")
            .clone();
        assert_eq!(pick.pick_number, 2);
        assert_eq!(pick.round, 2);
        assert_eq!(pick.pick_in_round, 1);
        assert_eq!(pick.user_id, "user-2");
    }

    #[test]
    fn draft_completes_when_every_roster_is_full() {
        let mut league = two_member_league();
        league.start_draft().expect("two members can draft");
        let players = fixtures::sample_players();
        // Two teams, two roster slots each: four picks end the draft.
        league
            .lock_pick("user-1", players[0].clone())
            .expect("in turn");
        league
            .lock_pick("user-2", players[1].clone())
            .expect("in turn");
        league
            .lock_pick("user-2", players[2].clone())
            .expect("in turn");
        league
            .lock_pick("user-1", players[3].clone())
            .expect("in turn");
        assert_eq!(league.draft_status(), DraftStatus::Completed);
        assert_eq!(league.picks().len(), 4);
        for member in league.members() {
            assert_eq!(member.roster().len(), 2);
        }
        match league.lock_pick("user-1", players[4].clone()) {
            Err(LeagueError::DraftComplete) => {}
            other => panic!("expected DraftComplete, got {other:?}"),
        }
    }

    #[test]
    fn draft_history_matches_the_generated_order() {
        let mut league = fixtures::sample_league();
        league.start_draft().expect("eight members can draft");
        let rounds = 2;
        let order = generate_snake_draft_order(league.team_count(), rounds).expect("valid inputs");
        let players = fixtures::sample_players();
        let mut pool = players.iter().cycle();
        for pick_number in 0..league.team_count() * rounds {
            let picker = league.current_picker().expect("draft running");
            let round = (pick_number / league.team_count()) as usize;
            let slot = (pick_number % league.team_count()) as usize;
            let expected_seat = order[round][slot];
            assert_eq!(
                picker.user_id(),
                format!("user-{}", expected_seat + 1),
                "pick {pick_number} went to the wrong seat"
            );
            let mut player = pool.next().expect("cycle never ends").clone();
            player.id = format!("pick-target-{pick_number}");
            let user_id = picker.user_id().to_string();
            league.lock_pick(&user_id, player).expect("in turn");
        }
    }

    #[test]
    fn lobby_stores_and_filters_contests() {
        let mut lobby = Lobby::new();
        for contest in fixtures::sample_contests() {
            lobby.add_contest(contest).expect("unique ids");
        }
        let live = lobby.contests_by_status(ContestStatus::Live);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, "afl-r1-friday");
        let season_long = lobby.contests_by_type(ContestType::SeasonLong);
        assert_eq!(season_long.len(), 1);
        assert_eq!(season_long[0].league_id.as_deref(), Some("league-1"));
        match lobby.add_contest(fixtures::sample_contests().remove(0)) {
            Err(LobbyError::ContestIdInUse) => {}
            other => panic!("expected ContestIdInUse, got {other:?}"),
        }
    }

    #[test]
    fn lobby_league_lookup_round_trip() {
        let mut lobby = Lobby::new();
        lobby
            .add_league(fixtures::sample_league())
            .expect("unique id");
        match lobby.add_league(fixtures::sample_league()) {
            Err(LobbyError::LeagueIdInUse) => {}
            other => panic!("expected LeagueIdInUse, got {other:?}"),
        }
        assert_eq!(
            lobby.league("league-1").expect("league exists").name(),
            "The Footy Fanatics"
        );
        lobby
            .league_mut("league-1")
            .expect("league exists")
            .start_draft()
            .expect("eight members can draft");
        let removed = lobby.remove_league("league-1").expect("league exists");
        assert_eq!(removed.draft_status(), DraftStatus::InProgress);
        match lobby.league("league-1") {
            Err(LobbyError::LeagueNotFound) => {}
            other => panic!("expected LeagueNotFound, got {other:?}"),
        }
    }

    #[test]
    fn league_serializes_with_wire_names() {
        let league = fixtures::sample_league();
        let json = serde_json::to_value(&league).expect("serializes");
        assert_eq!(json["draftStatus"], "waiting");
        assert_eq!(json["pickTimeLimit"], 90);
        assert_eq!(json["rosterConfig"]["onField"]["MID"], 7);
        assert_eq!(json["members"][0]["isCommissioner"], true);
        assert!(json.get("draftOrder").is_none());
        let back: League = serde_json::from_value(json).expect("deserializes");
        assert_eq!(back.members().len(), 8);
        assert_eq!(back.draft_status(), DraftStatus::Waiting);
    }
}
