//! Descriptive entities for daily contests and head-to-head display.
//!
//! These are the shapes the rest of the platform serializes to and from; field
//! and variant names follow the wire format used by the web front-end
//! (camelCase fields, position codes like `"DEF"`, statuses like
//! `"in-progress"`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four AFL position categories a roster slot can be reserved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "RUC")]
    Ruck,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    /// The short code used on the wire and in lobby displays.
    pub fn code(&self) -> &'static str {
        match self {
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Ruck => "RUC",
            Position::Forward => "FWD",
        }
    }
}

/// Slot counts per position for a single-contest ("daily") roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(rename = "DEF")]
    pub defenders: u32,
    #[serde(rename = "MID")]
    pub midfielders: u32,
    #[serde(rename = "RUC")]
    pub rucks: u32,
    #[serde(rename = "FWD")]
    pub forwards: u32,
}

impl RosterConfig {
    /// Number of slots reserved for the given position.
    pub fn slots(&self, position: Position) -> u32 {
        match position {
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Ruck => self.rucks,
            Position::Forward => self.forwards,
        }
    }

    /// Total roster size across all four positions.
    pub fn total(&self) -> u32 {
        self.defenders + self.midfielders + self.rucks + self.forwards
    }
}

/// Roster allocation for a season-long draft league.
///
/// On-field slots score, emergencies are positional backups, and the bench is
/// an unrestricted reserve. In the reference configuration these are 18 + 4 + 6
/// for a 28-player roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLongRosterConfig {
    pub on_field: RosterConfig,
    pub emergencies: RosterConfig,
    pub bench: u32,
}

impl SeasonLongRosterConfig {
    /// Players each team must draft to fill its roster.
    pub fn total_roster_size(&self) -> u32 {
        self.on_field.total() + self.emergencies.total() + self.bench
    }
}

/// Injury/availability status shown next to a player in the lobby.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Healthy,
    Questionable,
    Out,
}

/// A draftable AFL player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Three-letter AFL club code, e.g. `"MEL"`.
    pub team: String,
    pub position: Position,
    pub salary: u32,
    pub projected_points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_points: Option<f64>,
    /// Season average, used to order the draft pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_points: Option<f64>,
    pub opponent: String,
    pub game_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlayerStatus>,
}

/// Lifecycle of a contest or matchup as displayed in the lobby.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Upcoming,
    Live,
    Completed,
}

/// Whether a contest is a one-off salary-cap contest or a season-long league.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestType {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "season-long")]
    SeasonLong,
}

/// A lobby entry a user can buy into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: String,
    pub name: String,
    pub entry_fee: f64,
    pub prize_pool: f64,
    pub entries: u32,
    pub max_entries: u32,
    pub start_time: DateTime<Utc>,
    pub status: ContestStatus,
    #[serde(rename = "type")]
    pub contest_type: ContestType,
    pub guaranteed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_cap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_config: Option<RosterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_id: Option<String>,
}

/// A user's entry into a single contest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    pub id: String,
    pub contest_id: String,
    pub contest_name: String,
    pub entry_fee: f64,
    pub potential_win: f64,
    pub picks: Vec<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_entrants: Option<u32>,
    pub points: f64,
    pub status: ContestStatus,
}

/// A rostered player with live scoring state, as shown in a matchup view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub live_points: f64,
    pub is_playing: bool,
    pub game_status: ContestStatus,
}

/// One side of a head-to-head matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupTeam {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub players: Vec<MatchupPlayer>,
    pub total_points: f64,
    pub projected_total: f64,
}

/// A head-to-head matchup between two league members in a given round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub id: String,
    pub league_id: String,
    pub league_name: String,
    pub round: u32,
    pub home_team: MatchupTeam,
    pub away_team: MatchupTeam,
    pub status: ContestStatus,
    pub game_time: DateTime<Utc>,
}

/// Win/loss/tie marker for a standings row's recent form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "T")]
    Tie,
}

/// One row of a season-long league ladder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub rank: u32,
    pub user_id: String,
    pub username: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    /// Current streak, e.g. `"W3"` or `"L1"`.
    pub streak: String,
    pub last_five: Vec<MatchResult>,
}

/// The full ladder for a league at a point in the season.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStandings {
    pub league_id: String,
    pub league_name: String,
    pub current_round: u32,
    pub total_rounds: u32,
    pub standings: Vec<TeamStanding>,
}
