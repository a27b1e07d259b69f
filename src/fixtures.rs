//! Reference data and sample fixtures.
//!
//! The front-end ships a mock data layer for development; here that data lives
//! behind constructor functions instead of module-level singletons, so tests
//! and demos take owned copies rather than sharing state.

use chrono::{DateTime, Utc};

use crate::model::{
    Contest, ContestStatus, ContestType, LeagueStandings, MatchResult, Matchup, MatchupPlayer,
    MatchupTeam, Player, PlayerStatus, Position, RosterConfig, SeasonLongRosterConfig,
    TeamStanding, UserEntry,
};
use crate::{League, LeagueMember};

/// Seconds each member has on the clock by default.
pub const DEFAULT_PICK_TIME: u32 = 90;

/// Salary cap for daily contests.
pub const DAILY_SALARY_CAP: u32 = 100_000;

/// AFL clubs as (code, name) pairs.
pub const AFL_TEAMS: [(&str, &str); 18] = [
    ("ADE", "Adelaide Crows"),
    ("BRI", "Brisbane Lions"),
    ("CAR", "Carlton"),
    ("COL", "Collingwood"),
    ("ESS", "Essendon"),
    ("FRE", "Fremantle"),
    ("GEE", "Geelong Cats"),
    ("GCS", "Gold Coast Suns"),
    ("GWS", "GWS Giants"),
    ("HAW", "Hawthorn"),
    ("MEL", "Melbourne"),
    ("NTH", "North Melbourne"),
    ("PTA", "Port Adelaide"),
    ("RIC", "Richmond"),
    ("STK", "St Kilda"),
    ("SYD", "Sydney Swans"),
    ("WCE", "West Coast Eagles"),
    ("WBD", "Western Bulldogs"),
];

/// The 8-player daily roster: 2 DEF, 3 MID, 1 RUC, 2 FWD.
pub fn daily_roster_config() -> RosterConfig {
    RosterConfig {
        defenders: 2,
        midfielders: 3,
        rucks: 1,
        forwards: 2,
    }
}

/// The 28-player season-long roster: 18 on field, 4 emergencies, 6 bench.
pub fn season_long_roster_config() -> SeasonLongRosterConfig {
    SeasonLongRosterConfig {
        on_field: RosterConfig {
            defenders: 5,
            midfielders: 7,
            rucks: 1,
            forwards: 5,
        },
        emergencies: RosterConfig {
            defenders: 1,
            midfielders: 1,
            rucks: 1,
            forwards: 1,
        },
        bench: 6,
    }
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("fixture timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

fn player(
    id: &str,
    name: &str,
    team: &str,
    position: Position,
    salary: u32,
    projected_points: f64,
    opponent: &str,
    game_time: &str,
) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        team: team.to_string(),
        position,
        salary,
        projected_points,
        actual_points: None,
        avg_points: None,
        opponent: opponent.to_string(),
        game_time: game_time.to_string(),
        status: Some(PlayerStatus::Healthy),
    }
}

/// A sample round-1 player pool covering all four positions.
pub fn sample_players() -> Vec<Player> {
    vec![
        player(
            "afl-d1",
            "Steven May",
            "MEL",
            Position::Defender,
            8_200,
            72.5,
            "vs SYD",
            "Fri 7:50 PM",
        ),
        player(
            "afl-d2",
            "Harris Andrews",
            "BRI",
            Position::Defender,
            8_800,
            78.2,
            "vs GEE",
            "Sat 1:45 PM",
        ),
        player(
            "afl-d3",
            "Tom Stewart",
            "GEE",
            Position::Defender,
            9_500,
            95.3,
            "@ BRI",
            "Sat 1:45 PM",
        ),
        player(
            "afl-m1",
            "Marcus Bontempelli",
            "WBD",
            Position::Midfielder,
            11_800,
            118.5,
            "@ COL",
            "Fri 7:50 PM",
        ),
        player(
            "afl-m2",
            "Clayton Oliver",
            "MEL",
            Position::Midfielder,
            11_200,
            112.3,
            "vs SYD",
            "Fri 7:50 PM",
        ),
        player(
            "afl-m3",
            "Patrick Cripps",
            "CAR",
            Position::Midfielder,
            11_500,
            115.8,
            "vs RIC",
            "Thu 7:10 PM",
        ),
        player(
            "afl-m4",
            "Nick Daicos",
            "COL",
            Position::Midfielder,
            11_000,
            110.2,
            "vs WBD",
            "Fri 7:50 PM",
        ),
        player(
            "afl-r1",
            "Max Gawn",
            "MEL",
            Position::Ruck,
            10_200,
            102.8,
            "vs SYD",
            "Fri 7:50 PM",
        ),
        player(
            "afl-r2",
            "Brodie Grundy",
            "SYD",
            Position::Ruck,
            9_800,
            98.5,
            "@ MEL",
            "Fri 7:50 PM",
        ),
        player(
            "afl-f1",
            "Charlie Curnow",
            "CAR",
            Position::Forward,
            10_500,
            92.4,
            "vs RIC",
            "Thu 7:10 PM",
        ),
        player(
            "afl-f2",
            "Jeremy Cameron",
            "GEE",
            Position::Forward,
            9_800,
            86.7,
            "@ BRI",
            "Sat 1:45 PM",
        ),
        player(
            "afl-f3",
            "Isaac Heeney",
            "SYD",
            Position::Forward,
            9_400,
            83.2,
            "@ MEL",
            "Fri 7:50 PM",
        ),
    ]
}

/// Sample lobby contests: daily contests in various states plus a season-long
/// league entry.
pub fn sample_contests() -> Vec<Contest> {
    vec![
        Contest {
            id: "afl-r1-classic".to_string(),
            name: "Round 1 Classic".to_string(),
            entry_fee: 5.0,
            prize_pool: 10_000.0,
            entries: 1_847,
            max_entries: 2_500,
            start_time: timestamp("2025-03-13T19:10:00+11:00"),
            status: ContestStatus::Upcoming,
            contest_type: ContestType::Daily,
            guaranteed: true,
            round: Some(1),
            salary_cap: Some(DAILY_SALARY_CAP),
            roster_config: Some(daily_roster_config()),
            league_id: None,
        },
        Contest {
            id: "afl-r1-friday".to_string(),
            name: "Friday Night Fever".to_string(),
            entry_fee: 3.0,
            prize_pool: 5_000.0,
            entries: 890,
            max_entries: 2_000,
            start_time: timestamp("2025-03-14T19:50:00+11:00"),
            status: ContestStatus::Live,
            contest_type: ContestType::Daily,
            guaranteed: true,
            round: Some(1),
            salary_cap: Some(DAILY_SALARY_CAP),
            roster_config: Some(daily_roster_config()),
            league_id: None,
        },
        Contest {
            id: "afl-league-1".to_string(),
            name: "Season-Long Draft League".to_string(),
            entry_fee: 50.0,
            prize_pool: 500.0,
            entries: 8,
            max_entries: 10,
            start_time: timestamp("2025-03-10T18:00:00+11:00"),
            status: ContestStatus::Upcoming,
            contest_type: ContestType::SeasonLong,
            guaranteed: false,
            round: Some(1),
            salary_cap: None,
            roster_config: None,
            league_id: Some("league-1".to_string()),
        },
    ]
}

/// Players from the pool with the given position, in pool order.
pub fn players_by_position(players: &[Player], position: Position) -> Vec<&Player> {
    players.iter().filter(|p| p.position == position).collect()
}

/// Sample entries for a user's my-contests view: one live, one upcoming.
pub fn sample_user_entries() -> Vec<UserEntry> {
    vec![
        UserEntry {
            id: "entry-1".to_string(),
            contest_id: "afl-r1-friday".to_string(),
            contest_name: "Friday Night Fever".to_string(),
            entry_fee: 3.0,
            potential_win: 50.0,
            picks: sample_players().into_iter().take(8).collect(),
            current_rank: Some(127),
            total_entrants: Some(890),
            points: 542.5,
            status: ContestStatus::Live,
        },
        UserEntry {
            id: "entry-2".to_string(),
            contest_id: "afl-r1-classic".to_string(),
            contest_name: "Round 1 Classic".to_string(),
            entry_fee: 5.0,
            potential_win: 100.0,
            picks: Vec::new(),
            current_rank: None,
            total_entrants: None,
            points: 0.0,
            status: ContestStatus::Upcoming,
        },
    ]
}

fn matchup_player(
    player: &Player,
    live_points: f64,
    is_playing: bool,
    game_status: ContestStatus,
) -> MatchupPlayer {
    MatchupPlayer {
        player: player.clone(),
        live_points,
        is_playing,
        game_status,
    }
}

/// Sample head-to-head matchups for the sample league: one live, one upcoming.
pub fn sample_matchups() -> Vec<Matchup> {
    let players = sample_players();
    vec![
        Matchup {
            id: "matchup-1".to_string(),
            league_id: "league-1".to_string(),
            league_name: "AFL Season League 2025".to_string(),
            round: 1,
            status: ContestStatus::Live,
            game_time: timestamp("2025-03-14T19:50:00+11:00"),
            home_team: MatchupTeam {
                id: "team-1".to_string(),
                user_id: "user-1".to_string(),
                username: "ClangerKing".to_string(),
                total_points: 842.5,
                projected_total: 1_650.0,
                players: vec![
                    matchup_player(&players[0], 45.2, false, ContestStatus::Completed),
                    matchup_player(&players[3], 62.8, true, ContestStatus::Live),
                    matchup_player(&players[7], 98.4, true, ContestStatus::Live),
                    matchup_player(&players[9], 88.2, false, ContestStatus::Completed),
                ],
            },
            away_team: MatchupTeam {
                id: "team-2".to_string(),
                user_id: "user-2".to_string(),
                username: "FootyFanatic".to_string(),
                total_points: 798.3,
                projected_total: 1_580.0,
                players: vec![
                    matchup_player(&players[1], 58.4, false, ContestStatus::Completed),
                    matchup_player(&players[4], 72.1, true, ContestStatus::Live),
                    matchup_player(&players[8], 85.6, true, ContestStatus::Live),
                    matchup_player(&players[10], 92.3, false, ContestStatus::Completed),
                ],
            },
        },
        Matchup {
            id: "matchup-2".to_string(),
            league_id: "league-1".to_string(),
            league_name: "AFL Season League 2025".to_string(),
            round: 1,
            status: ContestStatus::Upcoming,
            game_time: timestamp("2025-03-15T13:45:00+11:00"),
            home_team: MatchupTeam {
                id: "team-3".to_string(),
                user_id: "user-3".to_string(),
                username: "MidfielderMaster".to_string(),
                total_points: 0.0,
                projected_total: 1_720.0,
                players: vec![
                    matchup_player(&players[2], 0.0, false, ContestStatus::Upcoming),
                    matchup_player(&players[5], 0.0, false, ContestStatus::Upcoming),
                ],
            },
            away_team: MatchupTeam {
                id: "team-4".to_string(),
                user_id: "user-4".to_string(),
                username: "DefensiveWall".to_string(),
                total_points: 0.0,
                projected_total: 1_680.0,
                players: vec![
                    matchup_player(&players[6], 0.0, false, ContestStatus::Upcoming),
                    matchup_player(&players[11], 0.0, false, ContestStatus::Upcoming),
                ],
            },
        },
    ]
}

/// An eight-member league waiting for its draft to start.
///
/// Members are seeded with draft positions 1..=8; the commissioner is
/// `user-1`.
pub fn sample_league() -> League {
    let usernames = [
        "FootyFan99",
        "BigMarks",
        "GoalKicker",
        "TackleKing",
        "SpeccyMaster",
        "HandballHero",
        "RuckRover",
        "WingWizard",
    ];
    let commissioner = LeagueMember::new("user-1", usernames[0]).with_draft_position(1);
    let mut league = League::new(
        "league-1",
        "The Footy Fanatics",
        commissioner,
        10,
        50.0,
        season_long_roster_config(),
        DEFAULT_PICK_TIME,
    );
    league.set_draft_start_time(timestamp("2025-03-10T18:00:00+11:00"));
    for (i, username) in usernames.iter().enumerate().skip(1) {
        let member = LeagueMember::new(format!("user-{}", i + 1), *username)
            .with_draft_position(i as u32 + 1);
        league.join(member).expect("fixture league has room");
    }
    league
}

/// Ladder for the sample league after three rounds.
pub fn sample_standings() -> LeagueStandings {
    let rows = [
        ("user-1", "ClangerKing", 3, 0, 4_892.5, 4_125.3, "W3"),
        ("user-3", "MidfielderMaster", 2, 1, 4_650.2, 4_280.1, "W2"),
        ("user-5", "RuckRoyalty", 2, 1, 4_520.8, 4_390.5, "L1"),
        ("user-2", "FootyFanatic", 2, 1, 4_480.3, 4_320.7, "W1"),
        ("user-6", "ForwardFlash", 1, 2, 4_350.1, 4_520.9, "L2"),
        ("user-4", "DefensiveWall", 1, 2, 4_280.6, 4_590.2, "L1"),
        ("user-7", "BenchBoss", 1, 2, 4_150.4, 4_480.8, "W1"),
        ("user-8", "TradeMaster", 0, 3, 3_890.2, 4_720.5, "L3"),
    ];
    let standings = rows
        .iter()
        .enumerate()
        .map(
            |(i, (user_id, username, wins, losses, points_for, points_against, streak))| {
                let last_five = streak_form(streak, *wins, *losses);
                TeamStanding {
                    rank: i as u32 + 1,
                    user_id: user_id.to_string(),
                    username: username.to_string(),
                    wins: *wins,
                    losses: *losses,
                    ties: 0,
                    points_for: *points_for,
                    points_against: *points_against,
                    streak: streak.to_string(),
                    last_five,
                }
            },
        )
        .collect();
    LeagueStandings {
        league_id: "league-1".to_string(),
        league_name: "AFL Season League 2025".to_string(),
        current_round: 3,
        total_rounds: 23,
        standings,
    }
}

// Reconstructs a three-game form line consistent with the streak and record.
// A streak that does not look like "W3" or "L1" yields an empty form line.
fn streak_form(streak: &str, wins: u32, losses: u32) -> Vec<MatchResult> {
    let played = (wins + losses).min(3);
    let on_streak = match streak.chars().next() {
        Some('W') => MatchResult::Win,
        Some('L') => MatchResult::Loss,
        _ => return Vec::new(),
    };
    let streak_len: u32 = streak
        .get(1..)
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);
    let off_streak = match on_streak {
        MatchResult::Win => MatchResult::Loss,
        _ => MatchResult::Win,
    };
    (0..played)
        .map(|i| if i < streak_len { on_streak } else { off_streak })
        .collect()
}
