//! Session setup: names and turn order.

use super::player::{COMPUTER_NAME, Player, Seat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Name given to player one when their name is left blank.
pub const DEFAULT_PLAYER_ONE_NAME: &str = "Player 1";

/// Which player opens each round.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Starter {
    /// Player one starts.
    #[default]
    One,
    /// Player two starts.
    Two,
}

impl From<Starter> for Seat {
    fn from(starter: Starter) -> Self {
        match starter {
            Starter::One => Seat::One,
            Starter::Two => Seat::Two,
        }
    }
}

/// Setup form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRequest {
    /// First player's name. Blank means [`DEFAULT_PLAYER_ONE_NAME`].
    pub player_one: String,
    /// Second player's name. Blank means the computer opponent.
    pub player_two: String,
    /// Who opens each round.
    pub starter: Starter,
}

impl SetupRequest {
    /// Creates a setup request.
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        starter: Starter,
    ) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
            starter,
        }
    }

    /// Builds both players. Exactly one of them starts first.
    #[instrument(skip(self), fields(starter = %self.starter))]
    pub fn into_players(self) -> (Player, Player) {
        let one = resolve_name(&self.player_one, DEFAULT_PLAYER_ONE_NAME);
        let two = resolve_name(&self.player_two, COMPUTER_NAME);
        let first = Seat::from(self.starter);
        debug!(player_one = %one, player_two = %two, ?first, "Players created");
        (
            Player::new(one, first == Seat::One),
            Player::new(two, first == Seat::Two),
        )
    }
}

fn resolve_name(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_blank_second_name_is_computer() {
        let (one, two) = SetupRequest::new("Ann", "", Starter::One).into_players();
        assert_eq!(one.name(), "Ann");
        assert_eq!(two.name(), COMPUTER_NAME);
        assert!(two.is_computer());
    }

    #[test]
    fn test_both_names_blank() {
        let (one, two) = SetupRequest::new("  ", "", Starter::One).into_players();
        assert_eq!(one.name(), DEFAULT_PLAYER_ONE_NAME);
        assert_eq!(two.name(), COMPUTER_NAME);
    }

    #[test]
    fn test_typed_computer_name_is_the_ai() {
        let (_, two) = SetupRequest::new("Ann", " Computer ", Starter::One).into_players();
        assert!(two.is_computer());
        let (_, two) = SetupRequest::new("Ann", "computer", Starter::One).into_players();
        assert!(!two.is_computer());
    }

    #[test]
    fn test_starter_two_plays_x() {
        let (one, two) = SetupRequest::new("Ann", "Bo", Starter::Two).into_players();
        assert!(!one.starts_first());
        assert!(two.starts_first());
        assert_eq!(two.mark(), Mark::X);
        assert_eq!(one.mark(), Mark::O);
    }

    #[test]
    fn test_starter_parses_form_values() {
        assert_eq!("one".parse::<Starter>(), Ok(Starter::One));
        assert_eq!("Two".parse::<Starter>(), Ok(Starter::Two));
        assert!("three".parse::<Starter>().is_err());
    }
}
