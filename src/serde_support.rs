use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board::{Board, CELL_COUNT};
use crate::game::Game;

/// A board serializes as its 16 row-major values: "2,0,0,4,...".
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let values: Vec<String> = self.values().iter().map(|v| v.to_string()).collect();
        serializer.serialize_str(&values.join(","))
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != CELL_COUNT {
            return Err(serde::de::Error::custom(format!(
                "Expected {} cell values, got {}",
                CELL_COUNT,
                parts.len()
            )));
        }

        let mut values = [0u32; CELL_COUNT];
        for (slot, part) in values.iter_mut().zip(parts) {
            let value: u32 = part
                .trim()
                .parse()
                .map_err(|e| serde::de::Error::custom(format!("Invalid cell value: {}", e)))?;
            if value != 0 && (value < 2 || !value.is_power_of_two()) {
                return Err(serde::de::Error::custom(format!(
                    "Cell value must be 0 or a power of two >= 2, got {}",
                    value
                )));
            }
            *slot = value;
        }

        Ok(Board::from_values(values))
    }
}

/// A game serializes as "score:board", e.g. "24:2,0,0,4,...".
///
/// The over flag is not stored; it is recomputed from the board on restore.
impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let values: Vec<String> = self.board().values().iter().map(|v| v.to_string()).collect();
        let full = format!("{}:{}", self.score(), values.join(","));
        serializer.serialize_str(&full)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (score_str, board_str) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom("Expected \"score:board\" format"))?;

        let score: u32 = score_str
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid score: {}", e)))?;

        let board = Board::deserialize(board_str.to_string().into_deserializer())?;

        Ok(Game::restore(board, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::game::is_game_over;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_board_round_trip() {
        let mut values = [0; CELL_COUNT];
        values[0] = 2;
        values[7] = 1024;
        values[15] = 4;
        let board = Board::from_values(values);

        let json = serde_json::to_string(&board).expect("serialize board");
        let restored: Board = serde_json::from_str(&json).expect("deserialize board");
        assert_eq!(restored, board);
    }

    #[test]
    fn test_board_rejects_wrong_length() {
        let result: Result<Board, _> = serde_json::from_str("\"2,0,4\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_board_rejects_non_power_of_two() {
        let result: Result<Board, _> =
            serde_json::from_str("\"3,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\"");
        assert!(result.is_err());
        let result: Result<Board, _> =
            serde_json::from_str("\"1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_game_round_trip_preserves_score_and_board() {
        let mut game = Game::with_seed(9);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..8 {
            for direction in Direction::ALL {
                game.make_move(direction, &mut rng);
            }
        }

        let json = serde_json::to_string(&game).expect("serialize game");
        let restored: Game = serde_json::from_str(&json).expect("deserialize game");
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.score(), game.score());
        assert_eq!(restored.is_over(), game.is_over());
    }

    #[test]
    fn test_restored_terminal_game_is_over() {
        let board = Board::from_values([2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2]);
        assert!(is_game_over(&board));
        let game = Game::restore(board, 120);
        let json = serde_json::to_string(&game).expect("serialize game");
        let restored: Game = serde_json::from_str(&json).expect("deserialize game");
        assert!(restored.is_over());
    }

    #[test]
    fn test_game_rejects_missing_separator() {
        let result: Result<Game, _> =
            serde_json::from_str("\"2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\"");
        assert!(result.is_err());
    }
}
