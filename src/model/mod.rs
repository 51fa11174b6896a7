use serde::{Deserialize, Serialize};

/// What a caller is allowed to see of one square.
///
/// A mine only shows up as [`SquareView::Mine`] once that square has been
/// revealed or the game is finished (end-of-game disclosure); until then it
/// renders as hidden or flagged like any other square.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "state")]
pub enum SquareView {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "flagged")]
    Flagged,
    #[serde(rename = "revealed")]
    Revealed { adjacent: u8 },
    #[serde(rename = "mine")]
    Mine,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

/// How mines get onto the board.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "policy")]
pub enum MinePlacement {
    /// Roughly `percent` of all squares become mines. The exact count is
    /// `width * height * percent / 100`, deterministic from the dimensions;
    /// only which squares are picked depends on the RNG. Values above 100
    /// are clamped.
    #[serde(rename = "density")]
    Density { percent: u8 },
    /// Mines at literal coordinates, for reproducible boards. Duplicates
    /// collapse to a single mine.
    #[serde(rename = "fixed")]
    Fixed { mines: Vec<Pos> },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldParams {
    pub width: usize,
    pub height: usize,
    pub placement: MinePlacement,
}

impl Default for FieldParams {
    fn default() -> Self {
        GameType::EASY.params()
    }
}

/// Where the game stands. Derived from the grid on demand, never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Aggregate counters for progress display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldStats {
    pub squares: usize,
    pub mines: usize,
    pub revealed: usize,
    pub flagged: usize,
}

/// A named difficulty: dimensions plus mine density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameType {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub mines_percent: u8,
}

impl GameType {
    pub const EASY: GameType = GameType {
        name: "Easy",
        width: 10,
        height: 10,
        mines_percent: 7,
    };
    pub const MEDIUM: GameType = GameType {
        name: "Medium",
        width: 30,
        height: 15,
        mines_percent: 14,
    };
    pub const HARD: GameType = GameType {
        name: "Hard",
        width: 60,
        height: 20,
        mines_percent: 21,
    };

    pub const ALL: [GameType; 3] = [Self::EASY, Self::MEDIUM, Self::HARD];

    pub fn params(&self) -> FieldParams {
        FieldParams {
            width: self.width,
            height: self.height,
            placement: MinePlacement::Density {
                percent: self.mines_percent,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_types_match_known_presets() {
        assert_eq!(GameType::ALL.len(), 3);
        assert_eq!(GameType::EASY.name, "Easy");
        assert_eq!((GameType::EASY.width, GameType::EASY.height), (10, 10));
        assert_eq!(GameType::EASY.mines_percent, 7);
        assert_eq!((GameType::MEDIUM.width, GameType::MEDIUM.height), (30, 15));
        assert_eq!(GameType::MEDIUM.mines_percent, 14);
        assert_eq!((GameType::HARD.width, GameType::HARD.height), (60, 20));
        assert_eq!(GameType::HARD.mines_percent, 21);
    }

    #[test]
    fn square_view_serializes_tagged() {
        let json = serde_json::to_value(SquareView::Revealed { adjacent: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"state": "revealed", "adjacent": 3}));

        let json = serde_json::to_value(SquareView::Hidden).unwrap();
        assert_eq!(json, serde_json::json!({"state": "hidden"}));
    }

    #[test]
    fn default_params_are_the_easy_board() {
        let params = FieldParams::default();
        assert_eq!((params.width, params.height), (10, 10));
        assert!(matches!(
            params.placement,
            MinePlacement::Density { percent: 7 }
        ));
    }
}
