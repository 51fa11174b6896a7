use std::cmp::min;

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::{
    data::{Square, SquareState},
    error::FieldError,
    model::{FieldParams, FieldStats, GameStatus, MinePlacement, Pos, SquareView},
};

fn generate_mines<R: Rng + ?Sized>(
    params: &FieldParams,
    rng: &mut R,
) -> Result<Vec<bool>, FieldError> {
    let length = params.width * params.height;

    match &params.placement {
        MinePlacement::Density { percent } => {
            let percent = min(*percent, 100) as usize;
            let mut mines_left = length * percent / 100;

            let mut mines = Vec::with_capacity(length);
            for cells_left in (1..=length).rev() {
                let mine = rng.random_ratio(mines_left as u32, cells_left as u32);
                mines.push(mine);
                if mine {
                    mines_left -= 1;
                }
            }

            Ok(mines)
        }
        MinePlacement::Fixed { mines: layout } => {
            let mut mines = vec![false; length];
            for pos in layout {
                if pos.x >= params.width || pos.y >= params.height {
                    return Err(FieldError::OutOfBounds { x: pos.x, y: pos.y });
                }
                mines[pos.x + pos.y * params.width] = true;
            }

            Ok(mines)
        }
    }
}

fn count_adjacent_mines(mines: &[bool], index: usize, width: usize, height: usize) -> i8 {
    let x = index % width;
    let y = index / width;
    let mut count = 0;

    for dy in -1..=1i32 {
        for dx in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let new_x = x as i32 + dx;
            let new_y = y as i32 + dy;

            if new_x >= 0 && new_x < width as i32 && new_y >= 0 && new_y < height as i32 {
                let adj_index = (new_x as usize) + (new_y as usize) * width;
                if mines[adj_index] {
                    count += 1;
                }
            }
        }
    }

    count
}

fn generate_squares(mines: &[bool], width: usize, height: usize) -> Vec<Square> {
    mines
        .iter()
        .enumerate()
        .map(|(i, mine)| Square {
            mine: *mine,
            adjacent: if *mine {
                -1
            } else {
                count_adjacent_mines(mines, i, width, height)
            },
            state: SquareState::Hidden,
        })
        .collect()
}

/// The minefield: a rectangular grid of squares plus the game-over flag.
///
/// One `Field` is one game. It is built with its final mine layout and
/// adjacency counts up front and mutated only through [`Field::reveal`] and
/// [`Field::toggle_flag`]; starting a new game means constructing a new field.
#[derive(Debug)]
pub struct Field {
    width: usize,
    height: usize,
    mines: usize,
    revealed: usize,
    flagged: usize,
    game_over: bool,
    squares: Vec<Square>,
}

impl Field {
    /// Build a field with mines drawn from the thread-local RNG.
    pub fn new(params: FieldParams) -> Result<Self, FieldError> {
        Self::with_rng(params, &mut rand::rng())
    }

    /// Build a field with mines drawn from the given RNG, so a seeded RNG
    /// reproduces the exact same layout.
    pub fn with_rng<R: Rng + ?Sized>(params: FieldParams, rng: &mut R) -> Result<Self, FieldError> {
        if params.width == 0 || params.height == 0 {
            return Err(FieldError::InvalidDimensions {
                width: params.width,
                height: params.height,
            });
        }

        let mines = generate_mines(&params, rng)?;
        let mine_count = mines.iter().filter(|mine| **mine).count();
        info!(
            "Creating field: {}x{} with {} mines",
            params.width, params.height, mine_count
        );

        Ok(Self {
            width: params.width,
            height: params.height,
            mines: mine_count,
            revealed: 0,
            flagged: 0,
            game_over: false,
            squares: generate_squares(&mines, params.width, params.height),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reveal the square at `pos`.
    ///
    /// Revealing an already revealed square is a no-op, as is any reveal once
    /// the game is finished. A flagged square is not revealed; the flag has to
    /// be removed first. Revealing a mine marks that one square revealed and
    /// ends the game without cascading. Revealing a square with zero adjacent
    /// mines flood-fills its connected zero region plus the numbered border.
    #[instrument(level = "trace", skip(self), fields(x = pos.x, y = pos.y))]
    pub fn reveal(&mut self, pos: Pos) -> Result<(), FieldError> {
        if !self.validate_pos(&pos) {
            warn!("Invalid reveal position: ({}, {})", pos.x, pos.y);
            return Err(FieldError::OutOfBounds { x: pos.x, y: pos.y });
        }

        if self.is_finished() {
            debug!(
                "Ignoring reveal action on finished game at ({}, {})",
                pos.x, pos.y
            );
            return Ok(());
        }

        let index = pos.x + pos.y * self.width;
        match self.squares[index].state {
            SquareState::Revealed => return Ok(()),
            SquareState::Flagged => {
                debug!("Ignoring reveal on flagged square ({}, {})", pos.x, pos.y);
                return Ok(());
            }
            SquareState::Hidden => {}
        }

        if self.squares[index].mine {
            warn!("Mine hit at ({}, {}) - game over", pos.x, pos.y);
            self.squares[index].state = SquareState::Revealed;
            self.revealed += 1;
            self.game_over = true;
            return Ok(());
        }

        debug!(
            "Revealing square ({}, {}) with {} adjacent mines",
            pos.x, pos.y, self.squares[index].adjacent
        );
        self.flood_reveal(pos);

        if self.is_won() {
            info!("All safe squares revealed - game won");
        }

        Ok(())
    }

    // Worklist instead of recursion so the depth stays bounded on big boards.
    // Every square is revealed at most once, so this visits each square at
    // most once per call.
    fn flood_reveal(&mut self, start: Pos) {
        let mut frontier = vec![start];

        while let Some(pos) = frontier.pop() {
            let index = pos.x + pos.y * self.width;
            match self.squares[index].state {
                SquareState::Revealed | SquareState::Flagged => continue,
                SquareState::Hidden => {}
            }

            self.squares[index].state = SquareState::Revealed;
            self.revealed += 1;

            if self.squares[index].adjacent != 0 {
                continue;
            }

            for dy in -1..=1i32 {
                for dx in -1..=1i32 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }

                    let new_x = pos.x as i32 + dx;
                    let new_y = pos.y as i32 + dy;

                    if new_x < 0
                        || new_x >= self.width as i32
                        || new_y < 0
                        || new_y >= self.height as i32
                    {
                        continue;
                    }

                    let neighbor = Pos {
                        x: new_x as usize,
                        y: new_y as usize,
                    };
                    if !self.squares[neighbor.x + neighbor.y * self.width].mine {
                        frontier.push(neighbor);
                    }
                }
            }
        }
    }

    /// Toggle the flag on the square at `pos`.
    ///
    /// Flagging a revealed square is a no-op, as is any flag action once the
    /// game is finished. Unflagging never reveals the square.
    #[instrument(level = "trace", skip(self), fields(x = pos.x, y = pos.y))]
    pub fn toggle_flag(&mut self, pos: Pos) -> Result<(), FieldError> {
        if !self.validate_pos(&pos) {
            warn!("Invalid flag position: ({}, {})", pos.x, pos.y);
            return Err(FieldError::OutOfBounds { x: pos.x, y: pos.y });
        }

        if self.is_finished() {
            debug!(
                "Ignoring flag action on finished game at ({}, {})",
                pos.x, pos.y
            );
            return Ok(());
        }

        let index = pos.x + pos.y * self.width;
        match self.squares[index].state {
            SquareState::Hidden => {
                self.squares[index].state = SquareState::Flagged;
                self.flagged += 1;
                debug!("Square ({}, {}) flagged", pos.x, pos.y);
            }
            SquareState::Flagged => {
                self.squares[index].state = SquareState::Hidden;
                self.flagged -= 1;
                debug!("Square ({}, {}) unflagged", pos.x, pos.y);
            }
            SquareState::Revealed => {
                debug!(
                    "Ignoring flag action on revealed square ({}, {})",
                    pos.x, pos.y
                );
            }
        }

        Ok(())
    }

    /// True once a mine has been revealed. Never resets.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        !self.game_over && self.width * self.height == self.mines + self.revealed
    }

    fn is_finished(&self) -> bool {
        self.game_over || self.is_won()
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Lost
        } else if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            squares: self.width * self.height,
            mines: self.mines,
            revealed: self.revealed,
            flagged: self.flagged,
        }
    }

    /// View of a single square.
    pub fn square(&self, pos: Pos) -> Result<SquareView, FieldError> {
        if !self.validate_pos(&pos) {
            return Err(FieldError::OutOfBounds { x: pos.x, y: pos.y });
        }

        Ok(self.view(&self.squares[pos.x + pos.y * self.width]))
    }

    /// View of the whole board, row by row.
    pub fn rows(&self) -> Vec<Vec<SquareView>> {
        self.squares
            .iter()
            .map(|square| self.view(square))
            .collect::<Vec<SquareView>>()
            .chunks(self.width)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    fn view(&self, square: &Square) -> SquareView {
        match square.state {
            SquareState::Revealed if square.mine => SquareView::Mine,
            SquareState::Revealed => SquareView::Revealed {
                adjacent: square.adjacent as u8,
            },
            // End-of-game disclosure: once the game is decided, remaining
            // mines are visible without mutating the grid.
            _ if square.mine && self.is_finished() => SquareView::Mine,
            SquareState::Hidden => SquareView::Hidden,
            SquareState::Flagged => SquareView::Flagged,
        }
    }

    fn validate_pos(&self, pos: &Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}
