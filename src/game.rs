//! Rule engine: full-turn orchestration
//!
//! [`Game`] owns the board and both players and drives one placement through
//! the complete turn pipeline: validation, booping (with placement rights
//! returned for ejected pieces), the promotion pass for both players, the
//! victory pass, and the turn switch. Victory is judged on the
//! post-promotion board: a single move can promote one player's kittens and
//! still end the game on another line the same turn.

use std::fmt;

use crate::board::{Board, Color, Piece, PieceKind, Pos};
use crate::rules::{execute_boops, find_lines, has_line};

/// Kittens each player starts with
pub const STARTING_KITTENS: u8 = 8;

/// Number of kitten placement rights consumed, and cat placement rights
/// minted, by one completed promotion line
pub const PROMOTION_LINE: u8 = 3;

/// Why a placement was rejected. Rejections never mutate the game; the
/// driver decides how to present the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The game already has a winner
    GameOver,
    /// Coordinates outside the 6x6 grid
    OutOfRange,
    /// The target cell is occupied
    Occupied,
    /// The acting player has no placement right for this weight class
    NoReserve(PieceKind),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::GameOver => write!(f, "the game is already over"),
            PlaceError::OutOfRange => write!(f, "that position is off the board"),
            PlaceError::Occupied => write!(f, "that position is already occupied"),
            PlaceError::NoReserve(PieceKind::Kitten) => write!(f, "no kittens left to place"),
            PlaceError::NoReserve(PieceKind::Cat) => write!(f, "no cats available to place"),
        }
    }
}

/// One player's placeable reserves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    pub kittens: u8,
    pub cats: u8,
}

impl PlayerState {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kittens: STARTING_KITTENS,
            cats: 0,
        }
    }

    /// Placement rights left for a weight class
    #[inline]
    pub fn available(&self, kind: PieceKind) -> u8 {
        match kind {
            PieceKind::Kitten => self.kittens,
            PieceKind::Cat => self.cats,
        }
    }

    #[inline]
    pub fn can_place(&self, kind: PieceKind) -> bool {
        self.available(kind) > 0
    }

    /// Consume one placement right
    #[inline]
    pub fn take(&mut self, kind: PieceKind) {
        match kind {
            PieceKind::Kitten => self.kittens = self.kittens.saturating_sub(1),
            PieceKind::Cat => self.cats = self.cats.saturating_sub(1),
        }
    }

    /// Return one placement right (a piece booped off the board)
    #[inline]
    pub fn give(&mut self, kind: PieceKind) {
        match kind {
            PieceKind::Kitten => self.kittens += 1,
            PieceKind::Cat => self.cats += 1,
        }
    }

    /// Credit one completed kitten line: the three consumed kitten rights
    /// come back and three cat rights are minted.
    #[inline]
    fn promote(&mut self) {
        self.kittens += PROMOTION_LINE;
        self.cats += PROMOTION_LINE;
    }
}

/// Full game state: board, both players, whose turn it is, and the
/// terminal flags. Constructed per match and mutated turn by turn; once
/// `game_over` is set no further placement is accepted until [`reset`].
///
/// [`reset`]: Game::reset
///
/// # Example
///
/// ```
/// use boop::{Game, PieceKind, Color};
///
/// let mut game = Game::new();
/// assert_eq!(game.current, Color::Orange);
/// assert!(game.place_piece(2, 2, PieceKind::Kitten));
/// assert_eq!(game.current, Color::Gray);
///
/// // Cats are only available after a promotion
/// assert!(!game.place_piece(3, 3, PieceKind::Cat));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub players: [PlayerState; 2],
    pub current: Color,
    pub game_over: bool,
    pub winner: Option<Color>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [PlayerState::new("Player 1"), PlayerState::new("Player 2")],
            current: Color::Orange,
            game_over: false,
            winner: None,
        }
    }

    #[inline]
    pub fn player(&self, color: Color) -> &PlayerState {
        &self.players[color.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, color: Color) -> &mut PlayerState {
        &mut self.players[color.index()]
    }

    /// Check a placement for the current player without applying it.
    /// Returns the typed position on success, the rejection reason
    /// otherwise.
    pub fn validate_placement(&self, row: i32, col: i32, kind: PieceKind) -> Result<Pos, PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        if !Pos::is_valid(row, col) {
            return Err(PlaceError::OutOfRange);
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) {
            return Err(PlaceError::Occupied);
        }
        if !self.player(self.current).can_place(kind) {
            return Err(PlaceError::NoReserve(kind));
        }
        Ok(pos)
    }

    /// Play one full turn for the current player. Returns `false` (with no
    /// state change) when the placement is rejected; see
    /// [`validate_placement`] for the reason.
    ///
    /// [`validate_placement`]: Game::validate_placement
    pub fn place_piece(&mut self, row: i32, col: i32, kind: PieceKind) -> bool {
        let pos = match self.validate_placement(row, col, kind) {
            Ok(pos) => pos,
            Err(_) => return false,
        };

        let color = self.current;
        self.player_mut(color).take(kind);
        self.board.place(pos, Piece::new(color, kind));

        let ejected = execute_boops(&mut self.board, pos, kind);
        for piece in ejected {
            self.player_mut(piece.color).give(piece.kind);
        }

        self.promotion_pass();
        self.victory_pass();

        if !self.game_over {
            self.switch_player();
        }

        true
    }

    /// Consume every kitten line for both players. Lines are consumed in
    /// scan order; a line overlapping one already consumed this pass fails
    /// the re-inspection (its cells are empty) and is skipped.
    fn promotion_pass(&mut self) {
        for color in [Color::Orange, Color::Gray] {
            let target = Piece::new(color, PieceKind::Kitten);
            let lines = find_lines(&self.board, color, PieceKind::Kitten);
            for line in lines {
                if line.iter().all(|&pos| self.board.get(pos) == Some(target)) {
                    for &pos in &line {
                        self.board.remove(pos);
                    }
                    self.player_mut(color).promote();
                }
            }
        }
    }

    /// First cat line wins. Checked for both players in seat order against
    /// the post-promotion board; nothing further is processed once a winner
    /// is set.
    fn victory_pass(&mut self) {
        for color in [Color::Orange, Color::Gray] {
            if has_line(&self.board, color, PieceKind::Cat) {
                self.game_over = true;
                self.winner = Some(color);
                return;
            }
        }
    }

    #[inline]
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Back to the initial position: empty board, eight kittens and no cats
    /// per player, first player to move, terminal flags cleared.
    pub fn reset(&mut self) {
        self.board.clear();
        for player in &mut self.players {
            player.kittens = STARTING_KITTENS;
            player.cats = 0;
        }
        self.current = Color::Orange;
        self.game_over = false;
        self.winner = None;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
