//! The game session: board, turn counter, state and history.

use super::action::{Move, MoveError, MoveRecord, MoveReport};
use super::config::GameConfig;
use super::contracts::{Contract, MoveContract};
use super::invariants::{InvariantSet, XiangqiInvariants};
use super::rules::check::{Threat, find_threat, is_in_check};
use super::rules::checkmate::is_checkmate;
use super::{Board, Coordinate, GameState, Piece, Side, TrialMove};
use tracing::{debug, error, info, instrument};

/// A custom starting position failed validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid starting position: {}", violations.join("; "))]
pub struct PositionError {
    /// Description of every violated invariant.
    pub violations: Vec<String>,
}

impl std::error::Error for PositionError {}

/// A xiangqi game in progress or concluded.
///
/// Rejected moves leave every field untouched. Accepted moves relocate one
/// piece, append to the history and advance the turn counter by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn_counter: u32,
    first_turn: u32,
    state: GameState,
    history: Vec<MoveRecord>,
    config: GameConfig,
}

impl Game {
    /// Standard opening position, Red to move, turn 1.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Standard opening position with the given rule settings.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::standard(),
            turn_counter: 1,
            first_turn: 1,
            state: GameState::InProgress,
            history: Vec::new(),
            config,
        }
    }

    /// Starts from a custom position with `to_move` on move.
    ///
    /// Black to move starts the counter at 2 so parity still selects the side.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, to_move: Side, config: GameConfig) -> Result<Self, PositionError> {
        let turn = match to_move {
            Side::Red => 1,
            Side::Black => 2,
        };
        let game = Self {
            board,
            turn_counter: turn,
            first_turn: turn,
            state: GameState::InProgress,
            history: Vec::new(),
            config,
        };
        XiangqiInvariants::check_all(&game).map_err(|violations| {
            let err = PositionError {
                violations: violations.into_iter().map(|v| v.description).collect(),
            };
            debug!(%err, "Rejected custom position");
            err
        })?;
        Ok(game)
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always ([`MoveContract::pre`])
    /// - Self-check rejected through a trial move
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(turn = self.turn_counter))]
    pub fn make_move(&mut self, from: Coordinate, to: Coordinate) -> Result<MoveReport, MoveError> {
        let action = Move::new(from, to);
        #[cfg(debug_assertions)]
        let before = MoveContract::snapshot(self);

        if let Err(err) = MoveContract::pre(self, &action) {
            debug!(%err, "Move rejected");
            return Err(err);
        }

        let mover = self.turn();
        let trial = TrialMove::apply(&mut self.board, from, to).ok_or(MoveError::NoPieceAtOrigin(from))?;
        if is_in_check(&self.board, mover) {
            trial.undo(&mut self.board);
            debug!(%mover, "Move rejected: mover left in check");
            return Err(MoveError::MoverLeftInCheck(mover));
        }

        let record = MoveRecord::new(trial.piece(), from, to, trial.commit());
        self.history.push(record);
        self.turn_counter += 1;

        let opponent = mover.opponent();
        let check = find_threat(&self.board, opponent);
        if is_checkmate(&mut self.board, opponent, self.config.checkmate_rule) {
            self.state = GameState::won_by(mover);
        }

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            error!(%err, "Postcondition failed, restoring previous position");
            self.rollback(record);
            return Err(err);
        }

        let report = MoveReport {
            record,
            check,
            state: self.state,
        };
        info!(%report, "Move committed");
        Ok(report)
    }

    /// Takes back the last committed move. The game was in progress before it.
    #[cfg(debug_assertions)]
    fn rollback(&mut self, record: MoveRecord) {
        self.board.remove(record.to);
        self.board.place(record.from, record.piece);
        if let Some(captured) = record.captured {
            self.board.place(record.to, captured);
        }
        self.history.pop();
        self.turn_counter -= 1;
        self.state = GameState::InProgress;
    }

    /// Like [`Game::make_move`], taking squares in text form (`"b3"`).
    ///
    /// Malformed or off-board text is rejected with
    /// [`MoveError::InvalidCoordinate`].
    pub fn make_move_notation(&mut self, from: &str, to: &str) -> Result<MoveReport, MoveError> {
        let from: Coordinate = from.parse()?;
        let to: Coordinate = to.parse()?;
        self.make_move(from, to)
    }

    /// Replays moves from the standard opening.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        Self::replay_with(GameConfig::default(), moves)
    }

    /// Replays moves from the standard opening under `config`.
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay_with(config: GameConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::with_config(config);
        for action in moves {
            game.make_move(action.from, action.to)?;
        }
        Ok(game)
    }

    /// True if `side`'s General is attacked in the current position.
    pub fn is_in_check(&self, side: Side) -> bool {
        is_in_check(&self.board, side)
    }

    /// The first threat found against `side`'s General, if any.
    pub fn threat(&self, side: Side) -> Option<Threat> {
        find_threat(&self.board, side)
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        Side::for_turn(self.turn_counter)
    }

    /// Turn counter: starts at 1, advances once per committed move.
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    /// Counter value the game started from.
    pub fn first_turn(&self) -> u32 {
        self.first_turn
    }

    /// The piece on `square`, if any.
    pub fn piece_at(&self, square: Coordinate) -> Option<Piece> {
        self.board.get(square)
    }

    /// Read-only board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Committed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Rule settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
