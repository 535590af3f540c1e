//! Game controller: move validation, turn order, terminal states and
//! scheduling of computer moves

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use super::{GameEvent, GameMode, GameStatus, MoveOutcome};
use crate::board::{Board, BoardState, Player, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::rules::{find_five_line_at_pos, has_five_at_pos, is_draw};
use crate::strategy::{MoveStrategy, RandomStrategy};

/// Proposals asked of the strategy per turn before the game is called a draw
const STRATEGY_ATTEMPTS: usize = 3;

/// Computer move scheduling state
enum StrategyState {
    Idle,
    /// A timer thread will send the generation it was started under
    Thinking {
        receiver: Receiver<u64>,
        start_time: Instant,
    },
}

/// Owns one game: board, turn pointer, status and the second player's strategy.
pub struct GameController {
    config: GameConfig,
    state: BoardState,
    status: GameStatus,
    winning_line: Option<Vec<Pos>>,
    history: Vec<(Pos, Player)>,
    strategy: Box<dyn MoveStrategy>,
    strategy_state: StrategyState,
    /// Bumped on restart; timers from older generations are ignored
    generation: u64,
    subscribers: Vec<Sender<GameEvent>>,
}

impl GameController {
    /// New game using a [`RandomStrategy`] for any computer seat
    pub fn new(config: GameConfig) -> Self {
        let strategy = match config.seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::new(),
        };
        Self::with_strategy(config, Box::new(strategy))
    }

    /// New game with a custom strategy for the computer seat.
    ///
    /// `board_size` is clamped to the supported range; run
    /// [`GameConfig::validate`] first to reject bad sizes instead.
    pub fn with_strategy(mut config: GameConfig, strategy: Box<dyn MoveStrategy>) -> Self {
        let size = config.board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        if size != config.board_size {
            warn!(requested = config.board_size, size, "board size out of range, clamped");
            config.board_size = size;
        }
        let state = BoardState::initialize(config.board_size, config.first_player);
        let mut controller = Self {
            config,
            state,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
            strategy,
            strategy_state: StrategyState::Idle,
            generation: 0,
            subscribers: Vec::new(),
        };
        controller.begin_turn();
        controller
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Stones forming the winning line, in board order
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// The player to move is computer-controlled
    pub fn is_strategy_turn(&self) -> bool {
        !self.status.is_terminal() && !self.config.mode.is_human(self.current_player())
    }

    /// A delayed computer move is scheduled and human input is locked out
    pub fn is_strategy_pending(&self) -> bool {
        matches!(self.strategy_state, StrategyState::Thinking { .. })
    }

    /// How long the pending computer move has been waiting
    pub fn strategy_elapsed(&self) -> Option<Duration> {
        match &self.strategy_state {
            StrategyState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            StrategyState::Idle => None,
        }
    }

    /// Why a move at `pos` would be rejected right now, if it would be.
    pub fn check_move(&self, pos: Pos) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.is_strategy_pending() {
            return Err(MoveError::StrategyPending);
        }
        if self.is_strategy_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.check_cell(pos)
    }

    /// Whether `submit_move(pos)` would be accepted
    pub fn can_place(&self, pos: Pos) -> bool {
        self.check_move(pos).is_ok()
    }

    /// Receive a [`GameEvent`] for every state change from now on
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Submit a move for the human player to move.
    ///
    /// Invalid input is a no-op returning `Rejected`, as is input while the
    /// computer seat is to move. When the move hands the
    /// turn to a computer player, its reply is applied before returning
    /// (zero delay) or scheduled (see [`Self::poll_strategy`]).
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, pos: Pos) -> MoveOutcome {
        match self.check_move(pos) {
            Err(err @ (MoveError::StrategyPending | MoveError::NotYourTurn)) => {
                debug!(%pos, %err, "input ignored on the computer's turn");
                MoveOutcome::Rejected(err)
            }
            _ => self.play(pos),
        }
    }

    /// Reset to an empty board, first player to move, status in progress.
    /// Any pending computer move is cancelled.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.generation += 1;
        self.state = BoardState::initialize(self.config.board_size, self.config.first_player);
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.history.clear();
        self.strategy_state = StrategyState::Idle;

        info!(generation = self.generation, "game restarted");
        self.emit(GameEvent::Restarted);
        self.begin_turn();
    }

    /// Apply the scheduled computer move if its timer has fired.
    ///
    /// Non-blocking; call once per frame. Returns the outcome of the computer
    /// move when one was played.
    pub fn poll_strategy(&mut self) -> Option<MoveOutcome> {
        let ticket = match &self.strategy_state {
            StrategyState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(ticket) => ticket,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    warn!("strategy timer vanished, moving now");
                    self.generation
                }
            },
            StrategyState::Idle => return None,
        };
        self.finish_strategy_wait(ticket)
    }

    /// Block until the scheduled computer move (if any) has been applied.
    pub fn wait_for_strategy(&mut self) -> Option<MoveOutcome> {
        let ticket = match &self.strategy_state {
            StrategyState::Thinking { receiver, .. } => receiver.recv().unwrap_or(self.generation),
            StrategyState::Idle => return None,
        };
        self.finish_strategy_wait(ticket)
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn check_cell(&self, pos: Pos) -> Result<(), MoveError> {
        let board = self.state.board();
        if !board.in_bounds(pos) {
            return Err(MoveError::OutOfBounds {
                pos,
                size: board.size(),
            });
        }
        if !board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        Ok(())
    }

    /// Validate and apply a move for the current player, then hand over the turn.
    fn play(&mut self, pos: Pos) -> MoveOutcome {
        if self.status.is_terminal() {
            debug!(%pos, "move after game over ignored");
            return MoveOutcome::Rejected(MoveError::GameOver);
        }
        if let Err(err) = self.check_cell(pos) {
            debug!(%pos, %err, "move rejected");
            return MoveOutcome::Rejected(err);
        }

        let player = self.state.current_player();
        self.state.place(pos, player);
        self.history.push((pos, player));
        debug!(%pos, player = player.name(), "stone placed");
        self.emit(GameEvent::MovePlayed { pos, player });

        let board = self.state.board();
        if has_five_at_pos(board, pos, player) {
            self.winning_line = find_five_line_at_pos(board, pos, player);
            self.finish(GameStatus::Won(player));
        } else if is_draw(board) {
            self.finish(GameStatus::Draw);
        } else {
            self.state.toggle_player();
        }
        let status = self.status;

        self.begin_turn();
        MoveOutcome::Accepted {
            pos,
            player,
            status,
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        info!(%status, moves = self.history.len(), "game over");
        self.emit(GameEvent::GameOver(status));
    }

    /// If the computer is to move, play now or start its timer.
    fn begin_turn(&mut self) {
        if !self.is_strategy_turn() {
            return;
        }

        let delay = self.config.strategy_delay();
        if delay.is_zero() {
            self.play_strategy_move();
            return;
        }

        let (tx, rx) = channel();
        let ticket = self.generation;
        thread::spawn(move || {
            thread::sleep(delay);
            // Receiver is gone if the game was restarted or dropped
            let _ = tx.send(ticket);
        });

        self.strategy_state = StrategyState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
        let player = self.current_player();
        debug!(player = player.name(), ?delay, "computer move scheduled");
        self.emit(GameEvent::StrategyThinking { player });
    }

    fn finish_strategy_wait(&mut self, ticket: u64) -> Option<MoveOutcome> {
        self.strategy_state = StrategyState::Idle;
        if ticket != self.generation {
            debug!(ticket, generation = self.generation, "stale computer move dropped");
            return None;
        }
        self.play_strategy_move()
    }

    /// Ask the strategy for a move, retrying illegal proposals. A strategy
    /// with nothing (legal) to offer ends the game as a draw.
    fn play_strategy_move(&mut self) -> Option<MoveOutcome> {
        if !self.is_strategy_turn() {
            return None;
        }

        for attempt in 1..=STRATEGY_ATTEMPTS {
            let Some(pos) = self.strategy.select_move(self.state.board()) else {
                break;
            };
            debug!(strategy = self.strategy.name(), %pos, attempt, "computer chose move");
            match self.play(pos) {
                MoveOutcome::Rejected(err) => {
                    warn!(strategy = self.strategy.name(), %pos, %err, attempt, "computer proposed an illegal move");
                }
                outcome => return Some(outcome),
            }
        }

        self.finish(GameStatus::Draw);
        None
    }

    fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("status", &self.status)
            .field("current_player", &self.current_player())
            .field("moves", &self.history.len())
            .field("strategy", &self.strategy.name())
            .field("pending", &self.is_strategy_pending())
            .finish()
    }
}
