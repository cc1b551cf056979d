//! Line-oriented game shell driving the board and the searcher.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use slidewise_core::{Board, Direction};
use slidewise_engine::{Decision, Searcher};

use crate::command::{Command, ShellOption, parse_command};
use crate::error::ShellError;

/// Whether the read loop keeps going after a command.
enum Flow {
    Continue,
    Quit,
}

/// The game shell: current board, score, undo history and searcher.
///
/// Commands are read one per line; every command that produces output
/// flushes it before the next line is read.
pub struct Shell {
    board: Board,
    score: u64,
    history: Vec<(Board, u64)>,
    searcher: Searcher,
    rng: StdRng,
}

impl Shell {
    /// Create a shell seeded from the OS, with a fresh default-size game.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a shell with a fixed spawn seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut shell = Self {
            board: Board::default(),
            score: 0,
            history: Vec::new(),
            searcher: Searcher::default(),
            rng,
        };
        shell.board = shell.opening(Board::default());
        shell
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Current searcher.
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Malformed commands are answered with `error <message>` and do not
    /// stop the loop. Only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), ShellError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = parse_command(trimmed).and_then(|cmd| self.execute(cmd, out));
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ShellError::Io { source }) => return Err(ShellError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "error {e}")?;
                }
            }
            out.flush()?;
        }

        info!("slidewise shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, ShellError> {
        match cmd {
            Command::NewGame { size } => self.handle_newgame(size, out)?,
            Command::Position { board, score } => self.handle_position(board, score, out)?,
            Command::Seed(seed) => {
                self.rng = StdRng::seed_from_u64(seed);
                writeln!(out, "ok")?;
            }
            Command::Move(dir) => self.handle_move(dir, out)?,
            Command::Go => self.handle_go(out)?,
            Command::Auto { max_moves } => self.handle_auto(max_moves, out)?,
            Command::Undo => self.handle_undo(out)?,
            Command::Display => {
                writeln!(out, "{}", self.board.pretty())?;
                writeln!(out, "score {}", self.score)?;
            }
            Command::SetOption(option) => self.handle_setoption(option)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => debug!(%name, "ignoring unknown command"),
        }
        Ok(Flow::Continue)
    }

    /// Empty `board` with two spawned tiles.
    fn opening(&mut self, board: Board) -> Board {
        let mut board = board;
        for _ in 0..2 {
            // A board of size >= 2 always has room for two spawns.
            if let Ok(next) = board.spawn_random_tile(&mut self.rng) {
                board = next;
            }
        }
        board
    }

    fn handle_newgame<W: Write>(&mut self, size: usize, out: &mut W) -> Result<(), ShellError> {
        let empty = Board::new(size)?;
        self.board = self.opening(empty);
        self.score = 0;
        self.history.clear();
        info!(size, "new game");
        writeln!(out, "ok")?;
        Ok(())
    }

    fn handle_position<W: Write>(
        &mut self,
        board: Board,
        score: u64,
        out: &mut W,
    ) -> Result<(), ShellError> {
        self.board = board;
        self.score = score;
        self.history.clear();
        writeln!(out, "ok")?;
        Ok(())
    }

    /// Apply `dir`, spawning a tile only when the board changed.
    /// Returns whether the move changed the board.
    fn play(&mut self, dir: Direction) -> Result<bool, ShellError> {
        let outcome = self.board.apply_move(self.score, dir);
        if !outcome.changed {
            return Ok(false);
        }
        let next = outcome.board.spawn_random_tile(&mut self.rng)?;
        self.history.push((self.board, self.score));
        self.board = next;
        self.score = outcome.score;
        Ok(true)
    }

    fn handle_move<W: Write>(&mut self, dir: Direction, out: &mut W) -> Result<(), ShellError> {
        let changed = self.play(dir)?;
        debug!(%dir, changed, score = self.score, "move applied");
        writeln!(out, "moved {changed}")?;
        if changed && !self.board.can_any_move_occur() {
            info!(score = self.score, "game over");
            writeln!(out, "gameover score {}", self.score)?;
        }
        Ok(())
    }

    fn handle_go<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        let result = self.searcher.search(&self.board, self.score);
        match result.value {
            Some(value) => writeln!(
                out,
                "info depth {} nodes {} value {value:.2}",
                result.depth, result.nodes
            )?,
            None => writeln!(out, "info depth {} nodes {}", result.depth, result.nodes)?,
        }
        match result.decision {
            Decision::Move(dir) => writeln!(out, "bestmove {dir}")?,
            Decision::NoMoveAvailable => writeln!(out, "bestmove none")?,
        }
        Ok(())
    }

    fn handle_auto<W: Write>(&mut self, max_moves: Option<u64>, out: &mut W) -> Result<(), ShellError> {
        let mut moves = 0u64;
        let game_over = loop {
            if self.board.legal_moves().is_empty() {
                break true;
            }
            if max_moves.is_some_and(|max| moves >= max) {
                break false;
            }
            match self.searcher.search(&self.board, self.score).decision {
                Decision::Move(dir) => {
                    self.play(dir)?;
                    moves += 1;
                }
                Decision::NoMoveAvailable => break true,
            }
        };

        info!(
            score = self.score,
            moves,
            max_tile = self.board.max_tile(),
            game_over,
            "autoplay finished"
        );
        let verdict = if game_over { "gameover" } else { "stopped" };
        writeln!(out, "{verdict} score {} moves {moves}", self.score)?;
        Ok(())
    }

    fn handle_undo<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        match self.history.pop() {
            Some((board, score)) => {
                self.board = board;
                self.score = score;
                writeln!(out, "ok")?;
            }
            None => writeln!(out, "nothing to undo")?,
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: ShellOption) -> Result<(), ShellError> {
        let config = self.searcher.config_mut();
        match option {
            ShellOption::Depth(depth) => config.set_depth(depth)?,
            ShellOption::Threads(threads) => config.set_threads(threads)?,
        }
        debug!(?option, "option set");
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
