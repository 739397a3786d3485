use crate::{
    AutomatedPlayer, Color, Move, MoveError, Position, PromotionPiece, Square,
    clock::Timer,
    constants::{
        DEFAULT_FRAME_INTERVAL, DEFAULT_GAME_DURATION, DEFAULT_IDLE_INTERVAL,
        DEFAULT_IDLE_THRESHOLD, DEFAULT_THINK_DELAY,
    },
    enum_map::EnumMap,
    frontend::{Audio, GameReport, Input, InputEvent, PlyEvent, Renderer, Sound},
    notation::{self, PreMove, Suffix},
    selection::{Click, Selection},
    transcript::{self, SanRecord},
};
use std::{
    thread,
    time::{Duration, Instant},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Checkmate { winner: Color },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    HumanToMove,
    AutomatedToMove(Color),
    GameOver(GameResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Continue,
    Quit,
}

/// How long the controller yields while waiting. None of these values
/// affect correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdlePolicy {
    pub think_delay: Duration,
    /// Yield between polls shortly after user activity.
    pub frame_interval: Duration,
    /// Yield between polls once idle.
    pub idle_interval: Duration,
    pub idle_threshold: Duration,
}

impl IdlePolicy {
    pub const IMMEDIATE: Self = Self {
        think_delay: Duration::ZERO,
        frame_interval: Duration::ZERO,
        idle_interval: Duration::ZERO,
        idle_threshold: Duration::ZERO,
    };
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self {
            think_delay: DEFAULT_THINK_DELAY,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            idle_interval: DEFAULT_IDLE_INTERVAL,
            idle_threshold: DEFAULT_IDLE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub game_duration: Duration,
    pub idle: IdlePolicy,
    pub verbose: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            game_duration: DEFAULT_GAME_DURATION,
            idle: IdlePolicy::default(),
            verbose: false,
        }
    }
}

pub type PlayerSlots<P> = EnumMap<Color, Option<Box<dyn AutomatedPlayer<P>>>>;

/// Drives a game: alternates human and automated turns, records SAN and
/// stops at checkmate or draw.
///
/// The controller owns the position, the SAN record and the turn state.
/// Quit is checked whenever it would otherwise wait. Once a move has been
/// obtained the ply always runs to completion.
pub struct TurnController<P, R, A, I> {
    position: P,
    players: PlayerSlots<P>,
    timers: EnumMap<Color, Timer>,
    renderer: R,
    audio: A,
    input: I,
    settings: ControllerSettings,
    state: TurnState,
    to_move: Color,
    selection: Selection,
    record: SanRecord,
    started: bool,
    last_interaction: Instant,
}

impl<P, R, A, I> TurnController<P, R, A, I>
where
    P: Position,
    R: Renderer<P>,
    A: Audio,
    I: Input,
{
    pub fn new(
        position: P,
        players: PlayerSlots<P>,
        renderer: R,
        audio: A,
        input: I,
        settings: ControllerSettings,
    ) -> Self {
        let mut controller = Self {
            to_move: position.side_to_move(),
            record: SanRecord::new(position.ply()),
            position,
            players,
            timers: EnumMap::from_fn(|_| Timer::new(settings.game_duration)),
            renderer,
            audio,
            input,
            settings,
            state: TurnState::HumanToMove,
            selection: Selection::NoSelection,
            started: false,
            last_interaction: Instant::now(),
        };
        controller.state = controller.initial_state();
        controller
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn record(&self) -> &SanRecord {
        &self.record
    }

    pub fn timer(&self, color: Color) -> &Timer {
        &self.timers[color]
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Starts over from `position`, clearing the SAN record and clocks.
    pub fn new_game(&mut self, position: P) {
        self.to_move = position.side_to_move();
        self.record = SanRecord::new(position.ply());
        self.position = position;
        self.timers = EnumMap::from_fn(|_| Timer::new(self.settings.game_duration));
        self.selection.clear();
        self.started = false;
        self.last_interaction = Instant::now();
        self.state = self.initial_state();
    }

    /// Plays until quit is requested. The game may have ended before that.
    pub fn run(&mut self) -> TurnState {
        while self.step() == Flow::Continue {}
        log::info!("Quit");
        self.state
    }

    /// One poll or one ply.
    pub fn step(&mut self) -> Flow {
        if !self.started {
            self.start();
        }
        match self.state {
            TurnState::HumanToMove => self.human_step(),
            TurnState::AutomatedToMove(color) => self.automated_step(color),
            TurnState::GameOver(_) => match self.input.poll() {
                Some(InputEvent::Quit) => Flow::Quit,
                Some(InputEvent::Select(_)) => Flow::Continue,
                None => {
                    self.idle();
                    Flow::Continue
                }
            },
        }
    }

    fn start(&mut self) {
        self.started = true;
        log::info!(
            "New game, {} to move, ply {}",
            self.to_move,
            self.record.start_ply()
        );
        self.renderer.game_started(&self.position);
        self.audio.play(Sound::Start);
        if let TurnState::GameOver(result) = self.state {
            self.finish(result);
        }
    }

    fn initial_state(&self) -> TurnState {
        if self.position.is_checkmate() {
            TurnState::GameOver(GameResult::Checkmate {
                winner: self.to_move.opposite(),
            })
        } else if self.position.is_draw() {
            TurnState::GameOver(GameResult::Draw)
        } else {
            self.state_for(self.to_move)
        }
    }

    fn state_for(&self, color: Color) -> TurnState {
        if self.players[color].is_some() {
            TurnState::AutomatedToMove(color)
        } else {
            TurnState::HumanToMove
        }
    }

    fn human_step(&mut self) -> Flow {
        match self.input.poll() {
            Some(InputEvent::Quit) => Flow::Quit,
            Some(InputEvent::Select(square)) => {
                self.last_interaction = Instant::now();
                self.click(square)
            }
            None => {
                self.idle();
                Flow::Continue
            }
        }
    }

    fn click(&mut self, square: Square) -> Flow {
        match self.selection.click(square, &self.position) {
            Click::Ignored => Flow::Continue,
            Click::Selected { square, targets } => {
                self.renderer
                    .selection_changed(&self.position, Some(square), &targets);
                Flow::Continue
            }
            Click::Deselected => {
                self.renderer.selection_changed(&self.position, None, &[]);
                Flow::Continue
            }
            Click::Illegal { from, to } => {
                self.renderer.selection_changed(&self.position, None, &[]);
                log::warn!("Illegal move {from}{to}");
                self.renderer.illegal_move(&self.position, from, to);
                self.audio.play(Sound::Illegal);
                Flow::Continue
            }
            Click::Candidate(mov) => {
                self.renderer.selection_changed(&self.position, None, &[]);
                self.human_move(mov)
            }
        }
    }

    fn human_move(&mut self, mov: Move) -> Flow {
        let mov = if mov.is_promotion() {
            match self.prompt_promotion(mov) {
                Some(mov) => mov,
                None => return Flow::Quit,
            }
        } else {
            mov
        };
        if let Err(e) = self.try_human_move(mov) {
            log::warn!("{e}");
            self.renderer
                .illegal_move(&self.position, mov.from(), mov.to());
            self.audio.play(Sound::Illegal);
        }
        Flow::Continue
    }

    fn try_human_move(&mut self, mov: Move) -> Result<(), MoveError> {
        if !self.position.legal_moves_from(mov.from()).contains(&mov) {
            return Err(MoveError::IllegalMove(mov));
        }
        self.play_ply(mov)
    }

    /// `None` when quit was requested instead of a piece.
    fn prompt_promotion(&mut self, mov: Move) -> Option<Move> {
        loop {
            let token = self.input.promotion_token()?;
            match token.parse::<PromotionPiece>() {
                Ok(piece) => return Some(mov.with_promotion_piece(piece)),
                Err(e) => log::warn!("{e}"),
            }
        }
    }

    fn automated_step(&mut self, color: Color) -> Flow {
        if self.wait(self.settings.idle.think_delay) == Flow::Quit {
            return Flow::Quit;
        }
        let Some(player) = self.players[color].as_mut() else {
            self.state = TurnState::HumanToMove;
            return Flow::Continue;
        };
        let timer = &mut self.timers[color];
        timer.start_turn();
        let mov = player.choose_move(&self.position, timer, self.settings.verbose);
        log::debug!(
            "{color} chose {mov} in {:?}, {:?} left",
            timer.elapsed_this_turn(),
            timer.remaining()
        );
        timer.end_turn();
        match self.play_ply(mov) {
            Ok(()) => Flow::Continue,
            Err(e) => {
                log::error!("Automated {color} player: {e}");
                Flow::Quit
            }
        }
    }

    /// Applies a move known to be legal, records its SAN and advances the
    /// turn.
    fn play_ply(&mut self, mov: Move) -> Result<(), MoveError> {
        let pre = PreMove::query(&self.position, mov).ok_or(MoveError::IllegalMove(mov))?;
        let previous = self.position.last_applied_move();
        let mover = self.to_move;
        let ply = self.record.next_ply();

        self.position.apply_move(mov);

        let suffix = Suffix::of(&self.position);
        let san = notation::san(mov, &pre, suffix);
        self.record.push(san.clone());
        let event = PlyEvent {
            ply,
            mover,
            mov,
            previous,
            sound: Sound::for_ply(mov, &pre, self.position.is_check()),
            san,
        };
        log::debug!("{}", transcript::numbered(ply, &event.san));
        self.renderer.ply_applied(&self.position, &event);
        self.audio.play(event.sound);

        self.to_move = mover.opposite();
        self.state = match suffix {
            Suffix::Checkmate => TurnState::GameOver(GameResult::Checkmate { winner: mover }),
            Suffix::Draw => TurnState::GameOver(GameResult::Draw),
            Suffix::None | Suffix::Check => self.state_for(self.to_move),
        };
        if let TurnState::GameOver(result) = self.state {
            self.finish(result);
        }
        Ok(())
    }

    fn finish(&mut self, result: GameResult) {
        let report = GameReport {
            result,
            transcript: self.record.lines(),
        };
        log::info!("Game over\n{report}");
        self.renderer.game_over(&report);
        self.audio.play(Sound::End);
    }

    /// Polls for quit for `duration`. Clicks are dropped.
    fn wait(&mut self, duration: Duration) -> Flow {
        let deadline = Instant::now() + duration;
        loop {
            if self.input.poll() == Some(InputEvent::Quit) {
                return Flow::Quit;
            }
            let now = Instant::now();
            if now >= deadline {
                return Flow::Continue;
            }
            thread::sleep(
                self.settings
                    .idle
                    .frame_interval
                    .min(deadline - now)
                    .max(Duration::from_millis(1)),
            );
        }
    }

    fn idle(&self) {
        let interval = if self.last_interaction.elapsed() < self.settings.idle.idle_threshold {
            self.settings.idle.frame_interval
        } else {
            self.settings.idle.idle_interval
        };
        thread::sleep(interval);
    }
}
