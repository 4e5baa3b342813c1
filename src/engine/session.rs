//! Puzzle session
//!
//! Owns everything one game needs: the placed words, the decoy buffers, the
//! cursor, the attempt budget and the phase. Front ends drive it with
//! [`Session::submit_input`] followed by [`Session::evaluate`] once per input
//! event, and render from its accessors.

use super::input::{Direction, Input};
use super::placement::place_word;
use super::rng::SessionRng;
use crate::config::GameConfig;
use crate::core::{GridGeometry, GridLocation, Likeness, PlacedWord, ScreenLocation};
use crate::dictionary::build_index;
use crate::error::GameError;
use rand::Rng;

/// Word draws (successful or not) allowed while filling the grid
pub const SELECTION_ROUNDS: usize = 100;

/// Filler symbols for cells not covered by a word
pub const DECOY_SYMBOLS: &[u8] = b",|\\!@#$%^&*-_+=.:;?,/";

/// Lowest cosmetic address shown beside a row
pub const ADDRESS_MIN: usize = 0xA000;

/// Highest cosmetic address shown beside a row
pub const ADDRESS_MAX: usize = 0xFFFF;

/// Where the session is in its input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input
    Running,
    /// A pointer click requested a guess, not evaluated yet
    InputMouse,
    /// An activate key requested a guess, not evaluated yet
    InputEnter,
    /// The password was guessed
    Won,
    /// The attempt budget ran out
    Lost,
}

impl Phase {
    /// Whether the session has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Whether a guess is waiting to be evaluated
    #[inline]
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::InputMouse | Self::InputEnter)
    }
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of one [`Session::evaluate`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// No guess was pending
    Idle,
    /// Wrong guess; the session goes on
    Denied {
        guess: String,
        likeness: Likeness,
        attempts_remaining: usize,
    },
    /// Correct guess
    Won { guess: String },
    /// Wrong guess with the last attempt
    Lost { guess: String },
}

/// One game of the password puzzle
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    geometry: GridGeometry,
    attempts_remaining: usize,
    position: GridLocation,
    solution: String,
    placed_words: Vec<PlacedWord>,
    panel_content: Vec<String>,
    address_base: usize,
    phase: Phase,
    last_likeness: Option<Likeness>,
}

impl Session {
    /// Build a ready-to-play session
    ///
    /// Indexes the dictionary, picks one word-length group, places
    /// `config.words` distinct words from it, chooses the password among them
    /// and fills every other cell with decoy symbols.
    ///
    /// # Errors
    /// - `GameError::InvalidConfig` if a configured count is zero
    /// - `GameError::EmptyInput` / `GameError::InsufficientVocabulary` from
    ///   the dictionary index
    /// - `GameError::PlacementExhausted` if the words do not fit within
    ///   [`SELECTION_ROUNDS`] draws
    ///
    /// # Examples
    /// ```
    /// use termlink::config::GameConfig;
    /// use termlink::dictionary::DEFAULT_WORDS;
    /// use termlink::engine::{Phase, Session, SessionRng};
    ///
    /// let session = Session::initialize(
    ///     GameConfig::default(),
    ///     DEFAULT_WORDS,
    ///     SessionRng::seed_from_u64(1),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(session.placed_words().len(), 12);
    /// assert_eq!(session.phase(), Phase::Running);
    /// ```
    pub fn initialize<S: AsRef<str>>(
        config: GameConfig,
        words: &[S],
        mut rng: SessionRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let geometry = config.geometry();

        let groups = build_index(words, config.words)?;
        let group = &groups[rng.selection.random_range(0..groups.len())];
        tracing::debug!(
            length = group.length(),
            candidates = group.len(),
            "word group chosen"
        );

        let placed_words = Self::place_words(
            group.words(),
            config.words,
            &geometry,
            &mut rng,
        )?;

        let solution =
            placed_words[rng.selection.random_range(0..placed_words.len())].text().to_string();

        let panel_content = Self::fill_panels(&geometry, &placed_words, &mut rng);

        let address_top = ADDRESS_MAX
            .saturating_sub(geometry.panels() * geometry.panel_capacity())
            .max(ADDRESS_MIN);
        let address_base = rng.decoy.random_range(ADDRESS_MIN..=address_top);

        tracing::info!(
            words = placed_words.len(),
            length = solution.len(),
            attempts = config.max_attempts,
            "session initialized"
        );

        Ok(Self {
            config,
            geometry,
            attempts_remaining: config.max_attempts,
            position: GridLocation::default(),
            solution,
            placed_words,
            panel_content,
            address_base,
            phase: Phase::Running,
            last_likeness: None,
        })
    }

    /// Draw and place `count` distinct words from `candidates`
    fn place_words(
        candidates: &[String],
        count: usize,
        geometry: &GridGeometry,
        rng: &mut SessionRng,
    ) -> Result<Vec<PlacedWord>, GameError> {
        let mut pool: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let mut placed: Vec<PlacedWord> = Vec::with_capacity(count);
        let mut rounds = SELECTION_ROUNDS;

        while placed.len() < count && rounds > 0 && !pool.is_empty() {
            let index = rng.selection.random_range(0..pool.len());
            let mut word = PlacedWord::unplaced(pool[index]);

            if !placed.contains(&word)
                && place_word(&mut word, &placed, geometry, &mut rng.placement)
            {
                pool.swap_remove(index);
                placed.push(word);
                continue;
            }

            rounds -= 1;
        }

        if placed.len() < count || placed.is_empty() {
            tracing::warn!(
                placed = placed.len(),
                requested = count,
                "placement budget exhausted"
            );
            return Err(GameError::PlacementExhausted {
                placed: placed.len(),
                requested: count,
            });
        }

        Ok(placed)
    }

    /// Random decoy buffers with the placed words written over them
    fn fill_panels(
        geometry: &GridGeometry,
        placed: &[PlacedWord],
        rng: &mut SessionRng,
    ) -> Vec<String> {
        let mut panels: Vec<String> = (0..geometry.panels())
            .map(|_| {
                (0..geometry.panel_capacity())
                    .map(|_| char::from(DECOY_SYMBOLS[rng.decoy.random_range(0..DECOY_SYMBOLS.len())]))
                    .collect()
            })
            .collect();

        for word in placed {
            panels[word.panel()].replace_range(word.start()..word.end(), word.text());
        }

        panels
    }

    /// Feed one input event to the session
    ///
    /// Movement and pointer events update the cursor; activations only mark a
    /// guess as pending, to be resolved by [`evaluate`](Self::evaluate).
    /// Pointer events outside the grid are ignored.
    ///
    /// # Errors
    /// Returns `GameError::SessionOver` once the session is won or lost.
    pub fn submit_input(&mut self, input: Input) -> Result<(), GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::SessionOver);
        }

        match input {
            Input::Move(direction) => self.position = self.step(direction),
            Input::Activate => self.phase = Phase::InputEnter,
            Input::Point(screen) => {
                if let Some(location) = self.geometry.resolve(screen) {
                    self.position = location;
                }
            }
            Input::Click(screen) => {
                if let Some(location) = self.geometry.resolve(screen) {
                    self.position = location;
                    self.phase = Phase::InputMouse;
                }
            }
        }

        Ok(())
    }

    /// Cursor location after one step in `direction`
    ///
    /// Rows clamp at the top and bottom. Columns continue into the
    /// neighbouring panel at a panel edge, and clamp at the outer edges of the
    /// first and last panel.
    #[must_use]
    pub fn step(&self, direction: Direction) -> GridLocation {
        let GridLocation { panel, row, column } = self.position;
        let last_column = self.geometry.columns() - 1;

        match direction {
            Direction::Up if row > 0 => GridLocation::new(panel, row - 1, column),
            Direction::Down if row + 1 < self.geometry.rows() => {
                GridLocation::new(panel, row + 1, column)
            }
            Direction::Left if column > 0 => GridLocation::new(panel, row, column - 1),
            Direction::Left if panel > 0 => GridLocation::new(panel - 1, row, last_column),
            Direction::Right if column < last_column => GridLocation::new(panel, row, column + 1),
            Direction::Right if panel + 1 < self.geometry.panels() => {
                GridLocation::new(panel + 1, row, 0)
            }
            _ => self.position,
        }
    }

    /// Input event for a pointer press at `screen`
    ///
    /// A press on a placed word is a [`Input::Click`]; anywhere else it only
    /// moves the cursor.
    #[must_use]
    pub fn pointer_input(&self, screen: ScreenLocation) -> Input {
        match self.geometry.resolve(screen) {
            Some(location) if self.word_at(location).is_some() => Input::Click(screen),
            _ => Input::Point(screen),
        }
    }

    /// Resolve a pending guess
    ///
    /// Does nothing while no guess is pending. A correct guess wins; a wrong
    /// one costs an attempt and, if attempts remain, reports the likeness.
    ///
    /// # Errors
    /// - `GameError::SessionOver` once the session is won or lost
    /// - `GameError::InvalidActivation` if no word lies under the cursor; the
    ///   input layer must only activate on words
    pub fn evaluate(&mut self) -> Result<Evaluation, GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::SessionOver);
        }
        if !self.phase.is_activation() {
            return Ok(Evaluation::Idle);
        }
        self.phase = Phase::Running;

        let Some(guess) = self.selected_word().map(|word| word.text().to_string()) else {
            tracing::error!(location = %self.position, "activation without a word under the cursor");
            return Err(GameError::InvalidActivation {
                location: self.position,
            });
        };

        if guess == self.solution {
            self.phase = Phase::Won;
            tracing::info!(guess = %guess, "password accepted");
            return Ok(Evaluation::Won { guess });
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            self.phase = Phase::Lost;
            tracing::info!(guess = %guess, "terminal locked");
            return Ok(Evaluation::Lost { guess });
        }

        let likeness = Likeness::calculate(&guess, &self.solution);
        self.last_likeness = Some(likeness);
        tracing::debug!(
            guess = %guess,
            likeness = likeness.value(),
            attempts_remaining = self.attempts_remaining,
            "entry denied"
        );

        Ok(Evaluation::Denied {
            guess,
            likeness,
            attempts_remaining: self.attempts_remaining,
        })
    }

    /// Placed word under the cursor, if any
    #[must_use]
    pub fn selected_word(&self) -> Option<&PlacedWord> {
        self.word_at(self.position)
    }

    /// Placed word covering `location`, if any
    #[must_use]
    pub fn word_at(&self, location: GridLocation) -> Option<&PlacedWord> {
        self.placed_words
            .iter()
            .find(|word| word.contains(location, &self.geometry))
    }

    /// Characters of one panel row
    ///
    /// # Panics
    /// Panics if `panel` or `row` is out of range.
    #[must_use]
    pub fn row_text(&self, panel: usize, row: usize) -> &str {
        let start = row * self.geometry.columns();
        &self.panel_content[panel][start..start + self.geometry.columns()]
    }

    /// Cosmetic address of one panel row
    #[must_use]
    pub const fn address(&self, panel: usize, row: usize) -> usize {
        self.geometry.address(self.address_base, panel, row)
    }

    /// Final result, once the session has ended
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Won => Some(Outcome::Won),
            Phase::Lost => Some(Outcome::Lost),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> GridLocation {
        self.position
    }

    /// The password; only for revealing it after the session ends
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    #[inline]
    #[must_use]
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// Content buffer of every panel, words included
    #[inline]
    #[must_use]
    pub fn panel_content(&self) -> &[String] {
        &self.panel_content
    }

    /// Likeness reported by the last wrong guess
    #[inline]
    #[must_use]
    pub const fn last_likeness(&self) -> Option<Likeness> {
        self.last_likeness
    }
}
