use crate::priority::PriorityTable;
use crate::{debug_log, info_log};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Positions value meaning "the letter is not in the word".
pub const MISS: [usize; 1] = [0];

/// Status only lists candidates when there are at most this many.
pub const SAMPLE_LIMIT: usize = 10;

pub const PLACEHOLDER: char = '_';

/// The partially revealed word. `None` slots are still unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    pub fn new(word_length: usize) -> Self {
        Self {
            slots: vec![None; word_length],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Zero-indexed slot lookup.
    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// The finished word, once every slot is confirmed.
    pub fn word(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    // Confirmed slots are never overwritten.
    fn confirm(&mut self, index: usize, letter: char) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(letter);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

/// Result of every solver step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Guess this letter next.
    Continue(char),
    /// Every slot is confirmed.
    Solved(String),
    /// No dictionary word agrees with the feedback.
    NoMatch,
    /// Candidates remain but every letter they contain has been tried.
    LetterExhaustion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    AwaitingFeedback,
    Solved,
    NoMatch,
    NoFurtherLetters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    InvalidWordLength,
    /// The dictionary has no word of the requested length.
    NoWords { word_length: usize },
    NotStarted,
    SessionOver(SessionState),
    InvalidLetter(char),
    EmptyPositions,
    InvalidPosition { position: usize, word_length: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordLength => write!(f, "Word length must be at least 1"),
            Self::NoWords { word_length } => {
                write!(f, "No dictionary words have {word_length} letters")
            }
            Self::NotStarted => write!(f, "No session has been started"),
            Self::SessionOver(state) => {
                write!(f, "The session is over ({state:?}); start a new one")
            }
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter"),
            Self::EmptyPositions => {
                write!(f, "Give at least one position, or 0 if the letter is absent")
            }
            Self::InvalidPosition {
                position,
                word_length,
            } => write!(
                f,
                "Position {position} is outside 1..={word_length} (use 0 alone for a miss)"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Snapshot returned by [`ConstraintSolver::get_status`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub pattern: String,
    pub candidate_count: usize,
    /// Every remaining candidate, or empty when there are more than [`SAMPLE_LIMIT`].
    pub candidate_sample: Vec<String>,
}

/// Feedback for one letter, with positions already converted to zero-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Miss,
    Hit(Vec<usize>),
}

impl Feedback {
    /// Parses one-indexed positions; `[0]` is a miss.
    pub fn from_positions(positions: &[usize], word_length: usize) -> Result<Self, SolverError> {
        if positions.is_empty() {
            return Err(SolverError::EmptyPositions);
        }
        if positions == MISS {
            return Ok(Self::Miss);
        }

        let mut indices = Vec::with_capacity(positions.len());
        for &position in positions {
            if position == 0 || position > word_length {
                return Err(SolverError::InvalidPosition {
                    position,
                    word_length,
                });
            }
            if !indices.contains(&(position - 1)) {
                indices.push(position - 1);
            }
        }
        Ok(Self::Hit(indices))
    }
}

/// One-indexed positions of `letter` in `word`, or [`MISS`] when absent.
pub fn positions_of(word: &str, letter: char) -> Vec<usize> {
    let letter = letter.to_ascii_uppercase();
    let positions: Vec<usize> = word
        .chars()
        .enumerate()
        .filter(|&(_, c)| c.to_ascii_uppercase() == letter)
        .map(|(i, _)| i + 1)
        .collect();
    if positions.is_empty() {
        MISS.to_vec()
    } else {
        positions
    }
}

/// Tracks one solving session: the revealed pattern, the words still
/// consistent with every piece of feedback, and which letters have been tried.
///
/// Before the first hit, letters come from the [`PriorityTable`] order for the
/// word length. After it (or once that order runs dry) the letter present in
/// the most remaining candidates wins, ties going to whichever letter showed up
/// first while scanning the candidates in dictionary order.
#[derive(Debug, Clone)]
pub struct ConstraintSolver<'a> {
    table: &'a PriorityTable,
    state: SessionState,
    pattern: Pattern,
    candidates: Vec<String>,
    guessed: Vec<char>,
    match_found: bool,
    queue: VecDeque<char>,
    // Last recommendation, handed back unchanged for a repeated letter.
    current: Option<Outcome>,
}

impl Default for ConstraintSolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintSolver<'static> {
    pub fn new() -> Self {
        Self::with_table(PriorityTable::standard())
    }
}

impl<'a> ConstraintSolver<'a> {
    pub fn with_table(table: &'a PriorityTable) -> Self {
        Self {
            table,
            state: SessionState::Uninitialized,
            pattern: Pattern::default(),
            candidates: Vec::new(),
            guessed: Vec::new(),
            match_found: false,
            queue: VecDeque::new(),
            current: None,
        }
    }

    /// Starts a new session, discarding any previous one.
    ///
    /// # Errors
    ///
    /// `InvalidWordLength` for zero, `NoWords` if no dictionary entry has
    /// `word_length` letters. Either way the solver is left uninitialized.
    pub fn start<S: AsRef<str>>(
        &mut self,
        word_length: usize,
        dictionary: &[S],
    ) -> Result<Outcome, SolverError> {
        self.state = SessionState::Uninitialized;
        self.pattern = Pattern::default();
        self.candidates.clear();
        self.guessed.clear();
        self.match_found = false;
        self.queue.clear();
        self.current = None;

        if word_length == 0 {
            return Err(SolverError::InvalidWordLength);
        }

        let candidates: Vec<String> = dictionary
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|word| word.chars().count() == word_length)
            .map(str::to_string)
            .collect();
        if candidates.is_empty() {
            log::warn!("no dictionary words of length {word_length}");
            return Err(SolverError::NoWords { word_length });
        }

        info_log!(
            "start() - length {}, {} of {} dictionary words",
            word_length,
            candidates.len(),
            dictionary.len()
        );
        self.pattern = Pattern::new(word_length);
        self.candidates = candidates;
        self.queue = self.table.order_for(word_length).iter().copied().collect();
        self.state = SessionState::AwaitingFeedback;
        Ok(self.select_next())
    }

    /// Applies feedback for `letter`: `positions` are one-indexed, `[0]` for a miss.
    ///
    /// A letter that was already submitted is not reapplied; the solver just
    /// recommends again.
    ///
    /// # Errors
    ///
    /// Fails without touching state if no session is running, the session has
    /// ended, the letter isn't alphabetic, or the positions are malformed.
    pub fn submit_feedback(
        &mut self,
        letter: char,
        positions: &[usize],
    ) -> Result<Outcome, SolverError> {
        match self.state {
            SessionState::Uninitialized => return Err(SolverError::NotStarted),
            SessionState::AwaitingFeedback => {}
            state => return Err(SolverError::SessionOver(state)),
        }
        if !letter.is_ascii_alphabetic() {
            return Err(SolverError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_uppercase();
        let feedback = Feedback::from_positions(positions, self.pattern.len())?;

        if self.guessed.contains(&letter) {
            log::warn!("feedback for {letter} was already applied; ignoring repeat");
            return Ok(self.current.clone().unwrap_or_else(|| self.select_next()));
        }
        self.guessed.push(letter);

        let before = self.candidates.len();
        match feedback {
            Feedback::Miss => self.apply_miss(letter),
            Feedback::Hit(indices) => self.apply_hit(letter, &indices),
        }
        info_log!(
            "submit_feedback() - {} {:?}: {} -> {} candidates, pattern {}",
            letter,
            positions,
            before,
            self.candidates.len(),
            self.pattern
        );

        Ok(self.select_next())
    }

    pub fn get_status(&self) -> Status {
        let candidate_sample = if self.candidates.len() <= SAMPLE_LIMIT {
            self.candidates.clone()
        } else {
            Vec::new()
        };
        Status {
            pattern: self.pattern.to_string(),
            candidate_count: self.candidates.len(),
            candidate_sample,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn word_length(&self) -> usize {
        self.pattern.len()
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Letters submitted this session, in the order they were given.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn match_found(&self) -> bool {
        self.match_found
    }

    fn apply_miss(&mut self, letter: char) {
        self.candidates.retain(|word| !word.contains(letter));
    }

    fn apply_hit(&mut self, letter: char, indices: &[usize]) {
        self.match_found = true;
        for &i in indices {
            if !self.pattern.confirm(i, letter) {
                log::warn!(
                    "slot {} already holds {:?}; keeping it",
                    i + 1,
                    self.pattern.get(i)
                );
            }
        }

        let slots = self.pattern.slots();
        self.candidates.retain(|word| {
            let chars: Vec<char> = word.chars().collect();
            // The guess reveals every occurrence, so an unknown slot can't hide another one.
            indices.iter().all(|&i| chars[i] == letter)
                && chars.iter().zip(slots).all(|(&c, slot)| match slot {
                    Some(confirmed) => c == *confirmed,
                    None => c != letter,
                })
        });
    }

    fn select_next(&mut self) -> Outcome {
        let outcome = if self.candidates.is_empty() {
            Outcome::NoMatch
        } else if let Some(word) = self.pattern.word() {
            Outcome::Solved(word)
        } else if let Some(letter) = self.next_priority_letter() {
            Outcome::Continue(letter)
        } else if let Some(letter) = self.most_frequent_letter() {
            Outcome::Continue(letter)
        } else {
            Outcome::LetterExhaustion
        };

        self.state = match outcome {
            Outcome::Continue(_) => SessionState::AwaitingFeedback,
            Outcome::Solved(_) => SessionState::Solved,
            Outcome::NoMatch => SessionState::NoMatch,
            Outcome::LetterExhaustion => SessionState::NoFurtherLetters,
        };
        debug_log!("select_next() - {:?}", outcome);
        self.current = Some(outcome.clone());
        outcome
    }

    fn next_priority_letter(&mut self) -> Option<char> {
        if self.match_found {
            return None;
        }
        while let Some(letter) = self.queue.pop_front() {
            if !self.guessed.contains(&letter) {
                return Some(letter);
            }
        }
        None
    }

    // Counts each letter once per candidate word.
    fn most_frequent_letter(&self) -> Option<char> {
        let mut index: HashMap<char, usize> = HashMap::new();
        let mut counts: Vec<(char, usize)> = Vec::new();

        for word in &self.candidates {
            let mut seen = HashSet::new();
            for c in word.chars() {
                if !c.is_ascii_alphabetic() || self.guessed.contains(&c) || !seen.insert(c) {
                    continue;
                }
                let slot = *index.entry(c).or_insert_with(|| {
                    counts.push((c, 0));
                    counts.len() - 1
                });
                counts[slot].1 += 1;
            }
        }

        counts
            .into_iter()
            .fold(None, |best: Option<(char, usize)>, (c, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((c, n)),
            })
            .map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn frequency_only() -> PriorityTable {
        PriorityTable::new("")
    }

    #[test]
    fn test_pattern_display_and_completion() {
        let mut pattern = Pattern::new(4);
        assert_eq!(pattern.to_string(), "____");
        assert!(pattern.confirm(1, 'O'));
        assert!(!pattern.confirm(1, 'X'));
        assert_eq!(pattern.to_string(), "_O__");
        assert_eq!(pattern.get(1), Some('O'));
        assert_eq!(pattern.word(), None);
        for (i, c) in ['B', 'O', 'O', 'K'].into_iter().enumerate() {
            pattern.confirm(i, c);
        }
        assert_eq!(pattern.word(), Some("BOOK".to_string()));
    }

    #[test]
    fn test_feedback_parsing() {
        assert_eq!(Feedback::from_positions(&[0], 5), Ok(Feedback::Miss));
        assert_eq!(
            Feedback::from_positions(&[1, 3, 3], 5),
            Ok(Feedback::Hit(vec![0, 2]))
        );
        assert_eq!(
            Feedback::from_positions(&[], 5),
            Err(SolverError::EmptyPositions)
        );
        assert_eq!(
            Feedback::from_positions(&[6], 5),
            Err(SolverError::InvalidPosition {
                position: 6,
                word_length: 5
            })
        );
        assert!(Feedback::from_positions(&[0, 2], 5).is_err());
    }

    #[test]
    fn test_positions_of() {
        assert_eq!(positions_of("LEVEL", 'E'), vec![2, 4]);
        assert_eq!(positions_of("LEVEL", 'l'), vec![1, 5]);
        assert_eq!(positions_of("LEVEL", 'Z'), vec![0]);
    }

    #[test]
    fn test_start_uses_priority_table() {
        let dictionary = words(&["CRANE", "CRATE", "GRATE", "PLATE", "DOG"]);
        let mut solver = ConstraintSolver::new();
        assert_eq!(solver.start(5, &dictionary), Ok(Outcome::Continue('S')));
        assert_eq!(solver.state(), SessionState::AwaitingFeedback);
        assert_eq!(solver.candidates().len(), 4);
        assert_eq!(solver.get_status().pattern, "_____");
        assert!(!solver.match_found());
    }

    #[test]
    fn test_start_without_words_of_length() {
        let dictionary = words(&["CRANE", "DOG"]);
        let mut solver = ConstraintSolver::new();
        assert_eq!(
            solver.start(6, &dictionary),
            Err(SolverError::NoWords { word_length: 6 })
        );
        assert_eq!(solver.state(), SessionState::Uninitialized);
        assert_eq!(
            solver.submit_feedback('Z', &[0]),
            Err(SolverError::NotStarted)
        );
    }

    #[test]
    fn test_start_rejects_zero_length() {
        let mut solver = ConstraintSolver::new();
        assert_eq!(
            solver.start(0, &words(&["A"])),
            Err(SolverError::InvalidWordLength)
        );
    }

    #[test]
    fn test_restart_discards_previous_session() {
        let dictionary = words(&["CAT", "COT", "DOGS"]);
        let mut solver = ConstraintSolver::new();
        solver.start(3, &dictionary).unwrap();
        solver.submit_feedback('C', &[1]).unwrap();
        assert!(solver.match_found());

        assert_eq!(solver.start(4, &dictionary), Ok(Outcome::Continue('A')));
        assert!(solver.guessed_letters().is_empty());
        assert!(!solver.match_found());
        assert_eq!(solver.candidates(), ["DOGS"]);
        assert_eq!(solver.get_status().pattern, "____");
    }

    #[test]
    fn test_priority_order_before_first_hit() {
        let dictionary = words(&["CRANE", "CRATE", "GRATE", "PLATE"]);
        let mut solver = ConstraintSolver::new();
        assert_eq!(solver.start(5, &dictionary), Ok(Outcome::Continue('S')));
        assert_eq!(solver.submit_feedback('S', &[0]), Ok(Outcome::Continue('E')));
        // Letters absent from every candidate keep the set intact.
        assert_eq!(solver.candidates().len(), 4);
        // Guessing out of order skips that letter later.
        assert_eq!(solver.submit_feedback('O', &[0]), Ok(Outcome::Continue('A')));
        assert_eq!(solver.submit_feedback('I', &[0]), Ok(Outcome::Continue('U')));
    }

    #[test]
    fn test_priority_exhaustion_falls_back_to_frequency() {
        let table = PriorityTable::new("").with_order(3, "Q");
        let dictionary = words(&["BAT", "CAT"]);
        let mut solver = ConstraintSolver::with_table(&table);
        assert_eq!(solver.start(3, &dictionary), Ok(Outcome::Continue('Q')));
        assert_eq!(solver.submit_feedback('Q', &[0]), Ok(Outcome::Continue('A')));
        assert!(!solver.match_found());
    }

    #[test]
    fn test_worked_example_to_solution() {
        let dictionary = words(&["CRANE", "CRATE", "GRATE", "PLATE"]);
        let mut solver = ConstraintSolver::new();
        solver.start(5, &dictionary).unwrap();
        solver.submit_feedback('S', &[0]).unwrap();

        assert_eq!(solver.submit_feedback('A', &[3]), Ok(Outcome::Continue('E')));
        assert_eq!(solver.get_status().pattern, "__A__");
        assert_eq!(solver.candidates().len(), 4);

        // R and T both appear in three words; R is seen first.
        assert_eq!(solver.submit_feedback('E', &[5]), Ok(Outcome::Continue('R')));
        assert_eq!(solver.submit_feedback('R', &[2]), Ok(Outcome::Continue('C')));
        assert_eq!(solver.candidates(), ["CRANE", "CRATE", "GRATE"]);
        assert_eq!(solver.submit_feedback('C', &[1]), Ok(Outcome::Continue('N')));
        assert_eq!(solver.submit_feedback('N', &[0]), Ok(Outcome::Continue('T')));
        assert_eq!(
            solver.submit_feedback('T', &[4]),
            Ok(Outcome::Solved("CRATE".to_string()))
        );
        assert_eq!(solver.state(), SessionState::Solved);
        assert_eq!(
            solver.submit_feedback('X', &[0]),
            Err(SolverError::SessionOver(SessionState::Solved))
        );
    }

    #[test]
    fn test_miss_removes_words_containing_letter_anywhere() {
        let dictionary = words(&["BEAD", "BEER", "BOLD", "BIRD"]);
        let mut solver = ConstraintSolver::new();
        solver.start(4, &dictionary).unwrap();
        solver.submit_feedback('E', &[0]).unwrap();
        assert_eq!(solver.candidates(), ["BOLD", "BIRD"]);
        assert!(solver.candidates().iter().all(|w| !w.contains('E')));
    }

    #[test]
    fn test_hit_rejects_extra_unreported_occurrences() {
        let dictionary = words(&["LEVEL", "LEVER", "LEMON", "MELON", "LEAPS"]);
        let mut solver = ConstraintSolver::new();
        solver.start(5, &dictionary).unwrap();
        solver.submit_feedback('E', &[2]).unwrap();
        assert_eq!(solver.candidates(), ["LEMON", "MELON", "LEAPS"]);
        assert!(solver.match_found());
    }

    #[test]
    fn test_hit_keeps_previously_confirmed_letters() {
        let dictionary = words(&["LEMON", "MELON", "LEAPS"]);
        let mut solver = ConstraintSolver::new();
        solver.start(5, &dictionary).unwrap();
        solver.submit_feedback('L', &[1]).unwrap();
        assert_eq!(solver.candidates(), ["LEMON", "LEAPS"]);
        solver.submit_feedback('E', &[2]).unwrap();
        assert_eq!(solver.candidates(), ["LEMON", "LEAPS"]);
        assert_eq!(solver.get_status().pattern, "LE___");
    }

    #[test]
    fn test_hit_on_confirmed_slot_is_contradiction() {
        let dictionary = words(&["CAT", "COT"]);
        let mut solver = ConstraintSolver::new();
        solver.start(3, &dictionary).unwrap();
        solver.submit_feedback('C', &[1]).unwrap();
        assert_eq!(solver.submit_feedback('D', &[1]), Ok(Outcome::NoMatch));
        assert_eq!(solver.get_status().pattern, "C__");
        assert_eq!(solver.state(), SessionState::NoMatch);
    }

    #[test]
    fn test_no_match_when_word_absent() {
        let dictionary = words(&["CAT", "COT"]);
        let mut solver = ConstraintSolver::new();
        solver.start(3, &dictionary).unwrap();
        assert_eq!(solver.submit_feedback('C', &[0]), Ok(Outcome::NoMatch));
        let status = solver.get_status();
        assert_eq!(status.candidate_count, 0);
        assert!(status.candidate_sample.is_empty());
    }

    #[test]
    fn test_frequency_counts_each_word_once() {
        // Three E's in one word still count once, so X (two words) wins.
        let dictionary = words(&["EEEX", "OXYZ", "OWWW"]);
        let table = frequency_only();
        let mut solver = ConstraintSolver::with_table(&table);
        assert_eq!(solver.start(4, &dictionary), Ok(Outcome::Continue('X')));
        assert_eq!(solver.submit_feedback('X', &[0]), Ok(Outcome::Continue('O')));
    }

    #[test]
    fn test_frequency_tie_breaks_on_first_seen() {
        let table = frequency_only();
        let mut solver = ConstraintSolver::with_table(&table);
        assert_eq!(
            solver.start(3, &words(&["BAT", "CAT"])),
            Ok(Outcome::Continue('A'))
        );
        assert_eq!(
            solver.start(2, &words(&["XY", "YX"])),
            Ok(Outcome::Continue('X'))
        );
    }

    #[test]
    fn test_letter_exhaustion() {
        let table = frequency_only();
        let mut solver = ConstraintSolver::with_table(&table);
        assert_eq!(
            solver.start(3, &words(&["A-B"])),
            Ok(Outcome::Continue('A'))
        );
        assert_eq!(solver.submit_feedback('A', &[1]), Ok(Outcome::Continue('B')));
        assert_eq!(
            solver.submit_feedback('B', &[3]),
            Ok(Outcome::LetterExhaustion)
        );
        assert_eq!(solver.state(), SessionState::NoFurtherLetters);
        assert_eq!(solver.get_status().candidate_count, 1);
    }

    #[test]
    fn test_repeated_letter_is_idempotent() {
        let dictionary = words(&["LEMON", "MELON", "LEAPS"]);
        let mut solver = ConstraintSolver::new();
        solver.start(5, &dictionary).unwrap();
        solver.submit_feedback('L', &[1]).unwrap();
        let candidates = solver.candidates().to_vec();

        solver.submit_feedback('l', &[3]).unwrap();
        assert_eq!(solver.candidates(), candidates.as_slice());
        assert_eq!(solver.get_status().pattern, "L____");
        assert_eq!(solver.guessed_letters(), ['L']);
    }

    #[test]
    fn test_repeated_miss_keeps_priority_order() {
        let dictionary = words(&["BRAIN", "TRAIN", "GRAIN"]);
        let mut solver = ConstraintSolver::new();
        assert_eq!(solver.start(5, &dictionary), Ok(Outcome::Continue('S')));
        assert_eq!(solver.submit_feedback('S', &[0]), Ok(Outcome::Continue('E')));
        assert_eq!(solver.submit_feedback('S', &[0]), Ok(Outcome::Continue('E')));
        assert_eq!(solver.guessed_letters(), ['S']);
        assert_eq!(solver.get_status().candidate_count, 3);

        // The order carries on from E.
        assert_eq!(solver.submit_feedback('E', &[0]), Ok(Outcome::Continue('A')));
    }

    #[test]
    fn test_invalid_feedback_leaves_state_untouched() {
        let dictionary = words(&["CAT", "COT"]);
        let mut solver = ConstraintSolver::new();
        solver.start(3, &dictionary).unwrap();
        assert_eq!(
            solver.submit_feedback('1', &[1]),
            Err(SolverError::InvalidLetter('1'))
        );
        assert_eq!(
            solver.submit_feedback('C', &[4]),
            Err(SolverError::InvalidPosition {
                position: 4,
                word_length: 3
            })
        );
        assert!(solver.guessed_letters().is_empty());
        assert_eq!(solver.candidates().len(), 2);
    }

    #[test]
    fn test_lowercase_letter_is_normalized() {
        let dictionary = words(&["CAT", "COT"]);
        let mut solver = ConstraintSolver::new();
        solver.start(3, &dictionary).unwrap();
        solver.submit_feedback('o', &[2]).unwrap();
        assert_eq!(solver.candidates(), ["COT"]);
        assert_eq!(solver.guessed_letters(), ['O']);
    }

    #[test]
    fn test_status_sample_cutoff() {
        let many: Vec<String> = (b'A'..=b'K').map(|c| format!("{}Z", c as char)).collect();
        let mut solver = ConstraintSolver::new();
        solver.start(2, &many).unwrap();
        let status = solver.get_status();
        assert_eq!(status.candidate_count, 11);
        assert!(status.candidate_sample.is_empty());

        solver.submit_feedback('A', &[0]).unwrap();
        let status = solver.get_status();
        assert_eq!(status.candidate_count, 10);
        assert_eq!(status.candidate_sample.len(), 10);
        assert_eq!(status.candidate_sample[0], "BZ");
    }

    #[test]
    fn test_candidates_never_grow() {
        let dictionary = words(&["CRANE", "CRATE", "GRATE", "PLATE", "SLATE", "STATE"]);
        let target = "GRATE";
        let mut solver = ConstraintSolver::new();
        let mut outcome = solver.start(5, &dictionary).unwrap();
        let mut previous = solver.candidates().len();

        while let Outcome::Continue(letter) = outcome {
            outcome = solver
                .submit_feedback(letter, &positions_of(target, letter))
                .unwrap();
            assert!(solver.candidates().len() <= previous);
            assert!(solver.candidates().iter().any(|w| w == target));
            previous = solver.candidates().len();
        }
        assert_eq!(outcome, Outcome::Solved(target.to_string()));
        assert!(!solver.get_status().pattern.contains(PLACEHOLDER));
    }
}
