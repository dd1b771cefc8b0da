//! Quiz state machine.

use std::time::{Duration, Instant};

use serde::Serialize;
use tutor_lesson::QuizQuestion;

use crate::clock::{Clock, SystemClock, deadline_after};

/// How long answer feedback stays visible before the quiz moves on.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);

/// Quiz error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    /// The selected option does not exist on the current question.
    #[error("Option {index} is out of range: question has {options} options")]
    OptionOutOfRange {
        /// Selected option index.
        index: usize,
        /// Number of options on the question.
        options: usize,
    },
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was recorded and feedback is showing.
    Accepted { correct: bool },
    /// Feedback for a previous answer is still showing, or the quiz is done.
    Ignored,
}

/// Snapshot of a quiz session, shaped for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSessionState {
    /// Index of the current question.
    pub step: usize,
    /// Correct answers so far.
    pub score: usize,
    /// Whether every question has been answered.
    pub done: bool,
    /// Option chosen for the current question while feedback is showing.
    pub selected_option: Option<usize>,
    /// Whether answer feedback is showing.
    pub show_feedback: bool,
}

/// Final result of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

/// Machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Asking,
    Feedback {
        selected: usize,
        correct: bool,
        deadline: Instant,
    },
    Done,
}

/// Sequential quiz: ask, show feedback, advance or finish.
///
/// The feedback delay is a deadline owned by the machine. Call
/// [`tick`](Self::tick) when the host's timer fires (or on every frame);
/// [`time_until_advance`](Self::time_until_advance) tells it how long to wait.
#[derive(Debug)]
pub struct QuizMachine<C: Clock = SystemClock> {
    clock: C,
    questions: Vec<QuizQuestion>,
    feedback_delay: Duration,
    step: usize,
    score: usize,
    phase: Phase,
}

impl<C: Clock> QuizMachine<C> {
    /// Start a quiz at its first question.
    ///
    /// A quiz without questions starts finished.
    pub fn new(questions: Vec<QuizQuestion>, clock: C) -> Self {
        let phase = if questions.is_empty() {
            Phase::Done
        } else {
            Phase::Asking
        };
        Self {
            clock,
            questions,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            step: 0,
            score: 0,
            phase,
        }
    }

    /// Set how long feedback is shown before advancing.
    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Restart with another lesson's questions.
    ///
    /// Any pending feedback transition is discarded.
    pub fn reset(&mut self, questions: Vec<QuizQuestion>) {
        if matches!(self.phase, Phase::Feedback { .. }) {
            tracing::debug!(step = self.step, "Discarding pending quiz feedback");
        }
        self.phase = if questions.is_empty() {
            Phase::Done
        } else {
            Phase::Asking
        };
        self.questions = questions;
        self.step = 0;
        self.score = 0;
    }

    /// Answer the current question.
    ///
    /// Due transitions are applied first. While feedback is showing, or once
    /// the quiz is done, the answer is ignored.
    pub fn submit_answer(&mut self, option: usize) -> Result<SubmitOutcome, QuizError> {
        self.tick();

        let (Phase::Asking, Some(question)) = (self.phase, self.questions.get(self.step)) else {
            tracing::debug!(step = self.step, option, "Ignoring answer");
            return Ok(SubmitOutcome::Ignored);
        };

        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                options: question.options.len(),
            });
        }

        let correct = question.is_correct(option);
        if correct {
            self.score += 1;
        }
        self.phase = Phase::Feedback {
            selected: option,
            correct,
            deadline: deadline_after(self.clock.now(), self.feedback_delay),
        };
        tracing::debug!(step = self.step, option, correct, "Answer recorded");

        Ok(SubmitOutcome::Accepted { correct })
    }

    /// Apply the feedback transition if its deadline has passed.
    ///
    /// Returns `true` when the machine moved on.
    pub fn tick(&mut self) -> bool {
        let Phase::Feedback { deadline, .. } = self.phase else {
            return false;
        };
        if self.clock.now() < deadline {
            return false;
        }

        if self.step + 1 < self.questions.len() {
            self.step += 1;
            self.phase = Phase::Asking;
        } else {
            self.phase = Phase::Done;
            tracing::debug!(
                score = self.score,
                total = self.questions.len(),
                "Quiz finished"
            );
        }
        true
    }

    /// Time left before pending feedback advances, if any is pending.
    pub fn time_until_advance(&self) -> Option<Duration> {
        match self.phase {
            Phase::Feedback { deadline, .. } => {
                Some(deadline.saturating_duration_since(self.clock.now()))
            }
            Phase::Asking | Phase::Done => None,
        }
    }

    /// Current session state.
    pub fn state(&self) -> QuizSessionState {
        let (selected_option, show_feedback) = match self.phase {
            Phase::Feedback { selected, .. } => (Some(selected), true),
            Phase::Asking | Phase::Done => (None, false),
        };
        QuizSessionState {
            step: self.step,
            score: self.score,
            done: self.phase == Phase::Done,
            selected_option,
            show_feedback,
        }
    }

    /// Whether the last answer was correct, while its feedback is showing.
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.phase {
            Phase::Feedback { correct, .. } => Some(correct),
            Phase::Asking | Phase::Done => None,
        }
    }

    /// Question being asked or shown with feedback; `None` once done.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            Phase::Done => None,
            Phase::Asking | Phase::Feedback { .. } => self.questions.get(self.step),
        }
    }

    /// Number of questions in the quiz.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Final score, once the quiz is done.
    pub fn outcome(&self) -> Option<QuizOutcome> {
        (self.phase == Phase::Done).then_some(QuizOutcome {
            score: self.score,
            total: self.questions.len(),
        })
    }
}
