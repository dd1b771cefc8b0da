//! Quiz state machine and timed UI feedback.
//!
//! A quiz asks its questions one at a time. Answering shows feedback for a
//! fixed delay, after which the next question is asked or the quiz finishes:
//!
//! ```text
//! Asking(step) --submit--> Feedback(step, selected) --delay--> Asking(step + 1)
//!                                                   \--delay--> Done(score)
//! ```
//!
//! Delays are deadlines on a [`Clock`] owned by the machine and applied by
//! [`QuizMachine::tick`]. Nothing runs in the background, so dropping or
//! resetting a machine cancels whatever was pending.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tutor_lesson::QuizQuestion;
//! use tutor_quiz::{QuizMachine, SubmitOutcome, SystemClock};
//!
//! let questions = vec![QuizQuestion {
//!     question: "2 + 2?".to_owned(),
//!     options: vec!["3".to_owned(), "4".to_owned()],
//!     correct_answer: 1,
//! }];
//! let mut quiz = QuizMachine::new(questions, SystemClock).with_feedback_delay(Duration::ZERO);
//!
//! assert_eq!(quiz.submit_answer(1).unwrap(), SubmitOutcome::Accepted { correct: true });
//! assert!(quiz.state().show_feedback);
//!
//! quiz.tick();
//! assert!(quiz.state().done);
//! assert_eq!(quiz.state().score, 1);
//! ```

mod clock;
mod copy;
mod machine;

#[cfg(any(test, feature = "mock"))]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use copy::{CopyIndicator, CopyStatus, DEFAULT_COPY_FEEDBACK};
pub use machine::{
    DEFAULT_FEEDBACK_DELAY, QuizError, QuizMachine, QuizOutcome, QuizSessionState, SubmitOutcome,
};
