//! `tutor quiz` command implementation.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use tutor_quiz::{Clock, QuizMachine, QuizOutcome, SubmitOutcome, SystemClock};

use super::{ConfigArgs, load_lesson};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the quiz command.
#[derive(Args)]
pub(crate) struct QuizArgs {
    /// Lesson JSON file.
    lesson: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

impl QuizArgs {
    /// Execute the quiz command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or lesson cannot be loaded, or
    /// the terminal cannot be read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let lesson = load_lesson(&self.lesson)?;

        if lesson.quiz.is_empty() {
            output.info("This lesson has no quiz");
            return Ok(());
        }

        output.highlight(&lesson.title);
        let mut machine = QuizMachine::new(lesson.quiz, SystemClock)
            .with_feedback_delay(Duration::from_millis(config.quiz.feedback_delay_ms));

        let outcome = run_quiz(
            &mut machine,
            &mut std::io::stdin().lock(),
            &mut std::io::stdout().lock(),
            &output,
            std::thread::sleep,
        )?;

        match outcome {
            Some(QuizOutcome { score, total }) => {
                output.success(&format!("Score: {score}/{total}"));
            }
            None => output.warning("Quiz abandoned"),
        }
        Ok(())
    }
}

/// Ask every question until the quiz is done or input ends.
///
/// `wait` blocks for the feedback delay before the machine is ticked.
/// Returns `None` when input ends before the last answer.
fn run_quiz<C: Clock>(
    machine: &mut QuizMachine<C>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    output: &Output,
    mut wait: impl FnMut(Duration),
) -> Result<Option<QuizOutcome>, CliError> {
    let total = machine.total_questions();
    let mut line = String::new();

    while let Some(question) = machine.current_question() {
        writeln!(
            out,
            "\nQuestion {}/{total}: {}",
            machine.state().step + 1,
            question.question
        )?;
        for (idx, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {option}", idx + 1)?;
        }
        let answer = question.options.get(question.correct_answer).cloned();

        write!(out, "Answer: ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let Some(index) = parse_choice(&line) else {
            writeln!(out, "Enter an option number")?;
            continue;
        };

        match machine.submit_answer(index) {
            Ok(SubmitOutcome::Accepted { correct: true }) => {
                writeln!(out, "{}", output.correct("Correct!"))?;
            }
            Ok(SubmitOutcome::Accepted { correct: false }) => match &answer {
                Some(answer) => {
                    writeln!(out, "{} The answer is: {answer}", output.incorrect("Incorrect."))?;
                }
                None => writeln!(out, "{}", output.incorrect("Incorrect."))?,
            },
            Ok(SubmitOutcome::Ignored) => {}
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        }

        while let Some(remaining) = machine.time_until_advance() {
            wait(remaining);
            machine.tick();
        }
    }

    Ok(machine.outcome())
}

/// Parse a 1-based option number into an index.
fn parse_choice(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok()?.checked_sub(1)
}
