//! Authoring checks for lesson content.
//!
//! Rendering is best-effort and accepts anything; these checks point authors
//! at markup that rendered differently from what they probably meant.

use std::collections::BTreeSet;

use crate::examples::split_examples;
use crate::explanations::split_explanations;
use crate::model::Lesson;
use crate::sections::SectionExtractor;

/// Collect authoring warnings for a lesson.
///
/// Returns an empty list for a well-formed lesson.
///
/// # Example
///
/// ```
/// use tutor_lesson::{Lesson, QuizQuestion, check_lesson};
///
/// let lesson = Lesson {
///     title: "Loops".to_owned(),
///     quiz: vec![QuizQuestion {
///         question: "Which keyword?".to_owned(),
///         options: vec!["for".to_owned()],
///         correct_answer: 3,
///     }],
///     ..Lesson::default()
/// };
/// let warnings = check_lesson(&lesson);
/// assert_eq!(warnings, vec!["quiz question 1: correct answer 3 is out of range (1 options)"]);
/// ```
pub fn check_lesson(lesson: &Lesson) -> Vec<String> {
    let mut extractor = SectionExtractor::new();
    let parsed = extractor.extract(&lesson.content);
    let mut warnings = extractor.into_warnings();

    for (idx, section) in parsed.iter().flat_map(|doc| doc.sections.iter()).enumerate() {
        let section_num = idx + 1;
        let examples = split_examples(&section.code_body);

        let mut seen = BTreeSet::new();
        let mut previous: Option<u32> = None;
        for example in &examples {
            if !seen.insert(example.number) {
                warnings.push(format!(
                    "section {section_num}: duplicate example number {}",
                    example.number
                ));
            } else if let Some(prev) = previous
                && example.number < prev
            {
                warnings.push(format!(
                    "section {section_num}: example {} follows example {prev}",
                    example.number
                ));
            }
            previous = Some(example.number);
        }

        let explanations = split_explanations(&section.explanation_md);
        for number in explanations.numbers().filter(|n| !seen.contains(n)) {
            warnings.push(format!(
                "section {section_num}: explanation for example {number} has no matching example"
            ));
        }
    }

    for (idx, example) in lesson.code_examples.iter().enumerate() {
        if example.code.trim().is_empty() {
            warnings.push(format!("code example {}: empty code", idx + 1));
        }
    }

    for (idx, question) in lesson.quiz.iter().enumerate() {
        let question_num = idx + 1;
        if question.options.is_empty() {
            warnings.push(format!("quiz question {question_num}: no options"));
        } else if question.correct_answer >= question.options.len() {
            warnings.push(format!(
                "quiz question {question_num}: correct answer {} is out of range ({} options)",
                question.correct_answer,
                question.options.len()
            ));
        }
    }

    warnings
}
