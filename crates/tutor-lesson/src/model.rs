//! Lesson data as supplied by the backend.

use serde::{Deserialize, Serialize};

/// Lesson loading error.
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    /// The payload is not a valid lesson document.
    #[error("Invalid lesson JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A lesson as returned by the lesson API.
///
/// Read-only to this crate: everything derived from it is recomputed from
/// `content` on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson identifier.
    #[serde(alias = "_id", default)]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-form markdown body.
    #[serde(default)]
    pub content: String,
    /// Short summary shown above the content.
    #[serde(default)]
    pub overview: String,
    /// Practice exercise prompts.
    #[serde(default)]
    pub exercises: Vec<String>,
    /// Quiz questions, asked in order.
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    /// Examples attached outside of `content`.
    #[serde(default)]
    pub code_examples: Vec<ExplicitExample>,
}

impl Lesson {
    /// Parse a lesson from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, LessonError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A single multiple-choice question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question text.
    pub question: String,
    /// Answer options, displayed in order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
}

impl QuizQuestion {
    /// Whether `option` is the correct answer.
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

/// An example attached to a lesson as structured data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitExample {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "lang")]
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_lesson_camel_case() {
        let json = r#"{
            "_id": "64f0",
            "title": "Selectors",
            "content": "Body",
            "exercises": ["Style a list"],
            "quiz": [{"question": "Q?", "options": ["a", "b"], "correctAnswer": 1}],
            "codeExamples": [{"title": "Basics", "lang": "css", "code": "p {}"}]
        }"#;

        let lesson = Lesson::from_json(json).unwrap();

        assert_eq!(lesson.id, "64f0");
        assert_eq!(lesson.overview, "");
        assert_eq!(lesson.exercises, vec!["Style a list".to_owned()]);
        assert_eq!(lesson.quiz[0].correct_answer, 1);
        assert_eq!(
            lesson.code_examples[0],
            ExplicitExample {
                title: "Basics".to_owned(),
                language: "css".to_owned(),
                code: "p {}".to_owned(),
                explanation: None,
            }
        );
    }

    #[test]
    fn test_parse_lesson_minimal() {
        let lesson = Lesson::from_json(r#"{"title": "Empty"}"#).unwrap();
        assert_eq!(lesson.content, "");
        assert!(lesson.quiz.is_empty());
    }

    #[test]
    fn test_parse_lesson_invalid() {
        let err = Lesson::from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid lesson JSON"));
    }

    #[test]
    fn test_is_correct() {
        let question = QuizQuestion {
            question: "2 + 2?".to_owned(),
            options: vec!["3".to_owned(), "4".to_owned()],
            correct_answer: 1,
        };
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }
}
