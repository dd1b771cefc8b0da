//! Lesson model and content parsing.
//!
//! Lesson content is free-form markdown written by instructors. Some lessons
//! follow a repeating layout:
//!
//! ~~~markdown
//! ### Code Examples
//!
//! ```js
//! // Example 1: Variables
//! let x = 1;
//! // Example 2: Constants
//! const y = 2;
//! ```
//!
//! ### Explanation
//!
//! #### Example 1
//! `let` declares a mutable binding.
//!
//! #### Example 2
//! `const` declares an immutable one.
//! ~~~
//!
//! # Pipeline
//!
//! 1. [`extract_sections`]: splits the content into a preamble, ordered
//!    (code, explanation) [`Section`]s and a trailing remainder.
//! 2. [`split_examples`]: splits a section's code body on `// Example N`
//!    comment markers.
//! 3. [`split_explanations`]: maps a section's explanation to example numbers.
//!
//! All three are pure functions of their input. Malformed markup never fails;
//! it degrades to plain markdown or a single implicit example. Use
//! [`check_lesson`] to collect authoring warnings for the same input.
//!
//! # Example
//!
//! ```
//! use tutor_lesson::{extract_sections, split_examples, split_explanations};
//!
//! let content = "Intro\n\n### Code Examples\n```js\n// Example 1\nfoo();\n```\n### Explanation\nExample 1\nCalls foo.\n";
//! let doc = extract_sections(content).unwrap();
//! assert_eq!(doc.before_all.trim(), "Intro");
//!
//! let section = &doc.sections[0];
//! let examples = split_examples(&section.code_body);
//! let explanations = split_explanations(&section.explanation_md);
//! assert_eq!(explanations.get(examples[0].number), "Calls foo.");
//! ```

mod check;
mod examples;
mod explanations;
mod fence;
mod model;
mod sections;
mod util;

pub use check::check_lesson;
pub use examples::{Example, split_examples};
pub use explanations::{ExplanationMap, split_explanations};
pub use model::{ExplicitExample, Lesson, LessonError, QuizQuestion};
pub use sections::{ParsedDocument, Section, SectionExtractor, extract_sections};
pub use util::trim_blank_lines;
