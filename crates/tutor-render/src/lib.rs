//! Lesson rendering.
//!
//! [`LessonView::build`] runs the content pipeline over a [`Lesson`] and
//! produces a view model: the preamble, one panel pair per code example
//! (code and its explanation, plus an optional sandboxed preview), the
//! trailing content, exercises and quiz. [`LessonView::to_html`] turns it into
//! an HTML fragment for the hosting page.
//!
//! # Example
//!
//! ```
//! use tutor_lesson::Lesson;
//! use tutor_render::{LessonView, RenderOptions};
//!
//! let lesson = Lesson {
//!     title: "Selectors".to_owned(),
//!     content: "### Code Examples\n```css\n.box { color: red }\n```\n### Explanation\nColors boxes.".to_owned(),
//!     ..Lesson::default()
//! };
//! let view = LessonView::build(&lesson, &RenderOptions::default());
//!
//! assert_eq!(view.sections.len(), 1);
//! assert!(view.sections[0].examples[0].preview.is_some());
//! assert!(view.to_html().contains(r#"<code class="language-css">"#));
//! ```
//!
//! [`Lesson`]: tutor_lesson::Lesson

mod markdown;
mod options;
mod view;

pub use markdown::{code_block_html, render_markdown};
pub use options::RenderOptions;
pub use view::{ExampleView, LessonView, SectionView};
