//! Lesson view model.

use std::fmt::Write;

use serde::Serialize;
use tutor_lesson::{
    ExplicitExample, Lesson, QuizQuestion, Section, check_lesson,
    extract_sections, split_examples, split_explanations,
};
use tutor_preview::{build_preview_doc, escape_html, preview_frame};

use crate::markdown::{code_block_html, render_markdown};
use crate::options::RenderOptions;

/// A lesson ready for display.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonView {
    pub id: String,
    pub title: String,
    pub overview_html: String,
    /// Content before the first section, or all of it when the content has
    /// no sections.
    pub before_html: String,
    pub sections: Vec<SectionView>,
    pub after_html: String,
    pub exercises: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
    /// Authoring warnings for the lesson.
    pub warnings: Vec<String>,
    #[serde(skip)]
    options: RenderOptions,
}

/// One code/explanation section.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    /// Explanation text shared by all examples, before any `Example N`.
    pub intro_html: Option<String>,
    pub examples: Vec<ExampleView>,
    /// Content between this section and the next one.
    pub interlude_html: String,
}

/// One example with its explanation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleView {
    pub number: u32,
    pub title: String,
    pub language: String,
    /// Plain code, as copied to the clipboard.
    pub code: String,
    pub code_html: String,
    pub explanation_html: String,
    /// Sandboxed preview document, when the example has one.
    pub preview: Option<String>,
}

impl LessonView {
    /// Build the view for a lesson.
    pub fn build(lesson: &Lesson, options: &RenderOptions) -> Self {
        let warnings = check_lesson(lesson);
        for warning in &warnings {
            tracing::warn!(lesson = %lesson.id, warning = %warning, "Lesson authoring warning");
        }

        let (before_html, mut sections, after_html) = match extract_sections(&lesson.content) {
            Some(doc) => (
                render_markdown(&doc.before_all, options.gfm),
                doc.sections
                    .iter()
                    .map(|section| SectionView::from_section(section, options))
                    .collect(),
                render_markdown(&doc.after_all, options.gfm),
            ),
            None => (
                render_markdown(&lesson.content, options.gfm),
                Vec::new(),
                String::new(),
            ),
        };

        if !lesson.code_examples.is_empty() {
            sections.push(SectionView::from_explicit(&lesson.code_examples, options));
        }

        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            overview_html: render_markdown(&lesson.overview, options.gfm),
            before_html,
            sections,
            after_html,
            exercises: lesson.exercises.clone(),
            quiz: lesson.quiz.clone(),
            warnings,
            options: options.clone(),
        }
    }

    /// Render the view as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);

        write!(
            out,
            r#"<article class="lesson" data-lesson-id="{}"><h1>{}</h1>"#,
            escape_html(&self.id),
            escape_html(&self.title)
        )
        .unwrap();

        if !self.overview_html.is_empty() {
            write!(out, r#"<div class="lesson-overview">{}</div>"#, self.overview_html).unwrap();
        }
        if !self.before_html.is_empty() {
            write!(out, r#"<div class="lesson-content">{}</div>"#, self.before_html).unwrap();
        }
        for section in &self.sections {
            section.write_html(&self.options, &mut out);
        }
        if !self.after_html.is_empty() {
            write!(out, r#"<div class="lesson-content">{}</div>"#, self.after_html).unwrap();
        }

        self.write_exercises(&mut out);
        self.write_quiz(&mut out);

        out.push_str("</article>");
        out
    }

    fn write_exercises(&self, out: &mut String) {
        if self.exercises.is_empty() {
            return;
        }
        out.push_str(r#"<section class="exercises"><h2>Exercises</h2><ol>"#);
        for exercise in &self.exercises {
            write!(out, "<li>{}</li>", escape_html(exercise)).unwrap();
        }
        out.push_str("</ol></section>");
    }

    /// Quiz markup for the client-side widget. Correct answers are not
    /// included; the widget reads them from the lesson data.
    fn write_quiz(&self, out: &mut String) {
        if self.quiz.is_empty() {
            return;
        }
        write!(
            out,
            r#"<section class="quiz" data-feedback-delay-ms="{}" data-total="{}"><h2>Quiz</h2><ol>"#,
            self.options.feedback_delay_ms,
            self.quiz.len()
        )
        .unwrap();
        for (step, question) in self.quiz.iter().enumerate() {
            write!(
                out,
                r#"<li class="quiz-question" data-step="{step}"><p>{}</p><ul class="quiz-options">"#,
                escape_html(&question.question)
            )
            .unwrap();
            for (idx, option) in question.options.iter().enumerate() {
                write!(
                    out,
                    r#"<li><button type="button" data-option="{idx}">{}</button></li>"#,
                    escape_html(option)
                )
                .unwrap();
            }
            out.push_str("</ul></li>");
        }
        out.push_str("</ol></section>");
    }
}

impl SectionView {
    fn from_section(section: &Section, options: &RenderOptions) -> Self {
        let explanations = split_explanations(&section.explanation_md);
        let examples = split_examples(&section.code_body)
            .into_iter()
            .map(|example| {
                ExampleView::new(
                    example.number,
                    example.title,
                    &section.code_lang,
                    example.code,
                    explanations.get(example.number),
                    options,
                )
            })
            .collect();

        Self {
            intro_html: explanations
                .intro
                .as_deref()
                .map(|intro| render_markdown(intro, options.gfm)),
            examples,
            interlude_html: render_markdown(&section.interlude, options.gfm),
        }
    }

    fn from_explicit(examples: &[ExplicitExample], options: &RenderOptions) -> Self {
        let examples = examples
            .iter()
            .zip(1u32..)
            .map(|(example, number)| {
                let title = if example.title.trim().is_empty() {
                    format!("Example {number}")
                } else {
                    example.title.trim().to_owned()
                };
                ExampleView::new(
                    number,
                    title,
                    &example.language,
                    example.code.trim_end().to_owned(),
                    example.explanation.as_deref().unwrap_or_default(),
                    options,
                )
            })
            .collect();

        Self {
            intro_html: None,
            examples,
            interlude_html: String::new(),
        }
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) {
        out.push_str(r#"<section class="code-section">"#);
        if let Some(intro) = &self.intro_html {
            write!(out, r#"<div class="explanation-intro">{intro}</div>"#).unwrap();
        }
        for example in &self.examples {
            example.write_html(options, out);
        }
        out.push_str("</section>");
        out.push_str(&self.interlude_html);
    }
}

impl ExampleView {
    fn new(
        number: u32,
        title: String,
        language: &str,
        code: String,
        explanation_md: &str,
        options: &RenderOptions,
    ) -> Self {
        let language = language.trim().to_ascii_lowercase();
        let preview = if options.previews {
            build_preview_doc(&language, &code)
        } else {
            None
        };

        Self {
            number,
            title,
            code_html: code_block_html(&language, &code),
            explanation_html: render_markdown(explanation_md, options.gfm),
            language,
            code,
            preview,
        }
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) {
        write!(
            out,
            r#"<div class="code-example" data-example="{}"><div class="code-panel"><div class="code-header"><span class="code-title">{}</span><button class="copy-button" type="button" data-copy-feedback-ms="{}">Copy</button></div>{}"#,
            self.number,
            escape_html(&self.title),
            options.copy_feedback_ms,
            self.code_html
        )
        .unwrap();
        if let Some(preview) = &self.preview {
            write!(
                out,
                r#"<details class="preview"><summary>Preview</summary>{}</details>"#,
                preview_frame(preview, &options.sandbox)
            )
            .unwrap();
        }
        out.push_str("</div>");
        write!(
            out,
            r#"<div class="explanation-panel">{}</div></div>"#,
            self.explanation_html
        )
        .unwrap();
    }
}
