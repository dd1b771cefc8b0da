//! Benchmarks for lesson content parsing.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tutor_lesson::{extract_sections, split_examples, split_explanations};

/// Generate lesson content with `sections` code/explanation pairs.
fn generate_lesson(sections: usize, examples_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * examples_per_section * 120);
    md.push_str("# Lesson\n\nSome introduction with **bold** text.\n\n");

    for s in 0..sections {
        md.push_str("### Code Examples\n\n```javascript\n");
        for e in 1..=examples_per_section {
            md.push_str(&format!("// Example {e}: step {e} of section {s}\n"));
            md.push_str(&format!("const value{e} = compute({s}, {e});\nconsole.log(value{e});\n"));
        }
        md.push_str("```\n\n### Explanation\n\n");
        for e in 1..=examples_per_section {
            md.push_str(&format!("#### Example {e}\nComputes step {e} and logs it.\n\n"));
        }
    }
    md.push_str("## Additional Resources\n\n- [MDN](https://developer.mozilla.org)\n");
    md
}

fn bench_extract_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_sections");

    for sections in [1, 10, 100] {
        let content = generate_lesson(sections, 3);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &content, |b, md| {
            b.iter(|| extract_sections(md));
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let content = generate_lesson(10, 5);

    c.bench_function("parse_lesson_10_sections", |b| {
        b.iter(|| {
            let doc = extract_sections(&content).unwrap();
            for section in &doc.sections {
                let examples = split_examples(&section.code_body);
                let explanations = split_explanations(&section.explanation_md);
                for example in &examples {
                    std::hint::black_box(explanations.get(example.number));
                }
            }
        });
    });
}

criterion_group!(benches, bench_extract_varying_sizes, bench_full_pipeline);
criterion_main!(benches);
