// Criterion benchmarks for Folio UI

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_ui::core::{contact, Board};
use folio_ui::models::{Category, ContactForm, FilterState, ResumeEntry};

fn create_entry(id: usize) -> ResumeEntry {
    let start_year = 1990 + (id % 30) as i32;
    ResumeEntry {
        category: if id % 3 == 0 {
            Category::Education
        } else {
            Category::Work
        },
        title: format!("Role {}", id),
        organization: format!("Org {}", id % 7),
        location: "Oslo".to_string(),
        start_year,
        end_year: start_year + (id % 5) as i32,
        details: vec![
            "First responsibility".to_string(),
            "Second responsibility".to_string(),
        ],
    }
}

fn narrowed_filter() -> FilterState {
    FilterState {
        include_work: true,
        include_education: false,
        from_year: 2000,
        to_year: 2012,
    }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for entry_count in [10, 50, 100, 500, 1000].iter() {
        let board = Board::new((0..*entry_count).map(create_entry).collect());
        let filter = board.default_filter();

        group.bench_with_input(
            BenchmarkId::new("full_range", entry_count),
            entry_count,
            |b, _| {
                b.iter(|| board.render(black_box(&filter)));
            },
        );
    }

    group.finish();
}

fn bench_narrowed_render(c: &mut Criterion) {
    let board = Board::new((0..100).map(create_entry).collect());
    let filter = narrowed_filter();

    c.bench_function("render_narrowed_100_entries", |b| {
        b.iter(|| board.render(black_box(&filter)));
    });
}

fn bench_validation(c: &mut Criterion) {
    let form = ContactForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Benchmarking".to_string(),
        message: "A message with some length to it, enough to escape.".to_string(),
        consent: true,
    };

    c.bench_function("validate_form", |b| {
        b.iter(|| contact::validate(black_box(&form)));
    });

    let errors = contact::validate(&form);
    c.bench_function("build_mailto_target", |b| {
        b.iter(|| contact::form_action(black_box("post@folio.dev"), &form, &errors));
    });
}

criterion_group!(benches, bench_render, bench_narrowed_render, bench_validation);

criterion_main!(benches);
