use criterion::{black_box, criterion_group, criterion_main, Criterion};
use onboard_core::wizard::options::parse_change;
use onboard_core::wizard::{
    can_proceed, project_review, AnswerSet, FundCatalog, Step, Visibility, WizardSession,
};

fn completed_answers() -> AnswerSet {
    let mut answers = AnswerSet::default();
    for (key, value) in [
        ("investor_type", "individual_ai"),
        ("acknowledged", "yes"),
        ("first_name", "Mei Lin"),
        ("last_name", "Tan"),
        ("date_of_birth", "1984-03-09"),
        ("nationality", "Singapore"),
        ("id_type", "NRIC"),
        ("id_number", "S1234567A"),
        ("email", "mei.tan@example.com"),
        ("tax_residency", "Singapore"),
        ("us_person", "no"),
        ("crs_status", "individual"),
        ("source_of_wealth", "Employment / Salary"),
        ("employment_status", "Employed (Private Sector)"),
        ("selected_fund", "quant-alpha"),
        ("investment_amount", "500000"),
        ("risk_tolerance", "aggressive"),
        ("consent_kyc", "yes"),
        ("consent_terms", "yes"),
    ] {
        answers = answers.with(&parse_change(key, value).expect("valid"));
    }
    answers
}

fn bench_validation(c: &mut Criterion) {
    let answers = completed_answers();
    c.bench_function("can_proceed_all_steps", |b| {
        b.iter(|| {
            for step in Step::ALL {
                black_box(can_proceed(step, black_box(&answers)));
            }
        })
    });

    c.bench_function("visibility_derive", |b| {
        b.iter(|| black_box(Visibility::derive(black_box(&answers))))
    });
}

fn bench_projection(c: &mut Criterion) {
    let answers = completed_answers();
    let catalog = FundCatalog::builtin();
    c.bench_function("project_review", |b| {
        b.iter(|| black_box(project_review(black_box(&answers), catalog)))
    });
}

fn bench_full_session(c: &mut Criterion) {
    c.bench_function("session_walk_and_submit", |b| {
        b.iter(|| {
            let mut session = WizardSession::new();
            session.advance();
            for (key, value) in [
                ("investor_type", "individual_ai"),
                ("acknowledged", "yes"),
            ] {
                session.apply(parse_change(key, value).expect("valid"));
            }
            session.advance();
            for (key, value) in [
                ("first_name", "Mei Lin"),
                ("last_name", "Tan"),
                ("date_of_birth", "1984-03-09"),
                ("nationality", "Singapore"),
                ("id_type", "NRIC"),
                ("id_number", "S1234567A"),
                ("email", "mei.tan@example.com"),
            ] {
                session.apply(parse_change(key, value).expect("valid"));
            }
            session.advance();
            for (key, value) in [
                ("tax_residency", "Singapore"),
                ("us_person", "no"),
                ("crs_status", "individual"),
            ] {
                session.apply(parse_change(key, value).expect("valid"));
            }
            session.advance();
            for (key, value) in [
                ("source_of_wealth", "Employment / Salary"),
                ("employment_status", "Employed (Private Sector)"),
            ] {
                session.apply(parse_change(key, value).expect("valid"));
            }
            session.advance();
            for (key, value) in [
                ("selected_fund", "quant-alpha"),
                ("investment_amount", "500000"),
                ("risk_tolerance", "aggressive"),
            ] {
                session.apply(parse_change(key, value).expect("valid"));
            }
            session.advance();
            for (key, value) in [("consent_kyc", "yes"), ("consent_terms", "yes")] {
                session.apply(parse_change(key, value).expect("valid"));
            }
            session.submit();
            black_box(session.submission().is_some())
        })
    });
}

criterion_group!(benches, bench_validation, bench_projection, bench_full_session);
criterion_main!(benches);
