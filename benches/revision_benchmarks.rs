//! Performance benchmarks for the Pay Revision Engine.
//!
//! This benchmark suite covers:
//! - Engine revision of one employee's history (12, 60 and 108 months)
//! - CSV parsing of a multi-employee pay history
//! - A full `/revision` request through the HTTP router
//! - A batch of 100 employees revised from one data set
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pay_revision_engine::api::{AppState, RevisionRequest, create_router};
use pay_revision_engine::calculation::compute_revision;
use pay_revision_engine::config::ConfigLoader;
use pay_revision_engine::models::{Month, PayRecord, RevisionPolicy};
use pay_revision_engine::source::PayHistory;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const HEADER: &str =
    "Employee No,Name,Status,Year,Month,Pay Scale Group,Basic,HRA percentage,HRA,VDA,Other Allowance";

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/prc3").expect("Failed to load config");
    AppState::new(config)
}

fn policy() -> RevisionPolicy {
    RevisionPolicy {
        fitment_pct: "10".parse().unwrap(),
        oa_pct: "35".parse().unwrap(),
        start_month: "Jan".to_string(),
        start_year: 2017,
    }
}

/// Builds a pay history CSV with `months` consecutive months per employee from Jan 2017,
/// promoting every employee one group every three years.
fn create_sheet(employees: usize, months: usize) -> String {
    let mut text = HEADER.to_string();
    for employee in 0..employees {
        for index in 0..months {
            let year = 2017 + (index / 12) as i32;
            let month = Month::ALL[index % 12];
            let grade = 2 + index / 36;
            text.push_str(&format!(
                "\n{},Employee {},Regular,{},{},E{},{},20,{},4000,3000",
                1000 + employee,
                employee,
                year,
                month,
                grade,
                30000 + employee * 100,
                6000 + employee * 20,
            ));
        }
    }
    text
}

fn create_records(months: usize) -> Vec<PayRecord> {
    PayHistory::from_csv_str(&create_sheet(1, months))
        .expect("Failed to build records")
        .records()
        .to_vec()
}

/// Benchmark: engine revision for histories of increasing length.
fn bench_revision_scaling(c: &mut Criterion) {
    let state = create_test_state();
    let policy = policy();

    let mut group = c.benchmark_group("revision_scaling");
    for months in [12usize, 60, 108] {
        let records = create_records(months);
        group.throughput(Throughput::Elements(months as u64));
        group.bench_with_input(BenchmarkId::new("months", months), &records, |b, records| {
            b.iter(|| black_box(compute_revision(records, &policy, state.tables())))
        });
    }
    group.finish();
}

/// Benchmark: parsing a 100 employee, 108 month pay history.
fn bench_csv_parse(c: &mut Criterion) {
    let sheet = create_sheet(100, 108);

    let mut group = c.benchmark_group("csv_parse");
    group.throughput(Throughput::Bytes(sheet.len() as u64));
    group.sample_size(20);
    group.bench_function("employees_100_months_108", |b| {
        b.iter(|| black_box(PayHistory::from_csv_str(&sheet).unwrap()))
    });
    group.finish();
}

/// Benchmark: a single `/revision` request through the router.
fn bench_revision_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = RevisionRequest {
        policy: policy(),
        records: create_records(108),
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("revision_request_108_months", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/revision")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: revising every employee of a 100 employee data set.
fn bench_batch_100(c: &mut Criterion) {
    let state = create_test_state();
    let policy = policy();
    let history = PayHistory::from_csv_str(&create_sheet(100, 60)).unwrap();
    let employees = history.employees();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(employees.len() as u64));
    group.sample_size(10);
    group.bench_function("batch_100", |b| {
        b.iter(|| {
            let results: Vec<_> = employees
                .iter()
                .map(|employee| {
                    let records = history.records_for_employee(&employee.employee_no);
                    compute_revision(&records, &policy, state.tables())
                })
                .collect();
            black_box(results)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_revision_scaling,
    bench_csv_parse,
    bench_revision_request,
    bench_batch_100,
);
criterion_main!(benches);
