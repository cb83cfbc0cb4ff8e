//! Performance benchmarks for the workforce core workflows.
//!
//! This benchmark suite verifies that the monthly lifecycle meets performance targets:
//! - Net salary computation: < 1μs mean
//! - Attendance initialization, 50 employees: < 5ms mean
//! - Payroll generation, 50 employees: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use uuid::Uuid;

use workforce_core::auth::{Session, hash_password};
use workforce_core::models::{Employee, PayrollRecord, Period, Role};
use workforce_core::store::MemoryStore;
use workforce_core::workflow::{attendance, payroll};

/// Seeds a store with one HR actor and `count` salaried employees.
fn seeded_store(count: usize) -> (MemoryStore, Session) {
    let store = MemoryStore::new();
    let hash = hash_password("pw").expect("Failed to hash password");
    let hr = Employee {
        id: Uuid::new_v4(),
        name: "HR Bench".to_string(),
        email: "hr@bench.example".to_string(),
        password_hash: hash.clone(),
        roles: vec![Role::Hr],
        base_salary: None,
        leave_balance: 0,
        active: true,
    };
    let session = Session::establish(hr.principal());
    store.seed_employee(hr);
    for i in 0..count {
        store.seed_employee(Employee {
            id: Uuid::new_v4(),
            name: format!("Employee {i:03}"),
            email: format!("emp{i:03}@bench.example"),
            password_hash: hash.clone(),
            roles: vec![Role::Employee],
            base_salary: Some(Decimal::new(30_000_00, 2)),
            leave_balance: 20,
            active: true,
        });
    }
    (store, session)
}

/// Benchmark: net salary computation.
///
/// Target: < 1μs mean
fn bench_compute_net(c: &mut Criterion) {
    let base = Decimal::new(30_000_00, 2);
    let payable = Decimal::new(285, 1); // 28.5 days

    c.bench_function("compute_net", |b| {
        b.iter(|| {
            black_box(PayrollRecord::compute_net(
                black_box(base),
                black_box(payable),
                black_box(30),
            ))
        })
    });
}

/// Benchmark: attendance initialization for a full month.
///
/// Target: < 5ms mean for 50 employees
fn bench_initialize_attendance(c: &mut Criterion) {
    let period = Period::new(6, 2024).expect("valid period");

    let mut group = c.benchmark_group("attendance_initialization");
    group.throughput(Throughput::Elements(50));

    group.bench_function("initialize_50_employees", |b| {
        b.iter_batched(
            || seeded_store(50),
            |(store, session)| {
                let created = attendance::initialize(&store, &session, period)
                    .expect("initialization failed");
                black_box(created)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark: payroll generation from a finalized period.
///
/// Target: < 10ms mean for 50 employees
fn bench_generate_payroll(c: &mut Criterion) {
    let period = Period::new(6, 2024).expect("valid period");

    let mut group = c.benchmark_group("payroll_generation");
    group.throughput(Throughput::Elements(50));

    group.bench_function("generate_50_employees", |b| {
        b.iter_batched(
            || {
                let (store, session) = seeded_store(50);
                attendance::initialize(&store, &session, period).expect("init failed");
                attendance::finalize(&store, &session, period).expect("finalize failed");
                (store, session)
            },
            |(store, session)| {
                let records =
                    payroll::generate(&store, &session, period).expect("generation failed");
                black_box(records)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_net,
    bench_initialize_attendance,
    bench_generate_payroll
);
criterion_main!(benches);
