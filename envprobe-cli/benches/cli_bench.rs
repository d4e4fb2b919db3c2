use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("envprobe").expect("failed to locate binary");
            let output = cmd
                .arg("--version")
                .output()
                .expect("failed to run envprobe");
            black_box(output);
        });
    });
}

fn bench_cli_report(c: &mut Criterion) {
    c.bench_function("cli_report_json", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("envprobe").expect("failed to locate binary");
            let output = cmd
                .args(["report", "--format", "json"])
                .output()
                .expect("failed to run envprobe report");
            black_box(output);
        });
    });
}

fn bench_cli_resolve(c: &mut Criterion) {
    c.bench_function("cli_resolve", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("envprobe").expect("failed to locate binary");
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
            let status = cmd
                .args(["resolve", "/usr/local/../share/./doc"])
                .status()
                .expect("failed to run envprobe resolve");
            black_box(status.success());
        });
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_report,
    bench_cli_resolve
);
criterion_main!(cli_benches);
