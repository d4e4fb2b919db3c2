use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use envprobe::{parent_dir_with, resolve_with, split_path_list, PathStyle};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    // Benchmark plain absolute path resolution
    group.bench_function("absolute_plain", |b| {
        b.iter(|| resolve_with(black_box("/absolute/path/to/file"), None, PathStyle::Posix));
    });

    // Benchmark paths with . and .. segments
    group.bench_function("with_dots", |b| {
        b.iter(|| resolve_with(black_box("/a/b/../c/./d"), None, PathStyle::Posix));
    });

    // Benchmark paths dominated by pops
    group.bench_function("many_pops", |b| {
        b.iter(|| resolve_with(black_box("/a/b/c/d/../../../../e/f"), None, PathStyle::Posix));
    });

    // Benchmark relative resolution against a working directory
    group.bench_function("relative_with_cwd", |b| {
        b.iter(|| {
            resolve_with(
                black_box("../sibling/file"),
                Some("/home/user/project"),
                PathStyle::Posix,
            )
        });
    });

    // Benchmark the Windows flavor including separator conversion
    group.bench_function("windows_mixed_separators", |b| {
        b.iter(|| {
            resolve_with(
                black_box("C:/users\\shared/../local/data"),
                None,
                PathStyle::Windows,
            )
        });
    });

    // Benchmark a deep path to expose per-segment costs
    let deep = format!("/{}", vec!["segment"; 100].join("/"));
    group.bench_function("deep_100_segments", |b| {
        b.iter(|| resolve_with(black_box(&deep), None, PathStyle::Posix));
    });

    group.finish();
}

fn bench_parent_dir(c: &mut Criterion) {
    let mut group = c.benchmark_group("parent_dir");

    for (name, path) in [
        ("short", "/usr/lib"),
        ("long", "/very/long/path/with/many/segments/to/the/file"),
        ("root", "/"),
        ("bare_name", "file.txt"),
    ] {
        group.bench_with_input(BenchmarkId::new("posix", name), &path, |b, &path| {
            b.iter(|| parent_dir_with(black_box(path), PathStyle::Posix));
        });
    }

    group.bench_function("windows_drive", |b| {
        b.iter(|| parent_dir_with(black_box("C:\\Windows\\System32"), PathStyle::Windows));
    });

    group.finish();
}

fn bench_path_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_list");

    let short = "/usr/local/bin:/usr/bin:/bin";
    let long = vec!["/opt/tool/bin"; 50].join(":");

    group.bench_function("split_short", |b| {
        b.iter(|| split_path_list(black_box(short), ':'));
    });

    group.bench_function("split_50_entries", |b| {
        b.iter(|| split_path_list(black_box(&long), ':'));
    });

    group.bench_function("split_degenerate", |b| {
        b.iter(|| split_path_list(black_box(":::a::::b:::"), ':'));
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_parent_dir, bench_path_list);
criterion_main!(benches);
