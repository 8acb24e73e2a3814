//! Keyword Pipeline Benchmarking Tool
//!
//! Measures each stage of the keyword pipeline on a real job description and
//! resume, then prints the rendered context so the numbers can be checked
//! against actual output.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: canonicalizing both documents
//! 2. **Rank**: TF-IDF term ranking of the job description
//! 3. **Match**: present/missing classification of the ranked terms
//! 4. **Pipeline**: rank + match + render together
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release --features bench --bin keyterm_bench
//! ./target/release/keyterm_bench job.txt resume.txt [top_k]
//!
//! # With per-pass statistics
//! RUST_LOG=keyterm_core=debug ./target/release/keyterm_bench job.txt resume.txt
//! ```
//!
//! Build with `--release`; debug builds are an order of magnitude slower.

use std::env;
use std::error::Error;
use std::fs;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use keyterm_core::analyzer::TextNormalizer;
use keyterm_core::{match_terms, KeywordConfig, KeywordPipeline, RankConfig, TermRanker};

const WARMUP_RUNS: usize = 3;
const MEASURE_RUNS: usize = 50;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("keyterm_core=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: keyterm_bench <job.txt> <resume.txt> [top_k]");
        std::process::exit(1);
    }

    let job = fs::read_to_string(&args[1])?;
    let resume = fs::read_to_string(&args[2])?;

    let rank = match args.get(3) {
        Some(k) => RankConfig::with_top_k(k.parse()?),
        None => RankConfig::default(),
    };
    let config = KeywordConfig {
        rank,
        ..KeywordConfig::default()
    };

    let ranker = TermRanker::with_config(config.rank)?;
    let pipeline = KeywordPipeline::with_config(config)?;

    tracing::info!(
        job_bytes = job.len(),
        resume_bytes = resume.len(),
        top_k = config.rank.top_k,
        "loaded inputs"
    );
    println!("{}\n", ranker.stats(&job, &resume));

    bench_normalize(&job, &resume);
    bench_rank(&ranker, &job, &resume);
    bench_match(&ranker, &job, &resume);
    bench_pipeline(&pipeline, &job, &resume);

    let report = pipeline.run(&job, &resume);
    println!("=== Context ===");
    println!("{}", report.context);

    Ok(())
}

fn bench_normalize(job: &str, resume: &str) {
    let normalizer = TextNormalizer;
    let mut out = String::with_capacity(job.len().max(resume.len()));

    let elapsed = run(|| {
        normalizer.normalize_into(job, &mut out);
        normalizer.normalize_into(resume, &mut out);
        std::hint::black_box(&out);
    });

    print_perf("Normalize", job.len() + resume.len(), elapsed, 0);
}

fn bench_rank(ranker: &TermRanker, job: &str, resume: &str) {
    let mut terms = 0usize;
    let elapsed = run(|| {
        terms = std::hint::black_box(ranker.rank(job, resume)).len();
    });

    print_perf("Rank", job.len() + resume.len(), elapsed, terms);
}

fn bench_match(ranker: &TermRanker, job: &str, resume: &str) {
    let terms = ranker.rank(job, resume);

    let elapsed = run(|| {
        std::hint::black_box(match_terms(resume, &terms));
    });

    print_perf("Match", resume.len(), elapsed, terms.len());
}

fn bench_pipeline(pipeline: &KeywordPipeline, job: &str, resume: &str) {
    let mut terms = 0usize;
    let elapsed = run(|| {
        terms = std::hint::black_box(pipeline.run(job, resume)).ranked.len();
    });

    print_perf("Pipeline", job.len() + resume.len(), elapsed, terms);
}

fn run<F: FnMut()>(mut f: F) -> Duration {
    for _ in 0..WARMUP_RUNS {
        f();
    }

    let mut total = Duration::ZERO;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, terms: usize) {
    let secs = elapsed.as_secs_f64();

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.1} µs", secs * 1e6);
    println!("Throughput  : {:.2} MiB/s", input_bytes as f64 / (1024.0 * 1024.0) / secs);

    if terms > 0 {
        println!("Terms       : {}", terms);
    }

    println!("--------------------------------\n");
}
