use std::env;
use std::process;

use prio_heap::benchmark::{run_benchmarks, BenchmarkConfig, BenchmarkReport};

fn print_table(report: &BenchmarkReport) {
    println!("=====================================================");
    println!("Benchmark: PriorityHeap vs std BinaryHeap");
    println!(
        "Size: {} elements, K: {}, seed: {}",
        report.config.size, report.config.k, report.config.seed
    );
    println!("=====================================================");
    println!(
        "{:<12} | {:<28} | {:<10} | {:<12}",
        "Workload", "Implementation", "Elements", "Time (ms)"
    );
    println!("-----------------------------------------------------");

    for result in &report.results {
        println!(
            "{:<12} | {:<28} | {:<10} | {:<12.2}",
            result.workload, result.implementation, result.elements, result.execution_time_ms
        );
    }

    if report.checksums_agree() {
        println!("\nAll implementations produced identical output.");
    } else {
        println!("\nWARNING: implementations disagree on at least one workload");
    }
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = match BenchmarkConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: benchmark [SIZE] [K] [--seed N] [--json]");
            process::exit(2);
        }
    };

    let report = match run_benchmarks(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if config.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_table(&report);
    }
}
