use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::models::{BenchmarkReport, BenchmarkResult};
use crate::data_structures::{MaxOrder, MinOrder, PriorityHeap, TopK};
use crate::{Error, Result};

/// Runs every workload against `PriorityHeap` and `std::collections::BinaryHeap`
pub fn run_benchmarks(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    if config.k == 0 {
        return Err(Error::ZeroCapacity);
    }
    log::info!(
        "running benchmarks: size={} k={} seed={}",
        config.size,
        config.k,
        config.seed
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let keys: Vec<u64> = (0..config.size).map(|_| rng.gen()).collect();
    let scores: Vec<OrderedFloat<f64>> = (0..config.size)
        .map(|_| OrderedFloat(rng.gen_range(0.0..1.0)))
        .collect();

    let mut report = BenchmarkReport::new(config.clone());
    report.results.extend(heap_sort(&keys)?);
    report.results.extend(bulk_build(&keys)?);
    report.results.extend(replace_top(&keys, config.k)?);
    report.results.extend(top_k(&scores, config.k)?);

    if !report.checksums_agree() {
        log::warn!("implementations disagree on at least one workload");
    }
    Ok(report)
}

/// Pushes every key, then pops until empty
fn heap_sort(keys: &[u64]) -> Result<Vec<BenchmarkResult>> {
    let ours = timed("heap_sort", "PriorityHeap", keys.len(), || {
        let mut heap = PriorityHeap::min();
        for &key in keys {
            heap.push(key);
        }
        Ok(drain_checksum(std::iter::from_fn(|| heap.pop())))
    })?;
    let baseline = timed("heap_sort", "std BinaryHeap", keys.len(), || {
        let mut heap = BinaryHeap::new();
        for &key in keys {
            heap.push(Reverse(key));
        }
        Ok(drain_checksum(std::iter::from_fn(|| {
            heap.pop().map(|Reverse(key)| key)
        })))
    })?;
    Ok(vec![ours, baseline])
}

/// Builds from the whole key set at once, then pops until empty
fn bulk_build(keys: &[u64]) -> Result<Vec<BenchmarkResult>> {
    let ours = timed("bulk_build", "PriorityHeap", keys.len(), || {
        let mut heap = PriorityHeap::with_items(MinOrder, keys.iter().copied());
        Ok(drain_checksum(std::iter::from_fn(|| heap.pop())))
    })?;
    let baseline = timed("bulk_build", "std BinaryHeap", keys.len(), || {
        let mut heap: BinaryHeap<_> = keys.iter().copied().map(Reverse).collect();
        Ok(drain_checksum(std::iter::from_fn(|| {
            heap.pop().map(|Reverse(key)| key)
        })))
    })?;
    Ok(vec![ours, baseline])
}

/// Seeds a heap with `k` keys and swaps the root for each remaining key
fn replace_top(keys: &[u64], k: usize) -> Result<Vec<BenchmarkResult>> {
    let (seed_keys, stream) = keys.split_at(k.min(keys.len()));
    let ours = timed("replace_top", "PriorityHeap", stream.len(), || {
        let mut heap = PriorityHeap::with_items(MinOrder, seed_keys.iter().copied());
        Ok(drain_checksum(
            stream.iter().filter_map(|&key| heap.replace_top(key)),
        ))
    })?;
    let baseline = timed("replace_top", "std BinaryHeap (pop+push)", stream.len(), || {
        let mut heap: BinaryHeap<_> = seed_keys.iter().copied().map(Reverse).collect();
        Ok(drain_checksum(stream.iter().filter_map(|&key| {
            let top = heap.pop().map(|Reverse(top)| top);
            heap.push(Reverse(key));
            top
        })))
    })?;
    Ok(vec![ours, baseline])
}

/// Keeps the `k` largest scores
fn top_k(scores: &[OrderedFloat<f64>], k: usize) -> Result<Vec<BenchmarkResult>> {
    let ours = timed("top_k", "TopK", scores.len(), || {
        let mut top = TopK::new(k, MaxOrder)?;
        top.extend(scores.iter().copied());
        let kept = top.into_sorted_vec();
        Ok(drain_checksum(kept.into_iter().map(|s| s.into_inner().to_bits())))
    })?;
    let baseline = timed("top_k", "std BinaryHeap (push+pop)", scores.len(), || {
        let mut heap = BinaryHeap::with_capacity(k + 1);
        for &score in scores {
            heap.push(Reverse(score));
            if heap.len() > k {
                heap.pop();
            }
        }
        let mut kept: Vec<_> = heap.into_iter().map(|Reverse(score)| score).collect();
        kept.sort_by(|a, b| b.cmp(a));
        Ok(drain_checksum(kept.into_iter().map(|s| s.into_inner().to_bits())))
    })?;
    Ok(vec![ours, baseline])
}

/// Runs `workload` once and records how long it took
fn timed<F>(
    workload: &str,
    implementation: &str,
    elements: usize,
    f: F,
) -> Result<BenchmarkResult>
where
    F: FnOnce() -> Result<u64>,
{
    let start = Instant::now();
    let checksum = f()?;
    let elapsed = start.elapsed();
    log::debug!("{} / {}: {:?}", workload, implementation, elapsed);
    Ok(BenchmarkResult {
        workload: workload.to_string(),
        implementation: implementation.to_string(),
        elements,
        execution_time_ms: elapsed.as_secs_f64() * 1000.0,
        checksum,
    })
}

/// Folds an output sequence into an order-sensitive checksum
fn drain_checksum<I: Iterator<Item = u64>>(values: I) -> u64 {
    values.fold(17u64, |acc, value| acc.wrapping_mul(31).wrapping_add(value))
}
