use colored::*;
use ordered_float::OrderedFloat;
use prio_heap::{KeyOrder, MinOrder, PriorityHeap, TopK};
use rand::Rng;

#[derive(Debug, Clone)]
struct Reading {
    sensor: usize,
    value: OrderedFloat<f64>,
}

fn main() {
    env_logger::init();
    let mut rng = rand::thread_rng();

    println!("{}", "=== Priority heap walkthrough ===".bold().cyan());
    let mut heap = PriorityHeap::new(MinOrder);
    for value in [5, 3, 8, 1] {
        heap.push(value);
        println!("push {:<3} -> peek {:?}", value, heap.peek());
    }
    println!("pop        -> {:?}", heap.pop());
    println!("push_pop 2 -> {} (2 outranks the root, so the root falls out)", heap.push_pop(2));
    println!("push_pop 10-> {} (rejected, heap untouched)", heap.push_pop(10));
    println!("heap array: {:?}", heap.as_slice());

    println!("\n{}", "=== Top 5 of 10,000 sensor readings ===".bold().cyan());
    let by_value = KeyOrder::new(|r: &Reading| std::cmp::Reverse(r.value));
    let mut top = match TopK::new(5, by_value) {
        Ok(top) => top,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return;
        }
    };

    let mut dropped = 0;
    for i in 0..10_000 {
        let reading = Reading {
            sensor: i % 64,
            value: OrderedFloat(rng.gen_range(0.0..1000.0)),
        };
        if top.offer(reading).is_some() {
            dropped += 1;
        }
    }
    let threshold = top.threshold().map(|r| r.value.into_inner()).unwrap_or_default();

    for (rank, reading) in top.into_sorted_vec().into_iter().enumerate() {
        println!(
            "{} sensor {:>2}: {}",
            format!("#{}", rank + 1).green().bold(),
            reading.sensor,
            format!("{:.2}", reading.value.into_inner()).yellow()
        );
    }
    println!("dropped readings: {}", dropped.to_string().magenta());
    println!("final threshold: {:.2}", threshold);
}
