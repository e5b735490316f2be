//! Load-factor sweep over the two map variants.
//!
//! Fills a `ProbingHashMap`, a `ChainingHashMap` and the standard library map
//! with random keys at a range of load factors, measures average lookup
//! latency and bucket occupancy, prints a summary table and renders the
//! latencies as a line chart.

#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::collections::HashMap;
use std::hint::black_box;
use std::time::Instant;

use plotters::prelude::*;
use probemap::{ChainingHashMap, HashTable, ProbingHashMap, hash_default};
use rand::Rng;

/// Buckets in every table under test.
const TABLE_CAPACITY: usize = 4096;
/// Load factors to sweep; the probing map resizes itself at 0.5, so the sweep
/// stays below that to keep the capacity fixed.
const NUM_LOAD_FACTORS: usize = 9;
/// Lookups per measurement.
const LOOKUPS: usize = 20_000;

/// Methods under comparison.
const METHODS: [&str; 3] = ["Quadratic Probing", "Separate Chaining", "Std HashMap"];

/// Inserts random keys until the map holds `target` entries, returning the
/// keys that went in.
fn fill_to(map: &mut dyn HashTable<u64>, target: usize, rng: &mut impl Rng) -> Vec<String> {
    let mut keys = Vec::with_capacity(target);
    while map.len() < target {
        let key = format!("key{}", rng.random_range(0..100_000_000_u64));
        let before = map.len();
        map.put(&key, 1);
        if map.len() > before {
            keys.push(key);
        }
    }
    keys
}

/// Average nanoseconds per lookup over a cycling sample of `keys`.
fn average_lookup_ns(map: &dyn HashTable<u64>, keys: &[String]) -> f64 {
    if keys.is_empty() {
        return 0.0;
    }
    let start = Instant::now();
    for key in keys.iter().cycle().take(LOOKUPS) {
        black_box(map.get(key));
    }
    start.elapsed().as_nanos() as f64 / LOOKUPS as f64
}

/// Same measurement for the standard library baseline.
fn average_std_lookup_ns(map: &HashMap<String, u64>, keys: &[String]) -> f64 {
    if keys.is_empty() {
        return 0.0;
    }
    let start = Instant::now();
    for key in keys.iter().cycle().take(LOOKUPS) {
        black_box(map.get(key));
    }
    start.elapsed().as_nanos() as f64 / LOOKUPS as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load factors from 0.05 to 0.45.
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.05 + 0.4 * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    let mut rng = rand::rng();
    let mut lookup_ns: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];

    println!("capacity {TABLE_CAPACITY}, {LOOKUPS} lookups per point");
    println!("load  entries  probing-ns  chaining-ns  std-ns  probing-empty  chaining-empty");

    for &load in &load_factors {
        let target = (TABLE_CAPACITY as f64 * load) as usize;

        let mut probing: ProbingHashMap<u64> = ProbingHashMap::new(TABLE_CAPACITY, hash_default);
        let probing_keys = fill_to(&mut probing, target, &mut rng);

        let mut chaining: ChainingHashMap<u64> =
            ChainingHashMap::new(TABLE_CAPACITY, hash_default);
        let chaining_keys = fill_to(&mut chaining, target, &mut rng);

        let mut std_map: HashMap<String, u64> = HashMap::with_capacity(TABLE_CAPACITY);
        for key in &probing_keys {
            std_map.insert(key.clone(), 1);
        }

        let probing_ns = average_lookup_ns(&probing, &probing_keys);
        let chaining_ns = average_lookup_ns(&chaining, &chaining_keys);
        let std_ns = average_std_lookup_ns(&std_map, &probing_keys);

        for (series, ns) in lookup_ns.iter_mut().zip([probing_ns, chaining_ns, std_ns]) {
            series.push(ns);
        }

        println!(
            "{load:.2}  {target:>7}  {probing_ns:>10.1}  {chaining_ns:>11.1}  {std_ns:>6.1}  \
             {:>13}  {:>14}",
            probing.empty_buckets(),
            chaining.empty_buckets(),
        );
    }

    // Chart configuration follows the usual comparison layout.
    let font_family = "sans-serif";
    let colors =
        [RGBColor(220, 50, 50), RGBColor(50, 90, 220), RGBColor(50, 180, 50)];

    let root = BitMapBackend::new("probe_report.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_ns = lookup_ns
        .iter()
        .flat_map(|series| series.iter())
        .fold(0.0_f64, |max, &ns| if ns > max { ns } else { max })
        * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Lookup Latency by Load Factor", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..NUM_LOAD_FACTORS, 0.0..max_ns)?;

    chart
        .configure_mesh()
        .x_labels(NUM_LOAD_FACTORS)
        .x_label_formatter(&|x| {
            load_factors.get(*x).map_or_else(String::new, |load| format!("{load:.2}"))
        })
        .x_desc("Load Factor")
        .y_desc("Average Lookup Time (ns)")
        .axis_desc_style((font_family, 16))
        .draw()?;

    for ((method, color), series) in METHODS.iter().zip(colors.iter()).zip(lookup_ns.iter()) {
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                series.iter().enumerate().map(|(i, &ns)| (i, ns)),
                line_style,
            ))?
            .label(*method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            series.iter().enumerate().map(|(i, &ns)| Circle::new((i, ns), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    println!("chart written to probe_report.png");

    Ok(())
}
