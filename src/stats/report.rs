use crate::config::Unit;

use super::accumulator::{throughput, DirectionStats};

/// Prints the summary block for one direction of one buffer size.
///
/// The slowest transfer (maximum elapsed) bounds the reported Min bandwidth
/// and the fastest (minimum elapsed) bounds the reported Max.
pub fn report_direction(label: &str, stats: &DirectionStats, bytes: u64, unit: Unit) {
    if stats.is_empty() {
        return;
    }

    let unit_label = unit.label();

    println!("{}:", label);
    println!("  Avg: {:.2} {}", throughput(bytes, stats.avg(), unit), unit_label);
    println!("  Min: {:.2} {}", throughput(bytes, stats.max, unit), unit_label);
    println!("  Max: {:.2} {}", throughput(bytes, stats.min, unit), unit_label);
}
