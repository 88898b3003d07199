use gpu_pcie_bench::config::{TransferKind, Unit};
use gpu_pcie_bench::sizes::GIB;
use gpu_pcie_bench::stats::{throughput, DirectionStats, TransferSample};

fn fold(samples: &[f64]) -> DirectionStats {
    samples.iter().fold(DirectionStats::new(), |stats, &t| {
        stats.record(TransferSample::new(TransferKind::HostToDevice, t))
    })
}

#[test]
fn fold_accumulates_sum_min_max_count() {
    let stats = fold(&[0.5, 0.25, 2.0]);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.sum, 2.75);
    assert_eq!(stats.min, 0.25);
    assert_eq!(stats.max, 2.0);
}

#[test]
fn fold_is_order_independent() {
    let a = fold(&[0.5, 0.25, 2.0, 1.0]);
    let b = fold(&[1.0, 2.0, 0.25, 0.5]);
    assert_eq!(a.sum, b.sum);
    assert_eq!(a.min, b.min);
    assert_eq!(a.max, b.max);
    assert_eq!(a.count, b.count);
}

#[test]
fn empty_stats_report_empty() {
    assert!(DirectionStats::new().is_empty());
    assert!(!fold(&[1.0]).is_empty());
}

#[test]
fn elapsed_invariant_min_avg_max() {
    let stats = fold(&[0.004, 0.002, 0.003, 0.009]);
    assert!(stats.min <= stats.avg(), "min {} > avg {}", stats.min, stats.avg());
    assert!(stats.avg() <= stats.max, "avg {} > max {}", stats.avg(), stats.max);
}

#[test]
fn throughput_extremes_invert_elapsed_extremes() {
    let stats = fold(&[0.004, 0.002, 0.003, 0.009]);
    let bytes = 100 * 1024 * 1024;

    // Slowest transfer gives the lowest bandwidth, fastest the highest.
    let min_bw = throughput(bytes, stats.max, Unit::GBps);
    let avg_bw = throughput(bytes, stats.avg(), Unit::GBps);
    let max_bw = throughput(bytes, stats.min, Unit::GBps);

    assert!(min_bw <= avg_bw, "min bw {} > avg bw {}", min_bw, avg_bw);
    assert!(avg_bw <= max_bw, "avg bw {} > max bw {}", avg_bw, max_bw);
}

#[test]
fn gigabyte_and_megabyte_units_are_consistent() {
    // 1 GiB in half a second: exactly 2 GB/s, exactly 2048 MB/s.
    let gb = throughput(GIB, 0.5, Unit::GBps);
    let mb = throughput(GIB, 0.5, Unit::MBps);
    assert_eq!(gb, 2.0);
    assert_eq!(mb, 2048.0);
    assert_eq!(gb * 1024.0, mb);
}

#[test]
fn single_sample_collapses_the_range() {
    let stats = fold(&[0.125]);
    assert_eq!(stats.min, 0.125);
    assert_eq!(stats.max, 0.125);
    assert_eq!(stats.avg(), 0.125);
}
