use gpu_pcie_bench::bench::BenchError;
use gpu_pcie_bench::sizes::{
    filter_by_device_memory, format_size, resolve, GIB, KIB, MIB, STANDARD_SIZES,
};

#[test]
fn standard_size_survives_iff_within_quarter_of_memory() {
    // 2 GiB of device memory: threshold is 512 MiB, so everything up to and
    // including 512 MiB stays and the GiB entries go.
    let catalog = resolve(STANDARD_SIZES.clone(), false, 2 * GIB);
    assert_eq!(
        catalog,
        vec![512 * KIB, MIB, 10 * MIB, 100 * MIB, 512 * MIB]
    );
}

#[test]
fn threshold_boundary_is_inclusive() {
    // 4 MiB of memory: threshold 1 MiB, and the 1 MiB entry itself is kept.
    let catalog = resolve(STANDARD_SIZES.clone(), false, 4 * MIB);
    assert_eq!(catalog, vec![512 * KIB, MIB]);
}

#[test]
fn tiny_device_memory_empties_the_catalog() {
    // 1 MiB of memory: threshold 256 KiB, below every standard size.
    let catalog = resolve(STANDARD_SIZES.clone(), false, MIB);
    assert!(catalog.is_empty(), "no standard size fits, got {:?}", catalog);
}

#[test]
fn empty_catalog_is_its_own_terminal_condition() {
    let err = BenchError::EmptySizeSet;
    assert_eq!(err.to_string(), "No buffer sizes fit GPU memory constraints");
}

#[test]
fn user_specified_sizes_bypass_filtering() {
    let catalog = resolve(vec![MIB], true, MIB);
    assert_eq!(catalog, vec![MIB], "user list must be used verbatim");

    let catalog = resolve(vec![4 * GIB], true, MIB);
    assert_eq!(catalog, vec![4 * GIB]);
}

#[test]
fn user_specified_order_is_preserved() {
    let catalog = resolve(vec![10 * MIB, MIB], true, 2 * GIB);
    assert_eq!(catalog, vec![10 * MIB, MIB]);
}

#[test]
fn filter_adds_missing_standard_sizes_and_sorts() {
    let mut sizes = vec![100 * MIB];
    filter_by_device_memory(&mut sizes, 2 * GIB);
    assert_eq!(sizes, vec![512 * KIB, MIB, 10 * MIB, 100 * MIB, 512 * MIB]);
}

#[test]
fn filter_leaves_non_standard_sizes_alone() {
    let mut sizes = vec![3 * MIB];
    filter_by_device_memory(&mut sizes, MIB);
    assert_eq!(sizes, vec![3 * MIB], "only standard sizes may be removed");
}

#[test]
fn filter_is_deterministic() {
    let a = resolve(STANDARD_SIZES.clone(), false, 2 * GIB);
    let b = resolve(STANDARD_SIZES.clone(), false, 2 * GIB);
    assert_eq!(a, b);
}

#[test]
fn standard_catalog_is_ascending_and_positive() {
    let catalog = STANDARD_SIZES.clone();
    assert!(catalog.windows(2).all(|w| w[0] < w[1]));
    assert!(catalog.iter().all(|&s| s > 0));
}

#[test]
fn sizes_format_with_binary_units() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(512 * KIB), "512 KB");
    assert_eq!(format_size(100 * MIB), "100 MB");
    assert_eq!(format_size(2 * GIB), "2 GB");
}
