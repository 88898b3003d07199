use gpu_pcie_bench::config::{Direction, TransferKind};
use gpu_pcie_bench::transfer::{run_rounds, TransferError};

#[test]
fn host2dev_only_produces_write_samples() {
    let mut taken: Vec<TransferKind> = Vec::new();

    let stats = run_rounds(
        3,
        Direction::HostToDevice,
        |kind| {
            taken.push(kind);
            Ok(0.001)
        },
        |_, _| {},
    )
    .unwrap();

    assert_eq!(taken, vec![TransferKind::HostToDevice; 3]);
    assert_eq!(stats.write.unwrap().count, 3);
    assert!(stats.read.is_none(), "dev2host must not be sampled");
}

#[test]
fn dev2host_only_produces_read_samples() {
    let mut taken: Vec<TransferKind> = Vec::new();

    let stats = run_rounds(
        2,
        Direction::DeviceToHost,
        |kind| {
            taken.push(kind);
            Ok(0.001)
        },
        |_, _| {},
    )
    .unwrap();

    assert_eq!(taken, vec![TransferKind::DeviceToHost; 2]);
    assert!(stats.write.is_none());
    assert_eq!(stats.read.unwrap().count, 2);
}

#[test]
fn both_directions_alternate_within_each_round() {
    let mut taken: Vec<TransferKind> = Vec::new();

    let stats = run_rounds(
        2,
        Direction::Both,
        |kind| {
            taken.push(kind);
            Ok(0.001)
        },
        |_, _| {},
    )
    .unwrap();

    assert_eq!(
        taken,
        vec![
            TransferKind::HostToDevice,
            TransferKind::DeviceToHost,
            TransferKind::HostToDevice,
            TransferKind::DeviceToHost,
        ]
    );
    assert_eq!(stats.write.unwrap().count, 2);
    assert_eq!(stats.read.unwrap().count, 2);
}

#[test]
fn sampler_failure_aborts_the_loop_immediately() {
    let mut calls = 0u32;

    let result = run_rounds(
        10,
        Direction::Both,
        |_| {
            calls += 1;
            if calls == 2 {
                Err(TransferError::BufferTooLarge(0))
            } else {
                Ok(0.001)
            }
        },
        |_, _| {},
    );

    assert!(result.is_err());
    assert_eq!(calls, 2, "no transfer may run after a failure");
}

#[test]
fn progress_reports_every_round() {
    let mut seen: Vec<(u32, u32)> = Vec::new();

    run_rounds(3, Direction::HostToDevice, |_| Ok(0.001), |round, total| {
        seen.push((round, total));
    })
    .unwrap();

    assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
}

#[test]
fn folded_stats_match_the_fed_samples() {
    let timings = [0.5, 0.25, 2.0];
    let mut next = timings.iter().copied();

    let stats = run_rounds(
        3,
        Direction::HostToDevice,
        |_| Ok(next.next().unwrap()),
        |_, _| {},
    )
    .unwrap();

    let write = stats.write.unwrap();
    assert_eq!(write.sum, 2.75);
    assert_eq!(write.min, 0.25);
    assert_eq!(write.max, 2.0);
}
