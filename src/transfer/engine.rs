use std::time::Instant;

use crate::config::{Direction, TransferKind};
use crate::device::DeviceContext;
use crate::stats::{DirectionStats, TransferSample};

use super::{TransferBuffers, TransferError};

/// Aggregated timings for one buffer size; a direction the run did not
/// request stays `None`.
#[derive(Debug, Clone, Copy)]
pub struct SizeStats {
    pub write: Option<DirectionStats>,
    pub read: Option<DirectionStats>,
}

/// Times one blocking transfer in the given direction: start stamp, enqueue
/// against the device-resident buffer, drain the queue, end stamp.
pub fn measure(
    ctx: &DeviceContext,
    buffers: &TransferBuffers<'_>,
    kind: TransferKind,
) -> Result<f64, TransferError> {
    let runtime = ctx.runtime();
    let queue = ctx.queue();

    let start = Instant::now();

    match kind {
        TransferKind::HostToDevice => runtime.enqueue_write(
            queue,
            buffers.device_mem(),
            buffers.len(),
            buffers.source_ptr(),
        )?,
        TransferKind::DeviceToHost => runtime.enqueue_read(
            queue,
            buffers.device_mem(),
            buffers.len(),
            buffers.dest_ptr(),
        )?,
    }
    runtime.finish(queue)?;

    Ok(start.elapsed().as_secs_f64())
}

/// Runs the round loop for one buffer size, folding each sample into the
/// per-direction accumulator as soon as it is taken. The sampler is any
/// source of elapsed timings; a sampler failure aborts the loop immediately.
pub fn run_rounds<S, P>(
    rounds: u32,
    direction: Direction,
    mut sample: S,
    mut progress: P,
) -> Result<SizeStats, TransferError>
where
    S: FnMut(TransferKind) -> Result<f64, TransferError>,
    P: FnMut(u32, u32),
{
    let mut write = direction
        .wants(TransferKind::HostToDevice)
        .then(DirectionStats::new);
    let mut read = direction
        .wants(TransferKind::DeviceToHost)
        .then(DirectionStats::new);

    for round in 0..rounds {
        progress(round + 1, rounds);

        if let Some(stats) = write {
            let elapsed = sample(TransferKind::HostToDevice)?;
            let s = TransferSample::new(TransferKind::HostToDevice, elapsed);
            write = Some(stats.record(s));
        }

        if let Some(stats) = read {
            let elapsed = sample(TransferKind::DeviceToHost)?;
            let s = TransferSample::new(TransferKind::DeviceToHost, elapsed);
            read = Some(stats.record(s));
        }
    }

    Ok(SizeStats { write, read })
}
