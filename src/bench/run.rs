use std::io::{self, Write};

use crate::config::BenchmarkConfig;
use crate::device::DeviceContext;
use crate::host;
use crate::sizes;
use crate::stats::report_direction;
use crate::transfer::{measure, run_rounds, TransferBuffers};

use super::BenchError;

/// Executes a full benchmark run: bind the device once, then for each
/// catalog size allocate buffers, run the round loop, report, release.
pub fn run(config: &BenchmarkConfig) -> Result<(), BenchError> {
    println!("CPU: {}", host::cpu_name());

    let ctx = DeviceContext::open(config.device_index)?;
    let descriptor = ctx.descriptor();
    println!(
        "GPU: {} ({} MB)",
        descriptor.name,
        descriptor.total_memory_bytes / (1024 * 1024)
    );

    let catalog = sizes::resolve(
        config.sizes.clone(),
        config.sizes_user_specified,
        descriptor.total_memory_bytes,
    );
    if catalog.is_empty() {
        return Err(BenchError::EmptySizeSet);
    }

    for &bytes in &catalog {
        println!("\n[Buffer size: {}]", sizes::format_size(bytes));

        let buffers = TransferBuffers::allocate(&ctx, bytes)?;

        let stats = run_rounds(
            config.round_count,
            config.direction,
            |kind| measure(&ctx, &buffers, kind),
            |round, total| {
                print!("\r  Iteration {}/{}", round, total);
                let _ = io::stdout().flush();
            },
        )?;
        println!();

        if let Some(write) = stats.write {
            report_direction("Host to Device", &write, bytes, config.unit);
        }
        if let Some(read) = stats.read {
            report_direction("Device to Host", &read, bytes, config.unit);
        }
    }

    Ok(())
}
