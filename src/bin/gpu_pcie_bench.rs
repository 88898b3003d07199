use std::env;
use std::process;

use gpu_pcie_bench::bench;
use gpu_pcie_bench::config::{BenchmarkConfig, Direction, Unit};
use gpu_pcie_bench::sizes;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        "gpu-pcie-bench version {}\n\
         GPU <-> Host Bandwidth Benchmark via OpenCL\n\n\
         Measures transfer speeds between your GPU and system memory over PCIe using OpenCL.\n\n\
         Usage: gpu-pcie-bench [options]\n\
         Options:\n\
         \x20 --device N           Target gpu device (default: 0)\n\
         \x20 --rounds N           Number of iterations per test (default: 100)\n\
         \x20 --sizes SIZES        Comma-separated buffer sizes with optional units (e.g. 1,10K,100M,1G)\n\
         \x20 --direction MODE     Transfer direction: host2dev, dev2host, both (default)\n\
         \x20 --unit mb|gb         Output unit (default: gb)\n\
         \x20 --version            Show version info\n\
         \x20 --help               Show this help message",
        VERSION
    );
}

fn usage_error(msg: &str) -> ! {
    eprintln!("{}", msg);
    print_help();
    process::exit(1);
}

fn flag_value<'a>(args: &'a [String], index: usize, flag: &str) -> &'a str {
    match args.get(index + 1) {
        Some(value) => value.as_str(),
        None => usage_error(&format!("Missing value for {}", flag)),
    }
}

fn parse_config(args: &[String]) -> BenchmarkConfig {
    let mut config = BenchmarkConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" => {
                print_help();
                process::exit(0);
            }
            "--version" => {
                println!("gpu-pcie-bench version {}", VERSION);
                process::exit(0);
            }
            "--rounds" => {
                let value = flag_value(args, i, "--rounds");
                config.round_count = match value.parse::<u32>() {
                    Ok(n) if n >= 1 => n,
                    _ => usage_error(&format!("Invalid round count: {}", value)),
                };
                i += 1;
            }
            "--device" => {
                let value = flag_value(args, i, "--device");
                config.device_index = match value.parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => usage_error(&format!("Invalid device index: {}", value)),
                };
                i += 1;
            }
            "--sizes" => {
                config.sizes = sizes::parse_sizes(flag_value(args, i, "--sizes"));
                config.sizes_user_specified = true;
                i += 1;
            }
            "--direction" => {
                let value = flag_value(args, i, "--direction");
                config.direction = match Direction::parse(value) {
                    Some(direction) => direction,
                    None => usage_error(&format!("Unknown direction: {}", value)),
                };
                i += 1;
            }
            "--unit" => {
                let value = flag_value(args, i, "--unit");
                config.unit = match Unit::parse(value) {
                    Some(unit) => unit,
                    None => usage_error(&format!("Unknown unit: {}", value)),
                };
                i += 1;
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    config
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_config(&args);

    if let Err(e) = bench::run(&config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
