//! Buffer-size catalog: token parsing, the standard size set, and the
//! device-memory filter applied when the user did not pick sizes.

pub mod error;

pub use error::SizeParseError;

use once_cell::sync::Lazy;

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * 1024;
pub const GIB: u64 = 1024 * 1024 * 1024;

/// Reference sizes tested when `--sizes` is absent. The multi-GiB entries
/// only appear on hosts with a 64-bit address space.
pub static STANDARD_SIZES: Lazy<Vec<u64>> = Lazy::new(|| {
    let mut sizes = vec![512 * KIB, MIB, 10 * MIB, 100 * MIB, 512 * MIB];

    if usize::BITS >= 64 {
        sizes.push(GIB);
        sizes.push(2 * GIB);
        sizes.push(4 * GIB);
    }

    sizes
});

/// Parses one size token: a decimal integer with an optional K/M/G suffix
/// (case-insensitive, 1024-based).
pub fn parse_size(token: &str) -> Result<u64, SizeParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(SizeParseError::Empty);
    }

    let (number, multiplier) = match token.as_bytes()[token.len() - 1].to_ascii_lowercase() {
        b'k' => (&token[..token.len() - 1], KIB),
        b'm' => (&token[..token.len() - 1], MIB),
        b'g' => (&token[..token.len() - 1], GIB),
        _ => (token, 1),
    };

    let value: u64 = number
        .parse()
        .map_err(|_| SizeParseError::BadNumber(token.to_string()))?;
    if value == 0 {
        return Err(SizeParseError::Zero(token.to_string()));
    }

    value
        .checked_mul(multiplier)
        .ok_or_else(|| SizeParseError::Overflow(token.to_string()))
}

/// Parses a comma-separated size list. Malformed tokens are skipped with a
/// diagnostic; parsing never aborts the batch.
pub fn parse_sizes(list: &str) -> Vec<u64> {
    let mut sizes = Vec::new();

    for token in list.split(',') {
        match parse_size(token) {
            Ok(bytes) => sizes.push(bytes),
            Err(e) => eprintln!("{}", e),
        }
    }

    sizes
}

/// Reconciles the working set against the standard catalog: a standard size
/// is kept only when it fits within a quarter of total device memory, and is
/// added when it fits and is absent. The result is sorted ascending.
pub fn filter_by_device_memory(sizes: &mut Vec<u64>, total_memory_bytes: u64) {
    let threshold = total_memory_bytes / 4;

    for &standard in STANDARD_SIZES.iter() {
        if standard > threshold {
            sizes.retain(|&s| s != standard);
        } else if !sizes.contains(&standard) {
            sizes.push(standard);
        }
    }

    sizes.sort_unstable();
}

/// Final catalog for a run. A user-specified list is used verbatim; the
/// default catalog is narrowed by available device memory.
pub fn resolve(mut sizes: Vec<u64>, user_specified: bool, total_memory_bytes: u64) -> Vec<u64> {
    if !user_specified {
        filter_by_device_memory(&mut sizes, total_memory_bytes);
    }
    sizes
}

pub fn format_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{} GB", bytes / GIB)
    } else if bytes >= MIB {
        format!("{} MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{} B", bytes)
    }
}
