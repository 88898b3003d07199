use crate::sizes;

/// Requested transfer direction for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HostToDevice,
    DeviceToHost,
    Both,
}

/// One concrete transfer: a run with `Direction::Both` produces both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    HostToDevice,
    DeviceToHost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    MBps,
    GBps,
}

impl Direction {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "host2dev" => Some(Direction::HostToDevice),
            "dev2host" => Some(Direction::DeviceToHost),
            "both" => Some(Direction::Both),
            _ => None,
        }
    }

    pub fn wants(self, kind: TransferKind) -> bool {
        match self {
            Direction::Both => true,
            Direction::HostToDevice => kind == TransferKind::HostToDevice,
            Direction::DeviceToHost => kind == TransferKind::DeviceToHost,
        }
    }
}

impl Unit {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "mb" => Some(Unit::MBps),
            "gb" => Some(Unit::GBps),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::MBps => "MB/s",
            Unit::GBps => "GB/s",
        }
    }
}

/// Immutable run configuration, built once by the CLI layer.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub round_count: u32,
    pub direction: Direction,
    pub unit: Unit,
    pub device_index: usize,
    pub sizes: Vec<u64>,
    pub sizes_user_specified: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            round_count: 100,
            direction: Direction::Both,
            unit: Unit::GBps,
            device_index: 0,
            sizes: sizes::STANDARD_SIZES.clone(),
            sizes_user_specified: false,
        }
    }
}
