use sysinfo::System;

/// CPU display name for the run header. Only ever printed, never acted on.
pub fn cpu_name() -> String {
    let mut sys = System::new();
    sys.refresh_cpu();

    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Unknown CPU".to_string())
}
