use sysinfo::System;

/// Total memory in whole gigabytes: bytes floored to megabytes, then
/// floored again by 1024. Both floors are part of the displayed value.
pub fn gigabytes(bytes: u64) -> u64 {
    (bytes / 1_000_000) / 1024
}

/// Installed memory of this host, in display gigabytes.
pub fn query() -> u64 {
    let mut sys = System::new();
    sys.refresh_memory();
    gigabytes(sys.total_memory())
}
