//! Tracing/logging setup shared by pantry binaries.

/// Initialize process-wide logging with the format taken from `PANTRY_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
