//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// `fallback` is the filter used when `RUST_LOG` is unset. This is safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init(fallback: &str) {
    tracing::init(fallback);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
