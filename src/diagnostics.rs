use dioxus::logger::tracing::debug;

/// Wall-clock milliseconds. `std::time::Instant` is unavailable on wasm32.
#[inline]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[inline]
pub fn log_perf(scope: &str, started_at_ms: i64, details: &str) {
    let elapsed_ms = (now_ms() - started_at_ms).max(0);
    if details.trim().is_empty() {
        debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}
