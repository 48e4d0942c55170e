/// Decide whether the Auto-mode pattern should advance on this wake.
///
/// The menu task resets its reference instant whenever auto mode is not
/// active, so re-entering Auto always waits one full interval before the
/// first advance.
pub fn auto_cycle_due(auto_active: bool, elapsed_ms: u64, interval_ms: u64) -> bool {
    auto_active && elapsed_ms >= interval_ms
}
