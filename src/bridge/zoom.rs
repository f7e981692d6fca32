// Zoom is exchanged as an integer percentage; the engine takes a factor.

pub fn percent_to_factor(percent: i32) -> f64 {
    f64::from(percent) / 100.0
}

/// Rounds half up, so a factor that drifted slightly below the exact
/// value still maps back to the percentage that produced it.
pub fn factor_to_percent(factor: f64) -> i32 {
    (factor * 100.0 + 0.5) as i32
}
