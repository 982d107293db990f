//! Percentage helpers shared by progress bars and summaries.

/// `round(100 * completed / total)`, or 0 for an empty course.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = completed.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

/// Clamps a percentage into `[0, 100]` for display. NaN renders as 0.
pub fn clamp(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Rounded mean of a set of percentages, 0 when there are none.
pub fn average<I>(values: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), v| (sum + u32::from(v), count + 1));

    if count == 0 {
        return 0;
    }
    (f64::from(sum) / f64::from(count)).round().min(100.0) as u8
}
