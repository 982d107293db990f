//! Display formatting for counts, prices and playback times.

/// `15420` → `"15,420"`.
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole prices drop the cents: `99.0` → `"$99"`, `89.99` → `"$89.99"`.
pub fn price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("${}", count(value as u64))
    } else {
        let cents = (value * 100.0).round() as u64;
        format!("${}.{:02}", count(cents / 100), cents % 100)
    }
}

/// `754` → `"12:34"`.
pub fn timestamp(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Parses a lesson duration label such as `"12:30"` or `"1:02:03"`.
pub fn parse_duration_label(label: &str) -> Option<u32> {
    let parts: Vec<u32> = label
        .trim()
        .split(':')
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<_>>()?;

    match parts.as_slice() {
        [m, s] if *s < 60 => Some(m * 60 + s),
        [h, m, s] if *m < 60 && *s < 60 => Some(h * 3600 + m * 60 + s),
        _ => None,
    }
}
