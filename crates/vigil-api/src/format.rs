// Display formatting for tuning values

/// Format an optional tuning value for display. Absent values render
/// as "Default" because the server, not the client, owns the fallback.
pub fn format_config_value(value: Option<f64>, suffix: Option<&str>) -> String {
    match value {
        None => "Default".to_string(),
        Some(v) => match suffix {
            Some(suffix) => format!("{v}{suffix}"),
            None => format!("{v}"),
        },
    }
}

/// Format a [0, 1] threshold as a whole percentage ("70%").
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        None => "Default".to_string(),
        Some(v) => format!("{:.0}%", v * 100.0),
    }
}

/// Format a duration value in seconds ("600s").
pub fn format_seconds(value: Option<f64>) -> String {
    format_config_value(value, Some("s"))
}
