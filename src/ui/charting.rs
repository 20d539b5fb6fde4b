use marmoset_type::time_series::WpmSample;

/// Compute X (seconds) and Y (WPM) bounds for the results chart
pub fn compute_chart_params(samples: &[WpmSample]) -> (f64, f64) {
    let highest_wpm = samples.iter().map(|s| s.wpm).max().unwrap_or(0);

    let overall_duration = samples
        .last()
        .map_or(1.0, |s| s.elapsed_secs as f64)
        .max(1.0);

    // a flat zero line still needs some headroom to be visible
    (overall_duration, f64::from(highest_wpm.max(10)))
}

pub fn chart_points(samples: &[WpmSample]) -> Vec<(f64, f64)> {
    samples.iter().copied().map(Into::into).collect()
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
