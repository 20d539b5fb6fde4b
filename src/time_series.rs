/// One point of the WPM-over-time series, taken at a whole second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WpmSample {
    pub elapsed_secs: u64,
    pub wpm: u32,
}

impl WpmSample {
    pub fn new(elapsed_secs: u64, wpm: u32) -> Self {
        Self { elapsed_secs, wpm }
    }
}

impl From<(u64, u32)> for WpmSample {
    fn from(v: (u64, u32)) -> Self {
        WpmSample {
            elapsed_secs: v.0,
            wpm: v.1,
        }
    }
}

/// Chart coordinates: (seconds, wpm)
impl From<WpmSample> for (f64, f64) {
    fn from(p: WpmSample) -> Self {
        (p.elapsed_secs as f64, p.wpm as f64)
    }
}

/// Average, spread and peak of a run's samples, for the results screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub peak: u32,
}

/// Population statistics over `samples`; `None` for a run too short to be sampled.
pub fn summary(samples: &[WpmSample]) -> Option<SampleSummary> {
    let peak = samples.iter().map(|s| s.wpm).max()?;
    let count = samples.len() as f64;

    let mean = samples.iter().map(|s| f64::from(s.wpm)).sum::<f64>() / count;
    let variance = samples
        .iter()
        .map(|s| (f64::from(s.wpm) - mean).powi(2))
        .sum::<f64>()
        / count;

    Some(SampleSummary {
        mean,
        std_dev: variance.sqrt(),
        peak,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_into_chart_point() {
        let point: (f64, f64) = WpmSample::new(3, 57).into();
        assert_eq!(point, (3.0, 57.0));
    }

    #[test]
    fn sample_from_tuple() {
        assert_eq!(WpmSample::from((9, 0)), WpmSample::new(9, 0));
    }

    fn series(wpms: &[u32]) -> Vec<WpmSample> {
        wpms.iter()
            .enumerate()
            .map(|(i, &wpm)| WpmSample::new(i as u64 + 1, wpm))
            .collect()
    }

    #[test]
    fn summary_of_no_samples() {
        assert_eq!(summary(&[]), None);
    }

    #[test]
    fn summary_mean_and_peak() {
        let s = summary(&series(&[40, 60, 50])).unwrap();

        assert_eq!(s.mean, 50.0);
        assert_eq!(s.peak, 60);
    }

    #[test]
    fn summary_population_std_dev() {
        let s = summary(&series(&[2, 4, 4, 4, 5, 5, 7, 9])).unwrap();

        assert_eq!(s.mean, 5.0);
        assert_eq!(s.std_dev, 2.0);
    }

    #[test]
    fn summary_of_a_flat_run() {
        let s = summary(&series(&[61, 61, 61])).unwrap();

        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.peak, 61);
    }

    #[test]
    fn summary_of_a_single_second() {
        let s = summary(&[WpmSample::new(1, 96)]).unwrap();

        assert_eq!(s.mean, 96.0);
        assert_eq!(s.std_dev, 0.0);
    }
}
