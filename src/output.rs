// src/output.rs
use crate::error::{PricerError, PricerResult};
use std::path::Path;

pub const DEFAULT_BINS: usize = 30;

pub fn write_payoffs_to_csv<P: AsRef<Path>>(filename: P, payoffs: &[f64]) -> PricerResult<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    writer.write_record(["trial", "discounted_payoff"])?;
    for (i, payoff) in payoffs.iter().enumerate() {
        writer.write_record(&[i.to_string(), payoff.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary_to_csv<P: AsRef<Path>>(
    filename: P,
    summary_data: &[(&str, String)],
) -> PricerResult<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    writer.write_record(["metric", "value"])?;
    for (key, value) in summary_data {
        writer.write_record([*key, value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Equal-width histogram of a payoff sample.
///
/// Bins span `[min, max]`; every bin is half-open except the last, which also
/// holds `max`. A sample with a single distinct value is spread over
/// `[v - 0.5, v + 0.5]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn new(data: &[f64], bins: usize) -> PricerResult<Self> {
        if bins == 0 {
            return Err(PricerError::InvalidConfiguration {
                field: "bins".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if data.is_empty() {
            return Err(PricerError::InvalidConfiguration {
                field: "data".to_string(),
                reason: "cannot build a histogram of an empty sample".to_string(),
            });
        }
        if let Some(bad) = data.iter().find(|x| !x.is_finite()) {
            return Err(PricerError::InvalidParameters {
                parameter: "data".to_string(),
                value: *bad,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            });
        }

        let (mut lo, mut hi) = data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let span = hi - lo;
        if !span.is_finite() {
            return Err(PricerError::InvalidParameters {
                parameter: "data".to_string(),
                value: span,
                constraint: "range (max - min) must be finite".to_string(),
            });
        }

        let width = span / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for &x in data {
            let idx = (((x - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Histogram { edges, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Text bar chart, one row per bin, bars scaled to `width` characters.
    pub fn render(&self, width: usize) -> String {
        let max_count = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let mut out = String::new();

        out.push_str("Distribution of Option Payoffs\n");
        out.push_str(&format!("{:>21} | Frequency\n", "Option Payoff"));
        for (i, &count) in self.counts.iter().enumerate() {
            let bar_len = count * width / max_count;
            out.push_str(&format!(
                "{:>9.4} - {:>9.4} | {} {}\n",
                self.edges[i],
                self.edges[i + 1],
                "#".repeat(bar_len),
                count
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_everything() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let hist = Histogram::new(&data, 10).unwrap();

        assert_eq!(hist.bins(), 10);
        assert_eq!(hist.edges.len(), 11);
        assert_eq!(hist.total(), 100);
        assert_eq!(hist.edges[0], 0.0);
        assert_eq!(hist.edges[10], 99.0);
        // max lands in the last bin
        assert!(hist.counts[9] >= 1);
    }

    #[test]
    fn test_histogram_degenerate_sample() {
        let hist = Histogram::new(&[0.0; 25], DEFAULT_BINS).unwrap();
        assert_eq!(hist.total(), 25);
        assert_eq!(hist.edges[0], -0.5);
        assert_eq!(hist.edges[DEFAULT_BINS], 0.5);
        assert_eq!(hist.counts.iter().filter(|&&c| c > 0).count(), 1);
    }

    #[test]
    fn test_histogram_rejects_bad_input() {
        assert!(Histogram::new(&[], 10).is_err());
        assert!(Histogram::new(&[1.0, 2.0], 0).is_err());
        assert!(Histogram::new(&[1.0, f64::NAN], 5).is_err());
    }

    #[test]
    fn test_histogram_rejects_overflowing_range() {
        match Histogram::new(&[-1e308, 1e308], 4) {
            Err(PricerError::InvalidParameters { parameter, value, .. }) => {
                assert_eq!(parameter, "data");
                assert!(value.is_infinite());
            }
            other => panic!("expected InvalidParameters, got {other:?}"),
        }

        let hist = Histogram::new(&[-1e307, 1e307], 4).unwrap();
        assert!(hist.edges.iter().all(|e| e.is_finite()));
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_render_labels() {
        let hist = Histogram::new(&[0.0, 0.0, 1.0, 2.5], 3).unwrap();
        let text = hist.render(20);
        assert!(text.starts_with("Distribution of Option Payoffs"));
        assert!(text.contains("Option Payoff"));
        assert!(text.contains("Frequency"));
        assert_eq!(text.lines().count(), 2 + 3);
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = std::env::temp_dir().join(format!("euro_mc_csv_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("payoffs.csv");

        write_payoffs_to_csv(&file, &[0.0, 1.5, 3.25]).unwrap();
        let contents = std::fs::read_to_string(&file).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "trial,discounted_payoff");
        assert_eq!(lines[2], "1,1.5");
        assert_eq!(lines.len(), 4);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
