//! Human-readable report of the evaluation metrics.

use std::io::Write;

use crate::constants::REPORT_DECIMAL_PLACES;
use crate::error::Result;
use crate::eval::Metrics;

/// Write the fixed eleven-line metric report: the three raw counts
/// followed by the eight derived metrics, in stable order.
pub fn write_report<W: Write>(writer: &mut W, metrics: &Metrics) -> Result<()> {
    let prec = REPORT_DECIMAL_PLACES;

    writeln!(
        writer,
        "Number of boundaries in reference segmentation: {}",
        metrics.ref_count
    )?;
    writeln!(
        writer,
        "Number of boundaries in studied segmentation: {}",
        metrics.hyp_count
    )?;
    writeln!(writer, "Number of hits: {}", metrics.hit_count)?;
    writeln!(
        writer,
        "Hit rate (higher=>better): {:.prec$}%",
        metrics.hit_rate
    )?;
    writeln!(
        writer,
        "Over-segmentation rate (closer-zero=>better): {:.prec$}",
        metrics.over_segmentation
    )?;
    writeln!(
        writer,
        "Precision (higher=>better): {:.prec$}%",
        metrics.precision * 100.0
    )?;
    writeln!(
        writer,
        "Recall (higher=>better): {:.prec$}%",
        metrics.recall * 100.0
    )?;
    writeln!(
        writer,
        "F-measure (higher=>better): {:.prec$}%",
        metrics.f_measure * 100.0
    )?;
    writeln!(writer, "r1 (closer-zero=>better): {:.prec$}", metrics.r1)?;
    writeln!(writer, "r2 (closer-zero=>better): {:.prec$}", metrics.r2)?;
    writeln!(
        writer,
        "R-value (higher=>better): {:.prec$}%",
        metrics.r_value * 100.0
    )?;

    Ok(())
}

/// Print the report to stdout.
pub fn print_report(metrics: &Metrics) -> Result<()> {
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), metrics)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_metrics() -> Metrics {
        Metrics {
            ref_count: 3,
            hyp_count: 3,
            hit_count: 3,
            hit_rate: 100.0,
            over_segmentation: 0.0,
            precision: 1.0,
            recall: 1.0,
            f_measure: 1.0,
            r1: 0.0,
            r2: 0.0,
            r_value: 1.0,
        }
    }

    #[test]
    fn test_report_line_order() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &sample_metrics()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Number of boundaries in reference segmentation: 3");
        assert_eq!(lines[1], "Number of boundaries in studied segmentation: 3");
        assert_eq!(lines[2], "Number of hits: 3");
        assert!(lines[3].starts_with("Hit rate"));
        assert!(lines[4].starts_with("Over-segmentation rate"));
        assert!(lines[5].starts_with("Precision"));
        assert!(lines[6].starts_with("Recall"));
        assert!(lines[7].starts_with("F-measure"));
        assert!(lines[8].starts_with("r1"));
        assert!(lines[9].starts_with("r2"));
        assert!(lines[10].starts_with("R-value"));
    }

    #[test]
    fn test_report_formats_percentages() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &sample_metrics()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Hit rate (higher=>better): 100.0000%"));
        assert!(text.contains("R-value (higher=>better): 100.0000%"));
        assert!(text.contains("Over-segmentation rate (closer-zero=>better): 0.0000"));
    }
}
