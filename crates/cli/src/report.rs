//! Per-shape placement table (index, attempts, contained, centroid).
//!
//! Written as CSV, or Parquet when the path ends in `.parquet`.

use anyhow::{Context, Result};
use polars::prelude::*;
use polyscatter::api::{BatchReport, Shape};
use std::fs::File;
use std::path::Path;

pub fn report_frame(placed: &[Shape], report: &BatchReport) -> Result<DataFrame> {
    let index: Vec<u64> = report.outcomes.iter().map(|o| o.index as u64).collect();
    let attempts: Vec<u64> = report.outcomes.iter().map(|o| o.attempts).collect();
    let contained: Vec<bool> = report.outcomes.iter().map(|o| o.contained).collect();
    let (cx, cy): (Vec<f64>, Vec<f64>) = placed
        .iter()
        .map(|s| s.centroid().map_or((f64::NAN, f64::NAN), |c| (c.x, c.y)))
        .unzip();
    let df = df!(
        "index" => index,
        "attempts" => attempts,
        "contained" => contained,
        "centroid_x" => cx,
        "centroid_y" => cy
    )?;
    Ok(df)
}

pub fn write_report(path: &Path, placed: &[Shape], report: &BatchReport) -> Result<()> {
    let mut df = report_frame(placed, report)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    }
    tracing::info!(rows = df.height(), path = %path.display(), "placement_report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;
    use polyscatter::api::PlacementOutcome;
    use tempfile::tempdir;

    fn sample() -> (Vec<Shape>, BatchReport) {
        let sq = Shape::from(polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0)
        ]);
        let report = BatchReport {
            outcomes: vec![
                PlacementOutcome {
                    index: 0,
                    attempts: 1,
                    contained: true,
                },
                PlacementOutcome {
                    index: 1,
                    attempts: 1001,
                    contained: false,
                },
            ],
        };
        (vec![sq.clone(), sq], report)
    }

    #[test]
    fn frame_has_one_row_per_shape() {
        let (shapes, report) = sample();
        let df = report_frame(&shapes, &report).unwrap();
        assert_eq!(df.shape(), (2, 5));
    }

    #[test]
    fn csv_report_reads_back() {
        let (shapes, report) = sample();
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_report(&path, &shapes, &report).unwrap();
        let df = LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 5);
    }

    #[test]
    fn parquet_report_reads_back() {
        let (shapes, report) = sample();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/report.parquet");
        write_report(&path, &shapes, &report).unwrap();
        let df = LazyFrame::scan_parquet(&path, ScanArgsParquet::default())
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.shape(), (2, 5));
        let attempts: Vec<Option<u64>> = df
            .column("attempts")
            .unwrap()
            .u64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(attempts, vec![Some(1), Some(1001)]);
    }
}
