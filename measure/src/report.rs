//! The CSV measurement report.

use crate::{common::*, measurement::MeasurementRow};

/// Column names, in order.
pub const HEADER: [&str; 9] = [
    "ImageID",
    "Label",
    "x_in_mm",
    "y_in_mm",
    "width_in_mm",
    "height_in_mm",
    "Diameter_in_mm",
    "Radius_in_mm",
    "Center_Point",
];

/// Write all rows at once, replacing any existing report.
///
/// The header is written even when there are no rows.
pub fn write_report<P>(path: P, rows: &[MeasurementRow]) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create report '{}'", path.display()))?;
    writer.write_record(HEADER)?;
    rows.iter().try_for_each(|row| writer.serialize(row))?;
    writer.flush()?;

    Ok(())
}

pub fn load_report<P>(path: P) -> Result<Vec<MeasurementRow>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let rows: Vec<MeasurementRow> = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open report '{}'", path.display()))?
        .deserialize::<MeasurementRow>()
        .try_collect()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{annotation::BoundingBox, unit::PixelToMm};

    fn row(image: &str, label: &str, tlhw: [f64; 4]) -> MeasurementRow {
        let bbox: BoundingBox = Label::new(TLHW::from_tlhw(tlhw.map(r64)), label.to_string());
        MeasurementRow::new(image, &bbox, PixelToMm::new(0.26))
    }

    #[test]
    fn report_text() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.csv");
        write_report(&path, &[row("sample.jpg", "pore", [20.0, 10.0, 50.0, 100.0])])?;

        let text = fs::read_to_string(&path)?;
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "ImageID,Label,x_in_mm,y_in_mm,width_in_mm,height_in_mm,Diameter_in_mm,Radius_in_mm,Center_Point",
                "sample.jpg,pore,2.6,5.2,26.0,13.0,26.0,13.0,\"(15.6, 11.7)\"",
            ]
        );
        Ok(())
    }

    #[test]
    fn rows_read_back_in_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("deep").join("report.csv");
        let rows = vec![
            row("b.jpg", "x", [0.0, 0.0, 10.0, 10.0]),
            row("a.jpg", "y", [1.0, 2.0, 3.0, 4.0]),
            row("a.jpg", "z, with comma", [5.0, 6.0, 7.0, 8.0]),
        ];
        write_report(&path, &rows)?;

        assert_eq!(load_report(&path)?, rows);
        Ok(())
    }

    #[test]
    fn empty_report_has_header() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.csv");
        fs::write(&path, "stale content\n")?;
        write_report(&path, &[])?;

        assert_eq!(fs::read_to_string(&path)?.trim_end(), HEADER.join(","));
        assert!(load_report(&path)?.is_empty());
        Ok(())
    }
}
