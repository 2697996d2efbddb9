//! The image-by-image batch driver.

use crate::{
    annotation::AnnotationRecord,
    annotator::{load_image, Annotator},
    common::*,
    config::{Config, FailurePolicy},
    measurement::MeasurementRow,
    report::write_report,
};

/// The step at which an image failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureStage {
    Parse,
    Decode,
    Write,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Parse => "parse",
            Self::Decode => "decode",
            Self::Write => "write",
        };
        f.write_str(text)
    }
}

/// A failed image, recorded when the batch keeps going.
#[derive(Debug)]
pub struct Failure {
    pub image: PathBuf,
    pub stage: FailureStage,
    pub error: Error,
}

#[derive(Debug)]
pub struct BatchSummary {
    /// Rows in processing order, as written to the report.
    pub rows: Vec<MeasurementRow>,
    /// Images annotated and written.
    pub processed: usize,
    /// Images without an annotation file.
    pub skipped: usize,
    pub failures: Vec<Failure>,
    pub report_file: PathBuf,
}

#[derive(Debug)]
enum ImageOutcome {
    MissingAnnotation,
    Processed(Vec<MeasurementRow>),
}

/// Process every image in the image directory and write the report.
///
/// Under [FailurePolicy::Abort] the first failing image stops the batch and
/// no report is written.
pub fn start(config: &Config) -> Result<BatchSummary> {
    let annotator = Annotator::new(config);
    let images = discover_images(config)?;
    info!(
        "found {} images in '{}', converting at {}",
        images.len(),
        config.image_dir.display(),
        config.pixel_to_mm
    );

    let mut rows = vec![];
    let mut processed = 0;
    let mut skipped = 0;
    let mut failures = vec![];

    for image_path in images {
        match process_image(config, &annotator, &image_path) {
            Ok(ImageOutcome::MissingAnnotation) => {
                skipped += 1;
            }
            Ok(ImageOutcome::Processed(image_rows)) => {
                debug!(
                    "measured {} boxes on '{}'",
                    image_rows.len(),
                    image_path.display()
                );
                processed += 1;
                rows.extend(image_rows);
            }
            Err((stage, error)) => match config.on_error {
                FailurePolicy::Abort => {
                    return Err(error.context(format!(
                        "{} failure on image '{}'",
                        stage,
                        image_path.display()
                    )));
                }
                FailurePolicy::Continue => {
                    warn!(
                        "{} failure on image '{}', skip: {:#}",
                        stage,
                        image_path.display(),
                        error
                    );
                    failures.push(Failure {
                        image: image_path,
                        stage,
                        error,
                    });
                }
            },
        }
    }

    write_report(&config.report_file, &rows)?;

    info!(
        "{} images processed, {} skipped without annotation",
        processed, skipped
    );
    if !failures.is_empty() {
        warn!("{} images failed", failures.len());
        failures.iter().for_each(|failure| {
            warn!(
                "- '{}' ({}): {:#}",
                failure.image.display(),
                failure.stage,
                failure.error
            );
        });
    }
    info!(
        "report has been saved to '{}'",
        config.report_file.display()
    );

    Ok(BatchSummary {
        rows,
        processed,
        skipped,
        failures,
        report_file: config.report_file.clone(),
    })
}

/// List regular files with the image extension, in directory order.
pub fn discover_images(config: &Config) -> Result<Vec<PathBuf>> {
    let dir = &config.image_dir;
    let extension = OsStr::new(&config.image_extension);

    let entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("failed to read image directory '{}'", dir.display()))?
        .try_collect()?;
    let images = entries
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension() == Some(extension))
        .collect();

    Ok(images)
}

/// The annotation file expected for an image: same stem, annotation
/// extension, in the annotation directory. `None` if the path has no file
/// name.
pub fn annotation_path(config: &Config, image_path: &Path) -> Option<PathBuf> {
    let mut file_name = image_path.file_stem()?.to_os_string();
    file_name.push(".");
    file_name.push(&config.annotation_extension);
    Some(config.annotation_dir.join(file_name))
}

fn process_image(
    config: &Config,
    annotator: &Annotator,
    image_path: &Path,
) -> Result<ImageOutcome, (FailureStage, Error)> {
    let annotation_path = match annotation_path(config, image_path) {
        Some(path) if path.is_file() => path,
        _ => {
            warn!(
                "annotation file for image '{}' is missing, skip",
                image_path.display()
            );
            return Ok(ImageOutcome::MissingAnnotation);
        }
    };

    let record =
        AnnotationRecord::load(&annotation_path).map_err(|err| (FailureStage::Parse, err))?;
    let image_id = image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !record.image.is_empty() && record.image != image_id {
        debug!(
            "'{}' names image '{}', measured as '{}'",
            annotation_path.display(),
            record.image,
            image_id
        );
    }

    let rows: Vec<_> = record
        .boxes
        .iter()
        .map(|bbox| MeasurementRow::new(&image_id, bbox, config.pixel_to_mm))
        .collect();

    let mut image = load_image(image_path).map_err(|err| (FailureStage::Decode, err))?;
    annotator.draw(&mut image, &record.boxes);
    annotator
        .save(&image, image_path)
        .map_err(|err| (FailureStage::Write, err))?;

    Ok(ImageOutcome::Processed(rows))
}
