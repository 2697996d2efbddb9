use crate::{common::*, unit::PixelToMm};

pub use draw::*;
pub use policy::*;

/// Run configuration, shared read-only by every stage of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Millimetres per pixel.
    #[serde(default)]
    pub pixel_to_mm: PixelToMm,
    /// The directory to scan for images.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    /// The directory holding one annotation file per image.
    #[serde(default = "default_annotation_dir")]
    pub annotation_dir: PathBuf,
    /// The directory receiving annotated images. Created if absent.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// The CSV report path.
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
    /// Image file extension, without the dot. Matched case-sensitively.
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
    /// Annotation file extension, without the dot.
    #[serde(default = "default_annotation_extension")]
    pub annotation_extension: String,
    /// What to do when one image fails.
    #[serde(default)]
    pub on_error: FailurePolicy,
    /// Overlay style.
    #[serde(default)]
    pub draw: DrawConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config: Self = json5::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        [
            ("image_extension", &self.image_extension),
            ("annotation_extension", &self.annotation_extension),
        ]
        .into_iter()
        .try_for_each(|(name, ext)| -> Result<()> {
            ensure!(!ext.is_empty(), "{} must not be empty", name);
            ensure!(
                !ext.starts_with('.'),
                "{} must not start with a dot, but get '{}'",
                name,
                ext
            );
            Ok(())
        })?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixel_to_mm: PixelToMm::default(),
            image_dir: default_image_dir(),
            annotation_dir: default_annotation_dir(),
            output_dir: default_output_dir(),
            report_file: default_report_file(),
            image_extension: default_image_extension(),
            annotation_extension: default_annotation_extension(),
            on_error: FailurePolicy::default(),
            draw: DrawConfig::default(),
        }
    }
}

mod policy {
    use super::*;

    /// Handling of per-image parse, decode and write failures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FailurePolicy {
        /// Stop the batch at the first failure. No report is written.
        Abort,
        /// Record the failure, skip the image and keep going.
        Continue,
    }

    impl Default for FailurePolicy {
        fn default() -> Self {
            Self::Abort
        }
    }
}

mod draw {
    use super::*;

    /// Colors are RGB triples. Thickness is in pixels.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct DrawConfig {
        pub rect_color: [u8; 3],
        pub rect_thickness: NonZeroUsize,
        pub circle_color: [u8; 3],
        pub circle_thickness: NonZeroUsize,
    }

    impl Default for DrawConfig {
        fn default() -> Self {
            let two = NonZeroUsize::new(2).unwrap();
            Self {
                rect_color: [0, 255, 0],
                rect_thickness: two,
                circle_color: [0, 0, 255],
                circle_thickness: two,
            }
        }
    }
}

fn default_image_dir() -> PathBuf {
    "DATASET".into()
}

fn default_annotation_dir() -> PathBuf {
    "Surface_Area_DB".into()
}

fn default_output_dir() -> PathBuf {
    "OUTPUT_DB".into()
}

fn default_report_file() -> PathBuf {
    "new_annotations_data.csv".into()
}

fn default_image_extension() -> String {
    "jpg".into()
}

fn default_annotation_extension() -> String {
    "json".into()
}
