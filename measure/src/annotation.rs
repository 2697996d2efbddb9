//! Bounding box annotation files.
//!
//! An annotation file is a JSON list of entries, each naming an image and
//! the labeled boxes on it.
//!
//! ```json
//! [
//!     {
//!         "image": "sample.jpg",
//!         "annotations": [
//!             {
//!                 "label": "pore",
//!                 "coordinates": { "x": 10, "y": 20, "width": 100, "height": 50 }
//!             }
//!         ]
//!     }
//! ]
//! ```

use crate::common::*;
use std::{fs::File, io::BufReader};

/// A labeled box in pixel coordinates.
pub type BoundingBox = Label<TLHW<R64>, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationEntry {
    pub image: String,
    pub annotations: Vec<AnnotationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationItem {
    pub label: String,
    pub coordinates: Coordinates,
}

/// Top-left corner and size of a box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: R64,
    pub y: R64,
    pub width: R64,
    pub height: R64,
}

impl AnnotationItem {
    pub fn to_bounding_box(&self) -> Result<BoundingBox> {
        let Coordinates {
            x,
            y,
            width,
            height,
        } = self.coordinates;
        let rect = TLHW::try_from_tlhw([y, x, height, width])
            .with_context(|| format!("invalid coordinates for label '{}'", self.label))?;
        Ok(Label::new(rect, self.label.clone()))
    }
}

/// The boxes annotated on one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub image: String,
    pub boxes: Vec<BoundingBox>,
}

impl AnnotationRecord {
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open annotation file '{}'", path.display()))?;
        let entries: Vec<AnnotationEntry> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse annotation file '{}'", path.display()))?;
        Self::from_entries(&entries)
            .with_context(|| format!("invalid annotation file '{}'", path.display()))
    }

    /// Flatten the entries of one file.
    ///
    /// The image name of the last entry is kept. Boxes keep their order of
    /// appearance across all entries.
    pub fn from_entries(entries: &[AnnotationEntry]) -> Result<Self> {
        let image = entries
            .last()
            .map(|entry| entry.image.clone())
            .unwrap_or_default();
        let boxes: Vec<_> = entries
            .iter()
            .flat_map(|entry| &entry.annotations)
            .map(AnnotationItem::to_bounding_box)
            .try_collect()?;

        Ok(Self { image, boxes })
    }
}
