//! Physical measurements derived from bounding boxes.

use crate::{
    annotation::BoundingBox,
    common::*,
    unit::{convert_pixels_to_mm, Pixel, PixelToMm},
};
use std::cmp::Ordering;

/// The number of decimal places kept in the report.
pub const DECIMAL_PLACES: i32 = 2;

/// One line of the report, in millimetres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRow {
    #[serde(rename = "ImageID")]
    pub image_id: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "x_in_mm")]
    pub x_mm: R64,
    #[serde(rename = "y_in_mm")]
    pub y_mm: R64,
    #[serde(rename = "width_in_mm")]
    pub width_mm: R64,
    #[serde(rename = "height_in_mm")]
    pub height_mm: R64,
    #[serde(rename = "Diameter_in_mm")]
    pub diameter_mm: R64,
    #[serde(rename = "Radius_in_mm")]
    pub radius_mm: R64,
    #[serde(rename = "Center_Point")]
    pub center_point: CenterPoint,
}

impl MeasurementRow {
    /// Measure a box assumed to enclose a circular feature.
    ///
    /// The circle is centered in the box and its diameter is the box width.
    pub fn new(image_id: &str, bbox: &BoundingBox, ratio: PixelToMm) -> Self {
        let Label { rect, class } = bbox;
        let circle = Circle::from_rect_width(rect);

        let [x, y, width, height, cx, cy, diameter, radius] = convert_pixels_to_mm(
            [
                rect.l(),
                rect.t(),
                rect.w(),
                rect.h(),
                circle.cx(),
                circle.cy(),
                circle.diameter(),
                circle.radius(),
            ]
            .map(Pixel),
            ratio,
        )
        .map(|mm| round_decimals(mm.into_inner(), DECIMAL_PLACES));

        Self {
            image_id: image_id.to_string(),
            label: class.clone(),
            x_mm: x,
            y_mm: y,
            width_mm: width,
            height_mm: height,
            diameter_mm: diameter,
            radius_mm: radius,
            center_point: CenterPoint { x: cx, y: cy },
        }
    }
}

/// A point rendered as the literal text `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CenterPoint {
    pub x: R64,
    pub y: R64,
}

impl fmt::Display for CenterPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            format_decimal(self.x.raw()),
            format_decimal(self.y.raw())
        )
    }
}

impl FromStr for CenterPoint {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let inner = text
            .trim()
            .strip_prefix('(')
            .and_then(|text| text.strip_suffix(')'))
            .ok_or_else(|| format_err!("expect '(x, y)', but get '{}'", text))?;
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| format_err!("expect '(x, y)', but get '{}'", text))?;
        let parse = |value: &str| -> Result<R64> {
            let value: f64 = value.trim().parse()?;
            R64::try_new(value).ok_or_else(|| format_err!("non-finite coordinate '{}'", value))
        };

        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

impl Serialize for CenterPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CenterPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(|err| {
            D::Error::custom(format!("failed to parse center point '{}': {:?}", text, err))
        })
    }
}

/// Round to the given number of decimal places.
///
/// The exact binary value is rounded, ties to even. `3.25 * 0.26` is stored
/// just below `0.845` and rounds to `0.84`, while `0.125` is an exact tie
/// and rounds to `0.12`.
pub fn round_decimals(value: R64, places: i32) -> R64 {
    let value = value.raw();
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    // exact rounding error of the product
    let residual = value.mul_add(scale, -scaled);
    let floor = scaled.floor();

    let above_half = (scaled - (floor + 0.5)) + residual;
    let rounded = match above_half.partial_cmp(&0.0) {
        Some(Ordering::Less) => floor,
        Some(Ordering::Greater) => floor + 1.0,
        _ if floor % 2.0 == 0.0 => floor,
        _ => floor + 1.0,
    };
    r64(rounded / scale)
}

/// Shortest text that reads back to `value`, with at least one fractional
/// digit for integral values.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
