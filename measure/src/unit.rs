//! Pixel and millimetre quantities, and the ratio between them.

use crate::common::*;

unit_wrapper!(pub Pixel);
unit_wrapper!(pub Millimeter);

/// The number of millimetres covered by one pixel.
///
/// The ratio is always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "R64", into = "R64")]
pub struct PixelToMm(R64);

impl PixelToMm {
    pub fn try_new(ratio: f64) -> Result<Self> {
        let ratio = R64::try_new(ratio)
            .ok_or_else(|| format_err!("pixel-to-mm ratio must be finite, but get {}", ratio))?;
        Self::try_from(ratio)
    }

    pub fn new(ratio: f64) -> Self {
        Self::try_new(ratio).unwrap()
    }

    pub fn get(&self) -> R64 {
        self.0
    }

    pub fn convert(&self, value: Pixel<R64>) -> Millimeter<R64> {
        Millimeter::from((value * self.0).into_inner())
    }
}

impl Default for PixelToMm {
    fn default() -> Self {
        Self(r64(0.26))
    }
}

impl TryFrom<R64> for PixelToMm {
    type Error = Error;

    fn try_from(ratio: R64) -> Result<Self, Self::Error> {
        ensure!(
            ratio > r64(0.0),
            "pixel-to-mm ratio must be positive, but get {}",
            ratio
        );
        Ok(Self(ratio))
    }
}

impl From<PixelToMm> for R64 {
    fn from(ratio: PixelToMm) -> Self {
        ratio.0
    }
}

impl fmt::Display for PixelToMm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm/px", self.0)
    }
}

/// Scale pixel values into millimetres, preserving order and count.
///
/// No rounding is applied.
pub fn convert_pixels_to_mm<const N: usize>(
    values: [Pixel<R64>; N],
    ratio: PixelToMm,
) -> [Millimeter<R64>; N] {
    values.map(|value| ratio.convert(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn convert_is_elementwise_product() {
        let ratio = PixelToMm::new(0.26);
        let pixels = [0.0, 10.0, 20.0, 100.0, 50.0, 3.5];
        let mm = convert_pixels_to_mm(pixels.map(|value| Pixel(r64(value))), ratio);

        assert_eq!(mm.len(), pixels.len());
        pixels.iter().zip(&mm).for_each(|(&pixel, mm)| {
            assert_eq!(mm.0.raw(), pixel * 0.26);
        });
    }

    #[test]
    fn convert_empty_sequence() {
        let mm = convert_pixels_to_mm([], PixelToMm::default());
        assert!(mm.is_empty());
    }

    #[test]
    fn convert_keeps_order() {
        let ratio = PixelToMm::new(0.5);
        let [a, b] = convert_pixels_to_mm([Pixel(r64(7.0)), Pixel(r64(3.0))], ratio);
        assert_abs_diff_eq!(a.0.raw(), 3.5);
        assert_abs_diff_eq!(b.0.raw(), 1.5);
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        assert!(PixelToMm::try_new(0.0).is_err());
        assert!(PixelToMm::try_new(-0.26).is_err());
        assert!(PixelToMm::try_new(f64::NAN).is_err());
        assert!(PixelToMm::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn ratio_from_json() {
        let ratio: PixelToMm = serde_json::from_str("0.1").unwrap();
        assert_eq!(ratio.get().raw(), 0.1);
        assert!(serde_json::from_str::<PixelToMm>("-1.0").is_err());
    }
}
