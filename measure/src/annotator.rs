//! Overlay box and circle markers on images.

use crate::{
    annotation::BoundingBox,
    common::*,
    config::{Config, DrawConfig},
};
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut},
    rect::Rect as PixelRect,
};

/// Decode an image file into an RGB raster.
pub fn load_image<P>(path: P) -> Result<RgbImage>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("failed to decode image '{}'", path.display()))?;
    Ok(image.into_rgb8())
}

/// Draws markers for every box and writes the result into the output
/// directory.
#[derive(Debug, Clone)]
pub struct Annotator {
    style: DrawConfig,
    output_dir: PathBuf,
}

impl Annotator {
    pub fn new(config: &Config) -> Self {
        Self {
            style: config.draw.clone(),
            output_dir: config.output_dir.clone(),
        }
    }

    /// Where the annotated copy of `image_path` is written.
    pub fn output_path(&self, image_path: &Path) -> Result<PathBuf> {
        let file_name = image_path
            .file_name()
            .ok_or_else(|| format_err!("'{}' has no file name", image_path.display()))?;
        Ok(self.output_dir.join(file_name))
    }

    /// Draw the rectangle and the width-sized circle of each box.
    pub fn draw(&self, image: &mut RgbImage, boxes: &[BoundingBox]) {
        boxes.iter().for_each(|bbox| self.draw_one(image, bbox));
    }

    fn draw_one(&self, image: &mut RgbImage, bbox: &BoundingBox) {
        let DrawConfig {
            rect_color,
            rect_thickness,
            circle_color,
            circle_thickness,
        } = self.style;

        match bbox.rect.to_tlbr().try_cast::<i64>() {
            Some(rect) => draw_thick_rect(image, &rect, Rgb(rect_color), rect_thickness.get()),
            None => warn!("box '{}' lies outside the drawable range", bbox.class),
        }

        let circle = Circle::from_rect_width(&bbox.rect).try_cast::<i64>();
        match circle {
            Some(circle) if circle.radius() > 0 => {
                let drawn =
                    draw_thick_circle(image, &circle, Rgb(circle_color), circle_thickness.get());
                if !drawn {
                    warn!("circle of box '{}' is too large to draw", bbox.class);
                }
            }
            Some(_) => debug!("skip zero-radius circle for box '{}'", bbox.class),
            None => warn!("circle of box '{}' lies outside the drawable range", bbox.class),
        }
    }

    /// Write the image next to the other annotated images, replacing any
    /// file with the same name.
    pub fn save(&self, image: &RgbImage, image_path: &Path) -> Result<PathBuf> {
        let output_path = self.output_path(image_path)?;
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory '{}'",
                self.output_dir.display()
            )
        })?;
        image
            .save(&output_path)
            .with_context(|| format!("failed to write image '{}'", output_path.display()))?;
        Ok(output_path)
    }
}

/// Circles are drawn point by point along the whole ring, so larger ones
/// are skipped.
pub const MAX_DRAWN_RADIUS: i64 = 1 << 16;

/// Corners are inclusive. Extra strokes grow outward.
///
/// Edges are clamped to just outside the image first, so strokes that
/// would not be visible stay off the raster and sizes fit in `i32`.
fn draw_thick_rect(image: &mut RgbImage, rect: &TLBR<i64>, color: Rgb<u8>, thickness: usize) {
    let (width, height) = image.dimensions();
    let margin = thickness as i64;
    let clamp = |value: i64, size: u32| value.clamp(-margin, size as i64 + margin);

    let [t, l, b, r] = rect.tlbr();
    let (t, b) = (clamp(t, height), clamp(b, height));
    let (l, r) = (clamp(l, width), clamp(r, width));

    (0..margin).for_each(|offset| {
        let stroke = PixelRect::at((l - offset) as i32, (t - offset) as i32)
            .of_size((r - l + 1 + 2 * offset) as u32, (b - t + 1 + 2 * offset) as u32);
        draw_hollow_rect_mut(image, stroke, color);
    });
}

/// Strokes straddle the radius. With an even thickness the extra stroke
/// goes outward, so thickness 2 draws radii `r` and `r + 1`.
///
/// Returns `false` without drawing if the outer radius exceeds
/// [MAX_DRAWN_RADIUS] or the circle does not fit in `i32` pixel coordinates.
fn draw_thick_circle(
    image: &mut RgbImage,
    circle: &Circle<i64>,
    color: Rgb<u8>,
    thickness: usize,
) -> bool {
    let (cx, cy) = (circle.cx(), circle.cy());
    let thickness = thickness as i64;
    let inner = circle.radius() - (thickness - 1) / 2;
    let outer = inner + thickness - 1;

    let fits = outer <= MAX_DRAWN_RADIUS
        && [
            cx.saturating_sub(outer),
            cx.saturating_add(outer),
            cy.saturating_sub(outer),
            cy.saturating_add(outer),
        ]
        .iter()
        .all(|&value| i32::try_from(value).is_ok());
    if !fits {
        return false;
    }

    let (width, height) = image.dimensions();
    let visible = cx + outer >= 0
        && cy + outer >= 0
        && cx - outer < width as i64
        && cy - outer < height as i64;
    if visible {
        (inner..=outer)
            .filter(|&radius| radius > 0)
            .for_each(|radius| {
                draw_hollow_circle_mut(image, (cx as i32, cy as i32), radius as i32, color)
            });
    }
    true
}
