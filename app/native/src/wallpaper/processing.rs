//! Image processing for wallpapers.
//!
//! Provides the scale-to-cover fit used for every screen: the source is scaled
//! until it covers the target rectangle on both axes, then cropped around the
//! center to the exact target size. Aspect ratio is preserved and no
//! letterboxing is ever introduced.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbImage};

use super::ProcessingError;
use crate::config::ConfigError;
use crate::constants::MAX_IMAGE_PIXELS;

/// Resampling filter used when scaling source images.
const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Scaled size and crop window for one scale-to-cover fit.
///
/// All values are computed with exact integer arithmetic on the rational
/// scale factor. Scaled sizes are rounded up so that the scaled image is never
/// a pixel short of the target, and crop offsets are rounded up from the
/// unrounded scaled size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverPlan {
    /// Width the source is resized to.
    pub scaled_width: u32,
    /// Height the source is resized to.
    pub scaled_height: u32,
    /// Left edge of the crop window in the resized image.
    pub offset_x: u32,
    /// Top edge of the crop window in the resized image.
    pub offset_y: u32,
    /// Target width.
    pub width: u32,
    /// Target height.
    pub height: u32,
}

impl CoverPlan {
    /// Computes the plan for fitting a `source` sized image into `target`.
    ///
    /// The scale factor is `max(target_w / source_w, target_h / source_h)`.
    /// The binding axis scales to the target exactly; the other axis scales to
    /// `ceil(source * ratio)` and is cropped by `ceil((scaled - target) / 2)`
    /// on its leading side.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidGeometry` if either size has a zero
    /// dimension or the scaled image would not fit in `u32` dimensions or
    /// exceed [`MAX_IMAGE_PIXELS`].
    pub fn compute(source: (u32, u32), target: (u32, u32)) -> Result<Self, ConfigError> {
        let (source_width, source_height) = source;
        let (width, height) = target;

        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidGeometry(format!(
                "cannot fit an image into a {width}x{height} rectangle"
            )));
        }
        if source_width == 0 || source_height == 0 {
            return Err(ConfigError::InvalidGeometry(format!(
                "cannot scale an empty {source_width}x{source_height} image"
            )));
        }

        let (iw, ih) = (u128::from(source_width), u128::from(source_height));
        let (tw, th) = (u128::from(width), u128::from(height));

        // Compare tw/iw against th/ih without dividing.
        let (scaled_width, scaled_height, offset_x, offset_y) = if tw * ih >= th * iw {
            // Width binds: ratio = tw / iw, exact scaled height = ih * tw / iw.
            let scaled_height = ceil_div(ih * tw, iw);
            let offset_y = ceil_div(ih * tw - th * iw, 2 * iw);
            (tw, scaled_height, 0, offset_y)
        } else {
            // Height binds: ratio = th / ih, exact scaled width = iw * th / ih.
            let scaled_width = ceil_div(iw * th, ih);
            let offset_x = ceil_div(iw * th - tw * ih, 2 * ih);
            (scaled_width, th, offset_x, 0)
        };

        let to_u32 = |value: u128| {
            u32::try_from(value).map_err(|_| {
                ConfigError::InvalidGeometry(format!(
                    "scaling a {source_width}x{source_height} image to cover {width}x{height} \
                     exceeds the maximum image size"
                ))
            })
        };

        if scaled_width * scaled_height > u128::from(MAX_IMAGE_PIXELS) {
            return Err(ConfigError::InvalidGeometry(format!(
                "scaling a {source_width}x{source_height} image to cover {width}x{height} \
                 needs {scaled_width}x{scaled_height} pixels, which exceeds the limit of \
                 {MAX_IMAGE_PIXELS} pixels"
            )));
        }

        Ok(Self {
            scaled_width: to_u32(scaled_width)?,
            scaled_height: to_u32(scaled_height)?,
            offset_x: to_u32(offset_x)?,
            offset_y: to_u32(offset_y)?,
            width,
            height,
        })
    }

    /// Returns true if the plan needs no resize.
    #[must_use]
    pub const fn keeps_scale(&self, source: (u32, u32)) -> bool {
        self.scaled_width == source.0 && self.scaled_height == source.1
    }

    /// Returns true if the plan crops nothing.
    #[must_use]
    pub const fn is_uncropped(&self) -> bool {
        self.offset_x == 0
            && self.offset_y == 0
            && self.scaled_width == self.width
            && self.scaled_height == self.height
    }
}

/// Ceiling of `numerator / denominator` for non-negative integers.
const fn ceil_div(numerator: u128, denominator: u128) -> u128 {
    numerator.div_ceil(denominator)
}

/// Scales `img` to cover `width` x `height` and crops it around the center.
///
/// The result is exactly `width` x `height` pixels. An image that already has
/// the target size is returned unchanged.
///
/// # Errors
///
/// Returns `ConfigError::InvalidGeometry` for a zero-sized target or source,
/// or when the scaled image would exceed [`MAX_IMAGE_PIXELS`].
pub fn fit_cover(img: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage, ConfigError> {
    let source = img.dimensions();
    let plan = CoverPlan::compute(source, (width, height))?;

    tracing::trace!(
        source_width = source.0,
        source_height = source.1,
        scaled_width = plan.scaled_width,
        scaled_height = plan.scaled_height,
        offset_x = plan.offset_x,
        offset_y = plan.offset_y,
        "fitting image"
    );

    let resized = if plan.keeps_scale(source) {
        img.clone()
    } else {
        img.resize_exact(plan.scaled_width, plan.scaled_height, RESIZE_FILTER)
    };

    if plan.is_uncropped() {
        return Ok(resized);
    }

    Ok(resized.crop_imm(plan.offset_x, plan.offset_y, plan.width, plan.height))
}

/// Decodes an image file.
///
/// The format is detected from the file contents, falling back to the
/// extension, so mislabeled files still load.
///
/// # Errors
///
/// Returns `ProcessingError::ImageRead` if the file cannot be opened or decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage, ProcessingError> {
    let read_error = |source| ProcessingError::ImageRead { path: path.to_path_buf(), source };

    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| read_error(image::ImageError::IoError(err)))?
        .decode()
        .map_err(read_error)
}

/// Returns the output format for `path`, if its extension names a format
/// that can be written.
#[must_use]
pub fn output_format(path: &Path) -> Option<ImageFormat> {
    ImageFormat::from_path(path).ok().filter(ImageFormat::writing_enabled)
}

/// Encodes `canvas` to `path` in the format selected by the extension.
///
/// # Errors
///
/// Returns `ProcessingError::UnsupportedFormat` if the extension does not name
/// a writable format and `ProcessingError::ImageSave` if encoding or writing
/// fails.
pub fn save_image(canvas: &RgbImage, path: &Path) -> Result<(), ProcessingError> {
    let format =
        output_format(path).ok_or_else(|| ProcessingError::UnsupportedFormat(path.to_path_buf()))?;

    canvas.save_with_format(path, format).map_err(|source| ProcessingError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use image::{Rgb, Rgba, RgbaImage};

    use super::*;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_plan_wide_source_into_square() {
        // ratio = max(50/100, 50/50) = 1
        let plan = CoverPlan::compute((100, 50), (50, 50)).unwrap();
        assert_eq!((plan.scaled_width, plan.scaled_height), (100, 50));
        assert_eq!((plan.offset_x, plan.offset_y), (25, 0));
    }

    #[test]
    fn test_plan_tall_source_upscaled() {
        // ratio = max(100/40, 100/60) = 2.5
        let plan = CoverPlan::compute((40, 60), (100, 100)).unwrap();
        assert_eq!((plan.scaled_width, plan.scaled_height), (100, 150));
        assert_eq!((plan.offset_x, plan.offset_y), (0, 25));
    }

    #[test]
    fn test_plan_matching_aspect_has_no_crop() {
        let plan = CoverPlan::compute((3840, 2160), (1920, 1080)).unwrap();
        assert_eq!((plan.scaled_width, plan.scaled_height), (1920, 1080));
        assert_eq!((plan.offset_x, plan.offset_y), (0, 0));
        assert!(plan.is_uncropped());
    }

    #[test]
    fn test_plan_rounds_scaled_size_up() {
        // ratio = 1000/3000, exact height = 1001/3 = 333.67 -> 334
        let plan = CoverPlan::compute((3000, 1001), (1000, 333)).unwrap();
        assert_eq!(plan.scaled_width, 1000);
        assert_eq!(plan.scaled_height, 334);
        // (333.67 - 333) / 2 = 0.33 -> 1
        assert_eq!(plan.offset_y, 1);
    }

    #[test]
    fn test_plan_repeating_ratio_is_exact() {
        // ratio = 2000/3000 must give exactly 2000, not 2001 from rounding noise
        let plan = CoverPlan::compute((3000, 1500), (2000, 900)).unwrap();
        assert_eq!((plan.scaled_width, plan.scaled_height), (2000, 1000));
        assert_eq!(plan.offset_y, 50);
    }

    #[test]
    fn test_plan_odd_excess_rounds_offset_up() {
        // ratio = 1, excess width 5 -> offset ceil(2.5) = 3
        let plan = CoverPlan::compute((15, 10), (10, 10)).unwrap();
        assert_eq!(plan.offset_x, 3);
        assert!(plan.offset_x + plan.width <= plan.scaled_width);
    }

    #[test]
    fn test_plan_crop_window_stays_inside() {
        for (source, target) in [
            ((1, 1), (1920, 1080)),
            ((7, 3), (5, 11)),
            ((4000, 3), (17, 19)),
            ((999, 1000), (1000, 999)),
        ] {
            let plan = CoverPlan::compute(source, target).unwrap();
            assert!(plan.scaled_width >= plan.width, "{source:?} -> {target:?}");
            assert!(plan.scaled_height >= plan.height, "{source:?} -> {target:?}");
            assert!(plan.offset_x + plan.width <= plan.scaled_width, "{source:?} -> {target:?}");
            assert!(plan.offset_y + plan.height <= plan.scaled_height, "{source:?} -> {target:?}");
        }
    }

    #[test]
    fn test_plan_rejects_scaled_size_past_pixel_limit() {
        // A 1x40000 strip covering 40000x1 scales to 40000x1600000000.
        let err = CoverPlan::compute((1, 40_000), (40_000, 1)).unwrap_err();
        match err {
            ConfigError::InvalidGeometry(msg) => assert!(msg.contains("exceeds the limit")),
            other => panic!("expected InvalidGeometry, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_rejects_empty_target() {
        assert!(matches!(
            CoverPlan::compute((100, 100), (0, 10)),
            Err(ConfigError::InvalidGeometry(_))
        ));
        assert!(matches!(
            CoverPlan::compute((100, 100), (10, 0)),
            Err(ConfigError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_plan_rejects_empty_source() {
        assert!(CoverPlan::compute((0, 100), (10, 10)).is_err());
    }

    #[test]
    fn test_fit_cover_output_size() {
        let img = solid(100, 50, [10, 20, 30]);
        let fitted = fit_cover(&img, 50, 50).unwrap();
        assert_eq!(fitted.dimensions(), (50, 50));

        let img = solid(40, 60, [10, 20, 30]);
        let fitted = fit_cover(&img, 100, 100).unwrap();
        assert_eq!(fitted.dimensions(), (100, 100));
    }

    #[test]
    fn test_fit_cover_crops_around_center() {
        // 100x50: left quarter red, middle half green, right quarter blue.
        let img = RgbImage::from_fn(100, 50, |x, _| match x {
            0..25 => Rgb([255, 0, 0]),
            25..75 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });
        let fitted = fit_cover(&DynamicImage::ImageRgb8(img), 50, 50).unwrap().to_rgb8();

        // Only the green middle survives the crop.
        assert_eq!(fitted.get_pixel(0, 0), &Rgb([0, 255, 0]));
        assert_eq!(fitted.get_pixel(49, 49), &Rgb([0, 255, 0]));
    }

    #[test]
    fn test_fit_cover_same_size_is_pixel_exact() {
        let img = RgbImage::from_fn(16, 9, |x, y| Rgb([(x * 13) as u8, (y * 29) as u8, 7]));
        let original = DynamicImage::ImageRgb8(img);

        let fitted = fit_cover(&original, 16, 9).unwrap();
        assert_eq!(fitted, original);
    }

    #[test]
    fn test_fit_cover_matching_aspect_scales_without_crop() {
        let img = solid(64, 36, [200, 100, 50]);
        let fitted = fit_cover(&img, 32, 18).unwrap().to_rgb8();
        assert_eq!(fitted.dimensions(), (32, 18));
        // A uniform image stays uniform through a Lanczos downscale.
        assert_eq!(fitted.get_pixel(16, 9), &Rgb([200, 100, 50]));
    }

    #[test]
    fn test_fit_cover_keeps_alpha_channel_type() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(20, 10, Rgba([1, 2, 3, 128])));
        let fitted = fit_cover(&img, 10, 10).unwrap();
        assert_eq!(fitted.dimensions(), (10, 10));
        assert!(fitted.color().has_alpha());
    }

    #[test]
    fn test_fit_cover_rejects_zero_target() {
        let img = solid(10, 10, [0, 0, 0]);
        assert!(fit_cover(&img, 0, 10).is_err());
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(output_format(Path::new("out.png")), Some(ImageFormat::Png));
        assert_eq!(output_format(Path::new("out.JPG")), Some(ImageFormat::Jpeg));
        assert_eq!(output_format(Path::new("out.jpeg")), Some(ImageFormat::Jpeg));
        assert_eq!(output_format(Path::new("out.webp")), Some(ImageFormat::WebP));
        assert_eq!(output_format(Path::new("out.bmp")), Some(ImageFormat::Bmp));
        assert_eq!(output_format(Path::new("out.txt")), None);
        assert_eq!(output_format(Path::new("out")), None);
    }

    #[test]
    fn test_save_and_load_round_trip_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.png");
        let canvas = RgbImage::from_pixel(8, 4, Rgb([9, 8, 7]));

        save_image(&canvas, &path).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded.to_rgb8(), canvas);
    }

    #[test]
    fn test_save_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.txt");
        let canvas = RgbImage::new(2, 2);

        let err = save_image(&canvas, &path).unwrap_err();
        assert!(matches!(err, ProcessingError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_image() {
        let err = load_image(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(matches!(err, ProcessingError::ImageRead { .. }));
    }

    #[test]
    fn test_load_detects_format_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("real.png");
        RgbImage::from_pixel(3, 3, Rgb([1, 2, 3])).save(&png_path).unwrap();

        let mislabeled = dir.path().join("actually-png.jpg");
        std::fs::copy(&png_path, &mislabeled).unwrap();

        let loaded = load_image(&mislabeled).unwrap();
        assert_eq!(loaded.dimensions(), (3, 3));
    }
}
