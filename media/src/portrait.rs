//! Portrait decoding for the participant grid.
//!
//! Every roster tile shows the same picture twice: a small round avatar and a
//! blurred fill behind it. Both are produced here from one image file.

use crate::error::{MediaError, Result};
use crate::video::{RgbFrame, mat_to_rgb};
use opencv::core::{Mat, Point2f, Size};
use opencv::imgcodecs::{IMREAD_COLOR, imread};
use opencv::imgproc::{INTER_AREA, gaussian_blur_def, get_rect_sub_pix_def, resize};
use opencv::prelude::*;
use std::path::Path;
use tracing::debug;

const BACKDROP_SIGMA: f64 = 8.0;

/// Output sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortraitSize {
    pub avatar: i32,
    pub backdrop: (i32, i32),
}

impl Default for PortraitSize {
    fn default() -> Self {
        Self {
            avatar: 96,
            backdrop: (240, 160),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Portrait {
    pub avatar: RgbFrame,
    pub backdrop: RgbFrame,
}

/// Reads an image file and derives the avatar and the blurred backdrop.
pub fn load_portrait(path: &Path, size: PortraitSize) -> Result<Portrait> {
    let filename = path
        .to_str()
        .ok_or_else(|| MediaError::Image(format!("Non UTF-8 path: {}", path.display())))?;

    let image = imread(filename, IMREAD_COLOR)?;
    if image.empty() {
        return Err(MediaError::Image(format!(
            "Could not decode {}",
            path.display()
        )));
    }

    let avatar = cover(&image, size.avatar, size.avatar)?;

    let (width, height) = size.backdrop;
    let fill = cover(&image, width, height)?;
    let mut blurred = Mat::default();
    gaussian_blur_def(&fill, &mut blurred, Size::new(0, 0), BACKDROP_SIGMA)?;

    debug!(
        "[PORTRAIT] Loaded {} ({}x{})",
        path.display(),
        image.cols(),
        image.rows()
    );

    Ok(Portrait {
        avatar: mat_to_rgb(&avatar)?,
        backdrop: mat_to_rgb(&blurred)?,
    })
}

/// Scales and center-crops `image` so it fills `width` x `height`.
fn cover(image: &Mat, width: i32, height: i32) -> Result<Mat> {
    if width <= 0 || height <= 0 {
        return Err(MediaError::Image(format!(
            "Invalid target size {}x{}",
            width, height
        )));
    }

    let (cols, rows) = (image.cols() as f32, image.rows() as f32);
    let target_ratio = width as f32 / height as f32;

    let (crop_w, crop_h) = if cols / rows > target_ratio {
        (rows * target_ratio, rows)
    } else {
        (cols, cols / target_ratio)
    };

    let mut cropped = Mat::default();
    get_rect_sub_pix_def(
        image,
        Size::new(crop_w.round().max(1.0) as i32, crop_h.round().max(1.0) as i32),
        Point2f::new(cols / 2.0, rows / 2.0),
        &mut cropped,
    )?;

    let mut scaled = Mat::default();
    resize(
        &cropped,
        &mut scaled,
        Size::new(width, height),
        0.0,
        0.0,
        INTER_AREA,
    )?;
    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{CV_8UC3, Scalar};
    use opencv::imgcodecs::imwrite_def;
    use tempfile::TempDir;

    fn write_image(dir: &TempDir, name: &str, rows: i32, cols: i32) -> std::path::PathBuf {
        let mat = Mat::new_rows_cols_with_default(
            rows,
            cols,
            CV_8UC3,
            Scalar::new(40.0, 80.0, 120.0, 0.0),
        )
        .unwrap();
        let path = dir.path().join(name);
        assert!(imwrite_def(path.to_str().unwrap(), &mat).unwrap());
        path
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_portrait(&dir.path().join("nope.jpg"), PortraitSize::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(load_portrait(&path, PortraitSize::default()).is_err());
    }

    #[test]
    fn test_portrait_is_resized_to_requested_sizes() {
        let dir = TempDir::new().unwrap();
        let path = write_image(&dir, "wide.png", 60, 200);
        let size = PortraitSize {
            avatar: 32,
            backdrop: (48, 24),
        };

        let portrait = load_portrait(&path, size).unwrap();

        assert_eq!((portrait.avatar.width, portrait.avatar.height), (32, 32));
        assert_eq!(
            (portrait.backdrop.width, portrait.backdrop.height),
            (48, 24)
        );
    }

    #[test]
    fn test_uniform_image_keeps_its_colour() {
        let dir = TempDir::new().unwrap();
        let path = write_image(&dir, "flat.png", 50, 50);

        let portrait = load_portrait(&path, PortraitSize::default()).unwrap();

        let centre = (portrait.avatar.height / 2 * portrait.avatar.width
            + portrait.avatar.width / 2)
            * 3;
        let pixel = &portrait.avatar.pixels[centre..centre + 3];
        assert_eq!(pixel, [120, 80, 40]);
    }

    #[test]
    fn test_zero_target_size_is_rejected() {
        let mat = Mat::new_rows_cols_with_default(4, 4, CV_8UC3, Scalar::all(0.0)).unwrap();
        assert!(cover(&mat, 0, 10).is_err());
    }
}
