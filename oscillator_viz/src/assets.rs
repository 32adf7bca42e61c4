//! Optional application assets

use std::path::{Path, PathBuf};
use thiserror::Error;
use winit::window::{BadIcon, Icon};

/// Returned when the window icon cannot be loaded.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("icon rejected by the windowing system: {0}")]
    BadIcon(#[from] BadIcon),
}

/// Square RGBA8 icon pixels
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub rgba: Vec<u8>,
    pub size: u32,
}

/// Read an image file and resize it to `size` × `size` RGBA pixels
pub fn load_icon_image(path: &Path, size: u32) -> Result<IconImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let resized = image::imageops::resize(
        &decoded.to_rgba8(),
        size,
        size,
        image::imageops::FilterType::Triangle,
    );

    Ok(IconImage {
        rgba: resized.into_raw(),
        size,
    })
}

/// Load the window icon; callers decide what to do when it is missing
pub fn load_window_icon(path: &Path, size: u32) -> Result<Icon, AssetError> {
    let image = load_icon_image(path, size)?;
    Ok(Icon::from_rgba(image.rgba, image.size, image.size)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("oscillator_viz_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_icon_is_an_io_error() {
        let path = temp_path("does_not_exist.png");
        match load_icon_image(&path, 50) {
            Err(AssetError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let path = temp_path("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let result = load_icon_image(&path, 50);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(AssetError::Decode { .. })), "{:?}", result);
    }

    #[test]
    fn png_is_resized_to_square_rgba() {
        let path = temp_path("logo.png");
        let source = image::RgbaImage::from_pixel(120, 80, image::Rgba([10, 200, 30, 255]));
        source.save(&path).unwrap();

        let result = load_icon_image(&path, 50);
        let _ = std::fs::remove_file(&path);

        let icon = result.unwrap();
        assert_eq!(icon.size, 50);
        assert_eq!(icon.rgba.len(), 50 * 50 * 4);
        for (got, want) in icon.rgba[..4].iter().zip([10u8, 200, 30, 255]) {
            assert!(got.abs_diff(want) <= 1, "pixel {:?}", &icon.rgba[..4]);
        }
    }
}
