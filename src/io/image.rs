//! Rasterization and PNG output of generated identicons

use crate::io::configuration::{BACKGROUND, CANVAS_SIZE, OUTPUT_EXTENSION};
use crate::io::error::{IdenticonError, Result, invalid_parameter};
use crate::pipeline::{self, Color, Rect};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

/// Paint `pixel_map` onto a blank 250x250 canvas
///
/// Rectangles are filled in order with the opaque `color`; everything else
/// stays transparent. Pixels outside the canvas are ignored.
pub fn draw_image(color: Color, pixel_map: &[Rect]) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgba(BACKGROUND));
    let fill = color.to_rgba();

    for rect in pixel_map {
        let max_x = rect.bottom_right.x.min(CANVAS_SIZE);
        let max_y = rect.bottom_right.y.min(CANVAS_SIZE);
        for y in rect.top_left.y..max_y {
            for x in rect.top_left.x..max_x {
                if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                    *pixel = fill;
                }
            }
        }
    }

    img
}

/// Encode the canvas as PNG bytes in memory
///
/// # Errors
///
/// Returns [`IdenticonError::ImageEncode`] if the PNG encoder fails
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| IdenticonError::ImageEncode { source: e })?;
    Ok(bytes)
}

/// Write the canvas to `path` as a PNG, replacing any existing file
///
/// # Errors
///
/// Returns an error if:
/// - The canvas cannot be encoded
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(img)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IdenticonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, bytes).map_err(|e| IdenticonError::FileSystem {
        path: path.to_path_buf(),
        operation: "write image",
        source: e,
    })
}

/// Output location for `input`: `<output_dir>/<input>.png`
///
/// Inputs may name subdirectories but must stay inside `output_dir`.
///
/// # Errors
///
/// Returns [`IdenticonError::InvalidParameter`] if `input` is an absolute path
/// or contains a `..` component
pub fn output_path(output_dir: &Path, input: &str) -> Result<PathBuf> {
    let escapes = Path::new(input).components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(invalid_parameter(
            "input",
            &input,
            &"must not be absolute or contain '..'",
        ));
    }

    Ok(output_dir.join(format!("{input}.{OUTPUT_EXTENSION}")))
}

/// Generate the identicon for `input` and write it into `output_dir`
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if `input` would escape `output_dir`, a pipeline
/// invariant is violated, or the image cannot be written
pub fn render_to_file(input: &str, output_dir: &Path) -> Result<PathBuf> {
    let path = output_path(output_dir, input)?;
    let identicon = pipeline::generate(input)?;
    let img = draw_image(identicon.color, &identicon.pixel_map);

    save_image(&img, &path)?;
    tracing::info!(
        input,
        path = %path.display(),
        cells = identicon.pixel_map.len(),
        "wrote identicon"
    );

    Ok(path)
}
