// Presenter: decodes the current image into a fixed-size buffer plus a label,
// and turns that buffer into half-block terminal lines.

use crate::domain::Cursor;
use crate::error::{Result, SortError};
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::cell::RefCell;
use std::path::Path;

/// Side length of the square display buffer
pub const PREVIEW_SIDE: u32 = 512;
/// Label shown when there is no current image
pub const NO_FILE_LABEL: &str = "no file found";

const PLACEHOLDER_PIXEL: Rgb<u8> = Rgb([32, 32, 32]);

/// A display-ready image and its caption.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// `PREVIEW_SIDE` x `PREVIEW_SIDE`, RGB order
    pub pixels: RgbImage,
    pub label: String,
    /// `None` for the placeholder
    pub filename: Option<String>,
    /// Last half-block conversion and the square side it was made for
    halfblock: RefCell<Option<(u32, Vec<Line<'static>>)>>,
}

impl Rendered {
    pub fn placeholder() -> Self {
        Self {
            pixels: RgbImage::from_pixel(PREVIEW_SIDE, PREVIEW_SIDE, PLACEHOLDER_PIXEL),
            label: NO_FILE_LABEL.to_string(),
            filename: None,
            halfblock: RefCell::default(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.filename.is_none()
    }

    /// Half-block lines for a `side` x `side` square. The resample only runs
    /// again when `side` changes.
    pub fn halfblock_lines(&self, side: u32) -> Vec<Line<'static>> {
        let mut cache = self.halfblock.borrow_mut();
        if let Some((cached_side, lines)) = cache.as_ref() {
            if *cached_side == side {
                return lines.clone();
            }
        }

        let lines = image_to_halfblock_lines(&self.pixels, side, side);
        *cache = Some((side, lines.clone()));
        lines
    }
}

/// Loads an image from a file path
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => SortError::from_file_io(io, path),
        other => SortError::ImageDecode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })
}

/// `[position+1/total] directory/filename`
pub fn format_label(directory: &Path, filename: &str, position: usize, total: usize) -> String {
    format!(
        "[{}/{}] {}/{}",
        position + 1,
        total,
        directory.display(),
        filename
    )
}

/// Decodes `directory/filename` and squashes it to the square display size.
///
/// `position` is the cursor's raw position and `total` the candidate count;
/// both only feed the label. A `None` filename yields the placeholder.
pub fn render(
    directory: &Path,
    filename: Option<&str>,
    position: usize,
    total: usize,
) -> Result<Rendered> {
    let Some(filename) = filename else {
        return Ok(Rendered::placeholder());
    };

    let img = load_image(&directory.join(filename))?;

    // Triangle is deterministic and fast enough for camera-sized inputs
    let resized = img.resize_exact(PREVIEW_SIDE, PREVIEW_SIDE, FilterType::Triangle);

    Ok(Rendered {
        // Normalizes grey, alpha and 16-bit sources to 8-bit RGB
        pixels: resized.to_rgb8(),
        label: format_label(directory, filename, position, total),
        filename: Some(filename.to_string()),
        halfblock: RefCell::default(),
    })
}

/// Renders whatever the cursor currently points at.
pub fn render_current(cursor: &Cursor) -> Result<Rendered> {
    match (cursor.directory(), cursor.current()) {
        (Some(dir), Some(name)) => render(
            dir,
            Some(name),
            cursor.position().unwrap_or(0),
            cursor.len(),
        ),
        _ => Ok(Rendered::placeholder()),
    }
}

/// Largest square, in pixels, that fits a `cols` x `rows` cell area when each
/// cell shows two stacked pixels.
pub fn fit_square(cols: u16, rows: u16) -> u32 {
    (cols as u32).min(rows as u32 * 2)
}

/// Converts an image to styled lines using half-block characters for terminal display.
/// Uses the upper half block character (▀) with foreground color for the upper pixel
/// and background color for the lower pixel, effectively displaying 2 pixels per cell.
pub fn image_to_halfblock_lines(img: &RgbImage, width: u32, height: u32) -> Vec<Line<'static>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    // Round up to an even height so every row has a lower pixel
    let height = height + height % 2;
    let img = image::imageops::resize(img, width, height, FilterType::Triangle);

    let mut lines = Vec::with_capacity((height / 2) as usize);
    for y in (0..height).step_by(2) {
        let spans: Vec<Span<'static>> = (0..width)
            .map(|x| {
                let upper = img.get_pixel(x, y);
                let lower = img.get_pixel(x, y + 1);
                let style = Style::default()
                    .fg(Color::Rgb(upper[0], upper[1], upper[2]))
                    .bg(Color::Rgb(lower[0], lower[1], lower[2]));
                Span::styled("▀", style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        img.save(dir.join(name)).unwrap();
    }

    mod label_tests {
        use super::*;

        #[test]
        fn test_format_label() {
            let label = format_label(Path::new("/data/in"), "cat.jpg", 0, 12);
            assert_eq!(label, "[1/12] /data/in/cat.jpg");
        }

        #[test]
        fn test_format_label_uses_raw_position() {
            let label = format_label(Path::new("/d"), "z.png", 9, 3);
            assert_eq!(label, "[10/3] /d/z.png");
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_render_resizes_to_square() {
            let temp_dir = TempDir::new().unwrap();
            write_png(temp_dir.path(), "wide.png", 300, 100);

            let rendered = render(temp_dir.path(), Some("wide.png"), 1, 4).unwrap();

            assert_eq!(rendered.pixels.dimensions(), (PREVIEW_SIDE, PREVIEW_SIDE));
            assert_eq!(rendered.filename.as_deref(), Some("wide.png"));
            assert!(rendered.label.starts_with("[2/4] "));
            assert!(rendered.label.ends_with("/wide.png"));
        }

        #[test]
        fn test_render_keeps_channel_order() {
            let temp_dir = TempDir::new().unwrap();
            let red = RgbImage::from_pixel(8, 8, Rgb([255, 0, 0]));
            red.save(temp_dir.path().join("red.png")).unwrap();

            let rendered = render(temp_dir.path(), Some("red.png"), 0, 1).unwrap();

            assert_eq!(*rendered.pixels.get_pixel(256, 256), Rgb([255, 0, 0]));
        }

        #[test]
        fn test_render_is_deterministic() {
            let temp_dir = TempDir::new().unwrap();
            write_png(temp_dir.path(), "a.png", 97, 61);

            let first = render(temp_dir.path(), Some("a.png"), 0, 1).unwrap();
            let second = render(temp_dir.path(), Some("a.png"), 0, 1).unwrap();

            assert_eq!(first.pixels, second.pixels);
        }

        #[test]
        fn test_render_none_gives_placeholder() {
            let rendered = render(Path::new("/anywhere"), None, 0, 0).unwrap();

            assert!(rendered.is_placeholder());
            assert_eq!(rendered.label, NO_FILE_LABEL);
            assert_eq!(rendered.pixels.dimensions(), (PREVIEW_SIDE, PREVIEW_SIDE));
        }

        #[test]
        fn test_render_undecodable_file() {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join("fake.jpg"), b"not really a jpeg").unwrap();

            let result = render(temp_dir.path(), Some("fake.jpg"), 0, 1);

            assert!(matches!(result, Err(SortError::ImageDecode { .. })));
        }

        #[test]
        fn test_render_missing_file() {
            let temp_dir = TempDir::new().unwrap();

            let result = render(temp_dir.path(), Some("gone.png"), 0, 1);

            assert!(matches!(result, Err(SortError::SourceNotFound(_))));
        }

        #[test]
        fn test_render_current_empty_cursor() {
            let rendered = render_current(&Cursor::new()).unwrap();
            assert!(rendered.is_placeholder());
        }

        #[test]
        fn test_render_current_follows_cursor() {
            let temp_dir = TempDir::new().unwrap();
            write_png(temp_dir.path(), "a.png", 4, 4);
            write_png(temp_dir.path(), "b.png", 4, 4);
            let mut cursor = Cursor::new();
            cursor.load(temp_dir.path(), None).unwrap();
            cursor.next();

            let rendered = render_current(&cursor).unwrap();

            assert_eq!(rendered.filename.as_deref(), Some("b.png"));
            assert!(rendered.label.starts_with("[2/2] "));
        }
    }

    mod halfblock_tests {
        use super::*;

        #[test]
        fn test_fit_square() {
            assert_eq!(fit_square(80, 24), 48);
            assert_eq!(fit_square(30, 24), 30);
            assert_eq!(fit_square(0, 10), 0);
        }

        #[test]
        fn test_image_to_halfblock_dimensions() {
            let img = RgbImage::new(10, 10);
            let lines = image_to_halfblock_lines(&img, 5, 6);

            // Height 6 produces 3 terminal rows (6/2)
            assert_eq!(lines.len(), 3);
            for line in &lines {
                assert_eq!(line.spans.len(), 5);
            }
        }

        #[test]
        fn test_image_to_halfblock_odd_height_rounds_up() {
            let img = RgbImage::new(4, 4);
            let lines = image_to_halfblock_lines(&img, 4, 5);
            assert_eq!(lines.len(), 3);
        }

        #[test]
        fn test_image_to_halfblock_zero_size() {
            let img = RgbImage::new(4, 4);
            assert!(image_to_halfblock_lines(&img, 0, 4).is_empty());
        }

        #[test]
        fn test_halfblock_lines_cached_per_side() {
            let rendered = Rendered::placeholder();

            let first = rendered.halfblock_lines(8);
            assert_eq!(first.len(), 4);
            assert!(matches!(*rendered.halfblock.borrow(), Some((8, _))));

            let again = rendered.halfblock_lines(8);
            assert_eq!(again, first);

            let larger = rendered.halfblock_lines(12);
            assert_eq!(larger.len(), 6);
            assert!(matches!(*rendered.halfblock.borrow(), Some((12, _))));
        }

        #[test]
        fn test_halfblock_colors_match_pixels() {
            let img = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
            let lines = image_to_halfblock_lines(&img, 2, 2);

            let style = lines[0].spans[0].style;
            assert_eq!(style.fg, Some(Color::Rgb(10, 20, 30)));
            assert_eq!(style.bg, Some(Color::Rgb(10, 20, 30)));
        }
    }
}
