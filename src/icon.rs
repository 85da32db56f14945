use anyhow::{Context, Result, anyhow, bail};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

/// Lossy WebP quality for every generated raster
pub const WEBP_QUALITY: f32 = 95.0;

/// Open and decode an image, sniffing the format from its content
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read {}", path.display()))?;

    reader
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))
}

/// Dimensions of `width` x `height` shrunk to fit inside a `max` x `max` box.
///
/// Aspect ratio is preserved and images that already fit are left alone,
/// so the result never exceeds the original.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    let max = max.max(1);
    if width <= max && height <= max {
        return (width, height);
    }

    let (w, h, m) = (width as u64, height as u64, max as u64);
    if width >= height {
        let scaled = ((h * m + w / 2) / w).clamp(1, m);
        (max, scaled as u32)
    } else {
        let scaled = ((w * m + h / 2) / h).clamp(1, m);
        (scaled as u32, max)
    }
}

/// Edge of the visible safe area of a foreground layer of `size` pixels
pub fn safe_area_size(size: u32, safe_area: f32) -> u32 {
    ((size as f64 * safe_area as f64).floor() as u32).max(1)
}

/// Shrink `source` into a `content_max` box and center it on a transparent
/// `size` x `size` canvas.
pub fn compose_centered(source: &RgbaImage, size: u32, content_max: u32) -> RgbaImage {
    let (width, height) = fit_within(source.width(), source.height(), content_max.min(size));

    let content = if (width, height) == source.dimensions() {
        source.clone()
    } else {
        imageops::resize(source, width, height, FilterType::Lanczos3)
    };

    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let x = (size - width) / 2;
    let y = (size - height) / 2;
    imageops::overlay(&mut canvas, &content, x as i64, y as i64);

    canvas
}

/// Square launcher icon: the whole canvas is available to the content
pub fn render_icon(source: &DynamicImage, size: u32) -> RgbaImage {
    compose_centered(&source.to_rgba8(), size, size)
}

/// Adaptive-icon foreground: content confined to the central safe area
pub fn render_foreground(source: &DynamicImage, size: u32, safe_area: f32) -> RgbaImage {
    compose_centered(&source.to_rgba8(), size, safe_area_size(size, safe_area))
}

/// Encode as lossy WebP at `WEBP_QUALITY`, keeping the alpha channel
pub fn encode_webp(img: &RgbaImage) -> Result<Vec<u8>> {
    let memory = webp::Encoder::from_rgba(img.as_raw(), img.width(), img.height())
        .encode_simple(false, WEBP_QUALITY)
        .map_err(|e| anyhow!("WebP encoding failed: {:?}", e))?;
    Ok(memory.to_vec())
}

pub fn save_webp(img: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_webp(img)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn try_create_icon(source_path: &Path, output_path: &Path, size: u32) -> Result<()> {
    if size == 0 {
        bail!("icon size must be greater than 0");
    }
    let source = load_source(source_path)?;
    save_webp(&render_icon(&source, size), output_path)
}

fn try_create_foreground_icon(
    source_path: &Path,
    output_path: &Path,
    size: u32,
    safe_area: f32,
) -> Result<()> {
    if size == 0 {
        bail!("icon size must be greater than 0");
    }
    let source = load_source(source_path)?;
    save_webp(&render_foreground(&source, size, safe_area), output_path)
}

fn report(output_path: &Path, result: Result<()>) -> bool {
    match result {
        Ok(()) => {
            println!("✓ Created: {}", output_path.display());
            true
        }
        Err(e) => {
            println!("✗ Error creating {}: {:#}", output_path.display(), e);
            false
        }
    }
}

/// Write a square icon with the source centered on a transparent background.
/// Failures are logged and reported as `false`.
pub fn create_icon(source_path: &Path, output_path: &Path, size: u32) -> bool {
    report(output_path, try_create_icon(source_path, output_path, size))
}

/// Write an adaptive-icon foreground layer with a transparent margin around
/// the safe area. Failures are logged and reported as `false`.
pub fn create_foreground_icon(
    source_path: &Path,
    output_path: &Path,
    size: u32,
    safe_area: f32,
) -> bool {
    report(
        output_path,
        try_create_foreground_icon(source_path, output_path, size, safe_area),
    )
}
