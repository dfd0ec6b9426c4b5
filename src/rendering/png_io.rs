use crate::error::ImageError;
use color_match::{Raster, RgbBuffer};
use std::io::Cursor;
use std::path::Path;

/// Load a PNG file into an 8-bit RGB buffer.
///
/// Only `.png` files are accepted; anything else is rejected before the file
/// is read.
pub fn load_png(path: &Path) -> Result<RgbBuffer, ImageError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "png" {
        let shown = if ext.is_empty() { "(none)".to_string() } else { ext };
        return Err(ImageError::UnsupportedFormat(shown));
    }

    let bytes = std::fs::read(path)?;
    let image = decode_png(&bytes)?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}

/// Decode PNG bytes of any color type and bit depth.
///
/// Palettes and low bit depths are expanded, 16-bit channels are stripped to
/// 8 bits, grey is replicated across channels and alpha is dropped.
pub fn decode_png(bytes: &[u8]) -> Result<RgbBuffer, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    if info.width == 0 || info.height == 0 {
        return Err(ImageError::Empty);
    }
    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::Decode(format!(
            "unexpected bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(ImageError::Decode(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    let row_len = info.width as usize * channels;
    let mut pixels = Vec::with_capacity(info.width as usize * info.height as usize);
    for row in buf[..info.buffer_size()]
        .chunks_exact(info.line_size)
        .take(info.height as usize)
    {
        for px in row[..row_len].chunks_exact(channels) {
            pixels.push(match channels {
                1 | 2 => [px[0], px[0], px[0]],
                _ => [px[0], px[1], px[2]],
            });
        }
    }

    RgbBuffer::from_pixels(info.width, info.height, pixels)
        .map_err(|e| ImageError::Decode(e.to_string()))
}

/// Encode an RGB buffer as an 8-bit RGB PNG.
pub fn encode_png(image: &RgbBuffer) -> Result<Vec<u8>, ImageError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ImageError::Empty);
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgb_bytes())
            .map_err(|e| ImageError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode and write an RGB buffer to a PNG file.
pub fn save_png(path: &Path, image: &RgbBuffer) -> Result<(), ImageError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote image");
    Ok(())
}
