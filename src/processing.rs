//! Texture decoding for icon files

use std::io::Cursor;
use std::path::{Path, PathBuf};

use ddsfile::{Dds, DxgiFormat};
use image::{DynamicImage, ImageFormat as ImgFormat, RgbaImage};

use crate::{
    error::{IconCacheError, Result},
    provider::TextureLoader,
};

/// Input formats the loader can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Tga,
    Dds,
    Png,
    Unknown,
}

impl InputFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tga" => InputFormat::Tga,
            "dds" => InputFormat::Dds,
            "png" => InputFormat::Png,
            _ => InputFormat::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(InputFormat::Unknown)
    }
}

/// A decoded RGBA8 texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTexture {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels
    pub rgba: Vec<u8>,
    /// File the texture was decoded from
    pub source: PathBuf,
}

impl DecodedTexture {
    /// Size of the pixel data in bytes
    pub fn size(&self) -> usize {
        self.rgba.len()
    }
}

/// Decodes PNG, TGA and DDS icons into RGBA textures
#[derive(Debug, Clone)]
pub struct ImageTextureLoader {
    max_dimension: u32,
}

impl Default for ImageTextureLoader {
    fn default() -> Self {
        Self::new(64)
    }
}

impl ImageTextureLoader {
    /// Create a loader that downscales anything larger than `max_dimension`
    pub fn new(max_dimension: u32) -> Self {
        Self {
            max_dimension: max_dimension.max(1),
        }
    }

    /// Decode raw image data of a known format
    pub fn decode(&self, data: &[u8], input_format: InputFormat) -> Result<RgbaImage> {
        let img = match input_format {
            InputFormat::Tga => image::load_from_memory_with_format(data, ImgFormat::Tga)?,
            InputFormat::Png => image::load_from_memory_with_format(data, ImgFormat::Png)?,
            InputFormat::Dds => DynamicImage::ImageRgba8(dds_to_rgba(data)?),
            InputFormat::Unknown => image::load_from_memory(data)?,
        };

        let img = if img.width() > self.max_dimension || img.height() > self.max_dimension {
            log::trace!("Resizing from {}x{} to thumbnail", img.width(), img.height());
            img.thumbnail(self.max_dimension, self.max_dimension)
        } else {
            img
        };

        Ok(img.to_rgba8())
    }

    fn decode_file(&self, path: &Path) -> Result<DecodedTexture> {
        log::trace!("Processing icon file: {:?}", path);

        let input_format = InputFormat::from_path(path);
        if input_format == InputFormat::Unknown {
            return Err(IconCacheError::UnsupportedFormat(path.display().to_string()));
        }

        let data = std::fs::read(path)?;
        log::trace!("Read {} bytes from {:?}", data.len(), path);

        let img = self.decode(&data, input_format)?;
        let (width, height) = img.dimensions();
        log::debug!("Decoded {:?} as {}x{}", path, width, height);

        Ok(DecodedTexture {
            width,
            height,
            rgba: img.into_raw(),
            source: path.to_path_buf(),
        })
    }
}

impl TextureLoader for ImageTextureLoader {
    type Texture = DecodedTexture;

    fn load_from_path(&self, path: &Path) -> Result<DecodedTexture> {
        self.decode_file(path)
            .map_err(|e| IconCacheError::load_failure(path, e))
    }

    fn load_from_file(&self, file: &Path) -> Result<DecodedTexture> {
        if !file.is_file() {
            return Err(IconCacheError::load_failure(file, "file does not exist"));
        }
        self.decode_file(file)
            .map_err(|e| IconCacheError::load_failure(file, e))
    }
}

/// Convert DDS to RGBA image
fn dds_to_rgba(data: &[u8]) -> Result<RgbaImage> {
    let dds = Dds::read(&mut Cursor::new(data))
        .map_err(|e| IconCacheError::Dds(format!("Failed to parse DDS: {}", e)))?;

    let width = dds.get_width();
    let height = dds.get_height();
    let format = dds.get_dxgi_format();

    log::trace!("DDS info: {}x{}, format: {:?}", width, height, format);

    let raw_data = dds
        .get_data(0)
        .map_err(|e| IconCacheError::Dds(format!("Failed to get DDS data: {}", e)))?;

    let expected_rgba = rgba_len(width, height)?;
    let rgba_data = match format {
        Some(DxgiFormat::BC1_UNorm) | Some(DxgiFormat::BC1_UNorm_sRGB) => {
            decompress_block(texpresso::Format::Bc1, raw_data, width, height)?
        }
        Some(DxgiFormat::BC2_UNorm) | Some(DxgiFormat::BC2_UNorm_sRGB) => {
            decompress_block(texpresso::Format::Bc2, raw_data, width, height)?
        }
        Some(DxgiFormat::BC3_UNorm) | Some(DxgiFormat::BC3_UNorm_sRGB) => {
            decompress_block(texpresso::Format::Bc3, raw_data, width, height)?
        }
        Some(DxgiFormat::BC7_UNorm) | Some(DxgiFormat::BC7_UNorm_sRGB) => {
            return image_dds::image_from_dds(&dds, 0)
                .map_err(|e| IconCacheError::Dds(format!("BC7 decompression failed: {}", e)));
        }
        _ if raw_data.len() == expected_rgba => {
            // Uncompressed RGBA, or a format we treat as such
            raw_data.to_vec()
        }
        _ => {
            return Err(IconCacheError::Dds(format!(
                "Unsupported DDS format: {:?}, data size: {}, expected: {}",
                format,
                raw_data.len(),
                expected_rgba
            )));
        }
    };

    RgbaImage::from_raw(width, height, rgba_data)
        .ok_or_else(|| IconCacheError::Dds("Failed to create RGBA image from DDS".to_string()))
}

/// Byte length of a `width` x `height` RGBA8 buffer
fn rgba_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| too_large(width, height))
}

fn too_large(width: u32, height: u32) -> IconCacheError {
    IconCacheError::Dds(format!("DDS dimensions too large: {}x{}", width, height))
}

/// Decompress BC1-BC3 data. The header's size is not trusted: the data must
/// cover every 4x4 block before texpresso reads it.
fn decompress_block(
    format: texpresso::Format,
    data: &[u8],
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let block_size = match format {
        texpresso::Format::Bc1 => 8,
        _ => 16,
    };
    let expected = (width as usize)
        .div_ceil(4)
        .checked_mul((height as usize).div_ceil(4))
        .and_then(|blocks| blocks.checked_mul(block_size))
        .ok_or_else(|| too_large(width, height))?;

    if data.len() < expected {
        return Err(IconCacheError::Dds(format!(
            "Truncated block data: {} bytes, expected {}",
            data.len(),
            expected
        )));
    }

    let mut output = vec![0u8; rgba_len(width, height)?];
    format.decompress(data, width as usize, height as usize, &mut output);
    Ok(output)
}
