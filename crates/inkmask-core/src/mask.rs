//! Binary mask extraction and PNG encoding.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Rasterize the current canvas content into a binary mask at the target
/// dimensions and encode it losslessly as PNG.
///
/// The live raster is scale-blitted (bilinear) to exactly
/// `width` × `height`, decoupling mask resolution from on-screen drawing
/// resolution. Every pixel with any alpha coverage at all, including
/// partially covered resampled edges, becomes opaque white; everything else
/// becomes opaque black. No intermediate value survives.
///
/// Pure function of the raster and target dimensions; the input is not
/// mutated.
pub fn extract(raster: &RgbaImage, width: u32, height: u32) -> Result<Vec<u8>, png::EncodingError> {
    let mut scaled = imageops::resize(raster, width, height, FilterType::Triangle);
    for pixel in scaled.pixels_mut() {
        *pixel = if pixel[3] != 0 { WHITE } else { BLACK };
    }
    encode_png(&scaled)
}

/// Encode an RGBA raster as an 8-bit PNG.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, png::EncodingError> {
    let mut data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut data, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(img.as_raw())?;
    }
    Ok(data)
}
