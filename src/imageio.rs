// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting images in and out of the `image` crate.  The file format
//! follows the path's extension.

use crate::color::{to_rgb, ColorMap, PackedRgb};
use crate::twodmap::{GrayMap, TwoDimensionalMap};
use failure::{format_err, Error};
use image::{ImageBuffer, RgbImage};
use std::path::Path;

pub fn from_rgb_image(image: &RgbImage) -> Result<ColorMap, Error> {
    let (width, height) = image.dimensions();
    let data = image
        .chunks(3)
        .map(|c| PackedRgb::from_bytes(c[0], c[1], c[2]))
        .collect();
    Ok(TwoDimensionalMap::from_raw(width, height, data)?)
}

pub fn to_rgb_image(map: &ColorMap) -> Result<RgbImage, Error> {
    let (width, height) = map.dimensions();
    let raw: Vec<u8> = map.as_slice().iter().flat_map(|p| p.to_bytes().to_vec()).collect();
    let buffer: Option<RgbImage> = ImageBuffer::from_raw(width, height, raw);
    buffer.ok_or_else(|| format_err!("{}x{} image does not fit its buffer", width, height))
}

/// Decode any image the `image` crate understands into packed RGB.
pub fn load_image<Q: AsRef<Path>>(path: Q) -> Result<ColorMap, Error> {
    let image = image::open(path)?.to_rgb();
    from_rgb_image(&image)
}

pub fn save_color<Q: AsRef<Path>>(map: &ColorMap, path: Q) -> Result<(), Error> {
    to_rgb_image(map)?.save(path)?;
    Ok(())
}

/// Save a grayscale map; values are read as lightness in 0.0..=1.0.
pub fn save_gray<Q: AsRef<Path>>(gray: &GrayMap, path: Q) -> Result<(), Error> {
    save_color(&to_rgb(gray), path)
}
