// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Packed RGB pixels and the trip to and from grayscale
//!
//! A color pixel is a single `0x00RRGGBB` word.  Channels come out as
//! reals in 0.0..=1.0; gray is the plain mean of the three channels.

use crate::twodmap::{GrayMap, TwoDimensionalMap};
use num_traits::{cast, clamp};

/// One color pixel, `0x00RRGGBB`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PackedRgb(pub u32);

/// A color image.
pub type ColorMap = TwoDimensionalMap<PackedRgb>;

// Real channel value to an 8-bit channel, truncating like an integer
// cast would.  Anything outside the range is pinned to it.
#[inline]
fn channel_byte(value: f64) -> u32 {
    let scaled: Option<u32> = cast(clamp(value * 255.0, 0.0, 255.0));
    scaled.unwrap_or(0)
}

impl PackedRgb {
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        PackedRgb((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Build a pixel from three channels in 0.0..=1.0.
    pub fn from_components(red: f64, green: f64, blue: f64) -> Self {
        PackedRgb((channel_byte(red) << 16) | (channel_byte(green) << 8) | channel_byte(blue))
    }

    /// The gray pixel with every channel set to `gray`.
    pub fn from_gray(gray: f64) -> Self {
        Self::from_components(gray, gray, gray)
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

pub fn get_red(rgb: PackedRgb) -> f64 {
    f64::from((rgb.0 >> 16) & 0xff) / 255.0
}

pub fn get_green(rgb: PackedRgb) -> f64 {
    f64::from((rgb.0 >> 8) & 0xff) / 255.0
}

pub fn get_blue(rgb: PackedRgb) -> f64 {
    f64::from(rgb.0 & 0xff) / 255.0
}

/// Mean of the three channels.
pub fn get_gray(rgb: PackedRgb) -> f64 {
    (get_red(rgb) + get_green(rgb) + get_blue(rgb)) / 3.0
}

pub fn to_gray(image: &ColorMap) -> GrayMap {
    image.map(get_gray)
}

pub fn to_rgb(gray: &GrayMap) -> ColorMap {
    gray.map(PackedRgb::from_gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        let teal = PackedRgb(0x0033_99cc);
        assert_eq!(get_red(teal), 0.2);
        assert_eq!(get_green(teal), 0.6);
        assert_eq!(get_blue(teal), 0.8);
        assert_eq!(teal.to_bytes(), [0x33, 0x99, 0xcc]);
        assert_eq!(PackedRgb::from_bytes(0x33, 0x99, 0xcc), teal);
    }

    #[test]
    fn gray_is_the_channel_mean() {
        assert_eq!(get_gray(PackedRgb(0x00ff_ffff)), 1.0);
        assert_eq!(get_gray(PackedRgb(0)), 0.0);
        assert!((get_gray(PackedRgb(0x00ff_0000)) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn components_truncate_and_clamp() {
        assert_eq!(PackedRgb::from_components(1.0, 0.0, 0.5), PackedRgb(0x00ff_007f));
        assert_eq!(PackedRgb::from_components(2.0, -1.0, 0.0), PackedRgb(0x00ff_0000));
        assert_eq!(PackedRgb::from_gray(1.0), PackedRgb(0x00ff_ffff));
        assert_eq!(PackedRgb::from_components(std::f64::NAN, 1.0, 1.0), PackedRgb(0x0000_ffff));
    }

    #[test]
    fn bytes_and_channels_agree() {
        for &(r, g, b) in &[(0u8, 0u8, 0u8), (1, 128, 254), (255, 255, 255)] {
            let pixel = PackedRgb::from_bytes(r, g, b);
            assert_eq!(pixel.to_bytes(), [r, g, b]);
            assert_eq!(get_red(pixel), f64::from(r) / 255.0);
            assert_eq!(get_green(pixel), f64::from(g) / 255.0);
            assert_eq!(get_blue(pixel), f64::from(b) / 255.0);
        }
    }

    #[test]
    fn gray_round_trip_keeps_black_and_white() {
        let image = ColorMap::from_rows(&[[PackedRgb(0), PackedRgb(0x00ff_ffff)]]).unwrap();
        assert_eq!(to_rgb(&to_gray(&image)), image);
    }
}
