// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rectangular container everything else is built on.

use crate::error::{invalid, SeamError};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, row-major.  It holds the cost
/// grid fed to the graph builder, the grayscale image (lightness in
/// 0.0..=1.0) and the packed color image alike.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    data: Vec<P>,
}

/// A grayscale image, or an energy map: one real value per pixel.
pub type GrayMap = TwoDimensionalMap<f64>;

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  The buffer must be exactly
    /// `width * height` long, and neither dimension may be zero.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Result<Self, SeamError> {
        if width == 0 || height == 0 {
            return invalid(format!("empty {}x{} map", width, height));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return invalid(format!(
                "{}x{} map needs {} values, got {}",
                width,
                height,
                expected,
                data.len()
            ));
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// Build a map from a list of rows.  Ragged rows are rejected, never
    /// padded or truncated.
    pub fn from_rows<R: AsRef<[P]>>(rows: &[R]) -> Result<Self, SeamError> {
        let width = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return invalid("grid has no rows or no columns"),
        };
        let mut data = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return invalid(format!(
                    "row {} has {} entries, row 0 has {}",
                    y,
                    row.len(),
                    width
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_raw(width as u32, rows.len() as u32, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// A single row as a slice.
    ///
    /// # Panics
    ///
    /// If `y` is not below `height()`.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.data.chunks(self.width.max(1) as usize)
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<P> {
        self.data
    }

    /// Apply `f` to every value, keeping the shape.
    pub fn map<Q, F>(&self, f: F) -> TwoDimensionalMap<Q>
    where
        Q: Default + Copy,
        F: Fn(P) -> Q,
    {
        TwoDimensionalMap {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|p| f(*p)).collect(),
        }
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
