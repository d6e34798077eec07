// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a grayscale image, smooth it and run the Sobel operator over
//! it; the gradient magnitude at each pixel is that pixel's energy.
//! The seam engine does not care where its costs come from, so this is
//! just the stock way of producing them.

use crate::error::{invalid, SeamError};
use crate::twodmap::GrayMap;
use itertools::iproduct;
use num_traits::clamp;

/// A square, odd-sized matrix of weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, SeamError> {
        let size = rows.len();
        if size % 2 == 0 {
            return invalid(format!("kernel must have an odd size, got {}", size));
        }
        if let Some(row) = rows.iter().find(|r| r.as_ref().len() != size) {
            return invalid(format!(
                "kernel is not square: {} rows, a row of {}",
                size,
                row.as_ref().len()
            ));
        }
        Ok(Kernel {
            size,
            weights: rows.iter().flat_map(|r| r.as_ref().to_vec()).collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size + col]
    }
}

// The three stock kernels are known good, so building them cannot fail.
fn stock(rows: [[f64; 3]; 3]) -> Kernel {
    Kernel {
        size: 3,
        weights: rows.iter().flat_map(|r| r.to_vec()).collect(),
    }
}

pub fn smooth_kernel() -> Kernel {
    stock([[0.1, 0.1, 0.1], [0.1, 0.2, 0.1], [0.1, 0.1, 0.1]])
}

pub fn sobel_x_kernel() -> Kernel {
    stock([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]])
}

pub fn sobel_y_kernel() -> Kernel {
    stock([[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]])
}

/// Slide `kernel` over `gray`.  Samples that would fall off the image
/// are taken from the nearest pixel on its border.
pub fn filter(gray: &GrayMap, kernel: &Kernel) -> GrayMap {
    let (width, height) = gray.dimensions();
    let (mw, mh) = (i64::from(width) - 1, i64::from(height) - 1);
    let half = (kernel.size() / 2) as i64;

    let mut filtered = GrayMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let mut sum = 0.0;
        for (k, c) in iproduct!(0..kernel.size(), 0..kernel.size()) {
            let sy = clamp(i64::from(y) + k as i64 - half, 0, mh) as u32;
            let sx = clamp(i64::from(x) + c as i64 - half, 0, mw) as u32;
            sum += kernel.weight(k, c) * gray[(sx, sy)];
        }
        filtered[(x, y)] = sum;
    }
    filtered
}

pub fn smooth(gray: &GrayMap) -> GrayMap {
    filter(gray, &smooth_kernel())
}

/// Horizontal gradient.
pub fn sobel_x(gray: &GrayMap) -> GrayMap {
    filter(gray, &sobel_x_kernel())
}

/// Vertical gradient.
pub fn sobel_y(gray: &GrayMap) -> GrayMap {
    filter(gray, &sobel_y_kernel())
}

/// Gradient magnitude, `sqrt(x² + y²)`.
pub fn sobel(gray: &GrayMap) -> GrayMap {
    let (gx, gy) = (sobel_x(gray), sobel_y(gray));
    let mut magnitude = GrayMap::new(gray.width(), gray.height());
    for (y, x) in iproduct!(0..gray.height(), 0..gray.width()) {
        let (dx, dy) = (gx[(x, y)], gy[(x, y)]);
        magnitude[(x, y)] = (dx * dx + dy * dy).sqrt();
    }
    magnitude
}

/// The energy map handed to the seam search.
pub fn energy_map(gray: &GrayMap) -> GrayMap {
    sobel(&smooth(gray))
}
