// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Shrink an image one seam at a time.  Every pass recomputes the
//! energy of the image as it now stands, finds the cheapest seam
//! through it and cuts that seam out.  Nothing carries over from one
//! pass to the next: the image is one line smaller and its energy
//! along the cut has changed.

use crate::color::{to_gray, ColorMap};
use crate::energy::energy_map;
use crate::error::{invalid, SeamError};
use crate::flipper::Orientation;
use crate::seam::{highlight_seam, remove_seam};
use crate::seamfinder::SeamFinder;
use crate::twodmap::GrayMap;
use tracing::debug;

fn carveonce(image: &ColorMap, orientation: Orientation) -> Result<ColorMap, SeamError> {
    let energy = energy_map(&to_gray(image));
    let seam = energy.seam(orientation)?;
    remove_seam(image, &seam, orientation)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a> {
    image: &'a ColorMap,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a ColorMap) -> Self {
        Self { image }
    }

    // The entire energy map and seam digraph is recalculated every
    // pass.  It should be possible to find the span of columns or rows
    // affected by the carve and recalculate only those.

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image, alternating direction while both dimensions still
    /// need to shrink.
    pub fn carve(&self, new_width: u32, new_height: u32) -> Result<ColorMap, SeamError> {
        let (mut width, mut height) = self.image.dimensions();
        if width < new_width || height < new_height {
            return invalid(format!(
                "cannot grow a {}x{} image to {}x{}",
                width, height, new_width, new_height
            ));
        }
        if new_width == 0 || new_height == 0 {
            return invalid("cannot carve an image down to nothing");
        }

        let mut direction = Orientation::Vertical;
        let mut scratch = self.image.clone();

        while width > new_width && height > new_height {
            scratch = carveonce(&scratch, direction)?;
            direction = direction.turn();
            width = scratch.width();
            height = scratch.height();
            debug!(width, height, "carved both ways");
        }
        while width > new_width {
            scratch = carveonce(&scratch, Orientation::Vertical)?;
            width = scratch.width();
            debug!(width, height, "carved width");
        }
        while height > new_height {
            scratch = carveonce(&scratch, Orientation::Horizontal)?;
            height = scratch.height();
            debug!(width, height, "carved height");
        }
        Ok(scratch)
    }

    /// Paint `count` successive seams in black on the grayscale version
    /// of the image.  Each seam is searched on the energy of the
    /// already painted image, so painted pixels attract later seams.
    pub fn highlight(&self, orientation: Orientation, count: u32) -> Result<GrayMap, SeamError> {
        let mut gray = to_gray(self.image);
        for pass in 0..count {
            let seam = energy_map(&gray).seam(orientation)?;
            gray = highlight_seam(&gray, &seam, orientation)?;
            debug!(pass, "highlighted seam");
        }
        Ok(gray)
    }
}
