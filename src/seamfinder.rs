// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::error::SeamError;
use crate::flipper::Orientation;
use crate::seam::find_seam;
use crate::twodmap::GrayMap;

/// This trait defines how we will return seams from an energy map.
/// It's a primitive interface, just enough to make room for multiple
/// seam finders.
pub trait SeamFinder {
    /// Request a seam running the given way.
    fn seam(&self, orientation: Orientation) -> Result<Vec<u32>, SeamError>;

    /// Request a left-to-right seam, one row per column.
    fn horizontal_seam(&self) -> Result<Vec<u32>, SeamError> {
        self.seam(Orientation::Horizontal)
    }

    /// Request a top-to-bottom seam, one column per row.
    fn vertical_seam(&self) -> Result<Vec<u32>, SeamError> {
        self.seam(Orientation::Vertical)
    }
}

/// An energy map is its own seam finder: the graph search runs
/// straight over its values.
impl SeamFinder for GrayMap {
    fn seam(&self, orientation: Orientation) -> Result<Vec<u32>, SeamError> {
        find_seam(self, orientation)
    }
}
