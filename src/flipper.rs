// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Map dimensional flipper
//!
//! A seam crosses every *line* of an image exactly once, choosing one
//! *position* within each line.  For a vertical seam the lines are rows
//! and the positions are columns; for a horizontal seam it is the other
//! way around.  Everything downstream speaks only of lines and
//! positions, and this module is the one place where they are mapped
//! back onto x and y.  Keeping the swap here means the graph builder,
//! the path finder and the seam editor exist exactly once.

use crate::twodmap::TwoDimensionalMap;

/// Which way a seam runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Top to bottom, one column per row.  Removing it narrows the image.
    Vertical,
    /// Left to right, one row per column.  Removing it shortens the image.
    Horizontal,
}

impl Orientation {
    /// Number of lines and the length of each line, given an image's
    /// width and height.
    pub fn lines_and_len(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (height, width),
            Orientation::Horizontal => (width, height),
        }
    }

    /// (line, position) -> (x, y)
    pub fn to_xy(self, line: u32, position: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (position, line),
            Orientation::Horizontal => (line, position),
        }
    }

    /// The other one.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// A read-only view over a map that addresses it by line and position.
pub struct Flipper<'a, P: Default + Copy> {
    map: &'a TwoDimensionalMap<P>,
    orientation: Orientation,
}

impl<'a, P: Default + Copy> Flipper<'a, P> {
    pub fn new(map: &'a TwoDimensionalMap<P>, orientation: Orientation) -> Self {
        Flipper { map, orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn lines(&self) -> u32 {
        self.orientation.lines_and_len(self.map.width, self.map.height).0
    }

    pub fn line_len(&self) -> u32 {
        self.orientation.lines_and_len(self.map.width, self.map.height).1
    }

    pub fn get(&self, line: u32, position: u32) -> P {
        self.map[self.orientation.to_xy(line, position)]
    }
}
