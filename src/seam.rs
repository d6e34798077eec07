// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Finding, painting and cutting seams
//!
//! A seam is a `Vec<u32>` with one entry per line: for a vertical seam,
//! entry `y` is the column to take out of row `y`; for a horizontal
//! seam, entry `x` is the row to take out of column `x`.

use crate::color::PackedRgb;
use crate::cq;
use crate::error::{invalid, SeamError};
use crate::flipper::Orientation;
use crate::graph::build_graph;
use crate::pathfinder::shortest_path;
use crate::twodmap::{GrayMap, TwoDimensionalMap};
use itertools::iproduct;
use tracing::debug;

/// Pixels that know how to draw a seam over themselves.
pub trait SeamMarker: Default + Copy {
    fn marker() -> Self;
}

/// Black.
impl SeamMarker for f64 {
    fn marker() -> Self {
        0.0
    }
}

/// Blue.
impl SeamMarker for PackedRgb {
    fn marker() -> Self {
        PackedRgb(0x0000_00ff)
    }
}

/// Find the cheapest seam through `grid`: build the graph, search from
/// the source sentinel to the sink sentinel, and project the pixels in
/// between onto their position within each line.
pub fn find_seam(grid: &GrayMap, orientation: Orientation) -> Result<Vec<u32>, SeamError> {
    let mut graph = build_graph(grid, orientation)?;
    let (source, sink) = (graph.source(), graph.sink());
    let path = shortest_path(&mut graph, source, sink)?;
    debug!(cost = graph.node(sink).distance, "seam found");

    path.into_iter()
        .map(|id| {
            graph.position_of(id).ok_or_else(|| {
                SeamError::GraphInvariantViolation(format!("sentinel {} inside a seam", id))
            })
        })
        .collect()
}

// Both editors refuse to touch an image before the whole seam has been
// checked against it.
fn check_seam<P: Default + Copy>(
    image: &TwoDimensionalMap<P>,
    seam: &[u32],
    orientation: Orientation,
) -> Result<(), SeamError> {
    let (lines, line_len) = orientation.lines_and_len(image.width(), image.height());
    if seam.len() != lines as usize {
        return Err(SeamError::SeamOutOfBounds(format!(
            "seam has {} entries, image has {} lines",
            seam.len(),
            lines
        )));
    }
    if let Some((line, position)) = seam.iter().enumerate().find(|&(_, &p)| p >= line_len) {
        return Err(SeamError::SeamOutOfBounds(format!(
            "entry {} is {}, lines are only {} long",
            line, position, line_len
        )));
    }
    Ok(())
}

/// Total grid cost of the pixels a seam passes through.
pub fn seam_cost(grid: &GrayMap, seam: &[u32], orientation: Orientation) -> Result<f64, SeamError> {
    check_seam(grid, seam, orientation)?;
    Ok(seam
        .iter()
        .enumerate()
        .map(|(line, &position)| grid[orientation.to_xy(line as u32, position)])
        .sum())
}

/// A copy of `image` with every pixel of the seam overwritten by the
/// pixel type's marker.
pub fn highlight_seam<P: SeamMarker>(
    image: &TwoDimensionalMap<P>,
    seam: &[u32],
    orientation: Orientation,
) -> Result<TwoDimensionalMap<P>, SeamError> {
    check_seam(image, seam, orientation)?;
    let mut result = image.clone();
    for (line, &position) in seam.iter().enumerate() {
        result[orientation.to_xy(line as u32, position)] = P::marker();
    }
    Ok(result)
}

/// A new image one pixel shorter along every line: the seam's pixel is
/// dropped and everything after it in that line moves down by one.
pub fn remove_seam<P: Default + Copy>(
    image: &TwoDimensionalMap<P>,
    seam: &[u32],
    orientation: Orientation,
) -> Result<TwoDimensionalMap<P>, SeamError> {
    check_seam(image, seam, orientation)?;
    let (width, height) = image.dimensions();
    let (new_width, new_height) = match orientation {
        Orientation::Vertical => (width - 1, height),
        Orientation::Horizontal => (width, height - 1),
    };
    if new_width == 0 || new_height == 0 {
        return invalid("removing the seam would leave an empty image");
    }

    // Every pixel at or past the seam in its line comes from one
    // position further along in the source.
    let data = iproduct!(0..new_height, 0..new_width)
        .map(|(y, x)| {
            let from = match orientation {
                Orientation::Vertical => (cq!(x < seam[y as usize], x, x + 1), y),
                Orientation::Horizontal => (x, cq!(y < seam[x as usize], y, y + 1)),
            };
            image[from]
        })
        .collect();
    TwoDimensionalMap::from_raw(new_width, new_height, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn diagonal() -> GrayMap {
        GrayMap::from_rows(&[[1.0, 9.0, 9.0], [9.0, 1.0, 9.0], [9.0, 9.0, 1.0]]).unwrap()
    }

    fn lopsided() -> GrayMap {
        GrayMap::from_rows(&[
            [3.0, 1.0, 4.0, 1.0],
            [5.0, 9.0, 2.0, 6.0],
            [5.0, 3.0, 5.0, 8.0],
        ])
        .unwrap()
    }

    // Every 8-connected seam through a map, by brute force.
    fn all_seams(lines: u32, line_len: u32) -> Vec<Vec<u32>> {
        (0..lines)
            .map(|_| 0..line_len)
            .multi_cartesian_product()
            .filter(|s| s.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1))
            .collect()
    }

    fn assert_minimal(grid: &GrayMap, orientation: Orientation) {
        let seam = find_seam(grid, orientation).unwrap();
        let (lines, line_len) = orientation.lines_and_len(grid.width(), grid.height());
        assert_eq!(seam.len(), lines as usize);
        assert!(seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1));
        let found = seam_cost(grid, &seam, orientation).unwrap();
        let best = all_seams(lines, line_len)
            .iter()
            .map(|s| seam_cost(grid, s, orientation).unwrap())
            .fold(std::f64::INFINITY, f64::min);
        assert_eq!(found, best);
    }

    #[test]
    fn diagonal_vertical_seam() {
        let seam = find_seam(&diagonal(), Orientation::Vertical).unwrap();
        assert_eq!(seam, vec![0, 1, 2]);
        assert_eq!(seam_cost(&diagonal(), &seam, Orientation::Vertical).unwrap(), 3.0);
    }

    #[test]
    fn diagonal_horizontal_seam() {
        let seam = find_seam(&diagonal(), Orientation::Horizontal).unwrap();
        assert_eq!(seam, vec![0, 1, 2]);
    }

    #[test]
    fn seams_are_minimal() {
        for grid in &[diagonal(), lopsided()] {
            assert_minimal(grid, Orientation::Vertical);
            assert_minimal(grid, Orientation::Horizontal);
        }
    }

    #[test]
    fn lopsided_seams() {
        // Vertical: 1 + 2 + 3 through columns 1, 2, 1.
        assert_eq!(find_seam(&lopsided(), Orientation::Vertical).unwrap(), vec![1, 2, 1]);
        // Horizontal: 3 + 1 + 2 + 1 through rows 0, 0, 1, 0.
        assert_eq!(
            find_seam(&lopsided(), Orientation::Horizontal).unwrap(),
            vec![0, 0, 1, 0]
        );
    }

    #[test]
    fn one_line_grids() {
        let row = GrayMap::from_rows(&[[4.0, 0.5, 2.0]]).unwrap();
        assert_eq!(find_seam(&row, Orientation::Vertical).unwrap(), vec![1]);
        assert_eq!(find_seam(&row, Orientation::Horizontal).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn highlight_marks_only_the_seam() {
        let image = lopsided();
        let seam = vec![1u32, 2, 1];
        let marked = highlight_seam(&image, &seam, Orientation::Vertical).unwrap();
        assert_eq!(marked.dimensions(), image.dimensions());
        assert_eq!(marked.row(0), &[3.0, 0.0, 4.0, 1.0]);
        assert_eq!(marked.row(1), &[5.0, 9.0, 0.0, 6.0]);
        assert_eq!(marked.row(2), &[5.0, 0.0, 5.0, 8.0]);
        // The input is left alone.
        assert_eq!(image, lopsided());
    }

    #[test]
    fn highlight_color_in_blue() {
        let image = TwoDimensionalMap::from_rows(&[
            [PackedRgb(0x00ff_ffff), PackedRgb(0x00ff_ffff)],
            [PackedRgb(0x00ff_ffff), PackedRgb(0x00ff_ffff)],
        ])
        .unwrap();
        let marked = highlight_seam(&image, &[1, 0], Orientation::Horizontal).unwrap();
        assert_eq!(marked[(0, 1)], PackedRgb(0xff));
        assert_eq!(marked[(1, 0)], PackedRgb(0xff));
        assert_eq!(marked[(0, 0)], PackedRgb(0x00ff_ffff));
        assert_eq!(marked[(1, 1)], PackedRgb(0x00ff_ffff));
    }

    #[test]
    fn remove_vertical_seam_shifts_left() {
        let shrunk = remove_seam(&lopsided(), &[1, 2, 1], Orientation::Vertical).unwrap();
        assert_eq!(shrunk.dimensions(), (3, 3));
        assert_eq!(shrunk.row(0), &[3.0, 4.0, 1.0]);
        assert_eq!(shrunk.row(1), &[5.0, 9.0, 6.0]);
        assert_eq!(shrunk.row(2), &[5.0, 5.0, 8.0]);
    }

    #[test]
    fn remove_horizontal_seam_shifts_up() {
        let shrunk = remove_seam(&lopsided(), &[0, 0, 1, 0], Orientation::Horizontal).unwrap();
        assert_eq!(shrunk.dimensions(), (4, 2));
        assert_eq!(shrunk.row(0), &[5.0, 9.0, 4.0, 6.0]);
        assert_eq!(shrunk.row(1), &[5.0, 3.0, 5.0, 8.0]);
    }

    #[test]
    fn remove_color_seam() {
        let image = TwoDimensionalMap::from_rows(&[
            [PackedRgb(1), PackedRgb(2)],
            [PackedRgb(3), PackedRgb(4)],
        ])
        .unwrap();
        let shrunk = remove_seam(&image, &[0, 1], Orientation::Vertical).unwrap();
        assert_eq!(shrunk.into_raw(), vec![PackedRgb(2), PackedRgb(3)]);
    }

    #[test]
    fn bad_seams_are_refused_before_editing() {
        let image = lopsided();
        for seam in &[vec![0u32, 0], vec![0, 0, 0, 0], vec![0, 4, 0]] {
            match remove_seam(&image, seam, Orientation::Vertical) {
                Err(SeamError::SeamOutOfBounds(_)) => {}
                other => panic!("expected SeamOutOfBounds, got {:?}", other),
            }
            assert!(highlight_seam(&image, seam, Orientation::Vertical).is_err());
        }
        assert!(remove_seam(&image, &[0, 0, 3, 0], Orientation::Horizontal).is_err());
    }

    #[test]
    fn an_impassable_row_is_bad_input() {
        let inf = std::f64::INFINITY;
        let grid = GrayMap::from_rows(&[[1.0, 2.0], [inf, inf]]).unwrap();
        match find_seam(&grid, Orientation::Vertical) {
            Err(SeamError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn cannot_remove_the_last_column() {
        let column = GrayMap::from_rows(&[[1.0], [2.0]]).unwrap();
        match remove_seam(&column, &[0, 0], Orientation::Vertical) {
            Err(SeamError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
