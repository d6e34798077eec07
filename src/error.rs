// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the seam engine.

use failure::Fail;

/// Everything that can go wrong between a cost grid and an edited
/// image.  Each variant carries a human-readable account of the
/// offending input.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum SeamError {
    /// The caller handed us a grid we refuse to work with: empty,
    /// ragged, negative or NaN costs, bad kernels, impossible targets.
    #[fail(display = "invalid input: {}", _0)]
    InvalidInput(String),

    /// The relaxation did not settle, or a path could not be walked
    /// back.  The builder never produces such a graph.
    #[fail(display = "graph invariant violated: {}", _0)]
    GraphInvariantViolation(String),

    /// A seam that does not fit the image it is applied to.
    #[fail(display = "seam out of bounds: {}", _0)]
    SeamOutOfBounds(String),
}

pub(crate) fn invalid<T>(msg: impl Into<String>) -> Result<T, SeamError> {
    Err(SeamError::InvalidInput(msg.into()))
}
