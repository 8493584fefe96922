// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Batch tools for folders of PNG images, centered on their bottom pixel row.
//!
//! * [`core::stamp`] blackens the last row of every image of a folder,
//!   writing the results into a sibling "-modified" folder.
//! * [`core::compare`] compares two folders image by image,
//!   ignoring the last row of each image.
//!
//! Both are also available as the `lastrow_stamp` and `lastrow_compare` binaries.

pub mod core;
pub mod dataset;
pub mod misc;

pub use crate::misc::error::{Error, Result};
