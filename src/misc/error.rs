// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors that abort a stamping or comparison run.
//!
//! Content differences between two images are not errors,
//! they are reported in the comparison verdicts instead.

use std::path::PathBuf;

use crate::misc::type_aliases::Size;

/// Fatal conditions of a run. There is no recovery: the first one stops everything.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Listing a folder or creating the output folder failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be opened or decoded as an image.
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A stamped image could not be written.
    #[error("cannot encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    /// The source folder path has no final component to derive a sibling from.
    #[error("{} has no folder name", .0.display())]
    NoFolderName(PathBuf),

    /// The two compared folders hold a different number of PNG files.
    #[error("Different number of PNGs ({left} vs {right})")]
    CountMismatch { left: usize, right: usize },

    /// Two paired images do not have the same dimensions.
    #[error("Image sizes differ at {file1} and {file2}: {size1:?} vs {size2:?}")]
    SizeMismatch {
        file1: String,
        file2: String,
        size1: Size,
        size2: Size,
    },
}

/// Result type of every fallible operation of this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
