// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Blacken the bottom row of every PNG of a folder.
//!
//! Stamped copies go to a sibling folder named after the source
//! with a "-modified" suffix. Source files are only ever read.

use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::dataset::folder;
use crate::misc::error::{Error, Result};
use crate::misc::helper;
use crate::misc::type_aliases::{Img, BLACK};

/// Appended to the source folder name to get the output folder name.
pub const MODIFIED_SUFFIX: &str = "-modified";

/// What a stamping run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    /// Folder where the stamped images were written.
    pub destination: PathBuf,
    /// Names of the stamped files, in processing order.
    pub files: Vec<String>,
}

/// Overwrite every pixel of the last row with opaque black.
/// An image without rows is left untouched.
pub fn stamp_last_row(img: &mut Img) {
    let (width, height) = img.dimensions();
    if height == 0 {
        return;
    }
    for x in 0..width {
        img.put_pixel(x, height - 1, BLACK);
    }
}

/// Sibling folder receiving the stamped images: `<parent>/<name>-modified`.
///
/// Trailing separators of `source` are ignored.
pub fn modified_dir<P: AsRef<Path>>(source: P) -> Result<PathBuf> {
    let source = source.as_ref();
    let name = source
        .file_name()
        .ok_or_else(|| Error::NoFolderName(source.to_path_buf()))?;
    let mut modified_name = name.to_os_string();
    modified_name.push(MODIFIED_SUFFIX);
    let parent = source.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(modified_name))
}

/// Stamp every PNG of `source` into its modified sibling folder.
///
/// The first file that cannot be read, decoded or written aborts the run.
pub fn run<P: AsRef<Path>>(source: P) -> Result<StampReport> {
    let source = source.as_ref();
    let file_names = folder::list_png_files(source)?;
    let destination = modified_dir(source)?;
    fs::create_dir_all(&destination).map_err(Error::io(&destination))?;

    for name in file_names.iter() {
        let mut img = helper::read_rgba(source.join(name))?;
        stamp_last_row(&mut img);
        helper::write_png_rgba8(destination.join(name), &img)?;
        let (width, height) = img.dimensions();
        debug!(file = %name, width, height, "Stamped last row");
    }

    info!(
        count = file_names.len(),
        destination = %destination.display(),
        "Stamping complete"
    );
    Ok(StampReport {
        destination,
        files: file_names,
    })
}
