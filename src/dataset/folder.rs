// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Listing of the PNG files directly inside a folder.

use itertools::Itertools;
use std::{fs, path::Path};

use crate::misc::error::{Error, Result};

/// File name suffix of the images we process, compared case-insensitively.
pub const PNG_SUFFIX: &str = ".png";

/// Names of the regular files of `dir` ending in ".png" (any case),
/// sorted lexicographically.
///
/// Sub-folders are neither listed nor entered, even if their name ends in ".png".
pub fn list_png_files<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(Error::io(dir))? {
        let entry = entry.map_err(Error::io(dir))?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if is_png_name(&name) && entry.path().is_file() {
            names.push(name.into_owned());
        }
    }
    Ok(names.into_iter().sorted().collect())
}

/// Check that a file name ends in ".png", ignoring ASCII case.
pub fn is_png_name(name: &str) -> bool {
    let name = name.as_bytes();
    let suffix = PNG_SUFFIX.as_bytes();
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
