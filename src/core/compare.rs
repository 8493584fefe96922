// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixel comparison of two folders of PNGs, ignoring the last row.
//!
//! Files are paired by their position in each sorted listing,
//! not by name. Two folders with different names still get compared,
//! pair by pair, as long as they hold the same number of PNGs.

use std::{
    fmt,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::dataset::folder;
use crate::misc::error::{Error, Result};
use crate::misc::helper;
use crate::misc::type_aliases::Img;

/// Verdict of the comparison of one pair of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairVerdict {
    /// Position of the pair, starting at 1.
    pub index: usize,
    /// Number of pairs in the run.
    pub total: usize,
    /// File name in the reference folder.
    pub file1: String,
    /// File name in the candidate folder.
    pub file2: String,
    /// First differing pixel (x, y) in row major order, above the last row.
    pub first_difference: Option<(u32, u32)>,
}

impl PairVerdict {
    /// True if every pixel above the last row is equal.
    pub fn identical(&self) -> bool {
        self.first_difference.is_none()
    }
}

/// The human readable line of a verdict.
impl fmt::Display for PairVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.identical() {
            write!(
                f,
                "[{}/{}] ✅ Match: {} and {} identical except last row",
                self.index, self.total, self.file1, self.file2
            )
        } else {
            write!(
                f,
                "[{}/{}] ❌ Mismatch: {} and {} differ (above last row)",
                self.index, self.total, self.file1, self.file2
            )
        }
    }
}

/// Outcome of a complete comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of compared pairs.
    pub total: usize,
    /// Number of pairs identical except for their last row.
    pub identical: usize,
}

/// Check that two images of the same size are equal everywhere but on their last row.
///
/// Both raw buffers are row major, so the compared rows are a common prefix.
pub fn rows_match_except_last(a: &Img, b: &Img) -> bool {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let len = compared_len(a);
    a.as_raw()[..len] == b.as_raw()[..len]
}

/// First pixel, in row major order, that differs above the last row.
pub fn first_difference_except_last(a: &Img, b: &Img) -> Option<(u32, u32)> {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let last_row = a.height().saturating_sub(1);
    a.enumerate_pixels()
        .zip(b.pixels())
        .take_while(|((_, y, _), _)| *y < last_row)
        .find(|((_, _, pa), pb)| pa != pb)
        .map(|((x, y, _), _)| (x, y))
}

/// Number of bytes of the rows taking part in the comparison.
fn compared_len(img: &Img) -> usize {
    let (width, height) = img.dimensions();
    let row_len = width as usize * 4;
    row_len * height.saturating_sub(1) as usize
}

/// Decode and compare one pair of files.
///
/// Fails if either file cannot be decoded or if their dimensions differ.
pub fn compare_pair<P, Q>(
    index: usize,
    total: usize,
    dir1: P,
    file1: &str,
    dir2: Q,
    file2: &str,
) -> Result<PairVerdict>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let img1 = helper::read_rgba(dir1.as_ref().join(file1))?;
    let img2 = helper::read_rgba(dir2.as_ref().join(file2))?;
    if img1.dimensions() != img2.dimensions() {
        return Err(Error::SizeMismatch {
            file1: file1.to_string(),
            file2: file2.to_string(),
            size1: img1.dimensions(),
            size2: img2.dimensions(),
        });
    }

    let first_difference = if rows_match_except_last(&img1, &img2) {
        None
    } else {
        first_difference_except_last(&img1, &img2)
    };
    debug!(file1, file2, ?first_difference, "Compared pair");
    Ok(PairVerdict {
        index,
        total,
        file1: file1.to_string(),
        file2: file2.to_string(),
        first_difference,
    })
}

/// Two folders whose PNG listings have been paired by position.
#[derive(Debug, Clone)]
pub struct Comparison {
    dir1: PathBuf,
    dir2: PathBuf,
    pairs: Vec<(String, String)>,
}

impl Comparison {
    /// List both folders and pair their PNGs.
    ///
    /// Fails without decoding anything if the two counts differ.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(dir1: P, dir2: Q) -> Result<Self> {
        let (dir1, dir2) = (dir1.as_ref(), dir2.as_ref());
        let files1 = folder::list_png_files(dir1)?;
        let files2 = folder::list_png_files(dir2)?;
        if files1.len() != files2.len() {
            return Err(Error::CountMismatch {
                left: files1.len(),
                right: files2.len(),
            });
        }
        Ok(Comparison {
            dir1: dir1.to_path_buf(),
            dir2: dir2.to_path_buf(),
            pairs: files1.into_iter().zip(files2).collect(),
        })
    }

    /// Number of pairs to compare.
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    /// File names of each pair, reference first.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Compare every pair in order.
    ///
    /// `on_pair` receives each verdict as soon as it is known,
    /// so verdicts are already out when a later pair aborts the run.
    pub fn run<F: FnMut(&PairVerdict)>(&self, mut on_pair: F) -> Result<Summary> {
        let total = self.total();
        let mut identical = 0;
        for (i, (file1, file2)) in self.pairs.iter().enumerate() {
            let verdict = compare_pair(i + 1, total, &self.dir1, file1, &self.dir2, file2)?;
            if verdict.identical() {
                identical += 1;
            }
            on_pair(&verdict);
        }

        info!(total, identical, "Comparison complete");
        Ok(Summary { total, identical })
    }
}

/// List both folders and compare their PNGs pair by pair.
pub fn run<P, Q, F>(dir1: P, dir2: Q, on_pair: F) -> Result<Summary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(&PairVerdict),
{
    Comparison::new(dir1, dir2)?.run(on_pair)
}
