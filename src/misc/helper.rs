// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Miscellaneous helper functions that didn't fit elsewhere.

use std::{fs::File, io::BufWriter, path::Path};

use crate::misc::error::{Error, Result};
use crate::misc::type_aliases::Img;

/// Read an image file and convert it to 8 bits RGBA.
///
/// The format is guessed from the first bytes of the file, not from its name,
/// so a file named ".png" or a JPEG renamed to "x.png" still decode.
/// Gray, RGB, palette and 16 bits PNGs are all converted.
pub fn read_rgba<P: AsRef<Path>>(file_path: P) -> Result<Img> {
    let file_path = file_path.as_ref();
    let img = image::ImageReader::open(file_path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(Error::io(file_path))?
        .decode()
        .map_err(|source| Error::Decode {
            path: file_path.to_path_buf(),
            source,
        })?;
    Ok(img.to_rgba8())
}

/// Write an 8 bits RGBA png image to a file, replacing any existing one.
///
/// Encoding parameters are fixed so the same image always gives the same bytes.
pub fn write_png_rgba8<P: AsRef<Path>>(file_path: P, img: &Img) -> Result<()> {
    let file_path = file_path.as_ref();
    let file = File::create(file_path).map_err(Error::io(file_path))?;
    let (width, height) = img.dimensions();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let encode_err = |source| Error::Encode {
        path: file_path.to_path_buf(),
        source,
    };
    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer.write_image_data(img.as_raw()).map_err(encode_err)?;
    writer.finish().map_err(encode_err)
}

/// Empty directory under the system temp dir, removed when dropped.
#[cfg(test)]
pub(crate) struct ScratchDir(std::path::PathBuf);

#[cfg(test)]
impl std::ops::Deref for ScratchDir {
    type Target = Path;
    fn deref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
impl AsRef<Path> for ScratchDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Fresh scratch directory for one test touching the disk.
#[cfg(test)]
pub(crate) fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir().join(format!("lastrow-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    ScratchDir(dir)
}
