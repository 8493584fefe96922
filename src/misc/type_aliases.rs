// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Type aliases for common types used all over the code base.

/// Every image is handled as 8 bits RGBA, whatever its color type on disk.
pub type Img = image::RgbaImage;

/// A single (R, G, B, A) pixel.
pub type Pixel = image::Rgba<u8>;

/// Width and height of an image.
pub type Size = (u32, u32);

/// Opaque black, written over the bottom row.
pub const BLACK: Pixel = image::Rgba([0, 0, 0, 255]);
