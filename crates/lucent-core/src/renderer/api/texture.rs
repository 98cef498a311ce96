// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines data structures related to GPU texture resources.

use crate::math::{Extent3D, Origin3D};
use std::borrow::Cow;

/// The format of the texels in a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// One 8-bit normalized unsigned channel.
    R8Unorm,
    /// Four 8-bit normalized unsigned channels (RGBA order).
    Rgba8Unorm,
    /// Four 8-bit normalized unsigned channels with sRGB-encoded color.
    Rgba8UnormSrgb,
    /// Four 8-bit normalized unsigned channels (BGRA order).
    Bgra8Unorm,
    /// Four 16-bit float channels.
    Rgba16Float,
    /// Four 32-bit float channels.
    Rgba32Float,
    /// One 32-bit float depth channel.
    Depth32Float,
}

impl TextureFormat {
    /// Returns the size of one texel in bytes.
    pub fn bytes_per_texel(self) -> u32 {
        match self {
            TextureFormat::R8Unorm => 1,
            TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => 4,
            TextureFormat::Bgra8Unorm => 4,
            TextureFormat::Rgba16Float => 8,
            TextureFormat::Rgba32Float => 16,
            TextureFormat::Depth32Float => 4,
        }
    }
}

/// A descriptor used to create a [`TextureHandle`].
#[derive(Debug, Clone)]
pub struct TextureDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The dimensions (width, height, depth/layers) of the texture.
    pub extent: Extent3D,
    /// The number of mipmap levels for the texture.
    pub mip_level_count: u32,
    /// The format of the texels in the texture.
    pub format: TextureFormat,
}

impl TextureDescriptor<'_> {
    /// Returns the byte size of the base mip level, tightly packed row-major.
    pub fn base_level_byte_size(&self) -> u64 {
        self.extent.texel_count() * u64::from(self.format.bytes_per_texel())
    }
}

/// A sub-region of a texture, for partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureRegion {
    /// The corner of the region closest to the texture origin.
    pub origin: Origin3D,
    /// The size of the region in texels.
    pub extent: Extent3D,
}

impl TextureRegion {
    /// Returns whether the region lies fully within a texture of `bounds` size.
    ///
    /// Arithmetic is widened to `u64` so corner coordinates near `u32::MAX`
    /// cannot wrap.
    pub fn fits_within(&self, bounds: Extent3D) -> bool {
        let end_x = u64::from(self.origin.x) + u64::from(self.extent.width);
        let end_y = u64::from(self.origin.y) + u64::from(self.extent.height);
        let end_z = u64::from(self.origin.z) + u64::from(self.extent.depth_or_array_layers);
        end_x <= u64::from(bounds.width)
            && end_y <= u64::from(bounds.height)
            && end_z <= u64::from(bounds.depth_or_array_layers)
    }

    /// Returns the byte size of the region's data, tightly packed row-major.
    pub fn byte_size(&self, format: TextureFormat) -> u64 {
        self.extent.texel_count() * u64::from(format.bytes_per_texel())
    }
}

/// An opaque handle to a GPU texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);
