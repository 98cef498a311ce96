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

//! Byte-layout types shared between the CPU and shaders.
//!
//! Everything here is `#[repr(C)]` and [`bytemuck::Pod`], so slices of these
//! types cast directly to the byte slices the buffer operations take.

use crate::math::{LinearRgba, Mat4, Vec3};

/// One vertex as laid out in a vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: Vec3,
    /// Per-vertex color.
    pub color: LinearRgba,
}

/// Per-object shader constants as laid out in a constant buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectConstants {
    /// The combined world-view-projection matrix.
    pub world_view_proj: Mat4,
}

impl Default for ObjectConstants {
    fn default() -> Self {
        Self {
            world_view_proj: Mat4::IDENTITY,
        }
    }
}
