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

//! Defines data structures related to GPU buffer resources.

use std::borrow::Cow;

/// The role a buffer plays in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferType {
    /// Holds per-vertex data consumed by the input assembler.
    Vertex,
    /// Holds vertex indices.
    Index,
    /// Holds shader constants (uniform data).
    Constant,
    /// Holds structured elements read from shaders.
    Structured,
    /// Holds elements with unordered (read/write) shader access.
    UnorderedAccess,
}

/// How often the buffer's contents are expected to change.
///
/// This is a placement hint for the backend, not an enforced contract:
/// `Static` buffers may still be updated, at a performance cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferUsage {
    /// Written rarely, read often. The backend may place it in GPU-only memory.
    #[default]
    Static,
    /// Rewritten frequently (per frame or more).
    Dynamic,
}

/// The memory class a buffer is allocated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferMemoryType {
    /// GPU-local memory. Not CPU-mappable.
    #[default]
    Default,
    /// CPU-writable staging memory for uploads to the GPU.
    Upload,
    /// CPU-readable memory for results copied back from the GPU.
    Readback,
}

/// The access requested when mapping a buffer into CPU address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapType {
    /// Map for reading.
    Read,
    /// Map for writing.
    Write,
}

impl BufferMemoryType {
    /// Returns whether a map with the given access is valid for this memory class.
    ///
    /// `Upload` memory maps for reading or writing, `Readback` memory maps for
    /// reading only, and `Default` memory never maps.
    pub fn allows(self, access: MapType) -> bool {
        match (self, access) {
            (BufferMemoryType::Upload, _) => true,
            (BufferMemoryType::Readback, MapType::Read) => true,
            (BufferMemoryType::Readback, MapType::Write) => false,
            (BufferMemoryType::Default, _) => false,
        }
    }
}

/// A descriptor used to create a [`BufferHandle`].
#[derive(Debug, Clone)]
pub struct BufferDescriptor<'a> {
    /// An optional debug label for the buffer.
    pub label: Option<Cow<'a, str>>,
    /// The total size of the buffer in bytes.
    pub size: u64,
    /// The role the buffer plays in the pipeline.
    pub buffer_type: BufferType,
    /// How often the contents are expected to change.
    pub usage: BufferUsage,
    /// The memory class to allocate from.
    pub memory: BufferMemoryType,
}

/// An opaque handle to a GPU buffer resource.
///
/// Returned by [`Renderer::create_buffer`](crate::renderer::Renderer::create_buffer)
/// and used to reference the buffer in all subsequent operations. Handles are
/// unique among live buffers of one renderer instance and carry no meaning
/// outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn map_access_matrix() {
        assert!(BufferMemoryType::Upload.allows(MapType::Read));
        assert!(BufferMemoryType::Upload.allows(MapType::Write));
        assert!(BufferMemoryType::Readback.allows(MapType::Read));
        assert!(!BufferMemoryType::Readback.allows(MapType::Write));
        assert!(!BufferMemoryType::Default.allows(MapType::Read));
        assert!(!BufferMemoryType::Default.allows(MapType::Write));
    }

    #[test]
    fn handles_are_usable_as_map_keys() {
        let mut sizes: HashMap<BufferHandle, u64> = HashMap::new();
        sizes.insert(BufferHandle(1), 256);
        sizes.insert(BufferHandle(2), 512);
        assert_eq!(sizes.get(&BufferHandle(1)), Some(&256));
        assert_ne!(BufferHandle(1), BufferHandle(2));
    }
}
