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

use lucent_core::math::Extent3D;
use lucent_core::renderer::api::buffer::{
    BufferDescriptor, BufferHandle, BufferMemoryType, MapType,
};
use lucent_core::renderer::api::shader::{ShaderDescriptor, ShaderHandle, ShaderStage};
use lucent_core::renderer::api::texture::{
    TextureDescriptor, TextureFormat, TextureHandle, TextureRegion,
};
use lucent_core::renderer::error::{ResourceError, ResourceKind};
use std::collections::HashMap;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy)]
struct MapRange {
    offset: u64,
    len: u64,
    access: MapType,
}

#[derive(Debug)]
struct BufferEntry {
    label: Option<String>,
    memory: BufferMemoryType,
    data: Vec<u8>,
    mapped: Option<MapRange>,
}

#[derive(Debug)]
struct TextureEntry {
    label: Option<String>,
    extent: Extent3D,
    format: TextureFormat,
    // Base mip level only, tightly packed row-major.
    data: Vec<u8>,
}

#[derive(Debug)]
#[allow(dead_code)]
enum ShaderPayload {
    Source(String),
    Binary(Vec<u8>),
}

#[derive(Debug)]
#[allow(dead_code)]
struct ShaderEntry {
    label: Option<String>,
    stage: ShaderStage,
    entry_point: String,
    payload: ShaderPayload,
}

/// CPU-side resource tables for the null backend.
///
/// Buffers are byte-accurate: updates, maps, and reads operate on real
/// memory, so resource tests observe actual effects rather than mocks.
/// Handles are generated from atomic counters starting at 1; a raw value of 0
/// is never live.
#[derive(Debug)]
pub(crate) struct NullDevice {
    buffers: Mutex<HashMap<BufferHandle, BufferEntry>>,
    textures: Mutex<HashMap<TextureHandle, TextureEntry>>,
    shaders: Mutex<HashMap<ShaderHandle, ShaderEntry>>,
    next_buffer_id: AtomicU64,
    next_texture_id: AtomicU64,
    next_shader_id: AtomicU64,
}

fn check_range(
    kind: ResourceKind,
    raw: u64,
    size: u64,
    offset: u64,
    len: u64,
) -> Result<(), ResourceError> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(()),
        _ => Err(ResourceError::OutOfBounds {
            kind,
            raw,
            details: format!("offset {offset} + len {len} exceeds size {size}"),
        }),
    }
}

fn addressable(kind: ResourceKind, size: u64) -> Result<usize, ResourceError> {
    usize::try_from(size).map_err(|_| ResourceError::CreationFailed {
        kind,
        details: format!("size {size} exceeds addressable memory"),
    })
}

impl NullDevice {
    pub(crate) fn new() -> Self {
        Self {
            buffers: Mutex::new(HashMap::new()),
            textures: Mutex::new(HashMap::new()),
            shaders: Mutex::new(HashMap::new()),
            next_buffer_id: AtomicU64::new(1),
            next_texture_id: AtomicU64::new(1),
            next_shader_id: AtomicU64::new(1),
        }
    }

    fn generate_buffer_id(&self) -> BufferHandle {
        BufferHandle(self.next_buffer_id.fetch_add(1, Ordering::Relaxed))
    }

    fn generate_texture_id(&self) -> TextureHandle {
        TextureHandle(self.next_texture_id.fetch_add(1, Ordering::Relaxed))
    }

    fn generate_shader_id(&self) -> ShaderHandle {
        ShaderHandle(self.next_shader_id.fetch_add(1, Ordering::Relaxed))
    }

    fn lock_buffers(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<BufferHandle, BufferEntry>>, ResourceError> {
        self.buffers
            .lock()
            .map_err(|e| ResourceError::Backend(format!("Mutex poisoned (buffers): {e}")))
    }

    fn lock_textures(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<TextureHandle, TextureEntry>>, ResourceError> {
        self.textures
            .lock()
            .map_err(|e| ResourceError::Backend(format!("Mutex poisoned (textures): {e}")))
    }

    fn lock_shaders(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ShaderHandle, ShaderEntry>>, ResourceError> {
        self.shaders
            .lock()
            .map_err(|e| ResourceError::Backend(format!("Mutex poisoned (shaders): {e}")))
    }

    // --- Buffers ---

    pub(crate) fn create_buffer(
        &self,
        descriptor: &BufferDescriptor,
    ) -> Result<BufferHandle, ResourceError> {
        if descriptor.size == 0 {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Buffer,
                details: "buffer size must be nonzero".to_string(),
            });
        }
        let byte_len = addressable(ResourceKind::Buffer, descriptor.size)?;

        let handle = self.generate_buffer_id();
        self.lock_buffers()?.insert(
            handle,
            BufferEntry {
                label: descriptor.label.as_deref().map(str::to_owned),
                memory: descriptor.memory,
                data: vec![0; byte_len],
                mapped: None,
            },
        );
        log::debug!(
            "NullDevice: created {:?} buffer {:?} ({} bytes, {:?}, label {:?}).",
            descriptor.buffer_type,
            handle,
            descriptor.size,
            descriptor.memory,
            descriptor.label
        );
        Ok(handle)
    }

    pub(crate) fn create_buffer_with_data(
        &self,
        descriptor: &BufferDescriptor,
        data: &[u8],
    ) -> Result<BufferHandle, ResourceError> {
        if data.len() as u64 > descriptor.size {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Buffer,
                details: format!(
                    "initial data ({} bytes) exceeds buffer size ({} bytes)",
                    data.len(),
                    descriptor.size
                ),
            });
        }
        let handle = self.create_buffer(descriptor)?;
        let mut buffers = self.lock_buffers()?;
        if let Some(entry) = buffers.get_mut(&handle) {
            entry.data[..data.len()].copy_from_slice(data);
        }
        Ok(handle)
    }

    pub(crate) fn update_buffer(
        &self,
        handle: BufferHandle,
        data: &[u8],
        offset: u64,
    ) -> Result<(), ResourceError> {
        let mut buffers = self.lock_buffers()?;
        let entry = buffers
            .get_mut(&handle)
            .ok_or(ResourceError::InvalidHandle {
                kind: ResourceKind::Buffer,
                raw: handle.0,
            })?;
        if entry.mapped.is_some() {
            return Err(ResourceError::CurrentlyMapped { raw: handle.0 });
        }
        if entry.memory == BufferMemoryType::Readback {
            return Err(ResourceError::InvalidMapAccess {
                memory: BufferMemoryType::Readback,
                requested: MapType::Write,
            });
        }
        check_range(
            ResourceKind::Buffer,
            handle.0,
            entry.data.len() as u64,
            offset,
            data.len() as u64,
        )?;
        let start = offset as usize;
        entry.data[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    pub(crate) fn read_buffer(
        &self,
        handle: BufferHandle,
        len: u64,
        offset: u64,
    ) -> Result<Vec<u8>, ResourceError> {
        let buffers = self.lock_buffers()?;
        let entry = buffers.get(&handle).ok_or(ResourceError::InvalidHandle {
            kind: ResourceKind::Buffer,
            raw: handle.0,
        })?;
        if entry.mapped.is_some() {
            return Err(ResourceError::CurrentlyMapped { raw: handle.0 });
        }
        if entry.memory == BufferMemoryType::Default {
            return Err(ResourceError::InvalidMapAccess {
                memory: BufferMemoryType::Default,
                requested: MapType::Read,
            });
        }
        check_range(
            ResourceKind::Buffer,
            handle.0,
            entry.data.len() as u64,
            offset,
            len,
        )?;
        let start = offset as usize;
        Ok(entry.data[start..start + len as usize].to_vec())
    }

    pub(crate) fn map_buffer(
        &self,
        handle: BufferHandle,
        offset: u64,
        len: u64,
        access: MapType,
    ) -> Result<NonNull<u8>, ResourceError> {
        let mut buffers = self.lock_buffers()?;
        let entry = buffers
            .get_mut(&handle)
            .ok_or(ResourceError::InvalidHandle {
                kind: ResourceKind::Buffer,
                raw: handle.0,
            })?;
        if entry.mapped.is_some() {
            return Err(ResourceError::AlreadyMapped { raw: handle.0 });
        }
        if !entry.memory.allows(access) {
            return Err(ResourceError::InvalidMapAccess {
                memory: entry.memory,
                requested: access,
            });
        }
        check_range(
            ResourceKind::Buffer,
            handle.0,
            entry.data.len() as u64,
            offset,
            len,
        )?;

        // The pointer targets the Vec's heap allocation. It stays valid until
        // unmap because every operation that could resize or free that
        // allocation is rejected with CurrentlyMapped while the map is open.
        let ptr = unsafe { entry.data.as_mut_ptr().add(offset as usize) };
        let ptr = NonNull::new(ptr).ok_or_else(|| {
            ResourceError::Backend("mapped pointer was null".to_string())
        })?;
        entry.mapped = Some(MapRange {
            offset,
            len,
            access,
        });
        log::trace!(
            "NullDevice: mapped buffer {:?} [{}..{}] for {:?}.",
            handle,
            offset,
            offset + len,
            access
        );
        Ok(ptr)
    }

    pub(crate) fn unmap_buffer(&self, handle: BufferHandle) -> Result<(), ResourceError> {
        let mut buffers = self.lock_buffers()?;
        let entry = buffers
            .get_mut(&handle)
            .ok_or(ResourceError::InvalidHandle {
                kind: ResourceKind::Buffer,
                raw: handle.0,
            })?;
        if entry.mapped.take().is_none() {
            return Err(ResourceError::NotMapped { raw: handle.0 });
        }
        Ok(())
    }

    pub(crate) fn destroy_buffer(&self, handle: BufferHandle) -> Result<(), ResourceError> {
        let mut buffers = self.lock_buffers()?;
        let entry = buffers.get(&handle).ok_or(ResourceError::InvalidHandle {
            kind: ResourceKind::Buffer,
            raw: handle.0,
        })?;
        if entry.mapped.is_some() {
            return Err(ResourceError::CurrentlyMapped { raw: handle.0 });
        }
        let removed = buffers.remove(&handle);
        if let Some(entry) = removed {
            log::debug!(
                "NullDevice: destroyed buffer {:?} (label {:?}).",
                handle,
                entry.label
            );
        }
        Ok(())
    }

    // --- Textures ---

    pub(crate) fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        initial_data: Option<&[u8]>,
    ) -> Result<TextureHandle, ResourceError> {
        let extent = descriptor.extent;
        if extent.width == 0 || extent.height == 0 || extent.depth_or_array_layers == 0 {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Texture,
                details: format!("extent {extent:?} has a zero dimension"),
            });
        }
        let max_mips = 32 - extent.width.max(extent.height).leading_zeros();
        if descriptor.mip_level_count == 0 || descriptor.mip_level_count > max_mips {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Texture,
                details: format!(
                    "mip level count {} is outside 1..={max_mips} for extent {extent:?}",
                    descriptor.mip_level_count
                ),
            });
        }

        let byte_size = descriptor.base_level_byte_size();
        let byte_len = addressable(ResourceKind::Texture, byte_size)?;
        let data = match initial_data {
            Some(bytes) => {
                if bytes.len() as u64 != byte_size {
                    return Err(ResourceError::CreationFailed {
                        kind: ResourceKind::Texture,
                        details: format!(
                            "initial data is {} bytes but the base level needs {byte_size}",
                            bytes.len()
                        ),
                    });
                }
                bytes.to_vec()
            }
            None => vec![0; byte_len],
        };

        let handle = self.generate_texture_id();
        self.lock_textures()?.insert(
            handle,
            TextureEntry {
                label: descriptor.label.as_deref().map(str::to_owned),
                extent,
                format: descriptor.format,
                data,
            },
        );
        log::debug!(
            "NullDevice: created texture {:?} ({:?}, {:?}, label {:?}).",
            handle,
            extent,
            descriptor.format,
            descriptor.label
        );
        Ok(handle)
    }

    pub(crate) fn update_texture(
        &self,
        handle: TextureHandle,
        data: &[u8],
        region: &TextureRegion,
    ) -> Result<(), ResourceError> {
        let mut textures = self.lock_textures()?;
        let entry = textures
            .get_mut(&handle)
            .ok_or(ResourceError::InvalidHandle {
                kind: ResourceKind::Texture,
                raw: handle.0,
            })?;
        if !region.fits_within(entry.extent) {
            return Err(ResourceError::OutOfBounds {
                kind: ResourceKind::Texture,
                raw: handle.0,
                details: format!(
                    "region {region:?} does not fit within extent {:?}",
                    entry.extent
                ),
            });
        }
        let expected = region.byte_size(entry.format);
        if data.len() as u64 != expected {
            return Err(ResourceError::OutOfBounds {
                kind: ResourceKind::Texture,
                raw: handle.0,
                details: format!(
                    "data is {} bytes but the region needs {expected}",
                    data.len()
                ),
            });
        }

        let bpt = entry.format.bytes_per_texel() as usize;
        let tex_w = entry.extent.width as usize;
        let tex_h = entry.extent.height as usize;
        let row_len = region.extent.width as usize * bpt;
        for z in 0..region.extent.depth_or_array_layers as usize {
            for y in 0..region.extent.height as usize {
                let dst_texel = ((region.origin.z as usize + z) * tex_h
                    + (region.origin.y as usize + y))
                    * tex_w
                    + region.origin.x as usize;
                let dst = dst_texel * bpt;
                let src = (z * region.extent.height as usize + y) * row_len;
                entry.data[dst..dst + row_len].copy_from_slice(&data[src..src + row_len]);
            }
        }
        Ok(())
    }

    pub(crate) fn destroy_texture(&self, handle: TextureHandle) -> Result<(), ResourceError> {
        let mut textures = self.lock_textures()?;
        if textures.remove(&handle).is_none() {
            return Err(ResourceError::InvalidHandle {
                kind: ResourceKind::Texture,
                raw: handle.0,
            });
        }
        log::debug!("NullDevice: destroyed texture {handle:?}.");
        Ok(())
    }

    // --- Shaders ---

    pub(crate) fn create_shader_from_source(
        &self,
        descriptor: &ShaderDescriptor,
        source: &str,
    ) -> Result<ShaderHandle, ResourceError> {
        if source.trim().is_empty() {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Shader,
                details: "shader source is empty".to_string(),
            });
        }
        self.insert_shader(descriptor, ShaderPayload::Source(source.to_string()))
    }

    pub(crate) fn create_shader_from_binary(
        &self,
        descriptor: &ShaderDescriptor,
        bytecode: &[u8],
    ) -> Result<ShaderHandle, ResourceError> {
        if bytecode.is_empty() {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Shader,
                details: "shader bytecode is empty".to_string(),
            });
        }
        if bytecode.len() % 4 != 0 {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Shader,
                details: format!(
                    "bytecode length {} is not a multiple of 4",
                    bytecode.len()
                ),
            });
        }
        self.insert_shader(descriptor, ShaderPayload::Binary(bytecode.to_vec()))
    }

    fn insert_shader(
        &self,
        descriptor: &ShaderDescriptor,
        payload: ShaderPayload,
    ) -> Result<ShaderHandle, ResourceError> {
        if descriptor.entry_point.is_empty() {
            return Err(ResourceError::CreationFailed {
                kind: ResourceKind::Shader,
                details: "shader entry point is empty".to_string(),
            });
        }
        let handle = self.generate_shader_id();
        self.lock_shaders()?.insert(
            handle,
            ShaderEntry {
                label: descriptor.label.as_deref().map(str::to_owned),
                stage: descriptor.stage,
                entry_point: descriptor.entry_point.to_string(),
                payload,
            },
        );
        log::debug!(
            "NullDevice: created {:?} shader {:?} (entry '{}', label {:?}).",
            descriptor.stage,
            handle,
            descriptor.entry_point,
            descriptor.label
        );
        Ok(handle)
    }

    pub(crate) fn destroy_shader(&self, handle: ShaderHandle) -> Result<(), ResourceError> {
        let mut shaders = self.lock_shaders()?;
        if shaders.remove(&handle).is_none() {
            return Err(ResourceError::InvalidHandle {
                kind: ResourceKind::Shader,
                raw: handle.0,
            });
        }
        log::debug!("NullDevice: destroyed shader {handle:?}.");
        Ok(())
    }

    // --- Bulk teardown ---

    /// Drops every live resource, mapped or not, and returns the counts
    /// (buffers, textures, shaders) that were released.
    pub(crate) fn clear_all(&self) -> (usize, usize, usize) {
        let buffers = match self.buffers.lock() {
            Ok(mut guard) => {
                let n = guard.len();
                guard.clear();
                n
            }
            Err(mut poisoned) => {
                let n = poisoned.get_mut().len();
                poisoned.get_mut().clear();
                n
            }
        };
        let textures = match self.textures.lock() {
            Ok(mut guard) => {
                let n = guard.len();
                guard.clear();
                n
            }
            Err(mut poisoned) => {
                let n = poisoned.get_mut().len();
                poisoned.get_mut().clear();
                n
            }
        };
        let shaders = match self.shaders.lock() {
            Ok(mut guard) => {
                let n = guard.len();
                guard.clear();
                n
            }
            Err(mut poisoned) => {
                let n = poisoned.get_mut().len();
                poisoned.get_mut().clear();
                n
            }
        };
        (buffers, textures, shaders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_core::math::Origin3D;
    use lucent_core::renderer::api::buffer::{BufferType, BufferUsage};
    use std::borrow::Cow;

    fn upload_descriptor(size: u64) -> BufferDescriptor<'static> {
        BufferDescriptor {
            label: Some(Cow::Borrowed("test-upload")),
            size,
            buffer_type: BufferType::Vertex,
            usage: BufferUsage::Dynamic,
            memory: BufferMemoryType::Upload,
        }
    }

    #[test]
    fn create_update_read_round_trip() {
        let device = NullDevice::new();
        let handle = device.create_buffer(&upload_descriptor(16)).unwrap();
        device.update_buffer(handle, &[7, 8, 9], 4).unwrap();

        let bytes = device.read_buffer(handle, 6, 2).unwrap();
        assert_eq!(bytes, vec![0, 0, 7, 8, 9, 0]);
    }

    #[test]
    fn out_of_bounds_update_leaves_contents_untouched() {
        let device = NullDevice::new();
        let handle = device
            .create_buffer_with_data(&upload_descriptor(4), &[1, 2, 3, 4])
            .unwrap();

        let err = device.update_buffer(handle, &[9; 5], 0).unwrap_err();
        assert!(matches!(err, ResourceError::OutOfBounds { .. }));
        assert_eq!(device.read_buffer(handle, 4, 0).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn static_default_buffers_reject_oversized_updates() {
        let device = NullDevice::new();
        let descriptor = BufferDescriptor {
            label: Some(Cow::Borrowed("static-vertices")),
            size: 1024,
            buffer_type: BufferType::Vertex,
            usage: BufferUsage::Static,
            memory: BufferMemoryType::Default,
        };
        let initial = vec![0x5A; 1024];
        let handle = device
            .create_buffer_with_data(&descriptor, &initial)
            .unwrap();

        let err = device.update_buffer(handle, &[0u8; 1025], 0).unwrap_err();
        assert!(matches!(err, ResourceError::OutOfBounds { .. }));

        // Default memory is not host-readable, so peek at the store directly.
        let buffers = device.lock_buffers().unwrap();
        assert_eq!(buffers[&handle].data, initial);
    }

    #[test]
    fn offset_near_u64_max_does_not_wrap() {
        let device = NullDevice::new();
        let handle = device.create_buffer(&upload_descriptor(16)).unwrap();
        let err = device.update_buffer(handle, &[1], u64::MAX).unwrap_err();
        assert!(matches!(err, ResourceError::OutOfBounds { .. }));
    }

    #[test]
    fn map_write_is_visible_after_unmap() {
        let device = NullDevice::new();
        let handle = device.create_buffer(&upload_descriptor(8)).unwrap();

        let ptr = device.map_buffer(handle, 2, 4, MapType::Write).unwrap();
        unsafe {
            std::ptr::write_bytes(ptr.as_ptr(), 0xAB, 4);
        }
        device.unmap_buffer(handle).unwrap();

        let bytes = device.read_buffer(handle, 8, 0).unwrap();
        assert_eq!(bytes, vec![0, 0, 0xAB, 0xAB, 0xAB, 0xAB, 0, 0]);
    }

    #[test]
    fn mapped_buffers_are_exclusive() {
        let device = NullDevice::new();
        let handle = device.create_buffer(&upload_descriptor(8)).unwrap();
        device.map_buffer(handle, 0, 8, MapType::Write).unwrap();

        assert!(matches!(
            device.map_buffer(handle, 0, 8, MapType::Write),
            Err(ResourceError::AlreadyMapped { .. })
        ));
        assert!(matches!(
            device.update_buffer(handle, &[1], 0),
            Err(ResourceError::CurrentlyMapped { .. })
        ));
        assert!(matches!(
            device.read_buffer(handle, 1, 0),
            Err(ResourceError::CurrentlyMapped { .. })
        ));
        assert!(matches!(
            device.destroy_buffer(handle),
            Err(ResourceError::CurrentlyMapped { .. })
        ));

        device.unmap_buffer(handle).unwrap();
        device.destroy_buffer(handle).unwrap();
    }

    #[test]
    fn map_access_respects_memory_type() {
        let device = NullDevice::new();
        let default_buffer = device
            .create_buffer(&BufferDescriptor {
                memory: BufferMemoryType::Default,
                ..upload_descriptor(8)
            })
            .unwrap();
        let readback_buffer = device
            .create_buffer(&BufferDescriptor {
                memory: BufferMemoryType::Readback,
                ..upload_descriptor(8)
            })
            .unwrap();

        assert!(matches!(
            device.map_buffer(default_buffer, 0, 8, MapType::Read),
            Err(ResourceError::InvalidMapAccess { .. })
        ));
        assert!(matches!(
            device.map_buffer(readback_buffer, 0, 8, MapType::Write),
            Err(ResourceError::InvalidMapAccess { .. })
        ));
        assert!(device
            .map_buffer(readback_buffer, 0, 8, MapType::Read)
            .is_ok());
    }

    #[test]
    fn unmap_without_map_fails() {
        let device = NullDevice::new();
        let handle = device.create_buffer(&upload_descriptor(8)).unwrap();
        assert!(matches!(
            device.unmap_buffer(handle),
            Err(ResourceError::NotMapped { .. })
        ));
    }

    #[test]
    fn zero_sized_buffers_are_rejected() {
        let device = NullDevice::new();
        let err = device.create_buffer(&upload_descriptor(0)).unwrap_err();
        assert!(matches!(err, ResourceError::CreationFailed { .. }));
    }

    fn small_texture() -> TextureDescriptor<'static> {
        TextureDescriptor {
            label: None,
            extent: Extent3D {
                width: 4,
                height: 4,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            format: TextureFormat::R8Unorm,
        }
    }

    #[test]
    fn texture_region_update_writes_the_right_texels() {
        let device = NullDevice::new();
        let handle = device.create_texture(&small_texture(), None).unwrap();

        let region = TextureRegion {
            origin: Origin3D { x: 1, y: 1, z: 0 },
            extent: Extent3D {
                width: 2,
                height: 2,
                depth_or_array_layers: 1,
            },
        };
        device.update_texture(handle, &[9, 9, 9, 9], &region).unwrap();

        let textures = device.textures.lock().unwrap();
        let data = &textures.get(&handle).unwrap().data;
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0,
            0, 9, 9, 0,
            0, 9, 9, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(*data, expected);
    }

    #[test]
    fn texture_region_outside_extent_is_rejected() {
        let device = NullDevice::new();
        let handle = device.create_texture(&small_texture(), None).unwrap();
        let region = TextureRegion {
            origin: Origin3D { x: 3, y: 0, z: 0 },
            extent: Extent3D {
                width: 2,
                height: 1,
                depth_or_array_layers: 1,
            },
        };
        assert!(matches!(
            device.update_texture(handle, &[1, 2], &region),
            Err(ResourceError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn texture_initial_data_must_match_base_level() {
        let device = NullDevice::new();
        let err = device
            .create_texture(&small_texture(), Some(&[0; 15]))
            .unwrap_err();
        assert!(matches!(err, ResourceError::CreationFailed { .. }));

        assert!(device
            .create_texture(&small_texture(), Some(&[0; 16]))
            .is_ok());
    }

    #[test]
    fn excessive_mip_counts_are_rejected() {
        let device = NullDevice::new();
        let descriptor = TextureDescriptor {
            mip_level_count: 4,
            ..small_texture()
        };
        let err = device.create_texture(&descriptor, None).unwrap_err();
        assert!(matches!(err, ResourceError::CreationFailed { .. }));

        // 4x4 supports exactly 3 levels.
        let descriptor = TextureDescriptor {
            mip_level_count: 3,
            ..small_texture()
        };
        assert!(device.create_texture(&descriptor, None).is_ok());
    }

    fn vertex_shader() -> ShaderDescriptor<'static> {
        ShaderDescriptor {
            label: Some(Cow::Borrowed("test-vs")),
            stage: ShaderStage::Vertex,
            entry_point: Cow::Borrowed("vs_main"),
        }
    }

    #[test]
    fn empty_shader_source_is_rejected() {
        let device = NullDevice::new();
        let err = device
            .create_shader_from_source(&vertex_shader(), "   \n")
            .unwrap_err();
        assert!(matches!(err, ResourceError::CreationFailed { .. }));
    }

    #[test]
    fn misaligned_bytecode_is_rejected() {
        let device = NullDevice::new();
        let err = device
            .create_shader_from_binary(&vertex_shader(), &[1, 2, 3])
            .unwrap_err();
        assert!(matches!(err, ResourceError::CreationFailed { .. }));
        assert!(device
            .create_shader_from_binary(&vertex_shader(), &[1, 2, 3, 4])
            .is_ok());
    }

    #[test]
    fn clear_all_reports_released_counts() {
        let device = NullDevice::new();
        device.create_buffer(&upload_descriptor(8)).unwrap();
        device.create_buffer(&upload_descriptor(8)).unwrap();
        device.create_texture(&small_texture(), None).unwrap();
        device
            .create_shader_from_source(&vertex_shader(), "void main() {}")
            .unwrap();

        assert_eq!(device.clear_all(), (2, 1, 1));
        assert_eq!(device.clear_all(), (0, 0, 0));
    }

    #[test]
    fn handles_are_unique_across_kinds_of_lifetime() {
        let device = NullDevice::new();
        let first = device.create_buffer(&upload_descriptor(8)).unwrap();
        device.destroy_buffer(first).unwrap();
        let second = device.create_buffer(&upload_descriptor(8)).unwrap();
        assert_ne!(first, second);
        assert!(matches!(
            device.read_buffer(first, 1, 0),
            Err(ResourceError::InvalidHandle { .. })
        ));
    }
}
