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

//! Adapter, output, and display-mode records returned by hardware queries.

/// The graphics API a backend drives an adapter through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphicsBackendType {
    /// The Vulkan API.
    Vulkan,
    /// Apple's Metal API.
    Metal,
    /// Direct3D 12.
    Dx12,
    /// Direct3D 11.
    Dx11,
    /// OpenGL or OpenGL ES.
    OpenGL,
    /// The WebGPU API.
    WebGpu,
    /// The CPU-side reference backend used for tests and headless runs.
    Null,
    /// The backend could not be determined.
    #[default]
    Unknown,
}

/// The physical type of a graphics adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererDeviceType {
    /// A GPU integrated with the CPU or its package.
    IntegratedGpu,
    /// A discrete GPU with its own memory.
    DiscreteGpu,
    /// A GPU virtualized by a hypervisor.
    VirtualGpu,
    /// Software rasterization on the CPU.
    Cpu,
    /// The device type could not be determined.
    #[default]
    Unknown,
}

/// Backend-agnostic information about one graphics adapter.
///
/// `local_id` is an ordinal assigned by the enumerating renderer instance; it
/// is stable for the lifetime of that instance and carries no meaning outside
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterDesc {
    /// The name of the adapter (e.g., "NVIDIA GeForce RTX 4090").
    pub name: String,
    /// The PCI vendor ID.
    pub vendor_id: u32,
    /// The PCI device ID.
    pub device_id: u32,
    /// The PCI subsystem ID.
    pub subsys_id: u32,
    /// The PCI revision number.
    pub revision: u32,
    /// Dedicated video memory in bytes.
    pub video_memory: u64,
    /// System memory shared with the adapter, in bytes.
    pub shared_memory: u64,
    /// The enumerating instance's ordinal for this adapter.
    pub local_id: u32,
    /// The physical type of the adapter.
    pub device_type: RendererDeviceType,
    /// The graphics API backend this adapter is associated with.
    pub backend_type: GraphicsBackendType,
}

/// One output (monitor) attached to an adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDesc {
    /// The name of the output (e.g., `\\.\DISPLAY1`).
    pub name: String,
    /// The width of the output's desktop coordinates in pixels.
    pub width: u32,
    /// The height of the output's desktop coordinates in pixels.
    pub height: u32,
    /// The enumerating instance's ordinal for this output.
    pub local_id: u32,
}

/// A refresh rate expressed as an exact rational, as display hardware reports it.
///
/// Common video rates are not integers (59.94 Hz is 60000/1001), so the
/// numerator and denominator are preserved rather than rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RefreshRate {
    /// The numerator in Hz.
    pub numerator: u32,
    /// The denominator. A zero denominator denotes an unknown rate.
    pub denominator: u32,
}

impl RefreshRate {
    /// Returns the rate in Hz, or `0.0` when the denominator is zero.
    pub fn as_hz(self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

/// One display mode supported by an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayMode {
    /// The mode width in pixels.
    pub width: u32,
    /// The mode height in pixels.
    pub height: u32,
    /// The mode's refresh rate.
    pub refresh_rate: RefreshRate,
}
