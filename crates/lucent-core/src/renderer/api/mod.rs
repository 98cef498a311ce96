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

//! Backend-agnostic rendering API.
//!
//! Organized into several logical sub-modules:
//!
//! - **[`buffer`]**, **[`texture`]**, **[`shader`]**: GPU handles and their
//!   descriptors.
//! - **[`settings`]**: The seven runtime settings groups.
//! - **[`hardware`]**: Adapter, output, and display-mode records.
//! - **[`profiling`]**: GPU timing passes.
//! - **[`stats`]**: Per-frame performance statistics.
//! - **[`primitives`]**: Byte-layout types shared with shaders.

pub mod buffer;
pub mod hardware;
pub mod primitives;
pub mod profiling;
pub mod settings;
pub mod shader;
pub mod stats;
pub mod texture;

pub use self::buffer::{
    BufferDescriptor, BufferHandle, BufferMemoryType, BufferType, BufferUsage, MapType,
};
pub use self::hardware::{
    AdapterDesc, DisplayMode, GraphicsBackendType, OutputDesc, RefreshRate, RendererDeviceType,
};
pub use self::primitives::{ObjectConstants, Vertex};
pub use self::profiling::GpuTimingPass;
pub use self::settings::{
    AntiAliasingMode, AntiAliasingSettings, DepthOfFieldParams, DisplaySettings,
    LightingSettings, PerformanceSettings, PostProcessingSettings, QualityTier, ScreenMode,
    ShadowSettings, TextureSettings,
};
pub use self::shader::{ShaderDescriptor, ShaderHandle, ShaderStage};
pub use self::stats::FrameStats;
pub use self::texture::{TextureDescriptor, TextureFormat, TextureHandle, TextureRegion};
