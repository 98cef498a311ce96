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

use crate::platform::DisplayTarget;
use crate::renderer::api::*;
use crate::renderer::error::RenderError;
use std::fmt::Debug;
use std::ptr::NonNull;

/// The full contract between the application and a rendering backend.
///
/// A renderer moves through three lifecycle states: it starts uninitialized,
/// [`initialize`](Self::initialize) moves it to initialized, and
/// [`shutdown`](Self::shutdown) moves it to destroyed. Every operation except
/// `initialize`, the `init_*_settings` family, and the hardware queries
/// requires the initialized state and reports
/// [`RenderError::NotInitialized`] otherwise. A destroyed renderer cannot be
/// revived; create a new instance instead.
///
/// Resource methods take `&self`: implementations guard their tables
/// internally so resources can be created from worker threads while the
/// owning thread drives the frame loop.
pub trait Renderer: Send + Sync + Debug + 'static {
    // --- Lifecycle ---

    /// Brings the backend up against the given display target.
    ///
    /// ## Arguments
    /// * `target` - The window the backend will present into. It must still
    ///   be live.
    /// ## Errors
    /// * [`RenderError::AlreadyInitialized`] - If called twice.
    /// * [`RenderError::InitializationFailed`] - If the backend cannot start,
    ///   including on a renderer that was already shut down.
    fn initialize(&mut self, target: DisplayTarget) -> Result<(), RenderError>;

    /// Returns whether the renderer is currently in the initialized state.
    fn is_initialized(&self) -> bool;

    /// Tears the backend down and invalidates every outstanding handle.
    ///
    /// After a successful shutdown all buffer, texture, and shader handles
    /// from this instance report [`ResourceError::InvalidHandle`] and the
    /// renderer itself reports [`RenderError::NotInitialized`].
    ///
    /// [`ResourceError::InvalidHandle`]: crate::renderer::error::ResourceError::InvalidHandle
    fn shutdown(&mut self) -> Result<(), RenderError>;

    // --- Buffers ---

    /// Creates a new GPU buffer.
    ///
    /// ## Arguments
    /// * `descriptor` - Size, role, usage hint, and memory class.
    /// ## Returns
    /// A handle unique among this instance's live buffers.
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferHandle, RenderError>;

    /// Creates a new GPU buffer and initializes it with the provided data.
    ///
    /// `data` must be at most `descriptor.size` bytes; the remainder, if any,
    /// is zeroed.
    fn create_buffer_with_data(
        &self,
        descriptor: &BufferDescriptor,
        data: &[u8],
    ) -> Result<BufferHandle, RenderError>;

    /// Writes `data` into the buffer starting at `offset`.
    ///
    /// ## Errors
    /// * `OutOfBounds` - If `offset + data.len()` exceeds the buffer size.
    ///   The buffer contents are untouched in that case.
    /// * `CurrentlyMapped` - If the buffer is mapped.
    fn update_buffer(
        &self,
        handle: BufferHandle,
        data: &[u8],
        offset: u64,
    ) -> Result<(), RenderError>;

    /// Reads `len` bytes from the buffer starting at `offset`.
    ///
    /// Only `Upload` and `Readback` memory is CPU-readable; reading `Default`
    /// memory reports `InvalidMapAccess`.
    fn read_buffer(
        &self,
        handle: BufferHandle,
        len: u64,
        offset: u64,
    ) -> Result<Vec<u8>, RenderError>;

    /// Maps a range of the buffer into CPU address space.
    ///
    /// The returned pointer stays valid until [`unmap_buffer`](Self::unmap_buffer).
    /// While mapped, the buffer rejects `update_buffer`, `read_buffer`, and
    /// `destroy_buffer` with `CurrentlyMapped`.
    ///
    /// ## Arguments
    /// * `access` - Must be permitted by the buffer's memory class; see
    ///   [`BufferMemoryType::allows`].
    /// ## Returns
    /// A pointer to the first byte of the mapped range.
    fn map_buffer(
        &self,
        handle: BufferHandle,
        offset: u64,
        len: u64,
        access: MapType,
    ) -> Result<NonNull<u8>, RenderError>;

    /// Unmaps a previously mapped buffer, making writes visible to the GPU.
    fn unmap_buffer(&self, handle: BufferHandle) -> Result<(), RenderError>;

    /// Destroys a GPU buffer. The handle is invalid afterwards.
    fn destroy_buffer(&self, handle: BufferHandle) -> Result<(), RenderError>;

    // --- Textures ---

    /// Creates a new GPU texture, optionally filled with initial data.
    ///
    /// ## Arguments
    /// * `initial_data` - Tightly packed row-major texels for the base mip
    ///   level. When present, its length must equal
    ///   [`TextureDescriptor::base_level_byte_size`].
    fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        initial_data: Option<&[u8]>,
    ) -> Result<TextureHandle, RenderError>;

    /// Writes texels into a sub-region of the texture's base mip level.
    ///
    /// ## Errors
    /// * `OutOfBounds` - If the region does not fit within the texture, with
    ///   the texture contents untouched.
    fn update_texture(
        &self,
        handle: TextureHandle,
        data: &[u8],
        region: &TextureRegion,
    ) -> Result<(), RenderError>;

    /// Destroys a GPU texture. The handle is invalid afterwards.
    fn destroy_texture(&self, handle: TextureHandle) -> Result<(), RenderError>;

    // --- Shaders ---

    /// Compiles a shader from source text.
    fn create_shader_from_source(
        &self,
        descriptor: &ShaderDescriptor,
        source: &str,
    ) -> Result<ShaderHandle, RenderError>;

    /// Creates a shader from precompiled bytecode.
    fn create_shader_from_binary(
        &self,
        descriptor: &ShaderDescriptor,
        bytecode: &[u8],
    ) -> Result<ShaderHandle, RenderError>;

    /// Destroys a shader. The handle is invalid afterwards.
    fn destroy_shader(&self, handle: ShaderHandle) -> Result<(), RenderError>;

    // --- Frame loop ---

    /// Records and submits the GPU work for one frame.
    fn render(&mut self) -> Result<(), RenderError>;

    /// Presents the most recently rendered frame to the display target.
    ///
    /// ## Errors
    /// * [`RenderError::PresentWithoutRender`] - If no `render` completed
    ///   since the last present. Nothing reaches the screen in that case.
    fn present(&mut self) -> Result<(), RenderError>;

    /// Blocks until the GPU has consumed every submitted command.
    ///
    /// This is the only operation that waits on the GPU; `render` and
    /// `present` only submit.
    fn flush_command_queue(&mut self) -> Result<(), RenderError>;

    /// Returns frame-rate statistics for the most recent one-second window.
    fn frame_stats(&self) -> FrameStats;

    // --- Settings ---
    //
    // Each group follows the same protocol: `init_*` stores the group before
    // initialization, `set_*` validates and applies it live, and the getter
    // returns the last applied value. Setters fail with
    // `SettingsError::Unsupported` instead of clamping, so a successful set
    // followed by a get returns exactly the value passed in.

    /// Stores display settings to apply during initialization.
    fn init_display_settings(&mut self, settings: DisplaySettings) -> Result<(), RenderError>;
    /// Validates and applies display settings on a running renderer.
    fn set_display_settings(&mut self, settings: DisplaySettings) -> Result<(), RenderError>;
    /// Returns the last applied display settings.
    fn display_settings(&self) -> DisplaySettings;

    /// Stores anti-aliasing settings to apply during initialization.
    fn init_anti_aliasing_settings(
        &mut self,
        settings: AntiAliasingSettings,
    ) -> Result<(), RenderError>;
    /// Validates and applies anti-aliasing settings on a running renderer.
    fn set_anti_aliasing_settings(
        &mut self,
        settings: AntiAliasingSettings,
    ) -> Result<(), RenderError>;
    /// Returns the last applied anti-aliasing settings.
    fn anti_aliasing_settings(&self) -> AntiAliasingSettings;

    /// Stores texture settings to apply during initialization.
    fn init_texture_settings(&mut self, settings: TextureSettings) -> Result<(), RenderError>;
    /// Validates and applies texture settings on a running renderer.
    fn set_texture_settings(&mut self, settings: TextureSettings) -> Result<(), RenderError>;
    /// Returns the last applied texture settings.
    fn texture_settings(&self) -> TextureSettings;

    /// Stores shadow settings to apply during initialization.
    fn init_shadow_settings(&mut self, settings: ShadowSettings) -> Result<(), RenderError>;
    /// Validates and applies shadow settings on a running renderer.
    fn set_shadow_settings(&mut self, settings: ShadowSettings) -> Result<(), RenderError>;
    /// Returns the last applied shadow settings.
    fn shadow_settings(&self) -> ShadowSettings;

    /// Stores lighting settings to apply during initialization.
    fn init_lighting_settings(&mut self, settings: LightingSettings) -> Result<(), RenderError>;
    /// Validates and applies lighting settings on a running renderer.
    fn set_lighting_settings(&mut self, settings: LightingSettings) -> Result<(), RenderError>;
    /// Returns the last applied lighting settings.
    fn lighting_settings(&self) -> LightingSettings;

    /// Stores post-processing settings to apply during initialization.
    fn init_post_processing_settings(
        &mut self,
        settings: PostProcessingSettings,
    ) -> Result<(), RenderError>;
    /// Validates and applies post-processing settings on a running renderer.
    fn set_post_processing_settings(
        &mut self,
        settings: PostProcessingSettings,
    ) -> Result<(), RenderError>;
    /// Returns the last applied post-processing settings.
    fn post_processing_settings(&self) -> PostProcessingSettings;

    /// Stores performance settings to apply during initialization.
    fn init_performance_settings(
        &mut self,
        settings: PerformanceSettings,
    ) -> Result<(), RenderError>;
    /// Validates and applies performance settings on a running renderer.
    fn set_performance_settings(
        &mut self,
        settings: PerformanceSettings,
    ) -> Result<(), RenderError>;
    /// Returns the last applied performance settings.
    fn performance_settings(&self) -> PerformanceSettings;

    // --- Hardware queries ---
    //
    // Queries are read-only, re-enumerate on every call, and are legal in any
    // state except destroyed: adapter choice precedes initialization in a real
    // startup sequence.

    /// Enumerates the graphics adapters visible to this backend.
    fn enumerate_adapters(&self) -> Result<Vec<AdapterDesc>, RenderError>;

    /// Enumerates the outputs attached to the given adapter.
    ///
    /// ## Errors
    /// * [`RenderError::UnknownAdapter`] - If `adapter.local_id` does not
    ///   name an adapter of this instance.
    fn enumerate_outputs(&self, adapter: &AdapterDesc) -> Result<Vec<OutputDesc>, RenderError>;

    /// Enumerates the display modes supported by the given output.
    ///
    /// ## Errors
    /// * [`RenderError::UnknownOutput`] - If `output.local_id` does not name
    ///   an output of this instance.
    fn enumerate_display_modes(&self, output: &OutputDesc)
        -> Result<Vec<DisplayMode>, RenderError>;

    /// Logs the full adapter topology: adapters and outputs at info level,
    /// individual display modes at debug level.
    fn log_display_adapters(&self) -> Result<(), RenderError> {
        for adapter in self.enumerate_adapters()? {
            log::info!(
                "Adapter {}: '{}' ({:?}, {:?}), {} MiB video / {} MiB shared",
                adapter.local_id,
                adapter.name,
                adapter.device_type,
                adapter.backend_type,
                adapter.video_memory / (1024 * 1024),
                adapter.shared_memory / (1024 * 1024)
            );
            for output in self.enumerate_outputs(&adapter)? {
                log::info!(
                    "  Output {}: '{}' ({}x{})",
                    output.local_id,
                    output.name,
                    output.width,
                    output.height
                );
                for mode in self.enumerate_display_modes(&output)? {
                    log::debug!(
                        "    Mode {}x{} @ {:.2} Hz",
                        mode.width,
                        mode.height,
                        mode.refresh_rate.as_hz()
                    );
                }
            }
        }
        Ok(())
    }

    // --- GPU profiling ---

    /// Turns GPU timing on or off. Turning it off discards any in-flight
    /// timers but keeps completed readings.
    fn enable_gpu_profiling(&mut self, enabled: bool);

    /// Returns whether GPU timing is currently enabled.
    fn is_gpu_profiling_enabled(&self) -> bool;

    /// Opens a timing scope for the given pass.
    ///
    /// A no-op when profiling is disabled. Beginning a pass that is already
    /// open is ignored; distinct passes may nest freely.
    fn begin_gpu_timer(&mut self, pass: GpuTimingPass);

    /// Closes the timing scope for the given pass and records its reading.
    ///
    /// A no-op when profiling is disabled or when the pass is not open.
    fn end_gpu_timer(&mut self, pass: GpuTimingPass);

    /// Clears all completed readings without touching the enabled flag.
    fn reset_gpu_timers(&mut self);

    /// Returns the latest completed [`GpuTimingPass::Frame`] reading in
    /// milliseconds, or `0.0` before the first one.
    fn gpu_frame_time_ms(&self) -> f32;

    /// Returns the latest completed reading for the given pass in
    /// milliseconds, or `0.0` before the first one.
    fn gpu_time_for_pass_ms(&self, pass: GpuTimingPass) -> f32;
}
