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

use super::device::NullDevice;
use lucent_core::platform::DisplayTarget;
use lucent_core::renderer::api::{
    AdapterDesc, AntiAliasingSettings, BufferDescriptor, BufferHandle, DisplayMode,
    DisplaySettings, FrameStats, GpuTimingPass, GraphicsBackendType, LightingSettings, MapType,
    OutputDesc, PerformanceSettings, PostProcessingSettings, RefreshRate, RendererDeviceType,
    ShaderDescriptor, ShaderHandle, ShadowSettings, TextureDescriptor, TextureHandle,
    TextureRegion, TextureSettings,
};
use lucent_core::renderer::error::{RenderError, SettingsError};
use lucent_core::renderer::Renderer;
use lucent_core::utils::Stopwatch;
use std::collections::HashMap;
use std::ptr::NonNull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LifecycleState {
    Uninitialized,
    Initialized,
    Destroyed,
}

#[derive(Debug, Default)]
struct ProfilingState {
    enabled: bool,
    active: HashMap<GpuTimingPass, Stopwatch>,
    readings_ms: HashMap<GpuTimingPass, f32>,
}

#[derive(Debug)]
struct FrameStatsTracker {
    window: Stopwatch,
    frames_in_window: u32,
    current: FrameStats,
}

impl FrameStatsTracker {
    fn new() -> Self {
        Self {
            window: Stopwatch::new(),
            frames_in_window: 0,
            current: FrameStats::default(),
        }
    }

    /// Folds one presented frame into the running window. Once the window
    /// spans a full second, the published stats roll over and a new window
    /// starts.
    fn frame_presented(&mut self) {
        self.frames_in_window += 1;
        let elapsed = self.window.elapsed_secs_f64().unwrap_or(0.0);
        if elapsed >= 1.0 {
            self.current = FrameStats {
                fps: (self.frames_in_window as f64 / elapsed) as f32,
                mspf: (elapsed * 1000.0 / self.frames_in_window as f64) as f32,
            };
            self.window = Stopwatch::new();
            self.frames_in_window = 0;
        }
    }
}

/// A CPU-only [`Renderer`] that implements the full contract without a GPU.
///
/// Resources live in byte-accurate host memory, frame submission is
/// bookkeeping, and pass timing runs on a [`Stopwatch`] instead of GPU
/// timestamps. Every validation rule of the contract is enforced, which makes
/// this backend the reference for integration tests and headless runs.
#[derive(Debug)]
pub struct NullRenderer {
    state: LifecycleState,
    target: Option<DisplayTarget>,
    device: NullDevice,
    display: DisplaySettings,
    anti_aliasing: AntiAliasingSettings,
    texture: TextureSettings,
    shadow: ShadowSettings,
    lighting: LightingSettings,
    post_processing: PostProcessingSettings,
    performance: PerformanceSettings,
    rendered_since_present: bool,
    pending_commands: usize,
    device_lost: bool,
    profiling: ProfilingState,
    stats: FrameStatsTracker,
}

/// Sample counts the virtual adapter accepts for MSAA.
const SUPPORTED_MSAA_SAMPLES: [u8; 4] = [1, 2, 4, 8];

fn validate_display(settings: &DisplaySettings) -> Result<(), SettingsError> {
    if settings.resolution.width == 0 || settings.resolution.height == 0 {
        return Err(SettingsError::Unsupported {
            group: "display",
            details: format!(
                "resolution {}x{} has a zero dimension",
                settings.resolution.width, settings.resolution.height
            ),
        });
    }
    if settings.refresh_rate == 0 {
        return Err(SettingsError::Unsupported {
            group: "display",
            details: "refresh rate must be nonzero".to_string(),
        });
    }
    Ok(())
}

fn validate_anti_aliasing(settings: &AntiAliasingSettings) -> Result<(), SettingsError> {
    if !SUPPORTED_MSAA_SAMPLES.contains(&settings.sample_count) {
        return Err(SettingsError::Unsupported {
            group: "anti-aliasing",
            details: format!(
                "sample count {} is not one of {SUPPORTED_MSAA_SAMPLES:?}",
                settings.sample_count
            ),
        });
    }
    Ok(())
}

fn validate_texture(settings: &TextureSettings) -> Result<(), SettingsError> {
    if !settings.filtering_level.is_power_of_two() || settings.filtering_level > 16 {
        return Err(SettingsError::Unsupported {
            group: "texture",
            details: format!(
                "anisotropic filtering level {} must be a power of two up to 16",
                settings.filtering_level
            ),
        });
    }
    Ok(())
}

fn validate_shadow(settings: &ShadowSettings) -> Result<(), SettingsError> {
    if !settings.map_resolution.is_power_of_two()
        || !(256..=8192).contains(&settings.map_resolution)
    {
        return Err(SettingsError::Unsupported {
            group: "shadow",
            details: format!(
                "shadow map resolution {} must be a power of two in 256..=8192",
                settings.map_resolution
            ),
        });
    }
    Ok(())
}

fn validate_lighting(_settings: &LightingSettings) -> Result<(), SettingsError> {
    // Every combination of the lighting toggles is representable here.
    Ok(())
}

fn validate_post_processing(settings: &PostProcessingSettings) -> Result<(), SettingsError> {
    if settings.bloom_intensity > 100 {
        return Err(SettingsError::Unsupported {
            group: "post-processing",
            details: format!("bloom intensity {} exceeds 100", settings.bloom_intensity),
        });
    }
    if settings.motion_blur_intensity > 100 {
        return Err(SettingsError::Unsupported {
            group: "post-processing",
            details: format!(
                "motion blur intensity {} exceeds 100",
                settings.motion_blur_intensity
            ),
        });
    }
    if settings.depth_of_field {
        let params = settings.dof_params;
        if !(params.focal_distance.is_finite() && params.focal_distance > 0.0) {
            return Err(SettingsError::Unsupported {
                group: "post-processing",
                details: format!(
                    "depth of field focal distance {} must be finite and positive",
                    params.focal_distance
                ),
            });
        }
        if !(params.aperture.is_finite() && params.aperture > 0.0) {
            return Err(SettingsError::Unsupported {
                group: "post-processing",
                details: format!(
                    "depth of field aperture {} must be finite and positive",
                    params.aperture
                ),
            });
        }
    }
    Ok(())
}

fn validate_performance(settings: &PerformanceSettings) -> Result<(), SettingsError> {
    let min = settings.min_resolution;
    let max = settings.max_resolution;
    if min.width == 0 || min.height == 0 || max.width == 0 || max.height == 0 {
        return Err(SettingsError::Unsupported {
            group: "performance",
            details: format!(
                "resolution bounds {}x{}..{}x{} contain a zero dimension",
                min.width, min.height, max.width, max.height
            ),
        });
    }
    if min.width > max.width || min.height > max.height {
        return Err(SettingsError::Unsupported {
            group: "performance",
            details: format!(
                "minimum resolution {}x{} exceeds maximum {}x{}",
                min.width, min.height, max.width, max.height
            ),
        });
    }
    Ok(())
}

impl NullRenderer {
    /// Creates an uninitialized renderer with default settings.
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            target: None,
            device: NullDevice::new(),
            display: DisplaySettings::default(),
            anti_aliasing: AntiAliasingSettings::default(),
            texture: TextureSettings::default(),
            shadow: ShadowSettings::default(),
            lighting: LightingSettings::default(),
            post_processing: PostProcessingSettings::default(),
            performance: PerformanceSettings::default(),
            rendered_since_present: false,
            pending_commands: 0,
            device_lost: false,
            profiling: ProfilingState::default(),
            stats: FrameStatsTracker::new(),
        }
    }

    /// Simulates losing the virtual device.
    ///
    /// The next `render` or `present` reports [`RenderError::DeviceLost`],
    /// which is the signal to shut down and build a fresh renderer.
    pub fn inject_device_loss(&mut self) {
        self.device_lost = true;
    }

    /// Returns the number of submitted commands not yet flushed.
    pub fn pending_command_count(&self) -> usize {
        self.pending_commands
    }

    fn ensure_initialized(&self) -> Result<(), RenderError> {
        match self.state {
            LifecycleState::Initialized => Ok(()),
            _ => Err(RenderError::NotInitialized),
        }
    }

    fn ensure_uninitialized(&self) -> Result<(), RenderError> {
        match self.state {
            LifecycleState::Uninitialized => Ok(()),
            LifecycleState::Initialized => Err(RenderError::AlreadyInitialized),
            LifecycleState::Destroyed => Err(RenderError::NotInitialized),
        }
    }

    fn ensure_not_destroyed(&self) -> Result<(), RenderError> {
        match self.state {
            LifecycleState::Destroyed => Err(RenderError::NotInitialized),
            _ => Ok(()),
        }
    }

    fn validate_stored_settings(&self) -> Result<(), SettingsError> {
        validate_display(&self.display)?;
        validate_anti_aliasing(&self.anti_aliasing)?;
        validate_texture(&self.texture)?;
        validate_shadow(&self.shadow)?;
        validate_lighting(&self.lighting)?;
        validate_post_processing(&self.post_processing)?;
        validate_performance(&self.performance)?;
        Ok(())
    }

    fn virtual_adapter() -> AdapterDesc {
        AdapterDesc {
            name: "Lucent Null Device".to_string(),
            vendor_id: 0x1414,
            device_id: 0x008C,
            subsys_id: 0,
            revision: 0,
            video_memory: 0,
            shared_memory: 256 * 1024 * 1024,
            local_id: 0,
            device_type: RendererDeviceType::Cpu,
            backend_type: GraphicsBackendType::Null,
        }
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for NullRenderer {
    // --- Lifecycle ---

    fn initialize(&mut self, target: DisplayTarget) -> Result<(), RenderError> {
        match self.state {
            LifecycleState::Initialized => return Err(RenderError::AlreadyInitialized),
            LifecycleState::Destroyed => {
                return Err(RenderError::InitializationFailed(
                    "renderer was shut down; create a new instance".to_string(),
                ));
            }
            LifecycleState::Uninitialized => {}
        }
        self.validate_stored_settings()?;
        if !target.is_live() {
            return Err(RenderError::InitializationFailed(
                "display target is not live".to_string(),
            ));
        }

        log::info!(
            "NullRenderer: initialized against {:?} at {}x{}.",
            target.native_ref(),
            self.display.resolution.width,
            self.display.resolution.height
        );
        self.target = Some(target);
        self.state = LifecycleState::Initialized;
        self.rendered_since_present = false;
        self.pending_commands = 0;
        self.device_lost = false;
        self.stats = FrameStatsTracker::new();
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.state == LifecycleState::Initialized
    }

    fn shutdown(&mut self) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        let (buffers, textures, shaders) = self.device.clear_all();
        log::info!(
            "NullRenderer: shut down, released {buffers} buffer(s), {textures} texture(s), {shaders} shader(s)."
        );
        self.profiling.active.clear();
        self.stats = FrameStatsTracker::new();
        self.rendered_since_present = false;
        self.pending_commands = 0;
        self.target = None;
        self.state = LifecycleState::Destroyed;
        Ok(())
    }

    // --- Buffers ---

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferHandle, RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.create_buffer(descriptor)?)
    }

    fn create_buffer_with_data(
        &self,
        descriptor: &BufferDescriptor,
        data: &[u8],
    ) -> Result<BufferHandle, RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.create_buffer_with_data(descriptor, data)?)
    }

    fn update_buffer(
        &self,
        handle: BufferHandle,
        data: &[u8],
        offset: u64,
    ) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.update_buffer(handle, data, offset)?)
    }

    fn read_buffer(
        &self,
        handle: BufferHandle,
        len: u64,
        offset: u64,
    ) -> Result<Vec<u8>, RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.read_buffer(handle, len, offset)?)
    }

    fn map_buffer(
        &self,
        handle: BufferHandle,
        offset: u64,
        len: u64,
        access: MapType,
    ) -> Result<NonNull<u8>, RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.map_buffer(handle, offset, len, access)?)
    }

    fn unmap_buffer(&self, handle: BufferHandle) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.unmap_buffer(handle)?)
    }

    fn destroy_buffer(&self, handle: BufferHandle) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.destroy_buffer(handle)?)
    }

    // --- Textures ---

    fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        initial_data: Option<&[u8]>,
    ) -> Result<TextureHandle, RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.create_texture(descriptor, initial_data)?)
    }

    fn update_texture(
        &self,
        handle: TextureHandle,
        data: &[u8],
        region: &TextureRegion,
    ) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.update_texture(handle, data, region)?)
    }

    fn destroy_texture(&self, handle: TextureHandle) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.destroy_texture(handle)?)
    }

    // --- Shaders ---

    fn create_shader_from_source(
        &self,
        descriptor: &ShaderDescriptor,
        source: &str,
    ) -> Result<ShaderHandle, RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.create_shader_from_source(descriptor, source)?)
    }

    fn create_shader_from_binary(
        &self,
        descriptor: &ShaderDescriptor,
        bytecode: &[u8],
    ) -> Result<ShaderHandle, RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.create_shader_from_binary(descriptor, bytecode)?)
    }

    fn destroy_shader(&self, handle: ShaderHandle) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        Ok(self.device.destroy_shader(handle)?)
    }

    // --- Frame loop ---

    fn render(&mut self) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        if self.device_lost {
            return Err(RenderError::DeviceLost);
        }
        if !self.target.as_ref().is_some_and(DisplayTarget::is_live) {
            return Err(RenderError::Backend(
                "display target is no longer live".to_string(),
            ));
        }
        self.pending_commands += 1;
        self.rendered_since_present = true;
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        if self.device_lost {
            return Err(RenderError::DeviceLost);
        }
        if !self.rendered_since_present {
            return Err(RenderError::PresentWithoutRender);
        }
        self.rendered_since_present = false;
        self.stats.frame_presented();
        Ok(())
    }

    fn flush_command_queue(&mut self) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        // A CPU backend consumes commands instantly; flushing just settles
        // the bookkeeping.
        self.pending_commands = 0;
        Ok(())
    }

    fn frame_stats(&self) -> FrameStats {
        self.stats.current
    }

    // --- Settings ---

    fn init_display_settings(&mut self, settings: DisplaySettings) -> Result<(), RenderError> {
        self.ensure_uninitialized()?;
        self.display = settings;
        Ok(())
    }

    fn set_display_settings(&mut self, settings: DisplaySettings) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        validate_display(&settings)?;
        self.display = settings;
        log::debug!("NullRenderer: applied display settings {settings:?}.");
        Ok(())
    }

    fn display_settings(&self) -> DisplaySettings {
        self.display
    }

    fn init_anti_aliasing_settings(
        &mut self,
        settings: AntiAliasingSettings,
    ) -> Result<(), RenderError> {
        self.ensure_uninitialized()?;
        self.anti_aliasing = settings;
        Ok(())
    }

    fn set_anti_aliasing_settings(
        &mut self,
        settings: AntiAliasingSettings,
    ) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        validate_anti_aliasing(&settings)?;
        self.anti_aliasing = settings;
        log::debug!("NullRenderer: applied anti-aliasing settings {settings:?}.");
        Ok(())
    }

    fn anti_aliasing_settings(&self) -> AntiAliasingSettings {
        self.anti_aliasing
    }

    fn init_texture_settings(&mut self, settings: TextureSettings) -> Result<(), RenderError> {
        self.ensure_uninitialized()?;
        self.texture = settings;
        Ok(())
    }

    fn set_texture_settings(&mut self, settings: TextureSettings) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        validate_texture(&settings)?;
        self.texture = settings;
        log::debug!("NullRenderer: applied texture settings {settings:?}.");
        Ok(())
    }

    fn texture_settings(&self) -> TextureSettings {
        self.texture
    }

    fn init_shadow_settings(&mut self, settings: ShadowSettings) -> Result<(), RenderError> {
        self.ensure_uninitialized()?;
        self.shadow = settings;
        Ok(())
    }

    fn set_shadow_settings(&mut self, settings: ShadowSettings) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        validate_shadow(&settings)?;
        self.shadow = settings;
        log::debug!("NullRenderer: applied shadow settings {settings:?}.");
        Ok(())
    }

    fn shadow_settings(&self) -> ShadowSettings {
        self.shadow
    }

    fn init_lighting_settings(&mut self, settings: LightingSettings) -> Result<(), RenderError> {
        self.ensure_uninitialized()?;
        self.lighting = settings;
        Ok(())
    }

    fn set_lighting_settings(&mut self, settings: LightingSettings) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        validate_lighting(&settings)?;
        self.lighting = settings;
        log::debug!("NullRenderer: applied lighting settings {settings:?}.");
        Ok(())
    }

    fn lighting_settings(&self) -> LightingSettings {
        self.lighting
    }

    fn init_post_processing_settings(
        &mut self,
        settings: PostProcessingSettings,
    ) -> Result<(), RenderError> {
        self.ensure_uninitialized()?;
        self.post_processing = settings;
        Ok(())
    }

    fn set_post_processing_settings(
        &mut self,
        settings: PostProcessingSettings,
    ) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        validate_post_processing(&settings)?;
        self.post_processing = settings;
        log::debug!("NullRenderer: applied post-processing settings {settings:?}.");
        Ok(())
    }

    fn post_processing_settings(&self) -> PostProcessingSettings {
        self.post_processing
    }

    fn init_performance_settings(
        &mut self,
        settings: PerformanceSettings,
    ) -> Result<(), RenderError> {
        self.ensure_uninitialized()?;
        self.performance = settings;
        Ok(())
    }

    fn set_performance_settings(
        &mut self,
        settings: PerformanceSettings,
    ) -> Result<(), RenderError> {
        self.ensure_initialized()?;
        validate_performance(&settings)?;
        self.performance = settings;
        log::debug!("NullRenderer: applied performance settings {settings:?}.");
        Ok(())
    }

    fn performance_settings(&self) -> PerformanceSettings {
        self.performance
    }

    // --- Hardware queries ---

    fn enumerate_adapters(&self) -> Result<Vec<AdapterDesc>, RenderError> {
        self.ensure_not_destroyed()?;
        Ok(vec![Self::virtual_adapter()])
    }

    fn enumerate_outputs(&self, adapter: &AdapterDesc) -> Result<Vec<OutputDesc>, RenderError> {
        self.ensure_not_destroyed()?;
        if adapter.local_id != 0 {
            return Err(RenderError::UnknownAdapter(adapter.local_id));
        }
        Ok(vec![OutputDesc {
            name: "Virtual Display 0".to_string(),
            width: 1920,
            height: 1080,
            local_id: 0,
        }])
    }

    fn enumerate_display_modes(
        &self,
        output: &OutputDesc,
    ) -> Result<Vec<DisplayMode>, RenderError> {
        self.ensure_not_destroyed()?;
        if output.local_id != 0 {
            return Err(RenderError::UnknownOutput(output.local_id));
        }
        let mode = |width, height, numerator, denominator| DisplayMode {
            width,
            height,
            refresh_rate: RefreshRate {
                numerator,
                denominator,
            },
        };
        Ok(vec![
            mode(1280, 720, 60, 1),
            mode(1920, 1080, 60, 1),
            // NTSC-style 59.94 Hz, kept rational rather than rounded.
            mode(1920, 1080, 60000, 1001),
            mode(2560, 1440, 144, 1),
            mode(3840, 2160, 60, 1),
        ])
    }

    // --- GPU profiling ---

    fn enable_gpu_profiling(&mut self, enabled: bool) {
        if self.profiling.enabled && !enabled {
            self.profiling.active.clear();
        }
        self.profiling.enabled = enabled;
    }

    fn is_gpu_profiling_enabled(&self) -> bool {
        self.profiling.enabled
    }

    fn begin_gpu_timer(&mut self, pass: GpuTimingPass) {
        if !self.profiling.enabled {
            return;
        }
        if self.profiling.active.contains_key(&pass) {
            log::warn!("GPU timer for {pass:?} is already open; ignoring duplicate begin.");
            return;
        }
        self.profiling.active.insert(pass, Stopwatch::new());
    }

    fn end_gpu_timer(&mut self, pass: GpuTimingPass) {
        if !self.profiling.enabled {
            return;
        }
        match self.profiling.active.remove(&pass) {
            Some(watch) => {
                let ms = watch.elapsed_secs_f64().unwrap_or(0.0) * 1000.0;
                self.profiling.readings_ms.insert(pass, ms as f32);
            }
            None => log::warn!("GPU timer for {pass:?} is not open; ignoring end."),
        }
    }

    fn reset_gpu_timers(&mut self) {
        self.profiling.active.clear();
        self.profiling.readings_ms.clear();
    }

    fn gpu_frame_time_ms(&self) -> f32 {
        self.gpu_time_for_pass_ms(GpuTimingPass::Frame)
    }

    fn gpu_time_for_pass_ms(&self, pass: GpuTimingPass) -> f32 {
        self.profiling
            .readings_ms
            .get(&pass)
            .copied()
            .unwrap_or(0.0)
    }
}
