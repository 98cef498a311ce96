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

//! The seven runtime settings groups of the rendering system.
//!
//! Each group follows the same protocol on the [`Renderer`] trait: an
//! `init_*` call stores it before initialization, a `set_*` call validates
//! and applies it live, and a getter returns the last applied value. Setters
//! reject out-of-range values instead of clamping them, so a successful set
//! followed by a get always returns exactly what was passed in.
//!
//! [`Renderer`]: crate::renderer::Renderer

use crate::math::Extent2D;
use serde::{Deserialize, Serialize};

/// A shared quality level used by several settings groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QualityTier {
    /// Lowest cost, lowest fidelity.
    Low,
    /// The balanced default.
    #[default]
    Medium,
    /// High fidelity.
    High,
    /// Maximum fidelity regardless of cost.
    Ultra,
}

/// How the output fills the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenMode {
    /// Output goes to a regular window.
    #[default]
    Windowed,
    /// Exclusive fullscreen with display-mode control.
    Fullscreen,
    /// A borderless window sized to the output.
    Borderless,
}

/// The anti-aliasing technique to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AntiAliasingMode {
    /// No anti-aliasing.
    #[default]
    None,
    /// Hardware multisampling.
    Msaa,
    /// Fast approximate anti-aliasing (post-process).
    Fxaa,
    /// Temporal anti-aliasing.
    Taa,
}

/// Output resolution, screen mode, refresh rate, and vsync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// The output resolution in pixels.
    pub resolution: Extent2D,
    /// How the output fills the screen.
    pub mode: ScreenMode,
    /// The target refresh rate in Hz.
    pub refresh_rate: u16,
    /// If `true`, presentation waits for vertical blank.
    pub vsync: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            resolution: Extent2D {
                width: 1920,
                height: 1080,
            },
            mode: ScreenMode::Windowed,
            refresh_rate: 60,
            vsync: true,
        }
    }
}

/// Anti-aliasing technique and sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiAliasingSettings {
    /// The technique to apply.
    pub mode: AntiAliasingMode,
    /// Samples per pixel for MSAA. Must be 1, 2, 4, or 8.
    pub sample_count: u8,
    /// A backend-specific quality knob for the post-process techniques.
    pub quality_level: u8,
}

impl Default for AntiAliasingSettings {
    fn default() -> Self {
        Self {
            mode: AntiAliasingMode::None,
            sample_count: 1,
            quality_level: 0,
        }
    }
}

/// Texture filtering and mipmapping behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSettings {
    /// The maximum anisotropic filtering level. Must be a power of two, at most 16.
    pub filtering_level: u8,
    /// The texture resolution tier.
    pub quality: QualityTier,
    /// If `true`, mipmap chains are generated and sampled.
    pub mipmapping: bool,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            filtering_level: 4,
            quality: QualityTier::Medium,
            mipmapping: true,
        }
    }
}

/// Shadow rendering quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowSettings {
    /// The shadow technique tier.
    pub quality: QualityTier,
    /// Shadow map edge length in texels. Must be a power of two in 256..=8192.
    pub map_resolution: u16,
    /// If `true`, shadow edges are filtered.
    pub soft_shadows: bool,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            quality: QualityTier::Medium,
            map_resolution: 2048,
            soft_shadows: false,
        }
    }
}

/// Global lighting features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingSettings {
    /// If `true`, global illumination is computed.
    pub global_illumination: bool,
    /// If `true`, lighting is computed in high dynamic range.
    pub hdr: bool,
    /// If `true`, screen-space ambient occlusion is applied.
    pub ambient_occlusion: bool,
    /// The ambient occlusion quality tier.
    pub ao_quality: QualityTier,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            global_illumination: false,
            hdr: true,
            ambient_occlusion: true,
            ao_quality: QualityTier::Medium,
        }
    }
}

/// Camera parameters for the depth-of-field effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthOfFieldParams {
    /// Distance to the focal plane in world units. Must be positive.
    pub focal_distance: f32,
    /// The simulated aperture (f-stop). Must be positive.
    pub aperture: f32,
}

impl Default for DepthOfFieldParams {
    fn default() -> Self {
        Self {
            focal_distance: 10.0,
            aperture: 1.4,
        }
    }
}

/// Post-processing effect toggles and intensities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostProcessingSettings {
    /// If `true`, bright areas bleed into their surroundings.
    pub bloom: bool,
    /// Bloom strength on a 0..=100 scale.
    pub bloom_intensity: u8,
    /// If `true`, out-of-focus areas are blurred.
    pub depth_of_field: bool,
    /// Camera parameters for the depth-of-field effect.
    pub dof_params: DepthOfFieldParams,
    /// If `true`, fast motion smears along its direction.
    pub motion_blur: bool,
    /// Motion blur strength on a 0..=100 scale.
    pub motion_blur_intensity: u8,
}

impl Default for PostProcessingSettings {
    fn default() -> Self {
        Self {
            bloom: true,
            bloom_intensity: 50,
            depth_of_field: false,
            dof_params: DepthOfFieldParams::default(),
            motion_blur: false,
            motion_blur_intensity: 50,
        }
    }
}

/// Dynamic resolution scaling bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSettings {
    /// If `true`, the render resolution scales with GPU load.
    pub dynamic_resolution: bool,
    /// The lowest resolution dynamic scaling may drop to.
    pub min_resolution: Extent2D,
    /// The highest resolution dynamic scaling may reach.
    pub max_resolution: Extent2D,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            dynamic_resolution: false,
            min_resolution: Extent2D {
                width: 1280,
                height: 720,
            },
            max_resolution: Extent2D {
                width: 3840,
                height: 2160,
            },
        }
    }
}
