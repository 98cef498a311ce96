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

//! Integration tests for GPU pass timing on the null renderer.

use lucent_core::platform::{DisplayTargetFactory, WindowConfig};
use lucent_core::renderer::api::GpuTimingPass;
use lucent_core::renderer::Renderer;
use lucent_infra::graphics::null::NullRenderer;
use lucent_infra::platform::HeadlessWindowSystem;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn initialized_renderer() -> NullRenderer {
    let _ = env_logger::builder().is_test(true).try_init();

    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = DisplayTargetFactory::new(system.clone());
    let target = factory
        .create_target(&WindowConfig::default(), None)
        .expect("headless window");

    let mut renderer = NullRenderer::new();
    renderer.initialize(target).expect("initialize");
    renderer
}

#[test]
fn test_profiling_is_disabled_by_default() {
    let mut renderer = initialized_renderer();
    assert!(!renderer.is_gpu_profiling_enabled());

    // Begin and end are no-ops while disabled
    renderer.begin_gpu_timer(GpuTimingPass::Frame);
    thread::sleep(Duration::from_millis(5));
    renderer.end_gpu_timer(GpuTimingPass::Frame);
    assert_eq!(renderer.gpu_frame_time_ms(), 0.0);
}

#[test]
fn test_every_pass_starts_at_zero() {
    let renderer = initialized_renderer();
    for pass in GpuTimingPass::ALL {
        assert_eq!(renderer.gpu_time_for_pass_ms(pass), 0.0);
    }
}

#[test]
fn test_nested_passes_record_plausible_times() {
    let mut renderer = initialized_renderer();
    renderer.enable_gpu_profiling(true);

    // A frame wrapping a shadow pass and a geometry pass
    renderer.begin_gpu_timer(GpuTimingPass::Frame);

    renderer.begin_gpu_timer(GpuTimingPass::ShadowPass);
    thread::sleep(Duration::from_millis(15));
    renderer.end_gpu_timer(GpuTimingPass::ShadowPass);

    renderer.begin_gpu_timer(GpuTimingPass::GeometryPass);
    thread::sleep(Duration::from_millis(10));
    renderer.end_gpu_timer(GpuTimingPass::GeometryPass);

    renderer.end_gpu_timer(GpuTimingPass::Frame);

    let frame = renderer.gpu_frame_time_ms();
    let shadow = renderer.gpu_time_for_pass_ms(GpuTimingPass::ShadowPass);
    let geometry = renderer.gpu_time_for_pass_ms(GpuTimingPass::GeometryPass);

    // The slept durations are lower bounds; the frame wraps both
    assert!(shadow >= 10.0, "shadow pass too short: {shadow}");
    assert!(geometry >= 5.0, "geometry pass too short: {geometry}");
    assert!(shadow <= frame, "shadow {shadow} exceeds frame {frame}");
    assert!(
        frame >= shadow + geometry - 1.0,
        "frame {frame} should wrap shadow {shadow} + geometry {geometry}"
    );
}

#[test]
fn test_unmatched_end_and_duplicate_begin_are_harmless() {
    let mut renderer = initialized_renderer();
    renderer.enable_gpu_profiling(true);

    // Ending a pass that never began records nothing
    renderer.end_gpu_timer(GpuTimingPass::PostProcessing);
    assert_eq!(
        renderer.gpu_time_for_pass_ms(GpuTimingPass::PostProcessing),
        0.0
    );

    // A duplicate begin keeps the first start time
    renderer.begin_gpu_timer(GpuTimingPass::ComputePass);
    thread::sleep(Duration::from_millis(10));
    renderer.begin_gpu_timer(GpuTimingPass::ComputePass);
    renderer.end_gpu_timer(GpuTimingPass::ComputePass);
    assert!(renderer.gpu_time_for_pass_ms(GpuTimingPass::ComputePass) >= 5.0);
}

#[test]
fn test_reset_clears_readings_but_keeps_the_enabled_flag() {
    let mut renderer = initialized_renderer();
    renderer.enable_gpu_profiling(true);

    renderer.begin_gpu_timer(GpuTimingPass::Frame);
    renderer.end_gpu_timer(GpuTimingPass::Frame);

    renderer.reset_gpu_timers();
    assert_eq!(renderer.gpu_frame_time_ms(), 0.0);
    assert!(renderer.is_gpu_profiling_enabled());

    // Timing still works after the reset
    renderer.begin_gpu_timer(GpuTimingPass::Ui);
    thread::sleep(Duration::from_millis(5));
    renderer.end_gpu_timer(GpuTimingPass::Ui);
    assert!(renderer.gpu_time_for_pass_ms(GpuTimingPass::Ui) > 0.0);
}

#[test]
fn test_disabling_discards_open_timers_but_keeps_readings() {
    let mut renderer = initialized_renderer();
    renderer.enable_gpu_profiling(true);

    // Complete one frame reading
    renderer.begin_gpu_timer(GpuTimingPass::Frame);
    thread::sleep(Duration::from_millis(5));
    renderer.end_gpu_timer(GpuTimingPass::Frame);
    let frame_reading = renderer.gpu_frame_time_ms();
    assert!(frame_reading > 0.0);

    // Leave a lighting timer open across the disable
    renderer.begin_gpu_timer(GpuTimingPass::LightingPass);
    renderer.enable_gpu_profiling(false);

    // The completed reading survives; the open timer was discarded
    assert_eq!(renderer.gpu_frame_time_ms(), frame_reading);
    renderer.enable_gpu_profiling(true);
    renderer.end_gpu_timer(GpuTimingPass::LightingPass);
    assert_eq!(renderer.gpu_time_for_pass_ms(GpuTimingPass::LightingPass), 0.0);
}

#[test]
fn test_custom_slots_are_independent() {
    let mut renderer = initialized_renderer();
    renderer.enable_gpu_profiling(true);

    renderer.begin_gpu_timer(GpuTimingPass::Custom0);
    thread::sleep(Duration::from_millis(5));
    renderer.end_gpu_timer(GpuTimingPass::Custom0);

    assert!(renderer.gpu_time_for_pass_ms(GpuTimingPass::Custom0) > 0.0);
    assert_eq!(renderer.gpu_time_for_pass_ms(GpuTimingPass::Custom1), 0.0);
    assert_eq!(renderer.gpu_time_for_pass_ms(GpuTimingPass::Custom2), 0.0);
}
