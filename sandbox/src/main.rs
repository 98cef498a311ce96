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

// Lucent Sandbox
// Main binary exercising the display-target and renderer contracts end to
// end on the headless window system and the null backend.

use std::borrow::Cow;
use std::mem;
use std::sync::Arc;

use anyhow::Result;
use lucent_core::event::{EventBus, WindowCloseEvent};
use lucent_core::math::{Extent3D, LinearRgba, Vec3};
use lucent_core::platform::{
    DisplayTargetFactory, MessageHandler, MessageResponse, WindowConfig, WindowMessage,
};
use lucent_core::renderer::api::{
    BufferDescriptor, BufferMemoryType, BufferType, BufferUsage, GpuTimingPass, MapType,
    ObjectConstants, ShaderDescriptor, ShaderStage, TextureDescriptor, TextureFormat, Vertex,
};
use lucent_core::renderer::Renderer;
use lucent_infra::graphics::null::NullRenderer;
use lucent_infra::platform::HeadlessWindowSystem;

const VERTICES: &[Vertex] = &[
    Vertex {
        position: Vec3::new(0.0, 0.5, 0.0),
        color: LinearRgba::RED,
    },
    Vertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: LinearRgba::GREEN,
    },
    Vertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: LinearRgba::BLUE,
    },
];

const FRAME_COUNT: u32 = 8;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    // --- Step 1: Bring up the window system and a display target ---
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = DisplayTargetFactory::new(system.clone());

    // Window messages feed close events onto a bus, which the end of main drains
    let close_bus = EventBus::<WindowCloseEvent>::new();
    let close_sender = close_bus.sender();
    let handler: MessageHandler = Arc::new(move |_, message| {
        if *message == WindowMessage::CloseRequested {
            let _ = close_sender.send(WindowCloseEvent);
            return MessageResponse::Handled;
        }
        MessageResponse::PassThrough
    });

    let config = WindowConfig {
        title: "Lucent Sandbox".to_string(),
        width: 1280,
        height: 720,
        ..Default::default()
    };
    let target = factory.create_target(&config, Some(handler))?;
    log::info!("Display target created: {:?}", target.native_ref());

    // --- Step 2: Survey the hardware and initialize the renderer ---
    let mut renderer = NullRenderer::new();
    renderer.log_display_adapters()?;
    renderer.initialize(target.clone())?;

    // --- Step 3: Create the GPU resources for one object ---
    let vertex_buffer = renderer.create_buffer_with_data(
        &BufferDescriptor {
            label: Some("Triangle Vertex Buffer".into()),
            size: mem::size_of_val(VERTICES) as u64,
            buffer_type: BufferType::Vertex,
            usage: BufferUsage::Static,
            memory: BufferMemoryType::Upload,
        },
        bytemuck::cast_slice(VERTICES),
    )?;
    log::info!(" -> Vertex buffer created: {vertex_buffer:?}");

    let constants = ObjectConstants::default();
    let constant_buffer = renderer.create_buffer_with_data(
        &BufferDescriptor {
            label: Some("Object Constant Buffer".into()),
            size: mem::size_of::<ObjectConstants>() as u64,
            buffer_type: BufferType::Constant,
            usage: BufferUsage::Dynamic,
            memory: BufferMemoryType::Upload,
        },
        bytemuck::bytes_of(&constants),
    )?;
    log::info!(" -> Constant buffer created: {constant_buffer:?}");

    let texture = renderer.create_texture(
        &TextureDescriptor {
            label: Some("Checker Texture".into()),
            extent: Extent3D {
                width: 4,
                height: 4,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            format: TextureFormat::Rgba8Unorm,
        },
        Some(&checker_texels()),
    )?;
    log::info!(" -> Texture created: {texture:?}");

    let shader = renderer.create_shader_from_source(
        &ShaderDescriptor {
            label: Some("Unlit Shader".into()),
            stage: ShaderStage::Vertex,
            entry_point: Cow::Borrowed("vs_main"),
        },
        "float4 vs_main(float3 position : POSITION) : SV_Position { return float4(position, 1.0); }",
    )?;
    log::info!(" -> Shader created: {shader:?}");

    // --- Step 4: Drive a few timed frames ---
    renderer.enable_gpu_profiling(true);
    for frame in 0..FRAME_COUNT {
        renderer.begin_gpu_timer(GpuTimingPass::Frame);

        renderer.begin_gpu_timer(GpuTimingPass::GeometryPass);
        renderer.render()?;
        renderer.end_gpu_timer(GpuTimingPass::GeometryPass);

        renderer.present()?;
        renderer.end_gpu_timer(GpuTimingPass::Frame);

        log::info!(
            "Frame {frame}: {:.3} ms total, {:.3} ms geometry",
            renderer.gpu_frame_time_ms(),
            renderer.gpu_time_for_pass_ms(GpuTimingPass::GeometryPass)
        );
    }
    renderer.flush_command_queue()?;

    // --- Step 5: Change a setting live and verify the echo ---
    let mut display = renderer.display_settings();
    display.vsync = false;
    renderer.set_display_settings(display)?;
    log::info!("Display settings now {:?}", renderer.display_settings());

    // --- Step 6: Stream new constants through a mapped range ---
    let updated = ObjectConstants::default();
    let ptr = renderer.map_buffer(
        constant_buffer,
        0,
        mem::size_of::<ObjectConstants>() as u64,
        MapType::Write,
    )?;
    unsafe {
        std::ptr::copy_nonoverlapping(
            bytemuck::bytes_of(&updated).as_ptr(),
            ptr.as_ptr(),
            mem::size_of::<ObjectConstants>(),
        );
    }
    renderer.unmap_buffer(constant_buffer)?;

    let echoed = renderer.read_buffer(vertex_buffer, mem::size_of::<Vertex>() as u64, 0)?;
    log::info!("First vertex reads back as {} bytes.", echoed.len());

    // --- Step 7: Tear everything down in order ---
    renderer.destroy_shader(shader)?;
    renderer.destroy_texture(texture)?;
    renderer.destroy_buffer(constant_buffer)?;
    renderer.destroy_buffer(vertex_buffer)?;

    let stats = renderer.frame_stats();
    log::info!("Final frame stats: {:.1} fps, {:.2} ms/frame", stats.fps, stats.mspf);
    renderer.shutdown()?;

    // Destroying the target dispatches CloseRequested, which lands on the bus
    target.destroy(&WindowCloseEvent)?;
    if close_bus.receiver().try_recv().is_ok() {
        log::info!("Close event received; sandbox finished cleanly.");
    }
    Ok(())
}

fn checker_texels() -> Vec<u8> {
    let mut texels = Vec::with_capacity(4 * 4 * 4);
    for y in 0..4u8 {
        for x in 0..4u8 {
            let white = (x + y) % 2 == 0;
            let value = if white { 0xFF } else { 0x20 };
            texels.extend_from_slice(&[value, value, value, 0xFF]);
        }
    }
    texels
}
