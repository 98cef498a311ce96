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

//! GPU timing passes for per-frame profiling.

/// A section of a frame's GPU work that can be timed independently.
///
/// Passes may nest as long as the pass identities differ: `Frame` typically
/// wraps all of the others. Beginning the same pass twice without ending it
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuTimingPass {
    /// The whole frame, from first to last GPU command.
    Frame,
    /// Shadow map rendering.
    ShadowPass,
    /// Opaque and transparent geometry rendering.
    GeometryPass,
    /// Deferred or clustered lighting resolution.
    LightingPass,
    /// Full-screen post-processing effects.
    PostProcessing,
    /// Asynchronous or inline compute work.
    ComputePass,
    /// UI and overlay rendering.
    Ui,
    /// Application-defined pass.
    Custom0,
    /// Application-defined pass.
    Custom1,
    /// Application-defined pass.
    Custom2,
}

impl GpuTimingPass {
    /// An array containing all `GpuTimingPass` variants.
    pub const ALL: [GpuTimingPass; 10] = [
        GpuTimingPass::Frame,
        GpuTimingPass::ShadowPass,
        GpuTimingPass::GeometryPass,
        GpuTimingPass::LightingPass,
        GpuTimingPass::PostProcessing,
        GpuTimingPass::ComputePass,
        GpuTimingPass::Ui,
        GpuTimingPass::Custom0,
        GpuTimingPass::Custom1,
        GpuTimingPass::Custom2,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_pass_once() {
        let unique: HashSet<GpuTimingPass> = GpuTimingPass::ALL.into_iter().collect();
        assert_eq!(unique.len(), GpuTimingPass::ALL.len());
    }
}
