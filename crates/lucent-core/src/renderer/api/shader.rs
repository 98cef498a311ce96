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

//! Defines data structures related to GPU shader resources.

use std::borrow::Cow;

/// The pipeline stage a shader runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Per-vertex processing.
    Vertex,
    /// Per-fragment processing.
    Pixel,
    /// Primitive amplification between vertex and pixel stages.
    Geometry,
    /// Tessellation control.
    Hull,
    /// Tessellation evaluation.
    Domain,
    /// General-purpose compute.
    Compute,
    /// Meshlet-based geometry processing.
    Mesh,
}

/// A descriptor used to create a [`ShaderHandle`].
#[derive(Debug, Clone)]
pub struct ShaderDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The pipeline stage the shader runs in.
    pub stage: ShaderStage,
    /// The name of the entry function within the shader.
    pub entry_point: Cow<'a, str>,
}

/// An opaque handle to a compiled GPU shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u64);
