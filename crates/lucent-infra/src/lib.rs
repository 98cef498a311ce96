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

//! # Lucent Infra
//!
//! Concrete implementations of the `lucent-core` contracts.
//!
//! - [`platform`]: window systems. A headless implementation for tests and
//!   server-side runs, and a `winit`-backed adapter for real desktop windows.
//! - [`graphics`]: the null renderer, a complete CPU-side implementation of
//!   the [`Renderer`](lucent_core::renderer::Renderer) contract used for
//!   tests and as the reference for real backends.

#![warn(missing_docs)]

pub mod graphics;
pub mod platform;
