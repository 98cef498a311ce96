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

//! The display-target abstraction.
//!
//! Engine code creates windows through a [`DisplayTargetFactory`] and refers
//! to them only through opaque [`DisplayTarget`] handles, so nothing above
//! this module depends on platform window-handle types. The platform itself
//! is reached through the [`NativeWindowSystem`] boundary trait, which a
//! concrete implementation (Win32, winit adoption, headless) provides.

pub mod config;
pub mod display_target;
pub mod error;
pub mod factory;
pub mod window_system;

pub use config::{WindowConfig, WindowSizeMode, WindowStyle};
pub use display_target::{DisplayTarget, NativeWindowRef};
pub use error::CreationError;
pub use factory::DisplayTargetFactory;
pub use window_system::{
    default_message_handler, MessageHandler, MessageResponse, ModuleHandle, NativeWindowSystem,
    SharedWindowSystem, WindowMessage,
};
