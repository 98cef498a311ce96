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

//! The boundary trait between the display-target factory and a platform
//! windowing API.
//!
//! [`DisplayTargetFactory`](crate::platform::DisplayTargetFactory) performs
//! window creation as a fixed sequence of steps (module handle, class
//! registration, outer-size computation, creation, show, initial paint), and
//! each step is one method here. Any windowing backend (Win32, a winit
//! adapter, a headless system for tests and servers) implements this trait
//! to become usable by the factory.

use crate::event::WindowCloseEvent;
use crate::math::Extent2D;
use crate::platform::config::{WindowConfig, WindowSizeMode, WindowStyle};
use crate::platform::display_target::NativeWindowRef;
use crate::platform::error::CreationError;
use std::fmt;
use std::sync::Arc;

/// A process-level module handle, as used for window-class registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleHandle(pub isize);

/// A message delivered to a window by the native windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMessage {
    /// The user or the system asked the window to close.
    CloseRequested,
    /// The client area was resized.
    Resized {
        /// New client-area width in pixels.
        width: u16,
        /// New client-area height in pixels.
        height: u16,
    },
    /// The window should repaint its contents.
    RedrawRequested,
    /// The window gained (`true`) or lost (`false`) input focus.
    FocusChanged(bool),
    /// A platform message with no portable equivalent.
    Platform {
        /// The platform's message code.
        code: u32,
        /// The platform's message payload, squeezed into 64 bits.
        payload: i64,
    },
}

/// A message handler's verdict on a [`WindowMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageResponse {
    /// The handler consumed the message.
    Handled,
    /// The message should fall through to the platform's default handling.
    PassThrough,
}

/// Callback invoked for every message delivered to windows of a registered class.
///
/// Handlers are installed per window class, so all windows created through one
/// factory share the handler given to the first
/// [`create_target`](crate::platform::DisplayTargetFactory::create_target) call.
pub type MessageHandler =
    Arc<dyn Fn(&NativeWindowRef, &WindowMessage) -> MessageResponse + Send + Sync>;

/// Returns the handler installed when a caller does not provide one.
///
/// It passes every message through to the platform's default handling.
pub fn default_message_handler() -> MessageHandler {
    Arc::new(|_, _| MessageResponse::PassThrough)
}

/// Shared, thread-safe reference to a native window system.
pub type SharedWindowSystem = Arc<dyn NativeWindowSystem>;

/// The platform windowing API, decomposed into the steps window creation needs.
///
/// Implementations must be safe to call from any thread; the factory itself
/// serializes class registration.
pub trait NativeWindowSystem: Send + Sync + fmt::Debug {
    /// Obtains the process module handle that window classes register against.
    ///
    /// ## Errors
    /// [`CreationError::ModuleHandleUnavailable`] with the platform error code
    /// when the handle cannot be obtained.
    fn module_handle(&self) -> Result<ModuleHandle, CreationError>;

    /// Registers a window class under `class_name` with the given handler.
    ///
    /// Registration is expected at most once per class name for the lifetime
    /// of the process.
    ///
    /// ## Errors
    /// [`CreationError::ClassRegistrationFailed`] with the platform error code
    /// when registration is rejected (including duplicate registration).
    fn register_window_class(
        &self,
        class_name: &str,
        handler: MessageHandler,
    ) -> Result<(), CreationError>;

    /// Computes the outer window size whose client area equals `client`.
    ///
    /// Decorated windows are larger than their drawable surface; this is the
    /// platform's frame arithmetic for the given style and size mode.
    fn outer_extent_for(
        &self,
        client: Extent2D,
        style: WindowStyle,
        size_mode: WindowSizeMode,
    ) -> Extent2D;

    /// Creates a window of the given registered class.
    ///
    /// ## Arguments
    /// * `class_name` - A class previously passed to [`register_window_class`](Self::register_window_class).
    /// * `config` - The window parameters (title, style, size mode).
    /// * `outer` - The outer size computed by [`outer_extent_for`](Self::outer_extent_for).
    ///
    /// ## Errors
    /// [`CreationError::WindowCreationFailed`] with the platform error code.
    fn create_window(
        &self,
        class_name: &str,
        config: &WindowConfig,
        outer: Extent2D,
    ) -> Result<NativeWindowRef, CreationError>;

    /// Makes the window visible. Unknown windows are ignored.
    fn show_window(&self, window: &NativeWindowRef);

    /// Requests the first paint of the window's client area.
    /// Unknown windows are ignored.
    fn request_initial_paint(&self, window: &NativeWindowRef);

    /// Destroys the window, delivering a close notification to its handler.
    ///
    /// ## Errors
    /// [`CreationError::UnknownWindow`] when the window was already destroyed
    /// or never belonged to this system.
    fn destroy_window(
        &self,
        window: &NativeWindowRef,
        close_event: &WindowCloseEvent,
    ) -> Result<(), CreationError>;

    /// Reports whether the window currently exists in this system.
    fn window_is_live(&self, window: &NativeWindowRef) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handler_passes_everything_through() {
        let handler = default_message_handler();
        let window = NativeWindowRef::Headless { id: 1 };
        assert_eq!(
            handler(&window, &WindowMessage::CloseRequested),
            MessageResponse::PassThrough
        );
        assert_eq!(
            handler(
                &window,
                &WindowMessage::Platform {
                    code: 0x0112,
                    payload: 0,
                }
            ),
            MessageResponse::PassThrough
        );
    }
}
