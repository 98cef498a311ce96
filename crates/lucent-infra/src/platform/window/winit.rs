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

//! A `winit`-backed window system that adopts windows from the event loop.

use lucent_core::event::WindowCloseEvent;
use lucent_core::math::Extent2D;
use lucent_core::platform::{
    CreationError, DisplayTarget, MessageHandler, ModuleHandle, NativeWindowRef,
    NativeWindowSystem, WindowConfig, WindowSizeMode, WindowStyle,
};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use winit::window::Window;

/// A [`NativeWindowSystem`] wrapping windows created by a `winit` event loop.
///
/// `winit` inverts window-creation control: windows can only be made inside
/// the running event loop, against an `ActiveEventLoop`. This system
/// therefore does not create windows itself. The application creates them in
/// its event loop and hands them over through [`adopt`](Self::adopt), which
/// wraps each one as a [`DisplayTarget`]; the factory creation path reports
/// [`CreationError::Unsupported`].
pub struct WinitWindowSystem {
    windows: Mutex<HashMap<NativeWindowRef, Arc<Window>>>,
}

impl fmt::Debug for WinitWindowSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WinitWindowSystem")
    }
}

impl Default for WinitWindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn native_ref_for(window: &Window) -> Result<NativeWindowRef, CreationError> {
    let handle = window
        .window_handle()
        .map_err(|e| CreationError::Backend(format!("Failed to query window handle: {e}")))?;
    match handle.as_raw() {
        RawWindowHandle::Win32(h) => Ok(NativeWindowRef::Win32 {
            hwnd: h.hwnd.get(),
            hinstance: h.hinstance.map(|i| i.get()).unwrap_or(0),
        }),
        RawWindowHandle::Xlib(h) => Ok(NativeWindowRef::Xlib {
            window: h.window as u64,
        }),
        RawWindowHandle::Wayland(h) => Ok(NativeWindowRef::Wayland {
            surface: h.surface.as_ptr() as usize,
        }),
        RawWindowHandle::AppKit(h) => Ok(NativeWindowRef::AppKit {
            ns_view: h.ns_view.as_ptr() as usize,
        }),
        other => Err(CreationError::Unsupported(format!(
            "window handle type {other:?} is not supported"
        ))),
    }
}

impl WinitWindowSystem {
    /// Creates a system with no adopted windows.
    pub fn new() -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Wraps a window created by the application's event loop as a target.
    ///
    /// The system takes ownership: the window closes when it is destroyed
    /// through the returned target.
    ///
    /// ## Errors
    /// [`CreationError::Unsupported`] if the window's handle type is not one
    /// this crate understands, or [`CreationError::Backend`] if `winit`
    /// cannot produce a handle at all.
    pub fn adopt(
        system: &Arc<WinitWindowSystem>,
        window: Window,
    ) -> Result<DisplayTarget, CreationError> {
        let native = native_ref_for(&window)?;
        log::info!(
            "Adopted winit window {:?} as display target {:?}.",
            window.id(),
            native
        );
        system.lock_windows()?.insert(native, Arc::new(window));
        let shared: Arc<dyn NativeWindowSystem> = system.clone();
        Ok(DisplayTarget::from_parts(native, shared))
    }

    /// Returns the number of windows currently adopted.
    pub fn adopted_window_count(&self) -> usize {
        self.try_windows().map_or(0, |w| w.len())
    }

    fn lock_windows(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<NativeWindowRef, Arc<Window>>>, CreationError> {
        self.windows
            .lock()
            .map_err(|e| CreationError::Backend(format!("Mutex poisoned (winit windows): {e}")))
    }

    fn try_windows(&self) -> Option<MutexGuard<'_, HashMap<NativeWindowRef, Arc<Window>>>> {
        match self.windows.lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                log::error!("Winit window map mutex was poisoned.");
                None
            }
        }
    }
}

impl NativeWindowSystem for WinitWindowSystem {
    fn module_handle(&self) -> Result<ModuleHandle, CreationError> {
        Err(CreationError::Unsupported(
            "winit owns window creation; create windows in the event loop and adopt them"
                .to_string(),
        ))
    }

    fn register_window_class(
        &self,
        _class_name: &str,
        _handler: MessageHandler,
    ) -> Result<(), CreationError> {
        Err(CreationError::Unsupported(
            "winit manages window classes internally".to_string(),
        ))
    }

    fn outer_extent_for(
        &self,
        client: Extent2D,
        _style: WindowStyle,
        _size_mode: WindowSizeMode,
    ) -> Extent2D {
        // winit sizes windows by their inner (client) area.
        client
    }

    fn create_window(
        &self,
        _class_name: &str,
        config: &WindowConfig,
        _outer: Extent2D,
    ) -> Result<NativeWindowRef, CreationError> {
        Err(CreationError::Unsupported(format!(
            "cannot create '{}' directly; create it in the event loop and adopt it",
            config.title
        )))
    }

    fn show_window(&self, window: &NativeWindowRef) {
        if let Some(windows) = self.try_windows() {
            if let Some(adopted) = windows.get(window) {
                adopted.set_visible(true);
            }
        }
    }

    fn request_initial_paint(&self, window: &NativeWindowRef) {
        if let Some(windows) = self.try_windows() {
            if let Some(adopted) = windows.get(window) {
                adopted.request_redraw();
            }
        }
    }

    fn destroy_window(
        &self,
        window: &NativeWindowRef,
        _close_event: &WindowCloseEvent,
    ) -> Result<(), CreationError> {
        let removed = self.lock_windows()?.remove(window);
        match removed {
            // Dropping the last Arc closes the native window.
            Some(adopted) => {
                log::info!("Releasing adopted winit window {:?}.", adopted.id());
                Ok(())
            }
            None => Err(CreationError::UnknownWindow),
        }
    }

    fn window_is_live(&self, window: &NativeWindowRef) -> bool {
        self.try_windows().is_some_and(|w| w.contains_key(window))
    }
}
