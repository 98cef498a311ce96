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

//! A virtual window system for tests and server-side runs.

use lucent_core::event::WindowCloseEvent;
use lucent_core::math::Extent2D;
use lucent_core::platform::{
    CreationError, MessageHandler, MessageResponse, ModuleHandle, NativeWindowRef,
    NativeWindowSystem, WindowConfig, WindowMessage, WindowSizeMode, WindowStyle,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

// Virtual frame thickness for Windowed style, mimicking a Win32
// WS_OVERLAPPEDWINDOW frame at 100% scaling.
const FRAME_DX: u32 = 16;
const FRAME_DY: u32 = 39;

// Platform error codes mirrored from Win32 so injected and organic failures
// read the same way in logs.
const ERROR_CLASS_ALREADY_EXISTS: i32 = 1410;
const ERROR_CANNOT_FIND_WND_CLASS: i32 = 1407;

struct VirtualWindow {
    title: String,
    client: Extent2D,
    shown: bool,
    painted: bool,
}

#[derive(Default)]
struct HeadlessState {
    registered_class: Option<(String, MessageHandler)>,
    registration_count: u32,
    windows: HashMap<u64, VirtualWindow>,
    fail_next_module_handle: Option<i32>,
    fail_next_class_registration: Option<i32>,
    fail_next_window_creation: Option<i32>,
}

/// A [`NativeWindowSystem`] that manages virtual windows entirely in memory.
///
/// Windows exist only as bookkeeping entries, so the factory and renderer
/// stacks can run in tests and on machines with no display server. The system
/// mimics the observable behavior of a real platform: one window class,
/// platform-style error codes, message dispatch on paint and destroy, and a
/// Windowed-style frame added around the client area.
///
/// Failure injection (`fail_next_*`) arms a one-shot error for the next call
/// of the matching operation, for exercising the error paths.
pub struct HeadlessWindowSystem {
    state: Mutex<HeadlessState>,
    next_window_id: AtomicU64,
}

impl fmt::Debug for HeadlessWindowSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HeadlessWindowSystem")
    }
}

impl Default for HeadlessWindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn headless_id(window: &NativeWindowRef) -> Option<u64> {
    match window {
        NativeWindowRef::Headless { id } => Some(*id),
        _ => None,
    }
}

impl HeadlessWindowSystem {
    /// Creates an empty virtual window system.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HeadlessState::default()),
            next_window_id: AtomicU64::new(1),
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, HeadlessState>, CreationError> {
        self.state
            .lock()
            .map_err(|e| CreationError::Backend(format!("Mutex poisoned (window state): {e}")))
    }

    // Lock for the query and notification paths, which have no error channel.
    fn try_state(&self) -> Option<MutexGuard<'_, HeadlessState>> {
        match self.state.lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                log::error!("Headless window state mutex was poisoned.");
                None
            }
        }
    }

    // --- Instrumentation ---

    /// Returns how many window classes have been registered so far.
    pub fn class_registration_count(&self) -> u32 {
        self.try_state().map_or(0, |s| s.registration_count)
    }

    /// Returns the name of the registered window class, if any.
    pub fn registered_class(&self) -> Option<String> {
        self.try_state()
            .and_then(|s| s.registered_class.as_ref().map(|(name, _)| name.clone()))
    }

    /// Returns the number of windows that have been created and not destroyed.
    pub fn live_window_count(&self) -> usize {
        self.try_state().map_or(0, |s| s.windows.len())
    }

    /// Returns whether `show_window` has been called for the window.
    pub fn window_was_shown(&self, window: &NativeWindowRef) -> bool {
        let Some(id) = headless_id(window) else {
            return false;
        };
        self.try_state()
            .is_some_and(|s| s.windows.get(&id).is_some_and(|w| w.shown))
    }

    /// Returns whether `request_initial_paint` has been called for the window.
    pub fn window_was_painted(&self, window: &NativeWindowRef) -> bool {
        let Some(id) = headless_id(window) else {
            return false;
        };
        self.try_state()
            .is_some_and(|s| s.windows.get(&id).is_some_and(|w| w.painted))
    }

    /// Returns the client area the window was created with.
    pub fn window_client_extent(&self, window: &NativeWindowRef) -> Option<Extent2D> {
        let id = headless_id(window)?;
        self.try_state()
            .and_then(|s| s.windows.get(&id).map(|w| w.client))
    }

    /// Returns the title the window was created with.
    pub fn window_title(&self, window: &NativeWindowRef) -> Option<String> {
        let id = headless_id(window)?;
        self.try_state()
            .and_then(|s| s.windows.get(&id).map(|w| w.title.clone()))
    }

    // --- Failure injection ---

    /// Makes the next `module_handle` call fail with the given platform code.
    pub fn fail_next_module_handle(&self, os_code: i32) {
        if let Some(mut state) = self.try_state() {
            state.fail_next_module_handle = Some(os_code);
        }
    }

    /// Makes the next `register_window_class` call fail with the given code.
    pub fn fail_next_class_registration(&self, os_code: i32) {
        if let Some(mut state) = self.try_state() {
            state.fail_next_class_registration = Some(os_code);
        }
    }

    /// Makes the next `create_window` call fail with the given platform code.
    pub fn fail_next_window_creation(&self, os_code: i32) {
        if let Some(mut state) = self.try_state() {
            state.fail_next_window_creation = Some(os_code);
        }
    }
}

impl NativeWindowSystem for HeadlessWindowSystem {
    fn module_handle(&self) -> Result<ModuleHandle, CreationError> {
        let mut state = self.lock_state()?;
        if let Some(os_code) = state.fail_next_module_handle.take() {
            return Err(CreationError::ModuleHandleUnavailable { os_code });
        }
        Ok(ModuleHandle(0x0040_0000))
    }

    fn register_window_class(
        &self,
        class_name: &str,
        handler: MessageHandler,
    ) -> Result<(), CreationError> {
        let mut state = self.lock_state()?;
        if let Some(os_code) = state.fail_next_class_registration.take() {
            return Err(CreationError::ClassRegistrationFailed {
                class_name: class_name.to_string(),
                os_code,
            });
        }
        if state.registered_class.is_some() {
            return Err(CreationError::ClassRegistrationFailed {
                class_name: class_name.to_string(),
                os_code: ERROR_CLASS_ALREADY_EXISTS,
            });
        }
        state.registered_class = Some((class_name.to_string(), handler));
        state.registration_count += 1;
        log::debug!("Headless: registered window class '{class_name}'.");
        Ok(())
    }

    fn outer_extent_for(
        &self,
        client: Extent2D,
        style: WindowStyle,
        _size_mode: WindowSizeMode,
    ) -> Extent2D {
        match style {
            WindowStyle::Windowed => Extent2D {
                width: client.width + FRAME_DX,
                height: client.height + FRAME_DY,
            },
            // Fullscreen and borderless windows have no frame.
            WindowStyle::Fullscreen | WindowStyle::Borderless => client,
        }
    }

    fn create_window(
        &self,
        class_name: &str,
        config: &WindowConfig,
        _outer: Extent2D,
    ) -> Result<NativeWindowRef, CreationError> {
        let mut state = self.lock_state()?;
        if let Some(os_code) = state.fail_next_window_creation.take() {
            return Err(CreationError::WindowCreationFailed {
                title: config.title.clone(),
                os_code,
            });
        }
        let class_matches = state
            .registered_class
            .as_ref()
            .is_some_and(|(name, _)| name == class_name);
        if !class_matches {
            return Err(CreationError::WindowCreationFailed {
                title: config.title.clone(),
                os_code: ERROR_CANNOT_FIND_WND_CLASS,
            });
        }

        let id = self.next_window_id.fetch_add(1, Ordering::Relaxed);
        state.windows.insert(
            id,
            VirtualWindow {
                title: config.title.clone(),
                client: config.client_extent(),
                shown: false,
                painted: false,
            },
        );
        log::debug!("Headless: created window {id} ('{}').", config.title);
        Ok(NativeWindowRef::Headless { id })
    }

    fn show_window(&self, window: &NativeWindowRef) {
        let Some(id) = headless_id(window) else {
            return;
        };
        if let Some(mut state) = self.try_state() {
            if let Some(entry) = state.windows.get_mut(&id) {
                entry.shown = true;
            }
        }
    }

    fn request_initial_paint(&self, window: &NativeWindowRef) {
        let Some(id) = headless_id(window) else {
            return;
        };
        let handler = {
            let Some(mut state) = self.try_state() else {
                return;
            };
            match state.windows.get_mut(&id) {
                Some(entry) => entry.painted = true,
                None => return,
            }
            state.registered_class.as_ref().map(|(_, h)| h.clone())
        };
        // Dispatch outside the lock: handlers may call back into this system.
        if let Some(handler) = handler {
            let response = handler(window, &WindowMessage::RedrawRequested);
            if response == MessageResponse::Handled {
                log::trace!("Headless: paint of window {id} handled by the application.");
            }
        }
    }

    fn destroy_window(
        &self,
        window: &NativeWindowRef,
        _close_event: &WindowCloseEvent,
    ) -> Result<(), CreationError> {
        let id = headless_id(window).ok_or(CreationError::UnknownWindow)?;
        let handler = {
            let mut state = self.lock_state()?;
            if state.windows.remove(&id).is_none() {
                return Err(CreationError::UnknownWindow);
            }
            state.registered_class.as_ref().map(|(_, h)| h.clone())
        };
        if let Some(handler) = handler {
            handler(window, &WindowMessage::CloseRequested);
        }
        log::debug!("Headless: destroyed window {id}.");
        Ok(())
    }

    fn window_is_live(&self, window: &NativeWindowRef) -> bool {
        let Some(id) = headless_id(window) else {
            return false;
        };
        self.try_state().is_some_and(|s| s.windows.contains_key(&id))
    }
}
