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

//! The opaque window handle shared between engine code and renderer backends.

use crate::event::WindowCloseEvent;
use crate::platform::error::CreationError;
use crate::platform::window_system::SharedWindowSystem;
use raw_window_handle::{
    AppKitWindowHandle, RawWindowHandle, WaylandWindowHandle, Win32WindowHandle, XlibWindowHandle,
};
use std::ffi::{c_ulong, c_void};
use std::num::NonZeroIsize;
use std::ptr::NonNull;

/// The platform-specific payload behind a [`DisplayTarget`].
///
/// One tagged union instead of per-platform conditional compilation keeps the
/// type inspectable in tests and lets a single build carry the headless
/// variant next to the real one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeWindowRef {
    /// A Win32 `HWND` plus the owning module's `HINSTANCE`.
    Win32 {
        /// The window handle value.
        hwnd: isize,
        /// The module instance the window belongs to, or 0 when unknown.
        hinstance: isize,
    },
    /// An X11 window ID.
    Xlib {
        /// The X11 window resource ID.
        window: u64,
    },
    /// A Wayland surface pointer.
    Wayland {
        /// The `wl_surface` pointer value.
        surface: usize,
    },
    /// A macOS AppKit view pointer.
    AppKit {
        /// The `NSView` pointer value.
        ns_view: usize,
    },
    /// A virtual window owned by a headless window system.
    Headless {
        /// The headless system's window ID.
        id: u64,
    },
}

impl NativeWindowRef {
    /// Converts this reference into a [`RawWindowHandle`] for graphics backends.
    ///
    /// ## Returns
    /// `None` for headless windows and for payloads that cannot form a valid
    /// handle (such as a null `HWND`).
    pub fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        match *self {
            NativeWindowRef::Win32 { hwnd, hinstance } => {
                let hwnd = NonZeroIsize::new(hwnd)?;
                let mut handle = Win32WindowHandle::new(hwnd);
                handle.hinstance = NonZeroIsize::new(hinstance);
                Some(RawWindowHandle::Win32(handle))
            }
            NativeWindowRef::Xlib { window } => {
                Some(RawWindowHandle::Xlib(XlibWindowHandle::new(
                    window as c_ulong,
                )))
            }
            NativeWindowRef::Wayland { surface } => {
                let surface = NonNull::new(surface as *mut c_void)?;
                Some(RawWindowHandle::Wayland(WaylandWindowHandle::new(surface)))
            }
            NativeWindowRef::AppKit { ns_view } => {
                let ns_view = NonNull::new(ns_view as *mut c_void)?;
                Some(RawWindowHandle::AppKit(AppKitWindowHandle::new(ns_view)))
            }
            NativeWindowRef::Headless { .. } => None,
        }
    }
}

/// An opaque handle to a native window.
///
/// Engine code passes a `DisplayTarget` to
/// [`Renderer::initialize`](crate::renderer::Renderer::initialize) without
/// ever seeing the platform handle inside. Cloning copies the handle, not the
/// window; [`destroy`](Self::destroy) is expected to be called exactly once
/// per window, and callers own that bookkeeping.
#[derive(Debug, Clone)]
pub struct DisplayTarget {
    native: NativeWindowRef,
    system: SharedWindowSystem,
}

impl DisplayTarget {
    /// Assembles a target from a native reference and the system that owns it.
    ///
    /// Intended for [`NativeWindowSystem`](crate::platform::NativeWindowSystem)
    /// implementations that materialize targets from externally created
    /// windows; engine code normally goes through the
    /// [`DisplayTargetFactory`](crate::platform::DisplayTargetFactory).
    pub fn from_parts(native: NativeWindowRef, system: SharedWindowSystem) -> Self {
        Self { native, system }
    }

    /// Returns the platform payload for this window.
    #[inline]
    pub fn native_ref(&self) -> NativeWindowRef {
        self.native
    }

    /// Returns the Win32 `HWND`, or `None` on other platforms.
    pub fn win32_hwnd(&self) -> Option<isize> {
        match self.native {
            NativeWindowRef::Win32 { hwnd, .. } => Some(hwnd),
            _ => None,
        }
    }

    /// Returns the X11 window ID, or `None` on other platforms.
    pub fn xlib_window(&self) -> Option<u64> {
        match self.native {
            NativeWindowRef::Xlib { window } => Some(window),
            _ => None,
        }
    }

    /// Returns the Wayland surface pointer value, or `None` on other platforms.
    pub fn wayland_surface(&self) -> Option<usize> {
        match self.native {
            NativeWindowRef::Wayland { surface } => Some(surface),
            _ => None,
        }
    }

    /// Returns the AppKit `NSView` pointer value, or `None` on other platforms.
    pub fn appkit_view(&self) -> Option<usize> {
        match self.native {
            NativeWindowRef::AppKit { ns_view } => Some(ns_view),
            _ => None,
        }
    }

    /// Returns the headless window ID, or `None` for real windows.
    pub fn headless_id(&self) -> Option<u64> {
        match self.native {
            NativeWindowRef::Headless { id } => Some(id),
            _ => None,
        }
    }

    /// Converts the target into a [`RawWindowHandle`] for graphics backends.
    pub fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        self.native.raw_window_handle()
    }

    /// Reports whether the underlying window still exists.
    pub fn is_live(&self) -> bool {
        self.system.window_is_live(&self.native)
    }

    /// Destroys the underlying native window.
    ///
    /// The close event is consumed as the caller's statement of intent; this
    /// subsystem does not inspect it.
    ///
    /// ## Errors
    /// [`CreationError::UnknownWindow`] if the window was already destroyed
    /// or never belonged to the owning window system.
    pub fn destroy(&self, close_event: &WindowCloseEvent) -> Result<(), CreationError> {
        log::info!("Destroying display target {:?}.", self.native);
        self.system.destroy_window(&self.native, close_event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accessors_reject_other_platforms() {
        let win32 = NativeWindowRef::Win32 {
            hwnd: 0x10,
            hinstance: 0x20,
        };
        let headless = NativeWindowRef::Headless { id: 3 };

        // Accessor logic lives on DisplayTarget, but the match arms only
        // depend on the payload, so exercise them through the enum directly.
        match win32 {
            NativeWindowRef::Win32 { hwnd, hinstance } => {
                assert_eq!(hwnd, 0x10);
                assert_eq!(hinstance, 0x20);
            }
            _ => panic!("expected a Win32 payload"),
        }
        assert_ne!(win32, headless);
    }

    #[test]
    fn win32_raw_handle_keeps_hwnd_and_hinstance() {
        let native = NativeWindowRef::Win32 {
            hwnd: 0x1234,
            hinstance: 0x5678,
        };
        match native.raw_window_handle() {
            Some(RawWindowHandle::Win32(handle)) => {
                assert_eq!(handle.hwnd.get(), 0x1234);
                assert_eq!(handle.hinstance.map(|h| h.get()), Some(0x5678));
            }
            other => panic!("expected a Win32 raw handle, got {other:?}"),
        }
    }

    #[test]
    fn null_hwnd_yields_no_raw_handle() {
        let native = NativeWindowRef::Win32 {
            hwnd: 0,
            hinstance: 0,
        };
        assert!(native.raw_window_handle().is_none());
    }

    #[test]
    fn headless_windows_have_no_raw_handle() {
        let native = NativeWindowRef::Headless { id: 42 };
        assert!(native.raw_window_handle().is_none());
    }

    #[test]
    fn xlib_raw_handle_keeps_the_window_id() {
        let native = NativeWindowRef::Xlib { window: 99 };
        match native.raw_window_handle() {
            Some(RawWindowHandle::Xlib(handle)) => assert_eq!(handle.window as u64, 99),
            other => panic!("expected an Xlib raw handle, got {other:?}"),
        }
    }
}
