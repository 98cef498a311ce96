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

//! Error types for display-target creation and destruction.

use std::fmt;

/// An error raised while creating or destroying a display target.
///
/// Variants that originate in the platform API carry the platform's numeric
/// error code (`os_code`) so callers can report the underlying cause.
#[derive(Debug)]
pub enum CreationError {
    /// The process module handle could not be obtained.
    ModuleHandleUnavailable {
        /// The platform error code reported for the failure.
        os_code: i32,
    },
    /// Registering the window class with the platform failed.
    ClassRegistrationFailed {
        /// The class name whose registration was rejected.
        class_name: String,
        /// The platform error code reported for the failure.
        os_code: i32,
    },
    /// The platform refused to create the window itself.
    WindowCreationFailed {
        /// The title of the window that could not be created.
        title: String,
        /// The platform error code reported for the failure.
        os_code: i32,
    },
    /// The referenced window is not (or is no longer) known to the window system.
    UnknownWindow,
    /// The operation is not available on this window system.
    Unsupported(String),
    /// An error originating inside a specific window-system implementation.
    Backend(String),
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::ModuleHandleUnavailable { os_code } => {
                write!(f, "Failed to get module handle (os error {os_code})")
            }
            CreationError::ClassRegistrationFailed {
                class_name,
                os_code,
            } => {
                write!(
                    f,
                    "Failed to register window class '{class_name}' (os error {os_code})"
                )
            }
            CreationError::WindowCreationFailed { title, os_code } => {
                write!(f, "Failed to create window '{title}' (os error {os_code})")
            }
            CreationError::UnknownWindow => {
                write!(f, "The window is not known to the window system.")
            }
            CreationError::Unsupported(msg) => {
                write!(f, "Unsupported display-target operation: {msg}")
            }
            CreationError::Backend(msg) => {
                write!(f, "Window-system backend error: {msg}")
            }
        }
    }
}

impl std::error::Error for CreationError {}
