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

//! Defines the hierarchy of error types for the rendering subsystem.

use crate::renderer::api::buffer::{BufferMemoryType, MapType};
use std::fmt;

/// The kind of GPU resource an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A buffer resource.
    Buffer,
    /// A texture resource.
    Texture,
    /// A shader resource.
    Shader,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Buffer => write!(f, "buffer"),
            ResourceKind::Texture => write!(f, "texture"),
            ResourceKind::Shader => write!(f, "shader"),
        }
    }
}

/// An error related to the creation or use of a GPU resource.
#[derive(Debug)]
pub enum ResourceError {
    /// The handle does not refer to a live resource of the expected kind.
    InvalidHandle {
        /// The kind of resource the handle was used as.
        kind: ResourceKind,
        /// The raw handle value.
        raw: u64,
    },
    /// An access (update, read, map, or region copy) fell outside the resource.
    OutOfBounds {
        /// The kind of resource that was accessed.
        kind: ResourceKind,
        /// The raw handle value.
        raw: u64,
        /// A human-readable description of the offending range or region.
        details: String,
    },
    /// The backend rejected the resource at creation time.
    CreationFailed {
        /// The kind of resource that failed to create.
        kind: ResourceKind,
        /// Detailed error messages from the backend.
        details: String,
    },
    /// The requested map access is not valid for the buffer's memory type.
    InvalidMapAccess {
        /// The memory type the buffer was created with.
        memory: BufferMemoryType,
        /// The access that was requested.
        requested: MapType,
    },
    /// The buffer is already mapped.
    AlreadyMapped {
        /// The raw handle value.
        raw: u64,
    },
    /// The buffer is not currently mapped.
    NotMapped {
        /// The raw handle value.
        raw: u64,
    },
    /// The operation is rejected while the buffer is mapped.
    CurrentlyMapped {
        /// The raw handle value.
        raw: u64,
    },
    /// An error originating from the specific graphics backend implementation.
    Backend(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::InvalidHandle { kind, raw } => {
                write!(f, "Invalid {kind} handle: {raw}")
            }
            ResourceError::OutOfBounds { kind, raw, details } => {
                write!(f, "Out-of-bounds access on {kind} {raw}: {details}")
            }
            ResourceError::CreationFailed { kind, details } => {
                write!(f, "Failed to create {kind}: {details}")
            }
            ResourceError::InvalidMapAccess { memory, requested } => {
                write!(
                    f,
                    "Map access {requested:?} is not valid for {memory:?} memory"
                )
            }
            ResourceError::AlreadyMapped { raw } => {
                write!(f, "Buffer {raw} is already mapped")
            }
            ResourceError::NotMapped { raw } => {
                write!(f, "Buffer {raw} is not mapped")
            }
            ResourceError::CurrentlyMapped { raw } => {
                write!(f, "Buffer {raw} is mapped; unmap it before this operation")
            }
            ResourceError::Backend(msg) => {
                write!(f, "Backend-specific resource error: {msg}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// An error related to applying a renderer settings group.
#[derive(Debug)]
pub enum SettingsError {
    /// The requested values are outside what the active backend supports.
    Unsupported {
        /// The settings group that was rejected.
        group: &'static str,
        /// Why the values were rejected.
        details: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Unsupported { group, details } => {
                write!(f, "Unsupported {group} settings: {details}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// A high-level error that can occur within the main rendering system.
#[derive(Debug)]
pub enum RenderError {
    /// An operation was attempted before the rendering system was initialized,
    /// or after it was shut down.
    NotInitialized,
    /// `initialize` was called on a renderer that is already initialized.
    AlreadyInitialized,
    /// A failure occurred during the initialization of the graphics backend.
    InitializationFailed(String),
    /// `present` was called without a completed `render` since the last present.
    PresentWithoutRender,
    /// An error occurred while managing a GPU resource.
    Resource(ResourceError),
    /// A settings group could not be applied.
    Settings(SettingsError),
    /// The adapter ordinal does not name an adapter on this system.
    UnknownAdapter(u32),
    /// The output ordinal does not name an output of the given adapter.
    UnknownOutput(u32),
    /// The graphics device was lost (e.g., GPU driver crashed or was updated).
    /// This is a catastrophic error that typically requires reinitialization.
    DeviceLost,
    /// An error originating from the specific graphics backend implementation.
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotInitialized => {
                write!(f, "The rendering system is not initialized.")
            }
            RenderError::AlreadyInitialized => {
                write!(f, "The rendering system is already initialized.")
            }
            RenderError::InitializationFailed(msg) => {
                write!(f, "Failed to initialize graphics backend: {msg}")
            }
            RenderError::PresentWithoutRender => {
                write!(f, "Present was called without a completed render.")
            }
            RenderError::Resource(err) => {
                write!(f, "Graphics resource operation failed: {err}")
            }
            RenderError::Settings(err) => {
                write!(f, "Settings operation failed: {err}")
            }
            RenderError::UnknownAdapter(local_id) => {
                write!(f, "No adapter with local ID {local_id}")
            }
            RenderError::UnknownOutput(local_id) => {
                write!(f, "No output with local ID {local_id}")
            }
            RenderError::DeviceLost => write!(
                f,
                "The graphics device was lost and needs to be reinitialized."
            ),
            RenderError::Backend(msg) => {
                write!(f, "Backend-specific render error: {msg}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Resource(err) => Some(err),
            RenderError::Settings(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::Resource(err)
    }
}

impl From<SettingsError> for RenderError {
    fn from(err: SettingsError) -> Self {
        RenderError::Settings(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn resource_error_display() {
        let err = ResourceError::InvalidHandle {
            kind: ResourceKind::Buffer,
            raw: 42,
        };
        assert_eq!(format!("{err}"), "Invalid buffer handle: 42");

        let err_oob = ResourceError::OutOfBounds {
            kind: ResourceKind::Buffer,
            raw: 7,
            details: "offset 1024 + len 16 exceeds size 1024".to_string(),
        };
        assert_eq!(
            format!("{err_oob}"),
            "Out-of-bounds access on buffer 7: offset 1024 + len 16 exceeds size 1024"
        );
    }

    #[test]
    fn map_access_error_display() {
        let err = ResourceError::InvalidMapAccess {
            memory: BufferMemoryType::Default,
            requested: MapType::Write,
        };
        assert_eq!(
            format!("{err}"),
            "Map access Write is not valid for Default memory"
        );
    }

    #[test]
    fn render_error_display_wrapping_resource_error() {
        let res_err = ResourceError::InvalidHandle {
            kind: ResourceKind::Texture,
            raw: 101,
        };
        let render_err: RenderError = res_err.into();
        assert_eq!(
            format!("{render_err}"),
            "Graphics resource operation failed: Invalid texture handle: 101"
        );
        assert!(render_err.source().is_some());
    }

    #[test]
    fn render_error_display_wrapping_settings_error() {
        let settings_err = SettingsError::Unsupported {
            group: "anti-aliasing",
            details: "sample count 3 is not one of 1, 2, 4, 8".to_string(),
        };
        let render_err: RenderError = settings_err.into();
        assert_eq!(
            format!("{render_err}"),
            "Settings operation failed: Unsupported anti-aliasing settings: sample count 3 is not one of 1, 2, 4, 8"
        );
        assert!(render_err.source().is_some());
    }
}
