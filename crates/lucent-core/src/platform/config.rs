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

//! Window creation parameters.

use crate::math::Extent2D;
use serde::{Deserialize, Serialize};

/// How a window is decorated and composed on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindowStyle {
    /// A decorated window with a title bar and borders.
    #[default]
    Windowed,
    /// An exclusive fullscreen window covering an output.
    Fullscreen,
    /// An undecorated window, typically sized to cover an output.
    Borderless,
}

/// Whether the user may resize the window interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindowSizeMode {
    /// The window frame allows interactive resizing.
    #[default]
    Resizable,
    /// The window keeps the size it was created with.
    FixedSize,
}

/// An immutable description of a window to create.
///
/// `width` and `height` are the requested **client area** in pixels; the
/// factory asks the window system for the matching outer size so the drawable
/// surface comes out exactly as requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// The window title. The first created window's title also seeds the
    /// process-wide window class name.
    pub title: String,
    /// Requested client-area width in pixels.
    pub width: u16,
    /// Requested client-area height in pixels.
    pub height: u16,
    /// Decoration and composition style.
    pub style: WindowStyle,
    /// Interactive resize behavior.
    pub size_mode: WindowSizeMode,
}

impl WindowConfig {
    /// Returns the requested client area as an [`Extent2D`].
    #[inline]
    pub fn client_extent(&self) -> Extent2D {
        Extent2D {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lucent Application".to_string(),
            width: 1024,
            height: 768,
            style: WindowStyle::Windowed,
            size_mode: WindowSizeMode::Resizable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_windowed_and_resizable() {
        let config = WindowConfig::default();
        assert_eq!(config.style, WindowStyle::Windowed);
        assert_eq!(config.size_mode, WindowSizeMode::Resizable);
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
    }

    #[test]
    fn client_extent_widens_to_u32() {
        let config = WindowConfig {
            width: u16::MAX,
            height: 1,
            ..Default::default()
        };
        let extent = config.client_extent();
        assert_eq!(extent.width, 65535);
        assert_eq!(extent.height, 1);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = WindowConfig {
            title: "Editor".to_string(),
            width: 1280,
            height: 720,
            style: WindowStyle::Borderless,
            size_mode: WindowSizeMode::FixedSize,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: WindowConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
