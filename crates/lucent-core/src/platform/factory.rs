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

//! Creates display targets on top of a [`NativeWindowSystem`].

use crate::platform::config::WindowConfig;
use crate::platform::display_target::DisplayTarget;
use crate::platform::error::CreationError;
use crate::platform::window_system::{
    default_message_handler, MessageHandler, NativeWindowSystem, SharedWindowSystem,
};
use std::sync::Arc;

/// Creates native windows and hands them out as opaque [`DisplayTarget`]s.
///
/// The factory owns the process's window-class state: the class is registered
/// on the first [`create_target`](Self::create_target) call, named after that
/// first window's title, and reused by every later window regardless of its
/// title. Create one factory per process and share it wherever windows are
/// made.
#[derive(Debug)]
pub struct DisplayTargetFactory {
    system: SharedWindowSystem,
    registered_class: Option<String>,
}

/// Derives the window class name from a window title: whitespace is stripped
/// and a fixed suffix appended, so "My Game" registers as "MyGame_WindowClass".
fn window_class_name(title: &str) -> String {
    let stripped: String = title.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{stripped}_WindowClass")
}

impl DisplayTargetFactory {
    /// Creates a factory backed by the given window system.
    pub fn new(system: Arc<dyn NativeWindowSystem>) -> Self {
        Self {
            system,
            registered_class: None,
        }
    }

    /// Returns the class name registered by the first created window, if any.
    pub fn registered_class(&self) -> Option<&str> {
        self.registered_class.as_deref()
    }

    /// Creates a native window and returns it as an opaque target.
    ///
    /// The window comes back visible, with its first paint requested, and with
    /// a client area exactly matching `config.width` x `config.height`.
    ///
    /// ## Arguments
    /// * `config` - Title, client size, style, and size mode for the window.
    /// * `handler` - The message handler to install with the window class. The
    ///   handler is per class: it is consulted only on the call that performs
    ///   the registration, and later calls must pass `None` or accept that
    ///   their handler is ignored. Passing `None` installs
    ///   [`default_message_handler`].
    ///
    /// ## Errors
    /// One [`CreationError`] variant per platform step that can fail: module
    /// handle lookup, class registration, and window creation, each carrying
    /// the platform's error code.
    pub fn create_target(
        &mut self,
        config: &WindowConfig,
        handler: Option<MessageHandler>,
    ) -> Result<DisplayTarget, CreationError> {
        let module = self.system.module_handle()?;
        log::debug!("Creating display target against module {module:?}.");

        if self.registered_class.is_none() {
            let class_name = window_class_name(&config.title);
            let handler = handler.unwrap_or_else(default_message_handler);
            self.system.register_window_class(&class_name, handler)?;
            log::debug!("Registered window class '{class_name}'.");
            self.registered_class = Some(class_name);
        } else if handler.is_some() {
            log::warn!(
                "Ignoring message handler for '{}': the window class is already registered.",
                config.title
            );
        }

        // The registration branch above always fills the slot.
        let class_name = match self.registered_class.as_deref() {
            Some(name) => name,
            None => {
                return Err(CreationError::Backend(
                    "window class registration was skipped".to_string(),
                ))
            }
        };

        let outer = self
            .system
            .outer_extent_for(config.client_extent(), config.style, config.size_mode);
        let native = self.system.create_window(class_name, config, outer)?;

        self.system.show_window(&native);
        self.system.request_initial_paint(&native);

        log::info!(
            "Created display target '{}' ({}x{}, {:?}, {:?}).",
            config.title,
            config.width,
            config.height,
            config.style,
            config.size_mode
        );
        Ok(DisplayTarget::from_parts(native, Arc::clone(&self.system)))
    }

    /// Reserved extension point for child windows (viewports, tool panes).
    ///
    /// ## Errors
    /// Always [`CreationError::Unsupported`] for now.
    pub fn create_sub_target(
        &mut self,
        _parent: &DisplayTarget,
        _config: &WindowConfig,
    ) -> Result<DisplayTarget, CreationError> {
        Err(CreationError::Unsupported(
            "child display targets are not implemented; create top-level targets instead"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::WindowCloseEvent;
    use crate::math::Extent2D;
    use crate::platform::config::{WindowSizeMode, WindowStyle};
    use crate::platform::display_target::NativeWindowRef;
    use crate::platform::window_system::{MessageResponse, ModuleHandle, WindowMessage};
    use std::fmt;
    use std::sync::Mutex;

    const FRAME_DX: u32 = 16;
    const FRAME_DY: u32 = 39;

    /// Records every call the factory makes, in order.
    #[derive(Default)]
    struct RecordingState {
        module_handle_calls: u32,
        registrations: Vec<String>,
        handlers: Vec<MessageHandler>,
        created: Vec<(String, String, Extent2D)>,
        shown: Vec<NativeWindowRef>,
        painted: Vec<NativeWindowRef>,
        next_id: u64,
        fail_module_handle: Option<i32>,
        fail_creation: Option<i32>,
    }

    #[derive(Default)]
    struct RecordingWindowSystem {
        state: Mutex<RecordingState>,
    }

    impl fmt::Debug for RecordingWindowSystem {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("RecordingWindowSystem")
        }
    }

    impl NativeWindowSystem for RecordingWindowSystem {
        fn module_handle(&self) -> Result<ModuleHandle, CreationError> {
            let mut state = self.state.lock().unwrap();
            state.module_handle_calls += 1;
            if let Some(os_code) = state.fail_module_handle.take() {
                return Err(CreationError::ModuleHandleUnavailable { os_code });
            }
            Ok(ModuleHandle(0x400000))
        }

        fn register_window_class(
            &self,
            class_name: &str,
            handler: MessageHandler,
        ) -> Result<(), CreationError> {
            let mut state = self.state.lock().unwrap();
            state.registrations.push(class_name.to_string());
            state.handlers.push(handler);
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
                _ => client,
            }
        }

        fn create_window(
            &self,
            class_name: &str,
            config: &WindowConfig,
            outer: Extent2D,
        ) -> Result<NativeWindowRef, CreationError> {
            let mut state = self.state.lock().unwrap();
            if let Some(os_code) = state.fail_creation.take() {
                return Err(CreationError::WindowCreationFailed {
                    title: config.title.clone(),
                    os_code,
                });
            }
            state
                .created
                .push((class_name.to_string(), config.title.clone(), outer));
            state.next_id += 1;
            Ok(NativeWindowRef::Headless { id: state.next_id })
        }

        fn show_window(&self, window: &NativeWindowRef) {
            self.state.lock().unwrap().shown.push(*window);
        }

        fn request_initial_paint(&self, window: &NativeWindowRef) {
            self.state.lock().unwrap().painted.push(*window);
        }

        fn destroy_window(
            &self,
            _window: &NativeWindowRef,
            _close_event: &WindowCloseEvent,
        ) -> Result<(), CreationError> {
            Ok(())
        }

        fn window_is_live(&self, _window: &NativeWindowRef) -> bool {
            true
        }
    }

    fn factory_with_mock() -> (DisplayTargetFactory, Arc<RecordingWindowSystem>) {
        let system = Arc::new(RecordingWindowSystem::default());
        let factory = DisplayTargetFactory::new(system.clone());
        (factory, system)
    }

    #[test]
    fn class_name_strips_whitespace_from_the_first_title() {
        let (mut factory, system) = factory_with_mock();
        let config = WindowConfig {
            title: "My  Test\tGame".to_string(),
            ..Default::default()
        };

        factory.create_target(&config, None).expect("create");

        let state = system.state.lock().unwrap();
        assert_eq!(state.registrations, vec!["MyTestGame_WindowClass"]);
        assert_eq!(factory.registered_class(), Some("MyTestGame_WindowClass"));
    }

    #[test]
    fn second_target_reuses_the_registered_class() {
        let (mut factory, system) = factory_with_mock();
        let first = WindowConfig {
            title: "Main".to_string(),
            ..Default::default()
        };
        let second = WindowConfig {
            title: "Tools".to_string(),
            ..Default::default()
        };

        factory.create_target(&first, None).expect("first");
        factory.create_target(&second, None).expect("second");

        let state = system.state.lock().unwrap();
        assert_eq!(state.registrations.len(), 1, "one registration for two windows");
        assert_eq!(state.created.len(), 2);
        assert_eq!(state.created[0].0, "Main_WindowClass");
        assert_eq!(state.created[1].0, "Main_WindowClass", "second window reuses the class");
    }

    #[test]
    fn missing_handler_installs_the_default() {
        let (mut factory, system) = factory_with_mock();
        factory
            .create_target(&WindowConfig::default(), None)
            .expect("create");

        let state = system.state.lock().unwrap();
        let handler = state.handlers.first().expect("handler installed");
        let response = handler(
            &NativeWindowRef::Headless { id: 1 },
            &WindowMessage::CloseRequested,
        );
        assert_eq!(response, MessageResponse::PassThrough);
    }

    #[test]
    fn outer_extent_preserves_the_requested_client_area() {
        let (mut factory, system) = factory_with_mock();
        let config = WindowConfig {
            width: 800,
            height: 600,
            style: WindowStyle::Windowed,
            ..Default::default()
        };

        factory.create_target(&config, None).expect("create");

        let state = system.state.lock().unwrap();
        let (_, _, outer) = &state.created[0];
        assert_eq!(outer.width, 800 + FRAME_DX);
        assert_eq!(outer.height, 600 + FRAME_DY);
    }

    #[test]
    fn window_is_shown_and_painted_before_return() {
        let (mut factory, system) = factory_with_mock();
        let target = factory
            .create_target(&WindowConfig::default(), None)
            .expect("create");

        let state = system.state.lock().unwrap();
        assert_eq!(state.shown, vec![target.native_ref()]);
        assert_eq!(state.painted, vec![target.native_ref()]);
    }

    #[test]
    fn module_handle_failure_carries_the_os_code() {
        let (mut factory, system) = factory_with_mock();
        system.state.lock().unwrap().fail_module_handle = Some(126);

        let err = factory
            .create_target(&WindowConfig::default(), None)
            .expect_err("module handle failure should propagate");
        match err {
            CreationError::ModuleHandleUnavailable { os_code } => assert_eq!(os_code, 126),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn creation_failure_does_not_poison_the_class_state() {
        let (mut factory, system) = factory_with_mock();
        system.state.lock().unwrap().fail_creation = Some(8);

        let err = factory
            .create_target(&WindowConfig::default(), None)
            .expect_err("window creation failure should propagate");
        match err {
            CreationError::WindowCreationFailed { os_code, .. } => assert_eq!(os_code, 8),
            other => panic!("unexpected error: {other:?}"),
        }

        // The class stays registered, and the next attempt succeeds.
        factory
            .create_target(&WindowConfig::default(), None)
            .expect("retry after failure");
        assert_eq!(system.state.lock().unwrap().registrations.len(), 1);
    }

    #[test]
    fn sub_targets_are_not_supported_yet() {
        let (mut factory, _system) = factory_with_mock();
        let parent = factory
            .create_target(&WindowConfig::default(), None)
            .expect("create");

        let err = factory
            .create_sub_target(&parent, &WindowConfig::default())
            .expect_err("sub targets are reserved");
        assert!(matches!(err, CreationError::Unsupported(_)));
    }

    #[test]
    fn whitespace_only_title_still_forms_a_class_name() {
        let (mut factory, system) = factory_with_mock();
        let config = WindowConfig {
            title: "   ".to_string(),
            ..Default::default()
        };
        factory.create_target(&config, None).expect("create");
        assert_eq!(
            system.state.lock().unwrap().registrations,
            vec!["_WindowClass"]
        );
    }
}
