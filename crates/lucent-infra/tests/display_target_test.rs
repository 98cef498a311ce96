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

//! Integration tests for the display-target factory driving the headless
//! window system.

use lucent_core::event::{EventBus, WindowCloseEvent};
use lucent_core::platform::{
    CreationError, DisplayTargetFactory, MessageHandler, MessageResponse, WindowConfig,
    WindowMessage,
};
use lucent_infra::platform::HeadlessWindowSystem;
use std::sync::Arc;

fn factory_over(system: &Arc<HeadlessWindowSystem>) -> DisplayTargetFactory {
    let _ = env_logger::builder().is_test(true).try_init();
    DisplayTargetFactory::new(system.clone())
}

#[test]
fn test_two_targets_share_one_window_class() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    // Create two windows with different titles through the same factory
    let first = factory
        .create_target(
            &WindowConfig {
                title: "My Test Game".to_string(),
                ..Default::default()
            },
            None,
        )
        .expect("first window");
    let second = factory
        .create_target(
            &WindowConfig {
                title: "My Test Game Tools".to_string(),
                ..Default::default()
            },
            None,
        )
        .expect("second window");

    // The class is registered exactly once and derives from the first title
    assert_eq!(system.class_registration_count(), 1);
    assert_eq!(
        system.registered_class().as_deref(),
        Some("MyTestGame_WindowClass")
    );

    // Both windows are live and distinct
    assert!(first.is_live());
    assert!(second.is_live());
    assert_eq!(system.live_window_count(), 2);
    assert_ne!(first.native_ref(), second.native_ref());
}

#[test]
fn test_created_windows_are_shown_and_painted() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    let target = factory
        .create_target(&WindowConfig::default(), None)
        .expect("window creation");

    // The factory shows the window and requests the first paint before returning
    assert!(system.window_was_shown(&target.native_ref()));
    assert!(system.window_was_painted(&target.native_ref()));
    assert!(target.is_live());
}

#[test]
fn test_requested_client_area_is_preserved() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    let config = WindowConfig {
        width: 800,
        height: 450,
        ..Default::default()
    };
    let target = factory.create_target(&config, None).expect("window");

    // The headless system stores the client area the factory asked for
    let client = system
        .window_client_extent(&target.native_ref())
        .expect("client extent");
    assert_eq!(client.width, 800);
    assert_eq!(client.height, 450);
}

#[test]
fn test_module_handle_failure_surfaces_the_os_code() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    // 126 is ERROR_MOD_NOT_FOUND on Win32
    system.fail_next_module_handle(126);

    match factory.create_target(&WindowConfig::default(), None) {
        Err(CreationError::ModuleHandleUnavailable { os_code }) => assert_eq!(os_code, 126),
        other => panic!("expected a module-handle failure, got {other:?}"),
    }

    // The failure was one-shot; the next attempt succeeds
    assert!(factory.create_target(&WindowConfig::default(), None).is_ok());
}

#[test]
fn test_window_creation_failure_carries_the_os_code() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    system.fail_next_window_creation(8);

    match factory.create_target(&WindowConfig::default(), None) {
        Err(CreationError::WindowCreationFailed { os_code, .. }) => assert_eq!(os_code, 8),
        other => panic!("expected a window-creation failure, got {other:?}"),
    }
    assert_eq!(system.live_window_count(), 0);
}

#[test]
fn test_close_event_flows_from_handler_to_destroy() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    // The handler publishes a close event onto the bus, like a real
    // application's window procedure would
    let bus = EventBus::<WindowCloseEvent>::new();
    let sender = bus.sender();
    let handler: MessageHandler = Arc::new(move |_, message| {
        if *message == WindowMessage::CloseRequested {
            let _ = sender.send(WindowCloseEvent);
            return MessageResponse::Handled;
        }
        MessageResponse::PassThrough
    });

    let target = factory
        .create_target(&WindowConfig::default(), Some(handler))
        .expect("window");

    // Destroying dispatches CloseRequested to the handler, which feeds the bus
    target.destroy(&WindowCloseEvent).expect("destroy");
    let event = bus
        .receiver()
        .try_recv()
        .expect("a close event should have been published");
    assert_eq!(event, WindowCloseEvent);
    assert!(!target.is_live());
}

#[test]
fn test_destroying_a_target_twice_reports_unknown_window() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    let target = factory
        .create_target(&WindowConfig::default(), None)
        .expect("window");

    target.destroy(&WindowCloseEvent).expect("first destroy");
    match target.destroy(&WindowCloseEvent) {
        Err(CreationError::UnknownWindow) => {}
        other => panic!("expected UnknownWindow, got {other:?}"),
    }
}

#[test]
fn test_sub_targets_are_unsupported() {
    let system = Arc::new(HeadlessWindowSystem::new());
    let mut factory = factory_over(&system);

    let parent = factory
        .create_target(&WindowConfig::default(), None)
        .expect("parent window");

    match factory.create_sub_target(&parent, &WindowConfig::default()) {
        Err(CreationError::Unsupported(_)) => {}
        other => panic!("expected Unsupported, got {other:?}"),
    }
}
