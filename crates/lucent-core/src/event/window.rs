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

//! Window lifecycle event types.

/// Signals that a display target should be (or has been asked to be) closed.
///
/// The display-target subsystem treats this value as opaque: it is consumed by
/// [`DisplayTarget::destroy`](crate::platform::DisplayTarget::destroy) purely
/// as the caller's statement of intent, typically after the event arrived on
/// an [`EventBus`](crate::event::EventBus) from a window message handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCloseEvent;
