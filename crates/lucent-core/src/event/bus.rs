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

use log;

/// A generic, thread-safe event channel.
///
/// The bus is generic over the event type `T` it transports, which keeps this
/// crate decoupled from the concrete event sets defined by higher layers. Its
/// primary use here is carrying [`WindowCloseEvent`](crate::event::WindowCloseEvent)s
/// from window message handlers to the code that owns the display targets.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new `EventBus` backed by an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("EventBus initialized.");
        Self { sender, receiver }
    }

    /// Attempts to send an event, logging an error if the receiver is disconnected.
    ///
    /// ## Arguments
    /// * `event` - The event to be sent over the channel.
    pub fn publish(&self, event: T) {
        // No `Debug` bound on T, so the event itself is not formatted here.
        log::trace!("Publishing an event.");

        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to send event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    ///
    /// Hand this to message handlers or other producers that need to emit
    /// events from another thread.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    /// Intended for the owner of the bus to drain events.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::{SendError, TryRecvError};
    use std::{thread, time::Duration};

    /// A local event enum standing in for the window events a real
    /// application would route through the bus.
    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        CloseRequested { window_id: u64 },
        Resized { width: u16, height: u16 },
        FocusChanged(bool),
    }

    #[test]
    fn bus_starts_empty() {
        let bus = EventBus::<TestEvent>::new();
        let _sender = bus.sender();
        assert!(bus.receiver().is_empty());
    }

    #[test]
    fn publish_then_receive() {
        let bus = EventBus::<TestEvent>::new();
        let event = TestEvent::CloseRequested { window_id: 7 };

        bus.publish(event.clone());

        match bus.receiver().recv_timeout(Duration::from_millis(100)) {
            Ok(received) => assert_eq!(received, event),
            Err(e) => panic!("failed to receive event: {e:?}"),
        }
    }

    #[test]
    fn try_receive_on_empty_bus() {
        let bus = EventBus::<TestEvent>::new();
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn events_arrive_in_order() {
        let bus = EventBus::<TestEvent>::new();
        let first = TestEvent::Resized {
            width: 800,
            height: 600,
        };
        let second = TestEvent::FocusChanged(false);
        let third = TestEvent::CloseRequested { window_id: 1 };

        bus.publish(first.clone());
        bus.publish(second.clone());
        bus.publish(third.clone());

        let receiver = bus.receiver();
        assert_eq!(receiver.recv().expect("first"), first);
        assert_eq!(receiver.recv().expect("second"), second);
        assert_eq!(receiver.recv().expect("third"), third);
        assert_eq!(receiver.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn senders_work_across_threads() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();
        let event = TestEvent::CloseRequested { window_id: 42 };
        let event_clone = event.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            sender.send(event_clone).expect("send from thread failed");
        });

        match bus.receiver().recv_timeout(Duration::from_secs(1)) {
            Ok(received) => assert_eq!(received, event),
            Err(e) => panic!("failed to receive event from thread: {e:?}"),
        }
        handle.join().expect("thread join failed");
    }

    #[test]
    fn send_fails_after_receiver_drop() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();
        drop(bus);

        match sender.send(TestEvent::FocusChanged(true)) {
            Err(SendError(_)) => {}
            Ok(()) => panic!("send unexpectedly succeeded after receiver drop"),
        }
    }
}
