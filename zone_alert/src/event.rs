//! Single entry point for both sensor streams.
//!
//! Accelerometer readings and location fixes arrive at unrelated rates and in
//! no particular order. Both are posted into one [`EventQueue`] and the host
//! drains it into the controller, so the order the controller sees is the
//! order events were posted.

use std::{collections::VecDeque, time::Duration};

use steps::{Acceleration, Fix, StepDetector};

use crate::{ZoneController, platform::Platform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Acceleration {
        sample: Acceleration,
        timestamp: Duration,
    },
    Location {
        fix: Fix,
        timestamp: Duration,
    },
    /// Nothing arrived, but time moved on. Lets pending timers fire.
    Tick { timestamp: Duration },
}

impl Event {
    pub const fn timestamp(&self) -> Duration {
        match self {
            Event::Acceleration { timestamp, .. }
            | Event::Location { timestamp, .. }
            | Event::Tick { timestamp } => *timestamp,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn push_acceleration(&mut self, sample: Acceleration, timestamp: Duration) {
        self.push(Event::Acceleration { sample, timestamp });
    }

    pub fn push_location(&mut self, fix: Fix, timestamp: Duration) {
        self.push(Event::Location { fix, timestamp });
    }

    pub fn push_tick(&mut self, timestamp: Duration) {
        self.push(Event::Tick { timestamp });
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Handle every queued event in order. Returns number of handled events.
    pub fn drain_into<P, D>(&mut self, controller: &mut ZoneController<P, D>) -> usize
    where
        P: Platform,
        D: StepDetector,
    {
        let mut count = 0;

        while let Some(event) = self.pop() {
            controller.handle(event);
            count += 1;
        }

        count
    }
}
