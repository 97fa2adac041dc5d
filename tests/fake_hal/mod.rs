use embedded_hal::delay::DelayNs;

/// A delay that returns immediately and remembers every requested wait.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_ns: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> RecordingDelay {
        RecordingDelay::default()
    }

    pub fn total_us(&self) -> u64 {
        self.waits_ns.iter().map(|&ns| ns as u64).sum::<u64>() / 1_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns);
    }
}
