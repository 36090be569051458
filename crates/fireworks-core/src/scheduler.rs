/// Frame-counting launch timer.
///
/// `step` is called once per frame. While the counter is below `interval` it
/// just counts up; the frame it finds the counter at `interval` it fires and
/// resets, so with the default interval of 20 a launch happens every 21
/// frames. Pacing is tied to the display refresh rate, not wall-clock time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduler {
    interval: u32,
    counter: u32,
}

impl Scheduler {
    pub fn new(interval: u32) -> Self {
        Self {
            interval,
            counter: 0,
        }
    }

    /// Advance one frame; returns `true` when an automatic launch is due.
    pub fn step(&mut self) -> bool {
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            self.counter += 1;
            false
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }
}
