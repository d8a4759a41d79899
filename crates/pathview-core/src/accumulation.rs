//! Progressive accumulation across frames.
//!
//! Two buffers alternate roles every tick: the read slot holds the running
//! average so far, the write slot receives this frame's blended result. A
//! reset requested between ticks is applied at the start of the next tick,
//! clearing both slots and restarting the sample count at 0, so samples from
//! before and after a camera move never mix.
//!
//! The controller owns the ordering only. The actual GPU work is done by an
//! [`AccumulationPasses`] executor; the blend (`mix(prev, new, 1/(n+1))`) is
//! done by the shader from the `frame_count` the controller supplies.

use std::cell::Cell;
use std::rc::Rc;

use crate::camera::CameraBasis;
use crate::constants::SAMPLE_LOG_INTERVAL;

/// Two-slot arena with an index selecting which slot is currently "read".
#[derive(Debug)]
pub struct PingPong<T> {
    slots: [T; 2],
    read: usize,
}

impl<T> PingPong<T> {
    pub fn new(first: T, second: T) -> Self {
        Self {
            slots: [first, second],
            read: 0,
        }
    }

    pub fn read_index(&self) -> usize {
        self.read
    }

    pub fn write_index(&self) -> usize {
        self.read ^ 1
    }

    pub fn read(&self) -> &T {
        &self.slots[self.read]
    }

    pub fn write(&self) -> &T {
        &self.slots[self.write_index()]
    }

    pub fn slot(&self, index: usize) -> &T {
        &self.slots[index]
    }

    /// Borrow `(read, write)` at the same time.
    pub fn split(&mut self) -> (&T, &mut T) {
        let (lo, hi) = self.slots.split_at_mut(1);
        if self.read == 0 {
            (&lo[0], &mut hi[0])
        } else {
            (&hi[0], &mut lo[0])
        }
    }

    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }

    pub fn swap(&mut self) {
        self.read ^= 1;
    }

    /// Install new slots (slot 0 becomes read) and hand back the old ones.
    pub fn replace(&mut self, first: T, second: T) -> [T; 2] {
        self.read = 0;
        std::mem::replace(&mut self.slots, [first, second])
    }
}

/// Cloneable handle that marks a reset as pending. Handed to camera
/// subscriptions; the reset itself happens at the next tick.
#[derive(Clone, Debug, Default)]
pub struct ResetHandle(Rc<Cell<bool>>);

impl ResetHandle {
    pub fn request_reset(&self) {
        self.0.set(true);
    }

    pub fn is_pending(&self) -> bool {
        self.0.get()
    }

    fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Everything a pass needs to know about the frame being rendered.
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs {
    pub frame_count: u32,
    pub time: f32,
    pub basis: CameraBasis,
    pub width: u32,
    pub height: u32,
}

/// Executes the three kinds of work a tick is made of.
pub trait AccumulationPasses {
    type Target;

    /// Fill `target` with the clear value.
    fn clear(&mut self, target: &mut Self::Target);

    /// Draw the fullscreen integrator into `output`, sampling `previous`.
    fn accumulate(
        &mut self,
        previous: &Self::Target,
        output: &mut Self::Target,
        frame: &FrameInputs,
    );

    /// Draw `source` to the display in tone-mapping mode.
    fn present(&mut self, source: &Self::Target, frame: &FrameInputs);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Sample index supplied to the shader this tick.
    pub frame_count: u32,
    /// Both slots were cleared at the start of this tick.
    pub reset: bool,
    pub read_slot: usize,
    pub write_slot: usize,
}

pub struct AccumulationController<T> {
    buffers: PingPong<T>,
    frame_count: u32,
    reset: ResetHandle,
}

impl<T> AccumulationController<T> {
    /// Starts with a reset pending so the first tick begins from cleared slots.
    pub fn new(first: T, second: T) -> Self {
        let reset = ResetHandle::default();
        reset.request_reset();
        Self {
            buffers: PingPong::new(first, second),
            frame_count: 0,
            reset,
        }
    }

    pub fn reset_handle(&self) -> ResetHandle {
        self.reset.clone()
    }

    pub fn request_reset(&self) {
        self.reset.request_reset();
    }

    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn buffers(&self) -> &PingPong<T> {
        &self.buffers
    }

    /// Swap in buffers allocated for a new viewport size. The old samples are
    /// at the wrong resolution, so a reset is scheduled.
    pub fn replace_buffers(&mut self, first: T, second: T) -> [T; 2] {
        self.reset.request_reset();
        self.buffers.replace(first, second)
    }

    pub fn tick<P>(
        &mut self,
        passes: &mut P,
        basis: CameraBasis,
        time: f32,
        width: u32,
        height: u32,
    ) -> TickReport
    where
        P: AccumulationPasses<Target = T>,
    {
        let reset = self.reset.take();
        if reset {
            for slot in self.buffers.slots_mut() {
                passes.clear(slot);
            }
            self.frame_count = 0;
            log::debug!("[accum] reset");
        }

        let frame = FrameInputs {
            frame_count: self.frame_count,
            time,
            basis,
            width,
            height,
        };
        let read_slot = self.buffers.read_index();
        let write_slot = self.buffers.write_index();

        let (read, write) = self.buffers.split();
        passes.accumulate(read, write, &frame);
        passes.present(self.buffers.write(), &frame);

        self.frame_count = self.frame_count.saturating_add(1);
        self.buffers.swap();
        if self.frame_count % SAMPLE_LOG_INTERVAL == 0 {
            log::debug!("[accum] {} samples", self.frame_count);
        }

        TickReport {
            frame_count: frame.frame_count,
            reset,
            read_slot,
            write_slot,
        }
    }
}
