/// Ping-pong target pair for iterative simulation passes

use crate::error::Result;
use crate::gfx::{AttachmentFlags, GraphicsDevice};
use crate::targets::OffscreenTarget;

/// Two same-size targets with a read/write role swap.
///
/// Each simulation step samples the read target, renders into the write
/// target, then flips exactly once so next frame's read is this frame's
/// write. Both targets stay allocated for the pair's whole lifetime.
pub struct PingPongTargets {
    targets: [OffscreenTarget; 2],
    current: usize,
}

impl PingPongTargets {
    /// Allocate both targets up front
    pub fn create(
        device: &mut dyn GraphicsDevice,
        labels: [&'static str; 2],
        width: u32,
        height: u32,
        attachments: AttachmentFlags,
    ) -> Result<Self> {
        Ok(Self {
            targets: [
                OffscreenTarget::create(device, labels[0], width, height, attachments)?,
                OffscreenTarget::create(device, labels[1], width, height, attachments)?,
            ],
            current: 0,
        })
    }

    /// The target holding last step's result (sample from this)
    pub fn read(&self) -> &OffscreenTarget {
        &self.targets[self.current]
    }

    /// The target the next step renders into
    pub fn write(&self) -> &OffscreenTarget {
        &self.targets[1 - self.current]
    }

    /// Swap roles. Called exactly once per simulation step.
    pub fn flip(&mut self) {
        self.current = 1 - self.current;
    }

    /// Index of the current read target (0 or 1)
    pub fn current_index(&self) -> usize {
        self.current
    }
}

#[cfg(test)]
#[path = "ping_pong_tests.rs"]
mod tests;
