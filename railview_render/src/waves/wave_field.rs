/// Traveling sine wave table for the water surface
///
/// A fixed table of eight wave slots summed on the GPU into a vertical
/// displacement of the water grid. The table is intentionally tiny: slots
/// are reused in ring order once the table is full, so an interactive
/// session can keep adding waves forever without reallocation.

use glam::Vec2;

use crate::render_warn;

/// Maximum number of simultaneous wave slots
pub const WAVE_CAPACITY: usize = 8;

/// One traveling sine wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    /// Distance between crests, world units
    pub wavelength: f32,
    /// Crest height, world units
    pub amplitude: f32,
    /// Phase speed, radians per second
    pub speed: f32,
    /// Travel direction in the horizontal plane (used unnormalized)
    pub direction: Vec2,
}

impl Wave {
    /// An empty slot: contributes nothing to the displacement sum
    pub const DISABLED: Wave = Wave {
        wavelength: 0.0,
        amplitude: 0.0,
        speed: 0.0,
        direction: Vec2::new(1.0, 0.0),
    };
}

/// Per-frame wave table snapshot, shaped for shader upload
#[derive(Debug, Clone, Copy)]
pub struct WavePayload {
    pub wavelengths: [f32; WAVE_CAPACITY],
    pub amplitudes: [f32; WAVE_CAPACITY],
    pub speeds: [f32; WAVE_CAPACITY],
    pub directions: [Vec2; WAVE_CAPACITY],
    /// Number of leading slots the shader should sum
    pub active_count: usize,
    /// Simulation clock, seconds
    pub sim_clock: f32,
}

/// Wave table with a write cursor and a monotonically advancing clock
#[derive(Debug, Clone)]
pub struct WaveField {
    waves: [Wave; WAVE_CAPACITY],
    cursor: usize,
    overflows: u64,
    sim_clock: f32,
}

impl WaveField {
    /// Empty table: all slots disabled, clock at zero
    pub fn new() -> Self {
        Self {
            waves: [Wave::DISABLED; WAVE_CAPACITY],
            cursor: 0,
            overflows: 0,
            sim_clock: 0.0,
        }
    }

    /// Table pre-filled with the standard five-wave open-water mix
    pub fn with_default_waves() -> Self {
        let mut field = Self::new();
        field.add_wave(25.0, 0.08, 30.0, Vec2::new(1.0, 1.0));
        field.add_wave(50.0, 0.03, 15.0, Vec2::new(1.0, 0.0));
        field.add_wave(30.0, 0.04, 20.0, Vec2::new(0.0, 1.0));
        field.add_wave(20.0, 0.05, 50.0, Vec2::new(1.0, -0.5));
        field.add_wave(60.0, 0.2, 10.0, Vec2::new(-1.5, 0.0));
        field
    }

    /// Add a wave at the cursor slot and advance the cursor.
    ///
    /// When the cursor runs past the last slot it wraps to the first, so
    /// the ninth wave added overwrites the first. The wrap also resets the
    /// active count, which shrinks the summed set until slots refill.
    pub fn add_wave(&mut self, wavelength: f32, amplitude: f32, speed: f32, direction: Vec2) {
        self.waves[self.cursor] = Wave {
            wavelength,
            amplitude,
            speed,
            direction,
        };
        self.cursor += 1;
        if self.cursor >= WAVE_CAPACITY {
            self.cursor = 0;
            self.overflows += 1;
            render_warn!(
                "railview::WaveField",
                "wave table full ({} slots), wrapping to slot 0",
                WAVE_CAPACITY
            );
        }
    }

    /// Clear every slot and reset the cursor (clock keeps running)
    pub fn clear(&mut self) {
        self.waves = [Wave::DISABLED; WAVE_CAPACITY];
        self.cursor = 0;
    }

    /// Number of leading slots currently summed (the cursor position)
    pub fn active_count(&self) -> usize {
        self.cursor
    }

    /// Number of times the cursor has wrapped
    pub fn overflow_count(&self) -> u64 {
        self.overflows
    }

    /// Simulation clock, seconds
    pub fn sim_clock(&self) -> f32 {
        self.sim_clock
    }

    /// Read a wave slot
    pub fn wave(&self, slot: usize) -> Wave {
        self.waves[slot]
    }

    /// Advance the simulation clock. The clock never resets or wraps.
    pub fn advance(&mut self, delta_seconds: f32) {
        self.sim_clock += delta_seconds;
    }

    /// Snapshot the table in the layout the water shader consumes
    pub fn sample_uniform_payload(&self) -> WavePayload {
        let mut payload = WavePayload {
            wavelengths: [0.0; WAVE_CAPACITY],
            amplitudes: [0.0; WAVE_CAPACITY],
            speeds: [0.0; WAVE_CAPACITY],
            directions: [Vec2::new(1.0, 0.0); WAVE_CAPACITY],
            active_count: self.cursor,
            sim_clock: self.sim_clock,
        };
        for (i, wave) in self.waves.iter().enumerate() {
            payload.wavelengths[i] = wave.wavelength;
            payload.amplitudes[i] = wave.amplitude;
            payload.speeds[i] = wave.speed;
            payload.directions[i] = wave.direction;
        }
        payload
    }

    /// CPU reference for the vertical displacement at a horizontal point.
    ///
    /// Matches the shader sum exactly: for each active slot,
    /// `amplitude * sin(2π/wavelength * dot(direction, p) + speed * t)`,
    /// with the direction used as given (unnormalized). Slots with a zero
    /// wavelength are skipped.
    pub fn displacement_at(&self, point: Vec2, time: f32) -> f32 {
        let mut height = 0.0;
        for wave in &self.waves[..self.cursor] {
            if wave.wavelength == 0.0 {
                continue;
            }
            let frequency = 2.0 * std::f32::consts::PI / wave.wavelength;
            height += wave.amplitude * (frequency * wave.direction.dot(point) + wave.speed * time).sin();
        }
        height
    }
}

impl Default for WaveField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "wave_field_tests.rs"]
mod tests;
