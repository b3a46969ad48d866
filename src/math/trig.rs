//! Precomputed circle chord table
//!
//! Entry `i` holds `sin(acos(i / 1024))` in 16.16 fixed point: the height of
//! the unit circle at horizontal position `i / 1024`. Circles and ellipses
//! look their boundary up here instead of calling trig per pixel.

use super::fixed::Fixed;
use core::fmt;

pub const TRIG_TABLE_LEN: usize = 1024;

/// Bits dropped from a 16.16 progress value to get a table index
const INDEX_SHIFT: u32 = Fixed::FRAC_BITS - TRIG_TABLE_LEN.trailing_zeros();

/// Immutable once built. Build it during setup and share it by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct TrigTable {
    entries: [Fixed; TRIG_TABLE_LEN],
}

impl TrigTable {
    pub fn build() -> Self {
        let mut entries = [Fixed::ZERO; TRIG_TABLE_LEN];
        for (i, entry) in entries.iter_mut().enumerate() {
            let x = i as f64 / TRIG_TABLE_LEN as f64;
            *entry = Fixed::from_f64(libm::sin(libm::acos(x)));
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[Fixed; TRIG_TABLE_LEN] {
        &self.entries
    }

    #[cfg(test)]
    pub(crate) fn entries_mut(&mut self) -> &mut [Fixed; TRIG_TABLE_LEN] {
        &mut self.entries
    }

    pub fn get(&self, index: usize) -> Option<Fixed> {
        self.entries.get(index).copied()
    }

    /// Unit-circle height at `progress` (a fraction of the radius).
    ///
    /// Progress at or past 1.0 is off the edge of the circle and yields zero;
    /// negative progress mirrors onto the positive side.
    pub fn chord(&self, progress: Fixed) -> Fixed {
        let progress = progress.abs();
        if progress >= Fixed::ONE {
            return Fixed::ZERO;
        }
        self.entries[(progress.raw() >> INDEX_SHIFT) as usize]
    }

    /// Chord at `progress` scaled to `radius` whole pixels
    pub fn extent(&self, progress: Fixed, radius: i32) -> i32 {
        self.chord(progress).mul_int(radius)
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::build()
    }
}

impl fmt::Debug for TrigTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrigTable")
            .field("len", &TRIG_TABLE_LEN)
            .field("first", &self.entries[0])
            .field("last", &self.entries[TRIG_TABLE_LEN - 1])
            .finish()
    }
}
