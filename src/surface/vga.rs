//! Memory-mapped mode 13h video memory
//!
//! Mode switching and page mapping belong to the platform. This backend only
//! needs the virtual address at which physical memory is mapped and then
//! talks to the 64000-byte window at physical `0xA0000` with volatile
//! accesses.

use super::{Framebuffer, Geometry, PixelSurface, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::context::GraphicsContext;
use crate::error::DrawResult;
use crate::math::TrigTable;
use spin::Mutex;
use x86_64::VirtAddr;

/// Physical address of the mode 13h framebuffer
pub const VGA_PHYS_ADDR: u64 = 0xA0000;

pub struct VgaMemory {
    base: *mut u8,
    len: usize,
}

// The pointer is the only handle to the window; moving it between threads
// is fine as long as access stays serialized, which `VGA` enforces.
unsafe impl Send for VgaMemory {}

impl VgaMemory {
    /// Window at `phys_offset + 0xA0000`.
    ///
    /// # Safety
    ///
    /// Physical memory must be mapped writable at `phys_offset`, mode 13h
    /// must be active, and no other `VgaMemory` may alias the window.
    pub unsafe fn new(phys_offset: VirtAddr) -> Self {
        let base = (phys_offset + VGA_PHYS_ADDR).as_mut_ptr::<u8>();
        unsafe { Self::from_ptr(base, SCREEN_WIDTH * SCREEN_HEIGHT) }
    }

    /// # Safety
    ///
    /// `base..base + len` must be valid for volatile reads and writes for
    /// as long as this value lives.
    pub unsafe fn from_ptr(base: *mut u8, len: usize) -> Self {
        Self { base, len }
    }

    pub fn base(&self) -> VirtAddr {
        VirtAddr::from_ptr(self.base as *const u8)
    }
}

impl Framebuffer for VgaMemory {
    fn len(&self) -> usize {
        self.len
    }

    fn read(&self, offset: usize) -> u8 {
        if offset >= self.len {
            return 0;
        }
        unsafe { core::ptr::read_volatile(self.base.add(offset)) }
    }

    fn write(&mut self, offset: usize, value: u8) {
        if offset >= self.len {
            return;
        }
        unsafe { core::ptr::write_volatile(self.base.add(offset), value) }
    }
}

pub static VGA: Mutex<Option<GraphicsContext<VgaMemory>>> = Mutex::new(None);

/// Install a context over mode 13h video memory in [`VGA`].
///
/// The first call builds the trig table. Later calls replace the window and
/// keep the table of the context already installed.
///
/// # Safety
///
/// Same contract as [`VgaMemory::new`].
pub unsafe fn init(phys_offset: VirtAddr) -> DrawResult {
    let memory = unsafe { VgaMemory::new(phys_offset) };
    install(&VGA, memory)
}

fn install(slot: &Mutex<Option<GraphicsContext<VgaMemory>>>, memory: VgaMemory) -> DrawResult {
    let surface = PixelSurface::new(memory, Geometry::MODE_13H)?;
    let mut slot = slot.lock();
    let table = match slot.take() {
        Some(previous) => {
            crate::log_debug!("reusing trig table of the installed VGA context");
            previous.into_parts().1
        }
        None => TrigTable::build(),
    };
    let context = GraphicsContext::from_parts(surface, table);
    let base = context.surface().framebuffer().base();
    *slot = Some(context);
    drop(slot);
    crate::serial_println!("[mode13h] VGA context ready at {:#x}", base.as_u64());
    Ok(())
}
