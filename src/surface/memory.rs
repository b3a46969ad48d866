//! In-process framebuffer
use super::Framebuffer;

/// Framebuffer over any owned or borrowed byte buffer (`Vec<u8>`,
/// `[u8; N]`, `&mut [u8]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBuffer<B> {
    bytes: B,
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> MemoryBuffer<B> {
    pub fn new(bytes: B) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    pub fn into_inner(self) -> B {
        self.bytes
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Framebuffer for MemoryBuffer<B> {
    fn len(&self) -> usize {
        self.bytes.as_ref().len()
    }

    fn read(&self, offset: usize) -> u8 {
        self.bytes.as_ref().get(offset).copied().unwrap_or(0)
    }

    fn write(&mut self, offset: usize, value: u8) {
        if let Some(byte) = self.bytes.as_mut().get_mut(offset) {
            *byte = value;
        }
    }

    fn fill(&mut self, value: u8) {
        self.bytes.as_mut().fill(value);
    }
}
