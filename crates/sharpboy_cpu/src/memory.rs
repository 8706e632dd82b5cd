use crate::error::CpuError;
use crate::MEMORY_SIZE;

/// Flat 64 KiB address space.
///
/// Addresses are `u16`, so every access is already reduced modulo 65536 and
/// can never fall outside the backing buffer.
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Copy `image` into memory starting at `base`.
    ///
    /// Fails without touching memory when the image does not fit in the
    /// space left between `base` and the end of the address space.
    pub fn load(&mut self, image: &[u8], base: u16) -> Result<(), CpuError> {
        let start = base as usize;
        if image.len() > MEMORY_SIZE - start {
            return Err(CpuError::ProgramTooLarge {
                len: image.len(),
                base,
                limit: MEMORY_SIZE,
            });
        }
        self.bytes[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Zero-fill the whole address space, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Up to `len` bytes starting at `start`, clamped at the end of memory.
    pub fn slice(&self, start: u16, len: usize) -> &[u8] {
        let start = start as usize;
        let end = start.saturating_add(len).min(MEMORY_SIZE);
        &self.bytes[start..end]
    }
}
