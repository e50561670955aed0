use std::alloc::{dealloc, Layout};
use std::mem::{align_of, size_of, ManuallyDrop};

/// Owned buffer handed across the C boundary. Sizes are in bytes; the host
/// must hand it back to `destroy_ffi_buf` exactly once.
#[repr(C)]
#[derive(Debug)]
pub struct FfiBuf {
    data: *mut u8,
    len: usize,
    cap: usize,
    align: usize,
}

impl FfiBuf {
    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        if self.data.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.data, self.len) }
    }

    /// Takes the allocation back as a `Vec<T>`. Returns `None` when `T` does not
    /// match the element layout the buffer was created with.
    pub fn into_vec<T>(self) -> Option<Vec<T>> {
        if self.data.is_null() {
            return Some(Vec::new());
        }

        let t_size = size_of::<T>();
        if t_size == 0
            || self.align != align_of::<T>()
            || self.len % t_size != 0
            || self.cap % t_size != 0
        {
            return None;
        }

        let buf = ManuallyDrop::new(self);
        let len = buf.len / t_size;
        let cap = buf.cap / t_size;
        let ptr = buf.data as *mut T;

        Some(unsafe { Vec::from_raw_parts(ptr, len, cap) })
    }
}

impl Default for FfiBuf {
    fn default() -> Self {
        FfiBuf {
            data: std::ptr::null_mut(),
            len: 0,
            cap: 0,
            align: 1,
        }
    }
}

impl Drop for FfiBuf {
    fn drop(&mut self) {
        if self.data.is_null() || self.cap == 0 {
            return;
        }

        unsafe {
            let layout = Layout::from_size_align_unchecked(self.cap, self.align);
            dealloc(self.data, layout);
        }
    }
}

impl<T> From<Vec<T>> for FfiBuf {
    fn from(data: Vec<T>) -> Self {
        debug_assert!(size_of::<T>() != 0, "zero-sized elements cannot cross the boundary");

        let t_size = size_of::<T>();
        let mut data = ManuallyDrop::new(data);

        FfiBuf {
            data: data.as_mut_ptr() as *mut u8,
            len: data.len() * t_size,
            cap: data.capacity() * t_size,
            align: align_of::<T>(),
        }
    }
}
