use crate::status::{InteropError, InteropResult};

/// Borrows `len` elements at `ptr`. A null pointer is accepted only for `len == 0`.
///
/// # Safety
/// A non-null `ptr` must point to `len` initialized elements that stay valid and
/// unaliased by writers for `'a`.
pub(crate) unsafe fn slice_from_raw<'a, T>(
    ptr: *const T,
    len: usize,
    name: &'static str,
) -> InteropResult<&'a [T]> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(InteropError::NullPointer(name));
    }
    if !ptr.is_aligned() {
        return Err(InteropError::Misaligned(name));
    }
    Ok(std::slice::from_raw_parts(ptr, len))
}

/// # Safety
/// A non-null `ptr` must point to `len` elements that nothing else reads or
/// writes for `'a`.
pub(crate) unsafe fn slice_from_raw_mut<'a, T>(
    ptr: *mut T,
    len: usize,
    name: &'static str,
) -> InteropResult<&'a mut [T]> {
    if len == 0 {
        return Ok(&mut []);
    }
    if ptr.is_null() {
        return Err(InteropError::NullPointer(name));
    }
    if !ptr.is_aligned() {
        return Err(InteropError::Misaligned(name));
    }
    Ok(std::slice::from_raw_parts_mut(ptr, len))
}
