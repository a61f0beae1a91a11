use core::cmp::PartialOrd;

#[cfg(test)]
mod tests;

#[inline]
pub fn clamp<T>(val: &mut T, min: T, max: T)
    where T: PartialOrd
{
    if *val < min {
        *val = min
    } else if *val > max {
        *val = max
    }
}

/// Maps an index on a destination axis of `dst_len` elements onto a source
/// axis of `src_len` elements, picking the nearest source element.
///
/// Both lengths must be non-zero.
#[inline]
pub fn nearest_index(dst_index: usize, dst_len: usize, src_len: usize) -> usize {
    debug_assert!(dst_len > 0 && src_len > 0);
    let mut src_index = (dst_index as u64 * src_len as u64 / dst_len as u64) as usize;
    clamp(&mut src_index, 0, src_len - 1);
    src_index
}
