//! Pixel format conversion helpers for presentation adapters.

/// Unpacks `0xAARRGGBB` pixels into RGBA bytes, forcing alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not exactly `src.len() * 4`.
pub fn copy_argb_to_rgba(src: &[u32], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        src.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        src.len() * 4
    );

    for (&argb, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let [_, r, g, b] = argb.to_be_bytes();
        dst_pixel.copy_from_slice(&[r, g, b, 255]);
    }
}
