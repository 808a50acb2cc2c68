//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;
use std::sync::atomic::{AtomicU32, Ordering};

/// Packs a colour as `0x00RRGGBB`, the layout stored in the shared pixel buffer.
#[inline]
#[must_use]
pub fn pack_rgb(colour: Colour) -> u32 {
    (u32::from(colour.r) << 16) | (u32::from(colour.g) << 8) | u32::from(colour.b)
}

#[inline]
#[must_use]
pub fn unpack_rgb(packed: u32) -> Colour {
    Colour {
        r: (packed >> 16) as u8,
        g: (packed >> 8) as u8,
        b: packed as u8,
    }
}

/// Copies packed pixels into RGBA8 data, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not exactly four bytes per source pixel.
pub fn copy_packed_to_rgba(src: &[AtomicU32], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let colour = unpack_rgb(src_pixel.load(Ordering::Relaxed));
        dst_pixel[0] = colour.r;
        dst_pixel[1] = colour.g;
        dst_pixel[2] = colour.b;
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(values: &[u32]) -> Vec<AtomicU32> {
        values.iter().map(|&v| AtomicU32::new(v)).collect()
    }

    #[test]
    fn test_pack_rgb_layout() {
        assert_eq!(
            pack_rgb(Colour {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }),
            0x0012_3456
        );
        assert_eq!(pack_rgb(Colour::BLACK), 0);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let colour = Colour {
            r: 210,
            g: 46,
            b: 253,
        };

        assert_eq!(unpack_rgb(pack_rgb(colour)), colour);
    }

    #[test]
    fn test_copy_packed_to_rgba_known_values() {
        let src = packed(&[0xFF0000, 0x00FF00, 0x0000FF, 0xFFFFFF]);
        let mut dst = vec![0; src.len() * 4];

        copy_packed_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_packed_to_rgba_black_is_opaque() {
        let src = packed(&[0]);
        let mut dst = vec![7; 4];

        copy_packed_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![0, 0, 0, 255]);
    }

    #[test]
    fn test_copy_packed_to_rgba_empty_buffers() {
        let src = packed(&[]);
        let mut dst: Vec<u8> = vec![];

        copy_packed_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_packed_to_rgba_rejects_mismatched_frame() {
        let src = packed(&[1, 2]);
        let mut dst = vec![0; 4];

        copy_packed_to_rgba(&src, &mut dst);
    }
}
