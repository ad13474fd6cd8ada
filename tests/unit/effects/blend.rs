use super::*;
use crate::foundation::core::Size;

#[test]
fn blend_t_0_is_a_and_t_1_is_b() {
    let a = [10, 20, 30, 40];
    let b = [200, 210, 220, 230];
    assert_eq!(blend_px(a, b, 0.0), a);
    assert_eq!(blend_px(a, b, 1.0), b);
}

#[test]
fn blend_midpoint_rounds_half_away_from_zero() {
    // 0 + (255 - 0) * 0.5 = 127.5
    assert_eq!(blend_channel(0, 255, 0.5), 128);
    // 255 + (0 - 255) * 0.5 = 127.5
    assert_eq!(blend_channel(255, 0, 0.5), 128);
    assert_eq!(blend_channel(100, 200, 0.25), 125);
}

#[test]
fn alpha_is_interpolated_straight() {
    let opaque_red = [255, 0, 0, 255];
    let clear = [0, 0, 0, 0];
    assert_eq!(blend_px(opaque_red, clear, 0.5), [128, 0, 0, 128]);
}

#[test]
fn out_of_range_t_is_clamped() {
    let a = [10, 20, 30, 40];
    let b = [200, 210, 220, 230];
    assert_eq!(blend_px(a, b, -3.0), a);
    assert_eq!(blend_px(a, b, 7.5), b);
    assert_eq!(blend_px(a, b, f32::NAN), a);
}

#[test]
fn channel_is_monotone_in_t() {
    for (a, b) in [(0u8, 255u8), (255, 0), (17, 18), (90, 91), (200, 3)] {
        let mut prev = blend_channel(a, b, 0.0);
        for step in 1..=200 {
            let v = blend_channel(a, b, step as f32 / 200.0);
            if b >= a {
                assert!(v >= prev, "a={a} b={b} step={step}");
            } else {
                assert!(v <= prev, "a={a} b={b} step={step}");
            }
            prev = v;
        }
        assert_eq!(prev, b);
    }
}

#[test]
fn blend_images_rejects_dimension_mismatch() {
    let a = Image::filled(10, 10, [0, 0, 0, 255]).unwrap();
    let b = Image::filled(20, 20, [0, 0, 0, 255]).unwrap();
    match blend(&a, &b, 0.5) {
        Err(FadeError::DimensionMismatch { left, right }) => {
            assert_eq!(left, Size::new(10, 10));
            assert_eq!(right, Size::new(20, 20));
        }
        other => panic!("expected dimension mismatch, got {other:?}"),
    }
}

#[test]
fn blend_images_matches_per_pixel_blend() {
    let a = Image::from_fn(4, 3, |x, y| [x as u8 * 60, y as u8 * 80, 10, 255]).unwrap();
    let b = Image::from_fn(4, 3, |x, y| [255 - x as u8 * 60, 0, y as u8 * 100, 0]).unwrap();
    let out = blend(&a, &b, 0.3).unwrap();
    assert_eq!(out.size(), a.size());
    for ((o, pa), pb) in out.pixels().zip(a.pixels()).zip(b.pixels()) {
        assert_eq!(o, blend_px(pa, pb, 0.3));
    }
}

#[test]
fn blend_into_rejects_unequal_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(blend_into(&mut dst, &[0; 8], &[0; 4], 0.5).is_err());
    assert!(blend_into(&mut [0u8; 6], &[0; 6], &[0; 6], 0.5).is_err());
}

#[test]
fn ratio_blend_rounds_exact_halves_up() {
    // 54 * 7 / 12 = 31.5
    assert_eq!(blend_channel_ratio(0, 54, 7, 12), 32);
    // 54 * 5 / 12 = 22.5
    assert_eq!(blend_channel_ratio(54, 0, 7, 12), 23);
    assert_eq!(blend_channel_ratio(0, 255, 1, 2), 128);
    assert_eq!(blend_channel_ratio(255, 0, 1, 2), 128);
}

#[test]
fn ratio_blend_matches_rational_rounding() {
    for den in [1u32, 2, 6, 11, 12, 24, 29] {
        for num in 0..=den {
            for a in 0..=255u8 {
                for b in 0..=255u8 {
                    let weighted =
                        f64::from(a) * f64::from(den - num) + f64::from(b) * f64::from(num);
                    let exact = weighted / f64::from(den);
                    assert_eq!(
                        blend_channel_ratio(a, b, num, den),
                        exact.round() as u8,
                        "a={a} b={b} num={num} den={den}"
                    );
                }
            }
        }
    }
}

#[test]
fn ratio_blend_endpoints_and_degenerate_denominator() {
    assert_eq!(blend_channel_ratio(17, 240, 0, 9), 17);
    assert_eq!(blend_channel_ratio(17, 240, 9, 9), 240);
    assert_eq!(blend_channel_ratio(17, 240, 12, 9), 240);
    assert_eq!(blend_channel_ratio(17, 240, 3, 0), 17);

    let a = [1, 2, 3, 4, 5, 6, 7, 8];
    let b = [9, 10, 11, 12, 13, 14, 15, 16];
    let mut dst = [0u8; 8];
    blend_into_ratio(&mut dst, &a, &b, 0, 0).unwrap();
    assert_eq!(dst, a);
    blend_into_ratio(&mut dst, &a, &b, 4, 4).unwrap();
    assert_eq!(dst, b);
    assert!(matches!(
        blend_into_ratio(&mut dst[..4], &a, &b, 1, 2),
        Err(FadeError::InvalidParameter(_))
    ));
}
