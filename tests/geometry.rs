use barkit::chart::geometry::{
    NOMINAL_BAR_WIDTH, VERTICAL_SHRINK, bar_draw_height, bar_width, bar_x, bar_y,
    calc_base_height, calc_height, calc_scaler, corner_radii,
};

#[test]
fn max_value_scales_to_full_height() {
    let data = [10.0, 20.0];
    let h = 100.0;
    // Non-zero-based scaling: the max maps to the full height, the min to zero.
    assert!((calc_height(20.0, &data, h, false) - h).abs() < 1e-9);
    assert!((calc_height(10.0, &data, h, false)).abs() < 1e-9);
}

#[test]
fn from_zero_scales_against_zero_baseline() {
    let data = [10.0, 20.0];
    let h = 100.0;
    assert!((calc_height(20.0, &data, h, true) - h).abs() < 1e-9);
    assert!((calc_height(10.0, &data, h, true) - h / 2.0).abs() < 1e-9);
}

#[test]
fn zero_value_yields_zero_height() {
    let h = 100.0;
    assert_eq!(calc_height(0.0, &[0.0, 10.0], h, false), 0.0);
    assert_eq!(calc_height(0.0, &[-5.0, 10.0], h, false), 0.0);
    assert_eq!(calc_height(0.0, &[0.0, 10.0], h, true), 0.0);
}

#[test]
fn degenerate_range_scales_by_one() {
    assert_eq!(calc_scaler(&[5.0, 5.0], false), 1.0);
    assert_eq!(calc_scaler(&[0.0, 0.0], true), 1.0);
}

#[test]
fn base_height_follows_value_signs() {
    let h = 100.0;
    assert_eq!(calc_base_height(&[1.0, 2.0], h, false), h);
    assert_eq!(calc_base_height(&[-2.0, -1.0], h, false), 0.0);
    // Mixed signs split the height proportionally to the positive share.
    let base = calc_base_height(&[-10.0, 20.0], h, false);
    assert!((base - h * 20.0 / 30.0).abs() < 1e-9);
}

#[test]
fn mixed_sign_heights_carry_the_sign() {
    let data = [-10.0, 20.0];
    let h = 90.0;
    assert!(calc_height(20.0, &data, h, false) > 0.0);
    assert!(calc_height(-10.0, &data, h, false) < 0.0);
}

#[test]
fn negative_heights_flip_the_anchor() {
    let base = 60.0;
    let padding_top = 16.0;
    // Positive bars hang from base - height; negative bars start at the base.
    assert_eq!(bar_y(base, 40.0, padding_top), (base - 40.0) * VERTICAL_SHRINK + padding_top);
    assert_eq!(bar_y(base, -40.0, padding_top), base * VERTICAL_SHRINK + padding_top);
    assert_eq!(bar_draw_height(-40.0), 40.0 * VERTICAL_SHRINK);
}

#[test]
fn bar_positions_are_monotonic_and_evenly_spaced() {
    let width = 400.0;
    let padding_right = 64.0;
    let bw = bar_width(1.0);
    let n = 5;
    let xs: Vec<f64> = (0..n).map(|i| bar_x(i, n, width, padding_right, bw)).collect();
    let step = (width - padding_right) / n as f64;
    for pair in xs.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap > 0.0);
        assert!((gap - step).abs() < 1e-9);
    }
    assert!((xs[0] - (padding_right + bw / 2.0)).abs() < 1e-9);
}

#[test]
fn bar_width_scales_the_nominal_unit() {
    assert_eq!(bar_width(1.0), NOMINAL_BAR_WIDTH);
    assert_eq!(bar_width(0.5), NOMINAL_BAR_WIDTH / 2.0);
}

#[test]
fn corner_radius_fallback_chain() {
    // Per-axis radii win over the uniform radius.
    assert_eq!(corner_radii(4.0, Some(2.0), Some(3.0)), (Some(2.0), Some(3.0)));
    // Uniform radius fills unset axes.
    assert_eq!(corner_radii(4.0, None, None), (Some(4.0), Some(4.0)));
    assert_eq!(corner_radii(4.0, Some(2.0), None), (Some(2.0), Some(4.0)));
    // No radius anywhere means square corners.
    assert_eq!(corner_radii(0.0, None, None), (None, None));
}
