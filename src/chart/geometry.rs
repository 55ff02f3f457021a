//! Geometry shared by the bar layers: value scaling, baseline computation,
//! and bar placement.
//!
//! These formulas are common base-chart utilities; the bar renderers consume
//! them rather than owning them, so sibling chart types can share the module.

/// Nominal bar width in pixels before the bar-percentage factor is applied.
pub const NOMINAL_BAR_WIDTH: f64 = 32.0;

/// Bars are anchored at 3/4 of their computed height below the baseline, a
/// legacy visual scaling constant.
pub const VERTICAL_SHRINK: f64 = 0.75;

fn min_of(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Value range used to normalize the series. `from_zero` widens the range to
/// include zero; a degenerate range scales by 1 instead of dividing by zero.
pub fn calc_scaler(data: &[f64], from_zero: bool) -> f64 {
    let (min, max) = if from_zero {
        (min_of(data).min(0.0), max_of(data).max(0.0))
    } else {
        (min_of(data), max_of(data))
    };
    let range = max - min;
    if range == 0.0 { 1.0 } else { range }
}

/// Pixel y-extent of the zero baseline measured from the top of the plot:
/// the full height when all values are non-negative, zero when all are
/// non-positive, and proportional to the positive share otherwise.
pub fn calc_base_height(data: &[f64], height: f64, from_zero: bool) -> f64 {
    let min = min_of(data);
    let max = max_of(data);
    if min >= 0.0 && max >= 0.0 {
        height
    } else if min < 0.0 && max <= 0.0 {
        0.0
    } else {
        height * max / calc_scaler(data, from_zero)
    }
}

/// Scaled pixel height for one value: the maximum-magnitude value of the
/// sequence maps to the full available height. Negative results indicate a
/// bar below the baseline. A value of zero yields a zero-height bar.
pub fn calc_height(value: f64, data: &[f64], height: f64, from_zero: bool) -> f64 {
    let min = min_of(data);
    let max = max_of(data);
    let scaler = calc_scaler(data, from_zero);
    if min < 0.0 && max > 0.0 {
        height * (value / scaler)
    } else if min >= 0.0 {
        if from_zero {
            height * (value / scaler)
        } else {
            height * ((value - min) / scaler)
        }
    } else if from_zero {
        height * (value / scaler)
    } else {
        height * ((value - max) / scaler)
    }
}

/// Drawn bar width: the nominal unit scaled by the configured percentage.
pub fn bar_width(bar_percentage: f64) -> f64 {
    NOMINAL_BAR_WIDTH * bar_percentage
}

/// Left edge of bar `i`: bars are evenly distributed across the width left
/// after the right-padding allocation (which reserves the y-label column).
pub fn bar_x(i: usize, count: usize, width: f64, padding_right: f64, bar_width: f64) -> f64 {
    padding_right + (i as f64) * (width - padding_right) / (count as f64) + bar_width / 2.0
}

/// Top edge of bar `i`. Positive heights hang down from `base - height`;
/// negative heights flip the anchor to the baseline itself.
pub fn bar_y(base_height: f64, bar_height: f64, padding_top: f64) -> f64 {
    let anchor = if bar_height > 0.0 {
        base_height - bar_height
    } else {
        base_height
    };
    anchor * VERTICAL_SHRINK + padding_top
}

/// Drawn pixel height of a bar, after the legacy 3/4 shrink.
pub fn bar_draw_height(bar_height: f64) -> f64 {
    bar_height.abs() * VERTICAL_SHRINK
}

/// Per-axis corner radii: explicit x/y radii win, else the uniform radius,
/// else square corners (`None`).
pub fn corner_radii(
    bar_radius: f64,
    bar_radius_x: Option<f64>,
    bar_radius_y: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    let pick = |axis: Option<f64>| {
        let r = axis.unwrap_or(bar_radius);
        if r > 0.0 { Some(r) } else { None }
    };
    (pick(bar_radius_x), pick(bar_radius_y))
}
