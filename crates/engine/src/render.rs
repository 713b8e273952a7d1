/// Renders an evaluation result for display.
///
/// A value with no fractional part (within integer range) prints as a plain
/// integer, avoiding a needless `.000000` suffix; everything else prints in
/// fixed-point notation with six digits after the decimal point.
#[must_use]
pub fn render_numeric(value: f64) -> String {
    if value == value as i64 as f64 {
        format!("{}", value as i64)
    } else {
        format!("{value:.6}")
    }
}
