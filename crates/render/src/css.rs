//! CSS gradient strings, as a web page would use them for a background.

use huepath_core::ColorValue;

/// Formats stops as `linear-gradient(to right, rgb(r,g,b), ...)`.
///
/// A single stop is repeated so the result is still a valid gradient.
pub fn linear_gradient_css(stops: &[ColorValue]) -> String {
    let mut parts: Vec<String> = stops.iter().map(rgb_css).collect();
    if parts.len() == 1 {
        parts.push(parts[0].clone());
    }
    format!("linear-gradient(to right, {})", parts.join(", "))
}

/// `rgb(r,g,b)` with 8-bit channels.
pub fn rgb_css(color: &ColorValue) -> String {
    let [r, g, b] = color.rgb8();
    format!("rgb({r},{g},{b})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepath_core::{interpolate_hex, ColorSpace};

    #[test]
    fn rgb_css_uses_8bit_channels() {
        let c = ColorValue::from_hex("#9013fe").unwrap();
        assert_eq!(rgb_css(&c), "rgb(144,19,254)");
    }

    #[test]
    fn gradient_lists_every_stop_in_order() {
        let stops = interpolate_hex("#000000", "#ffffff", ColorSpace::Rgb, 3).unwrap();
        let css = linear_gradient_css(&stops);
        assert!(css.starts_with("linear-gradient(to right, rgb(0,0,0), "));
        assert!(css.ends_with(", rgb(255,255,255))"));
        assert_eq!(css.matches("rgb(").count(), 3);
    }

    #[test]
    fn single_stop_is_doubled() {
        let c = ColorValue::from_rgb8(10, 20, 30);
        assert_eq!(
            linear_gradient_css(&[c]),
            "linear-gradient(to right, rgb(10,20,30), rgb(10,20,30))"
        );
    }
}
