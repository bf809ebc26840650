//! Caller configuration and the per-symbology minimum dimension rules.

use core::convert::Infallible;
use core::str::FromStr;

use crate::error::BarcodeError;

pub const MIN_DPI: u16 = 1;
pub const MAX_DPI: u16 = 600;
pub const MIN_BAR_HEIGHT: u32 = 1;
pub const MAX_BAR_HEIGHT: u32 = 2400;
/// Widest barcode, in pixels, that target fitting may produce (20 inches at
/// the maximum DPI).
pub const MAX_PIXEL_WIDTH: u32 = 12_000;

/// Width of a wide module relative to a narrow one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WideRatio {
    Two,
    #[default]
    Three,
}

impl WideRatio {
    /// Maps any ratio onto the two supported values.
    pub const fn clamped(ratio: u8) -> Self {
        if ratio <= 2 { WideRatio::Two } else { WideRatio::Three }
    }

    #[inline]
    pub const fn wide(self) -> u8 {
        match self {
            WideRatio::Two => 2,
            WideRatio::Three => 3,
        }
    }
}

/// Where the human readable text goes relative to the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextPosition {
    #[default]
    Hidden,
    Above,
    Below,
    /// Overlapping the bottom edge of the bars.
    Embedded,
}

impl FromStr for TextPosition {
    type Err = Infallible;

    /// Never fails: anything unrecognized hides the text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "ABOVE" | "TOP" => TextPosition::Above,
            "BELOW" | "BOTTOM" => TextPosition::Below,
            "EMBEDDED" | "EMBEDED" => TextPosition::Embedded,
            other => {
                if other != "HIDDEN" {
                    tracing::debug!(position = s, "unknown text position, hiding text");
                }
                TextPosition::Hidden
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for TextAlignment {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Ok(TextAlignment::Left),
            "CENTER" | "CENTRE" => Ok(TextAlignment::Center),
            "RIGHT" => Ok(TextAlignment::Right),
            _ => Err(BarcodeError::UnknownOption { option: "alignment", value: s.to_owned() }),
        }
    }
}

/// Human readable text settings. Passed through untouched to whatever
/// renders the barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanReadable {
    /// Text to print instead of the encoded value, if any.
    pub text: Option<String>,
    pub position: TextPosition,
    pub alignment: TextAlignment,
    pub font: String,
    pub font_size: u16,
    /// Spread the text so each character sits under the symbol that encodes
    /// it instead of centering it.
    pub symbol_aligned: bool,
}

impl Default for HumanReadable {
    fn default() -> Self {
        Self {
            text: None,
            position: TextPosition::default(),
            alignment: TextAlignment::default(),
            font: String::from("monospace"),
            font_size: 10,
            symbol_aligned: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeConfig {
    x_dimension: u32,
    target_width: Option<u32>,
    dpi: u16,
    bar_height: u32,
    wide_ratio: WideRatio,
    quiet_zone: bool,
    show_encoding: bool,
    human_readable: HumanReadable,

    dpi_changed: bool,
    bar_height_changed: bool,
    wide_ratio_changed: bool,
}

impl Default for BarcodeConfig {
    fn default() -> Self {
        Self {
            x_dimension: 1,
            target_width: None,
            dpi: 300,
            bar_height: 100,
            wide_ratio: WideRatio::Three,
            quiet_zone: true,
            show_encoding: false,
            human_readable: HumanReadable::default(),
            dpi_changed: false,
            bar_height_changed: false,
            wide_ratio_changed: false,
        }
    }
}

impl BarcodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested width of one narrow module. Zero is treated as one.
    pub fn set_x_dimension(mut self, x_dimension: u32) -> Self {
        self.x_dimension = x_dimension.max(1);
        self
    }

    /// Overall width the barcode should fill. When set, the X-dimension is
    /// raised at generation time until the next step would overshoot it.
    pub fn set_target_width(mut self, width: Option<u32>) -> Self {
        self.target_width = width;
        self
    }

    pub fn set_dpi(mut self, dpi: u16) -> Self {
        let clamped = dpi.clamp(MIN_DPI, MAX_DPI);
        self.dpi_changed = clamped != dpi;
        if self.dpi_changed {
            tracing::debug!(requested = dpi, used = clamped, "dpi clamped");
        }
        self.dpi = clamped;
        self
    }

    pub fn set_bar_height(mut self, height: u32) -> Self {
        let clamped = height.clamp(MIN_BAR_HEIGHT, MAX_BAR_HEIGHT);
        self.bar_height_changed = clamped != height;
        if self.bar_height_changed {
            tracing::debug!(requested = height, used = clamped, "bar height clamped");
        }
        self.bar_height = clamped;
        self
    }

    pub fn set_wide_ratio(mut self, ratio: u8) -> Self {
        let clamped = WideRatio::clamped(ratio);
        self.wide_ratio_changed = clamped.wide() != ratio;
        if self.wide_ratio_changed {
            tracing::debug!(requested = ratio, used = clamped.wide(), "wide ratio clamped");
        }
        self.wide_ratio = clamped;
        self
    }

    pub fn set_quiet_zone(mut self, quiet_zone: bool) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    pub fn set_show_encoding(mut self, show: bool) -> Self {
        self.show_encoding = show;
        self
    }

    pub fn set_human_readable(mut self, human_readable: HumanReadable) -> Self {
        self.human_readable = human_readable;
        self
    }

    #[inline]
    pub const fn x_dimension(&self) -> u32 {
        self.x_dimension
    }

    #[inline]
    pub const fn target_width(&self) -> Option<u32> {
        self.target_width
    }

    #[inline]
    pub const fn dpi(&self) -> u16 {
        self.dpi
    }

    #[inline]
    pub const fn bar_height(&self) -> u32 {
        self.bar_height
    }

    #[inline]
    pub const fn wide_ratio(&self) -> WideRatio {
        self.wide_ratio
    }

    #[inline]
    pub const fn quiet_zone(&self) -> bool {
        self.quiet_zone
    }

    #[inline]
    pub const fn show_encoding(&self) -> bool {
        self.show_encoding
    }

    pub fn human_readable(&self) -> &HumanReadable {
        &self.human_readable
    }

    /// Whether the last [BarcodeConfig::set_dpi] call had to clamp its input.
    #[inline]
    pub const fn dpi_changed(&self) -> bool {
        self.dpi_changed
    }

    #[inline]
    pub const fn bar_height_changed(&self) -> bool {
        self.bar_height_changed
    }

    #[inline]
    pub const fn wide_ratio_changed(&self) -> bool {
        self.wide_ratio_changed
    }
}

/// Smallest narrow module, in dots, readable at `dpi`: `ceil(dpi * 0.0075)`.
pub const fn min_x_dimension(dpi: u16) -> u32 {
    (dpi as u32 * 75).div_ceil(10_000)
}

/// Smallest bar height for a barcode `min_width` narrow units wide:
/// `ceil(max(min_width * x * 0.15, dpi * 0.25))`.
pub const fn min_bar_height(min_width: u32, x_dimension: u32, dpi: u16) -> u32 {
    let by_width = (min_width as u64 * x_dimension as u64 * 15).div_ceil(100);
    let by_dpi = (dpi as u64 * 25).div_ceil(100);
    let height = if by_width > by_dpi { by_width } else { by_dpi };
    if height > u32::MAX as u64 { u32::MAX } else { height as u32 }
}

/// Largest X-dimension that keeps `min_width * x` within `target`, never
/// below one.
pub const fn fit_x_dimension(min_width: u32, target: u32) -> u32 {
    if min_width == 0 {
        return 1;
    }
    let x = target / min_width;
    if x == 0 { 1 } else { x }
}

/// Dimensions settled after encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub x_dimension: u32,
    pub bar_height: u32,
    /// The requested X-dimension was raised to the symbology minimum.
    pub x_dimension_changed: bool,
    /// The requested bar height was raised to the symbology minimum.
    pub bar_height_changed: bool,
}

impl Dimensions {
    pub fn resolve(config: &BarcodeConfig, min_width: u32) -> Self {
        let requested_x = match config.target_width() {
            Some(target) => config.x_dimension().max(fit_x_dimension(min_width, target)),
            None => config.x_dimension(),
        };

        let mut dims = Dimensions {
            x_dimension: requested_x,
            bar_height: config.bar_height(),
            ..Default::default()
        };
        dims.set_min_x_dimension(config.dpi());
        dims.cap_x_dimension(min_width);
        dims.set_min_bar_height(min_width, config.dpi());
        dims
    }

    fn cap_x_dimension(&mut self, min_width: u32) {
        if min_width == 0 {
            return;
        }
        let max = fit_x_dimension(min_width, MAX_PIXEL_WIDTH);
        if self.x_dimension > max {
            tracing::debug!(requested = self.x_dimension, max, "x-dimension capped");
            self.x_dimension = max;
        }
    }

    fn set_min_x_dimension(&mut self, dpi: u16) {
        let min = min_x_dimension(dpi);
        if self.x_dimension < min {
            tracing::debug!(requested = self.x_dimension, min, "x-dimension raised");
            self.x_dimension = min;
            self.x_dimension_changed = true;
        }
    }

    fn set_min_bar_height(&mut self, min_width: u32, dpi: u16) {
        let min = min_bar_height(min_width, self.x_dimension, dpi);
        if self.bar_height < min {
            tracing::debug!(requested = self.bar_height, min, "bar height raised");
            self.bar_height = min;
            self.bar_height_changed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dpi_clamping() {
        let low = BarcodeConfig::new().set_dpi(0);
        assert_eq!(low.dpi(), 1);
        assert!(low.dpi_changed());

        let high = BarcodeConfig::new().set_dpi(10_000);
        assert_eq!(high.dpi(), 600);
        assert!(high.dpi_changed());

        let ok = BarcodeConfig::new().set_dpi(203);
        assert_eq!(ok.dpi(), 203);
        assert!(!ok.dpi_changed());
    }

    #[test]
    fn test_bar_height_clamping() {
        let c = BarcodeConfig::new().set_bar_height(0);
        assert_eq!((c.bar_height(), c.bar_height_changed()), (1, true));
        let c = BarcodeConfig::new().set_bar_height(5000);
        assert_eq!((c.bar_height(), c.bar_height_changed()), (2400, true));
        let c = BarcodeConfig::new().set_bar_height(80);
        assert_eq!((c.bar_height(), c.bar_height_changed()), (80, false));
    }

    #[test]
    fn test_wide_ratio_clamping() {
        let c = BarcodeConfig::new().set_wide_ratio(5);
        assert_eq!((c.wide_ratio(), c.wide_ratio_changed()), (WideRatio::Three, true));
        let c = BarcodeConfig::new().set_wide_ratio(1);
        assert_eq!((c.wide_ratio(), c.wide_ratio_changed()), (WideRatio::Two, true));
        let c = BarcodeConfig::new().set_wide_ratio(2);
        assert_eq!((c.wide_ratio(), c.wide_ratio_changed()), (WideRatio::Two, false));
    }

    #[test]
    fn test_min_x_dimension() {
        assert_eq!(min_x_dimension(1), 1);
        assert_eq!(min_x_dimension(133), 1);
        assert_eq!(min_x_dimension(134), 2);
        assert_eq!(min_x_dimension(300), 3);
        assert_eq!(min_x_dimension(400), 3);
        assert_eq!(min_x_dimension(600), 5);
    }

    #[test]
    fn test_min_bar_height() {
        // 0.15 * 200 * 2 = 60 beats 0.25 * 203 = 50.75
        assert_eq!(min_bar_height(200, 2, 203), 60);
        // ceil(0.25 * 203) = 51
        assert_eq!(min_bar_height(100, 1, 203), 51);
        assert_eq!(min_bar_height(0, 1, 1), 1);
    }

    #[test]
    fn test_fit_x_dimension() {
        assert_eq!(fit_x_dimension(100, 50), 1);
        assert_eq!(fit_x_dimension(100, 199), 1);
        assert_eq!(fit_x_dimension(100, 200), 2);
        assert_eq!(fit_x_dimension(100, 350), 3);
        assert_eq!(fit_x_dimension(0, 350), 1);
        assert_eq!(fit_x_dimension(1, u32::MAX), u32::MAX);
        assert_eq!(fit_x_dimension(7, u32::MAX), u32::MAX / 7);
    }

    #[test]
    fn test_resolve_raises_and_flags() {
        let config = BarcodeConfig::new().set_dpi(300).set_x_dimension(1).set_bar_height(10);
        let dims = Dimensions::resolve(&config, 100);
        assert_eq!(dims.x_dimension, 3);
        assert!(dims.x_dimension_changed);
        // max(100 * 3 * 0.15, 300 * 0.25) = 75
        assert_eq!(dims.bar_height, 75);
        assert!(dims.bar_height_changed);
    }

    #[test]
    fn test_resolve_keeps_large_values() {
        let config = BarcodeConfig::new().set_dpi(100).set_x_dimension(4).set_bar_height(500);
        let dims = Dimensions::resolve(&config, 100);
        assert_eq!(dims, Dimensions { x_dimension: 4, bar_height: 500, x_dimension_changed: false, bar_height_changed: false });
    }

    #[test]
    fn test_resolve_target_width() {
        let config = BarcodeConfig::new().set_dpi(100).set_target_width(Some(450)).set_bar_height(500);
        let dims = Dimensions::resolve(&config, 100);
        assert_eq!(dims.x_dimension, 4);
        assert!(!dims.x_dimension_changed);
    }

    #[test]
    fn test_resolve_target_width_never_lowers() {
        // "AB" in Code 128 is 57 units wide, 100 pixels only fits x = 1
        let config = BarcodeConfig::new().set_dpi(1).set_x_dimension(5).set_target_width(Some(100));
        let dims = Dimensions::resolve(&config, 57);
        assert_eq!(dims.x_dimension, 5);
        assert!(!dims.x_dimension_changed);
    }

    #[test]
    fn test_resolve_caps_pixel_width() {
        let config = BarcodeConfig::new().set_dpi(1).set_x_dimension(500);
        let dims = Dimensions::resolve(&config, 100);
        assert_eq!(dims.x_dimension, 120);

        let config = BarcodeConfig::new().set_dpi(1).set_target_width(Some(50_000));
        assert_eq!(Dimensions::resolve(&config, 1000).x_dimension, 12);

        // nothing encoded, nothing to cap
        let config = BarcodeConfig::new().set_dpi(600).set_x_dimension(40);
        assert_eq!(Dimensions::resolve(&config, 0).x_dimension, 40);
    }

    #[test]
    fn test_parse_text_position() {
        assert_eq!("top".parse(), Ok(TextPosition::Above));
        assert_eq!("Below".parse(), Ok(TextPosition::Below));
        assert_eq!("hidden".parse(), Ok(TextPosition::Hidden));
        assert_eq!("Embedded".parse(), Ok(TextPosition::Embedded));
        assert_eq!("embeded".parse(), Ok(TextPosition::Embedded));
        assert_eq!("middle".parse(), Ok(TextPosition::Hidden));
        assert_eq!(HumanReadable::default().position, TextPosition::Hidden);
        assert!(!HumanReadable::default().symbol_aligned);
    }

    #[test]
    fn test_parse_text_alignment() {
        assert_eq!("Right".parse(), Ok(TextAlignment::Right));
        assert_eq!(
            "middle".parse::<TextAlignment>(),
            Err(BarcodeError::UnknownOption { option: "alignment", value: "middle".to_owned() })
        );
    }
}
