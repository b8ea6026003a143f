//! Plot configuration
//!
//! Two palettes are provided: a light one ([`PlotConfig::default`]) suited
//! to printed reports, and a dark one ([`PlotConfig::dark`]).

use plotters::prelude::*;

/// Configuration for customizing cooling-curve plots
///
/// # Example
///
/// ```rust,ignore
/// use thermal_decay::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::cooling_curve("Coffee on the desk");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Newton's Law of Cooling")
    pub title: String,

    /// X-axis label (default: "Time (t)")
    pub xlabel: String,

    /// Y-axis label (default: "Temperature (T)")
    pub ylabel: String,

    /// Curve color
    pub line_color: RGBColor,

    /// Color of the shaded area between the curve and the ambient line
    pub fill_color: RGBColor,

    /// Opacity of the shaded area (default: 0.1)
    pub fill_opacity: f64,

    /// Background color
    pub background: RGBColor,

    /// Caption, label and legend text color
    pub text_color: RGBColor,

    /// Grid line color
    pub grid_color: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Shade the area between the curve and `T_env` (default: true)
    pub shade_area: bool,

    /// Draw the ambient temperature as a horizontal reference line (default: true)
    pub show_ambient: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: DEFAULT_TITLE.to_string(),
            xlabel: "Time (t)".to_string(),
            ylabel: "Temperature (T)".to_string(),
            line_color: RED,
            fill_color: RED,
            fill_opacity: 0.1,
            background: WHITE,
            text_color: BLACK,
            grid_color: RGBColor(200, 200, 200),
            line_width: 2,
            show_grid: true,
            shade_area: true,
            show_ambient: true,
        }
    }
}

const DEFAULT_TITLE: &str = "Newton's Law of Cooling";

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::cooling_curve(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Light config with an optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::cooling_curve("Metal Quenching");
    /// let config = PlotConfig::cooling_curve(format!("k = {}", k));
    /// let config = PlotConfig::cooling_curve(NO_TITLE);
    /// ```
    pub fn cooling_curve(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Dark palette: violet curve on a near-black panel
    pub fn dark() -> Self {
        Self {
            line_color: RGBColor(0xbb, 0x86, 0xfc),
            fill_color: RGBColor(0xbb, 0x86, 0xfc),
            background: RGBColor(0x25, 0x25, 0x35),
            text_color: RGBColor(0xaa, 0xaa, 0xaa),
            grid_color: RGBColor(0x44, 0x44, 0x44),
            ..Self::default()
        }
    }

    /// Builder pattern: set title
    pub fn with_title(mut self, title: impl IntoOptionalTitle) -> Self {
        if let Some(title) = title.into_optional_title() {
            self.title = title;
        }
        self
    }

    /// Builder pattern: set image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: disable shading
    pub fn without_shading(mut self) -> Self {
        self.shade_area = false;
        self
    }

    /// Color of the ambient reference line, halfway between text and background
    pub(crate) fn ambient_color(&self) -> RGBColor {
        let mid = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        RGBColor(
            mid(self.text_color.0, self.background.0),
            mid(self.text_color.1, self.background.1),
            mid(self.text_color.2, self.background.2),
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
