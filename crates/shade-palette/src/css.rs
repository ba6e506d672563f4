//! CSS custom properties for a palette.
//!
//! One rule block per present side, light first:
//!
//! ```css
//! :root {
//!   --brand-1: oklch(99.0% 0.041 280.7);
//!   --brand-2: oklch(25.0% 0.108 280.7);
//! }
//! .dark {
//!   --brand-1: oklch(14.0% 0.078 280.7);
//!   --brand-2: oklch(93.0% 0.041 280.7);
//! }
//! ```
//!
//! Variable indices are 1-based in ramp order, so `--brand-1` is the most
//! background-like shade on both sides.

use crate::options::Side;
use crate::palette::Palette;

/// Naming for the emitted variables and rule blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOptions {
    /// Variables are named `--{prefix}-{index}`.
    pub prefix: String,
    /// Selector for the light side.
    pub selector: String,
    /// Selector for the dark side.
    pub dark_selector: String,
}

impl CssOptions {
    #[must_use]
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_selector(self, selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_dark_selector(self, dark_selector: impl Into<String>) -> Self {
        Self {
            dark_selector: dark_selector.into(),
            ..self
        }
    }

    /// The selector a side's block is emitted under.
    #[must_use]
    pub fn selector_for(&self, side: Side) -> &str {
        match side {
            Side::Light => &self.selector,
            Side::Dark => &self.dark_selector,
        }
    }
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            prefix: "brand".to_string(),
            selector: ":root".to_string(),
            dark_selector: ".dark".to_string(),
        }
    }
}

/// The CSS variable name for 1-based step `index`, e.g. `--brand-3`.
#[must_use]
pub fn variable_name(prefix: &str, index: usize) -> String {
    format!("--{prefix}-{index}")
}

/// Render the palette as CSS custom properties.
///
/// Sides absent from the palette produce no block at all. Lines are joined
/// with `\n` and the text has no trailing newline.
#[must_use]
pub fn render_css_variables(palette: &Palette, options: &CssOptions) -> String {
    let mut lines = Vec::new();

    for (side, ramp) in palette.sides() {
        lines.push(format!("{} {{", options.selector_for(side)));
        for (i, shade) in ramp.iter().enumerate() {
            lines.push(format!("  {}: {shade};", variable_name(&options.prefix, i + 1)));
        }
        lines.push("}".to_string());
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::options::{Mode, Options};
    use crate::synthesize;
    use crate::test_util::two_sided;

    #[test]
    fn exact_output_both_sides() {
        let css = render_css_variables(&two_sided(), &CssOptions::default());
        assert_eq!(
            css,
            ":root {\n\
             \x20 --brand-1: oklch(95.0% 0.020 250.0);\n\
             \x20 --brand-2: oklch(40.0% 0.100 250.0);\n\
             }\n\
             .dark {\n\
             \x20 --brand-1: oklch(20.0% 0.030 250.0);\n\
             \x20 --brand-2: oklch(85.0% 0.050 250.0);\n\
             }"
        );
    }

    #[test]
    fn custom_names() {
        let opts = CssOptions::default()
            .with_prefix("accent")
            .with_selector("html")
            .with_dark_selector("[data-theme=dark]");
        let css = render_css_variables(&two_sided(), &opts);
        assert!(css.starts_with("html {\n  --accent-1: "));
        assert!(css.contains("\n[data-theme=dark] {\n  --accent-1: "));
        assert!(!css.contains("--brand"));
    }

    #[test]
    fn blocks_follow_present_sides() {
        let both = synthesize("#6753ff", &Options::default()).unwrap();
        let css = render_css_variables(&both, &CssOptions::default());
        assert!(css.contains(":root {"));
        assert!(css.contains(".dark {"));
        assert!(css.contains("--brand-1"));
        assert!(css.contains("--brand-12"));
        assert!(!css.contains("--brand-13"));

        let light = synthesize("#6753ff", &Options::default().with_mode(Mode::Light)).unwrap();
        let css = render_css_variables(&light, &CssOptions::default());
        assert!(css.contains(":root {"));
        assert!(!css.contains(".dark"));

        let dark = synthesize("#6753ff", &Options::default().with_mode(Mode::Dark)).unwrap();
        let css = render_css_variables(&dark, &CssOptions::default());
        assert!(!css.contains(":root"));
        assert!(css.starts_with(".dark {"));
    }

    #[test]
    fn one_line_per_step_plus_braces() {
        let p = synthesize("#6753ff", &Options::default().with_steps(5)).unwrap();
        let css = render_css_variables(&p, &CssOptions::default());
        assert_eq!(css.lines().count(), 2 * (5 + 2));
        assert!(!css.ends_with('\n'));
    }

    #[test]
    fn variable_names() {
        assert_eq!(variable_name("brand", 1), "--brand-1");
        assert_eq!(variable_name("x", 24), "--x-24");
    }
}
