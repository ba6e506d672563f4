//! Theme preset for utility-CSS frameworks.
//!
//! The preset has two halves. `theme.extend.colors` maps a numeric scale to
//! CSS variable references, so utilities like `bg-brand-3` resolve to
//! `var(--brand-3)`. `baseVariablesBySide` holds the actual values for each
//! side, for the consumer to install under its root and dark-mode selectors:
//!
//! ```json
//! {
//!   "theme": { "extend": { "colors": { "brand": { "1": "var(--brand-1)", ... } } } },
//!   "baseVariablesBySide": {
//!     "light": { "--brand-1": "oklch(99.0% 0.041 280.7)", ... },
//!     "dark":  { "--brand-1": "oklch(14.0% 0.078 280.7)", ... }
//!   }
//! }
//! ```
//!
//! Installing the variables is the consumer's job; [`BaseVariables::by_selector`]
//! only says which table goes under which selector.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::css::{CssOptions, variable_name};
use crate::options::Side;
use crate::palette::{Palette, Ramp};

// ---------------------------------------------------------------------------
// VarTable
// ---------------------------------------------------------------------------

/// A string-to-string map that keeps insertion order.
///
/// Scale keys `"1"`, `"2"`, ... `"12"` would sort as `"1"`, `"10"`, `"11"`,
/// `"12"`, `"2"` in an ordered map; this serializes them in step order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VarTable {
    entries: Vec<(String, String)>,
}

impl VarTable {
    fn insert(&mut self, key: String, value: String) {
        self.entries.push((key, value));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for VarTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// ThemePreset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetOptions {
    /// Color name in the scale and variable prefix, e.g. `brand`.
    pub prefix: String,
}

impl Default for PresetOptions {
    fn default() -> Self {
        Self {
            prefix: "brand".to_string(),
        }
    }
}

/// `theme.extend.colors`, one scale per color name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeExtension {
    pub extend: ExtendedColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedColors {
    pub colors: BTreeMap<String, VarTable>,
}

/// Variable values per side, keyed by variable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<VarTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<VarTable>,
}

impl BaseVariables {
    #[must_use]
    pub const fn side(&self, side: Side) -> Option<&VarTable> {
        match side {
            Side::Light => self.light.as_ref(),
            Side::Dark => self.dark.as_ref(),
        }
    }

    /// Pair each present table with the selector it belongs under, light
    /// first. Uses the same selectors as the CSS output.
    #[must_use]
    pub fn by_selector<'a>(&'a self, selectors: &'a CssOptions) -> Vec<(&'a str, &'a VarTable)> {
        Side::ALL
            .into_iter()
            .filter_map(|side| {
                self.side(side)
                    .map(|table| (selectors.selector_for(side), table))
            })
            .collect()
    }
}

/// A palette shaped for a utility-CSS theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePreset {
    pub theme: ThemeExtension,
    #[serde(rename = "baseVariablesBySide")]
    pub base_variables_by_side: BaseVariables,
}

impl ThemePreset {
    /// The variable-reference scale for `prefix`, if present.
    #[must_use]
    pub fn scale(&self, prefix: &str) -> Option<&VarTable> {
        self.theme.extend.colors.get(prefix)
    }

    /// Pretty-printed JSON of the preset.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails, which string maps do not.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build a theme preset from a palette.
///
/// The scale length comes from the light side when present, else the dark
/// side.
#[must_use]
pub fn render_theme_preset(palette: &Palette, options: &PresetOptions) -> ThemePreset {
    let prefix = options.prefix.as_str();

    let mut scale = VarTable::default();
    for i in 1..=palette.step_count() {
        scale.insert(i.to_string(), format!("var({})", variable_name(prefix, i)));
    }

    let base = |ramp: &Ramp| {
        let mut table = VarTable::default();
        for (i, shade) in ramp.iter().enumerate() {
            table.insert(variable_name(prefix, i + 1), shade.to_string());
        }
        table
    };

    ThemePreset {
        theme: ThemeExtension {
            extend: ExtendedColors {
                colors: BTreeMap::from([(prefix.to_string(), scale)]),
            },
        },
        base_variables_by_side: BaseVariables {
            light: palette.light().map(base),
            dark: palette.dark().map(base),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::options::Options;
    use crate::synthesize;
    use crate::test_util::{dark_only, two_sided};

    #[test]
    fn exact_json_both_sides() {
        let preset = render_theme_preset(&two_sided(), &PresetOptions::default());
        let json = serde_json::to_string(&preset).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"theme":{"extend":{"colors":{"brand":{"1":"var(--brand-1)","2":"var(--brand-2)"}}}},"#,
                r#""baseVariablesBySide":{"#,
                r#""light":{"--brand-1":"oklch(95.0% 0.020 250.0)","--brand-2":"oklch(40.0% 0.100 250.0)"},"#,
                r#""dark":{"--brand-1":"oklch(20.0% 0.030 250.0)","--brand-2":"oklch(85.0% 0.050 250.0)"}}}"#,
            )
        );
    }

    #[test]
    fn absent_side_is_omitted() {
        let preset = render_theme_preset(&dark_only(), &PresetOptions::default());
        assert!(preset.base_variables_by_side.light.is_none());
        assert_eq!(preset.scale("brand").map(VarTable::len), Some(2));

        let json = serde_json::to_string(&preset).unwrap();
        assert!(!json.contains("\"light\""));
        assert!(json.contains("\"dark\""));
    }

    #[test]
    fn scale_keeps_step_order() {
        let p = synthesize("#6753ff", &Options::default()).unwrap();
        let preset = render_theme_preset(&p, &PresetOptions::default());
        let keys: Vec<&str> = preset.scale("brand").unwrap().iter().map(|(k, _)| k).collect();
        let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        assert_eq!(keys, expected);
        assert_eq!(
            preset.scale("brand").unwrap().get("10"),
            Some("var(--brand-10)")
        );
    }

    #[test]
    fn base_values_match_palette() {
        let p = synthesize("#6753ff", &Options::default()).unwrap();
        let preset = render_theme_preset(&p, &PresetOptions::default());
        let light = preset.base_variables_by_side.light.as_ref().unwrap();
        let dark = preset.base_variables_by_side.dark.as_ref().unwrap();
        assert_eq!(light.get("--brand-1"), Some(p.light().unwrap().colors()[0].as_str()));
        assert_eq!(dark.get("--brand-12"), Some(p.dark().unwrap().colors()[11].as_str()));
        assert_eq!(light.get("--brand-13"), None);
    }

    #[test]
    fn custom_prefix() {
        let opts = PresetOptions {
            prefix: "accent".to_string(),
        };
        let preset = render_theme_preset(&two_sided(), &opts);
        assert!(preset.scale("brand").is_none());
        assert_eq!(preset.scale("accent").unwrap().get("1"), Some("var(--accent-1)"));
        assert!(preset.base_variables_by_side.dark.unwrap().get("--accent-2").is_some());
    }

    #[test]
    fn selectors_follow_css_defaults() {
        let preset = render_theme_preset(&two_sided(), &PresetOptions::default());
        let selectors = CssOptions::default();
        let pairs = preset.base_variables_by_side.by_selector(&selectors);
        let names: Vec<&str> = pairs.iter().map(|(sel, _)| *sel).collect();
        assert_eq!(names, vec![":root", ".dark"]);

        let dark = render_theme_preset(&dark_only(), &PresetOptions::default());
        let pairs = dark.base_variables_by_side.by_selector(&selectors);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, ".dark");
    }

    #[test]
    fn pretty_json_parses_back() {
        let preset = render_theme_preset(&two_sided(), &PresetOptions::default());
        let value: serde_json::Value = serde_json::from_str(&preset.to_json().unwrap()).unwrap();
        assert_eq!(value["theme"]["extend"]["colors"]["brand"]["2"], "var(--brand-2)");
        assert_eq!(
            value["baseVariablesBySide"]["dark"]["--brand-1"],
            "oklch(20.0% 0.030 250.0)"
        );
    }
}
