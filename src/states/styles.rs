//! Toast Style Registry
//!
//! Process-wide, string-keyed cache of toast style configurations.
//! Insertion is last-write-wins; styles can also be loaded in bulk from a
//! TOML style sheet. The registry lives as a GPUI global and is installed
//! lazily on first use.

use crate::constants::{TOAST_DEFAULT_HEIGHT, TOAST_DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::theme::{ColorSpec, PopkitColors, Typography};
use ahash::AHashMap;
use gpui::{App, BorrowAppContext, Global};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ==================== Style ====================

/// Visual configuration for a toast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastStyle {
    /// Pill width in pixels
    pub width: f32,
    /// Pill height in pixels
    pub height: f32,
    /// Background color
    pub background: ColorSpec,
    /// Message text color
    pub text_color: ColorSpec,
    /// Message font size in pixels
    pub font_size: f32,
    /// Corner radius; `None` renders a full pill (height / 2)
    pub corner_radius: Option<f32>,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            width: TOAST_DEFAULT_WIDTH,
            height: TOAST_DEFAULT_HEIGHT,
            background: ColorSpec::from_rgba(PopkitColors::toast_bg()),
            text_color: ColorSpec::from_rgba(PopkitColors::toast_text()),
            font_size: Typography::TOAST_TEXT,
            corner_radius: None,
        }
    }
}

impl ToastStyle {
    /// Create the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pill width
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the pill height
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the background color
    pub fn background(mut self, background: ColorSpec) -> Self {
        self.background = background;
        self
    }

    /// Set the message text color
    pub fn text_color(mut self, text_color: ColorSpec) -> Self {
        self.text_color = text_color;
        self
    }

    /// Set the message font size
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set an explicit corner radius instead of the pill default
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// The corner radius to draw with
    pub fn resolved_corner_radius(&self) -> f32 {
        self.corner_radius.unwrap_or(self.height / 2.0)
    }
}

// ==================== Style sheet ====================

/// TOML style sheet: an optional `[default]` table plus `[styles.<key>]` tables
#[derive(Debug, Default, Deserialize)]
struct StyleSheet {
    default: Option<ToastStyle>,
    #[serde(default)]
    styles: AHashMap<String, ToastStyle>,
}

// ==================== Registry ====================

/// Global toast style registry
///
/// Instance methods are pure bookkeeping; the associated functions install
/// and access the registry as a GPUI global.
#[derive(Clone, Debug, Default)]
pub struct ToastStyles {
    default: ToastStyle,
    by_key: AHashMap<String, ToastStyle>,
}

impl Global for ToastStyles {}

impl ToastStyles {
    /// Register a style under a key (last write wins)
    pub fn insert(&mut self, key: impl Into<String>, style: ToastStyle) {
        self.by_key.insert(key.into(), style);
    }

    /// Remove a registered style
    pub fn remove(&mut self, key: &str) -> Option<ToastStyle> {
        self.by_key.remove(key)
    }

    /// Look up a registered style
    pub fn get(&self, key: &str) -> Option<&ToastStyle> {
        self.by_key.get(key)
    }

    /// Replace the default style
    pub fn set_default(&mut self, style: ToastStyle) {
        self.default = style;
    }

    /// The default style
    pub fn default_style(&self) -> &ToastStyle {
        &self.default
    }

    /// Number of keyed styles
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether any keyed style is registered
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Merge a TOML style sheet into the registry
    ///
    /// Applies the sheet's `[default]` table if present, then inserts every
    /// `[styles.<key>]` entry (last write wins). Returns the number of keyed
    /// styles inserted.
    pub fn load_toml(&mut self, text: &str) -> Result<usize> {
        let sheet: StyleSheet = toml::from_str(text)?;
        if let Some(default) = sheet.default {
            self.default = default;
        }
        let added = sheet.styles.len();
        self.by_key.extend(sheet.styles);
        Ok(added)
    }

    // ==================== Global access ====================

    /// Run `f` against the process-wide registry, installing it on first use
    pub fn update<R>(cx: &mut App, f: impl FnOnce(&mut Self) -> R) -> R {
        if !cx.has_global::<Self>() {
            cx.set_global(Self::default());
        }
        cx.update_global::<Self, R>(|styles, _cx| f(styles))
    }

    /// Run `f` against the process-wide registry without mutating it
    ///
    /// Falls back to built-in defaults if the registry was never installed.
    pub fn read<R>(cx: &App, f: impl FnOnce(&Self) -> R) -> R {
        match cx.try_global::<Self>() {
            Some(styles) => f(styles),
            None => f(&Self::default()),
        }
    }

    /// Look up a keyed style, or an error on miss
    pub fn try_get(key: &str, cx: &App) -> Result<ToastStyle> {
        Self::read(cx, |styles| styles.get(key).cloned()).ok_or_else(|| Error::StyleNotFound {
            key: key.to_string(),
        })
    }

    /// Resolve the style a toast should render with
    ///
    /// Keyed lookup when a key is given, falling back to the registry default
    /// (with a warning) when the key is unknown.
    pub fn resolve(key: Option<&str>, cx: &App) -> ToastStyle {
        Self::read(cx, |styles| match key {
            None => styles.default_style().clone(),
            Some(key) => match styles.get(key) {
                Some(style) => style.clone(),
                None => {
                    warn!(key, "unknown toast style key, using default");
                    styles.default_style().clone()
                }
            },
        })
    }

    /// Merge a TOML style sheet into the process-wide registry
    pub fn load_sheet(text: &str, cx: &mut App) -> Result<usize> {
        let added = Self::update(cx, |styles| styles.load_toml(text))?;
        info!(added, "loaded toast style sheet");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut styles = ToastStyles::default();
        styles.insert("success", ToastStyle::new().background(ColorSpec::new(34, 197, 94)));
        assert!(styles.get("success").is_some());
        assert!(styles.get("missing").is_none());
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut styles = ToastStyles::default();
        styles.insert("note", ToastStyle::new().width(200.0));
        styles.insert("note", ToastStyle::new().width(250.0));
        assert_eq!(styles.len(), 1);
        let style = styles.get("note").expect("style should be registered");
        assert!((style.width - 250.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_remove() {
        let mut styles = ToastStyles::default();
        styles.insert("gone", ToastStyle::new());
        assert!(styles.remove("gone").is_some());
        assert!(styles.remove("gone").is_none());
        assert!(styles.is_empty());
    }

    #[test]
    fn test_set_default() {
        let mut styles = ToastStyles::default();
        styles.set_default(ToastStyle::new().font_size(18.0));
        assert!((styles.default_style().font_size - 18.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pill_corner_radius() {
        let style = ToastStyle::new().height(44.0);
        assert!((style.resolved_corner_radius() - 22.0).abs() < f32::EPSILON);
        let squared = style.corner_radius(6.0);
        assert!((squared.resolved_corner_radius() - 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_toml_sheet() {
        let mut styles = ToastStyles::default();
        let added = styles
            .load_toml(
                r#"
                [default]
                font_size = 16.0

                [styles.success]
                background = { r = 34, g = 197, b = 94, a = 242 }

                [styles.error]
                width = 320.0
                height = 72.0
                background = { r = 239, g = 68, b = 68 }
                "#,
            )
            .expect("sheet should parse");
        assert_eq!(added, 2);
        assert!((styles.default_style().font_size - 16.0).abs() < f32::EPSILON);

        // Partial tables fall back to defaults for missing fields
        let success = styles.get("success").expect("success should be registered");
        assert!((success.width - TOAST_DEFAULT_WIDTH).abs() < f32::EPSILON);
        assert_eq!(success.background.a, 242);

        let error = styles.get("error").expect("error should be registered");
        assert_eq!(error.background.a, 255);
        assert!((error.resolved_corner_radius() - 36.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_toml_rejects_garbage() {
        let mut styles = ToastStyles::default();
        assert!(styles.load_toml("styles = 3").is_err());
    }

    #[test]
    fn test_sheet_styles_table_deserializes() {
        let sheet: StyleSheet = toml::from_str(
            r#"
            [styles.notice]
            font_size = 13.0

            [styles.alert]
            background = { r = 239, g = 68, b = 68 }
            "#,
        )
        .expect("styles tables should deserialize");
        assert!(sheet.default.is_none());
        assert_eq!(sheet.styles.len(), 2);
        assert!(sheet.styles.contains_key("notice"));
        assert!(sheet.styles.contains_key("alert"));
    }

    #[test]
    fn test_default_style_follows_palette() {
        let style = ToastStyle::default();
        assert_eq!(style.background, ColorSpec::from_rgba(PopkitColors::toast_bg()));
        assert_eq!(style.text_color, ColorSpec::from_rgba(PopkitColors::toast_text()));
        assert_eq!(style.background, ColorSpec::with_alpha(128, 128, 128, 242));
    }
}
