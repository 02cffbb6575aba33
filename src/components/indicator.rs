//! Indicator Component
//!
//! A reference-counted loading overlay. Every `show` increments a display
//! counter and every `hide` decrements it; the overlay is on screen exactly
//! while the counter is positive, so nested and overlapping callers coalesce
//! into a single visible indicator. Rendering is a rotating built-in spinner,
//! a pulsing image, or a stepped frame sequence, optionally on a rounded
//! backdrop, optionally blocking input to the covered subtree, centered in
//! the covered area or at a caller-chosen anchor point.

use crate::assets::SPINNER_ICON;
use crate::constants::{
    INDICATOR_BACKDROP_PADDING, INDICATOR_BACKDROP_RADIUS, INDICATOR_CYCLE_MS,
    INDICATOR_DEFAULT_SIZE,
};
use crate::helpers::{DisplayCount, anchored_origin};
use crate::theme::PopkitColors;
use gpui::{
    Animation, AnimationExt, AnyElement, Context, Empty, IntoElement, Pixels, Point, Render, Rgba,
    SharedString, Transformation, Window, div, img, percentage, prelude::*, px, svg,
};
use std::time::Duration;
use tracing::{debug, warn};

// ==================== Appearance ====================

/// What the indicator draws while visible
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndicatorStyle {
    /// Built-in spinner arc, rotating once per cycle
    Spinner,
    /// A single image pulsing its opacity
    Image { path: SharedString },
    /// A frame sequence stepped through once per cycle
    Frames { paths: Vec<SharedString> },
}

/// Expand a `{}` placeholder into indexed frame paths
pub(crate) fn expand_frame_format(format: &str, count: usize) -> Vec<SharedString> {
    (0..count)
        .map(|index| SharedString::from(format.replacen("{}", &index.to_string(), 1)))
        .collect()
}

/// Map an animation delta to a frame index, freezing on the last frame
pub(crate) fn frame_index(delta: f32, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let index = (delta * frame_count as f32) as usize;
    index.min(frame_count - 1)
}

/// Per-cycle delta when an animation is stretched over `cycles` repeats
///
/// `cycles == 0` (endless) passes the repeating delta straight through.
/// A finite run freezes at 1.0 after its final cycle.
pub(crate) fn cycle_delta(delta: f32, cycles: usize) -> f32 {
    if cycles == 0 {
        return delta;
    }
    if delta >= 1.0 {
        return 1.0;
    }
    (delta * cycles as f32).fract()
}

/// Pulse curve for the image indicator: full opacity at the cycle edges,
/// dimmest mid-cycle
pub(crate) fn pulse_opacity(delta: f32) -> f32 {
    const MIN: f32 = 0.3;
    const MAX: f32 = 1.0;
    let dip = 1.0 - (2.0 * delta - 1.0).abs();
    MAX - (MAX - MIN) * dip
}

// ==================== Component ====================

/// Reference-counted loading indicator entity
pub struct Indicator {
    /// What to draw
    style: IndicatorStyle,
    /// Edge length of the drawn spinner/image
    size: Pixels,
    /// Spinner stroke color
    tint: Rgba,
    /// One revolution / pulse / frame sweep
    cycle: Duration,
    /// Number of cycles to play; 0 repeats forever
    repeat_count: usize,
    /// Rounded box painted behind the indicator
    backdrop: Option<Rgba>,
    /// Whether the covered subtree is blocked from input while visible
    block_input: bool,
    /// Explicit center point; `None` centers in the covered area
    anchor: Option<Point<Pixels>>,
    /// Active showers; the overlay is on screen exactly while this is positive
    count: DisplayCount,
    /// Bumped on each 0->1 edge; namespaces animation ids
    epoch: usize,
}

impl Indicator {
    fn with_style(style: IndicatorStyle) -> Self {
        Self {
            style,
            size: px(INDICATOR_DEFAULT_SIZE),
            tint: PopkitColors::spinner(),
            cycle: Duration::from_millis(INDICATOR_CYCLE_MS),
            repeat_count: 0,
            backdrop: None,
            block_input: true,
            anchor: None,
            count: DisplayCount::new(),
            epoch: 0,
        }
    }

    /// Create an indicator drawing the built-in spinner
    pub fn spinner() -> Self {
        Self::with_style(IndicatorStyle::Spinner)
    }

    /// Create an indicator pulsing a single image asset
    pub fn image(path: impl Into<SharedString>) -> Self {
        Self::with_style(IndicatorStyle::Image { path: path.into() })
    }

    /// Create an indicator stepping through frame assets
    pub fn frames(paths: Vec<SharedString>) -> Self {
        if paths.is_empty() {
            warn!("frame indicator created with no frames, nothing will be drawn");
        }
        Self::with_style(IndicatorStyle::Frames { paths })
    }

    /// Create a frame indicator from a `{}` path format and a frame count
    ///
    /// `Indicator::frames_from_format("loader/frame{}.png", 4)` steps
    /// through `loader/frame0.png` .. `loader/frame3.png`.
    pub fn frames_from_format(format: &str, count: usize) -> Self {
        if !format.contains("{}") {
            warn!(format, "frame format has no {{}} placeholder, every frame resolves the same");
        }
        Self::frames(expand_frame_format(format, count))
    }

    // ==================== Builder ====================

    /// Set the drawn edge length
    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    /// Set the spinner stroke color
    pub fn tint(mut self, tint: Rgba) -> Self {
        self.tint = tint;
        self
    }

    /// Set the duration of one revolution / pulse / frame sweep
    pub fn animation_duration(mut self, cycle: Duration) -> Self {
        self.cycle = cycle;
        self
    }

    /// Play a finite number of cycles, then freeze (0 repeats forever)
    pub fn repeat_count(mut self, count: usize) -> Self {
        self.repeat_count = count;
        self
    }

    /// Paint a rounded backdrop behind the indicator
    pub fn backdrop(mut self, color: Rgba) -> Self {
        self.backdrop = Some(color);
        self
    }

    /// Dark backdrop with a light spinner, for busy overlays on any content
    pub fn black_backdrop(mut self) -> Self {
        self.backdrop = Some(PopkitColors::backdrop());
        self.tint = PopkitColors::text_light();
        self
    }

    /// Control whether the covered subtree is blocked while visible
    /// (default true)
    pub fn block_input(mut self, block: bool) -> Self {
        self.block_input = block;
        self
    }

    /// Center the indicator at a point instead of in the covered area
    pub fn anchor(mut self, anchor: Point<Pixels>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    // ==================== Runtime restyling ====================
    //
    // Reconfiguration is rejected while the indicator is on screen; other
    // showers may still be holding the current appearance up.

    /// Replace what the indicator draws
    pub fn set_style(&mut self, style: IndicatorStyle) {
        if self.reject_if_visible("style") {
            return;
        }
        self.style = style;
    }

    /// Replace the drawn edge length
    pub fn set_size(&mut self, size: Pixels) {
        if self.reject_if_visible("size") {
            return;
        }
        self.size = size;
    }

    /// Replace the cycle duration
    pub fn set_animation_duration(&mut self, cycle: Duration) {
        if self.reject_if_visible("animation duration") {
            return;
        }
        self.cycle = cycle;
    }

    /// Replace the repeat count
    pub fn set_repeat_count(&mut self, count: usize) {
        if self.reject_if_visible("repeat count") {
            return;
        }
        self.repeat_count = count;
    }

    /// Replace or clear the anchor point
    pub fn set_anchor(&mut self, anchor: Option<Point<Pixels>>) {
        if self.reject_if_visible("anchor") {
            return;
        }
        self.anchor = anchor;
    }

    fn reject_if_visible(&self, what: &str) -> bool {
        if self.count.is_visible() {
            warn!(what, "can not change the indicator while it is displayed");
            return true;
        }
        false
    }

    // ==================== Display counting ====================

    /// Register one more shower; the overlay appears on the 0->1 edge
    pub fn show(&mut self, cx: &mut Context<Self>) {
        if self.count.increment() {
            self.epoch += 1;
            debug!("indicator shown");
            cx.notify();
        } else {
            debug!(count = self.count.get(), "indicator show coalesced");
        }
    }

    /// Release one shower; the overlay disappears on the 1->0 edge
    ///
    /// A hide with no matching show is ignored with a warning; the count
    /// never goes negative.
    pub fn hide(&mut self, cx: &mut Context<Self>) {
        if !self.count.is_visible() {
            warn!("indicator hide with no matching show");
            return;
        }
        if self.count.decrement() {
            debug!("indicator hidden");
            cx.notify();
        } else {
            debug!(count = self.count.get(), "indicator hide deferred, other showers active");
        }
    }

    /// Drop every shower at once and hide, regardless of the count
    pub fn hide_forcibly(&mut self, cx: &mut Context<Self>) {
        if self.count.reset() {
            debug!("indicator force hidden");
            cx.notify();
        }
    }

    /// Convenience mapping of a boolean to `show`/`hide`
    pub fn set_animating(&mut self, animating: bool, cx: &mut Context<Self>) {
        if animating {
            self.show(cx);
        } else {
            self.hide(cx);
        }
    }

    /// Whether any shower is active
    pub fn is_visible(&self) -> bool {
        self.count.is_visible()
    }

    /// Current number of active showers
    pub fn display_count(&self) -> usize {
        self.count.get()
    }

    // ==================== Rendering ====================

    /// Edge length of the drawn badge, backdrop padding included
    fn badge_edge(&self) -> f32 {
        let mut edge = f32::from(self.size);
        if self.backdrop.is_some() {
            edge += 2.0 * INDICATOR_BACKDROP_PADDING;
        }
        edge
    }

    /// Wrap one animation frame mapping, honoring the repeat count
    fn animated<E>(&self, element: E, frame: impl Fn(E, f32) -> E + 'static) -> AnyElement
    where
        E: IntoElement + 'static,
    {
        let id = ("indicator-anim", self.epoch);
        let cycles = self.repeat_count;
        if cycles == 0 {
            element
                .with_animation(id, Animation::new(self.cycle).repeat(), move |el, delta| {
                    frame(el, delta)
                })
                .into_any_element()
        } else {
            element
                .with_animation(
                    id,
                    Animation::new(self.cycle * cycles as u32),
                    move |el, delta| frame(el, cycle_delta(delta, cycles)),
                )
                .into_any_element()
        }
    }

    fn render_badge(&self) -> AnyElement {
        let size = self.size;
        let content = match &self.style {
            IndicatorStyle::Spinner => {
                let tint = self.tint;
                self.animated(
                    svg().path(SPINNER_ICON).size(size).text_color(tint),
                    |spinner, delta| {
                        spinner.with_transformation(Transformation::rotate(percentage(delta)))
                    },
                )
            }
            IndicatorStyle::Image { path } => {
                let path = path.clone();
                self.animated(img(path).size(size), |image, delta| {
                    image.opacity(pulse_opacity(delta))
                })
            }
            IndicatorStyle::Frames { paths } if paths.is_empty() => Empty.into_any_element(),
            IndicatorStyle::Frames { paths } => {
                let paths = paths.clone();
                self.animated(div().size(size), move |frame, delta| {
                    let index = frame_index(delta, paths.len());
                    frame.child(img(paths[index].clone()).size_full())
                })
            }
        };

        match self.backdrop {
            Some(color) => div()
                .bg(color)
                .rounded(px(INDICATOR_BACKDROP_RADIUS))
                .p(px(INDICATOR_BACKDROP_PADDING))
                .flex()
                .items_center()
                .justify_center()
                .child(content)
                .into_any_element(),
            None => content,
        }
    }
}

impl Render for Indicator {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        if !self.count.is_visible() {
            return Empty.into_any_element();
        }

        let mut layer = div().absolute().inset_0();
        if self.block_input {
            layer = layer.occlude();
        }
        match self.anchor {
            Some(anchor) => {
                let edge = self.badge_edge();
                let origin = anchored_origin(anchor, edge, edge);
                layer
                    .child(
                        div()
                            .absolute()
                            .left(origin.x)
                            .top(origin.y)
                            .child(self.render_badge()),
                    )
                    .into_any_element()
            }
            None => layer
                .flex()
                .items_center()
                .justify_center()
                .child(self.render_badge())
                .into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::point;

    #[test]
    fn test_expand_frame_format() {
        let paths = expand_frame_format("loader/frame{}.png", 3);
        assert_eq!(
            paths,
            vec![
                SharedString::from("loader/frame0.png"),
                SharedString::from("loader/frame1.png"),
                SharedString::from("loader/frame2.png"),
            ]
        );
        assert!(expand_frame_format("x{}.png", 0).is_empty());
    }

    #[test]
    fn test_expand_without_placeholder_repeats_path() {
        let paths = expand_frame_format("static.png", 2);
        assert_eq!(paths[0], paths[1]);
    }

    #[test]
    fn test_frame_index_steps_and_freezes() {
        assert_eq!(frame_index(0.0, 4), 0);
        assert_eq!(frame_index(0.5, 4), 2);
        assert_eq!(frame_index(0.99, 4), 3);
        assert_eq!(frame_index(1.0, 4), 3); // freezes on the last frame
        assert_eq!(frame_index(0.5, 0), 0);
    }

    #[test]
    fn test_cycle_delta() {
        // endless: delta passes straight through
        assert!((cycle_delta(0.4, 0) - 0.4).abs() < f32::EPSILON);
        // three cycles: mid-run wraps per cycle
        assert!((cycle_delta(0.5, 3) - 0.5).abs() < 1e-5);
        assert!((cycle_delta(0.25, 2) - 0.5).abs() < 1e-5);
        // finished runs freeze at 1.0
        assert!((cycle_delta(1.0, 3) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pulse_opacity_curve() {
        assert!((pulse_opacity(0.0) - 1.0).abs() < f32::EPSILON);
        assert!((pulse_opacity(0.5) - 0.3).abs() < 1e-5);
        assert!((pulse_opacity(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((pulse_opacity(0.25) - pulse_opacity(0.75)).abs() < 1e-5);
    }

    #[test]
    fn test_builder_chain() {
        let indicator = Indicator::image("loader/disc.png")
            .size(px(64.0))
            .animation_duration(Duration::from_millis(500))
            .repeat_count(2)
            .black_backdrop()
            .block_input(false);
        assert_eq!(
            indicator.style,
            IndicatorStyle::Image {
                path: "loader/disc.png".into()
            }
        );
        assert_eq!(indicator.size, px(64.0));
        assert_eq!(indicator.cycle, Duration::from_millis(500));
        assert_eq!(indicator.repeat_count, 2);
        assert!(indicator.backdrop.is_some());
        assert!(!indicator.block_input);
    }

    #[test]
    fn test_restyle_rejected_while_visible() {
        let mut indicator = Indicator::spinner();
        indicator.count.increment();
        indicator.set_size(px(64.0));
        assert_eq!(indicator.size, px(INDICATOR_DEFAULT_SIZE));

        indicator.count.reset();
        indicator.set_size(px(64.0));
        assert_eq!(indicator.size, px(64.0));
    }

    #[test]
    fn test_anchor_configuration() {
        let indicator = Indicator::spinner();
        assert_eq!(indicator.anchor, None);

        let indicator = Indicator::spinner().anchor(point(px(370.0), px(660.0)));
        assert_eq!(indicator.anchor, Some(point(px(370.0), px(660.0))));
    }

    #[test]
    fn test_set_anchor_rejected_while_visible() {
        let mut indicator = Indicator::spinner();
        indicator.count.increment();
        indicator.set_anchor(Some(point(px(100.0), px(100.0))));
        assert_eq!(indicator.anchor, None);

        indicator.count.reset();
        indicator.set_anchor(Some(point(px(100.0), px(100.0))));
        assert_eq!(indicator.anchor, Some(point(px(100.0), px(100.0))));
    }

    #[test]
    fn test_badge_edge_includes_backdrop_padding() {
        let bare = Indicator::spinner().size(px(40.0));
        assert!((bare.badge_edge() - 40.0).abs() < f32::EPSILON);

        let boxed = Indicator::spinner().size(px(40.0)).black_backdrop();
        assert!((boxed.badge_edge() - 72.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_visibility_tracks_count() {
        let mut indicator = Indicator::spinner();
        assert!(!indicator.is_visible());
        indicator.count.increment();
        indicator.count.increment();
        assert!(indicator.is_visible());
        assert_eq!(indicator.display_count(), 2);
        indicator.count.reset();
        assert!(!indicator.is_visible());
    }
}
