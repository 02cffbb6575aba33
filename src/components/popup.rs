//! Popup Component
//!
//! A modal popup container with a dimming overlay, show/hide animations,
//! an optional title bar, and click-outside dismissal. The popup is an
//! entity; hosts mount it in their element tree, configure it with
//! chainable setters, and drive it with `show`/`hide` inside updates.
//! It covers the subtree it is rendered into and renders nothing at all
//! while hidden.

use crate::constants::{
    DEFAULT_ANIMATION_MS, OVERLAY_FADE_MS, POPUP_CORNER_RADIUS, POPUP_DEFAULT_HEIGHT,
    POPUP_DEFAULT_WIDTH, POPUP_TITLE_PADDING,
};
use crate::theme::{PopkitColors, Typography};
use gpui::{
    Animation, AnimationExt, AnyElement, AnyView, ClickEvent, Context, DismissEvent, Div, Edges,
    Empty, EventEmitter, FontWeight, Pixels, Point, Render, Rgba, SharedString, Size, Task, Window,
    div, ease_in_out, point, prelude::*, px, size,
};
use std::time::Duration;
use tracing::debug;

// ==================== Animation ====================

/// How the popup panel enters and leaves
///
/// Slide variants travel the full extent of the covered area: `SlideUp`
/// enters from the bottom edge and exits through the top, `SlideLeft`
/// enters from the right edge and exits through the left, and so on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupAnimation {
    /// Interpolate panel opacity
    #[default]
    Fade,
    /// Travel upward (enter from the bottom, exit through the top)
    SlideUp,
    /// Travel downward
    SlideDown,
    /// Travel leftward
    SlideLeft,
    /// Travel rightward
    SlideRight,
    /// Swap instantly (the overlay still fades)
    None,
}

/// Panel offset while entering: starts one full extent away, lands at zero
pub(crate) fn enter_offset(
    animation: PopupAnimation,
    viewport: Size<Pixels>,
    delta: f32,
) -> Point<Pixels> {
    let remaining = 1.0 - delta;
    match animation {
        PopupAnimation::SlideUp => point(px(0.0), viewport.height * remaining),
        PopupAnimation::SlideDown => point(px(0.0), viewport.height * -remaining),
        PopupAnimation::SlideLeft => point(viewport.width * remaining, px(0.0)),
        PopupAnimation::SlideRight => point(viewport.width * -remaining, px(0.0)),
        PopupAnimation::Fade | PopupAnimation::None => point(px(0.0), px(0.0)),
    }
}

/// Panel offset while exiting: leaves through the edge opposite its entry
pub(crate) fn exit_offset(
    animation: PopupAnimation,
    viewport: Size<Pixels>,
    delta: f32,
) -> Point<Pixels> {
    match animation {
        PopupAnimation::SlideUp => point(px(0.0), viewport.height * -delta),
        PopupAnimation::SlideDown => point(px(0.0), viewport.height * delta),
        PopupAnimation::SlideLeft => point(viewport.width * -delta, px(0.0)),
        PopupAnimation::SlideRight => point(viewport.width * delta, px(0.0)),
        PopupAnimation::Fade | PopupAnimation::None => point(px(0.0), px(0.0)),
    }
}

/// The panel never exceeds the area it covers
pub(crate) fn clamped_size(requested: Size<Pixels>, viewport: Size<Pixels>) -> Size<Pixels> {
    let width = if requested.width > viewport.width {
        viewport.width
    } else {
        requested.width
    };
    let height = if requested.height > viewport.height {
        viewport.height
    } else {
        requested.height
    };
    size(width, height)
}

// ==================== Style ====================

/// Visual configuration for the popup panel and its overlay
#[derive(Clone, Debug)]
pub struct PopupStyle {
    /// Requested panel size (clamped to the covered area at render time)
    pub size: Size<Pixels>,
    /// Panel corner radius
    pub corner_radius: Pixels,
    /// Panel background
    pub background: Rgba,
    /// Dimming overlay color
    pub overlay_color: Rgba,
    /// Title text color
    pub title_color: Rgba,
    /// Title font size
    pub title_size: Pixels,
    /// Title font weight
    pub title_weight: FontWeight,
    /// Padding around the title
    pub title_padding: Edges<Pixels>,
}

impl Default for PopupStyle {
    fn default() -> Self {
        let pad = px(POPUP_TITLE_PADDING);
        Self {
            size: size(px(POPUP_DEFAULT_WIDTH), px(POPUP_DEFAULT_HEIGHT)),
            corner_radius: px(POPUP_CORNER_RADIUS),
            background: PopkitColors::panel_bg(),
            overlay_color: PopkitColors::overlay(),
            title_color: PopkitColors::text_primary(),
            title_size: px(Typography::POPUP_TITLE),
            title_weight: FontWeight::SEMIBOLD,
            title_padding: Edges {
                top: pad,
                right: pad,
                bottom: pad,
                left: pad,
            },
        }
    }
}

// ==================== Lifecycle ====================

/// Popup lifecycle notifications, emitted in order around each transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupEvent {
    /// The enter transition is starting
    WillShow,
    /// The enter transition finished
    Shown,
    /// The exit transition is starting
    WillHide,
    /// The exit transition finished; the popup no longer renders
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Hidden,
    Showing,
    Shown,
    Hiding,
}

impl Phase {
    /// `show` coalesces: only a hidden popup starts an enter transition
    fn can_show(self) -> bool {
        self == Phase::Hidden
    }

    /// `hide` is valid while entering or fully shown
    fn can_hide(self) -> bool {
        matches!(self, Phase::Showing | Phase::Shown)
    }
}

// ==================== Component ====================

/// Modal popup entity
pub struct Popup {
    /// Hosted content view
    content: AnyView,
    /// Optional title bar text
    title: Option<SharedString>,
    /// Panel and overlay styling
    style: PopupStyle,
    /// Animation used by [`show`](Self::show)
    show_animation: PopupAnimation,
    /// Animation used by [`hide`](Self::hide)
    hide_animation: PopupAnimation,
    /// Panel transition duration
    duration: Duration,
    /// Whether clicking the overlay hides the popup
    dismiss_on_overlay_click: bool,
    /// Host-assigned identifier carried into log output
    tag: i64,
    phase: Phase,
    /// Bumped once per show; namespaces animation ids and stales old timers
    epoch: usize,
    /// Animation of the in-flight transition
    active_animation: PopupAnimation,
    /// Duration of the in-flight transition
    active_duration: Duration,
    /// Pending completion timer; replacing it cancels the old transition
    _transition: Option<Task<()>>,
}

impl Popup {
    /// Create a hidden popup wrapping the given content view
    pub fn new(content: impl Into<AnyView>) -> Self {
        Self {
            content: content.into(),
            title: None,
            style: PopupStyle::default(),
            show_animation: PopupAnimation::default(),
            hide_animation: PopupAnimation::default(),
            duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            dismiss_on_overlay_click: true,
            tag: 0,
            phase: Phase::Hidden,
            epoch: 0,
            active_animation: PopupAnimation::default(),
            active_duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            _transition: None,
        }
    }

    // ==================== Builder ====================

    /// Set the title bar text
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title text color
    pub fn title_color(mut self, color: Rgba) -> Self {
        self.style.title_color = color;
        self
    }

    /// Set the title font size
    pub fn title_size(mut self, size: Pixels) -> Self {
        self.style.title_size = size;
        self
    }

    /// Set the title font weight
    pub fn title_weight(mut self, weight: FontWeight) -> Self {
        self.style.title_weight = weight;
        self
    }

    /// Set uniform padding around the title
    pub fn title_padding(mut self, padding: Pixels) -> Self {
        self.style.title_padding = Edges {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        };
        self
    }

    /// Set the requested panel size
    pub fn size(mut self, size: Size<Pixels>) -> Self {
        self.style.size = size;
        self
    }

    /// Set the panel corner radius
    pub fn corner_radius(mut self, radius: Pixels) -> Self {
        self.style.corner_radius = radius;
        self
    }

    /// Set the panel background color
    pub fn background(mut self, background: Rgba) -> Self {
        self.style.background = background;
        self
    }

    /// Set the dimming overlay color
    pub fn overlay_color(mut self, color: Rgba) -> Self {
        self.style.overlay_color = color;
        self
    }

    /// Replace the whole style at once
    pub fn style(mut self, style: PopupStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the animation used by [`show`](Self::show)
    pub fn show_animation(mut self, animation: PopupAnimation) -> Self {
        self.show_animation = animation;
        self
    }

    /// Set the animation used by [`hide`](Self::hide)
    pub fn hide_animation(mut self, animation: PopupAnimation) -> Self {
        self.hide_animation = animation;
        self
    }

    /// Set the panel transition duration
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Control whether clicking the overlay hides the popup (default true)
    pub fn dismiss_on_overlay_click(mut self, dismiss: bool) -> Self {
        self.dismiss_on_overlay_click = dismiss;
        self
    }

    /// Attach a host-assigned identifier for event handlers and logs
    pub fn with_tag(mut self, tag: i64) -> Self {
        self.tag = tag;
        self
    }

    // ==================== State ====================

    /// Host-assigned identifier
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// True from the start of the enter transition until fully hidden
    pub fn is_showing(&self) -> bool {
        self.phase != Phase::Hidden
    }

    // ==================== Transitions ====================

    /// Show with the configured animation and duration
    ///
    /// Repeated calls while visible are no-ops.
    pub fn show(&mut self, cx: &mut Context<Self>) {
        self.show_as(self.show_animation, self.duration, cx);
    }

    /// Show with an explicit animation and duration
    pub fn show_as(
        &mut self,
        animation: PopupAnimation,
        duration: Duration,
        cx: &mut Context<Self>,
    ) {
        if !self.phase.can_show() {
            debug!(tag = self.tag, "show ignored, popup already visible");
            return;
        }
        self.epoch += 1;
        self.phase = Phase::Showing;
        self.active_animation = animation;
        self.active_duration = duration;
        debug!(tag = self.tag, ?animation, "popup showing");
        cx.emit(PopupEvent::WillShow);
        self._transition = Some(self.complete_transition(Phase::Showing, cx));
        cx.notify();
    }

    /// Hide with the configured animation and duration
    ///
    /// Ignored unless the popup is showing or shown. Hiding mid-enter
    /// cancels the pending `Shown` notification.
    pub fn hide(&mut self, cx: &mut Context<Self>) {
        self.hide_as(self.hide_animation, self.duration, cx);
    }

    /// Hide with an explicit animation and duration
    pub fn hide_as(
        &mut self,
        animation: PopupAnimation,
        duration: Duration,
        cx: &mut Context<Self>,
    ) {
        if !self.phase.can_hide() {
            debug!(tag = self.tag, "hide ignored, popup not visible");
            return;
        }
        self.phase = Phase::Hiding;
        self.active_animation = animation;
        self.active_duration = duration;
        debug!(tag = self.tag, ?animation, "popup hiding");
        cx.emit(PopupEvent::WillHide);
        self._transition = Some(self.complete_transition(Phase::Hiding, cx));
        cx.notify();
    }

    /// Schedule the settle step for the transition entered just now
    fn complete_transition(&self, from: Phase, cx: &mut Context<Self>) -> Task<()> {
        let wait = if self.active_animation == PopupAnimation::None {
            Duration::ZERO
        } else {
            self.active_duration
        };
        let epoch = self.epoch;
        cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(wait).await;
            let _ = handle.update(cx, |this, cx| {
                if this.epoch != epoch || this.phase != from {
                    return;
                }
                match from {
                    Phase::Showing => {
                        this.phase = Phase::Shown;
                        cx.emit(PopupEvent::Shown);
                    }
                    Phase::Hiding => {
                        this.phase = Phase::Hidden;
                        cx.emit(PopupEvent::Hidden);
                        cx.emit(DismissEvent);
                    }
                    _ => return,
                }
                cx.notify();
            });
        })
    }

    // ==================== Rendering ====================

    fn render_panel(&self, viewport: Size<Pixels>) -> AnyElement {
        let style = &self.style;
        let panel_size = clamped_size(style.size, viewport);

        let mut panel = div()
            .occlude()
            .bg(style.background)
            .rounded(style.corner_radius)
            .shadow_lg()
            .overflow_hidden()
            .w(panel_size.width)
            .h(panel_size.height)
            .flex()
            .flex_col();

        if let Some(title) = self.title.clone() {
            panel = panel.child(
                div()
                    .flex_none()
                    .pt(style.title_padding.top)
                    .pr(style.title_padding.right)
                    .pb(style.title_padding.bottom)
                    .pl(style.title_padding.left)
                    .border_b_1()
                    .border_color(PopkitColors::border())
                    .text_size(style.title_size)
                    .font_weight(style.title_weight)
                    .text_color(style.title_color)
                    .child(title),
            );
        }

        let panel = panel.child(
            div()
                .flex_1()
                .overflow_hidden()
                .child(self.content.clone()),
        );

        let animation = self.active_animation;
        let duration = self.active_duration;
        let instant = animation == PopupAnimation::None || duration.is_zero();
        match self.phase {
            Phase::Showing | Phase::Shown if !instant => panel
                .with_animation(
                    ("popup-panel-in", self.epoch),
                    Animation::new(duration).with_easing(ease_in_out),
                    move |panel, delta| apply_transition(panel, animation, viewport, delta, true),
                )
                .into_any_element(),
            Phase::Hiding if !instant => panel
                .with_animation(
                    ("popup-panel-out", self.epoch),
                    Animation::new(duration).with_easing(ease_in_out),
                    move |panel, delta| apply_transition(panel, animation, viewport, delta, false),
                )
                .into_any_element(),
            _ => panel.into_any_element(),
        }
    }
}

/// Position or fade the panel for one animation frame
fn apply_transition(
    panel: Div,
    animation: PopupAnimation,
    viewport: Size<Pixels>,
    delta: f32,
    entering: bool,
) -> Div {
    match animation {
        PopupAnimation::Fade => panel.opacity(if entering { delta } else { 1.0 - delta }),
        PopupAnimation::None => panel,
        _ => {
            let shift = if entering {
                enter_offset(animation, viewport, delta)
            } else {
                exit_offset(animation, viewport, delta)
            };
            panel.relative().left(shift.x).top(shift.y)
        }
    }
}

impl Render for Popup {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.phase == Phase::Hidden {
            return Empty.into_any_element();
        }

        let viewport = window.viewport_size();
        let overlay = div()
            .id(("popup-overlay", self.epoch))
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .bg(self.style.overlay_color)
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                if this.dismiss_on_overlay_click {
                    this.hide(cx);
                }
            }))
            .child(self.render_panel(viewport));

        // The overlay fade runs a fixed time on both edges, independent of
        // the panel animation. Panel opacity multiplies under it.
        match self.phase {
            Phase::Showing | Phase::Shown => overlay
                .with_animation(
                    ("popup-overlay-in", self.epoch),
                    Animation::new(Duration::from_millis(OVERLAY_FADE_MS)).with_easing(ease_in_out),
                    |overlay, delta| overlay.opacity(delta),
                )
                .into_any_element(),
            Phase::Hiding => overlay
                .with_animation(
                    ("popup-overlay-out", self.epoch),
                    Animation::new(Duration::from_millis(OVERLAY_FADE_MS)).with_easing(ease_in_out),
                    |overlay, delta| overlay.opacity(1.0 - delta),
                )
                .into_any_element(),
            Phase::Hidden => Empty.into_any_element(),
        }
    }
}

impl EventEmitter<PopupEvent> for Popup {}
impl EventEmitter<DismissEvent> for Popup {}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size<Pixels> {
        size(px(800.0), px(600.0))
    }

    #[test]
    fn test_enter_starts_one_extent_away() {
        let vp = viewport();
        assert_eq!(
            enter_offset(PopupAnimation::SlideUp, vp, 0.0),
            point(px(0.0), px(600.0))
        );
        assert_eq!(
            enter_offset(PopupAnimation::SlideDown, vp, 0.0),
            point(px(0.0), px(-600.0))
        );
        assert_eq!(
            enter_offset(PopupAnimation::SlideLeft, vp, 0.0),
            point(px(800.0), px(0.0))
        );
        assert_eq!(
            enter_offset(PopupAnimation::SlideRight, vp, 0.0),
            point(px(-800.0), px(0.0))
        );
    }

    #[test]
    fn test_enter_lands_at_zero() {
        let vp = viewport();
        for animation in [
            PopupAnimation::Fade,
            PopupAnimation::SlideUp,
            PopupAnimation::SlideDown,
            PopupAnimation::SlideLeft,
            PopupAnimation::SlideRight,
            PopupAnimation::None,
        ] {
            assert_eq!(enter_offset(animation, vp, 1.0), point(px(0.0), px(0.0)));
        }
    }

    #[test]
    fn test_exit_leaves_through_opposite_edge() {
        let vp = viewport();
        assert_eq!(
            exit_offset(PopupAnimation::SlideUp, vp, 1.0),
            point(px(0.0), px(-600.0))
        );
        assert_eq!(
            exit_offset(PopupAnimation::SlideDown, vp, 1.0),
            point(px(0.0), px(600.0))
        );
        assert_eq!(
            exit_offset(PopupAnimation::SlideLeft, vp, 1.0),
            point(px(-800.0), px(0.0))
        );
        assert_eq!(
            exit_offset(PopupAnimation::SlideRight, vp, 1.0),
            point(px(800.0), px(0.0))
        );
    }

    #[test]
    fn test_fade_never_offsets() {
        let vp = viewport();
        assert_eq!(
            enter_offset(PopupAnimation::Fade, vp, 0.3),
            point(px(0.0), px(0.0))
        );
        assert_eq!(
            exit_offset(PopupAnimation::Fade, vp, 0.7),
            point(px(0.0), px(0.0))
        );
    }

    #[test]
    fn test_panel_clamped_to_viewport() {
        let requested = size(px(300.0), px(400.0));
        let clamped = clamped_size(requested, size(px(200.0), px(1000.0)));
        assert_eq!(clamped, size(px(200.0), px(400.0)));
        let untouched = clamped_size(requested, viewport());
        assert_eq!(untouched, requested);
    }

    #[test]
    fn test_phase_guards() {
        assert!(Phase::Hidden.can_show());
        assert!(!Phase::Showing.can_show());
        assert!(!Phase::Shown.can_show());
        assert!(!Phase::Hiding.can_show());

        assert!(!Phase::Hidden.can_hide());
        assert!(Phase::Showing.can_hide());
        assert!(Phase::Shown.can_hide());
        assert!(!Phase::Hiding.can_hide());
    }

    #[test]
    fn test_default_animation_is_fade() {
        assert_eq!(PopupAnimation::default(), PopupAnimation::Fade);
    }

    #[test]
    fn test_default_style() {
        let style = PopupStyle::default();
        assert_eq!(style.size, size(px(300.0), px(400.0)));
        assert_eq!(style.corner_radius, px(5.0));
    }
}
