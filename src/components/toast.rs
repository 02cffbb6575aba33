//! Toast Component
//!
//! A transient notification pill. It fades in, lingers for a configurable
//! time, fades out on its own, and reports clicks. Styling comes from an
//! explicit [`ToastStyle`], a key into the process-wide registry, or the
//! registry default, resolved at render time so late registry changes win.
//! Default placement is bottom-center of the covered area; `show_at`
//! anchors the pill's center at an explicit point instead.

use crate::constants::{
    DEFAULT_ANIMATION_MS, TOAST_BOTTOM_MARGIN, TOAST_TIME_LONG_MS, TOAST_TIME_SHORT_MS,
};
use crate::helpers::anchored_origin;
use crate::states::{ToastStyle, ToastStyles};
use gpui::{
    Animation, AnimationExt, ClickEvent, Context, Empty, EventEmitter, Pixels, Point, Render,
    SharedString, Task, Window, div, ease_in_out, prelude::*, px,
};
use std::time::Duration;
use tracing::debug;

// ==================== Display time ====================

/// How long a toast stays on screen between its fades
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastTime {
    /// 3 seconds
    #[default]
    Short,
    /// 5 seconds
    Long,
    /// Stays until hidden explicitly
    Forever,
    /// An exact linger duration
    Exact(Duration),
}

impl ToastTime {
    /// The linger duration; `None` means the toast never auto-dismisses
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            ToastTime::Short => Some(Duration::from_millis(TOAST_TIME_SHORT_MS)),
            ToastTime::Long => Some(Duration::from_millis(TOAST_TIME_LONG_MS)),
            ToastTime::Forever => None,
            ToastTime::Exact(duration) => Some(duration),
        }
    }
}

// ==================== Lifecycle ====================

/// Toast lifecycle notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastEvent {
    /// The fade-in is starting
    WillShow,
    /// The fade-in finished; the linger timer is running
    Shown,
    /// The fade-out is starting
    WillHide,
    /// The fade-out finished; the toast no longer renders
    Hidden,
    /// The pill was clicked (the toast stays up)
    Clicked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Hidden,
    /// A delayed show is waiting; nothing renders yet
    Pending,
    FadingIn,
    Shown,
    FadingOut,
}

impl Phase {
    fn can_show(self) -> bool {
        self == Phase::Hidden
    }

    fn renders(self) -> bool {
        matches!(self, Phase::FadingIn | Phase::Shown | Phase::FadingOut)
    }
}

// ==================== Component ====================

/// Transient toast entity
pub struct Toast {
    /// Message text
    message: SharedString,
    /// Explicit style; wins over the registry when set
    style: Option<ToastStyle>,
    /// Registry key to resolve when no explicit style is set
    style_key: Option<SharedString>,
    /// Linger time between the fades
    time: ToastTime,
    /// Fade in/out duration
    fade_duration: Duration,
    /// Wait before the fade-in starts
    delay: Duration,
    /// Explicit center point; `None` uses the bottom-center default
    anchor: Option<Point<Pixels>>,
    /// Host-assigned identifier carried into events and logs
    tag: i64,
    phase: Phase,
    /// Bumped once per show; namespaces animation ids and stales old timers
    epoch: usize,
    /// Pending delay/settle/linger timer; held so dropping it cancels
    _transition: Option<Task<()>>,
}

impl Toast {
    /// Create a hidden toast with the given message
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            style: None,
            style_key: None,
            time: ToastTime::default(),
            fade_duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            delay: Duration::ZERO,
            anchor: None,
            tag: 0,
            phase: Phase::Hidden,
            epoch: 0,
            _transition: None,
        }
    }

    // ==================== Builder ====================

    /// Use an explicit style instead of the registry
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolve the style from the registry by key at render time
    pub fn style_key(mut self, key: impl Into<SharedString>) -> Self {
        self.style_key = Some(key.into());
        self
    }

    /// Set the linger time
    pub fn time(mut self, time: ToastTime) -> Self {
        self.time = time;
        self
    }

    /// Set the fade in/out duration
    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Wait this long after `show` before fading in
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Attach a host-assigned identifier for event handlers and logs
    pub fn with_tag(mut self, tag: i64) -> Self {
        self.tag = tag;
        self
    }

    // ==================== State ====================

    /// The message text
    pub fn message(&self) -> &SharedString {
        &self.message
    }

    /// Replace the message; takes effect on the next show or repaint
    pub fn set_message(&mut self, message: impl Into<SharedString>) {
        self.message = message.into();
    }

    /// Host-assigned identifier
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// True from `show` (including a pending delay) until fully hidden
    pub fn is_showing(&self) -> bool {
        self.phase != Phase::Hidden
    }

    // ==================== Transitions ====================

    /// Show at the default bottom-center placement
    ///
    /// Repeated calls while visible are no-ops.
    pub fn show(&mut self, cx: &mut Context<Self>) {
        self.start(None, cx);
    }

    /// Show with the pill centered at `anchor`
    pub fn show_at(&mut self, anchor: Point<Pixels>, cx: &mut Context<Self>) {
        self.start(Some(anchor), cx);
    }

    fn start(&mut self, anchor: Option<Point<Pixels>>, cx: &mut Context<Self>) {
        if !self.phase.can_show() {
            debug!(tag = self.tag, "show ignored, toast already visible");
            return;
        }
        self.anchor = anchor;
        self.epoch += 1;
        if self.delay.is_zero() {
            self.begin_show(cx);
            return;
        }

        self.phase = Phase::Pending;
        debug!(tag = self.tag, delay_ms = self.delay.as_millis() as u64, "toast pending");
        let delay = self.delay;
        let epoch = self.epoch;
        self._transition = Some(cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(delay).await;
            let _ = handle.update(cx, |this, cx| {
                if this.epoch == epoch && this.phase == Phase::Pending {
                    this.begin_show(cx);
                }
            });
        }));
    }

    /// Hide ahead of the linger timer
    ///
    /// Cancels a still-pending delayed show outright; otherwise starts the
    /// fade-out. Ignored when already hidden or fading out.
    pub fn hide(&mut self, cx: &mut Context<Self>) {
        match self.phase {
            Phase::Pending => {
                self._transition = None;
                self.phase = Phase::Hidden;
                debug!(tag = self.tag, "pending toast cancelled");
                cx.notify();
            }
            Phase::FadingIn | Phase::Shown => self.begin_hide(cx),
            Phase::FadingOut | Phase::Hidden => {
                debug!(tag = self.tag, "hide ignored, toast not visible");
            }
        }
    }

    fn begin_show(&mut self, cx: &mut Context<Self>) {
        self.phase = Phase::FadingIn;
        debug!(tag = self.tag, "toast showing");
        cx.emit(ToastEvent::WillShow);

        let fade = self.fade_duration;
        let linger = self.time.as_duration();
        let epoch = self.epoch;
        self._transition = Some(cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(fade).await;
            let settled = handle.update(cx, |this, cx| {
                if this.epoch != epoch || this.phase != Phase::FadingIn {
                    return false;
                }
                this.phase = Phase::Shown;
                cx.emit(ToastEvent::Shown);
                cx.notify();
                true
            });
            if !matches!(settled, Ok(true)) {
                return;
            }
            let Some(linger) = linger else { return };
            cx.background_executor().timer(linger).await;
            let _ = handle.update(cx, |this, cx| {
                if this.epoch == epoch && this.phase == Phase::Shown {
                    this.begin_hide(cx);
                }
            });
        }));
        cx.notify();
    }

    fn begin_hide(&mut self, cx: &mut Context<Self>) {
        self.phase = Phase::FadingOut;
        debug!(tag = self.tag, "toast hiding");
        cx.emit(ToastEvent::WillHide);

        let fade = self.fade_duration;
        let epoch = self.epoch;
        self._transition = Some(cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(fade).await;
            let _ = handle.update(cx, |this, cx| {
                if this.epoch == epoch && this.phase == Phase::FadingOut {
                    this.phase = Phase::Hidden;
                    cx.emit(ToastEvent::Hidden);
                    cx.notify();
                }
            });
        }));
        cx.notify();
    }
}

impl Render for Toast {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.phase.renders() {
            return Empty.into_any_element();
        }

        let style = match (&self.style, &self.style_key) {
            (Some(style), _) => style.clone(),
            (None, Some(key)) => ToastStyles::resolve(Some(key.as_ref()), cx),
            (None, None) => ToastStyles::resolve(None, cx),
        };

        let pill = div()
            .id(("toast", self.epoch))
            .occlude()
            .w(px(style.width))
            .h(px(style.height))
            .rounded(px(style.resolved_corner_radius()))
            .bg(style.background.to_rgba())
            .flex()
            .items_center()
            .justify_center()
            .px_3()
            .overflow_hidden()
            .text_size(px(style.font_size))
            .text_color(style.text_color.to_rgba())
            .text_ellipsis()
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                debug!(tag = this.tag, "toast clicked");
                cx.emit(ToastEvent::Clicked);
            }))
            .child(self.message.clone());

        let fade = self.fade_duration;
        let pill = match self.phase {
            Phase::FadingIn | Phase::Shown if !fade.is_zero() => pill
                .with_animation(
                    ("toast-in", self.epoch),
                    Animation::new(fade).with_easing(ease_in_out),
                    |pill, delta| pill.opacity(delta),
                )
                .into_any_element(),
            Phase::FadingOut if !fade.is_zero() => pill
                .with_animation(
                    ("toast-out", self.epoch),
                    Animation::new(fade).with_easing(ease_in_out),
                    |pill, delta| pill.opacity(1.0 - delta),
                )
                .into_any_element(),
            _ => pill.into_any_element(),
        };

        // The placement layer spans the covered area but takes no input.
        let layer = div().absolute().inset_0();
        match self.anchor {
            Some(anchor) => {
                let origin = anchored_origin(anchor, style.width, style.height);
                layer
                    .child(div().absolute().left(origin.x).top(origin.y).child(pill))
                    .into_any_element()
            }
            None => layer
                .flex()
                .justify_center()
                .items_end()
                .pb(px(TOAST_BOTTOM_MARGIN))
                .child(pill)
                .into_any_element(),
        }
    }
}

impl EventEmitter<ToastEvent> for Toast {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_time_durations() {
        assert_eq!(
            ToastTime::Short.as_duration(),
            Some(Duration::from_secs(3))
        );
        assert_eq!(ToastTime::Long.as_duration(), Some(Duration::from_secs(5)));
        assert_eq!(ToastTime::Forever.as_duration(), None);
        assert_eq!(
            ToastTime::Exact(Duration::from_millis(1500)).as_duration(),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(ToastTime::default(), ToastTime::Short);
    }

    #[test]
    fn test_builder_defaults() {
        let toast = Toast::new("saved");
        assert_eq!(toast.message().as_ref(), "saved");
        assert_eq!(toast.time, ToastTime::Short);
        assert_eq!(toast.fade_duration, Duration::from_millis(300));
        assert!(toast.delay.is_zero());
        assert!(toast.anchor.is_none());
        assert!(toast.style.is_none());
        assert!(!toast.is_showing());
    }

    #[test]
    fn test_builder_chain() {
        let toast = Toast::new("uploading")
            .time(ToastTime::Forever)
            .delay(Duration::from_millis(250))
            .fade_duration(Duration::from_millis(100))
            .style_key("progress")
            .with_tag(7);
        assert_eq!(toast.time, ToastTime::Forever);
        assert_eq!(toast.delay, Duration::from_millis(250));
        assert_eq!(toast.fade_duration, Duration::from_millis(100));
        assert_eq!(toast.style_key.as_ref().map(|key| key.as_str()), Some("progress"));
        assert_eq!(toast.tag(), 7);
    }

    #[test]
    fn test_phase_guards() {
        assert!(Phase::Hidden.can_show());
        assert!(!Phase::Pending.can_show());
        assert!(!Phase::FadingIn.can_show());
        assert!(!Phase::Shown.can_show());
        assert!(!Phase::FadingOut.can_show());
    }

    #[test]
    fn test_phase_renders() {
        assert!(!Phase::Hidden.renders());
        assert!(!Phase::Pending.renders());
        assert!(Phase::FadingIn.renders());
        assert!(Phase::Shown.renders());
        assert!(Phase::FadingOut.renders());
    }
}
