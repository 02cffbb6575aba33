//! Popkit Gallery - Demo Entry Point
//!
//! A runnable window with one row per feature: popup animations, toast
//! styles and placements, and the reference-counted indicator. Component
//! lifecycle events are logged as they arrive.

use gpui::{
    App, AppContext, Application, Bounds, ClickEvent, Context, Entity, FontWeight, Pixels, Point,
    Render, SharedString, Subscription, TitlebarOptions, Window, WindowBounds, WindowOptions,
    actions, div, point, prelude::*, px, rgb, size,
};
use popkit::assets::Assets;
use popkit::theme::{PopkitColors, Typography};
use popkit::{
    Indicator, Popup, PopupAnimation, PopupEvent, SharedIndicator, Toast, ToastEvent, ToastStyles,
    ToastTime,
};
use std::time::Duration;
use tracing::info;

actions!(popkit_gallery, [Quit]);

/// Toast styles shipped as data rather than code
const STYLE_SHEET: &str = r#"
[styles.success]
background = { r = 34, g = 197, b = 94, a = 242 }

[styles.error]
width = 320.0
background = { r = 239, g = 68, b = 68, a = 242 }
"#;

const POPUP_BODY: &str = "This popup is an entity mounted by the gallery. Click the dimmed \
overlay to dismiss it, or wait for the gallery to hide it when outside taps are disabled.";

/// Simple paragraph content hosted inside the demo popups
struct PopupBody {
    text: SharedString,
}

impl Render for PopupBody {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .p_4()
            .text_size(px(Typography::TEXT_SM))
            .text_color(PopkitColors::text_secondary())
            .child(self.text.clone())
    }
}

/// Root view listing the demo rows and hosting the overlay entities
///
/// Each overlay entity is stored with its event subscription so both drop
/// together when the entity reports `Hidden`.
struct Gallery {
    /// Popup opened by the last popup row
    popup: Option<(Entity<Popup>, Subscription)>,
    /// Live toasts, pruned as they report `Hidden`
    toasts: Vec<(Entity<Toast>, Subscription)>,
    /// The shared default indicator (spinner on a dark backdrop)
    indicator: Entity<Indicator>,
    /// A second, non-blocking frame-sequence indicator anchored near the
    /// window corner
    frames_indicator: Entity<Indicator>,
}

impl Gallery {
    fn new(cx: &mut Context<Self>) -> Self {
        let indicator = cx.new(|_| Indicator::spinner().black_backdrop());
        SharedIndicator::set(indicator.clone(), cx);

        let frames_indicator = cx.new(|_| {
            Indicator::frames_from_format("images/frame{}.png", 4)
                .size(px(40.0))
                .block_input(false)
                .anchor(point(px(370.0), px(660.0)))
        });

        Self {
            popup: None,
            toasts: Vec::new(),
            indicator,
            frames_indicator,
        }
    }

    // ==================== Popup rows ====================

    fn open_popup(
        &mut self,
        title: &'static str,
        configure: impl FnOnce(Popup) -> Popup,
        cx: &mut Context<Self>,
    ) {
        let body = cx.new(|_| PopupBody {
            text: POPUP_BODY.into(),
        });
        let popup = cx.new(|_| configure(Popup::new(body).title(title)));
        let subscription = cx.subscribe(&popup, |this, popup, event: &PopupEvent, cx| {
            info!(tag = popup.read(cx).tag(), ?event, "popup event");
            if matches!(event, PopupEvent::Hidden) {
                this.popup = None;
                cx.notify();
            }
        });
        popup.update(cx, |popup, cx| popup.show(cx));
        self.popup = Some((popup, subscription));
        cx.notify();
    }

    /// Popup with outside taps disabled; the gallery hides it itself
    fn open_timed_popup(&mut self, cx: &mut Context<Self>) {
        self.open_popup(
            "Hold on",
            |popup| {
                popup
                    .with_tag(4)
                    .dismiss_on_overlay_click(false)
                    .show_animation(PopupAnimation::SlideDown)
                    .hide_animation(PopupAnimation::SlideUp)
                    .animation_duration(Duration::from_millis(600))
            },
            cx,
        );
        let Some(popup) = self.popup.as_ref().map(|(popup, _)| popup.clone()) else {
            return;
        };
        cx.spawn(async move |_this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(2500))
                .await;
            let _ = popup.update(cx, |popup, cx| popup.hide(cx));
        })
        .detach();
    }

    // ==================== Toast rows ====================

    fn mount_toast(&mut self, toast: Toast, anchor: Option<Point<Pixels>>, cx: &mut Context<Self>) {
        let toast = cx.new(|_| toast);
        let subscription = cx.subscribe(&toast, |this, toast, event: &ToastEvent, cx| {
            info!(tag = toast.read(cx).tag(), ?event, "toast event");
            if matches!(event, ToastEvent::Hidden) {
                this.toasts.retain(|(live, _)| live != &toast);
                cx.notify();
            }
        });
        toast.update(cx, |toast, cx| match anchor {
            Some(anchor) => toast.show_at(anchor, cx),
            None => toast.show(cx),
        });
        self.toasts.push((toast, subscription));
        cx.notify();
    }

    // ==================== Indicator rows ====================

    /// One shower for `duration_ms`
    fn busy_for(&mut self, duration_ms: u64, cx: &mut Context<Self>) {
        let indicator = SharedIndicator::get(cx);
        indicator.update(cx, |indicator, cx| indicator.show(cx));
        cx.spawn(async move |_this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(duration_ms))
                .await;
            let _ = indicator.update(cx, |indicator, cx| indicator.hide(cx));
        })
        .detach();
    }

    /// Two overlapping showers; the overlay stays up until the second hide
    fn nested_busy(&mut self, cx: &mut Context<Self>) {
        let indicator = SharedIndicator::get(cx);
        indicator.update(cx, |indicator, cx| {
            indicator.show(cx);
            indicator.show(cx);
        });
        info!(
            count = indicator.read(cx).display_count(),
            "two showers active, one overlay"
        );
        cx.spawn(async move |_this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(1500))
                .await;
            let _ = indicator.update(cx, |indicator, cx| indicator.hide(cx));
            cx.background_executor()
                .timer(Duration::from_millis(1500))
                .await;
            let _ = indicator.update(cx, |indicator, cx| indicator.hide(cx));
        })
        .detach();
    }

    fn show_frames(&mut self, cx: &mut Context<Self>) {
        let frames = self.frames_indicator.clone();
        frames.update(cx, |indicator, cx| indicator.show(cx));
        cx.spawn(async move |_this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(3000))
                .await;
            let _ = frames.update(cx, |indicator, cx| indicator.hide(cx));
        })
        .detach();
    }

    // ==================== Rows ====================

    fn render_section(&self, label: &'static str) -> impl IntoElement {
        div()
            .px_4()
            .py_2()
            .bg(rgb(0xf9fafb))
            .border_b_1()
            .border_color(PopkitColors::border())
            .text_size(px(Typography::TEXT_XS))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(PopkitColors::text_secondary())
            .child(label)
    }

    fn render_row(
        &self,
        id: &'static str,
        label: &'static str,
        action: impl Fn(&mut Self, &mut Window, &mut Context<Self>) + 'static,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .id(id)
            .w_full()
            .px_4()
            .py_3()
            .border_b_1()
            .border_color(PopkitColors::border())
            .text_size(px(Typography::TEXT_SM))
            .text_color(PopkitColors::text_primary())
            .cursor_pointer()
            .hover(|style| style.bg(rgb(0xf3f4f6)))
            .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                action(this, window, cx);
            }))
            .child(label)
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .relative()
            .bg(rgb(0xffffff))
            .flex()
            .flex_col()
            .child(
                div()
                    .px_4()
                    .py_3()
                    .bg(rgb(0x2cb3b8))
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(FontWeight::BOLD)
                    .text_color(PopkitColors::text_light())
                    .child("Popkit Gallery"),
            )
            .child(self.render_section("Popups"))
            .child(self.render_row("popup-fade", "Fade in / fade out", |this, _window, cx| {
                this.open_popup("Fade", |popup| popup.with_tag(1), cx);
            }, cx))
            .child(self.render_row(
                "popup-slide-v",
                "Slide up / slide down",
                |this, _window, cx| {
                    this.open_popup(
                        "Vertical slides",
                        |popup| {
                            popup
                                .with_tag(2)
                                .show_animation(PopupAnimation::SlideUp)
                                .hide_animation(PopupAnimation::SlideDown)
                        },
                        cx,
                    );
                },
                cx,
            ))
            .child(self.render_row(
                "popup-slide-h",
                "Slide left / slide right",
                |this, _window, cx| {
                    this.open_popup(
                        "Horizontal slides",
                        |popup| {
                            popup
                                .with_tag(3)
                                .show_animation(PopupAnimation::SlideLeft)
                                .hide_animation(PopupAnimation::SlideRight)
                        },
                        cx,
                    );
                },
                cx,
            ))
            .child(self.render_row(
                "popup-timed",
                "No outside dismiss, hides after 2.5 s",
                |this, _window, cx| this.open_timed_popup(cx),
                cx,
            ))
            .child(self.render_section("Toasts"))
            .child(self.render_row("toast-short", "Short toast", |this, _window, cx| {
                this.mount_toast(Toast::new("This is a toast message").with_tag(5), None, cx);
            }, cx))
            .child(self.render_row(
                "toast-success",
                "Success toast (styled by key)",
                |this, _window, cx| {
                    this.mount_toast(
                        Toast::new("Saved")
                            .style_key("success")
                            .time(ToastTime::Long)
                            .with_tag(6),
                        None,
                        cx,
                    );
                },
                cx,
            ))
            .child(self.render_row(
                "toast-delayed",
                "Delayed toast (1 s)",
                |this, _window, cx| {
                    this.mount_toast(
                        Toast::new("Sorry for the wait")
                            .delay(Duration::from_secs(1))
                            .with_tag(7),
                        None,
                        cx,
                    );
                },
                cx,
            ))
            .child(self.render_row(
                "toast-anchored",
                "Toast anchored at a point",
                |this, _window, cx| {
                    this.mount_toast(
                        Toast::new("Anchored at (210, 140)").with_tag(8),
                        Some(point(px(210.0), px(140.0))),
                        cx,
                    );
                },
                cx,
            ))
            .child(self.render_section("Indicator"))
            .child(self.render_row(
                "indicator-once",
                "Busy for 2 s",
                |this, _window, cx| this.busy_for(2000, cx),
                cx,
            ))
            .child(self.render_row(
                "indicator-nested",
                "Nested showers (1.5 s + 1.5 s)",
                |this, _window, cx| this.nested_busy(cx),
                cx,
            ))
            .child(self.render_row(
                "indicator-force",
                "Force hide",
                |_this, _window, cx| {
                    SharedIndicator::get(cx).update(cx, |indicator, cx| indicator.hide_forcibly(cx));
                },
                cx,
            ))
            .child(self.render_row(
                "indicator-frames",
                "Frame sequence, anchored bottom right (3 s)",
                |this, _window, cx| this.show_frames(cx),
                cx,
            ))
            .children(self.popup.as_ref().map(|(popup, _)| popup.clone()))
            .children(self.toasts.iter().map(|(toast, _)| toast.clone()))
            .child(self.frames_indicator.clone())
            .child(self.indicator.clone())
    }
}

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Popkit Gallery...");

    Application::new().with_assets(Assets).run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if let Err(error) = ToastStyles::load_sheet(STYLE_SHEET, cx) {
            tracing::error!(%error, "failed to load bundled style sheet");
        }

        let bounds = Bounds::centered(None, size(px(420.0), px(720.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Popkit Gallery")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| cx.new(Gallery::new))
            .expect("failed to open gallery window");

        cx.activate(true);
    });
}
