//! Converging call-to-action geometry.
//!
//! Two buttons start pinned to the left and right edges of the viewport and
//! slide toward the centre as the page scrolls or as the auto-convergence
//! clock advances, whichever has travelled further. Once they are close
//! enough they count as connected, and once connected and scrolled past the
//! dock threshold they render as one bar at the bottom of the viewport.
//!
//! Everything here is a pure function of [`CtaInputs`] and [`CtaConfig`].

use crate::config::CtaConfig;

/// Rendered widths of the two buttons, in CSS pixels. Zero until measured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButtonWidths {
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CtaInputs {
    pub scroll_y: f64,
    pub window_width: f64,
    pub buttons_visible: bool,
    pub animation_started: bool,
    pub auto_progress: f64,
    pub widths: ButtonWidths,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CtaPosition {
    pub max_translate: f64,
    pub final_translate: f64,
    pub left_offset: f64,
    pub right_offset: f64,
    pub connection_progress: f64,
    pub is_connected: bool,
    pub is_docked: bool,
}

impl CtaPosition {
    /// Horizontal translation for the left button. Snaps to the meeting
    /// point while connected.
    pub fn left_transform(&self) -> f64 {
        if self.is_connected {
            self.max_translate
        } else {
            self.left_offset
        }
    }

    pub fn right_transform(&self) -> f64 {
        if self.is_connected {
            -self.max_translate
        } else {
            self.right_offset
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

/// Distance each button travels from its edge to the touching position.
/// Never negative: narrow viewports clamp to zero instead of reversing.
pub fn max_translate(window_width: f64, widths: ButtonWidths, gap: f64) -> f64 {
    let half_width = non_negative(window_width) / 2.0;
    let half_buttons = (non_negative(widths.left) + non_negative(widths.right)) / 2.0;
    (half_width - half_buttons - non_negative(gap)).max(0.0)
}

/// Ramp from 0 at `threshold` to 1 at `complete`. A zero-width ramp is a step.
pub fn connection_progress(final_translate: f64, threshold: f64, complete: f64) -> f64 {
    if final_translate < threshold {
        return 0.0;
    }
    let span = complete - threshold;
    if span <= f64::EPSILON {
        return 1.0;
    }
    ((final_translate - threshold) / span).clamp(0.0, 1.0)
}

impl CtaConfig {
    pub fn is_mobile(&self, window_width: f64) -> bool {
        non_negative(window_width) < self.mobile_breakpoint
    }

    pub fn derive(&self, inputs: &CtaInputs) -> CtaPosition {
        let scroll_y = finite_or_zero(inputs.scroll_y);
        let widths = ButtonWidths {
            left: non_negative(inputs.widths.left),
            right: non_negative(inputs.widths.right),
        };
        let max = max_translate(inputs.window_width, widths, self.gap);

        let final_translate = if inputs.animation_started {
            let scroll_translate = (scroll_y.max(0.0) * self.scroll_sensitivity).min(max);
            let auto_translate = non_negative(inputs.auto_progress).min(1.0) * max;
            scroll_translate.max(auto_translate)
        } else {
            0.0
        };

        let (left_offset, right_offset) = if inputs.buttons_visible {
            (final_translate, -final_translate)
        } else {
            (-widths.left, widths.right)
        };

        // Nothing to travel means nothing to connect.
        if max <= 0.0 {
            return CtaPosition {
                max_translate: 0.0,
                final_translate: 0.0,
                left_offset: if inputs.buttons_visible { 0.0 } else { left_offset },
                right_offset: if inputs.buttons_visible { 0.0 } else { right_offset },
                ..CtaPosition::default()
            };
        }

        let progress = connection_progress(
            final_translate,
            max * self.connection_threshold,
            max * self.connection_complete,
        );
        // Buttons still waiting off-screen take no part in connecting or docking.
        let is_connected = inputs.buttons_visible
            && !self.is_mobile(inputs.window_width)
            && progress >= self.connected_at;
        let is_docked = is_connected && scroll_y > self.dock_scroll_threshold;

        CtaPosition {
            max_translate: max,
            final_translate,
            left_offset,
            right_offset,
            connection_progress: progress,
            is_connected,
            is_docked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn desktop(scroll_y: f64, auto_progress: f64) -> CtaInputs {
        CtaInputs {
            scroll_y,
            window_width: 1280.0,
            buttons_visible: true,
            animation_started: true,
            auto_progress,
            widths: ButtonWidths {
                left: 220.0,
                right: 260.0,
            },
        }
    }

    #[test]
    fn desktop_scroll_scenario() {
        let position = CtaConfig::default().derive(&desktop(500.0, 0.0));
        assert_eq!(position.max_translate, 400.0);
        assert_eq!(position.final_translate, 300.0);
        assert_eq!(position.left_offset, 300.0);
        assert_eq!(position.right_offset, -300.0);
        assert!((position.connection_progress - 0.75).abs() < 1e-9);
        assert!(position.is_connected);
        assert!(position.is_docked);
    }

    #[test]
    fn mobile_never_connects() {
        let inputs = CtaInputs {
            window_width: 500.0,
            widths: ButtonWidths {
                left: 100.0,
                right: 100.0,
            },
            ..desktop(10_000.0, 1.0)
        };
        let position = CtaConfig::default().derive(&inputs);
        assert_eq!(position.connection_progress, 1.0);
        assert!(!position.is_connected);
        assert!(!position.is_docked);
    }

    #[test]
    fn nothing_moves_before_clock_starts() {
        let inputs = CtaInputs {
            animation_started: false,
            ..desktop(800.0, 1.0)
        };
        let position = CtaConfig::default().derive(&inputs);
        assert_eq!(position.final_translate, 0.0);
        assert_eq!(position.connection_progress, 0.0);
        assert!(!position.is_connected);
    }

    #[test]
    fn timer_converges_without_scrolling() {
        let config = CtaConfig::default();
        assert_eq!(config.derive(&desktop(0.0, 0.0)).final_translate, 0.0);

        let done = config.derive(&desktop(0.0, 1.0));
        assert_eq!(done.final_translate, done.max_translate);
        assert!(done.is_connected);
        // Connected at the top of the page, but not docked until scrolled.
        assert!(!done.is_docked);
    }

    #[test]
    fn hidden_buttons_never_connect_or_dock() {
        let inputs = CtaInputs {
            buttons_visible: false,
            ..desktop(500.0, 0.0)
        };
        let position = CtaConfig::default().derive(&inputs);
        assert!(!position.is_connected);
        assert!(!position.is_docked);
        assert_eq!(position.left_transform(), -220.0);
        assert_eq!(position.right_transform(), 260.0);
    }

    #[test]
    fn hidden_buttons_sit_off_screen() {
        let inputs = CtaInputs {
            buttons_visible: false,
            ..desktop(500.0, 0.0)
        };
        let position = CtaConfig::default().derive(&inputs);
        assert_eq!(position.left_offset, -220.0);
        assert_eq!(position.right_offset, 260.0);
    }

    #[test]
    fn unmeasured_widths_stay_finite() {
        let inputs = CtaInputs {
            widths: ButtonWidths::default(),
            ..desktop(100.0, 0.0)
        };
        let position = CtaConfig::default().derive(&inputs);
        assert_eq!(position.max_translate, 640.0);
        assert!(position.connection_progress.is_finite());
    }

    #[test]
    fn narrow_viewport_is_inert() {
        let inputs = CtaInputs {
            window_width: 300.0,
            ..desktop(5_000.0, 1.0)
        };
        let position = CtaConfig::default().derive(&inputs);
        assert_eq!(position.max_translate, 0.0);
        assert_eq!(position.left_offset, 0.0);
        assert_eq!(position.right_offset, 0.0);
        assert_eq!(position.connection_progress, 0.0);
        assert!(!position.is_connected);
    }

    #[test]
    fn degenerate_threshold_pair_is_a_step() {
        let config = CtaConfig {
            connection_threshold: 0.8,
            connection_complete: 0.8,
            ..CtaConfig::default()
        };
        let below = config.derive(&desktop(500.0, 0.0));
        assert_eq!(below.connection_progress, 0.0);
        let at = config.derive(&desktop(0.0, 0.8));
        assert_eq!(at.connection_progress, 1.0);
    }

    #[test]
    fn connected_buttons_snap_to_meeting_point() {
        let position = CtaConfig::default().derive(&desktop(500.0, 0.0));
        assert_eq!(position.left_transform(), 400.0);
        assert_eq!(position.right_transform(), -400.0);

        let apart = CtaConfig::default().derive(&desktop(100.0, 0.0));
        assert_eq!(apart.left_transform(), 60.0);
        assert_eq!(apart.right_transform(), -60.0);
    }

    #[test]
    fn nan_inputs_fall_back_to_rest() {
        let inputs = CtaInputs {
            scroll_y: f64::NAN,
            auto_progress: f64::INFINITY,
            ..desktop(0.0, 0.0)
        };
        let position = CtaConfig::default().derive(&inputs);
        assert_eq!(position.final_translate, 0.0);
        assert!(!position.is_connected);
    }

    #[test]
    fn remeasuring_same_widths_is_stable() {
        let widths = ButtonWidths {
            left: 220.0,
            right: 260.0,
        };
        let first = max_translate(1280.0, widths, 0.0);
        for _ in 0..3 {
            assert_eq!(max_translate(1280.0, widths, 0.0), first);
        }
    }

    proptest! {
        #[test]
        fn left_offset_is_bounded_and_monotone(
            scroll_a in 0.0f64..5_000.0,
            scroll_b in 0.0f64..5_000.0,
            width in 0.0f64..3_000.0,
        ) {
            let config = CtaConfig::default();
            let (low, high) = if scroll_a <= scroll_b { (scroll_a, scroll_b) } else { (scroll_b, scroll_a) };
            let inputs = |scroll_y| CtaInputs { scroll_y, window_width: width, ..desktop(0.0, 0.0) };
            let a = config.derive(&inputs(low));
            let b = config.derive(&inputs(high));
            prop_assert!(a.left_offset >= 0.0 && a.left_offset <= a.max_translate);
            prop_assert!(b.left_offset >= 0.0 && b.left_offset <= b.max_translate);
            prop_assert!(a.left_offset <= b.left_offset);
        }

        #[test]
        fn final_translate_is_max_of_scroll_and_time(
            scroll_y in 0.0f64..2_000.0,
            auto in 0.0f64..=1.0,
        ) {
            let config = CtaConfig::default();
            let position = config.derive(&desktop(scroll_y, auto));
            let scroll_translate = (scroll_y * config.scroll_sensitivity).min(position.max_translate);
            let auto_translate = auto * position.max_translate;
            prop_assert_eq!(position.final_translate, scroll_translate.max(auto_translate));
        }

        #[test]
        fn mobile_widths_never_connect(
            width in 0.0f64..640.0,
            scroll_y in 0.0f64..5_000.0,
            auto in 0.0f64..=1.0,
        ) {
            let inputs = CtaInputs { window_width: width, ..desktop(scroll_y, auto) };
            let position = CtaConfig::default().derive(&inputs);
            prop_assert!(!position.is_connected);
            prop_assert!(!position.is_docked);
        }

        #[test]
        fn progress_is_zero_below_and_one_past_complete(
            scroll_y in 0.0f64..2_000.0,
            auto in 0.0f64..=1.0,
        ) {
            let config = CtaConfig::default();
            let position = config.derive(&desktop(scroll_y, auto));
            let threshold = position.max_translate * config.connection_threshold;
            let complete = position.max_translate * config.connection_complete;
            if position.final_translate < threshold {
                prop_assert_eq!(position.connection_progress, 0.0);
            }
            if position.final_translate >= complete {
                prop_assert_eq!(position.connection_progress, 1.0);
            }
        }

        #[test]
        fn hidden_buttons_stay_off_screen(
            scroll_y in 0.0f64..5_000.0,
            auto in 0.0f64..=1.0,
        ) {
            let inputs = CtaInputs { buttons_visible: false, ..desktop(scroll_y, auto) };
            let position = CtaConfig::default().derive(&inputs);
            prop_assert!(!position.is_connected);
            prop_assert!(!position.is_docked);
            prop_assert_eq!(position.left_transform(), -220.0);
            prop_assert_eq!(position.right_transform(), 260.0);
        }

        #[test]
        fn never_docked_unless_connected(
            width in 0.0f64..3_000.0,
            scroll_y in -200.0f64..5_000.0,
            auto in 0.0f64..=1.0,
        ) {
            let inputs = CtaInputs { window_width: width, ..desktop(scroll_y, auto) };
            let position = CtaConfig::default().derive(&inputs);
            prop_assert!(position.is_connected || !position.is_docked);
        }
    }
}
