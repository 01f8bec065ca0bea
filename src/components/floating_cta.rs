use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CtaConfig, ANIMATION_START_DELAY_MS, CTA_BUTTONS_DELAY_MS};
use crate::cta::clock::AutoConvergence;
use crate::cta::controller::{ButtonWidths, CtaInputs};
use crate::hooks::{
    use_auto_convergence, use_delayed_flag, use_element_width, use_scroll_y, use_viewport,
};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    #[prop_or_default]
    pub config: Option<CtaConfig>,
    #[prop_or_default]
    pub clock: Option<AutoConvergence>,
}

/// The "call an expert" / "is Ayurveda for me?" pair that slides in from
/// the screen edges, meets in the middle and docks at the bottom.
#[function_component(FloatingCtaButtons)]
pub fn floating_cta_buttons(props: &FloatingCtaProps) -> Html {
    // Validated once per config change, not on every scroll-driven render.
    let config = *use_memo(|config| CtaConfig::resolve(*config), props.config);
    let clock = props.clock.unwrap_or_default();

    let left_ref = use_node_ref();
    let right_ref = use_node_ref();

    let scroll_y = use_scroll_y();
    let (window_width, _) = use_viewport();
    let buttons_visible = use_delayed_flag(CTA_BUTTONS_DELAY_MS);
    let animation_started = use_delayed_flag(ANIMATION_START_DELAY_MS);
    let auto_progress = use_auto_convergence(buttons_visible, clock);
    let left_width = use_element_width(left_ref.clone());
    let right_width = use_element_width(right_ref.clone());

    let position = config.derive(&CtaInputs {
        scroll_y,
        window_width,
        buttons_visible,
        animation_started,
        auto_progress,
        widths: ButtonWidths {
            left: left_width,
            right: right_width,
        },
    });

    let opacity = if buttons_visible { 1 } else { 0 };
    let (left_shape, right_shape) = if position.is_connected {
        ("joined-left", "joined-right")
    } else {
        ("rounded", "rounded")
    };
    // The floating pair stays mounted while docked so its widths keep being observed.
    let parked = position.is_docked.then(|| "parked");

    html! {
        <div class="cta-layer">
            <div
                ref={left_ref}
                class={classes!("cta-floating", "cta-left", parked)}
                style={format!(
                    "transform: translateX({}px); opacity: {};",
                    position.left_transform(),
                    opacity
                )}
            >
                <Link<Route> to={Route::Consultation} classes={classes!("cta-button", "cta-expert", left_shape)}>
                    {"CALL AN EXPERT"}
                </Link<Route>>
            </div>
            <div
                ref={right_ref}
                class={classes!("cta-floating", "cta-right", parked)}
                style={format!(
                    "transform: translateX({}px); opacity: {};",
                    position.right_transform(),
                    opacity
                )}
            >
                <Link<Route> to={Route::Questionnaire} classes={classes!("cta-button", "cta-fit", right_shape)}>
                    {"IS AYURVEDA FOR ME?"}
                </Link<Route>>
            </div>
            {
                if position.is_docked {
                    html! {
                        <div class="cta-docked" style={format!("opacity: {};", opacity)}>
                            <Link<Route> to={Route::Consultation} classes="cta-button cta-expert joined-left">
                                {"CALL AN EXPERT"}
                            </Link<Route>>
                            <Link<Route> to={Route::Questionnaire} classes="cta-button cta-fit joined-right">
                                {"IS AYURVEDA FOR ME?"}
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>{CTA_CSS}</style>
        </div>
    }
}

const CTA_CSS: &str = r#"
.cta-layer {
    position: fixed;
    left: 0;
    right: 0;
    z-index: 50;
    pointer-events: none;
}
.cta-floating {
    position: fixed;
    top: 80vh;
    transition: transform 5s ease, opacity 0.4s ease;
}
.cta-floating.parked {
    visibility: hidden;
}
.cta-floating.parked .cta-button {
    pointer-events: none;
}
.cta-left {
    left: 0;
}
.cta-right {
    right: 0;
}
.cta-docked {
    position: fixed;
    left: 50%;
    bottom: 2rem;
    display: flex;
    align-items: center;
    transform: translateX(-50%);
    transition: opacity 0.4s ease, bottom 0.4s ease;
}
.cta-button {
    display: inline-block;
    pointer-events: auto;
    padding: 1.5rem 3rem;
    color: white;
    font-size: 1.25rem;
    font-weight: 500;
    text-decoration: none;
    white-space: nowrap;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
    transition: background 0.2s ease, color 0.2s ease;
}
.cta-expert {
    background: #fdbb3a;
}
.cta-expert:hover {
    background: #eab308;
    color: black;
}
.cta-fit {
    background: #5E17EB;
}
.cta-fit:hover {
    background: #3b82f6;
    color: black;
}
.cta-button.rounded {
    border-radius: 1.5rem;
}
.cta-button.joined-left {
    border-radius: 1.5rem 0 0 1.5rem;
    border-right: 1px solid rgba(255, 255, 255, 0.5);
}
.cta-button.joined-right {
    border-radius: 0 1.5rem 1.5rem 0;
}
@media (max-width: 640px) {
    .cta-button {
        padding: 1rem 2rem;
        font-size: 1.125rem;
    }
}
"#;
