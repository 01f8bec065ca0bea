use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CONSULTATION_POPUP_DELAY_MS, CONTACT_BUTTON_REVEAL_MS};
use crate::cta::sequence::{PopupEvent, PopupPhase, PopupSequence};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ConsultationPopupProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ConsultationPopup)]
pub fn consultation_popup(props: &ConsultationPopupProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="consult-popup">
            <div class="consult-popup-card">
                <button class="consult-popup-close" aria-label="Close" onclick={close.clone()}>
                    {"✕"}
                </button>
                <h2 class="consult-popup-title">
                    {"Talk to an "}<span class="accent">{"Expert"}</span>
                </h2>
                <div class="consult-popup-body">
                    <div class="consult-popup-image">
                        <img src="/assets/consultation.jpg" alt="Ayurvedic Doctor" />
                    </div>
                    <div class="consult-popup-offer">
                        <p class="accent strong">{"15 minutes consultation"}</p>
                        <p class="serif">{"with Ayurvedic doctor"}</p>
                        <p class="accent strong">{"for Free"}</p>
                        <div onclick={close}>
                            <Link<Route> to={Route::Consultation} classes="consult-popup-link">
                                {"Click here"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .consult-popup {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 50;
                    width: 380px;
                    max-width: calc(100vw - 2rem);
                }
                .consult-popup-card {
                    position: relative;
                    background: #F5F1E8;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .consult-popup-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    z-index: 10;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.8);
                    color: #181818;
                    padding: 0.25rem 0.5rem;
                    cursor: pointer;
                }
                .consult-popup-title {
                    padding: 1rem 1rem 0.5rem;
                    margin: 0;
                    font-family: serif;
                    font-size: 1.5rem;
                    color: #181818;
                }
                .consult-popup .accent {
                    color: #5E17EB;
                }
                .consult-popup .strong {
                    font-weight: 600;
                }
                .consult-popup .serif {
                    font-family: serif;
                    font-size: 0.875rem;
                }
                .consult-popup-body {
                    position: relative;
                    padding: 0 1rem 1rem;
                }
                .consult-popup-image {
                    height: 14rem;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    background: #e5e7eb;
                }
                .consult-popup-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .consult-popup-offer {
                    position: absolute;
                    bottom: 1.75rem;
                    right: 1.75rem;
                    max-width: 220px;
                    background: white;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .consult-popup-offer p {
                    margin: 0 0 0.125rem;
                    line-height: 1.2;
                }
                .consult-popup-link {
                    display: block;
                    margin-top: 0.75rem;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    background: #5E17EB;
                    color: white;
                    font-family: Poppins, sans-serif;
                    font-weight: 600;
                    font-size: 0.875rem;
                    text-align: center;
                    text-decoration: none;
                }
                .consult-popup-link:hover {
                    background: #4B12BD;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactButtonProps {
    pub on_open: Callback<()>,
}

#[function_component(ContactButton)]
pub fn contact_button(props: &ContactButtonProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <button class="contact-fab" aria-label="Open contact form" {onclick}>
            <span class="contact-fab-icon">{"💬"}</span>
            <span class="contact-fab-label">{"Contact"}</span>
            <style>
                {r#"
                .contact-fab {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 9999px;
                    background: #5E17EB;
                    color: white;
                    font-family: Poppins, sans-serif;
                    font-weight: 500;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .contact-fab:hover {
                    background: #4B12BD;
                }
                @media (max-width: 640px) {
                    .contact-fab {
                        bottom: 1rem;
                        right: 1rem;
                        padding: 0.75rem;
                    }
                    .contact-fab-label {
                        display: none;
                    }
                }
                "#}
            </style>
        </button>
    }
}

/// Runs the popup sequence: auto-opens the consultation popup once, then
/// swaps it for the contact button after it has been closed.
#[function_component(ConsultationPrompts)]
pub fn consultation_prompts() -> Html {
    let sequence = use_reducer(PopupSequence::default);
    let phase = sequence.phase;

    {
        let sequence = sequence.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(CONSULTATION_POPUP_DELAY_MS, move || {
                    sequence.dispatch(PopupEvent::AutoOpenElapsed);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let sequence = sequence.clone();
        use_effect_with_deps(
            move |phase| {
                let timeout = (*phase == PopupPhase::Dismissed).then(|| {
                    Timeout::new(CONTACT_BUTTON_REVEAL_MS, move || {
                        sequence.dispatch(PopupEvent::ContactRevealElapsed);
                    })
                });
                move || drop(timeout)
            },
            phase,
        );
    }

    let on_close = {
        let sequence = sequence.clone();
        Callback::from(move |_: ()| sequence.dispatch(PopupEvent::Close))
    };
    let on_open = {
        let sequence = sequence.clone();
        Callback::from(move |_: ()| sequence.dispatch(PopupEvent::OpenFromContact))
    };

    html! {
        <>
            <ConsultationPopup is_open={phase.popup_open()} {on_close} />
            {
                if phase.contact_button_visible() {
                    html! { <ContactButton {on_open} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
