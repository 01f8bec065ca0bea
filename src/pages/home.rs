use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::floating_cta::FloatingCtaButtons;
use crate::components::popups::ConsultationPrompts;
use crate::config::HERO_BLUR_FRACTION;
use crate::hooks::{use_scroll_to_top, use_scroll_y, use_viewport};
use crate::Route;

/// The hero blurs for good once the video has ended, otherwise while the
/// page is scrolled past a fraction of the viewport height.
pub fn hero_blurred(scroll_y: f64, viewport_height: f64, video_ended: bool) -> bool {
    video_ended || scroll_y > viewport_height * HERO_BLUR_FRACTION
}

struct Pillar {
    title: &'static str,
    text: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        title: "MEDICAL-FIRST APPROACH",
        text: "Every retreat starts with a consultation with an Ayurvedic doctor and a programme built on diagnosis, not trends.",
    },
    Pillar {
        title: "PERSONALISATION",
        text: "Treatments, diet and daily rhythm are adjusted to your constitution and to how your body responds during the stay.",
    },
    Pillar {
        title: "VERIFIED CLINICS & THERAPISTS",
        text: "We only work with resorts and clinics we have visited ourselves and whose doctors we know personally.",
    },
    Pillar {
        title: "END-TO-END CARE",
        text: "From choosing the place to aftercare at home, one team accompanies you through the whole journey.",
    },
    Pillar {
        title: "HIGH SUCCESS RATE",
        text: "Most of our guests return home with measurable results and come back to deepen them.",
    },
];

struct Programme {
    title: &'static str,
    summary: &'static str,
    image: &'static str,
}

const PROGRAMMES: &[Programme] = &[
    Programme {
        title: "Ayurvedic Healing Retreat (Signature)",
        summary: "A comprehensive therapeutic program for regeneration, detoxification, and restoring balance in both body and mind.",
        image: "/assets/meds.png",
    },
    Programme {
        title: "Panchakarma Cleanse",
        summary: "The classical five-step Ayurvedic detox, guided by doctors, to clear accumulated toxins at their root.",
        image: "/assets/panchakarma.jpg",
    },
    Programme {
        title: "Stress & Burnout Recovery",
        summary: "Calming therapies, meditation and rest to rebuild energy and quiet an overloaded nervous system.",
        image: "/assets/stress.jpg",
    },
    Programme {
        title: "Digestive & Gut Health Programme",
        summary: "Diet, herbs and treatments focused on restoring agni, the digestive fire at the centre of Ayurvedic health.",
        image: "/assets/digestion.jpg",
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "As a medical doctor, I doubted Ayurveda for years, until I experienced it myself. My retreat in Sri Lanka was one of the best decisions of my life. It brought me peace, strength, and a completely new perspective on health.",
        author: "Mudr. Katarina R.",
    },
    Testimonial {
        quote: "My Ayurvedic retreat in Sri Lanka felt like paradise on earth. The surroundings were beautiful, the food wonderful, and the therapies fantastic. I regenerated my whole body and experienced a level of care you rarely find.",
        author: "Mudr. Katarina R.",
    },
    Testimonial {
        quote: "Ayurveda has truly reset my life. In 40 days I lost more than 20 kg, stabilised my blood pressure, and overcame post-COVID difficulties. I felt safe, cared for by real experts, and experienced a sense of peace I hadn't known for years.",
        author: "Branislav R.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let scroll_y = use_scroll_y();
    let (_, viewport_height) = use_viewport();
    let video_ended = use_state(|| false);

    let on_video_ended = {
        let video_ended = video_ended.clone();
        Callback::from(move |_: Event| {
            log::debug!("hero video ended");
            video_ended.set(true);
        })
    };

    let blurred = hero_blurred(scroll_y, viewport_height, *video_ended);

    html! {
        <div class="home-page">
            <div class="hero-video">
                <video autoplay=true loop=true muted=true playsinline=true preload="auto" onended={on_video_ended}>
                    <source src="/assets/landing.mp4" type="video/mp4" />
                </video>
            </div>
            <div class="hero-dim"></div>
            <div class={classes!("hero-blur", blurred.then(|| "on"))}></div>

            <div class="home-content">
                <header class="hero">
                    <div class="hero-text">
                        <h1 class="hero-title">{"WE DON'T TREAT,"}</h1>
                        <h1 class="hero-title italic">{"WE HEAL."}</h1>
                    </div>
                    <div class="hero-links fade-up">
                        <Link<Route> to={Route::Consultation} classes="hero-pill">
                            {"CALL AN EXPERT"}
                        </Link<Route>>
                        <Link<Route> to={Route::Questionnaire} classes="hero-pill">
                            {"IS AYURVEDA FOR ME?"}
                        </Link<Route>>
                    </div>
                    <p class="hero-subtitle">
                        {"Ayurvedic healing retreats blending ancient wisdom, expert care, and modern serenity."}
                    </p>
                </header>

                <section class="intro">
                    <p>
                        {"Tucked away in the heart of nature, RAYA Longlife honors Ayurvedic wisdom by pairing each guest with a holistic retreat, authentic spiritual care and wellbeing through transformative healing experiences."}
                    </p>
                </section>

                <section class="pillars">
                    <div class="pillars-image">
                        <img src="/assets/home1.jpg" alt="Ayurvedic treatment room" loading="lazy" />
                        <div class="pillars-box">
                            { for PILLARS.iter().map(|pillar| html! {
                                <div class="pillar">
                                    <h3>{pillar.title}</h3>
                                    <p>{pillar.text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="programmes">
                    <div class="section-head">
                        <h1>{"RAYA WELLBEING"}</h1>
                        <h2 class="italic accent">{"Retreats"}</h2>
                    </div>
                    <div class="programme-grid">
                        { for PROGRAMMES.iter().enumerate().map(|(i, programme)| html! {
                            <div class={classes!("programme", (i % 2 == 1).then(|| "offset"))}>
                                <img src={programme.image} alt={programme.title} loading="lazy" />
                                <h3 class="italic">{programme.title}</h3>
                                <p>{programme.summary}</p>
                                <Link<Route> to={Route::Treatments} classes="programme-link">
                                    {"VIEW RETREAT →"}
                                </Link<Route>>
                            </div>
                        }) }
                    </div>
                    <div class="programme-all">
                        <Link<Route> to={Route::Treatments} classes="outline-button">
                            {"DISCOVER ALL RETREATS"}
                        </Link<Route>>
                        <Link<Route> to={Route::Destinations} classes="outline-button">
                            {"EXPLORE DESTINATIONS"}
                        </Link<Route>>
                    </div>
                </section>

                <section class="testimonials">
                    <div class="section-head">
                        <h2 class="eyebrow">{"WHAT OUR CLIENTS SHARE"}</h2>
                        <h3>{"Stories of healing"}</h3>
                    </div>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <div class="testimonial">
                                <div class="stars">{"★★★★★"}</div>
                                <p>{testimonial.quote}</p>
                                <p class="author">{testimonial.author}</p>
                            </div>
                        }) }
                    </div>
                </section>
            </div>

            <FloatingCtaButtons />
            <ConsultationPrompts />

            <style>
                {r#"
                .home-page {
                    position: relative;
                    overflow-x: hidden;
                    background: #FFFBF7;
                    color: #181818;
                }
                .hero-video,
                .hero-dim,
                .hero-blur {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    overflow: hidden;
                }
                .hero-video video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: center top;
                }
                .hero-dim {
                    background: rgba(0, 0, 0, 0.1);
                    z-index: 5;
                }
                .hero-blur {
                    z-index: 10;
                    pointer-events: none;
                    opacity: 0;
                    backdrop-filter: blur(10px);
                    -webkit-backdrop-filter: blur(10px);
                    background: rgba(0, 0, 0, 0.5);
                    transition: opacity 2s ease-in-out;
                }
                .hero-blur.on {
                    opacity: 1;
                }
                .home-content {
                    position: relative;
                    z-index: 20;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 0 1rem;
                    gap: 1.5rem;
                    color: white;
                }
                .hero-title {
                    margin: 0;
                    font-family: Sentient, serif;
                    font-weight: 300;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    line-height: 1.2;
                }
                .italic {
                    font-style: italic;
                }
                .accent {
                    color: #5E17EB;
                }
                .hero-links {
                    display: flex;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .hero-pill {
                    padding: 0.5rem 1rem;
                    border: 1px solid white;
                    border-radius: 9999px;
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    white-space: nowrap;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .hero-pill:hover {
                    background: white;
                    color: black;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    font-family: Poppins, sans-serif;
                    font-size: 1.125rem;
                }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .fade-up {
                    opacity: 0;
                    animation: fadeUp 1s ease-out forwards;
                    animation-delay: 3s;
                }
                .intro {
                    padding: 3rem 2rem;
                    background: #FFFBF7;
                }
                .intro p {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                    font-family: Poppins, sans-serif;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .pillars {
                    padding: 5rem 2rem;
                    background: #F4F4F4;
                }
                .pillars-image {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    height: 600px;
                }
                .pillars-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }
                .pillars-box {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    bottom: 1rem;
                    width: 450px;
                    padding: 2rem;
                    background: #E3E3E3;
                    border-radius: 0.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 1.25rem;
                }
                .pillar h3 {
                    margin: 0 0 0.25rem;
                    color: #5E17EB;
                    font-family: Lato, sans-serif;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                }
                .pillar p {
                    margin: 0;
                    font-family: Poppins, sans-serif;
                    font-size: 0.875rem;
                }
                .programmes,
                .testimonials {
                    padding: 5rem 2rem;
                    background: white;
                }
                .section-head {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-head h1 {
                    margin: 0 0 0.5rem;
                    font-family: Sentient, serif;
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                }
                .section-head h2,
                .section-head h3 {
                    margin: 0;
                    font-family: Sentient, serif;
                    font-weight: 400;
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                }
                .section-head .eyebrow {
                    color: #5E17EB;
                    font-family: Lato, sans-serif;
                    font-size: 16px;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }
                .programme-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .programme.offset {
                    margin-top: 60px;
                }
                .programme img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }
                .programme h3 {
                    font-family: Sentient, serif;
                    font-size: 1.5rem;
                    font-weight: 400;
                }
                .programme p {
                    font-family: Poppins, sans-serif;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .programme-link {
                    color: #5E17EB;
                    font-family: Lato, sans-serif;
                    font-size: 14px;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                .programme-link:hover {
                    text-decoration: underline;
                }
                .programme-all {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 4rem;
                }
                .outline-button {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    border: 1px solid #181818;
                    color: #181818;
                    font-family: Lato, sans-serif;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                .outline-button:hover {
                    background: #181818;
                    color: white;
                }
                .testimonial-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .testimonial {
                    background: #F4F4F4;
                    padding: 2rem;
                    border-radius: 0.5rem;
                    font-family: Lato, sans-serif;
                }
                .testimonial .stars {
                    color: #5E17EB;
                    letter-spacing: 0.2em;
                    margin-bottom: 1rem;
                }
                .testimonial p {
                    line-height: 1.7;
                }
                .testimonial .author {
                    font-weight: 500;
                }
                @media (max-width: 1024px) {
                    .programme-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .programme.offset {
                        margin-top: 0;
                    }
                }
                @media (max-width: 768px) {
                    .testimonial-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .programme-grid {
                        grid-template-columns: 1fr;
                    }
                    .pillars-image {
                        height: auto;
                    }
                    .pillars-box {
                        position: static;
                        width: auto;
                        margin-top: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blurs_past_hero_fraction() {
        assert!(!hero_blurred(0.0, 1000.0, false));
        assert!(!hero_blurred(600.0, 1000.0, false));
        assert!(hero_blurred(601.0, 1000.0, false));
    }

    #[test]
    fn stays_blurred_after_video_ends() {
        assert!(hero_blurred(0.0, 1000.0, true));
    }
}
