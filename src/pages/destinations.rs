use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_scroll_to_top;
use crate::Route;

pub struct Destination {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub highlights: &'static [&'static str],
}

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        name: "Sri Lanka",
        description: "Tropical paradise with ancient Ayurvedic traditions",
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=800&q=80",
        highlights: &["Beach resorts", "Traditional practices", "Herbal gardens"],
    },
    Destination {
        name: "India",
        description: "Birthplace of Ayurveda with authentic experiences",
        image: "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?auto=format&fit=crop&w=800&q=80",
        highlights: &["Kerala backwaters", "Himalayan retreats", "Authentic treatments"],
    },
    Destination {
        name: "Thailand",
        description: "Blend of Ayurveda with Thai wellness traditions",
        image: "https://images.unsplash.com/photo-1552465011-b4e21bf6e79a?auto=format&fit=crop&w=800&q=80",
        highlights: &["Luxury resorts", "Spa experiences", "Modern facilities"],
    },
    Destination {
        name: "Europe",
        description: "Contemporary Ayurveda in scenic European settings",
        image: "https://images.unsplash.com/photo-1533104816931-20fa691ff6ca?auto=format&fit=crop&w=800&q=80",
        highlights: &["Alpine wellness", "Organic cuisine", "European comfort"],
    },
];

#[function_component(Destinations)]
pub fn destinations() -> Html {
    use_scroll_to_top();

    html! {
        <div class="destinations-page">
            <section class="destinations-hero">
                <img src="/assets/home1.jpg" alt="Destinations" />
                <div class="shade"></div>
                <div class="text">
                    <h1>{"Where you'll heal"}</h1>
                    <p>{"Curated Ayurvedic sanctuaries across the world. Medical-first, serene and deeply restorative."}</p>
                </div>
            </section>

            <section class="destinations-list">
                <div class="head">
                    <p class="eyebrow">{"Our destinations"}</p>
                    <h2>{"Crafted for healing"}</h2>
                </div>
                <div class="destination-grid">
                    { for DESTINATIONS.iter().map(|dest| html! {
                        <div class="destination">
                            <div class="destination-image">
                                <img src={dest.image} alt={dest.name} loading="lazy" />
                                <div class="destination-title">
                                    <h3>{dest.name}</h3>
                                    <span>{"Medical-first"}</span>
                                </div>
                            </div>
                            <div class="destination-body">
                                <p>{dest.description}</p>
                                <h4>{"Highlights"}</h4>
                                <ul>
                                    { for dest.highlights.iter().map(|highlight| html! {
                                        <li>{*highlight}</li>
                                    }) }
                                </ul>
                                <Link<Route> to={Route::Treatments} classes="explore">
                                    {format!("Explore {}", dest.name)}
                                </Link<Route>>
                            </div>
                        </div>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .destinations-page {
                    min-height: 100vh;
                    background: #FFFBF7;
                    color: #181818;
                }
                .destinations-hero {
                    position: relative;
                    overflow: hidden;
                }
                .destinations-hero img {
                    width: 100%;
                    height: 520px;
                    object-fit: cover;
                    display: block;
                }
                .destinations-hero .shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.2), transparent);
                }
                .destinations-hero .text {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1.5rem;
                    text-align: center;
                    color: white;
                }
                .destinations-hero h1 {
                    margin: 0;
                    font-family: Sentient, serif;
                    font-style: italic;
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                }
                .destinations-hero p {
                    max-width: 42rem;
                    font-family: Poppins, sans-serif;
                    font-size: 1.125rem;
                    opacity: 0.9;
                }
                .destinations-list {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .destinations-list .head {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .destinations-list .eyebrow {
                    color: #5E17EB;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-family: Lato, sans-serif;
                    font-weight: 600;
                }
                .destinations-list h2 {
                    margin: 0;
                    font-family: Sentient, serif;
                    font-style: italic;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                }
                .destination-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2.5rem;
                }
                .destination {
                    background: rgba(255, 255, 255, 0.8);
                    border: 1px solid #EAE9E3;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 20px 50px -25px rgba(0, 0, 0, 0.35);
                    transition: box-shadow 0.5s ease;
                }
                .destination:hover {
                    box-shadow: 0 25px 60px -25px rgba(0, 0, 0, 0.45);
                }
                .destination-image {
                    position: relative;
                    height: 18rem;
                }
                .destination-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .destination-title {
                    position: absolute;
                    left: 1rem;
                    right: 1rem;
                    bottom: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    color: white;
                }
                .destination-title h3 {
                    margin: 0;
                    font-family: Sentient, serif;
                    font-weight: 300;
                    font-size: 2.25rem;
                }
                .destination-body {
                    padding: 2rem;
                    font-family: Poppins, sans-serif;
                }
                .destination-body h4 {
                    font-family: Lato, sans-serif;
                    margin-bottom: 0.5rem;
                }
                .destination-body ul {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.5rem;
                    padding-left: 1.25rem;
                    margin: 0 0 1.5rem;
                }
                .destination-body li::marker {
                    color: #5E17EB;
                }
                .explore {
                    display: block;
                    padding: 0.875rem;
                    border-radius: 0.75rem;
                    background: #5E17EB;
                    color: white;
                    font-weight: 600;
                    text-align: center;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .explore:hover {
                    background: #4B12BD;
                }
                @media (max-width: 768px) {
                    .destination-grid,
                    .destination-body ul {
                        grid-template-columns: 1fr;
                    }
                    .destinations-hero img {
                        height: 360px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
