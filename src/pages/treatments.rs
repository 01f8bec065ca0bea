use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_scroll_to_top;
use crate::Route;

pub struct Retreat {
    pub name: &'static str,
    pub rating: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub image: &'static str,
}

pub const RETREATS: &[Retreat] = &[
    Retreat {
        name: "UTMT Boutique Hotel",
        rating: "5★",
        duration: "10 days",
        price: "from €2,900",
        description: "Authentic Ayurveda in a designer hotel",
        location: "Asia",
        image: "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Somatheeram Ayurveda Resort",
        rating: "★★★★",
        duration: "14 days",
        price: "from €2,450",
        description: "Authentic healing in Kerala",
        location: "India",
        image: "https://images.unsplash.com/photo-1596394516093-501ba68a0ba6?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Ayurveda Resort Mandira",
        rating: "★★★★★",
        duration: "3 days",
        price: "from €1,452",
        description: "Authentic Ayurveda in luxurious surroundings",
        location: "Asia",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Ayurvie Weligama",
        rating: "★★★★★",
        duration: "10 days",
        price: "from €2,920",
        description: "Authentic Ayurveda in luxurious surroundings",
        location: "Sri Lanka",
        image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Mangosteen",
        rating: "★★★★",
        duration: "7 days",
        price: "from €1,800",
        description: "Ayurveda & Wellness Resort",
        location: "Thailand",
        image: "https://images.unsplash.com/photo-1540541338287-41700207dee6?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Kingdom Ayurveda Resort",
        rating: "★★★★",
        duration: "10 days",
        price: "from €1,350",
        description: "Authentic Ayurveda",
        location: "Sri Lanka",
        image: "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Boutique Resort Soul",
        rating: "★★★★★",
        duration: "10 days",
        price: "from €2,300",
        description: "Authentic Ayurveda in modern surroundings",
        location: "Asia",
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Calendula Clinic",
        rating: "★★★★★",
        duration: "7 days",
        price: "from €2,430",
        description: "Holistic medicine clinic",
        location: "Europe",
        image: "https://images.unsplash.com/photo-1544161515-4ab6ce6db874?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Lotus Villa",
        rating: "★★★★",
        duration: "13 days",
        price: "from €2,750",
        description: "Ayurvedic resort & hospital",
        location: "India",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Peacock Ayurveda Resort",
        rating: "★★★★",
        duration: "10 days",
        price: "from €1,450",
        description: "Authentic Ayurveda in a family setting",
        location: "Sri Lanka",
        image: "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?auto=format&fit=crop&w=800&q=80",
    },
    Retreat {
        name: "Villa Alena",
        rating: "★★★★",
        duration: "7 days",
        price: "from €1,500",
        description: "Ayurveda in privacy",
        location: "Asia",
        image: "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?auto=format&fit=crop&w=800&q=80",
    },
];

#[function_component(Treatments)]
pub fn treatments() -> Html {
    use_scroll_to_top();

    html! {
        <div class="treatments-page">
            <div class="treatments-inner">
                <div class="treatments-head">
                    <h1>{"Ayurvedic Retreats"}</h1>
                    <p>
                        {"If you want to invest in yourself and your health, an Ayurvedic healing retreat is the perfect place for you. A great combination of therapeutic stay with an excellent therapeutic team and Ayurvedic cuisine will provide you with a complete Ayurveda experience."}
                    </p>
                </div>

                <div class="retreat-grid">
                    { for RETREATS.iter().map(|retreat| html! {
                        <div class="retreat">
                            <div class="retreat-image">
                                <img src={retreat.image} alt={retreat.name} loading="lazy" />
                                <span class="rating">{retreat.rating}</span>
                            </div>
                            <div class="retreat-body">
                                <h3>{retreat.name}</h3>
                                <p class="description">{retreat.description}</p>
                                <div class="facts">
                                    <span>{"📍 "}{retreat.location}</span>
                                    <span>{"🕒 "}{retreat.duration}</span>
                                </div>
                                <div class="retreat-footer">
                                    <div>
                                        <p class="muted">{"Starting from"}</p>
                                        <p class="price">{retreat.price}</p>
                                    </div>
                                    <Link<Route> to={Route::Consultation} classes="details">
                                        {"View Details"}
                                    </Link<Route>>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="treatments-help">
                    <h3>{"Need Help Choosing the Perfect Retreat?"}</h3>
                    <p>
                        {"Each of our Ayurvedic resorts is unique and proven over the years. We only offer resorts that maintain the highest quality of Ayurvedic therapies and diagnostics, because we truly care about the therapeutic results of each client."}
                    </p>
                    <Link<Route> to={Route::Consultation} classes="details">
                        {"Book a Free Consultation"}
                    </Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .treatments-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom right, #F4F4F4, #EAE9E3);
                    color: #181818;
                    font-family: Poppins, sans-serif;
                }
                .treatments-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 1rem;
                }
                .treatments-head {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .treatments-head h1 {
                    font-family: Sentient, serif;
                    font-size: 3rem;
                    margin: 0 0 1rem;
                }
                .treatments-head p {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.25rem;
                    color: #374151;
                }
                .retreat-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .retreat {
                    background: white;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.3s ease;
                }
                .retreat:hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
                }
                .retreat-image {
                    position: relative;
                    height: 12rem;
                    overflow: hidden;
                }
                .retreat-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .rating {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #5E17EB;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .retreat-body {
                    padding: 1.5rem;
                }
                .retreat-body h3 {
                    margin: 0 0 0.5rem;
                    font-family: Sentient, serif;
                    font-size: 1.5rem;
                }
                .retreat-body .description,
                .facts {
                    color: #4b5563;
                }
                .facts {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                    font-size: 0.875rem;
                }
                .retreat-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 1rem;
                    border-top: 1px solid #e5e7eb;
                }
                .retreat-footer p {
                    margin: 0;
                }
                .muted {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .price {
                    color: #5E17EB;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .details {
                    display: inline-block;
                    padding: 0.5rem 1.5rem;
                    border-radius: 0.5rem;
                    background: #5E17EB;
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .details:hover {
                    background: #4B12BD;
                }
                .treatments-help {
                    margin-top: 4rem;
                    padding: 2rem;
                    background: white;
                    border-radius: 1rem;
                    text-align: center;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .treatments-help h3 {
                    font-family: Sentient, serif;
                    font-size: 1.875rem;
                    margin: 0 0 1rem;
                }
                .treatments-help p {
                    max-width: 42rem;
                    margin: 0 auto 1.5rem;
                    color: #374151;
                }
                @media (max-width: 1023px) {
                    .retreat-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 767px) {
                    .retreat-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
