use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::NAV_TOP_THRESHOLD_PX;
use crate::hooks::use_scroll_y;
use crate::Route;

/// Show/hide state of the fixed navigation bar: hidden while the page
/// scrolls down, shown while it scrolls up or sits near the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavScrollState {
    pub last_scroll_y: f64,
    pub is_visible: bool,
    pub is_at_top: bool,
}

impl Default for NavScrollState {
    fn default() -> Self {
        Self {
            last_scroll_y: 0.0,
            is_visible: true,
            is_at_top: true,
        }
    }
}

impl NavScrollState {
    /// State for a page that may already be scrolled when the bar mounts.
    /// Visibility only changes once the page actually scrolls.
    pub fn starting_at(scroll_y: f64) -> Self {
        Self {
            last_scroll_y: scroll_y,
            is_visible: true,
            is_at_top: scroll_y < NAV_TOP_THRESHOLD_PX,
        }
    }

    pub fn on_scroll(self, scroll_y: f64) -> Self {
        let is_at_top = scroll_y < NAV_TOP_THRESHOLD_PX;
        let is_visible = is_at_top || scroll_y <= self.last_scroll_y;
        Self {
            last_scroll_y: scroll_y,
            is_visible,
            is_at_top,
        }
    }
}

/// `/` only matches itself; every other link also matches its sub-paths.
pub fn is_active(link: &str, current: &str) -> bool {
    if link == "/" {
        current == "/"
    } else {
        current.starts_with(link)
    }
}

const NAV_LINKS: &[(&str, Route)] = &[
    ("ABOUT", Route::About),
    ("RETREATS", Route::Treatments),
    ("DOCTORS & THERAPISTS", Route::Consultation),
];

const NAV_LINKS_RIGHT: &[(&str, Route)] = &[
    ("VOUCHERS", Route::Home),
    ("BOOKING & CONTACT", Route::Contact),
    ("BLOG", Route::Blogs),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_loaded = use_state(|| false);
    let scroll_y = use_scroll_y();
    let nav_state = use_mut_ref(|| NavScrollState::starting_at(scroll_y));
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                is_loaded.set(true);
                || ()
            },
            (),
        );
    }

    let state = {
        let mut nav_state = nav_state.borrow_mut();
        if nav_state.last_scroll_y != scroll_y {
            *nav_state = nav_state.on_scroll(scroll_y);
        }
        *nav_state
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let link_class = |route: &Route| {
        classes!(
            "nav-link",
            is_active(&route.to_path(), &current_path).then(|| "active")
        )
    };

    let desktop_link = |(label, route): &(&str, Route)| {
        html! {
            <div class="nav-cell">
                <Link<Route> to={route.clone()} classes={link_class(route)}>
                    {*label}
                </Link<Route>>
            </div>
        }
    };

    let mobile_link = |(label, route): &(&str, Route)| {
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={route.clone()} classes={classes!(link_class(route), "mobile")}>
                    {*label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!(
            "site-nav",
            (!state.is_visible).then(|| "hidden"),
            (!state.is_at_top).then(|| "scrolled"),
        )}>
            <div class="nav-inner">
                <div class={classes!("nav-grid", (*is_loaded).then(|| "loaded"))}>
                    { for NAV_LINKS.iter().map(desktop_link) }
                    <div class="nav-cell nav-logo">
                        <Link<Route> to={Route::Home}>
                            <img src="/assets/logo.png" alt="RAYA Logo" />
                        </Link<Route>>
                    </div>
                    { for NAV_LINKS_RIGHT.iter().map(desktop_link) }
                </div>

                <div class="nav-mobile">
                    <div></div>
                    <Link<Route> to={Route::Home}>
                        <img class="nav-mobile-logo" src="/assets/raya-logo-new.png" alt="RAYA Logo" />
                    </Link<Route>>
                    <button class="burger-menu" aria-label="Toggle mobile menu" onclick={toggle_menu}>
                        {
                            if *menu_open {
                                html! { <span class="burger-close">{"✕"}</span> }
                            } else {
                                html! {
                                    <>
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </>
                                }
                            }
                        }
                    </button>
                </div>
                <svg class="nav-curve" viewBox="0 0 400 80" preserveAspectRatio="none">
                    <path d="M0,0 Q200,80 400,0 L400,0 L0,0 Z" fill="#5E17EB" />
                </svg>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile-menu">
                            { for NAV_LINKS.iter().map(mobile_link) }
                            { for NAV_LINKS_RIGHT.iter().skip(1).map(mobile_link) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: #5E17EB;
                    transition: transform 0.5s ease-in-out;
                    font-family: Lato, sans-serif;
                }
                .site-nav.hidden {
                    transform: translateY(-100%);
                }
                .site-nav.scrolled {
                    backdrop-filter: blur(4px);
                }
                .nav-inner {
                    position: relative;
                    height: 93px;
                    padding: 2rem 1.5rem 0;
                    display: flex;
                    align-items: center;
                }
                .nav-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    gap: 2rem;
                    width: 100%;
                    max-width: 1600px;
                    margin: 0 auto;
                    align-items: center;
                    opacity: 0;
                    transition: opacity 0.7s ease-out;
                }
                .nav-grid.loaded {
                    opacity: 1;
                }
                .nav-cell {
                    display: flex;
                    justify-content: center;
                }
                .nav-link {
                    color: white;
                    text-decoration: none;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.05em;
                    white-space: nowrap;
                    transition: opacity 0.3s ease-in-out;
                }
                .nav-link:hover {
                    opacity: 0.8;
                }
                .nav-link.active {
                    opacity: 0.9;
                }
                .nav-link.mobile {
                    display: block;
                    padding: 0.5rem 0;
                }
                .nav-logo img {
                    width: 150px;
                    height: auto;
                    transition: transform 0.3s ease-in-out;
                }
                .nav-logo img:hover {
                    transform: scale(1.1);
                }
                .nav-mobile {
                    display: none;
                    width: 100%;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-mobile-logo {
                    width: 8rem;
                    height: auto;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    color: white;
                    padding: 0.5rem;
                    cursor: pointer;
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: white;
                }
                .burger-menu .burger-close {
                    background: none;
                    width: auto;
                    height: auto;
                    font-size: 1.25rem;
                }
                .nav-curve {
                    position: absolute;
                    left: 50%;
                    bottom: 0;
                    width: 14rem;
                    transform: translate(-50%, 100%);
                    pointer-events: none;
                }
                .nav-mobile-menu {
                    background: #181818;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1.5rem 1rem;
                }
                @media (max-width: 1023px) {
                    .nav-inner {
                        height: 5rem;
                    }
                    .nav-grid {
                        display: none;
                    }
                    .nav-mobile {
                        display: flex;
                    }
                    .nav-curve {
                        width: 16rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_when_scrolling_down() {
        let state = NavScrollState::default().on_scroll(50.0).on_scroll(120.0);
        assert!(!state.is_visible);
        assert!(!state.is_at_top);
        assert_eq!(state.last_scroll_y, 120.0);
    }

    #[test]
    fn shows_when_scrolling_up() {
        let state = NavScrollState::default()
            .on_scroll(300.0)
            .on_scroll(250.0);
        assert!(state.is_visible);
        assert!(!state.is_at_top);
    }

    #[test]
    fn always_visible_near_top() {
        let state = NavScrollState {
            last_scroll_y: 2.0,
            is_visible: false,
            is_at_top: false,
        }
        .on_scroll(9.0);
        assert!(state.is_visible);
        assert!(state.is_at_top);
    }

    #[test]
    fn stays_visible_when_mounted_mid_page() {
        let state = NavScrollState::starting_at(800.0);
        assert!(state.is_visible);
        assert!(!state.is_at_top);
        assert_eq!(state.on_scroll(800.0), state);
        assert!(!state.on_scroll(850.0).is_visible);
    }

    #[test]
    fn root_link_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/treatments"));
    }

    #[test]
    fn other_links_match_by_prefix() {
        assert!(is_active("/treatments", "/treatments"));
        assert!(is_active("/blogs", "/blogs/first-retreat"));
        assert!(!is_active("/contact", "/consultation"));
    }
}
