use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_scroll_to_top;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    pub title: AttrValue,
}

/// Stand-in for sections whose content is not published yet.
#[function_component(ComingSoon)]
pub fn coming_soon(props: &ComingSoonProps) -> Html {
    use_scroll_to_top();

    html! {
        <div class="placeholder-page">
            <h1>{props.title.clone()}</h1>
            <p>{"This page is coming soon."}</p>
            <div class="placeholder-links">
                <Link<Route> to={Route::Home} classes="placeholder-link">{"Back to home"}</Link<Route>>
                <Link<Route> to={Route::Consultation} classes="placeholder-link">{"Talk to an expert"}</Link<Route>>
            </div>
            <style>{PLACEHOLDER_CSS}</style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="placeholder-page">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <div class="placeholder-links">
                <Link<Route> to={Route::Home} classes="placeholder-link">{"Back to home"}</Link<Route>>
            </div>
            <style>{PLACEHOLDER_CSS}</style>
        </div>
    }
}

const PLACEHOLDER_CSS: &str = r#"
.placeholder-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    padding: 8rem 1.5rem 4rem;
    background: #FFFBF7;
    color: #181818;
    text-align: center;
}
.placeholder-page h1 {
    margin: 0;
    font-family: Sentient, serif;
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 400;
}
.placeholder-page p {
    font-family: Poppins, sans-serif;
    color: #4b5563;
}
.placeholder-links {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
    justify-content: center;
}
.placeholder-link {
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    background: #5E17EB;
    color: white;
    font-family: Poppins, sans-serif;
    text-decoration: none;
}
.placeholder-link:hover {
    background: #4B12BD;
}
"#;
