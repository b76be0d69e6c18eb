use yew::prelude::*;

use crate::content::{OWNER_NAME, OWNER_ROLE, PORTRAIT_URL};
use crate::hooks::scroll_to_section;

const FLOATING_ELEMENTS: u32 = 5;

fn floating_style(i: u32) -> String {
    format!(
        "left: {}%; top: {}%; width: {size}px; height: {size}px; animation-duration: {}s; animation-delay: {}s;",
        20 + i * 15,
        10 + i * 20,
        3 + i,
        i as f64 * 0.5,
        size = 30 + i * 10,
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let jump = |section: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section);
        })
    };

    html! {
        <div class="hero">
            <div class="floating-elements">
                { for (0..FLOATING_ELEMENTS).map(|i| html! {
                    <div key={i} class="floating-element" style={floating_style(i)}></div>
                }) }
            </div>
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title" style="animation-delay: 0.3s;">{OWNER_NAME}</h1>
                    <h2 class="hero-subtitle" style="animation-delay: 0.5s;">{OWNER_ROLE}</h2>
                    <p class="hero-description" style="animation-delay: 0.7s;">
                        {"Specializing in game security analysis, reverse engineering, and developing custom solutions for complex gaming environments."}
                    </p>
                    <div class="hero-buttons" style="animation-delay: 0.9s;">
                        <a href="#projects" class="hero-button primary" onclick={jump("projects")}>{"View My Work"}</a>
                        <a href="#contact" class="hero-button secondary" onclick={jump("contact")}>{"Get In Touch"}</a>
                    </div>
                </div>
                <div class="hero-image">
                    <img src={PORTRAIT_URL} alt={format!("{} - {}", OWNER_NAME, OWNER_ROLE)} />
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    background: var(--gradient);
                    color: white;
                    position: relative;
                    overflow: hidden;
                }
                .hero-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .hero-content > * {
                    opacity: 0;
                    animation: hero-rise 0.8s var(--ease) forwards;
                }
                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-title {
                    font-size: 3.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    background: linear-gradient(135deg, #fff 0%, #e0e7ff 100%);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    background-clip: text;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .hero-description {
                    font-size: 1.1rem;
                    margin-bottom: 2rem;
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                }
                .hero-button {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-weight: 600;
                    transition: all 0.3s ease;
                    cursor: pointer;
                }
                .hero-button:hover {
                    transform: scale(1.05);
                }
                .hero-button.primary {
                    background: var(--primary);
                    color: white;
                }
                .hero-button.secondary {
                    color: white;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                }
                .hero-image {
                    display: flex;
                    justify-content: center;
                    animation: hero-image-in 1s var(--ease) 0.5s both;
                }
                .hero-image img {
                    width: 100%;
                    max-width: 400px;
                    border-radius: 50%;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                    animation: hero-bob 4s ease-in-out infinite;
                }
                @keyframes hero-image-in {
                    from { opacity: 0; transform: scale(0.8) rotate(-10deg); }
                    to { opacity: 1; transform: scale(1) rotate(0); }
                }
                @keyframes hero-bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                .floating-elements {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                }
                .floating-element {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    animation-name: hero-float;
                    animation-iteration-count: infinite;
                }
                @keyframes hero-float {
                    0%, 100% { transform: translateY(0); opacity: 0.3; }
                    50% { transform: translateY(-20px); opacity: 0.6; }
                }
                @media (max-width: 768px) {
                    .hero-container {
                        grid-template-columns: 1fr;
                        text-align: center;
                        gap: 2rem;
                        padding: 0 1rem;
                    }
                    .hero-title {
                        font-size: 2.5rem;
                    }
                    .hero-image {
                        order: -1;
                    }
                }
                @media (max-width: 480px) {
                    .hero-buttons {
                        flex-direction: column;
                        align-items: center;
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
    fn floating_elements_spread_out() {
        assert_eq!(
            floating_style(0),
            "left: 20%; top: 10%; width: 30px; height: 30px; animation-duration: 3s; animation-delay: 0s;"
        );
        assert!(floating_style(4).starts_with("left: 80%; top: 90%; width: 70px;"));
    }
}
