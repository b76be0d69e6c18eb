use yew::prelude::*;
use log::info;

mod animation;
mod config;
mod content;
mod hooks;
mod scroll_tracker;
mod theme;
mod webhook;
mod components {
    pub mod animated_number;
    pub mod dark_mode_toggle;
    pub mod footer;
    pub mod header;
    pub mod reveal;
    pub mod scroll_indicator;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod hero;
    pub mod projects;
}

use components::{
    dark_mode_toggle::DarkModeToggle,
    footer::Footer,
    header::Header,
    reveal::Reveal,
    scroll_indicator::ScrollIndicator,
};
use hooks::{use_section_tracking, TrackerContext};
use pages::{about::About, blog::Blog, contact::Contact, hero::Hero, projects::Projects};
use theme::ThemeStyle;

/// Sections below the fold animate in once a fifth of them is visible.
const SECTION_REVEAL_THRESHOLD: f64 = 0.2;

#[function_component]
fn App() -> Html {
    let dark_mode = use_state(|| false);
    let tracker = use_section_tracking();

    let toggle_dark_mode = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_| {
            info!("Switching to {} mode", if *dark_mode { "light" } else { "dark" });
            dark_mode.set(!*dark_mode);
        })
    };

    html! {
        <ContextProvider<TrackerContext> context={tracker}>
            <ThemeStyle dark_mode={*dark_mode} />
            <DarkModeToggle dark_mode={*dark_mode} on_toggle={toggle_dark_mode} />
            <ScrollIndicator />
            <Header />

            <section id="home" class="page-section home-section">
                <Hero />
            </section>
            <Reveal tag="section" id="about" class={classes!("page-section")} threshold={SECTION_REVEAL_THRESHOLD}>
                <About />
            </Reveal>
            <Reveal tag="section" id="projects" class={classes!("page-section")} threshold={SECTION_REVEAL_THRESHOLD}>
                <Projects />
            </Reveal>
            <Reveal tag="section" id="blog" class={classes!("page-section")} threshold={SECTION_REVEAL_THRESHOLD}>
                <Blog />
            </Reveal>
            <Reveal tag="section" id="contact" class={classes!("page-section")} threshold={SECTION_REVEAL_THRESHOLD}>
                <Contact />
            </Reveal>

            <Footer />
            <style>
                {r#"
                .page-section {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem 0;
                }
                .home-section {
                    min-height: 100vh;
                    padding: 0;
                    animation: section-in 0.6s var(--ease);
                }
                @keyframes section-in {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .section-container {
                    width: 100%;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-title {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: var(--text);
                    margin-bottom: 1rem;
                }
                .section-divider {
                    width: 60px;
                    height: 4px;
                    margin: 0 auto;
                    border-radius: 2px;
                    background: var(--gradient);
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
                    gap: 2rem;
                }
                @media (max-width: 768px) {
                    .card-grid {
                        grid-template-columns: 1fr;
                    }
                    .section-container {
                        padding: 3rem 1rem;
                    }
                }
                "#}
            </style>
        </ContextProvider<TrackerContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
