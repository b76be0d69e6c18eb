use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::reveal::Reveal;
use crate::content::{OWNER_NAME, PORTRAIT_URL, STATS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="section-container">
            <Reveal class={classes!("section-header")}>
                <h2 class="section-title">{"About Me"}</h2>
                <div class="section-divider"></div>
            </Reveal>

            <div class="about-content">
                <Reveal class={classes!("about-image")} delay_ms={200}>
                    <img src={PORTRAIT_URL} alt={format!("About {}", OWNER_NAME)} />
                </Reveal>

                <Reveal class={classes!("about-text")} delay_ms={400}>
                    <h3>{format!("Hi, I'm {}", OWNER_NAME)}</h3>
                    <p>
                        {"I'm a game security researcher and reverse engineer with extensive experience in analyzing game systems, developing custom tools, and creating solutions for complex gaming challenges."}
                    </p>
                    <p>
                        {"My expertise includes low-level programming, memory analysis, network protocol analysis, and building tooling for security research on game environments."}
                    </p>
                    <div class="about-stats">
                        {
                            STATS.iter().map(|stat| html! {
                                <div key={stat.label} class="stat">
                                    <span class="stat-number">
                                        <AnimatedNumber value={stat.value} />{"+"}
                                    </span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                #about {
                    background: var(--surface);
                    color: var(--text);
                }
                .about-content {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-image {
                    display: flex;
                    justify-content: center;
                }
                .about-image img {
                    width: 100%;
                    max-width: 300px;
                    border-radius: 1rem;
                    box-shadow: 0 10px 30px var(--shadow);
                    transition: transform 0.3s ease;
                }
                .about-image img:hover {
                    transform: scale(1.05) rotate(2deg);
                }
                .about-text h3 {
                    font-size: 2rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .about-text p {
                    color: var(--text-secondary);
                    margin-bottom: 1rem;
                    line-height: 1.7;
                    font-size: 1.1rem;
                }
                .about-stats {
                    display: flex;
                    gap: 2rem;
                    margin-top: 2rem;
                }
                .stat {
                    text-align: center;
                    padding: 1.5rem;
                    background: var(--background);
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 20px var(--shadow);
                    transition: transform 0.3s ease;
                }
                .stat:hover {
                    transform: translateY(-5px);
                }
                .stat-number {
                    display: block;
                    font-size: 2rem;
                    font-weight: 700;
                    color: var(--primary);
                }
                .stat-label {
                    color: var(--text-secondary);
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                @media (max-width: 768px) {
                    .about-content {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        text-align: center;
                    }
                }
                @media (max-width: 480px) {
                    .about-stats {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
