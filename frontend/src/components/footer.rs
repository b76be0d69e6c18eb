use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{OWNER_NAME, OWNER_ROLE, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-container">
                <Reveal class={classes!("footer-content")}>
                    <div class="footer-brand">
                        <h3>{OWNER_NAME}</h3>
                        <p>{OWNER_ROLE}</p>
                    </div>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.name} href={link.url} class="social-link">{link.name}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
                <Reveal class={classes!("footer-bottom")} delay_ms={200}>
                    <p>{format!("© 2025 {}. All rights reserved.", OWNER_NAME)}</p>
                </Reveal>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--surface);
                    color: var(--text);
                    padding: 3rem 0 1rem;
                    border-top: 1px solid var(--border);
                }
                .footer-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .footer-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }
                .footer-brand h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                    color: var(--primary);
                }
                .footer-brand p {
                    color: var(--text-secondary);
                }
                .footer-social {
                    display: flex;
                    gap: 2rem;
                }
                .social-link {
                    color: var(--text-secondary);
                    text-decoration: none;
                    font-weight: 500;
                    padding: 0.5rem 1rem;
                    border-radius: 0.25rem;
                    border: 1px solid transparent;
                    transition: all 0.3s ease;
                }
                .social-link:hover {
                    color: var(--primary);
                    border-color: var(--primary);
                    transform: translateY(-2px);
                }
                .footer-bottom {
                    text-align: center;
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                    color: var(--text-secondary);
                }
                @media (max-width: 768px) {
                    .footer-content {
                        flex-direction: column;
                        gap: 2rem;
                        text-align: center;
                    }
                }
                @media (max-width: 480px) {
                    .footer-social {
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
