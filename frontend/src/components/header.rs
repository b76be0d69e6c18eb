use yew::prelude::*;
use yew_hooks::use_bool_toggle;

use crate::content::NAV_ITEMS;
use crate::hooks::{scroll_to_section, TrackerContext};

#[function_component(Header)]
pub fn header() -> Html {
    let tracker = use_context::<TrackerContext>();
    let menu_open = use_bool_toggle(false);

    let (active, is_scrolled) = tracker
        .as_ref()
        .map(|t| (t.active_id(), t.is_scrolled()))
        .unwrap_or(("home", false));

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(section);
                menu_open.set(false);
            })
        }
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            <nav class="site-nav">
                <a class="nav-logo" href="#home" onclick={go_to("home")}>
                    {"Portfolio"}
                </a>
                <ul class={classes!("nav-menu", (*menu_open).then_some("open"))}>
                    {
                        NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.section}>
                                <a
                                    href={format!("#{}", item.section)}
                                    class={classes!("nav-link", (active == item.section).then_some("active"))}
                                    onclick={go_to(item.section)}
                                >
                                    {item.label}
                                </a>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
                <button class={classes!("burger-menu", (*menu_open).then_some("open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    background: var(--surface);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid var(--border);
                    transition: all 0.3s ease;
                    animation: header-drop 0.8s var(--ease);
                }
                .site-header.scrolled {
                    box-shadow: 0 2px 20px var(--shadow);
                }
                @keyframes header-drop {
                    from { transform: translateY(-100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .site-nav {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--primary);
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                }
                .nav-link {
                    color: var(--text-secondary);
                    text-decoration: none;
                    font-weight: 500;
                    position: relative;
                    padding: 0.5rem 0;
                    transition: color 0.3s ease;
                }
                .nav-link::after {
                    content: '';
                    position: absolute;
                    width: 0;
                    height: 2px;
                    bottom: 0;
                    left: 0;
                    background: var(--primary);
                    transition: width 0.3s ease;
                }
                .nav-link:hover::after,
                .nav-link.active::after {
                    width: 100%;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: var(--primary);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 25px;
                    height: 3px;
                    margin: 3px 0;
                    border-radius: 2px;
                    background: var(--text-secondary);
                    transition: 0.3s;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: rotate(-45deg) translate(-5px, 6px);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: rotate(45deg) translate(-5px, -6px);
                }
                @media (max-width: 768px) {
                    .site-nav {
                        padding: 1rem;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .nav-menu {
                        position: fixed;
                        left: -100%;
                        top: 70px;
                        width: 100%;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 2rem 0;
                        text-align: center;
                        background: var(--surface);
                        box-shadow: 0 10px 27px var(--shadow);
                        transition: 0.3s;
                    }
                    .nav-menu.open {
                        left: 0;
                    }
                }
                "#}
            </style>
        </header>
    }
}
