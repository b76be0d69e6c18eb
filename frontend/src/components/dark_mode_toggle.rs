use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DarkModeToggleProps {
    pub dark_mode: bool,
    pub on_toggle: Callback<()>,
}

pub fn toggle_title(dark_mode: bool) -> &'static str {
    if dark_mode {
        "Switch to Light Mode"
    } else {
        "Switch to Dark Mode"
    }
}

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle(props: &DarkModeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let icon = if props.dark_mode { "🌙" } else { "☀️" };

    html! {
        <button class="dark-mode-toggle" title={toggle_title(props.dark_mode)} onclick={onclick}>
            // Keyed so the icon remounts and replays its spin on every switch.
            <span key={icon} class="toggle-icon">{icon}</span>
            <style>
                {r#"
                .dark-mode-toggle {
                    position: fixed;
                    top: 100px;
                    right: 20px;
                    width: 60px;
                    height: 60px;
                    border-radius: 50%;
                    background: var(--surface);
                    border: 2px solid var(--border);
                    box-shadow: 0 4px 20px var(--shadow);
                    cursor: pointer;
                    z-index: 1001;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.3s ease;
                    animation: toggle-pop 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .dark-mode-toggle:hover {
                    transform: scale(1.1) rotate(180deg);
                    box-shadow: 0 8px 30px var(--shadow);
                }
                .dark-mode-toggle:active {
                    transform: scale(0.9);
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: var(--primary);
                    animation: icon-spin 0.3s ease;
                }
                @keyframes toggle-pop {
                    from { opacity: 0; transform: scale(0); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes icon-spin {
                    from { opacity: 0; transform: rotate(-180deg); }
                    to { opacity: 1; transform: rotate(0); }
                }
                @media (max-width: 768px) {
                    .dark-mode-toggle {
                        top: 80px;
                        right: 15px;
                        width: 50px;
                        height: 50px;
                    }
                    .toggle-icon {
                        font-size: 1.2rem;
                    }
                }
                "#}
            </style>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_offers_the_other_mode() {
        assert_eq!(toggle_title(true), "Switch to Light Mode");
        assert_eq!(toggle_title(false), "Switch to Dark Mode");
    }
}
