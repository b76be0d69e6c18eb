use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::animation::ease_css;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub gradient: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#f8fafc",
    surface: "#ffffff",
    primary: "#6366f1",
    secondary: "#8b5cf6",
    text: "#1e293b",
    text_secondary: "#64748b",
    border: "#e2e8f0",
    shadow: "rgba(0, 0, 0, 0.1)",
    gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
};

pub const DARK: Palette = Palette {
    background: "#0f172a",
    surface: "#1e293b",
    primary: "#818cf8",
    secondary: "#a78bfa",
    text: "#f1f5f9",
    text_secondary: "#94a3b8",
    border: "#334155",
    shadow: "rgba(0, 0, 0, 0.3)",
    gradient: "linear-gradient(135deg, #4c1d95 0%, #7c2d12 100%)",
};

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode {
            DARK
        } else {
            LIGHT
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProps {
    pub dark_mode: bool,
}

/// Exposes the active palette as `:root` custom properties plus the page-wide
/// base rules. Components only ever reference the `var(--...)` names.
#[function_component(ThemeStyle)]
pub fn theme_style(props: &ThemeProps) -> Html {
    let p = Palette::for_mode(props.dark_mode);
    let ease = ease_css();

    html! {
        <Global css={css!(
            r#"
            :root {
                --background: ${background};
                --surface: ${surface};
                --primary: ${primary};
                --secondary: ${secondary};
                --text: ${text};
                --text-secondary: ${text_secondary};
                --border: ${border};
                --shadow: ${shadow};
                --gradient: ${gradient};
                --ease: ${ease};
            }
            * {
                margin: 0;
                padding: 0;
                box-sizing: border-box;
            }
            html {
                scroll-behavior: smooth;
                height: 100%;
                overflow-x: hidden;
            }
            body {
                font-family: 'Inter', sans-serif;
                line-height: 1.6;
                color: var(--text);
                background-color: var(--background);
                transition: all 0.3s ease;
                height: 100%;
                overflow-x: hidden;
                overflow-y: auto;
            }
            section {
                width: 100%;
                position: relative;
            }
            .reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s var(--ease), transform 0.6s var(--ease);
            }
            .reveal.revealed {
                opacity: 1;
                transform: none;
            }
            "#,
            background = p.background,
            surface = p.surface,
            primary = p.primary,
            secondary = p.secondary,
            text = p.text,
            text_secondary = p.text_secondary,
            border = p.border,
            shadow = p.shadow,
            gradient = p.gradient,
            ease = ease,
        )} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_palette() {
        assert_eq!(Palette::for_mode(false), LIGHT);
        assert_eq!(Palette::for_mode(true), DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }
}
