use yew::prelude::*;

use crate::hooks::{scroll_to_section, TrackerContext};

/// Fixed column of dots on the right edge, one per section.
#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let tracker = use_context::<TrackerContext>();
    let Some(tracker) = tracker else {
        return html! {};
    };
    let active = tracker.active_index();

    html! {
        <div class="scroll-indicator">
            {
                tracker.sections().enumerate().map(|(index, section)| {
                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section));
                    html! {
                        <button
                            key={section}
                            class={classes!("scroll-dot", (index == active).then_some("active"))}
                            title={section}
                            onclick={onclick}
                        />
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .scroll-indicator {
                    position: fixed;
                    top: 50%;
                    right: 20px;
                    transform: translateY(-50%);
                    z-index: 1000;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    opacity: 0;
                    animation: indicator-in 0.5s var(--ease) 1s forwards;
                }
                @keyframes indicator-in {
                    from { opacity: 0; transform: translate(20px, -50%); }
                    to { opacity: 1; transform: translate(0, -50%); }
                }
                .scroll-dot {
                    width: 12px;
                    height: 12px;
                    padding: 0;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--border);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .scroll-dot.active {
                    background: var(--primary);
                }
                .scroll-dot:hover {
                    transform: scale(1.2);
                    background: var(--primary);
                }
                .scroll-dot:active {
                    transform: scale(0.8);
                }
                @media (max-width: 768px) {
                    .scroll-indicator {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
