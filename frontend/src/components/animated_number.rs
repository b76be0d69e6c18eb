use yew::prelude::*;
use yew_hooks::use_interval;

use crate::animation::{Spring, SpringConfig};
use crate::hooks::use_reveal;

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: u32,
}

/// Counts from 0 up to `value` on a spring once half of it is on screen.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let node = use_node_ref();
    let in_view = use_reveal(node.clone(), 0.5);
    let spring = use_mut_ref(|| Spring::new(SpringConfig::COUNTER, 0.0, props.value as f64));
    let shown = use_state(|| 0.0_f64);
    let settled = use_state(|| false);

    {
        let spring = spring.clone();
        let shown = shown.clone();
        let settled = settled.clone();
        let running = in_view && !*settled;
        use_interval(
            move || {
                let mut spring = spring.borrow_mut();
                spring.step(FRAME_MS as f64 / 1000.0);
                shown.set(spring.value());
                if spring.is_settled() {
                    settled.set(true);
                }
            },
            if running { FRAME_MS } else { 0 },
        );
    }

    html! {
        <span ref={node}>{ shown.floor() as i64 }</span>
    }
}
