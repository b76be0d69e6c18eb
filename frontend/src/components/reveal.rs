use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Fraction of the element that must be visible before it animates in.
    #[prop_or(0.3)]
    pub threshold: f64,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger relative to siblings.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Wraps its children in an element that fades and slides in the first time
/// it scrolls into view, and stays visible afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.threshold);

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <@{props.tag.to_string()}
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), revealed.then_some("revealed"))}
            style={style}
        >
            { for props.children.iter() }
        </@>
    }
}
