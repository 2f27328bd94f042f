use log::debug;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::observer::{use_intersection, ObserverOptions};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that stays hidden until enough of it scrolls into view.
/// Once revealed it stays revealed.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let section_ref = use_node_ref();
    let hidden = use_state(|| true);

    {
        let hidden = hidden.clone();
        let id = props.id.clone();
        use_intersection(
            section_ref.clone(),
            ObserverOptions::new(REVEAL_THRESHOLD).once(),
            Callback::from(move |visible: bool| {
                if visible {
                    debug!("Revealing #{}", id);
                    hidden.set(false);
                }
            }),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            class={classes!("section", props.class.clone(), (*hidden).then(|| "section--hidden"))}
            ref={section_ref}
        >
            { for props.children.iter() }
        </section>
    }
}
