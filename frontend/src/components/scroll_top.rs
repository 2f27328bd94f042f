use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::observer::{use_intersection, ObserverOptions};
use crate::scroll::scroll_to_top_smooth;

#[derive(Properties, PartialEq)]
pub struct ScrollToTopProps {
    /// The button shows while this element is on screen.
    pub target: NodeRef,
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top(props: &ScrollToTopProps) -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_intersection(
            props.target.clone(),
            ObserverOptions::default(),
            Callback::from(move |visible: bool| {
                debug!("Scroll-to-top {}", if visible { "shown" } else { "hidden" });
                show.set(visible);
            }),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top_smooth());

    html! {
        <>
            <style>{r#"
                .scroll-to-top-btn {
                    position: fixed;
                    bottom: 3rem;
                    right: 3rem;
                    width: 5rem;
                    height: 5rem;
                    border: none;
                    border-radius: 50%;
                    background-color: #5ec576;
                    font-size: 2.4rem;
                    cursor: pointer;
                    opacity: 0;
                    transform: translateY(100px);
                    transition: all 0.5s ease;
                    z-index: 50;
                }
                .scroll-to-top-btn.show-btn {
                    opacity: 1;
                    transform: translateY(0);
                }
            "#}</style>
            <button
                class={classes!("scroll-to-top-btn", (*show).then(|| "show-btn"))}
                aria-label="Scroll to top"
                onclick={onclick}
            >
                {"↑"}
            </button>
        </>
    }
}
