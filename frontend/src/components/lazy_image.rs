use log::debug;
use web_sys::Event;
use yew::prelude::*;

use crate::config::LAZY_IMAGE_MARGIN;
use crate::observer::{use_intersection, ObserverOptions};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Full resolution image, fetched when the image nears the viewport.
    pub src: AttrValue,
    /// Low resolution stand-in shown until then.
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let img_ref = use_node_ref();
    let requested = use_state(|| false);
    let loaded = use_state(|| false);

    {
        let requested = requested.clone();
        let src = props.src.clone();
        use_intersection(
            img_ref.clone(),
            ObserverOptions::new(0.0).root_margin(LAZY_IMAGE_MARGIN).once(),
            Callback::from(move |visible: bool| {
                if visible {
                    debug!("Loading {}", src);
                    requested.set(true);
                }
            }),
        );
    }

    // the placeholder fires load too, only the full image clears the blur
    let onload = {
        let requested = *requested;
        let loaded = loaded.clone();
        Callback::from(move |_: Event| {
            if requested {
                loaded.set(true);
            }
        })
    };

    let src = if *requested {
        props.src.clone()
    } else {
        props.placeholder.clone()
    };

    html! {
        <img
            ref={img_ref}
            src={src}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), (!*loaded).then(|| "lazy-img"))}
            onload={onload}
        />
    }
}
