use std::num::NonZeroUsize;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{translate_x, Carousel};
use crate::config::Testimonial;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderAction {
    Next,
    Previous,
    GoTo(usize),
}

impl SliderAction {
    /// Arrow keys move the slider, every other key is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

impl Reducible for Carousel {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SliderAction::Next => next.advance(),
            SliderAction::Previous => next.retreat(),
            SliderAction::GoTo(index) => {
                if !next.go_to(index) {
                    debug!("Ignoring slide {} of {}", index, self.len());
                    return self;
                }
            }
        }
        debug!("Slide {} of {}", next.current() + 1, next.len());
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub slides: Vec<Testimonial>,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    match NonZeroUsize::new(props.slides.len()) {
        Some(count) => html! { <SliderTrack slides={props.slides.clone()} count={count} /> },
        None => {
            warn!("Slider has no slides, skipping");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct SliderTrackProps {
    slides: Vec<Testimonial>,
    count: NonZeroUsize,
}

#[function_component(SliderTrack)]
fn slider_track(props: &SliderTrackProps) -> Html {
    let count = props.count;
    let carousel = use_reducer(move || {
        info!("Slider ready with {} slides", count);
        Carousel::new(count)
    });

    {
        let carousel = carousel.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = SliderAction::from_key(&e.key()) {
                carousel.dispatch(action);
            }
        });
    }

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(SliderAction::Next))
    };
    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(SliderAction::Previous))
    };

    html! {
        <div class="slider">
            <style>{SLIDER_CSS}</style>
            {
                props.slides.iter().zip(carousel.offsets()).map(|(slide, offset)| {
                    html! {
                        <div class="slide" style={format!("transform: {}", translate_x(offset))}>
                            <div class="testimonial">
                                <h5 class="testimonial__header">{&slide.heading}</h5>
                                <blockquote class="testimonial__text">{&slide.quote}</blockquote>
                                <address class="testimonial__author">
                                    {
                                        if let Some(photo) = &slide.photo {
                                            html! { <img src={photo.clone()} alt="" class="testimonial__photo" /> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <h6 class="testimonial__name">{&slide.author}</h6>
                                    <p class="testimonial__location">{&slide.location}</p>
                                </address>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
            <button class="slider__btn slider__btn--left" onclick={on_previous}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>
            <div class="dots">
                {
                    carousel.indicators().iter().map(|dot| {
                        let ordinal = dot.ordinal;
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(SliderAction::GoTo(ordinal)))
                        };
                        html! {
                            <button
                                class={classes!("dots__dot", dot.active.then(|| "dots__dot--active"))}
                                data-slide={ordinal.to_string()}
                                onclick={onclick}
                            ></button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

const SLIDER_CSS: &str = r#"
    .slider {
        max-width: 100rem;
        height: 50rem;
        margin: 0 auto;
        position: relative;
        overflow: hidden;
    }
    .slide {
        position: absolute;
        top: 0;
        width: 100%;
        height: 50rem;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: transform 1s;
    }
    .testimonial {
        width: 65%;
        position: relative;
    }
    .testimonial__header {
        font-size: 2.25rem;
        font-weight: 500;
        margin-bottom: 1.5rem;
    }
    .testimonial__text {
        font-size: 1.7rem;
        margin-bottom: 3.5rem;
        color: #666;
    }
    .testimonial__author {
        margin-left: 3rem;
        font-style: normal;
        display: grid;
        grid-template-columns: 6.5rem 1fr;
        column-gap: 2rem;
    }
    .testimonial__photo {
        grid-row: 1 / span 2;
        width: 6.5rem;
        border-radius: 50%;
    }
    .slider__btn {
        position: absolute;
        top: 50%;
        z-index: 10;
        border: none;
        background: rgba(255, 255, 255, 0.7);
        font-size: 3.25rem;
        height: 5.5rem;
        width: 5.5rem;
        border-radius: 50%;
        cursor: pointer;
    }
    .slider__btn--left {
        left: 6%;
        transform: translate(-50%, -50%);
    }
    .slider__btn--right {
        right: 6%;
        transform: translate(50%, -50%);
    }
    .dots {
        position: absolute;
        bottom: 5%;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
    }
    .dots__dot {
        border: none;
        background-color: #b9b9b9;
        opacity: 0.7;
        height: 1rem;
        width: 1rem;
        border-radius: 50%;
        margin-right: 1.75rem;
        cursor: pointer;
        transition: all 0.5s;
    }
    .dots__dot:last-child {
        margin: 0;
    }
    .dots__dot--active {
        background-color: #888;
        opacity: 1;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Rc<Carousel> {
        Rc::new(Carousel::new(NonZeroUsize::new(n).unwrap()))
    }

    #[test]
    fn arrow_keys_map_to_moves() {
        assert_eq!(SliderAction::from_key("ArrowRight"), Some(SliderAction::Next));
        assert_eq!(SliderAction::from_key("ArrowLeft"), Some(SliderAction::Previous));
        assert_eq!(SliderAction::from_key("Escape"), None);
        assert_eq!(SliderAction::from_key("ArrowUp"), None);
    }

    #[test]
    fn reducer_moves_through_ring() {
        let state = carousel(4);
        let state = state.reduce(SliderAction::Previous);
        assert_eq!(state.current(), 3);
        let state = state.reduce(SliderAction::Next);
        assert_eq!(state.current(), 0);
        let state = state.reduce(SliderAction::GoTo(2));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn reducer_keeps_same_state_for_bad_index() {
        let state = carousel(4);
        let next = state.clone().reduce(SliderAction::GoTo(7));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
