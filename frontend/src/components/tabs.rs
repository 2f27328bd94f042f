use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{OperationTab, DEFAULT_TAB};

/// Which operations tab is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<u8>,
    active: u8,
}

impl TabSet {
    /// Opens `initial` if it is one of the tabs, otherwise the first tab.
    pub fn new(ids: Vec<u8>, initial: u8) -> Self {
        let active = if ids.contains(&initial) {
            initial
        } else {
            ids.first().copied().unwrap_or(initial)
        };
        Self { ids, active }
    }

    pub fn active(&self) -> u8 {
        self.active
    }

    pub fn is_active(&self, id: u8) -> bool {
        self.active == id
    }

    /// Switches to `id`. Unknown ids are ignored and return `false`.
    pub fn select(&mut self, id: u8) -> bool {
        if !self.ids.contains(&id) {
            return false;
        }
        self.active = id;
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct OperationsProps {
    pub tabs: Vec<OperationTab>,
}

#[function_component(Operations)]
pub fn operations(props: &OperationsProps) -> Html {
    let tabs = {
        let ids = props.tabs.iter().map(|t| t.id).collect::<Vec<_>>();
        use_state(move || TabSet::new(ids, DEFAULT_TAB))
    };

    let on_select = {
        let tabs = tabs.clone();
        Callback::from(move |id: u8| {
            let mut next = (*tabs).clone();
            if next.select(id) {
                debug!("Operations tab {}", next.active());
                tabs.set(next);
            }
        })
    };

    html! {
        <div class="operations">
            <style>{OPERATIONS_CSS}</style>
            <div class="operations__tab-container">
                {
                    props.tabs.iter().map(|tab| {
                        let id = tab.id;
                        let onclick = {
                            let on_select = on_select.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(id);
                            })
                        };
                        html! {
                            <button
                                class={classes!(
                                    "btn",
                                    "operations__tab",
                                    format!("operations__tab--{}", id),
                                    tabs.is_active(id).then(|| "operations__tab--active")
                                )}
                                onclick={onclick}
                            >
                                <span>{format!("{:02}", id)}</span>
                                {&tab.title}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                props.tabs.iter().map(|tab| {
                    html! {
                        <div class={classes!(
                            "operations__content",
                            format!("operations__content--{}", tab.id),
                            tabs.is_active(tab.id).then(|| "operations__content--active")
                        )}>
                            <div class={classes!("operations__icon", format!("operations__icon--{}", tab.id))}></div>
                            <h5 class="operations__header">{&tab.heading}</h5>
                            <p>{&tab.body}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

const OPERATIONS_CSS: &str = r#"
    .operations {
        max-width: 100rem;
        margin: 12rem auto 0 auto;
        background-color: #fff;
    }
    .operations__tab-container {
        display: flex;
        justify-content: center;
    }
    .operations__tab {
        margin-right: 2.5rem;
        transform: translateY(-50%);
    }
    .operations__tab span {
        margin-right: 1rem;
        font-weight: 600;
        display: inline-block;
    }
    .operations__tab--1 { background-color: #ffcb03; }
    .operations__tab--3 { background-color: #ff585f; margin: 0; }
    .operations__tab--active {
        transform: translateY(-66%);
    }
    .operations__content {
        display: none;
        font-size: 1.7rem;
        padding: 2.5rem 7rem 6.5rem 7rem;
    }
    .operations__content--active {
        display: grid;
        grid-template-columns: 7rem 1fr;
        column-gap: 3rem;
        row-gap: 0.5rem;
    }
    .operations__header {
        font-size: 2.25rem;
        font-weight: 500;
        align-self: center;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_requested_tab() {
        let tabs = TabSet::new(vec![1, 2, 3], 2);
        assert_eq!(tabs.active(), 2);
        assert!(tabs.is_active(2));
        assert!(!tabs.is_active(1));
    }

    #[test]
    fn unknown_initial_falls_back_to_first() {
        let tabs = TabSet::new(vec![4, 5], 1);
        assert_eq!(tabs.active(), 4);
    }

    #[test]
    fn select_switches_exactly_one_tab() {
        let mut tabs = TabSet::new(vec![1, 2, 3], 1);
        assert!(tabs.select(3));
        assert_eq!([1, 2, 3].iter().filter(|id| tabs.is_active(**id)).count(), 1);
        assert!(tabs.is_active(3));
    }

    #[test]
    fn select_unknown_tab_is_ignored() {
        let mut tabs = TabSet::new(vec![1, 2, 3], 1);
        assert!(!tabs.select(9));
        assert_eq!(tabs.active(), 1);
    }
}
