use crate::dom::Interval;
use flexicars_core::{next_slide, prev_slide};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub interval_ms: u32,
    #[prop_or(true)]
    pub wrap: bool,
    pub children: ChildrenWithProps<Slide>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slides {
    current: usize,
    len: usize,
    wrap: bool,
}

pub enum SlideAction {
    Next,
    Prev,
    Go(usize),
    Resize { len: usize, wrap: bool },
}

impl Reducible for Slides {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = match action {
            SlideAction::Next => next_slide(self.current, self.len, self.wrap),
            SlideAction::Prev => prev_slide(self.current, self.len, self.wrap),
            SlideAction::Go(index) => (index < self.len).then_some(index),
            SlideAction::Resize { len, wrap } if len == self.len && wrap == self.wrap => None,
            SlideAction::Resize { len, wrap } => {
                return Rc::new(Self {
                    current: self.current.min(len.saturating_sub(1)),
                    len,
                    wrap,
                });
            }
        };
        match current {
            Some(current) if current != self.current => Rc::new(Self { current, ..*self }),
            _ => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SlideProps {
    #[prop_or_default]
    pub children: Html,
}

/// One carousel page.
#[function_component(Slide)]
pub fn slide(props: &SlideProps) -> Html {
    props.children.clone()
}

/// Auto-advancing carousel with previous/next controls and indicators.
#[function_component(Carousel)]
pub fn carousel(props: &Props) -> Html {
    let len = props.children.len();
    let wrap = props.wrap;
    let slides = use_reducer(move || Slides {
        current: 0,
        len,
        wrap,
    });

    {
        let dispatcher = slides.dispatcher();
        use_effect_with((len, wrap), move |&(len, wrap)| {
            dispatcher.dispatch(SlideAction::Resize { len, wrap });
            || ()
        });
    }
    {
        let dispatcher = slides.dispatcher();
        use_effect_with((props.interval_ms, len), move |&(interval_ms, len)| {
            let timer = (len > 1 && interval_ms > 0)
                .then(|| {
                    Interval::start(interval_ms, move || dispatcher.dispatch(SlideAction::Next))
                })
                .flatten();
            move || drop(timer)
        });
    }

    let control = |action: fn() -> SlideAction| {
        let dispatcher = slides.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action()))
    };
    let on_prev = control(|| SlideAction::Prev);
    let on_next = control(|| SlideAction::Next);

    html! {
        <div id={props.id.clone()} class="carousel slide">
            <div class="carousel-indicators">
                { for (0..len).map(|index| {
                    let dispatcher = slides.dispatcher();
                    let active = index == slides.current;
                    html! {
                        <button
                            type="button"
                            class={classes!(active.then_some("active"))}
                            aria-current={active.to_string()}
                            aria-label={format!("Slide {}", index + 1)}
                            onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(SlideAction::Go(index)))}
                        ></button>
                    }
                }) }
            </div>
            <div class="carousel-inner">
                { for props.children.iter().enumerate().map(|(index, slide)| html! {
                    <div class={classes!("carousel-item", (index == slides.current).then_some("active"))}>
                        { slide }
                    </div>
                }) }
            </div>
            <button class="carousel-control-prev" type="button" onclick={on_prev}>
                <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                <span class="visually-hidden">{ "Previous" }</span>
            </button>
            <button class="carousel-control-next" type="button" onclick={on_next}>
                <span class="carousel-control-next-icon" aria-hidden="true"></span>
                <span class="visually-hidden">{ "Next" }</span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(len: usize, wrap: bool) -> Rc<Slides> {
        Rc::new(Slides {
            current: 0,
            len,
            wrap,
        })
    }

    #[test]
    fn steps_forward_and_wraps() {
        let state = slides(3, true);
        let state = state.reduce(SlideAction::Next).reduce(SlideAction::Next);
        assert_eq!(state.current, 2);
        assert_eq!(state.reduce(SlideAction::Next).current, 0);
    }

    #[test]
    fn stops_at_the_ends_without_wrap() {
        let state = slides(2, false);
        assert_eq!(Rc::clone(&state).reduce(SlideAction::Prev).current, 0);
        let last = state.reduce(SlideAction::Go(1));
        assert_eq!(last.reduce(SlideAction::Next).current, 1);
    }

    #[test]
    fn out_of_range_indicator_is_ignored() {
        let state = slides(3, true);
        assert_eq!(state.reduce(SlideAction::Go(7)).current, 0);
    }

    #[test]
    fn shrinking_clamps_the_current_slide() {
        let state = slides(4, true).reduce(SlideAction::Go(3));
        let state = state.reduce(SlideAction::Resize { len: 2, wrap: false });
        assert_eq!(state.current, 1);
        assert!(!state.wrap);
    }
}
