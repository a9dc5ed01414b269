use gloo_timers::callback::Interval;
use log::{debug, warn};
use yew::prelude::*;

use crate::carousel::{AdvancePolicy, Carousel, ManualNav};
use crate::dom;

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub caption: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct ScreenshotCarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub policy: AdvancePolicy,
}

pub enum CarouselMsg {
    Tick,
    Navigate(ManualNav),
}

pub struct ScreenshotCarousel {
    carousel: Carousel,
    // Dropping the handle cancels the interval.
    ticker: Option<Interval>,
}

impl ScreenshotCarousel {
    fn start_ticker(ctx: &Context<Self>) -> Option<Interval> {
        if ctx.props().slides.is_empty() {
            return None;
        }
        let link = ctx.link().clone();
        Some(Interval::new(ctx.props().policy.interval_ms, move || {
            link.send_message(CarouselMsg::Tick)
        }))
    }
}

impl Component for ScreenshotCarousel {
    type Message = CarouselMsg;
    type Properties = ScreenshotCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            carousel: Carousel::for_slides(&ctx.props().slides),
            ticker: Self::start_ticker(ctx),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().slides.len() != self.carousel.len() {
            self.carousel = Carousel::for_slides(&ctx.props().slides);
        }
        if ctx.props().policy != old_props.policy || self.ticker.is_none() {
            self.ticker = Self::start_ticker(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CarouselMsg::Tick => {
                if !ctx.props().policy.advances_on_tick(dom::document_hidden()) {
                    return false;
                }
                self.carousel.next_slide();
            }
            CarouselMsg::Navigate(nav) => {
                let result = self.carousel.navigate(nav);
                if ctx.props().policy.restarts_after(result.is_ok()) {
                    self.ticker = Self::start_ticker(ctx);
                }
                if let Err(e) = result {
                    warn!("Ignoring carousel jump: {}", e);
                    return false;
                }
            }
        }
        debug!("Carousel showing slide {:?}", self.carousel.active_index());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let slides = &ctx.props().slides;
        if slides.is_empty() {
            return html! { <div class="screenshot-carousel empty"></div> };
        }

        html! {
            <div class="screenshot-carousel">
                <div class="carousel-viewport">
                    <div class="carousel-track" style={format!("transform: {};", self.carousel.track_transform())}>
                        { for slides.iter().enumerate().map(|(i, slide)| html! {
                            <div class={self.carousel.slide_class(i)}>
                                <img src={slide.src.clone()} alt={slide.alt.clone()} loading="lazy" />
                                <p class="slide-caption">{ slide.caption.clone() }</p>
                            </div>
                        }) }
                    </div>
                </div>
                <button class="carousel-btn prev" aria-label="Previous screenshot"
                    onclick={ctx.link().callback(|_| CarouselMsg::Navigate(ManualNav::Previous))}>
                    <ion-icon name="chevron-back-outline"></ion-icon>
                </button>
                <button class="carousel-btn next" aria-label="Next screenshot"
                    onclick={ctx.link().callback(|_| CarouselMsg::Navigate(ManualNav::Next))}>
                    <ion-icon name="chevron-forward-outline"></ion-icon>
                </button>
                <div class="carousel-dots">
                    { for self.carousel.indicators().map(|dot| {
                        let position = dot.position;
                        html! {
                            <button
                                type="button"
                                class={dot.class}
                                aria-label={dot.label}
                                aria-current={dot.current.then_some("true")}
                                onclick={ctx.link().callback(move |_| CarouselMsg::Navigate(ManualNav::GoTo(position)))}
                            ></button>
                        }
                    }) }
                </div>
            </div>
        }
    }
}
