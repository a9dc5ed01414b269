use yew::prelude::*;

use crate::carousel::AdvancePolicy;
use crate::components::anchor_link::AnchorLink;
use crate::components::email_signup::EmailSignup;
use crate::components::reveal::{LazyImage, Reveal};
use crate::components::ripple_button::RippleButton;
use crate::components::screenshot_carousel::ScreenshotCarousel;
use crate::content::{self, FEATURES, PREVIEWS, TESTIMONIALS};
use crate::effects::{self, RevealAnimation};

#[function_component(Landing)]
pub fn landing() -> Html {
    let screenshots = use_memo(|_| content::screenshots(), ());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page" id="top">
            <header class="hero">
                <div class="hero-content">
                    <h1>{content::HERO_TITLE}</h1>
                    <p class="hero-subtitle">
                        {content::HERO_SUBTITLE}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#signup">
                            <RippleButton class="btn btn-primary">{"Get Notified"}</RippleButton>
                        </AnchorLink>
                        <AnchorLink href="#features">
                            <RippleButton class="btn btn-secondary" ripple={false}>{"See Features"}</RippleButton>
                        </AnchorLink>
                    </div>
                    <div class="store-buttons">
                        <RippleButton class="store-button" ripple={false}>
                            <ion-icon name="logo-apple"></ion-icon>{" App Store"}
                        </RippleButton>
                        <RippleButton class="store-button" ripple={false}>
                            <ion-icon name="logo-google-playstore"></ion-icon>{" Google Play"}
                        </RippleButton>
                    </div>
                </div>
            </header>

            <section class="features" id="features">
                <h2>{"Everything You Need, Nothing You Don't"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal class="feature-card" animation={RevealAnimation::FadeIn} index={i} stagger_ms={effects::FEATURE_STAGGER_MS}>
                            <div
                                class="feature-icon icon-bounce"
                                style={format!("animation-delay: {};", effects::stagger_delay(i, effects::ICON_STAGGER_MS))}
                            >
                                <ion-icon name={feature.icon}></ion-icon>
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="screenshots" id="screenshots">
                <h2>{"See It in Action"}</h2>
                <ScreenshotCarousel slides={(*screenshots).clone()} policy={AdvancePolicy::default()} />
            </section>

            <section class="previews">
                { for PREVIEWS.iter().enumerate().map(|(i, preview)| html! {
                    <Reveal class="preview-phone" animation={RevealAnimation::FadeIn} index={i} stagger_ms={effects::PREVIEW_STAGGER_MS}>
                        <LazyImage src={preview.src} alt={preview.alt} />
                    </Reveal>
                }) }
            </section>

            <section class="testimonials" id="testimonials">
                <h2>{"What Early Users Say"}</h2>
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <Reveal class="testimonial-card" animation={RevealAnimation::SlideInLeft} index={i} stagger_ms={effects::TESTIMONIAL_STAGGER_MS}>
                        <blockquote>{t.quote}</blockquote>
                        <p class="testimonial-author">{t.author}</p>
                    </Reveal>
                }) }
            </section>

            <section class="signup" id="signup">
                <h2>{"Be the First to Know"}</h2>
                <p>{"Leave your email and we'll tell you when the app is out."}</p>
                <EmailSignup />
            </section>

            <footer class="footer">
                <AnchorLink href="#top" class="footer-link">{"Back to top"}</AnchorLink>
            </footer>
        </div>
    }
}
