use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::components::ripple_button::RippleButton;
use crate::config;
use crate::signup::{self, FeedbackAction, SignupFeedback};

#[function_component(EmailSignup)]
pub fn email_signup() -> Html {
    let email = use_state(String::new);
    let feedback = use_reducer(SignupFeedback::default);
    // Pending reverts; replacing one cancels only that half's timer.
    let button_reset: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let input_reset: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let submit = {
        let email = email.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: ()| {
            let (action, reset, slot, delay) = match signup::validate_signup(&email) {
                Ok(address) => {
                    // Nothing is sent anywhere yet.
                    gloo_console::log!("Simulated signup for", address);
                    email.set(String::new());
                    (
                        FeedbackAction::Subscribed,
                        FeedbackAction::ResetButton,
                        &button_reset,
                        config::SIGNUP_SUCCESS_RESET_MS,
                    )
                }
                Err(e) => {
                    log::debug!("Signup rejected: {}", e);
                    (
                        FeedbackAction::Rejected,
                        FeedbackAction::ResetInput,
                        &input_reset,
                        config::SIGNUP_ERROR_RESET_MS,
                    )
                }
            };
            feedback.dispatch(action);

            let feedback = feedback.clone();
            *slot.borrow_mut() = Some(Timeout::new(delay, move || feedback.dispatch(reset)));
        })
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onkeypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let (icon, label) = feedback.button.label();

    html! {
        <div class="email-signup">
            <input
                type="email"
                class="email-input"
                placeholder="Enter your email"
                value={(*email).clone()}
                style={feedback.input.style()}
                {oninput}
                {onkeypress}
            />
            <RippleButton
                class="signup-btn"
                style={format!("background: {};", feedback.button.background())}
                {onclick}
                lift={false}
            >
                <ion-icon name={icon}></ion-icon>
                {" "}{label}
            </RippleButton>
        </div>
    }
}
