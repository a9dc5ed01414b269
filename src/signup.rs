use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use yew::functional::Reducible;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const IDLE_BACKGROUND: &str = "linear-gradient(135deg, #9C27B0, #A78BFA)";
pub const SUBSCRIBED_BACKGROUND: &str = "linear-gradient(135deg, #10B981, #34D399)";
pub const ERROR_BORDER: &str = "#EF4444";
pub const ERROR_RING: &str = "0 0 0 3px rgba(239, 68, 68, 0.2)";
pub const IDLE_BORDER: &str = "rgba(255, 255, 255, 0.2)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("please enter an email address")]
    Empty,
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trims the raw input and returns the address to subscribe.
pub fn validate_signup(raw: &str) -> Result<String, SignupError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(SignupError::Empty);
    }
    if !is_valid_email(email) {
        return Err(SignupError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_string())
}

/// State of the submit button. Reverts on its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonFeedback {
    #[default]
    NotifyMe,
    Subscribed,
}

impl ButtonFeedback {
    pub fn background(self) -> &'static str {
        match self {
            ButtonFeedback::NotifyMe => IDLE_BACKGROUND,
            ButtonFeedback::Subscribed => SUBSCRIBED_BACKGROUND,
        }
    }

    /// Icon name and label.
    pub fn label(self) -> (&'static str, &'static str) {
        match self {
            ButtonFeedback::NotifyMe => ("mail-outline", "Notify Me"),
            ButtonFeedback::Subscribed => ("checkmark-outline", "Subscribed!"),
        }
    }
}

/// State of the email input. Reverts on its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFeedback {
    #[default]
    Neutral,
    Invalid,
}

impl InputFeedback {
    pub fn style(self) -> String {
        match self {
            InputFeedback::Invalid => format!("border-color: {}; box-shadow: {};", ERROR_BORDER, ERROR_RING),
            InputFeedback::Neutral => format!("border-color: {}; box-shadow: none;", IDLE_BORDER),
        }
    }
}

pub enum FeedbackAction {
    Subscribed,
    Rejected,
    ResetButton,
    ResetInput,
}

/// Button and input feedback of the signup form. Each half only changes
/// through its own actions, so overlapping submits never cut the other
/// half's display short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignupFeedback {
    pub button: ButtonFeedback,
    pub input: InputFeedback,
}

impl Reducible for SignupFeedback {
    type Action = FeedbackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            FeedbackAction::Subscribed => next.button = ButtonFeedback::Subscribed,
            FeedbackAction::Rejected => next.input = InputFeedback::Invalid,
            FeedbackAction::ResetButton => next.button = ButtonFeedback::NotifyMe,
            FeedbackAction::ResetInput => next.input = InputFeedback::Neutral,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "plain", "no-at.example.com", "a@b", "a@@b.c", "a b@c.d", "@b.c", "a@.c"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn validation_trims_input() {
        assert_eq!(validate_signup("  ada@example.com \n").unwrap(), "ada@example.com");
    }

    #[test]
    fn validation_reports_reason() {
        assert_eq!(validate_signup("   "), Err(SignupError::Empty));
        assert_eq!(
            validate_signup(" nope "),
            Err(SignupError::InvalidEmail("nope".to_string()))
        );
    }

    fn apply(feedback: SignupFeedback, actions: Vec<FeedbackAction>) -> SignupFeedback {
        *actions
            .into_iter()
            .fold(Rc::new(feedback), |state, action| state.reduce(action))
    }

    #[test]
    fn feedback_drives_presentation() {
        let idle = SignupFeedback::default();
        assert_eq!(idle.button.label().1, "Notify Me");
        assert_eq!(idle.button.background(), IDLE_BACKGROUND);
        assert!(idle.input.style().contains("box-shadow: none"));
        assert_eq!(ButtonFeedback::Subscribed.label(), ("checkmark-outline", "Subscribed!"));
        assert_eq!(ButtonFeedback::Subscribed.background(), SUBSCRIBED_BACKGROUND);
        assert!(InputFeedback::Invalid.style().contains(ERROR_BORDER));
    }

    #[test]
    fn rejected_submit_keeps_subscribed_button() {
        let state = apply(
            SignupFeedback::default(),
            vec![FeedbackAction::Subscribed, FeedbackAction::Rejected],
        );
        assert_eq!(state.button, ButtonFeedback::Subscribed);
        assert_eq!(state.input, InputFeedback::Invalid);

        // Error border clears on its own schedule; button still shows success.
        let state = apply(state, vec![FeedbackAction::ResetInput]);
        assert_eq!(state.button, ButtonFeedback::Subscribed);
        assert_eq!(state.input, InputFeedback::Neutral);
    }

    #[test]
    fn accepted_submit_keeps_error_border() {
        let state = apply(
            SignupFeedback::default(),
            vec![FeedbackAction::Rejected, FeedbackAction::Subscribed],
        );
        assert_eq!(state.input, InputFeedback::Invalid);

        let state = apply(state, vec![FeedbackAction::ResetButton]);
        assert_eq!(state.button, ButtonFeedback::NotifyMe);
        assert_eq!(state.input, InputFeedback::Invalid);
    }
}
