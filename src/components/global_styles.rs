use yew::prelude::*;

/// Page-wide rules the behaviors rely on: animation keyframes, reveal
/// states, theme colors and keyboard focus outlines.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <style>
            {r#"
                :root {
                    --bg: #ffffff;
                    --text: #1a1a2e;
                    --card: #f5f3ff;
                    --accent: #9C27B0;
                    --accent-soft: #A78BFA;
                }
                body.dark-mode {
                    --bg: #0f0f1a;
                    --text: #ececf5;
                    --card: #1c1a2b;
                }
                body {
                    background: var(--bg);
                    color: var(--text);
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    transition: transform 0.3s ease;
                    background: var(--bg);
                }
                .theme-toggle {
                    transition: transform 0.15s ease;
                }

                .fade-in {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .slide-in-left {
                    opacity: 0;
                    transform: translateX(-40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in.visible,
                .slide-in-left.visible {
                    opacity: 1;
                    transform: none;
                }

                .btn, .store-button, .signup-btn {
                    transition: transform 0.2s ease, background 0.3s ease;
                }
                @keyframes ripple {
                    to {
                        transform: scale(2);
                        opacity: 0;
                    }
                }

                .icon-bounce {
                    animation: iconBounce 0.6s ease-out forwards;
                    opacity: 0;
                    transform: scale(0.5);
                }
                @keyframes iconBounce {
                    0% { opacity: 0; transform: scale(0.5); }
                    50% { opacity: 1; transform: scale(1.1); }
                    100% { opacity: 1; transform: scale(1); }
                }

                .email-input {
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }

                .screenshot-carousel {
                    position: relative;
                    max-width: 360px;
                    margin: 0 auto;
                }
                .carousel-viewport {
                    overflow: hidden;
                    border-radius: 24px;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .screenshot-slide {
                    flex: 0 0 100%;
                    opacity: 0.4;
                    transition: opacity 0.5s ease;
                }
                .screenshot-slide.active {
                    opacity: 1;
                }
                .screenshot-slide img {
                    width: 100%;
                    display: block;
                }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 8px;
                    margin-top: 12px;
                }
                .dot {
                    border: none;
                    padding: 0;
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: rgba(167, 139, 250, 0.35);
                    cursor: pointer;
                }
                .dot.active {
                    background: var(--accent-soft);
                }

                img.lazy {
                    background: var(--card);
                    min-height: 120px;
                }

                .keyboard-navigation *:focus {
                    outline: 2px solid #A78BFA !important;
                    outline-offset: 2px !important;
                }
                body:not(.keyboard-navigation) *:focus {
                    outline: none !important;
                }
            "#}
        </style>
    }
}
