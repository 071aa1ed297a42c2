use yew::prelude::*;

use crate::components::client_logos::ClientLogos;
use crate::components::header::Header;
use crate::components::hero_card::HeroCard;
use crate::components::interactive_background::InteractiveBackground;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    let landing_css = r#"
        body {
            margin: 0;
            background: #1C1C1C;
            color: #F5F5F7;
            font-family: 'Inter', sans-serif;
        }
        .interactive-background {
            position: fixed;
            inset: 0;
            z-index: 0;
            pointer-events: none;
        }
        .landing-page {
            min-height: 100vh;
            width: 100%;
            display: flex;
            flex-direction: column;
            align-items: center;
            overflow-x: hidden;
        }
        .landing-content {
            position: relative;
            z-index: 10;
            width: 100%;
            max-width: 64rem;
            padding: 1rem 1.5rem;
            box-sizing: border-box;
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 1.5rem;
        }
        .site-logo {
            width: 600px;
            max-width: 100%;
            height: 12rem;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .site-logo img {
            width: 100%;
            height: 100%;
            object-fit: contain;
            filter: drop-shadow(0 0 25px rgba(255, 255, 255, 0.5));
            transition: transform 0.3s ease;
        }
        .site-logo img:hover {
            transform: scale(1.05);
        }
        .hero-card-wrap {
            position: relative;
            width: 100%;
        }
        .hero-card {
            position: relative;
            overflow: hidden;
            border-radius: 2rem;
            background: #1C1C1C;
            border: 1px solid rgba(245, 245, 247, 0.1);
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
            padding: 5rem;
        }
        .hero-card-bars {
            position: absolute;
            top: 0;
            left: 0;
            width: 100%;
            height: 0.5rem;
            display: flex;
            opacity: 0.8;
        }
        .hero-card-bars div {
            flex: 1;
        }
        .bar-base { background: #F5F5F7; }
        .bar-green { background: #3E7C67; }
        .bar-red { background: #A63A42; }
        .bar-dark { background: #1C1C1C; }
        .hero-card-content {
            position: relative;
            display: flex;
            flex-direction: column;
            gap: 2.5rem;
        }
        .hero-status {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            font-family: 'Orbitron', sans-serif;
            font-size: 0.75rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: #3E7C67;
        }
        .pulse-dot {
            width: 0.5rem;
            height: 0.5rem;
            border-radius: 50%;
            background: #3E7C67;
            animation: pulse 2s infinite;
        }
        .hero-card h1 {
            font-family: 'Orbitron', sans-serif;
            font-size: 3.5rem;
            line-height: 1.1;
            margin: 0;
        }
        .text-green { color: #3E7C67; }
        .text-red { color: #A63A42; }
        .hero-copy {
            font-size: 1.1rem;
            line-height: 1.7;
            font-weight: 300;
            color: rgba(245, 245, 247, 0.8);
        }
        .hero-copy strong {
            color: #F5F5F7;
            font-weight: 500;
        }
        .underline-red {
            color: #F5F5F7;
            text-decoration: underline;
            text-decoration-color: #A63A42;
            text-underline-offset: 4px;
        }
        .hero-copy blockquote {
            margin: 1rem 0;
            padding: 0.5rem 1rem;
            border-left: 2px solid #A63A42;
            background: rgba(245, 245, 247, 0.05);
            font-style: italic;
            color: #F5F5F7;
        }
        .hero-actions {
            display: flex;
            justify-content: flex-end;
            align-items: center;
            gap: 1rem;
        }
        .hero-hint {
            font-family: 'Orbitron', sans-serif;
            font-size: 0.75rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: rgba(245, 245, 247, 0.4);
        }
        .hero-cta {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 1rem 2rem;
            border-radius: 0.75rem;
            border: 1px solid rgba(245, 245, 247, 0.1);
            background: #A63A42;
            color: #F5F5F7;
            font-family: 'Orbitron', sans-serif;
            font-size: 1.1rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            cursor: pointer;
            box-shadow: 0 10px 30px -10px rgba(166, 58, 66, 0.6);
            transition: all 0.3s ease;
        }
        .hero-cta:hover {
            transform: scale(1.02);
            box-shadow: 0 20px 40px -10px rgba(166, 58, 66, 0.8);
        }
        .hero-cta-arrow {
            background: rgba(28, 28, 28, 0.2);
            padding: 0.25rem;
            border-radius: 0.25rem;
        }
        .client-logos {
            width: 100%;
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 3rem;
            align-items: center;
            padding: 0 1rem;
            box-sizing: border-box;
        }
        .client-logo {
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 1rem;
        }
        .client-logo img {
            height: 3.5rem;
            width: auto;
            object-fit: contain;
            filter: grayscale(1) brightness(1.5);
            opacity: 0.8;
            transition: all 0.3s ease;
        }
        .client-logo img:hover {
            filter: none;
            opacity: 1;
            transform: scale(1.05);
        }
        .footer-bars {
            position: fixed;
            bottom: 1rem;
            right: 1.5rem;
            z-index: 10;
            display: flex;
            gap: 0.5rem;
            opacity: 0.5;
        }
        .footer-bars div {
            width: 0.5rem;
            height: 2rem;
        }
        @keyframes pulse {
            50% { opacity: 0.4; }
        }
        @media (max-width: 1024px) {
            .footer-bars {
                display: none;
            }
        }
        @media (max-width: 768px) {
            .hero-card {
                padding: 2rem;
            }
            .hero-card h1 {
                font-size: 2.25rem;
            }
            .hero-hint {
                display: none;
            }
            .client-logos {
                grid-template-columns: repeat(2, 1fr);
                gap: 2rem;
            }
            .client-logo img {
                height: 2.5rem;
            }
        }
    "#;
    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <InteractiveBackground />
            <div class="landing-content">
                <Header />
                <HeroCard />
                <ClientLogos />
            </div>
            <div class="footer-bars">
                <div class="bar-red"></div>
                <div class="bar-base"></div>
                <div class="bar-green"></div>
            </div>
        </div>
    }
}
