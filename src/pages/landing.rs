use log::info;
use yew::prelude::*;

use crate::effects::smooth_scroll::ScrollDriver;
use crate::effects::{dropdown, hero, progress_ring, reveal, scroll_stylers};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Bind all page behavior once the markup is in the document, and tear
    // it down if the page ever unmounts. Each component checks its own
    // elements and backs out on its own; a missing section never blocks the
    // rest of the page.
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            info!("Landing mounted, binding page effects");

            let scroll = ScrollDriver::new();
            let dropdown = dropdown::init(&document, scroll.clone());
            let hero = hero::start(&document);
            let stylers = scroll_stylers::init(&document);
            progress_ring::inject_gradient(&document);
            let reveals: Vec<_> = [
                reveal::feature_cards(&document),
                reveal::steps(&document),
                reveal::problem_image(&document),
                progress_ring::init(&document),
            ]
            .into_iter()
            .flatten()
            .collect();

            move || {
                drop(dropdown);
                drop(hero);
                drop(stylers);
                drop(reveals);
            }
        },
        (),
    );

    html! {
        <div class="landing-page">
            <nav class="navbar">
                <a class="nav-logo" href="/">{"Ignite"}</a>
                <button id="menu-button" class="menu-button" aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="dropdown-menu" class="dropdown-menu">
                    <a href="#problem">{"Why Ignite"}</a>
                    <a href="#features">{"Features"}</a>
                    <a href="#how-it-works">{"How It Works"}</a>
                    <a href="#download">{"Download"}</a>
                </div>
            </nav>

            <header class="hero">
                <div class="gradient-orb"></div>
                <div class="gradient-orb"></div>
                <div class="gradient-orb"></div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        <span id="typing-text"></span>
                        {" "}
                        <span id="count-number"></span>
                        {" "}
                        <span id="days-text"></span>
                    </h1>
                    <p id="hero-tagline">
                        {"One small habit a day. Ignite tracks the streak and keeps the fire lit."}
                    </p>
                    <img id="hero-image" src="/assets/hero-phones.png"
                        alt="Ignite app showing a 70-day streak" />
                    <a id="download-ignite-button" class="hero-cta" href="#download">
                        {"Download Ignite"}
                    </a>
                </div>
            </header>

            <section id="problem" class="problem-section">
                <h2>{"Motivation fades. Systems don't."}</h2>
                <p>
                    {"Most habit apps assume you'll stay excited. Ignite assumes you won't, \
                      and builds the streak pressure that carries you through week three."}
                </p>
                <img id="problem-image" src="/assets/abandoned-goals.png"
                    alt="Chart of habit apps abandoned after three weeks" />
            </section>

            <section id="features" class="features-section">
                <h2>{"Built for the days you don't feel like it"}</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>{"One habit at a time"}</h3>
                        <p>{"No dashboards of guilt. Pick the habit that matters and give it 70 days."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Streak insurance"}</h3>
                        <p>{"Life happens. Bank up to two rest days a month without breaking the chain."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Tiny daily check-in"}</h3>
                        <p>{"Ten seconds to log. The app stays out of the way so the habit stays in it."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Proof you changed"}</h3>
                        <p>{"A day-70 report of every check-in, slip, and save - yours to keep."}</p>
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works-section">
                <h2>{"How it works"}</h2>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">{"1"}</span>
                        <p>{"Choose one habit and the minimum version of it you can do on a bad day."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"2"}</span>
                        <p>{"Check in daily. Ignite charts the streak and warns you before it cools."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"3"}</span>
                        <p>{"Reach day 70 with the habit running on rails, not on willpower."}</p>
                    </div>
                </div>
                <div class="phone-mockup">
                    <svg class="progress-svg" viewBox="0 0 100 100">
                        <circle class="progress-track" cx="50" cy="50" r="45" />
                        <circle class="progress-bar" cx="50" cy="50" r="45"
                            stroke="url(#gradient)" />
                    </svg>
                    <span class="mockup-label">{"Day 46 of 70"}</span>
                </div>
            </section>

            <section id="download" class="download-section">
                <h2>{"Start day one today"}</h2>
                <a class="store-badge" href="/download">{"Get Ignite"}</a>
            </section>

            <footer class="footer">
                <p>{"© 2025 Ignite"}</p>
            </footer>
        </div>
    }
}
