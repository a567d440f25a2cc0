use leptos::prelude::*;
use leptos_router::components::A;
use shared::CONFIG;

use crate::components::{CountdownTimer, Reveal};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="header-bg-grid" aria-hidden="true"></div>
            <div class="hero-container">
                <div class="hero-columns">
                    <Reveal class="hero-text">
                        <div class="hero-badge">
                            <span aria-hidden="true">"⚡"</span>
                            "2027 Digital Switchover Compliance"
                        </div>

                        <h1 class="hero-headline">
                            "Stop the 2027"
                            <br />
                            <span class="hero-accent">"Liability Crisis"</span>
                        </h1>

                        <p class="hero-subheadline">
                            "Ensure your telecare services are fully compliant ahead of the UK's \
                             digital switchover deadline. Our wireless overlay solution remediates \
                             your entire portfolio in 48 hours."
                        </p>

                        <div class="hero-countdown">
                            <CountdownTimer show_label=true />
                        </div>

                        <div class="hero-ctas">
                            <A href="/contact" attr:class="primary-cta">"Free Signal Audit →"</A>
                            <A href="/resources/2027-guide" attr:class="secondary-cta">
                                "Learn About The Switchover"
                            </A>
                        </div>
                    </Reveal>

                    <Reveal class="hero-image" delay_ms=300>
                        <img
                            src="/hero-image.png"
                            alt="Care worker providing support to elderly woman wearing telecare pendant"
                        />
                        <div class="hero-floating-badge">
                            <span aria-hidden="true">"✓"</span>
                            <strong>"100%"</strong>
                            " Compliance Guaranteed"
                        </div>
                    </Reveal>
                </div>

                // Trust logo marquee, doubled for a seamless loop
                <Reveal class="logo-marquee" delay_ms=600>
                    <span class="marquee-label">"Trusted by UK Housing Associations"</span>
                    <div class="marquee-track">
                        {CONFIG
                            .trust_badges
                            .iter()
                            .chain(CONFIG.trust_badges.iter())
                            .map(|badge| view! { <span class="logo-item">{*badge}</span> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
