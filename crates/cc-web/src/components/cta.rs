use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{CountdownTimer, Reveal};

/// Closing call-to-action band. Every page ends with one.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <Reveal class="cta-content">
                <div class="cta-countdown">
                    <CountdownTimer dark=true show_label=true />
                </div>

                <h2 class="cta-title">"Don't Wait Until January 2027"</h2>
                <p class="cta-subtitle">
                    "Book your free Volumetric Signal Audit today. We'll assess your entire \
                     portfolio and show you exactly how to achieve 100% compliance."
                </p>

                <A href="/contact" attr:class="cta-button">
                    "Get Your Free Signal Audit"
                    <span aria-hidden="true">" →"</span>
                </A>

                <p class="cta-disclaimer">
                    "No obligation. No sales pressure. Just actionable insights for your portfolio."
                </p>
            </Reveal>
        </section>
    }
}
