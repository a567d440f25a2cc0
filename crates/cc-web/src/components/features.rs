use leptos::prelude::*;

use crate::components::Reveal;

struct FeatureCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: "⚡",
        title: "48-Hour Remediation",
        description: "Deploy wireless overlay systems across your entire portfolio in just 48 \
                      hours. No rewiring, no construction, no delays.",
    },
    FeatureCard {
        icon: "📡",
        title: "Native IP Technology",
        description: "Smart Hub units connect directly to 4G networks, bypassing unreliable \
                      analogue-to-digital conversion entirely.",
    },
    FeatureCard {
        icon: "🔒",
        title: "Compliance Guaranteed",
        description: "Meet Building Safety Act 2022 and Awaab's Law requirements with full \
                      life-safety compliance documentation.",
    },
    FeatureCard {
        icon: "👵",
        title: "Automated Check-Ins",
        description: "Daily automated 'I'm OK' presses give families peace of mind and reduce \
                      unnecessary wellbeing calls.",
    },
    FeatureCard {
        icon: "📊",
        title: "Real-Time Monitoring",
        description: "Track signal status, battery levels, and call completion rates across your \
                      entire portfolio in one dashboard.",
    },
    FeatureCard {
        icon: "💷",
        title: "Cost-Effective",
        description: "90% cheaper than hardwired rewiring. No contractor fees, no tenant \
                      displacement, no extended project timelines.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <Reveal class="section-header">
                <span class="eyebrow">"The Solution"</span>
                <h2>"Wireless Overlay That Actually Works"</h2>
                <p>
                    "Our wireless solution addresses every pain point of the digital switchover \
                     – from speed to cost to compliance."
                </p>
            </Reveal>

            <div class="card-grid">
                {FEATURES.iter().enumerate().map(|(index, card)| view! {
                    <Reveal class="feature-card" delay_ms={index as u32 * 100}>
                        <span class="card-icon" aria-hidden="true">{card.icon}</span>
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                    </Reveal>
                }).collect_view()}
            </div>
        </section>
    }
}
