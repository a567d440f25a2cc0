use leptos::prelude::*;

use crate::components::Reveal;

struct Risk {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static RISKS: &[Risk] = &[
    Risk {
        icon: "📵",
        title: "Connection Failures",
        description: "Analogue protocols (DTMF) distort on digital lines. Alarm calls will simply \
                      fail to connect to the ARC.",
    },
    Risk {
        icon: "🔌",
        title: "No Power, No Service",
        description: "Digital lines require mains power. In a blackout, your residents have zero \
                      way to call for help.",
    },
    Risk {
        icon: "⚠",
        title: "Legal Liability",
        description: "Housing providers are legally responsible for ensuring life-safety equipment \
                      remains functional.",
    },
    Risk {
        icon: "💷",
        title: "Unlimited Fines",
        description: "Corporate manslaughter charges and unlimited fines apply if negligence leads \
                      to a resident death.",
    },
];

#[component]
pub fn RiskSection() -> impl IntoView {
    view! {
        <section class="risk-section">
            <div class="section-header">
                <span class="eyebrow">"The Reality of Inaction"</span>
                <h2>
                    "The Copper Network is Being Cut."
                    <br />
                    <span class="danger">"Your Alarms Will Fail."</span>
                </h2>
                <p>
                    "This isn't a future problem. It's happening now. Without a digital upgrade, \
                     your residents are left vulnerable and your organisation exposed."
                </p>
            </div>

            <div class="card-grid">
                {RISKS.iter().enumerate().map(|(index, risk)| view! {
                    <Reveal class="risk-card" delay_ms={index as u32 * 100}>
                        <div class="card-icon" aria-hidden="true">{risk.icon}</div>
                        <h3>{risk.title}</h3>
                        <p>{risk.description}</p>
                    </Reveal>
                }).collect_view()}
            </div>

            <Reveal class="solution-callout" delay_ms=400>
                <div class="callout-text">
                    <h3>"There are only two ways to fix this."</h3>
                    <p>
                        "You can rewire your entire building (Manual Construction) OR install a \
                         Wireless Overlay."
                    </p>
                </div>
                <a href="#comparison" class="callout-button">"Compare Options"</a>
            </Reveal>
        </section>
    }
}
