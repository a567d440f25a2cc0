use leptos::prelude::*;

use crate::components::Reveal;

struct Stat {
    value: &'static str,
    label: &'static str,
    description: &'static str,
    highlight: bool,
}

static STATS: &[Stat] = &[
    Stat {
        value: "21.85%",
        label: "Telecare Failure Rate",
        description: "Average failure rate for analogue systems on digital lines",
        highlight: true,
    },
    Stat {
        value: "48hrs",
        label: "Full Remediation",
        description: "Time to deploy wireless overlay across your entire portfolio",
        highlight: false,
    },
    Stat {
        value: "99.9%",
        label: "Success Rate",
        description: "Call completion rate with our native IP solution",
        highlight: false,
    },
    Stat {
        value: "£0",
        label: "Construction Costs",
        description: "No rewiring, no disruption, no contractor delays",
        highlight: false,
    },
];

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <Reveal class="section-header">
                <span class="eyebrow">"The Problem"</span>
                <h2>"Your Telecare Is Already Failing"</h2>
                <p>
                    "The digital switchover isn't coming – it's already here. Analogue telecare \
                     systems are failing on digital lines, putting residents at risk."
                </p>
            </Reveal>

            <div class="card-grid stats-grid">
                {STATS.iter().enumerate().map(|(index, stat)| {
                    let card_class = if stat.highlight { "stat-card highlight" } else { "stat-card" };
                    view! {
                        <Reveal class=card_class delay_ms={index as u32 * 100}>
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                            <span class="stat-description">{stat.description}</span>
                        </Reveal>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
