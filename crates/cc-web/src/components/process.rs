use leptos::prelude::*;

use crate::components::Reveal;

struct ProcessStep {
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

static STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Audit & Strategy (Week 1)",
        description: "We conduct a full signal survey and asset audit of your entire portfolio to \
                      determine the best connectivity options for each site.",
        accent: "#f97316",
    },
    ProcessStep {
        title: "Resident Engagement (Week 2)",
        description: "Our liaison team sends out letters and holds drop-in sessions to explain \
                      the change to residents, answering their fears and questions.",
        accent: "#3b82f6",
    },
    ProcessStep {
        title: "Deployment & Training (Week 3)",
        description: "Engineers install the new units. We don't leave until the resident has \
                      performed a test call and is comfortable with the new button.",
        accent: "#10b981",
    },
];

/// Numbered three-step migration rail.
#[component]
pub fn MigrationProcess() -> impl IntoView {
    view! {
        <section class="process">
            <h2 class="process-heading">"The Migration Process"</h2>

            <div class="process-steps">
                {STEPS.iter().enumerate().map(|(index, step)| view! {
                    <Reveal class="process-step" delay_ms={index as u32 * 150}>
                        <div class="step-marker" style=format!("--accent: {}", step.accent)>
                            {(index + 1).to_string()}
                        </div>
                        <div class="step-body">
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    </Reveal>
                }).collect_view()}
            </div>
        </section>
    }
}
