use leptos::prelude::*;

pub struct CaseStudyMetrics {
    pub properties: &'static str,
    pub duration: &'static str,
    pub satisfaction: &'static str,
    pub rating: u8,
}

pub struct CaseStudy {
    pub id: usize,
    pub client: &'static str,
    pub role: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub metrics: CaseStudyMetrics,
    pub accent: &'static str,
}

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        client: "G15 Housing Association",
        role: "Asset Director",
        title: "Winter Crisis Averted",
        description: "Faced with failing analogue lines in 45 schemes just before winter, this \
                      G15 member partnered with us for a rapid rollout.",
        details: "We deployed 12 engineers across London, completing the entire project in 6 \
                  weeks. The net result was zero effective downtime for residents and a 40% cost \
                  saving compared to their original hardwired quote.",
        metrics: CaseStudyMetrics {
            properties: "1,250",
            duration: "6 Weeks",
            satisfaction: "98%",
            rating: 5,
        },
        accent: "#f97316",
    },
    CaseStudy {
        id: 2,
        client: "Northern Trust",
        role: "Head of Housing",
        title: "Rural Connectivity Solved",
        description: "Dispersed rural properties were suffering from 'blackspot' connectivity \
                      issues with their simplified digital units.",
        details: "By upgrading to the Smart Hub with roaming SIMs, we achieved 99.9% uptime. The \
                  devices automatically switch between networks to find the best signal, solving \
                  a major headache for the asset management team.",
        metrics: CaseStudyMetrics {
            properties: "450",
            duration: "3 Months",
            satisfaction: "100%",
            rating: 5,
        },
        accent: "#10b981",
    },
    CaseStudy {
        id: 3,
        client: "Coastal Living",
        role: "Supported Housing Manager",
        title: "Proactive Wellbeing",
        description: "Moving from reactive alarm handling to proactive wellbeing monitoring was a \
                      key strategic goal for Coastal Living.",
        details: "We implemented the 'I'm OK' feature. Residents press a button each morning to \
                  confirm they are well. This simple change saved wardens 2 hours per day of \
                  door-knocking, letting them focus on residents who actually needed help.",
        metrics: CaseStudyMetrics {
            properties: "300",
            duration: "4 Weeks",
            satisfaction: "95%",
            rating: 5,
        },
        accent: "#3b82f6",
    },
];

/// Selectable success stories with a collapsible metrics panel.
/// Switching stories closes the panel again.
#[component]
pub fn CaseStudyCarousel() -> impl IntoView {
    let (active_id, set_active_id) = signal(CASE_STUDIES[0].id);
    let (metrics_open, set_metrics_open) = signal(false);

    let active = move || {
        CASE_STUDIES
            .iter()
            .find(|study| study.id == active_id.get())
            .unwrap_or(&CASE_STUDIES[0])
    };

    view! {
        <section class="case-studies">
            <div class="section-header">
                <h2>"Success Stories"</h2>
                <p>"See how we help housing providers achieve compliance."</p>
            </div>

            // Profile selection
            <div class="study-selector">
                {CASE_STUDIES.iter().map(|study| {
                    let id = study.id;
                    view! {
                        <button
                            class="study-profile"
                            class:active=move || active_id.get() == id
                            style=format!("--accent: {}", study.accent)
                            on:click=move |_| {
                                set_active_id.set(id);
                                set_metrics_open.set(false);
                            }
                        >
                            <span class="profile-avatar" aria-hidden="true"></span>
                            <span class="profile-client">{study.client}</span>
                            <span class="profile-role">{study.role}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            // Active card
            {move || {
                let study = active();
                view! {
                    <div class="study-card" style=format!("--accent: {}", study.accent)>
                        <span class="study-badge">{study.title}</span>
                        <h3 class="study-quote">"\u{201c}" {study.description} "\u{201d}"</h3>
                        <p class="study-details">{study.details}</p>

                        <div class="study-metrics">
                            <button
                                class="metrics-toggle"
                                on:click=move |_| set_metrics_open.update(|open| *open = !*open)
                            >
                                {move || if metrics_open.get() { "Hide Metrics" } else { "View Project Metrics" }}
                                <span class="chevron" aria-hidden="true">"▾"</span>
                            </button>

                            <Show when=move || metrics_open.get()>
                                <div class="metrics-grid">
                                    <div>
                                        <span class="metric-value">{study.metrics.properties}</span>
                                        <span class="metric-label">"PROPERTIES"</span>
                                    </div>
                                    <div>
                                        <span class="metric-value">{study.metrics.duration}</span>
                                        <span class="metric-label">"DURATION"</span>
                                    </div>
                                    <div>
                                        <span class="metric-value">{study.metrics.satisfaction}</span>
                                        <span class="metric-label">"SATISFACTION"</span>
                                    </div>
                                    <div>
                                        <span class="metric-value stars">
                                            {"★".repeat(study.metrics.rating as usize)}
                                        </span>
                                        <span class="metric-label">"RATING"</span>
                                    </div>
                                </div>
                            </Show>
                        </div>
                    </div>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn study_ids_are_unique() {
        let mut ids: Vec<_> = CASE_STUDIES.iter().map(|study| study.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CASE_STUDIES.len());
    }

    #[test]
    fn ratings_are_within_five_stars() {
        for study in CASE_STUDIES {
            assert!(
                (1..=5).contains(&study.metrics.rating),
                "{} has rating {}",
                study.client,
                study.metrics.rating
            );
        }
    }

    #[test]
    fn accents_are_hex_colors() {
        for study in CASE_STUDIES {
            assert!(study.accent.starts_with('#') && study.accent.len() == 7);
        }
    }
}
