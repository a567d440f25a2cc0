use leptos::prelude::*;

use crate::components::Reveal;

pub struct TimelineEvent {
    pub year: u16,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub impact: &'static str,
}

pub static TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: 2023,
        title: "Stop Sell (National)",
        summary: "BT stops selling new analogue lines across the UK. You can only buy digital.",
        details: "The 'Stop Sell' came into full force in September 2023. This means no new \
                  analogue PSTN lines can be ordered. Housing associations building new schemes \
                  must install digital-first telecare.",
        impact: "New builds affected immediately.",
    },
    TimelineEvent {
        year: 2024,
        title: "Testing Phase",
        summary: "Housing associations urged to start testing telecare kit on digital lines.",
        details: "With the network transition underway, existing analogue alarms are starting to \
                  fail more frequently due to voltage drops and packet loss on digital lines. \
                  Testing your current estate is critical.",
        impact: "Failure rates on analogue calls rising.",
    },
    TimelineEvent {
        year: 2025,
        title: "Forced Migration",
        summary: "Mass migration of residential lines begins. Vulnerable users at risk if not \
                  upgraded.",
        details: "Communication providers are aggressively migrating customers to digital voice \
                  services, region by region. Residents may be switched over without realising \
                  their alarm will stop working.",
        impact: "High risk of service failure for dispersed units.",
    },
    TimelineEvent {
        year: 2027,
        title: "The Switch Off",
        summary: "The PSTN network is permanently powered down. Analogue alarms will cease to \
                  function.",
        details: "The absolute deadline. The copper network will be deactivated. Any device \
                  relying on analogue tones (DTMF) will become functionally obsolete.",
        impact: "Critical life-safety risk.",
    },
];

/// Vertical switchover timeline; one event's detail panel open at a time.
#[component]
pub fn InteractiveTimeline() -> impl IntoView {
    let (expanded, set_expanded) = signal(None::<usize>);
    let last = TIMELINE.len() - 1;

    view! {
        <section class="timeline">
            <h2 class="timeline-heading">"The Countdown"</h2>

            <div class="timeline-rail">
                {TIMELINE.iter().enumerate().map(|(index, event)| {
                    let terminal = index == last;
                    view! {
                        <Reveal class="timeline-event" delay_ms={index as u32 * 150}>
                            <button
                                class="timeline-dot"
                                class:terminal=terminal
                                class:open=move || expanded.get() == Some(index)
                                on:click=move |_| set_expanded.update(|current| {
                                    *current = if *current == Some(index) { None } else { Some(index) };
                                })
                                aria-label=format!("Expand details for {}", event.year)
                            ></button>

                            <div
                                class="timeline-body"
                                on:click=move |_| set_expanded.update(|current| {
                                    *current = if *current == Some(index) { None } else { Some(index) };
                                })
                            >
                                <span class="timeline-year" class:terminal=terminal>
                                    {event.year.to_string()}
                                </span>
                                <h3>{event.title}</h3>
                                <p>{event.summary}</p>
                            </div>

                            <Show when=move || expanded.get() == Some(index)>
                                <div class="timeline-details">
                                    <p>{event.details}</p>
                                    <div class="timeline-impact">
                                        <span class="impact-label">"IMPACT:"</span>
                                        <span>{event.impact}</span>
                                    </div>
                                </div>
                            </Show>
                        </Reveal>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_in_chronological_order() {
        for pair in TIMELINE.windows(2) {
            assert!(pair[0].year < pair[1].year);
        }
    }

    #[test]
    fn timeline_ends_at_the_switch_off() {
        assert_eq!(TIMELINE.last().map(|event| event.year), Some(2027));
    }
}
