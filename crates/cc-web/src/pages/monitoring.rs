use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, PageHeader, Reveal};

static PLATFORM_FEATURES: &[&str] = &[
    "Real-time device heartbeat monitoring",
    "Instant access to resident medical profiles",
    "Integration with Jontek & UMO platforms",
    "Automated daily 'I'm OK' checks",
];

#[component]
pub fn MonitoringPage() -> impl IntoView {
    view! {
        <Title text=format!("{} | Monitoring Services", CONFIG.name) />
        <PageHeader
            title="Monitoring Services"
            subtitle="TSA-accredited 24/7 monitoring and alarm response services."
            label="24/7 Protection"
        />

        <section class="monitoring">
            <div class="block-row">
                <div class="block-content">
                    <h2>"Intelligent Cloud Platform"</h2>
                    <p>
                        "Our ARC software isn't just a call handling system; it's a proactive \
                         analytics engine. It actively monitors device health (heartbeats), \
                         tracks battery levels, and ensures instant connection during an \
                         emergency."
                    </p>
                    <ul class="block-features">
                        {PLATFORM_FEATURES.iter().map(|item| view! {
                            <li>
                                <span class="check-icon" aria-hidden="true">"✓"</span>
                                {*item}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                // Mock ARC console
                <Reveal class="software-visual" delay_ms=200>
                    <div class="console-card">
                        <div class="console-header">
                            <span>"Resident Alert: High Priority"</span>
                            <span class="console-tag">"EMERGENCY"</span>
                        </div>
                        <div class="console-line"></div>
                        <div class="console-line short"></div>
                    </div>
                    <div class="console-status">
                        <span class="status-label">"System Status"</span>
                        <span class="status-dot" aria-hidden="true"></span>
                        <span>"All Systems Operational"</span>
                    </div>
                </Reveal>
            </div>
        </section>

        <CallToAction />
    }
}
