use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{
    CallToAction, ContentBlock, ContentBlockData, Inline, PageHeader, SystemDiagram,
};

#[component]
pub fn WirelessOverlayPage() -> impl IntoView {
    let why_overlay = ContentBlockData::new(
        "Why Choose an Overlay?",
        "Traditional hardwired system replacements are costly, disruptive, and time-consuming. \
         Our wireless overlay solution simply bypasses the old wiring, using robust 4G roaming \
         connectivity to link each resident directly to the monitoring centre.",
        "/hero-image.png",
        "Engineer installing the Smart Hub",
    )
    .image_left()
    .eyebrow("Speed & Efficiency")
    .features([
        "Installation takes just 45 minutes per flat",
        "No damage to decor or communal areas",
        "Works alongside existing door entry systems",
        "Immediate compliance with digital standards",
    ]);

    let technical_specs = ContentBlockData::new(
        "Technical Specifications",
        vec![
            Inline::text(
                "The Smart Hub is a market-leading digital telecare hub designed for dispersed \
                 living but perfect for grouped schemes. It features dual-SIM 4G roaming for \
                 maximum reliability and a 40+ hour battery backup. ",
            ),
            Inline::link("View Full Specifications →", "/about/technology"),
        ],
        "/hero-image.png",
        "Smart Hub device close up",
    )
    .eyebrow("Hardware")
    .alt_background()
    .features([
        "Dual-SIM Roaming (All Networks)",
        "40+ Hour Battery Backup",
        "Class 1 Receiver (Long Range)",
        "Heartbeat Monitoring every 2 minutes",
    ]);

    view! {
        <Title text=format!("{} | The Wireless Overlay Solution", CONFIG.name) />
        <PageHeader
            title="The Wireless Overlay Solution"
            subtitle="Upgrade your entire portfolio to digital in weeks, not years. No rewiring, \
                      no redecorating, no disruption."
            label="The Product"
        />
        <SystemDiagram />
        <ContentBlock block=why_overlay />
        <ContentBlock block=technical_specs />
        <CallToAction />
    }
}
