use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, ContentBlock, ContentBlockData, MigrationProcess, PageHeader};

#[component]
pub fn DigitalMigrationPage() -> impl IntoView {
    let managed = ContentBlockData::new(
        "A Fully Managed Service",
        "We take the heavy lifting off your team. From the initial asset audit and signal survey \
         to resident communication letters and final handover, our dedicated project managers \
         handle every step.",
        "/hero-image.png",
        "Project manager with clipboard",
    )
    .image_left()
    .eyebrow("End-to-End Support")
    .features([
        "Dedicated Project Manager for every scheme",
        "Resident Liaison Officers to handle access",
        "Full asset register creation",
        "WEEE recycling of old equipment",
    ]);

    let communication = ContentBlockData::new(
        "Resident Communication",
        "Change can be scary for vulnerable residents. Our Resident Liaison Officers are trained \
         to explain the new technology simply and reassuringly. We achieve over 95% first-time \
         access rates.",
        "/hero-image.png",
        "Liaison officer talking to resident",
    )
    .eyebrow("Resident First")
    .alt_background()
    .features([
        "Plain English introduction letters",
        "On-site drop-in sessions / coffee mornings",
        "1-to-1 demonstration during installation",
        "Follow up welfare calls",
    ]);

    view! {
        <Title text=format!("{} | Managed Digital Migration", CONFIG.name) />
        <PageHeader
            title="Managed Digital Migration"
            subtitle="We don't just sell you the hardware; we manage the entire transition from \
                      analogue to digital, ensuring no resident is left behind."
            label="The Process"
        />
        <MigrationProcess />
        <ContentBlock block=managed />
        <ContentBlock block=communication />
        <CallToAction />
    }
}
