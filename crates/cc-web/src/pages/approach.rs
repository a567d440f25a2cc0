use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, ContentBlock, ContentBlockData, PageHeader};

#[component]
pub fn ApproachPage() -> impl IntoView {
    let promise = ContentBlockData::new(
        "The 48-Hour Promise",
        "We understand that housing officers are under immense pressure. That's why we engineered \
         a solution that can be deployed faster than any other on the market. Our promise is \
         simple: we take a typical sheltered housing scheme from 0% to 100% compliant in just 48 \
         hours.",
        "/hero-image.png",
        "Engineers completing an installation quickly",
    )
    .eyebrow("Speed & Efficiency")
    .features([
        "Pre-configured units sent to site",
        "Dedicated rapid-response install teams",
        "No complex cabling or containment work",
        "Immediate handover and training",
    ]);

    let safety = ContentBlockData::new(
        "Safety Without Compromise",
        "Speed doesn't mean cutting corners. Our approach is built on a foundation of rigorous \
         safety standards. We use only TSA-approved equipment and monitoring centres. Every \
         installation is audited and tested before our engineers leave the site.",
        "/hero-image.png",
        "Safety compliance documentation",
    )
    .image_left()
    .eyebrow("Compliance")
    .alt_background()
    .features([
        "Full life-safety audit trail",
        "BS8591 compliant receiving centres",
        "Roaming SIMs for signal redundancy",
        "Regular automated battery health checks",
    ]);

    let resident_first = ContentBlockData::new(
        "Resident-First Design",
        "Technology should empower residents, not confuse them. We chose the Smart Hub because of \
         its intuitive design. Large high-contrast buttons, clear audio prompts, and a familiar \
         form factor mean that residents feel comfortable using the new system from day one.",
        "/hero-image.png",
        "Senior resident smiling while using the device",
    )
    .eyebrow("Usability")
    .features([
        "High contrast tactile buttons",
        "Voice-guided operation",
        "Personal pendant included",
        "Works right out of the box",
    ]);

    view! {
        <Title text=format!("{} | Our Approach", CONFIG.name) />
        <PageHeader
            title="Our Approach"
            subtitle="We believe digital transformation shouldn't cost the earth or disrupt the \
                      lives of your residents."
            label="Resident First"
        />
        <ContentBlock block=promise />
        <ContentBlock block=safety />
        <ContentBlock block=resident_first />
        <CallToAction />
    }
}
