use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, ContentBlock, ContentBlockData, InteractiveTimeline, PageHeader};

#[component]
pub fn Guide2027Page() -> impl IntoView {
    let why = ContentBlockData::new(
        "Why is this happening?",
        "The UK's telephone network has been powered by copper for over a century. It's old, \
         unreliable, and expensive to maintain. Openreach is retiring this ageing infrastructure \
         and replacing it with a full digital (IP) network. This modernisation is necessary, but \
         it breaks traditional analogue telecare devices.",
        "/hero-image.png",
        "Copper wiring vs fibre optic cables",
    )
    .eyebrow("The Background")
    .features([
        "Analogue lines suffer from signal degradation",
        "Replacement parts are becoming obsolete",
        "Digital offers better speed and reliability",
        "Global shift towards IP communications",
    ]);

    let risk = ContentBlockData::new(
        "The Risk to Telecare",
        "Millions of vulnerable people rely on telecare devices that were designed to work on \
         analogue lines. When connected to digital lines, these devices may fail to connect to \
         the monitoring centre, or the audio quality may be too poor to hear. This is a critical \
         life-safety risk that housing associations must address.",
        "/hero-image.png",
        "Warning sign about telecare failure",
    )
    .image_left()
    .eyebrow("Critical Risk")
    .alt_background()
    .features([
        "Signalling failures (DTMF tones distorted)",
        "Power cut vulnerability (digital lines need mains power)",
        "Liability rests with the housing provider",
        "Testing is required for every device",
    ]);

    view! {
        <Title text=format!("{} | 2027 Deadline Guide", CONFIG.name) />
        <PageHeader
            title="The digital switchover is happening."
            subtitle="By 2027, the analogue public switched telephone network (PSTN) will be \
                      switched off permanently. Here is what you need to know."
            label="2027 Deadline Guide"
        />
        <InteractiveTimeline />
        <ContentBlock block=why />
        <ContentBlock block=risk />
        <CallToAction />
    }
}
