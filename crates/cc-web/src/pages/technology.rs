use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, PageHeader, Reveal};

struct GalleryImage {
    src: &'static str,
    label: &'static str,
}

static GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/hub-front.png", label: "Smart Hub" },
    GalleryImage { src: "/hub-angle.png", label: "Hub (Angle)" },
    GalleryImage { src: "/pendant.png", label: "Standard Pendant" },
    GalleryImage { src: "/fall-detector.png", label: "Fall Detector" },
    GalleryImage { src: "/wall-button.png", label: "Wall Pull Cord" },
    GalleryImage { src: "/bed-occupancy.png", label: "Bed Mat" },
    GalleryImage { src: "/smoke-detector.png", label: "Smoke Detector" },
];

struct HubFeature {
    icon: &'static str,
    label: &'static str,
    description: &'static str,
}

static HUB_FEATURES: &[HubFeature] = &[
    HubFeature {
        icon: "🔋",
        label: "60hr Battery",
        description: "Uninterrupted protection during power outages.",
    },
    HubFeature {
        icon: "📶",
        label: "Dual-SIM 4G",
        description: "Roams across all major UK networks for 99.9% uptime.",
    },
    HubFeature {
        icon: "✅",
        label: "Daily Check-In",
        description: "Simple 'I'm OK' button confirms resident wellbeing.",
    },
    HubFeature {
        icon: "🔊",
        label: "High-Fi Audio",
        description: "Crystal clear communication with monitoring staff.",
    },
];

struct ProductFaq {
    question: &'static str,
    answer: &'static str,
}

static PRODUCT_FAQS: &[ProductFaq] = &[
    ProductFaq {
        question: "Is cellular connectivity resilient?",
        answer: "Yes. The hub uses dual roaming SIM cards with automatic failover across EE, \
                 Vodafone, Three, and O2.",
    },
    ProductFaq {
        question: "Can residents keep their existing pendants?",
        answer: "In most cases, yes. The hub's Class 1 receiver is compatible with a wide range \
                 of existing peripherals; we verify compatibility during the audit.",
    },
    ProductFaq {
        question: "How is device health tracked?",
        answer: "Every hub sends a heartbeat to the monitoring platform every 2 minutes. A missed \
                 heartbeat raises an alert before a resident ever notices a fault.",
    },
];

#[component]
pub fn TechnologyPage() -> impl IntoView {
    let (active_image, set_active_image) = signal(0usize);
    let (open_faq, set_open_faq) = signal(None::<usize>);

    view! {
        <Title text=format!("{} | Technology", CONFIG.name) />
        <PageHeader
            title="The Smart Hub"
            subtitle="The digital telecare hub at the heart of every CompliantCare installation."
            label="Technology"
        />

        <section class="technology">
            <div class="block-row">
                // Product gallery
                <div class="gallery">
                    {move || {
                        let image = &GALLERY[active_image.get().min(GALLERY.len() - 1)];
                        view! { <img class="gallery-main" src=image.src alt=image.label /> }
                    }}
                    <div class="gallery-thumbs">
                        {GALLERY.iter().enumerate().map(|(index, image)| view! {
                            <button
                                class="gallery-thumb"
                                class:active=move || active_image.get() == index
                                on:click=move |_| set_active_image.set(index)
                            >
                                {image.label}
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                // Feature cards
                <div class="block-content">
                    <span class="eyebrow">"Hardware"</span>
                    <h2>"Built for dispersed and grouped living"</h2>
                    <div class="card-grid hub-features">
                        {HUB_FEATURES.iter().enumerate().map(|(index, feature)| view! {
                            <Reveal class="feature-card" delay_ms={index as u32 * 100}>
                                <span class="card-icon" aria-hidden="true">{feature.icon}</span>
                                <h3>{feature.label}</h3>
                                <p>{feature.description}</p>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            // Product questions
            <div class="faq-list">
                <h2>"Product Questions"</h2>
                {PRODUCT_FAQS.iter().enumerate().map(|(index, faq)| view! {
                    <div class="faq-item">
                        <button
                            class="faq-question"
                            aria-expanded=move || (open_faq.get() == Some(index)).to_string()
                            on:click=move |_| set_open_faq.update(|current| {
                                *current = if *current == Some(index) { None } else { Some(index) };
                            })
                        >
                            {faq.question}
                            <span class="chevron" aria-hidden="true">"▾"</span>
                        </button>
                        <Show when=move || open_faq.get() == Some(index)>
                            <p class="faq-answer">{faq.answer}</p>
                        </Show>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <CallToAction />
    }
}
