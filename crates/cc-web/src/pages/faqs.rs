use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, PageHeader};

struct FaqItem {
    question: &'static str,
    answer: &'static str,
}

struct FaqCategory {
    title: &'static str,
    items: &'static [FaqItem],
}

static FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        title: "Installation & Disruption",
        items: &[
            FaqItem {
                question: "How long does installation really take?",
                answer: "We average 45-60 minutes per residential unit. A team of two engineers \
                         can upgrade a block of 30 flats in less than two days. We pre-configure \
                         everything off-site so it's just a case of plug-and-play installation.",
            },
            FaqItem {
                question: "Is there a lot of disruption for residents?",
                answer: "Very minimal. Because our system is wireless, we don't need to chase \
                         cables through walls or lift carpets. We simply replace the old unit \
                         with the new Smart Hub, demonstrate how to use it, and leave. No dust, \
                         no noise, no mess.",
            },
            FaqItem {
                question: "Do you need access to every flat?",
                answer: "Yes, we need momentary access to swap the unit. However, our resident \
                         liaison team handles all the scheduling and communication letters for \
                         you, often achieving 98%+ access rates on the first visit.",
            },
        ],
    },
    FaqCategory {
        title: "Technical & Reliability",
        items: &[
            FaqItem {
                question: "What happens if there is a power cut?",
                answer: "The Smart Hub has a 40+ hour backup battery that kicks in automatically. \
                         This is far superior to many digital hubs that only offer 1-4 hours of \
                         backup.",
            },
            FaqItem {
                question: "Does it work in areas with poor signal?",
                answer: "Yes. We use roaming SIMs that connect to all four major UK networks. The \
                         device automatically picks the strongest signal, and we perform a signal \
                         audit before any installation to ensure coverage is sufficient.",
            },
            FaqItem {
                question: "Can we keep using our existing pendants?",
                answer: "In most cases, yes. The Smart Hub is compatible with a wide range of \
                         existing peripherals, so residents can often keep their familiar \
                         triggers. We will verify compatibility during the audit.",
            },
        ],
    },
    FaqCategory {
        title: "Costs & Contracts",
        items: &[
            FaqItem {
                question: "Is this cheaper than hardwiring?",
                answer: "Significantly. A typical hardwired system replacement can cost \
                         £1,500-£2,500 per flat due to redecoration and cabling labour. Our \
                         wireless overlay solution is typically 80-90% cheaper upfront.",
            },
            FaqItem {
                question: "Is there an ongoing cost?",
                answer: "Yes, there is a small monthly SIM and platform fee per device. However, \
                         this is often offset by the savings on analogue telephone line rentals, \
                         which are no longer required.",
            },
        ],
    },
];

#[component]
pub fn FaqPage() -> impl IntoView {
    // One open answer at a time, addressed by (category, item).
    let (open, set_open) = signal(None::<(usize, usize)>);

    view! {
        <Title text=format!("{} | FAQs", CONFIG.name) />
        <PageHeader
            title="Frequently Asked Questions"
            subtitle="Common questions about the switchover, the hardware, and the costs."
            label="Resources"
        />

        <section class="faqs">
            {FAQ_CATEGORIES.iter().enumerate().map(|(cat_index, category)| view! {
                <div class="faq-category">
                    <h2>{category.title}</h2>
                    <div class="faq-list">
                        {category.items.iter().enumerate().map(|(item_index, item)| {
                            let key = (cat_index, item_index);
                            view! {
                                <div class="faq-item">
                                    <button
                                        class="faq-question"
                                        aria-expanded=move || (open.get() == Some(key)).to_string()
                                        on:click=move |_| set_open.update(|current| {
                                            *current = if *current == Some(key) { None } else { Some(key) };
                                        })
                                    >
                                        {item.question}
                                        <span class="chevron" aria-hidden="true">"▾"</span>
                                    </button>
                                    <Show when=move || open.get() == Some(key)>
                                        <p class="faq-answer">{item.answer}</p>
                                    </Show>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            }).collect_view()}
        </section>

        <CallToAction />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_questions() {
        for category in FAQ_CATEGORIES {
            assert!(!category.items.is_empty(), "{} is empty", category.title);
            for item in category.items {
                assert!(item.question.ends_with('?'));
                assert!(!item.answer.is_empty());
            }
        }
    }
}
