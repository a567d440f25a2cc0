use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, CaseStudyCarousel, PageHeader};

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    view! {
        <Title text=format!("{} | Case Studies", CONFIG.name) />
        <PageHeader
            title="Success Stories"
            subtitle="See how we've helped leading housing associations navigate the digital \
                      switchover with speed and confidence."
            label="Case Studies"
        />
        <CaseStudyCarousel />
        <CallToAction />
    }
}
