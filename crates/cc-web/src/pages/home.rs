use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, Comparison, Features, Hero, RiskSection, Stats};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("{} | Wireless Telecare Solutions for Housing Associations", CONFIG.name) />
        <Hero />
        <RiskSection />
        <Comparison />
        <Features />
        <Stats />
        <CallToAction />
    }
}
