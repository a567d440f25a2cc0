use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Navigation};
use crate::pages::{
    ApproachPage, CaseStudiesPage, ChecklistPage, ContactPage, DigitalMigrationPage, FaqPage,
    Guide2027Page, HomePage, MonitoringPage, TechnologyPage, WirelessOverlayPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            // Chrome renders once per page pass; only the route outlet swaps.
            <Navigation />
            <main>
                <Routes fallback=|| view! { <p class="not-found">"404 - Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/solutions/wireless-overlay") view=WirelessOverlayPage />
                    <Route path=path!("/solutions/digital-migration") view=DigitalMigrationPage />
                    <Route path=path!("/solutions/monitoring") view=MonitoringPage />
                    <Route path=path!("/about/approach") view=ApproachPage />
                    <Route path=path!("/about/case-studies") view=CaseStudiesPage />
                    <Route path=path!("/about/technology") view=TechnologyPage />
                    <Route path=path!("/resources/2027-guide") view=Guide2027Page />
                    <Route path=path!("/resources/checklist") view=ChecklistPage />
                    <Route path=path!("/resources/faqs") view=FaqPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
