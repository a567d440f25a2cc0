use leptos::prelude::*;
use leptos_router::components::A;
use shared::CONFIG;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="logo-text">{CONFIG.name}</span>
                    <p>{CONFIG.footer_strapline}</p>
                    <ul class="footer-contact">
                        <li>{CONFIG.contact.email}</li>
                        <li>{CONFIG.contact.phone}</li>
                        <li>{CONFIG.contact.office}</li>
                    </ul>
                </div>
                <div class="footer-links">
                    {CONFIG.nav.iter().filter(|group| !group.dropdown.is_empty()).map(|group| view! {
                        <div class="footer-column">
                            <span class="footer-heading">{group.label}</span>
                            <ul>
                                {group.dropdown.iter().map(|link| view! {
                                    <li><A href=link.href>{link.title}</A></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </div>
            <div class="footer-legal">
                "© 2026 " {CONFIG.name} ". All rights reserved."
            </div>
        </footer>
    }
}
