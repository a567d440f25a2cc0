use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{PageHeader, Reveal};

/// Contact page: info column beside a static enquiry form. The form has no
/// submission target yet; wiring it up is blocked on a backend contract.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text=format!("{} | Get in touch", CONFIG.name) />
        <PageHeader
            title="Get in touch"
            subtitle="Ready to discuss your digital switchover strategy? Our team is here to help."
            label="Contact Us"
        />

        <section class="contact">
            <div class="block-row">
                // Contact info column
                <div class="block-content">
                    <span class="eyebrow">"Contact Info"</span>
                    <h2>"We'd love to hear from you"</h2>
                    <p>
                        "Whether you need a full portfolio audit or just have a question about \
                         compliance, our team of housing technology experts is ready to assist."
                    </p>

                    <ul class="contact-channels">
                        <li>
                            <span class="channel-icon" aria-hidden="true">"📧"</span>
                            <div>
                                <h3>"Email"</h3>
                                <p>{CONFIG.contact.email}</p>
                            </div>
                        </li>
                        <li>
                            <span class="channel-icon" aria-hidden="true">"📱"</span>
                            <div>
                                <h3>"Phone"</h3>
                                <p>{CONFIG.contact.phone}</p>
                            </div>
                        </li>
                        <li>
                            <span class="channel-icon" aria-hidden="true">"📍"</span>
                            <div>
                                <h3>"Office"</h3>
                                <p>{CONFIG.contact.office}</p>
                            </div>
                        </li>
                    </ul>
                </div>

                // Enquiry form column
                <Reveal class="contact-form-panel" delay_ms=200>
                    <form>
                        <div class="form-field">
                            <label for="name">"Name"</label>
                            <input type="text" id="name" placeholder="Jo Bloggs" />
                        </div>
                        <div class="form-field">
                            <label for="email">"Work Email"</label>
                            <input type="email" id="email" placeholder="jo@housing.org.uk" />
                        </div>
                        <div class="form-field">
                            <label for="org">"Housing Association"</label>
                            <input type="text" id="org" placeholder="Organisation Name" />
                        </div>
                        <div class="form-field">
                            <label for="message">"Message"</label>
                            <textarea id="message" rows="4" placeholder="How can we help?"></textarea>
                        </div>
                        <button type="submit" class="form-submit">"Send Message"</button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}
