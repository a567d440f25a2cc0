use leptos::prelude::*;

use crate::components::Reveal;

struct ComparisonRow {
    feature: &'static str,
    traditional: &'static str,
    wireless: &'static str,
    highlight: bool,
}

static ROWS: &[ComparisonRow] = &[
    ComparisonRow {
        feature: "Time to Deploy (30-flat court)",
        traditional: "4-6 Weeks",
        wireless: "2 Days",
        highlight: true,
    },
    ComparisonRow {
        feature: "Resident Disruption",
        traditional: "High (Drilling, Dust, Noise)",
        wireless: "Zero (No structural work)",
        highlight: true,
    },
    ComparisonRow {
        feature: "Decor Damage",
        traditional: "Significant (Requires redecorating)",
        wireless: "None (Wireless overlay)",
        highlight: true,
    },
    ComparisonRow {
        feature: "Cost Per Scheme",
        traditional: "££££ (High labour + materials)",
        wireless: "£ (Low hardware + install)",
        highlight: true,
    },
    ComparisonRow {
        feature: "Digital Ready",
        traditional: "Yes (Eventually)",
        wireless: "Yes (Immediately)",
        highlight: false,
    },
    ComparisonRow {
        feature: "Future Flexibility",
        traditional: "Low (Hardwired fixed points)",
        wireless: "High (Moveable devices)",
        highlight: true,
    },
];

/// Hardwired-rewire vs wireless-overlay comparison table on the home page.
#[component]
pub fn Comparison() -> impl IntoView {
    view! {
        <section id="comparison" class="comparison">
            <Reveal class="section-header">
                <span class="eyebrow">"The Choice is Clear"</span>
                <h2>"Why rip out walls when you can simply overlay?"</h2>
                <p>"Compare the traditional hardwired approach with our modern wireless solution."</p>
            </Reveal>

            <Reveal class="table-wrapper" delay_ms=200>
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th>"Feature"</th>
                            <th class="traditional-header">
                                "Traditional Rewiring"
                                <br />
                                <span class="header-note">"(Manual Construction)"</span>
                            </th>
                            <th class="wireless-header">
                                {shared::CONFIG.name}
                                <br />
                                <span class="header-note">"(Wireless Overlay)"</span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {ROWS.iter().map(|row| {
                            let row_class = if row.highlight { "highlight-row" } else { "" };
                            view! {
                                <tr class=row_class>
                                    <td class="feature-cell">{row.feature}</td>
                                    <td class="traditional-cell">{row.traditional}</td>
                                    <td class="wireless-cell">
                                        <span class="checkmark" aria-hidden="true">"✓ "</span>
                                        {row.wireless}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </Reveal>
        </section>
    }
}
