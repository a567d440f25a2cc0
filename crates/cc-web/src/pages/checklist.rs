use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::components::{CallToAction, PageHeader};

static CHECKLIST_ITEMS: &[&str] = &[
    "Have you audited your entire portfolio for analogue devices?",
    "Do you know exactly how many grouped living schemes you manage?",
    "Have you tested your current alarms on digital lines?",
    "Do you have a budget allocated for digital upgrades?",
    "Have you communicated the changes to your residents?",
    "Have you identified vulnerable residents who need priority upgrades?",
    "Is your connectivity provider ready for roaming SIMs?",
    "Have you updated your fire risk assessments for digital?",
];

/// Readiness score as a whole-number percentage.
fn progress_percent(checked: &[bool]) -> u32 {
    if checked.is_empty() {
        return 0;
    }
    let done = checked.iter().filter(|item| **item).count();
    (done * 100 / checked.len()) as u32
}

#[component]
pub fn ChecklistPage() -> impl IntoView {
    let checked = RwSignal::new(vec![false; CHECKLIST_ITEMS.len()]);
    let progress = move || checked.with(|items| progress_percent(items));

    view! {
        <Title text=format!("{} | Compliance Checklist", CONFIG.name) />
        <PageHeader
            title="Compliance Checklist"
            subtitle="Are you ready for the switchover? Use this interactive tool to assess your \
                      readiness."
            label="Self Assessment"
        />

        <section class="checklist">
            <div class="progress-panel">
                <div class="progress-caption">
                    <span>"Your Readiness"</span>
                    <span>{move || format!("{}%", progress())}</span>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-bar"
                        style=move || format!("width: {}%", progress())
                    ></div>
                </div>
            </div>

            <ul class="checklist-items">
                {CHECKLIST_ITEMS.iter().enumerate().map(|(index, item)| view! {
                    <li>
                        <label class="checklist-item">
                            <input
                                type="checkbox"
                                prop:checked=move || checked.with(|items| items[index])
                                on:change=move |_| checked.update(|items| items[index] = !items[index])
                            />
                            {*item}
                        </label>
                    </li>
                }).collect_view()}
            </ul>
        </section>

        <CallToAction />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_scores_zero() {
        assert_eq!(progress_percent(&[]), 0);
    }

    #[test]
    fn progress_is_a_whole_percentage() {
        assert_eq!(progress_percent(&[false; 8]), 0);
        assert_eq!(progress_percent(&[true; 8]), 100);

        let mut items = vec![false; 8];
        items[0] = true;
        items[1] = true;
        assert_eq!(progress_percent(&items), 25);

        // Truncates rather than rounding up
        assert_eq!(progress_percent(&[true, false, false]), 33);
    }
}
