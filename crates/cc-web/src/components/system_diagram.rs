use leptos::prelude::*;

pub struct Hotspot {
    pub id: usize,
    /// Position as percentages of the diagram area.
    pub x: u8,
    pub y: u8,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub static HOTSPOTS: &[Hotspot] = &[
    Hotspot {
        id: 1,
        x: 50,
        y: 30,
        icon: "📶",
        label: "Roaming SIM",
        description: "Connects to strongest 4G signal",
    },
    Hotspot {
        id: 2,
        x: 20,
        y: 60,
        icon: "🔌",
        label: "Bypasses Wiring",
        description: "No connection to existing wall plate",
    },
    Hotspot {
        id: 3,
        x: 80,
        y: 60,
        icon: "⚡",
        label: "Mains Power",
        description: "Plugs into standard socket",
    },
];

/// Room diagram with clickable hotspots explaining how the overlay hub fits
/// into a resident's home.
#[component]
pub fn SystemDiagram() -> impl IntoView {
    let (active, set_active) = signal(None::<usize>);

    view! {
        <section class="system-diagram">
            <div class="section-header">
                <h2>"How The Overlay Works"</h2>
                <p>
                    "See how the Smart Hub fits seamlessly into a resident's home without \
                     disrupting the existing infrastructure."
                </p>
            </div>

            <div class="diagram-stage">
                <img
                    src="/overlay-diagram.png"
                    alt="Cutaway of a resident's room showing the wireless overlay hub"
                />

                {HOTSPOTS.iter().map(|spot| {
                    let id = spot.id;
                    view! {
                        <div
                            class="hotspot"
                            style=format!("top: {}%; left: {}%", spot.y, spot.x)
                        >
                            <button
                                class="hotspot-button"
                                class:active=move || active.get() == Some(id)
                                on:click=move |_| set_active.update(|current| {
                                    *current = if *current == Some(id) { None } else { Some(id) };
                                })
                                aria-label=spot.label
                            >
                                {spot.icon}
                            </button>
                            <Show when=move || active.get() == Some(id)>
                                <div class="hotspot-card">
                                    <strong>{spot.label}</strong>
                                    <p>{spot.description}</p>
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotspots_stay_inside_the_diagram() {
        for spot in HOTSPOTS {
            assert!(spot.x <= 100 && spot.y <= 100, "{} out of bounds", spot.label);
        }
    }

    #[test]
    fn hotspot_ids_are_unique() {
        let mut ids: Vec<_> = HOTSPOTS.iter().map(|spot| spot.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), HOTSPOTS.len());
    }
}
