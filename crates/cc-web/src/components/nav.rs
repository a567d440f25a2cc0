use leptos::prelude::*;
use leptos_router::components::A;
use shared::CONFIG;

/// Offer strip pinned above the main navigation.
#[component]
fn PromoBanner() -> impl IntoView {
    view! {
        <div class="promo-banner">
            <span class="promo-text">
                <span class="promo-icon" aria-hidden="true">"⚡"</span>
                <strong>"Limited Offer: "</strong>
                {CONFIG.promo.offer}
            </span>
            <A href=CONFIG.promo.href attr:class="promo-link">"Get Started →"</A>
        </div>
    }
}

/// Site-wide navigation chrome, data-driven from the shared nav tree.
/// Rendered once at the root of the app; pages never touch it.
#[component]
pub fn Navigation() -> impl IntoView {
    let (active, set_active) = signal(None::<usize>);
    let (mobile_open, set_mobile_open) = signal(false);

    view! {
        <PromoBanner />
        <header class="site-header">
            <nav class="site-nav">
                <A href="/" attr:class="logo">
                    <span class="logo-text">{CONFIG.name}</span>
                    <span class="logo-mark" aria-hidden="true">"〰"</span>
                </A>

                // Desktop navigation
                <ul class="nav-list">
                    {CONFIG.nav.iter().enumerate().map(|(index, group)| {
                        match group.href {
                            Some(href) => view! {
                                <li class="nav-item">
                                    <A href=href attr:class="nav-link">{group.label}</A>
                                </li>
                            }
                            .into_any(),
                            None => view! {
                                <li class="nav-item" on:mouseleave=move |_| set_active.set(None)>
                                    <button
                                        class="nav-link"
                                        on:click=move |_| set_active.update(|a| {
                                            *a = if *a == Some(index) { None } else { Some(index) };
                                        })
                                        on:mouseenter=move |_| set_active.set(Some(index))
                                        aria-expanded=move || (active.get() == Some(index)).to_string()
                                    >
                                        {group.label}
                                        <span class="chevron" aria-hidden="true">"▾"</span>
                                    </button>
                                    <Show when=move || active.get() == Some(index)>
                                        <div class="dropdown">
                                            {group.dropdown.iter().map(|link| view! {
                                                <A href=link.href attr:class="dropdown-link">
                                                    <span class="dropdown-title">{link.title}</span>
                                                    <span class="dropdown-description">{link.description}</span>
                                                </A>
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                </li>
                            }
                            .into_any(),
                        }
                    }).collect_view()}
                </ul>

                <button
                    class="menu-toggle"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    "☰"
                </button>
            </nav>

            // Mobile navigation
            <Show when=move || mobile_open.get()>
                <div class="mobile-menu">
                    {CONFIG.nav.iter().map(|group| view! {
                        <div class="mobile-group">
                            {match group.href {
                                Some(href) => view! {
                                    <A href=href attr:class="mobile-link">{group.label}</A>
                                }
                                .into_any(),
                                None => view! {
                                    <span class="mobile-group-label">{group.label}</span>
                                    {group.dropdown.iter().map(|link| view! {
                                        <A href=link.href attr:class="mobile-link">{link.title}</A>
                                    }).collect_view()}
                                }
                                .into_any(),
                            }}
                        </div>
                    }).collect_view()}
                </div>
            </Show>
        </header>
    }
}
