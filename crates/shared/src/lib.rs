/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// PSTN switch-off instant, ISO 8601. Everything time-related counts
    /// down to this.
    pub switchover_deadline: &'static str,

    pub contact: Contact,
    pub promo: Promo,
    pub trust_badges: &'static [&'static str],
    pub nav: &'static [NavGroup],
    pub footer_strapline: &'static str,
}

pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub office: &'static str,
}

pub struct Promo {
    pub offer: &'static str,
    pub href: &'static str,
}

/// A top-level navigation entry: either a direct link or a dropdown of links.
pub struct NavGroup {
    pub label: &'static str,
    pub href: Option<&'static str>,
    pub dropdown: &'static [NavLink],
}

pub struct NavLink {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub static CONFIG: Config = Config {
    name: "CompliantCare",
    tagline: "Wireless telecare solutions for UK housing associations",

    switchover_deadline: "2027-01-31T00:00:00Z",

    contact: Contact {
        email: "hello@compliantcare.co.uk",
        phone: "0800 123 4567",
        office: "123 Tech Hub, London, EC1A 1BB",
    },

    promo: Promo {
        offer: "Claim your free Volumetric Signal Audit — worth £2,500",
        href: "/contact",
    },

    trust_badges: &["G15", "G320", "TSA", "TEC Quality", "NHS", "CQC"],

    nav: &[
        NavGroup {
            label: "Telecare Solutions",
            href: None,
            dropdown: &[
                NavLink {
                    title: "Wireless Overlay System",
                    description: "Retrofit your existing telecare without disruption",
                    href: "/solutions/wireless-overlay",
                },
                NavLink {
                    title: "Full Digital Migration",
                    description: "Complete transition to digital infrastructure",
                    href: "/solutions/digital-migration",
                },
                NavLink {
                    title: "Monitoring Services",
                    description: "24/7 alarm response and monitoring",
                    href: "/solutions/monitoring",
                },
            ],
        },
        NavGroup {
            label: "Why CompliantCare?",
            href: None,
            dropdown: &[
                NavLink {
                    title: "Our Approach",
                    description: "How we deliver 48-hour compliance",
                    href: "/about/approach",
                },
                NavLink {
                    title: "Case Studies",
                    description: "Success stories from housing associations",
                    href: "/about/case-studies",
                },
                NavLink {
                    title: "Technology",
                    description: "The tech behind our solutions",
                    href: "/about/technology",
                },
            ],
        },
        NavGroup {
            label: "Resources",
            href: None,
            dropdown: &[
                NavLink {
                    title: "2027 Deadline Guide",
                    description: "Everything you need to know about PSTN switch-off",
                    href: "/resources/2027-guide",
                },
                NavLink {
                    title: "Compliance Checklist",
                    description: "Ensure your portfolio is ready",
                    href: "/resources/checklist",
                },
                NavLink {
                    title: "FAQs",
                    description: "Common questions answered",
                    href: "/resources/faqs",
                },
            ],
        },
        NavGroup {
            label: "Contact",
            href: Some("/contact"),
            dropdown: &[],
        },
    ],

    footer_strapline: "100% life-safety compliance ahead of the 2027 digital switchover.",
};

impl Config {
    /// Flat view of every navigable path in the header, dropdowns included.
    pub fn nav_hrefs(&self) -> Vec<&'static str> {
        self.nav
            .iter()
            .flat_map(|group| {
                group
                    .href
                    .into_iter()
                    .chain(group.dropdown.iter().map(|link| link.href))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hrefs_are_absolute_and_unique() {
        let hrefs = CONFIG.nav_hrefs();
        assert!(!hrefs.is_empty());
        for href in &hrefs {
            assert!(href.starts_with('/'), "nav href {href} must be site-relative");
        }
        let mut deduped = hrefs.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), hrefs.len(), "duplicate nav href");
    }

    #[test]
    fn groups_are_either_link_or_dropdown() {
        for group in CONFIG.nav {
            assert!(
                group.href.is_some() != !group.dropdown.is_empty(),
                "nav group {} must be either a link or a dropdown, not both",
                group.label
            );
        }
    }

    #[test]
    fn deadline_is_utc_iso8601() {
        assert!(CONFIG.switchover_deadline.ends_with('Z'));
        assert_eq!(CONFIG.switchover_deadline.len(), "2027-01-31T00:00:00Z".len());
    }
}
