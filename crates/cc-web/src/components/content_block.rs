use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::Reveal;

/// Which side of the text column the illustration sits on for wide layouts.
/// Narrow viewports always stack text above image regardless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSide {
    Left,
    #[default]
    Right,
}

/// One inline fragment of a rich description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Link { label: String, href: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Body copy for a content block: either a plain paragraph or a sequence of
/// inline fragments (text with embedded links). Callers never pre-render rich
/// content to a single string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockText {
    Plain(String),
    Rich(Vec<Inline>),
}

impl From<&str> for BlockText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

impl From<String> for BlockText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<Vec<Inline>> for BlockText {
    fn from(nodes: Vec<Inline>) -> Self {
        Self::Rich(nodes)
    }
}

/// Descriptor for one title/description/image/feature-list unit of page
/// content. Constructed once per usage site and immutable for the render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBlockData {
    pub title: String,
    pub description: BlockText,
    pub image_src: String,
    pub image_alt: String,
    pub image_side: ImageSide,
    pub eyebrow: Option<String>,
    /// Display order is meaningful. Empty renders no list element at all.
    pub features: Vec<String>,
    pub bg_alt: bool,
}

impl ContentBlockData {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<BlockText>,
        image_src: impl Into<String>,
        image_alt: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_src: image_src.into(),
            image_alt: image_alt.into(),
            image_side: ImageSide::default(),
            eyebrow: None,
            features: Vec::new(),
            bg_alt: false,
        }
    }

    pub fn image_left(mut self) -> Self {
        self.image_side = ImageSide::Left;
        self
    }

    pub fn eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn alt_background(mut self) -> Self {
        self.bg_alt = true;
        self
    }

    /// Enclosing section class. `bg_alt` swaps only the background treatment;
    /// everything else about the layout is unaffected.
    pub fn section_class(&self) -> &'static str {
        if self.bg_alt {
            "content-block content-block-alt"
        } else {
            "content-block"
        }
    }

    pub fn row_class(&self) -> &'static str {
        match self.image_side {
            ImageSide::Left => "block-row image-left",
            ImageSide::Right => "block-row",
        }
    }

    /// A missing title is a content-authoring defect. Render a visible
    /// placeholder instead of failing the page.
    pub fn resolved_title(&self) -> String {
        if self.title.trim().is_empty() {
            warn!("content block has an empty title; rendering placeholder");
            "[missing title]".to_owned()
        } else {
            self.title.clone()
        }
    }

    /// Alt text is required whenever an image is set. Degrade to a generic
    /// description rather than shipping an unlabeled image.
    pub fn resolved_alt(&self) -> String {
        if !self.image_src.is_empty() && self.image_alt.trim().is_empty() {
            warn!("content block image {:?} has no alt text", self.image_src);
            "illustration".to_owned()
        } else {
            self.image_alt.clone()
        }
    }
}

fn description_view(description: &BlockText) -> AnyView {
    match description {
        BlockText::Plain(text) => view! { <p>{text.clone()}</p> }.into_any(),
        BlockText::Rich(nodes) => view! {
            <p>
                {nodes
                    .iter()
                    .map(|node| match node {
                        Inline::Text(text) => view! { <span>{text.clone()}</span> }.into_any(),
                        Inline::Link { label, href } => {
                            view! { <a href=href.clone()>{label.clone()}</a> }.into_any()
                        }
                    })
                    .collect_view()}
            </p>
        }
        .into_any(),
    }
}

/// Two-column content block: text column (eyebrow, title, description,
/// feature list) beside an illustration. Stateless projection of its
/// descriptor; the text column comes first in the DOM so narrow layouts
/// stack text before image.
#[component]
pub fn ContentBlock(block: ContentBlockData) -> impl IntoView {
    let section_class = block.section_class();
    let row_class = block.row_class();
    let title = block.resolved_title();
    let alt = block.resolved_alt();
    let description = description_view(&block.description);
    let eyebrow = block.eyebrow.clone();
    let image_src = block.image_src.clone();
    let features = block.features.clone();

    view! {
        <section class=section_class>
            <div class=row_class>
                <Reveal class="block-content">
                    {eyebrow.map(|eyebrow| view! { <span class="eyebrow">{eyebrow}</span> })}
                    <h2 class="block-title">{title}</h2>
                    <div class="block-description">{description}</div>
                    {(!features.is_empty()).then(|| view! {
                        <ul class="block-features">
                            {features
                                .iter()
                                .map(|feature| view! {
                                    <li>
                                        <span class="check-icon" aria-hidden="true">"✓"</span>
                                        {feature.clone()}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    })}
                </Reveal>
                <Reveal class="block-image" delay_ms=200>
                    <img src=image_src alt=alt loading="lazy" />
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_block() -> ContentBlockData {
        ContentBlockData::new(
            "Why Choose an Overlay?",
            "Our wireless overlay solution bypasses the old wiring entirely.",
            "/hero-image.png",
            "Engineer installing Smart Hub",
        )
        .image_left()
        .eyebrow("Speed & Efficiency")
        .features([
            "Installation takes just 45 minutes per flat",
            "No damage to decor or communal areas",
            "Works alongside existing door entry systems",
            "Immediate compliance with digital standards",
        ])
    }

    #[test]
    fn identical_descriptors_are_equal() {
        assert_eq!(overlay_block(), overlay_block());
    }

    #[test]
    fn overlay_scenario() {
        let block = overlay_block();
        assert_eq!(block.resolved_title(), "Why Choose an Overlay?");
        assert_eq!(block.features.len(), 4);
        assert_eq!(block.image_side, ImageSide::Left);
        assert_eq!(block.row_class(), "block-row image-left");
    }

    #[test]
    fn feature_order_is_preserved() {
        let block = overlay_block();
        assert_eq!(block.features[0], "Installation takes just 45 minutes per flat");
        assert_eq!(block.features[3], "Immediate compliance with digital standards");
    }

    #[test]
    fn bg_alt_changes_only_the_section_class() {
        let plain = overlay_block();
        let tinted = overlay_block().alt_background();
        assert_eq!(plain.section_class(), "content-block");
        assert_eq!(tinted.section_class(), "content-block content-block-alt");
        // Everything except the flag is untouched.
        assert_eq!(plain.row_class(), tinted.row_class());
        assert_eq!(plain.features, tinted.features);
        assert_eq!(plain.description, tinted.description);
    }

    #[test]
    fn image_defaults_to_the_right() {
        let block = ContentBlockData::new("Title", "Body", "/img.png", "alt");
        assert_eq!(block.image_side, ImageSide::Right);
        assert_eq!(block.row_class(), "block-row");
    }

    #[test]
    fn missing_alt_degrades_to_placeholder() {
        let block = ContentBlockData::new("Title", "Body", "/img.png", "");
        assert_eq!(block.resolved_alt(), "illustration");
    }

    #[test]
    fn alt_not_required_without_an_image() {
        let block = ContentBlockData::new("Title", "Body", "", "");
        assert_eq!(block.resolved_alt(), "");
    }

    #[test]
    fn missing_title_degrades_to_placeholder() {
        let block = ContentBlockData::new("  ", "Body", "/img.png", "alt");
        assert_eq!(block.resolved_title(), "[missing title]");
    }

    #[test]
    fn rich_description_keeps_its_structure() {
        let description: BlockText = vec![
            Inline::text("See the "),
            Inline::link("full specifications", "/about/technology"),
            Inline::text(" for details."),
        ]
        .into();
        match &description {
            BlockText::Rich(nodes) => {
                assert_eq!(nodes.len(), 3);
                assert_eq!(nodes[1], Inline::link("full specifications", "/about/technology"));
            }
            BlockText::Plain(_) => panic!("expected rich description"),
        }
    }
}
