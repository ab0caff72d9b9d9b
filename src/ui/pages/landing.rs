//! Landing page component
//!
//! Four sections rendered top to bottom:
//! - Hero banner with a hand-authored three-step entrance
//! - Feature grid with staggered cards
//! - Pricing grid with staggered cards
//! - Static footer
//!
//! Every animated element gets its entrance at mount; delays are absolute
//! offsets from that moment.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::schedule::{FEATURE_CARD_MOTION, PRICING_CARD_MOTION, SECTION_STAGGER};
use crate::core::{
    FeatureRecord, FooterCopy, HeroCopy, PricingTier, SIGNUP_PATH, hero_choreography,
};
use crate::ui::motion::{Motion, MotionStyles};
use crate::ui::site::use_site_content;
use crate::ui::staggered_list::StaggeredList;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let content = use_site_content();

    view! {
        <div class="min-h-screen bg-gray-50">
            <HeroSection hero=content.hero />

            <FeatureSection heading=content.features_heading features=content.features />

            <PricingSection heading=content.pricing_heading tiers=content.pricing />

            <FooterStatic footer=content.footer />

            // Keyframes for every Motion element on the page
            <MotionStyles />
        </div>
    }
}

/// Hero banner: headline, then subhead, then the call to action
#[component]
fn HeroSection(hero: HeroCopy) -> impl IntoView {
    let [headline, subhead, action] = hero_choreography();

    view! {
        <section class="bg-gradient-to-r from-blue-600 to-indigo-600 text-white py-20">
            <div class="container mx-auto px-4 text-center">
                <Motion spec=headline.spec>
                    <h1 class="text-4xl md:text-6xl font-bold mb-4">{hero.headline}</h1>
                </Motion>

                <Motion spec=subhead.spec>
                    <p class="text-xl mb-8">{hero.subhead}</p>
                </Motion>

                <Motion spec=action.spec>
                    <A
                        href=hero.action.href
                        attr:class="bg-white text-blue-600 px-6 py-3 rounded-full font-semibold hover:bg-gray-100"
                    >
                        {hero.action.label}
                    </A>
                </Motion>
            </div>
        </section>
    }
}

/// Feature grid, one card per record
#[component]
fn FeatureSection(heading: &'static str, features: &'static [FeatureRecord]) -> impl IntoView {
    view! {
        <section class="py-16 text-black">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12 text-black">{heading}</h2>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <StaggeredList
                        items=features.iter()
                        render_item=|feature: &'static FeatureRecord| view! {
                            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                            <p>{feature.description}</p>
                        }
                        policy=SECTION_STAGGER
                        template=FEATURE_CARD_MOTION
                        item_class="bg-white p-6 rounded-lg shadow-md"
                    />
                </div>
            </div>
        </section>
    }
}

/// Pricing grid, one card per tier with its feature lines and a sign-up link
#[component]
fn PricingSection(heading: &'static str, tiers: &'static [PricingTier]) -> impl IntoView {
    view! {
        <section class="bg-gray-100 py-16 text-black">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">{heading}</h2>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    <StaggeredList
                        items=tiers.iter()
                        render_item=|tier: &'static PricingTier| view! { <PricingCard tier=tier /> }
                        policy=SECTION_STAGGER
                        template=PRICING_CARD_MOTION
                        item_class="bg-white p-6 rounded-lg shadow-md text-center"
                    />
                </div>
            </div>
        </section>
    }
}

/// Pricing card body; the feature lines are not animated
#[component]
fn PricingCard(tier: &'static PricingTier) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-semibold mb-2">{tier.plan_name}</h3>
        <p class="text-3xl font-bold mb-4">{tier.price}</p>
        <ul class="mb-6">
            {tier
                .feature_lines
                .iter()
                .map(|line| view! { <li class="mb-2">{*line}</li> })
                .collect_view()}
        </ul>
        <A
            href=SIGNUP_PATH
            attr:class="bg-blue-600 text-white px-6 py-3 rounded-full font-semibold hover:bg-blue-700"
        >
            {tier.cta_label()}
        </A>
    }
}

/// Footer, no animation
#[component]
fn FooterStatic(footer: FooterCopy) -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white py-8">
            <div class="container mx-auto px-4 text-center">
                <p>{footer.copyright}</p>
                <div class="mt-4">
                    {footer
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <A href=link.href attr:class="mx-2 hover:underline">
                                    {link.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    use crate::core::SiteContent;
    use crate::core::schedule::{feature_schedule, pricing_schedule};

    fn render_landing() -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(RequestUrl::new("/"));

        view! {
            <Router>
                <LandingPage />
            </Router>
        }
        .to_html()
    }

    /// Byte offset of every occurrence of `needle`, in document order
    fn offsets(html: &str, needle: &str) -> Vec<usize> {
        html.match_indices(needle).map(|(at, _)| at).collect()
    }

    fn assert_ascending(positions: &[usize]) {
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "out of order: {positions:?}"
        );
    }

    #[test]
    fn test_one_motion_block_per_animated_element() {
        let html = render_landing();

        // 3 hero beats, 3 feature cards, 2 pricing cards
        assert_eq!(offsets(&html, "class=\"velix-motion").len(), 8);
        assert_eq!(offsets(&html, "animation:velix-motion-enter").len(), 8);
    }

    #[test]
    fn test_hero_beats_carry_their_timing() {
        let html = render_landing();

        let positions: Vec<_> = hero_choreography()
            .iter()
            .map(|beat| {
                html.find(&beat.spec.to_css_style())
                    .unwrap_or_else(|| panic!("missing {:?} timing", beat.role))
            })
            .collect();
        assert_ascending(&positions);
        assert!(html.contains("Welcome to Velix SaaS"));
    }

    #[test]
    fn test_feature_cards_in_table_order_with_staggered_timing() {
        let html = render_landing();
        let content = SiteContent::default();

        let styles: Vec<_> = feature_schedule(&content)
            .unwrap()
            .iter()
            .map(|spec| html.find(&spec.to_css_style()).expect("feature card timing"))
            .collect();
        assert_ascending(&styles);
        assert!(html.contains("500ms ease-out 200ms both"));

        let titles: Vec<_> = content
            .features
            .iter()
            .map(|feature| {
                html.find(&format!(">{}</h3>", feature.title))
                    .expect("feature title")
            })
            .collect();
        assert_ascending(&titles);

        // each title sits inside its own card
        for (style, title) in styles.iter().zip(&titles) {
            assert!(style < title);
        }
    }

    #[test]
    fn test_pricing_lines_are_not_animated() {
        let html = render_landing();
        let content = SiteContent::default();

        for spec in pricing_schedule(&content).unwrap() {
            assert!(html.contains(&spec.to_css_style()));
        }

        let line_count: usize = content.pricing.iter().map(|t| t.feature_lines.len()).sum();
        assert_eq!(offsets(&html, "<li").len(), line_count);

        // the only Motion wrappers are the 8 cards and beats, so no line has its own
        assert_eq!(offsets(&html, "class=\"velix-motion").len(), 8);
        for tier in content.pricing {
            for line in tier.feature_lines {
                assert!(html.contains(&format!(">{line}</li>")), "missing {line}");
            }
        }
    }

    #[test]
    fn test_every_tier_links_to_signup() {
        let html = render_landing();

        // hero action plus one per tier
        assert_eq!(
            offsets(&html, "href=\"/signup\"").len(),
            1 + crate::core::PRICING_TIERS.len()
        );
        assert!(html.contains("Choose Basic"));
        assert!(html.contains("Choose Pro"));
    }

    #[test]
    fn test_footer_has_three_static_links() {
        let html = render_landing();
        let footer = &html[html.find("<footer").expect("footer")..];

        for href in ["/about", "/contact", "/privacy"] {
            assert_eq!(offsets(footer, &format!("href=\"{href}\"")).len(), 1);
        }
        assert!(footer.contains("© 2025 Velix SaaS. All rights reserved."));
        assert!(!footer.contains("velix-motion-enter"));
    }
}
