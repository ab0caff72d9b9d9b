//! Landing page copy and data tables
//!
//! All content is immutable and built at compile time. [`SiteContent`] bundles
//! it so the rendering layer receives it once at startup instead of reaching
//! for globals.

use serde::Serialize;

/// Sign-up route targeted by the hero action and every pricing card
pub const SIGNUP_PATH: &str = "/signup";

/// A feature card: position in the table decides its stagger slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    pub title: &'static str,
    pub description: &'static str,
}

/// A pricing plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub plan_name: &'static str,
    pub price: &'static str,
    pub feature_lines: &'static [&'static str],
}

impl PricingTier {
    /// Label of the tier's sign-up link
    pub fn cta_label(&self) -> String {
        format!("Choose {}", self.plan_name)
    }
}

/// A navigation reference to another route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    pub headline: &'static str,
    pub subhead: &'static str,
    pub action: NavLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterCopy {
    pub copyright: &'static str,
    pub links: &'static [NavLink],
}

pub const HERO: HeroCopy = HeroCopy {
    headline: "Welcome to Velix SaaS",
    subhead: "The ultimate solution for your business needs.",
    action: NavLink {
        label: "Get Started",
        href: SIGNUP_PATH,
    },
};

pub const FEATURES_HEADING: &str = "Why Choose Velix?";

pub const FEATURES: [FeatureRecord; 3] = [
    FeatureRecord {
        title: "Fast",
        description: "Blazing-fast performance.",
    },
    FeatureRecord {
        title: "Secure",
        description: "Top-notch security features.",
    },
    FeatureRecord {
        title: "Scalable",
        description: "Grows with your business.",
    },
];

pub const PRICING_HEADING: &str = "Pricing Plans";

pub const PRICING_TIERS: [PricingTier; 2] = [
    PricingTier {
        plan_name: "Basic",
        price: "$9/mo",
        feature_lines: &["Feature A", "Feature B"],
    },
    PricingTier {
        plan_name: "Pro",
        price: "$29/mo",
        feature_lines: &["All Basic Features", "Feature C", "Feature D"],
    },
];

pub const FOOTER: FooterCopy = FooterCopy {
    copyright: "© 2025 Velix SaaS. All rights reserved.",
    links: &[
        NavLink {
            label: "About",
            href: "/about",
        },
        NavLink {
            label: "Contact",
            href: "/contact",
        },
        NavLink {
            label: "Privacy Policy",
            href: "/privacy",
        },
    ],
};

/// Everything the landing page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub title: &'static str,
    pub hero: HeroCopy,
    pub features_heading: &'static str,
    pub features: &'static [FeatureRecord],
    pub pricing_heading: &'static str,
    pub pricing: &'static [PricingTier],
    pub footer: FooterCopy,
}

impl SiteContent {
    pub fn velix() -> Self {
        Self {
            title: "Velix SaaS",
            hero: HERO,
            features_heading: FEATURES_HEADING,
            features: &FEATURES,
            pricing_heading: PRICING_HEADING,
            pricing: &PRICING_TIERS,
            footer: FOOTER,
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::velix()
    }
}
