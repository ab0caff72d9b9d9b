//! Landing page motion policy and whole-page schedule
//!
//! Feature and pricing cards share one stagger policy and differ only in their
//! transition shape. [`landing_schedule`] flattens the hero beats and both card
//! lists into a single ordered report.

use serde::Serialize;

use super::content::SiteContent;
use super::hero::hero_choreography;
use super::motion::{AnimationSpec, MotionError, VisualState};
use super::stagger::{MotionTemplate, StaggerPolicy, stagger};

/// Cards start at mount and follow each other every 0.2s
pub const SECTION_STAGGER: StaggerPolicy = StaggerPolicy::uniform(0.2);

/// Feature cards rise 20px while fading in
pub const FEATURE_CARD_MOTION: MotionTemplate = MotionTemplate::new(
    VisualState::new().opacity(0.0).y(20.0),
    VisualState::new().opacity(1.0).y(0.0),
    0.5,
);

/// Pricing cards grow from 90% while fading in
pub const PRICING_CARD_MOTION: MotionTemplate = MotionTemplate::new(
    VisualState::new().opacity(0.0).scale(0.9),
    VisualState::new().opacity(1.0).scale(1.0),
    0.5,
);

/// Page section an animated element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Features,
    Pricing,
}

/// One animated element of the page with its positional key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledElement {
    pub section: Section,
    pub key: String,
    pub spec: AnimationSpec,
}

/// Full motion schedule of the landing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    /// Seconds after mount when every element has settled
    pub settled_after: f64,
    pub elements: Vec<ScheduledElement>,
}

/// Entrances of the feature cards, in table order
pub fn feature_schedule(content: &SiteContent) -> Result<Vec<AnimationSpec>, MotionError> {
    Ok(
        stagger(content.features, |_| (), SECTION_STAGGER, FEATURE_CARD_MOTION)?
            .map(|entry| entry.spec)
            .collect(),
    )
}

/// Entrances of the pricing cards, in table order
pub fn pricing_schedule(content: &SiteContent) -> Result<Vec<AnimationSpec>, MotionError> {
    Ok(
        stagger(content.pricing, |_| (), SECTION_STAGGER, PRICING_CARD_MOTION)?
            .map(|entry| entry.spec)
            .collect(),
    )
}

/// Every animated element of the landing page in document order
pub fn landing_schedule(content: &SiteContent) -> Result<Vec<ScheduledElement>, MotionError> {
    let hero = hero_choreography().into_iter().map(|beat| ScheduledElement {
        section: Section::Hero,
        key: format!("hero/{}", beat.role.as_str()),
        spec: beat.spec,
    });

    let features = feature_schedule(content)?
        .into_iter()
        .enumerate()
        .map(|(index, spec)| ScheduledElement {
            section: Section::Features,
            key: format!("features/{index}"),
            spec,
        });

    let pricing = pricing_schedule(content)?
        .into_iter()
        .enumerate()
        .map(|(index, spec)| ScheduledElement {
            section: Section::Pricing,
            key: format!("pricing/{index}"),
            spec,
        });

    Ok(hero.chain(features).chain(pricing).collect())
}

/// Time at which the last element settles, zero for an empty schedule
pub fn settled_after(elements: &[ScheduledElement]) -> f64 {
    elements
        .iter()
        .map(|element| element.spec.settles_at())
        .fold(0.0, f64::max)
}

pub fn landing_report(content: &SiteContent) -> Result<ScheduleReport, MotionError> {
    let elements = landing_schedule(content)?;
    Ok(ScheduleReport {
        settled_after: settled_after(&elements),
        elements,
    })
}
