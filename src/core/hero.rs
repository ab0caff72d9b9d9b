//! Hero banner choreography
//!
//! The hero has exactly three elements with different transition shapes, so
//! their timings are authored by hand rather than computed from a list:
//!
//! | element  | animates        | delay | duration |
//! |----------|-----------------|-------|----------|
//! | headline | offset + fade   | 0.0s  | 0.8s     |
//! | subhead  | fade            | 0.2s  | 0.8s     |
//! | action   | scale + fade    | 0.4s  | 0.5s     |
//!
//! Delays are absolute offsets from mount; no element waits for another.

use serde::Serialize;

use super::motion::{AnimationSpec, Transition, VisualState};

/// Role of an element in the hero banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroRole {
    Headline,
    Subhead,
    Action,
}

impl HeroRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroRole::Headline => "headline",
            HeroRole::Subhead => "subhead",
            HeroRole::Action => "action",
        }
    }
}

/// A hero element and its entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroBeat {
    pub role: HeroRole,
    pub spec: AnimationSpec,
}

const HEADLINE: HeroBeat = HeroBeat {
    role: HeroRole::Headline,
    spec: AnimationSpec::from_parts(
        VisualState::new().opacity(0.0).y(-20.0),
        VisualState::new().opacity(1.0).y(0.0),
        Transition::new(0.0, 0.8),
    ),
};

const SUBHEAD: HeroBeat = HeroBeat {
    role: HeroRole::Subhead,
    spec: AnimationSpec::from_parts(
        VisualState::new().opacity(0.0),
        VisualState::new().opacity(1.0),
        Transition::new(0.2, 0.8),
    ),
};

const ACTION: HeroBeat = HeroBeat {
    role: HeroRole::Action,
    spec: AnimationSpec::from_parts(
        VisualState::new().opacity(0.0).scale(0.8),
        VisualState::new().opacity(1.0).scale(1.0),
        Transition::new(0.4, 0.5),
    ),
};

/// The hero's three beats in page order: headline, subhead, action
pub fn hero_choreography() -> [HeroBeat; 3] {
    [HEADLINE, SUBHEAD, ACTION]
}
