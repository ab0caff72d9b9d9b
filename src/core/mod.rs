//! Entrance-animation scheduling and landing page content

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod hero;
pub mod motion;
pub mod schedule;
pub mod stagger;

pub use content::*;
pub use hero::{HeroBeat, HeroRole, hero_choreography};
pub use motion::{AnimationSpec, MotionError, Transition, VisualState};
pub use stagger::{MotionTemplate, Stagger, StaggerPolicy, Staggered, stagger};
