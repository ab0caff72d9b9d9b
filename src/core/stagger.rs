//! Staggered entrance schedules for lists
//!
//! Given an ordered sequence of records, [`stagger`] yields one
//! [`Staggered`] entry per record with `delay = base_delay + index * interval`.
//! Identity is positional: reordering the input reassigns delays by the new
//! position, never by record content.

use serde::Serialize;
use std::iter::{Enumerate, FusedIterator};

use super::motion::{AnimationSpec, MotionError, Transition, VisualState};

/// Delay assignment for a list: item `i` starts at `base_delay + i * per_item_interval`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StaggerPolicy {
    pub base_delay: f64,
    pub per_item_interval: f64,
}

impl StaggerPolicy {
    pub const fn new(base_delay: f64, per_item_interval: f64) -> Self {
        Self {
            base_delay,
            per_item_interval,
        }
    }

    /// Policy starting at mount time
    pub const fn uniform(per_item_interval: f64) -> Self {
        Self::new(0.0, per_item_interval)
    }

    /// Raw delay for the item at `index`.
    ///
    /// Not clamped: a negative interval gives decreasing delays. Such a policy
    /// never reaches rendering because [`StaggerPolicy::validate`] rejects it.
    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.per_item_interval
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.base_delay.is_finite() || self.base_delay < 0.0 {
            return Err(MotionError::InvalidPolicy {
                reason: format!("base delay must be non-negative, got {}", self.base_delay),
            });
        }
        if !self.per_item_interval.is_finite() || self.per_item_interval < 0.0 {
            return Err(MotionError::InvalidPolicy {
                reason: format!(
                    "per-item interval must be non-negative, got {}",
                    self.per_item_interval
                ),
            });
        }
        Ok(())
    }
}

/// Transition shape shared by every item of a list; only the delay varies
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionTemplate {
    pub initial: VisualState,
    pub target: VisualState,
    pub duration: f64,
}

impl MotionTemplate {
    pub const fn new(initial: VisualState, target: VisualState, duration: f64) -> Self {
        Self {
            initial,
            target,
            duration,
        }
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        self.initial.validate()?;
        self.target.validate()?;
        Transition::new(0.0, self.duration).validate()
    }

    /// Spec for an item starting `delay` seconds after mount.
    ///
    /// Fails if the template or the delay is invalid.
    pub fn at(&self, delay: f64) -> Result<AnimationSpec, MotionError> {
        AnimationSpec::new(
            self.initial,
            self.target,
            Transition::new(delay, self.duration),
        )
    }
}

/// One scheduled list entry: its positional key, its entrance, and its content
#[derive(Debug, Clone, PartialEq)]
pub struct Staggered<C> {
    pub index: usize,
    pub spec: AnimationSpec,
    pub content: C,
}

/// Lazy schedule produced by [`stagger`]
#[derive(Debug, Clone)]
pub struct Stagger<I, F> {
    items: Enumerate<I>,
    render: F,
    policy: StaggerPolicy,
    template: MotionTemplate,
}

impl<I, F, C> Iterator for Stagger<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> C,
{
    type Item = Staggered<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, item) = self.items.next()?;
        let transition = Transition::new(self.policy.delay_for(index), self.template.duration);
        Some(Staggered {
            index,
            // policy and template were validated in `stagger`
            spec: AnimationSpec::from_parts(
                self.template.initial,
                self.template.target,
                transition,
            ),
            content: (self.render)(item),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<I, F, C> ExactSizeIterator for Stagger<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> C,
{
}

impl<I, F, C> FusedIterator for Stagger<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> C,
{
}

/// Schedule an ordered sequence of records.
///
/// The policy and template are checked up front; once this returns `Ok`, the
/// iterator cannot fail. Empty input yields an empty schedule. Nothing is
/// cached: calling again with the same input produces the same schedule.
pub fn stagger<I, F, C>(
    items: I,
    render: F,
    policy: StaggerPolicy,
    template: MotionTemplate,
) -> Result<Stagger<I::IntoIter, F>, MotionError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> C,
{
    policy.validate()?;
    template.validate()?;

    Ok(Stagger {
        items: items.into_iter().enumerate(),
        render,
        policy,
        template,
    })
}
