use leptos::logging::error;
use leptos::prelude::*;

use crate::core::{MotionTemplate, StaggerPolicy, Staggered, stagger};
use crate::ui::motion::Motion;

/// Renders one `Motion` block per item, each entering `policy.per_item_interval`
/// seconds after the previous one.
///
/// Blocks are keyed by position. An invalid policy or template is logged and
/// renders nothing.
#[component]
pub fn StaggeredList<I, F, V>(
    /// Records in display order
    items: I,
    /// Card content for a record
    render_item: F,
    /// Delay assignment
    policy: StaggerPolicy,
    /// Transition shared by every block
    template: MotionTemplate,
    /// CSS classes for each block
    #[prop(optional, into)]
    item_class: String,
) -> impl IntoView
where
    I: IntoIterator + 'static,
    F: FnMut(I::Item) -> V + 'static,
    V: IntoView + Send + 'static,
{
    match stagger(items, render_item, policy, template) {
        Ok(schedule) => schedule
            .map(|Staggered { spec, content, .. }| {
                view! {
                    <Motion spec=spec class=item_class.clone()>
                        {content}
                    </Motion>
                }
            })
            .collect_view()
            .into_any(),
        Err(err) => {
            error!("Skipping staggered list: {}", err);
            ().into_any()
        }
    }
}
