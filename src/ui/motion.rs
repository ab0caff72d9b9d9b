//! Animation primitive
//!
//! `Motion` hands an [`AnimationSpec`] to the browser's CSS animation engine.
//! Its states and timing land in inline custom properties, and a single
//! keyframes rule interpolates between them. No timers run on the Rust side.

use leptos::prelude::*;

use crate::core::AnimationSpec;

/// Element that plays a one-shot entrance described by `spec` when mounted
#[component]
pub fn Motion(
    /// Entrance to play
    spec: AnimationSpec,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let classes = if class.is_empty() {
        "velix-motion".to_string()
    } else {
        format!("velix-motion {}", class)
    };

    view! {
        <div class=classes style=spec.to_css_style()>
            {children()}
        </div>
    }
}

/// Keyframes shared by every `Motion` element
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes velix-motion-enter {
                from {
                    opacity: var(--motion-from-opacity);
                    transform: translateY(var(--motion-from-y)) scale(var(--motion-from-scale));
                }
                to {
                    opacity: var(--motion-to-opacity);
                    transform: translateY(var(--motion-to-y)) scale(var(--motion-to-scale));
                }
            }

            .velix-motion {
                will-change: opacity, transform;
            }
            "#
        </style>
    }
}
