//! The illustration catalog
//!
//! Each entry is a stateless `fn(&Palette) -> SvgBuilder` drawn on the shared
//! [`GRID`](super::GRID). Entries are grouped by lesson topic.

mod accessibility;
mod color;
mod foundations;
mod heroes;
mod layout;
mod motion;
mod platforms;
mod systems;
mod ux;

use crate::palette::Palette;
use crate::renderer::{Frame, Rect, SvgBuilder, Text};

use super::registry::{IllustrationRegistry, RenderFn};

/// Every catalog key with its renderer, in lesson order
pub const ENTRIES: &[(&str, RenderFn)] = &[
    ("hierarchy-stack", foundations::hierarchy_stack),
    ("contrast-pairs", foundations::contrast_pairs),
    ("gestalt-proximity", foundations::gestalt_proximity),
    ("grid-overlay", layout::grid_overlay),
    ("spacing-scale", foundations::spacing_scale),
    ("type-scale", foundations::type_scale),
    ("color-palette", color::color_palette),
    ("box-model", layout::box_model),
    ("component-anatomy", systems::component_anatomy),
    ("flow-diagram", ux::flow_diagram),
    ("alignment-grid", foundations::alignment_grid),
    ("balance-types", foundations::balance_types),
    ("design-system-layers", systems::design_system_layers),
    ("component-states", systems::component_states),
    ("easing-curves", motion::easing_curves),
    ("responsive-breakpoints", layout::responsive_breakpoints),
    ("token-hierarchy", systems::token_hierarchy),
    ("micro-interaction-anatomy", motion::micro_interaction_anatomy),
    ("flexbox-axes", layout::flexbox_axes),
    ("css-cascade", layout::css_cascade),
    ("skeleton-loading", motion::skeleton_loading),
    ("figure-ground", foundations::figure_ground),
    ("closure-principle", foundations::closure_principle),
    ("grid-template-areas", layout::grid_template_areas),
    ("color-wheel", color::color_wheel),
    ("atomic-design", systems::atomic_design),
    ("focus-order", accessibility::focus_order),
    ("prototype-fidelity", ux::prototype_fidelity),
    ("ia-hierarchy", ux::ia_hierarchy),
    ("empty-state-anatomy", ux::empty_state_anatomy),
    ("loading-duration", motion::loading_duration),
    ("affordance-signifier", ux::affordance_signifier),
    ("contrast-ratio", color::contrast_ratio),
    ("html-css-js-layers", layout::html_css_js_layers),
    ("js-data-types", layout::js_data_types),
    ("scroll-animation-types", motion::scroll_animation_types),
    ("icon-sizing", systems::icon_sizing),
    ("polish-checklist", systems::polish_checklist),
    ("event-bubbling", layout::event_bubbling),
    ("form-validation-states", accessibility::form_validation_states),
    ("navigation-patterns", platforms::navigation_patterns),
    ("dark-mode-mapping", color::dark_mode_mapping),
    ("ios-accessibility-focus", accessibility::ios_accessibility_focus),
    ("android-accessibility-focus", accessibility::android_accessibility_focus),
    ("ios-spring-animation", motion::ios_spring_animation),
    ("material-motion-system", motion::material_motion_system),
    ("apple-device-family", platforms::apple_device_family),
    ("android-device-family", platforms::android_device_family),
    ("material-dynamic-color", color::material_dynamic_color),
    ("design-handoff-flow", systems::design_handoff_flow),
    ("token-pipeline", systems::token_pipeline),
    ("token-file-structure", systems::token_file_structure),
    ("feedback-loop", motion::feedback_loop),
    ("touch-target-sizes", accessibility::touch_target_sizes),
    ("false-hidden-affordances", ux::false_hidden_affordances),
    ("signifier-strength", ux::signifier_strength),
    ("heuristics-grid", ux::heuristics_grid),
    ("severity-scale", ux::severity_scale),
    ("content-extremes", ux::content_extremes),
    ("permission-states", ux::permission_states),
    ("hierarchy-depth", ux::hierarchy_depth),
    ("organization-schemes", ux::organization_schemes),
    ("user-journey-map", ux::user_journey_map),
    ("ux-traps", ux::ux_traps),
    ("de-intersection", heroes::de_intersection),
    ("design-track-hero", heroes::design_track_hero),
    ("engineering-track-hero", heroes::engineering_track_hero),
    ("convergence-track-hero", heroes::convergence_track_hero),
];

/// Build a registry holding every catalog entry
pub fn build_registry() -> IllustrationRegistry {
    let mut registry = IllustrationRegistry::new();
    for (key, render) in ENTRIES {
        if let Err(err) = registry.register(*key, *render) {
            tracing::warn!(%err, "skipping catalog entry");
        }
    }
    tracing::debug!(count = registry.len(), "illustration catalog ready");
    registry
}

fn titled(title: &str, description: &str, palette: &Palette) -> SvgBuilder {
    Frame::new(title).description(description).builder(palette)
}

/// Outlined box with a centred caption
fn labeled_box(
    b: &mut SvgBuilder,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    text: &str,
    stroke: &str,
) {
    b.add(Rect::new(x, y, w, h).rounded(4.0).stroke(stroke));
    b.add(
        Text::new(x + w / 2.0, y + h / 2.0 + 4.0, text)
            .font_size(12.0)
            .centered(),
    );
}

/// Solid box with a centred caption in the background colour
fn filled_box(b: &mut SvgBuilder, x: f64, y: f64, w: f64, h: f64, text: &str, fill: &str) {
    let bg = b.palette().bg();
    b.add(Rect::new(x, y, w, h).rounded(4.0).fill(fill).no_stroke());
    b.add(
        Text::new(x + w / 2.0, y + h / 2.0 + 4.0, text)
            .font_size(12.0)
            .fill(bg)
            .centered()
            .bold(),
    );
}
