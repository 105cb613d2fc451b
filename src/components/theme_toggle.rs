use dioxus::prelude::*;
use crate::theme::Theme;
use super::ThemeContext;

#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_context::<ThemeContext>();
    let is_dark = ctx.is_dark();
    let label = if is_dark { "Switch to light theme" } else { "Switch to dark theme" };

    rsx! {
        button {
            class: "btn btn-ghost btn-circle",
            title: label,
            aria_label: label,
            onclick: move |_| ctx.toggle_theme(),
            if is_dark {
                "🌞"
            } else {
                "🌙"
            }
        }
    }
}

/// Explicit selection of either theme.
#[component]
pub fn ThemePicker() -> Element {
    let ctx = use_context::<ThemeContext>();
    let current = ctx.theme();

    rsx! {
        select {
            class: "select select-bordered",
            value: "{current}",
            onchange: move |evt: Event<FormData>| {
                if let Err(e) = ctx.set_theme_str(&evt.value()) {
                    log::error!("Failed to set theme: {}", e);
                }
            },
            for theme in Theme::all() {
                option {
                    value: "{theme}",
                    selected: *theme == current,
                    "{theme}"
                }
            }
        }
    }
}
