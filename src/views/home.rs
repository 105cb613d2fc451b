use dioxus::prelude::*;
use crate::components::{ ThemeContext, ThemePicker };

#[component]
pub fn Home() -> Element {
    let current = use_context::<ThemeContext>().theme();

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Welcome to Theme Starter"
            }
            p {
                class: "text-base-content/70 mb-6",
                "Dioxus, Tailwind and daisyUI wired together. The theme you pick is remembered across reloads."
            }
            div {
                class: "card bg-base-200 shadow-md max-w-sm",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Appearance" }
                    p { "Active theme: {current}" }
                    ThemePicker {}
                }
            }
        }
    }
}
