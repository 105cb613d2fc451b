use dioxus::prelude::*;
use crate::components::ThemeToggle;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                id: "navbar",
                class: "navbar bg-base-100 shadow-lg transition-colors duration-200",
                div {
                    class: "flex-1",
                    Link {
                        class: "btn btn-ghost text-xl",
                        to: Route::Home,
                        "Theme Starter"
                    }
                }
                div {
                    class: "flex-none",
                    ThemeToggle {}
                }
            }
            Outlet::<Route> {}
        }
    }
}
