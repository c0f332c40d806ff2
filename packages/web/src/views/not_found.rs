use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No route for {}", path);

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "Oops! Page not found" }
            Link { to: Route::Home {}, "Return to Home" }
        }
    }
}
