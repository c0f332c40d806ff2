use dioxus::prelude::*;

use crate::icons::FaCartShopping;
use crate::{Icon, STOREFRONT_CSS};

/// Top bar: brand on the left, platform-supplied links on the right.
#[component]
pub fn Navbar(brand: String, on_home: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: STOREFRONT_CSS }
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_home.call(()),
                Icon { icon: FaCartShopping, width: 18, height: 18 }
                span { " {brand}" }
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
