//! Site navbar with a mobile menu toggle and scroll-aware styling.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::scroll;

/// Sections linked from the navbar; anchors match section ids on the page.
const NAV_LINKS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#stats", "Why Us"),
    ("#testimonials", "Testimonials"),
    ("#faq", "FAQ"),
    ("#booking", "Book Now"),
];

/// Fixed page header.
///
/// The hamburger button toggles the mobile menu; activating any nav link
/// closes it again and smooth-scrolls to the target section. Past a small
/// scroll offset the navbar switches to its compact `scrolled` style.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    // Window scroll drives the navbar style and back-to-top visibility.
    Effect::new(move || {
        scroll::bind_scroll_listener(move |offset_y| {
            nav.update(|n| n.on_scroll(offset_y));
        });
    });

    // While the menu is open the body carries a scroll-lock class.
    Effect::new(move || {
        scroll::set_body_scroll_lock(nav.get().menu_open);
    });

    let navbar_class = move || {
        if nav.get().navbar_scrolled {
            "navbar scrolled"
        } else {
            "navbar"
        }
    };
    let menu_class = move || {
        if nav.get().menu_open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    };
    let button_class = move || {
        if nav.get().menu_open {
            "mobile-menu-btn active"
        } else {
            "mobile-menu-btn"
        }
    };

    let on_toggle = move |_| nav.update(NavState::toggle_menu);

    let on_brand = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        nav.update(NavState::close_menu);
        scroll::scroll_to_top();
    };

    view! {
        <header class=navbar_class>
            <nav class="navbar__inner">
                <a href="#" class="navbar__brand" on:click=on_brand>
                    "Serene Day Spa"
                </a>
                <button class=button_class aria-label="Toggle navigation" on:click=on_toggle>
                    <span class="mobile-menu-btn__bar"></span>
                    <span class="mobile-menu-btn__bar"></span>
                    <span class="mobile-menu-btn__bar"></span>
                </button>
                <ul class=menu_class>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            let target_id = href.trim_start_matches('#');
                            let on_link = move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                nav.update(NavState::close_menu);
                                scroll::scroll_to_anchor(target_id);
                            };
                            view! {
                                <li>
                                    <a class="nav-link" href=*href on:click=on_link>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </header>
    }
}
