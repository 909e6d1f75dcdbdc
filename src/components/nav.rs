use web_sys::{window, Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::menu::{key_action, panel_click_action, MenuAction, MenuContext};

const SECTIONS: [(&str, &str); 5] = [
    ("#about", "Мектеп туралы"),
    ("#programs", "Бағдарламалар"),
    ("#coaches", "Жаттықтырушылар"),
    ("#locations", "Алаңдар"),
    ("#contacts", "Байланыс"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu: MenuContext,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = props.menu.clone();

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = key_action(&e.key()) {
                menu.dispatch(action);
            }
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("resize", move |_: Event| {
            let width = window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64());
            if let Some(width) = width {
                menu.dispatch(MenuAction::Resized(width));
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Any link inside the panel closes it, including tel: and external ones.
    let close_on_link = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            let on_link = e
                .target_dyn_into::<Element>()
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            if let Some(action) = panel_click_action(on_link) {
                menu.dispatch(action);
            }
        })
    };

    let links = |class: &'static str| -> Html {
        SECTIONS
            .iter()
            .map(|(href, label)| {
                html! {
                    <AnchorLink href={*href} class={class}>{*label}</AnchorLink>
                }
            })
            .collect()
    };

    html! {
        <header class="header">
            <div class="header-inner">
                <AnchorLink href="#top" class="logo">
                    <span class="logo-mark">{"⚽"}</span>
                    {"ASTANA JAS"}
                </AnchorLink>
                <nav class="nav-desktop">
                    { links("nav-link") }
                </nav>
                <a class="header-phone" href="tel:+77010000000">{"+7 (701) 000-00-00"}</a>
                <button
                    id="burgerBtn"
                    class="burger"
                    aria-label="Мәзір / Меню"
                    aria-controls="mobileMenu"
                    aria-expanded={menu.aria_expanded()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div
                id="mobileMenu"
                class={classes!("mobile-menu", menu.open.then_some("is-open"))}
                aria-hidden={menu.aria_hidden()}
                onclick={close_on_link}
            >
                { links("mobile-link") }
                <a class="mobile-link mobile-phone" href="tel:+77010000000">{"+7 (701) 000-00-00"}</a>
            </div>
        </header>
    }
}
