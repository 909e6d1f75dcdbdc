use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::menu::{MenuAction, MenuContext};
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// `<a href="#section">` that scrolls smoothly below the fixed header and
/// closes the mobile menu. Falls back to normal navigation when the target
/// does not exist.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let menu = use_context::<MenuContext>();

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = scroll::resolve_anchor(&href) else {
                return;
            };
            e.prevent_default();
            if let Some(menu) = &menu {
                menu.dispatch(MenuAction::Set(false));
            }
            if let Err(err) = scroll::scroll_to_element(&target) {
                warn!("smooth scroll to {} failed: {:?}", href, err);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
