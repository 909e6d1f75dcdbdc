use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::lead::{submit, FormStatus, PendingClear};
use crate::phone::format_phone;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub id: AttrValue,
    #[prop_or(AttrValue::Static("Сынақ сабаққа жазылу / Записаться на пробное"))]
    pub submit_label: AttrValue,
}

/// Trial-lesson request form. Validation happens in the browser and nothing
/// leaves the page.
#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let status = use_state(FormStatus::default);
    let clear_timer = use_mut_ref(PendingClear::<Timeout>::default);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_phone(&input.value());
            // Controlled inputs skip the DOM write when state is unchanged.
            input.set_value(&formatted);
            phone.set(formatted);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let status = status.clone();
        let clear_timer = clear_timer.clone();
        let form_id = props.id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut pending = clear_timer.borrow_mut();
            if pending.is_armed() {
                debug!("{}: dropping pending status clear", form_id);
            }
            pending.disarm();

            let next = submit(&name, &phone);
            match &next.status {
                FormStatus::Rejected(err) => info!("{}: lead rejected: {:?}", form_id, err),
                _ => info!("{}: lead accepted", form_id),
            }
            if next.clears_later() {
                let status = status.clone();
                pending.arm(Timeout::new(config::STATUS_CLEAR_MS, move || {
                    status.set(FormStatus::Idle);
                }));
            }
            name.set(next.name);
            phone.set(next.phone);
            status.set(next.status);
        })
    };

    let name_id = format!("{}-name", props.id);
    let phone_id = format!("{}-phone", props.id);

    html! {
        <form id={props.id.clone()} class="lead-form" {onsubmit}>
            <label for={name_id.clone()}>{"Аты / Имя"}</label>
            <input
                id={name_id}
                name="name"
                type="text"
                autocomplete="name"
                placeholder="Аты-жөні / Имя ребёнка или родителя"
                value={(*name).clone()}
                oninput={on_name}
            />
            <label for={phone_id.clone()}>{"Телефон"}</label>
            <input
                id={phone_id}
                name="phone"
                type="tel"
                inputmode="tel"
                autocomplete="tel"
                placeholder="+7 (___) ___-__-__"
                value={(*phone).clone()}
                oninput={on_phone}
            />
            <button type="submit" class="btn btn-primary">{props.submit_label.clone()}</button>
            <p class={status.class()} role="status" aria-live="polite">
                { status.message().unwrap_or_default() }
            </p>
        </form>
    }
}
