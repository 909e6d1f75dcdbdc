use log::warn;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::lead_form::LeadForm;
use crate::components::locations_map::LocationsMap;
use crate::config;
use crate::reveal::{self, RevealStrategy};

struct Program {
    age: &'static str,
    title: &'static str,
    text: &'static str,
}

const PROGRAMS: [Program; 3] = [
    Program {
        age: "4–6",
        title: "Алғашқы қадам / Первый шаг",
        text: "Координация, доппен ойын, командада ойнауға үйрену. / Координация, игра с мячом, первые командные упражнения.",
    },
    Program {
        age: "7–10",
        title: "Негізгі топ / Базовая группа",
        text: "Техника, пас, соққы, шағын турнирлер. / Техника, передачи, удары, мини-турниры.",
    },
    Program {
        age: "11–14",
        title: "Жарыс тобы / Соревновательная группа",
        text: "Тактика, физикалық дайындық, қалалық лига. / Тактика, физподготовка, городская лига.",
    },
];

const COACHES: [(&str, &str); 3] = [
    ("Ерлан", "UEFA C, 12 жыл тәжірибе / 12 лет опыта"),
    ("Айдос", "Вратарь, ДЮСШ тренері / тренер ДЮСШ"),
    ("Марат", "ОФП, фитнес / физическая подготовка"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            let observer = reveal::start(RevealStrategy::detect()).unwrap_or_else(|err| {
                warn!("reveal setup failed: {:?}", err);
                None
            });
            move || drop(observer)
        },
        (),
    );

    html! {
        <main class="landing-page" id="top">
            <style>{LANDING_CSS}</style>

            <section class="hero">
                <div class="hero-content reveal">
                    <p class="hero-kicker">{"Астана · 4–14 жас / лет"}</p>
                    <h1>{"ASTANA JAS Football School"}</h1>
                    <p class="hero-subtitle">
                        {"Балаларға арналған футбол мектебі. Алғашқы сабақ тегін. / Футбольная школа для детей. Первое занятие бесплатно."}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#contacts" class="btn btn-primary">{"Жазылу / Записаться"}</AnchorLink>
                        <AnchorLink href="#programs" class="btn btn-ghost">{"Бағдарламалар / Программы"}</AnchorLink>
                    </div>
                </div>
                <div class="hero-form reveal">
                    <LeadForm id="heroForm" />
                </div>
            </section>

            <section id="about" class="section">
                <h2 class="reveal">{"Мектеп туралы / О школе"}</h2>
                <div class="about-grid">
                    <div class="about-card reveal">
                        <strong>{"2"}</strong>
                        <span>{"алаң / площадки"}</span>
                    </div>
                    <div class="about-card reveal">
                        <strong>{"3×"}</strong>
                        <span>{"аптасына / в неделю"}</span>
                    </div>
                    <div class="about-card reveal">
                        <strong>{"12"}</strong>
                        <span>{"баладан артық емес топта / детей в группе максимум"}</span>
                    </div>
                </div>
            </section>

            <section id="programs" class="section">
                <h2 class="reveal">{"Бағдарламалар / Программы"}</h2>
                <div class="programs-grid">
                    { for PROGRAMS.iter().map(|p| html! {
                        <article class="program-card reveal">
                            <span class="program-age">{p.age}</span>
                            <h3>{p.title}</h3>
                            <p>{p.text}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="coaches" class="section">
                <h2 class="reveal">{"Жаттықтырушылар / Тренеры"}</h2>
                <div class="coaches-grid">
                    { for COACHES.iter().map(|(name, role)| html! {
                        <div class="coach-card reveal">
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="locations" class="section">
                <h2 class="reveal">{"Алаңдар / Площадки"}</h2>
                <ul class="locations-list reveal">
                    { for config::LOCATIONS.iter().map(|loc| html! { <li>{loc.name}</li> }) }
                </ul>
                <div class="map-wrap reveal">
                    <LocationsMap />
                </div>
            </section>

            <section id="contacts" class="section contacts">
                <div class="reveal">
                    <h2>{"Байланыс / Контакты"}</h2>
                    <p>
                        {"Өтінім қалдырыңыз, біз хабарласамыз. / Оставьте заявку, и мы перезвоним."}
                    </p>
                    <a class="contact-phone" href="tel:+77010000000">{"+7 (701) 000-00-00"}</a>
                </div>
                <div class="reveal">
                    <LeadForm id="contactForm" submit_label="Жіберу / Отправить" />
                </div>
            </section>

            <footer class="footer">
                <p>{"© ASTANA JAS Football School"}</p>
                <AnchorLink href="#top" class="footer-up">{"↑"}</AnchorLink>
            </footer>
        </main>
    }
}

const LANDING_CSS: &str = r#"
.reveal {
    opacity: 0;
    transform: translateY(18px);
    transition: opacity .6s ease, transform .6s ease;
}
.reveal.is-visible {
    opacity: 1;
    transform: none;
}
.header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(15, 17, 21, .92);
    backdrop-filter: blur(8px);
}
.mobile-menu {
    display: none;
}
.mobile-menu.is-open {
    display: flex;
    flex-direction: column;
}
.form-status.is-error {
    color: #ff6b6b;
}
.form-status.is-success {
    color: #3ddc84;
}
.map {
    width: 100%;
    height: 420px;
    border-radius: 16px;
}
@media (max-width: 820px) {
    .nav-desktop,
    .header-phone {
        display: none;
    }
}
@media (min-width: 821px) {
    .burger,
    .mobile-menu.is-open {
        display: none;
    }
}
"#;
