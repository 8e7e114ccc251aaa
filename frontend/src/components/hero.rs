use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

pub const ROTATING_WORDS: &[&str] = &["clases", "talleres", "tutorías", "conferencias"];

/// Index of the headline word currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub index: usize,
}

impl Rotation {
    pub fn word(&self) -> &'static str {
        ROTATING_WORDS[self.index % ROTATING_WORDS.len()]
    }
}

impl Reducible for Rotation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Rotation {
            index: (self.index + 1) % ROTATING_WORDS.len(),
        })
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let rotation = use_reducer(Rotation::default);

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::HERO_ROTATION_MS, move || dispatcher.dispatch(()));
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <span class="hero-badge">{"IA para docentes"}</span>
                <h1 class="hero-title">
                    {"Crea presentaciones para tus "}
                    <span class="hero-rotating">{rotation.word()}</span>
                    {" en segundos"}
                </h1>
                <p class="hero-subtitle">
                    {"TecCreate convierte tu tema o tu plan de clase en diapositivas listas para enseñar."}
                </p>
                <div class="hero-cta-group">
                    <a href="#features" class="hero-cta">{"Descubre cómo"}</a>
                    <a href="#como-funciona" class="hero-secondary">{"Ver el proceso"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 2rem 4rem;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 30% 20%, #1e3a8a 0%, #0f172a 60%);
                        z-index: -1;
                    }
                    .hero-content {
                        max-width: 900px;
                        text-align: center;
                    }
                    .hero-badge {
                        display: inline-block;
                        margin-bottom: 1.5rem;
                        padding: 0.35rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(56, 189, 248, 0.4);
                        color: #38bdf8;
                        font-size: 0.9rem;
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        line-height: 1.1;
                        color: #fff;
                    }
                    .hero-rotating {
                        display: inline-block;
                        background: linear-gradient(45deg, #38bdf8, #a78bfa);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: fadeUp 0.6s ease;
                    }
                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-subtitle {
                        margin: 1.5rem auto 2.5rem;
                        max-width: 640px;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.25rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-cta {
                        padding: 0.9rem 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(45deg, #2563eb, #38bdf8);
                        color: #fff;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .hero-secondary {
                        padding: 0.9rem 2rem;
                        color: #e2e8f0;
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_through_every_word() {
        let mut rotation = Rc::new(Rotation::default());
        let mut seen = Vec::new();
        for _ in 0..ROTATING_WORDS.len() {
            seen.push(rotation.word());
            rotation = rotation.reduce(());
        }
        assert_eq!(seen, ROTATING_WORDS);
        assert_eq!(rotation.index, 0);
    }

    #[test]
    fn out_of_range_index_still_names_a_word() {
        let rotation = Rotation { index: ROTATING_WORDS.len() + 1 };
        assert_eq!(rotation.word(), ROTATING_WORDS[1]);
    }
}
