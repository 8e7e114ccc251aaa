use yew::prelude::*;

use crate::components::features::FeatureGrid;
use crate::components::footer::Footer;
use crate::components::hero::Hero;

const STEPS: &[(&str, &str)] = &[
    ("Elige tu tema", "Escribe el tema o pega tu plan de clase."),
    ("Ajusta el nivel", "Indica el grado, la duración y el enfoque que buscas."),
    ("Presenta", "Revisa las diapositivas, edita lo que quieras y exporta."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Hero />

            <section id="como-funciona" class="how-it-works">
                <h2>{"Así de fácil"}</h2>
                <p>{"De la idea a la presentación en tres pasos."}</p>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                        <div class="step" key={*title}>
                            <span class="step-number">{i + 1}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <FeatureGrid />
            <Footer />

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #0f172a;
                        color: #e2e8f0;
                    }
                    .how-it-works {
                        padding: 6rem 2rem;
                        max-width: 1000px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .how-it-works h2 {
                        font-size: 2.25rem;
                        color: #fff;
                    }
                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .step-number {
                        display: inline-flex;
                        width: 2.5rem;
                        height: 2.5rem;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: rgba(56, 189, 248, 0.15);
                        color: #38bdf8;
                        font-weight: 700;
                    }
                    @media (max-width: 768px) {
                        .steps-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
