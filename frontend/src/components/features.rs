use yew::prelude::*;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "Generación con IA",
        description: "Escribe un tema y obtén una presentación estructurada con objetivos, contenido y cierre.",
    },
    Feature {
        icon: "📚",
        title: "Alineada al currículo",
        description: "Adapta el nivel y el vocabulario al grado de tus estudiantes.",
    },
    Feature {
        icon: "🎨",
        title: "Diseños listos para clase",
        description: "Plantillas legibles en proyector, con imágenes e íconos sugeridos.",
    },
    Feature {
        icon: "📝",
        title: "Actividades y evaluaciones",
        description: "Incluye preguntas de repaso y dinámicas para cada sección.",
    },
    Feature {
        icon: "⚡",
        title: "Edición rápida",
        description: "Ajusta cualquier diapositiva y regenera solo lo que necesitas.",
    },
    Feature {
        icon: "📤",
        title: "Exporta y comparte",
        description: "Descarga en PowerPoint o PDF y compártela con tu clase.",
    },
];

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    html! {
        <section id="features" class="features">
            <h2>{"Todo lo que necesitas para preparar tu clase"}</h2>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card" key={feature.title}>
                        <span class="feature-icon">{feature.icon}</span>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .features {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .features h2 {
                        font-size: 2.25rem;
                        color: #fff;
                        margin-bottom: 3rem;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .feature-card {
                        padding: 2rem;
                        text-align: left;
                        background: rgba(30, 41, 59, 0.7);
                        border: 1px solid rgba(56, 189, 248, 0.1);
                        border-radius: 16px;
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .feature-card:hover {
                        transform: translateY(-4px);
                        border-color: rgba(56, 189, 248, 0.4);
                    }
                    .feature-icon {
                        font-size: 2rem;
                    }
                    .feature-card h3 {
                        margin: 1rem 0 0.5rem;
                        color: #fff;
                    }
                    .feature-card p {
                        color: rgba(255, 255, 255, 0.7);
                    }
                    @media (max-width: 960px) {
                        .features-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 600px) {
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn titles_are_unique_keys() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn every_card_is_filled_in() {
        assert!(!FEATURES.is_empty());
        for feature in FEATURES {
            assert!(!feature.icon.is_empty());
            assert!(!feature.title.trim().is_empty());
            assert!(!feature.description.trim().is_empty());
        }
    }
}
