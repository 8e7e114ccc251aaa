use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contacto" class="footer-cta">
            <div class="footer-content">
                <h2>{"¿Listo para dar tu próxima clase?"}</h2>
                <p class="subtitle">{"Escríbenos y te mostramos TecCreate con tu propio tema."}</p>
                <a href="mailto:hola@teccreate.app" class="hero-cta">{"Solicitar demo"}</a>
                <div class="footer-links">
                    <Link<Route> to={Route::Home}>{"Inicio"}</Link<Route>>
                    {" | "}
                    <a href="#features">{"Funciones"}</a>
                    {" | "}
                    <a href="#como-funciona">{"Cómo funciona"}</a>
                </div>
                <p class="copyright">{"© TecCreate. Hecho para docentes."}</p>
            </div>
            <style>
                {r#"
                    .footer-cta {
                        padding: 6rem 2rem 3rem;
                        background: linear-gradient(180deg, transparent, rgba(37, 99, 235, 0.15));
                        text-align: center;
                    }
                    .footer-content h2 {
                        font-size: 2.25rem;
                        color: #fff;
                    }
                    .footer-content .subtitle {
                        margin: 1rem 0 2rem;
                        color: rgba(255, 255, 255, 0.75);
                    }
                    .footer-links {
                        margin-top: 3rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .footer-links a {
                        color: #38bdf8;
                        text-decoration: none;
                    }
                    .copyright {
                        margin-top: 1.5rem;
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </footer>
    }
}
