use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <p>{ "© FlexiCars. Drive your way, every day." }</p>
            </div>
        </footer>
    }
}
