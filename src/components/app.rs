use super::fractal_view::FractalView;
use crate::config::ViewerConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Loaded once; the viewer is built around it at mount.
    let config = use_state(ViewerConfig::load);
    html! { <FractalView config={(*config).clone()} /> }
}
