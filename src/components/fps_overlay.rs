use crate::util::{format_fps, format_zoom};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FpsOverlayProps {
    pub fps: f64,
    pub zoom: f64,
    pub show: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(FpsOverlay)]
pub fn fps_overlay(props: &FpsOverlayProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    if !props.show {
        // small handle to bring the readout back
        return html! {<button onclick={toggle_cb} title="Show FPS" style="position:absolute; top:8px; left:8px; z-index:1; padding:2px 6px; font-family:monospace; font-size:11px; opacity:0.5;">{"FPS"}</button>};
    }
    html! {<div onclick={toggle_cb} title="Click to hide" style="position:absolute; top:8px; left:8px; background:rgba(0,0,0,0.5); color:#0f0; padding:4px; font-family:monospace; z-index:1; cursor:pointer; font-variant-numeric:tabular-nums;">
        { format_fps(props.fps) }
        <div style="opacity:0.75; font-size:11px;">{ format_zoom(props.zoom) }</div>
    </div>}
}
