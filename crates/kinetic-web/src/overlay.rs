use crate::dom;
use kinetic_core::HudFrame;
use web_sys as web;

// Element ids of the phase monitor and control panel.
const BANNER_TITLE: &str = "phase-title";
const BANNER_SUBTITLE: &str = "phase-subtitle";
const MONITOR: &str = "phase-monitor";
const PROGRESS_FILL: &str = "phase-progress";
const PHASE_TEXT: &str = "phase-text";
const TENSION_TEXT: &str = "tension-text";
const BUTTON_CAPTION: &str = "hold-caption";
const HOLD_BUTTON: &str = "hold-button";

/// Push the HUD values of this frame into the DOM.
pub fn update_hud(document: &web::Document, hud: &HudFrame) {
    let tone = hud.banner.tone.css_class();
    dom::set_text(document, BANNER_TITLE, hud.banner.title);
    dom::set_text(document, BANNER_SUBTITLE, hud.banner.subtitle);
    dom::set_tone_class(document, MONITOR, tone);
    dom::set_tone_class(document, HOLD_BUTTON, tone);
    dom::set_width_percent(document, PROGRESS_FILL, hud.progress);
    dom::set_text(document, PHASE_TEXT, hud.phase_label.as_str());
    dom::set_text(document, TENSION_TEXT, &hud.tension);
    dom::set_text(document, BUTTON_CAPTION, hud.button);
}
