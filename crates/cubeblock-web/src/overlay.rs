use crate::constants::*;
use crate::dom;
use cubeblock_core::overlay::{OverlayFrame, LAYER_INFO};
use web_sys as web;

/// Inline style for the info panel at `frame`.
#[inline]
pub fn panel_style(frame: &OverlayFrame) -> String {
    if frame.layer.is_none() {
        return "opacity:0;visibility:hidden".to_string();
    }
    format!(
        "opacity:{:.3};transform:translateY({:.1}px)",
        frame.opacity, frame.offset_px
    )
}

/// DOM side of the layer info panel and the intro title.
pub struct OverlayView {
    panel: web::HtmlElement,
    title: web::Element,
    description: web::Element,
    intro_title: Option<web::HtmlElement>,
    shown_layer: Option<usize>,
    last_style: String,
}

impl OverlayView {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let intro_title = dom::element_by_id::<web::HtmlElement>(document, INTRO_TITLE_ID)
            .map_err(|e| log::warn!("[overlay] {}", e))
            .ok();
        Ok(Self {
            panel: dom::element_by_id(document, LAYER_INFO_ID)?,
            title: dom::element_by_id(document, LAYER_TITLE_ID)?,
            description: dom::element_by_id(document, LAYER_DESCRIPTION_ID)?,
            intro_title,
            shown_layer: None,
            last_style: String::new(),
        })
    }

    pub fn apply(&mut self, frame: &OverlayFrame) {
        if frame.layer != self.shown_layer {
            if let Some(info) = frame.layer.and_then(|i| LAYER_INFO.get(i)) {
                self.title.set_text_content(Some(info.title));
                self.description.set_text_content(Some(info.description));
            }
            log::info!("[overlay] panel {:?} -> {:?}", self.shown_layer, frame.layer);
            self.shown_layer = frame.layer;
        }
        // Skip DOM writes while the panel is settled
        let style = panel_style(frame);
        if style != self.last_style {
            let _ = self.panel.set_attribute("style", &style);
            self.last_style = style;
        }
    }

    pub fn set_intro_opacity(&self, opacity: f32) {
        if let Some(el) = &self.intro_title {
            dom::set_style(el, "opacity", &format!("{:.3}", opacity));
        }
    }
}
