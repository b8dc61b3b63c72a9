#![cfg(target_arch = "wasm32")]
use cubeblock_core::overlay::OverlayTransition;
use cubeblock_core::scene::{SceneState, TimelineConfig, TimelineContext};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod gpu;
mod header;
mod hero;
mod input;
mod overlay;
mod reveal;
mod ribbons;
mod scroll;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cubeblock-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let container: web::Element = dom::element_by_id(&document, CONTAINER_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas = canvas.clone();
        dom::add_listener(&window, "resize", move |_| dom::sync_canvas_backing_size(&canvas));
    }

    let timeline = TimelineContext::new(TimelineConfig::default())?;
    let state = SceneState::new(&timeline);

    // Pointer drives the scene light and the hero accent gradient
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    {
        let mouse = mouse.clone();
        let canvas = canvas.clone();
        let accent = dom::element_by_id::<web::HtmlElement>(&document, HERO_ACCENT_ID).ok();
        let win = window.clone();
        dom::add_listener(&window, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            mouse.borrow_mut().ndc = input::pointer_ndc(ev, &canvas);
            if let Some(accent) = &accent {
                let (width, _) = dom::inner_size(&win);
                let angle = hero::gradient_angle_deg(
                    ev.client_x() as f32,
                    width as f32,
                    HERO_GRADIENT_BASE_DEG,
                    HERO_GRADIENT_SPAN_DEG,
                );
                dom::set_style(accent, "--hero-gradient-angle", &format!("{:.1}deg", angle));
            }
        });
    }

    // Header hides while scrolling down
    match document.get_element_by_id(HEADER_ID) {
        Some(el) => {
            let mut rule = header::HeaderVisibility::new(HEADER_HIDE_AFTER_PX);
            let win = window.clone();
            dom::add_listener(&window, "scroll", move |_| {
                let y = win.scroll_y().unwrap_or(0.0);
                if rule.on_scroll(y) {
                    header::apply(&el, HEADER_HIDDEN_CLASS, rule.visible());
                }
            });
        }
        None => log::warn!("[header] missing #{}", HEADER_ID),
    }

    let hero = document
        .get_element_by_id(HERO_ID)
        .map(|el| hero::HeroReveal::start(&window, el, HERO_VISIBLE_CLASS, HERO_REVEAL_MS));

    let ribbons = dom::element_by_id::<web::HtmlCanvasElement>(&document, RIBBON_CANVAS_ID)
        .and_then(|canvas| ribbons::RibbonCanvas::new(window.clone(), canvas))
        .map_err(|e| log::warn!("[hero] ribbons disabled: {}", e))
        .ok();

    match reveal::observe_reveals(&document, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS) {
        Ok(n) => log::info!("[reveal] watching {} cards", n),
        Err(e) => log::warn!("[reveal] {}", e),
    }

    let overlay_view = overlay::OverlayView::new(&document)?;
    let gpu = frame::init_gpu(&canvas, &timeline).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        timeline,
        state,
        scroll: scroll::ScrollSource::new(window, container),
        mouse,
        overlay: OverlayTransition::default(),
        overlay_view,
        canvas,
        gpu,
        started: Instant::now(),
        hero,
        ribbons,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
