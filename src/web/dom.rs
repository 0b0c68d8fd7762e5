// dom.rs - Image discovery and load futures in the browser
//
// Every <img> source plus every element's computed background-image
// is probed with a detached Image element. The probe resolves on
// "load" or "error"; dropping it removes both listeners.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement, Window};

use crate::css;
use crate::error::{GalleryError, Result};
use crate::gate::{ImageOutcome, Timer};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Sleep = TimeoutFuture;

    fn sleep(&self, duration: Duration) -> TimeoutFuture {
        TimeoutFuture::new(duration.as_millis().min(u32::MAX as u128) as u32)
    }
}

pub fn dom_err(value: JsValue) -> GalleryError {
    GalleryError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| GalleryError::Dom("no window".into()))
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or_else(|| GalleryError::Dom("no document".into()))
}

/// Image URLs referenced by the live document, first-seen order, no repeats.
pub fn image_sources(window: &Window, document: &Document) -> Result<Vec<String>> {
    let mut sources: Vec<String> = Vec::new();
    let mut push = |src: String| {
        if !src.is_empty() && !sources.contains(&src) {
            sources.push(src);
        }
    };

    let nodes = document.query_selector_all("*").map_err(dom_err)?;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
            let src = img.current_src();
            push(if src.is_empty() { img.src() } else { src });
        }

        let Ok(Some(style)) = window.get_computed_style(&el) else { continue };
        if let Ok(value) = style.get_property_value("background-image") {
            css::background_urls(&value).into_iter().for_each(&mut push);
        }
    }

    Ok(sources)
}

/// Start loading `src`; resolves with its outcome.
pub fn load_image(src: String) -> Result<impl Future<Output = ImageOutcome>> {
    let img = HtmlImageElement::new().map_err(dom_err)?;
    let (tx, rx) = oneshot::channel();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let settle = |outcome: ImageOutcome| {
        let tx = tx.clone();
        move |_: &web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(outcome);
            }
        }
    };
    let on_load = EventListener::once(&img, "load", settle(ImageOutcome::Loaded));
    let on_error = EventListener::once(&img, "error", settle(ImageOutcome::Failed));
    img.set_src(&src);

    Ok(async move {
        // A dropped sender means the probe was torn down; treat as settled.
        let outcome = rx.await.unwrap_or(ImageOutcome::Failed);
        drop((on_load, on_error, img));
        if outcome == ImageOutcome::Failed {
            log::warn!("image failed to load: {src}");
        }
        outcome
    })
}
