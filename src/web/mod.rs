// web/ - Browser entry point
//
// Gallery renders the scene table into a root element, runs the preload
// gate on mount, and wires preview open/close to the location hash.
// The mask class on the root is driven by a LoadingState subscriber.

mod dom;

pub use dom::BrowserTimer;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::gate::{GateOutcome, PreloadGate, Preloader};
use crate::preview::{self, PreviewNav};
use crate::render::Markup;
use crate::scene::SceneTable;
use crate::state::{LoadingState, Subscription};

const CURRENT_PREVIEW: &str = "preview--current";

#[wasm_bindgen]
pub struct Gallery {
    table: SceneTable,
    document: Document,
    preloader: Preloader<BrowserTimer>,
    nav: Rc<RefCell<PreviewNav>>,
    listeners: Vec<EventListener>,
    _mask: Subscription,
}

#[wasm_bindgen]
impl Gallery {
    #[wasm_bindgen(constructor)]
    pub fn new(root_selector: &str, config_json: &str) -> std::result::Result<Gallery, JsValue> {
        Ok(Self::build(root_selector, config_json)?)
    }

    /// Start preloading and listening. Mounting again cancels the previous mount.
    pub fn mount(&mut self) -> std::result::Result<(), JsValue> {
        self.unmount();

        let window = dom::window()?;
        let sources = dom::image_sources(&window, &self.document)?;
        log::debug!("preloading {} images", sources.len());

        let loads = sources
            .into_iter()
            .map(dom::load_image)
            .collect::<Result<Vec<_>>>()?;
        let started = js_sys::Date::now();
        let gate = self.preloader.mount(loads);
        wasm_bindgen_futures::spawn_local(async move {
            if let GateOutcome::Revealed(report) = gate.await {
                log::debug!(
                    "gate resolved after {:.0}ms, {} of {} images loaded",
                    js_sys::Date::now() - started,
                    report.loaded(),
                    report.total()
                );
            }
        });

        self.listeners = self.listen()?;
        let hash = window.location().hash().map_err(dom::dom_err)?;
        follow(&self.document, &self.nav, &hash);
        Ok(())
    }

    /// Cancel a pending reveal and drop all listeners.
    pub fn unmount(&mut self) {
        self.preloader.unmount();
        self.listeners.clear();
    }

    pub fn is_masked(&self) -> bool {
        self.preloader.state().is_masked()
    }

    pub fn scenes_json(&self) -> std::result::Result<String, JsValue> {
        Ok(self.table.to_json()?)
    }

    pub fn open_preview(&self, index: usize) -> std::result::Result<(), JsValue> {
        let previous = self.nav.borrow_mut().open(index)?;
        show(&self.document, previous, Some(index));
        dom::window()?
            .location()
            .set_hash(&preview::fragment(index))
            .map_err(dom::dom_err)?;
        Ok(())
    }

    pub fn close_preview(&self) -> std::result::Result<(), JsValue> {
        let previous = self.nav.borrow_mut().close();
        show(&self.document, previous, None);
        dom::window()?.location().set_hash("").map_err(dom::dom_err)?;
        Ok(())
    }
}

impl Gallery {
    fn build(root_selector: &str, config_json: &str) -> Result<Self> {
        let config = GalleryConfig::from_json(config_json)?;
        let table = SceneTable::builtin()?;
        let document = dom::document(&dom::window()?)?;
        let root = document
            .query_selector(root_selector)
            .map_err(dom::dom_err)?
            .ok_or_else(|| GalleryError::Dom(format!("no element matches {root_selector}")))?;

        let mut markup = Markup::new();
        markup.content(&table, &config);
        root.set_inner_html(markup.as_str());

        let state = LoadingState::new();
        let mask = mask_class(&root, &config.mask_class, &state)?;
        let nav = Rc::new(RefCell::new(PreviewNav::new(table.len())));

        Ok(Self {
            preloader: Preloader::new(PreloadGate::new(BrowserTimer, config.grace(), state)),
            table,
            document,
            nav,
            listeners: Vec::new(),
            _mask: mask,
        })
    }

    fn listen(&self) -> Result<Vec<EventListener>> {
        let window = dom::window()?;
        let mut listeners = Vec::new();

        let document = self.document.clone();
        let nav = self.nav.clone();
        let location = window.location();
        listeners.push(EventListener::new(&window, "hashchange", move |_| {
            if let Ok(hash) = location.hash() {
                follow(&document, &nav, &hash);
            }
        }));

        let buttons = self
            .document
            .query_selector_all(".preview__close")
            .map_err(dom::dom_err)?;
        for i in 0..buttons.length() {
            let Some(button) = buttons.item(i) else { continue };
            let location = window.location();
            listeners.push(EventListener::new(&button, "click", move |_| {
                // hashchange does the closing
                if let Err(e) = location.set_hash("") {
                    log::warn!("clearing preview hash failed: {:?}", e);
                }
            }));
        }

        Ok(listeners)
    }
}

/// Put the mask class on `root` now and take it off when the state clears.
fn mask_class(root: &Element, class: &str, state: &LoadingState) -> Result<Subscription> {
    if class.is_empty() {
        return Ok(state.subscribe(|_| {}));
    }
    root.class_list().add_1(class).map_err(dom::dom_err)?;

    let root = root.clone();
    let class = class.to_string();
    Ok(state.subscribe(move |masked| {
        let list = root.class_list();
        let res = if masked { list.add_1(&class) } else { list.remove_1(&class) };
        if let Err(e) = res {
            log::warn!("mask class toggle failed: {:?}", e);
        }
    }))
}

fn follow(document: &Document, nav: &RefCell<PreviewNav>, hash: &str) {
    let previous = nav.borrow().current();
    let next = nav.borrow_mut().follow(hash);
    if previous != next {
        show(document, previous, next);
    }
}

fn show(document: &Document, previous: Option<usize>, next: Option<usize>) {
    let toggle = |index: usize, on: bool| {
        let Some(el) = document.get_element_by_id(&preview::element_id(index)) else { return };
        if let Err(e) = el.class_list().toggle_with_force(CURRENT_PREVIEW, on) {
            log::warn!("preview {} toggle failed: {:?}", index, e);
        }
    };
    if let Some(i) = previous.filter(|&i| Some(i) != next) {
        toggle(i, false);
    }
    if let Some(i) = next {
        toggle(i, true);
    }
}
