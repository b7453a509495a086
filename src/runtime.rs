//! Browser runtime
//!
//! `Toolbox` owns all state shared between event handlers: the focus tracker,
//! the loaded templates and the position store. Handlers are registered once
//! in [`Toolbox::start`] and hold `Rc` clones of what they need.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlTextAreaElement};

use crate::config::ToolboxConfig;
use crate::dom::web::as_text_area;
use crate::error::{dom_err, Result, ToolboxError};
use crate::focus::FocusTracker;
use crate::insert::{insert_text, Insertion};
use crate::panel::render::{
    build_panel, ensure_stylesheet, install_drag, render_templates, restore_position, PickHandler,
};
use crate::panel::storage::LocalStorage;
use crate::panel::{panel_action, PanelAction, PositionStore};
use crate::templates::loader::fetch_templates;
use crate::templates::Template;
use crate::watcher::watch_editor_insertions;

pub type SharedTracker = Rc<RefCell<FocusTracker<HtmlTextAreaElement>>>;

pub struct Toolbox {
    config: ToolboxConfig,
    document: Document,
    tracker: SharedTracker,
    /// `None` until the template fetch succeeds
    templates: RefCell<Option<Vec<Template>>>,
    positions: Option<Rc<PositionStore<LocalStorage>>>,
}

impl Toolbox {
    pub fn new(config: ToolboxConfig) -> Result<Rc<Self>> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ToolboxError::Dom("no document".to_string()))?;

        let positions = match LocalStorage::open() {
            Ok(storage) => Some(Rc::new(PositionStore::new(
                storage,
                config.position_keys.clone(),
            ))),
            Err(e) => {
                log::warn!("[toolbox] panel position will not persist: {}", e);
                None
            }
        };

        Ok(Rc::new(Self {
            tracker: Rc::new(RefCell::new(FocusTracker::new(config.editor_id.clone()))),
            config,
            document,
            templates: RefCell::new(None),
            positions,
        }))
    }

    /// Create the toolbox, subscribe to page events and start loading templates
    pub fn start(config: ToolboxConfig) -> Result<Rc<Self>> {
        let toolbox = Self::new(config)?;
        toolbox.install_focus_tracking()?;
        toolbox.install_editor_watcher()?;
        toolbox.load_templates();
        log::info!("[toolbox] started (editor id '{}')", toolbox.config.editor_id);
        Ok(toolbox)
    }

    /// Loaded templates, `None` while loading or after a failed fetch
    pub fn templates(&self) -> Option<Vec<Template>> {
        self.templates.borrow().clone()
    }

    fn install_focus_tracking(&self) -> Result<()> {
        // `focus` does not bubble: listen in the capture phase
        let tracker = Rc::clone(&self.tracker);
        let onfocus = Closure::wrap(Box::new(move |event: Event| {
            tracker.borrow_mut().observe_focus(as_text_area(event.target()));
        }) as Box<dyn FnMut(_)>);
        self.document
            .add_event_listener_with_callback_and_bool("focus", onfocus.as_ref().unchecked_ref(), true)
            .map_err(dom_err)?;
        onfocus.forget();

        let tracker = Rc::clone(&self.tracker);
        let onclick = Closure::wrap(Box::new(move |event: Event| {
            tracker.borrow_mut().observe_click(as_text_area(event.target()));
        }) as Box<dyn FnMut(_)>);
        self.document
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        onclick.forget();

        Ok(())
    }

    fn install_editor_watcher(self: &Rc<Self>) -> Result<()> {
        let toolbox = Rc::clone(self);
        let on_editor: Rc<dyn Fn()> = Rc::new(move || {
            if let Err(e) = toolbox.ensure_panel() {
                log::warn!("[toolbox] could not rebuild panel: {}", e);
            }
        });
        // The observer stays alive through its registration on <body>
        watch_editor_insertions(&self.document, &self.config.editor_id, on_editor)?;
        Ok(())
    }

    fn load_templates(self: &Rc<Self>) {
        let toolbox = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let url = toolbox.config.templates_url.clone();
            match fetch_templates(&url).await {
                Ok(templates) => {
                    log::info!("[toolbox] loaded {} templates", templates.len());
                    toolbox.set_templates(templates);
                }
                Err(e) => log::error!("[toolbox] error fetching templates from {}: {}", url, e),
            }
        });
    }

    /// Replace the template list; rebuilds the list of an existing panel
    pub fn set_templates(self: &Rc<Self>, templates: Vec<Template>) {
        *self.templates.borrow_mut() = Some(templates);

        let content = self.document.get_element_by_id(&self.config.content_id());
        let result = match content {
            Some(content) => {
                let templates = self.templates.borrow().clone().unwrap_or_default();
                render_templates(&self.document, &content, &templates, self.pick_handler())
            }
            None => self.ensure_panel().map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("[toolbox] could not render templates: {}", e);
        }
    }

    fn pick_handler(self: &Rc<Self>) -> PickHandler {
        let toolbox = Rc::clone(self);
        Rc::new(move |template: &Template| {
            toolbox.insert(&template.message);
        })
    }

    /// Build the panel unless one exists or templates are not loaded yet
    pub fn ensure_panel(self: &Rc<Self>) -> Result<PanelAction> {
        let present = self.document.get_element_by_id(&self.config.panel_id).is_some();
        let templates = self.templates.borrow().clone();
        let action = panel_action(present, templates.is_some());
        log::debug!("[toolbox] ensure panel: {:?}", action);

        if action != PanelAction::Build {
            return Ok(action);
        }
        let templates = templates.unwrap_or_default();

        ensure_stylesheet(&self.document, &self.config)?;
        let (panel, header) = build_panel(&self.document, &self.config, &templates, self.pick_handler())?;

        let body = self
            .document
            .body()
            .ok_or_else(|| ToolboxError::Dom("document has no <body>".to_string()))?;
        body.append_child(&panel).map_err(dom_err)?;

        if let Some(positions) = &self.positions {
            restore_position(&panel, &**positions);
        }
        install_drag(&self.document, &panel, &header, self.positions.clone())?;

        log::info!("[toolbox] panel built with {} templates", templates.len());
        Ok(action)
    }

    /// Insert `text` into the current target field
    ///
    /// The field is focused again after a short delay, after the host page has
    /// finished reacting to the click.
    pub fn insert(&self, text: &str) -> Option<Insertion<HtmlTextAreaElement>> {
        let target = self.tracker.borrow().resolve_target(&self.document);
        let insertion = insert_text(&self.tracker, &self.document, text, target)?;

        let field = insertion.field.clone();
        let refocus = Closure::once_into_js(move || {
            if let Err(e) = field.focus() {
                log::debug!("[toolbox] deferred refocus failed: {:?}", e);
            }
        });
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                refocus.unchecked_ref(),
                self.config.refocus_delay_ms,
            ) {
                log::debug!("[toolbox] could not schedule refocus: {:?}", e);
            }
        }

        Some(insertion)
    }
}
