//! Panel DOM construction
//!
//! Builds:
//!
//! ```html
//! <div id="{panel_id}" class="toolbox-window">
//!   <div class="toolbox-header"><h2>{title} <a class="toolbox-source">Source</a></h2></div>
//!   <div id="{panel_id}-content" class="toolbox-content">
//!     <div class="toolbox-template-item">{template title}</div> ...
//!   </div>
//! </div>
//! ```
//!
//! Listener closures live as long as the page and are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::position::{DragGesture, KeyValueStore, PanelPosition, PositionStore};
use super::style::panel_css;
use crate::config::ToolboxConfig;
use crate::error::{describe_js, dom_err, Result, ToolboxError};
use crate::templates::{sorted, Template};

/// Called with the template whose title was clicked
pub type PickHandler = Rc<dyn Fn(&Template)>;

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement> {
    document
        .create_element(tag)
        .map_err(dom_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ToolboxError::Dom(format!("<{}> is not an HTML element", tag)))
}

/// Inject the panel stylesheet once
pub fn ensure_stylesheet(document: &Document, config: &ToolboxConfig) -> Result<()> {
    let style_id = config.style_id();
    if document.get_element_by_id(&style_id).is_some() {
        return Ok(());
    }

    let style = document.create_element("style").map_err(dom_err)?;
    style.set_id(&style_id);
    style.set_text_content(Some(&panel_css(&config.panel_id)));

    let head = document
        .head()
        .ok_or_else(|| ToolboxError::Dom("document has no <head>".to_string()))?;
    head.append_child(&style).map_err(dom_err)?;
    Ok(())
}

/// Build the panel element (not yet attached)
///
/// Returns the panel and its header, which is the drag handle.
pub fn build_panel(
    document: &Document,
    config: &ToolboxConfig,
    templates: &[Template],
    on_pick: PickHandler,
) -> Result<(HtmlElement, HtmlElement)> {
    let panel = create_html(document, "div")?;
    panel.set_id(&config.panel_id);
    panel.set_class_name("toolbox-window");

    let header = build_header(document, config)?;
    panel.append_child(&header).map_err(dom_err)?;

    let content = create_html(document, "div")?;
    content.set_id(&config.content_id());
    content.set_class_name("toolbox-content");
    render_templates(document, &content, templates, on_pick)?;
    panel.append_child(&content).map_err(dom_err)?;

    Ok((panel, header))
}

fn build_header(document: &Document, config: &ToolboxConfig) -> Result<HtmlElement> {
    let header = create_html(document, "div")?;
    header.set_class_name("toolbox-header");

    let heading = create_html(document, "h2")?;
    heading.set_text_content(Some(&config.panel_title));

    if let Some(url) = &config.source_url {
        let link = document.create_element("a").map_err(dom_err)?;
        link.set_class_name("toolbox-source");
        link.set_attribute("href", url).map_err(dom_err)?;
        link.set_attribute("target", "_blank").map_err(dom_err)?;
        link.set_attribute("rel", "noopener").map_err(dom_err)?;
        link.set_attribute("title", "View source code").map_err(dom_err)?;
        link.set_text_content(Some("Source"));
        heading.append_child(&link).map_err(dom_err)?;
    }

    header.append_child(&heading).map_err(dom_err)?;
    Ok(header)
}

/// Replace the list contents with one clickable title per template
pub fn render_templates(
    document: &Document,
    content: &Element,
    templates: &[Template],
    on_pick: PickHandler,
) -> Result<()> {
    content.set_inner_html("");

    for template in sorted(templates) {
        let item = create_html(document, "div")?;
        item.set_class_name("toolbox-template-item");
        item.set_text_content(Some(&template.title));

        // Keep focus (and the selection) in the textarea while clicking
        let onmousedown = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
        }) as Box<dyn FnMut(_)>);
        item.add_event_listener_with_callback("mousedown", onmousedown.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        onmousedown.forget();

        let on_pick = Rc::clone(&on_pick);
        let onclick = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            on_pick(&template);
        }) as Box<dyn FnMut(_)>);
        item.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        onclick.forget();

        content.append_child(&item).map_err(dom_err)?;
    }

    Ok(())
}

/// Pin the panel at `position` (overrides the default right-edge placement)
pub fn apply_position(panel: &HtmlElement, position: PanelPosition) {
    let style = panel.style();
    let properties = [
        ("left", format!("{}px", position.x)),
        ("top", format!("{}px", position.y)),
        ("right", "auto".to_string()),
        ("transform", "none".to_string()),
    ];
    for (name, value) in properties {
        if let Err(e) = style.set_property(name, &value) {
            log::warn!("[toolbox] could not set panel {}: {}", name, describe_js(&e));
        }
    }
}

/// Current on-screen position of the panel
pub fn current_position(panel: &HtmlElement) -> PanelPosition {
    let rect = panel.get_bounding_client_rect();
    PanelPosition::new(rect.left(), rect.top())
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Move an attached panel to the saved position, if there is one
pub fn restore_position<S: KeyValueStore>(panel: &HtmlElement, positions: &PositionStore<S>) {
    let saved = match positions.load() {
        Ok(Some(saved)) => saved,
        Ok(None) => return,
        Err(e) => {
            log::warn!("[toolbox] could not read panel position: {}", e);
            return;
        }
    };

    let size = (
        f64::from(panel.offset_width()),
        f64::from(panel.offset_height()),
    );
    let position = match viewport_size() {
        Some(viewport) => saved.clamp_to_viewport(size, viewport),
        None => saved,
    };
    log::debug!("[toolbox] restoring panel at ({}, {})", position.x, position.y);
    apply_position(panel, position);
}

/// Make `panel` draggable by `handle`; the final position is saved when a drag ends
pub fn install_drag<S: KeyValueStore + 'static>(
    document: &Document,
    panel: &HtmlElement,
    handle: &HtmlElement,
    positions: Option<Rc<PositionStore<S>>>,
) -> Result<()> {
    let gesture: Rc<RefCell<Option<DragGesture>>> = Rc::new(RefCell::new(None));

    let panel_down = panel.clone();
    let gesture_down = Rc::clone(&gesture);
    let onmousedown = Closure::wrap(Box::new(move |event: MouseEvent| {
        if event.button() != 0 {
            return;
        }
        // Don't start a drag from the source link
        let on_link = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el.closest("a").ok().flatten().is_some());
        if on_link {
            return;
        }
        event.prevent_default();
        let origin = current_position(&panel_down);
        apply_position(&panel_down, origin);
        let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
        *gesture_down.borrow_mut() = Some(DragGesture::start(pointer, origin));
    }) as Box<dyn FnMut(_)>);
    handle
        .add_event_listener_with_callback("mousedown", onmousedown.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    onmousedown.forget();

    let panel_move = panel.clone();
    let gesture_move = Rc::clone(&gesture);
    let onmousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
        let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
        if let Some(drag) = *gesture_move.borrow() {
            apply_position(&panel_move, drag.position_at(pointer));
        }
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("mousemove", onmousemove.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    onmousemove.forget();

    let panel_up = panel.clone();
    let onmouseup = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(drag) = gesture.borrow_mut().take() else {
            return;
        };
        let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
        if !drag.has_moved(pointer) {
            return;
        }
        let position = drag.position_at(pointer);
        apply_position(&panel_up, position);

        if let Some(positions) = &positions {
            match positions.save(position) {
                Ok(()) => log::debug!("[toolbox] saved panel at ({}, {})", position.x, position.y),
                Err(e) => log::warn!("[toolbox] could not save panel position: {}", e),
            }
        }
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("mouseup", onmouseup.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    onmouseup.forget();

    Ok(())
}
