// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search page.
//!
//! This is the browser-facing API. The page hands over the index array it
//! already has (`window.searchIndex`) and the current `location.search`; the
//! widget does the rest. Three ways to get output: a plain result object, a
//! ready-made HTML string, or a sink object whose methods are called in order
//! so the page can build DOM nodes itself.
//!
//! ```js
//! const sift = new DocSift(window.searchIndex);
//! const el = document.getElementById("search-results");
//! sift.renderInto(window.location.search, {
//!     clear: () => el.replaceChildren(),
//!     appendHeader: (query) => el.append(header(query)),
//!     appendResult: (href, label) => el.append(link(href, label)),
//! });
//! ```

use crate::config::Settings;
use crate::render::{HtmlSink, ResultList, ResultSink};
use crate::types::{SearchEntry, SearchIndex};
use crate::widget::SearchWidget;
use js_sys::{Function, Reflect};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A loaded index plus the settings it is searched with.
#[wasm_bindgen]
pub struct DocSift {
    index: SearchIndex,
    settings: Settings,
}

#[wasm_bindgen]
impl DocSift {
    /// Build from an array of `{Url, Body}` objects and optional settings
    /// (`{match: {...}, widget: {...}}`, any key may be omitted).
    #[wasm_bindgen(constructor)]
    pub fn new(index: JsValue, options: JsValue) -> Result<DocSift, JsValue> {
        let entries: Vec<SearchEntry> = from_value(index).map_err(|e| e.to_string())?;
        let settings: Settings = if options.is_undefined() || options.is_null() {
            Settings::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        settings
            .matching
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(DocSift {
            index: SearchIndex::new(entries),
            settings,
        })
    }

    /// Number of entries in the index.
    #[wasm_bindgen(getter, js_name = entryCount)]
    pub fn entry_count(&self) -> usize {
        self.index.len()
    }

    /// Run the widget and return `{query, links: [{href, title}]}`.
    #[wasm_bindgen]
    pub fn search(&self, location_search: &str) -> Result<JsValue, JsValue> {
        let mut list = ResultList::default();
        self.widget().render(strip_question(location_search), &mut list);
        to_value(&list).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Run the widget and return the container's inner HTML.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, location_search: &str) -> String {
        let mut sink = HtmlSink::new();
        self.widget().render(strip_question(location_search), &mut sink);
        sink.into_inner()
    }

    /// Run the widget against a JS sink with `clear`, `appendHeader` and
    /// `appendResult` methods.
    #[wasm_bindgen(js_name = renderInto)]
    pub fn render_into(&self, location_search: &str, sink: JsValue) -> Result<usize, JsValue> {
        let mut js_sink = JsSink::new(sink)?;
        let count = self.widget().render(strip_question(location_search), &mut js_sink);
        js_sink.finish()?;
        Ok(count)
    }
}

impl DocSift {
    fn widget(&self) -> SearchWidget<'_> {
        SearchWidget::new(&self.index)
            .match_config(self.settings.matching.clone())
            .widget_config(self.settings.widget.clone())
    }
}

/// `location.search` includes the leading `?`.
fn strip_question(location_search: &str) -> &str {
    location_search
        .strip_prefix('?')
        .unwrap_or(location_search)
}

/// Holds the first error from a run of fallible calls and skips the rest.
#[derive(Debug)]
struct FirstError<E> {
    error: Option<E>,
}

impl<E> FirstError<E> {
    fn new() -> Self {
        Self { error: None }
    }

    /// Run `call` unless an earlier call already failed.
    fn run<T>(&mut self, call: impl FnOnce() -> Result<T, E>) {
        if self.error.is_none() {
            if let Err(e) = call() {
                self.error = Some(e);
            }
        }
    }

    fn finish(self) -> Result<(), E> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Forwards sink calls to methods on a JS object.
///
/// The trait methods cannot fail, so the first exception thrown by a callback
/// is held and later calls are skipped; `finish` hands it back.
struct JsSink {
    target: JsValue,
    clear: Function,
    append_header: Function,
    append_result: Function,
    outcome: FirstError<JsValue>,
}

impl JsSink {
    fn new(target: JsValue) -> Result<Self, JsValue> {
        let clear = method(&target, "clear")?;
        let append_header = method(&target, "appendHeader")?;
        let append_result = method(&target, "appendResult")?;
        Ok(Self {
            target,
            clear,
            append_header,
            append_result,
            outcome: FirstError::new(),
        })
    }

    fn finish(self) -> Result<(), JsValue> {
        self.outcome.finish()
    }
}

impl ResultSink for JsSink {
    fn clear(&mut self) {
        let (func, target) = (&self.clear, &self.target);
        self.outcome.run(|| func.call0(target));
    }

    fn append_header(&mut self, query: &str) {
        let (func, target) = (&self.append_header, &self.target);
        self.outcome
            .run(|| func.call1(target, &JsValue::from_str(query)));
    }

    fn append_result(&mut self, href: &str, label: &str) {
        let (func, target) = (&self.append_result, &self.target);
        self.outcome.run(|| {
            func.call2(target, &JsValue::from_str(href), &JsValue::from_str(label))
        });
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("sink.{} is not a function", name)))
}
