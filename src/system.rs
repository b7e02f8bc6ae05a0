use crate::{
    clock::BrowserClock,
    config::{prompt, TerminalConfig},
    export::JsPdfExporter,
    history::Direction,
    i18n::Language,
    interpreter::Completion,
    logger,
    terminal::Terminal,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

struct Ticker {
    handle: i32,
    _tick: Closure<dyn FnMut()>,
}

/// The terminal as seen from the page. Owns the interval that releases
/// delayed output; dropping or destroying it stops the interval.
#[wasm_bindgen]
pub struct Portfolio {
    terminal: Rc<RefCell<Terminal>>,
    on_change: Rc<RefCell<Option<js_sys::Function>>>,
    ticker: Option<Ticker>,
}

#[wasm_bindgen(start)]
pub fn start() {
    if logger::init(TerminalConfig::default().level_filter()).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger already installed"));
    }
}

#[wasm_bindgen]
impl Portfolio {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Portfolio {
        Portfolio::build(TerminalConfig::default())
    }

    /// Same as `new` with a JSON `TerminalConfig`; missing fields keep their
    /// defaults.
    #[wasm_bindgen]
    pub fn with_config(json: &str) -> Result<Portfolio, JsValue> {
        let config = TerminalConfig::from_json(json).map_err(|e| {
            log::error!("{}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Portfolio::build(config))
    }

    /// Called with no arguments whenever delayed output lands.
    #[wasm_bindgen]
    pub fn set_on_change(&mut self, callback: Option<js_sys::Function>) {
        *self.on_change.borrow_mut() = callback;
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        prompt()
    }

    #[wasm_bindgen]
    pub fn exec(&mut self, line: &str) -> bool {
        self.terminal.borrow_mut().execute(line)
    }

    /// `"up"` or `"down"`; returns the text to put in the input.
    #[wasm_bindgen]
    pub fn navigate(&mut self, direction: &str) -> String {
        match Direction::parse(direction) {
            Some(d) => self.terminal.borrow_mut().navigate(d),
            None => String::new(),
        }
    }

    #[wasm_bindgen]
    pub fn complete(&mut self, partial: &str) -> Vec<JsValue> {
        match self.terminal.borrow_mut().complete(partial) {
            Completion::None => Vec::new(),
            Completion::Unique(token) => vec![JsValue::from_str(&token)],
            Completion::Ambiguous(tokens) => {
                tokens.iter().map(|t| JsValue::from_str(t)).collect()
            }
        }
    }

    #[wasm_bindgen]
    pub fn switch_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.terminal.borrow_mut().switch_language(lang);
                true
            }
            None => {
                log::warn!("unsupported language: {}", code);
                false
            }
        }
    }

    #[wasm_bindgen]
    pub fn language(&self) -> String {
        self.terminal.borrow().language().code().to_string()
    }

    /// Returns the filename handed to the browser.
    #[wasm_bindgen]
    pub fn download_resume(&mut self, code: &str) -> String {
        let lang = Language::from_code(code).unwrap_or_else(|| self.terminal.borrow().language());
        self.terminal.borrow_mut().download_resume(lang)
    }

    #[wasm_bindgen]
    pub fn lines_json(&self) -> String {
        self.terminal.borrow().lines_json()
    }

    #[wasm_bindgen]
    pub fn render_html(&self) -> String {
        self.terminal.borrow().render_html()
    }

    #[wasm_bindgen]
    pub fn is_processing(&self) -> bool {
        self.terminal
            .try_borrow()
            .map(|t| t.is_processing())
            .unwrap_or(true)
    }

    #[wasm_bindgen]
    pub fn interrupt(&mut self) {
        self.terminal.borrow_mut().interrupt();
    }

    #[wasm_bindgen]
    pub fn clear_screen(&mut self) {
        self.terminal.borrow_mut().clear_screen();
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.stop_ticker();
        self.terminal.borrow_mut().destroy();
        *self.on_change.borrow_mut() = None;
    }
}

impl Portfolio {
    fn build(config: TerminalConfig) -> Portfolio {
        logger::set_level(config.level_filter());
        let interval = config.tick_interval_ms;
        let mut terminal = Terminal::new(
            config,
            Rc::new(BrowserClock),
            Box::new(JsPdfExporter),
        );
        terminal.boot();
        let mut portfolio = Portfolio {
            terminal: Rc::new(RefCell::new(terminal)),
            on_change: Rc::new(RefCell::new(None)),
            ticker: None,
        };
        portfolio.install_ticker(interval);
        portfolio
    }

    fn install_ticker(&mut self, interval_ms: u32) {
        let Some(win) = web_sys::window() else {
            log::warn!("no window: delayed output disabled");
            return;
        };
        let terminal = Rc::clone(&self.terminal);
        let on_change = Rc::clone(&self.on_change);
        let tick = Closure::wrap(Box::new(move || {
            let changed = match terminal.try_borrow_mut() {
                Ok(mut t) => t.poll(),
                Err(_) => false,
            };
            if changed {
                // Called unborrowed: the callback may replace itself or destroy.
                if let Some(cb) = current_callback(&on_change) {
                    if let Err(e) = cb.call0(&JsValue::NULL) {
                        log::error!("change callback failed: {:?}", e);
                    }
                }
            }
        }) as Box<dyn FnMut()>);
        match win.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval_timeout(interval_ms),
        ) {
            Ok(handle) => {
                log::debug!("tick interval {} installed ({} ms)", handle, interval_ms);
                self.ticker = Some(Ticker {
                    handle,
                    _tick: tick,
                });
            }
            Err(e) => log::error!("could not install tick interval: {:?}", e),
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            if let Some(win) = web_sys::window() {
                win.clear_interval_with_handle(ticker.handle);
            }
            log::debug!("tick interval {} cleared", ticker.handle);
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

fn current_callback<T: Clone>(slot: &RefCell<Option<T>>) -> Option<T> {
    slot.borrow().clone()
}

fn interval_timeout(interval_ms: u32) -> i32 {
    i32::try_from(interval_ms).unwrap_or(i32::MAX)
}
