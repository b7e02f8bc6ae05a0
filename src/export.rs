use crate::content::{resume_data, ResumeData};
use crate::error::TerminalError;
use crate::i18n::Language;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[wasm_bindgen(module = "/js/resume.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn save_resume_pdf(data: &str, filename: &str) -> Result<(), JsValue>;
}

pub fn resume_filename(lang: Language) -> String {
    format!("Gustavo_Muniz_Resume_{}.pdf", lang.tag())
}

/// Turns resume data into a downloaded file. Returns the filename on success.
pub trait ResumeExporter {
    fn export(&mut self, lang: Language, data: &ResumeData) -> Result<String, TerminalError>;
}

/// Hands the resume to the jsPDF bridge in `js/resume.js`.
#[derive(Debug, Default)]
pub struct JsPdfExporter;

impl ResumeExporter for JsPdfExporter {
    fn export(&mut self, lang: Language, data: &ResumeData) -> Result<String, TerminalError> {
        let filename = resume_filename(lang);
        let json = serde_json::to_string(data)
            .map_err(|e| TerminalError::ExportFailure(e.to_string()))?;
        save_resume_pdf(&json, &filename).map_err(|e| {
            let msg = e
                .as_string()
                .or_else(|| {
                    js_sys::Reflect::get(&e, &JsValue::from_str("message"))
                        .ok()
                        .and_then(|m| m.as_string())
                })
                .unwrap_or_else(|| "unknown error".to_string());
            TerminalError::ExportFailure(msg)
        })?;
        Ok(filename)
    }
}

/// Runs an export for `lang` with the built-in resume data.
pub fn export_resume(
    exporter: &mut dyn ResumeExporter,
    lang: Language,
) -> Result<String, TerminalError> {
    let data = resume_data(lang);
    match exporter.export(lang, &data) {
        Ok(filename) => {
            log::info!("resume exported: {}", filename);
            Ok(filename)
        }
        Err(e) => {
            log::error!("{}", e);
            Err(e)
        }
    }
}
