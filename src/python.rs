//! Python bindings for resegment-rs using PyO3
//!
//! This module provides Python-compatible wrappers around the Rust pipeline.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::Config;
use crate::language::FixedLanguage;
use crate::pipeline::SentenceResegmenter;
use crate::token::Token as RustToken;
use crate::tokenizer::{UnicodeWordTokenizer, WordTokenizer};
use crate::triggers::{TriggerTable, TriggerTableBuilder};

fn to_py_err(e: crate::error::ResegmentError) -> PyErr {
    match e {
        crate::error::ResegmentError::Io(io) => PyIOError::new_err(io.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// A Python-compatible Token class
#[pyclass(name = "Token")]
#[derive(Clone)]
pub struct PyToken {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub len: usize,
    #[pyo3(get)]
    pub category: String,
}

impl From<RustToken> for PyToken {
    fn from(t: RustToken) -> Self {
        PyToken {
            text: t.text,
            start: t.start,
            len: t.len,
            category: t.category.as_str().to_string(),
        }
    }
}

#[pymethods]
impl PyToken {
    fn __repr__(&self) -> String {
        format!("Token({:?}, category='{}')", self.text, self.category)
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn is_word(&self) -> bool {
        self.category == "WORD"
    }

    fn is_punct(&self) -> bool {
        self.category == "PUNCT"
    }

    /// Convert to dictionary
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("text", &self.text)?;
        dict.set_item("start", self.start)?;
        dict.set_item("len", self.len)?;
        dict.set_item("category", &self.category)?;
        Ok(dict)
    }
}

/// Resegmenter - the main pipeline class
///
/// Example:
///     >>> from resegment import Resegmenter
///     >>> r = Resegmenter(lang="en")
///     >>> r.resegment("I left, and I came back")
///     'I left. And I came back'
#[pyclass(name = "Resegmenter")]
pub struct PyResegmenter {
    config: Config,
    pipeline: SentenceResegmenter,
}

impl PyResegmenter {
    fn rebuild(&mut self, triggers: TriggerTable) -> PyResult<()> {
        self.pipeline = SentenceResegmenter::from_config(&self.config)
            .map_err(to_py_err)?
            .with_triggers(triggers);
        Ok(())
    }
}

#[pymethods]
impl PyResegmenter {
    /// Create a new Resegmenter.
    ///
    /// Args:
    ///     lang: Language code to use instead of detection (optional)
    ///     config_path: JSON configuration file (optional)
    ///     normalize: NFC-normalize input before tokenizing (default: False)
    #[new]
    #[pyo3(signature = (lang=None, config_path=None, normalize=false))]
    fn new(lang: Option<&str>, config_path: Option<&str>, normalize: bool) -> PyResult<Self> {
        let mut config = match config_path {
            Some(path) => Config::load(std::path::Path::new(path)).map_err(to_py_err)?,
            None => Config::default(),
        };
        if let Some(code) = lang {
            config.language = Some(code.to_string());
        }
        if normalize {
            config.tokenizer.normalize_unicode = true;
        }

        let pipeline = SentenceResegmenter::from_config(&config).map_err(to_py_err)?;
        Ok(PyResegmenter { config, pipeline })
    }

    /// Load trigger words from a TSV string
    ///
    /// Format: code\tword\tword...
    /// Lines starting with # are comments.
    fn load_tsv(&mut self, tsv_content: &str) -> PyResult<()> {
        let mut builder = TriggerTableBuilder::new();
        builder.merge(self.pipeline.triggers()).load_tsv(tsv_content);
        self.rebuild(builder.build())
    }

    /// Load trigger words from a TSV file
    fn load_tsv_file(&mut self, path: &str) -> PyResult<()> {
        let content = std::fs::read_to_string(path).map_err(|e| PyIOError::new_err(e.to_string()))?;
        self.load_tsv(&content)
    }

    /// Add a single trigger word for a language
    fn add_trigger(&mut self, lang: &str, word: &str) -> PyResult<()> {
        let mut builder = TriggerTableBuilder::new();
        builder.merge(self.pipeline.triggers()).add(lang, word);
        self.rebuild(builder.build())
    }

    /// Detect the dominant language of a text
    fn detect_language(&self, text: &str) -> Option<String> {
        self.pipeline.detect_language(text)
    }

    /// Resegment a string
    ///
    /// Malformed tokenizations never raise; the text comes back unchanged.
    fn resegment(&self, text: &str) -> String {
        self.pipeline.resegment(text)
    }

    /// Resegment a string and return a dict with language, output and breaks
    fn process<'py>(&self, py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyDict>> {
        let outcome = self.pipeline.process(text).map_err(to_py_err)?;
        let dict = PyDict::new_bound(py);
        dict.set_item("language", outcome.language)?;
        dict.set_item("output", outcome.output)?;
        dict.set_item("breaks", outcome.breaks)?;
        Ok(dict)
    }

    /// Trigger words configured for a language
    fn triggers(&self, lang: &str) -> Vec<String> {
        self.pipeline
            .triggers()
            .lookup(lang)
            .iter()
            .map(str::to_string)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Resegmenter(lang={:?}, languages={})",
            self.config.language,
            self.pipeline.triggers().len()
        )
    }
}

/// Tokenize text on Unicode word boundaries
///
/// Args:
///     text: The text to tokenize
///
/// Returns:
///     List of Token objects
#[pyfunction]
fn tokenize(text: &str) -> Vec<PyToken> {
    UnicodeWordTokenizer::new()
        .tokenize(text)
        .into_iter()
        .map(PyToken::from)
        .collect()
}

/// Detect the dominant language of a text
///
/// Returns:
///     Language code (e.g. "en", "ru") or None
#[pyfunction]
fn detect_language(text: &str) -> Option<String> {
    SentenceResegmenter::new().detect_language(text)
}

/// Resegment a string at its trigger words
///
/// Args:
///     text: The text to resegment
///     lang: Language code to use instead of detection (optional)
#[pyfunction]
#[pyo3(signature = (text, lang=None))]
fn resegment(text: &str, lang: Option<&str>) -> String {
    match lang {
        Some(code) => SentenceResegmenter::new()
            .with_detector(FixedLanguage::new(code))
            .resegment(text),
        None => crate::resegment(text),
    }
}

/// Create the Python module
#[pymodule]
#[pyo3(name = "resegment")]
fn resegment_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyToken>()?;
    m.add_class::<PyResegmenter>()?;
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(resegment, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
