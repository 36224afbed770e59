use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::catalogue::Catalogue;
use crate::error::WriteError;

mod csv;
mod ini;
mod json;
mod po;
mod xliff;

pub use csv::CsvFileDumper;
pub use ini::IniFileDumper;
pub use json::JsonFileDumper;
pub use po::PoFileDumper;
pub use xliff::XliffFileDumper;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Directory the catalogue file is written into.
    pub path: PathBuf,
    pub default_locale: String,
    /// Only read by the XLIFF dumper.
    pub xliff_version: String,
}

/// Renders a catalogue into the text of one output format.
pub trait Dumper {
    fn extension(&self) -> &'static str;

    fn format_catalogue(
        &self,
        catalogue: &Catalogue,
        domain: &str,
        options: &WriteOptions,
    ) -> Result<String, WriteError>;
}

/// Dispatches catalogues to the dumper registered for a format name.
pub struct TranslationWriter {
    dumpers: IndexMap<&'static str, Box<dyn Dumper>>,
}

impl TranslationWriter {
    /// A writer with every built-in format registered.
    pub fn new() -> Self {
        let mut writer = Self {
            dumpers: IndexMap::new(),
        };
        writer.add_dumper("csv", CsvFileDumper);
        writer.add_dumper("ini", IniFileDumper);
        writer.add_dumper("json", JsonFileDumper);
        writer.add_dumper("po", PoFileDumper);
        writer.add_dumper("xlf", XliffFileDumper::new("xlf"));
        writer.add_dumper("xliff", XliffFileDumper::new("xliff"));
        writer
    }

    pub fn add_dumper(&mut self, format: &'static str, dumper: impl Dumper + 'static) {
        self.dumpers.insert(format, Box::new(dumper));
    }

    pub fn formats(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dumpers.keys().copied()
    }

    pub fn supports(&self, format: &str) -> bool {
        self.dumpers.contains_key(format)
    }

    /// Writes `catalogue` to `<options.path>/<domain>.<locale>.<extension>`,
    /// creating the directory when needed, and returns the written path.
    pub fn write(
        &self,
        catalogue: &Catalogue,
        domain: &str,
        format: &str,
        options: &WriteOptions,
    ) -> Result<PathBuf, WriteError> {
        let dumper = self
            .dumpers
            .get(format)
            .ok_or_else(|| WriteError::UnsupportedFormat(format.to_owned()))?;

        let locale = catalogue.locale();
        if locale.is_empty() || locale.parse::<LanguageIdentifier>().is_err() {
            return Err(WriteError::InvalidLocale(locale.to_owned()));
        }

        let contents = dumper.format_catalogue(catalogue, domain, options)?;

        fs::create_dir_all(&options.path).map_err(|source| WriteError::Io {
            path: options.path.clone(),
            source,
        })?;

        let target = options
            .path
            .join(format!("{domain}.{locale}.{}", dumper.extension()));
        fs::write(&target, contents).map_err(|source| WriteError::Io {
            path: target.clone(),
            source,
        })?;

        debug!(
            target: "translation_importer",
            format,
            path = %target.display(),
            messages = catalogue.len(),
            "catalogue dumped"
        );

        Ok(target)
    }
}

impl Default for TranslationWriter {
    fn default() -> Self {
        Self::new()
    }
}
