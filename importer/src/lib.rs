use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

pub mod catalogue;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod writer;

pub use catalogue::{Catalogue, MessageEntry};
pub use error::{ImportError, WriteError};
pub use matcher::FileTask;
pub use parser::parse_file;
pub use writer::{TranslationWriter, WriteOptions};

pub const DEFAULT_OUTPUT_FORMAT: &str = "xlf";
/// Domain every catalogue is written under, whatever the input file name says.
pub const CATALOGUE_DOMAIN: &str = "messages";
pub const XLIFF_VERSION: &str = "2.0";
pub const TRANSLATIONS_DIR: &str = "translations";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "translation-import",
    author,
    version,
    about = "Translation convert command from an input format to another format",
    long_about = "Converts `<domain>.<locale>.<ext>` files of comma separated messages into \
                  translation catalogues. You must specify a path using the --path option."
)]
pub struct Cli {
    /// Directory containing the files to import
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Input translation format
    #[arg(long, value_name = "FORMAT")]
    pub input: Option<String>,

    /// Output translation format (default: xlf)
    #[arg(long, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Project directory; catalogues are written to its `translations` directory
    #[arg(
        long,
        value_name = "DIR",
        env = "TRANSLATION_IMPORT_PROJECT_DIR",
        default_value = "."
    )]
    pub project_dir: PathBuf,
}

/// Command-line input that passed `validate_inputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    path: PathBuf,
    input_format: String,
    output_format: String,
}

impl ImportRequest {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn input_format(&self) -> &str {
        &self.input_format
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }
}

pub fn validate_inputs(
    path: Option<&Path>,
    input_format: Option<&str>,
    output_format: Option<&str>,
    writer: &TranslationWriter,
) -> Result<ImportRequest, ImportError> {
    let input_format = input_format
        .filter(|format| !format.is_empty())
        .ok_or(ImportError::MissingInputFormat)?;

    let path = match path {
        Some(path) if !path.as_os_str().is_empty() && path.is_dir() => path,
        _ => {
            return Err(ImportError::InvalidPath {
                path: path.map(Path::to_path_buf),
            });
        }
    };

    let output_format = output_format
        .filter(|format| !format.is_empty())
        .unwrap_or(DEFAULT_OUTPUT_FORMAT);
    if !writer.supports(output_format) {
        return Err(ImportError::UnsupportedFormat {
            format: output_format.to_owned(),
            supported: writer.formats().map(str::to_owned).collect(),
        });
    }

    Ok(ImportRequest {
        path: path.to_path_buf(),
        input_format: input_format.to_owned(),
        output_format: output_format.to_owned(),
    })
}

/// Writes `catalogue` under the `messages` domain into `destination`.
/// `source_file` only labels the error.
pub fn write_catalogue(
    writer: &TranslationWriter,
    catalogue: &Catalogue,
    output_format: &str,
    destination: &Path,
    source_file: &Path,
) -> Result<PathBuf, ImportError> {
    let options = WriteOptions {
        path: destination.to_path_buf(),
        default_locale: catalogue.locale().to_owned(),
        xliff_version: XLIFF_VERSION.to_owned(),
    };

    writer
        .write(catalogue, CATALOGUE_DOMAIN, output_format, &options)
        .map_err(|source| ImportError::Write {
            source_file: source_file.to_path_buf(),
            source,
        })
}

pub fn run(cli: Cli) -> Result<ExitCode, ImportError> {
    let writer = TranslationWriter::new();

    let request = match validate_inputs(
        cli.path.as_deref(),
        cli.input.as_deref(),
        cli.output.as_deref(),
        &writer,
    ) {
        Ok(request) => request,
        Err(ImportError::UnsupportedFormat { supported, .. }) => {
            report_unsupported_format(&supported);
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err),
    };

    let destination = cli.project_dir.join(TRANSLATIONS_DIR);

    // The input format is accepted but not consulted: every file goes through
    // the comma separated parser.
    info!(
        target: "translation_importer",
        path = %request.path().display(),
        input = request.input_format(),
        output = request.output_format(),
        destination = %destination.display(),
        "import started"
    );

    for task in matcher::matching_files(request.path()) {
        let task = task?;
        let real_path = fs::canonicalize(&task.file_path).map_err(|source| ImportError::Read {
            path: task.file_path.clone(),
            source,
        })?;

        println!("Starts importing file {}", real_path.display());

        let catalogue = parse_file(&real_path, &task.locale)?;
        debug!(
            target: "translation_importer",
            domain = %task.domain,
            locale = %task.locale,
            messages = catalogue.len(),
            "file parsed"
        );

        let written = write_catalogue(
            &writer,
            &catalogue,
            request.output_format(),
            &destination,
            &real_path,
        )?;
        info!(
            target: "translation_importer",
            source = %real_path.display(),
            output = %written.display(),
            "catalogue written"
        );

        println!("Importing finished");
    }

    Ok(ExitCode::SUCCESS)
}

fn report_unsupported_format(supported: &[String]) {
    eprintln!();
    eprintln!(" {} Wrong output format", "[ERROR]".red().bold());
    eprintln!();
    eprintln!("         Supported formats are: {}.", supported.join(", "));
    eprintln!();
}
