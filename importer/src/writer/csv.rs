use super::{Dumper, WriteOptions};
use crate::catalogue::Catalogue;
use crate::error::WriteError;

const DELIMITER: char = ';';
const ENCLOSURE: char = '"';
const ESCAPE: char = '\\';

/// `key;value` rows, enclosing fields the way `fputcsv` does.
pub struct CsvFileDumper;

impl Dumper for CsvFileDumper {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn format_catalogue(
        &self,
        catalogue: &Catalogue,
        _domain: &str,
        _options: &WriteOptions,
    ) -> Result<String, WriteError> {
        let mut out = String::new();
        for (key, value) in catalogue.messages() {
            out.push_str(&field(key));
            out.push(DELIMITER);
            out.push_str(&field(value));
            out.push('\n');
        }
        Ok(out)
    }
}

fn field(text: &str) -> String {
    let needs_enclosure = text
        .chars()
        .any(|ch| matches!(ch, DELIMITER | ENCLOSURE | ESCAPE | '\n' | '\r' | '\t' | ' '));
    if !needs_enclosure {
        return text.to_owned();
    }

    let doubled = ENCLOSURE.to_string().repeat(2);
    format!(
        "{ENCLOSURE}{}{ENCLOSURE}",
        text.replace(ENCLOSURE, &doubled)
    )
}
