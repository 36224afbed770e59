use super::{Dumper, WriteOptions};
use crate::catalogue::Catalogue;
use crate::error::WriteError;

pub struct PoFileDumper;

impl Dumper for PoFileDumper {
    fn extension(&self) -> &'static str {
        "po"
    }

    fn format_catalogue(
        &self,
        catalogue: &Catalogue,
        _domain: &str,
        _options: &WriteOptions,
    ) -> Result<String, WriteError> {
        let mut out = String::new();
        out.push_str("msgid \"\"\n");
        out.push_str("msgstr \"\"\n");
        out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
        out.push_str("\"Content-Transfer-Encoding: 8bit\\n\"\n");
        out.push_str(&format!(
            "\"Language: {}\\n\"\n",
            escape(catalogue.locale())
        ));

        for (key, value) in catalogue.messages() {
            out.push('\n');
            out.push_str(&format!("msgid \"{}\"\n", escape(key)));
            out.push_str(&format!("msgstr \"{}\"\n", escape(value)));
        }

        Ok(out)
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
