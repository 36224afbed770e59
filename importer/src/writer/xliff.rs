use super::{Dumper, WriteOptions};
use crate::catalogue::Catalogue;
use crate::error::WriteError;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";
const XLIFF_VERSION: &str = "2.0";
const XMLNS: &str = "urn:oasis:names:tc:xliff:document:2.0";

/// XLIFF 2.0 documents, one `<unit>` per message.
pub struct XliffFileDumper {
    extension: &'static str,
}

impl XliffFileDumper {
    pub fn new(extension: &'static str) -> Self {
        Self { extension }
    }
}

impl Dumper for XliffFileDumper {
    fn extension(&self) -> &'static str {
        self.extension
    }

    fn format_catalogue(
        &self,
        catalogue: &Catalogue,
        domain: &str,
        options: &WriteOptions,
    ) -> Result<String, WriteError> {
        if options.xliff_version != XLIFF_VERSION {
            return Err(WriteError::UnsupportedXliffVersion(
                options.xliff_version.clone(),
            ));
        }

        Ok(format_document(
            catalogue,
            domain,
            &escape(&options.default_locale),
            &escape(catalogue.locale()),
        ))
    }
}

fn format_document(
    catalogue: &Catalogue,
    domain: &str,
    source_language: &str,
    target_language: &str,
) -> String {
    let mut out = String::from(XML_DECLARATION);
    out.push_str(&format!(
        "<xliff xmlns=\"{XMLNS}\" version=\"{XLIFF_VERSION}\" srcLang=\"{source_language}\" trgLang=\"{target_language}\">\n"
    ));
    out.push_str(&format!(
        "  <file id=\"{}.{target_language}\">\n",
        escape(domain)
    ));

    for (index, (key, value)) in catalogue.messages().enumerate() {
        let key = escape(key);
        out.push_str(&format!(
            "    <unit id=\"{}\" name=\"{key}\">\n",
            index + 1
        ));
        out.push_str("      <segment>\n");
        out.push_str(&format!("        <source>{key}</source>\n"));
        out.push_str(&format!("        <target>{}</target>\n", escape(value)));
        out.push_str("      </segment>\n");
        out.push_str("    </unit>\n");
    }

    out.push_str("  </file>\n");
    out.push_str("</xliff>\n");
    out
}

/// Escapes markup and drops characters XML 1.0 does not allow.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\t' | '\n' | '\r' => escaped.push(ch),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::MessageEntry;
    use std::path::PathBuf;

    fn options(version: &str) -> WriteOptions {
        WriteOptions {
            path: PathBuf::from("translations"),
            default_locale: "en".to_owned(),
            xliff_version: version.to_owned(),
        }
    }

    fn catalogue() -> Catalogue {
        let mut catalogue = Catalogue::new("en");
        catalogue.add(MessageEntry::new("greeting", "Hello"));
        catalogue.add(MessageEntry::new("terms", "Tom & Jerry <3 'quotes'"));
        catalogue
    }

    #[test]
    fn version_2_document_structure() {
        let xml = XliffFileDumper::new("xlf")
            .format_catalogue(&catalogue(), "messages", &options("2.0"))
            .expect("format");

        let doc = roxmltree::Document::parse(&xml).expect("valid xml");
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "xliff");
        assert_eq!(root.tag_name().namespace(), Some(XMLNS));
        assert_eq!(root.attribute("version"), Some("2.0"));
        assert_eq!(root.attribute("srcLang"), Some("en"));
        assert_eq!(root.attribute("trgLang"), Some("en"));

        let file = root
            .children()
            .find(|node| node.has_tag_name("file"))
            .expect("file element");
        assert_eq!(file.attribute("id"), Some("messages.en"));

        let units: Vec<_> = doc
            .descendants()
            .filter(|node| node.has_tag_name("unit"))
            .collect();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].attribute("id"), Some("1"));
        assert_eq!(units[0].attribute("name"), Some("greeting"));

        let target = units[1]
            .descendants()
            .find(|node| node.has_tag_name("target"))
            .and_then(|node| node.text());
        assert_eq!(target, Some("Tom & Jerry <3 'quotes'"));
    }

    #[test]
    fn empty_catalogue_still_produces_a_file_element() {
        let xml = XliffFileDumper::new("xlf")
            .format_catalogue(&Catalogue::new("fr"), "messages", &options("2.0"))
            .expect("format");

        let doc = roxmltree::Document::parse(&xml).expect("valid xml");
        assert!(doc.descendants().any(|node| node.has_tag_name("file")));
        assert!(!doc.descendants().any(|node| node.has_tag_name("unit")));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let result =
            XliffFileDumper::new("xlf").format_catalogue(&catalogue(), "messages", &options("1.2"));
        assert!(matches!(result, Err(WriteError::UnsupportedXliffVersion(version)) if version == "1.2"));
    }

    #[test]
    fn control_characters_are_dropped() {
        let mut catalogue = Catalogue::new("en");
        catalogue.add(MessageEntry::new("a", "bell\u{7}x"));
        catalogue.add(MessageEntry::new("b\u{1b}", "tab\there"));

        let xml = XliffFileDumper::new("xlf")
            .format_catalogue(&catalogue, "messages", &options("2.0"))
            .expect("format");

        let doc = roxmltree::Document::parse(&xml).expect("well-formed xml");
        let texts: Vec<&str> = doc
            .descendants()
            .filter(|node| node.has_tag_name("target"))
            .filter_map(|node| node.text())
            .collect();
        assert_eq!(texts, ["bellx", "tab\there"]);
        let names: Vec<&str> = doc
            .descendants()
            .filter_map(|node| node.attribute("name"))
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
