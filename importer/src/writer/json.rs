use super::{Dumper, WriteOptions};
use crate::catalogue::Catalogue;
use crate::error::WriteError;

pub struct JsonFileDumper;

impl Dumper for JsonFileDumper {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn format_catalogue(
        &self,
        catalogue: &Catalogue,
        _domain: &str,
        _options: &WriteOptions,
    ) -> Result<String, WriteError> {
        let mut json = serde_json::to_string_pretty(catalogue.as_map())?;
        json.push('\n');
        Ok(json)
    }
}
