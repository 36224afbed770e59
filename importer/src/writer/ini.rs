use std::io;

use ini::Ini;

use super::{Dumper, WriteOptions};
use crate::catalogue::Catalogue;
use crate::error::WriteError;

/// Messages as `key=value` pairs of the general section.
pub struct IniFileDumper;

impl Dumper for IniFileDumper {
    fn extension(&self) -> &'static str {
        "ini"
    }

    fn format_catalogue(
        &self,
        catalogue: &Catalogue,
        _domain: &str,
        _options: &WriteOptions,
    ) -> Result<String, WriteError> {
        let mut ini = Ini::new();
        for (key, value) in catalogue.messages() {
            ini.set_to(None::<String>, key.to_owned(), value.to_owned());
        }

        let mut buffer = Vec::new();
        ini.write_to(&mut buffer).map_err(WriteError::Ini)?;
        String::from_utf8(buffer)
            .map_err(|err| WriteError::Ini(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
