//! Layout description files.
//!
//! A layout is stored as JSON next to its images:
//!
//! ```json
//! {
//!   "header_image": { "path": "letterhead.png", "width_mm": 170, "height_mm": 20 },
//!   "footer_text": "Rua Exemplo, 100 - São Paulo/SP",
//!   "signature_city": "São Paulo",
//!   "signatory_name": "Maria Silva"
//! }
//! ```
//!
//! Image paths are resolved relative to the file's directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::model::{ImageSpec, LayoutConfig};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub width_mm: f32,
    pub height_mm: f32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutFile {
    pub header_image: Option<ImageEntry>,
    pub footer_image: Option<ImageEntry>,
    pub header_text: Option<String>,
    pub footer_text: Option<String>,
    pub addressee_name: Option<String>,
    pub addressee_organization: Option<String>,
    pub signature_city: Option<String>,
    pub signature_date: Option<String>,
    pub signatory_name: Option<String>,
    pub signatory_role: Option<String>,
    pub signatory_cpf: Option<String>,
    pub signatory_company: Option<String>,
    pub signatory_company_registration: Option<String>,
}

impl LayoutFile {
    pub fn parse(json: &str) -> Result<LayoutFile, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read the referenced images from `base_dir` and build the layout.
    pub fn into_layout(self, base_dir: &Path) -> Result<LayoutConfig, Error> {
        let load = |entry: Option<ImageEntry>| -> Result<Option<ImageSpec>, Error> {
            let Some(entry) = entry else {
                return Ok(None);
            };
            let path = base_dir.join(&entry.path);
            let data = std::fs::read(&path).map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", e, path.display()),
                ))
            })?;
            Ok(Some(ImageSpec {
                data,
                width_mm: entry.width_mm,
                height_mm: entry.height_mm,
            }))
        };

        Ok(LayoutConfig {
            header_image: load(self.header_image)?,
            footer_image: load(self.footer_image)?,
            header_text: self.header_text,
            footer_text: self.footer_text,
            addressee_name: self.addressee_name,
            addressee_organization: self.addressee_organization,
            signature_city: self.signature_city,
            signature_date: self.signature_date,
            signatory_name: self.signatory_name,
            signatory_role: self.signatory_role,
            signatory_cpf: self.signatory_cpf,
            signatory_company: self.signatory_company,
            signatory_company_registration: self.signatory_company_registration,
        })
    }
}

/// Load a layout description file and the images it references.
pub fn load_layout(path: &Path) -> Result<LayoutConfig, Error> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", e, path.display()),
        ))
    })?;
    let base_dir = path.parent().unwrap_or(Path::new("."));
    let layout = LayoutFile::parse(&json)?.into_layout(base_dir)?;
    log::debug!("loaded layout from {}", path.display());
    Ok(layout)
}
