//! Variante para documentos de texto: elimina `w:documentProtection`.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::archive::{derive_output_path, repack_package, unpack_package};
use super::error::ProcessError;
use super::report::{PartReport, PartStatus, ProcessReport};
use super::workdir::WorkDir;

const SETTINGS_PART: &str = "word/settings.xml";
const PROTECTION_PREFIX: &str = "<w:documentProtection";

/// Captura las instancias auto-cerradas del marcador con cualquier atributo.
/// La variante con etiqueta de cierre separada no se toca.
fn protection_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<w:documentProtection[^>]*?/>").expect("patrón de protección inválido")
    })
}

/// Elimina la protección de un documento `.docx` y escribe la copia
/// desbloqueada junto al original.
///
/// Los fallos al manipular `settings.xml` se registran en el resultado pero
/// no abortan: el paquete se genera igualmente con la parte sin cambios.
pub(crate) fn remove_document_protection(path: &Path) -> Result<ProcessReport, ProcessError> {
    let workdir = WorkDir::create(path)?;
    unpack_package(path, workdir.path())?;

    let settings = workdir.path().join(SETTINGS_PART);
    if !settings.is_file() {
        return Ok(ProcessReport::StructureMissing {
            missing: SETTINGS_PART.to_string(),
        });
    }

    let status = match strip_settings_part(&settings) {
        Ok(status) => status,
        Err(detail) => PartStatus::Failed { detail },
    };

    let output = derive_output_path(path);
    repack_package(workdir.path(), &output)?;

    Ok(ProcessReport::Completed {
        parts: vec![PartReport {
            part: SETTINGS_PART.to_string(),
            status,
        }],
        output,
    })
}

/// Opera sobre el texto crudo de la parte, sin analizar el XML, y lo escribe
/// de vuelta tal cual para no reformatear el contenido ajeno al marcador.
fn strip_settings_part(settings: &Path) -> Result<PartStatus, String> {
    let contents = fs::read_to_string(settings)
        .map_err(|e| format!("No se pudo leer settings.xml: {}", e))?;

    if !contents.contains(PROTECTION_PREFIX) {
        return Ok(PartStatus::NoProtectionFound);
    }

    let stripped = protection_pattern().replace_all(&contents, "");
    fs::write(settings, stripped.as_bytes())
        .map_err(|e| format!("No se pudo escribir settings.xml: {}", e))?;

    Ok(PartStatus::ProtectionRemoved)
}
