//! Eliminación de la protección contra escritura en documentos Office.
//!
//! El paquete se expande en un directorio temporal, se podan los marcadores
//! de protección de las partes afectadas y el árbol se reempaqueta en una
//! copia nueva junto al original, que nunca se modifica.

mod archive;
mod error;
mod excel;
mod report;
mod word;
mod workdir;

pub use error::ProcessError;
pub use report::{PartReport, PartStatus, ProcessReport};


use std::path::Path;

/// Despacha la eliminación de protección en función de la extensión del archivo.
pub fn process_file(path: &Path) -> Result<ProcessReport, ProcessError> {
    if !path.is_file() {
        return Err(ProcessError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "xlsx" => excel::remove_sheet_protection(path),
        "docx" => word::remove_document_protection(path),
        _ => Err(ProcessError::UnsupportedType(extension)),
    }
}
