//! Condiciones de fallo al desbloquear un documento.

use std::path::PathBuf;

use thiserror::Error;

/// Fallos que abortan la operación sobre un documento.
///
/// Las ausencias estructurales (carpeta de hojas o `settings.xml`
/// inexistentes) no son errores: se comunican mediante
/// [`ProcessReport`](super::ProcessReport) porque la operación termina de
/// forma ordenada sin generar copia.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("El archivo `{0}` no existe")]
    NotFound(PathBuf),

    #[error("Formato .{0} no soportado; solo se admiten .xlsx y .docx")]
    UnsupportedType(String),

    #[error("No es un documento Office válido: {0}")]
    ArchiveCorrupt(String),

    #[error("Ya existe una copia en `{0}`; elimínala o renómbrala antes de continuar")]
    DestinationExists(PathBuf),

    #[error("XML malformado en `{part}`: {detail}")]
    MalformedXml { part: String, detail: String },

    #[error("No se pudo reescribir `{part}`: {detail}")]
    PartWrite { part: String, detail: String },

    #[error("Error generando el paquete de salida: {0}")]
    Repack(String),

    #[error("Error de E/S procesando el documento: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessError {
    /// Código de salida del proceso asociado a cada condición.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProcessError::NotFound(_) => 5,
            ProcessError::UnsupportedType(_) => 6,
            ProcessError::ArchiveCorrupt(_) => 7,
            ProcessError::DestinationExists(_) => 8,
            ProcessError::MalformedXml { .. } => 9,
            ProcessError::PartWrite { .. } | ProcessError::Repack(_) | ProcessError::Io(_) => 1,
        }
    }
}
