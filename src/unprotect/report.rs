//! Resultado estructurado de una operación de desbloqueo.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Estado final de una parte procesada dentro del paquete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PartStatus {
    /// La parte contenía el marcador de protección y fue eliminado.
    ProtectionRemoved,
    /// La parte no contenía protección; su contenido queda intacto.
    NoProtectionFound,
    /// La manipulación de la parte falló; el paquete se genera igualmente.
    Failed { detail: String },
}

/// Resultado por parte, identificada por su ruta relativa dentro del paquete.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PartReport {
    pub part: String,
    pub status: PartStatus,
}

/// Desenlace de una invocación completa.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ProcessReport {
    /// Falta una carpeta o parte estructural esperada; no se genera copia.
    StructureMissing { missing: String },
    /// El libro no contiene ninguna parte de hoja; no se genera copia.
    NoWorksheetParts,
    /// Operación completada con la copia escrita en `output`.
    Completed {
        parts: Vec<PartReport>,
        output: PathBuf,
    },
}

impl ProcessReport {
    /// Código de salida del proceso asociado a cada desenlace.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProcessReport::Completed { .. } => 0,
            ProcessReport::StructureMissing { .. } => 3,
            ProcessReport::NoWorksheetParts => 4,
        }
    }
}
