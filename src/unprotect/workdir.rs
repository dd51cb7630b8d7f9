//! Directorio de trabajo temporal con limpieza garantizada.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs, io, process};

/// Directorio temporal donde se expande el paquete durante una operación.
///
/// Se elimina recursivamente al salir del ámbito, incluidas las salidas
/// tempranas por `?`.
pub(crate) struct WorkDir {
    path: PathBuf,
}

impl WorkDir {
    /// Crea un directorio fresco en el área temporal del sistema.
    ///
    /// El nombre combina el nombre base del documento con el pid y una marca
    /// de tiempo para que dos ejecuciones simultáneas sobre archivos con el
    /// mismo nombre no colisionen.
    pub(crate) fn create(source: &Path) -> io::Result<Self> {
        let stem = source.file_stem().unwrap_or_default().to_string_lossy();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        let path = env::temp_dir().join(format!("{}_{}_{}", stem, process::id(), timestamp));
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}
