//! Expansión y reempaquetado de paquetes Office basados en ZIP.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::error::ProcessError;

/// Sufijo insertado antes de la extensión original al derivar la copia.
const OUTPUT_MARKER: &str = "modified";

/// Expande todas las entradas del paquete dentro del directorio de trabajo,
/// conservando las rutas relativas.
pub(crate) fn unpack_package(source: &Path, destination: &Path) -> Result<(), ProcessError> {
    let file = File::open(source)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| ProcessError::ArchiveCorrupt(e.to_string()))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| ProcessError::ArchiveCorrupt(e.to_string()))?;

        // Rechazar entradas que escaparían del directorio de trabajo.
        let Some(relative) = entry.enclosed_name() else {
            return Err(ProcessError::ArchiveCorrupt(format!(
                "entrada con ruta inválida: {}",
                entry.name()
            )));
        };

        let target = destination.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut output = File::create(&target)?;
        io::copy(&mut entry, &mut output)?;
    }

    Ok(())
}

/// Deriva la ruta de la copia: `libro.xlsx` pasa a ser `libro.modified.xlsx`.
pub(crate) fn derive_output_path(source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let extension = source.extension().unwrap_or_default().to_string_lossy();
    source.with_file_name(format!("{}.{}.{}", stem, OUTPUT_MARKER, extension))
}

/// Reempaqueta el directorio de trabajo en un nuevo paquete en `output`.
///
/// Nunca sobrescribe un archivo existente: una copia previa con el mismo
/// nombre produce [`ProcessError::DestinationExists`].
pub(crate) fn repack_package(workdir: &Path, output: &Path) -> Result<(), ProcessError> {
    if output.exists() {
        return Err(ProcessError::DestinationExists(output.to_path_buf()));
    }

    let file = File::create(output)?;
    let mut writer = ZipWriter::new(file);
    let options =
        FileOptions::<'_, ()>::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(workdir).sort_by_file_name() {
        let entry = entry.map_err(|e| ProcessError::Repack(e.to_string()))?;
        let path = entry.path();

        let Ok(relative) = path.strip_prefix(workdir) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if path.is_dir() {
            // Los directorios intermedios quedan implícitos en las rutas de
            // sus archivos; solo los vacíos necesitan entrada propia.
            if fs::read_dir(path)?.next().is_none() {
                writer
                    .add_directory(name, options)
                    .map_err(|e| ProcessError::Repack(e.to_string()))?;
            }
            continue;
        }

        writer
            .start_file(name, options)
            .map_err(|e| ProcessError::Repack(e.to_string()))?;
        let mut contents = File::open(path)?;
        io::copy(&mut contents, &mut writer)?;
    }

    writer
        .finish()
        .map_err(|e| ProcessError::Repack(e.to_string()))?;

    Ok(())
}
