//! Variante para hojas de cálculo: elimina el elemento `sheetProtection`.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use xmltree::{Element, EmitterConfig, XMLNode};

use super::archive::{derive_output_path, repack_package, unpack_package};
use super::error::ProcessError;
use super::report::{PartReport, PartStatus, ProcessReport};
use super::workdir::WorkDir;

const WORKSHEETS_DIR: &str = "xl/worksheets";
const PROTECTION_ELEMENT: &str = "sheetProtection";

/// Elimina la protección de todas las hojas de un libro `.xlsx` y escribe la
/// copia desbloqueada junto al original.
pub(crate) fn remove_sheet_protection(path: &Path) -> Result<ProcessReport, ProcessError> {
    let workdir = WorkDir::create(path)?;
    unpack_package(path, workdir.path())?;

    let worksheets = workdir.path().join(WORKSHEETS_DIR);
    if !worksheets.is_dir() {
        return Ok(ProcessReport::StructureMissing {
            missing: WORKSHEETS_DIR.to_string(),
        });
    }

    let sheet_parts = collect_sheet_parts(&worksheets)?;
    if sheet_parts.is_empty() {
        return Ok(ProcessReport::NoWorksheetParts);
    }

    let mut parts = Vec::new();
    for sheet in sheet_parts {
        let name = sheet.file_name().unwrap_or_default().to_string_lossy();
        let part = format!("{}/{}", WORKSHEETS_DIR, name);
        let status = strip_sheet_part(&sheet, &part)?;
        parts.push(PartReport { part, status });
    }

    let output = derive_output_path(path);
    repack_package(workdir.path(), &output)?;

    Ok(ProcessReport::Completed { parts, output })
}

/// Enumera las partes `sheet*.xml` de la carpeta de hojas, en orden estable.
fn collect_sheet_parts(worksheets: &Path) -> Result<Vec<PathBuf>, ProcessError> {
    let mut parts = Vec::new();
    for entry in fs::read_dir(worksheets)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file() && name.starts_with("sheet") && name.ends_with(".xml") {
            parts.push(path);
        }
    }
    parts.sort();
    Ok(parts)
}

/// Analiza una hoja y poda `sheetProtection` bajo el espacio de nombres
/// declarado por el propio documento.
///
/// La hoja solo se reescribe cuando hubo eliminación; las partes sin
/// protección conservan sus bytes originales.
fn strip_sheet_part(sheet: &Path, part: &str) -> Result<PartStatus, ProcessError> {
    let contents = fs::read(sheet)?;
    let mut root =
        Element::parse(Cursor::new(&contents[..])).map_err(|e| ProcessError::MalformedXml {
            part: part.to_string(),
            detail: e.to_string(),
        })?;

    // El espacio de nombres por defecto varía entre revisiones del formato,
    // así que se toma del elemento raíz en lugar de fijarlo.
    let default_ns = root.namespace.clone();
    let removed = remove_protection_elements(&mut root, default_ns.as_deref());
    if removed == 0 {
        return Ok(PartStatus::NoProtectionFound);
    }

    let mut output = Vec::new();
    let mut config = EmitterConfig::new();
    config.perform_indent = false;
    config.write_document_declaration = true;
    root.write_with_config(&mut output, config)
        .map_err(|e| ProcessError::PartWrite {
            part: part.to_string(),
            detail: e.to_string(),
        })?;
    fs::write(sheet, output)?;

    Ok(PartStatus::ProtectionRemoved)
}

/// Elimina recursivamente los elementos de protección con todo su subárbol;
/// devuelve cuántos se podaron.
fn remove_protection_elements(element: &mut Element, default_ns: Option<&str>) -> usize {
    let mut removed = 0;
    element.children.retain(|node| match node {
        XMLNode::Element(child) if is_protection_element(child, default_ns) => {
            removed += 1;
            false
        }
        _ => true,
    });

    for node in element.children.iter_mut() {
        if let XMLNode::Element(child) = node {
            removed += remove_protection_elements(child, default_ns);
        }
    }

    removed
}

fn is_protection_element(element: &Element, default_ns: Option<&str>) -> bool {
    element.name == PROTECTION_ELEMENT && element.namespace.as_deref() == default_ns
}
