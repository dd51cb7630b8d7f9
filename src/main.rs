//! Punto de entrada de DocUnlock: recibe una ruta y reporta el desenlace.

use console::style;
use std::env;
use std::path::Path;
use std::process::ExitCode;

mod unprotect;

use unprotect::{PartStatus, ProcessError, ProcessReport, process_file};

fn main() -> ExitCode {
    let mut args = env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!(
            "{}",
            style("Uso: docunlock <archivo.xlsx|archivo.docx>").yellow()
        );
        return ExitCode::from(2);
    };

    match process_file(Path::new(&path)) {
        Ok(report) => {
            render_report(&report);
            ExitCode::from(report.exit_code())
        }
        Err(error) => {
            render_error(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn render_report(report: &ProcessReport) {
    match report {
        ProcessReport::StructureMissing { missing } => {
            println!("\n{}", style("┌─ Estructura incompleta ─").yellow());
            println!(
                "{}",
                style(format!("│ No se encontró `{}` dentro del paquete.", missing)).yellow()
            );
            println!("{}", style("│ No se generó ninguna copia.").yellow());
            println!("{}", style("└─").yellow());
        }
        ProcessReport::NoWorksheetParts => {
            println!("\n{}", style("┌─ Libro sin hojas ─").yellow());
            println!(
                "{}",
                style("│ El paquete no contiene ninguna parte sheet*.xml.").yellow()
            );
            println!("{}", style("│ No se generó ninguna copia.").yellow());
            println!("{}", style("└─").yellow());
        }
        ProcessReport::Completed { parts, output } => {
            println!("\n{}", style("┌─ Proceso completado ─").green());
            for part in parts {
                match &part.status {
                    PartStatus::ProtectionRemoved => println!(
                        "{}",
                        style(format!("│ {}: protección eliminada", part.part)).green()
                    ),
                    PartStatus::NoProtectionFound => println!(
                        "{}",
                        style(format!("│ {}: sin protección", part.part)).dim()
                    ),
                    PartStatus::Failed { detail } => println!(
                        "{}",
                        style(format!("│ {}: error ({})", part.part, detail)).red()
                    ),
                }
            }
            println!(
                "{}",
                style(format!("│ Copia guardada en {}", output.display()))
                    .green()
                    .bold()
            );
            println!("{}", style("└─").green());
        }
    }
}

fn render_error(error: &ProcessError) {
    eprintln!("\n{}", style("┌─ Operación fallida ─").red());
    eprintln!("{}", style(format!("│ {}", error)).red());
    eprintln!("{}", style("└─").red());
}
