use crate::export::{export_table, parse_export_format};
use crate::formatting::format_size;
use crate::ingest::{self, BatchOutcome};
use crate::options::ScanOptions;
use crate::table::{MetadataTable, SortDirection, SortKey};
use crate::ui;
use console::style;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run() -> Result<(), String> {
    let mut state =
        AppState::new().map_err(|error| format!("No se pudo inicializar ImageLens: {error}"))?;

    ui::render_header();
    ui::render_intro();

    let mut input = String::new();
    loop {
        match read_user_input(&mut input) {
            Ok(None) => {
                println!("\n{}", style("Fin de la entrada. ¡Hasta luego!").dim());
                break;
            }
            Ok(Some(line)) => {
                if line.is_empty() {
                    continue;
                }

                if matches_command(&line, &["exit", "salir"]) {
                    println!("{}", style("Hasta luego!").dim());
                    break;
                }

                if matches_command(&line, &["ayuda", "help"]) {
                    ui::render_help();
                    continue;
                }

                if let Err(message) = handle_input(&mut state, &line) {
                    eprintln!("{}", style(message).red());
                }
            }
            Err(error) => {
                eprintln!("Error al leer la entrada: {error}");
            }
        }
    }

    Ok(())
}

/// Modo no interactivo: analiza las rutas recibidas, imprime la tabla y termina.
pub fn run_batch(paths: &[String]) -> Result<(), String> {
    let mut state =
        AppState::new().map_err(|error| format!("No se pudo inicializar ImageLens: {error}"))?;
    for path in paths {
        add_path(&mut state, path)?;
    }
    render_table(&state.table);
    Ok(())
}

struct AppState {
    current_dir: PathBuf,
    options: ScanOptions,
    table: MetadataTable,
}

impl AppState {
    fn new() -> io::Result<Self> {
        let options = ScanOptions::from_env().map_err(io::Error::other)?;
        Ok(Self {
            current_dir: env::current_dir()?,
            options,
            table: MetadataTable::new(),
        })
    }

    fn resolve_path(&self, input: &str) -> PathBuf {
        let candidate = Path::new(input);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.current_dir.join(candidate)
        }
    }
}

fn matches_command(input: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| input.eq_ignore_ascii_case(alias))
}

fn handle_input(state: &mut AppState, raw_input: &str) -> Result<(), String> {
    let trimmed = raw_input.trim();
    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or("");
    let remainder = trimmed[command.len()..].trim();

    match command.to_lowercase().as_str() {
        "agregar" | "add" => {
            if remainder.is_empty() {
                return Err("Debes indicar la ruta que deseas analizar.".to_string());
            }
            add_path(state, remainder)?;
            render_table(&state.table);
            Ok(())
        }
        "tabla" | "ver" | "ls" => {
            render_table(&state.table);
            Ok(())
        }
        "ordenar" | "sort" => {
            let key = parts
                .next()
                .ok_or_else(|| "Debes indicar la columna por la que ordenar.".to_string())?
                .parse::<SortKey>()?;
            let direction = match parts.next() {
                Some(value) => value.parse::<SortDirection>()?,
                None => SortDirection::Ascending,
            };
            state.table.sort_by(key, direction);
            render_table(&state.table);
            Ok(())
        }
        "limpiar" | "clear" => {
            state.table.clear();
            println!("{}", style("Tabla vacía.").dim());
            Ok(())
        }
        "exportar" | "export" => {
            if remainder.is_empty() {
                return Err("Debes indicar el formato de exportación.".to_string());
            }
            // La ruta es todo lo que sigue al formato y puede contener espacios.
            let (format_name, target_input) = remainder
                .split_once(char::is_whitespace)
                .unwrap_or((remainder, ""));
            let format = parse_export_format(format_name)?;
            let target_input = target_input.trim();
            let target = if target_input.is_empty() {
                state
                    .current_dir
                    .join(format!("imagelens.{}", format.extension()))
            } else {
                state.resolve_path(target_input)
            };
            export_table(state.table.rows(), format, &target)?;
            println!(
                "{}",
                style(format!(
                    "Reporte {} guardado en {}",
                    format.label(),
                    target.display()
                ))
                .green()
            );
            Ok(())
        }
        _ => {
            add_path(state, trimmed)?;
            render_table(&state.table);
            Ok(())
        }
    }
}

fn add_path(state: &mut AppState, input: &str) -> Result<(), String> {
    let path = state.resolve_path(input);
    let files = ingest::load_path(&path, &state.options)?;
    let outcome = ingest::inspect_all(&files, &state.options);
    render_summary(&outcome);
    state.table.extend(outcome.records);
    Ok(())
}

fn render_summary(outcome: &BatchOutcome) {
    let mut summary = format!(
        "{} imágenes agregadas · {} leídos",
        outcome.records.len(),
        format_size(outcome.bytes_read)
    );
    if !outcome.skipped.is_empty() {
        summary.push_str(&format!(
            " · {} omitidos ({} no soportados, {} incompletos)",
            outcome.skipped.len(),
            outcome.unsupported_count(),
            outcome.truncated_count()
        ));
    }
    println!("\n{}", style(summary).dim());
}

fn render_table(table: &MetadataTable) {
    if table.is_empty() {
        println!("\n{}\n", style("La tabla está vacía.").dim());
        return;
    }
    println!("\n{}\n", table.render());
}

fn read_user_input(buffer: &mut String) -> io::Result<Option<String>> {
    print!("{} ", style("Ruta").bold().cyan());
    print!("{} ", style("›").cyan());
    io::stdout().flush()?;

    buffer.clear();
    let bytes_read = io::stdin().read_line(buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim().to_string()))
}
