use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use console::style;

const HEADER_WIDTH: usize = 74;

pub fn render_header() {
    let border = "─".repeat(HEADER_WIDTH - 2);
    println!("\n{}", style(format!("┌{}┐", border)).cyan());
    println!(
        "{}",
        style(format!(
            "│ {:^inner_width$} │",
            "▸ ImageLens · Inspector de Cabeceras de Imágenes ◂",
            inner_width = HEADER_WIDTH - 4
        ))
        .cyan()
        .bold()
    );
    println!("{}\n", style(format!("└{}┘", border)).cyan());
}

pub fn render_intro() {
    let hint_lines = [
        "┌─ Puedes ingresar:",
        "│   • Una imagen (JPEG, PNG, GIF, BMP o TIFF)",
        "│   • Un archivo ZIP con imágenes",
        "│   • Un directorio (ej. ./fotos)",
        "└─ Escribe 'ayuda' para ver los comandos.",
    ];

    for line in hint_lines.iter() {
        println!("{}", style(line).cyan().dim());
    }

    println!();
}

pub fn render_help() {
    let commands = [
        ("<ruta>", "Analiza una imagen, un ZIP o un directorio"),
        ("agregar <ruta>", "Igual que escribir la ruta"),
        ("tabla", "Muestra la tabla acumulada"),
        (
            "ordenar <columna> [asc|desc]",
            "formato, nombre, tamaño, profundidad, color, compresión",
        ),
        ("limpiar", "Vacía la tabla"),
        ("exportar <formato> <ruta>", "json, csv, txt o xlsx"),
        ("salir", "Termina la sesión"),
    ];

    println!();
    for (command, description) in commands {
        println!(
            "  {} {} {}",
            style(format!("{command:<30}")).cyan().bold(),
            style("→").dim(),
            style(description).white()
        );
    }
    println!();
}

pub fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
        .add_attribute(Attribute::Underlined)
}
