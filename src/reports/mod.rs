use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use sniffcsv::api::DetectionResult;
use sniffcsv::dialect::printable_char;
use sniffcsv::scorer::ScoredDialect;
use std::path::{Path, PathBuf};

fn opt_char(c: Option<char>) -> String {
    match c {
        Some(c) => printable_char(c),
        None => "-".to_string(),
    }
}

pub fn print_summary(results: &[(PathBuf, DetectionResult)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "File",
            "Delimiter",
            "Quote",
            "Escape",
            "Score",
            "Rows",
            "Columns",
            "Confidence",
        ]);

    for (path, r) in results {
        table.add_row(vec![
            Cell::new(path.display()),
            Cell::new(printable_char(r.dialect.delimiter)),
            Cell::new(opt_char(r.dialect.quote)),
            Cell::new(opt_char(r.dialect.escape)),
            Cell::new(format!("{:.3}", r.score)).set_alignment(CellAlignment::Right),
            Cell::new(r.row_count).set_alignment(CellAlignment::Right),
            Cell::new(r.modal_column_count).set_alignment(CellAlignment::Right),
            Cell::new(if r.low_confidence { "LOW" } else { "ok" }),
        ]);
    }
    println!("{table}");
}

pub fn print_rank_table(path: &Path, ranked: &[ScoredDialect]) {
    let mut ordered: Vec<&ScoredDialect> = ranked.iter().collect();
    // stable: equal scores keep generation order, matching the selector
    ordered.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Delimiter",
            "Quote",
            "Escape",
            "Score",
            "Rows",
            "Modal Cols",
            "Dominant Pattern",
        ]);

    for cand in ordered {
        let pattern = cand
            .stats
            .dominant_pattern()
            .map(|(p, _)| {
                p.iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(printable_char(cand.dialect.delimiter)),
            Cell::new(opt_char(cand.dialect.quote)),
            Cell::new(opt_char(cand.dialect.escape)),
            Cell::new(format!("{:.3}", cand.score)).set_alignment(CellAlignment::Right),
            Cell::new(cand.stats.row_count).set_alignment(CellAlignment::Right),
            Cell::new(cand.stats.modal_length()).set_alignment(CellAlignment::Right),
            Cell::new(pattern),
        ]);
    }

    println!("\n=== {} ===", path.display());
    println!("{table}");
}
