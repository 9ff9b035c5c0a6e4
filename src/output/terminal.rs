//! Terminal output formatting

use crate::models::{DistributionSummary, FileCopy, ServiceOutcome};
use console::style;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style as TabledStyle},
    Table, Tabled,
};

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

/// Print the one-line run summary, plus a warning recap when any copy or
/// directory creation failed.
pub fn print_summary(summary: &DistributionSummary) {
    if summary.has_warnings() {
        print_warning(&format!(
            "Distributed '{}': {} of {} files copied across {} service(s)",
            summary.src_dir_name,
            summary.copied(),
            summary.attempted(),
            summary.services.len()
        ));
        for service in &summary.services {
            print_service_warnings(service);
        }
    } else {
        print_success(&format!(
            "Distributed '{}': {} files copied across {} service(s)",
            summary.src_dir_name,
            summary.copied(),
            summary.services.len()
        ));
    }
}

fn print_service_warnings(service: &ServiceOutcome) {
    if let Some(err) = &service.dir_error {
        print_warning(&format!(
            "{}: cannot create {}: {}",
            service.display_name,
            service.dest_dir.display(),
            err
        ));
    }
    for file in service.files.iter().filter(|f| f.error.is_some()) {
        print_warning(&format!(
            "{}: {} not copied: {}",
            service.display_name,
            file.file_name,
            file.error.as_deref().unwrap_or_default()
        ));
    }
}

/// Print the full per-file result table (verbose mode)
pub fn print_summary_table(summary: &DistributionSummary) {
    #[derive(Tabled)]
    struct CopyRow {
        #[tabled(rename = "Service")]
        service: String,
        #[tabled(rename = "File")]
        file: String,
        #[tabled(rename = "Destination")]
        destination: String,
        #[tabled(rename = "Result")]
        result: String,
    }

    let rows: Vec<CopyRow> = summary
        .services
        .iter()
        .flat_map(|service| {
            service.files.iter().map(move |file| CopyRow {
                service: service.display_name.clone(),
                file: file.file_name.clone(),
                destination: file.dest.display().to_string(),
                result: copy_result(file),
            })
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    print_header("Copy Results");
    let table = Table::new(rows)
        .with(TabledStyle::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    println!("{}", table);
}

fn copy_result(file: &FileCopy) -> String {
    match &file.error {
        None => format!("{} copied", file.status().icon()),
        Some(err) => format!("{} {}", file.status().icon(), err),
    }
}
