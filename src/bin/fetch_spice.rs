//! Download the SPICE kernels used by `--ephemeris spice` into `data/spice/`.

use solar_system_orbits::ephemeris::kernels::{
    KERNEL_CATALOG, KernelSummary, LOCAL_SPICE_DIR, kernel_summaries,
};
use solar_system_orbits::importer;
use solar_system_orbits::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    let statuses = importer::download_kernels(KERNEL_CATALOG)?;
    for status in &statuses {
        println!("[{}] {}", status.tag(), status.path().display());
    }

    match kernel_summaries() {
        Ok(summaries) => print_summaries(&summaries),
        Err(err) => eprintln!("[warn] unable to summarize kernels: {err}"),
    }

    Ok(())
}

fn print_summaries(summaries: &[KernelSummary]) {
    println!("\nLocal kernels in {LOCAL_SPICE_DIR}:");
    for summary in summaries {
        let descriptor = summary.descriptor;
        println!(
            "  {:<13} {:<20} {:>9}  {}",
            descriptor.filename,
            descriptor.kind.label(),
            format_size(summary.file_size_bytes),
            descriptor.description
        );
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }
    if unit_idx == 0 {
        format!("{bytes} {}", UNITS[unit_idx])
    } else {
        format!("{value:.1} {}", UNITS[unit_idx])
    }
}
