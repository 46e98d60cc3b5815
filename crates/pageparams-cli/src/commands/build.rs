use anyhow::Result;
use colored::Colorize;
use pageparams::{build, BuildOptions};

pub fn execute(options: &BuildOptions) -> Result<()> {
    println!("{}", "Generating route parameters...".green().bold());
    println!();
    println!("Pages: {}", options.source_dir.display().to_string().cyan());
    println!("Extensions: {}", options.extensions.join(", ").cyan());
    println!();

    let report = build::run(options)?;

    for route in &report.routes {
        println!("  {} {}: {}", "•".cyan(), route.slug, route.kind.shape().as_str());
    }
    if !report.routes.is_empty() {
        println!();
    }

    println!(
        "{} {} parameters from {} pages → {}",
        "✓".green(),
        report.routes.len(),
        report.pages,
        report.artifact.display()
    );

    Ok(())
}
