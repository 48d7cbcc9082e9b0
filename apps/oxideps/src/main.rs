use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::{debug, info};
use oxideps_core::{Dependency, Options, Source};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "oxideps")]
#[command(about = "List the module dependencies of a JavaScript/TypeScript file")]
struct Cli {
    /// File to analyze, or `-` for stdin
    file: PathBuf,

    #[command(flatten)]
    options: Options,

    /// JSON file with extraction options (camelCase keys)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli);

    let mut options = cli.options;
    if let Some(path) = &cli.config {
        let from_file = Options::from_json_file(path)?;
        options = options.merge(from_file);
    }
    debug!("Options: {:?}", options);

    let start = Instant::now();

    let deps = if cli.file.as_os_str() == "-" {
        let mut src = String::new();
        io::stdin().read_to_string(&mut src).context("Failed to read stdin")?;
        oxideps_core::extract(Some(Source::Text(&src)), &options)?
    } else {
        oxideps_core::extract_file(&cli.file, &options).with_context(|| {
            format!("Failed to extract dependencies from {}", cli.file.display())
        })?
    };

    info!("Extracted {} dependencies in {}ms", deps.len(), start.elapsed().as_millis());

    match cli.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, &deps)?;
            writeln!(stdout)?;
        }
        Format::Text => print_text(&mut stdout, &deps)?,
    }
    stdout.flush()?;

    Ok(())
}

fn print_text<W: Write>(writer: &mut W, deps: &[Dependency]) -> io::Result<()> {
    for dep in deps {
        match &dep.imported_names {
            Some(names) if !names.is_empty() => writeln!(
                writer,
                "{} {}",
                dep.specifier.cyan(),
                format!("{{ {} }}", names.join(", ")).dimmed()
            )?,
            _ => writeln!(writer, "{}", dep.specifier.cyan())?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxideps_core::DependencyKind;

    #[test]
    fn test_print_text() {
        colored::control::set_override(false);
        let deps = vec![
            Dependency::new("./mod", DependencyKind::Import)
                .with_imported_names(vec!["a".to_string(), "b".to_string()]),
            Dependency::new("./side", DependencyKind::Import).with_imported_names(vec![]),
            Dependency::new("pkg", DependencyKind::Export),
        ];
        let mut out = Vec::new();
        print_text(&mut out, &deps).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "./mod { a, b }\n./side\npkg\n");
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "oxideps",
            "src/index.ts",
            "--mixed-imports",
            "--skip-type-imports",
            "--format",
            "text",
        ]);
        assert_eq!(cli.file, PathBuf::from("src/index.ts"));
        assert!(cli.options.mixed_imports);
        assert!(cli.options.skip_type_imports);
        assert!(!cli.options.skip_async_imports);
        assert!(!cli.options.jsx);
        assert!(matches!(cli.format, Format::Text));
    }
}
