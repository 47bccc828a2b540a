//! Developer tasks (schema generation, fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(|p| p.to_path_buf())
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn feed_fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures").join("feeds"))
}

/// Schema definition with its target filename.
struct SchemaTarget {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(lagguard_types::LagguardReport)
}

fn generate_feed_schema() -> schemars::Schema {
    schema_for!(lagguard_types::FeedDocument)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(lagguard_settings::LagguardConfigV1)
}

fn schema_targets() -> Vec<SchemaTarget> {
    vec![
        SchemaTarget {
            filename: "lagguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaTarget {
            filename: "lagguard.feed.v1.json",
            generate: generate_feed_schema,
        },
        SchemaTarget {
            filename: "lagguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for target in schema_targets() {
        let json = serialize_schema(&(target.generate)())?;
        let path = dir.join(target.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for target in schema_targets() {
        let path = dir.join(target.filename);

        if !path.exists() {
            missing.push(target.filename);
            continue;
        }

        let expected = serialize_schema(&(target.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(target.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Validate every feed fixture against the generated feed schema.
fn check_fixtures() -> anyhow::Result<()> {
    let dir = feed_fixtures_dir()?;
    let dir = Utf8PathBuf::from_path_buf(dir)
        .map_err(|p| anyhow::anyhow!("non-UTF-8 fixtures path: {}", p.display()))?;
    let checked = check_feed_files(&dir)?;
    println!("✓ {checked} feed fixture(s) conform to lagguard.feed.v1");
    Ok(())
}

/// Schema-check every feed file `load_feed` would read from `path`.
fn check_feed_files(path: &Utf8Path) -> anyhow::Result<usize> {
    let schema = serde_json::to_value(generate_feed_schema()).context("feed schema to JSON")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile feed schema: {}", e))?;

    let files = lagguard_repo::discover_feed_files(path)?;

    let mut errors = Vec::new();
    for file in &files {
        let text = fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?;
        let instance: serde_json::Value =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {file}"))?;

        for err in validator.iter_errors(&instance) {
            errors.push(format!("{file}: {err}"));
        }
    }

    if !errors.is_empty() {
        for e in &errors {
            eprintln!("  - {}", e);
        }
        bail!("{} fixture error(s)", errors.len());
    }

    Ok(files.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  check-fixtures    Validate tests/fixtures/feeds against the feed schema");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-fixtures" => check_fixtures(),
        "print-schema-ids" => {
            for target in schema_targets() {
                println!("{}", target.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
