use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use objcore::{Engine, EngineConfig, ObjCoreError, ObjectRef};

#[derive(Parser)]
#[command(name = "objcore", about = "Inspect the intrinsic objects of an objcore context")]
struct Cli {
    /// JSON engine config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which intrinsic to dump
    #[arg(long, value_enum, default_value_t = Intrinsic::ObjectPrototype)]
    object: Intrinsic,

    /// Print the property table as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Intrinsic {
    ObjectPrototype,
    FunctionPrototype,
    Object,
    BooleanPrototype,
    NumberPrototype,
    StringPrototype,
    SymbolPrototype,
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path).map_err(ObjCoreError::from)?,
        None => EngineConfig::default(),
    };

    let ctx = Engine::new().with_config(config).new_context();
    let intrinsics = ctx.intrinsics();
    let target: ObjectRef = match cli.object {
        Intrinsic::ObjectPrototype => intrinsics.object_prototype,
        Intrinsic::FunctionPrototype => intrinsics.function_prototype,
        Intrinsic::Object => intrinsics.object_constructor,
        Intrinsic::BooleanPrototype => intrinsics.boolean_prototype,
        Intrinsic::NumberPrototype => intrinsics.number_prototype,
        Intrinsic::StringPrototype => intrinsics.string_prototype,
        Intrinsic::SymbolPrototype => intrinsics.symbol_prototype,
    };

    let rows = ctx.property_table(target).map_err(ObjCoreError::from)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&rows).into_diagnostic()?;
        println!("{json}");
        return Ok(());
    }

    let tag = ctx
        .object(target)
        .map_err(ObjCoreError::from)?
        .class_tag
        .clone();
    println!("{:?} [{tag}]", cli.object);
    for row in rows {
        let flag = |on: bool, c: char| if on { c } else { '-' };
        println!(
            "  {}{}{} {:<22} {:<8} {}",
            flag(row.writable.unwrap_or(false), 'w'),
            flag(row.enumerable, 'e'),
            flag(row.configurable, 'c'),
            row.key,
            row.kind,
            row.value.unwrap_or_default(),
        );
    }
    Ok(())
}
