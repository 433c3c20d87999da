use anyhow::{bail, Result};
use rst_languages::config::Config;
use rst_languages::languages::builtin::find_builtin;
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rst_languages=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let list = args.iter().any(|arg| arg == "--list");
    let code = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| config.default_language.clone());

    let registry = config.build_registry();

    if list {
        for code in registry.available() {
            match find_builtin(&code) {
                Some(unit) => println!("{}\t{}", code, unit.name),
                None => println!("{}", code),
            }
        }
        return Ok(());
    }

    info!("Looking up language '{}'", code);
    let module = match registry.try_get_language(&code) {
        Ok(module) => module,
        Err(e) if e.is_not_found() => bail!("Unknown language code: '{}'", code),
        Err(e) => return Err(e.into()),
    };

    println!("{}", serde_json::to_string_pretty(module.as_ref())?);
    info!(
        "Language '{}': {} directives, {} roles",
        module.code(),
        module.directives().len(),
        module.roles().len()
    );
    debug!("Registry metrics: {:?}", registry.metrics().report());
    Ok(())
}
