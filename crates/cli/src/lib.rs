use clap::Parser;
use plugin_scanner_api::{AnnotationId, ComponentRegistry};
use plugin_scanner_core::scanner::{EXTENSIBLE_ANNOTATION, NAMED_COMPONENT_ANNOTATION};
use plugin_scanner_core::{Classpath, ScanError, ScannerConfig};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "plugin-scanner",
    version,
    about = "Builds the named component registry of a plugin from its compiled classes",
    long_about = "Reads every class on the given classpath, collects classes annotated as extensible \
                  and classes registered under a component name, checks that each component is a \
                  known extensible type, and writes the resulting registry as JSON."
)]
pub struct ScanArgs {
    /// File the registry is written to; parent directories are created
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Directories and jars to scan, as a platform path list. Defaults to $CLASSPATH
    #[arg(long, short = 'c', value_name = "PATHS")]
    pub classpath: Option<OsString>,

    /// Marker annotation of extensible types
    #[arg(long, value_name = "CLASS", default_value = EXTENSIBLE_ANNOTATION)]
    pub extensible_annotation: String,

    /// Annotation holding a component's registered name
    #[arg(long, value_name = "CLASS", default_value = NAMED_COMPONENT_ANNOTATION)]
    pub named_annotation: String,

    /// Do not write OUTPUT; fail if it differs from a fresh scan
    #[arg(long)]
    pub check: bool,

    /// Also write logs to <DIR>/scanner.log
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ScanArgs {
    pub fn into_config(self) -> ScannerConfig {
        let env_classpath = std::env::var_os("CLASSPATH");
        self.into_config_with(env_classpath)
    }

    /// `env_classpath` is used only when `--classpath` was not given
    pub fn into_config_with(self, env_classpath: Option<OsString>) -> ScannerConfig {
        let classpath = self
            .classpath
            .or(env_classpath)
            .map(|list| Classpath::from_path_list(&list))
            .unwrap_or_default();

        ScannerConfig {
            classpath,
            extensible_annotation: AnnotationId::of_class(&self.extensible_annotation),
            named_annotation: AnnotationId::of_class(&self.named_annotation),
            output: self.output,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = ScanArgs::parse();
    let _guard = plugin_scanner_core::logging::init_logging("scanner", args.log_dir.as_deref());

    let check = args.check;
    let config = args.into_config();
    if config.classpath.is_empty() {
        info!("Classpath is empty; the registry will be empty");
    }

    match execute(&config, check) {
        Ok(registry) => {
            info!(
                "Registry with {} extensible types {} {}",
                registry.len(),
                if check { "matches" } else { "written to" },
                config.output.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Scan failed: {}", e);
            Err(e.into())
        }
    }
}

/// Write the registry, or with `check` only compare it against the stored one.
pub fn execute(config: &ScannerConfig, check: bool) -> Result<ComponentRegistry, ScanError> {
    if check {
        plugin_scanner_core::check_file(config)
    } else {
        plugin_scanner_core::scan_to_file(config)
    }
}
