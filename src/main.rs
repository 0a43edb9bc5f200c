use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use maven_paths::maven::paths::{artifact_path, metadata_path, pom_path};
use maven_paths::{checksum_type_of_path, signature_type_of_path, RepositoryLayout, SubordinateType};

#[derive(Debug, Parser)]
#[command(name = "mvnpath", about = "Parses and generates Maven repository paths")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse repository-relative paths, printing one JSON object per path
    Parse {
        /// Repository layout: maven1 (legacy) or maven2 (default)
        #[arg(long, default_value_t = RepositoryLayout::Maven2)]
        layout: RepositoryLayout,
        paths: Vec<String>,
    },
    /// Print the layout 2 path of an artifact
    Artifact {
        #[arg(long)]
        group: String,
        #[arg(long)]
        artifact: String,
        #[arg(long)]
        version: String,
        #[arg(long)]
        classifier: Option<String>,
        #[arg(long, default_value = "jar")]
        extension: String,
    },
    /// Print the layout 2 path of a POM
    Pom {
        #[arg(long)]
        group: String,
        #[arg(long)]
        artifact: String,
        #[arg(long)]
        version: String,
    },
    /// Print the layout 2 path of a maven-metadata.xml or one of its checksums / signatures
    Metadata {
        #[arg(long)]
        group: String,
        #[arg(long)]
        artifact: Option<String>,
        #[arg(long)]
        subordinate_type: Option<String>,
    },
    /// Print the checksum / signature type of paths
    Classify {
        paths: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    match cli.command {
        Command::Parse { layout, paths } => {
            for path in paths {
                let line = match layout.parse(&path) {
                    Some(parsed) => json!({
                        "path": path,
                        "layout": layout,
                        "recognized": true,
                        "subordinate": parsed.is_subordinate(),
                        "snapshot": parsed.is_snapshot_version(),
                        "record": parsed,
                    }),
                    None => json!({
                        "path": path,
                        "layout": layout,
                        "recognized": false,
                    }),
                };
                println!("{}", serde_json::to_string(&line).context("serializing parse result")?);
            }
        }
        Command::Artifact { group, artifact, version, classifier, extension } => {
            println!("{}", artifact_path(&group, &artifact, &version, classifier.as_deref(), &extension));
        }
        Command::Pom { group, artifact, version } => {
            println!("{}", pom_path(&group, &artifact, &version));
        }
        Command::Metadata { group, artifact, subordinate_type } => {
            println!("{}", metadata_path(&group, artifact.as_deref(), subordinate_type.as_deref()));
        }
        Command::Classify { paths } => {
            for path in paths {
                let line = if let Some(checksum) = checksum_type_of_path(&path) {
                    json!({ "path": path, "checksum": checksum.algorithm(), "content_type": checksum.content_type() })
                }
                else if let Some(signature) = signature_type_of_path(&path) {
                    json!({ "path": path, "signature": signature.algorithm(), "content_type": signature.content_type() })
                }
                else {
                    json!({ "path": path })
                };
                println!("{}", serde_json::to_string(&line).context("serializing classification")?);
            }
        }
    }

    Ok(())
}
