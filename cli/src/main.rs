use crate::cli::{Args, Command};
use anyhow::{Context, bail};
use clap::Parser;
use oxclosure::{ClosureOptions, TraversalMode, closure};
use oxrdf::{Graph, NamedNode, Term};
use oxrdfio::{RdfFormat, RdfParser};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write, stdin, stdout};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Args::parse();
    match matches.command {
        Command::Descendants {
            file,
            format,
            base,
            class,
            mode,
            exclude_start,
            all_terms,
        } => {
            let mode = mode.parse::<TraversalMode>()?;
            let class = NamedNode::new(&class)
                .with_context(|| format!("The class IRI {class} is invalid"))?;
            let format = if let Some(format) = format {
                rdf_format_from_name(&format)?
            } else if let Some(file) = &file {
                rdf_format_from_path(file)?
            } else {
                bail!("The --format option must be set when reading from stdin")
            };
            let graph = if let Some(file) = &file {
                load_graph(
                    File::open(file)
                        .with_context(|| format!("Failed to open {}", file.display()))?,
                    format,
                    base.as_deref(),
                )
            } else {
                load_graph(stdin().lock(), format, base.as_deref())
            }?;
            info!(triples = graph.len(), "class hierarchy loaded");

            let mut options = ClosureOptions::default().with_mode(mode);
            if exclude_start {
                options = options.without_start();
            }
            if all_terms {
                options = options.with_all_terms();
            }
            let Ok(descendants) = closure(&graph, Term::from(class), options);
            let mut descendants = descendants
                .into_iter()
                .map(|term| term.to_string())
                .collect::<Vec<_>>();
            descendants.sort_unstable();

            let mut output = BufWriter::new(stdout().lock());
            for descendant in descendants {
                writeln!(output, "{descendant}")?;
            }
            output.flush()?;
            Ok(())
        }
    }
}

fn load_graph(reader: impl Read, format: RdfFormat, base: Option<&str>) -> anyhow::Result<Graph> {
    let mut parser = RdfParser::from_format(format);
    if let Some(base) = base {
        parser = parser
            .with_base_iri(base)
            .with_context(|| format!("Invalid base IRI {base}"))?;
    }
    let mut graph = Graph::new();
    for quad in parser.for_reader(reader) {
        graph.insert(quad?.as_ref());
    }
    Ok(graph)
}

fn format_from_path<T>(
    path: &Path,
    from_extension: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        from_extension(ext).map_err(|e| {
            e.context(format!(
                "Not able to guess the file format from file name extension '{ext}'"
            ))
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    format_from_path(path, |ext| {
        RdfFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    })
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn guess_formats() -> anyhow::Result<()> {
        assert_eq!(
            rdf_format_from_path(&PathBuf::from("formats.ttl"))?,
            RdfFormat::Turtle
        );
        assert_eq!(rdf_format_from_name("nt")?, RdfFormat::NTriples);
        assert_eq!(rdf_format_from_name("text/turtle")?, RdfFormat::Turtle);
        assert!(rdf_format_from_name("docx").is_err());
        assert!(rdf_format_from_path(&PathBuf::from("formats")).is_err());
        Ok(())
    }
}
