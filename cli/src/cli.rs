use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "oxclosure")]
/// Oxclosure command line toolkit to explore RDF class hierarchies
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the descendants of a class
    ///
    /// Descendants are found by following rdfs:subClassOf edges from parents to children
    /// and, depending on the mode, owl:equivalentClass links in both directions.
    /// They are printed one per line, sorted, in N-Triples syntax.
    Descendants {
        /// File to load the class hierarchy from
        ///
        /// If no file is given, stdin is used as if it were the input file content.
        /// In this case, the content format must be specified using the --format option.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// The format of the file to load
        ///
        /// It can be an extension like "ttl" or a MIME type like "text/turtle".
        ///
        /// By default, the format is guessed from the loaded file extension.
        #[arg(long, required_unless_present = "file")]
        format: Option<String>,
        /// Base IRI of the file to load
        #[arg(long, value_hint = ValueHint::Url)]
        base: Option<String>,
        /// IRI of the class to list the descendants of
        #[arg(short, long, value_hint = ValueHint::Url)]
        class: String,
        /// How owl:equivalentClass links are handled
        ///
        /// "subclasses" ignores them, "include" follows them and counts equivalent classes as descendants
        /// and "traverse" follows them but only counts equivalent classes when they are expanded.
        #[arg(short, long, default_value = "include")]
        mode: String,
        /// Do not list the class itself
        #[arg(long)]
        exclude_start: bool,
        /// Also list blank nodes and literals found along the way
        #[arg(long)]
        all_terms: bool,
    },
}
