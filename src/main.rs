use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{command, Arg, ArgAction, Command};
use serde::Serialize;

use crate::{clock::SystemClock, context::Context, metadata::PostMetadata};

mod clock;
mod context;
mod error;
mod generator;
mod metadata;

#[derive(Serialize, Debug)]
struct Report<'a> {
    path: &'a Path,
    metadata: &'a PostMetadata,
}

fn cli() -> Command {
    command!().args([
        Arg::new("title").help("Title of the post").required(true),
        Arg::new("category")
            .short('c')
            .long("category")
            .help("Category of the post. May be given multiple times")
            .action(ArgAction::Append),
        Arg::new("tag")
            .short('t')
            .long("tag")
            .help("Tag of the post. May be given multiple times")
            .action(ArgAction::Append),
        Arg::new("posts_dir")
            .short('d')
            .long("posts-dir")
            .help("Directory the post is written to")
            .env("POSTS_DIR")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("."),
        Arg::new("keep_slashes")
            .long("keep-slashes")
            .help("Keep '/' in the file name instead of replacing it with '_'")
            .action(ArgAction::SetTrue),
        Arg::new("json")
            .long("json")
            .help("Print a JSON report instead of a message")
            .action(ArgAction::SetTrue),
    ])
}

fn values(matches: &clap::ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = cli().get_matches();
    let ctx = Context::from_matches(&matches)?;

    let title = matches
        .get_one::<String>("title")
        .context("title is required")?;
    let (path, metadata) = generator::create_post(
        &ctx,
        &SystemClock,
        title,
        values(&matches, "category"),
        values(&matches, "tag"),
    )
    .with_context(|| format!("while creating post {title:?}"))?;

    if ctx.json {
        let report = Report {
            path: &path,
            metadata: &metadata,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("File created: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn repeated_lists_keep_order() {
        let matches = cli()
            .try_get_matches_from(["postgen", "Post", "-t", "b", "--tag", "a", "-c", "x"])
            .unwrap();
        assert_eq!(values(&matches, "tag"), vec!["b", "a"]);
        assert_eq!(values(&matches, "category"), vec!["x"]);
        assert!(!matches.get_flag("keep_slashes"));
    }
}
