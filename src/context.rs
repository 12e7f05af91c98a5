use std::path::PathBuf;

use clap::ArgMatches;

#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub posts_dir: PathBuf,
    pub sanitize_slashes: bool,
    pub json: bool,
}

impl Context {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let posts_dir = matches
            .get_one::<PathBuf>("posts_dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."));
        if !posts_dir.is_dir() {
            anyhow::bail!("posts_dir ({posts_dir:?}) must be an existing directory.");
        }

        Ok(Self {
            posts_dir,
            sanitize_slashes: !matches.get_flag("keep_slashes"),
            json: matches.get_flag("json"),
        })
    }
}
