use std::{
    fs::{self, File},
    io::{self, Read as _, Write as _},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use tempfile::Builder;

use crate::{clock::Clock, context::Context, error::GeneratorError, metadata::PostMetadata};

mod data;
mod utils;

pub(crate) use data::GeneratedDocument;
pub(crate) use utils::derive_path;

use data::FRONT_MATTER_MARKER;
use utils::render_list;

// enough for any front matter block
const HEADER_READ_LIMIT: u64 = 8 * 1024;

pub(crate) fn generate(metadata: &PostMetadata) -> GeneratedDocument {
    let front_matter = format!(
        "{FRONT_MATTER_MARKER}\ntitle: {}\ndate: {}\ncategories: {}\ntags: {}\n{FRONT_MATTER_MARKER}\n",
        metadata.title,
        metadata.date.format("%Y-%m-%d"),
        render_list(&metadata.categories),
        render_list(&metadata.tags),
    );

    GeneratedDocument::new(front_matter)
}

// staged next to the target and renamed over it, so the target is never half written
pub(crate) fn write_document(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let target = resolve_target(path).map_err(|e| GeneratorError::io(path, e))?;
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staged = staging_builder()
        .tempfile_in(dir)
        .map_err(|e| GeneratorError::io(path, e))?;
    debug!("staging {target:?} at {:?}", staged.path());

    staged
        .write_all(content.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| GeneratorError::io(path, e))?;

    // an overwritten post keeps its mode
    if let Ok(existing) = fs::metadata(&target) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| GeneratorError::io(path, e))?;
    }

    staged
        .persist(&target)
        .map_err(|e| GeneratorError::io(path, e.error))?;

    Ok(())
}

// new files get 0666 minus the umask, like a plain create
fn staging_builder() -> Builder<'static, 'static> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

// a symlinked post is written through, not replaced
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let link = fs::read_link(path)?;
                Ok(path.parent().unwrap_or(Path::new("")).join(link))
            }
            resolved => resolved,
        },
        _ => Ok(path.to_path_buf()),
    }
}

fn read_header(path: &Path) -> io::Result<String> {
    let mut buf = Vec::new();
    File::open(path)?
        .take(HEADER_READ_LIMIT)
        .read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub(crate) fn create_post(
    ctx: &Context,
    clock: &impl Clock,
    title: &str,
    categories: Vec<String>,
    tags: Vec<String>,
) -> Result<(PathBuf, PostMetadata), GeneratorError> {
    let metadata = PostMetadata::new(title, clock.today(), categories, tags)?;
    let document = generate(&metadata);

    let file_name = derive_path(&metadata.title, metadata.date, ctx.sanitize_slashes);
    let path = ctx.posts_dir.join(file_name);
    debug!("derived path {path:?} from {:?}", metadata.title);

    if path.exists() {
        match read_header(&path).map(|c| PostMetadata::parse(&c)) {
            Ok(Ok((previous, _))) => info!(
                "{path:?} already holds {:?} ({}). overwriting...",
                previous.title, previous.date
            ),
            Ok(Err(e)) => warn!("{path:?} exists but is not a post ({e}). overwriting..."),
            Err(e) => warn!("{path:?} exists but could not be read ({e}). overwriting..."),
        }
    }
    write_document(&path, &document.to_string())?;
    info!("wrote {path:?}");

    Ok((path, metadata))
}
