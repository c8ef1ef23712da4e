//! Filesystem collaborators.
//!
//! Every function here describes an operation and returns a [`Task`]; nothing
//! touches the disk until the task runs. The task settles with the domain
//! value rebuilt to reflect the operation: a [`File`] read from disk comes
//! back with its content, a renamed location comes back with its new path.
//!
//! Operations on open handles go through a [`ResourceTable`], which the
//! caller creates and passes in.
//!
//! # Examples
//!
//! ```rust
//! use functional_io::fs;
//! use functional_io::types::File;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # runtime.block_on(async {
//! let directory = tempfile::tempdir().unwrap();
//! let path = directory.path().join("hoge.txt").display().to_string();
//!
//! let task = fs::write_file(File::new(path.clone(), b"Hello".to_vec(), 0))
//!     .chain(|file| fs::read_file(File::from_path(file.path())));
//!
//! let file = task.run_result().await.unwrap();
//! assert_eq!(file.raw(), b"Hello");
//! # });
//! ```

mod table;

use std::io;
use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub use table::ResourceTable;

use crate::control::Either;
use crate::effect::{Task, TaskError};
use crate::types::{Buffer, Directory, File, PathContainer, RawContainer, Resource};

/// A value bound to an entry of a [`ResourceTable`].
pub trait Handle: RawContainer + Clone + Send + Sync + 'static {
    /// The resource id.
    fn rid(&self) -> u32;
}

impl Handle for Resource {
    fn rid(&self) -> u32 {
        Self::rid(self)
    }
}

impl Handle for File {
    fn rid(&self) -> u32 {
        Self::rid(self)
    }
}

/// A value addressed by a filesystem path.
pub trait Location: PathContainer + Clone + Send + Sync + 'static {}

impl<T> Location for T where T: PathContainer + Clone + Send + Sync + 'static {}

// =============================================================================
// Handles
// =============================================================================

/// Opens `file` with `options` and registers the handle.
///
/// Settles with the same path, empty content, and the new rid.
pub fn open(table: &ResourceTable, options: OpenOptions, file: File) -> Task<File> {
    let table = table.clone();
    Task::wrap(move || async move {
        tracing::debug!(path = file.path(), "fs.open");
        let handle = options.open(file.path()).await?;
        let rid = table.insert(handle);
        Ok::<_, io::Error>(File::new(file.path(), Vec::new(), rid))
    })
    .named("open")
}

/// Creates or truncates `file` and registers the handle.
///
/// Settles with zeroed content of the original length and the new rid.
pub fn create(table: &ResourceTable, file: File) -> Task<File> {
    let table = table.clone();
    Task::wrap(move || async move {
        tracing::debug!(path = file.path(), "fs.create");
        let handle = tokio::fs::File::create(file.path()).await?;
        let rid = table.insert(handle);
        Ok::<_, io::Error>(File::new(file.path(), vec![0; file.raw().len()], rid))
    })
    .named("create")
}

/// Closes the handle behind `handle`.
pub fn close<H: Handle>(table: &ResourceTable, handle: H) -> Task<H> {
    let table = table.clone();
    Task::wrap(move || async move {
        tracing::debug!(rid = handle.rid(), "fs.close");
        let shared = table.remove(handle.rid())?;
        shared.lock().await.flush().await?;
        Ok::<_, TaskError>(handle)
    })
    .named("close")
}

/// Reads up to `handle.raw().len()` bytes from the handle.
///
/// Settles with the bytes actually read, which is shorter than requested at
/// end of file.
pub fn read<H: Handle>(table: &ResourceTable, handle: H) -> Task<H> {
    let table = table.clone();
    Task::wrap(move || async move {
        tracing::debug!(rid = handle.rid(), "fs.read");
        let shared = table.get(handle.rid())?;
        let mut raw = vec![0; handle.raw().len()];
        let count = shared.lock().await.read(&mut raw).await?;
        raw.truncate(count);
        Ok::<_, TaskError>(handle.with_raw(raw))
    })
    .named("read")
}

/// Reads the handle to the end.
pub fn read_all<H: Handle>(table: &ResourceTable, handle: H) -> Task<H> {
    let table = table.clone();
    Task::wrap(move || async move {
        tracing::debug!(rid = handle.rid(), "fs.read_all");
        let shared = table.get(handle.rid())?;
        let mut raw = Vec::new();
        shared.lock().await.read_to_end(&mut raw).await?;
        Ok::<_, TaskError>(handle.with_raw(raw))
    })
    .named("read_all")
}

/// Writes the content of `handle` to its handle.
pub fn write<H: Handle>(table: &ResourceTable, handle: H) -> Task<H> {
    let table = table.clone();
    Task::wrap(move || async move {
        tracing::debug!(rid = handle.rid(), bytes = handle.raw().len(), "fs.write");
        let shared = table.get(handle.rid())?;
        shared.lock().await.write_all(handle.raw()).await?;
        Ok::<_, TaskError>(handle)
    })
    .named("write")
}

/// Writes `buffer` to the handle behind `handle`.
///
/// Settles with `handle` carrying the written bytes.
pub fn write_all<H: Handle>(table: &ResourceTable, buffer: Buffer, handle: H) -> Task<H> {
    let table = table.clone();
    Task::wrap(move || async move {
        tracing::debug!(rid = handle.rid(), bytes = buffer.len(), "fs.write_all");
        let shared = table.get(handle.rid())?;
        let mut guard = shared.lock().await;
        guard.write_all(buffer.raw()).await?;
        guard.flush().await?;
        Ok::<_, TaskError>(handle.with_raw(buffer.into_raw()))
    })
    .named("write_all")
}

// =============================================================================
// Whole files
// =============================================================================

/// Reads the whole file at `file.path()`.
pub fn read_file(file: File) -> Task<File> {
    Task::wrap(move || async move {
        tracing::debug!(path = file.path(), "fs.read_file");
        let raw = tokio::fs::read(file.path()).await?;
        Ok::<_, io::Error>(file.with_raw(raw))
    })
    .named("read_file")
}

/// Writes `file.raw()` to `file.path()`, replacing any existing content.
pub fn write_file(file: File) -> Task<File> {
    Task::wrap(move || async move {
        tracing::debug!(path = file.path(), bytes = file.raw().len(), "fs.write_file");
        tokio::fs::write(file.path(), file.raw()).await?;
        Ok::<_, io::Error>(file)
    })
    .named("write_file")
}

/// Copies the file at `source` to `destination`.
///
/// Settles with the destination's path and rid and the source's content.
pub fn copy_file(source: File, destination: File) -> Task<File> {
    Task::wrap(move || async move {
        tracing::debug!(from = source.path(), to = destination.path(), "fs.copy_file");
        tokio::fs::copy(source.path(), destination.path()).await?;
        Ok::<_, io::Error>(File::new(
            destination.path(),
            source.raw().to_vec(),
            destination.rid(),
        ))
    })
    .named("copy_file")
}

/// Moves the bytes of `reader` into `writer` without touching the disk.
pub fn copy<R, W>(reader: &R, writer: W) -> Task<W>
where
    R: RawContainer,
    W: RawContainer + Clone + Send + Sync + 'static,
{
    Task::of(writer.with_raw(reader.raw().to_vec())).named("copy")
}

/// Sets the permission bits of `file`.
#[cfg(unix)]
pub fn chmod(mode: u32, file: File) -> Task<File> {
    use std::os::unix::fs::PermissionsExt;

    Task::wrap(move || async move {
        tracing::debug!(path = file.path(), mode, "fs.chmod");
        tokio::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(mode)).await?;
        Ok::<_, io::Error>(file)
    })
    .named("chmod")
}

// =============================================================================
// Locations
// =============================================================================

/// Checks that `location` exists.
///
/// Settles with `location` unchanged, or with [`TaskError::NotFound`].
pub fn exists<L: Location>(location: L) -> Task<L> {
    Task::wrap(move || async move {
        tracing::debug!(path = location.path(), "fs.exists");
        match tokio::fs::try_exists(location.path()).await {
            Ok(true) => Either::Right(location),
            Ok(false) => Either::Left(TaskError::not_found(location.path())),
            Err(error) => Either::Left(error.into()),
        }
    })
    .named("exists")
}

/// Creates `directory`, and its parents too when `recursive` is set.
pub fn mkdir(recursive: bool, directory: Directory) -> Task<Directory> {
    Task::wrap(move || async move {
        tracing::debug!(path = directory.path(), recursive, "fs.mkdir");
        tokio::fs::DirBuilder::new()
            .recursive(recursive)
            .create(directory.path())
            .await?;
        Ok::<_, io::Error>(directory)
    })
    .named("mkdir")
}

/// Creates `directory` and any missing parents; succeeds if it exists.
pub fn ensure_dir(directory: Directory) -> Task<Directory> {
    Task::wrap(move || async move {
        tracing::debug!(path = directory.path(), "fs.ensure_dir");
        tokio::fs::create_dir_all(directory.path()).await?;
        Ok::<_, io::Error>(directory)
    })
    .named("ensure_dir")
}

/// Removes everything inside `directory`, creating it if missing.
pub fn empty_dir(directory: Directory) -> Task<Directory> {
    Task::wrap(move || async move {
        tracing::debug!(path = directory.path(), "fs.empty_dir");
        let mut entries = match tokio::fs::read_dir(directory.path()).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tokio::fs::create_dir_all(directory.path()).await?;
                return Ok(directory);
            }
            Err(error) => return Err(error),
        };
        while let Some(entry) = entries.next_entry().await? {
            remove_path(entry.path(), true).await?;
        }
        Ok::<_, io::Error>(directory)
    })
    .named("empty_dir")
}

/// Removes `location`; directories with content need `recursive`.
pub fn remove<L: Location>(recursive: bool, location: L) -> Task<L> {
    Task::wrap(move || async move {
        tracing::debug!(path = location.path(), recursive, "fs.remove");
        remove_path(PathBuf::from(location.path()), recursive).await?;
        Ok::<_, io::Error>(location)
    })
    .named("remove")
}

/// Renames `location` to `destination`, replacing an existing file there.
pub fn rename<L: Location>(destination: impl Into<String>, location: L) -> Task<L> {
    let destination = destination.into();
    Task::wrap(move || async move {
        tracing::debug!(from = location.path(), to = %destination, "fs.rename");
        tokio::fs::rename(location.path(), &destination).await?;
        Ok::<_, io::Error>(location.with_path(destination))
    })
    .named("rename")
}

/// Moves `location` to `destination`, failing if `destination` exists.
pub fn move_to<L: Location>(destination: impl Into<String>, location: L) -> Task<L> {
    let destination = destination.into();
    Task::wrap(move || async move {
        tracing::debug!(from = location.path(), to = %destination, "fs.move_to");
        if tokio::fs::try_exists(&destination).await? {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{destination}: already exists"),
            ));
        }
        tokio::fs::rename(location.path(), &destination).await?;
        Ok::<_, io::Error>(location.with_path(destination))
    })
    .named("move_to")
}

/// The current working directory.
pub fn cwd() -> Task<Directory> {
    Task::wrap_sync(|| {
        std::env::current_dir()
            .map(|path| Directory::from_path(path.to_string_lossy().into_owned()))
    })
    .named("cwd")
}

async fn remove_path(path: PathBuf, recursive: bool) -> io::Result<()> {
    let metadata = tokio::fs::symlink_metadata(&path).await?;
    if !metadata.is_dir() {
        tokio::fs::remove_file(&path).await
    } else if recursive {
        tokio::fs::remove_dir_all(&path).await
    } else {
        tokio::fs::remove_dir(&path).await
    }
}
