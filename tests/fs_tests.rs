//! Filesystem collaborators against a scratch directory.

use functional_io::control::Either;
use functional_io::effect::{Task, TaskError};
use functional_io::fs::{self, ResourceTable};
use functional_io::typeclass::Semigroup;
use functional_io::types::{Buffer, Directory, File, FileSystemCollection, RawContainer, Resource};
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Scratch {
    directory: TempDir,
}

impl Scratch {
    fn path(&self, name: &str) -> String {
        self.directory.path().join(name).display().to_string()
    }
}

#[fixture]
fn scratch() -> Scratch {
    Scratch {
        directory: tempfile::tempdir().unwrap(),
    }
}

// =============================================================================
// Whole files
// =============================================================================

#[rstest]
#[tokio::test]
async fn write_then_read_round_trip(scratch: Scratch) {
    let path = scratch.path("hoge.txt");
    let task = fs::write_file(File::new(path.clone(), b"Hello".to_vec(), 0))
        .chain(|file| fs::read_file(File::from_path(file.path())));

    let file = task.run_result().await.unwrap();
    assert_eq!(file.path(), path);
    assert_eq!(file.raw(), b"Hello");
}

#[rstest]
#[tokio::test]
async fn read_file_of_missing_path_is_not_found(scratch: Scratch) {
    let outcome = fs::read_file(File::from_path(scratch.path("missing.txt"))).run().await;
    assert!(outcome.left().is_some_and(|error| error.is_not_found()));
}

#[rstest]
#[tokio::test]
async fn collection_reads_every_file_in_order(scratch: Scratch) {
    for (name, raw) in [("a.txt", b"ABCDE"), ("b.txt", b"FGHIJ"), ("c.txt", b"KLMNO")] {
        fs::write_file(File::new(scratch.path(name), raw.to_vec(), 0))
            .run_result()
            .await
            .unwrap();
    }

    let collection: FileSystemCollection<File> = ["a.txt", "b.txt", "c.txt"]
        .into_iter()
        .map(|name| File::from_path(scratch.path(name)))
        .collect();
    let read = collection.traverse(fs::read_file).run_result().await.unwrap();

    assert_eq!(read.to_raw(), b"ABCDEFGHIJKLMNO");
    assert_eq!(read.concat_entries().raw(), b"ABCDEFGHIJKLMNO");
}

#[rstest]
#[tokio::test]
async fn collection_traverse_fails_on_missing_entry(scratch: Scratch) {
    let collection = FileSystemCollection::new(vec![
        File::from_path(scratch.path("missing.txt")),
        File::from_path(scratch.path("also-missing.txt")),
    ]);
    let outcome = collection.traverse(fs::read_file).run().await;
    assert!(outcome.left().is_some_and(|error| error.is_not_found()));
}

#[rstest]
#[tokio::test]
async fn copy_file_keeps_destination_metadata(scratch: Scratch) {
    let source = File::new(scratch.path("a.txt"), b"copied".to_vec(), 0);
    fs::write_file(source.clone()).run_result().await.unwrap();

    let destination = File::new(scratch.path("b.txt"), Vec::new(), 7);
    let copied = fs::copy_file(source, destination).run_result().await.unwrap();
    assert_eq!(copied, File::new(scratch.path("b.txt"), b"copied".to_vec(), 7));
    assert_eq!(tokio::fs::read(scratch.path("b.txt")).await.unwrap(), b"copied");
}

#[cfg(unix)]
#[rstest]
#[tokio::test]
async fn chmod_sets_permission_bits(scratch: Scratch) {
    use std::os::unix::fs::PermissionsExt;

    let file = File::new(scratch.path("mode.txt"), b"x".to_vec(), 0);
    fs::write_file(file.clone())
        .chain(|file| fs::chmod(0o600, file))
        .run_result()
        .await
        .unwrap();

    let metadata = tokio::fs::metadata(scratch.path("mode.txt")).await.unwrap();
    assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
}

// =============================================================================
// Handles
// =============================================================================

#[rstest]
#[tokio::test]
async fn handles_write_and_read_back(scratch: Scratch) {
    let table = ResourceTable::new();
    let path = scratch.path("handle.bin");

    let created = fs::create(&table, File::from_path(path.clone())).run_result().await.unwrap();
    fs::write(&table, created.clone().with_raw(b"ABCDE".to_vec()))
        .run_result()
        .await
        .unwrap();
    let written = fs::write_all(&table, Buffer::new(b"FGHIJ".to_vec()), created)
        .run_result()
        .await
        .unwrap();
    fs::close(&table, written).run_result().await.unwrap();
    assert!(table.is_empty());

    let mut options = tokio::fs::OpenOptions::new();
    options.read(true);
    let opened = fs::open(&table, options, File::from_path(path)).run_result().await.unwrap();
    let read = fs::read_all(&table, opened).run_result().await.unwrap();
    assert_eq!(read.raw(), b"ABCDEFGHIJ");
}

#[rstest]
#[tokio::test]
async fn resources_share_the_table(scratch: Scratch) {
    let table = ResourceTable::new();
    let file = fs::create(&table, File::from_path(scratch.path("r.bin")))
        .run_result()
        .await
        .unwrap();

    let resource = Resource::new(b"xyz".to_vec(), file.rid());
    let written = fs::write(&table, resource.clone()).run_result().await.unwrap();
    assert_eq!(written, resource);

    fs::close(&table, resource.clone()).run_result().await.unwrap();
    let outcome = fs::write(&table, resource).run().await;
    assert_eq!(outcome, Either::Left(TaskError::BadResource { rid: file.rid() }));
}

// =============================================================================
// Locations
// =============================================================================

#[rstest]
#[tokio::test]
async fn directory_lifecycle(scratch: Scratch) {
    let nested = Directory::from_path(scratch.path("a/b/c"));

    let flat = fs::mkdir(false, nested.clone()).run().await;
    assert!(flat.is_left());

    let created = fs::ensure_dir(nested.clone()).chain(fs::exists).run_result().await.unwrap();
    assert_eq!(created, nested);

    fs::write_file(File::new(scratch.path("a/b/c/file.txt"), b"x".to_vec(), 0))
        .run_result()
        .await
        .unwrap();
    fs::empty_dir(Directory::from_path(scratch.path("a")))
        .run_result()
        .await
        .unwrap();
    let gone = fs::exists(nested).run().await;
    assert!(gone.left().is_some_and(|error| error.is_not_found()));
}

#[rstest]
#[tokio::test]
async fn remove_needs_recursive_for_non_empty_directories(scratch: Scratch) {
    let directory = Directory::from_path(scratch.path("full"));
    fs::ensure_dir(directory.clone()).run_result().await.unwrap();
    fs::write_file(File::new(scratch.path("full/x"), b"x".to_vec(), 0))
        .run_result()
        .await
        .unwrap();

    assert!(fs::remove(false, directory.clone()).run().await.is_left());
    assert_eq!(fs::remove(true, directory.clone()).run_result().await, Ok(directory));
}

#[rstest]
#[tokio::test]
async fn rename_moves_location_and_path(scratch: Scratch) {
    let original = File::new(scratch.path("old.txt"), b"content".to_vec(), 0);
    let renamed = fs::write_file(original)
        .chain({
            let destination = scratch.path("new.txt");
            move |file| fs::rename(destination, file)
        })
        .run_result()
        .await
        .unwrap();

    assert_eq!(renamed.path(), scratch.path("new.txt"));
    assert_eq!(renamed.raw(), b"content");
    assert!(fs::exists(File::from_path(scratch.path("old.txt"))).run().await.is_left());
}

#[tokio::test]
async fn cwd_is_a_directory_that_exists() {
    let directory = fs::cwd().chain(fs::exists).run_result().await.unwrap();
    assert!(!directory.path().is_empty());
}

#[tokio::test]
async fn copy_moves_bytes_between_containers() {
    let task: Task<Resource> = fs::copy(&Buffer::new(vec![1, 2, 3]), Resource::new(vec![], 4));
    let combined = task.map(|resource| resource.concat(Resource::new(vec![4], 0)));
    assert_eq!(combined.run_result().await, Ok(Resource::new(vec![1, 2, 3, 4], 4)));
}
