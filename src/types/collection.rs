//! An ordered collection of filesystem locations.

use super::RawContainer;
use crate::Factorized;
use crate::control::Either;
use crate::effect::{Task, TaskError};
use crate::typeclass::{Foldable, Group, Monoid, Semigroup, TypeConstructor};

/// A list of [`File`](super::File)s, [`Directory`](super::Directory)s or any
/// other location, kept in insertion order.
///
/// `concat` appends, `invert` reverses, and [`traverse`](Self::traverse)
/// runs one task per entry, in order, collecting the results.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::{Group, Semigroup};
/// use functional_io::types::{File, FileSystemCollection};
///
/// let collection = FileSystemCollection::new(vec![File::from_path("hoge")])
///     .concat(FileSystemCollection::new(vec![File::from_path("piyo")]));
///
/// let paths: Vec<&str> = collection.iter().map(File::path).collect();
/// assert_eq!(paths, ["hoge", "piyo"]);
/// assert_eq!(collection.invert().entries()[0].path(), "piyo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSystemCollection<L> {
    entries: Vec<L>,
}

impl<L> FileSystemCollection<L> {
    /// Creates a collection from `entries`.
    pub const fn new(entries: Vec<L>) -> Self {
        Self { entries }
    }

    /// The entries, in order.
    pub fn entries(&self) -> &[L] {
        &self.entries
    }

    /// Takes the entries out.
    pub fn into_entries(self) -> Vec<L> {
        self.entries
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies `function` to every entry.
    pub fn map<B, F>(self, function: F) -> FileSystemCollection<B>
    where
        F: FnMut(L) -> B,
    {
        FileSystemCollection::new(self.entries.into_iter().map(function).collect())
    }

    /// Replaces every entry with the entries of the collection `function`
    /// returns for it.
    pub fn chain<B, F>(self, mut function: F) -> FileSystemCollection<B>
    where
        F: FnMut(L) -> FileSystemCollection<B>,
    {
        FileSystemCollection::new(
            self.entries
                .into_iter()
                .flat_map(|entry| function(entry).entries)
                .collect(),
        )
    }

    /// Applies a function to the whole list of entries.
    #[must_use]
    pub fn ap<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<L>) -> Vec<L>,
    {
        Self::new(function(self.entries))
    }

    /// Keeps the entries matching `predicate`.
    #[must_use]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&L) -> bool,
    {
        Self::new(
            self.entries
                .into_iter()
                .filter(|entry| predicate(entry))
                .collect(),
        )
    }

    /// Folds the entries from the left, starting at `initial`.
    pub fn reduce<B, F>(self, function: F, initial: B) -> B
    where
        F: FnMut(B, L) -> B,
    {
        self.entries.into_iter().fold(initial, function)
    }

    /// Concatenates every entry into one, starting from the identity.
    ///
    /// For files this yields a single [`File`](super::File) with empty
    /// path and rid 0 whose bytes are every entry's bytes in order.
    pub fn concat_entries(self) -> L
    where
        L: Monoid,
    {
        L::concat_all(self.entries)
    }

    /// Copies every entry's bytes, in order, into one vector.
    pub fn to_raw(&self) -> Vec<u8>
    where
        L: RawContainer,
    {
        self.entries
            .iter()
            .flat_map(|entry| entry.raw().iter().copied())
            .collect()
    }

    /// Runs `function` on each entry, one after another, and collects the
    /// results.
    ///
    /// The first failure settles the whole task; later entries are not run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    /// use functional_io::effect::Task;
    /// use functional_io::types::{Directory, FileSystemCollection};
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let directories = FileSystemCollection::new(vec![
    ///     Directory::from_path("/a"),
    ///     Directory::from_path("/b"),
    /// ]);
    /// let lengths = directories.traverse(|directory| Task::of(directory.path().len()));
    /// assert_eq!(
    ///     lengths.run().await,
    ///     Either::Right(FileSystemCollection::new(vec![2, 2]))
    /// );
    /// # });
    /// ```
    pub fn traverse<B, F>(self, function: F) -> Task<FileSystemCollection<B>>
    where
        B: Clone + Send + Sync + 'static,
        F: FnMut(L) -> Task<B>,
    {
        let tasks: Vec<Task<B>> = self.entries.into_iter().map(function).collect();
        Task::new(move || async move {
            let mut entries = Vec::with_capacity(tasks.len());
            for task in tasks {
                match task.run().await {
                    Either::Right(entry) => entries.push(entry),
                    Either::Left(error) => return Either::<TaskError, _>::Left(error),
                }
            }
            Either::Right(FileSystemCollection::new(entries))
        })
        .named("traverse")
    }
}

impl<B> FileSystemCollection<Task<B>>
where
    B: Clone + Send + Sync + 'static,
{
    /// Turns a collection of tasks into a task of a collection.
    pub fn sequence(self) -> Task<FileSystemCollection<B>> {
        self.traverse(|task| task)
    }
}

impl<L> Default for FileSystemCollection<L> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<L> From<Vec<L>> for FileSystemCollection<L> {
    fn from(entries: Vec<L>) -> Self {
        Self::new(entries)
    }
}

impl<L> FromIterator<L> for FileSystemCollection<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iterator: I) -> Self {
        Self::new(iterator.into_iter().collect())
    }
}

impl<L> IntoIterator for FileSystemCollection<L> {
    type Item = L;
    type IntoIter = std::vec::IntoIter<L>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, L> IntoIterator for &'a FileSystemCollection<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Type classes
// =============================================================================

impl<L> TypeConstructor for FileSystemCollection<L> {
    type Inner = L;
    type WithType<B> = FileSystemCollection<B>;
}

impl<L> Foldable for FileSystemCollection<L> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, L) -> B,
    {
        self.entries.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(L, B) -> B,
    {
        self.entries
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn length(&self) -> usize {
        self.entries.len()
    }
}

impl<L> Semigroup for FileSystemCollection<L> {
    fn concat(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl<L> Monoid for FileSystemCollection<L> {
    fn empty() -> Self {
        Self::default()
    }
}

impl<L> Group for FileSystemCollection<L> {
    fn invert(mut self) -> Self {
        self.entries.reverse();
        self
    }
}
