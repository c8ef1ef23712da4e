//! Path-only values: [`Directory`] and [`Url`].

use super::PathContainer;
use crate::Factorized;
use crate::typeclass::{Comonad, MonoApplicative, MonoFunctor, MonoMonad};

macro_rules! location {
    ($(#[$meta:meta])* $name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Factorized)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $(#[$meta])*
        pub struct $name {
            path: String,
        }

        impl $name {
            /// Creates a value at `path`.
            pub fn from_path(path: impl Into<String>) -> Self {
                Self { path: path.into() }
            }

            /// The path.
            pub fn path(&self) -> &str {
                &self.path
            }

            /// Takes the path out.
            pub fn into_path(self) -> String {
                self.path
            }
        }

        impl PathContainer for $name {
            fn path(&self) -> &str {
                &self.path
            }

            fn with_path(self, path: String) -> Self {
                Self { path }
            }
        }

        impl MonoFunctor for $name {
            type Element = String;

            fn map<F>(self, function: F) -> Self
            where
                F: FnOnce(String) -> String,
            {
                Self::from_path(function(self.path))
            }
        }

        impl MonoApplicative for $name {
            fn ap<F>(self, function: F) -> Self
            where
                F: FnOnce(String) -> String,
            {
                Self::of(function(self.path))
            }
        }

        impl MonoMonad for $name {
            fn of(element: String) -> Self {
                Self::from_path(element)
            }

            fn chain<F>(self, function: F) -> Self
            where
                F: FnOnce(String) -> Self,
            {
                function(self.path)
            }
        }

        impl Comonad for $name {
            fn extract(&self) -> String {
                self.path.clone()
            }

            fn extend<F>(self, function: F) -> Self
            where
                F: FnOnce(&Self) -> String,
            {
                Self::from_path(function(&self))
            }
        }
    };
}

location! {
    /// A directory on the local filesystem.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::typeclass::MonoFunctor;
    /// use functional_io::types::Directory;
    ///
    /// let directory = Directory::from_path("hoge").map(|path| format!("{path}/piyo"));
    /// assert_eq!(directory.path(), "hoge/piyo");
    /// assert_eq!(directory.to_string(), "Directory(\"hoge/piyo\")");
    /// ```
    Directory
}

location! {
    /// A network location.
    ///
    /// ```rust
    /// use functional_io::types::Url;
    ///
    /// assert_eq!(Url::from_path("https://example.com").to_string(), "URL(\"https://example.com\")");
    /// ```
    #[factorized(name = "URL")]
    Url
}
