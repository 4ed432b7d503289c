//! Newtype IDs for type-safe identifiers.
//!
//! Keeps a `ReviewId` from being passed where a `ProductId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_id!(
    /// Catalog key of a product; also the `/product/<id>` path segment.
    ProductId
);
string_id!(
    /// Identifies a review within a product.
    ReviewId
);
string_id!(
    /// One page view, used to correlate its logs and metrics.
    SessionId
);

impl SessionId {
    /// Fresh ID from the clock and a process-wide counter.
    pub fn generate() -> Self {
        Self(unique_suffix())
    }
}

impl ReviewId {
    pub fn generate() -> Self {
        Self(format!("review-{}", unique_suffix()))
    }
}

fn unique_suffix() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static NEXT: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    format!("{:x}-{:04x}", nanos, NEXT.fetch_add(1, Ordering::Relaxed))
}
