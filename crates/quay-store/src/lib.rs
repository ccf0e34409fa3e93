//! Scheme-routed blob storage over heterogeneous backends.
//!
//! One uniform read/write/listing contract — the [`Driver`] trait — served
//! by three backends:
//!
//! - [`FsDriver`] -- local files, with leading-tilde expansion and
//!   shell-style wildcard enumeration
//! - [`HttpDriver`] -- GET/PUT against arbitrary HTTP(S) URLs
//! - [`S3Driver`] -- signed object GET/PUT and paginated bucket listing
//!   against an S3-compatible store
//!
//! The [`Arbiter`] routes scheme-qualified paths (`s3://bucket/key`,
//! `http://host/x`, plain paths default to `fs`) to the matching driver,
//! stripping the scheme first. An [`Endpoint`] scopes one driver to a
//! root path for root-relative reads and writes.
//!
//! Remote drivers share a bounded transport pool (`quay-http`), so total
//! network concurrency is capped and transient failures are retried
//! before an error surfaces here. Request signing for the object store
//! uses the self-contained primitives in `quay-crypto`.

pub mod arbiter;
pub mod endpoint;
pub mod error;
pub mod fs;
pub mod http;
pub mod listing;
pub mod s3;
pub mod traits;

pub use arbiter::{parse_scheme, strip_scheme, Arbiter};
pub use endpoint::Endpoint;
pub use error::{StoreError, StoreResult};
pub use fs::FsDriver;
pub use http::HttpDriver;
pub use s3::{AwsAuth, S3Driver};
pub use traits::Driver;
