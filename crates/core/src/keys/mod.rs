//! Keys module - canonical parsing of backend enum strings.

mod key_normalizer;


pub use key_normalizer::{
    canonical_key, normalize, normalize_lenient, normalize_unset, DomainKey, NotRecognizedError,
};
