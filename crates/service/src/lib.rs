//! Service layer for the dataset hub: business operations on top of `models`.
//! - Every operation loads by id, checks existence and ownership, mutates, persists.
//! - Missing parents and ownership mismatches surface as `ServiceError` variants.

pub mod errors;
pub mod password;
mod lookup;
#[cfg(test)]
pub mod test_support;

pub mod user_service;
pub mod organization_service;
pub mod dataset;
pub mod dataset_file_service;
pub mod tag_service;
pub mod comment_service;
pub mod like_service;
pub mod bookmark_service;
