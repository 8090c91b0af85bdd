//! Dataset lifecycle: creation with metadata, files and tags; reads; soft delete;
//! organization ownership; publication flags.

pub mod domain;
pub mod metadata;
pub mod service;
pub mod status;

pub use domain::{DatasetDetails, DatasetInput, DatasetUpdate, FileInput, MetadataUpdate};
pub use metadata::{create_dataset_metadata, update_dataset_metadata};
pub use service::{
    add_owner_org, create_dataset, delete_dataset, read_all_datasets, read_dataset, read_datasets_paginated,
    update_dataset,
};
pub use status::{
    approve_dataset, archive_dataset, disapprove_dataset, publish_dataset, unarchive_dataset, unpublish_dataset,
};
