use serde::{Deserialize, Serialize};

use models::dataset_metadata::MetadataFields;
use models::{dataset, dataset_file, dataset_metadata, dataset_tag};

/// A file attached at creation time or later through `create_dataset_file`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileInput {
    pub title: String,
    pub url: String,
}

/// Dataset creation payload. Metadata keys keep their flat wire names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata_file: Option<String>,
    #[serde(default)]
    pub metadata_source_link: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub license_link: Option<String>,
    #[serde(default)]
    pub files: Vec<FileInput>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DatasetInput {
    pub fn metadata_fields(&self) -> MetadataFields {
        MetadataFields {
            file: self.metadata_file.clone(),
            source_link: self.metadata_source_link.clone(),
            resource_type: self.resource_type.clone(),
            license_link: self.license_link.clone(),
        }
    }
}

/// Allow-listed dataset fields. Absent keys keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial metadata update, same flat names as `DatasetInput`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataUpdate {
    #[serde(default)]
    pub metadata_file: Option<String>,
    #[serde(default)]
    pub metadata_source_link: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub license_link: Option<String>,
}

impl From<MetadataUpdate> for MetadataFields {
    fn from(u: MetadataUpdate) -> Self {
        MetadataFields {
            file: u.metadata_file,
            source_link: u.metadata_source_link,
            resource_type: u.resource_type,
            license_link: u.license_link,
        }
    }
}

/// A dataset with everything created alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetDetails {
    pub dataset: dataset::Model,
    pub metadata: dataset_metadata::Model,
    pub files: Vec<dataset_file::Model>,
    pub tags: Vec<dataset_tag::Model>,
}
