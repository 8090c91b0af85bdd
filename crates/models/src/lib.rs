pub mod errors;
pub mod db;
pub mod user;
pub mod organization;
pub mod dataset_metadata;
pub mod dataset;
pub mod dataset_file;
pub mod rel_dataset_dataset_file;
pub mod dataset_tag;
pub mod dataset_comment;
pub mod dataset_like;
pub mod dataset_bookmark;

#[cfg(test)]
mod tests;
