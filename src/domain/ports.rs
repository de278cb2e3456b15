use crate::domain::model::{BackImageRule, Descriptor, DescriptorSet, DirEntry, LoadReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Filesystem access rooted at the asset folder. Paths are relative to it;
/// `""` is the folder itself.
pub trait Storage: Send + Sync {
    fn list_entries(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Vec<DirEntry>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn root_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn exclude_extensions(&self) -> &[String];
    fn back_image_rule(&self) -> BackImageRule;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Descriptor>>;
    async fn transform(&self, data: Vec<Descriptor>) -> Result<DescriptorSet>;
    async fn load(&self, result: DescriptorSet) -> Result<LoadReport>;
}
