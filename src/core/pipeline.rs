use crate::core::back_image::apply_back_image;
use crate::core::output::{banner, render_compact, render_pretty};
use crate::core::scanner::{scan_descriptors, EntryFilter};
use crate::core::{ConfigProvider, Descriptor, DescriptorSet, LoadReport, Pipeline, Storage};
use crate::utils::error::Result;
use std::path::Path;

pub struct DescriptorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    filter: EntryFilter,
}

impl<S: Storage, C: ConfigProvider> DescriptorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let filter = EntryFilter::new(config.exclude_extensions())
            .with_output_file(config.output_filename());
        Self {
            storage,
            config,
            filter,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DescriptorPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Descriptor>> {
        tracing::debug!("Scanning asset folder: {}", self.config.root_path());
        scan_descriptors(&self.storage, &self.filter).await
    }

    async fn transform(&self, data: Vec<Descriptor>) -> Result<DescriptorSet> {
        let rule = self.config.back_image_rule();
        tracing::debug!("Detecting back image with '{}' rule", rule);
        Ok(apply_back_image(data, rule))
    }

    async fn load(&self, result: DescriptorSet) -> Result<LoadReport> {
        let filename = self.config.output_filename();
        let output_path = Path::new(self.config.root_path())
            .join(filename)
            .display()
            .to_string();

        // Render both forms before touching the file so a serialization
        // failure never leaves a truncated manifest behind.
        let pretty = render_pretty(&result.descriptors)?;
        let compact = render_compact(&result.descriptors)?;

        println!("{}", banner(filename, self.config.dry_run()));
        println!("{}", pretty);

        if self.config.dry_run() {
            tracing::info!("Dry run, skipping write of {}", output_path);
            return Ok(LoadReport {
                output_path,
                written: false,
            });
        }

        tracing::debug!("Writing {} bytes to {}", compact.len(), output_path);
        self.storage.write_file(filename, &compact).await?;

        Ok(LoadReport {
            output_path,
            written: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BackImageRule, DirEntry};
    use crate::utils::error::DescriptorError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        dirs: Arc<HashMap<String, Vec<DirEntry>>>,
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new(dirs: Vec<(&str, Vec<DirEntry>)>) -> Self {
            Self {
                dirs: Arc::new(
                    dirs.into_iter()
                        .map(|(path, entries)| (path.to_string(), entries))
                        .collect(),
                ),
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn list_entries(&self, path: &str) -> Result<Vec<DirEntry>> {
            self.dirs.get(path).cloned().ok_or_else(|| DescriptorError::ScanError {
                path: path.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        root_path: String,
        output_filename: String,
        exclude_extensions: Vec<String>,
        back_image_rule: BackImageRule,
        dry_run: bool,
    }

    impl MockConfig {
        fn new(back_image_rule: BackImageRule) -> Self {
            Self {
                root_path: "assets".to_string(),
                output_filename: "descriptors.json".to_string(),
                exclude_extensions: vec!["json".to_string()],
                back_image_rule,
                dry_run: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn root_path(&self) -> &str {
            &self.root_path
        }

        fn output_filename(&self) -> &str {
            &self.output_filename
        }

        fn exclude_extensions(&self) -> &[String] {
            &self.exclude_extensions
        }

        fn back_image_rule(&self) -> BackImageRule {
            self.back_image_rule
        }

        fn dry_run(&self) -> bool {
            self.dry_run
        }
    }

    fn card_tree() -> MockStorage {
        MockStorage::new(vec![
            (
                "",
                vec![
                    DirEntry::dir("red"),
                    DirEntry::file("label.png"),
                    DirEntry::file("descriptors.json"),
                    DirEntry::file(".DS_Store"),
                ],
            ),
            (
                "red",
                vec![
                    DirEntry::file("front.png"),
                    DirEntry::file("back.png"),
                    DirEntry::file(".hidden.png"),
                ],
            ),
        ])
    }

    #[tokio::test]
    async fn test_extract_applies_exclusions() {
        let pipeline = DescriptorPipeline::new(card_tree(), MockConfig::new(BackImageRule::Infix));

        let descriptors = pipeline.extract().await.unwrap();

        let fronts: Vec<_> = descriptors.iter().map(|d| d.front_img.as_str()).collect();
        assert_eq!(fronts, vec!["red/back.png", "red/front.png", "label.png"]);
    }

    #[tokio::test]
    async fn test_extract_skips_own_output_with_custom_exclusions() {
        let mut config = MockConfig::new(BackImageRule::Infix);
        config.exclude_extensions = vec!["txt".to_string()];
        let pipeline = DescriptorPipeline::new(card_tree(), config);

        let descriptors = pipeline.extract().await.unwrap();

        assert!(descriptors.iter().all(|d| d.front_img != "descriptors.json"));
        assert_eq!(descriptors.len(), 3);
    }

    #[tokio::test]
    async fn test_transform_uses_configured_rule() {
        let pipeline = DescriptorPipeline::new(card_tree(), MockConfig::new(BackImageRule::Disabled));

        let descriptors = pipeline.extract().await.unwrap();
        let set = pipeline.transform(descriptors).await.unwrap();

        assert_eq!(set.back_image, None);
        assert_eq!(set.descriptors.len(), 3);
    }

    #[tokio::test]
    async fn test_load_writes_compact_json() {
        let storage = card_tree();
        let pipeline = DescriptorPipeline::new(storage.clone(), MockConfig::new(BackImageRule::Infix));

        let descriptors = pipeline.extract().await.unwrap();
        let set = pipeline.transform(descriptors).await.unwrap();
        let report = pipeline.load(set).await.unwrap();

        assert!(report.written);
        assert_eq!(
            report.output_path,
            Path::new("assets").join("descriptors.json").display().to_string()
        );

        let written = storage.get_file("descriptors.json").await.unwrap();
        assert_eq!(
            String::from_utf8(written).unwrap(),
            r#"[{"frontImg":"red/front.png","groupLabel":"red","backImg":"red/back.png"},{"frontImg":"label.png","backImg":"red/back.png"}]"#
        );
    }

    #[tokio::test]
    async fn test_dry_run_skips_write() {
        let storage = card_tree();
        let mut config = MockConfig::new(BackImageRule::Infix);
        config.dry_run = true;
        let pipeline = DescriptorPipeline::new(storage.clone(), config);

        let descriptors = pipeline.extract().await.unwrap();
        let set = pipeline.transform(descriptors).await.unwrap();
        let report = pipeline.load(set).await.unwrap();

        assert!(!report.written);
        assert!(storage.get_file("descriptors.json").await.is_none());
    }
}
