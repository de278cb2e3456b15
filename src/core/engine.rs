use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub written: bool,
    pub descriptor_count: usize,
    pub back_image: Option<String>,
}

/// Runs the scan → detect-back → persist phases once, in order.
pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Scanning asset folder...");
        let scanned = self.pipeline.extract().await?;
        tracing::info!("Found {} image(s)", scanned.len());
        self.monitor.log_stats("Scan");

        let set = self.pipeline.transform(scanned).await?;
        match &set.back_image {
            Some(back) => tracing::info!("Back image: {}", back),
            None => tracing::info!("No back image detected"),
        }
        self.monitor.log_stats("Back image detection");

        let descriptor_count = set.descriptors.len();
        let back_image = set.back_image.clone();
        let report = self.pipeline.load(set).await?;
        self.monitor.log_stats("Persist");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            output_path: report.output_path,
            written: report.written,
            descriptor_count,
            back_image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Descriptor, DescriptorSet, LoadReport};
    use crate::utils::error::DescriptorError;
    use async_trait::async_trait;

    struct FixedPipeline {
        fail_load: bool,
    }

    #[async_trait]
    impl Pipeline for FixedPipeline {
        async fn extract(&self) -> Result<Vec<Descriptor>> {
            Ok(vec![
                Descriptor::top_level("a.png"),
                Descriptor::top_level("back.png"),
            ])
        }

        async fn transform(&self, mut data: Vec<Descriptor>) -> Result<DescriptorSet> {
            let back = data.pop().map(|d| d.front_img);
            Ok(DescriptorSet {
                descriptors: data,
                back_image: back,
            })
        }

        async fn load(&self, _result: DescriptorSet) -> Result<LoadReport> {
            if self.fail_load {
                return Err(DescriptorError::WriteError {
                    path: "out/descriptors.json".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            Ok(LoadReport {
                output_path: "out/descriptors.json".to_string(),
                written: true,
            })
        }
    }

    #[tokio::test]
    async fn test_run_reports_summary() {
        let engine = GeneratorEngine::new(FixedPipeline { fail_load: false });

        let summary = engine.run().await.unwrap();

        assert_eq!(summary.output_path, "out/descriptors.json");
        assert!(summary.written);
        assert_eq!(summary.descriptor_count, 1);
        assert_eq!(summary.back_image.as_deref(), Some("back.png"));
    }

    #[tokio::test]
    async fn test_run_propagates_load_failure() {
        let engine = GeneratorEngine::new(FixedPipeline { fail_load: true });

        let result = engine.run().await;

        assert!(matches!(result, Err(DescriptorError::WriteError { .. })));
    }
}
