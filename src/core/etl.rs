use crate::core::batch::chunk_orders;
use crate::core::{Pipeline, RejectedOrder};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub output_files: Vec<String>,
    pub labels_written: usize,
    pub rejected: Vec<RejectedOrder>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Imports once, then transforms and writes each batch in order. The
    /// first I/O or parse error aborts the run; rejected orders do not.
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting ETL process...");
        let batch_size = self.pipeline.max_batch_size()?;

        tracing::info!("Extracting orders...");
        let orders = self.pipeline.extract()?;
        tracing::info!("Extracted {} orders", orders.len());

        let batches = chunk_orders(&orders, batch_size);
        tracing::debug!("Split into {} batches of up to {}", batches.len(), batch_size);

        let mut summary = RunSummary::default();
        for (index, batch) in batches.into_iter().enumerate() {
            let result = self.pipeline.transform(batch);
            tracing::info!(
                "Batch {}: {} labels, {} rejected",
                index,
                result.labels.len(),
                result.rejected.len()
            );

            let output_path = self.pipeline.load(index, &result)?;
            tracing::info!("Output saved to: {}", output_path);

            summary.labels_written += result.labels.len();
            summary.rejected.extend(result.rejected);
            summary.output_files.push(output_path);
        }

        Ok(summary)
    }
}
