use anyhow::Context;
use shopify_clickpost_etl::utils::{logger, validation::Validate};
use shopify_clickpost_etl::{
    ClickpostPipeline, EtlEngine, EtlError, LabelConfig, LocalStorage, RunSummary,
};

fn run(config: LabelConfig) -> anyhow::Result<RunSummary> {
    config.validate().context("invalid configuration")?;
    tracing::debug!("Config: {:?}", config);

    let storage = LocalStorage::new(config.base_dir.clone());
    let input_file = config.input_file.clone();
    let engine = EtlEngine::new(ClickpostPipeline::new(storage, config));

    engine
        .run()
        .with_context(|| format!("failed to convert {}", input_file))
}

fn main() {
    logger::init_logger();

    match run(LabelConfig::default()) {
        Ok(summary) => {
            tracing::info!(
                "ETL process completed: {} files, {} labels written, {} orders rejected",
                summary.output_files.len(),
                summary.labels_written,
                summary.rejected.len()
            );
            for path in &summary.output_files {
                println!("{}", path);
            }
        }
        Err(report) => {
            tracing::error!("{:#}", report);
            let exit_code = match report.downcast_ref::<EtlError>() {
                Some(e) => {
                    tracing::error!("Suggestion: {}", e.recovery_suggestion());
                    eprintln!("{}", e.user_friendly_message());
                    e.exit_code()
                }
                None => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
