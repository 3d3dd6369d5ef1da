use std::process::ExitCode;
use std::sync::Arc;

use electre_tri::adapters::{
    BuiltinModelSource, FileModelSource, FileReportSink, JsonFileAlternativeSource,
};
use electre_tri::application::{ClassifyDatasetCommand, ClassifyDatasetHandler};
use electre_tri::config::AppConfig;
use electre_tri::domain::outranking::AssignmentRule;
use electre_tri::ports::ModelSource;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    config.logging.init_tracing();
    tracing::info!(service = "electre-tri", "starting");

    let model_source: Arc<dyn ModelSource> = match &config.model.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using model file");
            Arc::new(FileModelSource::new(path))
        }
        None => Arc::new(BuiltinModelSource),
    };
    let alternatives = JsonFileAlternativeSource::new(&config.input.path)
        .with_name_field(config.input.name_field.clone())
        .with_label_field(config.input.label_field.clone());
    let sink = FileReportSink::new(&config.output.path, config.output.format);

    let handler = ClassifyDatasetHandler::new(model_source, Arc::new(alternatives), Arc::new(sink));
    let command = ClassifyDatasetCommand {
        thresholds: config.model.thresholds.clone(),
    };

    match handler.handle(command).await {
        Ok(report) => {
            for summary in &report.thresholds {
                for rule in AssignmentRule::ALL {
                    tracing::info!(
                        threshold = summary.threshold.value(),
                        rule = ?rule,
                        distribution = %serde_json::to_string(summary.distribution.counts(rule))
                            .unwrap_or_default(),
                        "class distribution"
                    );
                }
            }
            tracing::info!(
                run_id = %report.run_id,
                output = %config.output.path.display(),
                "classification completed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = %e.code, details = ?e.details, error = %e, "classification failed");
            ExitCode::FAILURE
        }
    }
}
