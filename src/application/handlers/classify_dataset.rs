//! ClassifyDatasetHandler - Command handler for classifying a product dataset.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::analysis::RunReport;
use crate::domain::criteria::{CriterionVector, ModelError, UnknownKeys};
use crate::domain::foundation::{DomainError, ErrorCode, Threshold};
use crate::domain::model::ClassificationModel;
use crate::domain::outranking::{Alternative, BatchRunner};
use crate::ports::{
    AlternativeSource, ModelSource, ModelSourceError, RawAlternative, ReportSink, SourceError,
};

/// Command to classify the configured dataset.
#[derive(Debug, Clone, Default)]
pub struct ClassifyDatasetCommand {
    /// Replaces the model's thresholds when set.
    pub thresholds: Option<Vec<f64>>,
}

impl ClassifyDatasetCommand {
    pub fn with_thresholds(thresholds: Vec<f64>) -> Self {
        Self {
            thresholds: Some(thresholds),
        }
    }
}

/// Handler for classification runs.
pub struct ClassifyDatasetHandler {
    model_source: Arc<dyn ModelSource>,
    alternative_source: Arc<dyn AlternativeSource>,
    report_sink: Arc<dyn ReportSink>,
}

impl ClassifyDatasetHandler {
    pub fn new(
        model_source: Arc<dyn ModelSource>,
        alternative_source: Arc<dyn AlternativeSource>,
        report_sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            model_source,
            alternative_source,
            report_sink,
        }
    }

    pub async fn handle(&self, cmd: ClassifyDatasetCommand) -> Result<RunReport, DomainError> {
        // 1. Load and validate the model
        let model = self.load_model(cmd.thresholds).await?;

        // 2. Ingest the dataset
        let raw = self
            .alternative_source
            .load_alternatives()
            .await
            .map_err(source_error)?;
        let alternatives = ingest(raw)?;
        info!(alternatives = alternatives.len(), "Dataset ingested");

        // 3. Classify and summarize
        let runs = BatchRunner::run_grouped(&model, &alternatives);
        let report = RunReport::build(&model, runs);

        for summary in &report.thresholds {
            match &summary.agreement {
                Some(agreement) => info!(
                    threshold = summary.threshold.value(),
                    compared = agreement.compared,
                    pessimistic_rate = agreement.pessimistic.agreement_rate,
                    optimistic_rate = agreement.optimistic.agreement_rate,
                    "Threshold classified"
                ),
                None => info!(
                    threshold = summary.threshold.value(),
                    "Threshold classified, no reference grades to compare"
                ),
            }
        }

        // 4. Export
        self.report_sink.write_report(&report).await.map_err(|e| {
            DomainError::new(ErrorCode::ExportFailed, e.to_string())
                .with_detail("run_id", report.run_id.to_string())
        })?;

        info!(run_id = %report.run_id, "Run report written");
        Ok(report)
    }

    async fn load_model(&self, thresholds: Option<Vec<f64>>) -> Result<ClassificationModel, DomainError> {
        let definition = self.model_source.load_model().await.map_err(model_source_error)?;
        let mut model = definition.into_model().map_err(model_error)?;

        if let Some(values) = thresholds {
            let thresholds = values
                .into_iter()
                .map(Threshold::try_new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| DomainError::from(e).with_detail("field", "thresholds"))?;
            model = model
                .with_thresholds(thresholds)
                .map_err(threshold_override_error)?;
        }

        let total_weight = model.criteria().total_weight();
        if !model.criteria().is_normalized() {
            warn!(
                total_weight,
                "Criteria weights do not sum to 1; thresholds apply to the raw total"
            );
        }

        for violation in model.ordering_violations() {
            warn!(
                lower_profile = violation.lower,
                criterion = %violation.criterion,
                lower_value = violation.lower_value,
                upper_value = violation.upper_value,
                "Profile is better than the next profile up"
            );
        }

        debug!(
            total_weight,
            thresholds = ?model.thresholds().iter().map(|t| t.value()).collect::<Vec<_>>(),
            "Model loaded"
        );
        Ok(model)
    }
}

/// Turns raw rows into alternatives. Missing criteria become 0, unknown
/// columns are dropped.
fn ingest(rows: Vec<RawAlternative>) -> Result<Vec<Alternative>, DomainError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let values = CriterionVector::from_entries(
                row.values.iter().map(|(k, v)| (k.as_str(), *v)),
                UnknownKeys::Ignore,
            )
            .map_err(|e| {
                DomainError::new(ErrorCode::IngestionFailed, e.to_string())
                    .with_detail("row", index.to_string())
            })?;
            Ok(Alternative::new(
                index,
                row.name,
                row.reference_label.as_deref(),
                values,
            ))
        })
        .collect()
}

fn model_error(err: ModelError) -> DomainError {
    DomainError::new(ErrorCode::InvalidModel, err.to_string())
}

fn threshold_override_error(err: ModelError) -> DomainError {
    let code = match err {
        ModelError::ThresholdAboveTotalWeight { .. } => ErrorCode::OutOfRange,
        ModelError::DuplicateThreshold(_) => ErrorCode::InvalidFormat,
        _ => return model_error(err),
    };
    DomainError::new(code, err.to_string()).with_detail("field", "thresholds")
}

fn model_source_error(err: ModelSourceError) -> DomainError {
    let code = match err {
        ModelSourceError::NotFound(_) | ModelSourceError::IoError(_) => ErrorCode::ModelUnavailable,
        ModelSourceError::UnsupportedFormat(_) | ModelSourceError::Parse(_) => ErrorCode::InvalidModel,
    };
    DomainError::new(code, err.to_string())
}

fn source_error(err: SourceError) -> DomainError {
    let error = DomainError::new(ErrorCode::IngestionFailed, err.to_string());
    match err {
        SourceError::NonNumeric { row, field } => error
            .with_detail("row", row.to_string())
            .with_detail("field", field),
        _ => error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAlternativeSource, InMemoryModelSource, InMemoryReportSink};
    use crate::domain::foundation::QualityClass;
    use crate::domain::model::nutrition_definition;
    use crate::ports::SinkError;
    use async_trait::async_trait;

    struct FailingSink;

    #[async_trait]
    impl ReportSink for FailingSink {
        async fn write_report(&self, _report: &RunReport) -> Result<(), SinkError> {
            Err(SinkError::IoError("disk full".to_string()))
        }
    }

    fn rows() -> Vec<RawAlternative> {
        vec![
            RawAlternative::new("Hazelnut spread")
                .with_label("e")
                .with_value("energy-kcal_100g", 540.0)
                .with_value("sugars_100g", 56.0)
                .with_value("fat_100g", 31.0)
                .with_value("sodium_100g", 0.04)
                .with_value("fruits_vegetables_nuts_100g", 13.0)
                .with_value("fiber_100g", 3.5)
                .with_value("proteins_100g", 6.0)
                .with_value("additives_n", 2.0),
            RawAlternative::default().with_value("serving_size", 15.0),
        ]
    }

    fn handler(sink: Arc<dyn ReportSink>) -> ClassifyDatasetHandler {
        ClassifyDatasetHandler::new(
            Arc::new(InMemoryModelSource::new(nutrition_definition())),
            Arc::new(InMemoryAlternativeSource::new(rows())),
            sink,
        )
    }

    #[tokio::test]
    async fn classifies_and_writes_report() {
        let sink = Arc::new(InMemoryReportSink::new());
        let report = handler(sink.clone())
            .handle(ClassifyDatasetCommand::default())
            .await
            .unwrap();

        assert_eq!(report.thresholds.len(), 2);
        assert_eq!(report.alternative_count, 2);
        assert_eq!(report.graded_count, 1);
        assert_eq!(sink.count().await, 1);

        let at_06 = report.for_threshold(0.6).unwrap();
        assert_eq!(at_06.results[0].pessimistic, QualityClass::C);
        assert_eq!(at_06.results[0].optimistic, QualityClass::C);
        assert_eq!(at_06.results[1].name, "product_1");
    }

    #[tokio::test]
    async fn command_thresholds_override_model() {
        let sink = Arc::new(InMemoryReportSink::new());
        let report = handler(sink)
            .handle(ClassifyDatasetCommand::with_thresholds(vec![1.0]))
            .await
            .unwrap();

        assert_eq!(report.thresholds.len(), 1);
        let results = &report.thresholds[0].results;
        assert_eq!(results[0].pessimistic, QualityClass::E);
        assert_eq!(results[0].optimistic, QualityClass::A);
    }

    #[tokio::test]
    async fn out_of_range_override_is_rejected() {
        let sink = Arc::new(InMemoryReportSink::new());
        let err = handler(sink.clone())
            .handle(ClassifyDatasetCommand::with_thresholds(vec![0.6, 1.5]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.details.get("field"), Some(&"thresholds".to_string()));
        assert_eq!(sink.count().await, 0);
    }

    #[tokio::test]
    async fn repeated_override_threshold_is_rejected() {
        let err = handler(Arc::new(InMemoryReportSink::new()))
            .handle(ClassifyDatasetCommand::with_thresholds(vec![0.7, 0.7]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.get("field"), Some(&"thresholds".to_string()));
    }

    #[tokio::test]
    async fn percent_weights_with_percent_thresholds_match_unit_weights() {
        let mut percent = nutrition_definition();
        for criterion in &mut percent.criteria {
            criterion.weight = (criterion.weight * 100.0).round();
        }
        percent.thresholds = vec![60.0, 70.0];
        let percent_handler = ClassifyDatasetHandler::new(
            Arc::new(InMemoryModelSource::new(percent)),
            Arc::new(InMemoryAlternativeSource::new(rows())),
            Arc::new(InMemoryReportSink::new()),
        );

        let unit = handler(Arc::new(InMemoryReportSink::new()))
            .handle(ClassifyDatasetCommand::default())
            .await
            .unwrap();
        let scaled = percent_handler
            .handle(ClassifyDatasetCommand::default())
            .await
            .unwrap();

        for (unit_run, scaled_run) in unit.thresholds.iter().zip(&scaled.thresholds) {
            let classes = |run: &crate::domain::analysis::ThresholdReport| {
                run.results
                    .iter()
                    .map(|r| (r.pessimistic, r.optimistic))
                    .collect::<Vec<_>>()
            };
            assert_eq!(classes(unit_run), classes(scaled_run));
        }
        assert_eq!(scaled.for_threshold(70.0).unwrap().results[0].pessimistic, QualityClass::D);
    }

    #[tokio::test]
    async fn empty_override_is_invalid_model() {
        let err = handler(Arc::new(InMemoryReportSink::new()))
            .handle(ClassifyDatasetCommand::with_thresholds(Vec::new()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidModel);
    }

    #[tokio::test]
    async fn invalid_model_fails_before_ingestion() {
        let mut definition = nutrition_definition();
        definition.profiles.pop();

        let handler = ClassifyDatasetHandler::new(
            Arc::new(InMemoryModelSource::new(definition)),
            Arc::new(InMemoryAlternativeSource::failing(SourceError::IoError(
                "should not be read".to_string(),
            ))),
            Arc::new(InMemoryReportSink::new()),
        );

        let err = handler.handle(ClassifyDatasetCommand::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidModel);
    }

    #[tokio::test]
    async fn non_numeric_row_maps_to_ingestion_failure() {
        let handler = ClassifyDatasetHandler::new(
            Arc::new(InMemoryModelSource::new(nutrition_definition())),
            Arc::new(InMemoryAlternativeSource::failing(SourceError::NonNumeric {
                row: 4,
                field: "fat_100g".to_string(),
            })),
            Arc::new(InMemoryReportSink::new()),
        );

        let err = handler.handle(ClassifyDatasetCommand::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::IngestionFailed);
        assert_eq!(err.details.get("row"), Some(&"4".to_string()));
        assert_eq!(err.details.get("field"), Some(&"fat_100g".to_string()));
    }

    #[tokio::test]
    async fn non_finite_value_maps_to_ingestion_failure() {
        let handler = ClassifyDatasetHandler::new(
            Arc::new(InMemoryModelSource::new(nutrition_definition())),
            Arc::new(InMemoryAlternativeSource::new(vec![
                RawAlternative::new("bad").with_value("fat_100g", f64::NAN)
            ])),
            Arc::new(InMemoryReportSink::new()),
        );

        let err = handler.handle(ClassifyDatasetCommand::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::IngestionFailed);
        assert_eq!(err.details.get("row"), Some(&"0".to_string()));
    }

    #[tokio::test]
    async fn sink_failure_maps_to_export_failed() {
        let err = handler(Arc::new(FailingSink))
            .handle(ClassifyDatasetCommand::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ExportFailed);
        assert!(err.details.contains_key("run_id"));
    }

    #[tokio::test]
    async fn empty_dataset_produces_empty_runs() {
        let handler = ClassifyDatasetHandler::new(
            Arc::new(InMemoryModelSource::new(nutrition_definition())),
            Arc::new(InMemoryAlternativeSource::new(Vec::new())),
            Arc::new(InMemoryReportSink::new()),
        );

        let report = handler.handle(ClassifyDatasetCommand::default()).await.unwrap();
        assert_eq!(report.alternative_count, 0);
        assert!(report.thresholds.iter().all(|t| t.results.is_empty()));
        assert!(report.thresholds.iter().all(|t| t.agreement.is_none()));
    }
}
