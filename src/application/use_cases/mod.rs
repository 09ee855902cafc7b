pub mod run_ingest;

pub use run_ingest::{IngestReport, IngestStep, RunIngestUseCase, StepError};
