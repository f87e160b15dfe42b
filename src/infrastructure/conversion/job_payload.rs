//! Wire shapes of the FreeConvert `process/jobs` API.

use serde::{Deserialize, Serialize};

use crate::domain::{ConversionJob, ConversionJobStatus};

pub(super) const IMPORT_TASK: &str = "import-1";
pub(super) const CONVERT_TASK: &str = "convert-1";
pub(super) const EXPORT_OPERATION: &str = "export/url";

#[derive(Debug, Serialize)]
pub(super) struct JobRequest<'a> {
    tasks: JobTasks<'a>,
}

#[derive(Debug, Serialize)]
struct JobTasks<'a> {
    #[serde(rename = "import-1")]
    import: ImportTask<'a>,
    #[serde(rename = "convert-1")]
    convert: ConvertTask<'a>,
    #[serde(rename = "export-1")]
    export: ExportTask,
}

#[derive(Debug, Serialize)]
struct ImportTask<'a> {
    operation: &'static str,
    url: &'a str,
    filename: &'static str,
}

#[derive(Debug, Serialize)]
struct ConvertTask<'a> {
    operation: &'static str,
    input: &'static str,
    input_format: &'a str,
    output_format: &'a str,
    options: ConvertOptions,
}

#[derive(Debug, Serialize)]
struct ConvertOptions {
    audio_filter_reverse: bool,
}

#[derive(Debug, Serialize)]
struct ExportTask {
    operation: &'static str,
    input: [&'static str; 1],
    filename: &'static str,
}

impl<'a> JobRequest<'a> {
    /// Import by URL, convert, then export the result as a download URL.
    pub(super) fn import_convert_export(
        media_url: &'a str,
        input_format: &'a str,
        output_format: &'a str,
    ) -> Self {
        Self {
            tasks: JobTasks {
                import: ImportTask {
                    operation: "import/url",
                    url: media_url,
                    filename: "input_video",
                },
                convert: ConvertTask {
                    operation: "convert",
                    input: IMPORT_TASK,
                    input_format,
                    output_format,
                    options: ConvertOptions {
                        audio_filter_reverse: false,
                    },
                },
                export: ExportTask {
                    operation: EXPORT_OPERATION,
                    input: [CONVERT_TASK],
                    filename: "converted_audio",
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct JobCreated {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JobSnapshot {
    status: Option<String>,
    #[serde(default)]
    tasks: Vec<TaskSnapshot>,
}

#[derive(Debug, Deserialize)]
struct TaskSnapshot {
    operation: Option<String>,
    status: Option<String>,
    result: Option<TaskResult>,
}

#[derive(Debug, Deserialize)]
struct TaskResult {
    url: Option<String>,
}

impl JobSnapshot {
    pub(super) fn into_job(self) -> ConversionJob {
        let status = self
            .status
            .as_deref()
            .map(ConversionJobStatus::from)
            .unwrap_or(ConversionJobStatus::Unknown);

        let export_url = self
            .tasks
            .into_iter()
            .filter(|t| t.operation.as_deref() == Some(EXPORT_OPERATION))
            .filter(|t| {
                t.status.as_deref().map(ConversionJobStatus::from)
                    == Some(ConversionJobStatus::Completed)
            })
            .find_map(|t| t.result.and_then(|r| r.url))
            .filter(|url| !url.trim().is_empty());

        ConversionJob::new(status, export_url)
    }
}
