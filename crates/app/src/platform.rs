//! Timer and download plumbing backed by `document::eval`, so the same code
//! runs in the browser and in the desktop webview.

use std::rc::Rc;
use std::time::Duration;

use base64::Engine;
use dioxus::prelude::*;
use shared_types::{AppError, ExportedFile, Latency, LatencyFuture, ReportSink};

/// Timer and export sink the pages run their simulated work through.
///
/// `App` provides the browser-backed pair; tests provide immediate ones.
#[derive(Clone)]
pub struct Platform {
    pub latency: Rc<dyn Latency>,
    pub sink: Rc<dyn ReportSink>,
}

impl Platform {
    pub fn new(latency: impl Latency + 'static, sink: impl ReportSink + 'static) -> Self {
        Self {
            latency: Rc::new(latency),
            sink: Rc::new(sink),
        }
    }

    pub fn host() -> Self {
        Self::new(EvalLatency, DownloadSink)
    }
}

impl PartialEq for Platform {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latency, &other.latency) && Rc::ptr_eq(&self.sink, &other.sink)
    }
}

/// Hook to access the platform services.
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Sleeps with `setTimeout` in the host page.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalLatency;

impl Latency for EvalLatency {
    fn wait(&self, duration: Duration) -> LatencyFuture {
        let ms = duration.as_millis();
        Box::pin(async move {
            let script = format!("await new Promise((resolve) => setTimeout(resolve, {ms})); return true;");
            if let Err(e) = document::eval(&script).await {
                tracing::warn!(ms = %ms, error = ?e, "timer eval failed; continuing without delay");
            }
        })
    }
}

/// Hands an exported file to the browser's download manager through a
/// temporary anchor with a base64 data URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadSink;

impl DownloadSink {
    fn script(file: &ExportedFile) -> Result<String, AppError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(file.contents.as_bytes());
        let href = serde_json::to_string(&format!("data:{};base64,{encoded}", file.mime))?;
        let name = serde_json::to_string(&file.filename)?;
        Ok(format!(
            r#"
            (function() {{
                var link = document.createElement('a');
                link.href = {href};
                link.download = {name};
                document.body.appendChild(link);
                link.click();
                document.body.removeChild(link);
            }})();
            "#
        ))
    }
}

impl ReportSink for DownloadSink {
    fn deliver(&self, file: &ExportedFile) -> Result<(), AppError> {
        let script = Self::script(file)?;
        document::eval(&script);
        tracing::debug!(filename = %file.filename, "download triggered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_script_quotes_filename_and_encodes_body() {
        let file = ExportedFile {
            filename: "SAI-Performance-Report-2024-01-15.json".to_string(),
            mime: "application/json",
            contents: "{\"totalAthletes\": 2847}".to_string(),
        };
        let script = DownloadSink::script(&file).unwrap();
        assert!(script.contains("link.download = \"SAI-Performance-Report-2024-01-15.json\";"));
        let encoded = base64::engine::general_purpose::STANDARD.encode(file.contents.as_bytes());
        assert!(script.contains(&format!("data:application/json;base64,{encoded}")));
    }
}
