use crate::gpu::pure::parse_video_memory;
use crate::gpu::types::GpuError;
use crate::runner::CommandRunner;

use tracing::debug;

/// Current video memory in MB, as reported by `glxinfo -B`
pub fn video_memory_mb(runner: &dyn CommandRunner) -> Result<u32, GpuError> {
    let output = runner.run("glxinfo", &["-B".to_string()])?;
    let mb = parse_video_memory(&output).ok_or(GpuError::NotReported)?;
    debug!("gpu - Video memory {} MB", mb);
    Ok(mb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RecordingRunner;

    #[test]
    fn queries_glxinfo_brief() {
        let runner = RecordingRunner::with_stdout("    Video memory: 4096MB\n");
        assert_eq!(video_memory_mb(&runner).unwrap(), 4096);
        assert_eq!(runner.calls.into_inner(), vec!["glxinfo -B"]);
    }

    #[test]
    fn unparseable_output_is_not_reported() {
        let runner = RecordingRunner::with_stdout("Error: unable to open display\n");
        assert!(matches!(
            video_memory_mb(&runner),
            Err(GpuError::NotReported)
        ));

        let failing = RecordingRunner::new(Some("glxinfo"));
        assert!(matches!(
            video_memory_mb(&failing),
            Err(GpuError::Command(_))
        ));
    }
}
