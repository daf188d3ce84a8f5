//! Swap file resize

use crate::runner::CommandRunner;
use crate::swap::types::{GIB, SwapError, SwapStatus};

use tracing::{info, warn};

/// Recreate the swap file at `gb` GiB.
///
/// Swap is turned off, the file rewritten with zeroes, restricted to its
/// owner, formatted and turned back on. The first failing step aborts the
/// rest.
pub fn resize_swap(
    runner: &dyn CommandRunner,
    status: &SwapStatus,
    gb: u32,
) -> Result<(), SwapError> {
    let location = status.location.as_ref().ok_or(SwapError::NoSwapFile)?;
    if !status.available_sizes.contains(&gb) {
        return Err(SwapError::InvalidSize {
            requested: gb,
            available: status.available_sizes.clone(),
        });
    }

    let file = location.display().to_string();
    let steps: [(&str, Vec<String>); 5] = [
        ("swapoff", vec!["-a".into()]),
        (
            "dd",
            vec![
                "if=/dev/zero".into(),
                format!("of={file}"),
                "bs=1G".into(),
                format!("count={gb}"),
            ],
        ),
        ("chmod", vec!["600".into(), file.clone()]),
        ("mkswap", vec![file.clone()]),
        ("swapon", vec![file.clone()]),
    ];

    info!("swap - Resizing {} to {} GiB", file, gb);
    for (program, args) in &steps {
        runner.run(program, args)?;
    }
    info!("swap - Swap file resized");

    Ok(())
}

/// Resize to `gb` GiB unless the file already has that size.
///
/// Without a swap file there is nothing to resize; that is logged and
/// reported as `Ok(false)`.
pub fn ensure_swap_size(
    runner: &dyn CommandRunner,
    status: &SwapStatus,
    gb: u32,
) -> Result<bool, SwapError> {
    if status.location.is_none() {
        warn!("swap - No swap file, leaving swap as it is");
        return Ok(false);
    }
    if status.size_bytes == u64::from(gb) * GIB {
        info!("swap - Swap file already {} GiB", gb);
        return Ok(false);
    }
    resize_swap(runner, status, gb)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RecordingRunner;

    use std::path::PathBuf;

    fn status() -> SwapStatus {
        SwapStatus {
            location: Some(PathBuf::from("/home/swapfile")),
            size_bytes: 1 << 30,
            free_bytes: 20 << 30,
            available_sizes: vec![1, 2, 4, 6, 8, 12, 16],
            recommended_size: 16,
        }
    }

    #[test]
    fn runs_every_step_in_order() {
        let runner = RecordingRunner::new(None);
        resize_swap(&runner, &status(), 8).unwrap();

        assert_eq!(
            runner.calls.into_inner(),
            vec![
                "swapoff -a",
                "dd if=/dev/zero of=/home/swapfile bs=1G count=8",
                "chmod 600 /home/swapfile",
                "mkswap /home/swapfile",
                "swapon /home/swapfile",
            ]
        );
    }

    #[test]
    fn stops_at_first_failing_step() {
        let runner = RecordingRunner::new(Some("dd"));
        assert!(matches!(
            resize_swap(&runner, &status(), 8),
            Err(SwapError::Command(_))
        ));
        assert_eq!(runner.calls.borrow().len(), 2);
    }

    #[test]
    fn rejects_sizes_that_do_not_fit() {
        let runner = RecordingRunner::new(None);
        assert!(matches!(
            resize_swap(&runner, &status(), 32),
            Err(SwapError::InvalidSize { requested: 32, .. })
        ));
        assert!(runner.calls.borrow().is_empty());

        let no_file = SwapStatus {
            location: None,
            ..status()
        };
        assert!(matches!(
            resize_swap(&runner, &no_file, 8),
            Err(SwapError::NoSwapFile)
        ));
    }

    #[test]
    fn matching_size_or_missing_file_is_left_alone() {
        let runner = RecordingRunner::new(None);
        assert!(!ensure_swap_size(&runner, &status(), 1).unwrap());

        let no_file = SwapStatus {
            location: None,
            ..status()
        };
        assert!(!ensure_swap_size(&runner, &no_file, 16).unwrap());
        assert!(runner.calls.borrow().is_empty());

        assert!(ensure_swap_size(&runner, &status(), 16).unwrap());
        assert_eq!(runner.calls.borrow().len(), 5);
    }
}
