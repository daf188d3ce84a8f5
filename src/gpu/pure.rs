/// Dedicated video memory in MB from `glxinfo -B` output.
///
/// Reads the `Video memory: <n>MB` line; a zero value counts as unknown.
pub fn parse_video_memory(glxinfo: &str) -> Option<u32> {
    glxinfo
        .lines()
        .filter_map(|line| line.trim().strip_prefix("Video memory:"))
        .filter_map(|value| {
            let digits: String = value
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        })
        .find(|mb| *mb > 0)
}
