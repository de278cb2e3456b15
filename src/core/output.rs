use crate::core::Descriptor;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Human-readable copy for stdout, indented by four spaces.
pub fn render_pretty(descriptors: &[Descriptor]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    descriptors.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Payload written to disk.
pub fn render_compact(descriptors: &[Descriptor]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(descriptors)?)
}

pub fn banner(output_filename: &str, dry_run: bool) -> String {
    if dry_run {
        format!("========== dry run, {} not written ==========", output_filename)
    } else {
        format!("========== saved to {} ==========", output_filename)
    }
}
